//! Reusable, lifetime-free Dioxus components for the Pico.css framework.
//! The stylesheet itself is linked once by the root `App`.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container. Wraps content in a `<div class="container">`.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { div { class: "container", {children} } }
}

/// A responsive grid; children share the row equally and stack on narrow screens.
#[component]
pub fn Grid(children: Element) -> Element {
    rsx! { div { class: "grid", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content, with an optional header.
#[component]
pub fn Card(#[props(into, default)] title: String, children: Element) -> Element {
    rsx! {
        article {
            if !title.is_empty() {
                header { strong { "{title}" } }
            }
            {children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct AccordionProps {
    #[props(into)]
    title: String,
    children: Element,
}

/// An accordion for showing/hiding content, using the <details> element.
pub fn Accordion(props: AccordionProps) -> Element {
    rsx! {
        details {
            summary { "{props.title}" }
            {props.children}
        }
    }
}

/// A row of tab buttons. The active index lives in the caller's signal.
#[component]
pub fn Tabs(labels: Vec<&'static str>, mut active: Signal<usize>) -> Element {
    rsx! {
        nav {
            class: "tabs",
            role: "tablist",
            for (index, label) in labels.into_iter().enumerate() {
                button {
                    key: "{label}",
                    role: "tab",
                    class: if active() == index { "tab active" } else { "tab outline secondary" },
                    "aria-selected": active() == index,
                    onclick: move |_| active.set(index),
                    "{label}"
                }
            }
        }
    }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Copy, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Contrast,
}

impl ButtonType {
    fn to_class(self) -> &'static str {
        match self {
            ButtonType::Primary => "",
            ButtonType::Secondary => "secondary",
            ButtonType::Contrast => "contrast",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
}

pub fn Button(props: ButtonProps) -> Element {
    let class_str = if props.outline {
        format!("outline {}", props.button_type.to_class())
    } else {
        props.button_type.to_class().to_string()
    };
    rsx! {
        button {
            r#type: "button",
            class: "{class_str}",
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ModalProps {
    is_open: Signal<bool>,
    #[props(into)]
    title: String,
    children: Element,
}

/// A dialog that closes from its header link, the backdrop or the Escape key.
pub fn Modal(mut props: ModalProps) -> Element {
    rsx! {
        if (props.is_open)() {
            dialog {
                open: true,
                onclick: move |_| props.is_open.set(false),
                onkeydown: move |evt| {
                    if evt.key() == Key::Escape {
                        props.is_open.set(false);
                    }
                },
                // Clicks inside the article must not reach the backdrop.
                article {
                    onclick: |evt| evt.stop_propagation(),
                    header {
                        a {
                            href: "#",
                            "aria-label": "Close",
                            rel: "prev",
                            onclick: move |evt| {
                                evt.prevent_default();
                                props.is_open.set(false);
                            }
                        }
                        h3 { style: "margin-bottom: 0;", "{props.title}" }
                    }
                    {props.children}
                }
            }
        }
    }
}
