//! Transient confirmation banner shown in the bottom-right corner.

use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;

#[derive(Clone, Copy, PartialEq, Eq, Debug, strum::EnumIs)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Toast {
    /// Distinguishes a toast from its replacement when a timer fires.
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

#[component]
pub fn ToastView() -> Element {
    let mut slot = use_context::<AppStateMut>().toast;
    let Some(toast) = slot() else {
        return rsx! {};
    };
    let accent = if toast.kind.is_error() {
        "var(--pico-del-color)"
    } else {
        "var(--pico-ins-color)"
    };

    rsx! {
        div {
            class: "toast",
            role: "status",
            "aria-live": "polite",
            style: "border-left: 4px solid {accent};",
            div {
                style: "flex-grow: 1;",
                strong { "{toast.title}" }
                p { style: "margin: 0;", "{toast.message}" }
            }
            a {
                href: "#",
                "aria-label": "Dismiss",
                onclick: move |evt| {
                    evt.prevent_default();
                    slot.set(None);
                },
                "×"
            }
        }
    }
}
