#![allow(non_snake_case)]

use dioxus::prelude::*;
use model::currency::Currency;

use crate::hooks::use_currency::use_currency;
use crate::hooks::use_toast::use_toast;

/// Entries whose code or name contains `filter`, ignoring case.
pub fn filter_currencies(filter: &str) -> Vec<Currency> {
    let filter = filter.trim().to_lowercase();
    Currency::all()
        .filter(|c| c.code().to_lowercase().contains(&filter) || c.name().to_lowercase().contains(&filter))
        .collect()
}

/// A compact header control: shows the current code and opens a searchable
/// list of the catalog.
#[component]
pub fn CurrencyChooser(#[props(into, default)] style: String) -> Element {
    let mut currency = use_currency();
    let toast = use_toast();
    let mut is_open = use_signal(|| false);
    let mut filter_text = use_signal(String::new);

    let current = currency.current();
    let tooltip = format!("Display currency: {}", current.name());
    let button_text = format!("{} {} ▾", current.symbol(), current.code());
    let filtered = filter_currencies(&filter_text.read());

    rsx! {
        div {
            style: "position: relative; {style}",
            button {
                r#type: "button",
                class: "outline secondary",
                style: "padding: 0.25rem 0.6rem; font-size: 0.875rem;",
                title: "{tooltip}",
                onclick: move |_| is_open.toggle(),
                "{button_text}"
            }
            if is_open() {
                // Backdrop catches clicks outside the dropdown.
                div {
                    style: "position: fixed; top: 0; left: 0; width: 100vw; height: 100vh; z-index: 9; background: transparent;",
                    onclick: move |_| is_open.set(false),
                }
                div {
                    onclick: |e| e.stop_propagation(),
                    style: "
                        position: absolute;
                        right: 0;
                        min-width: 16rem;
                        z-index: 10;
                        background-color: var(--pico-card-background-color);
                        border: 1px solid var(--pico-card-border-color);
                        border-radius: var(--pico-border-radius);
                        padding: 0.5rem;
                        margin-top: 0.25rem;
                    ",
                    input {
                        r#type: "search",
                        placeholder: "Search currencies...",
                        value: "{filter_text}",
                        oninput: move |evt| filter_text.set(evt.value()),
                        style: "margin-bottom: 0.5rem; width: 100%;",
                        onmounted: move |mounted| {
                            spawn(async move {
                                mounted.data.set_focus(true).await.ok();
                            });
                        },
                    }
                    ul {
                        role: "listbox",
                        style: "list-style: none; margin: 0; padding: 0; max-height: 250px; overflow-y: auto;",
                        if filtered.is_empty() {
                            li { style: "padding: 0.3rem; color: var(--pico-muted-color);", "No matching currency" }
                        }
                        for (entry, code) in filtered.into_iter().map(|c| (c, c.code())) {
                            li {
                                key: "{code}",
                                role: "option",
                                "aria-selected": entry == current,
                                style: "display: flex; align-items: center; cursor: pointer; padding: 0.3rem; white-space: nowrap;",
                                onclick: move |_| {
                                    is_open.set(false);
                                    filter_text.set(String::new());
                                    if entry != currency.current() {
                                        currency.set(entry);
                                        toast.success(
                                            "Currency Updated",
                                            format!("System currency has been updated to {}", entry.name()),
                                        );
                                    }
                                },
                                span {
                                    style: if entry == current { "width: 1.5rem;" } else { "width: 1.5rem; visibility: hidden;" },
                                    "✓"
                                }
                                span { {format!("{} - {}", entry.code(), entry.name())} }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_lists_the_whole_catalog() {
        assert_eq!(filter_currencies("").len(), Currency::all().count());
    }

    #[test]
    fn filter_matches_code_or_name() {
        assert_eq!(filter_currencies("ugx"), vec![Currency::UGX]);
        assert_eq!(filter_currencies("shilling"), vec![Currency::UGX, Currency::KES, Currency::TZS]);
        assert!(filter_currencies("bitcoin").is_empty());
    }
}
