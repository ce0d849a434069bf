//! Monetary values rendered in the current display currency.

use dioxus::prelude::*;

use crate::hooks::use_currency::use_currency;

/// Renders `value` as e.g. `UGX 1,250`.
///
/// The formatting follows the shared currency store, so every `Amount` on
/// screen updates as soon as the currency changes anywhere in the app.
#[component]
pub fn Amount(value: f64, #[props(default)] signed: bool) -> Element {
    let currency = use_currency();
    let text = currency.format(value);
    let class = match (signed, value < 0.0) {
        (true, true) => "amount negative",
        (true, false) => "amount positive",
        _ => "amount",
    };
    rsx! {
        span { class, "{text}" }
    }
}
