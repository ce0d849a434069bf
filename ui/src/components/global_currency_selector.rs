//! The settings card that owns the system-wide display currency.

use dioxus::prelude::*;
use model::currency::Currency;

use crate::components::amount::Amount;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::hooks::use_currency::use_currency;
use crate::hooks::use_toast::use_toast;

/// Amount used for the live preview line.
const PREVIEW_AMOUNT: f64 = 1_234_567.89;

/// Currency picker with code, symbol and a formatted preview. The reset
/// button is shown unless `show_reset` is turned off.
#[component]
pub fn GlobalCurrencySelector(#[props(default = true)] show_reset: bool) -> Element {
    let mut currency = use_currency();
    let toast = use_toast();
    let current = currency.current();
    let (code, symbol, name) = (current.code(), current.symbol(), current.name());

    rsx! {
        Card {
            title: "System Currency",
            p {
                "Amounts throughout the dashboard are shown in this currency. "
                "Values are not converted between currencies."
            }
            label {
                "Currency"
                select {
                    name: "currency",
                    value: code,
                    onchange: move |evt| {
                        if let Some(changed) = currency.switch_to(&evt.value()) {
                            let name = changed.name();
                            toast.success("Currency Updated", format!("System currency has been updated to {name}"));
                        }
                    },
                    for (entry, entry_code) in Currency::all().map(|c| (c, c.code())) {
                        option {
                            key: "{entry_code}",
                            value: entry_code,
                            selected: entry == current,
                            {entry.option_label()}
                        }
                    }
                }
            }
            dl {
                class: "currency-details",
                dt { "Code" }
                dd { "{code}" }
                dt { "Symbol" }
                dd { "{symbol}" }
                dt { "Name" }
                dd { "{name}" }
                dt { "Preview" }
                dd { Amount { value: PREVIEW_AMOUNT } }
            }
            if show_reset {
                footer {
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        disabled: current == Currency::DEFAULT,
                        on_click: move |_| {
                            currency.reset();
                            let default = Currency::DEFAULT;
                            toast.success(
                                "Currency Reset",
                                format!("System currency has been reset to {} ({})", default.name(), default.code()),
                            );
                        },
                        "Reset to Default"
                    }
                }
            }
        }
    }
}
