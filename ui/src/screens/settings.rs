//! User preferences, the system currency and notification channels.

use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use model::choice::Choice;
use model::forms;
use model::forms::FormValues;
use model::prefs::user_prefs::UserPrefs;

use crate::app_state_mut::AppStateMut;
use crate::components::global_currency_selector::GlobalCurrencySelector;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::components::schema_form::SchemaForm;
use crate::hooks::use_currency::use_currency;
use crate::hooks::use_toast::use_toast;

fn preference_values(prefs: &UserPrefs, currency_code: &str) -> FormValues {
    forms::preferences()
        .defaults()
        .with("language", prefs.language.value())
        .with("timezone", prefs.timezone.value())
        .with("date_format", prefs.date_format.value())
        .with("time_format", prefs.time_format.value())
        .with("theme", prefs.theme.value())
        .with("currency", currency_code)
}

/// Copies the submitted choices onto `prefs`. Unknown values keep the old setting.
fn apply_preferences(prefs: &mut UserPrefs, values: &FormValues) {
    prefs.language = values.choice("language").unwrap_or(prefs.language);
    prefs.timezone = values.choice("timezone").unwrap_or(prefs.timezone);
    prefs.date_format = values.choice("date_format").unwrap_or(prefs.date_format);
    prefs.time_format = values.choice("time_format").unwrap_or(prefs.time_format);
    prefs.theme = values.choice("theme").unwrap_or(prefs.theme);
}

#[component]
pub fn SettingsScreen() -> Element {
    let mut prefs = use_context::<AppStateMut>().prefs;
    let mut currency = use_currency();
    let toast = use_toast();

    let current = prefs();
    let code = currency.current().code();
    let channels = current.notifications;

    rsx! {
        section {
            Grid {
                Card {
                    title: "Preferences",
                    SchemaForm {
                        // Remount when the currency changes elsewhere so the select stays in sync.
                        key: "{code}",
                        schema: forms::preferences(),
                        initial: preference_values(&current, code),
                        on_submit: move |values: FormValues| {
                            apply_preferences(&mut prefs.write(), &values);
                            let message = match currency.switch_to(values.text("currency")) {
                                Some(changed) => format!("Your preferences have been updated. Amounts now show in {}", changed.name()),
                                None => "Your preferences have been updated".to_string(),
                            };
                            info!("preferences saved: {:?}", prefs.peek());
                            toast.success("Preferences Saved", message);
                        },
                    }
                }
                GlobalCurrencySelector {}
            }
            Card {
                title: "Notifications",
                p { class: "muted", "Choose how farm alerts reach you." }
                fieldset {
                    label {
                        input {
                            r#type: "checkbox",
                            role: "switch",
                            checked: channels.email,
                            onchange: move |evt| prefs.write().notifications.email = evt.checked(),
                        }
                        "Email notifications"
                    }
                    label {
                        input {
                            r#type: "checkbox",
                            role: "switch",
                            checked: channels.sms,
                            onchange: move |evt| prefs.write().notifications.sms = evt.checked(),
                        }
                        "SMS notifications"
                    }
                    label {
                        input {
                            r#type: "checkbox",
                            role: "switch",
                            checked: channels.push,
                            onchange: move |evt| prefs.write().notifications.push = evt.checked(),
                        }
                        "Push notifications"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use model::prefs::user_prefs::DateFormat;
    use model::prefs::user_prefs::Language;
    use model::prefs::user_prefs::Theme;

    use super::*;

    #[test]
    fn preference_form_starts_from_current_settings() {
        let prefs = UserPrefs {
            theme: Theme::Dark,
            ..UserPrefs::default()
        };
        let values = preference_values(&prefs, "KES");
        assert_eq!(values.text("theme"), "dark");
        assert_eq!(values.text("currency"), "KES");
        assert!(forms::preferences().validate(&values).is_ok());
    }

    #[test]
    fn submitted_preferences_are_applied() {
        let mut prefs = UserPrefs::default();
        let values = preference_values(&prefs, "UGX")
            .with("language", "fr")
            .with("date_format", DateFormat::Iso.value())
            .with("theme", "nonsense");
        apply_preferences(&mut prefs, &values);
        assert_eq!(prefs.language, Language::French);
        assert_eq!(prefs.date_format, DateFormat::Iso);
        assert_eq!(prefs.theme, Theme::Light);
    }
}
