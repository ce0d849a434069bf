use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use model::forms;
use model::forms::FormValues;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::components::schema_form::SchemaForm;
use crate::hooks::use_toast::use_toast;

#[component]
pub fn ProfileScreen() -> Element {
    let app_state = use_context::<AppState>();
    let session = use_context::<AppStateMut>().session;
    let toast = use_toast();
    let mut display_name = use_signal(|| app_state.user_name.to_string());
    // Bumped after a password change so the form remounts empty.
    let mut password_form = use_signal(|| 0u32);

    let email = session
        .read()
        .as_ref()
        .map(|s| s.email.clone())
        .unwrap_or_else(|| "john@poultryfarm.com".to_string());
    let profile_schema = forms::edit_profile();
    let initial = profile_schema.defaults().with("email", email.as_str());

    rsx! {
        section {
            Card {
                div {
                    class: "profile-header",
                    span { class: "avatar large", "{initials(&display_name())}" }
                    hgroup {
                        h3 { "{display_name}" }
                        p { "{app_state.user_role} · {email}" }
                    }
                }
            }
            Grid {
                Card {
                    title: profile_schema.title,
                    SchemaForm {
                        schema: profile_schema.clone(),
                        initial,
                        on_submit: move |values: FormValues| {
                            let name = format!("{} {}", values.text("first_name").trim(), values.text("last_name").trim());
                            info!("profile updated for {}", name);
                            display_name.set(name);
                            toast.success("Profile Updated", "Your profile information has been saved");
                        },
                    }
                }
                Card {
                    title: "Change Password",
                    SchemaForm {
                        key: "{password_form}",
                        schema: forms::change_password(),
                        on_submit: move |_| {
                            *password_form.write() += 1;
                            toast.success("Password Updated", "Your password has been changed successfully");
                        },
                    }
                }
            }
        }
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_from_display_name() {
        assert_eq!(initials("John Doe"), "JD");
        assert_eq!(initials("  amina  "), "A");
        assert_eq!(initials("Mary Anne Okello"), "MA");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn password_change_requires_matching_confirmation() {
        let schema = forms::change_password();
        let values = FormValues::default()
            .with("current_password", "old-secret")
            .with("new_password", "new-secret-1")
            .with("confirm_password", "new-secret-2");
        let errors = schema.validate(&values).unwrap_err();
        assert_eq!(errors.get("confirm_password"), Some("Passwords do not match"));
        assert!(schema.validate(&values.with("confirm_password", "new-secret-1")).is_ok());
    }
}
