use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use model::auth;
use model::forms;
use model::forms::FormValues;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::schema_form::SchemaForm;
use crate::Route;

#[component]
pub fn LoginScreen() -> Element {
    let farm_name = use_context::<AppState>().farm_name;
    let mut session = use_context::<AppStateMut>().session;
    let mut error = use_signal(String::new);
    let navigator = use_navigator();

    rsx! {
        div {
            class: "auth-page",
            article {
                class: "auth-card",
                header {
                    hgroup {
                        h2 { "🐔 {farm_name}" }
                        p { "Sign in to manage your farm" }
                    }
                }
                SchemaForm {
                    schema: forms::login(),
                    external_error: error(),
                    on_submit: move |values: FormValues| match auth::login(&values) {
                        Ok(new_session) => {
                            session.set(Some(new_session));
                            navigator.push(Route::Dashboard {});
                        }
                        Err(e) => {
                            warn!("sign-in rejected: {}", e);
                            error.set("Please check your email and password.".to_string());
                        }
                    },
                }
                footer {
                    Link { to: Route::ForgotPassword {}, "Forgot your password?" }
                }
            }
        }
    }
}
