use dioxus::prelude::*;
use model::auth;
use model::forms;
use model::forms::FormValues;

use crate::components::schema_form::SchemaForm;
use crate::Route;

#[component]
pub fn ForgotPasswordScreen() -> Element {
    let mut confirmation = use_signal(|| None::<String>);

    rsx! {
        div {
            class: "auth-page",
            article {
                class: "auth-card",
                header {
                    hgroup {
                        h2 { "Forgot Password" }
                        p { "Enter your email and we will send you reset instructions." }
                    }
                }
                match confirmation() {
                    Some(message) => rsx! {
                        p { role: "status", "{message}" }
                    },
                    None => rsx! {
                        SchemaForm {
                            schema: forms::forgot_password(),
                            on_submit: move |values: FormValues| {
                                if let Ok(message) = auth::request_password_reset(&values) {
                                    confirmation.set(Some(message));
                                }
                            },
                        }
                    },
                }
                footer {
                    Link { to: Route::Login {}, "← Back to sign in" }
                }
            }
        }
    }
}
