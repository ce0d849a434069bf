use dioxus::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::Route;

#[component]
pub fn NotFoundScreen(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
        div {
            class: "container",
            EmptyState {
                icon: "🥚",
                title: "Page Not Found",
                description: "Nothing lives at {path}. It may have been moved or never existed.",
                primary_action: rsx! {
                    Link { to: Route::Dashboard {}, role: "button", "Back to Dashboard" }
                },
            }
        }
    }
}
