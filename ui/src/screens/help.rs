use dioxus::prelude::*;
use model::records::help::search_faqs;
use model::records::help::GUIDES;
use model::records::help::SUPPORT_EMAIL;

use crate::components::empty_state::EmptyState;
use crate::components::pico::Accordion;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::components::pico::Tabs;

const TABS: [&str; 3] = ["FAQ", "Documentation", "Contact Support"];

#[component]
pub fn HelpScreen() -> Element {
    let active = use_signal(|| 0);
    let mut query = use_signal(String::new);

    let faqs = search_faqs(&query());

    rsx! {
        section {
            Tabs { labels: TABS.to_vec(), active }
            match active() {
                1 => rsx! {
                    Grid {
                        for guide in GUIDES.iter().take(2) {
                            Card { key: "{guide.title}", title: guide.title, p { "{guide.summary}" } }
                        }
                    }
                    Grid {
                        for guide in GUIDES.iter().skip(2) {
                            Card { key: "{guide.title}", title: guide.title, p { "{guide.summary}" } }
                        }
                    }
                },
                2 => rsx! {
                    Card {
                        title: "Contact Support",
                        p { "Our support team answers within one business day." }
                        p {
                            "Email: "
                            a { href: "mailto:{SUPPORT_EMAIL}", "{SUPPORT_EMAIL}" }
                        }
                    }
                },
                _ => rsx! {
                    input {
                        r#type: "search",
                        placeholder: "Search frequently asked questions",
                        value: "{query}",
                        oninput: move |evt| query.set(evt.value()),
                    }
                    if faqs.is_empty() {
                        EmptyState {
                            icon: "🔍",
                            title: "No matching questions",
                            description: "Try another search or contact support at {SUPPORT_EMAIL}.",
                        }
                    } else {
                        for faq in faqs {
                            Accordion { key: "{faq.question}", title: faq.question, p { "{faq.answer}" } }
                        }
                    }
                },
            }
        }
    }
}
