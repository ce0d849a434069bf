use dioxus::prelude::*;

/// Placeholder shown where a list or table has nothing to display.
#[derive(PartialEq, Clone, Props)]
pub struct EmptyStateProps {
    #[props(into)]
    title: String,
    #[props(into, default)]
    description: String,
    #[props(default)]
    primary_action: Option<Element>,
    #[props(into, default)]
    icon: String,
}

#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                padding: 2rem;
                text-align: center;
                color: var(--pico-muted-color);
                border: 2px dashed var(--pico-card-border-color);
                border-radius: var(--pico-border-radius);
                background-color: var(--pico-card-sectioning-background-color);
                margin: 1rem 0;
            ",
            if !props.icon.is_empty() {
                div {
                    style: "font-size: 3rem; margin-bottom: 1rem; opacity: 0.8;",
                    "{props.icon}"
                }
            }
            h4 {
                style: "margin-bottom: 0.5rem;",
                "{props.title}"
            }
            if !props.description.is_empty() {
                p {
                    style: "max-width: 400px; margin: 0 auto 1.5rem auto;",
                    "{props.description}"
                }
            }
            if let Some(action) = props.primary_action {
                div { {action} }
            }
        }
    }
}
