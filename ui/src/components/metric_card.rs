use dioxus::prelude::*;
use model::records::dashboard::Trend;

/// A headline figure with an optional change indicator.
#[component]
pub fn MetricCard(
    #[props(into)] title: String,
    #[props(into)] value: String,
    #[props(into, default)] description: String,
    trend: Option<Trend>,
    icon: Option<&'static str>,
) -> Element {
    rsx! {
        article {
            class: "metric-card",
            header {
                class: "metric-card-header",
                span { "{title}" }
                if let Some(icon) = icon {
                    span { "aria-hidden": "true", "{icon}" }
                }
            }
            div { class: "metric-value", "{value}" }
            if let Some(trend) = trend {
                small {
                    class: if trend.positive { "trend up" } else { "trend down" },
                    {trend_label(trend)}
                }
            }
            if !description.is_empty() {
                p { class: "muted", "{description}" }
            }
        }
    }
}

/// e.g. "↑ 2.5% from last month".
pub fn trend_label(trend: Trend) -> String {
    let arrow = if trend.positive { "↑" } else { "↓" };
    format!("{arrow} {}% from last month", trend.percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_labels() {
        assert_eq!(trend_label(Trend::new(2.5, true)), "↑ 2.5% from last month");
        assert_eq!(trend_label(Trend::new(0.2, false)), "↓ 0.2% from last month");
    }
}
