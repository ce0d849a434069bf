use chrono::NaiveDate;
use dioxus::prelude::*;
use model::choice::filter_value;
use model::choice::Choice;
use model::choice::ALL;
use model::forms::COUP_OPTIONS;
use model::money::group_digits;
use model::records::dashboard::aggregate_feed;
use model::records::dashboard::sample_feed;
use model::records::dashboard::sample_mortality;
use model::records::dashboard::sample_production;
use model::records::dashboard::DashboardFilter;
use model::records::dashboard::DashboardMetrics;
use model::records::dashboard::FeedView;
use model::records::inventory::BirdType;
use model::records::inventory::InventoryFilter;

use crate::app_state_mut::AppStateMut;
use crate::components::amount::Amount;
use crate::components::bar_chart::Bar;
use crate::components::bar_chart::BarChart;
use crate::components::metric_card::MetricCard;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::hooks::use_currency::use_currency;

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[component]
pub fn DashboardScreen() -> Element {
    let app_state_mut = use_context::<AppStateMut>();
    let currency = use_currency();
    let mut filter = use_signal(DashboardFilter::default);
    let mut feed_view = use_signal(FeedView::default);

    let metrics = DashboardMetrics::default();
    let summary = app_state_mut.ledger.read().summary();
    let current_filter = filter();

    let flock_filter = InventoryFilter {
        bird_type: current_filter.bird_type,
        coup: current_filter.coup.clone(),
        ..InventoryFilter::default()
    };
    let total_birds: u32 = app_state_mut
        .inventory
        .read()
        .filtered(&flock_filter)
        .iter()
        .map(|f| f.count)
        .sum();

    let coup_label = current_filter
        .coup
        .as_deref()
        .and_then(|coup| COUP_OPTIONS.iter().find(|(value, _)| *value == coup))
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| current_filter.coup_label());

    let production = sample_production();
    let production_bars: Vec<Bar> = current_filter
        .production(&production)
        .into_iter()
        .map(|p| {
            Bar::new(p.date.format("%b %d").to_string(), f64::from(p.production), format!("{} eggs", p.production))
                .muted(!p.met_target())
        })
        .collect();

    let mortality = sample_mortality();
    let mortality_bars: Vec<Bar> = current_filter
        .mortality(&mortality)
        .into_iter()
        .map(|m| Bar::new(m.coup.clone(), m.rate, format!("{}% ({} birds)", m.rate, m.count)))
        .collect();

    let feed_bars: Vec<Bar> = aggregate_feed(&current_filter.feed(&sample_feed()), feed_view())
        .into_iter()
        .map(|p| {
            let label = format!("{} {}", p.coup, p.date.format("%b %d"));
            Bar::new(label, f64::from(p.kg), format!("{} kg", p.kg))
        })
        .collect();

    rsx! {
        section {
            form {
                class: "toolbar",
                onsubmit: move |evt: FormEvent| evt.prevent_default(),
                label {
                    "From"
                    input {
                        r#type: "date",
                        oninput: move |evt| filter.write().from = parse_date(&evt.value()),
                    }
                }
                label {
                    "To"
                    input {
                        r#type: "date",
                        oninput: move |evt| filter.write().to = parse_date(&evt.value()),
                    }
                }
                label {
                    "Coup"
                    select {
                        onchange: move |evt| {
                            let value = evt.value();
                            filter.write().coup = (value != ALL).then_some(value);
                        },
                        option { value: ALL, "All Coups" }
                        for (value, label) in COUP_OPTIONS.iter().copied() {
                            option { key: "{value}", value, "{label}" }
                        }
                    }
                }
                label {
                    "Bird Type"
                    select {
                        onchange: move |evt| filter.write().bird_type = filter_value::<BirdType>(&evt.value()),
                        option { value: ALL, "All Types" }
                        for (value, label) in BirdType::options() {
                            option { key: "{value}", value, "{label}" }
                        }
                    }
                }
            }

            Grid {
                MetricCard {
                    title: "Total Birds",
                    value: group_digits(f64::from(total_birds)),
                    trend: metrics.total_birds_trend,
                    icon: "🐔",
                }
                MetricCard {
                    title: "Egg Production",
                    value: group_digits(f64::from(metrics.egg_production)),
                    trend: metrics.egg_production_trend,
                    icon: "🥚",
                }
                MetricCard {
                    title: "Mortality Rate",
                    value: format!("{}%", metrics.mortality_rate),
                    trend: metrics.mortality_trend,
                    icon: "📉",
                }
                MetricCard {
                    title: "Feed Consumption",
                    value: format!("{} kg", metrics.feed_consumption_kg),
                    trend: metrics.feed_trend,
                    icon: "🌾",
                }
            }

            Grid {
                Card {
                    title: "Egg Production",
                    p { class: "muted", "Daily eggs collected against a target of 100. Days below target are greyed." }
                    BarChart { bars: production_bars, empty_message: "No production recorded in this date range." }
                }
                Card {
                    title: "Mortality by Coup",
                    p { class: "muted", "{coup_label}" }
                    BarChart { bars: mortality_bars, empty_message: "No mortality data for this coup." }
                }
            }

            Card {
                title: "Feed Consumption",
                div {
                    class: "toolbar",
                    label {
                        "View"
                        select {
                            onchange: move |evt| {
                                if let Some(view) = FeedView::from_value(&evt.value()) {
                                    feed_view.set(view);
                                }
                            },
                            for (value, label) in FeedView::options() {
                                option { key: "{value}", value, selected: feed_view().value() == value, "{label}" }
                            }
                        }
                    }
                }
                BarChart { bars: feed_bars, empty_message: "No feed consumption recorded for this selection." }
            }

            Card {
                title: "Financial Snapshot",
                p { class: "muted", "All amounts in {currency.current().name()}." }
                Grid {
                    div {
                        small { class: "muted", "Revenue" }
                        p { strong { Amount { value: summary.revenue } } }
                    }
                    div {
                        small { class: "muted", "Expenses" }
                        p { strong { Amount { value: summary.expenses } } }
                    }
                    div {
                        small { class: "muted", "Net Profit" }
                        p { strong { Amount { value: summary.net_profit, signed: true } } }
                    }
                    div {
                        small { class: "muted", "Pending Payments" }
                        p { strong { Amount { value: summary.pending_payments } } }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_inputs_parse_iso_dates() {
        assert_eq!(parse_date("2023-01-05"), NaiveDate::from_ymd_opt(2023, 1, 5));
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("05/01/2023"), None);
    }
}
