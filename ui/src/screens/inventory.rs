//! Bird inventory: per-type totals, the filterable flock table and the four
//! stock forms (add, mortality, transfer, sale).

use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use model::choice::filter_value;
use model::choice::Choice;
use model::choice::ALL;
use model::forms;
use model::forms::FormValues;
use model::forms::Schema;
use model::forms::COUP_OPTIONS;
use model::money::group_digits;
use model::records::inventory::AgeGroup;
use model::records::inventory::BirdType;
use model::records::inventory::Flock;
use model::records::inventory::HealthStatus;
use model::records::inventory::Inventory;
use model::records::inventory::InventoryError;
use model::records::inventory::InventoryFilter;

use crate::app_state_mut::AppStateMut;
use crate::components::empty_state::EmptyState;
use crate::components::metric_card::MetricCard;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::components::pico::Modal;
use crate::components::schema_form::SchemaForm;
use crate::components::sortable_header::SortDirection;
use crate::components::sortable_header::SortState;
use crate::components::sortable_header::SortableHeader;
use crate::hooks::use_toast::use_toast;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum StockAction {
    AddBirds,
    RecordMortality,
    AssignBirds,
    MarkForSale,
}

impl StockAction {
    const ALL: [StockAction; 4] = [
        StockAction::AddBirds,
        StockAction::RecordMortality,
        StockAction::AssignBirds,
        StockAction::MarkForSale,
    ];

    fn schema(self) -> Schema {
        match self {
            StockAction::AddBirds => forms::add_birds(),
            StockAction::RecordMortality => forms::record_mortality(),
            StockAction::AssignBirds => forms::assign_birds(),
            StockAction::MarkForSale => forms::mark_for_sale(),
        }
    }

    /// Applies a validated form to the inventory and returns the toast text.
    fn apply(self, inventory: &mut Inventory, values: &FormValues) -> Result<String, InventoryError> {
        let bird_type = values.choice::<BirdType>("bird_type").unwrap_or(BirdType::Layers);
        let quantity = values.count("quantity");
        let coup_name = |field: &str| coup_label(values.text(field));
        match self {
            StockAction::AddBirds => {
                inventory.add_birds(&coup_name("coup"), bird_type, quantity, values.count("age"))?;
                Ok(format!("Added {quantity} {} to {}", bird_type.label(), coup_name("coup")))
            }
            StockAction::RecordMortality => {
                inventory.record_mortality(&coup_name("coup"), bird_type, quantity)?;
                Ok(format!("Recorded {quantity} deaths in {}", coup_name("coup")))
            }
            StockAction::AssignBirds => {
                let (from, to) = (coup_name("source_coup"), coup_name("target_coup"));
                inventory.transfer(&from, &to, bird_type, quantity)?;
                Ok(format!("Moved {quantity} {} from {from} to {to}", bird_type.label()))
            }
            StockAction::MarkForSale => {
                inventory.mark_for_sale(&coup_name("coup"), bird_type, quantity)?;
                Ok(format!("Marked {quantity} {} in {} for sale", bird_type.label(), coup_name("coup")))
            }
        }
    }
}

/// "coup-a" to "Coup A"; unknown values pass through.
fn coup_label(value: &str) -> String {
    COUP_OPTIONS
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| value.to_string())
}

fn sort_flocks(flocks: &mut [&Flock], sort: SortState) {
    flocks.sort_by(|a, b| {
        let ordering = match sort.column {
            "count" => a.count.cmp(&b.count),
            "age" => a.age_weeks.cmp(&b.age_weeks),
            "type" => a.bird_type.label().cmp(b.bird_type.label()),
            _ => a.coup.cmp(&b.coup),
        };
        sort.direction.apply(ordering)
    });
}

#[component]
pub fn InventoryScreen() -> Element {
    let app_state_mut = use_context::<AppStateMut>();
    let mut inventory = app_state_mut.inventory;
    let farm = app_state_mut.farm;
    let toast = use_toast();

    let mut filter = use_signal(InventoryFilter::default);
    let sort = use_signal(|| SortState::new("coup", SortDirection::Ascending));
    let mut modal_open = use_signal(|| false);
    let mut action = use_signal(|| StockAction::AddBirds);
    let mut action_error = use_signal(String::new);

    let inventory_read = inventory.read();
    let summaries = inventory_read.summary_by_type();
    let total = inventory_read.total_birds();
    let current_filter = filter();
    let mut flocks = inventory_read.filtered(&current_filter);
    sort_flocks(&mut flocks, sort());
    let rows: Vec<(Flock, Option<f64>)> = flocks
        .into_iter()
        .map(|f| (f.clone(), farm.read().occupancy(&f.coup, &inventory_read)))
        .collect();
    drop(inventory_read);

    let current_action = action();
    let schema = current_action.schema();

    rsx! {
        section {
            Grid {
                MetricCard {
                    title: "Total Birds",
                    value: group_digits(f64::from(total)),
                    description: "Across every coup",
                }
                for summary in summaries {
                    MetricCard {
                        key: "{summary.bird_type.value()}",
                        title: summary.bird_type.label(),
                        value: group_digits(f64::from(summary.total)),
                        description: format!("{} coups · {}", summary.coups, summary.health.label()),
                    }
                }
            }

            div {
                class: "page-actions",
                for stock_action in StockAction::ALL {
                    Button {
                        key: "{stock_action.schema().id}",
                        button_type: if stock_action == StockAction::AddBirds { ButtonType::Primary } else { ButtonType::Secondary },
                        outline: stock_action != StockAction::AddBirds,
                        on_click: move |_| {
                            action.set(stock_action);
                            action_error.set(String::new());
                            modal_open.set(true);
                        },
                        "{stock_action.schema().title}"
                    }
                }
            }

            Card {
                title: "Flocks",
                form {
                    class: "toolbar",
                    onsubmit: move |evt: FormEvent| evt.prevent_default(),
                    FilterSelect {
                        label: "Bird Type",
                        options: BirdType::options(),
                        on_change: move |value: String| filter.write().bird_type = filter_value(&value),
                    }
                    FilterSelect {
                        label: "Coup",
                        options: COUP_OPTIONS.to_vec(),
                        on_change: move |value: String| filter.write().coup = (value != ALL).then_some(value),
                    }
                    FilterSelect {
                        label: "Health",
                        options: HealthStatus::options(),
                        on_change: move |value: String| filter.write().health = filter_value(&value),
                    }
                    FilterSelect {
                        label: "Age Group",
                        options: AgeGroup::options(),
                        on_change: move |value: String| filter.write().age_group = filter_value(&value),
                    }
                }
                if rows.is_empty() {
                    EmptyState {
                        icon: "🐣",
                        title: "No flocks match these filters",
                        description: "Try widening the filters or add birds to a coup.",
                    }
                } else {
                    div {
                        class: "table-wrap",
                        table {
                            class: "striped",
                            thead {
                                tr {
                                    SortableHeader { title: "Coup", column: "coup", sort }
                                    SortableHeader { title: "Bird Type", column: "type", sort }
                                    SortableHeader { title: "Count", column: "count", sort, style: "text-align: right;" }
                                    SortableHeader { title: "Age (weeks)", column: "age", sort, style: "text-align: right;" }
                                    th { "Health" }
                                    th { "Occupancy" }
                                }
                            }
                            tbody {
                                for (flock, occupancy) in rows {
                                    tr {
                                        key: "{flock.coup}-{flock.bird_type.value()}",
                                        td { "{flock.coup}" }
                                        td { "{flock.bird_type.label()}" }
                                        td { style: "text-align: right;", "{group_digits(f64::from(flock.count))}" }
                                        td { style: "text-align: right;", "{flock.age_weeks}" }
                                        td {
                                            span {
                                                class: if flock.health == HealthStatus::Healthy { "badge good" } else { "badge" },
                                                "{flock.health.label()}"
                                            }
                                        }
                                        td {
                                            match occupancy {
                                                Some(percent) => rsx! {
                                                    progress { value: "{percent.min(100.0)}", max: "100" }
                                                    small { "{percent:.0}%" }
                                                },
                                                None => rsx! { small { class: "muted", "—" } },
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            Modal {
                is_open: modal_open,
                title: schema.title.to_string(),
                SchemaForm {
                    key: "{schema.id}",
                    schema: schema.clone(),
                    external_error: action_error(),
                    on_cancel: move |_| modal_open.set(false),
                    on_submit: move |values: FormValues| {
                        let result = current_action.apply(&mut inventory.write(), &values);
                        match result {
                            Ok(message) => {
                                info!("{}", message);
                                modal_open.set(false);
                                toast.success("Inventory Updated", message);
                            }
                            Err(e) => action_error.set(e.to_string()),
                        }
                    },
                }
            }
        }
    }
}

/// A labelled select whose first option clears the filter.
#[component]
fn FilterSelect(
    label: &'static str,
    options: Vec<(&'static str, &'static str)>,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        label {
            "{label}"
            select {
                onchange: move |evt| on_change.call(evt.value()),
                option { value: ALL, "All" }
                for (value, text) in options {
                    option { key: "{value}", value, "{text}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> FormValues {
        pairs
            .iter()
            .fold(FormValues::default(), |values, (name, value)| values.with(name, *value))
    }

    #[test]
    fn coup_values_map_to_names() {
        assert_eq!(coup_label("coup-c"), "Coup C");
        assert_eq!(coup_label("Coup Z"), "Coup Z");
    }

    #[test]
    fn add_birds_grows_the_flock() {
        let mut inventory = Inventory::sample();
        let message = StockAction::AddBirds
            .apply(
                &mut inventory,
                &values(&[("bird_type", "layers"), ("quantity", "100"), ("coup", "coup-a"), ("age", "20")]),
            )
            .unwrap();
        assert_eq!(message, "Added 100 Layers to Coup A");
        assert_eq!(inventory.total_birds(), 5380);
    }

    #[test]
    fn oversized_additions_report_an_error() {
        let mut inventory = Inventory::sample();
        let form = values(&[("bird_type", "layers"), ("quantity", "4294967295"), ("coup", "coup-a")]);
        let err = StockAction::AddBirds.apply(&mut inventory, &form).unwrap_err();
        assert!(matches!(err, InventoryError::FlockFull { .. }));
        assert_eq!(inventory.total_birds(), 5280);
    }

    #[test]
    fn transfer_errors_leave_stock_untouched() {
        let mut inventory = Inventory::sample();
        let form = values(&[
            ("source_coup", "coup-e"),
            ("target_coup", "coup-a"),
            ("bird_type", "broilers"),
            ("quantity", "5000"),
        ]);
        let err = StockAction::AssignBirds.apply(&mut inventory, &form).unwrap_err();
        assert!(matches!(err, InventoryError::InsufficientBirds { available: 840, .. }));
        assert_eq!(inventory, Inventory::sample());
    }

    #[test]
    fn sorting_by_count_descending() {
        let inventory = Inventory::sample();
        let mut flocks = inventory.filtered(&InventoryFilter::default());
        sort_flocks(&mut flocks, SortState::new("count", SortDirection::Descending));
        let counts: Vec<u32> = flocks.iter().map(|f| f.count).collect();
        assert_eq!(counts, vec![1200, 1200, 1040, 1000, 840]);
    }
}
