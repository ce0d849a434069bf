use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use model::choice::filter_value;
use model::choice::Choice;
use model::choice::ALL;
use model::forms;
use model::forms::FormValues;
use model::records::financials::PaymentStatus;
use model::records::financials::ReportKind;
use model::records::financials::Transaction;
use strum::IntoEnumIterator;

use crate::app_state_mut::AppStateMut;
use crate::components::amount::Amount;
use crate::components::bar_chart::Bar;
use crate::components::bar_chart::BarChart;
use crate::components::empty_state::EmptyState;
use crate::components::metric_card::MetricCard;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::components::pico::Modal;
use crate::components::pico::Tabs;
use crate::components::schema_form::SchemaForm;
use crate::hooks::use_currency::use_currency;
use crate::hooks::use_toast::use_toast;

const TABS: [&str; 4] = ["Overview", "Income", "Expenses", "Reports"];

#[component]
pub fn FinancialsScreen() -> Element {
    let active = use_signal(|| 0);

    rsx! {
        section {
            Tabs { labels: TABS.to_vec(), active }
            match active() {
                1 => rsx! { IncomeTab {} },
                2 => rsx! { ExpensesTab {} },
                3 => rsx! { ReportsTab {} },
                _ => rsx! { OverviewTab {} },
            }
        }
    }
}

#[component]
fn OverviewTab() -> Element {
    let ledger = use_context::<AppStateMut>().ledger;
    let currency = use_currency();
    let summary = ledger.read().summary();
    let by_category: Vec<Bar> = ledger
        .read()
        .expenses_by_category()
        .into_iter()
        .map(|(category, amount)| Bar::new(category, amount, currency.format(amount)))
        .collect();

    rsx! {
        Grid {
            MetricCard { title: "Total Revenue", value: currency.format(summary.revenue), icon: "📈" }
            MetricCard { title: "Total Expenses", value: currency.format(summary.expenses), icon: "📉" }
            MetricCard {
                title: "Net Profit",
                value: currency.format(summary.net_profit),
                description: format!("{:.1}% profit margin", summary.profit_margin),
                icon: "💰",
            }
            MetricCard {
                title: "Pending Payments",
                value: currency.format(summary.pending_payments),
                description: "Income not yet received",
                icon: "⏳",
            }
        }
        Card {
            title: "Expenses by Category",
            BarChart { bars: by_category, empty_message: "No expenses recorded." }
        }
    }
}

#[component]
fn TransactionTable(rows: Vec<Transaction>, #[props(into)] empty_title: String) -> Element {
    let prefs = use_context::<AppStateMut>().prefs;
    let prefs = prefs();

    if rows.is_empty() {
        return rsx! {
            EmptyState { icon: "🧾", title: empty_title }
        };
    }

    rsx! {
        div {
            class: "table-wrap",
            table {
                class: "striped",
                thead {
                    tr {
                        th { "Date" }
                        th { "Description" }
                        th { "Category" }
                        th { style: "text-align: right;", "Amount" }
                        th { "Status" }
                    }
                }
                tbody {
                    for (index, t) in rows.into_iter().enumerate() {
                        tr {
                            key: "{index}",
                            td { "{prefs.format_date(t.date)}" }
                            td { "{t.description}" }
                            td { "{t.category}" }
                            td { style: "text-align: right;", Amount { value: t.amount } }
                            td {
                                span {
                                    class: if t.status.is_pending() { "badge" } else { "badge good" },
                                    "{t.status.label()}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn IncomeTab() -> Element {
    let ledger = use_context::<AppStateMut>().ledger;
    let mut status = use_signal(|| None::<PaymentStatus>);

    let wanted = status();
    let rows: Vec<Transaction> = ledger
        .read()
        .income
        .iter()
        .filter(|t| wanted.is_none_or(|s| s == t.status))
        .cloned()
        .collect();

    rsx! {
        Card {
            title: "Income",
            div {
                class: "toolbar",
                label {
                    "Status"
                    select {
                        onchange: move |evt| status.set(filter_value(&evt.value())),
                        option { value: ALL, "All" }
                        for s in PaymentStatus::iter() {
                            option { key: "{s.value()}", value: s.value(), "{s.label()}" }
                        }
                    }
                }
            }
            TransactionTable { rows, empty_title: "No income matches this status" }
        }
    }
}

#[component]
fn ExpensesTab() -> Element {
    let mut ledger = use_context::<AppStateMut>().ledger;
    let toast = use_toast();
    let mut modal_open = use_signal(|| false);
    let rows = ledger.read().expenses.clone();

    rsx! {
        div {
            class: "page-actions",
            Button { on_click: move |_| modal_open.set(true), "Record Expense" }
        }
        Card {
            title: "Expenses",
            TransactionTable { rows, empty_title: "No expenses recorded" }
        }
        Modal {
            is_open: modal_open,
            title: "Record Expense",
            SchemaForm {
                schema: forms::record_expense(),
                on_cancel: move |_| modal_open.set(false),
                on_submit: move |values: FormValues| {
                    let expense = expense_from_form(&values);
                    info!("expense recorded: {} {}", expense.description, expense.amount);
                    let message = format!("{} has been added to expenses", expense.description);
                    ledger.write().record_expense(expense);
                    modal_open.set(false);
                    toast.success("Expense Recorded", message);
                },
            }
        }
    }
}

/// Builds the ledger entry for a validated expense form.
fn expense_from_form(values: &FormValues) -> Transaction {
    let schema = forms::record_expense();
    Transaction::new(
        values.date("date").unwrap_or_default(),
        values.text("description").trim(),
        schema.display_value(values, "category"),
        values.number("amount"),
        PaymentStatus::Paid,
    )
}

#[component]
fn ReportsTab() -> Element {
    let toast = use_toast();
    let mut modal_open = use_signal(|| false);
    let mut preset = use_signal(|| ReportKind::IncomeStatement);

    let schema = forms::generate_report();
    let initial = schema.defaults().with("report_type", preset().value());

    rsx! {
        Grid {
            for kind in ReportKind::iter().take(3) {
                ReportCard { key: "{kind.value()}", kind, on_generate: move |k| { preset.set(k); modal_open.set(true); } }
            }
        }
        Grid {
            for kind in ReportKind::iter().skip(3) {
                ReportCard { key: "{kind.value()}", kind, on_generate: move |k| { preset.set(k); modal_open.set(true); } }
            }
        }
        Modal {
            is_open: modal_open,
            title: "Generate Report",
            SchemaForm {
                key: "{preset().value()}",
                schema: schema.clone(),
                initial,
                on_cancel: move |_| modal_open.set(false),
                on_submit: move |values: FormValues| {
                    let message = report_message(&values);
                    info!("{}", message);
                    modal_open.set(false);
                    toast.success("Report Generated", message);
                },
            }
        }
    }
}

#[component]
fn ReportCard(kind: ReportKind, on_generate: EventHandler<ReportKind>) -> Element {
    rsx! {
        Card {
            title: kind.label(),
            p { class: "muted", "{kind.description()}" }
            Button { outline: true, on_click: move |_| on_generate.call(kind), "Generate" }
        }
    }
}

fn report_message(values: &FormValues) -> String {
    let schema = forms::generate_report();
    format!(
        "{} for {} to {} is ready ({})",
        schema.display_value(values, "report_type"),
        values.text("start_date"),
        values.text("end_date"),
        schema.display_value(values, "format"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expense_form_becomes_a_paid_transaction() {
        let values = FormValues::default()
            .with("date", "2023-06-20")
            .with("category", "medicine")
            .with("description", " Newcastle vaccine ")
            .with("amount", "420.5")
            .with("payment_method", "cash");
        let expense = expense_from_form(&values);
        assert_eq!(expense.category, "Medicine");
        assert_eq!(expense.description, "Newcastle vaccine");
        assert_eq!(expense.amount, 420.5);
        assert!(expense.status.is_paid());
        assert_eq!(expense.date, chrono::NaiveDate::from_ymd_opt(2023, 6, 20).unwrap());
    }

    #[test]
    fn report_message_uses_option_labels() {
        let values = FormValues::default()
            .with("report_type", "cash-flow")
            .with("start_date", "2023-06-01")
            .with("end_date", "2023-06-30")
            .with("format", "csv");
        assert_eq!(report_message(&values), "Cash Flow for 2023-06-01 to 2023-06-30 is ready (CSV)");
    }
}
