use std::collections::HashMap;

use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use model::choice::Choice;
use model::forms;
use model::forms::FormValues;
use model::records::customers::search;
use model::records::customers::Customer;
use model::records::customers::Payment;
use model::records::customers::PurchaseHistory;

use crate::app_state_mut::AppStateMut;
use crate::components::amount::Amount;
use crate::components::empty_state::EmptyState;
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

fn sort_customers(customers: &mut [&Customer], sort: SortState) {
    customers.sort_by(|a, b| {
        let ordering = match sort.column {
            "kind" => a.kind.cmp(&b.kind),
            "last_purchase" => a.last_purchase.cmp(&b.last_purchase),
            "total_spent" => a.total_spent.total_cmp(&b.total_spent),
            _ => a.name.cmp(&b.name),
        };
        sort.direction.apply(ordering)
    });
}

/// Form values pre-filled from an existing customer.
fn customer_values(customer: &Customer) -> FormValues {
    forms::edit_customer()
        .defaults()
        .with("name", customer.name.as_str())
        .with("contact", customer.contact.as_str())
        .with("email", customer.email.as_str())
        .with("phone", customer.phone.as_str())
        .with("kind", customer.kind.as_str())
}

fn apply_customer_edit(customer: &mut Customer, values: &FormValues) {
    customer.name = values.text("name").trim().to_string();
    customer.contact = values.text("contact").trim().to_string();
    customer.email = values.text("email").trim().to_string();
    customer.phone = values.text("phone").trim().to_string();
    customer.kind = values.text("kind").to_string();
}

fn payment_from_form(values: &FormValues) -> Payment {
    let schema = forms::record_payment();
    Payment::new(
        values.date("date").unwrap_or_default(),
        values.number("amount"),
        schema.display_value(values, "payment_method"),
        values.text("invoice_number").trim(),
    )
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum CustomerModal {
    RecordPayment,
    Edit,
}

#[component]
pub fn CustomersScreen() -> Element {
    let mut customers = use_context::<AppStateMut>().customers;
    let toast = use_toast();

    let mut query = use_signal(String::new);
    let sort = use_signal(|| SortState::new("name", SortDirection::Ascending));
    let mut selected = use_signal(|| None::<u32>);
    let mut histories = use_signal(HashMap::<u32, PurchaseHistory>::new);
    let mut modal = use_signal(|| CustomerModal::RecordPayment);
    let mut modal_open = use_signal(|| false);

    let all = customers.read();
    let mut matches = search(&all, &query());
    sort_customers(&mut matches, sort());
    let rows: Vec<Customer> = matches.into_iter().cloned().collect();
    let chosen = selected().and_then(|id| all.iter().find(|c| c.id == id).cloned());
    drop(all);

    let history = chosen.as_ref().map(|c| {
        histories
            .read()
            .get(&c.id)
            .cloned()
            .unwrap_or_else(PurchaseHistory::sample)
    });

    rsx! {
        section {
            Card {
                title: "Customers",
                form {
                    class: "toolbar",
                    onsubmit: move |evt: FormEvent| evt.prevent_default(),
                    input {
                        r#type: "search",
                        placeholder: "Search by name, contact or email",
                        value: "{query}",
                        oninput: move |evt| query.set(evt.value()),
                    }
                }
                if rows.is_empty() {
                    EmptyState {
                        icon: "🧑‍🌾",
                        title: "No customers found",
                        description: "No customer name, contact or email matches your search.",
                    }
                } else {
                    div {
                        class: "table-wrap",
                        table {
                            class: "striped",
                            thead {
                                tr {
                                    SortableHeader { title: "Customer", column: "name", sort }
                                    th { "Contact" }
                                    SortableHeader { title: "Type", column: "kind", sort }
                                    SortableHeader { title: "Last Purchase", column: "last_purchase", sort }
                                    SortableHeader { title: "Total Spent", column: "total_spent", sort, style: "text-align: right;" }
                                }
                            }
                            tbody {
                                for customer in rows {
                                    tr {
                                        key: "{customer.id}",
                                        class: if selected() == Some(customer.id) { "clickable selected" } else { "clickable" },
                                        onclick: move |_| selected.set(Some(customer.id)),
                                        td { strong { "{customer.name}" } }
                                        td {
                                            "{customer.contact}"
                                            br {}
                                            small { class: "muted", "{customer.email}" }
                                        }
                                        td { span { class: "badge", "{customer.kind}" } }
                                        td { "{customer.last_purchase}" }
                                        td { style: "text-align: right;", Amount { value: customer.total_spent } }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let (Some(customer), Some(history)) = (chosen.clone(), history) {
                Card {
                    title: customer.name.clone(),
                    Grid {
                        div {
                            small { class: "muted", "Total Purchases" }
                            p { strong { Amount { value: history.total_purchases() } } }
                        }
                        div {
                            small { class: "muted", "Total Payments" }
                            p { strong { Amount { value: history.total_payments() } } }
                        }
                        div {
                            small { class: "muted", "Balance" }
                            p { strong { Amount { value: history.balance() } } }
                        }
                    }
                    div {
                        class: "page-actions",
                        Button {
                            on_click: move |_| {
                                modal.set(CustomerModal::RecordPayment);
                                modal_open.set(true);
                            },
                            "Record Payment"
                        }
                        Button {
                            button_type: ButtonType::Secondary,
                            outline: true,
                            on_click: move |_| {
                                modal.set(CustomerModal::Edit);
                                modal_open.set(true);
                            },
                            "Edit Customer"
                        }
                    }
                    h4 { "Purchases" }
                    div {
                        class: "table-wrap",
                        table {
                            thead {
                                tr {
                                    th { "Date" }
                                    th { "Invoice" }
                                    th { "Description" }
                                    th { style: "text-align: right;", "Amount" }
                                    th { "Status" }
                                }
                            }
                            tbody {
                                for purchase in history.purchases.iter().cloned() {
                                    tr {
                                        key: "{purchase.invoice}",
                                        td { "{purchase.date}" }
                                        td { "{purchase.invoice}" }
                                        td { "{purchase.description}" }
                                        td { style: "text-align: right;", Amount { value: purchase.amount } }
                                        td { "{purchase.status.label()}" }
                                    }
                                }
                            }
                        }
                    }
                    h4 { "Payments" }
                    if history.payments.is_empty() {
                        p { class: "muted", "No payments recorded." }
                    } else {
                        div {
                            class: "table-wrap",
                            table {
                                thead {
                                    tr {
                                        th { "Date" }
                                        th { "Method" }
                                        th { "Reference" }
                                        th { style: "text-align: right;", "Amount" }
                                    }
                                }
                                tbody {
                                    for (index, payment) in history.payments.iter().cloned().enumerate() {
                                        tr {
                                            key: "{index}",
                                            td { "{payment.date}" }
                                            td { "{payment.method}" }
                                            td { "{payment.reference}" }
                                            td { style: "text-align: right;", Amount { value: payment.amount } }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                Modal {
                    is_open: modal_open,
                    title: match modal() {
                        CustomerModal::RecordPayment => "Record Payment",
                        CustomerModal::Edit => "Edit Customer",
                    },
                    match modal() {
                        CustomerModal::RecordPayment => rsx! {
                            SchemaForm {
                                key: "payment-{customer.id}",
                                schema: forms::record_payment(),
                                on_cancel: move |_| modal_open.set(false),
                                on_submit: move |values: FormValues| {
                                    let payment = payment_from_form(&values);
                                    info!("payment of {} recorded for customer {}", payment.amount, customer.id);
                                    histories
                                        .write()
                                        .entry(customer.id)
                                        .or_insert_with(PurchaseHistory::sample)
                                        .record_payment(payment);
                                    modal_open.set(false);
                                    toast.success("Payment Recorded", "The payment has been added to the customer account");
                                },
                            }
                        },
                        CustomerModal::Edit => rsx! {
                            SchemaForm {
                                key: "edit-{customer.id}",
                                schema: forms::edit_customer(),
                                initial: customer_values(&customer),
                                on_cancel: move |_| modal_open.set(false),
                                on_submit: move |values: FormValues| {
                                    if let Some(existing) = customers.write().iter_mut().find(|c| c.id == customer.id) {
                                        apply_customer_edit(existing, &values);
                                    }
                                    modal_open.set(false);
                                    toast.success("Customer Updated", "Customer details have been saved");
                                },
                            }
                        },
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use model::records::customers::sample_customers;

    use super::*;

    #[test]
    fn sorting_by_total_spent_descending() {
        let customers = sample_customers();
        let mut rows: Vec<&Customer> = customers.iter().collect();
        sort_customers(&mut rows, SortState::new("total_spent", SortDirection::Descending));
        let spent: Vec<f64> = rows.iter().map(|c| c.total_spent).collect();
        let mut expected = spent.clone();
        expected.sort_by(|a, b| b.total_cmp(a));
        assert_eq!(spent, expected);
    }

    #[test]
    fn edit_form_round_trips_customer_fields() {
        let mut customer = sample_customers().remove(0);
        let values = customer_values(&customer).with("contact", " Jane Smith ").with("kind", "Wholesale");
        assert!(forms::edit_customer().validate(&values.clone().with("address", "Kampala")).is_ok());
        apply_customer_edit(&mut customer, &values);
        assert_eq!(customer.contact, "Jane Smith");
        assert_eq!(customer.kind, "Wholesale");
        assert_eq!(customer.name, "Greenfield Supermarket");
    }

    #[test]
    fn payment_form_uses_method_label() {
        let values = FormValues::default()
            .with("amount", "2800")
            .with("date", "2023-06-20")
            .with("payment_method", "mobile-payment")
            .with("invoice_number", "INV-2023-003");
        let payment = payment_from_form(&values);
        assert_eq!(payment.method, "Mobile Payment");
        assert_eq!(payment.reference, "INV-2023-003");

        let mut history = PurchaseHistory::sample();
        history.record_payment(payment);
        assert_eq!(history.balance(), 0.0);
    }
}
