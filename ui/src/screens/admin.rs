//! Administration: user accounts, farm configuration and the activity log.

use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use model::choice::Choice;
use model::forms;
use model::forms::FormValues;
use model::money::group_digits;
use model::records::farm::CoupConfig;
use model::records::users::sample_activity;
use model::records::users::NewUser;
use model::records::users::Permission;
use model::records::users::Role;

use crate::app_state_mut::AppStateMut;
use crate::components::global_currency_selector::GlobalCurrencySelector;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::components::pico::Modal;
use crate::components::pico::Tabs;
use crate::components::schema_form::SchemaForm;
use crate::hooks::use_toast::use_toast;

const TABS: [&str; 3] = ["Users", "Farm Settings", "Activity Log"];

fn new_user_from_form(values: &FormValues) -> NewUser {
    NewUser {
        first_name: values.text("first_name").trim().to_string(),
        last_name: values.text("last_name").trim().to_string(),
        email: values.text("email").trim().to_string(),
        role: values.choice::<Role>("role").unwrap_or(Role::Viewer),
        permissions: vec![Permission::ViewDashboard],
    }
}

fn coup_from_form(values: &FormValues) -> CoupConfig {
    CoupConfig {
        name: values.text("name").trim().to_string(),
        kind: forms::coup_management().display_value(values, "kind").to_string(),
        capacity: values.count("capacity"),
    }
}

#[component]
pub fn AdminScreen() -> Element {
    let active = use_signal(|| 0);

    rsx! {
        section {
            Tabs { labels: TABS.to_vec(), active }
            match active() {
                1 => rsx! { FarmSettingsTab {} },
                2 => rsx! { ActivityLogTab {} },
                _ => rsx! { UsersTab {} },
            }
        }
    }
}

#[component]
fn UsersTab() -> Element {
    let mut users = use_context::<AppStateMut>().users;
    let toast = use_toast();
    let mut modal_open = use_signal(|| false);

    let directory = users();
    let active_count = directory.active_count();
    let total = directory.users().len();

    rsx! {
        div {
            class: "page-actions",
            Button { on_click: move |_| modal_open.set(true), "Add User" }
        }
        Card {
            title: "User Accounts",
            p { class: "muted", "{active_count} of {total} accounts active" }
            div {
                class: "table-wrap",
                table {
                    class: "striped",
                    thead {
                        tr {
                            th { "User" }
                            th { "Role" }
                            th { "Status" }
                            th { "Last Login" }
                            th { "" }
                        }
                    }
                    tbody {
                        for user in directory.users().iter().cloned() {
                            tr {
                                key: "{user.id}",
                                td {
                                    span { class: "avatar", "{user.initials()}" }
                                    strong { "{user.full_name()}" }
                                    br {}
                                    small { class: "muted", "{user.email}" }
                                }
                                td { "{user.role.label()}" }
                                td {
                                    span {
                                        class: if user.active { "badge good" } else { "badge" },
                                        "{user.status_label()}"
                                    }
                                }
                                td {
                                    if user.last_login.is_empty() {
                                        small { class: "muted", "Never" }
                                    } else {
                                        "{user.last_login}"
                                    }
                                }
                                td {
                                    Button {
                                        button_type: ButtonType::Secondary,
                                        outline: true,
                                        on_click: move |_| {
                                            if let Some(now_active) = users.write().toggle_active(user.id) {
                                                let state = if now_active { "activated" } else { "deactivated" };
                                                info!("user {} {}", user.id, state);
                                                toast.success("User Updated", format!("The account has been {state}"));
                                            }
                                        },
                                        if user.active { "Deactivate" } else { "Activate" }
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
            title: "Add User",
            SchemaForm {
                schema: forms::add_user(),
                initial: forms::add_user().defaults(),
                on_cancel: move |_| modal_open.set(false),
                on_submit: move |values: FormValues| {
                    let new_user = new_user_from_form(&values);
                    let name = format!("{} {}", new_user.first_name, new_user.last_name);
                    let id = users.write().add_user(new_user);
                    info!("added user {} ({})", id, name);
                    modal_open.set(false);
                    toast.success("User Added", format!("{name} can now sign in"));
                },
            }
        }
    }
}

#[component]
fn FarmSettingsTab() -> Element {
    let app_state_mut = use_context::<AppStateMut>();
    let mut farm = app_state_mut.farm;
    let inventory = app_state_mut.inventory;
    let toast = use_toast();
    let mut coup_modal_open = use_signal(|| false);

    let farm_read = farm.read();
    let inventory_read = inventory.read();
    let coups: Vec<(CoupConfig, Option<f64>)> = farm_read
        .coups()
        .iter()
        .map(|c| (c.clone(), farm_read.occupancy(&c.name, &inventory_read)))
        .collect();
    let total_capacity = farm_read.total_capacity();
    drop(inventory_read);
    drop(farm_read);

    rsx! {
        Card {
            title: "Coups",
            p { class: "muted", "Total capacity: {group_digits(f64::from(total_capacity))} birds" }
            div {
                class: "table-wrap",
                table {
                    class: "striped",
                    thead {
                        tr {
                            th { "Coup" }
                            th { "Type" }
                            th { style: "text-align: right;", "Capacity" }
                            th { "Occupancy" }
                        }
                    }
                    tbody {
                        for (coup, occupancy) in coups {
                            tr {
                                key: "{coup.name}",
                                td { "{coup.name}" }
                                td { "{coup.kind}" }
                                td { style: "text-align: right;", "{group_digits(f64::from(coup.capacity))}" }
                                td {
                                    progress { value: "{occupancy.unwrap_or(0.0).min(100.0)}", max: "100" }
                                    small { "{occupancy.unwrap_or(0.0):.0}%" }
                                }
                            }
                        }
                    }
                }
            }
            Button { outline: true, on_click: move |_| coup_modal_open.set(true), "Add or Update Coup" }
        }
        Grid {
            Card {
                title: "Alert Configuration",
                SchemaForm {
                    schema: forms::alert_settings(),
                    initial: forms::alert_settings().defaults(),
                    on_submit: move |_| toast.success("Settings Saved", "Alert settings have been updated"),
                }
            }
            Card {
                title: "Backup & Restore",
                SchemaForm {
                    schema: forms::backup_settings(),
                    initial: forms::backup_settings().defaults(),
                    on_submit: move |values: FormValues| {
                        let schema = forms::backup_settings();
                        let message = format!(
                            "Backups run {} at {}",
                            schema.display_value(&values, "frequency").to_lowercase(),
                            values.text("time"),
                        );
                        toast.success("Backup Settings Saved", message);
                    },
                }
            }
        }
        GlobalCurrencySelector { show_reset: false }
        Modal {
            is_open: coup_modal_open,
            title: "Coup",
            SchemaForm {
                schema: forms::coup_management(),
                on_cancel: move |_| coup_modal_open.set(false),
                on_submit: move |values: FormValues| {
                    let coup = coup_from_form(&values);
                    let message = format!("{} saved with capacity {}", coup.name, coup.capacity);
                    info!("{}", message);
                    farm.write().upsert(coup);
                    coup_modal_open.set(false);
                    toast.success("Coup Saved", message);
                },
            }
        }
    }
}

#[component]
fn ActivityLogTab() -> Element {
    let entries = sample_activity();

    rsx! {
        Card {
            title: "Recent Activity",
            div {
                class: "table-wrap",
                table {
                    class: "striped",
                    thead {
                        tr {
                            th { "Time" }
                            th { "User" }
                            th { "Action" }
                            th { "Details" }
                            th { "IP Address" }
                        }
                    }
                    tbody {
                        for (index, entry) in entries.into_iter().enumerate() {
                            tr {
                                key: "{index}",
                                td { "{entry.timestamp}" }
                                td { "{entry.user}" }
                                td { "{entry.action}" }
                                td { "{entry.details}" }
                                td { code { "{entry.ip}" } }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use model::records::farm::Farm;
    use model::records::users::UserDirectory;

    use super::*;

    #[test]
    fn add_user_form_creates_an_active_user() {
        let values = forms::add_user()
            .defaults()
            .with("first_name", " Grace ")
            .with("last_name", "Nansubuga")
            .with("email", "grace@poultryfarm.com")
            .with("role", "accountant");
        let mut directory = UserDirectory::sample();
        let id = directory.add_user(new_user_from_form(&values));
        assert_eq!(id, 5);
        let user = directory.get(id).unwrap();
        assert_eq!(user.full_name(), "Grace Nansubuga");
        assert_eq!(user.role, Role::Accountant);
        assert!(user.active);
        assert_eq!(directory.active_count(), 4);
    }

    #[test]
    fn coup_form_updates_existing_coup() {
        let values = FormValues::default()
            .with("name", "coup a")
            .with("kind", "breeding")
            .with("capacity", "1800");
        let mut farm = Farm::sample();
        farm.upsert(coup_from_form(&values));
        assert_eq!(farm.coups().len(), 5);
        assert_eq!(farm.coups()[0].kind, "Breeding");
        assert_eq!(farm.total_capacity(), 6200);
    }
}
