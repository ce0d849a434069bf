// The client-side Dioxus application: routing, the page shell and shared state.

use chrono::Datelike;
use dioxus::prelude::*;
use dioxus_logger::tracing::info;

mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
pub mod hooks;
mod screens;

use app_state::AppState;
use app_state_mut::AppStateMut;
use components::currency_chooser::CurrencyChooser;
use components::pico::Button;
use components::pico::ButtonType;
use components::toast::ToastView;
use model::choice::Choice;
use model::prefs::currency_store::CurrencyStore;
use model::prefs::user_prefs::UserPrefs;
use model::records::customers::sample_customers;
use model::records::farm::Farm;
use model::records::financials::Ledger;
use model::records::inventory::Inventory;
use model::records::notifications::NotificationFeed;
use model::records::users::UserDirectory;
use screens::admin::AdminScreen;
use screens::customers::CustomersScreen;
use screens::dashboard::DashboardScreen;
use screens::financials::FinancialsScreen;
use screens::forgot_password::ForgotPasswordScreen;
use screens::help::HelpScreen;
use screens::inventory::InventoryScreen;
use screens::login::LoginScreen;
use screens::not_found::NotFoundScreen;
use screens::notifications::NotificationsScreen;
use screens::profile::ProfileScreen;
use screens::settings::SettingsScreen;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.green.min.css";

/// Every page of the dashboard. Pages inside the `Shell` layout share the
/// sidebar, header and footer; the sign-in pages stand alone.
#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", LoginScreen)]
    Login {},
    #[route("/forgot-password", ForgotPasswordScreen)]
    ForgotPassword {},
    #[layout(Shell)]
        #[route("/dashboard", DashboardScreen)]
        Dashboard {},
        #[route("/inventory", InventoryScreen)]
        Inventory {},
        #[route("/financials", FinancialsScreen)]
        Financials {},
        #[route("/customers", CustomersScreen)]
        Customers {},
        #[route("/admin", AdminScreen)]
        Admin {},
        #[route("/profile", ProfileScreen)]
        Profile {},
        #[route("/settings", SettingsScreen)]
        Settings {},
        #[route("/notifications", NotificationsScreen)]
        Notifications {},
        #[route("/help", HelpScreen)]
        Help {},
    #[end_layout]
    #[route("/:..segments", NotFoundScreen)]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Page heading shown in the header bar.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Login {} => "Sign in",
            Route::ForgotPassword {} => "Forgot Password",
            Route::Dashboard {} => "Dashboard",
            Route::Inventory {} => "Inventory",
            Route::Financials {} => "Financials",
            Route::Customers {} => "Customers",
            Route::Admin {} => "Admin",
            Route::Profile {} => "Profile",
            Route::Settings {} => "Settings",
            Route::Notifications {} => "Notifications",
            Route::Help {} => "Help & Support",
            Route::NotFound { .. } => "Page Not Found",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Route::Dashboard {} => "📊",
            Route::Inventory {} => "🐔",
            Route::Financials {} => "💰",
            Route::Customers {} => "🤝",
            Route::Admin {} => "🛠",
            Route::Settings {} => "⚙",
            Route::Help {} => "❓",
            _ => "•",
        }
    }
}

/// Sidebar entries, in display order.
const NAV_ROUTES: [Route; 7] = [
    Route::Dashboard {},
    Route::Inventory {},
    Route::Financials {},
    Route::Customers {},
    Route::Admin {},
    Route::Settings {},
    Route::Help {},
];

const APP_CSS: &str = r#"
    * { box-sizing: border-box; }

    body { margin: 0; }

    /* --- SHELL --- */
    .app-shell {
        display: grid;
        grid-template-columns: 15rem 1fr;
        min-height: 100vh;
    }
    .app-shell.collapsed { grid-template-columns: 4rem 1fr; }
    .app-shell.collapsed .nav-label,
    .app-shell.collapsed .farm-name { display: none; }

    .sidebar {
        position: sticky;
        top: 0;
        height: 100vh;
        padding: 1rem 0.5rem;
        border-right: 1px solid var(--pico-muted-border-color);
        background-color: var(--pico-card-background-color);
        overflow-y: auto;
    }
    .sidebar nav ul { display: flex; flex-direction: column; width: 100%; margin: 0; padding: 0; }
    .sidebar nav li { width: 100%; padding: 0.15rem 0; }
    .sidebar nav a { display: flex; gap: 0.6rem; width: 100%; padding: 0.5rem 0.75rem; border-radius: var(--pico-border-radius); }
    .sidebar nav a.active {
        color: var(--pico-primary);
        font-weight: bold;
        background-color: color-mix(in srgb, var(--pico-primary), transparent 90%);
    }
    .sidebar-header { display: flex; align-items: center; justify-content: space-between; gap: 0.5rem; margin-bottom: 1rem; }

    .main-column { display: flex; flex-direction: column; min-width: 0; }
    .topbar {
        padding: 0 1.5rem;
        border-bottom: 1px solid var(--pico-muted-border-color);
        --pico-nav-element-spacing-vertical: 0.5rem;
    }
    .topbar h1 { margin: 0; font-size: 1.4rem; }
    .content { flex: 1; padding: 1.5rem; }
    .app-footer { padding: 1rem 1.5rem; color: var(--pico-muted-color); font-size: 0.85rem; text-align: center; }

    .mobile-menu { display: none; }
    .menu-backdrop { position: fixed; inset: 0; z-index: 9; }
    .custom-dropdown-menu { position: absolute; left: 0.5rem; top: 3.5rem; z-index: 10; min-width: 12rem; padding: 0.5rem; }
    .custom-dropdown-item { display: block; padding: 0.4rem 1rem; }
    .custom-dropdown-item.active { color: var(--pico-primary); font-weight: bold; border-left: 4px solid var(--pico-primary); }

    @media (max-width: 768px) {
        .app-shell, .app-shell.collapsed { grid-template-columns: 1fr; }
        .sidebar { display: none; }
        .mobile-menu { display: block; position: relative; }
        .content { padding: 1rem; }
    }

    /* --- WIDGETS --- */
    .badge {
        display: inline-block;
        min-width: 1.4em;
        padding: 0 0.4em;
        border-radius: 1em;
        font-size: 0.75rem;
        text-align: center;
        color: var(--pico-primary-inverse);
        background-color: var(--pico-del-color);
    }
    .badge.neutral { background-color: var(--pico-secondary-background); }
    .badge.good { background-color: var(--pico-ins-color); }
    .muted { color: var(--pico-muted-color); }
    .amount.negative { color: var(--pico-del-color); }
    .amount.positive { color: var(--pico-ins-color); }
    .metric-card-header { display: flex; justify-content: space-between; }
    .metric-value { font-size: 1.8rem; font-weight: bold; }
    .trend.up { color: var(--pico-ins-color); }
    .trend.down { color: var(--pico-del-color); }

    .tabs { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1rem; }
    .tabs .tab { width: auto; margin: 0; padding: 0.4rem 1rem; }

    .toolbar { display: flex; flex-wrap: wrap; gap: 0.75rem; align-items: end; margin-bottom: 1rem; }
    .toolbar > * { flex: 1 1 10rem; margin-bottom: 0; }
    .toolbar button { flex: 0 0 auto; width: auto; }
    .page-actions { display: flex; flex-wrap: wrap; gap: 0.5rem; justify-content: flex-end; margin-bottom: 1rem; }
    .page-actions button { width: auto; margin: 0; }
    .form-actions { display: flex; gap: 0.5rem; justify-content: flex-end; }
    .form-actions button { width: auto; }
    .form-error, .field-error { color: var(--pico-del-color); }
    .table-wrap { overflow-x: auto; }
    tr.clickable { cursor: pointer; }
    tr.selected td { background-color: color-mix(in srgb, var(--pico-primary), transparent 90%); }

    .bar-chart { display: flex; flex-direction: column; gap: 0.4rem; }
    .bar-row { display: grid; grid-template-columns: 7rem 1fr 7rem; gap: 0.5rem; align-items: center; font-size: 0.85rem; }
    .bar-track { height: 1rem; border-radius: 0.5rem; background-color: var(--pico-muted-border-color); overflow: hidden; }
    .bar-fill { height: 100%; background-color: var(--pico-primary-background); }
    .bar-fill.muted { background-color: var(--pico-secondary-background); }
    .bar-caption { text-align: right; }

    .avatar {
        display: inline-flex; align-items: center; justify-content: center;
        width: 2.2rem; height: 2.2rem; border-radius: 50%;
        font-weight: bold; color: var(--pico-primary-inverse); background-color: var(--pico-primary-background);
    }
    .avatar.large { width: 5rem; height: 5rem; font-size: 1.8rem; }

    .profile-header { display: flex; align-items: center; gap: 1rem; }
    .notification { display: flex; align-items: flex-start; gap: 1rem; padding-left: 0.75rem; }
    .notification > div:nth-child(2) { flex: 1; }
    .notification-actions { display: flex; flex-direction: column; gap: 0.25rem; }
    .notification.unread { border-left: 4px solid var(--pico-primary); }

    .toast {
        position: fixed; right: 1.5rem; bottom: 1.5rem; z-index: 200;
        display: flex; gap: 1rem; align-items: flex-start;
        max-width: 24rem; padding: 0.75rem 1rem;
        border-radius: var(--pico-border-radius);
        background-color: var(--pico-card-background-color);
        box-shadow: var(--pico-card-box-shadow);
    }

    .auth-page { display: flex; align-items: center; justify-content: center; min-height: 100vh; padding: 1rem; }
    .auth-card { width: 100%; max-width: 26rem; }
"#;

//=============================================================================
// MAIN APPLICATION COMPONENT
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Link { rel: "stylesheet", href: PICO_CSS }
        style { "{APP_CSS}" }
        LoadedApp {}
    }
}

/// Creates the shared state, then hands over to the router.
#[component]
fn LoadedApp() -> Element {
    use_context_provider(AppState::default);

    // Create signals for mutable state at the top level of the component.
    let currency = use_signal(|| {
        let store = CurrencyStore::load(compat::prefs_storage());
        info!("display currency restored as {}", store.current().code());
        store
    });
    let prefs = use_signal(UserPrefs::default);
    let session = use_signal(|| None);
    let toast = use_signal(|| None);
    let notifications = use_signal(NotificationFeed::sample);
    let inventory = use_signal(Inventory::sample);
    let ledger = use_signal(Ledger::sample);
    let customers = use_signal(sample_customers);
    let users = use_signal(UserDirectory::sample);
    let farm = use_signal(Farm::sample);

    // Provide the mutable state by passing the already created signals.
    let app_state_mut = use_context_provider(|| AppStateMut {
        currency,
        prefs,
        session,
        toast,
        notifications,
        inventory,
        ledger,
        customers,
        users,
        farm,
    });

    let theme = app_state_mut.prefs.read().theme.value();

    rsx! {
        div {
            "data-theme": theme,
            Router::<Route> {}
        }
    }
}

/// The layout wrapping every signed-in page.
#[component]
fn Shell() -> Element {
    let route = use_route::<Route>();
    let farm_name = use_context::<AppState>().farm_name;
    let mut collapsed = use_signal(|| false);
    let year = chrono::Local::now().year();

    rsx! {
        div {
            class: if collapsed() { "app-shell collapsed" } else { "app-shell" },
            aside {
                class: "sidebar",
                div {
                    class: "sidebar-header",
                    strong { class: "farm-name", "{farm_name}" }
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        on_click: move |_| collapsed.toggle(),
                        if collapsed() { "»" } else { "«" }
                    }
                }
                SideNav {}
            }
            div {
                class: "main-column",
                Header { current: route.clone() }
                main {
                    class: "content",
                    Outlet::<Route> {}
                }
                footer {
                    class: "app-footer",
                    "© {year} Poultry Farm Management System. All rights reserved."
                }
            }
            ToastView {}
        }
    }
}

#[component]
fn SideNav() -> Element {
    rsx! {
        nav {
            ul {
                for route in NAV_ROUTES {
                    li {
                        key: "{route.title()}",
                        Link {
                            active_class: "active",
                            to: route.clone(),
                            span { "aria-hidden": "true", "{route.icon()}" }
                            span { class: "nav-label", "{route.title()}" }
                        }
                    }
                }
            }
        }
    }
}

/// The mobile dropdown replacing the sidebar on narrow screens.
#[component]
fn HamburgerMenu() -> Element {
    let mut is_open = use_signal(|| false);

    rsx! {
        div {
            class: "mobile-menu",
            Button {
                button_type: ButtonType::Secondary,
                outline: true,
                on_click: move |_| is_open.toggle(),
                "≡"
            }
            if is_open() {
                div {
                    class: "menu-backdrop",
                    onclick: move |_| is_open.set(false),
                }
                article {
                    class: "custom-dropdown-menu",
                    for route in NAV_ROUTES {
                        Link {
                            key: "{route.title()}",
                            class: "custom-dropdown-item",
                            active_class: "active",
                            to: route.clone(),
                            onclick: move |_| is_open.set(false),
                            "{route.title()}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Header(current: Route) -> Element {
    let app_state = use_context::<AppState>();
    let mut app_state_mut = use_context::<AppStateMut>();
    let unread = app_state_mut.notifications.read().unread_count();
    let user_name = app_state_mut
        .session
        .read()
        .as_ref()
        .map(|s| s.display_name().to_string())
        .unwrap_or_else(|| app_state.user_name.to_string());

    rsx! {
        header {
            class: "topbar",
            nav {
                ul {
                    li { HamburgerMenu {} }
                    li { h1 { "{current.title()}" } }
                }
                ul {
                    li { CurrencyChooser {} }
                    li {
                        Link {
                            to: Route::Notifications {},
                            "🔔"
                            if unread > 0 {
                                span { class: "badge", "{unread}" }
                            }
                        }
                    }
                    li {
                        details {
                            class: "dropdown",
                            summary { "{user_name}" }
                            ul {
                                dir: "rtl",
                                li { Link { to: Route::Profile {}, "Profile" } }
                                li { Link { to: Route::Settings {}, "Settings" } }
                                li {
                                    Link {
                                        to: Route::Login {},
                                        onclick: move |_| {
                                            info!("signed out");
                                            app_state_mut.session.set(None);
                                        },
                                        "Log out"
                                    }
                                }
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
    use super::*;

    #[test]
    fn routes_parse_from_their_paths() {
        assert_eq!("/".parse::<Route>().ok(), Some(Route::Login {}));
        assert_eq!("/inventory".parse::<Route>().ok(), Some(Route::Inventory {}));
        assert_eq!(Route::Financials {}.to_string(), "/financials");
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        let route = "/no/such/page".parse::<Route>().ok();
        assert!(matches!(route, Some(Route::NotFound { .. })));
        assert_eq!(route.map(|r| r.title()), Some("Page Not Found"));
    }

    #[test]
    fn sidebar_has_unique_titles() {
        let mut titles: Vec<_> = NAV_ROUTES.iter().map(Route::title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), NAV_ROUTES.len());
    }
}
