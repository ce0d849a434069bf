//! Defines the mutable, reactive state for the application's UI.

use dioxus::prelude::*;
use model::auth::Session;
use model::prefs::currency_store::CurrencyStore;
use model::prefs::user_prefs::UserPrefs;
use model::records::customers::Customer;
use model::records::farm::Farm;
use model::records::financials::Ledger;
use model::records::inventory::Inventory;
use model::records::notifications::NotificationFeed;
use model::records::users::UserDirectory;

use crate::components::toast::Toast;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// Each field is a `Signal`; writing one re-renders every component that
/// read it. The currency store lives here too, so a currency change reaches
/// every amount on screen without any explicit subscription.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    pub currency: Signal<CurrencyStore>,
    pub prefs: Signal<UserPrefs>,
    pub session: Signal<Option<Session>>,
    pub toast: Signal<Option<Toast>>,
    pub notifications: Signal<NotificationFeed>,
    pub inventory: Signal<Inventory>,
    pub ledger: Signal<Ledger>,
    pub customers: Signal<Vec<Customer>>,
    pub users: Signal<UserDirectory>,
    pub farm: Signal<Farm>,
}
