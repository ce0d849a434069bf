//! Access to the display currency from any component.

use dioxus::prelude::*;
use model::currency::Currency;
use model::prefs::currency_store::CurrencyStore;
use num_traits::ToPrimitive;

use crate::app_state_mut::AppStateMut;

/// A copyable handle onto the shared currency store.
///
/// Reading through the handle subscribes the calling component, so it
/// re-renders whenever any other component changes the currency.
#[derive(Clone, Copy)]
pub struct CurrencyHandle {
    store: Signal<CurrencyStore>,
}

impl CurrencyHandle {
    pub fn current(&self) -> Currency {
        self.store.read().current()
    }

    pub fn format<T: ToPrimitive>(&self, amount: T) -> String {
        self.store.read().format(amount)
    }

    pub fn set(&mut self, currency: Currency) {
        self.store.write().set_current(currency);
    }

    /// Switches to `code` and returns the new currency. Returns `None` when
    /// `code` is already current or is not in the catalog.
    pub fn switch_to(&mut self, code: &str) -> Option<Currency> {
        switch_code(&mut self.store.write(), code)
    }

    pub fn reset(&mut self) {
        self.store.write().reset_to_default();
    }
}

fn switch_code(store: &mut CurrencyStore, code: &str) -> Option<Currency> {
    if code == store.current().code() {
        return None;
    }
    store.set_current_code(code).then(|| store.current())
}

pub fn use_currency() -> CurrencyHandle {
    CurrencyHandle {
        store: use_context::<AppStateMut>().currency,
    }
}

#[cfg(test)]
mod tests {
    use model::prefs::storage::MemoryStorage;

    use super::*;

    #[test]
    fn switching_reports_only_real_changes() {
        let mut store = CurrencyStore::load(MemoryStorage::new());
        assert_eq!(switch_code(&mut store, "KES"), Some(Currency::KES));
        assert_eq!(switch_code(&mut store, "KES"), None);
        assert_eq!(store.current(), Currency::KES);
    }

    #[test]
    fn unknown_codes_leave_the_store_alone() {
        let storage = MemoryStorage::new();
        let mut store = CurrencyStore::load(storage.clone());
        store.set_current(Currency::EUR);
        let saved = storage.raw("currency");

        assert_eq!(switch_code(&mut store, "XYZ"), None);
        assert_eq!(switch_code(&mut store, ""), None);
        assert_eq!(store.current(), Currency::EUR);
        assert_eq!(storage.raw("currency"), saved);
    }
}
