//! The process-wide currency preference: one owner, many readers.

use std::fmt;

use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;
use num_traits::ToPrimitive;
use thiserror::Error;

use super::storage::PrefsStorage;
use crate::currency::Currency;
use crate::currency::CurrencyRecord;
use crate::currency::UnknownCurrency;
use crate::money::format_amount;

/// Storage key holding the serialized currency record.
pub const CURRENCY_KEY: &str = "currency";

/// Why a persisted currency preference could not be used.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("malformed currency record: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Unknown(#[from] UnknownCurrency),
}

/// Decodes a persisted `{ code, symbol, name }` record and matches its code
/// against the catalog.
pub fn decode_currency(raw: &str) -> Result<Currency, DecodeError> {
    let record: CurrencyRecord = serde_json::from_str(raw)?;
    Ok(Currency::try_from(record)?)
}

/// Handle returned by [`CurrencyStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(Currency)>;

/// Holds the current display currency.
///
/// Every change goes through [`CurrencyStore::set_current`], which updates the
/// in-memory value, writes the full record to storage and then notifies
/// listeners. Reads never fail and always return a catalog member.
pub struct CurrencyStore {
    current: Currency,
    storage: Box<dyn PrefsStorage>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl CurrencyStore {
    /// Builds the store from whatever `storage` holds.
    ///
    /// A missing value yields the catalog default. A value that fails to
    /// decode, or names a code outside the catalog, is removed from storage
    /// and also yields the default.
    pub fn load(storage: impl PrefsStorage + 'static) -> Self {
        let current = restore(&storage);
        Self {
            current,
            storage: Box::new(storage),
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn current(&self) -> Currency {
        self.current
    }

    /// Makes `currency` current, persists it and notifies every listener.
    pub fn set_current(&mut self, currency: Currency) {
        self.current = currency;
        self.persist();
        info!("display currency set to {}", currency.code());
        for (_, listener) in self.listeners.iter_mut() {
            listener(currency);
        }
    }

    /// Sets the currency from a selector value. Codes outside the catalog are
    /// ignored and `false` is returned.
    pub fn set_current_code(&mut self, code: &str) -> bool {
        match Currency::from_code(code) {
            Some(currency) => {
                self.set_current(currency);
                true
            }
            None => {
                warn!("ignoring unknown currency code `{}`", code);
                false
            }
        }
    }

    pub fn reset_to_default(&mut self) {
        self.set_current(Currency::DEFAULT);
    }

    /// Formats `amount` in the current currency.
    pub fn format<T: ToPrimitive>(&self, amount: T) -> String {
        format_amount(amount, self.current)
    }

    /// Registers a callback run after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(Currency) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn persist(&self) {
        let json = match serde_json::to_string(&self.current) {
            Ok(json) => json,
            Err(e) => {
                warn!("could not serialize currency preference: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set(CURRENCY_KEY, &json) {
            warn!("could not persist currency preference: {}", e);
        }
    }
}

impl fmt::Debug for CurrencyStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurrencyStore")
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

fn restore(storage: &dyn PrefsStorage) -> Currency {
    let failure = match storage.get(CURRENCY_KEY) {
        Ok(None) => {
            debug!("no stored currency preference, using {}", Currency::DEFAULT.code());
            return Currency::DEFAULT;
        }
        Ok(Some(raw)) => match decode_currency(&raw) {
            Ok(currency) => {
                info!("restored currency preference {}", currency.code());
                return currency;
            }
            Err(e) => e.to_string(),
        },
        Err(e) => e.to_string(),
    };

    warn!(
        "discarding stored currency preference ({}), using {}",
        failure,
        Currency::DEFAULT.code()
    );
    if let Err(e) = storage.remove(CURRENCY_KEY) {
        warn!("could not clear currency preference: {}", e);
    }
    Currency::DEFAULT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::storage::FileStorage;
    use crate::prefs::storage::MemoryStorage;
    use crate::prefs::storage::StorageError;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn stored(storage: &MemoryStorage) -> Option<String> {
        storage.raw(CURRENCY_KEY)
    }

    #[test]
    fn empty_storage_starts_on_default_without_writing() {
        let storage = MemoryStorage::new();
        let store = CurrencyStore::load(storage.clone());
        assert_eq!(store.current(), Currency::UGX);
        assert_eq!(stored(&storage), None);
    }

    #[test]
    fn set_then_get_for_every_catalog_entry() {
        let mut store = CurrencyStore::load(MemoryStorage::new());
        for currency in Currency::all() {
            store.set_current(currency);
            assert_eq!(store.current().code(), currency.code());
        }
    }

    #[test]
    fn restart_restores_the_last_selection() {
        for currency in Currency::all() {
            let storage = MemoryStorage::new();
            CurrencyStore::load(storage.clone()).set_current(currency);

            let restarted = CurrencyStore::load(storage.clone());
            assert_eq!(restarted.current().code(), currency.code());
        }
    }

    #[test]
    fn persists_the_full_record() {
        let storage = MemoryStorage::new();
        let mut store = CurrencyStore::load(storage.clone());
        store.set_current(Currency::USD);

        let value: serde_json::Value = serde_json::from_str(&stored(&storage).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!({"code": "USD", "symbol": "$", "name": "US Dollar"}));
    }

    #[test]
    fn undecodable_value_falls_back_and_is_cleared() {
        let storage = MemoryStorage::with_entry(CURRENCY_KEY, "not-json");
        let store = CurrencyStore::load(storage.clone());
        assert_eq!(store.current(), Currency::DEFAULT);
        assert_eq!(store.current().code(), "UGX");
        assert_eq!(stored(&storage), None);
    }

    #[test]
    fn wrong_shape_falls_back_and_is_cleared() {
        let storage = MemoryStorage::with_entry(CURRENCY_KEY, r#"{"symbol":"$"}"#);
        let store = CurrencyStore::load(storage.clone());
        assert_eq!(store.current(), Currency::DEFAULT);
        assert_eq!(stored(&storage), None);
    }

    #[test]
    fn unknown_code_falls_back_and_is_cleared() {
        let storage =
            MemoryStorage::with_entry(CURRENCY_KEY, r#"{"code":"XYZ","symbol":"X","name":"Fake"}"#);
        let store = CurrencyStore::load(storage.clone());
        assert_eq!(store.current().code(), "UGX");
        assert_eq!(stored(&storage), None);
    }

    #[test]
    fn reset_returns_to_default_from_any_state() {
        let mut store = CurrencyStore::load(MemoryStorage::new());
        store.reset_to_default();
        assert_eq!(store.current(), Currency::DEFAULT);

        for currency in Currency::all() {
            store.set_current(currency);
            store.reset_to_default();
            assert_eq!(store.current().code(), Currency::DEFAULT.code());
        }
    }

    #[test]
    fn formats_in_the_current_currency() {
        let mut store = CurrencyStore::load(MemoryStorage::new());
        store.set_current(Currency::USD);
        assert_eq!(store.format(1250), "$ 1,250");
        assert_eq!(format_amount(1250, store.current()), "$ 1,250");

        store.set_current(Currency::EUR);
        assert_eq!(store.format(1250), "€ 1,250");
    }

    #[test]
    fn listeners_see_the_new_value_after_it_is_stored() {
        let storage = MemoryStorage::new();
        let mut store = CurrencyStore::load(storage.clone());

        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_in_listener = seen.clone();
        let storage_in_listener = storage.clone();
        store.subscribe(move |currency| {
            let persisted = storage_in_listener.raw(CURRENCY_KEY).and_then(|raw| decode_currency(&raw).ok());
            seen_in_listener.borrow_mut().push((currency, persisted));
        });

        store.set_current(Currency::KES);
        store.reset_to_default();

        assert_eq!(
            *seen.borrow(),
            vec![
                (Currency::KES, Some(Currency::KES)),
                (Currency::UGX, Some(Currency::UGX)),
            ]
        );
    }

    #[test]
    fn every_listener_is_notified_and_unsubscribe_stops_delivery() {
        let mut store = CurrencyStore::load(MemoryStorage::new());
        let count = Rc::new(RefCell::new(0));

        let first = {
            let count = count.clone();
            store.subscribe(move |_| *count.borrow_mut() += 1)
        };
        {
            let count = count.clone();
            store.subscribe(move |_| *count.borrow_mut() += 10);
        }

        store.set_current(Currency::GBP);
        assert_eq!(*count.borrow(), 11);

        assert!(store.unsubscribe(first));
        assert!(!store.unsubscribe(first));
        store.set_current(Currency::ZAR);
        assert_eq!(*count.borrow(), 21);
    }

    #[test]
    fn unknown_code_from_a_selector_is_ignored() {
        let storage = MemoryStorage::new();
        let mut store = CurrencyStore::load(storage.clone());
        store.set_current(Currency::NGN);

        assert!(!store.set_current_code("XYZ"));
        assert_eq!(store.current(), Currency::NGN);
        assert_eq!(decode_currency(&stored(&storage).unwrap()).unwrap(), Currency::NGN);

        assert!(store.set_current_code("RWF"));
        assert_eq!(store.current(), Currency::RWF);
    }

    struct FailingStorage;

    impl PrefsStorage for FailingStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("disabled".into()))
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disabled".into()))
        }
        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disabled".into()))
        }
    }

    #[test]
    fn storage_failures_never_reach_the_caller() {
        let mut store = CurrencyStore::load(FailingStorage);
        assert_eq!(store.current(), Currency::DEFAULT);
        store.set_current(Currency::TZS);
        assert_eq!(store.current(), Currency::TZS);
    }

    #[test]
    fn file_backed_store_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FileStorage::FILE_NAME);

        CurrencyStore::load(FileStorage::new(&path)).set_current(Currency::EUR);
        assert_eq!(CurrencyStore::load(FileStorage::new(&path)).current(), Currency::EUR);
    }

    #[test]
    fn decode_distinguishes_failure_kinds() {
        assert!(matches!(decode_currency("not-json"), Err(DecodeError::Malformed(_))));
        assert!(matches!(
            decode_currency(r#"{"code":"XYZ","symbol":"X","name":"Fake"}"#),
            Err(DecodeError::Unknown(_))
        ));
        assert_eq!(
            decode_currency(r#"{"code":"USD","symbol":"$","name":"US Dollar"}"#).unwrap(),
            Currency::USD
        );
    }
}
