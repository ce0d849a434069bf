//! Defines the catalog of currencies the dashboard can display amounts in.

use serde::Deserialize;
use serde::Serialize;
use std::str::FromStr;
use strum::IntoEnumIterator;
use thiserror::Error;

/// A currency code that does not belong to the catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("currency code `{0}` is not in the catalog")]
pub struct UnknownCurrency(pub String);

/// One entry of the fixed currency catalog.
///
/// Declaration order is catalog order. The first variant is the default and
/// the fallback for any unreadable or stale preference.
///
/// Serializes as the full `{ code, symbol, name }` record so the persisted
/// form is self-describing.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(into = "CurrencyRecord", try_from = "CurrencyRecord")]
#[allow(clippy::upper_case_acronyms)]
pub enum Currency {
    #[default]
    UGX, // Ugandan Shilling
    USD, // US Dollar
    EUR, // Euro
    GBP, // British Pound
    KES, // Kenyan Shilling
    TZS, // Tanzanian Shilling
    RWF, // Rwandan Franc
    NGN, // Nigerian Naira
    ZAR, // South African Rand
}

impl Currency {
    /// The catalog default (first entry).
    pub const DEFAULT: Currency = Currency::UGX;

    /// All catalog entries, in catalog order.
    pub fn all() -> impl Iterator<Item = Currency> {
        Self::iter()
    }

    /// Looks up a catalog entry by its exact code.
    ///
    /// Unknown codes yield `None`; a currency is never made up.
    pub fn from_code(code: &str) -> Option<Currency> {
        Self::from_str(code).ok()
    }

    /// The ISO-like code, e.g. "USD".
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// The display prefix used when formatting amounts.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::UGX => "UGX",
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::KES => "KSh",
            Self::TZS => "TSh",
            Self::RWF => "RF",
            Self::NGN => "₦",
            Self::ZAR => "R",
        }
    }

    /// Human readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::UGX => "Ugandan Shilling",
            Self::USD => "US Dollar",
            Self::EUR => "Euro",
            Self::GBP => "British Pound",
            Self::KES => "Kenyan Shilling",
            Self::TZS => "Tanzanian Shilling",
            Self::RWF => "Rwandan Franc",
            Self::NGN => "Nigerian Naira",
            Self::ZAR => "South African Rand",
        }
    }

    /// Label used by selector controls, e.g. "$ - US Dollar".
    pub fn option_label(&self) -> String {
        format!("{} - {}", self.symbol(), self.name())
    }

    pub fn record(&self) -> CurrencyRecord {
        CurrencyRecord::from(*self)
    }
}

/// The owned `{ code, symbol, name }` form of a currency, as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyRecord {
    pub code: String,
    pub symbol: String,
    pub name: String,
}

impl From<Currency> for CurrencyRecord {
    fn from(currency: Currency) -> Self {
        Self {
            code: currency.code().to_string(),
            symbol: currency.symbol().to_string(),
            name: currency.name().to_string(),
        }
    }
}

/// Matches a record against the catalog by code only.
impl TryFrom<CurrencyRecord> for Currency {
    type Error = UnknownCurrency;

    fn try_from(record: CurrencyRecord) -> Result<Self, Self::Error> {
        Currency::from_code(&record.code).ok_or(UnknownCurrency(record.code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_nine_entries_with_ugx_first() {
        let all: Vec<Currency> = Currency::all().collect();
        assert_eq!(all.len(), 9);
        assert_eq!(all[0], Currency::DEFAULT);
        assert_eq!(Currency::default(), Currency::UGX);
        assert_eq!(all[1].code(), "USD");
        assert_eq!(all[8].code(), "ZAR");
    }

    #[test]
    fn codes_are_unique() {
        let codes: HashSet<&str> = Currency::all().map(|c| c.code()).collect();
        assert_eq!(codes.len(), Currency::all().count());
    }

    #[test]
    fn lookup_by_code() {
        assert_eq!(Currency::from_code("EUR"), Some(Currency::EUR));
        assert_eq!(Currency::EUR.symbol(), "€");
        assert_eq!(Currency::from_code("XYZ"), None);
        assert_eq!(Currency::from_code("usd"), None);
        assert_eq!(Currency::from_code(""), None);
    }

    #[test]
    fn serializes_as_full_record() {
        let json = serde_json::to_string(&Currency::USD).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["code"], "USD");
        assert_eq!(value["symbol"], "$");
        assert_eq!(value["name"], "US Dollar");
    }

    #[test]
    fn deserializing_an_unknown_code_fails() {
        let json = r#"{"code":"XYZ","symbol":"X","name":"Fake"}"#;
        assert!(serde_json::from_str::<Currency>(json).is_err());
        let json = r#"{"code":"KES","symbol":"KSh","name":"Kenyan Shilling"}"#;
        assert_eq!(serde_json::from_str::<Currency>(json).unwrap(), Currency::KES);
    }

    #[test]
    fn option_label_matches_selector_text() {
        assert_eq!(Currency::GBP.option_label(), "£ - British Pound");
    }
}
