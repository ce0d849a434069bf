//! User preferences: the persisted currency choice and the session-only settings.

pub mod currency_store;
pub mod storage;
pub mod user_prefs;
