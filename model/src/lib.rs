//! Domain model of the poultry farm dashboard: the currency catalog and
//! preference store, mock farm records, form schemas and the login stub.

pub mod auth;
pub mod choice;
pub mod currency;
pub mod forms;
pub mod money;
pub mod prefs;
pub mod records;
