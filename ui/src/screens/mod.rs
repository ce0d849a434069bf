pub mod admin;
pub mod customers;
pub mod dashboard;
pub mod financials;
pub mod forgot_password;
pub mod help;
pub mod inventory;
pub mod login;
pub mod not_found;
pub mod notifications;
pub mod profile;
pub mod settings;
