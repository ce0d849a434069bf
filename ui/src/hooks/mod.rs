pub mod use_currency;
pub mod use_toast;
