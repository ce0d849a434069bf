//! Shared building blocks used across screens.
pub mod amount;
pub mod bar_chart;
pub mod currency_chooser;
pub mod empty_state;
pub mod global_currency_selector;
pub mod metric_card;
pub mod pico;
pub mod schema_form;
pub mod sortable_header;
pub mod toast;
