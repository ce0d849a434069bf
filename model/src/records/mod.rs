//! Mock farm records behind each screen and the figures derived from them.

pub mod customers;
pub mod dashboard;
pub mod farm;
pub mod financials;
pub mod help;
pub mod inventory;
pub mod notifications;
pub mod users;

use chrono::NaiveDate;

/// Builds a seed-data date. Out-of-range parts fall back to the epoch.
pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Case-insensitive substring match; an empty needle matches everything.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
