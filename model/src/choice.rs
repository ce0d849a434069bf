//! Fixed option sets rendered as select controls and filters.

use strum::IntoEnumIterator;

/// An enum whose variants are offered as options in a select control.
///
/// `value` is the stable form value, `label` the text shown to the user.
pub trait Choice: Sized + Copy + PartialEq + IntoEnumIterator + 'static {
    fn value(&self) -> &'static str;

    fn label(&self) -> &'static str;

    fn from_value(value: &str) -> Option<Self> {
        Self::iter().find(|choice| choice.value() == value)
    }

    /// `(value, label)` pairs in declaration order.
    fn options() -> Vec<(&'static str, &'static str)> {
        Self::iter().map(|choice| (choice.value(), choice.label())).collect()
    }
}

/// Parses a filter value where `"all"` (or anything unrecognised) means no filter.
pub fn filter_value<T: Choice>(value: &str) -> Option<T> {
    if value == ALL {
        None
    } else {
        T::from_value(value)
    }
}

/// The select value meaning "do not filter".
pub const ALL: &str = "all";
