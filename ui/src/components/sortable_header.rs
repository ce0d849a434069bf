//! Click-to-sort table headers.

use std::cmp::Ordering;

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Which column a table is sorted by, keyed by the column's name.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SortState {
    pub column: &'static str,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(column: &'static str, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Clicking the active column flips its direction; any other column
    /// becomes active in ascending order.
    pub fn toggle(&mut self, column: &'static str) {
        if self.column == column {
            self.direction = match self.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };
        } else {
            *self = Self::new(column, SortDirection::Ascending);
        }
    }
}

#[component]
pub fn SortableHeader(
    title: &'static str,
    column: &'static str,
    mut sort: Signal<SortState>,
    style: Option<&'static str>,
) -> Element {
    let state = sort();
    let arrow = if state.column == column {
        state.direction.arrow()
    } else {
        "\u{00A0}"
    };

    rsx! {
        th {
            scope: "col",
            style: format!("cursor: pointer; white-space: nowrap; {}", style.unwrap_or("")),
            onclick: move |_| sort.with_mut(|s| s.toggle(column)),
            "{title}"
            span {
                style: "display: inline-block; width: 1.2em; text-align: right;",
                "{arrow}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_the_active_column_flips_direction() {
        let mut state = SortState::new("name", SortDirection::Ascending);
        state.toggle("name");
        assert_eq!(state.direction, SortDirection::Descending);
        state.toggle("name");
        assert_eq!(state.direction, SortDirection::Ascending);
    }

    #[test]
    fn a_new_column_starts_ascending() {
        let mut state = SortState::new("name", SortDirection::Descending);
        state.toggle("total");
        assert_eq!(state, SortState::new("total", SortDirection::Ascending));
    }

    #[test]
    fn descending_reverses_the_ordering() {
        assert_eq!(SortDirection::Descending.apply(1.cmp(&2)), Ordering::Greater);
        assert_eq!(SortDirection::Ascending.apply(1.cmp(&2)), Ordering::Less);
    }
}
