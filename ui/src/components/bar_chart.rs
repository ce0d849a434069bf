//! Horizontal bar charts drawn with plain CSS widths.

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Debug)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    /// Text printed at the end of the bar.
    pub caption: String,
    /// Draws the bar in the muted color, e.g. for values below target.
    pub muted: bool,
}

impl Bar {
    pub fn new(label: impl Into<String>, value: f64, caption: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            caption: caption.into(),
            muted: false,
        }
    }

    pub fn muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }
}

/// Bar width as a percentage of the widest bar, clamped to `0..=100`.
pub fn bar_width(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() {
        0.0
    } else {
        (value / max * 100.0).clamp(0.0, 100.0)
    }
}

#[component]
pub fn BarChart(bars: Vec<Bar>, #[props(into, default)] empty_message: String) -> Element {
    let max = bars.iter().map(|b| b.value).fold(0.0, f64::max);

    if bars.is_empty() {
        return rsx! {
            p { class: "muted", "{empty_message}" }
        };
    }

    rsx! {
        div {
            class: "bar-chart",
            for (index, bar) in bars.into_iter().enumerate() {
                div {
                    key: "{index}",
                    class: "bar-row",
                    span { class: "bar-label", "{bar.label}" }
                    div {
                        class: "bar-track",
                        div {
                            class: if bar.muted { "bar-fill muted" } else { "bar-fill" },
                            style: format!("width: {:.1}%;", bar_width(bar.value, max)),
                        }
                    }
                    span { class: "bar-caption", "{bar.caption}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_scale_to_the_largest_bar() {
        assert_eq!(bar_width(85.0, 170.0), 50.0);
        assert_eq!(bar_width(170.0, 170.0), 100.0);
    }

    #[test]
    fn degenerate_widths_are_zero() {
        assert_eq!(bar_width(10.0, 0.0), 0.0);
        assert_eq!(bar_width(f64::NAN, 10.0), 0.0);
        assert_eq!(bar_width(-5.0, 10.0), 0.0);
    }
}
