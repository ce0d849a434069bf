//! Formats monetary amounts for display.

use num_traits::ToPrimitive;

use crate::currency::Currency;

/// Most fraction digits kept when grouping a number for display.
const MAX_FRACTION_DIGITS: usize = 3;

/// Formats an amount as `"{symbol} {grouped amount}"`, e.g. `"$ 1,250"`.
///
/// Total over all numeric inputs. No currency-specific rounding is applied
/// beyond the default grouping of [`group_digits`].
///
/// # Examples
/// ```
/// use model::currency::Currency;
/// use model::money::format_amount;
///
/// assert_eq!(format_amount(1250, Currency::USD), "$ 1,250");
/// assert_eq!(format_amount(-5, Currency::EUR), "€ -5");
/// ```
pub fn format_amount<T: ToPrimitive>(amount: T, currency: Currency) -> String {
    let value = amount.to_f64().unwrap_or(f64::NAN);
    format!("{} {}", currency.symbol(), group_digits(value))
}

/// Renders a number with comma thousands separators and up to three
/// fraction digits, trailing zeros dropped (e.g. `1234567.5` → `"1,234,567.5"`).
pub fn group_digits(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞" } else { "∞" }.to_string();
    }

    // Round half away from zero before formatting, which would round ties to even.
    let scale = 10f64.powi(MAX_FRACTION_DIGITS as i32);
    let scaled = value.abs() * scale;
    // Scaling only overflows for values with no fraction left to round.
    let rounded = if scaled.is_finite() { scaled.round() / scale } else { value.abs() };
    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, rounded);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_digits(0.0), "0");
        assert_eq!(group_digits(999.0), "999");
        assert_eq!(group_digits(1000.0), "1,000");
        assert_eq!(group_digits(5280.0), "5,280");
        assert_eq!(group_digits(1234567.0), "1,234,567");
        assert_eq!(group_digits(-24780.0), "-24,780");
    }

    #[test]
    fn keeps_up_to_three_fraction_digits() {
        assert_eq!(group_digits(1250.5), "1,250.5");
        assert_eq!(group_digits(0.25), "0.25");
        assert_eq!(group_digits(1.23456), "1.235");
        assert_eq!(group_digits(2.0001), "2");
        assert_eq!(group_digits(-0.0001), "0");
        assert_eq!(group_digits(-0.0), "0");
        // Exact ties round away from zero.
        assert_eq!(group_digits(1.0625), "1.063");
        assert_eq!(group_digits(-1.0625), "-1.063");
        assert_eq!(group_digits(0.0625), "0.063");
        let huge = group_digits(f64::MAX);
        assert!(huge.starts_with("179,769,313"));
        assert!(!huge.contains('.'));
    }

    #[test]
    fn non_finite_values_do_not_panic() {
        assert_eq!(group_digits(f64::NAN), "NaN");
        assert_eq!(group_digits(f64::INFINITY), "∞");
        assert_eq!(group_digits(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn formats_with_symbol_prefix() {
        assert_eq!(format_amount(1250, Currency::USD), "$ 1,250");
        assert_eq!(format_amount(1250.0, Currency::EUR), "€ 1,250");
        assert_eq!(format_amount(3450u32, Currency::UGX), "UGX 3,450");
    }

    #[test]
    fn zero_and_negative_amounts_keep_the_symbol() {
        for currency in Currency::all() {
            let zero = format_amount(0, currency);
            let negative = format_amount(-5, currency);
            assert!(zero.starts_with(currency.symbol()), "{zero}");
            assert!(negative.starts_with(currency.symbol()), "{negative}");
            assert_eq!(negative, format!("{} -5", currency.symbol()));
        }
    }
}
