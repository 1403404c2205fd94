//! Display formatting for prices.

use rust_decimal::Decimal;

/// Group the integer part of `value` in thousands.
///
/// Cents are rounded to two places. A zero fractional part is dropped;
/// otherwise both places are kept, e.g. `1299.5` renders as `"1,299.50"`.
pub fn format_thousands(value: Decimal) -> String {
    let mut rounded = value.round_dp(2);
    if rounded.fract().is_zero() {
        rounded.rescale(0);
    } else {
        rounded.rescale(2);
    }
    let raw = rounded.abs().to_string();
    let (integer, fraction) = match raw.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (raw.as_str(), None),
    };

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (index, digit) in digits.iter().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

/// Dollar-prefixed price, e.g. `"$1,299"`.
pub fn format_price(value: Decimal) -> String {
    format!("${}", format_thousands(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_thousands(Decimal::new(0, 0)), "0");
        assert_eq!(format_thousands(Decimal::new(999, 0)), "999");
        assert_eq!(format_thousands(Decimal::new(1000, 0)), "1,000");
        assert_eq!(format_thousands(Decimal::new(1234567, 0)), "1,234,567");
    }

    #[test]
    fn keeps_cents_only_when_non_zero() {
        assert_eq!(format_thousands(Decimal::new(129950, 2)), "1,299.50");
        assert_eq!(format_thousands(Decimal::new(12995, 1)), "1,299.50");
        assert_eq!(format_thousands(Decimal::new(1299999, 3)), "1,300");
        assert_eq!(format_thousands(Decimal::new(129900, 2)), "1,299");
        assert_eq!(format_thousands(Decimal::new(-250000, 2)), "-2,500");
    }

    #[test]
    fn price_has_dollar_prefix() {
        assert_eq!(format_price(Decimal::new(49, 0)), "$49");
        assert_eq!(format_price(Decimal::new(995, 1)), "$99.50");
    }
}
