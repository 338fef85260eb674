//! Rounding and display helpers shared by the planning calculations.

/// Rounds to one decimal place (half away from zero).
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Formats a percentage figure without a trailing `.0` for whole numbers.
///
/// `20.0` renders as `"20"`, `12.5` as `"12.5"`.
pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Formats a currency amount with thousands separators and no cents.
///
/// `155000.4` renders as `"$155,000"`, `-1234567.0` as `"-$1,234,567"`.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{}", rounded.abs() as u64);

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_tenth_rounds_half_away_from_zero() {
        assert_eq!(round_to_tenth(2.25), 2.3);
        assert_eq!(round_to_tenth(13.5), 13.5);
        assert_eq!(round_to_tenth(97.0), 97.0);
        assert_eq!(round_to_tenth(-1.25), -1.3);
    }

    #[test]
    fn format_percent_drops_trailing_zero() {
        assert_eq!(format_percent(20.0), "20");
        assert_eq!(format_percent(12.5), "12.5");
        assert_eq!(format_percent(0.0), "0");
    }

    #[test]
    fn format_currency_groups_thousands() {
        assert_eq!(format_currency(155000.0), "$155,000");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(1234567.4), "$1,234,567");
        assert_eq!(format_currency(-2500.0), "-$2,500");
        assert_eq!(format_currency(0.0), "$0");
    }
}
