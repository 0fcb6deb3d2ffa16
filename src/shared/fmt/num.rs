//! Number formatting utilities for human-readable display.
//!
//! Handles f64 values as they arrive from the market-data API: thousands
//! separators, automatic decimal-place detection and USD prices.
//! For `Decimal` formatting (purchase form amounts), use the `decimal` sibling module.

/// Trims trailing zeros, adds thousands separators.
pub fn display_formatted_string(formatted: &str) -> String {
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted
    };

    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed),
    };

    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let grouped = group_thousands(integer);
    match fraction {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn get_decimal_places(value: f64) -> usize {
    let abs_value = value.abs();

    if abs_value >= 1.0 || abs_value == 0.0 {
        return 2;
    }

    let exponent = abs_value.log10().floor().abs() as usize;
    (exponent + 2).min(8)
}

/// Format an f64 for display with auto-detected decimal places.
pub fn display(amount: f64) -> String {
    display_with_decimals(amount, get_decimal_places(amount))
}

/// Format an f64 for display with explicit decimal places.
pub fn display_with_decimals(amount: f64, decimals: usize) -> String {
    let formatted = format!("{:.1$}", amount, decimals);
    display_formatted_string(&formatted)
}

/// Thousands separators, keeping every significant decimal (supplies, quantities).
pub fn with_commas(amount: f64) -> String {
    display_formatted_string(&amount.to_string())
}

/// USD price: `$` prefix, two decimals above one dollar, more below.
pub fn usd(amount: f64) -> String {
    let body = display(amount.abs());
    if amount < 0.0 {
        format!("-${body}")
    } else {
        format!("${body}")
    }
}

/// Percentage with two decimals, e.g. `-2.35%`.
pub fn percentage(value: f64) -> String {
    format!("{:.2}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formatted_string_thousands_separator() {
        assert_eq!(display_formatted_string("0"), "0");
        assert_eq!(display_formatted_string("123"), "123");
        assert_eq!(display_formatted_string("1000"), "1,000");
        assert_eq!(display_formatted_string("123456"), "123,456");
        assert_eq!(display_formatted_string("1234567890"), "1,234,567,890");
    }

    #[test]
    fn test_display_formatted_string_trailing_zeros_trimmed() {
        assert_eq!(display_formatted_string("1.50"), "1.5");
        assert_eq!(display_formatted_string("1.00"), "1");
        assert_eq!(display_formatted_string("1000.00"), "1,000");
    }

    #[test]
    fn test_display_formatted_string_negative() {
        assert_eq!(display_formatted_string("-1"), "-1");
        assert_eq!(display_formatted_string("-100"), "-100");
        assert_eq!(display_formatted_string("-1234.56"), "-1,234.56");
    }

    #[test]
    fn test_display_f64() {
        assert_eq!(display(1234.56), "1,234.56");
        assert_eq!(display(15.456), "15.46");
        assert_eq!(display(0.0123), "0.0123");
        assert_eq!(display(0.0), "0");
    }

    #[test]
    fn test_with_commas_keeps_decimals() {
        assert_eq!(with_commas(19_675_987.0), "19,675,987");
        assert_eq!(with_commas(1234.56789), "1,234.56789");
    }

    #[test]
    fn test_usd() {
        assert_eq!(usd(67_123.456), "$67,123.46");
        assert_eq!(usd(0.5), "$0.5");
        assert_eq!(usd(-12.5), "-$12.5");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(-2.3456), "-2.35%");
        assert_eq!(percentage(4.0), "4.00%");
    }
}
