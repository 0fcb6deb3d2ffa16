//! Decimal formatting utilities for the purchase form.

use rust_decimal::Decimal;

use super::num::display_formatted_string;

/// Thousands separators, trailing zeros trimmed.
pub fn display(value: &Decimal) -> String {
    display_formatted_string(&value.normalize().to_string())
}

/// Raw input-field text: normalized digits, empty when unset.
///
/// Never renders `NaN` or a placeholder zero for an unset field.
pub fn input_value(value: Option<&Decimal>) -> String {
    value.map(|v| v.normalize().to_string()).unwrap_or_default()
}
