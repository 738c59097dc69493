//! Number formatting for the display and subtotal.

/// Largest magnitude at which every integer is exactly representable (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

pub const NAN_TEXT: &str = "NaN";
pub const INFINITY_TEXT: &str = "Infinity";
pub const NEG_INFINITY_TEXT: &str = "-Infinity";

/// Format a value for display.
///
/// Whole numbers in the safe integer range render without a decimal point
/// or grouping. Non-finite values render as fixed sentinels.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return NAN_TEXT.to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            INFINITY_TEXT
        } else {
            NEG_INFINITY_TEXT
        };
        return text.to_string();
    }

    if value == value.trunc() && value.abs() < MAX_SAFE_INTEGER {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
