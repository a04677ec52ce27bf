/*!
 * Time value validation.
 *
 * STJ times are JSON numbers in seconds, restricted to:
 * - non-negative values no greater than 999999.999
 * - at most 3 decimal places
 * - plain decimal notation (no exponent)
 */

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::document::Timestamp;
use crate::errors::{TimingFormatReason, ValidationError};

/// Largest representable time value in seconds
pub const MAX_TIME_VALUE: f64 = 999_999.999;

/// Maximum number of fractional digits
pub const MAX_DECIMAL_PLACES: usize = 3;

/// Plain decimal rendering, capturing the fractional digits
static DECIMAL_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?\d+(?:\.(\d+))?$").expect("Invalid decimal number regex")
});

/// Validate a single time value; `context` names it in the diagnostic
/// (e.g. "segment 0, word 2 start time").
pub fn validate_time_value(value: Option<&Value>, context: &str) -> Result<Timestamp, ValidationError> {
    let fail = |reason| ValidationError::TimingFormat {
        context: context.to_string(),
        reason,
    };

    let number = match value {
        Some(Value::Number(n)) => n,
        _ => return Err(fail(TimingFormatReason::NotNumeric)),
    };
    let seconds = number
        .as_f64()
        .ok_or_else(|| fail(TimingFormatReason::NotNumeric))?;

    if seconds < 0.0 {
        return Err(fail(TimingFormatReason::Negative));
    }
    if seconds > MAX_TIME_VALUE {
        return Err(fail(TimingFormatReason::TooLarge));
    }

    let repr = number.to_string();
    let caps = DECIMAL_NUMBER_REGEX
        .captures(&repr)
        .ok_or_else(|| fail(TimingFormatReason::Exponential))?;

    let decimals = caps.get(1).map_or(0, |m| m.as_str().len());
    if decimals > MAX_DECIMAL_PLACES {
        return Err(fail(TimingFormatReason::TooManyDecimals));
    }

    Ok(Timestamp::new(seconds, repr))
}
