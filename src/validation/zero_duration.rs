/*!
 * Zero-duration policy: an element whose start equals its end must say so
 * with `is_zero_duration: true`, and only such elements may carry the flag.
 */

use crate::document::Timestamp;
use crate::errors::ValidationError;

/// Check flag/equality consistency and report whether the span is zero-length.
///
/// Equality is exact; `subject` reads like "segment 3" or
/// "word in segment 0, word 1".
#[allow(clippy::float_cmp)]
pub fn check_zero_duration(
    start: &Timestamp,
    end: &Timestamp,
    is_zero_duration: Option<bool>,
    subject: &str,
) -> Result<bool, ValidationError> {
    let flagged = is_zero_duration.unwrap_or(false);
    let zero = start.seconds() == end.seconds();

    if zero && !flagged {
        return Err(ValidationError::ZeroDurationFlagMissing {
            subject: subject.to_string(),
        });
    }
    if !zero && flagged {
        return Err(ValidationError::ZeroDurationFlagUnexpected {
            subject: subject.to_string(),
        });
    }

    Ok(zero)
}
