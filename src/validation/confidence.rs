use serde_json::Value;

use crate::errors::ValidationError;

/// Check an optional confidence score lies in [0.0, 1.0]
pub fn check_confidence(
    value: Option<&Value>,
    subject: &'static str,
    location: impl FnOnce() -> String,
) -> Result<(), ValidationError> {
    let Some(value) = value else {
        return Ok(());
    };

    match value.as_f64() {
        Some(score) if (0.0..=1.0).contains(&score) => Ok(()),
        Some(_) => Err(ValidationError::ConfidenceRange {
            subject,
            value: value.to_string(),
            location: location(),
        }),
        None => Err(ValidationError::ConfidenceNotNumeric {
            subject,
            location: location(),
        }),
    }
}
