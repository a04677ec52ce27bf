/*!
 * Root shape resolution.
 *
 * An STJ file is either wrapped (`{"stj": {...}}`) or bare (`{"version": ..,
 * "transcript": ..}`). Both resolve to the same canonical payload object.
 */

use serde_json::{Map, Value};

use crate::errors::ValidationError;

/// Key holding the payload in the wrapped form
pub const ROOT_KEY: &str = "stj";

/// The recognized root shape, borrowing the canonical payload
#[derive(Debug, Clone, Copy)]
pub enum DocumentRoot<'a> {
    Wrapped(&'a Map<String, Value>),
    Bare(&'a Map<String, Value>),
}

impl<'a> DocumentRoot<'a> {
    /// The canonical payload regardless of shape
    pub fn payload(&self) -> &'a Map<String, Value> {
        match *self {
            Self::Wrapped(payload) | Self::Bare(payload) => payload,
        }
    }

    pub fn is_wrapped(&self) -> bool {
        matches!(self, Self::Wrapped(_))
    }
}

/// Resolve a parsed document into its canonical payload
pub fn resolve_root(document: &Value) -> Result<DocumentRoot<'_>, ValidationError> {
    let root = document
        .as_object()
        .ok_or_else(|| ValidationError::Structural("STJ file must be a JSON object".to_string()))?;

    let resolved = match root.get(ROOT_KEY) {
        Some(Value::Object(payload)) => DocumentRoot::Wrapped(payload),
        _ if root.contains_key("version") && root.contains_key("transcript") => {
            DocumentRoot::Bare(root)
        }
        _ => {
            return Err(ValidationError::Structural(
                "missing \"stj\" root object".to_string(),
            ));
        }
    };

    check_payload(resolved.payload())?;
    Ok(resolved)
}

fn check_payload(payload: &Map<String, Value>) -> Result<(), ValidationError> {
    if !payload.contains_key("version") {
        return Err(ValidationError::Structural(
            "missing \"version\" field".to_string(),
        ));
    }

    let transcript = match payload.get("transcript") {
        Some(Value::Object(transcript)) => transcript,
        _ => {
            return Err(ValidationError::Structural(
                "missing transcript section".to_string(),
            ));
        }
    };

    match transcript.get("segments") {
        Some(Value::Array(_)) => Ok(()),
        _ => Err(ValidationError::Structural(
            "transcript must include a segments array".to_string(),
        )),
    }
}
