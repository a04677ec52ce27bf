use anyhow::{anyhow, Result};
use isolang::Language;

use crate::errors::ValidationError;

/// Language utilities for ISO language code handling
///
/// STJ accepts ISO 639-1 (2-letter) codes, and ISO 639-3 (3-letter) codes
/// only for languages that have no 639-1 code. The code tables are the
/// static ones compiled into `isolang`, shared read-only by every caller.
/// Language code type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageCodeType {
    /// ISO 639-1 (2-letter) code
    Part1,
    /// ISO 639-3 (3-letter) code without a 639-1 equivalent
    Part3,
}

fn normalize(code: &str) -> String {
    code.trim().to_lowercase()
}

/// Validate a language code against the STJ vocabulary
///
/// A 639-3 code that has a 639-1 equivalent is rejected and the error names
/// the preferred code.
pub fn validate_language_code(code: &str) -> Result<LanguageCodeType, ValidationError> {
    let normalized_code = normalize(code);

    // Check for ISO 639-1 (2-letter) code
    if normalized_code.len() == 2 {
        if Language::from_639_1(&normalized_code).is_some() {
            return Ok(LanguageCodeType::Part1);
        }
    }
    // Check for ISO 639-3 (3-letter) code
    else if normalized_code.len() == 3 {
        if let Some(lang) = Language::from_639_3(&normalized_code) {
            return match lang.to_639_1() {
                Some(part1) => Err(ValidationError::LanguageCode {
                    code: code.to_string(),
                    preferred: Some(part1.to_string()),
                }),
                None => Ok(LanguageCodeType::Part3),
            };
        }
    }

    Err(ValidationError::LanguageCode {
        code: code.to_string(),
        preferred: None,
    })
}

/// Normalize a language code to ISO 639-1 format if possible
/// Falls back to ISO 639-3 if no ISO 639-1 code exists
pub fn preferred_code(code: &str) -> Result<String> {
    let normalized_code = normalize(code);

    if normalized_code.len() == 2 {
        if Language::from_639_1(&normalized_code).is_some() {
            return Ok(normalized_code);
        }
    } else if normalized_code.len() == 3 {
        if let Some(lang) = Language::from_639_3(&normalized_code) {
            return Ok(lang.to_639_1().unwrap_or(lang.to_639_3()).to_string());
        }
    }

    Err(anyhow!("Cannot normalize invalid language code: {}", code))
}

/// Get the English language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized_code = normalize(code);

    let lang = match normalized_code.len() {
        2 => Language::from_639_1(&normalized_code),
        3 => Language::from_639_3(&normalized_code),
        _ => None,
    }
    .ok_or_else(|| anyhow!("Failed to get language from code: {}", code))?;

    Ok(lang.to_name().to_string())
}
