/*!
 * Tests for language utility functions
 */

use anyhow::Result;
use stjtool::errors::ValidationError;
use stjtool::language_utils::{get_language_name, preferred_code, validate_language_code, LanguageCodeType};

/// Test validation of language codes
#[test]
fn test_validate_language_code_withValidCodes_shouldReturnCorrectType() {
    // ISO 639-1 tests
    assert_eq!(validate_language_code("en"), Ok(LanguageCodeType::Part1));
    assert_eq!(validate_language_code("ja"), Ok(LanguageCodeType::Part1));

    // ISO 639-3 codes without a 639-1 counterpart
    assert_eq!(validate_language_code("yue"), Ok(LanguageCodeType::Part3));
    assert_eq!(validate_language_code("haw"), Ok(LanguageCodeType::Part3));

    // Whitespace and case tests
    assert_eq!(validate_language_code(" EN "), Ok(LanguageCodeType::Part1));
    assert_eq!(validate_language_code("YUE"), Ok(LanguageCodeType::Part3));

    // Invalid codes
    assert!(validate_language_code("xyz").is_err());
    assert!(validate_language_code("123").is_err());
    assert!(validate_language_code("e").is_err());
}

/// Every 639-3 code with a 639-1 counterpart is refused in favor of the short code
#[test]
fn test_validate_language_code_withMappedPart3Codes_shouldNamePreferredCode() {
    for (long, short) in [("fra", "fr"), ("deu", "de"), ("spa", "es"), ("jpn", "ja")] {
        match validate_language_code(long) {
            Err(ValidationError::LanguageCode { preferred, .. }) => {
                assert_eq!(preferred.as_deref(), Some(short), "{}", long)
            }
            other => panic!("expected a preferred-code error for {}, got {:?}", long, other),
        }
    }
}

/// Test normalization to the preferred code
#[test]
fn test_preferred_code_withValidCodes_shouldNormalizeCorrectly() -> Result<()> {
    assert_eq!(preferred_code("eng")?, "en");
    assert_eq!(preferred_code(" Ja ")?, "ja");
    assert_eq!(preferred_code("haw")?, "haw");
    assert!(preferred_code("not-a-code").is_err());
    Ok(())
}

/// Test retrieval of language names
#[test]
fn test_get_language_name_withValidCodes_shouldReturnName() -> Result<()> {
    assert_eq!(get_language_name("fr")?, "French");
    assert_eq!(get_language_name("spa")?, "Spanish");
    assert!(get_language_name("").is_err());
    Ok(())
}
