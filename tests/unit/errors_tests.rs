/*!
 * Tests for error types and conversions
 */

use serde_json::json;
use std::path::PathBuf;
use stjtool::document::Timestamp;
use stjtool::errors::{
    AppError, ErrorKind, RenderError, SchemaIssue, SegmentLocation, TimingFormatReason, ValidationError,
};

fn ts(value: f64) -> Timestamp {
    Timestamp::from_value(&json!(value)).unwrap()
}

#[test]
fn test_timingFormat_shouldNameContextAndReason() {
    let error = ValidationError::TimingFormat {
        context: "segment 2 end time".to_string(),
        reason: TimingFormatReason::TooManyDecimals,
    };

    assert_eq!(
        error.to_string(),
        "Invalid time value in segment 2 end time: maximum 3 decimal places allowed"
    );
    assert_eq!(error.kind(), ErrorKind::TimingFormat);
}

#[test]
fn test_timingFormatReasons_shouldBeDistinguishable() {
    let reasons = [
        TimingFormatReason::NotNumeric,
        TimingFormatReason::Negative,
        TimingFormatReason::TooLarge,
        TimingFormatReason::Exponential,
        TimingFormatReason::TooManyDecimals,
    ];

    let messages: std::collections::HashSet<String> = reasons.iter().map(|r| r.to_string()).collect();

    assert_eq!(messages.len(), reasons.len());
}

#[test]
fn test_segmentOverlap_shouldCiteOffendingTime() {
    let error = ValidationError::SegmentOverlap { start: ts(1.0) };

    assert_eq!(error.to_string(), "Segments overlap or are out of order at time 1.0");
    assert_eq!(error.kind(), ErrorKind::Overlap);
}

#[test]
fn test_invalidReference_withStartTime_shouldCiteStart() {
    let error = ValidationError::InvalidReference {
        field: "speaker_id",
        id: "X".to_string(),
        location: SegmentLocation { index: 0, start: Some(ts(2.5)) },
    };

    assert_eq!(error.to_string(), "Invalid speaker_id 'X' in segment starting at 2.5");
}

#[test]
fn test_invalidReference_withoutStartTime_shouldCiteIndex() {
    let error = ValidationError::InvalidReference {
        field: "style_id",
        id: "Bold".to_string(),
        location: SegmentLocation { index: 4, start: None },
    };

    assert_eq!(error.to_string(), "Invalid style_id 'Bold' in segment 4");
    assert_eq!(error.kind(), ErrorKind::Reference);
}

#[test]
fn test_languageCode_withPreferredCode_shouldSuggestIt() {
    let error = ValidationError::LanguageCode {
        code: "eng".to_string(),
        preferred: Some("en".to_string()),
    };

    assert_eq!(error.to_string(), "Invalid language code: eng (use ISO 639-1 code 'en' instead)");
}

#[test]
fn test_languageCode_withoutPreferredCode_shouldBeGeneric() {
    let error = ValidationError::LanguageCode {
        code: "xx".to_string(),
        preferred: None,
    };

    assert_eq!(error.to_string(), "Invalid language code: xx");
}

#[test]
fn test_schemaViolation_shouldJoinIssues() {
    let error = ValidationError::SchemaViolation(vec![
        SchemaIssue { path: "root".to_string(), message: "\"stj\" is a required property".to_string() },
        SchemaIssue { path: "/stj/version".to_string(), message: "6 is not of type \"string\"".to_string() },
    ]);

    assert_eq!(
        error.to_string(),
        "Schema validation errors: root: \"stj\" is a required property; /stj/version: 6 is not of type \"string\""
    );
}

#[test]
fn test_errorKind_shouldGroupRelatedVariants() {
    assert_eq!(
        ValidationError::WordOverlap { segment: 0, word: 1 }.kind(),
        ErrorKind::Overlap
    );
    assert_eq!(
        ValidationError::ZeroDurationWithWords { segment: 0 }.kind(),
        ErrorKind::ZeroDuration
    );
    assert_eq!(
        ValidationError::ConfidenceNotNumeric { subject: "Segment", location: "segment 0".to_string() }.kind(),
        ErrorKind::ConfidenceRange
    );
    assert_eq!(
        ValidationError::WordOutsideSegment { segment: 0, word: 0 }.kind(),
        ErrorKind::TimeRange
    );
}

#[test]
fn test_appError_fromValidationError_shouldPrefixMessage() {
    let error: AppError = ValidationError::MissingTiming { segment: 1 }.into();

    assert!(error.to_string().starts_with("Validation failed: Segment 1 is missing start/end times"));
}

#[test]
fn test_appError_notFound_shouldNamePath() {
    let error = AppError::NotFound(PathBuf::from("missing.stj.json"));

    assert_eq!(error.to_string(), "File not found: missing.stj.json");
}

#[test]
fn test_appError_fromSerdeError_shouldReportInvalidJson() {
    let parse_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();

    let error: AppError = parse_error.into();

    assert!(error.to_string().starts_with("Invalid JSON - "));
}

#[test]
fn test_appError_fromRenderError_shouldWrap() {
    let error: AppError = RenderError::MissingTiming { segment: 3 }.into();

    assert!(matches!(error, AppError::Render(_)));
    assert!(error.to_string().contains("Segment 3"));
}
