/*!
 * Error types for stjtool.
 *
 * Validation failures are plain values: every validator returns the first
 * violation it finds as a `ValidationError`, and the message rendered by its
 * `Display` impl is the diagnostic surfaced to the caller.
 */

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::document::Timestamp;

/// Coarse classification of validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Root shape unrecognized or payload not mappable
    Structural,
    /// External JSON-Schema non-conformance
    SchemaViolation,
    /// Malformed timestamp
    TimingFormat,
    /// start > end, or a word outside its segment
    TimeRange,
    /// Element starts before the previous element ends
    Overlap,
    /// Zero-duration flag inconsistent with the timing
    ZeroDuration,
    /// Timing present on some segments but not all
    MissingTiming,
    /// Word concatenation differs from segment text
    TextMismatch,
    /// Word without text
    WordText,
    /// Illegal or inconsistent word_timing_mode
    WordTimingMode,
    /// Dangling speaker or style id
    Reference,
    /// Language code outside the vocabulary
    LanguageCode,
    /// Confidence non-numeric or outside [0, 1]
    ConfidenceRange,
}

/// Why a time value was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingFormatReason {
    NotNumeric,
    Negative,
    TooLarge,
    Exponential,
    TooManyDecimals,
}

impl fmt::Display for TimingFormatReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotNumeric => write!(f, "must be a number"),
            Self::Negative => write!(f, "negative values not allowed"),
            Self::TooLarge => write!(f, "exceeds maximum allowed value of 999999.999"),
            Self::Exponential => write!(f, "scientific notation not allowed"),
            Self::TooManyDecimals => write!(f, "maximum 3 decimal places allowed"),
        }
    }
}

/// A single violation reported by the external schema validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaIssue {
    /// JSON pointer of the offending instance ("root" for the document itself)
    pub path: String,
    /// Validator message
    pub message: String,
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

fn join_issues(issues: &[SchemaIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

fn preferred_hint(preferred: &Option<String>) -> String {
    match preferred {
        Some(code) => format!(" (use ISO 639-1 code '{}' instead)", code),
        None => String::new(),
    }
}

/// Where a segment lives, for diagnostics that cite the segment's start time
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentLocation {
    pub index: usize,
    pub start: Option<Timestamp>,
}

impl fmt::Display for SegmentLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.start {
            Some(start) => write!(f, "segment starting at {}", start),
            None => write!(f, "segment {}", self.index),
        }
    }
}

/// Errors produced by the validation engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid STJ document: {0}")]
    Structural(String),

    #[error("Schema validation errors: {}", join_issues(.0))]
    SchemaViolation(Vec<SchemaIssue>),

    #[error("Invalid time value in {context}: {reason}")]
    TimingFormat {
        context: String,
        reason: TimingFormatReason,
    },

    #[error("Segment start time {start} is greater than end time {end} in segment {segment}")]
    SegmentTimeRange {
        segment: usize,
        start: Timestamp,
        end: Timestamp,
    },

    #[error("Word start time {start} is greater than end time {end} in segment {segment}, word {word}")]
    WordTimeRange {
        segment: usize,
        word: usize,
        start: Timestamp,
        end: Timestamp,
    },

    #[error("Word timings are outside segment timings in segment {segment}, word {word}")]
    WordOutsideSegment { segment: usize, word: usize },

    #[error("Segments overlap or are out of order at time {start}")]
    SegmentOverlap { start: Timestamp },

    #[error("Words overlap or are out of order in segment {segment}, word {word}")]
    WordOverlap { segment: usize, word: usize },

    #[error("Zero-duration {subject} must have 'is_zero_duration' set to true")]
    ZeroDurationFlagMissing { subject: String },

    #[error("Non-zero-duration {subject} must not have 'is_zero_duration' set to true")]
    ZeroDurationFlagUnexpected { subject: String },

    #[error("Zero-duration segment {segment} must not have 'words' or 'word_timing_mode'")]
    ZeroDurationWithWords { segment: usize },

    #[error("Segment {segment} is missing start/end times; all segments must have timing when any segment has timing")]
    MissingTiming { segment: usize },

    #[error("Concatenated words do not match segment text in segment {segment}")]
    TextMismatch { segment: usize },

    #[error("Word text is required in segment {segment}, word {word}")]
    MissingWordText { segment: usize, word: usize },

    #[error("Invalid 'word_timing_mode' '{mode}' in segment {segment}")]
    InvalidWordTimingMode { segment: usize, mode: String },

    #[error("'word_timing_mode' is 'none' but words are provided in segment {segment}")]
    WordsWithoutTimingMode { segment: usize },

    #[error("Invalid {field} '{id}' in {location}")]
    InvalidReference {
        field: &'static str,
        id: String,
        location: SegmentLocation,
    },

    #[error("Invalid language code: {code}{}", preferred_hint(.preferred))]
    LanguageCode {
        code: String,
        preferred: Option<String>,
    },

    #[error("{subject} confidence {value} out of range [0.0, 1.0] in {location}")]
    ConfidenceRange {
        subject: &'static str,
        value: String,
        location: String,
    },

    #[error("{subject} confidence must be a number in {location}")]
    ConfidenceNotNumeric {
        subject: &'static str,
        location: String,
    },
}

impl ValidationError {
    /// Taxonomy bucket of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Structural(_) => ErrorKind::Structural,
            Self::SchemaViolation(_) => ErrorKind::SchemaViolation,
            Self::TimingFormat { .. } => ErrorKind::TimingFormat,
            Self::SegmentTimeRange { .. }
            | Self::WordTimeRange { .. }
            | Self::WordOutsideSegment { .. } => ErrorKind::TimeRange,
            Self::SegmentOverlap { .. } | Self::WordOverlap { .. } => ErrorKind::Overlap,
            Self::ZeroDurationFlagMissing { .. }
            | Self::ZeroDurationFlagUnexpected { .. }
            | Self::ZeroDurationWithWords { .. } => ErrorKind::ZeroDuration,
            Self::MissingTiming { .. } => ErrorKind::MissingTiming,
            Self::TextMismatch { .. } => ErrorKind::TextMismatch,
            Self::MissingWordText { .. } => ErrorKind::WordText,
            Self::InvalidWordTimingMode { .. } | Self::WordsWithoutTimingMode { .. } => {
                ErrorKind::WordTimingMode
            }
            Self::InvalidReference { .. } => ErrorKind::Reference,
            Self::LanguageCode { .. } => ErrorKind::LanguageCode,
            Self::ConfidenceRange { .. } | Self::ConfidenceNotNumeric { .. } => {
                ErrorKind::ConfidenceRange
            }
        }
    }
}

/// Errors that can occur while rendering a validated document
#[derive(Error, Debug)]
pub enum RenderError {
    /// A cue cannot be produced for a segment without timing
    #[error("Segment {segment} has no start/end times and cannot be rendered")]
    MissingTiming { segment: usize },

    /// Writing the output failed
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// The input file does not exist
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Input is not parseable JSON
    #[error("Invalid JSON - {0}")]
    Json(String),

    /// The document failed validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The schema could not be compiled
    #[error("Schema error: {0}")]
    Schema(String),

    /// Error from rendering
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error.to_string())
    }
}
