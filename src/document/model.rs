/*!
 * Typed view of an STJ payload.
 *
 * Fields whose validity is itself checked by the engine (times, confidence,
 * word_timing_mode) are kept loose here so that a bad value turns into a
 * precise diagnostic instead of a deserialization failure.
 */

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::ValidationError;

/// Root STJ payload (the object under `stj`, or the bare root)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StjDocument {
    pub version: String,

    #[serde(default)]
    pub metadata: Option<Metadata>,

    pub transcript: Transcript,
}

impl StjDocument {
    /// Map a resolved payload onto the typed model
    pub fn from_payload(payload: &Map<String, Value>) -> Result<Self, ValidationError> {
        serde_json::from_value(Value::Object(payload.clone()))
            .map_err(|e| ValidationError::Structural(format!("malformed payload: {}", e)))
    }

    /// Metadata transcription languages, or an empty slice
    pub fn metadata_languages(&self) -> &[String] {
        self.metadata
            .as_ref()
            .map(|m| m.languages.as_slice())
            .unwrap_or(&[])
    }

    /// Metadata source languages, or an empty slice
    pub fn source_languages(&self) -> &[String] {
        self.metadata
            .as_ref()
            .and_then(|m| m.source.as_ref())
            .map(|s| s.languages.as_slice())
            .unwrap_or(&[])
    }

    /// Look up a speaker's display name, falling back to its id
    pub fn speaker_name<'a>(&'a self, speaker_id: &'a str) -> &'a str {
        self.transcript
            .speakers
            .iter()
            .find(|s| s.id == speaker_id)
            .and_then(|s| s.name.as_deref())
            .unwrap_or(speaker_id)
    }
}

/// Optional document metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub languages: Vec<String>,

    #[serde(default)]
    pub source: Option<Source>,
}

/// Information about the transcribed source media
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub uri: Option<String>,

    #[serde(default)]
    pub duration: Option<f64>,

    #[serde(default)]
    pub languages: Vec<String>,
}

/// Transcript body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    #[serde(default)]
    pub speakers: Vec<Speaker>,

    #[serde(default)]
    pub styles: Vec<Style>,

    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Speaker {
    pub id: String,

    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Style {
    pub id: String,
}

/// A time-bounded span of transcript text
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Segment {
    #[serde(default)]
    pub start: Option<Value>,

    #[serde(default)]
    pub end: Option<Value>,

    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub speaker_id: Option<String>,

    #[serde(default)]
    pub style_id: Option<String>,

    #[serde(default)]
    pub confidence: Option<Value>,

    #[serde(default)]
    pub is_zero_duration: Option<bool>,

    #[serde(default)]
    pub word_timing_mode: Option<String>,

    #[serde(default)]
    pub words: Option<Vec<Word>>,
}

impl Segment {
    /// Whether the segment exposes either bound
    pub fn has_any_timing(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    /// Start time as a number, if present and numeric
    pub fn start_seconds(&self) -> Option<f64> {
        self.start.as_ref().and_then(Value::as_f64)
    }

    /// End time as a number, if present and numeric
    pub fn end_seconds(&self) -> Option<f64> {
        self.end.as_ref().and_then(Value::as_f64)
    }

    /// Start time with its original rendering, if present and numeric
    pub fn start_timestamp(&self) -> Option<Timestamp> {
        self.start.as_ref().and_then(Timestamp::from_value)
    }
}

/// A single timed word
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Word {
    #[serde(default)]
    pub start: Option<Value>,

    #[serde(default)]
    pub end: Option<Value>,

    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub confidence: Option<Value>,

    #[serde(default)]
    pub is_zero_duration: Option<bool>,
}

/// A validated point in time, in seconds
///
/// Keeps the number's textual rendering so diagnostics cite the value the
/// way the document wrote it (`1` rather than `1.0`).
#[derive(Debug, Clone, PartialEq)]
pub struct Timestamp {
    seconds: f64,
    repr: String,
}

impl Timestamp {
    pub(crate) fn new(seconds: f64, repr: String) -> Self {
        Self { seconds, repr }
    }

    /// Build from a JSON number without any range or format checks
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().map(|s| Self::new(s, n.to_string())),
            _ => None,
        }
    }

    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Whole milliseconds, rounded to the nearest
    pub fn as_millis(&self) -> u64 {
        (self.seconds * 1000.0).round() as u64
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr)
    }
}
