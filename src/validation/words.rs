/*!
 * Word-level validation for a single segment.
 *
 * Words must be timed, ordered, non-overlapping and contained in their
 * segment. In `complete` mode the words must also spell out the segment
 * text (compared with whitespace runs collapsed).
 */

use std::fmt;

use crate::document::{Segment, Timestamp, Word};
use crate::errors::ValidationError;

use super::confidence::check_confidence;
use super::time_values::validate_time_value;
use super::zero_duration::check_zero_duration;

/// How much of a segment's text is covered by timed words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordTimingMode {
    /// Every word is timed; words must reproduce the segment text
    Complete,
    /// Some words are timed
    Partial,
    /// No word-level timing
    None,
}

impl WordTimingMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "complete" => Some(Self::Complete),
            "partial" => Some(Self::Partial),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    /// Explicit mode if given, otherwise `complete` when words exist
    pub fn effective(explicit: Option<&str>, has_words: bool, segment: usize) -> Result<Self, ValidationError> {
        match explicit {
            Some(value) => Self::parse(value).ok_or_else(|| ValidationError::InvalidWordTimingMode {
                segment,
                mode: value.to_string(),
            }),
            None if has_words => Ok(Self::Complete),
            None => Ok(Self::None),
        }
    }
}

impl fmt::Display for WordTimingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complete => write!(f, "complete"),
            Self::Partial => write!(f, "partial"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Collapse whitespace runs to single spaces and trim the ends
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Accumulator threaded through the word sequence
struct WordCursor {
    previous_end: f64,
    text: String,
}

/// Validate the words of segment `index`.
///
/// `bounds` is the segment's already-validated `[start, end]`, absent for
/// untimed segments (containment is then not checked).
pub fn validate_words(
    segment: &Segment,
    index: usize,
    bounds: Option<(&Timestamp, &Timestamp)>,
) -> Result<(), ValidationError> {
    let words = segment.words.as_deref().unwrap_or(&[]);
    let mode = WordTimingMode::effective(segment.word_timing_mode.as_deref(), !words.is_empty(), index)?;

    // An explicit `partial` with no words is accepted as-is.
    if mode == WordTimingMode::None && !words.is_empty() {
        return Err(ValidationError::WordsWithoutTimingMode { segment: index });
    }

    let start = WordCursor {
        previous_end: bounds.map_or(f64::NEG_INFINITY, |(start, _)| start.seconds()),
        text: String::new(),
    };
    let cursor = words
        .iter()
        .enumerate()
        .try_fold(start, |cursor, (position, word)| {
            validate_word(word, index, position, bounds, cursor)
        })?;

    if mode == WordTimingMode::Complete
        && normalize_whitespace(&cursor.text) != normalize_whitespace(&segment.text)
    {
        return Err(ValidationError::TextMismatch { segment: index });
    }

    Ok(())
}

fn validate_word(
    word: &Word,
    segment: usize,
    position: usize,
    bounds: Option<(&Timestamp, &Timestamp)>,
    mut cursor: WordCursor,
) -> Result<WordCursor, ValidationError> {
    let text = word
        .text
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .ok_or(ValidationError::MissingWordText { segment, word: position })?;

    let start = validate_time_value(
        word.start.as_ref(),
        &format!("segment {}, word {} start time", segment, position),
    )?;
    let end = validate_time_value(
        word.end.as_ref(),
        &format!("segment {}, word {} end time", segment, position),
    )?;

    if start.seconds() > end.seconds() {
        return Err(ValidationError::WordTimeRange {
            segment,
            word: position,
            start,
            end,
        });
    }

    if let Some((segment_start, segment_end)) = bounds {
        if start.seconds() < segment_start.seconds() || end.seconds() > segment_end.seconds() {
            return Err(ValidationError::WordOutsideSegment { segment, word: position });
        }
    }

    if start.seconds() < cursor.previous_end {
        return Err(ValidationError::WordOverlap { segment, word: position });
    }

    check_zero_duration(
        &start,
        &end,
        word.is_zero_duration,
        &format!("word in segment {}, word {}", segment, position),
    )?;

    cursor.previous_end = end.seconds();
    cursor.text.push_str(text);
    cursor.text.push(' ');

    check_confidence(word.confidence.as_ref(), "Word", || {
        format!("segment {}, word {}", segment, position)
    })?;

    Ok(cursor)
}
