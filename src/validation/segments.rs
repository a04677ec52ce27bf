/*!
 * Segment sequence validation.
 *
 * Timing is all-or-nothing across a document: once any segment carries a
 * start or end, every segment must carry both. Timed segments must be
 * ordered and non-overlapping.
 */

use log::debug;

use crate::document::Segment;
use crate::errors::{SegmentLocation, ValidationError};

use super::confidence::check_confidence;
use super::time_values::validate_time_value;
use super::words::{validate_words, WordTimingMode};
use super::zero_duration::check_zero_duration;

/// State carried from one segment to the next
#[derive(Debug, Clone, Copy)]
struct SequenceState {
    /// End of the last timed segment; starts below any valid time
    previous_end: f64,
    /// Whether any segment so far exposed a start or end
    has_timing: bool,
}

impl Default for SequenceState {
    fn default() -> Self {
        Self {
            previous_end: -1.0,
            has_timing: false,
        }
    }
}

/// Validate the document's segments in order, then enforce that timing is
/// present on all segments if it is present on any.
pub fn validate_segments(segments: &[Segment]) -> Result<(), ValidationError> {
    let state = segments
        .iter()
        .enumerate()
        .try_fold(SequenceState::default(), |state, (index, segment)| {
            validate_segment(segment, index, state)
        })?;

    if state.has_timing {
        if let Some(index) = segments.iter().position(|s| !s.has_any_timing()) {
            return Err(ValidationError::MissingTiming { segment: index });
        }
    }

    debug!(
        "Validated {} segments (timed: {})",
        segments.len(),
        state.has_timing
    );
    Ok(())
}

fn validate_segment(
    segment: &Segment,
    index: usize,
    mut state: SequenceState,
) -> Result<SequenceState, ValidationError> {
    state.has_timing |= segment.has_any_timing();

    let mut bounds = None;
    if state.has_timing {
        let (Some(start), Some(end)) = (segment.start.as_ref(), segment.end.as_ref()) else {
            return Err(ValidationError::MissingTiming { segment: index });
        };

        let start = validate_time_value(Some(start), &format!("segment {} start time", index))?;
        let end = validate_time_value(Some(end), &format!("segment {} end time", index))?;

        if start.seconds() > end.seconds() {
            return Err(ValidationError::SegmentTimeRange {
                segment: index,
                start,
                end,
            });
        }

        if start.seconds() < state.previous_end {
            return Err(ValidationError::SegmentOverlap { start });
        }

        let zero = check_zero_duration(
            &start,
            &end,
            segment.is_zero_duration,
            &format!("segment {}", index),
        )?;
        if zero && (segment.words.is_some() || segment.word_timing_mode.is_some()) {
            return Err(ValidationError::ZeroDurationWithWords { segment: index });
        }

        state.previous_end = end.seconds();
        bounds = Some((start, end));
    }

    if segment.words.is_some() {
        validate_words(segment, index, bounds.as_ref().map(|(s, e)| (s, e)))?;
    } else if let Some(mode) = segment.word_timing_mode.as_deref() {
        WordTimingMode::effective(Some(mode), false, index)?;
    }

    check_confidence(segment.confidence.as_ref(), "Segment", || {
        SegmentLocation {
            index,
            start: bounds.as_ref().map(|(start, _)| start.clone()),
        }
        .to_string()
    })?;

    Ok(state)
}
