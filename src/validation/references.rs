/*!
 * Speaker and style reference integrity.
 */

use std::collections::HashSet;

use crate::document::StjDocument;
use crate::errors::{SegmentLocation, ValidationError};

/// Ensure every `speaker_id`/`style_id` names a declared speaker/style
pub fn validate_references(document: &StjDocument) -> Result<(), ValidationError> {
    let transcript = &document.transcript;
    let speaker_ids: HashSet<&str> = transcript.speakers.iter().map(|s| s.id.as_str()).collect();
    let style_ids: HashSet<&str> = transcript.styles.iter().map(|s| s.id.as_str()).collect();

    for (index, segment) in transcript.segments.iter().enumerate() {
        let dangling = [
            ("speaker_id", segment.speaker_id.as_deref(), &speaker_ids),
            ("style_id", segment.style_id.as_deref(), &style_ids),
        ]
        .into_iter()
        .find_map(|(field, id, declared)| match id {
            Some(id) if !id.is_empty() && !declared.contains(id) => Some((field, id)),
            _ => None,
        });

        if let Some((field, id)) = dangling {
            return Err(ValidationError::InvalidReference {
                field,
                id: id.to_string(),
                location: SegmentLocation {
                    index,
                    start: segment.start_timestamp(),
                },
            });
        }
    }

    Ok(())
}
