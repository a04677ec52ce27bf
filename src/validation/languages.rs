/*!
 * Language code checks over a whole document.
 *
 * Codes are checked in order: metadata source languages, metadata
 * transcription languages, then each segment's `language`.
 */

use log::debug;

use crate::document::StjDocument;
use crate::errors::ValidationError;
use crate::language_utils::{get_language_name, validate_language_code};

/// All language codes of a document in checking order, empty entries skipped
pub fn document_language_codes(document: &StjDocument) -> impl Iterator<Item = &str> {
    let segment_languages = document
        .transcript
        .segments
        .iter()
        .filter_map(|segment| segment.language.as_deref());

    document
        .source_languages()
        .iter()
        .chain(document.metadata_languages())
        .map(String::as_str)
        .chain(segment_languages)
        .filter(|code| !code.trim().is_empty())
}

/// Report the first code outside the vocabulary
pub fn validate_language_codes(document: &StjDocument) -> Result<(), ValidationError> {
    for code in document_language_codes(document) {
        validate_language_code(code)?;
    }

    if log::log_enabled!(log::Level::Debug) {
        let names: Vec<String> = document
            .metadata_languages()
            .iter()
            .filter_map(|code| get_language_name(code).ok())
            .collect();
        if !names.is_empty() {
            debug!("Document languages: {}", names.join(", "));
        }
    }

    Ok(())
}
