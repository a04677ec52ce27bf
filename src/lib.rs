/*!
 * # stjtool - Standard Transcription JSON toolkit
 *
 * A Rust library for validating STJ (Standard Transcription JSON) documents
 * and rendering them as subtitles.
 *
 * ## Features
 *
 * - Accepts wrapped (`{"stj": {...}}`) and bare documents
 * - Optional JSON-Schema conformance pass
 * - Semantic checks a schema cannot express:
 *   - Time value format, ordering and zero-duration consistency
 *   - Word timing containment and text reconciliation
 *   - ISO 639-1 / ISO 639-3 language codes
 *   - Speaker and style references
 * - SRT, WebVTT and ASS rendering of validated documents
 *
 * ## Architecture
 *
 * - `document`: Root resolution and the typed document model
 * - `validation`: The validation engine:
 *   - `validation::service`: Orchestration and check ordering
 *   - `validation::schema`: JSON-Schema collaborator
 *   - `validation::segments`, `validation::words`: Timing rules
 * - `renderers`: Subtitle output formats
 * - `language_utils`: ISO language code utilities
 * - `file_utils`: File system operations
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod document;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod renderers;
pub mod validation;

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

// Re-export main types for easier usage
pub use app_config::Config;
pub use document::StjDocument;
pub use errors::{AppError, ErrorKind, ValidationError};
pub use language_utils::{get_language_name, validate_language_code};
pub use renderers::OutputFormat;
pub use validation::{JsonSchemaValidator, ValidationService};

/// Validate a parsed STJ document against the schema at `schema_path` and the
/// semantic rules, reporting the first violation
pub fn validate<P: AsRef<Path>>(document: &Value, schema_path: P) -> Result<(), AppError> {
    let schema = JsonSchemaValidator::from_file(schema_path)?;
    ValidationService::new()
        .with_schema(Arc::new(schema))
        .validate(document)?;
    Ok(())
}
