/*!
 * Validation service that orchestrates all validators.
 *
 * Order of checks for one document:
 * 1. root shape (always first, never masked by the schema pass)
 * 2. semantic pass: language codes, segments (with words), references
 * 3. schema conformance, if a schema is configured
 *
 * With `schema_first` the schema pass runs between (1) and (2).
 */

use std::sync::Arc;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::{resolve_root, DocumentRoot, StjDocument};
use crate::errors::ValidationError;

use super::languages::validate_language_codes;
use super::references::validate_references;
use super::schema::SchemaValidator;
use super::segments::validate_segments;

/// Configuration for the validation service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Whether to run the schema pass when a schema is available
    #[serde(default = "default_true")]
    pub schema_check: bool,

    /// Run the schema pass before the semantic pass
    #[serde(default)]
    pub schema_first: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            schema_check: true,
            schema_first: false,
        }
    }
}

/// Validation service for STJ documents
///
/// Holds no per-document state; one instance can validate any number of
/// documents, from any number of threads.
#[derive(Clone)]
pub struct ValidationService {
    config: ValidationConfig,
    schema: Option<Arc<dyn SchemaValidator>>,
}

impl ValidationService {
    /// Create a service with default configuration and no schema
    pub fn new() -> Self {
        Self::with_config(ValidationConfig::default())
    }

    /// Create a service with custom configuration and no schema
    pub fn with_config(config: ValidationConfig) -> Self {
        Self { config, schema: None }
    }

    /// Attach a schema validator for the conformance pass
    pub fn with_schema(mut self, schema: Arc<dyn SchemaValidator>) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Whether a schema pass will run
    pub fn has_schema_check(&self) -> bool {
        self.config.schema_check && self.schema.is_some()
    }

    /// Validate a parsed document, reporting the first violation
    pub fn validate(&self, document: &Value) -> Result<(), ValidationError> {
        self.validate_document(document).map(|_| ())
    }

    /// Validate a parsed document and return its typed view
    pub fn validate_document(&self, document: &Value) -> Result<StjDocument, ValidationError> {
        let root = resolve_root(document)?;
        debug!(
            "Resolved {} STJ root",
            if root.is_wrapped() { "wrapped" } else { "bare" }
        );

        if self.config.schema_first {
            self.check_schema(document)?;
            return self.check_semantics(document, root, false);
        }

        let stj = self.check_semantics(document, root, true)?;
        self.check_schema(document)?;
        Ok(stj)
    }

    fn check_semantics(
        &self,
        document: &Value,
        root: DocumentRoot<'_>,
        schema_pending: bool,
    ) -> Result<StjDocument, ValidationError> {
        let stj = match StjDocument::from_payload(root.payload()) {
            Ok(stj) => stj,
            Err(mapping_error) => {
                // A payload the model cannot hold is a schema violation when a
                // schema is there to say so.
                if schema_pending {
                    self.check_schema(document)?;
                }
                return Err(mapping_error);
            }
        };

        validate_language_codes(&stj)?;
        validate_segments(&stj.transcript.segments)?;
        validate_references(&stj)?;

        debug!("Semantic validation passed for STJ {}", stj.version);
        Ok(stj)
    }

    fn check_schema(&self, document: &Value) -> Result<(), ValidationError> {
        if !self.config.schema_check {
            return Ok(());
        }
        let Some(schema) = &self.schema else {
            warn!("No schema configured, skipping schema conformance check");
            return Ok(());
        };

        let issues = schema.validate(document);
        if issues.is_empty() {
            debug!("Schema validation passed");
            Ok(())
        } else {
            debug!("Schema validation found {} issue(s)", issues.len());
            Err(ValidationError::SchemaViolation(issues))
        }
    }
}

impl Default for ValidationService {
    fn default() -> Self {
        Self::new()
    }
}
