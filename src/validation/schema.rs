/*!
 * JSON-Schema conformance.
 *
 * Structural grammar is delegated to the `jsonschema` crate; the rest of the
 * engine only sees the `SchemaValidator` trait.
 */

use std::path::Path;

use jsonschema::JSONSchema;
use log::debug;
use serde_json::Value;

use crate::errors::{AppError, SchemaIssue};
use crate::file_utils::FileManager;

/// A compiled structural grammar for STJ documents
pub trait SchemaValidator: Send + Sync {
    /// Every violation in `document`; empty means conformant
    fn validate(&self, document: &Value) -> Vec<SchemaIssue>;
}

/// `SchemaValidator` backed by a compiled JSON-Schema document
pub struct JsonSchemaValidator {
    compiled: JSONSchema,
}

impl JsonSchemaValidator {
    /// Compile a schema document
    pub fn compile(schema: &Value) -> Result<Self, AppError> {
        let compiled = JSONSchema::compile(schema).map_err(|e| AppError::Schema(e.to_string()))?;
        Ok(Self { compiled })
    }

    /// Load and compile a schema file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        let schema = FileManager::load_json(path).map_err(|e| match e {
            AppError::Json(detail) => AppError::Schema(format!("{}: {}", path.display(), detail)),
            other => other,
        })?;
        debug!("Compiling schema from {}", path.display());
        Self::compile(&schema)
    }
}

impl SchemaValidator for JsonSchemaValidator {
    fn validate(&self, document: &Value) -> Vec<SchemaIssue> {
        match self.compiled.validate(document) {
            Ok(()) => Vec::new(),
            Err(errors) => errors
                .map(|error| {
                    let path = error.instance_path.to_string();
                    SchemaIssue {
                        path: if path.is_empty() || path == "/" { "root".to_string() } else { path },
                        message: error.to_string(),
                    }
                })
                .collect(),
        }
    }
}

impl std::fmt::Debug for JsonSchemaValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonSchemaValidator").finish_non_exhaustive()
    }
}
