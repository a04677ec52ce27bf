/*!
 * Common test utilities for the stjtool test suite
 */

use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Result;
use serde_json::{json, Value};
use tempfile::TempDir;

/// Route `log` output through env_logger; safe to call from every test
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Writes a JSON document to a file in the specified directory
pub fn create_json_file(dir: &Path, filename: &str, document: &Value) -> Result<PathBuf> {
    create_test_file(dir, filename, &serde_json::to_string_pretty(document)?)
}

/// A small, fully valid wrapped STJ document
pub fn valid_document() -> Value {
    json!({
        "stj": {
            "version": "0.6.0",
            "metadata": {
                "transcriber": {"name": "stjtool tests", "version": "1.0"},
                "created_at": "2024-10-20T12:00:00Z",
                "source": {"uri": "https://example.com/talk.mp4", "duration": 10.0, "languages": ["en"]},
                "languages": ["en", "fr"]
            },
            "transcript": {
                "speakers": [
                    {"id": "Speaker1", "name": "Dr. Smith"},
                    {"id": "Speaker2", "name": "Alex"}
                ],
                "styles": [{"id": "Style1", "text": {"bold": true}}],
                "segments": [
                    {
                        "start": 0.0,
                        "end": 2.5,
                        "text": "Hello everyone",
                        "speaker_id": "Speaker1",
                        "style_id": "Style1",
                        "confidence": 0.95,
                        "language": "en",
                        "word_timing_mode": "complete",
                        "words": [
                            {"start": 0.0, "end": 1.0, "text": "Hello", "confidence": 0.97},
                            {"start": 1.1, "end": 2.5, "text": "everyone"}
                        ]
                    },
                    {
                        "start": 3.0,
                        "end": 5.25,
                        "text": "Bonjour à tous",
                        "speaker_id": "Speaker2",
                        "language": "fr"
                    },
                    {
                        "start": 6.0,
                        "end": 6.0,
                        "text": "[applause]",
                        "is_zero_duration": true
                    }
                ]
            }
        }
    })
}

/// A structural STJ schema, strict enough to catch type errors
pub fn stj_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "required": ["stj"],
        "properties": {
            "stj": {
                "type": "object",
                "required": ["version", "transcript"],
                "properties": {
                    "version": {"type": "string"},
                    "metadata": {"type": "object"},
                    "transcript": {
                        "type": "object",
                        "required": ["segments"],
                        "properties": {
                            "speakers": {"type": "array"},
                            "styles": {"type": "array"},
                            "segments": {
                                "type": "array",
                                "items": {
                                    "type": "object",
                                    "required": ["text"],
                                    "properties": {
                                        "start": {"type": "number"},
                                        "end": {"type": "number"},
                                        "text": {"type": "string"},
                                        "words": {"type": "array"}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}

/// Writes the test schema into `dir` and returns its path
pub fn create_schema_file(dir: &Path) -> Result<PathBuf> {
    create_json_file(dir, "stj-schema.json", &stj_schema())
}

/// The segments array of a wrapped document, for in-place edits
pub fn segments_mut(document: &mut Value) -> &mut Vec<Value> {
    document["stj"]["transcript"]["segments"]
        .as_array_mut()
        .expect("test document has a segments array")
}
