/*!
 * Tests for file utility functions
 */

use std::path::Path;
use anyhow::Result;
use serde_json::json;
use stjtool::errors::AppError;
use stjtool::file_utils::FileManager;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "test_file_exists.tmp", "test content")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::dir_exists(&test_file));
    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Test that generate_output_path strips the full STJ suffix
#[test]
fn test_generate_output_path_withStjInput_shouldStripSuffix() {
    let output_path = FileManager::generate_output_path("/tmp/input/talk.stj.json", "/tmp/output", "srt");

    assert_eq!(output_path, Path::new("/tmp/output/talk.srt"));
}

/// Test that generate_output_path handles plain JSON inputs
#[test]
fn test_generate_output_path_withPlainJson_shouldStripExtension() {
    let output_path = FileManager::generate_output_path("/data/episode.1.json", "/data", "vtt");

    assert_eq!(output_path, Path::new("/data/episode.1.vtt"));
}

/// Test that is_stj_file matches the suffix case-insensitively
#[test]
fn test_is_stj_file_shouldMatchSuffix() {
    assert!(FileManager::is_stj_file("a/b/talk.stj.json"));
    assert!(FileManager::is_stj_file("TALK.STJ.JSON"));
    assert!(!FileManager::is_stj_file("talk.json"));
    assert!(!FileManager::is_stj_file("talk.stj"));
}

/// Test that ensure_dir creates directories as needed
#[test]
fn test_ensure_dir_withNonExistentDir_shouldCreateDirectory() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_subdir = temp_dir.path().join("nested").join("dir");

    FileManager::ensure_dir(&test_subdir)?;

    assert!(test_subdir.is_dir());
    Ok(())
}

/// Test that find_stj_files walks subdirectories and ignores other files
#[test]
fn test_find_stj_files_withMixedFiles_shouldReturnSortedStjFiles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "b.stj.json", "{}")?;
    common::create_test_file(temp_dir.path(), "sub/a.stj.json", "{}")?;
    common::create_test_file(temp_dir.path(), "notes.json", "{}")?;
    common::create_test_file(temp_dir.path(), "talk.srt", "")?;

    let files = FileManager::find_stj_files(temp_dir.path())?;

    assert_eq!(files.len(), 2);
    assert!(files[0].ends_with("b.stj.json"));
    assert!(files[1].ends_with("sub/a.stj.json"));
    Ok(())
}

/// Test that load_json parses a valid file
#[test]
fn test_load_json_withValidFile_shouldParse() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_json_file(temp_dir.path(), "doc.json", &json!({"a": [1, 2]}))?;

    let value = FileManager::load_json(&path)?;

    assert_eq!(value, json!({"a": [1, 2]}));
    Ok(())
}

/// Test that load_json distinguishes missing files from bad JSON
#[test]
fn test_load_json_withMissingOrInvalidFile_shouldReportCause() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let missing = temp_dir.path().join("missing.stj.json");
    let broken = common::create_test_file(temp_dir.path(), "broken.stj.json", "{\"stj\": ")?;

    assert!(matches!(FileManager::load_json(&missing), Err(AppError::NotFound(_))));
    assert!(matches!(FileManager::load_json(&broken), Err(AppError::Json(_))));
    Ok(())
}

/// Test that write_to_file creates parent directories
#[test]
fn test_write_to_file_withNestedPath_shouldCreateParents() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("out").join("talk.srt");

    FileManager::write_to_file(&path, "1\n")?;

    assert_eq!(FileManager::read_to_string(&path)?, "1\n");
    Ok(())
}
