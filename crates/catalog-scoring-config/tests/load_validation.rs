//! Config load validation tests for catalog-scoring-config.
// crates/catalog-scoring-config/tests/load_validation.rs
// =============================================================================
// Module: Config Load Validation Tests
// Description: Validate config loading guards (path, size, encoding).
// Purpose: Ensure config input handling is strict and fail-closed.
// =============================================================================

use std::io::Write;
use std::path::Path;

use catalog_scoring_config::MAX_CONFIG_FILE_SIZE;
use catalog_scoring_config::ScoringConfig;
use tempfile::NamedTempFile;

mod common;

use common::assert_invalid;

type TestResult = Result<(), String>;

fn write_config(contents: &[u8]) -> Result<NamedTempFile, String> {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(contents).map_err(|err| err.to_string())?;
    Ok(file)
}

#[test]
fn load_reads_valid_file() -> TestResult {
    let file = write_config(b"[validation]\nmax_score_patterns = 12\n")?;
    let config = ScoringConfig::load(Some(file.path())).map_err(|err| err.to_string())?;
    if config.validator().limits().max_score_patterns == Some(12) {
        Ok(())
    } else {
        Err("loaded limit not applied".to_string())
    }
}

#[test]
fn load_rejects_missing_file() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("absent.toml");
    assert_invalid(ScoringConfig::load(Some(&path)), "config io error")
}

#[test]
fn load_rejects_path_too_long() -> TestResult {
    let long_path = "a/".repeat(2_500);
    assert_invalid(ScoringConfig::load(Some(Path::new(&long_path))), "config path exceeds max length")
}

#[test]
fn load_rejects_path_component_too_long() -> TestResult {
    let long_component = "a".repeat(300);
    assert_invalid(
        ScoringConfig::load(Some(Path::new(&long_component))),
        "config path component too long",
    )
}

#[test]
fn load_rejects_oversized_file() -> TestResult {
    let file = write_config(&vec![b'#'; MAX_CONFIG_FILE_SIZE + 1])?;
    assert_invalid(ScoringConfig::load(Some(file.path())), "config file exceeds size limit")
}

#[test]
fn load_rejects_non_utf8_file() -> TestResult {
    let file = write_config(&[0xFF, 0xFE, 0xFF])?;
    assert_invalid(ScoringConfig::load(Some(file.path())), "config file must be utf-8")
}

#[test]
fn load_rejects_malformed_toml() -> TestResult {
    let file = write_config(b"[validation\n")?;
    assert_invalid(ScoringConfig::load(Some(file.path())), "config parse error")
}

#[test]
fn load_validates_after_parsing() -> TestResult {
    let file = write_config(b"[validation]\nmax_pattern_bytes = 0\n")?;
    assert_invalid(
        ScoringConfig::load(Some(file.path())),
        "validation.max_pattern_bytes must be greater than zero",
    )
}
