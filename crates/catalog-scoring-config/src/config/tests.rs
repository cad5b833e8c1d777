// crates/catalog-scoring-config/src/config/tests.rs
// ============================================================================
// Module: Config Helper Unit Tests
// Description: Unit coverage for path and limit helpers.
// Purpose: Ensure private guards reject out-of-range input.
// Dependencies: catalog-scoring-config
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    reason = "Test-only panic-based assertions are permitted."
)]

use std::path::Path;

use super::ConfigError;
use super::MAX_PATH_COMPONENT_LENGTH;
use super::MAX_TOTAL_PATH_LENGTH;
use super::resolve_path;
use super::validate_limit;
use super::validate_path;

#[test]
fn explicit_path_wins_over_environment() {
    let resolved = resolve_path(Some(Path::new("custom.toml"))).unwrap();
    assert_eq!(resolved, Path::new("custom.toml"));
}

#[test]
fn validate_path_accepts_limits_exactly() {
    let component = "a".repeat(MAX_PATH_COMPONENT_LENGTH);
    assert!(validate_path(Path::new(&component)).is_ok());
}

#[test]
fn validate_path_rejects_long_component() {
    let component = "a".repeat(MAX_PATH_COMPONENT_LENGTH + 1);
    assert!(matches!(validate_path(Path::new(&component)), Err(ConfigError::Invalid(_))));
}

#[test]
fn validate_path_rejects_long_total() {
    let segments = vec!["abcdefgh"; MAX_TOTAL_PATH_LENGTH / 8 + 1];
    let path = segments.join("/");
    let err = validate_path(Path::new(&path)).unwrap_err();
    assert_eq!(err.to_string(), "invalid config: config path exceeds max length");
}

#[test]
fn validate_limit_bounds_are_inclusive() {
    assert!(validate_limit("field", 1, 10).is_ok());
    assert!(validate_limit("field", 10, 10).is_ok());
    assert_eq!(
        validate_limit("field", 0, 10).unwrap_err().to_string(),
        "invalid config: field must be greater than zero"
    );
    assert_eq!(
        validate_limit("field", 11, 10).unwrap_err().to_string(),
        "invalid config: field must be at most 10"
    );
}
