// crates/catalog-scoring-core/tests/common/mod.rs
// =============================================================================
// Module: Catalog Scoring Test Helpers
// Description: Shared builders for definition and matcher tests.
// Purpose: Reduce duplication across integration tests for catalog-scoring-core.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]
#![allow(clippy::panic, reason = "Test helpers fail fast on malformed fixtures.")]

use catalog_scoring_core::BooleanThreshold;
use catalog_scoring_core::Formula;
use catalog_scoring_core::IntegerType;
use catalog_scoring_core::NumberThreshold;
use catalog_scoring_core::PatternSelector;
use catalog_scoring_core::ResourceName;
use catalog_scoring_core::ScoreDefinition;
use catalog_scoring_core::ScoreFormula;
use catalog_scoring_core::ScoreType;
use catalog_scoring_core::Severity;
use catalog_scoring_core::ValidationError;

/// Parent under which all test definitions are created.
pub const PARENT: &str = "projects/demo/locations/global";

/// Target pattern selecting every spec in the parent project.
pub const ALL_SPECS: &str = "apis/-/versions/-/specs/-";

/// Parses a resource name, panicking on failure.
pub fn name(text: &str) -> ResourceName {
    ResourceName::parse(text).unwrap_or_else(|err| panic!("invalid test name {text}: {err}"))
}

/// Builds a score formula reading `pattern` with a non-empty expression.
pub fn score_formula(pattern: &str) -> ScoreFormula {
    ScoreFormula {
        artifact: PatternSelector::new(pattern),
        score_expression: "size(errors)".to_string(),
        reference_id: String::new(),
    }
}

/// Builds thresholds from inclusive `(min, max)` pairs.
pub fn number_thresholds(ranges: &[(i32, i32)]) -> Vec<NumberThreshold> {
    ranges.iter().map(|&(min, max)| NumberThreshold::new(min, max, Severity::Ok)).collect()
}

/// Builds boolean thresholds for the given values.
pub fn boolean_thresholds(values: &[bool]) -> Vec<BooleanThreshold> {
    values
        .iter()
        .map(|&value| BooleanThreshold {
            value,
            severity: Severity::Warning,
        })
        .collect()
}

/// Returns a valid integer score definition over every spec.
pub fn integer_definition() -> ScoreDefinition {
    ScoreDefinition {
        id: "lint-errors".to_string(),
        target_resource: PatternSelector::new(ALL_SPECS),
        formula: Some(Formula::ScoreFormula(score_formula("$resource.spec/artifacts/lint"))),
        score_type: Some(ScoreType::Integer(IntegerType {
            min_value: 0,
            max_value: 10,
            thresholds: number_thresholds(&[(0, 3), (4, 7), (8, 10)]),
        })),
        ..ScoreDefinition::default()
    }
}

/// Renders errors as display strings for readable assertions.
pub fn messages(errors: &[ValidationError]) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}
