// crates/catalog-scoring-core/src/core/definitions.rs
// ============================================================================
// Module: Score Definitions
// Description: Declarative score and score-card definition documents.
// Purpose: Model the documents accepted by the catalog write path.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`ScoreDefinition`] describes how to compute one score for resources
//! matching a target pattern; a [`ScoreCardDefinition`] groups existing
//! scores. Expressions and filters are opaque strings stored for the
//! evaluation pipeline. Oneof fields are `Option<enum>` so "unset" is
//! representable and "both set" is not.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Shared Types
// ============================================================================

/// Pattern plus opaque filter selecting catalog resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSelector {
    /// Resource pattern, relative to the parent project or a `$resource` reference.
    #[serde(default)]
    pub pattern: String,
    /// Opaque filter expression; not evaluated by this crate.
    #[serde(default)]
    pub filter: String,
}

impl PatternSelector {
    /// Creates a selector with an empty filter.
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            filter: String::new(),
        }
    }
}

/// Severity assigned to a classified score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// No severity assigned.
    #[default]
    SeverityUnspecified,
    /// Healthy.
    Ok,
    /// Needs attention.
    Warning,
    /// Requires action.
    Alert,
}

// ============================================================================
// SECTION: Thresholds
// ============================================================================

/// Inclusive integer range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumberRange {
    /// Inclusive lower bound.
    pub min: i32,
    /// Inclusive upper bound.
    pub max: i32,
}

impl NumberRange {
    /// Creates a range.
    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self {
            min,
            max,
        }
    }
}

impl fmt::Display for NumberRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Maps a numeric range to a severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberThreshold {
    /// Values classified by this threshold.
    pub range: NumberRange,
    /// Severity for values in range.
    #[serde(default)]
    pub severity: Severity,
}

impl NumberThreshold {
    /// Creates a threshold over `[min, max]`.
    #[must_use]
    pub const fn new(min: i32, max: i32, severity: Severity) -> Self {
        Self {
            range: NumberRange::new(min, max),
            severity,
        }
    }
}

/// Maps a boolean value to a severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BooleanThreshold {
    /// Value classified by this threshold.
    pub value: bool,
    /// Severity for the value.
    #[serde(default)]
    pub severity: Severity,
}

// ============================================================================
// SECTION: Formulas
// ============================================================================

/// Computes one score from one artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreFormula {
    /// Artifact the score is computed from; must start with a `$resource` reference.
    #[serde(default)]
    pub artifact: PatternSelector,
    /// Opaque expression evaluated against the artifact.
    #[serde(default)]
    pub score_expression: String,
    /// Optional name for use in rollup expressions; must not contain `-`.
    #[serde(default)]
    pub reference_id: String,
}

/// Combines several score formulas into one score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollupFormula {
    /// Ordered component formulas.
    #[serde(default)]
    pub score_formulas: Vec<ScoreFormula>,
    /// Opaque expression combining the component results.
    #[serde(default)]
    pub rollup_expression: String,
}

/// Formula oneof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formula {
    /// Single-artifact formula.
    ScoreFormula(ScoreFormula),
    /// Multi-artifact rollup.
    RollupFormula(RollupFormula),
}

// ============================================================================
// SECTION: Score Types
// ============================================================================

/// Percentage score over `[0, 100]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercentType {
    /// Optional severity buckets.
    #[serde(default)]
    pub thresholds: Vec<NumberThreshold>,
}

/// Integer score over `[min_value, max_value]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegerType {
    /// Inclusive lower bound of the domain.
    #[serde(default)]
    pub min_value: i32,
    /// Inclusive upper bound of the domain.
    #[serde(default)]
    pub max_value: i32,
    /// Optional severity buckets.
    #[serde(default)]
    pub thresholds: Vec<NumberThreshold>,
}

/// Boolean score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BooleanType {
    /// Optional severity per value.
    #[serde(default)]
    pub thresholds: Vec<BooleanThreshold>,
}

/// Score type oneof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreType {
    /// Percentage.
    Percent(PercentType),
    /// Bounded integer.
    Integer(IntegerType),
    /// Boolean.
    Boolean(BooleanType),
}

// ============================================================================
// SECTION: Definitions
// ============================================================================

/// How to compute a score for resources matching a target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDefinition {
    /// Definition identifier.
    #[serde(default)]
    pub id: String,
    /// Human-friendly name.
    #[serde(default)]
    pub display_name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Link to further documentation.
    #[serde(default)]
    pub uri: String,
    /// Display text for `uri`.
    #[serde(default)]
    pub uri_display_name: String,
    /// Resources this score applies to.
    #[serde(default)]
    pub target_resource: PatternSelector,
    /// Formula oneof.
    #[serde(default)]
    pub formula: Option<Formula>,
    /// Type oneof.
    #[serde(default, rename = "type")]
    pub score_type: Option<ScoreType>,
}

/// Groups scores for resources matching a target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCardDefinition {
    /// Definition identifier.
    #[serde(default)]
    pub id: String,
    /// Human-friendly name.
    #[serde(default)]
    pub display_name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Link to further documentation.
    #[serde(default)]
    pub uri: String,
    /// Display text for `uri`.
    #[serde(default)]
    pub uri_display_name: String,
    /// Resources this score card applies to.
    #[serde(default)]
    pub target_resource: PatternSelector,
    /// Ordered score artifact patterns, each starting with a `$resource` reference.
    #[serde(default)]
    pub score_patterns: Vec<String>,
}
