// crates/catalog-scoring-core/src/core/errors.rs
// ============================================================================
// Module: Catalog Scoring Errors
// Description: Error taxonomy for names, patterns, thresholds, and definitions.
// Purpose: Give every validation failure a typed, displayable representation.
// Dependencies: crate::core::{definitions, names}, thiserror
// ============================================================================

//! ## Overview
//! Validators never stop at the first problem, so failures are modelled as
//! values that callers collect into a list. Each category from the write path
//! has its own enum; [`ValidationError`] wraps them for aggregated reporting.
//! Display strings are surfaced verbatim to API callers and are kept stable.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use thiserror::Error;

use crate::core::definitions::NumberRange;
use crate::core::names::ReferenceLevel;
use crate::core::names::ResourceKind;

// ============================================================================
// SECTION: Parse Errors
// ============================================================================

/// Malformed resource name or pattern syntax.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input text was empty.
    #[error("{subject} is empty")]
    Empty {
        /// What was being parsed ("resource name" or "resource pattern").
        subject: &'static str,
    },
    /// Input does not split into collection/identifier pairs.
    #[error("invalid {subject} \"{input}\": expected collection/identifier pairs")]
    Unpaired {
        /// What was being parsed.
        subject: &'static str,
        /// Raw input text.
        input: String,
    },
    /// A collection keyword appeared where the hierarchy does not allow it.
    #[error("invalid {subject} \"{input}\": unexpected collection \"{collection}\"")]
    UnexpectedCollection {
        /// What was being parsed.
        subject: &'static str,
        /// Raw input text.
        input: String,
        /// Offending collection keyword.
        collection: String,
    },
    /// A location other than `global` was named.
    #[error("invalid {subject} \"{input}\": unsupported location \"{location}\"")]
    UnsupportedLocation {
        /// What was being parsed.
        subject: &'static str,
        /// Raw input text.
        input: String,
        /// Offending location identifier.
        location: String,
    },
    /// A single identifier token violates the name grammar.
    #[error("invalid identifier \"{value}\": expected ASCII letters, digits, '-' or '_'")]
    InvalidIdentifier {
        /// Offending token.
        value: String,
    },
    /// A `$resource.` token has a malformed or unknown level.
    #[error("invalid reference \"{token}\": expected $resource.(api|version|spec|artifact)")]
    InvalidReference {
        /// Offending token.
        token: String,
    },
    /// A token error located within a larger name or pattern.
    #[error("invalid {subject} \"{input}\": {source}")]
    Invalid {
        /// What was being parsed.
        subject: &'static str,
        /// Raw input text.
        input: String,
        /// Underlying token error.
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Attaches the enclosing input to a token-level error.
    #[must_use]
    pub fn within(self, subject: &'static str, input: &str) -> Self {
        Self::Invalid {
            subject,
            input: input.to_string(),
            source: Box::new(self),
        }
    }
}

// ============================================================================
// SECTION: Reference Errors
// ============================================================================

/// A back-reference that cannot be resolved against its target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    /// The reference token itself is malformed.
    #[error(transparent)]
    Malformed(#[from] ParseError),
    /// The pattern carries no leading `$resource` reference.
    #[error(
        "invalid pattern: \"{pattern}\", must always start with \
         '$resource.(api|version|spec|artifact)'"
    )]
    Missing {
        /// Offending pattern.
        pattern: String,
    },
    /// The referenced level does not exist on the target.
    #[error(
        "invalid pattern \"{pattern}\", invalid $resource reference in pattern: \
         $resource.{level} cannot be resolved against {kind} target \"{target}\""
    )]
    Unresolvable {
        /// Offending pattern.
        pattern: String,
        /// Referenced level.
        level: ReferenceLevel,
        /// Target rendered in canonical form.
        target: String,
        /// Kind of the target.
        kind: ResourceKind,
    },
    /// A `$resource` token remains in a slot after resolution.
    #[error(
        "invalid pattern \"{pattern}\", $resource references are only allowed as the leading \
         segment of an artifact or score pattern"
    )]
    Unsubstituted {
        /// Offending pattern.
        pattern: String,
    },
}

// ============================================================================
// SECTION: Threshold Errors
// ============================================================================

/// Which bound of a threshold range is out of limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBound {
    /// `range.min`.
    Min,
    /// `range.max`.
    Max,
}

impl fmt::Display for RangeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Min => f.write_str("range.min"),
            Self::Max => f.write_str("range.max"),
        }
    }
}

/// A threshold range whose own bounds are invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// `range.min > range.max`.
    #[error("invalid range {range}: range.min cannot be greater than range.max")]
    Inverted {
        /// Offending range.
        range: NumberRange,
    },
    /// A bound falls outside the declared domain.
    #[error(
        "invalid range {range}: {bound}({value}) should be within min_value({min_value}) and \
         max_value({max_value}) limits"
    )]
    OutOfBounds {
        /// Offending range.
        range: NumberRange,
        /// Which bound is out of limits.
        bound: RangeBound,
        /// Value of the offending bound.
        value: i32,
        /// Domain lower limit.
        min_value: i32,
        /// Domain upper limit.
        max_value: i32,
    },
}

/// A threshold set that leaves a gap or classifies a value twice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoverageError {
    /// Values between the two bounds are unclassified.
    #[error("incomplete coverage: missing coverage between {from} and {to}")]
    Gap {
        /// First reported bound.
        from: i32,
        /// Second reported bound.
        to: i32,
    },
    /// Two ranges share at least one value.
    #[error("invalid thresholds {left} and {right}: thresholds must not overlap")]
    Overlap {
        /// Lower range after sorting.
        left: NumberRange,
        /// Upper range after sorting.
        right: NumberRange,
    },
    /// A boolean value is classified more than once.
    #[error("duplicate entries for '{value}' value")]
    DuplicateBoolean {
        /// Duplicated value.
        value: bool,
    },
    /// `true` or `false` is never classified.
    #[error("missing coverage for one or both of the boolean values")]
    MissingBoolean,
}

// ============================================================================
// SECTION: Structural Errors
// ============================================================================

/// A required field or oneof is missing, or a list is empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    /// Neither formula variant is set.
    #[error("missing formula, either 'score_formula' or 'rollup_formula' should be set")]
    MissingFormula,
    /// Neither type variant is set.
    #[error("missing type, either of 'percent', 'integer' or 'boolean' should be set")]
    MissingType,
    /// Rollup formula lists no score formulas.
    #[error("missing rollup_formula.score_formulas")]
    MissingScoreFormulas,
    /// Rollup formula has an empty expression.
    #[error("missing rollup_formula.rollup_expression")]
    MissingRollupExpression,
    /// Score formula has an empty expression.
    #[error("missing score_formula.score_expression")]
    MissingScoreExpression,
    /// Score card lists no score patterns.
    #[error("missing score_patterns")]
    MissingScorePatterns,
    /// Integer type bounds are empty or inverted.
    #[error(
        "invalid min_value({min_value}) and max_value({max_value}), min_value should be less \
         than max_value"
    )]
    InvalidIntegerBounds {
        /// Declared lower bound.
        min_value: i32,
        /// Declared upper bound.
        max_value: i32,
    },
    /// Reference identifier contains a hyphen.
    #[error("invalid score_formula.reference_id: {reference_id}, it should not contain hyphens '-'")]
    InvalidReferenceId {
        /// Offending identifier.
        reference_id: String,
    },
    /// Pattern ends in a wildcard instead of a concrete identifier.
    #[error("invalid {field} : \"{pattern}\", it should end with a resourceID and not a \"-\"")]
    WildcardTail {
        /// Field holding the pattern.
        field: &'static str,
        /// Offending pattern.
        pattern: String,
    },
    /// A configured size limit is exceeded.
    #[error("{field} exceeds limit: {actual} > {limit}")]
    LimitExceeded {
        /// Field that exceeded the limit.
        field: &'static str,
        /// Configured limit.
        limit: usize,
        /// Observed size.
        actual: usize,
    },
}

// ============================================================================
// SECTION: Aggregated Errors
// ============================================================================

/// Any problem reported by the definition validators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Malformed name or pattern.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Unresolvable back-reference.
    #[error(transparent)]
    Reference(#[from] ReferenceError),
    /// Invalid threshold bounds.
    #[error(transparent)]
    Range(#[from] RangeError),
    /// Threshold gap or overlap.
    #[error(transparent)]
    Coverage(#[from] CoverageError),
    /// Missing field or oneof.
    #[error(transparent)]
    Structural(#[from] StructuralError),
}

// ============================================================================
// SECTION: Match Errors
// ============================================================================

/// A concrete resource that does not satisfy a target pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The target pattern itself does not parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Resource and pattern name different kinds of resource.
    #[error("resource {resource} doesn't match target pattern {pattern}")]
    KindMismatch {
        /// Resource in canonical form.
        resource: String,
        /// Pattern in canonical form.
        pattern: String,
        /// Kind named by the resource.
        resource_kind: ResourceKind,
        /// Kind named by the pattern.
        pattern_kind: ResourceKind,
    },
    /// A literal pattern segment differs from the resource identifier.
    #[error(
        "{level} mismatch in resource {resource} and target pattern {pattern}: expected \
         \"{expected}\", found \"{actual}\""
    )]
    SegmentMismatch {
        /// Hierarchy level of the mismatching segment.
        level: &'static str,
        /// Pattern segment.
        expected: String,
        /// Resource identifier (empty when absent).
        actual: String,
        /// Resource in canonical form.
        resource: String,
        /// Pattern in canonical form.
        pattern: String,
    },
}
