// crates/catalog-scoring-core/src/runtime/thresholds.rs
// ============================================================================
// Module: Threshold Coverage Analyzer
// Description: Gap and overlap analysis for severity thresholds.
// Purpose: Guarantee every score value is classified exactly once.
// Dependencies: crate::core::{definitions, errors}
// ============================================================================

//! ## Overview
//! Numeric thresholds must partition their domain into abutting ranges; a
//! boolean threshold set must classify `true` and `false` once each. Empty
//! sets are accepted because thresholds are optional.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::definitions::BooleanThreshold;
use crate::core::definitions::NumberRange;
use crate::core::definitions::NumberThreshold;
use crate::core::errors::CoverageError;
use crate::core::errors::RangeBound;
use crate::core::errors::RangeError;
use crate::core::errors::ValidationError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Lower bound of the percent domain.
pub const PERCENT_MIN: i32 = 0;
/// Upper bound of the percent domain.
pub const PERCENT_MAX: i32 = 100;

// ============================================================================
// SECTION: Numeric Thresholds
// ============================================================================

/// Validates that `thresholds` exactly partition `[min_value, max_value]`.
///
/// Range errors are reported first; coverage analysis only runs when every
/// range is well-formed and in bounds. Gaps at the domain ends are reported as
/// `(max_value, observed_max)` and `(observed_min, min_value)`.
#[must_use]
pub fn validate_number_thresholds(
    thresholds: &[NumberThreshold],
    min_value: i32,
    max_value: i32,
) -> Vec<ValidationError> {
    if thresholds.is_empty() {
        return Vec::new();
    }

    let mut errors: Vec<ValidationError> = Vec::new();
    let mut observed_min = max_value;
    let mut observed_max = min_value;

    for threshold in thresholds {
        let range = threshold.range;
        // min == max is valid: a single value can carry its own severity.
        if range.min > range.max {
            errors.push(
                RangeError::Inverted {
                    range,
                }
                .into(),
            );
            continue;
        }
        if range.max > max_value || range.max < min_value {
            errors.push(out_of_bounds(range, RangeBound::Max, min_value, max_value).into());
        }
        if range.min < min_value || range.min > max_value {
            errors.push(out_of_bounds(range, RangeBound::Min, min_value, max_value).into());
        }
        observed_min = observed_min.min(range.min);
        observed_max = observed_max.max(range.max);
    }

    if !errors.is_empty() {
        return errors;
    }

    let mut ranges: Vec<NumberRange> = thresholds.iter().map(|threshold| threshold.range).collect();
    ranges.sort_by_key(|range| range.min);

    for pair in ranges.windows(2) {
        let [left, right] = pair else {
            continue;
        };
        let gap = i64::from(right.min) - i64::from(left.max);
        if gap > 1 {
            errors.push(
                CoverageError::Gap {
                    from: left.max,
                    to: right.min,
                }
                .into(),
            );
        } else if gap <= 0 {
            errors.push(
                CoverageError::Overlap {
                    left: *left,
                    right: *right,
                }
                .into(),
            );
        }
    }

    if observed_max < max_value {
        errors.push(
            CoverageError::Gap {
                from: max_value,
                to: observed_max,
            }
            .into(),
        );
    }
    if observed_min > min_value {
        errors.push(
            CoverageError::Gap {
                from: observed_min,
                to: min_value,
            }
            .into(),
        );
    }

    errors
}

/// Builds an out-of-bounds error for one bound of `range`.
const fn out_of_bounds(
    range: NumberRange,
    bound: RangeBound,
    min_value: i32,
    max_value: i32,
) -> RangeError {
    let value = match bound {
        RangeBound::Min => range.min,
        RangeBound::Max => range.max,
    };
    RangeError::OutOfBounds {
        range,
        bound,
        value,
        min_value,
        max_value,
    }
}

// ============================================================================
// SECTION: Boolean Thresholds
// ============================================================================

/// Validates that `thresholds` classify `true` and `false` exactly once each.
///
/// Every repeated value yields a duplicate error; a value that never appears
/// yields a single missing-coverage error.
#[must_use]
pub fn validate_boolean_thresholds(thresholds: &[BooleanThreshold]) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();
    let mut true_covered = false;
    let mut false_covered = false;

    for threshold in thresholds {
        let covered = if threshold.value { &mut true_covered } else { &mut false_covered };
        if *covered {
            errors.push(
                CoverageError::DuplicateBoolean {
                    value: threshold.value,
                }
                .into(),
            );
        }
        *covered = true;
    }

    if !true_covered || !false_covered {
        errors.push(CoverageError::MissingBoolean.into());
    }
    errors
}
