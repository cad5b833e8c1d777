// crates/catalog-scoring-core/tests/proptest_thresholds.rs
// ============================================================================
// Module: Threshold Property-Based Tests
// Description: Property tests for partition acceptance and gap detection.
// Purpose: Detect coverage misclassification across wide domains.
// ============================================================================

//! Property-based tests for threshold coverage invariants.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    reason = "Test-only assertions and helpers are permitted."
)]

use catalog_scoring_core::CoverageError;
use catalog_scoring_core::NumberThreshold;
use catalog_scoring_core::Severity;
use catalog_scoring_core::ValidationError;
use catalog_scoring_core::validate_number_thresholds;
use proptest::prelude::*;

/// Generates a domain and thresholds that exactly partition it.
fn partition_strategy() -> impl Strategy<Value = (i32, i32, Vec<NumberThreshold>)> {
    (-1_000i32 .. 1_000, 1i32 .. 500).prop_flat_map(|(low, width)| {
        prop::collection::vec(1 ..= width, 0 .. 8).prop_map(move |mut cuts| {
            cuts.sort_unstable();
            cuts.dedup();
            let mut starts = vec![0];
            starts.extend(cuts);
            let thresholds = starts
                .iter()
                .enumerate()
                .map(|(index, start)| {
                    let end = starts.get(index + 1).map_or(width, |next| next - 1);
                    NumberThreshold::new(low + start, low + end, Severity::Ok)
                })
                .collect();
            (low, low + width, thresholds)
        })
    })
}

fn has_gap(errors: &[ValidationError]) -> bool {
    errors.iter().any(|error| matches!(error, ValidationError::Coverage(CoverageError::Gap { .. })))
}

proptest! {
    #[test]
    fn exact_partitions_are_accepted_in_any_order((low, high, thresholds) in partition_strategy()) {
        prop_assert!(validate_number_thresholds(&thresholds, low, high).is_empty());
        let mut reversed = thresholds;
        reversed.reverse();
        prop_assert!(validate_number_thresholds(&reversed, low, high).is_empty());
    }

    #[test]
    fn removing_an_edge_range_leaves_a_gap((low, high, thresholds) in partition_strategy()) {
        prop_assume!(thresholds.len() >= 2);
        let without_first = &thresholds[1 ..];
        let without_last = &thresholds[.. thresholds.len() - 1];
        prop_assert!(has_gap(&validate_number_thresholds(without_first, low, high)));
        prop_assert!(has_gap(&validate_number_thresholds(without_last, low, high)));
    }

    #[test]
    fn removing_an_interior_range_leaves_a_gap((low, high, thresholds) in partition_strategy()) {
        prop_assume!(thresholds.len() >= 3);
        let mut remaining = thresholds;
        remaining.remove(1);
        prop_assert!(has_gap(&validate_number_thresholds(&remaining, low, high)));
    }

    #[test]
    fn overlap_is_detected_regardless_of_order(
        low in -1_000i32 .. 0,
        split in 1i32 .. 100,
        overlap in 0i32 .. 20,
    ) {
        let overlap = overlap.min(split);
        let high = low + split + 50;
        let left = NumberThreshold::new(low, low + split, Severity::Ok);
        let right = NumberThreshold::new(low + split - overlap, high, Severity::Alert);
        for thresholds in [[left, right], [right, left]] {
            let errors = validate_number_thresholds(&thresholds, low, high);
            prop_assert!(
                errors
                    .iter()
                    .any(|error| matches!(error, ValidationError::Coverage(CoverageError::Overlap { .. }))),
                "missing overlap in {errors:?}"
            );
        }
    }
}
