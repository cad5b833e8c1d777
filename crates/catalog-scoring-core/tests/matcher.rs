// crates/catalog-scoring-core/tests/matcher.rs
// ============================================================================
// Module: Resource Matcher Tests
// Description: Tests for target pattern matching and definition selection.
// Purpose: Ensure matching is exact on kind and per-level on identifiers.
// ============================================================================

//! Resource matcher tests for catalog-scoring-core.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    reason = "Test-only assertions and helpers are permitted."
)]

use catalog_scoring_core::MatchError;
use catalog_scoring_core::PatternSelector;
use catalog_scoring_core::ResourceKind;
use catalog_scoring_core::ResourcePattern;
use catalog_scoring_core::ScoreDefinition;
use catalog_scoring_core::match_resource_with_pattern;
use catalog_scoring_core::match_resource_with_target;
use catalog_scoring_core::select_matching_definitions;

mod common;

use common::ALL_SPECS;
use common::PARENT;
use common::name;

const PETSTORE_SPEC: &str = "projects/demo/locations/global/apis/petstore/versions/v1/specs/openapi";

fn matches(pattern: &str, resource: &str) -> Result<(), MatchError> {
    match_resource_with_target(&PatternSelector::new(pattern), &name(resource), PARENT)
}

fn mismatch_level(result: Result<(), MatchError>) -> &'static str {
    match result {
        Err(MatchError::SegmentMismatch {
            level,
            ..
        }) => level,
        other => panic!("expected segment mismatch, got {other:?}"),
    }
}

// ============================================================================
// SECTION: Segment Matching
// ============================================================================

#[test]
fn wildcards_match_any_identifier() {
    assert!(matches(ALL_SPECS, PETSTORE_SPEC).is_ok());
    assert!(matches("apis/petstore/versions/-/specs/-", PETSTORE_SPEC).is_ok());
    assert!(matches("apis/petstore/versions/v1/specs/openapi", PETSTORE_SPEC).is_ok());
}

#[test]
fn literal_mismatch_names_first_differing_level() {
    assert_eq!(mismatch_level(matches("apis/other/versions/-/specs/-", PETSTORE_SPEC)), "api");
    assert_eq!(mismatch_level(matches("apis/-/versions/v2/specs/-", PETSTORE_SPEC)), "version");
    assert_eq!(mismatch_level(matches("apis/-/versions/-/specs/proto", PETSTORE_SPEC)), "spec");
    assert_eq!(
        mismatch_level(matches("apis/other/versions/v2/specs/-", PETSTORE_SPEC)),
        "api"
    );
}

#[test]
fn mismatch_message_carries_both_names() {
    let err = matches("apis/other/versions/-/specs/-", PETSTORE_SPEC).unwrap_err();
    let message = err.to_string();
    assert!(message.contains(PETSTORE_SPEC), "{message}");
    assert!(message.contains("apis/other/versions/-/specs/-"), "{message}");
    assert!(message.contains("expected \"other\", found \"petstore\""), "{message}");
}

#[test]
fn kinds_must_agree_exactly() {
    match matches("apis/-", PETSTORE_SPEC) {
        Err(MatchError::KindMismatch {
            resource_kind,
            pattern_kind,
            ..
        }) => {
            assert_eq!(resource_kind, ResourceKind::Spec);
            assert_eq!(pattern_kind, ResourceKind::Api);
        }
        other => panic!("unexpected result {other:?}"),
    }
    assert!(matches!(
        matches("apis/-/versions/-/specs/-/artifacts/-", PETSTORE_SPEC),
        Err(MatchError::KindMismatch { .. })
    ));
}

#[test]
fn unparsable_target_is_a_parse_error() {
    assert!(matches!(matches("apis/-/versions", PETSTORE_SPEC), Err(MatchError::Parse(_))));
    assert!(matches!(matches("specs/-", PETSTORE_SPEC), Err(MatchError::Parse(_))));
}

#[test]
fn project_pattern_matches_only_its_project() {
    let pattern = ResourcePattern::parse("projects/demo").unwrap();
    assert!(match_resource_with_pattern(&pattern, &name("projects/demo")).is_ok());
    assert_eq!(mismatch_level(match_resource_with_pattern(&pattern, &name("projects/other"))), "project");
    assert!(match_resource_with_pattern(&pattern, &name("projects/demo/apis/a")).is_err());
}

#[test]
fn resources_outside_the_evaluated_project_never_match() {
    let foreign = "projects/other/locations/global/apis/petstore/versions/v1/specs/openapi";
    assert_eq!(mismatch_level(matches(ALL_SPECS, foreign)), "project");
    let definitions = [ScoreDefinition {
        id: "all-specs".to_string(),
        target_resource: PatternSelector::new(ALL_SPECS),
        ..ScoreDefinition::default()
    }];
    let selected = select_matching_definitions(
        &definitions,
        &name(foreign),
        PARENT,
    );
    assert!(selected.is_empty());
}

// ============================================================================
// SECTION: Revisions, Deployments, Artifacts
// ============================================================================

#[test]
fn revision_slots_follow_pattern() {
    let revised = format!("{PETSTORE_SPEC}@r1");
    assert!(matches("apis/-/versions/-/specs/-@r1", &revised).is_ok());
    assert!(matches("apis/-/versions/-/specs/-@-", &revised).is_ok());
    assert!(matches(ALL_SPECS, &revised).is_ok());
    assert_eq!(mismatch_level(matches("apis/-/versions/-/specs/-@r2", &revised)), "revision");
    assert_eq!(mismatch_level(matches("apis/-/versions/-/specs/-@r1", PETSTORE_SPEC)), "revision");
}

#[test]
fn deployments_match_by_api_and_deployment() {
    let deployment = "projects/demo/locations/global/apis/petstore/deployments/prod";
    assert!(matches("apis/-/deployments/prod", deployment).is_ok());
    assert_eq!(mismatch_level(matches("apis/-/deployments/staging", deployment)), "deployment");
    assert!(matches!(
        matches("apis/-/versions/-", deployment),
        Err(MatchError::KindMismatch { .. })
    ));
}

#[test]
fn artifacts_match_through_their_parent() {
    let lint = format!("{PETSTORE_SPEC}/artifacts/lint");
    assert!(matches("apis/-/versions/-/specs/-/artifacts/lint", &lint).is_ok());
    assert!(matches("apis/-/versions/-/specs/-/artifacts/-", &lint).is_ok());
    assert_eq!(
        mismatch_level(matches("apis/-/versions/-/specs/-/artifacts/complexity", &lint)),
        "artifact"
    );
    assert!(matches!(
        matches("apis/-/versions/-/artifacts/lint", &lint),
        Err(MatchError::KindMismatch { .. })
    ));
    assert!(matches!(
        matches("apis/-/versions/-/specs/-/artifacts/lint", "projects/demo/apis/a/versions/v/artifacts/lint"),
        Err(MatchError::KindMismatch { .. })
    ));
}

#[test]
fn unsubstituted_reference_never_matches() {
    let pattern = ResourcePattern::parse("projects/demo/apis/$resource.api").unwrap();
    assert!(match_resource_with_pattern(&pattern, &name("projects/demo/apis/a")).is_err());
}

// ============================================================================
// SECTION: Definition Selection
// ============================================================================

#[test]
fn selection_keeps_matching_definitions_in_order() {
    let definition = |id: &str, pattern: &str| ScoreDefinition {
        id: id.to_string(),
        target_resource: PatternSelector::new(pattern),
        ..ScoreDefinition::default()
    };
    let definitions = vec![
        definition("all-specs", ALL_SPECS),
        definition("other-api", "apis/other/versions/-/specs/-"),
        definition("broken", "apis/-/versions"),
        definition("apis", "apis/-"),
        definition("petstore-specs", "apis/petstore/versions/-/specs/-"),
    ];
    let selected: Vec<&str> = select_matching_definitions(&definitions, &name(PETSTORE_SPEC), PARENT)
        .into_iter()
        .map(|definition| definition.id.as_str())
        .collect();
    assert_eq!(selected, vec!["all-specs", "petstore-specs"]);
}
