// crates/catalog-scoring-core/src/runtime/matcher.rs
// ============================================================================
// Module: Resource Matcher
// Description: Matches concrete catalog resources against target patterns.
// Purpose: Select which score definitions apply to a candidate resource.
// Dependencies: crate::core::{definitions, errors, names}, tracing
// ============================================================================

//! ## Overview
//! The evaluation pipeline calls [`match_resource_with_target`] once per
//! (definition, candidate) pair. The target is rooted at the project being
//! evaluated, so resources from any other project never match. Kinds must
//! agree exactly and each pattern slot must be a wildcard or equal the
//! resource identifier. Target filters are opaque and not evaluated here.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::definitions::PatternSelector;
use crate::core::definitions::ScoreDefinition;
use crate::core::errors::MatchError;
use crate::core::names::Identifier;
use crate::core::names::Resource;
use crate::core::names::ResourceName;
use crate::core::names::ResourcePattern;
use crate::core::names::Segment;

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Checks whether `resource` satisfies `target`, rooted at `project`.
///
/// # Errors
///
/// Returns [`MatchError::Parse`] when the target does not parse,
/// [`MatchError::SegmentMismatch`] at level `project` when `resource` lies
/// outside `project`, [`MatchError::KindMismatch`] when kinds differ, and
/// [`MatchError::SegmentMismatch`] naming the first differing level.
pub fn match_resource_with_target(
    target: &PatternSelector,
    resource: &ResourceName,
    project: &str,
) -> Result<(), MatchError> {
    let pattern = ResourcePattern::parse(&format!("{project}/{}", target.pattern))?;
    match_resource_with_pattern(&pattern, resource)
}

/// Checks whether `resource` satisfies an already parsed `pattern`.
///
/// # Errors
///
/// Returns [`MatchError`] describing the first mismatch.
pub fn match_resource_with_pattern(
    pattern: &ResourcePattern,
    resource: &ResourceName,
) -> Result<(), MatchError> {
    let matcher = Matcher {
        root_pattern: pattern,
        root_resource: resource,
    };
    matcher.segment("project", pattern.project(), resource.project())?;
    matcher.walk(pattern, resource)
}

/// Returns the definitions whose target matches `resource`, in input order.
///
/// Definitions with unparsable targets are skipped.
#[must_use]
pub fn select_matching_definitions<'a>(
    definitions: &'a [ScoreDefinition],
    resource: &ResourceName,
    project: &str,
) -> Vec<&'a ScoreDefinition> {
    definitions
        .iter()
        .filter(|definition| {
            match match_resource_with_target(&definition.target_resource, resource, project) {
                Ok(()) => true,
                Err(err) => {
                    tracing::trace!(
                        definition = %definition.id,
                        resource = %resource,
                        error = %err,
                        "score definition does not apply"
                    );
                    false
                }
            }
        })
        .collect()
}

// ============================================================================
// SECTION: Matching
// ============================================================================

/// Holds the top-level operands so nested mismatches report full names.
struct Matcher<'a> {
    /// Pattern passed by the caller.
    root_pattern: &'a ResourcePattern,
    /// Resource passed by the caller.
    root_resource: &'a ResourceName,
}

impl Matcher<'_> {
    /// Compares `pattern` and `resource` level by level.
    fn walk(&self, pattern: &ResourcePattern, resource: &ResourceName) -> Result<(), MatchError> {
        match pattern {
            Resource::Project {
                ..
            } => {
                let Resource::Project {
                    ..
                } = resource
                else {
                    return Err(self.kind_mismatch());
                };
                Ok(())
            }
            Resource::Api {
                api: api_pattern,
                ..
            } => {
                let Resource::Api {
                    api,
                    ..
                } = resource
                else {
                    return Err(self.kind_mismatch());
                };
                self.segment("api", api_pattern, api)
            }
            Resource::Version {
                api: api_pattern,
                version: version_pattern,
                ..
            } => {
                let Resource::Version {
                    api,
                    version,
                    ..
                } = resource
                else {
                    return Err(self.kind_mismatch());
                };
                self.segment("api", api_pattern, api)?;
                self.segment("version", version_pattern, version)
            }
            Resource::Spec {
                api: api_pattern,
                version: version_pattern,
                spec: spec_pattern,
                revision: revision_pattern,
                ..
            } => {
                let Resource::Spec {
                    api,
                    version,
                    spec,
                    revision,
                    ..
                } = resource
                else {
                    return Err(self.kind_mismatch());
                };
                self.segment("api", api_pattern, api)?;
                self.segment("version", version_pattern, version)?;
                self.segment("spec", spec_pattern, spec)?;
                self.revision(revision_pattern.as_ref(), revision.as_ref())
            }
            Resource::Deployment {
                api: api_pattern,
                deployment: deployment_pattern,
                revision: revision_pattern,
                ..
            } => {
                let Resource::Deployment {
                    api,
                    deployment,
                    revision,
                    ..
                } = resource
                else {
                    return Err(self.kind_mismatch());
                };
                self.segment("api", api_pattern, api)?;
                self.segment("deployment", deployment_pattern, deployment)?;
                self.revision(revision_pattern.as_ref(), revision.as_ref())
            }
            Resource::Artifact {
                parent: parent_pattern,
                artifact: artifact_pattern,
            } => {
                let Resource::Artifact {
                    parent,
                    artifact,
                } = resource
                else {
                    return Err(self.kind_mismatch());
                };
                self.walk(parent_pattern, parent)?;
                self.segment("artifact", artifact_pattern, artifact)
            }
        }
    }

    /// Compares one slot.
    fn segment(
        &self,
        level: &'static str,
        pattern: &Segment,
        identifier: &Identifier,
    ) -> Result<(), MatchError> {
        if pattern.matches(identifier) {
            Ok(())
        } else {
            Err(self.segment_mismatch(level, pattern.to_string(), identifier.to_string()))
        }
    }

    /// Compares revision slots; an absent pattern revision accepts any revision.
    fn revision(
        &self,
        pattern: Option<&Segment>,
        revision: Option<&Identifier>,
    ) -> Result<(), MatchError> {
        match (pattern, revision) {
            (None, _) | (Some(Segment::Wildcard), _) => Ok(()),
            (Some(pattern), Some(revision)) => self.segment("revision", pattern, revision),
            (Some(pattern), None) => {
                Err(self.segment_mismatch("revision", pattern.to_string(), String::new()))
            }
        }
    }

    /// Builds a kind mismatch error for the root operands.
    fn kind_mismatch(&self) -> MatchError {
        MatchError::KindMismatch {
            resource: self.root_resource.to_string(),
            pattern: self.root_pattern.to_string(),
            resource_kind: self.root_resource.kind(),
            pattern_kind: self.root_pattern.kind(),
        }
    }

    /// Builds a segment mismatch error for the root operands.
    fn segment_mismatch(&self, level: &'static str, expected: String, actual: String) -> MatchError {
        MatchError::SegmentMismatch {
            level,
            expected,
            actual,
            resource: self.root_resource.to_string(),
            pattern: self.root_pattern.to_string(),
        }
    }
}
