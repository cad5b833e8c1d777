// crates/catalog-scoring-core/src/core/references.rs
// ============================================================================
// Module: Pattern Back-References
// Description: Resolution of `$resource.<level>` tokens against a target.
// Purpose: Tie formula and score patterns to the resource being scored.
// Dependencies: crate::core::{errors, names}
// ============================================================================

//! ## Overview
//! Formula and score-card patterns are written relative to the scored
//! resource, e.g. `$resource.spec/artifacts/complexity`. The leading token
//! names an ancestor level of the target; resolution replaces it with that
//! ancestor's canonical name.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::errors::ParseError;
use crate::core::errors::ReferenceError;
use crate::core::names::NameSegment;
use crate::core::names::REFERENCE_PREFIX;
use crate::core::names::ReferenceLevel;
use crate::core::names::Resource;

/// Label used when attaching a pattern to token errors.
const PATTERN_SUBJECT: &str = "pattern";

// ============================================================================
// SECTION: Reference Lookup
// ============================================================================

/// Returns the level named by the first `$resource.` token in `pattern`, or
/// [`ReferenceLevel::Default`] when the pattern carries no reference.
///
/// # Errors
///
/// Returns [`ParseError`] when a `$resource` token has a malformed or
/// unrecognized level suffix.
pub fn get_reference_entity_type(pattern: &str) -> Result<ReferenceLevel, ParseError> {
    pattern
        .split('/')
        .find(|segment| segment.starts_with(REFERENCE_PREFIX))
        .map_or(Ok(ReferenceLevel::Default), |token| {
            ReferenceLevel::from_token(token).map_err(|err| err.within(PATTERN_SUBJECT, pattern))
        })
}

/// Returns true when the first segment of `pattern` is a `$resource` token.
#[must_use]
pub fn has_leading_reference(pattern: &str) -> bool {
    pattern.split('/').next().is_some_and(|segment| segment.starts_with(REFERENCE_PREFIX))
}

/// Returns the ancestor of `target` named by the reference in `pattern`.
///
/// A pattern without a reference resolves to `target` itself.
///
/// # Errors
///
/// Returns [`ReferenceError::Malformed`] for a bad token and
/// [`ReferenceError::Unresolvable`] when `target` has no such level (for
/// example `$resource.spec` against an API).
pub fn get_reference_entity_value<S: NameSegment>(
    pattern: &str,
    target: &Resource<S>,
) -> Result<Resource<S>, ReferenceError> {
    let level = get_reference_entity_type(pattern)?;
    let Some(kind) = level.kind() else {
        return Ok(target.clone());
    };
    target.ancestor(kind).ok_or_else(|| ReferenceError::Unresolvable {
        pattern: pattern.to_string(),
        level,
        target: target.to_string(),
        kind: target.kind(),
    })
}

/// Replaces the reference token in `pattern` with the canonical name of the
/// referenced ancestor of `target`.
///
/// Patterns without a reference are returned unchanged.
///
/// # Errors
///
/// Returns [`ReferenceError`] when the reference is malformed or unresolvable.
pub fn substitute_reference<S: NameSegment>(
    pattern: &str,
    target: &Resource<S>,
) -> Result<String, ReferenceError> {
    let level = get_reference_entity_type(pattern)?;
    if level == ReferenceLevel::Default {
        return Ok(pattern.to_string());
    }
    let entity = get_reference_entity_value(pattern, target)?;
    let token = format!("{REFERENCE_PREFIX}.{level}");
    Ok(pattern.replacen(&token, &entity.to_string(), 1))
}
