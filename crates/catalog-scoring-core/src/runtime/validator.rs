// crates/catalog-scoring-core/src/runtime/validator.rs
// ============================================================================
// Module: Definition Validator
// Description: Write-path validation for score and score-card definitions.
// Purpose: Reject malformed definitions with every problem reported at once.
// Dependencies: crate::core, crate::runtime::thresholds, tracing
// ============================================================================

//! ## Overview
//! Validation is pure and repeatable: the same definition always yields the
//! same error list, and a non-empty list rejects the write. Independent checks
//! all run; formula and score-pattern reference checks are skipped only when
//! the target is rejected, since they are defined relative to the target.
//!
//! [`DefinitionValidator`] additionally enforces configured size limits; the
//! free functions validate without limits.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::definitions::Formula;
use crate::core::definitions::ScoreCardDefinition;
use crate::core::definitions::ScoreDefinition;
use crate::core::definitions::ScoreFormula;
use crate::core::definitions::ScoreType;
use crate::core::errors::ReferenceError;
use crate::core::errors::StructuralError;
use crate::core::errors::ValidationError;
use crate::core::names::ReferenceLevel;
use crate::core::names::ResourcePattern;
use crate::core::references::get_reference_entity_type;
use crate::core::references::has_leading_reference;
use crate::core::references::substitute_reference;
use crate::runtime::thresholds::PERCENT_MAX;
use crate::runtime::thresholds::PERCENT_MIN;
use crate::runtime::thresholds::validate_boolean_thresholds;
use crate::runtime::thresholds::validate_number_thresholds;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Suffix marking a pattern that ends in an unresolved collection.
const WILDCARD_SUFFIX: &str = "/-";

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Optional size caps applied by [`DefinitionValidator`].
///
/// # Invariants
/// - `None` disables the corresponding check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationLimits {
    /// Maximum formulas in a rollup.
    pub max_score_formulas: Option<usize>,
    /// Maximum patterns in a score card.
    pub max_score_patterns: Option<usize>,
    /// Maximum thresholds per score type.
    pub max_thresholds: Option<usize>,
    /// Maximum bytes in a score or rollup expression.
    pub max_expression_bytes: Option<usize>,
    /// Maximum bytes in any pattern.
    pub max_pattern_bytes: Option<usize>,
}

impl ValidationLimits {
    /// Returns limits with every check disabled.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_score_formulas: None,
            max_score_patterns: None,
            max_thresholds: None,
            max_expression_bytes: None,
            max_pattern_bytes: None,
        }
    }
}

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Validates a score definition under `parent` without size limits.
#[must_use]
pub fn validate_score_definition(parent: &str, definition: &ScoreDefinition) -> Vec<ValidationError> {
    DefinitionValidator::default().validate_score_definition(parent, definition)
}

/// Validates a score-card definition under `parent` without size limits.
#[must_use]
pub fn validate_score_card_definition(
    parent: &str,
    definition: &ScoreCardDefinition,
) -> Vec<ValidationError> {
    DefinitionValidator::default().validate_score_card_definition(parent, definition)
}

/// Validator for definitions arriving at the catalog write path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefinitionValidator {
    /// Size limits enforced alongside structural checks.
    limits: ValidationLimits,
}

impl DefinitionValidator {
    /// Creates a validator enforcing `limits`.
    #[must_use]
    pub const fn new(limits: ValidationLimits) -> Self {
        Self {
            limits,
        }
    }

    /// Returns the configured limits.
    #[must_use]
    pub const fn limits(&self) -> &ValidationLimits {
        &self.limits
    }

    /// Validates a score definition whose target is relative to `parent`.
    #[must_use]
    pub fn validate_score_definition(
        &self,
        parent: &str,
        definition: &ScoreDefinition,
    ) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let target_pattern = &definition.target_resource.pattern;
        check_bytes(
            "target_resource.pattern",
            target_pattern,
            self.limits.max_pattern_bytes,
            &mut errors,
        );

        // TODO: validate target_resource.filter once the filter grammar crate exists.
        match parse_target(parent, target_pattern) {
            Ok(target) => self.validate_formula(&target, definition.formula.as_ref(), &mut errors),
            Err(err) => errors.push(err),
        }

        self.validate_score_type(definition.score_type.as_ref(), &mut errors);

        log_rejection("score_definition", parent, &definition.id, &errors);
        errors
    }

    /// Validates a score-card definition whose target is relative to `parent`.
    #[must_use]
    pub fn validate_score_card_definition(
        &self,
        parent: &str,
        definition: &ScoreCardDefinition,
    ) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let target_pattern = &definition.target_resource.pattern;
        check_bytes(
            "target_resource.pattern",
            target_pattern,
            self.limits.max_pattern_bytes,
            &mut errors,
        );

        let target = parse_target(parent, target_pattern);
        if let Err(err) = &target {
            errors.push(err.clone());
        }

        if definition.score_patterns.is_empty() {
            errors.push(StructuralError::MissingScorePatterns.into());
            log_rejection("score_card_definition", parent, &definition.id, &errors);
            return errors;
        }
        check_count(
            "score_patterns",
            definition.score_patterns.len(),
            self.limits.max_score_patterns,
            &mut errors,
        );

        for pattern in &definition.score_patterns {
            check_bytes("score_pattern", pattern, self.limits.max_pattern_bytes, &mut errors);
        }
        if let Ok(target) = &target {
            for pattern in &definition.score_patterns {
                validate_references(target, pattern, &mut errors);
                check_wildcard_tail("score_pattern", pattern, &mut errors);
            }
        }

        log_rejection("score_card_definition", parent, &definition.id, &errors);
        errors
    }

    /// Dispatches on the formula oneof.
    fn validate_formula(
        &self,
        target: &ResourcePattern,
        formula: Option<&Formula>,
        errors: &mut Vec<ValidationError>,
    ) {
        match formula {
            Some(Formula::ScoreFormula(formula)) => {
                self.validate_score_formula(target, formula, errors);
            }
            Some(Formula::RollupFormula(rollup)) => {
                if rollup.score_formulas.is_empty() {
                    errors.push(StructuralError::MissingScoreFormulas.into());
                }
                check_count(
                    "rollup_formula.score_formulas",
                    rollup.score_formulas.len(),
                    self.limits.max_score_formulas,
                    errors,
                );
                for formula in &rollup.score_formulas {
                    self.validate_score_formula(target, formula, errors);
                }
                if rollup.rollup_expression.is_empty() {
                    errors.push(StructuralError::MissingRollupExpression.into());
                }
                check_bytes(
                    "rollup_formula.rollup_expression",
                    &rollup.rollup_expression,
                    self.limits.max_expression_bytes,
                    errors,
                );
            }
            None => errors.push(StructuralError::MissingFormula.into()),
        }
    }

    /// Validates one score formula against the resolved target.
    fn validate_score_formula(
        &self,
        target: &ResourcePattern,
        formula: &ScoreFormula,
        errors: &mut Vec<ValidationError>,
    ) {
        let pattern = &formula.artifact.pattern;
        check_bytes(
            "score_formula.artifact.pattern",
            pattern,
            self.limits.max_pattern_bytes,
            errors,
        );
        validate_references(target, pattern, errors);
        check_wildcard_tail("score_formula.artifact.pattern", pattern, errors);

        if formula.score_expression.is_empty() {
            errors.push(StructuralError::MissingScoreExpression.into());
        }
        check_bytes(
            "score_formula.score_expression",
            &formula.score_expression,
            self.limits.max_expression_bytes,
            errors,
        );

        if formula.reference_id.contains('-') {
            errors.push(
                StructuralError::InvalidReferenceId {
                    reference_id: formula.reference_id.clone(),
                }
                .into(),
            );
        }
    }

    /// Dispatches on the type oneof and validates its thresholds.
    fn validate_score_type(&self, score_type: Option<&ScoreType>, errors: &mut Vec<ValidationError>) {
        match score_type {
            Some(ScoreType::Percent(percent)) => {
                self.check_thresholds(percent.thresholds.len(), errors);
                errors.extend(validate_number_thresholds(
                    &percent.thresholds,
                    PERCENT_MIN,
                    PERCENT_MAX,
                ));
            }
            Some(ScoreType::Integer(integer)) => {
                self.check_thresholds(integer.thresholds.len(), errors);
                // A single-valued domain is not an integer score.
                if integer.min_value >= integer.max_value {
                    errors.push(
                        StructuralError::InvalidIntegerBounds {
                            min_value: integer.min_value,
                            max_value: integer.max_value,
                        }
                        .into(),
                    );
                } else {
                    errors.extend(validate_number_thresholds(
                        &integer.thresholds,
                        integer.min_value,
                        integer.max_value,
                    ));
                }
            }
            Some(ScoreType::Boolean(boolean)) => {
                self.check_thresholds(boolean.thresholds.len(), errors);
                errors.extend(validate_boolean_thresholds(&boolean.thresholds));
            }
            None => errors.push(StructuralError::MissingType.into()),
        }
    }

    /// Applies the threshold count limit.
    fn check_thresholds(&self, count: usize, errors: &mut Vec<ValidationError>) {
        check_count("thresholds", count, self.limits.max_thresholds, errors);
    }
}

// ============================================================================
// SECTION: Limit Helpers
// ============================================================================

/// Records a limit error when `actual` exceeds `limit`.
fn check_count(
    field: &'static str,
    actual: usize,
    limit: Option<usize>,
    errors: &mut Vec<ValidationError>,
) {
    if let Some(limit) = limit
        && actual > limit
    {
        errors.push(
            StructuralError::LimitExceeded {
                field,
                limit,
                actual,
            }
            .into(),
        );
    }
}

/// Records a limit error when `value` is longer than `limit` bytes.
fn check_bytes(
    field: &'static str,
    value: &str,
    limit: Option<usize>,
    errors: &mut Vec<ValidationError>,
) {
    check_count(field, value.len(), limit, errors);
}

// ============================================================================
// SECTION: Pattern Helpers
// ============================================================================

/// Checks that `pattern` starts with a `$resource` reference resolvable against
/// `target`, and that the resolved pattern is a valid resource pattern.
fn validate_references(target: &ResourcePattern, pattern: &str, errors: &mut Vec<ValidationError>) {
    match get_reference_entity_type(pattern) {
        Err(err) => errors.push(err.into()),
        Ok(ReferenceLevel::Default) => errors.push(missing_reference(pattern)),
        Ok(_) if !has_leading_reference(pattern) => errors.push(missing_reference(pattern)),
        Ok(_) => match substitute_reference(pattern, target) {
            Ok(resolved) => match ResourcePattern::parse(&resolved) {
                Ok(resolved) if resolved.has_reference() => errors.push(
                    ReferenceError::Unsubstituted {
                        pattern: pattern.to_string(),
                    }
                    .into(),
                ),
                Ok(_) => {}
                Err(err) => errors.push(err.into()),
            },
            Err(err) => errors.push(err.into()),
        },
    }
}

/// Parses the target relative to `parent`.
///
/// A target carrying `$resource` slots is rejected: it has nothing to resolve
/// against and can never match a concrete resource.
fn parse_target(parent: &str, pattern: &str) -> Result<ResourcePattern, ValidationError> {
    let target = ResourcePattern::parse(&format!("{parent}/{pattern}"))?;
    if target.has_reference() {
        return Err(ReferenceError::Unsubstituted {
            pattern: pattern.to_string(),
        }
        .into());
    }
    Ok(target)
}

/// Builds the error for a pattern without a leading reference.
fn missing_reference(pattern: &str) -> ValidationError {
    ReferenceError::Missing {
        pattern: pattern.to_string(),
    }
    .into()
}

/// Rejects patterns ending in a wildcard.
fn check_wildcard_tail(field: &'static str, pattern: &str, errors: &mut Vec<ValidationError>) {
    if pattern.ends_with(WILDCARD_SUFFIX) {
        errors.push(
            StructuralError::WildcardTail {
                field,
                pattern: pattern.to_string(),
            }
            .into(),
        );
    }
}

/// Emits a debug event when a definition is rejected.
fn log_rejection(kind: &'static str, parent: &str, id: &str, errors: &[ValidationError]) {
    if !errors.is_empty() {
        tracing::debug!(kind, parent, definition = id, error_count = errors.len(), "definition rejected");
    }
}
