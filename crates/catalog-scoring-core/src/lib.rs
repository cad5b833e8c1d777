// crates/catalog-scoring-core/src/lib.rs
// ============================================================================
// Module: Catalog Scoring Core Library
// Description: Public API surface for the catalog scoring rule engine.
// Purpose: Expose resource names, definitions, validators, and the matcher.
// Dependencies: crate::{core, runtime}
// ============================================================================

//! ## Overview
//! Catalog scoring core validates declarative score and score-card
//! definitions before they are stored, and matches catalog resources against
//! definition targets at evaluation time. It performs no I/O, holds no shared
//! state, and never evaluates score expressions or filters.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use runtime::DefinitionValidator;
pub use runtime::PERCENT_MAX;
pub use runtime::PERCENT_MIN;
pub use runtime::ValidationLimits;
pub use runtime::match_resource_with_pattern;
pub use runtime::match_resource_with_target;
pub use runtime::select_matching_definitions;
pub use runtime::validate_boolean_thresholds;
pub use runtime::validate_number_thresholds;
pub use runtime::validate_score_card_definition;
pub use runtime::validate_score_definition;
