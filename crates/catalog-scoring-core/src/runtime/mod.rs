// crates/catalog-scoring-core/src/runtime/mod.rs
// ============================================================================
// Module: Catalog Scoring Runtime
// Description: Threshold analysis, definition validation, and resource matching.
// Purpose: Group the pure engines invoked by the write path and evaluation pipeline.
// Dependencies: crate::runtime::{matcher, thresholds, validator}
// ============================================================================

//! ## Overview
//! Every engine here is a pure function of its inputs and safe to call from
//! any number of threads at once.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod matcher;
pub mod thresholds;
pub mod validator;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use matcher::match_resource_with_pattern;
pub use matcher::match_resource_with_target;
pub use matcher::select_matching_definitions;
pub use thresholds::PERCENT_MAX;
pub use thresholds::PERCENT_MIN;
pub use thresholds::validate_boolean_thresholds;
pub use thresholds::validate_number_thresholds;
pub use validator::DefinitionValidator;
pub use validator::ValidationLimits;
pub use validator::validate_score_card_definition;
pub use validator::validate_score_definition;
