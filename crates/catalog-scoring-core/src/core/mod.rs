// crates/catalog-scoring-core/src/core/mod.rs
// ============================================================================
// Module: Catalog Scoring Core Types
// Description: Resource names, patterns, definitions, and error taxonomy.
// Purpose: Group the data model shared by the scoring engines.
// Dependencies: crate::core::{definitions, errors, names, references}
// ============================================================================

//! ## Overview
//! Core types are pure data with parsing and resolution helpers; the engines
//! that validate and match them live in [`crate::runtime`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod definitions;
pub mod errors;
pub mod names;
pub mod references;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use definitions::BooleanThreshold;
pub use definitions::BooleanType;
pub use definitions::Formula;
pub use definitions::IntegerType;
pub use definitions::NumberRange;
pub use definitions::NumberThreshold;
pub use definitions::PatternSelector;
pub use definitions::PercentType;
pub use definitions::RollupFormula;
pub use definitions::ScoreCardDefinition;
pub use definitions::ScoreDefinition;
pub use definitions::ScoreFormula;
pub use definitions::ScoreType;
pub use definitions::Severity;
pub use errors::CoverageError;
pub use errors::MatchError;
pub use errors::ParseError;
pub use errors::RangeBound;
pub use errors::RangeError;
pub use errors::ReferenceError;
pub use errors::StructuralError;
pub use errors::ValidationError;
pub use names::GLOBAL_LOCATION;
pub use names::Identifier;
pub use names::NameSegment;
pub use names::REFERENCE_PREFIX;
pub use names::ReferenceLevel;
pub use names::Resource;
pub use names::ResourceKind;
pub use names::ResourceName;
pub use names::ResourcePattern;
pub use names::Segment;
pub use names::WILDCARD;
pub use names::parse_resource_name;
pub use names::parse_resource_pattern;
pub use references::get_reference_entity_type;
pub use references::get_reference_entity_value;
pub use references::has_leading_reference;
pub use references::substitute_reference;
