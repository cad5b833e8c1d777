// crates/catalog-scoring-config/src/lib.rs
// ============================================================================
// Module: Catalog Scoring Config Library
// Description: Configuration model and loading for catalog-scoring.toml.
// Purpose: Single source of truth for validator limit configuration.
// Dependencies: catalog-scoring-core, serde, toml
// ============================================================================

//! ## Overview
//! `catalog-scoring-config` loads the TOML file that sizes the definition
//! validator. Loading is fail-closed: oversized, non-UTF-8, or out-of-range
//! configuration is rejected rather than clamped.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
