// crates/catalog-scoring-config/src/config.rs
// ============================================================================
// Module: Catalog Scoring Configuration
// Description: Configuration loading and validation for catalog scoring.
// Purpose: Provide strict config parsing with hard limits on validator caps.
// Dependencies: catalog-scoring-core, serde, thiserror, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Every section is optional; an empty file yields the defaults below. Limits
//! must be positive and no larger than their hard maximum.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use catalog_scoring_core::DefinitionValidator;
use catalog_scoring_core::ValidationLimits;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "catalog-scoring.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "CATALOG_SCORING_CONFIG";
/// Maximum configuration file size in bytes.
pub const MAX_CONFIG_FILE_SIZE: usize = 64 * 1024;
/// Maximum length of a single path component.
const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
const MAX_TOTAL_PATH_LENGTH: usize = 4096;

/// Hard maximum for `validation.max_score_formulas`.
pub const MAX_SCORE_FORMULAS: usize = 1024;
/// Hard maximum for `validation.max_score_patterns`.
pub const MAX_SCORE_PATTERNS: usize = 1024;
/// Hard maximum for `validation.max_thresholds`.
pub const MAX_THRESHOLDS: usize = 1024;
/// Hard maximum for `validation.max_expression_bytes`.
pub const MAX_EXPRESSION_BYTES: usize = 1024 * 1024;
/// Hard maximum for `validation.max_pattern_bytes`.
pub const MAX_PATTERN_BYTES: usize = 4096;

// ============================================================================
// SECTION: Config Model
// ============================================================================

/// Top-level catalog scoring configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Definition validator limits.
    #[serde(default)]
    pub validation: ValidationLimitsConfig,
}

impl ScoringConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validation.validate()
    }

    /// Returns a definition validator sized by this configuration.
    #[must_use]
    pub const fn validator(&self) -> DefinitionValidator {
        DefinitionValidator::new(self.validation.to_limits())
    }
}

/// Size caps applied to incoming definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationLimitsConfig {
    /// Enforce the limits below (default on).
    #[serde(default = "default_enforce_limits")]
    pub enforce_limits: bool,
    /// Maximum formulas in a rollup.
    #[serde(default = "default_max_score_formulas")]
    pub max_score_formulas: usize,
    /// Maximum patterns in a score card.
    #[serde(default = "default_max_score_patterns")]
    pub max_score_patterns: usize,
    /// Maximum thresholds per score type.
    #[serde(default = "default_max_thresholds")]
    pub max_thresholds: usize,
    /// Maximum bytes in a score or rollup expression.
    #[serde(default = "default_max_expression_bytes")]
    pub max_expression_bytes: usize,
    /// Maximum bytes in any pattern.
    #[serde(default = "default_max_pattern_bytes")]
    pub max_pattern_bytes: usize,
}

impl Default for ValidationLimitsConfig {
    fn default() -> Self {
        Self {
            enforce_limits: default_enforce_limits(),
            max_score_formulas: default_max_score_formulas(),
            max_score_patterns: default_max_score_patterns(),
            max_thresholds: default_max_thresholds(),
            max_expression_bytes: default_max_expression_bytes(),
            max_pattern_bytes: default_max_pattern_bytes(),
        }
    }
}

impl ValidationLimitsConfig {
    /// Validates each limit against its hard maximum.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first out-of-range field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_limit("validation.max_score_formulas", self.max_score_formulas, MAX_SCORE_FORMULAS)?;
        validate_limit("validation.max_score_patterns", self.max_score_patterns, MAX_SCORE_PATTERNS)?;
        validate_limit("validation.max_thresholds", self.max_thresholds, MAX_THRESHOLDS)?;
        validate_limit(
            "validation.max_expression_bytes",
            self.max_expression_bytes,
            MAX_EXPRESSION_BYTES,
        )?;
        validate_limit("validation.max_pattern_bytes", self.max_pattern_bytes, MAX_PATTERN_BYTES)
    }

    /// Converts the configuration into validator limits.
    #[must_use]
    pub const fn to_limits(&self) -> ValidationLimits {
        if !self.enforce_limits {
            return ValidationLimits::unbounded();
        }
        ValidationLimits {
            max_score_formulas: Some(self.max_score_formulas),
            max_score_patterns: Some(self.max_score_patterns),
            max_thresholds: Some(self.max_thresholds),
            max_expression_bytes: Some(self.max_expression_bytes),
            max_pattern_bytes: Some(self.max_pattern_bytes),
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from the argument or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    if path.components().any(|component| component.as_os_str().len() > MAX_PATH_COMPONENT_LENGTH) {
        return Err(ConfigError::Invalid("config path component too long".to_string()));
    }
    Ok(())
}

/// Rejects zero and values above `max`.
fn validate_limit(field: &str, value: usize, max: usize) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::Invalid(format!("{field} must be greater than zero")));
    }
    if value > max {
        return Err(ConfigError::Invalid(format!("{field} must be at most {max}")));
    }
    Ok(())
}

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default for `validation.enforce_limits`.
const fn default_enforce_limits() -> bool {
    true
}

/// Default for `validation.max_score_formulas`.
const fn default_max_score_formulas() -> usize {
    64
}

/// Default for `validation.max_score_patterns`.
const fn default_max_score_patterns() -> usize {
    64
}

/// Default for `validation.max_thresholds`.
const fn default_max_thresholds() -> usize {
    64
}

/// Default for `validation.max_expression_bytes`.
const fn default_max_expression_bytes() -> usize {
    16 * 1024
}

/// Default for `validation.max_pattern_bytes`.
const fn default_max_pattern_bytes() -> usize {
    1024
}

#[cfg(test)]
mod tests;
