// crates/catalog-scoring-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config validation tests.
// Purpose: Reduce duplication across integration tests for catalog-scoring-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use catalog_scoring_config::ConfigError;

/// Parses a TOML string into a `ScoringConfig` for tests.
pub fn config_from_toml(
    toml_str: &str,
) -> Result<catalog_scoring_config::ScoringConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Asserts that a result is an error whose message contains `needle`.
pub fn assert_invalid<T>(result: Result<T, ConfigError>, needle: &str) -> Result<(), String> {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error '{message}' did not contain '{needle}'"))
            }
        }
        Ok(_) => Err("expected invalid config".to_string()),
    }
}
