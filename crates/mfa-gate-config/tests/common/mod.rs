// crates/mfa-gate-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config validation tests.
// Purpose: Reduce duplication across integration tests for mfa-gate-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use mfa_gate_config::ConfigError;
use mfa_gate_config::MfaGateConfig;

/// Shared result type for config suites.
pub type TestResult = Result<(), String>;

/// Parses a TOML string into an `MfaGateConfig` for tests.
pub fn config_from_toml(toml_str: &str) -> Result<MfaGateConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Returns a config with one provider and one service.
pub fn minimal_config() -> Result<MfaGateConfig, toml::de::Error> {
    config_from_toml(
        r#"
[[providers]]
kind = "duo"
id = "mfa-duo"
order = 1

[[services]]
service_id = "https://app.example.org"
"#,
    )
}

/// Asserts that `result` is an error whose message contains `needle`.
pub fn assert_invalid<T>(result: Result<T, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid config".to_string()),
    }
}
