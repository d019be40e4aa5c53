// crates/mfa-gate-config/src/config.rs
// ============================================================================
// Module: MFA Gate Configuration
// Description: Configuration loading and validation for MFA providers and services.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: mfa-gate-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Provider settings and service policies are parsed into core types once, at
//! setup, so invalid identifiers or failure mode names never reach a login.
//!
//! ```toml
//! [[providers]]
//! kind = "duo"
//! id = "mfa-duo"
//! order = 1
//! global_failure_mode = "CLOSED"
//!
//! [[services]]
//! service_id = "https://app.example.org"
//! failure_mode = "OPEN"
//! ```

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use mfa_gate_core::FailureMode;
use mfa_gate_core::ProviderSettings;
use mfa_gate_core::Service;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "mfa-gate.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "MFA_GATE_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Top-level MFA gate configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MfaGateConfig {
    /// Configured providers.
    #[serde(default)]
    pub providers: Vec<ProviderConfig>,
    /// Registered services and their multifactor policies.
    #[serde(default)]
    pub services: Vec<ServiceConfig>,
}

impl MfaGateConfig {
    /// Loads configuration using the default resolution rules.
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
        let mut identities = BTreeSet::new();
        for provider in &self.providers {
            provider.validate()?;
            if !identities.insert((provider.order, provider.id.trim())) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate provider identity: order {} id `{}`",
                    provider.order,
                    provider.id.trim()
                )));
            }
        }
        let mut service_ids = BTreeSet::new();
        for service in &self.services {
            service.validate()?;
            if !service_ids.insert(service.service_id.trim()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate service_id `{}`",
                    service.service_id.trim()
                )));
            }
        }
        Ok(())
    }

    /// Returns the service registered under `service_id`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the stored failure mode is invalid.
    pub fn service(&self, service_id: &str) -> Result<Option<Service>, ConfigError> {
        self.services
            .iter()
            .find(|service| service.service_id.trim() == service_id)
            .map(ServiceConfig::to_service)
            .transpose()
    }
}

/// Provider configuration entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Operator-facing label for the provider kind.
    #[serde(default)]
    pub kind: Option<String>,
    /// Identifier pattern matched against triggering signals.
    pub id: String,
    /// Provider order.
    #[serde(default)]
    pub order: i32,
    /// Provider-wide default failure mode.
    #[serde(default)]
    pub global_failure_mode: Option<String>,
}

impl ProviderConfig {
    /// Parses the entry into typed provider settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the identifier is blank or invalid, or the
    /// failure mode is unknown.
    pub fn descriptor_settings(&self) -> Result<ProviderSettings, ConfigError> {
        ProviderSettings::parse(self.id.trim(), self.order, self.global_failure_mode.as_deref())
            .map_err(|err| ConfigError::Invalid(format!("provider {}: {err}", self.label())))
    }

    /// Validates provider configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(kind) = &self.kind
            && kind.trim().is_empty()
        {
            return Err(ConfigError::Invalid("provider kind is empty".to_string()));
        }
        self.descriptor_settings().map(|_| ())
    }

    /// Returns a label for error messages.
    fn label(&self) -> String {
        match &self.kind {
            Some(kind) => format!("{} (`{}`)", kind.trim(), self.id.trim()),
            None => format!("`{}`", self.id.trim()),
        }
    }
}

/// Service configuration entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Service identifier.
    pub service_id: String,
    /// Service-level failure mode; absent means `NOT_SET`.
    #[serde(default)]
    pub failure_mode: Option<String>,
}

impl ServiceConfig {
    /// Builds the core service value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the failure mode is unknown.
    pub fn to_service(&self) -> Result<Service, ConfigError> {
        let mode = match self.failure_mode.as_deref() {
            Some(text) if !text.trim().is_empty() => text.parse::<FailureMode>().map_err(|err| {
                ConfigError::Invalid(format!("service `{}`: {err}", self.service_id.trim()))
            })?,
            _ => FailureMode::NotSet,
        };
        Ok(Service::new(self.service_id.trim()).with_failure_mode(mode))
    }

    /// Validates service configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.service_id.trim().is_empty() {
            return Err(ConfigError::Invalid("service_id is empty".to_string()));
        }
        self.to_service().map(|_| ())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
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

/// Resolves the config path from the caller or environment defaults.
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
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}
