// crates/mfa-gate-core/src/core/errors.rs
// ============================================================================
// Module: MFA Gate Configuration Errors
// Description: Errors raised while turning provider settings into typed values.
// Purpose: Surface deployment misconfiguration loudly instead of defaulting.
// Dependencies: thiserror
// ============================================================================

//! Configuration errors shared by pattern compilation, failure mode parsing,
//! and provider construction.

use thiserror::Error;

/// Provider or policy configuration is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Provider identifier pattern failed to compile.
    #[error("invalid provider identifier pattern `{pattern}`: {reason}")]
    InvalidPattern {
        /// Pattern text as configured.
        pattern: String,
        /// Compiler diagnostic.
        reason: String,
    },
    /// Failure mode text does not name a known mode.
    #[error("unknown failure mode: {0}")]
    UnknownFailureMode(String),
    /// Provider was built without an identifier pattern.
    #[error("provider identifier is required")]
    MissingIdentifier,
}
