// crates/mfa-gate-core/src/runtime/resolver.rs
// ============================================================================
// Module: Failure Mode Resolver
// Description: Layered resolution of the effective provider failure mode.
// Purpose: Combine service policy, provider default, and the fail-safe fallback.
// Dependencies: crate::core, serde
// ============================================================================

//! ## Overview
//! Exactly one effective failure mode is determined per availability check,
//! consulting three layers in a fixed order:
//!
//! 1. the service's multifactor policy, unless it is `NOT_SET`;
//! 2. the provider's global failure mode, unless absent or `NOT_SET`;
//! 3. `CLOSED`.
//!
//! A layer holding the `NOT_SET` sentinel counts as unconfigured, so the
//! effective mode is never `NOT_SET`. Operators who configure nothing get
//! fail-closed behavior.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;

use crate::core::ConfigurationError;
use crate::core::FailureMode;
use crate::core::MultifactorPolicy;

// ============================================================================
// SECTION: Resolution Types
// ============================================================================

/// Layer that supplied the effective failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureModeSource {
    /// Per-service multifactor policy.
    ServicePolicy,
    /// Provider-wide global failure mode.
    ProviderGlobal,
    /// Hard-coded fail-closed fallback.
    Default,
}

impl FailureModeSource {
    /// Returns a stable label for the source.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ServicePolicy => "service_policy",
            Self::ProviderGlobal => "provider_global",
            Self::Default => "default",
        }
    }
}

/// Effective failure mode together with the layer that supplied it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedFailureMode {
    /// Effective failure mode; never `NotSet`.
    pub mode: FailureMode,
    /// Layer that supplied the mode.
    pub source: FailureModeSource,
}

// ============================================================================
// SECTION: Resolver
// ============================================================================

/// Resolves the effective failure mode for an availability check.
pub struct FailureModeResolver;

impl FailureModeResolver {
    /// Fallback used when neither the service nor the provider sets a mode.
    pub const DEFAULT_MODE: FailureMode = FailureMode::Closed;

    /// Resolves the effective mode from typed layers.
    #[must_use]
    pub const fn resolve(
        policy: &MultifactorPolicy,
        global_failure_mode: Option<FailureMode>,
    ) -> ResolvedFailureMode {
        if policy.failure_mode.is_set() {
            return ResolvedFailureMode {
                mode: policy.failure_mode,
                source: FailureModeSource::ServicePolicy,
            };
        }
        if let Some(mode) = global_failure_mode
            && mode.is_set()
        {
            return ResolvedFailureMode {
                mode,
                source: FailureModeSource::ProviderGlobal,
            };
        }
        ResolvedFailureMode {
            mode: Self::DEFAULT_MODE,
            source: FailureModeSource::Default,
        }
    }

    /// Resolves the effective mode when the provider default is still free text.
    ///
    /// Blank or absent text is treated as unset. The text is only parsed when
    /// the service policy leaves the mode unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownFailureMode`] when the provider
    /// default must be consulted and does not name a failure mode.
    pub fn resolve_text(
        policy: &MultifactorPolicy,
        global_failure_mode: Option<&str>,
    ) -> Result<ResolvedFailureMode, ConfigurationError> {
        if policy.failure_mode.is_set() {
            return Ok(Self::resolve(policy, None));
        }
        let global = match global_failure_mode {
            Some(text) if !text.trim().is_empty() => Some(text.parse::<FailureMode>()?),
            _ => None,
        };
        Ok(Self::resolve(policy, global))
    }
}
