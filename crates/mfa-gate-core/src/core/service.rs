// crates/mfa-gate-core/src/core/service.rs
// ============================================================================
// Module: Relying Party Services
// Description: Service and multifactor policy values supplied per login.
// Purpose: Carry the per-service failure mode into availability decisions.
// Dependencies: serde
// ============================================================================

//! Services are caller-owned and read-only to the gate. Only the service
//! identifier (for diagnostics) and the multifactor policy are modelled.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::failure_mode::FailureMode;
use crate::core::identifiers::ServiceId;

// ============================================================================
// SECTION: Service Types
// ============================================================================

/// Multifactor policy attached to a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MultifactorPolicy {
    /// Per-service failure mode; `NotSet` defers to the provider default.
    #[serde(default)]
    pub failure_mode: FailureMode,
}

impl MultifactorPolicy {
    /// Creates a policy with the given failure mode.
    #[must_use]
    pub const fn new(failure_mode: FailureMode) -> Self {
        Self {
            failure_mode,
        }
    }
}

/// Relying party being authenticated to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Service identifier used in diagnostics.
    pub service_id: ServiceId,
    /// Multifactor policy for the service.
    #[serde(default)]
    pub multifactor_policy: MultifactorPolicy,
}

impl Service {
    /// Creates a service with no explicit failure mode.
    #[must_use]
    pub fn new(service_id: impl Into<ServiceId>) -> Self {
        Self {
            service_id: service_id.into(),
            multifactor_policy: MultifactorPolicy::default(),
        }
    }

    /// Returns the service with the given per-service failure mode.
    #[must_use]
    pub fn with_failure_mode(mut self, failure_mode: FailureMode) -> Self {
        self.multifactor_policy = MultifactorPolicy::new(failure_mode);
        self
    }
}
