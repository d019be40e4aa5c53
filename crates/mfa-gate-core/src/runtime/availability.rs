// crates/mfa-gate-core/src/runtime/availability.rs
// ============================================================================
// Module: Availability Gate
// Description: Apply the effective failure mode around a raw availability probe.
// Purpose: Decide whether login proceeds with, without, or is denied by a provider.
// Dependencies: crate::{core, interfaces, runtime}, serde, thiserror, tracing
// ============================================================================

//! ## Overview
//! The availability gate maps `(effective mode, probe result)` to one of three
//! outcomes:
//!
//! | mode            | probe       | outcome     |
//! |-----------------|-------------|-------------|
//! | `NONE`          | not invoked | `Available` |
//! | any other       | available   | `Available` |
//! | `CLOSED`        | unavailable | `Denied`    |
//! | `OPEN`/`PHANTOM`| unavailable | `Degraded`  |
//!
//! `Denied` is terminal for the call and surfaces to the caller as
//! [`AvailabilityError::Denied`]. `Degraded` is a normal `false` result: the
//! login continues without the provider.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use tracing::warn;

use crate::audit::AvailabilityAuditEvent;
use crate::audit::AvailabilityAuditEventParams;
use crate::core::FailureMode;
use crate::core::Service;
use crate::core::ServiceId;
use crate::interfaces::ProviderError;
use crate::runtime::provider::MultifactorProvider;
use crate::runtime::resolver::FailureModeResolver;
use crate::runtime::resolver::ResolvedFailureMode;

// ============================================================================
// SECTION: Outcomes
// ============================================================================

/// Result of applying a failure mode around a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityOutcome {
    /// Provider participates in the login.
    Available,
    /// Provider is unreachable; login proceeds without it.
    Degraded,
    /// Provider is unreachable and required; login must be denied.
    Denied,
}

impl AvailabilityOutcome {
    /// Returns a stable label for the outcome.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Degraded => "degraded",
            Self::Denied => "denied",
        }
    }
}

/// Full record of one availability decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityDecision {
    /// Effective failure mode and the layer that supplied it.
    pub failure_mode: ResolvedFailureMode,
    /// Whether the raw probe was invoked.
    pub probe_invoked: bool,
    /// Gate outcome.
    pub outcome: AvailabilityOutcome,
}

impl AvailabilityDecision {
    /// Returns true when the provider participates in the login.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self.outcome, AvailabilityOutcome::Available)
    }
}

/// Availability check failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AvailabilityError {
    /// Provider is required by a fail-closed policy and could not be reached.
    #[error("provider {provider} is unavailable and service {service_id} fails closed")]
    Denied {
        /// Provider kind name.
        provider: &'static str,
        /// Service whose login is denied.
        service_id: ServiceId,
    },
    /// The provider probe failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

// ============================================================================
// SECTION: Availability Gate
// ============================================================================

/// Applies a resolved failure mode around a raw availability probe.
#[derive(Debug, Clone, Copy)]
pub struct AvailabilityGate {
    /// Effective failure mode for this check.
    failure_mode: ResolvedFailureMode,
}

impl AvailabilityGate {
    /// Creates a gate for the resolved failure mode.
    #[must_use]
    pub const fn new(failure_mode: ResolvedFailureMode) -> Self {
        Self {
            failure_mode,
        }
    }

    /// Returns the resolved failure mode.
    #[must_use]
    pub const fn failure_mode(&self) -> ResolvedFailureMode {
        self.failure_mode
    }

    /// Applies the gate, invoking the probe unless the mode is `NONE`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when the probe fails.
    pub fn apply<F>(&self, probe: F) -> Result<AvailabilityDecision, ProviderError>
    where
        F: FnOnce() -> Result<bool, ProviderError>,
    {
        let mode = self.failure_mode.mode;
        if mode == FailureMode::None {
            return Ok(self.decision(false, AvailabilityOutcome::Available));
        }
        let outcome = if probe()? {
            AvailabilityOutcome::Available
        } else if mode == FailureMode::Closed {
            AvailabilityOutcome::Denied
        } else {
            AvailabilityOutcome::Degraded
        };
        Ok(self.decision(true, outcome))
    }

    /// Builds a decision record.
    const fn decision(
        &self,
        probe_invoked: bool,
        outcome: AvailabilityOutcome,
    ) -> AvailabilityDecision {
        AvailabilityDecision {
            failure_mode: self.failure_mode,
            probe_invoked,
            outcome,
        }
    }
}

// ============================================================================
// SECTION: Provider Availability
// ============================================================================

impl<A: ?Sized> MultifactorProvider<A> {
    /// Returns true when login may proceed with this provider, false when it
    /// proceeds without it.
    ///
    /// # Errors
    ///
    /// Returns [`AvailabilityError::Denied`] when the provider is unreachable
    /// under a fail-closed policy, or [`AvailabilityError::Provider`] when the
    /// probe fails.
    pub fn is_available(&self, service: &Service) -> Result<bool, AvailabilityError> {
        self.check_availability(service).map(|decision| decision.is_available())
    }

    /// Evaluates availability and returns the full decision record.
    ///
    /// # Errors
    ///
    /// Same as [`MultifactorProvider::is_available`].
    pub fn check_availability(
        &self,
        service: &Service,
    ) -> Result<AvailabilityDecision, AvailabilityError> {
        let descriptor = self.descriptor();
        let resolved = FailureModeResolver::resolve(
            &service.multifactor_policy,
            descriptor.global_failure_mode(),
        );
        debug!(
            provider = descriptor.kind(),
            service_id = %service.service_id,
            failure_mode = %resolved.mode,
            source = resolved.source.as_str(),
            "resolved multifactor failure mode"
        );

        let decision = AvailabilityGate::new(resolved).apply(|| self.hooks().probe())?;
        match decision.outcome {
            AvailabilityOutcome::Available if !decision.probe_invoked => {
                debug!(
                    provider = descriptor.kind(),
                    failure_mode = %resolved.mode,
                    "failure mode skips availability probe; assuming provider is available"
                );
            }
            AvailabilityOutcome::Available => {}
            AvailabilityOutcome::Degraded => {
                warn!(
                    provider = descriptor.kind(),
                    service_id = %service.service_id,
                    failure_mode = %resolved.mode,
                    "provider could not be reached; authentication proceeds without it"
                );
            }
            AvailabilityOutcome::Denied => {
                warn!(
                    provider = descriptor.kind(),
                    service_id = %service.service_id,
                    "provider could not be reached; authentication fails closed"
                );
            }
        }

        self.audit().record_availability(&AvailabilityAuditEvent::new(
            AvailabilityAuditEventParams {
                descriptor,
                service_id: &service.service_id,
                decision: &decision,
            },
        ));

        if decision.outcome == AvailabilityOutcome::Denied {
            return Err(AvailabilityError::Denied {
                provider: descriptor.kind(),
                service_id: service.service_id.clone(),
            });
        }
        Ok(decision)
    }
}
