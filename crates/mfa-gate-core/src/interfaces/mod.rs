// crates/mfa-gate-core/src/interfaces/mod.rs
// ============================================================================
// Module: MFA Gate Interfaces
// Description: Collaborator contracts consumed by provider selection.
// Purpose: Define the bypass, eligibility, and probe surfaces of a provider.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! The gate never performs a second-factor challenge, health check, or bypass
//! rule evaluation itself. Those are supplied by the hosting system through
//! the traits below. The authentication state `A` is opaque: the gate passes
//! it through to collaborators and never inspects it.
//!
//! Collaborator failures are returned as [`ProviderError`] and propagate to
//! the caller unchanged; the gate does not reinterpret them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::ProviderDescriptor;
use crate::core::Service;
use crate::core::TriggeringSignal;

// ============================================================================
// SECTION: Collaborator Errors
// ============================================================================

/// Failure reported by a provider collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Bypass capability failed to reach a decision.
    #[error("bypass evaluation failed: {0}")]
    Bypass(String),
    /// Provider eligibility predicate failed.
    #[error("provider eligibility check failed: {0}")]
    Eligibility(String),
    /// Raw availability probe failed.
    #[error("provider availability probe failed: {0}")]
    Probe(String),
}

// ============================================================================
// SECTION: Bypass Evaluator
// ============================================================================

/// Rule-based override that may suppress a provider for a principal or service.
pub trait BypassEvaluator<A: ?Sized>: Send + Sync {
    /// Returns true when the provider may execute for this request.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when the bypass rules cannot be evaluated.
    fn should_execute(
        &self,
        authentication: &A,
        service: &Service,
        provider: &ProviderDescriptor,
    ) -> Result<bool, ProviderError>;
}

// ============================================================================
// SECTION: Provider Hooks
// ============================================================================

/// Behaviour specific to a concrete provider kind.
///
/// Both decision hooks default to `Ok(true)`, so a provider kind only
/// overrides what it needs.
pub trait ProviderHooks<A: ?Sized>: Send + Sync {
    /// Returns the concrete provider kind name.
    fn kind(&self) -> &'static str;

    /// Provider-specific eligibility predicate, consulted after the
    /// identifier match and bypass checks pass.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when eligibility cannot be determined.
    fn supports_internal(
        &self,
        _signal: &TriggeringSignal,
        _authentication: &A,
        _service: &Service,
    ) -> Result<bool, ProviderError> {
        Ok(true)
    }

    /// Raw availability probe. May block or perform I/O.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when the probe itself fails.
    fn probe(&self) -> Result<bool, ProviderError> {
        Ok(true)
    }
}
