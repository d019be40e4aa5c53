// crates/mfa-gate-core/src/runtime/selector.rs
// ============================================================================
// Module: Provider Selector
// Description: Decide whether a provider should handle a triggering signal.
// Purpose: Combine identifier matching, bypass rules, and provider eligibility.
// Dependencies: crate::{audit, core, interfaces, runtime}, serde, tracing
// ============================================================================

//! ## Overview
//! Selection short-circuits in a fixed order:
//!
//! 1. identifier match: an absent or non-matching signal is rejected first;
//! 2. bypass: a configured bypass capability may suppress the provider;
//! 3. eligibility: the provider's own predicate gives the final verdict.
//!
//! Selection reads only its inputs and the provider's immutable settings and
//! is safe to call concurrently.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use tracing::debug;

use crate::audit::SelectionAuditEvent;
use crate::audit::SelectionAuditEventParams;
use crate::core::Service;
use crate::core::TriggeringSignal;
use crate::interfaces::ProviderError;
use crate::runtime::matcher::signal_matches;
use crate::runtime::provider::MultifactorProvider;

// ============================================================================
// SECTION: Selection Outcome
// ============================================================================

/// Reason behind a selection verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionOutcome {
    /// Provider supports the request.
    Supported,
    /// Signal was absent or its identifier did not match.
    SignalMismatch,
    /// Bypass rules suppressed the provider.
    Bypassed,
    /// Provider eligibility predicate declined the request.
    Declined,
}

impl SelectionOutcome {
    /// Returns true when the provider supports the request.
    #[must_use]
    pub const fn is_supported(self) -> bool {
        matches!(self, Self::Supported)
    }

    /// Returns a stable label for the outcome.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Supported => "supported",
            Self::SignalMismatch => "signal_mismatch",
            Self::Bypassed => "bypassed",
            Self::Declined => "declined",
        }
    }
}

// ============================================================================
// SECTION: Provider Selection
// ============================================================================

impl<A: ?Sized> MultifactorProvider<A> {
    /// Returns true when this provider should handle the signal.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when the bypass capability or the
    /// eligibility predicate fails.
    pub fn supports(
        &self,
        signal: Option<&TriggeringSignal>,
        authentication: &A,
        service: &Service,
    ) -> Result<bool, ProviderError> {
        self.evaluate_support(signal, authentication, service).map(SelectionOutcome::is_supported)
    }

    /// Evaluates selection and returns the reason behind the verdict.
    ///
    /// # Errors
    ///
    /// Same as [`MultifactorProvider::supports`].
    pub fn evaluate_support(
        &self,
        signal: Option<&TriggeringSignal>,
        authentication: &A,
        service: &Service,
    ) -> Result<SelectionOutcome, ProviderError> {
        let outcome = self.select(signal, authentication, service)?;
        self.audit().record_selection(&SelectionAuditEvent::new(SelectionAuditEventParams {
            descriptor: self.descriptor(),
            service_id: &service.service_id,
            signal_id: signal.map(|signal| &signal.id),
            outcome,
        }));
        Ok(outcome)
    }

    /// Runs the ordered selection checks.
    fn select(
        &self,
        signal: Option<&TriggeringSignal>,
        authentication: &A,
        service: &Service,
    ) -> Result<SelectionOutcome, ProviderError> {
        let kind = self.kind();
        let Some(signal) = signal.filter(|signal| signal_matches(self.id(), Some(signal))) else {
            debug!(
                provider = kind,
                provider_id = %self.id(),
                signal_id = signal.map_or("", |signal| signal.id.as_str()),
                "signal is not applicable to this provider"
            );
            return Ok(SelectionOutcome::SignalMismatch);
        };

        if let Some(bypass) = self.bypass_evaluator()
            && !bypass.should_execute(authentication, service, self.descriptor())?
        {
            debug!(
                provider = kind,
                service_id = %service.service_id,
                "provider is configured for bypass"
            );
            return Ok(SelectionOutcome::Bypassed);
        }

        if self.hooks().supports_internal(signal, authentication, service)? {
            debug!(provider = kind, "provider voted to support this authentication request");
            Ok(SelectionOutcome::Supported)
        } else {
            debug!(provider = kind, "provider voted not to support this authentication request");
            Ok(SelectionOutcome::Declined)
        }
    }
}
