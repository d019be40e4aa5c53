// crates/mfa-gate-core/src/core/signal.rs
// ============================================================================
// Module: Triggering Signals
// Description: Signal raised by login orchestration to request an MFA flow.
// Purpose: Carry the requested flow identifier into provider selection.
// Dependencies: serde
// ============================================================================

//! Triggering signals are transient, one per login attempt.

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::SignalId;

/// Request asking whether a provider should engage for a login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggeringSignal {
    /// Identifier of the requested MFA flow.
    pub id: SignalId,
}

impl TriggeringSignal {
    /// Creates a signal for the given flow identifier.
    #[must_use]
    pub fn new(id: impl Into<SignalId>) -> Self {
        Self {
            id: id.into(),
        }
    }
}
