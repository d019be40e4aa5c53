// crates/mfa-gate-core/src/lib.rs
// ============================================================================
// Module: MFA Gate Core Library
// Description: Public API surface for the MFA Gate core.
// Purpose: Expose core types, collaborator interfaces, and decision runtime.
// Dependencies: crate::{audit, core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! MFA Gate core decides, for one login attempt, whether a multifactor
//! provider should handle a triggering signal and whether that provider may
//! be relied upon, applying a layered failure policy when it cannot.
//! Decisions are deterministic and synchronous; second-factor challenges,
//! health probes, and bypass rules are supplied by the host through
//! explicit interfaces.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use audit::AvailabilityAuditEvent;
pub use audit::FileAuditSink;
pub use audit::GateAuditSink;
pub use audit::NoopAuditSink;
pub use audit::SelectionAuditEvent;
pub use audit::StderrAuditSink;
pub use interfaces::BypassEvaluator;
pub use interfaces::ProviderError;
pub use interfaces::ProviderHooks;
pub use runtime::AvailabilityDecision;
pub use runtime::AvailabilityError;
pub use runtime::AvailabilityGate;
pub use runtime::AvailabilityOutcome;
pub use runtime::FailureModeResolver;
pub use runtime::FailureModeSource;
pub use runtime::MultifactorProvider;
pub use runtime::MultifactorProviderBuilder;
pub use runtime::ResolvedFailureMode;
pub use runtime::SelectionOutcome;
