// crates/mfa-gate-core/src/runtime/mod.rs
// ============================================================================
// Module: MFA Gate Runtime
// Description: Provider selection and availability decision logic.
// Purpose: Evaluate providers deterministically for every login request.
// Dependencies: crate::{audit, core, interfaces}, tracing
// ============================================================================

//! ## Overview
//! Runtime modules implement the per-login decisions: identifier matching,
//! failure mode resolution, the availability gate, and provider selection.
//! All of them are synchronous and hold no shared mutable state; the only
//! I/O happens inside collaborators supplied by the host.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod availability;
pub mod matcher;
pub mod provider;
pub mod resolver;
pub mod selector;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use availability::AvailabilityDecision;
pub use availability::AvailabilityError;
pub use availability::AvailabilityGate;
pub use availability::AvailabilityOutcome;
pub use matcher::matches_identifier;
pub use matcher::signal_matches;
pub use provider::MultifactorProvider;
pub use provider::MultifactorProviderBuilder;
pub use resolver::FailureModeResolver;
pub use resolver::FailureModeSource;
pub use resolver::ResolvedFailureMode;
pub use selector::SelectionOutcome;
