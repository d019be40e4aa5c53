// crates/mfa-gate-core/src/core/mod.rs
// ============================================================================
// Module: MFA Gate Core Types
// Description: Canonical provider, service, signal, and failure mode types.
// Purpose: Provide stable, immutable inputs for provider selection and availability.
// Dependencies: regex, serde, thiserror
// ============================================================================

//! ## Overview
//! Core types describe what the gate reasons about: provider descriptors and
//! their identifier patterns, relying party services with their multifactor
//! policy, triggering signals, and failure modes. Everything here is
//! constructed during setup or supplied by the caller and never mutated by
//! the decision logic.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod errors;
pub mod failure_mode;
pub mod identifiers;
pub mod pattern;
pub mod provider;
pub mod service;
pub mod signal;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use errors::ConfigurationError;
pub use failure_mode::FailureMode;
pub use identifiers::ServiceId;
pub use identifiers::SignalId;
pub use pattern::IdentifierPattern;
pub use provider::ProviderDescriptor;
pub use provider::ProviderSettings;
pub use service::MultifactorPolicy;
pub use service::Service;
pub use signal::TriggeringSignal;
