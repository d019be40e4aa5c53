// crates/mfa-gate-config/src/lib.rs
// ============================================================================
// Module: MFA Gate Config Library
// Description: Canonical config model and validation for MFA Gate.
// Purpose: Single source of truth for mfa-gate.toml semantics.
// Dependencies: mfa-gate-core, serde, toml
// ============================================================================

//! ## Overview
//! `mfa-gate-config` defines the configuration model for MFA providers and
//! service policies. Validation is strict and fail-closed: every identifier
//! pattern and failure mode name is parsed before the config is accepted.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
