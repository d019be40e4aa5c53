// crates/mfa-gate-core/src/core/failure_mode.rs
// ============================================================================
// Module: MFA Failure Modes
// Description: Failure policy applied when a provider cannot be confirmed available.
// Purpose: Provide a typed failure mode with canonical text forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A failure mode tells the availability gate what to do when a provider's
//! probe reports it unreachable. `NotSet` is a sentinel meaning "no explicit
//! choice at this layer" and is never the effective mode of a decision.
//! `Open` and `Phantom` are the fail-open family: the login proceeds without
//! the provider.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::core::errors::ConfigurationError;

// ============================================================================
// SECTION: Failure Mode
// ============================================================================

/// Failure policy for an MFA provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureMode {
    /// No explicit choice; resolution falls through to the next layer.
    #[default]
    NotSet,
    /// Do not gate on availability; the probe is never invoked.
    None,
    /// Proceed without the provider when it is unreachable.
    Open,
    /// Deny the login when the provider is unreachable.
    Closed,
    /// Proceed without the provider when it is unreachable, keeping its context.
    Phantom,
}

impl FailureMode {
    /// All modes in canonical order.
    pub const ALL: [Self; 5] = [Self::NotSet, Self::None, Self::Open, Self::Closed, Self::Phantom];

    /// Returns the canonical text form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotSet => "NOT_SET",
            Self::None => "NONE",
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
            Self::Phantom => "PHANTOM",
        }
    }

    /// Returns true unless this is the `NotSet` sentinel.
    #[must_use]
    pub const fn is_set(self) -> bool {
        !matches!(self, Self::NotSet)
    }

    /// Returns true when an unreachable provider must not deny the login.
    #[must_use]
    pub const fn is_fail_open(self) -> bool {
        matches!(self, Self::Open | Self::Phantom)
    }
}

impl fmt::Display for FailureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FailureMode {
    type Err = ConfigurationError;

    /// Parses a canonical, case-sensitive mode name; surrounding whitespace is ignored.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == trimmed)
            .ok_or_else(|| ConfigurationError::UnknownFailureMode(trimmed.to_string()))
    }
}
