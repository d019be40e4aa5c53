// crates/mfa-gate-core/src/core/provider.rs
// ============================================================================
// Module: Provider Descriptors
// Description: Immutable identity and policy settings of an MFA provider.
// Purpose: Parse provider settings once at setup and expose them read-only.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Provider settings are parsed from free text exactly once, when a provider
//! is configured. A descriptor pairs those settings with the concrete kind
//! name of the provider and defines provider identity: two descriptors are
//! equal when their order and identifier pattern text are equal, whatever
//! their kinds.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;

use crate::core::errors::ConfigurationError;
use crate::core::failure_mode::FailureMode;
use crate::core::pattern::IdentifierPattern;

// ============================================================================
// SECTION: Provider Settings
// ============================================================================

/// Typed provider settings produced by the configuration layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    /// Identifier pattern matched against triggering signals.
    pub id: IdentifierPattern,
    /// Priority used by login orchestration.
    pub order: i32,
    /// Provider-wide default failure mode.
    pub global_failure_mode: Option<FailureMode>,
}

impl ProviderSettings {
    /// Parses raw provider settings.
    ///
    /// A blank or absent global failure mode is treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when the identifier is blank, the
    /// pattern does not compile, or the failure mode text is unknown.
    pub fn parse(
        id: &str,
        order: i32,
        global_failure_mode: Option<&str>,
    ) -> Result<Self, ConfigurationError> {
        if id.trim().is_empty() {
            return Err(ConfigurationError::MissingIdentifier);
        }
        let id = IdentifierPattern::new(id)?;
        let global_failure_mode = match global_failure_mode {
            Some(text) if !text.trim().is_empty() => Some(text.parse::<FailureMode>()?),
            _ => None,
        };
        Ok(Self {
            id,
            order,
            global_failure_mode,
        })
    }
}

// ============================================================================
// SECTION: Provider Descriptor
// ============================================================================

/// Identity of one configured MFA provider.
///
/// # Invariants
/// - Equality and hashing cover `(order, id)` only.
#[derive(Debug, Clone)]
pub struct ProviderDescriptor {
    /// Concrete provider kind name, for diagnostics.
    kind: &'static str,
    /// Parsed provider settings.
    settings: ProviderSettings,
}

impl ProviderDescriptor {
    /// Creates a descriptor for a provider kind.
    #[must_use]
    pub const fn new(kind: &'static str, settings: ProviderSettings) -> Self {
        Self {
            kind,
            settings,
        }
    }

    /// Returns the concrete provider kind name.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// Returns the identifier pattern.
    #[must_use]
    pub const fn id(&self) -> &IdentifierPattern {
        &self.settings.id
    }

    /// Returns the provider order.
    #[must_use]
    pub const fn order(&self) -> i32 {
        self.settings.order
    }

    /// Returns the provider-wide default failure mode, if configured.
    #[must_use]
    pub const fn global_failure_mode(&self) -> Option<FailureMode> {
        self.settings.global_failure_mode
    }

    /// Returns the parsed settings.
    #[must_use]
    pub const fn settings(&self) -> &ProviderSettings {
        &self.settings
    }
}

impl PartialEq for ProviderDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.settings.order == other.settings.order && self.settings.id == other.settings.id
    }
}

impl Eq for ProviderDescriptor {}

impl Hash for ProviderDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.settings.order.hash(state);
        self.settings.id.hash(state);
    }
}

impl fmt::Display for ProviderDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind)
    }
}
