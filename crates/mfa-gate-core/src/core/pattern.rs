// crates/mfa-gate-core/src/core/pattern.rs
// ============================================================================
// Module: Provider Identifier Patterns
// Description: Compiled identifier patterns configured on MFA providers.
// Purpose: Match signal identifiers against a provider's pattern in full.
// Dependencies: regex
// ============================================================================

//! ## Overview
//! A provider's identifier is a regular expression, not an equality key. A
//! candidate identifier is governed by the provider only when the whole
//! candidate satisfies the pattern. Patterns compile once when the provider
//! is configured; a pattern that fails to compile is a
//! [`ConfigurationError::InvalidPattern`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;

use regex::Regex;

use crate::core::errors::ConfigurationError;

// ============================================================================
// SECTION: Identifier Pattern
// ============================================================================

/// Compiled, whole-string identifier pattern.
///
/// # Invariants
/// - Equality and hashing use the configured pattern text only.
#[derive(Debug, Clone)]
pub struct IdentifierPattern {
    /// Pattern text as configured.
    source: String,
    /// Pattern anchored to both ends of the candidate.
    compiled: Regex,
}

impl IdentifierPattern {
    /// Compiles a provider identifier pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidPattern`] when the pattern does not compile.
    pub fn new(pattern: impl Into<String>) -> Result<Self, ConfigurationError> {
        let source = pattern.into();
        let invalid = |err: regex::Error| ConfigurationError::InvalidPattern {
            pattern: source.clone(),
            reason: err.to_string(),
        };
        // The bare pattern must compile on its own so stray parentheses
        // cannot close the anchoring group early.
        Regex::new(&source).map_err(invalid)?;
        let compiled = Regex::new(&format!("^(?:{source})$")).map_err(invalid)?;
        Ok(Self {
            source,
            compiled,
        })
    }

    /// Returns the configured pattern text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns true when the entire candidate satisfies the pattern.
    ///
    /// Empty candidates never match.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        !candidate.is_empty() && self.compiled.is_match(candidate)
    }
}

impl PartialEq for IdentifierPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for IdentifierPattern {}

impl Hash for IdentifierPattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
    }
}

impl fmt::Display for IdentifierPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
