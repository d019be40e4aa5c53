// crates/mfa-gate-core/src/runtime/matcher.rs
// ============================================================================
// Module: Identifier Matcher
// Description: Match triggering signals against a provider identifier pattern.
// Purpose: Provide the cheapest, first check of provider selection.
// Dependencies: crate::core
// ============================================================================

//! Identifier matching is a pure function of the provider pattern and the
//! candidate identifier. Absent and empty candidates never match.

use crate::core::IdentifierPattern;
use crate::core::TriggeringSignal;

/// Returns true when the candidate identifier is governed by the pattern.
#[must_use]
pub fn matches_identifier(pattern: &IdentifierPattern, candidate: Option<&str>) -> bool {
    candidate.is_some_and(|candidate| pattern.matches(candidate))
}

/// Returns true when the signal is present and its identifier matches the pattern.
#[must_use]
pub fn signal_matches(pattern: &IdentifierPattern, signal: Option<&TriggeringSignal>) -> bool {
    matches_identifier(pattern, signal.map(|signal| signal.id.as_str()))
}
