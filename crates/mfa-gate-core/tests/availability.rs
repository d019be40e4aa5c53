// crates/mfa-gate-core/tests/availability.rs
// ============================================================================
// Module: Availability Gate Tests
// Description: Validate failure mode application around the availability probe.
// Purpose: Ensure fail-closed denials, fail-open degradation, and probe skipping.
// Dependencies: mfa-gate-core
// ============================================================================
//! ## Overview
//! Covers every transition of the availability gate for each failure mode and
//! probe result, plus probe error propagation.
//!
//! Security posture: an unreachable provider under a fail-closed policy must
//! deny the login and never degrade silently.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod common;

use std::sync::atomic::Ordering;

use common::DefaultHooks;
use common::ForbiddenProbeHooks;
use common::ScriptedHooks;
use common::provider_with;
use mfa_gate_core::AvailabilityError;
use mfa_gate_core::AvailabilityGate;
use mfa_gate_core::AvailabilityOutcome;
use mfa_gate_core::FailureMode;
use mfa_gate_core::FailureModeSource;
use mfa_gate_core::ProviderError;
use mfa_gate_core::ResolvedFailureMode;
use mfa_gate_core::Service;
use mfa_gate_core::ServiceId;

fn service(mode: FailureMode) -> Service {
    Service::new("https://app.example.org").with_failure_mode(mode)
}

#[test]
fn global_none_skips_probe_when_service_is_unset() {
    let hooks = ScriptedHooks::with_probe(false);
    let probe_calls = hooks.probe_counter();
    let provider = provider_with(hooks, "mfa-duo", Some("NONE"));

    let available = provider.is_available(&service(FailureMode::NotSet));

    assert_eq!(available, Ok(true));
    assert_eq!(probe_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn service_closed_with_unreachable_provider_is_denied() {
    let provider = provider_with(ScriptedHooks::with_probe(false), "mfa-duo", None);

    let result = provider.is_available(&service(FailureMode::Closed));

    assert_eq!(
        result,
        Err(AvailabilityError::Denied {
            provider: "ScriptedHooks",
            service_id: ServiceId::new("https://app.example.org"),
        })
    );
}

#[test]
fn service_none_never_invokes_probe() {
    let provider = provider_with(ForbiddenProbeHooks, "mfa-duo", Some("CLOSED"));

    let decision = provider.check_availability(&service(FailureMode::None)).expect("decision");

    assert!(decision.is_available());
    assert!(!decision.probe_invoked);
    assert_eq!(decision.failure_mode.source, FailureModeSource::ServicePolicy);
}

#[test]
fn fail_open_modes_degrade_without_error() {
    for mode in [FailureMode::Open, FailureMode::Phantom] {
        let provider = provider_with(ScriptedHooks::with_probe(false), "mfa-duo", None);

        let decision = provider.check_availability(&service(mode)).expect("degraded decision");

        assert_eq!(decision.outcome, AvailabilityOutcome::Degraded);
        assert!(decision.probe_invoked);
        assert_eq!(provider.is_available(&service(mode)), Ok(false));
    }
}

#[test]
fn reachable_provider_is_available_under_every_mode() {
    for mode in FailureMode::ALL {
        let provider = provider_with(ScriptedHooks::with_probe(true), "mfa-duo", None);
        assert_eq!(provider.is_available(&service(mode)), Ok(true), "mode {mode}");
    }
}

#[test]
fn nothing_configured_fails_closed() {
    let provider = provider_with(ScriptedHooks::with_probe(false), "mfa-duo", None);

    let result = provider.check_availability(&service(FailureMode::NotSet));

    assert!(matches!(result, Err(AvailabilityError::Denied { .. })));
}

#[test]
fn blank_global_mode_fails_closed() {
    let provider = provider_with(ScriptedHooks::with_probe(false), "mfa-duo", Some("  "));

    let result = provider.is_available(&service(FailureMode::NotSet));

    assert!(matches!(result, Err(AvailabilityError::Denied { .. })));
}

#[test]
fn global_not_set_falls_through_to_closed() {
    let provider = provider_with(ScriptedHooks::with_probe(false), "mfa-duo", Some("NOT_SET"));

    let result = provider.is_available(&service(FailureMode::NotSet));

    assert!(matches!(result, Err(AvailabilityError::Denied { .. })));
}

#[test]
fn service_policy_overrides_global_mode() {
    let provider = provider_with(ScriptedHooks::with_probe(false), "mfa-duo", Some("CLOSED"));

    let decision = provider.check_availability(&service(FailureMode::Open)).expect("decision");

    assert_eq!(decision.outcome, AvailabilityOutcome::Degraded);
    assert_eq!(decision.failure_mode.mode, FailureMode::Open);
}

#[test]
fn global_open_applies_when_service_is_unset() {
    let provider = provider_with(ScriptedHooks::with_probe(false), "mfa-duo", Some("OPEN"));

    let decision = provider.check_availability(&service(FailureMode::NotSet)).expect("decision");

    assert_eq!(decision.outcome, AvailabilityOutcome::Degraded);
    assert_eq!(decision.failure_mode.source, FailureModeSource::ProviderGlobal);
}

#[test]
fn default_probe_reports_available() {
    let provider = provider_with(DefaultHooks, "mfa-duo", None);

    assert_eq!(provider.is_available(&service(FailureMode::Closed)), Ok(true));
}

#[test]
fn probe_failure_propagates() {
    let hooks = ScriptedHooks {
        probe_result: Err(ProviderError::Probe("health endpoint timed out".to_string())),
        ..ScriptedHooks::with_probe(true)
    };
    let provider = provider_with(hooks, "mfa-duo", Some("OPEN"));

    let result = provider.is_available(&service(FailureMode::NotSet));

    assert_eq!(
        result,
        Err(AvailabilityError::Provider(ProviderError::Probe(
            "health endpoint timed out".to_string()
        )))
    );
}

#[test]
fn gate_transitions_cover_every_mode_and_probe_result() {
    let cases = [
        (FailureMode::None, false, AvailabilityOutcome::Available, false),
        (FailureMode::Closed, true, AvailabilityOutcome::Available, true),
        (FailureMode::Closed, false, AvailabilityOutcome::Denied, true),
        (FailureMode::Open, false, AvailabilityOutcome::Degraded, true),
        (FailureMode::Phantom, false, AvailabilityOutcome::Degraded, true),
    ];
    for (mode, probe, expected, invoked) in cases {
        let gate = AvailabilityGate::new(ResolvedFailureMode {
            mode,
            source: FailureModeSource::ServicePolicy,
        });
        let decision = gate.apply(|| Ok(probe)).expect("decision");
        assert_eq!(decision.outcome, expected, "mode {mode} probe {probe}");
        assert_eq!(decision.probe_invoked, invoked, "mode {mode} probe {probe}");
    }
}
