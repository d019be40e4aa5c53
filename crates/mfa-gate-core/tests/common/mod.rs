// crates/mfa-gate-core/tests/common/mod.rs
// ============================================================================
// Module: MFA Gate Test Helpers
// Description: Shared collaborators and fixtures for MFA Gate integration tests.
// Purpose: Reduce duplication across selection, availability, and audit suites.
// ============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]
#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only panic-based assertions are permitted."
)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use mfa_gate_core::AvailabilityAuditEvent;
use mfa_gate_core::BypassEvaluator;
use mfa_gate_core::GateAuditSink;
use mfa_gate_core::MultifactorProvider;
use mfa_gate_core::ProviderDescriptor;
use mfa_gate_core::ProviderError;
use mfa_gate_core::ProviderHooks;
use mfa_gate_core::SelectionAuditEvent;
use mfa_gate_core::Service;
use mfa_gate_core::TriggeringSignal;

/// Opaque authentication state used by the suites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestAuthentication {
    /// Principal name.
    pub principal: String,
}

/// Returns an authentication state for the given principal.
pub fn authentication(principal: &str) -> TestAuthentication {
    TestAuthentication {
        principal: principal.to_string(),
    }
}

// ============================================================================
// SECTION: Provider Hooks
// ============================================================================

/// Hooks that rely on the trait defaults.
pub struct DefaultHooks;

impl ProviderHooks<TestAuthentication> for DefaultHooks {
    fn kind(&self) -> &'static str {
        "DefaultHooks"
    }
}

/// Hooks with a fixed probe result that count probe and eligibility calls.
pub struct ScriptedHooks {
    /// Kind name reported by the hooks.
    pub kind: &'static str,
    /// Probe result.
    pub probe_result: Result<bool, ProviderError>,
    /// Eligibility result.
    pub eligible_result: Result<bool, ProviderError>,
    /// Number of probe invocations.
    pub probe_calls: Arc<AtomicUsize>,
    /// Number of eligibility invocations.
    pub eligibility_calls: Arc<AtomicUsize>,
}

impl ScriptedHooks {
    /// Hooks whose probe reports the given availability.
    pub fn with_probe(available: bool) -> Self {
        Self {
            kind: "ScriptedHooks",
            probe_result: Ok(available),
            eligible_result: Ok(true),
            probe_calls: Arc::new(AtomicUsize::new(0)),
            eligibility_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Hooks whose eligibility predicate returns the given verdict.
    pub fn with_eligibility(eligible: bool) -> Self {
        Self {
            eligible_result: Ok(eligible),
            ..Self::with_probe(true)
        }
    }

    /// Returns the shared probe counter.
    pub fn probe_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.probe_calls)
    }

    /// Returns the shared eligibility counter.
    pub fn eligibility_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.eligibility_calls)
    }
}

impl ProviderHooks<TestAuthentication> for ScriptedHooks {
    fn kind(&self) -> &'static str {
        self.kind
    }

    fn supports_internal(
        &self,
        _signal: &TriggeringSignal,
        _authentication: &TestAuthentication,
        _service: &Service,
    ) -> Result<bool, ProviderError> {
        self.eligibility_calls.fetch_add(1, Ordering::SeqCst);
        self.eligible_result.clone()
    }

    fn probe(&self) -> Result<bool, ProviderError> {
        self.probe_calls.fetch_add(1, Ordering::SeqCst);
        self.probe_result.clone()
    }
}

/// Hooks whose probe must never run.
pub struct ForbiddenProbeHooks;

impl ProviderHooks<TestAuthentication> for ForbiddenProbeHooks {
    fn kind(&self) -> &'static str {
        "ForbiddenProbeHooks"
    }

    fn probe(&self) -> Result<bool, ProviderError> {
        panic!("probe must not be invoked when the failure mode is NONE");
    }
}

// ============================================================================
// SECTION: Bypass Evaluators
// ============================================================================

/// Bypass evaluator with a fixed verdict that records its calls.
pub struct FixedBypass {
    /// Verdict returned to the gate.
    pub verdict: Result<bool, ProviderError>,
    /// Principals and provider kinds seen by the evaluator.
    pub seen: Mutex<Vec<(String, &'static str)>>,
}

impl FixedBypass {
    /// Bypass that lets the provider execute.
    pub fn execute() -> Arc<Self> {
        Arc::new(Self {
            verdict: Ok(true),
            seen: Mutex::new(Vec::new()),
        })
    }

    /// Bypass that suppresses the provider.
    pub fn skip() -> Arc<Self> {
        Arc::new(Self {
            verdict: Ok(false),
            seen: Mutex::new(Vec::new()),
        })
    }

    /// Bypass that fails.
    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            verdict: Err(ProviderError::Bypass(message.to_string())),
            seen: Mutex::new(Vec::new()),
        })
    }

    /// Returns the number of calls observed.
    pub fn calls(&self) -> usize {
        self.seen.lock().expect("bypass lock").len()
    }
}

impl BypassEvaluator<TestAuthentication> for FixedBypass {
    fn should_execute(
        &self,
        authentication: &TestAuthentication,
        _service: &Service,
        provider: &ProviderDescriptor,
    ) -> Result<bool, ProviderError> {
        let entry = (authentication.principal.clone(), provider.kind());
        self.seen.lock().expect("bypass lock").push(entry);
        self.verdict.clone()
    }
}

// ============================================================================
// SECTION: Audit Sinks
// ============================================================================

/// Audit sink that keeps events in memory.
#[derive(Default)]
pub struct RecordingAuditSink {
    /// Selection events.
    pub selections: Mutex<Vec<SelectionAuditEvent>>,
    /// Availability events.
    pub availability: Mutex<Vec<AvailabilityAuditEvent>>,
}

impl GateAuditSink for RecordingAuditSink {
    fn record_selection(&self, event: &SelectionAuditEvent) {
        self.selections.lock().expect("audit lock").push(event.clone());
    }

    fn record_availability(&self, event: &AvailabilityAuditEvent) {
        self.availability.lock().expect("audit lock").push(event.clone());
    }
}

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Builds a provider with the given hooks, pattern, and global failure mode.
pub fn provider_with<H>(
    hooks: H,
    id: &str,
    global_failure_mode: Option<&str>,
) -> MultifactorProvider<TestAuthentication>
where
    H: ProviderHooks<TestAuthentication> + 'static,
{
    let mut builder = MultifactorProvider::<TestAuthentication>::builder(hooks).id(id).order(1);
    if let Some(mode) = global_failure_mode {
        builder = builder.global_failure_mode(mode);
    }
    builder.build().expect("valid provider configuration")
}
