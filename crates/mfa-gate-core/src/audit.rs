// crates/mfa-gate-core/src/audit.rs
// ============================================================================
// Module: MFA Gate Audit Logging
// Description: Structured audit events for provider selection and availability.
// Purpose: Emit decision records without hard dependencies on a log pipeline.
// Dependencies: crate::{core, runtime}, serde, serde_json, tracing
// ============================================================================

//! ## Overview
//! Every selection and availability decision produces one audit event. Events
//! carry identifiers and outcomes only; authentication state is never
//! recorded. Sinks are `Send + Sync` so a single sink can serve all
//! concurrent login requests.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;
use tracing::warn;

use crate::core::FailureMode;
use crate::core::ProviderDescriptor;
use crate::core::ServiceId;
use crate::core::SignalId;
use crate::runtime::AvailabilityDecision;
use crate::runtime::AvailabilityOutcome;
use crate::runtime::FailureModeSource;
use crate::runtime::SelectionOutcome;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Provider selection audit event payload.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Provider kind name.
    pub provider_kind: &'static str,
    /// Provider identifier pattern.
    pub provider_id: String,
    /// Provider order.
    pub provider_order: i32,
    /// Service identifier.
    pub service_id: String,
    /// Signal identifier when a signal was supplied.
    pub signal_id: Option<String>,
    /// Selection outcome.
    pub outcome: SelectionOutcome,
}

/// Availability audit event payload.
#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Provider kind name.
    pub provider_kind: &'static str,
    /// Provider identifier pattern.
    pub provider_id: String,
    /// Provider order.
    pub provider_order: i32,
    /// Service identifier.
    pub service_id: String,
    /// Effective failure mode.
    pub failure_mode: FailureMode,
    /// Layer that supplied the failure mode.
    pub failure_mode_source: FailureModeSource,
    /// Whether the raw probe was invoked.
    pub probe_invoked: bool,
    /// Gate outcome.
    pub outcome: AvailabilityOutcome,
}

/// Inputs required to construct a selection audit event.
pub struct SelectionAuditEventParams<'a> {
    /// Provider descriptor.
    pub descriptor: &'a ProviderDescriptor,
    /// Service identifier.
    pub service_id: &'a ServiceId,
    /// Signal identifier when a signal was supplied.
    pub signal_id: Option<&'a SignalId>,
    /// Selection outcome.
    pub outcome: SelectionOutcome,
}

/// Inputs required to construct an availability audit event.
pub struct AvailabilityAuditEventParams<'a> {
    /// Provider descriptor.
    pub descriptor: &'a ProviderDescriptor,
    /// Service identifier.
    pub service_id: &'a ServiceId,
    /// Availability decision.
    pub decision: &'a AvailabilityDecision,
}

/// Returns the current time in milliseconds since the Unix epoch.
fn now_ms() -> u128 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis()
}

impl SelectionAuditEvent {
    /// Creates a new selection audit event with a consistent timestamp.
    #[must_use]
    pub fn new(params: SelectionAuditEventParams<'_>) -> Self {
        Self {
            event: "mfa_selection",
            timestamp_ms: now_ms(),
            provider_kind: params.descriptor.kind(),
            provider_id: params.descriptor.id().as_str().to_string(),
            provider_order: params.descriptor.order(),
            service_id: params.service_id.to_string(),
            signal_id: params.signal_id.map(ToString::to_string),
            outcome: params.outcome,
        }
    }
}

impl AvailabilityAuditEvent {
    /// Creates a new availability audit event with a consistent timestamp.
    #[must_use]
    pub fn new(params: AvailabilityAuditEventParams<'_>) -> Self {
        Self {
            event: "mfa_availability",
            timestamp_ms: now_ms(),
            provider_kind: params.descriptor.kind(),
            provider_id: params.descriptor.id().as_str().to_string(),
            provider_order: params.descriptor.order(),
            service_id: params.service_id.to_string(),
            failure_mode: params.decision.failure_mode.mode,
            failure_mode_source: params.decision.failure_mode.source,
            probe_invoked: params.decision.probe_invoked,
            outcome: params.decision.outcome,
        }
    }
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Audit sink for gate decisions.
pub trait GateAuditSink: Send + Sync {
    /// Record a provider selection event.
    fn record_selection(&self, event: &SelectionAuditEvent);

    /// Record an availability event.
    fn record_availability(&self, event: &AvailabilityAuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl GateAuditSink for StderrAuditSink {
    fn record_selection(&self, event: &SelectionAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }

    fn record_availability(&self, event: &AvailabilityAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that logs JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }

    /// Appends one serialized event as a JSON line.
    fn append<T: Serialize>(&self, event: &T) {
        let payload = match serde_json::to_string(event) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(error = %err, "audit event could not be serialized; record dropped");
                return;
            }
        };
        let Ok(mut file) = self.file.lock() else {
            warn!("audit log lock is poisoned; record dropped");
            return;
        };
        if let Err(err) = writeln!(file, "{payload}").and_then(|()| file.flush()) {
            warn!(error = %err, "audit log write failed; record dropped");
        }
    }
}

impl GateAuditSink for FileAuditSink {
    fn record_selection(&self, event: &SelectionAuditEvent) {
        self.append(event);
    }

    fn record_availability(&self, event: &AvailabilityAuditEvent) {
        self.append(event);
    }
}

/// No-op audit sink.
pub struct NoopAuditSink;

impl GateAuditSink for NoopAuditSink {
    fn record_selection(&self, _event: &SelectionAuditEvent) {}

    fn record_availability(&self, _event: &AvailabilityAuditEvent) {}
}
