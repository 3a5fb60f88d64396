// translate-relay-server/src/audit.rs
// ============================================================================
// Module: Request Audit Logging
// Description: Structured audit events for relay request handling.
// Purpose: Emit one event per request without hard logging dependencies.
// Dependencies: serde, serde_json, translate-relay-core
// ============================================================================

//! ## Overview
//! This module defines the per-request audit event and its sinks. It is
//! intentionally lightweight so deployments can route events to their
//! preferred logging pipeline without redesign. Sinks never panic and a sink
//! failure never affects request completion.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;
use translate_relay_core::BackendErrorKind;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Request outcome classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestOutcome {
    /// The operation completed and the backend answer was relayed.
    Success,
    /// Validation rejected the request before any backend call.
    ValidationRejected,
    /// The backend call failed or timed out.
    BackendFailed,
}

/// Relay request audit event payload.
#[derive(Debug, Clone, Serialize)]
pub struct RequestAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// HTTP method of the operation.
    pub method: &'static str,
    /// Route path of the operation.
    pub path: &'static str,
    /// HTTP status returned to the caller.
    pub status: u16,
    /// Request outcome classification.
    pub outcome: RequestOutcome,
    /// Classified backend failure kind, when the backend failed.
    pub error_kind: Option<BackendErrorKind>,
    /// Failure detail for operators; never returned to the caller.
    pub detail: Option<String>,
    /// Request handling duration in milliseconds.
    pub duration_ms: u128,
}

/// Inputs required to construct a request audit event.
pub struct RequestAuditParams {
    /// HTTP method of the operation.
    pub method: &'static str,
    /// Route path of the operation.
    pub path: &'static str,
    /// HTTP status returned to the caller.
    pub status: u16,
    /// Request outcome classification.
    pub outcome: RequestOutcome,
    /// Classified backend failure kind, when the backend failed.
    pub error_kind: Option<BackendErrorKind>,
    /// Failure detail for operators.
    pub detail: Option<String>,
    /// Request handling duration in milliseconds.
    pub duration_ms: u128,
}

impl RequestAuditEvent {
    /// Creates a new audit event with a consistent timestamp.
    #[must_use]
    pub fn new(params: RequestAuditParams) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        Self {
            event: "relay_request",
            timestamp_ms,
            method: params.method,
            path: params.path,
            status: params.status,
            outcome: params.outcome,
            error_kind: params.error_kind,
            detail: params.detail,
            duration_ms: params.duration_ms,
        }
    }
}

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Audit sink for relay request events.
pub trait AuditSink: Send + Sync {
    /// Record an audit event.
    fn record(&self, event: &RequestAuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl AuditSink for StderrAuditSink {
    fn record(&self, event: &RequestAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// No-op audit sink.
pub struct NoopAuditSink;

impl AuditSink for NoopAuditSink {
    fn record(&self, _event: &RequestAuditEvent) {}
}
