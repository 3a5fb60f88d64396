// translate-relay-server/src/lib.rs
// ============================================================================
// Module: Translate Relay Server
// Description: HTTP façade exposing the relay operations over axum.
// Purpose: Route, validate, dispatch to the backend, and map statuses.
// Dependencies: axum, tokio, translate-relay-core, translate-relay-config
// ============================================================================

//! ## Overview
//! The server exposes four REST operations over axum and keeps each request
//! fully self-contained: parse the body, validate every field, make at most
//! one backend call under a deadline, map the outcome onto the original
//! service's status table, and emit one audit event. Handler state is an
//! immutable [`handlers::AppState`] behind an `Arc`; nothing is shared
//! mutably between requests.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod cors;
pub mod handlers;
pub mod server;


// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::AuditSink;
pub use audit::NoopAuditSink;
pub use audit::RequestAuditEvent;
pub use audit::RequestOutcome;
pub use audit::StderrAuditSink;
pub use handlers::AppState;
pub use handlers::MISSING_PARAMETERS_MESSAGE;
pub use handlers::Reply;
pub use handlers::ReplyBody;
pub use server::RelayServer;
pub use server::ServeError;
