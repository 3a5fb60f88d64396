// translate-relay-server/src/handlers.rs
// ============================================================================
// Module: Relay Operation Handlers
// Description: Body parsing, validation dispatch, backend calls, status map.
// Purpose: Turn each HTTP request into at most one audited backend call.
// Dependencies: axum, serde_json, tokio, translate-relay-core
// ============================================================================

//! ## Overview
//! Each operation follows the same shape: enforce the body-size limit, parse
//! the JSON payload, validate every field, make a single backend call under
//! the configured deadline, and map the outcome. Validation failures
//! short-circuit with the original service's fixed 404 message; backend
//! failures carry their raw code and message through the status table.
//! Dispatch functions take raw bytes and return a [`Reply`] so tests can
//! exercise the full pipeline without a socket.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use std::time::Instant;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header;
use axum::response::IntoResponse;
use axum::response::Response;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_json::json;
use translate_relay_core::BackendError;
use translate_relay_core::BackendErrorKind;
use translate_relay_core::TerminologySummary;
use translate_relay_core::TranslationBackend;
use translate_relay_core::ValidationError;
use translate_relay_core::encode_terminology_file;
use translate_relay_core::validate_delete_request;
use translate_relay_core::validate_terminology_definition;
use translate_relay_core::validate_translation_request;

use crate::audit::AuditSink;
use crate::audit::RequestAuditEvent;
use crate::audit::RequestAuditParams;
use crate::audit::RequestOutcome;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Fixed body returned for every validation failure.
pub const MISSING_PARAMETERS_MESSAGE: &str = "Missing 1 or more required parameters";
/// Confirmation body returned after a successful delete.
const DELETE_CONFIRMATION: &str = "Deleted the Custom Terminology file";

// ============================================================================
// SECTION: State and Replies
// ============================================================================

/// Immutable per-process handler state.
///
/// # Invariants
/// - Shared read-only across requests; handlers never mutate it.
pub struct AppState {
    /// Backend gateway handle.
    pub backend: Arc<dyn TranslationBackend>,
    /// Audit sink for request events.
    pub audit: Arc<dyn AuditSink>,
    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
    /// Deadline applied to each backend call, in milliseconds.
    pub request_timeout_ms: u64,
}

/// Response body payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyBody {
    /// JSON payload.
    Json(Value),
    /// Plain-text payload.
    Text(String),
}

/// Operation response: status plus body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response body.
    pub body: ReplyBody,
}

impl Reply {
    /// Builds a JSON reply.
    const fn json(status: StatusCode, value: Value) -> Self {
        Self {
            status,
            body: ReplyBody::Json(value),
        }
    }

    /// Builds a plain-text reply.
    fn text(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            body: ReplyBody::Text(message.to_string()),
        }
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self.body {
            ReplyBody::Json(value) => (
                self.status,
                [(header::CONTENT_TYPE, "application/json")],
                value.to_string(),
            )
                .into_response(),
            ReplyBody::Text(message) => (
                self.status,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                message,
            )
                .into_response(),
        }
    }
}

/// Success payload for terminology import.
#[derive(Debug, Serialize)]
struct ImportReply {
    /// Stored terminology name.
    #[serde(rename = "Name")]
    name: String,
    /// Creation timestamp when the backend reported one.
    #[serde(rename = "CreatedAt")]
    created_at: Option<String>,
    /// Last-update timestamp when the backend reported one.
    #[serde(rename = "LastUpdatedAt")]
    last_updated_at: Option<String>,
}

/// One entry in the terminology listing.
#[derive(Debug, Serialize)]
struct ListEntry {
    /// Stored terminology name.
    #[serde(rename = "Name")]
    name: String,
    /// Stored description; omitted when the backend has none, matching the
    /// original service's serialization.
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl From<TerminologySummary> for ListEntry {
    fn from(summary: TerminologySummary) -> Self {
        Self {
            name: summary.name,
            description: summary.description,
        }
    }
}

// ============================================================================
// SECTION: Failure Mapping
// ============================================================================

/// Failure paths shared by every operation.
enum RelayFailure {
    /// The request body exceeded the configured size limit.
    BodyTooLarge,
    /// A required field was missing or out of bounds.
    Validation(ValidationError),
    /// The backend call failed or timed out.
    Backend(BackendError),
}

/// Maps a classified backend failure kind onto the compatibility status table.
#[must_use]
pub fn status_for_backend_error(kind: BackendErrorKind) -> StatusCode {
    match kind {
        BackendErrorKind::InvalidParameterValue => StatusCode::BAD_REQUEST,
        BackendErrorKind::DetectedLanguageLowConfidence => nonstandard_status(432),
        BackendErrorKind::InvalidRequest => nonstandard_status(433),
        BackendErrorKind::ResourceNotFound => nonstandard_status(434),
        BackendErrorKind::TextSizeLimitExceeded => nonstandard_status(435),
        BackendErrorKind::UnsupportedLanguagePair | BackendErrorKind::LimitExceeded => {
            nonstandard_status(436)
        }
        BackendErrorKind::TooManyRequests => nonstandard_status(437),
        BackendErrorKind::InternalServer | BackendErrorKind::Timeout => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        BackendErrorKind::Unclassified => StatusCode::NOT_FOUND,
    }
}

/// Builds a status code outside the standard registry.
fn nonstandard_status(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::NOT_FOUND)
}

/// Builds the caller-facing reply for a failure.
fn reply_for_failure(failure: &RelayFailure) -> Reply {
    match failure {
        RelayFailure::BodyTooLarge => {
            Reply::text(StatusCode::PAYLOAD_TOO_LARGE, "request body too large")
        }
        RelayFailure::Validation(_) => {
            Reply::text(StatusCode::NOT_FOUND, MISSING_PARAMETERS_MESSAGE)
        }
        RelayFailure::Backend(err) => Reply::json(
            status_for_backend_error(err.kind),
            json!({ "code": err.code, "message": err.message }),
        ),
    }
}

// ============================================================================
// SECTION: Dispatch Pipeline
// ============================================================================

/// Dispatches the translate-text operation.
pub async fn dispatch_translate_text(state: &AppState, body: &[u8]) -> Reply {
    let started = Instant::now();
    let result = translate_text_inner(state, body).await;
    finish(state, "GET", "/translate/text", started, result)
}

/// Dispatches the terminology create/update operation.
pub async fn dispatch_import_terminology(state: &AppState, body: &[u8]) -> Reply {
    let started = Instant::now();
    let result = import_terminology_inner(state, body).await;
    finish(state, "PUT", "/translate/custom-terminology", started, result)
}

/// Dispatches the terminology listing operation.
pub async fn dispatch_list_terminology(state: &AppState) -> Reply {
    let started = Instant::now();
    let result = list_terminology_inner(state).await;
    finish(state, "GET", "/translate/list-terminology", started, result)
}

/// Dispatches the terminology delete operation.
pub async fn dispatch_delete_terminology(state: &AppState, body: &[u8]) -> Reply {
    let started = Instant::now();
    let result = delete_terminology_inner(state, body).await;
    finish(state, "DELETE", "/translate/delete-terminology", started, result)
}

/// Translate-text pipeline: validate, one backend call, shape the response.
async fn translate_text_inner(state: &AppState, body: &[u8]) -> Result<Reply, RelayFailure> {
    let payload = parse_payload(state, body)?;
    let request = validate_translation_request(payload).map_err(RelayFailure::Validation)?;
    let translated = call_backend(state, state.backend.translate_text(&request)).await?;
    Ok(Reply::json(StatusCode::OK, json!({ "translatedText": translated.text })))
}

/// Import pipeline: validate, encode the CSV payload, one backend call.
async fn import_terminology_inner(state: &AppState, body: &[u8]) -> Result<Reply, RelayFailure> {
    let payload = parse_payload(state, body)?;
    let definition = validate_terminology_definition(payload).map_err(RelayFailure::Validation)?;
    let file = encode_terminology_file(&definition);
    let import = call_backend(state, state.backend.import_terminology(&definition, &file)).await?;
    let reply = ImportReply {
        name: import.name,
        created_at: import.created_at,
        last_updated_at: import.last_updated_at,
    };
    Ok(Reply::json(StatusCode::OK, to_json(&reply)?))
}

/// Listing pipeline: one backend call, reshape to the original wire names.
async fn list_terminology_inner(state: &AppState) -> Result<Reply, RelayFailure> {
    let summaries = call_backend(state, state.backend.list_terminologies()).await?;
    let entries: Vec<ListEntry> = summaries.into_iter().map(ListEntry::from).collect();
    Ok(Reply::json(StatusCode::OK, to_json(&entries)?))
}

/// Delete pipeline: validate the name, one backend call, fixed confirmation.
async fn delete_terminology_inner(state: &AppState, body: &[u8]) -> Result<Reply, RelayFailure> {
    let payload = parse_payload(state, body)?;
    let request = validate_delete_request(payload).map_err(RelayFailure::Validation)?;
    call_backend(state, state.backend.delete_terminology(&request)).await?;
    Ok(Reply::text(StatusCode::OK, DELETE_CONFIRMATION))
}

/// Parses a JSON body, treating an empty body as an empty payload.
///
/// A malformed body is reported through the validation path: the caller
/// receives the same missing-parameter outcome either way.
fn parse_payload<T>(state: &AppState, body: &[u8]) -> Result<T, RelayFailure>
where
    T: Default + DeserializeOwned,
{
    if body.len() > state.max_body_bytes {
        return Err(RelayFailure::BodyTooLarge);
    }
    if body.is_empty() {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|err| {
        RelayFailure::Validation(ValidationError::Invalid {
            field: "body",
            reason: err.to_string(),
        })
    })
}

/// Runs a backend call under the configured deadline.
async fn call_backend<T, F>(state: &AppState, call: F) -> Result<T, RelayFailure>
where
    F: Future<Output = Result<T, BackendError>>,
{
    let deadline = Duration::from_millis(state.request_timeout_ms);
    match tokio::time::timeout(deadline, call).await {
        Ok(result) => result.map_err(RelayFailure::Backend),
        Err(_) => Err(RelayFailure::Backend(BackendError::timeout(state.request_timeout_ms))),
    }
}

/// Serializes a success payload, folding serializer failure into the relay
/// error path.
fn to_json<T: Serialize>(value: &T) -> Result<Value, RelayFailure> {
    serde_json::to_value(value).map_err(|_| {
        RelayFailure::Backend(BackendError::unclassified("response serialization failed"))
    })
}

/// Completes an operation: build the reply and emit the audit event.
fn finish(
    state: &AppState,
    method: &'static str,
    path: &'static str,
    started: Instant,
    result: Result<Reply, RelayFailure>,
) -> Reply {
    let (reply, outcome, error_kind, detail) = match result {
        Ok(reply) => (reply, RequestOutcome::Success, None, None),
        Err(failure) => {
            let reply = reply_for_failure(&failure);
            match failure {
                RelayFailure::BodyTooLarge => (
                    reply,
                    RequestOutcome::ValidationRejected,
                    None,
                    Some("request body too large".to_string()),
                ),
                RelayFailure::Validation(err) => {
                    (reply, RequestOutcome::ValidationRejected, None, Some(err.to_string()))
                }
                RelayFailure::Backend(err) => {
                    (reply, RequestOutcome::BackendFailed, Some(err.kind), Some(err.to_string()))
                }
            }
        }
    };
    state.audit.record(&RequestAuditEvent::new(RequestAuditParams {
        method,
        path,
        status: reply.status.as_u16(),
        outcome,
        error_kind,
        detail,
        duration_ms: started.elapsed().as_millis(),
    }));
    reply
}

// ============================================================================
// SECTION: Axum Handlers
// ============================================================================

/// Axum handler for `GET /translate/text`.
pub async fn translate_text(State(state): State<Arc<AppState>>, body: Bytes) -> Reply {
    dispatch_translate_text(&state, &body).await
}

/// Axum handler for `PUT /translate/custom-terminology`.
pub async fn import_terminology(State(state): State<Arc<AppState>>, body: Bytes) -> Reply {
    dispatch_import_terminology(&state, &body).await
}

/// Axum handler for `GET /translate/list-terminology`.
pub async fn list_terminology(State(state): State<Arc<AppState>>) -> Reply {
    dispatch_list_terminology(&state).await
}

/// Axum handler for `DELETE /translate/delete-terminology`.
pub async fn delete_terminology(State(state): State<Arc<AppState>>, body: Bytes) -> Reply {
    dispatch_delete_terminology(&state, &body).await
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test-only assertions are permitted."
    )]

    use axum::http::StatusCode;
    use translate_relay_core::BackendErrorKind;

    use super::status_for_backend_error;

    #[test]
    fn status_table_matches_original_service() {
        let table = [
            (BackendErrorKind::InvalidParameterValue, 400),
            (BackendErrorKind::DetectedLanguageLowConfidence, 432),
            (BackendErrorKind::InvalidRequest, 433),
            (BackendErrorKind::ResourceNotFound, 434),
            (BackendErrorKind::TextSizeLimitExceeded, 435),
            (BackendErrorKind::UnsupportedLanguagePair, 436),
            (BackendErrorKind::LimitExceeded, 436),
            (BackendErrorKind::TooManyRequests, 437),
            (BackendErrorKind::InternalServer, 500),
            (BackendErrorKind::Timeout, 500),
            (BackendErrorKind::Unclassified, 404),
        ];
        for (kind, expected) in table {
            assert_eq!(status_for_backend_error(kind).as_u16(), expected, "kind {kind:?}");
        }
    }

    #[test]
    fn nonstandard_codes_are_constructible() {
        assert_eq!(StatusCode::from_u16(432).unwrap().as_u16(), 432);
        assert_eq!(StatusCode::from_u16(437).unwrap().as_u16(), 437);
    }
}
