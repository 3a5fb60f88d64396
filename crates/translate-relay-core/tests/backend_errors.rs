// crates/translate-relay-core/tests/backend_errors.rs
// ============================================================================
// Module: Backend Error Classification Tests
// Description: Tests for the backend code classifier and error constructors.
// Purpose: Keep the classified kind set stable for the HTTP status table.
// Dependencies: translate-relay-core
// ============================================================================

//! ## Overview
//! Tests for the backend code classifier and error constructors.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions are permitted."
)]

use translate_relay_core::BackendError;
use translate_relay_core::BackendErrorKind;
use translate_relay_core::classify_backend_code;

#[test]
fn known_codes_classify_to_their_kind() {
    let table = [
        ("InvalidParameterValueException", BackendErrorKind::InvalidParameterValue),
        ("DetectedLanguageLowConfidenceException", BackendErrorKind::DetectedLanguageLowConfidence),
        ("InvalidRequestException", BackendErrorKind::InvalidRequest),
        ("ResourceNotFoundException", BackendErrorKind::ResourceNotFound),
        ("TextSizeLimitExceededException", BackendErrorKind::TextSizeLimitExceeded),
        ("UnsupportedLanguagePairException", BackendErrorKind::UnsupportedLanguagePair),
        ("LimitExceededException", BackendErrorKind::LimitExceeded),
        ("TooManyRequestsException", BackendErrorKind::TooManyRequests),
        ("InternalServerException", BackendErrorKind::InternalServer),
    ];
    for (code, kind) in table {
        assert_eq!(classify_backend_code(code), kind, "code {code}");
    }
}

#[test]
fn unknown_codes_are_unclassified() {
    assert_eq!(classify_backend_code("SomethingNewException"), BackendErrorKind::Unclassified);
    assert_eq!(classify_backend_code(""), BackendErrorKind::Unclassified);
}

#[test]
fn from_code_preserves_raw_code_and_message() {
    let err = BackendError::from_code("ResourceNotFoundException", "no such terminology");
    assert_eq!(err.kind, BackendErrorKind::ResourceNotFound);
    assert_eq!(err.code, "ResourceNotFoundException");
    assert_eq!(err.message, "no such terminology");
    assert_eq!(err.to_string(), "ResourceNotFoundException: no such terminology");
}

#[test]
fn timeout_carries_deadline() {
    let err = BackendError::timeout(15_000);
    assert_eq!(err.kind, BackendErrorKind::Timeout);
    assert!(err.message.contains("15000ms"));
}
