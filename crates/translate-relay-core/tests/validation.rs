// crates/translate-relay-core/tests/validation.rs
// ============================================================================
// Module: Request Validation Tests
// Description: Tests for field contracts, boundary lengths, and the
//              terminology identifier rule.
// Purpose: Ensure invalid requests are rejected before any backend call.
// Dependencies: translate-relay-core
// ============================================================================

//! ## Overview
//! Tests the per-operation validators including:
//! - Length boundaries for language codes, text, and names
//! - Missing-field detection for every required field
//! - All-or-nothing array validation and cardinality matching
//! - The terminology identifier character rule
//! - The CSV delimiter guard

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions are permitted."
)]

use translate_relay_core::DeleteTerminologyPayload;
use translate_relay_core::ImportTerminologyPayload;
use translate_relay_core::TranslateTextPayload;
use translate_relay_core::ValidationError;
use translate_relay_core::validate_delete_request;
use translate_relay_core::validate_terminology_definition;
use translate_relay_core::validate_translation_request;

// ============================================================================
// SECTION: Test Helpers
// ============================================================================

/// Builds a fully populated translate-text payload.
fn translate_payload() -> TranslateTextPayload {
    TranslateTextPayload {
        source_language: Some("en".to_string()),
        target_language: Some("fr".to_string()),
        text: Some("Hello".to_string()),
        terminology: Some(Vec::new()),
    }
}

/// Builds a fully populated import-terminology payload.
fn import_payload() -> ImportTerminologyPayload {
    ImportTerminologyPayload {
        source_language_code: Some("en".to_string()),
        source_term: Some("United States".to_string()),
        target_language_codes: Some(vec!["fr".to_string()]),
        target_terms: Some(vec!["United States".to_string()]),
        file_name: Some("us-term".to_string()),
        description: None,
    }
}

// ============================================================================
// SECTION: Translate Text
// ============================================================================

#[test]
fn translation_request_accepts_valid_payload() {
    let request = validate_translation_request(translate_payload()).unwrap();
    assert_eq!(request.source_language_code, "en");
    assert_eq!(request.target_language_code, "fr");
    assert_eq!(request.text, "Hello");
    assert!(request.terminology_names.is_empty());
}

#[test]
fn translation_request_rejects_missing_fields() {
    for strip in 0 .. 4usize {
        let mut payload = translate_payload();
        match strip {
            0 => payload.source_language = None,
            1 => payload.target_language = None,
            2 => payload.text = None,
            _ => payload.terminology = None,
        }
        let err = validate_translation_request(payload).unwrap_err();
        assert!(matches!(err, ValidationError::Missing(_)), "case {strip}: {err}");
    }
}

#[test]
fn translation_request_enforces_language_code_bounds() {
    for (code, ok) in [("e", false), ("en", true), ("en-US", true), ("en-USA", false)] {
        let mut payload = translate_payload();
        payload.source_language = Some(code.to_string());
        assert_eq!(validate_translation_request(payload).is_ok(), ok, "code {code}");
    }
}

#[test]
fn translation_request_text_boundaries() {
    for (len, ok) in [(0usize, false), (1, true), (5000, true), (5001, false)] {
        let mut payload = translate_payload();
        payload.text = Some("x".repeat(len));
        assert_eq!(validate_translation_request(payload).is_ok(), ok, "len {len}");
    }
}

#[test]
fn translation_request_checks_every_terminology_name() {
    let mut payload = translate_payload();
    payload.terminology = Some(vec!["us-term".to_string(), "bad name".to_string()]);
    let err = validate_translation_request(payload).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::Invalid {
            field: "TERMINOLOGY",
            ..
        }
    ));
}

#[test]
fn terminology_name_rule_matches_identifier_intent() {
    for (name, ok) in [
        ("us-term", true),
        ("a", true),
        ("A1-b2", true),
        ("us_term", true),
        ("a_", true),
        ("_term", false),
        ("a__b", false),
        ("us term", false),
        ("term!", false),
    ] {
        let mut payload = translate_payload();
        payload.terminology = Some(vec![name.to_string()]);
        assert_eq!(validate_translation_request(payload).is_ok(), ok, "name {name:?}");
    }
}

// ============================================================================
// SECTION: Terminology Definition
// ============================================================================

#[test]
fn terminology_definition_accepts_valid_payload() {
    let definition = validate_terminology_definition(import_payload()).unwrap();
    assert_eq!(definition.file_name, "us-term");
    assert_eq!(definition.target_language_codes.len(), definition.target_terms.len());
}

#[test]
fn terminology_definition_rejects_empty_target_arrays() {
    let mut payload = import_payload();
    payload.target_language_codes = Some(Vec::new());
    payload.target_terms = Some(Vec::new());
    assert!(validate_terminology_definition(payload).is_err());
}

#[test]
fn terminology_definition_rejects_cardinality_mismatch() {
    let mut payload = import_payload();
    payload.target_language_codes = Some(vec!["fr".to_string(), "de".to_string()]);
    assert!(validate_terminology_definition(payload).is_err());
}

#[test]
fn terminology_definition_rejects_any_bad_array_element() {
    let mut payload = import_payload();
    payload.target_language_codes = Some(vec!["fr".to_string(), "x".to_string()]);
    payload.target_terms = Some(vec!["a".to_string(), "b".to_string()]);
    assert!(validate_terminology_definition(payload).is_err());
}

#[test]
fn terminology_definition_rejects_csv_delimiters() {
    let mut payload = import_payload();
    payload.source_term = Some("United,States".to_string());
    assert!(validate_terminology_definition(payload).is_err());

    let mut payload = import_payload();
    payload.target_terms = Some(vec!["line\nbreak".to_string()]);
    assert!(validate_terminology_definition(payload).is_err());
}

#[test]
fn terminology_definition_description_bounds() {
    let mut payload = import_payload();
    payload.description = Some("d".repeat(256));
    assert!(validate_terminology_definition(payload).is_ok());

    let mut payload = import_payload();
    payload.description = Some("d".repeat(257));
    assert!(validate_terminology_definition(payload).is_err());
}

// ============================================================================
// SECTION: Delete Request
// ============================================================================

#[test]
fn delete_request_accepts_valid_name() {
    let request = validate_delete_request(DeleteTerminologyPayload {
        terminology_name: Some("us-term".to_string()),
    })
    .unwrap();
    assert_eq!(request.terminology_name, "us-term");
}

#[test]
fn delete_request_rejects_missing_and_oversized_names() {
    let err = validate_delete_request(DeleteTerminologyPayload {
        terminology_name: None,
    })
    .unwrap_err();
    assert!(matches!(err, ValidationError::Missing("TerminologyName")));

    let err = validate_delete_request(DeleteTerminologyPayload {
        terminology_name: Some("x".repeat(257)),
    })
    .unwrap_err();
    assert!(matches!(err, ValidationError::Invalid { .. }));
}
