// crates/translate-relay-core/tests/terminology.rs
// ============================================================================
// Module: Terminology Encoder Tests
// Description: Tests for CSV payload shape, determinism, and exact bytes.
// Purpose: Ensure the encoded file matches the backend's expected layout.
// Dependencies: translate-relay-core
// ============================================================================

//! ## Overview
//! Tests for CSV payload shape, determinism, and exact bytes of the
//! encoded terminology file.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions are permitted."
)]

use translate_relay_core::TerminologyDefinition;
use translate_relay_core::encode_terminology_file;

/// Builds a definition with the given targets.
fn definition(targets: &[(&str, &str)]) -> TerminologyDefinition {
    TerminologyDefinition {
        description: None,
        source_language_code: "en".to_string(),
        source_term: "United States".to_string(),
        target_language_codes: targets.iter().map(|(code, _)| (*code).to_string()).collect(),
        target_terms: targets.iter().map(|(_, term)| (*term).to_string()).collect(),
        file_name: "us-term".to_string(),
    }
}

#[test]
fn single_target_produces_exact_bytes() {
    let file = encode_terminology_file(&definition(&[("fr", "United States")]));
    assert_eq!(file.as_bytes(), b"en,fr\nUnited States,United States\n");
}

#[test]
fn multi_target_rows_have_aligned_fields() {
    let file = encode_terminology_file(&definition(&[("fr", "Etats-Unis"), ("de", "USA")]));
    let text = String::from_utf8(file.into_bytes()).unwrap();
    let rows: Vec<&str> = text.split_terminator('\n').collect();
    assert_eq!(rows.len(), 2);
    let header: Vec<&str> = rows[0].split(',').collect();
    let data: Vec<&str> = rows[1].split(',').collect();
    assert_eq!(header, vec!["en", "fr", "de"]);
    assert_eq!(data, vec!["United States", "Etats-Unis", "USA"]);
}

#[test]
fn encoding_is_byte_idempotent() {
    let definition = definition(&[("fr", "Etats-Unis")]);
    let first = encode_terminology_file(&definition);
    let second = encode_terminology_file(&definition);
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn trailing_newline_terminates_both_rows() {
    let file = encode_terminology_file(&definition(&[("fr", "Etats-Unis")]));
    let bytes = file.as_bytes();
    assert_eq!(bytes.last(), Some(&b'\n'));
    assert_eq!(bytes.iter().filter(|byte| **byte == b'\n').count(), 2);
}
