// translate-relay-core/src/terminology.rs
// ============================================================================
// Module: Terminology Encoder
// Description: Deterministic CSV serialization of a terminology definition.
// Purpose: Build the customization file payload uploaded to the backend.
// Dependencies: none beyond core model
// ============================================================================

//! ## Overview
//! A terminology definition serializes to exactly two newline-terminated
//! rows: a header row of language codes and a data row of terms in the same
//! order. Encoding is a pure function of its input; identical definitions
//! yield byte-identical payloads. No field escaping is performed; inputs
//! are pre-validated by [`crate::validation`] to exclude delimiters.

use crate::model::TerminologyDefinition;

/// CSV field delimiter.
const DELIMITER: char = ',';

/// Encoded terminology file payload.
///
/// # Invariants
/// - Immutable once built; exactly two rows, UTF-8 bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedTerminologyFile {
    /// Raw UTF-8 payload bytes.
    bytes: Vec<u8>,
}

impl EncodedTerminologyFile {
    /// Returns the payload bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the file, returning the payload bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Encodes a terminology definition into its CSV file payload.
///
/// Header row: source language code followed by each target language code.
/// Data row: source term followed by each target term in the same order.
#[must_use]
pub fn encode_terminology_file(definition: &TerminologyDefinition) -> EncodedTerminologyFile {
    let mut out = String::new();
    out.push_str(&definition.source_language_code);
    for code in &definition.target_language_codes {
        out.push(DELIMITER);
        out.push_str(code);
    }
    out.push('\n');
    out.push_str(&definition.source_term);
    for term in &definition.target_terms {
        out.push(DELIMITER);
        out.push_str(term);
    }
    out.push('\n');
    EncodedTerminologyFile {
        bytes: out.into_bytes(),
    }
}
