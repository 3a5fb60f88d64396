// translate-relay-core/src/model.rs
// ============================================================================
// Module: Relay Data Model
// Description: Wire payloads and validated request parameter structs.
// Purpose: Keep request state local and request-scoped, never shared.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Two layers of types. Wire payloads mirror the HTTP body field names of the
//! original service exactly (serde renames) and carry `Option` fields so that
//! a missing field surfaces as a validation outcome rather than a
//! deserialization failure. Validated structs are produced only by
//! [`crate::validation`] and are the sole input accepted by the backend
//! contract; a handler cannot reach the backend with an unchecked field.

use serde::Deserialize;

// ============================================================================
// SECTION: Wire Payloads
// ============================================================================

/// Body payload for the translate-text operation.
///
/// Field names follow the original service verbatim, screaming case included.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslateTextPayload {
    /// Source language code.
    #[serde(rename = "SOURCE_LANGUAGE")]
    pub source_language: Option<String>,
    /// Target language code.
    #[serde(rename = "TARGET_LANGUAGE")]
    pub target_language: Option<String>,
    /// Text to translate.
    #[serde(rename = "TEXT")]
    pub text: Option<String>,
    /// Terminology names to apply (typically zero or one).
    #[serde(rename = "TERMINOLOGY")]
    pub terminology: Option<Vec<String>>,
}

/// Body payload for the terminology create/update operation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImportTerminologyPayload {
    /// Source language code.
    #[serde(rename = "SourceLanguageCode")]
    pub source_language_code: Option<String>,
    /// Source term to customize.
    #[serde(rename = "SourceTerm")]
    pub source_term: Option<String>,
    /// Target language codes, positionally aligned with `target_terms`.
    #[serde(rename = "TargetLanguageCodes")]
    pub target_language_codes: Option<Vec<String>>,
    /// Target terms, positionally aligned with `target_language_codes`.
    #[serde(rename = "TargetTerm")]
    pub target_terms: Option<Vec<String>>,
    /// Terminology file name (also the lookup key for later operations).
    #[serde(rename = "FileName")]
    pub file_name: Option<String>,
    /// Optional human-readable description.
    pub description: Option<String>,
}

/// Body payload for the terminology delete operation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteTerminologyPayload {
    /// Name of the terminology file to delete.
    #[serde(rename = "TerminologyName")]
    pub terminology_name: Option<String>,
}

// ============================================================================
// SECTION: Validated Requests
// ============================================================================

/// Fully validated translate-text request.
///
/// # Invariants
/// - All four fields passed their field contracts in [`crate::validation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    /// Source language code (2-5 characters).
    pub source_language_code: String,
    /// Target language code (2-5 characters).
    pub target_language_code: String,
    /// Text to translate (1-5000 characters).
    pub text: String,
    /// Terminology names to apply; may be empty, in which case the backend
    /// call carries no terminology parameter.
    pub terminology_names: Vec<String>,
}

/// Fully validated terminology definition.
///
/// # Invariants
/// - `target_language_codes.len() == target_terms.len() >= 1`.
/// - No field contains a CSV delimiter (comma, CR, LF); the encoder relies
///   on this and performs no escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminologyDefinition {
    /// Optional description (0-256 characters).
    pub description: Option<String>,
    /// Source language code (2-5 characters).
    pub source_language_code: String,
    /// Source term (1-5000 characters).
    pub source_term: String,
    /// Target language codes, one per target term.
    pub target_language_codes: Vec<String>,
    /// Target terms; position `i` is the translation for
    /// `target_language_codes[i]`.
    pub target_terms: Vec<String>,
    /// Terminology file name (1-256 characters, identifier rule).
    pub file_name: String,
}

/// Fully validated terminology delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminologyDeleteRequest {
    /// Name of the terminology file to delete (1-256 characters).
    pub terminology_name: String,
}
