// translate-relay-core/src/validation.rs
// ============================================================================
// Module: Request Validation
// Description: Field-level contracts for every relay operation.
// Purpose: Reject missing or out-of-bounds parameters before any backend call.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Every inbound field is checked against the contract for its role: language
//! code, free text, or terminology identifier. Validation is all-or-nothing;
//! a single failing field rejects the whole request and the backend is never
//! invoked. Lengths are counted in characters, matching the original
//! service's string-length semantics for the payloads it accepted.
//!
//! Fields destined for the terminology CSV additionally must not contain a
//! comma, CR, or LF. The encoder performs no escaping, so the delimiter ban
//! turns what the original service handled as silent file corruption into an
//! explicit rejection.

use thiserror::Error;

use crate::model::DeleteTerminologyPayload;
use crate::model::ImportTerminologyPayload;
use crate::model::TerminologyDefinition;
use crate::model::TerminologyDeleteRequest;
use crate::model::TranslateTextPayload;
use crate::model::TranslationRequest;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Minimum language code length in characters.
pub const MIN_LANGUAGE_CODE_CHARS: usize = 2;
/// Maximum language code length in characters.
pub const MAX_LANGUAGE_CODE_CHARS: usize = 5;
/// Maximum free-text and term length in characters.
pub const MAX_TEXT_CHARS: usize = 5000;
/// Maximum terminology name and description length in characters.
pub const MAX_NAME_CHARS: usize = 256;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Request validation error.
///
/// # Invariants
/// - Carries the failing field for audit logs; the HTTP layer collapses every
///   variant into the fixed missing-parameter response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was absent from the payload.
    #[error("missing required parameter: {0}")]
    Missing(&'static str),
    /// A field was present but violated its contract.
    #[error("invalid parameter {field}: {reason}")]
    Invalid {
        /// Name of the failing field as it appears on the wire.
        field: &'static str,
        /// Contract violation description.
        reason: String,
    },
}

impl ValidationError {
    /// Builds an invalid-field error.
    fn invalid(field: &'static str, reason: &str) -> Self {
        Self::Invalid {
            field,
            reason: reason.to_string(),
        }
    }
}

// ============================================================================
// SECTION: Operation Validators
// ============================================================================

/// Validates a translate-text payload into a [`TranslationRequest`].
///
/// The terminology array is required (the original service faulted on its
/// absence) but may be empty; every supplied name must satisfy the
/// terminology identifier rule.
///
/// # Errors
///
/// Returns [`ValidationError`] when any field is missing or out of bounds.
pub fn validate_translation_request(
    payload: TranslateTextPayload,
) -> Result<TranslationRequest, ValidationError> {
    let source_language_code = require_language_code("SOURCE_LANGUAGE", payload.source_language)?;
    let target_language_code = require_language_code("TARGET_LANGUAGE", payload.target_language)?;
    let text = require_text("TEXT", payload.text)?;
    let terminology_names =
        payload.terminology.ok_or(ValidationError::Missing("TERMINOLOGY"))?;
    for name in &terminology_names {
        check_terminology_name("TERMINOLOGY", name)?;
    }
    Ok(TranslationRequest {
        source_language_code,
        target_language_code,
        text,
        terminology_names,
    })
}

/// Validates an import-terminology payload into a [`TerminologyDefinition`].
///
/// Target arrays are all-or-nothing, must be non-empty, and must have equal
/// cardinality. Fields destined for the CSV payload must be delimiter-free.
///
/// # Errors
///
/// Returns [`ValidationError`] when any field is missing or out of bounds.
pub fn validate_terminology_definition(
    payload: ImportTerminologyPayload,
) -> Result<TerminologyDefinition, ValidationError> {
    let source_language_code =
        require_language_code("SourceLanguageCode", payload.source_language_code)?;
    check_delimiter_free("SourceLanguageCode", &source_language_code)?;
    let source_term = require_text("SourceTerm", payload.source_term)?;
    check_delimiter_free("SourceTerm", &source_term)?;

    let target_language_codes = payload
        .target_language_codes
        .ok_or(ValidationError::Missing("TargetLanguageCodes"))?;
    if target_language_codes.is_empty() {
        return Err(ValidationError::invalid(
            "TargetLanguageCodes",
            "at least one target language is required",
        ));
    }
    for code in &target_language_codes {
        check_language_code("TargetLanguageCodes", code)?;
        check_delimiter_free("TargetLanguageCodes", code)?;
    }

    let target_terms = payload.target_terms.ok_or(ValidationError::Missing("TargetTerm"))?;
    if target_terms.is_empty() {
        return Err(ValidationError::invalid("TargetTerm", "at least one target term is required"));
    }
    for term in &target_terms {
        check_text("TargetTerm", term)?;
        check_delimiter_free("TargetTerm", term)?;
    }

    if target_language_codes.len() != target_terms.len() {
        return Err(ValidationError::invalid(
            "TargetTerm",
            "target terms must match target language codes one-to-one",
        ));
    }

    let file_name = payload.file_name.ok_or(ValidationError::Missing("FileName"))?;
    check_terminology_name("FileName", &file_name)?;

    if let Some(description) = &payload.description
        && description.chars().count() > MAX_NAME_CHARS
    {
        return Err(ValidationError::invalid("description", "description exceeds 256 characters"));
    }

    Ok(TerminologyDefinition {
        description: payload.description,
        source_language_code,
        source_term,
        target_language_codes,
        target_terms,
        file_name,
    })
}

/// Validates a delete-terminology payload into a [`TerminologyDeleteRequest`].
///
/// # Errors
///
/// Returns [`ValidationError`] when the name is missing or out of bounds.
pub fn validate_delete_request(
    payload: DeleteTerminologyPayload,
) -> Result<TerminologyDeleteRequest, ValidationError> {
    let terminology_name =
        payload.terminology_name.ok_or(ValidationError::Missing("TerminologyName"))?;
    check_terminology_name("TerminologyName", &terminology_name)?;
    Ok(TerminologyDeleteRequest {
        terminology_name,
    })
}

// ============================================================================
// SECTION: Field Contracts
// ============================================================================

/// Requires a language code field and checks its bounds.
fn require_language_code(
    field: &'static str,
    value: Option<String>,
) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::Missing(field))?;
    check_language_code(field, &value)?;
    Ok(value)
}

/// Checks language code bounds: 2-5 characters, no character-class rule.
fn check_language_code(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let chars = value.chars().count();
    if !(MIN_LANGUAGE_CODE_CHARS ..= MAX_LANGUAGE_CODE_CHARS).contains(&chars) {
        return Err(ValidationError::invalid(field, "language code must be 2-5 characters"));
    }
    Ok(())
}

/// Requires a free-text field and checks its bounds.
fn require_text(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::Missing(field))?;
    check_text(field, &value)?;
    Ok(value)
}

/// Checks free-text bounds: 1-5000 characters.
fn check_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let chars = value.chars().count();
    if chars == 0 || chars > MAX_TEXT_CHARS {
        return Err(ValidationError::invalid(field, "text must be 1-5000 characters"));
    }
    Ok(())
}

/// Checks a terminology identifier: 1-256 characters, identifier rule.
fn check_terminology_name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let chars = value.chars().count();
    if chars == 0 || chars > MAX_NAME_CHARS {
        return Err(ValidationError::invalid(field, "name must be 1-256 characters"));
    }
    if !name_chars_ok(value) {
        return Err(ValidationError::invalid(
            field,
            "name may contain letters, digits, and hyphens, with underscores only after such a \
             character",
        ));
    }
    Ok(())
}

/// Checks the terminology identifier character rule.
///
/// One or more characters from `[A-Za-z0-9-]`; an underscore may appear only
/// immediately after such a character. This is the source pattern
/// `([A-Za-z0-9-]_?)+` with the anchors placed outside the group.
fn name_chars_ok(value: &str) -> bool {
    let mut chars = value.chars().peekable();
    let mut matched_any = false;
    while let Some(c) = chars.next() {
        if !(c.is_ascii_alphanumeric() || c == '-') {
            return false;
        }
        matched_any = true;
        if chars.peek() == Some(&'_') {
            let _ = chars.next();
        }
    }
    matched_any
}

/// Rejects values that would corrupt the unescaped CSV payload.
fn check_delimiter_free(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.contains([',', '\r', '\n']) {
        return Err(ValidationError::invalid(
            field,
            "value must not contain commas or line breaks",
        ));
    }
    Ok(())
}
