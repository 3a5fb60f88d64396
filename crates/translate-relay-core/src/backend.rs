// translate-relay-core/src/backend.rs
// ============================================================================
// Module: Backend Gateway Contract
// Description: Capability trait and error taxonomy for the translation cloud.
// Purpose: Keep the relay core independent of any concrete SDK.
// Dependencies: async-trait, serde, thiserror
// ============================================================================

//! ## Overview
//! The relay reaches its single external collaborator through the four
//! capability operations of [`TranslationBackend`]. Implementations hold one
//! shared, read-only configured client and never retry; each relay request
//! triggers at most one backend call. Backend failures are classified into
//! [`BackendErrorKind`] so the HTTP layer can reproduce the original
//! service's status table exactly.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::model::TerminologyDefinition;
use crate::model::TerminologyDeleteRequest;
use crate::model::TranslationRequest;
use crate::terminology::EncodedTerminologyFile;

// ============================================================================
// SECTION: Outputs
// ============================================================================

/// Successful translation output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedText {
    /// Translated text returned by the backend.
    pub text: String,
}

/// Successful terminology import acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminologyImport {
    /// Stored terminology name.
    pub name: String,
    /// Creation timestamp as reported by the backend, when available.
    pub created_at: Option<String>,
    /// Last-update timestamp as reported by the backend, when available.
    pub last_updated_at: Option<String>,
}

/// One stored terminology file in a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminologySummary {
    /// Stored terminology name.
    pub name: String,
    /// Stored description, when one was supplied at import.
    pub description: Option<String>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Classified backend failure kinds.
///
/// # Invariants
/// - Variants are stable; the HTTP status table keys off them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendErrorKind {
    /// A request parameter was rejected by the backend.
    InvalidParameterValue,
    /// Automatic language detection confidence was too low.
    DetectedLanguageLowConfidence,
    /// The request was malformed for the backend.
    InvalidRequest,
    /// The named resource does not exist.
    ResourceNotFound,
    /// The text exceeds the backend's size limit.
    TextSizeLimitExceeded,
    /// The language pair is not supported.
    UnsupportedLanguagePair,
    /// A backend account limit was exceeded.
    LimitExceeded,
    /// The backend throttled the request.
    TooManyRequests,
    /// The backend reported an internal failure.
    InternalServer,
    /// The local request deadline elapsed before the backend answered.
    Timeout,
    /// Any failure outside the known set.
    Unclassified,
}

/// Backend gateway failure.
///
/// Carries the raw backend error code and message so the HTTP layer can relay
/// the original payload verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct BackendError {
    /// Classified failure kind.
    pub kind: BackendErrorKind,
    /// Raw backend error code (exception name) or a local stand-in.
    pub code: String,
    /// Raw backend error message.
    pub message: String,
}

impl BackendError {
    /// Builds a backend error from a raw backend code and message.
    #[must_use]
    pub fn from_code(code: &str, message: &str) -> Self {
        Self {
            kind: classify_backend_code(code),
            code: code.to_string(),
            message: message.to_string(),
        }
    }

    /// Builds the local deadline-elapsed error.
    #[must_use]
    pub fn timeout(deadline_ms: u64) -> Self {
        Self {
            kind: BackendErrorKind::Timeout,
            code: "RequestTimeout".to_string(),
            message: format!("backend call exceeded {deadline_ms}ms deadline"),
        }
    }

    /// Builds an unclassified error with no backend code.
    #[must_use]
    pub fn unclassified(message: &str) -> Self {
        Self {
            kind: BackendErrorKind::Unclassified,
            code: "UnknownError".to_string(),
            message: message.to_string(),
        }
    }
}

/// Classifies a raw backend error code into a failure kind.
///
/// Unknown codes map to [`BackendErrorKind::Unclassified`].
#[must_use]
pub fn classify_backend_code(code: &str) -> BackendErrorKind {
    match code {
        "InvalidParameterValueException" => BackendErrorKind::InvalidParameterValue,
        "DetectedLanguageLowConfidenceException" => {
            BackendErrorKind::DetectedLanguageLowConfidence
        }
        "InvalidRequestException" => BackendErrorKind::InvalidRequest,
        "ResourceNotFoundException" => BackendErrorKind::ResourceNotFound,
        "TextSizeLimitExceededException" => BackendErrorKind::TextSizeLimitExceeded,
        "UnsupportedLanguagePairException" => BackendErrorKind::UnsupportedLanguagePair,
        "LimitExceededException" => BackendErrorKind::LimitExceeded,
        "TooManyRequestsException" => BackendErrorKind::TooManyRequests,
        "InternalServerException" => BackendErrorKind::InternalServer,
        _ => BackendErrorKind::Unclassified,
    }
}

// ============================================================================
// SECTION: Capability Trait
// ============================================================================

/// Capability interface to the translation cloud service.
///
/// # Invariants
/// - Implementations never retry and never cache.
/// - Terminology imports always use merge strategy `OVERWRITE` and format
///   `CSV`.
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    /// Translates text, applying any requested terminologies.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] when the backend reports a failure.
    async fn translate_text(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslatedText, BackendError>;

    /// Creates or overwrites a terminology file.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] when the backend reports a failure.
    async fn import_terminology(
        &self,
        definition: &TerminologyDefinition,
        file: &EncodedTerminologyFile,
    ) -> Result<TerminologyImport, BackendError>;

    /// Lists stored terminology files.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] when the backend reports a failure.
    async fn list_terminologies(&self) -> Result<Vec<TerminologySummary>, BackendError>;

    /// Deletes a stored terminology file.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] when the backend reports a failure.
    async fn delete_terminology(
        &self,
        request: &TerminologyDeleteRequest,
    ) -> Result<(), BackendError>;
}
