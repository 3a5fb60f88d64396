// translate-relay-core/src/lib.rs
// ============================================================================
// Module: Translate Relay Core
// Description: Request validation, terminology encoding, and backend contract.
// Purpose: Provide the pure, I/O-free core shared by the relay server.
// Dependencies: async-trait, serde, thiserror
// ============================================================================

//! ## Overview
//! The core crate holds everything the relay decides locally: field-level
//! request validation, deterministic CSV terminology encoding, and the
//! [`TranslationBackend`] capability trait through which the single external
//! collaborator (the translation cloud service) is reached. All types are
//! request-scoped; nothing here persists state or performs I/O.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod backend;
pub mod model;
pub mod terminology;
pub mod validation;

#[cfg(test)]
mod tests {
    //! Test-only lint relaxations for panic-based assertions and debug output.
    #![allow(
        clippy::panic,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::use_debug,
        clippy::dbg_macro,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        reason = "Test-only output and panic-based assertions are permitted."
    )]
}

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use backend::BackendError;
pub use backend::BackendErrorKind;
pub use backend::TerminologyImport;
pub use backend::TerminologySummary;
pub use backend::TranslatedText;
pub use backend::TranslationBackend;
pub use backend::classify_backend_code;
pub use model::DeleteTerminologyPayload;
pub use model::ImportTerminologyPayload;
pub use model::TerminologyDefinition;
pub use model::TerminologyDeleteRequest;
pub use model::TranslateTextPayload;
pub use model::TranslationRequest;
pub use terminology::EncodedTerminologyFile;
pub use terminology::encode_terminology_file;
pub use validation::ValidationError;
pub use validation::validate_delete_request;
pub use validation::validate_terminology_definition;
pub use validation::validate_translation_request;
