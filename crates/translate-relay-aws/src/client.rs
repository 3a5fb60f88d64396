// translate-relay-aws/src/client.rs
// ============================================================================
// Module: AWS Translate Client
// Description: TranslationBackend implementation over aws-sdk-translate.
// Purpose: Execute the four capability operations with no retries or caching.
// Dependencies: aws-config, aws-sdk-translate, translate-relay-core
// ============================================================================

//! ## Overview
//! One [`Client`] is constructed at startup and cloned per call (SDK clients
//! are cheap handles over a shared connection pool). Terminology imports
//! always use merge strategy `OVERWRITE` and format `CSV`, matching the
//! original service. No retry policy is layered on top of the SDK.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_config::Region;
use aws_sdk_translate::Client;
use aws_sdk_translate::error::ProvideErrorMetadata;
use aws_sdk_translate::error::SdkError;
use aws_sdk_translate::primitives::Blob;
use aws_sdk_translate::primitives::DateTime;
use aws_sdk_translate::primitives::DateTimeFormat;
use aws_sdk_translate::types::MergeStrategy;
use aws_sdk_translate::types::TerminologyData;
use aws_sdk_translate::types::TerminologyDataFormat;
use translate_relay_config::AwsConfig;
use translate_relay_core::BackendError;
use translate_relay_core::EncodedTerminologyFile;
use translate_relay_core::TerminologyDefinition;
use translate_relay_core::TerminologyDeleteRequest;
use translate_relay_core::TerminologyImport;
use translate_relay_core::TerminologySummary;
use translate_relay_core::TranslatedText;
use translate_relay_core::TranslationBackend;
use translate_relay_core::TranslationRequest;

// ============================================================================
// SECTION: Backend
// ============================================================================

/// AWS Translate backend gateway.
///
/// # Invariants
/// - The client is configured once and never mutated afterwards.
pub struct AwsTranslateBackend {
    /// Shared, read-only configured SDK client.
    client: Client,
}

impl AwsTranslateBackend {
    /// Builds the backend from relay configuration.
    ///
    /// Region and endpoint overrides take precedence over the ambient SDK
    /// configuration chain; credentials always come from the chain.
    pub async fn from_config(config: &AwsConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint) = &config.endpoint {
            loader = loader.endpoint_url(endpoint.clone());
        }
        let shared_config = loader.load().await;
        Self {
            client: Client::new(&shared_config),
        }
    }

    /// Builds the backend from an already-configured SDK client.
    #[must_use]
    pub const fn from_client(client: Client) -> Self {
        Self {
            client,
        }
    }
}

#[async_trait]
impl TranslationBackend for AwsTranslateBackend {
    async fn translate_text(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslatedText, BackendError> {
        let mut call = self
            .client
            .translate_text()
            .source_language_code(&request.source_language_code)
            .target_language_code(&request.target_language_code)
            .text(&request.text);
        // The original service omits the parameter entirely for an empty list.
        if !request.terminology_names.is_empty() {
            call = call.set_terminology_names(Some(request.terminology_names.clone()));
        }
        let output = call.send().await.map_err(|err| map_sdk_error("translate_text", &err))?;
        Ok(TranslatedText {
            text: output.translated_text().to_string(),
        })
    }

    async fn import_terminology(
        &self,
        definition: &TerminologyDefinition,
        file: &EncodedTerminologyFile,
    ) -> Result<TerminologyImport, BackendError> {
        let data = TerminologyData::builder()
            .file(Blob::new(file.as_bytes().to_vec()))
            .format(TerminologyDataFormat::Csv)
            .build()
            .map_err(|err| {
                BackendError::unclassified(&format!("terminology data build failed: {err}"))
            })?;
        let mut call = self
            .client
            .import_terminology()
            .name(&definition.file_name)
            .merge_strategy(MergeStrategy::Overwrite)
            .terminology_data(data);
        if let Some(description) = &definition.description {
            call = call.description(description);
        }
        let output = call.send().await.map_err(|err| map_sdk_error("import_terminology", &err))?;
        let properties = output.terminology_properties().ok_or_else(|| {
            BackendError::unclassified("import response missing terminology properties")
        })?;
        Ok(TerminologyImport {
            name: properties.name().unwrap_or(&definition.file_name).to_string(),
            created_at: properties.created_at().and_then(format_timestamp),
            last_updated_at: properties.last_updated_at().and_then(format_timestamp),
        })
    }

    async fn list_terminologies(&self) -> Result<Vec<TerminologySummary>, BackendError> {
        let output = self
            .client
            .list_terminologies()
            .send()
            .await
            .map_err(|err| map_sdk_error("list_terminologies", &err))?;
        Ok(output
            .terminology_properties_list()
            .iter()
            .map(|properties| TerminologySummary {
                name: properties.name().unwrap_or_default().to_string(),
                description: properties.description().map(str::to_string),
            })
            .collect())
    }

    async fn delete_terminology(
        &self,
        request: &TerminologyDeleteRequest,
    ) -> Result<(), BackendError> {
        self.client
            .delete_terminology()
            .name(&request.terminology_name)
            .send()
            .await
            .map_err(|err| map_sdk_error("delete_terminology", &err))?;
        Ok(())
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Maps an SDK failure onto the core error taxonomy.
///
/// Modeled service errors carry a code (the exception name) which drives the
/// status table; dispatch-level failures without metadata are unclassified.
fn map_sdk_error<E, R>(operation: &str, err: &SdkError<E, R>) -> BackendError
where
    SdkError<E, R>: ProvideErrorMetadata,
{
    err.code().map_or_else(
        || BackendError::unclassified(&format!("{operation} dispatch failed")),
        |code| {
            let message = err.message().unwrap_or(code).to_string();
            BackendError::from_code(code, &message)
        },
    )
}

/// Formats a backend timestamp as an RFC3339 string.
fn format_timestamp(timestamp: &DateTime) -> Option<String> {
    timestamp.fmt(DateTimeFormat::DateTime).ok()
}
