// translate-relay-config/src/config.rs
// ============================================================================
// Module: Relay Configuration
// Description: TOML configuration model with fail-closed validation.
// Purpose: Bound every server and backend setting into a safe range.
// Dependencies: serde, thiserror, toml
// ============================================================================

//! ## Overview
//! The configuration file is resolved from an explicit path, the
//! `TRANSLATE_RELAY_CONFIG` environment variable, or the default filename, in
//! that order. The file is size-limited before it is read and every setting
//! is range-checked by [`RelayConfig::validate`]. Missing sections fall back
//! to defaults; a present-but-invalid setting is an error, never a silent
//! clamp.

use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "translate-relay.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "TRANSLATE_RELAY_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;
/// Default maximum request body size in bytes.
pub(crate) const DEFAULT_MAX_BODY_BYTES: usize = 256 * 1024;
/// Minimum allowed request body limit in bytes.
pub(crate) const MIN_MAX_BODY_BYTES: usize = 1024;
/// Maximum allowed request body limit in bytes.
pub(crate) const MAX_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;
/// Default backend call deadline in milliseconds.
pub(crate) const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 15_000;
/// Minimum backend call deadline in milliseconds.
pub(crate) const MIN_REQUEST_TIMEOUT_MS: u64 = 1_000;
/// Maximum backend call deadline in milliseconds.
pub(crate) const MAX_REQUEST_TIMEOUT_MS: u64 = 120_000;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Filesystem access failed.
    #[error("config io error: {0}")]
    Io(String),
    /// The configuration file exceeds the size limit.
    #[error("config file exceeds {MAX_CONFIG_FILE_SIZE} bytes")]
    TooLarge,
    /// TOML parsing failed.
    #[error("config parse error: {0}")]
    Parse(String),
    /// A setting violated its validated range.
    #[error("config invalid: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Configuration Model
// ============================================================================

/// Top-level relay configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelayConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Backend SDK settings.
    #[serde(default)]
    pub aws: AwsConfig,
    /// Audit logging settings.
    #[serde(default)]
    pub audit: AuditConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Bind address, e.g. `127.0.0.1:3000`. Required to serve.
    pub bind: Option<String>,
    /// Maximum accepted request body size in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
    /// Deadline applied to each backend call, in milliseconds.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: None,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

/// Backend SDK settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AwsConfig {
    /// Region override; falls back to the ambient SDK configuration chain.
    pub region: Option<String>,
    /// Endpoint URL override for local stacks.
    pub endpoint: Option<String>,
}

/// Audit logging settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditConfig {
    /// Emit request audit events to stderr when true.
    #[serde(default = "default_audit_enabled")]
    pub enabled: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: true,
        }
    }
}

/// Serde default for [`ServerConfig::max_body_bytes`].
const fn default_max_body_bytes() -> usize {
    DEFAULT_MAX_BODY_BYTES
}

/// Serde default for [`ServerConfig::request_timeout_ms`].
const fn default_request_timeout_ms() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_MS
}

/// Serde default for [`AuditConfig::enabled`].
const fn default_audit_enabled() -> bool {
    true
}

// ============================================================================
// SECTION: Loading and Validation
// ============================================================================

impl RelayConfig {
    /// Loads configuration from the resolved path.
    ///
    /// Resolution order: explicit `path`, then [`CONFIG_ENV_VAR`], then
    /// `translate-relay.toml` in the working directory. A missing default
    /// file yields the built-in defaults; a missing explicit path is an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, exceeds the
    /// size limit, fails to parse, or fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (resolved, explicit) = resolve_path(path);
        if !explicit && !resolved.exists() {
            let mut config = Self::default();
            config.validate()?;
            return Ok(config);
        }
        let metadata = fs::metadata(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::TooLarge);
        }
        let raw = fs::read_to_string(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        let mut config: Self =
            toml::from_str(&raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates every setting into its bounded range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when any setting is out of range.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        if let Some(bind) = &self.server.bind {
            bind.parse::<SocketAddr>().map_err(|_| {
                ConfigError::Invalid(format!("server.bind is not a socket address: {bind}"))
            })?;
        }
        if !(MIN_MAX_BODY_BYTES ..= MAX_MAX_BODY_BYTES).contains(&self.server.max_body_bytes) {
            return Err(ConfigError::Invalid(format!(
                "server.max_body_bytes must be within [{MIN_MAX_BODY_BYTES}, {MAX_MAX_BODY_BYTES}]"
            )));
        }
        if !(MIN_REQUEST_TIMEOUT_MS ..= MAX_REQUEST_TIMEOUT_MS)
            .contains(&self.server.request_timeout_ms)
        {
            return Err(ConfigError::Invalid(format!(
                "server.request_timeout_ms must be within [{MIN_REQUEST_TIMEOUT_MS}, \
                 {MAX_REQUEST_TIMEOUT_MS}]"
            )));
        }
        if let Some(region) = &self.aws.region
            && region.trim().is_empty()
        {
            return Err(ConfigError::Invalid("aws.region must not be empty".to_string()));
        }
        if let Some(endpoint) = &self.aws.endpoint
            && !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(ConfigError::Invalid(
                "aws.endpoint must be an http or https URL".to_string(),
            ));
        }
        Ok(())
    }
}

/// Resolves the configuration path and whether it was explicitly requested.
fn resolve_path(path: Option<&Path>) -> (PathBuf, bool) {
    if let Some(path) = path {
        return (path.to_path_buf(), true);
    }
    if let Ok(from_env) = env::var(CONFIG_ENV_VAR)
        && !from_env.trim().is_empty()
    {
        return (PathBuf::from(from_env), true);
    }
    (PathBuf::from(DEFAULT_CONFIG_NAME), false)
}
