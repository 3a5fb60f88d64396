// crates/translate-relay-config/tests/load_validation.rs
// ============================================================================
// Module: Config Loading Tests
// Description: Tests for TOML loading, defaults, and range validation.
// Purpose: Ensure invalid configuration fails closed at startup.
// Dependencies: translate-relay-config, tempfile
// ============================================================================

//! ## Overview
//! Tests for TOML loading, defaults, and range validation.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions are permitted."
)]

use std::io::Write;

use tempfile::NamedTempFile;
use translate_relay_config::ConfigError;
use translate_relay_config::RelayConfig;

/// Writes TOML content to a temp file and loads it.
fn load(content: &str) -> Result<RelayConfig, ConfigError> {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    RelayConfig::load(Some(file.path()))
}

#[test]
fn full_config_loads() {
    let config = load(
        r#"
        [server]
        bind = "127.0.0.1:3000"
        max_body_bytes = 65536
        request_timeout_ms = 5000

        [aws]
        region = "us-east-1"
        endpoint = "http://localhost:4566"

        [audit]
        enabled = false
        "#,
    )
    .unwrap();
    assert_eq!(config.server.bind.as_deref(), Some("127.0.0.1:3000"));
    assert_eq!(config.server.max_body_bytes, 65536);
    assert_eq!(config.server.request_timeout_ms, 5000);
    assert_eq!(config.aws.region.as_deref(), Some("us-east-1"));
    assert!(!config.audit.enabled);
}

#[test]
fn empty_config_uses_defaults() {
    let config = load("").unwrap();
    assert!(config.server.bind.is_none());
    assert_eq!(config.server.max_body_bytes, 256 * 1024);
    assert_eq!(config.server.request_timeout_ms, 15_000);
    assert!(config.audit.enabled);
}

#[test]
fn invalid_bind_address_fails() {
    let err = load("[server]\nbind = \"not-an-address\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn out_of_range_timeout_fails() {
    let err = load("[server]\nrequest_timeout_ms = 100\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    let err = load("[server]\nrequest_timeout_ms = 600000\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn out_of_range_body_limit_fails() {
    let err = load("[server]\nmax_body_bytes = 16\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn non_http_endpoint_fails() {
    let err = load("[aws]\nendpoint = \"ftp://example.com\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn unknown_keys_fail_closed() {
    let err = load("[server]\nunknown_setting = 1\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn missing_explicit_path_fails() {
    let err = RelayConfig::load(Some(std::path::Path::new("/nonexistent/translate-relay.toml")))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
