// translate-relay-config/src/lib.rs
// ============================================================================
// Module: Translate Relay Configuration
// Description: Configuration loading and validation for the relay.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: serde, thiserror, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size limits. Every
//! numeric setting is validated into a bounded range after parse; an invalid
//! configuration fails closed at startup rather than producing a server with
//! surprising limits.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::AuditConfig;
pub use config::AwsConfig;
pub use config::CONFIG_ENV_VAR;
pub use config::ConfigError;
pub use config::RelayConfig;
pub use config::ServerConfig;

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
