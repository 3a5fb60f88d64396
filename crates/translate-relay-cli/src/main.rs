// translate-relay-cli/src/main.rs
// ============================================================================
// Module: Translate Relay CLI Entry Point
// Description: Command dispatcher for running and inspecting the relay.
// Purpose: Load configuration, wire the cloud backend, and start the server.
// Dependencies: clap, tokio, translate-relay-aws, translate-relay-config,
//               translate-relay-server
// ============================================================================

//! ## Overview
//! Two commands: `serve` starts the HTTP relay against the real cloud
//! backend, `config check` loads and validates a configuration file without
//! starting anything. Errors are written to stderr as a single line and the
//! process exits nonzero.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use clap::Subcommand;
use thiserror::Error;
use translate_relay_aws::AwsTranslateBackend;
use translate_relay_config::ConfigError;
use translate_relay_config::RelayConfig;
use translate_relay_server::RelayServer;
use translate_relay_server::ServeError;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "translate-relay", version, about = "HTTP relay for cloud translation")]
struct Cli {
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP relay server.
    Serve(ServeCommand),
    /// Configuration utilities.
    Config {
        /// Selected configuration subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Arguments for the serve command.
#[derive(clap::Args, Debug)]
struct ServeCommand {
    /// Path to the configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Load and validate a configuration file, then exit.
    Check {
        /// Path to the configuration file.
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI failure surfaced to the operator.
#[derive(Debug, Error)]
enum CliError {
    /// Configuration loading or validation failed.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    /// The server failed to start or stopped with an error.
    #[error("server error: {0}")]
    Serve(#[from] ServeError),
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the parsed CLI command.
async fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Serve(args) => serve(args.config.as_deref()).await,
        Commands::Config {
            command: ConfigCommand::Check { config },
        } => check_config(config.as_deref()),
    }
}

/// Loads configuration, wires the cloud backend, and serves until shutdown.
async fn serve(config_path: Option<&std::path::Path>) -> Result<ExitCode, CliError> {
    let config = RelayConfig::load(config_path)?;
    let backend = Arc::new(AwsTranslateBackend::from_config(&config.aws).await);
    let server = RelayServer::from_config(&config, backend);
    server.serve().await?;
    Ok(ExitCode::SUCCESS)
}

/// Loads and validates configuration without starting the server.
fn check_config(config_path: Option<&std::path::Path>) -> Result<ExitCode, CliError> {
    let config = RelayConfig::load(config_path)?;
    let bind = config.server.bind.as_deref().unwrap_or("(unset)");
    let _ = write_stderr_line(&format!(
        "configuration ok: bind {bind} timeout {}ms body limit {} bytes",
        config.server.request_timeout_ms, config.server.max_body_bytes
    ));
    Ok(ExitCode::SUCCESS)
}

/// Writes a single line to stderr, ignoring transport failures.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Reports an error to stderr and selects the failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
