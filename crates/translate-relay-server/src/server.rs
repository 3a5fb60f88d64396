// translate-relay-server/src/server.rs
// ============================================================================
// Module: Relay Server Assembly
// Description: Router construction and TCP serve loop for the relay surface.
// Purpose: Bind configuration, state, and routes into a runnable server.
// Dependencies: axum, tokio, translate-relay-config, translate-relay-core
// ============================================================================

//! ## Overview
//! [`RelayServer`] assembles the four relay routes, the cross-origin
//! middleware, and the shared handler state from a validated
//! [`RelayConfig`]. The router is exposed separately from the serve loop so
//! tests can drive it in-process without opening a socket.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::put;
use thiserror::Error;
use tokio::net::TcpListener;
use translate_relay_config::RelayConfig;
use translate_relay_core::TranslationBackend;

use crate::audit::AuditSink;
use crate::audit::NoopAuditSink;
use crate::audit::StderrAuditSink;
use crate::cors;
use crate::handlers;
use crate::handlers::AppState;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while assembling or running the server.
#[derive(Debug, Error)]
pub enum ServeError {
    /// Server configuration was missing or invalid.
    #[error("server configuration error: {0}")]
    Config(String),
    /// Binding or serving the TCP listener failed.
    #[error("server transport error: {0}")]
    Transport(String),
}

// ============================================================================
// SECTION: Server
// ============================================================================

/// Assembled relay server: bind address plus shared handler state.
pub struct RelayServer {
    /// Address the serve loop binds to; required before serving.
    bind: Option<String>,
    /// Shared handler state.
    state: Arc<AppState>,
}

impl RelayServer {
    /// Builds a server from a validated configuration and a backend handle.
    #[must_use]
    pub fn from_config(config: &RelayConfig, backend: Arc<dyn TranslationBackend>) -> Self {
        let audit: Arc<dyn AuditSink> = if config.audit.enabled {
            Arc::new(StderrAuditSink)
        } else {
            Arc::new(NoopAuditSink)
        };
        let state = Arc::new(AppState {
            backend,
            audit,
            max_body_bytes: config.server.max_body_bytes,
            request_timeout_ms: config.server.request_timeout_ms,
        });
        Self {
            bind: config.server.bind.clone(),
            state,
        }
    }

    /// Builds the axum router for the relay surface.
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .route("/translate/text", get(handlers::translate_text))
            .route("/translate/custom-terminology", put(handlers::import_terminology))
            .route("/translate/list-terminology", get(handlers::list_terminology))
            .route("/translate/delete-terminology", delete(handlers::delete_terminology))
            .layer(middleware::from_fn(cors::apply))
            .with_state(Arc::clone(&self.state))
    }

    /// Binds the configured address and serves requests until shutdown.
    ///
    /// # Errors
    ///
    /// Returns [`ServeError::Config`] when the bind address is missing or does
    /// not parse and [`ServeError::Transport`] when binding or serving fails.
    pub async fn serve(self) -> Result<(), ServeError> {
        let bind = self
            .bind
            .as_deref()
            .ok_or_else(|| ServeError::Config("server.bind is required to serve".to_string()))?;
        let addr: SocketAddr = bind
            .parse()
            .map_err(|_| ServeError::Config(format!("invalid bind address: {bind}")))?;
        let router = self.router();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|err| ServeError::Transport(format!("bind {addr} failed: {err}")))?;
        axum::serve(listener, router)
            .await
            .map_err(|err| ServeError::Transport(format!("serve failed: {err}")))
    }
}
