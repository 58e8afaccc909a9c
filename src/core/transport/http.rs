//! HTTP transport implementation.
//!
//! JSON over POST on any path: the pipeline classifies each body, so
//! JSON-RPC envelopes, Lambda-proxy events, and flat invocations all land
//! on the same routes. Admission is bounded by a semaphore; once
//! `max_in_flight` requests are being processed, further requests get an
//! immediate 503 instead of queueing without bound.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{Method, StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
    routing::{get, post},
};
use tokio::sync::Semaphore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::{HttpConfig, TransportError, TransportResult};
use crate::core::McpServer;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    server: McpServer,
    permits: Arc<Semaphore>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = build_router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {} (multi-protocol JSON over HTTP)", addr);
        info!("  -> Invocation: POST <any path>");
        info!("  -> Health:     GET /health, GET /ping");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Build the router. Separated from [`HttpTransport::run`] so tests can
/// drive it without a socket.
pub fn build_router(server: McpServer) -> Router {
    let enable_cors = match &server.config().transport {
        crate::core::TransportConfig::Http(cfg) => cfg.enable_cors,
        crate::core::TransportConfig::Stdio => true,
    };
    let limits = server.config().limits.clone();

    let state = AppState {
        permits: Arc::new(Semaphore::new(limits.max_in_flight)),
        server,
    };

    let mut app = Router::new()
        .route("/health", get(health_check))
        .route("/ping", get(health_check))
        .route("/", get(root_handler).post(handle_invocation))
        .route("/{*path}", post(handle_invocation))
        // Slightly above the pipeline's own cap so the cap produces the
        // JSON error shape instead of a bare 413
        .layer(DefaultBodyLimit::max(limits.max_body_bytes + 1024))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE]);
        app = app.layer(cors);
    }

    app
}

/// Root handler - provides API info.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "service": state.server.name(),
        "version": state.server.version(),
        "supported_methods": ["tools/list", "tools/call"],
        "example_request": {
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/call",
            "params": {"name": "add", "arguments": {"a": 2, "b": 3}}
        }
    }))
}

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    // Liveness self-check: a server with no registered tools cannot serve
    if state.server.registry().is_empty() {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({
                "status": "unhealthy",
                "error": "no tools registered",
            })),
        );
    }

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "healthy",
            "service": state.server.name(),
            "timestamp": chrono::Utc::now().timestamp(),
        })),
    )
}

/// Protocol-adapted invocation path: any POSTed body goes through the
/// classify/extract/dispatch/encode pipeline.
async fn handle_invocation(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let Ok(_permit) = state.permits.try_acquire() else {
        warn!("admission limit reached, rejecting request");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({
                "error": "server busy, try again later",
            })),
        );
    };

    // Handlers may block; keep them off the async workers.
    let server = state.server.clone();
    let encoded = tokio::task::spawn_blocking(move || server.handle_raw(&body)).await;

    match encoded {
        Ok(encoded) => (
            StatusCode::from_u16(encoded.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Json(encoded.body),
        ),
        Err(e) => {
            warn!("invocation worker failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "jsonrpc": "2.0",
                    "id": null,
                    "error": {"code": -32603, "message": "Internal error"},
                })),
            )
        }
    }
}
