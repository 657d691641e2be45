//! Tracing setup and per-request HTTP logging
//!
//! Every event is written to stderr so that the stdio transport keeps stdout for
//! protocol lines only.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber. Output goes to stderr; stdout carries protocol
/// messages when the stdio transport is active.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

/// Records one event per HTTP request with its method, path, status and latency.
///
/// Rejections (4xx, such as `GET /mcp` or an unknown path) are logged at warn level.
/// JSON-RPC failures still travel as HTTP 200 and show up in the dispatcher's audit line.
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started_at = Instant::now();

    let response = next.run(request).await;
    let status = response.status().as_u16();
    let duration_ms = started_at.elapsed().as_millis();

    if response.status().is_client_error() {
        warn!(%method, %path, status, duration_ms, "request rejected");
    } else {
        info!(%method, %path, status, duration_ms, "request served");
    }

    response
}
