use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, HeaderName, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod logging;
pub mod mcp;
pub mod stdio;

use mcp::server::McpServer;

#[derive(Clone)]
pub struct AppState {
    pub server: Arc<McpServer>,
    pub scheme: &'static str,
    pub mcp_url: Arc<str>,
}

impl AppState {
    pub fn new(server: Arc<McpServer>, scheme: &'static str, mcp_url: String) -> Self {
        Self {
            server,
            scheme,
            mcp_url: Arc::<str>::from(mcp_url),
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::handlers::root))
        .route("/mcp", post(http::handlers::mcp_endpoint))
        .route(
            "/.well-known/oauth-protected-resource",
            get(http::handlers::oauth_protected_resource),
        )
        .layer(cors_layer())
        .layer(middleware::from_fn(logging::request_logging_middleware))
        .with_state(state)
}

/// Any origin may call the server. Preflight (OPTIONS) requests are answered here with
/// 200 and an empty body.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            HeaderName::from_static("x-requested-with"),
        ])
        .max_age(Duration::from_secs(86_400))
}
