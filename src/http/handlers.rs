//! Axum HTTP handlers for the web server
//!
//! Provides the MCP endpoint, the informational root page and the OAuth resource
//! metadata endpoint.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::mcp::rpc::{parse_error, JsonRpcRequest};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ProtectedResourceResponse {
    pub resource: &'static str,
    pub scopes: [&'static str; 2],
    pub auth: bool,
}

pub async fn oauth_protected_resource() -> Json<ProtectedResourceResponse> {
    Json(ProtectedResourceResponse {
        resource: "mcp-server",
        scopes: ["mcp:read", "mcp:write"],
        auth: false,
    })
}

/// Decodes one request envelope, dispatches it and answers with one response envelope.
///
/// A body that does not decode still gets HTTP 200; the failure is reported as a
/// JSON-RPC parse error.
pub async fn mcp_endpoint(State(state): State<AppState>, body: Bytes) -> Response {
    let response = match JsonRpcRequest::from_slice(&body) {
        Ok(request) => {
            debug!(method = %request.method, id = ?request.id, "processing MCP request");
            state.server.handle_request(request)
        }
        Err(err) => {
            warn!(error = %err, "JSON decode error");
            parse_error(err.to_string())
        }
    };

    (
        StatusCode::OK,
        [(header::CACHE_CONTROL, "no-cache")],
        Json(response),
    )
        .into_response()
}

pub async fn root(State(state): State<AppState>) -> Html<String> {
    let transport = state.scheme.to_ascii_uppercase();
    let mcp_url = &state.mcp_url;
    let tools = state
        .server
        .registry()
        .list()
        .into_iter()
        .map(|tool| {
            format!(
                "            <li><strong>{}</strong> - {}</li>\n",
                tool.name,
                tool.description.unwrap_or_default()
            )
        })
        .collect::<String>();

    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Favorite Colors MCP Server</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 40px; }}
        .container {{ max-width: 800px; margin: 0 auto; }}
        .endpoint {{ background: #f5f5f5; padding: 15px; margin: 10px 0; border-radius: 5px; }}
        .method {{ color: #0066cc; font-weight: bold; }}
        .status {{ padding: 10px; margin: 10px 0; border-radius: 5px; background: #d4edda; color: #155724; }}
        pre {{ background: #000; color: #0f0; padding: 10px; border-radius: 3px; }}
    </style>
</head>
<body>
    <div class="container">
        <h1>Favorite Colors MCP Server</h1>
        <div class="status">Server is running with StreamableHttp transport over {transport}</div>

        <h2>MCP Inspector Setup</h2>
        <pre>npx @modelcontextprotocol/inspector</pre>
        <ul>
            <li><strong>Transport Type:</strong> StreamableHttp</li>
            <li><strong>URL:</strong> {mcp_url}</li>
        </ul>

        <h2>Endpoints</h2>
        <div class="endpoint">
            <h3><span class="method">POST</span> /mcp</h3>
            <p>JSON-RPC endpoint (JSON over {transport})</p>
        </div>
        <div class="endpoint">
            <h3><span class="method">GET</span> /.well-known/oauth-protected-resource</h3>
            <p>OAuth resource info</p>
        </div>

        <h2>Available Tools</h2>
        <ul>
{tools}        </ul>
    </div>
</body>
</html>"#
    ))
}
