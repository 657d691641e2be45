//! The central Model Context Protocol dispatcher
//!
//! Routes a decoded request by method (`initialize`, `tools/list`, `tools/call`) and, for
//! tool calls, by tool name. Holds no per-request state; the color store is the only
//! mutable state and it guards itself.

use std::sync::Arc;

use rust_mcp_sdk::schema::{
    Implementation, InitializeResult, ListToolsResult, ServerCapabilities,
    ServerCapabilitiesTools,
};
use serde_json::Value;
use tracing::info;

use crate::domain::{colors::ColorStore, tools::handle_tools_call};
use crate::errors::AppError;
use crate::mcp::{
    registry::ToolRegistry,
    rpc::{app_error_to_json_rpc, json_rpc_result, JsonRpcRequest, JsonRpcResponse},
};

pub const SUPPORTED_PROTOCOL_VERSION: &str = "2024-11-05";

pub struct McpServer {
    registry: ToolRegistry,
    store: Arc<ColorStore>,
}

impl McpServer {
    pub fn new() -> Self {
        Self::with_store(Arc::new(ColorStore::new()))
    }

    pub fn with_store(store: Arc<ColorStore>) -> Self {
        Self {
            registry: ToolRegistry::with_color_tools(),
            store,
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn store(&self) -> &ColorStore {
        &self.store
    }

    pub fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let JsonRpcRequest {
            id, method, params, ..
        } = request;

        let response = match self.dispatch(&method, params.as_ref()) {
            Ok(result) => json_rpc_result(id, result),
            Err(err) => app_error_to_json_rpc(id, err),
        };

        let tool = match method.as_str() {
            "tools/call" => tool_name(params.as_ref()),
            _ => None,
        };

        info!(
            method = %method,
            tool = tool.unwrap_or("-"),
            outcome = if response.is_error() { "failure" } else { "success" },
            "mcp action audited"
        );

        response
    }

    fn dispatch(&self, method: &str, params: Option<&Value>) -> Result<Value, AppError> {
        match method {
            "initialize" => self.initialize(),
            "tools/list" => self.tools_list(),
            "tools/call" => handle_tools_call(&self.store, params),
            _ => Err(AppError::method_not_found(method)),
        }
    }

    fn initialize(&self) -> Result<Value, AppError> {
        let initialize_result = InitializeResult {
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                description: None,
                icons: vec![],
                website_url: None,
            },
            capabilities: ServerCapabilities {
                tools: Some(ServerCapabilitiesTools {
                    list_changed: Some(false),
                }),
                ..Default::default()
            },
            protocol_version: SUPPORTED_PROTOCOL_VERSION.to_string(),
            instructions: None,
            meta: None,
        };

        serde_json::to_value(initialize_result)
            .map_err(|err| AppError::internal(format!("initialize result serialization: {err}")))
    }

    fn tools_list(&self) -> Result<Value, AppError> {
        serde_json::to_value(ListToolsResult {
            meta: None,
            next_cursor: None,
            tools: self.registry.list(),
        })
        .map_err(|err| AppError::internal(format!("tools list result serialization: {err}")))
    }
}

impl Default for McpServer {
    fn default() -> Self {
        Self::new()
    }
}

fn tool_name(params: Option<&Value>) -> Option<&str> {
    params
        .and_then(|params| params.get("name"))
        .and_then(Value::as_str)
}
