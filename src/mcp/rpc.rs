//! JSON-RPC envelope types and formatting utilities
//!
//! Provides the request/response wire shapes and the single mapping of `AppError`s to
//! JSON-RPC error payloads.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::AppError;

pub const JSONRPC_VERSION: &str = "2.0";

pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

/// A decoded request envelope.
///
/// `jsonrpc` and `method` default to empty strings so that a sloppy client still gets a
/// protocol answer ("Method not found") instead of a decode failure. A `null` id is
/// treated the same as an absent one.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct JsonRpcRequest {
    #[serde(default)]
    pub jsonrpc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default)]
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    pub fn new(id: Option<Value>, method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            method: method.into(),
            params,
        }
    }

    /// Decodes one envelope from raw bytes. Only a JSON object is accepted; arrays and
    /// scalars fail the same way as text that is not JSON at all.
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        match serde_json::from_slice::<Value>(bytes)? {
            value @ Value::Object(_) => serde_json::from_value(value),
            _ => Err(serde::de::Error::custom("request envelope must be a JSON object")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Either a result or an error, never both.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Result(Value),
    Error(JsonRpcError),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl JsonRpcResponse {
    pub fn result(&self) -> Option<&Value> {
        match &self.outcome {
            Outcome::Result(value) => Some(value),
            Outcome::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&JsonRpcError> {
        match &self.outcome {
            Outcome::Result(_) => None,
            Outcome::Error(error) => Some(error),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.outcome, Outcome::Error(_))
    }
}

pub fn app_error_to_json_rpc(id: Option<Value>, err: AppError) -> JsonRpcResponse {
    match err {
        AppError::InvalidParams { message } => json_rpc_error(id, INVALID_PARAMS, message),
        AppError::MissingArgument {
            tool,
            argument,
            message,
        } => json_rpc_error_with_data(
            id,
            INVALID_PARAMS,
            message,
            Some(json!({
                "code": "missing_argument",
                "details": {
                    "tool": tool,
                    "argument": argument,
                }
            })),
        ),
        AppError::MethodNotFound { .. } => json_rpc_error(id, METHOD_NOT_FOUND, "Method not found"),
        AppError::ToolNotFound { name } => json_rpc_error_with_data(
            id,
            METHOD_NOT_FOUND,
            "Tool not found",
            Some(json!({
                "code": "tool_not_found",
                "details": {
                    "name": name,
                }
            })),
        ),
        AppError::Internal { message } => {
            tracing::error!(error = %message, "request failed with internal error");
            json_rpc_error(id, INTERNAL_ERROR, "Internal error")
        }
    }
}

pub fn json_rpc_error(id: Option<Value>, code: i32, message: &str) -> JsonRpcResponse {
    json_rpc_error_with_data(id, code, message, None)
}

pub fn json_rpc_error_with_data(
    id: Option<Value>,
    code: i32,
    message: &str,
    data: Option<Value>,
) -> JsonRpcResponse {
    JsonRpcResponse {
        jsonrpc: JSONRPC_VERSION.to_string(),
        id,
        outcome: Outcome::Error(JsonRpcError {
            code,
            message: message.to_string(),
            data,
        }),
    }
}

pub fn json_rpc_result(id: Option<Value>, result: Value) -> JsonRpcResponse {
    JsonRpcResponse {
        jsonrpc: JSONRPC_VERSION.to_string(),
        id,
        outcome: Outcome::Result(result),
    }
}

/// Envelope for a body that could not be decoded. The id is unknown, so it is omitted.
pub fn parse_error(detail: impl Into<String>) -> JsonRpcResponse {
    json_rpc_error_with_data(None, PARSE_ERROR, "Parse error", Some(Value::String(detail.into())))
}
