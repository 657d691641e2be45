use thiserror::Error;

/// Protocol-level misuse. Every variant becomes a JSON-RPC error response and none of
/// them is fatal to the process.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("invalid params: {message}")]
    InvalidParams { message: &'static str },
    #[error("missing required argument `{argument}` for tool {tool}")]
    MissingArgument {
        tool: &'static str,
        argument: &'static str,
        message: &'static str,
    },
    #[error("method not found: {method}")]
    MethodNotFound { method: String },
    #[error("tool not found: {name}")]
    ToolNotFound { name: String },
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn invalid_params(message: &'static str) -> Self {
        Self::InvalidParams { message }
    }

    pub fn missing_argument(
        tool: &'static str,
        argument: &'static str,
        message: &'static str,
    ) -> Self {
        Self::MissingArgument {
            tool,
            argument,
            message,
        }
    }

    pub fn method_not_found(method: impl Into<String>) -> Self {
        Self::MethodNotFound {
            method: method.into(),
        }
    }

    pub fn tool_not_found(name: impl Into<String>) -> Self {
        Self::ToolNotFound { name: name.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
