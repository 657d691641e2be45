//! Color tools exposed via Model Context Protocol
//!
//! Provides `add_color`, `get_colors`, `remove_color` and `clear_colors`. Each tool
//! validates its own arguments and delegates to the shared `ColorStore`.

use rust_mcp_sdk::{
    macros,
    schema::{CallToolResult, ContentBlock, TextContent, Tool},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::{domain::colors::ColorStore, errors::AppError};

#[macros::mcp_tool(name = "add_color", description = "Add a color to your favorites list")]
#[derive(Debug, Deserialize, Serialize, macros::JsonSchema)]
pub struct AddColorTool {
    /// The color to add to favorites
    pub color: String,
}

#[macros::mcp_tool(name = "get_colors", description = "Get all favorite colors")]
#[derive(Debug, Deserialize, Serialize, macros::JsonSchema)]
pub struct GetColorsTool {}

#[macros::mcp_tool(
    name = "remove_color",
    description = "Remove a color from your favorites list"
)]
#[derive(Debug, Deserialize, Serialize, macros::JsonSchema)]
pub struct RemoveColorTool {
    /// The color to remove from favorites
    pub color: String,
}

#[macros::mcp_tool(name = "clear_colors", description = "Clear all favorite colors")]
#[derive(Debug, Deserialize, Serialize, macros::JsonSchema)]
pub struct ClearColorsTool {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTool {
    AddColor,
    GetColors,
    RemoveColor,
    ClearColors,
}

impl ColorTool {
    pub const ALL: [Self; 4] = [
        Self::AddColor,
        Self::GetColors,
        Self::RemoveColor,
        Self::ClearColors,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::AddColor => "add_color",
            Self::GetColors => "get_colors",
            Self::RemoveColor => "remove_color",
            Self::ClearColors => "clear_colors",
        }
    }

    pub fn descriptor(self) -> Tool {
        match self {
            Self::AddColor => AddColorTool::tool(),
            Self::GetColors => GetColorsTool::tool(),
            Self::RemoveColor => RemoveColorTool::tool(),
            Self::ClearColors => ClearColorsTool::tool(),
        }
    }

    /// Runs the tool against `store` and returns the message to show the caller.
    ///
    /// "Already present", "not found" and "cleared 0" are successful outcomes; only a
    /// missing or empty `color` argument is an error.
    pub fn invoke(
        self,
        store: &ColorStore,
        arguments: Option<&Map<String, Value>>,
    ) -> Result<String, AppError> {
        let message = match self {
            Self::AddColor => {
                let color = required_color(self, arguments)?;
                let outcome = store.add(color);
                debug!(color, added = outcome.added, "add_color handled");
                outcome.message
            }
            Self::GetColors => store.get().text,
            Self::RemoveColor => {
                let color = required_color(self, arguments)?;
                let outcome = store.remove(color);
                debug!(color, removed = outcome.removed, "remove_color handled");
                outcome.message
            }
            Self::ClearColors => {
                let outcome = store.clear();
                debug!(previous_count = outcome.previous_count, "clear_colors handled");
                outcome.message
            }
        };

        Ok(message)
    }
}

pub fn build_tools_list() -> Vec<Tool> {
    ColorTool::ALL.into_iter().map(ColorTool::descriptor).collect()
}

fn required_color(
    tool: ColorTool,
    arguments: Option<&Map<String, Value>>,
) -> Result<&str, AppError> {
    arguments
        .and_then(|arguments| arguments.get("color"))
        .and_then(Value::as_str)
        .filter(|color| !color.is_empty())
        .ok_or_else(|| AppError::missing_argument(tool.name(), "color", "Color parameter required"))
}

/// Handles the `tools/call` method.
///
/// `params` must be an object with a string `name`; `arguments` is optional and a
/// non-object value is treated as absent.
pub fn handle_tools_call(store: &ColorStore, params: Option<&Value>) -> Result<Value, AppError> {
    let params = params
        .and_then(Value::as_object)
        .ok_or_else(|| AppError::invalid_params("Invalid params"))?;

    let name = params
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::invalid_params("Tool name required"))?;

    let arguments = params.get("arguments").and_then(Value::as_object);

    let tool = ColorTool::from_name(name).ok_or_else(|| AppError::tool_not_found(name))?;
    let message = tool.invoke(store, arguments)?;

    serde_json::to_value(text_result(message))
        .map_err(|err| AppError::internal(format!("tool result serialization failed: {err}")))
}

fn text_result(text: String) -> CallToolResult {
    CallToolResult {
        content: vec![ContentBlock::from(TextContent::new(text, None, None))],
        is_error: None,
        meta: None,
        structured_content: None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{build_tools_list, handle_tools_call, ColorTool};
    use crate::{domain::colors::ColorStore, errors::AppError};

    fn text_of(result: &serde_json::Value) -> &str {
        result["content"][0]["text"].as_str().expect("text content")
    }

    #[test]
    fn tool_names_round_trip() {
        for tool in ColorTool::ALL {
            assert_eq!(ColorTool::from_name(tool.name()), Some(tool));
        }
        assert_eq!(ColorTool::from_name("paint_wall"), None);
    }

    #[test]
    fn tools_list_has_the_four_color_tools() {
        let names = build_tools_list()
            .into_iter()
            .map(|tool| tool.name)
            .collect::<Vec<_>>();

        assert_eq!(
            names,
            vec!["add_color", "get_colors", "remove_color", "clear_colors"]
        );
    }

    #[test]
    fn add_color_wraps_message_in_text_content() {
        let store = ColorStore::new();
        let params = json!({"name": "add_color", "arguments": {"color": "purple"}});

        let result = handle_tools_call(&store, Some(&params)).expect("tool call succeeds");

        assert_eq!(result["content"][0]["type"], "text");
        assert!(text_of(&result).contains("Successfully added 'purple'"));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn duplicate_add_is_a_successful_result() {
        let store = ColorStore::new();
        store.add("purple");
        let params = json!({"name": "add_color", "arguments": {"color": "purple"}});

        let result = handle_tools_call(&store, Some(&params)).expect("tool call succeeds");

        assert!(text_of(&result).contains("already in your favorites"));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn missing_color_is_rejected() {
        let store = ColorStore::new();

        for params in [
            json!({"name": "add_color"}),
            json!({"name": "add_color", "arguments": {}}),
            json!({"name": "add_color", "arguments": {"color": ""}}),
            json!({"name": "remove_color", "arguments": {"color": 42}}),
            json!({"name": "remove_color", "arguments": "red"}),
        ] {
            let err = handle_tools_call(&store, Some(&params)).expect_err("missing color");
            assert!(matches!(err, AppError::MissingArgument { argument: "color", .. }));
        }
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn get_and_clear_ignore_arguments() {
        let store = ColorStore::new();
        store.add("red");

        let params = json!({"name": "get_colors", "arguments": "ignored"});
        let result = handle_tools_call(&store, Some(&params)).expect("get succeeds");
        assert!(text_of(&result).contains("1. red"));

        let params = json!({"name": "clear_colors", "arguments": {"color": "red"}});
        let result = handle_tools_call(&store, Some(&params)).expect("clear succeeds");
        assert_eq!(text_of(&result), "Successfully cleared 1 favorite colors!");
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn params_must_be_an_object_with_a_name() {
        let store = ColorStore::new();

        let err = handle_tools_call(&store, None).expect_err("no params");
        assert_eq!(err, AppError::invalid_params("Invalid params"));

        let err = handle_tools_call(&store, Some(&json!(["add_color"]))).expect_err("array");
        assert_eq!(err, AppError::invalid_params("Invalid params"));

        let err = handle_tools_call(&store, Some(&json!({"name": 7}))).expect_err("bad name");
        assert_eq!(err, AppError::invalid_params("Tool name required"));
    }

    #[test]
    fn unknown_tool_is_not_found() {
        let store = ColorStore::new();
        let params = json!({"name": "unknown_tool"});

        let err = handle_tools_call(&store, Some(&params)).expect_err("unknown tool");
        assert_eq!(err, AppError::tool_not_found("unknown_tool"));
    }
}
