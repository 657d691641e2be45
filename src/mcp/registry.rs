use indexmap::IndexMap;
use rust_mcp_sdk::schema::Tool;

use crate::domain::tools::build_tools_list;

/// Tool descriptors keyed by name.
///
/// Built once when the server is constructed and read-only afterwards. Listing follows
/// registration order; re-registering a name replaces the descriptor in place.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: IndexMap<String, Tool>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color_tools() -> Self {
        let mut registry = Self::new();
        for tool in build_tools_list() {
            registry.register(tool);
        }
        registry
    }

    pub fn register(&mut self, tool: Tool) {
        self.tools.insert(tool.name.clone(), tool);
    }

    pub fn list(&self) -> Vec<Tool> {
        self.tools.values().cloned().collect()
    }

    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.tools.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }
}
