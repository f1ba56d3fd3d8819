//! Tool Registry - central registration point for all tools.
//!
//! The registry is the single source of truth for tool metadata. The router
//! built in `router.rs` must stay in sync with it.

use rmcp::model::Tool;

use super::definitions::CurrentDatetimeTool;

/// Tool registry - manages all available tools.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![CurrentDatetimeTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![CurrentDatetimeTool::to_tool()]
    }
}
