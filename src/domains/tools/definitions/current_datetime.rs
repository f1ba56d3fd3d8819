//! Current date/time tool definition.
//!
//! A tool that returns the server's current wall-clock time as an ISO-8601
//! UTC timestamp with millisecond precision.

use chrono::{DateTime, SecondsFormat, Utc};
use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, instrument, warn};

use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the current date/time tool.
///
/// The tool takes no arguments; any extra fields sent by a client are ignored.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct CurrentDatetimeParams {}

// ============================================================================
// Tool Definition
// ============================================================================

/// Current date/time tool - returns the server's current date and time.
pub struct CurrentDatetimeTool;

impl CurrentDatetimeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_current_datetime";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Gets the current date and time on the server.";

    /// Execute the tool logic.
    ///
    /// A clock read failure is converted into a successful protocol response
    /// flagged with `isError: true` rather than a protocol-level error.
    #[instrument(skip_all)]
    pub fn execute(_params: &CurrentDatetimeParams) -> CallToolResult {
        info!("Current date/time tool called");

        match current_timestamp() {
            Ok(timestamp) => CallToolResult::success(vec![Content::text(format!(
                "The current date and time is: {}",
                timestamp
            ))]),
            Err(e) => {
                warn!("Failed to read the system clock: {}", e);
                CallToolResult::error(vec![Content::text(format!(
                    "Error getting date/time: {}",
                    e
                ))])
            }
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CurrentDatetimeParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the transport layer.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: CurrentDatetimeParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Read the wall clock and format it as ISO-8601 UTC with millisecond
/// precision and a trailing `Z` (e.g. `2024-01-01T00:00:00.000Z`).
fn current_timestamp() -> Result<String, ToolError> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| ToolError::execution_failed(format!("system clock read failed: {}", e)))?;

    let datetime = DateTime::<Utc>::from_timestamp(elapsed.as_secs() as i64, elapsed.subsec_nanos())
        .ok_or_else(|| ToolError::execution_failed("timestamp out of representable range"))?;

    Ok(datetime.to_rfc3339_opts(SecondsFormat::Millis, true))
}

// ============================================================================
// Tests
// ============================================================================
