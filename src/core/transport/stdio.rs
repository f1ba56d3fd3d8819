//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP. Protocol messages own stdout;
//! all logging goes to stderr.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport.
    ///
    /// Blocks until the client disconnects or an interrupt signal arrives.
    /// On interrupt the connection is dropped and the server exits cleanly.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        tokio::select! {
            result = service.waiting() => {
                result.map_err(|e| TransportError::ServiceError(e.to_string()))?;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupt received, closing transport");
            }
        }

        info!("STDIO transport finished");
        Ok(())
    }
}
