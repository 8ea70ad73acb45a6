//! MCP server handler and stdio transport.

use blockscout_core::Error;
use rmcp::model::{ServerCapabilities, ServerInfo};
use rmcp::{ServerHandler, ServiceExt, tool_handler};

use crate::tools::OnChainServer;

/// Instructions advertised to MCP clients during initialization.
pub const INSTRUCTIONS: &str =
    "This server provides tools for querying blockchain on-chain data through Blockscout explorers";

#[tool_handler]
impl ServerHandler for OnChainServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.server_info.name = env!("CARGO_PKG_NAME").to_string();
        info.server_info.version = env!("CARGO_PKG_VERSION").to_string();
        info.instructions = Some(INSTRUCTIONS.to_string());
        info
    }
}

/// Serve `server` over stdin/stdout until the client disconnects.
pub async fn serve_stdio(server: OnChainServer) -> blockscout_core::Result<()> {
    tracing::info!("starting MCP server on stdio");
    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| Error::transport(format!("failed to start stdio service: {e}")))?;
    let reason = service
        .waiting()
        .await
        .map_err(|e| Error::transport(format!("stdio service task failed: {e}")))?;
    tracing::info!(?reason, "MCP server stopped");
    Ok(())
}
