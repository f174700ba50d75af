//! MCP server handler.

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData, RoleServer, ServerHandler, ServiceExt};
use serde_json::Value;
use tracing::{error, info};

use crate::client::NoticeSearchClient;
use crate::config::SearchConfig;
use crate::error::Result;
use crate::tools::ToolRegistry;

const INSTRUCTIONS: &str = "Searches Korean startup support notices. \
Call `search_notices` with a natural-language `query` and an optional `limit` (1-50, default 5).";

/// Exposes the tool registry over MCP.
#[derive(Clone)]
pub struct NoticeSearchServer {
    registry: Arc<ToolRegistry>,
}

impl NoticeSearchServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Server with the default tools against the configured endpoint.
    pub fn from_config(config: SearchConfig) -> Result<Self> {
        let client = NoticeSearchClient::new(config)?;
        Ok(Self::new(ToolRegistry::default_tools(client)))
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Serve over stdin/stdout until the peer disconnects.
    pub async fn serve_stdio(self) -> anyhow::Result<()> {
        let running = self
            .serve(rmcp::transport::stdio())
            .await
            .inspect_err(|e| error!(error = %e, "Failed to start stdio transport"))?;

        info!(
            name = env!("CARGO_PKG_NAME"),
            version = env!("CARGO_PKG_VERSION"),
            "Notice search MCP server running on stdio"
        );

        let reason = running.waiting().await?;
        info!(?reason, "Notice search MCP server stopped");
        Ok(())
    }
}

impl ServerHandler for NoticeSearchServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(self.registry.definitions()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, ErrorData> {
        let arguments = Value::Object(request.arguments.unwrap_or_default());
        Ok(self.registry.invoke(&request.name, arguments).await)
    }
}
