//! Tool registry and the invocation boundary.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::{CallToolResult, Content};
use serde_json::Value;
use tracing::{info, warn};

use super::Tool;
use crate::error::{Result, SearchError};

/// Registry of available tools, keyed by name.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Definitions for discovery, sorted by name.
    pub fn definitions(&self) -> Vec<rmcp::model::Tool> {
        self.names()
            .into_iter()
            .filter_map(|name| self.tools.get(name))
            .map(|tool| tool.definition())
            .collect()
    }

    /// Run a tool by name.
    ///
    /// The tool runs on its own task so that a panic inside it surfaces as
    /// [`SearchError::Unexpected`] instead of tearing down the server.
    pub async fn call(&self, name: &str, input: Value) -> Result<String> {
        let tool = self
            .tools
            .get(name)
            .cloned()
            .ok_or_else(|| SearchError::unknown_tool(name))?;

        tokio::spawn(async move { tool.call(input).await })
            .await
            .map_err(|e| {
                if e.is_panic() {
                    SearchError::unexpected(panic_message(e.into_panic()))
                } else {
                    SearchError::unexpected(e.to_string())
                }
            })?
    }

    /// Run a tool by name and wrap the outcome in a result envelope.
    ///
    /// Never fails: every error becomes an `isError: true` envelope with a
    /// single `error: <message>` text block.
    pub async fn invoke(&self, name: &str, input: Value) -> CallToolResult {
        info!(tool = name, "Tool invoked");

        match self.call(name, input).await {
            Ok(report) => CallToolResult::success(vec![Content::text(report)]),
            Err(e) => {
                warn!(tool = name, error = %e, "Tool invocation failed");
                CallToolResult::error(vec![Content::text(format!("error: {e}"))])
            }
        }
    }
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "tool panicked".to_string()
    }
}
