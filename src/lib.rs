//! # notice-search-mcp
//!
//! MCP server exposing startup support notice search as a single tool,
//! `search_notices`, over stdio.
//!
//! Each invocation is a stateless pipeline: validate the arguments, issue one
//! bounded `POST` to the remote search endpoint, render the ranked results as
//! text, and wrap the outcome (or the error) in a tool result envelope.
//!
//! ```rust,no_run
//! use notice_search_mcp::{NoticeSearchServer, SearchConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let server = NoticeSearchServer::from_config(SearchConfig::from_env()?)?;
//!     server.serve_stdio().await
//! }
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

pub mod client;
pub mod config;
pub mod error;
pub mod observability;
pub mod server;
pub mod tools;
pub mod types;

pub use client::NoticeSearchClient;
pub use config::{ConfigError, SearchConfig};
pub use error::{Result, SearchError};
pub use server::NoticeSearchServer;
pub use tools::{
    FieldViolation, SchemaTool, SearchNoticesTool, SearchRequest, Tool, ToolRegistry,
    ValidationErrors, format_results, validate,
};
pub use types::{NoticeMetadata, NoticeResult, SearchResponse};
