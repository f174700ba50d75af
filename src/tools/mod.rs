//! Tools exposed by the server.

pub mod format;
pub mod registry;
pub mod search_notices;
pub mod traits;
pub mod validate;

use std::sync::Arc;

pub use format::format_results;
pub use registry::ToolRegistry;
pub use search_notices::{SearchNoticesTool, SearchRequest};
pub use traits::{SchemaTool, Tool};
pub use validate::{FieldViolation, ValidationErrors, validate};

use crate::client::NoticeSearchClient;

impl ToolRegistry {
    /// Registry holding every tool this server provides.
    pub fn default_tools(client: NoticeSearchClient) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(SearchNoticesTool::new(client)));
        registry
    }
}
