//! `search_notices` - startup support notice search.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::SchemaTool;
use super::format::format_results;
use super::validate::{self, DEFAULT_LIMIT};
use crate::client::NoticeSearchClient;
use crate::error::Result;

/// Arguments accepted by `search_notices`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SearchRequest {
    /// What to look for, e.g. a field, region, or support program.
    #[schemars(length(min = 1))]
    pub query: String,

    /// Maximum number of notices to return (1-50).
    #[serde(default = "default_limit")]
    #[schemars(range(min = 1, max = 50))]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

pub struct SearchNoticesTool {
    client: NoticeSearchClient,
}

impl SearchNoticesTool {
    pub fn new(client: NoticeSearchClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SchemaTool for SearchNoticesTool {
    type Input = SearchRequest;

    const NAME: &'static str = "search_notices";
    const DESCRIPTION: &'static str = r#"Searches startup support notices (government grants, accelerator programs, funding calls) by semantic similarity.

Returns the best matching notices, most relevant first, with title, link, organizing body, region, eligible startup history, and a similarity percentage.

Usage notes:
  - Describe what the startup is looking for in natural language; Korean and English queries both work
  - Use `limit` to control how many notices are returned (default 5, max 50)"#;

    fn parse(input: &Value) -> Result<SearchRequest> {
        Ok(validate::validate(input)?)
    }

    async fn handle(&self, input: SearchRequest) -> Result<String> {
        let results = self.client.search(&input.query, input.limit as usize).await?;
        Ok(format_results(&results, &input.query))
    }
}
