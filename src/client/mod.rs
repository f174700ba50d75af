//! Remote notice search client.
//!
//! One `POST` per call against the configured endpoint, bounded by a hard
//! timeout. The caller's limit is applied to the parsed results locally; it
//! is never forwarded upstream.

use tracing::{debug, warn};

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::types::{NoticeResult, SearchQueryBody, SearchResponse};

#[derive(Clone, Debug)]
pub struct NoticeSearchClient {
    http: reqwest::Client,
    config: SearchConfig,
}

impl NoticeSearchClient {
    /// Build a client for the given configuration.
    pub fn new(config: SearchConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self::with_http_client(http, config))
    }

    /// Use an existing reqwest client, e.g. one shared with other callers.
    pub fn with_http_client(http: reqwest::Client, config: SearchConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search notices for `query`, returning at most `limit` results in the
    /// order the endpoint ranked them.
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<NoticeResult>> {
        debug!(endpoint = %self.config.endpoint, query, limit, "Dispatching notice search");

        let outcome = tokio::time::timeout(self.config.timeout, self.fetch(query)).await;
        let results = match outcome {
            Ok(Ok(results)) => results,
            Ok(Err(e)) => {
                warn!(error = %e, "Notice search failed");
                return Err(e);
            }
            Err(_) => {
                warn!(timeout = ?self.config.timeout, "Notice search timed out");
                return Err(SearchError::Timeout);
            }
        };

        let received = results.len();
        let results: Vec<NoticeResult> = results.into_iter().take(limit).collect();
        debug!(received, returned = results.len(), "Notice search completed");

        Ok(results)
    }

    async fn fetch(&self, query: &str) -> Result<Vec<NoticeResult>> {
        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&SearchQueryBody { query })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::status(status));
        }

        let body = response.bytes().await?;
        let parsed: SearchResponse = serde_json::from_slice(&body).map_err(|e| {
            debug!(error = %e, "Rejected search response body");
            SearchError::MalformedResponse
        })?;

        Ok(parsed.results)
    }
}
