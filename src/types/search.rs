//! Notice search request and response bodies.

use serde::{Deserialize, Serialize};

/// Outbound body. The result limit is applied locally and never sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQueryBody<'a> {
    pub query: &'a str,
}

/// A single ranked notice as returned by the remote endpoint.
///
/// `score` is a similarity in `[0, 1]` and is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoticeResult {
    pub title: String,
    pub url: String,
    pub score: f64,
    pub metadata: NoticeMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeMetadata {
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub startup_history: String,
}

/// The only response shape accepted from the remote endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<NoticeResult>,
}

impl NoticeResult {
    pub fn new(title: impl Into<String>, url: impl Into<String>, score: f64) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            score,
            metadata: NoticeMetadata::default(),
        }
    }

    pub fn with_metadata(
        mut self,
        organization: impl Into<String>,
        region: impl Into<String>,
        startup_history: impl Into<String>,
    ) -> Self {
        self.metadata = NoticeMetadata {
            organization: organization.into(),
            region: region.into(),
            startup_history: startup_history.into(),
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_metadata_uses_camel_case_on_the_wire() {
        let parsed: NoticeResult = serde_json::from_value(json!({
            "title": "Grant A",
            "url": "http://x",
            "score": 0.873,
            "metadata": {"organization": "Org", "region": "Seoul", "startupHistory": "2yr"}
        }))
        .unwrap();
        assert_eq!(parsed.metadata.startup_history, "2yr");
        assert_eq!(parsed.score, 0.873);
    }

    #[test]
    fn test_results_must_be_an_array() {
        let parsed = serde_json::from_value::<SearchResponse>(json!({"results": "not-an-array"}));
        assert!(parsed.is_err());

        let parsed = serde_json::from_value::<SearchResponse>(json!({"items": []}));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_query_body_carries_only_query() {
        let body = serde_json::to_value(SearchQueryBody { query: "seed" }).unwrap();
        assert_eq!(body, json!({"query": "seed"}));
    }
}
