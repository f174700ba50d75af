//! Error types for the search pipeline.

use thiserror::Error;

use crate::tools::validate::ValidationErrors;

/// Every way a `search_notices` invocation can fail.
///
/// All variants are converted into an error envelope at the tool boundary;
/// none of them terminate the server.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid arguments: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("request timed out, server unresponsive")]
    Timeout,

    #[error("API response error: {status} {status_text}")]
    Status { status: u16, status_text: String },

    #[error("invalid response format")]
    MalformedResponse,

    #[error("unknown tool: {name}")]
    UnknownTool { name: String },

    #[error(transparent)]
    Http(reqwest::Error),

    #[error("{0}")]
    Unexpected(String),
}

impl SearchError {
    pub fn status(status: reqwest::StatusCode) -> Self {
        Self::Status {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }

    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool { name: name.into() }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(e)
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
