//! Wire types exchanged with the remote search endpoint.

pub mod search;

pub use search::{NoticeMetadata, NoticeResult, SearchQueryBody, SearchResponse};
