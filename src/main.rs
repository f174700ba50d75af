use notice_search_mcp::observability::init_tracing_subscriber;
use notice_search_mcp::{NoticeSearchServer, SearchConfig};
use tracing::error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing_subscriber()?;

    let result = run().await;
    if let Err(ref e) = result {
        error!(error = %e, "Fatal error, shutting down");
    }
    result
}

async fn run() -> anyhow::Result<()> {
    let config = SearchConfig::from_env()?;
    NoticeSearchServer::from_config(config)?.serve_stdio().await
}
