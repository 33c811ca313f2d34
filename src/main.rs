//! The main entry point for the activity-search application.
use anyhow::Result;

/// Starts either the interactive search box or, with `--query` or
/// `--print-query`, a one-shot run.
#[tokio::main]
async fn main() -> Result<()> {
    activity_search::app::launch().await
}
