pub mod args;
pub mod config;
pub mod query;
mod setup;

pub use args::AppArgs;

use crate::provider::request_body;
use crate::store::ActivityStore;
use crate::ui::{run_tui, RunOptions};
use anyhow::Result;

pub async fn launch() -> Result<()> {
    launch_with_args(AppArgs::from_cli()).await
}

pub async fn launch_with_args(args: AppArgs) -> Result<()> {
    let setup::PreparedApp { settings, source } = setup::prepare(args)?;

    if settings.print_query {
        println!("{}", serde_json::to_string_pretty(&request_body())?);
        return Ok(());
    }

    if let Some(query) = &settings.query {
        let mut stdout = std::io::stdout();
        return query::print_suggestions(source.as_deref(), query, &mut stdout).await;
    }

    let store = ActivityStore::new();
    run_tui(
        source,
        store.clone(),
        RunOptions {
            placeholder: settings.placeholder,
        },
    )
    .await?;

    if let Some(current) = store.current() {
        println!("Current activity: {}", current.activity);
    }
    Ok(())
}
