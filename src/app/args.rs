use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "activity-search")]
#[command(about = "Search and pick the current activity from your playlists")]
pub struct AppArgs {
    #[arg(
        long,
        env = "ACTIVITY_SEARCH_PLAYLISTS",
        help = "Saved GraphQL response for the playlists query"
    )]
    pub playlists: Option<PathBuf>,

    #[arg(long, help = "Config file path (JSON)")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Print suggestions for this text and exit")]
    pub query: Option<String>,

    #[arg(long, help = "Print the GraphQL request body for the playlists query and exit")]
    pub print_query: bool,

    #[arg(long, help = "Log file used while the terminal UI is running")]
    pub log_file: Option<PathBuf>,

    #[arg(long, help = "Log filter, e.g. 'info,activity_search=trace'")]
    pub log_level: Option<String>,
}

impl AppArgs {
    pub fn from_cli() -> Self {
        <Self as Parser>::parse()
    }
}
