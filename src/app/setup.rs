//! This module handles the initial setup of the application.
use super::args::AppArgs;
use super::config::{AppConfig, Settings};
use crate::logging::{configure_logging, LogTarget};
use crate::provider::{JsonFileSource, PlaylistSource};
use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

/// Everything the selected run mode needs.
pub struct PreparedApp {
    pub settings: Settings,
    /// `None` when no playlists file was configured.
    pub source: Option<Arc<dyn PlaylistSource>>,
}

/// Loads the config file, merges it with the flags, installs logging and
/// builds the playlist source.
pub fn prepare(args: AppArgs) -> Result<PreparedApp> {
    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    let settings = Settings::resolve(args, config);

    configure_logging(&settings.log_target, settings.log_level.as_deref())?;
    debug!("Resolved settings: {:?}", settings);

    if let LogTarget::File(path) = &settings.log_target {
        print_start_banner(&settings, path);
    }

    let source = settings
        .playlists
        .as_ref()
        .map(|path| Arc::new(JsonFileSource::new(path)) as Arc<dyn PlaylistSource>);

    Ok(PreparedApp { settings, source })
}

fn print_start_banner(settings: &Settings, log_path: &std::path::Path) {
    println!("Starting activity search");
    match &settings.playlists {
        Some(path) => println!("Playlists: {}", path.display()),
        None => println!("Playlists: not configured (use --playlists)"),
    }
    println!("Log file: {}", log_path.display());
}
