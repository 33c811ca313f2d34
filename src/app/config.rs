//! Optional JSON config file; command-line flags override it.
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::args::AppArgs;
use crate::logging::LogTarget;
use crate::ui::search_mode::PLACEHOLDER;

pub const DEFAULT_LOG_FILE: &str = "activity-search.log";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub playlists: Option<PathBuf>,
    pub placeholder: Option<String>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let body = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&body).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Settings after merging flags over the config file over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub playlists: Option<PathBuf>,
    pub placeholder: String,
    pub log_level: Option<String>,
    pub log_target: LogTarget,
    pub query: Option<String>,
    pub print_query: bool,
}

impl Settings {
    pub fn resolve(args: AppArgs, config: AppConfig) -> Self {
        let one_shot = args.query.is_some() || args.print_query;
        let log_target = if one_shot {
            LogTarget::Stderr
        } else {
            LogTarget::File(
                args.log_file
                    .or(config.log_file)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
            )
        };

        Self {
            playlists: args.playlists.or(config.playlists),
            placeholder: config
                .placeholder
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            log_level: args.log_level.or(config.log_level),
            log_target,
            query: args.query,
            print_query: args.print_query,
        }
    }
}
