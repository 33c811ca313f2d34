//! Logging setup.
//!
//! The interactive UI owns the terminal, so its logs go to a file. One-shot
//! runs log to stderr.
use anyhow::{anyhow, Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info,activity_search=debug";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

/// Builds the filter: an explicit directive wins, then `RUST_LOG`, then
/// [`DEFAULT_FILTER`].
pub fn build_filter(directive: Option<&str>) -> Result<EnvFilter> {
    match directive {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("invalid log filter '{}'", directive)),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

pub fn configure_logging(target: &LogTarget, directive: Option<&str>) -> Result<()> {
    let filter = build_filter(directive)?;

    let installed = match target {
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    installed.map_err(|e| anyhow!("failed to install log subscriber: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_is_validated() {
        assert!(build_filter(Some("warn,activity_search=trace")).is_ok());
        assert!(build_filter(Some("activity_search=notalevel")).is_err());
        assert!(build_filter(None).is_ok());
    }
}
