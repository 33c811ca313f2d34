//! Where the `playlists` response comes from.
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{info, warn};

use super::{graphql::decode_response, ProviderError};
use crate::types::{Candidate, CandidateSnapshot};

#[async_trait]
pub trait PlaylistSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Candidate>, ProviderError>;

    /// Short label for logs and the status line.
    fn describe(&self) -> String;
}

/// Reads a saved `playlists` response document from disk.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PlaylistSource for JsonFileSource {
    async fn fetch(&self) -> Result<Vec<Candidate>, ProviderError> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ProviderError::Io {
                path: self.path.display().to_string(),
                source,
            })?;
        decode_response(&body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// A fixed, already-decoded list.
pub struct StaticSource {
    candidates: Vec<Candidate>,
}

impl StaticSource {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }
}

#[async_trait]
impl PlaylistSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<Candidate>, ProviderError> {
        Ok(self.candidates.clone())
    }

    fn describe(&self) -> String {
        "built-in list".to_string()
    }
}

/// Fetches from `source`, folding any failure into
/// [`CandidateSnapshot::Unavailable`].
pub async fn load_snapshot(source: &dyn PlaylistSource) -> CandidateSnapshot {
    match source.fetch().await {
        Ok(candidates) => {
            info!(
                "Loaded {} activities from {}",
                candidates.len(),
                source.describe()
            );
            CandidateSnapshot::ready(candidates)
        }
        Err(e) => {
            warn!("Activities unavailable from {}: {}", source.describe(), e);
            CandidateSnapshot::Unavailable(e.to_string())
        }
    }
}
