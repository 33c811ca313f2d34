//! Supplies the candidate list.
//!
//! The `playlists` query is answered elsewhere (a GraphQL client, a cached
//! response on disk); this module only knows the document shape and how to
//! turn a response into [`Candidate`]s.
pub mod graphql;
pub mod source;

pub use graphql::{decode_response, request_body, PLAYLISTS_QUERY};
pub use source::{load_snapshot, JsonFileSource, PlaylistSource, StaticSource};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to read playlists from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed playlists response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("graphql errors: {0}")]
    Graphql(String),
    #[error("response has no data.playlists field")]
    MissingData,
}
