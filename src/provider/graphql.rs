//! The `playlists` query document and its response decoding.
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::ProviderError;
use crate::types::Candidate;

/// Field selection the search widget needs from the data provider.
pub const PLAYLISTS_QUERY: &str = "query { playlists { id activity activitySource } }";

/// JSON body to POST to a GraphQL endpoint for [`PLAYLISTS_QUERY`].
pub fn request_body() -> Value {
    serde_json::json!({ "query": PLAYLISTS_QUERY })
}

#[derive(Deserialize, Debug)]
struct Response {
    data: Option<Data>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Deserialize, Debug)]
struct Data {
    playlists: Option<Vec<Value>>,
}

#[derive(Deserialize, Debug)]
struct GraphqlError {
    message: String,
}

/// A playlist row as it comes over the wire. Rows are decoded one at a time
/// and every field is optional, so one bad row does not reject the response.
#[derive(Deserialize, Debug, Default)]
struct PlaylistEntry {
    id: Option<Value>,
    activity: Option<String>,
    #[serde(rename = "activitySource", alias = "activity_src")]
    activity_source: Option<String>,
}

impl PlaylistEntry {
    fn into_candidate(self) -> Option<Candidate> {
        let id = match self.id? {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            _ => return None,
        };
        Some(Candidate {
            id,
            activity: self.activity?,
            activity_source: self.activity_source.unwrap_or_default(),
        })
    }
}

/// Decodes a `playlists` response.
///
/// Rows that are not objects, have mistyped fields, or lack an `id` or
/// `activity` are skipped and logged; GraphQL-level errors fail the whole
/// response.
pub fn decode_response(body: &str) -> Result<Vec<Candidate>, ProviderError> {
    let response: Response = serde_json::from_str(body)?;

    if !response.errors.is_empty() {
        let messages: Vec<String> = response.errors.into_iter().map(|e| e.message).collect();
        return Err(ProviderError::Graphql(messages.join("; ")));
    }

    let entries = response
        .data
        .and_then(|data| data.playlists)
        .ok_or(ProviderError::MissingData)?;

    let total = entries.len();
    let candidates: Vec<Candidate> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let entry = match serde_json::from_value::<PlaylistEntry>(row) {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping malformed playlist entry {}: {}", index, e);
                    return None;
                }
            };
            let candidate = entry.into_candidate();
            if candidate.is_none() {
                warn!("Skipping playlist entry {} without id or activity", index);
            }
            candidate
        })
        .collect();

    debug!("Decoded {} of {} playlist entries", candidates.len(), total);
    Ok(candidates)
}
