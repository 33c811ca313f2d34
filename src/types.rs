use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A selectable activity, as supplied by the `playlists` query.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub id: String,
    pub activity: String,
    #[serde(rename = "activitySource")]
    pub activity_source: String,
}

impl Candidate {
    pub fn new(
        id: impl Into<String>,
        activity: impl Into<String>,
        activity_source: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            activity: activity.into(),
            activity_source: activity_source.into(),
        }
    }
}

/// One piece of a display string, flagged when it is part of the match.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct HighlightSpan {
    pub text: String,
    pub highlighted: bool,
}

impl HighlightSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: false,
        }
    }

    pub fn matched(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: true,
        }
    }
}

/// The candidate list as currently known to the UI.
///
/// Anything other than `Ready` reads as an empty list, so a slow or failed
/// provider never reaches the filter as an error.
#[derive(Clone, Debug, Default)]
pub enum CandidateSnapshot {
    #[default]
    Loading,
    Unavailable(String),
    Ready(Arc<[Candidate]>),
}

impl CandidateSnapshot {
    pub fn ready(candidates: Vec<Candidate>) -> Self {
        Self::Ready(candidates.into())
    }

    pub fn as_slice(&self) -> &[Candidate] {
        match self {
            Self::Ready(candidates) => &candidates[..],
            Self::Loading | Self::Unavailable(_) => &[],
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Loading => "loading activities…".to_string(),
            Self::Unavailable(reason) => format!("activities unavailable: {}", reason),
            Self::Ready(candidates) => format!("{} activities", candidates.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_and_loading_read_as_empty() {
        assert!(CandidateSnapshot::Loading.as_slice().is_empty());
        assert!(CandidateSnapshot::Unavailable("boom".into())
            .as_slice()
            .is_empty());

        let ready = CandidateSnapshot::ready(vec![Candidate::new("1", "Running", "yt")]);
        assert_eq!(ready.as_slice().len(), 1);
        assert_eq!(ready.describe(), "1 activities");
    }

    #[test]
    fn candidate_uses_graphql_field_names() {
        let json = serde_json::to_value(Candidate::new("7", "Rowing", "spotify")).unwrap();
        assert_eq!(json["activitySource"], "spotify");
        assert_eq!(json["activity"], "Rowing");
    }
}
