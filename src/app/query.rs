//! Non-interactive mode: print the suggestions for one query.
use anyhow::Result;
use colored::Colorize;
use std::io::Write;

use crate::provider::{load_snapshot, PlaylistSource};
use crate::search::{filter, highlight};
use crate::types::{Candidate, CandidateSnapshot};

pub async fn print_suggestions(
    source: Option<&dyn PlaylistSource>,
    query: &str,
    out: &mut impl Write,
) -> Result<()> {
    let snapshot = match source {
        Some(source) => load_snapshot(source).await,
        None => CandidateSnapshot::Unavailable("no playlists file configured".to_string()),
    };
    if let CandidateSnapshot::Unavailable(reason) = &snapshot {
        eprintln!("{} {}", "warning:".yellow(), reason);
    }

    for candidate in filter(query, snapshot.as_slice()) {
        writeln!(out, "{}", format_suggestion(&candidate, query))?;
    }
    Ok(())
}

pub fn format_suggestion(candidate: &Candidate, query: &str) -> String {
    let mut line = String::new();
    for span in highlight(&candidate.activity, query) {
        if span.highlighted {
            line.push_str(&span.text.bold().to_string());
        } else {
            line.push_str(&span.text);
        }
    }
    if !candidate.activity_source.is_empty() {
        line.push_str(&format!("  {}", candidate.activity_source.dimmed()));
    }
    line
}
