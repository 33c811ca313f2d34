//! Prefix filtering of activities against the typed query.
use crate::types::Candidate;

use super::normalize::normalize;

/// The dropdown never shows more than this many suggestions.
pub const MAX_SUGGESTIONS: usize = 5;

/// Returns the first [`MAX_SUGGESTIONS`] candidates whose normalized
/// `activity` starts with the normalized query, in candidate-list order.
///
/// An empty (or all-whitespace) query yields no suggestions.
pub fn filter(query: &str, candidates: &[Candidate]) -> Vec<Candidate> {
    let needle = normalize(query);
    if needle.is_empty() {
        return Vec::new();
    }

    candidates
        .iter()
        .filter(|candidate| is_prefix_match(&needle, &candidate.activity))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}

/// `needle` must already be normalized.
pub fn is_prefix_match(needle: &str, activity: &str) -> bool {
    normalize(activity).starts_with(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(names: &[&str]) -> Vec<Candidate> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Candidate::new(i.to_string(), *name, "youtube"))
            .collect()
    }

    fn activities(found: &[Candidate]) -> Vec<&str> {
        found.iter().map(|c| c.activity.as_str()).collect()
    }

    #[test]
    fn empty_query_shows_nothing() {
        let list = candidates(&["Running", "Reading"]);
        assert!(filter("", &list).is_empty());
        assert!(filter("   ", &list).is_empty());
        assert!(filter("", &[]).is_empty());
    }

    #[test]
    fn single_letter_keeps_all_matches_in_order() {
        let list = candidates(&["Running", "Reading", "Rowing"]);
        assert_eq!(activities(&filter("r", &list)), ["Running", "Reading", "Rowing"]);
    }

    #[test]
    fn unmatched_query_is_empty() {
        let list = candidates(&["Running", "Reading", "Rowing"]);
        assert!(filter("zz", &list).is_empty());
    }

    #[test]
    fn query_is_trimmed_and_case_insensitive() {
        let list = candidates(&["Running", "Reading", "Rowing"]);
        assert_eq!(activities(&filter("  RuNning  ", &list)), ["Running"]);
    }

    #[test]
    fn diacritics_are_ignored_on_both_sides() {
        let list = candidates(&["Écriture", "Ecology", "Skiing"]);
        assert_eq!(activities(&filter("ec", &list)), ["Écriture", "Ecology"]);
        assert_eq!(activities(&filter("ÉCO", &list)), ["Ecology"]);
    }

    #[test]
    fn prefix_only_not_substring() {
        let list = candidates(&["Morning run", "Running"]);
        assert_eq!(activities(&filter("run", &list)), ["Running"]);
    }

    #[test]
    fn caps_at_five_in_original_order() {
        let list = candidates(&["a1", "a2", "b", "a3", "a4", "a5", "a6"]);
        let found = filter("a", &list);
        assert_eq!(found.len(), MAX_SUGGESTIONS);
        assert_eq!(activities(&found), ["a1", "a2", "a3", "a4", "a5"]);
    }

    #[test]
    fn every_result_starts_with_the_query() {
        let list = candidates(&[
            "Swimming", "Sleeping", "Sking", "swing dance", "Surf", "Sauna", "Spin", "Yoga",
        ]);
        for query in ["s", "S", "sw", " sL", "yo", "q", "sáuna"] {
            let found = filter(query, &list);
            assert!(found.len() <= MAX_SUGGESTIONS);
            for candidate in &found {
                assert!(normalize(&candidate.activity).starts_with(&normalize(query)));
            }
        }
    }
}
