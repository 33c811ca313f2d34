//! Splits a suggestion into matched and unmatched spans for display.
use std::ops::Range;

use crate::types::HighlightSpan;

use super::normalize::{fold_char, normalize};

/// Splits `text` around the first occurrence of `query`, comparing both
/// sides under the same folding as the filter.
///
/// The spans keep the original characters of `text`, so joining their
/// `text` fields gives back `text` exactly. When nothing matches the whole
/// string comes back as a single plain span.
pub fn highlight(text: &str, query: &str) -> Vec<HighlightSpan> {
    if text.is_empty() {
        return Vec::new();
    }

    let needle: Vec<char> = normalize(query).chars().collect();
    match find_match(text, &needle) {
        Some(range) => split(text, range),
        None => vec![HighlightSpan::plain(text)],
    }
}

/// Byte range in `text` covering the first folded occurrence of `needle`.
fn find_match(text: &str, needle: &[char]) -> Option<Range<usize>> {
    if needle.is_empty() {
        return None;
    }

    // Folded char paired with the byte range of the source char it came from.
    let mut folded: Vec<(char, usize, usize)> = Vec::with_capacity(text.len());
    for (start, c) in text.char_indices() {
        let end = start + c.len_utf8();
        folded.extend(fold_char(c).map(|f| (f, start, end)));
    }

    let pos = folded
        .windows(needle.len())
        .position(|window| window.iter().map(|(c, _, _)| *c).eq(needle.iter().copied()))?;

    let start = folded[pos].1;
    let mut end = folded[pos + needle.len() - 1].2;
    // Trailing combining marks belong to the last matched char.
    end += text[end..]
        .chars()
        .take_while(|c| fold_char(*c).next().is_none())
        .map(char::len_utf8)
        .sum::<usize>();

    Some(start..end)
}

fn split(text: &str, range: Range<usize>) -> Vec<HighlightSpan> {
    let mut spans = Vec::with_capacity(3);
    if range.start > 0 {
        spans.push(HighlightSpan::plain(&text[..range.start]));
    }
    spans.push(HighlightSpan::matched(&text[range.clone()]));
    if range.end < text.len() {
        spans.push(HighlightSpan::plain(&text[range.end..]));
    }
    spans
}
