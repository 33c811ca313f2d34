//! Text folding shared by the filter and the highlighter.
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Trims surrounding whitespace, strips diacritical marks and lowercases.
///
/// Used for both the query and the candidate text, so `"  Éte "` and `"ete"`
/// compare equal.
pub fn normalize(input: &str) -> String {
    fold(input.trim())
}

/// Same as [`normalize`] without the trim.
pub fn fold(input: &str) -> String {
    input
        .nfd()
        .flat_map(char::to_lowercase)
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Folds a single character. Combining marks fold to nothing.
pub(crate) fn fold_char(c: char) -> impl Iterator<Item = char> {
    std::iter::once(c)
        .nfd()
        .flat_map(char::to_lowercase)
        .filter(|c| !is_combining_mark(*c))
}
