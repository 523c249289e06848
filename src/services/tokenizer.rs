use std::collections::HashSet;

/// Splits text into lowercase ASCII alphanumeric tokens.
///
/// Any run of characters outside `[a-z0-9]` (after lowercasing) separates
/// tokens; empty tokens are dropped. Duplicates are kept.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// Tokenizes several fields into one set
pub fn token_set<'a>(fields: impl IntoIterator<Item = &'a str>) -> HashSet<String> {
    fields.into_iter().flat_map(tokenize).collect()
}
