use std::collections::HashSet;
use std::sync::LazyLock;

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["a", "an", "the", "in", "on", "at", "for", "to", "of", "with", "by"]
        .into_iter()
        .collect()
});

const MIN_KEYWORD_LEN: usize = 3;

/// Split a free-text query into search keywords.
///
/// Words are runs of alphanumerics or `_`, lower-cased. Stop-words and words
/// shorter than three characters are dropped. Order and duplicates are kept.
pub fn keywords(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|word| word.chars().count() >= MIN_KEYWORD_LEN)
        .filter(|word| !STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}

/// Strip the list/quote debris left in dataset descriptions.
pub fn clean_description(description: &str) -> String {
    description
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | '"' | '\\' | '\''))
        .collect()
}

/// Strip ranking numbers and quotes from place names ("1. 'Baga Beach'").
pub fn clean_place_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '[' | ']' | '"' | '\'' | '.') && !c.is_ascii_digit())
        .collect::<String>()
        .trim()
        .to_string()
}
