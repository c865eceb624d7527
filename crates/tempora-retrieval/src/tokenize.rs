//! Word tokenizer with a fixed minimal stopword set.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use tempora_core::constants::MIN_TOKEN_LEN;

/// Maximal runs of letters and apostrophes.
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z']+").unwrap());

/// Tiny stopword set: articles, common prepositions/conjunctions/pronouns,
/// wh-words, forms of "to be". Kept minimal and transparent.
static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "and", "or", "of", "to", "in", "on", "for", "is", "was", "are", "were",
        "be", "been", "being", "that", "this", "it", "as", "by", "with", "from", "at", "which",
        "what", "who", "whom", "when", "where", "why", "how",
    ]
    .into_iter()
    .collect()
});

/// Tokenize free text: extract word runs, lowercase, drop stopwords and
/// tokens shorter than three characters. Preserves text order; duplicates
/// are kept (set semantics are applied by [`token_set`]).
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .filter(|t| t.len() >= MIN_TOKEN_LEN && !STOPWORDS.contains(t.as_str()))
        .collect()
}

/// Tokenize into a set: each surviving token counted once.
pub fn token_set(text: &str) -> HashSet<String> {
    tokenize(text).into_iter().collect()
}
