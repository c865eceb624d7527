//! Keyword-set overlap scorer.

use crate::tokenize::token_set;

/// Number of distinct tokens shared by question and fact text.
///
/// Set intersection, not multiset: each token counts once regardless of
/// repetition. Symmetric in its arguments.
pub fn keyword_overlap(question: &str, fact_text: &str) -> usize {
    let q = token_set(question);
    let f = token_set(fact_text);
    q.intersection(&f).count()
}
