//! Containment-based hit@k over ranked facts.

use tempora_core::ScoredFact;

/// Case-insensitive substring check for the gold answer.
pub fn contains_answer(text: &str, answer: &str) -> bool {
    text.to_lowercase().contains(&answer.trim().to_lowercase())
}

/// Does any of the top `k` ranked facts contain the answer?
pub fn hit_at_k(ranked: &[ScoredFact], answer: &str, k: usize) -> bool {
    ranked
        .iter()
        .take(k)
        .any(|r| contains_answer(&r.text, answer))
}
