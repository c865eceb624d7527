//! Top-k relevance ranking over atomic or decay-weighted facts.
//!
//! Both modes share the same contract: facts with score <= 0 are excluded
//! (a fact with no lexical overlap with the question is never surfaced),
//! the rest are sorted under the total order "score descending, fact_id
//! ascending" and truncated to `top_k`.

use std::cmp::Ordering;

use tracing::debug;

use tempora_core::{AtomicFact, ScoredFact, WeightedFact};

use crate::scorer::keyword_overlap;

/// Total order used by every ranking surface: score descending, then
/// fact_id ascending. Makes ties deterministic and testable.
pub fn rank_order(a: &ScoredFact, b: &ScoredFact) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.fact_id.cmp(&b.fact_id))
}

/// Baseline retrieval: score = keyword overlap with the question.
pub fn rank_plain(question: &str, facts: &[AtomicFact], top_k: usize) -> Vec<ScoredFact> {
    let scored = facts
        .iter()
        .filter_map(|f| {
            let overlap = keyword_overlap(question, &f.text);
            (overlap > 0).then(|| ScoredFact {
                fact_id: f.fact_id,
                chunk_id: f.chunk_id,
                text: f.text.clone(),
                score: overlap as f64,
            })
        })
        .collect();
    finish(scored, top_k, "plain")
}

/// Time-aware retrieval: score = keyword overlap × decay weight.
pub fn rank_decayed(question: &str, facts: &[WeightedFact], top_k: usize) -> Vec<ScoredFact> {
    let scored = facts
        .iter()
        .filter_map(|f| {
            let score = keyword_overlap(question, f.text()) as f64 * f.weight;
            (score > 0.0).then(|| ScoredFact {
                fact_id: f.fact_id(),
                chunk_id: f.chunk_id(),
                text: f.text().to_string(),
                score,
            })
        })
        .collect();
    finish(scored, top_k, "decayed")
}

fn finish(mut scored: Vec<ScoredFact>, top_k: usize, mode: &str) -> Vec<ScoredFact> {
    scored.sort_by(rank_order);
    scored.truncate(top_k);
    debug!(mode, results = scored.len(), top_k, "ranking complete");
    scored
}
