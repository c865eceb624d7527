//! String-overlap answer metrics (SQuAD-style normalization and F1).

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

static ARTICLES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(a|an|the)\b").unwrap());
static NON_ALNUM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9\s]").unwrap());

/// Normalize an answer string: lowercase, drop articles, strip everything
/// but letters/digits/whitespace, collapse whitespace.
pub fn normalize(text: &str) -> String {
    let text = text.to_lowercase();
    let text = ARTICLES_RE.replace_all(&text, " ");
    let text = NON_ALNUM_RE.replace_all(&text, "");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Exact match on normalized forms.
pub fn exact_match(pred: &str, gold: &str) -> bool {
    normalize(pred) == normalize(gold)
}

fn token_counts(text: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for tok in normalize(text).split_whitespace() {
        *counts.entry(tok.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Multiset token overlap between prediction and gold.
fn num_same(pred: &HashMap<String, usize>, gold: &HashMap<String, usize>) -> usize {
    pred.iter()
        .map(|(tok, &n)| n.min(gold.get(tok).copied().unwrap_or(0)))
        .sum()
}

/// Token-level F1 over normalized multisets, as used for extractive QA.
pub fn f1_score(pred: &str, gold: &str) -> f64 {
    let p = token_counts(pred);
    let g = token_counts(gold);
    if p.is_empty() || g.is_empty() {
        return 0.0;
    }

    let same = num_same(&p, &g);
    if same == 0 {
        return 0.0;
    }

    let p_total: usize = p.values().sum();
    let g_total: usize = g.values().sum();
    let precision = same as f64 / p_total as f64;
    let recall = same as f64 / g_total as f64;
    2.0 * precision * recall / (precision + recall)
}

/// Recall-gated F1: 0.0 when recall of the gold tokens falls below
/// `recall_threshold`, the plain F1 otherwise.
pub fn f1_star(pred: &str, gold: &str, recall_threshold: f64) -> f64 {
    let p = token_counts(pred);
    let g = token_counts(gold);
    if p.is_empty() || g.is_empty() {
        return 0.0;
    }

    let same = num_same(&p, &g);
    if same == 0 {
        return 0.0;
    }

    let g_total: usize = g.values().sum();
    let recall = same as f64 / g_total as f64;
    if recall < recall_threshold {
        return 0.0;
    }

    let p_total: usize = p.values().sum();
    let precision = same as f64 / p_total as f64;
    2.0 * precision * recall / (precision + recall)
}
