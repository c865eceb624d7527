//! Heuristic two-tier correctness judgement.
//!
//! Strict tier: exact match or F1 >= 0.9. Lenient tier: F1 >= 0.3.
//! Strict pass ⇒ correct; lenient-only pass ⇒ partially correct.

use serde::{Deserialize, Serialize};

use crate::metrics::{exact_match, f1_score};

/// Strict-tier F1 threshold.
pub const STRICT_F1_THRESHOLD: f64 = 0.9;
/// Lenient-tier F1 threshold.
pub const LENIENT_F1_THRESHOLD: f64 = 0.3;

/// Outcome of the two-tier judgement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Judgement {
    Correct,
    PartiallyCorrect,
    Incorrect,
}

fn strict(pred: &str, gold: &str) -> bool {
    exact_match(pred, gold) || f1_score(pred, gold) >= STRICT_F1_THRESHOLD
}

fn lenient(pred: &str, gold: &str) -> bool {
    f1_score(pred, gold) >= LENIENT_F1_THRESHOLD
}

/// Judge a predicted answer against the gold answer.
pub fn judge(pred: &str, gold: &str) -> Judgement {
    if strict(pred, gold) {
        Judgement::Correct
    } else if lenient(pred, gold) {
        Judgement::PartiallyCorrect
    } else {
        Judgement::Incorrect
    }
}
