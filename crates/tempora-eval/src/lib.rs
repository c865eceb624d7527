//! # tempora-eval
//!
//! Downstream answer evaluation: normalized exact match, token-level F1,
//! a heuristic two-tier correctness judgement, and containment-based
//! hit@k over ranked facts.

pub mod hits;
pub mod metrics;
pub mod rater;

pub use hits::{contains_answer, hit_at_k};
pub use metrics::{exact_match, f1_score, f1_star, normalize};
pub use rater::{judge, Judgement};
