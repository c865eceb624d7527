//! # tempora-retrieval
//!
//! Lexical baseline retrieval: tokenize question and fact text, score by
//! keyword-set overlap, rank top-k. Two modes share the scoring contract:
//! plain overlap, and overlap multiplied by a recency-decay weight.
//!
//! Deliberately crude — no stemming, no term-frequency weighting. The goal
//! is a transparent, deterministic signal, not maximal recall.

pub mod ranker;
pub mod scorer;
pub mod tokenize;

pub use ranker::{rank_decayed, rank_plain};
pub use scorer::keyword_overlap;
pub use tokenize::{token_set, tokenize};
