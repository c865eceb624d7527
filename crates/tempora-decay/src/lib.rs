//! # tempora-decay
//!
//! Exponential recency-decay weighting: `w = e^(-lambda * age)`.
//! Pure, order-preserving, one weight per temporal fact.

pub mod engine;
pub mod formula;

pub use engine::DecayEngine;
pub use formula::decay_weight;
