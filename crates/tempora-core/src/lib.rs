//! # tempora-core
//!
//! Foundation crate for the Tempora retrieval system.
//! Defines the fact record types, configuration, errors, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod facts;

// Re-export the most commonly used types at the crate root.
pub use config::TemporaConfig;
pub use errors::{TemporaError, TemporaResult};
pub use facts::{AtomicFact, Chunk, ScoredFact, TemporalFact, WeightedFact};
