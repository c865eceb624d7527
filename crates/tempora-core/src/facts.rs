//! Fact record types, staged by pipeline position.
//!
//! Each stage wraps the previous one (composition, not inheritance):
//! `AtomicFact` → `TemporalFact` → `WeightedFact`. The identity fields
//! (`fact_id`, `chunk_id`, `text`) never change once assigned.

use serde::{Deserialize, Serialize};

/// A paragraph-bounded text segment below a maximum character budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Sequential id, assigned from 0 in document order.
    pub chunk_id: usize,
    pub text: String,
}

/// A sentence-level text span treated as an indivisible unit of evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtomicFact {
    /// Sequential across the whole document, not per chunk.
    pub fact_id: usize,
    /// Source chunk.
    pub chunk_id: usize,
    pub text: String,
}

/// An atomic fact with a synthetic occurrence time attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalFact {
    pub fact: AtomicFact,
    pub timestamp: i64,
}

impl TemporalFact {
    pub fn fact_id(&self) -> usize {
        self.fact.fact_id
    }

    pub fn chunk_id(&self) -> usize {
        self.fact.chunk_id
    }

    pub fn text(&self) -> &str {
        &self.fact.text
    }
}

/// A temporal fact with its recency-decay weight attached.
///
/// `weight` is in (0.0, 1.0]; it is recomputed whenever the reference time
/// or decay rate changes and immutable otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedFact {
    pub fact: TemporalFact,
    pub weight: f64,
}

impl WeightedFact {
    pub fn fact_id(&self) -> usize {
        self.fact.fact_id()
    }

    pub fn chunk_id(&self) -> usize {
        self.fact.chunk_id()
    }

    pub fn text(&self) -> &str {
        self.fact.text()
    }

    pub fn timestamp(&self) -> i64 {
        self.fact.timestamp
    }
}

/// Ranker output record. Ephemeral — rebuilt per query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredFact {
    pub fact_id: usize,
    pub chunk_id: usize,
    pub text: String,
    pub score: f64,
}
