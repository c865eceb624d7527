use tempora_core::{AtomicFact, WeightedFact};

/// Graph vertex: one fact plus its mutable diffusion score.
///
/// Adjacency lives in the surrounding graph structure, not on the node, so
/// the neighbor relation can never cross graphs.
#[derive(Debug, Clone, PartialEq)]
pub struct FactNode {
    pub fact_id: usize,
    pub chunk_id: usize,
    pub text: String,
    pub timestamp: Option<i64>,
    /// Seeded externally (0.0 when the fact was not ranked), then mutated
    /// in place by propagation.
    pub score: f64,
}

impl From<&AtomicFact> for FactNode {
    fn from(f: &AtomicFact) -> Self {
        Self {
            fact_id: f.fact_id,
            chunk_id: f.chunk_id,
            text: f.text.clone(),
            timestamp: None,
            score: 0.0,
        }
    }
}

impl From<&WeightedFact> for FactNode {
    fn from(f: &WeightedFact) -> Self {
        Self {
            fact_id: f.fact_id(),
            chunk_id: f.chunk_id(),
            text: f.text().to_string(),
            timestamp: Some(f.timestamp()),
            score: 0.0,
        }
    }
}
