use tempora_core::constants::DEFAULT_LAMBDA;
use tempora_core::{TemporalFact, WeightedFact};

use crate::formula;

/// Decay engine: attaches a recency weight to every temporal fact.
pub struct DecayEngine {
    /// Exponential decay rate.
    lambda: f64,
}

impl DecayEngine {
    /// Create a new DecayEngine with the default decay rate.
    pub fn new() -> Self {
        Self {
            lambda: DEFAULT_LAMBDA,
        }
    }

    /// Create with a custom decay rate.
    pub fn with_lambda(lambda: f64) -> Self {
        Self { lambda }
    }

    /// Get the decay rate.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Weight a batch of facts against reference time `t_now`.
    ///
    /// Order-preserving and one-to-one: the output has one `WeightedFact`
    /// per input fact, in input order.
    pub fn apply(&self, facts: &[TemporalFact], t_now: i64) -> Vec<WeightedFact> {
        facts
            .iter()
            .map(|f| WeightedFact {
                fact: f.clone(),
                weight: formula::decay_weight(f.timestamp, t_now, self.lambda),
            })
            .collect()
    }
}

impl Default for DecayEngine {
    fn default() -> Self {
        Self::new()
    }
}
