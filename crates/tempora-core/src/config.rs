//! Per-subsystem configuration, aggregated into [`TemporaConfig`].
//!
//! Every section is `#[serde(default)]` so partial TOML files work;
//! defaults come from [`crate::constants`].

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::TemporaResult;

/// Text segmentation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentConfig {
    /// Chunk size ceiling in characters.
    pub max_chars: usize,
    /// Minimum sentence length retained as an atomic fact.
    pub min_fact_len: usize,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            max_chars: constants::DEFAULT_MAX_CHARS,
            min_fact_len: constants::DEFAULT_MIN_FACT_LEN,
        }
    }
}

/// Synthetic timestamp assignment configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimestampConfig {
    /// Inclusive lower bound of the uniform timestamp draw.
    pub t_min: i64,
    /// Inclusive upper bound of the uniform timestamp draw.
    pub t_max: i64,
}

impl Default for TimestampConfig {
    fn default() -> Self {
        Self {
            t_min: constants::DEFAULT_T_MIN,
            t_max: constants::DEFAULT_T_MAX,
        }
    }
}

/// Decay subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Exponential decay rate. Values <= 0 degrade to weight 1.0.
    pub lambda: f64,
    /// Reference time the facts are aged against.
    pub t_now: i64,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            lambda: constants::DEFAULT_LAMBDA,
            t_now: constants::DEFAULT_T_MAX,
        }
    }
}

/// Ranking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Result count for ranking and graph top-k. 0 yields empty results.
    pub top_k: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_k: constants::DEFAULT_TOP_K,
        }
    }
}

/// Score propagation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PropagationConfig {
    /// Mixing factor: weight of a node's own score vs its neighbor average.
    /// Clamped to [0.0, 1.0] at the propagation boundary.
    pub alpha: f64,
    /// Diffusion depth: propagation rounds run per query.
    pub rounds: usize,
}

impl Default for PropagationConfig {
    fn default() -> Self {
        Self {
            alpha: constants::DEFAULT_ALPHA,
            rounds: constants::DEFAULT_ROUNDS,
        }
    }
}

/// Top-level configuration for the full pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemporaConfig {
    pub segment: SegmentConfig,
    pub timestamps: TimestampConfig,
    pub decay: DecayConfig,
    pub ranking: RankingConfig,
    pub propagation: PropagationConfig,
}

impl TemporaConfig {
    /// Parse a configuration from TOML text. Missing sections take defaults.
    pub fn from_toml_str(text: &str) -> TemporaResult<Self> {
        Ok(toml::from_str(text)?)
    }
}
