//! Synthetic timestamp assignment.
//!
//! Timestamps are drawn from a seeded generator so runs are reproducible:
//! the same seed always yields the same timestamps. Seeds derived from
//! string identifiers go through a fixed-key hash (blake3), never the
//! process-randomized `std` hasher.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tempora_core::{AtomicFact, TemporalFact};

/// Derive a stable seed from a string identifier.
///
/// First eight bytes of `blake3(id)`, little endian. Stable across runs
/// and platforms.
pub fn seed_from_id(id: &str) -> u64 {
    let hash = blake3::hash(id.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}

/// Assign each fact an independent uniform timestamp from `[t_min, t_max]`
/// (inclusive). Order-preserving; same seed ⇒ identical output.
pub fn assign_timestamps(
    facts: &[AtomicFact],
    t_min: i64,
    t_max: i64,
    seed: u64,
) -> Vec<TemporalFact> {
    let mut rng = StdRng::seed_from_u64(seed);
    facts
        .iter()
        .map(|f| TemporalFact {
            fact: f.clone(),
            timestamp: rng.gen_range(t_min..=t_max),
        })
        .collect()
}
