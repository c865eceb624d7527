//! Exponential decay formula.
//!
//! ```text
//! weight = e^(-lambda * age),  age = max(0, t_now - timestamp)
//! ```
//!
//! Result is always in (0.0, 1.0]; age 0 gives exactly 1.0.

/// Compute the decay weight of a fact observed at `timestamp`, as of `t_now`.
///
/// A timestamp in the future clamps to age 0 (weight 1.0) rather than
/// yielding a weight above 1.0. `lambda <= 0` degrades to weight 1.0.
pub fn decay_weight(timestamp: i64, t_now: i64, lambda: f64) -> f64 {
    if lambda <= 0.0 {
        return 1.0;
    }
    let age = (t_now - timestamp).max(0) as f64;
    (-lambda * age).exp()
}
