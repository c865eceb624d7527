//! Score diffusion over the fact relation graph.
//!
//! One round blends each node's score with the mean of its neighbors':
//!
//! ```text
//! score' = alpha * score + (1 - alpha) * mean(neighbor scores)
//! ```
//!
//! The update is synchronous: neighbor averages are computed from a
//! snapshot of the scores as of the start of the round, and written back
//! only after the full round is computed. Mutating a single buffer mid-pass
//! would make the result depend on node iteration order.
//!
//! No normalization is applied between rounds. Repeated application is a
//! possibly non-contracting linear map; with `alpha` near 0 on a cyclic
//! graph, scores can drift rather than converge as the round count grows.

use tracing::debug;

use crate::graph::FactGraph;

/// One synchronous diffusion round.
///
/// Nodes with zero neighbors are left unchanged. `alpha` is clamped to
/// [0.0, 1.0].
pub fn propagate_round(graph: &mut FactGraph, alpha: f64) {
    let alpha = alpha.clamp(0.0, 1.0);

    // Snapshot of all scores at the start of the round. Node indices in a
    // petgraph `Graph` without removals are contiguous from 0.
    let old: Vec<f64> = graph.graph.node_weights().map(|n| n.score).collect();

    let mut updates: Vec<(petgraph::graph::NodeIndex, f64)> = Vec::new();
    for idx in graph.graph.node_indices() {
        let mut sum = 0.0;
        let mut count = 0usize;
        for neighbor in graph.graph.neighbors(idx) {
            sum += old[neighbor.index()];
            count += 1;
        }
        if count == 0 {
            continue;
        }
        let neighbor_avg = sum / count as f64;
        updates.push((idx, alpha * old[idx.index()] + (1.0 - alpha) * neighbor_avg));
    }

    for (idx, score) in updates {
        graph.graph[idx].score = score;
    }
}

/// Run a fixed number of diffusion rounds (the configured diffusion depth).
pub fn propagate(graph: &mut FactGraph, alpha: f64, rounds: usize) {
    for _ in 0..rounds {
        propagate_round(graph, alpha);
    }
    debug!(rounds, alpha, nodes = graph.node_count(), "propagation complete");
}

/// Run diffusion rounds until the maximum per-node score delta falls below
/// `epsilon`, or `max_rounds` is reached. Returns the number of rounds run.
pub fn propagate_until(graph: &mut FactGraph, alpha: f64, epsilon: f64, max_rounds: usize) -> usize {
    for round in 0..max_rounds {
        let before: Vec<f64> = graph.graph.node_weights().map(|n| n.score).collect();
        propagate_round(graph, alpha);

        let max_delta = graph
            .graph
            .node_weights()
            .zip(&before)
            .map(|(n, b)| (n.score - b).abs())
            .fold(0.0f64, f64::max);

        if max_delta < epsilon {
            debug!(rounds = round + 1, max_delta, "propagation converged");
            return round + 1;
        }
    }
    max_rounds
}
