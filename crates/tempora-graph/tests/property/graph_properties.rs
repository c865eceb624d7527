use std::collections::HashSet;

use proptest::prelude::*;
use tempora_graph::{propagate_round, FactGraph, FactNode};

fn build_graph(chunks: &[usize], scores: &[f64]) -> FactGraph {
    let mut g = FactGraph::new();
    for (i, (&chunk_id, &score)) in chunks.iter().zip(scores).enumerate() {
        g.add_node(FactNode {
            fact_id: i,
            chunk_id,
            text: format!("fact {i}"),
            timestamp: None,
            score,
        });
    }
    g.build_edges_same_chunk();
    g
}

fn arb_chunks() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..5, 0..25)
}

// ── Graph symmetry: adjacency ⟺ same chunk and distinct ─────────────────

proptest! {
    #[test]
    fn adjacency_matches_chunk_equality(chunks in arb_chunks()) {
        let scores = vec![0.0; chunks.len()];
        let g = build_graph(&chunks, &scores);

        let idx: Vec<_> = g.node_indices().collect();
        let adj: Vec<HashSet<usize>> = idx
            .iter()
            .map(|&i| g.neighbors(i).map(|n| n.index()).collect())
            .collect();

        for (i, &a) in idx.iter().enumerate() {
            for (j, &b) in idx.iter().enumerate() {
                let expected = i != j && g.node(a).chunk_id == g.node(b).chunk_id;
                prop_assert_eq!(adj[i].contains(&b.index()), expected);
                // Symmetry.
                prop_assert_eq!(adj[i].contains(&b.index()), adj[j].contains(&a.index()));
            }
        }
    }
}

// ── Propagation fixed point at alpha = 1 ────────────────────────────────

proptest! {
    #[test]
    fn alpha_one_is_a_fixed_point(
        chunks in arb_chunks(),
        seed in 0.0f64..10.0,
    ) {
        let scores: Vec<f64> = (0..chunks.len()).map(|i| seed + i as f64).collect();
        let mut g = build_graph(&chunks, &scores);

        propagate_round(&mut g, 1.0);

        let after: Vec<f64> = g.nodes().map(|n| n.score).collect();
        prop_assert_eq!(after, scores);
    }
}

// ── Propagation bounds: seeds in [0, 1] stay in [0, 1] ──────────────────

proptest! {
    #[test]
    fn unit_seeds_stay_in_unit_interval(
        chunks in arb_chunks(),
        alpha in 0.0f64..=1.0,
        rounds in 1usize..5,
    ) {
        let scores: Vec<f64> = (0..chunks.len())
            .map(|i| (i as f64 * 0.37) % 1.0)
            .collect();
        let mut g = build_graph(&chunks, &scores);

        for _ in 0..rounds {
            propagate_round(&mut g, alpha);
        }

        for n in g.nodes() {
            prop_assert!(
                (0.0..=1.0).contains(&n.score),
                "score out of bounds: {}",
                n.score
            );
        }
    }
}

// ── Synchronous update: result invariant under node insertion order ─────

proptest! {
    #[test]
    fn result_independent_of_insertion_order(
        chunks in prop::collection::vec(0usize..3, 2..12),
        alpha in 0.0f64..=1.0,
    ) {
        let scores: Vec<f64> = (0..chunks.len()).map(|i| i as f64).collect();

        let mut forward = build_graph(&chunks, &scores);
        propagate_round(&mut forward, alpha);

        // Insert the same facts in reverse; compare per fact_id.
        let mut g = FactGraph::new();
        for i in (0..chunks.len()).rev() {
            g.add_node(FactNode {
                fact_id: i,
                chunk_id: chunks[i],
                text: format!("fact {i}"),
                timestamp: None,
                score: scores[i],
            });
        }
        g.build_edges_same_chunk();
        propagate_round(&mut g, alpha);

        let mut by_id_fwd: Vec<(usize, f64)> =
            forward.nodes().map(|n| (n.fact_id, n.score)).collect();
        let mut by_id_rev: Vec<(usize, f64)> = g.nodes().map(|n| (n.fact_id, n.score)).collect();
        by_id_fwd.sort_by_key(|(id, _)| *id);
        by_id_rev.sort_by_key(|(id, _)| *id);

        for ((ia, sa), (ib, sb)) in by_id_fwd.iter().zip(&by_id_rev) {
            prop_assert_eq!(ia, ib);
            prop_assert!((sa - sb).abs() < 1e-12);
        }
    }
}
