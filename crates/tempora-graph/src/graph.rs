//! The fact relation graph.

use std::cmp::Ordering;
use std::collections::HashMap;

use petgraph::graph::{Graph, NodeIndex};
use petgraph::Undirected;
use tracing::debug;

use tempora_core::ScoredFact;

use crate::node::FactNode;

/// Undirected graph over the facts of one document.
///
/// Invariant: two nodes are adjacent iff they share a `chunk_id` and are
/// distinct. Symmetry holds by construction (the graph is undirected) and
/// the relation never crosses graphs (adjacency is stored here, not on the
/// nodes).
#[derive(Debug, Default)]
pub struct FactGraph {
    pub(crate) graph: Graph<FactNode, (), Undirected>,
}

impl FactGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node. No uniqueness check is performed; callers must not
    /// insert duplicate fact identities.
    pub fn add_node(&mut self, node: FactNode) -> NodeIndex {
        self.graph.add_node(node)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn nodes(&self) -> impl Iterator<Item = &FactNode> {
        self.graph.node_weights()
    }

    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> {
        self.graph.node_indices()
    }

    pub fn node(&self, idx: NodeIndex) -> &FactNode {
        &self.graph[idx]
    }

    /// Node indices adjacent to `idx`.
    pub fn neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors(idx)
    }

    /// Connect every pair of distinct nodes sharing a chunk.
    ///
    /// One pass builds a chunk-id → node-list index, then pairs are
    /// connected within each bucket — linear in edges produced rather than
    /// quadratic in node count. `update_edge` replaces an existing edge, so
    /// calling this twice yields the same adjacency as calling it once.
    pub fn build_edges_same_chunk(&mut self) {
        let mut buckets: HashMap<usize, Vec<NodeIndex>> = HashMap::new();
        for idx in self.graph.node_indices() {
            buckets.entry(self.graph[idx].chunk_id).or_default().push(idx);
        }

        for members in buckets.values() {
            for (i, &a) in members.iter().enumerate() {
                for &b in &members[i + 1..] {
                    self.graph.update_edge(a, b, ());
                }
            }
        }

        debug!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "built same-chunk edges"
        );
    }

    /// Seed node scores from a ranked result. Facts absent from `scored`
    /// keep a score of 0.0.
    pub fn seed_scores(&mut self, scored: &[ScoredFact]) {
        let by_id: HashMap<usize, f64> = scored.iter().map(|s| (s.fact_id, s.score)).collect();
        for node in self.graph.node_weights_mut() {
            node.score = by_id.get(&node.fact_id).copied().unwrap_or(0.0);
        }
    }

    /// One diffusion round. See [`crate::propagation::propagate_round`].
    pub fn propagate(&mut self, alpha: f64) {
        crate::propagation::propagate_round(self, alpha);
    }

    /// The `k` highest-scoring nodes, score descending with ties broken by
    /// ascending `fact_id`. `k = 0` (or an empty graph) returns an empty
    /// sequence.
    pub fn top_k(&self, k: usize) -> Vec<FactNode> {
        let mut nodes: Vec<FactNode> = self.graph.node_weights().cloned().collect();
        nodes.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.fact_id.cmp(&b.fact_id))
        });
        nodes.truncate(k);
        nodes
    }
}
