//! # tempora-graph
//!
//! Fact relation graph: undirected adjacency between facts that share a
//! source chunk, a mutable per-fact score seeded from ranking, and an
//! iterative score-diffusion engine over that adjacency.
//!
//! A graph is built fresh per (question, variant) pair, populated once,
//! edges computed once, propagated a fixed number of rounds, queried for
//! top-k, then discarded. Nodes never escape or outlive the graph.

pub mod graph;
pub mod node;
pub mod propagation;

pub use graph::FactGraph;
pub use node::FactNode;
pub use propagation::{propagate, propagate_round, propagate_until};
