//! # tempora-segment
//!
//! Upstream text transforms feeding the scoring pipeline: paragraph-
//! preserving chunking, sentence-level atomic fact extraction, and seeded
//! synthetic timestamp assignment. All single-pass and stateless.

pub mod chunking;
pub mod extraction;
pub mod temporal;

pub use chunking::chunk_text;
pub use extraction::extract_facts;
pub use temporal::{assign_timestamps, seed_from_id};
