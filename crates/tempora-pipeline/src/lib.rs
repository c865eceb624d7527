//! # tempora-pipeline
//!
//! Orchestrates the full scoring pipeline for one (question, document)
//! sample: segmentation → synthetic timestamps → decay weighting → lexical
//! ranking (plain and decay-weighted) → per-variant fact graph with score
//! diffusion → evaluation. A batch runner processes independent samples in
//! parallel and reduces their outcomes into one report.

pub mod engine;
pub mod report;
pub mod sample;

pub use engine::{QueryPipeline, SampleOutcome, VariantOutcome};
pub use report::{BatchReport, VariantTotals};
pub use sample::{load_samples_json, Sample};
