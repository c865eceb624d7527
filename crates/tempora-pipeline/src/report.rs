//! Batch evaluation: parallel per-sample runs, one reduction at the end.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use tempora_eval::Judgement;

use crate::engine::{QueryPipeline, SampleOutcome, VariantOutcome};
use crate::sample::Sample;

/// Aggregate counts for one pipeline variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantTotals {
    pub correct: usize,
    pub partially_correct: usize,
    pub incorrect: usize,
    pub hits: usize,
}

impl VariantTotals {
    fn absorb(&mut self, outcome: &VariantOutcome) {
        match outcome.judgement {
            Judgement::Correct => self.correct += 1,
            Judgement::PartiallyCorrect => self.partially_correct += 1,
            Judgement::Incorrect => self.incorrect += 1,
        }
        if outcome.hit {
            self.hits += 1;
        }
    }
}

/// Aggregate report over a batch of samples.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchReport {
    pub samples: usize,
    pub plain: VariantTotals,
    pub decayed: VariantTotals,
}

impl BatchReport {
    fn absorb(&mut self, outcome: &SampleOutcome) {
        self.samples += 1;
        self.plain.absorb(&outcome.plain);
        self.decayed.absorb(&outcome.decayed);
    }
}

impl QueryPipeline {
    /// Run every sample (in parallel — samples share no mutable state) and
    /// reduce the outcomes into one report in a single sequential pass.
    pub fn run_batch(&self, samples: &[Sample]) -> BatchReport {
        let outcomes: Vec<SampleOutcome> =
            samples.par_iter().map(|s| self.run_sample(s)).collect();

        let mut report = BatchReport::default();
        for outcome in &outcomes {
            report.absorb(outcome);
        }

        info!(
            samples = report.samples,
            plain_correct = report.plain.correct,
            decayed_correct = report.decayed.correct,
            "batch complete"
        );
        report
    }
}
