//! Dataset records: one question/answer pair over a multi-paragraph
//! document context.

use serde::{Deserialize, Serialize};

use tempora_core::TemporaResult;

/// One titled context entry: `(title, paragraphs)`.
pub type ContextEntry = (String, Vec<String>);

/// A QA sample: question, gold answer, and the source document as titled
/// paragraph groups (HotpotQA shape).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub context: Vec<ContextEntry>,
}

impl Sample {
    /// Flatten all context paragraphs into one newline-joined document.
    /// Titles are dropped; paragraph order is preserved.
    pub fn flatten_context(&self) -> String {
        self.context
            .iter()
            .flat_map(|(_, paras)| paras.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Parse a JSON array of samples.
pub fn load_samples_json(json: &str) -> TemporaResult<Vec<Sample>> {
    Ok(serde_json::from_str(json)?)
}
