//! Sentence-level atomic fact extraction.

use tempora_core::{AtomicFact, Chunk};

/// Approximate atomic facts by sentence-splitting each chunk.
///
/// Chunk text is whitespace-normalized first so splitting behaves
/// predictably, then split after runs of `.`, `!` or `?` followed by
/// whitespace. Sentences shorter than `min_len` characters are discarded.
/// Fact ids are sequential across the whole document, not per chunk.
pub fn extract_facts(chunks: &[Chunk], min_len: usize) -> Vec<AtomicFact> {
    let mut facts: Vec<AtomicFact> = Vec::new();

    for chunk in chunks {
        let normalized = chunk.text.split_whitespace().collect::<Vec<_>>().join(" ");
        for sentence in split_sentences(&normalized) {
            let sentence = sentence.trim();
            if sentence.chars().count() < min_len {
                continue;
            }
            facts.push(AtomicFact {
                fact_id: facts.len(),
                chunk_id: chunk.chunk_id,
                text: sentence.to_string(),
            });
        }
    }

    facts
}

/// Split after sentence-ending punctuation followed by whitespace.
///
/// The punctuation stays with the preceding sentence; the separating
/// whitespace is consumed. Good enough for the encyclopedic prose this
/// pipeline runs on.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut after_terminator = false;

    for (i, c) in text.char_indices() {
        if after_terminator && c.is_whitespace() {
            sentences.push(&text[start..i]);
            start = i + c.len_utf8();
            after_terminator = false;
        } else {
            after_terminator = matches!(c, '.' | '!' | '?');
        }
    }
    if start < text.len() {
        sentences.push(&text[start..]);
    }

    sentences
}
