use proptest::prelude::*;
use tempora_segment::{assign_timestamps, chunk_text, extract_facts};

fn arb_document() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z ]{0,80}", 0..10).prop_map(|paras| paras.join("\n"))
}

// ── Chunking: budget respected, ids sequential, text preserved ──────────

proptest! {
    #[test]
    fn chunks_respect_budget_and_ordering(
        doc in arb_document(),
        max_chars in 10usize..200,
    ) {
        let chunks = chunk_text(&doc, max_chars);

        for (i, c) in chunks.iter().enumerate() {
            prop_assert_eq!(c.chunk_id, i);
            // Joined chunks count the joining newline, so the budget holds
            // for accumulated and hard-split chunks alike.
            prop_assert!(
                c.text.chars().count() <= max_chars,
                "chunk {} over budget: {}",
                i,
                c.text.chars().count()
            );
            prop_assert!(!c.text.is_empty());
        }
    }

    #[test]
    fn chunking_loses_no_non_whitespace_content(
        doc in arb_document(),
        max_chars in 10usize..200,
    ) {
        let chunks = chunk_text(&doc, max_chars);
        let original: String = doc.split_whitespace().collect();
        let rebuilt: String = chunks
            .iter()
            .flat_map(|c| c.text.split_whitespace())
            .collect();
        prop_assert_eq!(original, rebuilt);
    }
}

// ── Extraction: ids sequential, min length honored ──────────────────────

proptest! {
    #[test]
    fn extracted_facts_have_sequential_ids(
        doc in arb_document(),
        min_len in 1usize..20,
    ) {
        let chunks = chunk_text(&doc, 120);
        let facts = extract_facts(&chunks, min_len);
        for (i, f) in facts.iter().enumerate() {
            prop_assert_eq!(f.fact_id, i);
            prop_assert!(f.text.chars().count() >= min_len);
            prop_assert!(f.chunk_id < chunks.len());
        }
    }
}

// ── Timestamps: determinism and range ───────────────────────────────────

proptest! {
    #[test]
    fn timestamps_deterministic_and_in_range(
        doc in arb_document(),
        seed in any::<u64>(),
        t_min in -50i64..50,
        span in 0i64..100,
    ) {
        let t_max = t_min + span;
        let chunks = chunk_text(&doc, 120);
        let facts = extract_facts(&chunks, 3);

        let a = assign_timestamps(&facts, t_min, t_max, seed);
        let b = assign_timestamps(&facts, t_min, t_max, seed);
        prop_assert_eq!(&a, &b);

        for t in &a {
            prop_assert!((t_min..=t_max).contains(&t.timestamp));
        }
    }
}
