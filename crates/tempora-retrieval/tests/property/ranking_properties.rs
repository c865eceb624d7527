use proptest::prelude::*;
use tempora_core::AtomicFact;
use tempora_retrieval::{keyword_overlap, rank_plain, token_set, tokenize};

fn arb_text() -> impl Strategy<Value = String> {
    // Words drawn from a small vocabulary so overlaps actually occur.
    prop::collection::vec(
        prop_oneof![
            Just("eiffel"), Just("tower"), Just("paris"), Just("capital"),
            Just("france"), Just("built"), Just("renamed"), Just("the"),
            Just("was"), Just("in"),
        ],
        0..12,
    )
    .prop_map(|words| words.join(" "))
}

fn arb_facts() -> impl Strategy<Value = Vec<AtomicFact>> {
    prop::collection::vec(arb_text(), 0..20).prop_map(|texts| {
        texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| AtomicFact {
                fact_id: i,
                chunk_id: i / 3,
                text,
            })
            .collect()
    })
}

// ── Tokenization idempotence ────────────────────────────────────────────

proptest! {
    #[test]
    fn tokenization_is_idempotent(text in arb_text()) {
        let once = tokenize(&text);
        let rejoined = once.join(" ");
        prop_assert_eq!(token_set(&rejoined), once.into_iter().collect());
    }
}

// ── Overlap symmetry ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn overlap_is_symmetric(a in arb_text(), b in arb_text()) {
        prop_assert_eq!(keyword_overlap(&a, &b), keyword_overlap(&b, &a));
    }
}

// ── Ranking order, exclusion law, truncation ────────────────────────────

proptest! {
    #[test]
    fn ranking_invariants(
        question in arb_text(),
        facts in arb_facts(),
        top_k in 0usize..10,
    ) {
        let ranked = rank_plain(&question, &facts, top_k);

        prop_assert!(ranked.len() <= top_k);

        for w in ranked.windows(2) {
            // Non-increasing score; ties broken by ascending fact_id.
            prop_assert!(w[0].score >= w[1].score);
            if w[0].score == w[1].score {
                prop_assert!(w[0].fact_id < w[1].fact_id);
            }
        }

        // Exclusion law: nothing with score <= 0 ever appears.
        prop_assert!(ranked.iter().all(|s| s.score > 0.0));
    }
}
