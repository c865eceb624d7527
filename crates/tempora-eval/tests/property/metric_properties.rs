use proptest::prelude::*;
use tempora_eval::{exact_match, f1_score, f1_star, normalize};

fn arb_answer() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.!']{0,40}"
}

proptest! {
    // Normalization is idempotent on punctuation-free text. (Punctuation
    // removal can mint a fresh article — "t,he" becomes "the" — because
    // articles are stripped before punctuation, mirroring the usual QA
    // normalization order.)
    #[test]
    fn normalize_is_idempotent(text in "[a-zA-Z0-9 ]{0,40}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    // F1 is symmetric and bounded.
    #[test]
    fn f1_symmetric_and_bounded(a in arb_answer(), b in arb_answer()) {
        let ab = f1_score(&a, &b);
        let ba = f1_score(&b, &a);
        prop_assert!((ab - ba).abs() < 1e-12);
        prop_assert!((0.0..=1.0).contains(&ab));
    }

    // Exact match implies perfect F1 (when any tokens survive
    // normalization).
    #[test]
    fn exact_match_implies_full_f1(a in arb_answer()) {
        if exact_match(&a, &a) && !normalize(&a).is_empty() {
            prop_assert!((f1_score(&a, &a) - 1.0).abs() < 1e-12);
        }
    }

    // Gating can only lower the score, never raise it.
    #[test]
    fn f1_star_never_exceeds_f1(
        a in arb_answer(),
        b in arb_answer(),
        threshold in 0.0f64..=1.0,
    ) {
        prop_assert!(f1_star(&a, &b, threshold) <= f1_score(&a, &b) + 1e-12);
    }
}
