// Property-based tests for normalization and edit distance.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use proptest::prelude::*;

use jalign_core::distance::{levenshtein, similarity_ratio, EditDistance};
use jalign_core::matcher::{match_by_distance, match_by_ratio};
use jalign_core::normalize;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

fn config_256() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Journal-name-shaped strings: words, punctuation the normalizer handles,
/// the occasional multibyte char.
fn arb_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-zA-Z0-9éü&,()\\-\\. ]{0,30}").unwrap()
}

fn arb_short() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z ]{0,12}").unwrap()
}

// ---------------------------------------------------------------------------
// Normalizer
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config_256())]

    #[test]
    fn normalize_is_idempotent(raw in arb_name()) {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_output_is_trimmed_single_spaced(raw in arb_name()) {
        let out = normalize(&raw);
        prop_assert!(!out.starts_with(' '));
        prop_assert!(!out.ends_with(' '));
        prop_assert!(!out.contains("  "));
        prop_assert_eq!(out.to_lowercase(), out.clone());
    }

    #[test]
    fn normalize_unifies_and_spellings(a in "[a-z]{1,8}", b in "[a-z]{1,8}") {
        // "x and y" and "x & y" must canonicalize identically
        prop_assume!(a != "and" && b != "and");
        let spelled = normalize(&format!("{a} and {b}"));
        let symbol = normalize(&format!("{a} & {b}"));
        prop_assert_eq!(spelled, symbol);
    }
}

// ---------------------------------------------------------------------------
// Edit distance
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config_256())]

    #[test]
    fn distance_identity(a in arb_name()) {
        prop_assert_eq!(levenshtein(&a, &a), 0);
    }

    #[test]
    fn distance_symmetry(a in arb_name(), b in arb_name()) {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
    }

    #[test]
    fn distance_triangle_inequality(a in arb_short(), b in arb_short(), c in arb_short()) {
        let ab = levenshtein(&a, &b);
        let bc = levenshtein(&b, &c);
        let ac = levenshtein(&a, &c);
        prop_assert!(ac <= ab + bc, "d(a,c)={ac} > d(a,b)={ab} + d(b,c)={bc}");
    }

    #[test]
    fn distance_bounded_by_longer_length(a in arb_name(), b in arb_name()) {
        let d = levenshtein(&a, &b);
        let max_len = a.chars().count().max(b.chars().count());
        let min_len = a.chars().count().min(b.chars().count());
        prop_assert!(d <= max_len);
        prop_assert!(d >= max_len - min_len);
    }

    #[test]
    fn ratio_in_range(a in arb_name(), b in arb_name()) {
        let r = similarity_ratio(&a, &b);
        prop_assert!((0.0..=100.0).contains(&r));
    }

    #[test]
    fn ratio_hundred_iff_equal(a in arb_name(), b in arb_name()) {
        let r = similarity_ratio(&a, &b);
        prop_assert_eq!(r == 100.0, a == b);
    }

    #[test]
    fn reused_grid_equals_one_shot(pairs in proptest::collection::vec((arb_short(), arb_short()), 1..8)) {
        let mut engine = EditDistance::new();
        for (a, b) in &pairs {
            prop_assert_eq!(engine.distance(a, b), levenshtein(a, b));
        }
    }
}

// ---------------------------------------------------------------------------
// Matcher
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config_256())]

    #[test]
    fn matcher_never_panics_and_covers_every_source(
        sources in proptest::collection::vec(arb_short(), 0..6),
        candidates in proptest::collection::vec(arb_short(), 0..6),
    ) {
        let results = match_by_ratio(&sources, &candidates);
        prop_assert_eq!(results.len(), sources.len());
        for r in &results {
            if r.candidate_name != jalign_core::model::NO_MATCH_FOUND {
                prop_assert!(candidates.contains(&r.candidate_name));
            }
        }

        let results = match_by_distance(&sources, &candidates, 5);
        prop_assert_eq!(results.len(), sources.len());
        for r in &results {
            prop_assert_eq!(r.matched, r.score < 5.0 && r.candidate_name != jalign_core::model::NO_MATCH_FOUND);
        }
    }

    #[test]
    fn ratio_match_flag_means_exact_equality(
        sources in proptest::collection::vec(arb_short(), 1..5),
        candidates in proptest::collection::vec(arb_short(), 1..5),
    ) {
        for r in match_by_ratio(&sources, &candidates) {
            if r.matched {
                prop_assert_eq!(&r.source_name, &r.candidate_name);
            }
        }
    }
}
