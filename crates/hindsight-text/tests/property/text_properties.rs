//! Property tests for hindsight-text: similarity bounds, symmetry, identity,
//! vectorizer purity and normalisation.

use std::collections::BTreeSet;

use proptest::prelude::*;

use hindsight_core::config::VectorizerConfig;
use hindsight_text::similarity::{cosine, jaccard, substring_overlap};
use hindsight_text::{DedupBlend, FeatureExtractor, VectorSpace};

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-z]{2,9}",
            Just("docker".to_string()),
            Just("screenshot".to_string()),
            Just("pm2".to_string()),
            Just("截图失败".to_string()),
            Just("1920x1080".to_string()),
        ],
        1..12,
    )
    .prop_map(|words| words.join(" "))
}

fn term_set(text: &str) -> BTreeSet<String> {
    FeatureExtractor::default().extract(text).term_set()
}

proptest! {
    #[test]
    fn prop_dedup_similarity_reflexive(text in text_strategy()) {
        let terms = term_set(&text);
        prop_assume!(!terms.is_empty());
        let score = DedupBlend::default().score(&terms, &terms);
        prop_assert!((score - 1.0).abs() < 1e-12);
    }
}

proptest! {
    #[test]
    fn prop_dedup_similarity_symmetric(a in text_strategy(), b in text_strategy()) {
        let (ta, tb) = (term_set(&a), term_set(&b));
        let blend = DedupBlend::default();
        prop_assert_eq!(blend.score(&ta, &tb), blend.score(&tb, &ta));
    }
}

proptest! {
    #[test]
    fn prop_similarity_with_empty_is_zero(text in text_strategy()) {
        let terms = term_set(&text);
        let empty = term_set("");
        let blend = DedupBlend::default();
        prop_assert_eq!(blend.score(&terms, &empty), 0.0);
        prop_assert_eq!(blend.score(&empty, &terms), 0.0);
    }
}

proptest! {
    #[test]
    fn prop_signals_bounded(a in text_strategy(), b in text_strategy()) {
        let (ta, tb) = (term_set(&a), term_set(&b));
        let j = jaccard(&ta, &tb);
        prop_assert!((0.0..=1.0).contains(&j));
        let s = substring_overlap(&ta, &tb, 0.7);
        prop_assert!((0.0..=1.0).contains(&s));

        let extractor = FeatureExtractor::default();
        let mut space = VectorSpace::new(&VectorizerConfig::default());
        let va = space.vectorize(&extractor.extract(&a).terms);
        let vb = space.vectorize(&extractor.extract(&b).terms);
        let c = cosine(va.as_slice(), vb.as_slice());
        prop_assert!((0.0..=1.0).contains(&c));
    }
}

proptest! {
    #[test]
    fn prop_vectorize_pure(text in text_strategy()) {
        let terms = FeatureExtractor::default().extract(&text).terms;
        let mut space = VectorSpace::new(&VectorizerConfig::default());
        let first = space.vectorize(&terms);
        let second = space.vectorize(&terms);
        prop_assert_eq!(first, second);
    }
}

proptest! {
    #[test]
    fn prop_vector_norm_is_unit_or_zero(text in text_strategy()) {
        let terms = FeatureExtractor::default().extract(&text).terms;
        // Fresh space: no IDF rebuild yet, so every weight is tf × 1.0.
        let mut space = VectorSpace::new(&VectorizerConfig::default());
        let v = space.vectorize(&terms);
        if terms.is_empty() {
            prop_assert_eq!(v.norm(), 0.0);
        } else {
            prop_assert!((v.norm() - 1.0).abs() < 1e-9);
        }
    }
}

proptest! {
    #[test]
    fn prop_vocabulary_monotonic(texts in prop::collection::vec(text_strategy(), 1..6)) {
        let extractor = FeatureExtractor::default();
        let mut space = VectorSpace::new(&VectorizerConfig::default());
        let mut last = 0;
        for text in &texts {
            space.vectorize(&extractor.extract(text).terms);
            let len = space.vocabulary().len();
            prop_assert!(len >= last);
            last = len;
        }
    }
}
