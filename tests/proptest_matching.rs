//! Property-based tests for the confidence transform and the matchers.
//!
//! Ensures every matcher covers the full cross product with bounded
//! confidences, that equivalence scores do not depend on which ontology is
//! the source, and that the weighting curve keeps its ordering guarantees.

use onto_matchers::matching::{
    cosine_similarity, transform_profile_weight, weighted_sigmoid, ConfidenceWeighting,
    DefinitionEquivalenceMatcher, DefinitionSubsumptionMatcher, DomainLexicon,
    EmbeddingEquivalenceMatcher, MatchParams, OntologyMatcher, VectorTable,
};
use onto_matchers::model::{Concept, Ontology};
use proptest::prelude::*;

const WORDS: &[&str] = &[
    "vehicle", "car", "bus", "truck", "wheel", "engine", "boat", "train", "bicycle", "cart",
];
const DIMENSION: usize = 3;

fn table() -> VectorTable {
    WORDS
        .iter()
        .enumerate()
        .fold(VectorTable::new(DIMENSION), |table, (i, word)| {
            let x = i as f64;
            table.with_vector(word, vec![x.sin(), x.cos(), (x * 0.5).sin()])
        })
}

fn lexicon() -> DomainLexicon {
    DomainLexicon::new()
        .with_domains("vehicle", &["transport"])
        .with_domains("car", &["transport"])
        .with_domains("bus", &["transport"])
        .with_meronym("wheel", "car")
}

fn concept_strategy() -> impl Strategy<Value = (String, Option<String>)> {
    (
        prop::sample::select(WORDS),
        prop::option::of(prop::collection::vec(prop::sample::select(WORDS), 0..5)),
    )
        .prop_map(|(label, words)| {
            let definition =
                words.map(|w| format!("Something, including {}.", w.join(" and ")));
            (label.to_string(), definition)
        })
}

fn ontology_strategy(name: &'static str) -> impl Strategy<Value = Ontology> {
    prop::collection::vec(concept_strategy(), 0..6).prop_map(move |concepts| {
        concepts.into_iter().enumerate().fold(
            Ontology::new(name),
            |ontology, (i, (label, definition))| {
                let mut concept = Concept::new(format!("{name}{i}")).with_label(label);
                if let Some(definition) = definition {
                    concept = concept.with_definition(definition);
                }
                ontology.with_concept(concept)
            },
        )
    })
}

fn params_strategy() -> impl Strategy<Value = MatchParams> {
    (0.0f64..=1.0, 0u32..20, 0.0f64..=1.0, 0.0f64..=1.0).prop_map(|(profile, slope, a, b)| {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        MatchParams::balanced()
            .with_profile_score(profile)
            .with_weighting(ConfidenceWeighting::new(slope, lo, hi))
            .with_dimension(DIMENSION)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn sigmoid_is_bounded(slope in 0u32..50, raw in -2.0f64..2.0, weight in 0.0f64..=1.0) {
        let confidence = weighted_sigmoid(slope, raw, weight);
        prop_assert!((0.0..=1.0).contains(&confidence), "confidence {} out of range", confidence);
        if raw <= 0.0 {
            prop_assert_eq!(confidence, 0.0);
        }
    }

    #[test]
    fn sigmoid_is_monotone_in_raw(slope in 0u32..30, a in 0.0f64..=1.0, b in 0.0f64..=1.0, weight in 0.01f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(weighted_sigmoid(slope, lo, weight) <= weighted_sigmoid(slope, hi, weight) + 1e-12);
    }

    #[test]
    fn profile_weight_stays_in_range(profile in -1.0f64..2.0, a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let weight = transform_profile_weight(profile, lo, hi);
        prop_assert!(weight >= lo - 1e-12 && weight <= hi + 1e-12);
    }

    #[test]
    fn sigmoid_is_monotone_in_weight(slope in 0u32..30, raw in 0.0f64..=1.0, a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(weighted_sigmoid(slope, raw, lo) <= weighted_sigmoid(slope, raw, hi) + 1e-12);
    }

    #[test]
    fn confidence_is_monotone_in_profile_score(
        slope in 0u32..30,
        raw in 0.0f64..=1.0,
        a in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
        range in (0.0f64..=1.0, 0.0f64..=1.0),
    ) {
        let (low_score, high_score) = if a <= b { (a, b) } else { (b, a) };
        let (range_min, range_max) = if range.0 <= range.1 { range } else { (range.1, range.0) };
        let weighting = ConfidenceWeighting::new(slope, range_min, range_max);
        prop_assert!(weighting.score(raw, low_score) <= weighting.score(raw, high_score) + 1e-12);
    }

    #[test]
    fn cosine_similarity_is_symmetric(
        pair in (1usize..8).prop_flat_map(|n| (
            prop::collection::vec(-10.0f64..10.0, n),
            prop::collection::vec(-10.0f64..10.0, n),
        )),
    ) {
        let (a, b) = pair;
        let forward = cosine_similarity(&a, &b);
        prop_assert_eq!(forward, cosine_similarity(&b, &a));
        prop_assert!((-1.0..=1.0).contains(&forward));
    }

    #[test]
    fn equivalence_scores_ignore_direction(
        source in ontology_strategy("s"),
        target in ontology_strategy("t"),
        params in params_strategy(),
    ) {
        let table = table();
        let embedding = EmbeddingEquivalenceMatcher::new(&table);
        let definition = DefinitionEquivalenceMatcher::new(&table);
        let matchers: [&dyn OntologyMatcher; 2] = [&embedding, &definition];
        for matcher in matchers {
            let forward = matcher.match_ontologies(&source, &target, &params);
            let backward = matcher.match_ontologies(&target, &source, &params);
            prop_assert_eq!(forward.len(), backward.len());
            for cell in forward.iter() {
                let mirrored = backward.cell(&cell.target, &cell.source);
                prop_assert_eq!(mirrored.map(|c| c.confidence), Some(cell.confidence));
            }
        }
    }

    #[test]
    fn embedding_matcher_is_total(
        source in ontology_strategy("s"),
        target in ontology_strategy("t"),
        params in params_strategy(),
    ) {
        let table = table();
        let result = EmbeddingEquivalenceMatcher::new(&table).match_ontologies(&source, &target, &params);
        prop_assert_eq!(result.len(), source.concept_count() * target.concept_count());
        for cell in result.iter() {
            prop_assert!((0.0..=1.0).contains(&cell.confidence));
        }
    }

    #[test]
    fn subsumption_matcher_is_total(
        source in ontology_strategy("s"),
        target in ontology_strategy("t"),
        params in params_strategy(),
    ) {
        let lex = lexicon();
        let result = DefinitionSubsumptionMatcher::new(&lex).match_ontologies(&source, &target, &params);
        prop_assert_eq!(result.len(), source.concept_count() * target.concept_count());
        for (index, cell) in result.iter().enumerate() {
            prop_assert_eq!(&cell.id, &format!("definition-subsumption-{index}"));
            prop_assert!((0.0..=1.0).contains(&cell.confidence));
        }
    }

    #[test]
    fn parallel_and_sequential_agree(
        source in ontology_strategy("s"),
        target in ontology_strategy("t"),
        params in params_strategy(),
    ) {
        let lex = lexicon();
        let matcher = DefinitionSubsumptionMatcher::new(&lex);
        let parallel = matcher.match_ontologies(&source, &target, &params.with_parallel(true));
        let sequential = matcher.match_ontologies(&source, &target, &params.with_parallel(false));
        prop_assert_eq!(parallel.fingerprint(), sequential.fingerprint());
        prop_assert_eq!(parallel.cells, sequential.cells);
    }
}
