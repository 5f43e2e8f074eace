//! Label embedding equivalence matching.
//!
//! Each concept's lower-cased label is looked up in a [`VectorTable`]; pairs
//! whose vectors both resolve to the table's dimensionality are scored by
//! cosine similarity. Every other pair gets a zero-confidence equivalence cell.

use super::vectors::{cosine_similarity, ResolutionMode, VectorSpaceBuilder, VectorTable};
use super::{enumerate_pairs, MatchParams, MatcherKind, OntologyMatcher};
use crate::model::{AlignmentAccumulator, AlignmentResult, Concept, ConceptView, Relation, RelationCell};

/// Equivalence matcher over label vectors.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddingEquivalenceMatcher<'a> {
    table: &'a VectorTable,
}

impl<'a> EmbeddingEquivalenceMatcher<'a> {
    /// Create a matcher over a loaded vector table
    #[must_use]
    pub const fn new(table: &'a VectorTable) -> Self {
        Self { table }
    }
}

impl OntologyMatcher for EmbeddingEquivalenceMatcher<'_> {
    fn kind(&self) -> MatcherKind {
        MatcherKind::Embedding
    }

    fn match_concepts(
        &self,
        source_ontology: &str,
        target_ontology: &str,
        source: &[&Concept],
        target: &[&Concept],
        params: &MatchParams,
    ) -> AlignmentResult {
        let builder = VectorSpaceBuilder::new(self.table, ResolutionMode::Label);
        match_equivalence(
            self.kind(),
            &builder,
            source_ontology,
            target_ontology,
            source,
            target,
            params,
        )
    }
}

/// Resolve vectors for a concept list, keeping only usable ones.
pub(crate) fn resolve_all<C: ConceptView + ?Sized>(
    builder: &VectorSpaceBuilder<'_>,
    concepts: &[&C],
    dimension: usize,
) -> Vec<Option<Vec<f64>>> {
    concepts
        .iter()
        .map(|concept| match builder.resolve(*concept) {
            Some(v) if v.len() == dimension => Some(v),
            Some(v) => {
                tracing::debug!(
                    "Vector for '{}' has {} components, expected {}",
                    concept.id(),
                    v.len(),
                    dimension
                );
                None
            }
            None => {
                tracing::debug!("No vector for '{}'", concept.id());
                None
            }
        })
        .collect()
}

/// Shared cross-product loop of the two equivalence matchers.
pub(crate) fn match_equivalence(
    kind: MatcherKind,
    builder: &VectorSpaceBuilder<'_>,
    source_ontology: &str,
    target_ontology: &str,
    source: &[&Concept],
    target: &[&Concept],
    params: &MatchParams,
) -> AlignmentResult {
    let source_vectors = resolve_all(builder, source, params.dimension);
    let target_vectors = resolve_all(builder, target, params.dimension);
    tracing::debug!(
        "{}: {}/{} source and {}/{} target concepts resolved ({:?} vectors)",
        kind.name(),
        source_vectors.iter().flatten().count(),
        source.len(),
        target_vectors.iter().flatten().count(),
        target.len(),
        builder.mode()
    );
    let weight = params.weight();
    let name = kind.name();

    let source_items: Vec<_> = source.iter().zip(&source_vectors).collect();
    let target_items: Vec<_> = target.iter().zip(&target_vectors).collect();

    let cells = enumerate_pairs(&source_items, &target_items, params.parallel, |index, s, t| {
        let (s, sv) = *s;
        let (t, tv) = *t;
        let confidence = match (sv, tv) {
            (Some(a), Some(b)) => {
                let raw = cosine_similarity(a, b);
                params.weighting.confidence(raw, weight)
            }
            _ => 0.0,
        };
        RelationCell::new(name, index, &s.id, &t.id, Relation::Equivalence, confidence)
    });

    let mut acc = AlignmentAccumulator::new(name, source_ontology, target_ontology);
    acc.extend(cells);
    acc.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Ontology;

    fn unit(dimension: usize, hot: usize) -> Vec<f64> {
        let mut v = vec![0.0; dimension];
        v[hot] = 1.0;
        v
    }

    fn blend(dimension: usize, cos: f64) -> Vec<f64> {
        let mut v = vec![0.0; dimension];
        v[0] = cos;
        v[1] = (1.0 - cos * cos).sqrt();
        v
    }

    fn table() -> VectorTable {
        VectorTable::new(300)
            .with_vector("truck", unit(300, 0))
            .with_vector("car", blend(300, 0.92))
            .with_vector("short", vec![1.0, 0.0])
    }

    fn ontologies() -> (Ontology, Ontology) {
        let source = Ontology::new("src")
            .with_concept(Concept::new("Truck"))
            .with_concept(Concept::new("Bicycle"));
        let target = Ontology::new("tgt")
            .with_concept(Concept::new("Car"))
            .with_concept(Concept::new("Short"));
        (source, target)
    }

    #[test]
    fn test_full_cross_product() {
        let table = table();
        let (source, target) = ontologies();
        let result = EmbeddingEquivalenceMatcher::new(&table).match_ontologies(
            &source,
            &target,
            &MatchParams::balanced(),
        );
        assert_eq!(result.len(), 4);
        assert!(result.iter().all(|c| c.relation == Relation::Equivalence));
        assert_eq!(result.source_ontology, "src");
        assert_eq!(result.cells[0].id, "embedding-equivalence-0");
    }

    #[test]
    fn test_similar_labels_score_high() {
        let table = table();
        let (source, target) = ontologies();
        // profile score 0.6 maps to weight 0.8 in [0.5, 1.0]
        let params = MatchParams::balanced().with_profile_score(0.6);
        let result =
            EmbeddingEquivalenceMatcher::new(&table).match_ontologies(&source, &target, &params);
        let cell = result.cell("Truck", "Car").expect("cell");
        assert!(cell.confidence > 0.7, "got {}", cell.confidence);
    }

    #[test]
    fn test_missing_vector_is_zero() {
        let table = table();
        let (source, target) = ontologies();
        let result = EmbeddingEquivalenceMatcher::new(&table).match_ontologies(
            &source,
            &target,
            &MatchParams::balanced(),
        );
        for cell in result.iter().filter(|c| c.source == "Bicycle") {
            assert_eq!(cell.confidence, 0.0);
        }
    }

    #[test]
    fn test_wrong_dimension_is_zero() {
        let table = table();
        let (source, target) = ontologies();
        let result = EmbeddingEquivalenceMatcher::new(&table).match_ontologies(
            &source,
            &target,
            &MatchParams::balanced(),
        );
        assert_eq!(result.cell("Truck", "Short").map(|c| c.confidence), Some(0.0));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let table = table();
        let (source, target) = ontologies();
        let matcher = EmbeddingEquivalenceMatcher::new(&table);
        let par = matcher.match_ontologies(&source, &target, &MatchParams::balanced());
        let seq = matcher.match_ontologies(
            &source,
            &target,
            &MatchParams::balanced().with_parallel(false),
        );
        assert_eq!(par, seq);
    }
}
