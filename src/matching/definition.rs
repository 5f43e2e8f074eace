//! Definition embedding equivalence matching.
//!
//! Like [`EmbeddingEquivalenceMatcher`](super::EmbeddingEquivalenceMatcher),
//! but each concept's vector also carries its definition: the label vector is
//! averaged with the centroid of the definition's token vectors.

use super::embedding::match_equivalence;
use super::vectors::{ResolutionMode, VectorSpaceBuilder, VectorTable};
use super::{MatchParams, MatcherKind, OntologyMatcher};
use crate::model::{AlignmentResult, Concept};

/// Equivalence matcher over label + definition vectors.
#[derive(Debug, Clone, Copy)]
pub struct DefinitionEquivalenceMatcher<'a> {
    table: &'a VectorTable,
}

impl<'a> DefinitionEquivalenceMatcher<'a> {
    /// Create a matcher over a loaded vector table
    #[must_use]
    pub const fn new(table: &'a VectorTable) -> Self {
        Self { table }
    }
}

impl OntologyMatcher for DefinitionEquivalenceMatcher<'_> {
    fn kind(&self) -> MatcherKind {
        MatcherKind::Definition
    }

    fn match_concepts(
        &self,
        source_ontology: &str,
        target_ontology: &str,
        source: &[&Concept],
        target: &[&Concept],
        params: &MatchParams,
    ) -> AlignmentResult {
        let builder = VectorSpaceBuilder::new(self.table, ResolutionMode::Definition);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::EmbeddingEquivalenceMatcher;
    use crate::model::{Ontology, Relation};

    fn axis(i: usize) -> Vec<f64> {
        let mut v = vec![0.0; 300];
        v[i] = 1.0;
        v
    }

    fn table() -> VectorTable {
        VectorTable::new(300)
            .with_vector("automobile", axis(0))
            .with_vector("motorcar", axis(1))
            .with_vector("engine", axis(2))
            .with_vector("wheel", axis(3))
    }

    #[test]
    fn test_definitions_pull_vectors_together() {
        let table = table();
        let source = Ontology::new("src").with_concept(
            Concept::new("Automobile").with_definition("A vehicle with an engine and wheels."),
        );
        let target = Ontology::new("tgt").with_concept(
            Concept::new("Motorcar").with_definition("Has an engine and four wheels."),
        );
        let params = MatchParams::balanced();

        let by_label = EmbeddingEquivalenceMatcher::new(&table)
            .match_ontologies(&source, &target, &params);
        let by_definition = DefinitionEquivalenceMatcher::new(&table)
            .match_ontologies(&source, &target, &params);

        assert_eq!(by_label.cells[0].confidence, 0.0);
        assert!(by_definition.cells[0].confidence > 0.0);
        assert_eq!(by_definition.cells[0].relation, Relation::Equivalence);
        assert_eq!(by_definition.cells[0].id, "definition-equivalence-0");
    }

    #[test]
    fn test_unknown_label_is_zero_even_with_known_definition() {
        let table = table();
        let source = Ontology::new("src")
            .with_concept(Concept::new("Lorry").with_definition("engine and wheels"));
        let target = Ontology::new("tgt").with_concept(Concept::new("Automobile"));
        let result = DefinitionEquivalenceMatcher::new(&table).match_ontologies(
            &source,
            &target,
            &MatchParams::balanced(),
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result.cells[0].confidence, 0.0);
    }
}
