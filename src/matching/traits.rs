//! Trait definitions for ontology matchers.
//!
//! Every matcher enumerates the full source × target cross product and
//! returns one cell per ordered pair. The trait lets the pipeline run any
//! mix of matchers over the same ontology pair.

use super::MatchParams;
use crate::model::{AlignmentResult, Concept, Ontology};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The matchers this crate provides.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    schemars::JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum MatcherKind {
    /// Cosine similarity of label embeddings
    Embedding,
    /// Cosine similarity of label + definition embeddings
    Definition,
    /// Enumeration patterns in definitions, confirmed by a lexicon
    Subsumption,
}

impl MatcherKind {
    /// All matcher kinds, in run order
    pub const ALL: [Self; 3] = [Self::Embedding, Self::Definition, Self::Subsumption];

    /// Matcher name used in cell identifiers and reports
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Embedding => "embedding-equivalence",
            Self::Definition => "definition-equivalence",
            Self::Subsumption => "definition-subsumption",
        }
    }

    /// Whether the matcher needs a vector table
    #[must_use]
    pub const fn needs_vectors(&self) -> bool {
        matches!(self, Self::Embedding | Self::Definition)
    }

    /// Whether the matcher needs a lexical resource
    #[must_use]
    pub const fn needs_lexicon(&self) -> bool {
        matches!(self, Self::Subsumption)
    }
}

impl fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A matcher over two ontologies.
pub trait OntologyMatcher: Send + Sync {
    /// Which matcher this is
    fn kind(&self) -> MatcherKind;

    /// Match two concept lists, producing exactly `source.len() * target.len()` cells.
    fn match_concepts(
        &self,
        source_ontology: &str,
        target_ontology: &str,
        source: &[&Concept],
        target: &[&Concept],
        params: &MatchParams,
    ) -> AlignmentResult;

    /// Match every concept of `source` against every concept of `target`.
    fn match_ontologies(
        &self,
        source: &Ontology,
        target: &Ontology,
        params: &MatchParams,
    ) -> AlignmentResult {
        let source_concepts = source.concept_refs();
        let target_concepts = target.concept_refs();
        let result = self.match_concepts(
            &source.id,
            &target.id,
            &source_concepts,
            &target_concepts,
            params,
        );
        tracing::info!(
            "{} produced {} cells ({} with evidence) for {} x {} concepts",
            self.kind(),
            result.len(),
            result.evidence_count(),
            source_concepts.len(),
            target_concepts.len()
        );
        result
    }

    /// Matcher name
    fn name(&self) -> &'static str {
        self.kind().name()
    }
}
