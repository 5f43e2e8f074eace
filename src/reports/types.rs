//! Report type definitions.

use crate::model::{fragment_iri, Ontology};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Output format for alignment reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Structured JSON output
    #[default]
    Json,
    /// Alignment format (RDF/XML) for ontology-alignment toolchains
    #[value(alias = "alignment")]
    Rdf,
    /// Brief per-matcher summary
    Summary,
    /// Tab-separated cells for spreadsheet import
    Tsv,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Rdf => write!(f, "rdf"),
            Self::Summary => write!(f, "summary"),
            Self::Tsv => write!(f, "tsv"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Cells below this confidence are left out
    pub threshold: f64,
    /// Number of top cells per matcher in summaries
    pub summary_top: usize,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
    /// Declared IRIs of the aligned concepts
    #[serde(skip)]
    pub entities: EntityIris,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            summary_top: 10,
            metadata: ReportMetadata::default(),
            entities: EntityIris::default(),
        }
    }
}

impl ReportConfig {
    /// Set the confidence threshold
    #[must_use]
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the number of top cells in summaries
    #[must_use]
    pub const fn with_summary_top(mut self, n: usize) -> Self {
        self.summary_top = n;
        self
    }

    /// Set the input paths recorded in the report
    #[must_use]
    pub fn with_paths(mut self, source: Option<PathBuf>, target: Option<PathBuf>) -> Self {
        self.metadata.source_path = source;
        self.metadata.target_path = target;
        self
    }

    /// Set the concept IRIs used for entity references
    #[must_use]
    pub fn with_entities(mut self, entities: EntityIris) -> Self {
        self.entities = entities;
        self
    }
}

/// Declared concept IRIs, keyed by ontology and concept identifier.
///
/// Concepts without a declared IRI resolve to the ontology IRI with the
/// concept identifier as fragment.
#[derive(Debug, Clone, Default)]
pub struct EntityIris {
    iris: HashMap<(String, String), String>,
}

impl EntityIris {
    /// Collect the IRI of every concept in `ontologies`
    pub fn from_ontologies<'a>(ontologies: impl IntoIterator<Item = &'a Ontology>) -> Self {
        let iris = ontologies
            .into_iter()
            .flat_map(|ontology| {
                ontology.concepts().map(move |concept| {
                    let key = (ontology.id.clone(), concept.id.clone());
                    (key, ontology.concept_iri(&concept.id))
                })
            })
            .collect();
        Self { iris }
    }

    /// IRI of `concept` in `ontology`
    #[must_use]
    pub fn resolve(&self, ontology: &str, concept: &str) -> String {
        self.iris
            .get(&(ontology.to_string(), concept.to_string()))
            .cloned()
            .unwrap_or_else(|| fragment_iri(ontology, concept))
    }
}

/// Metadata recorded alongside the cells
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Path of the source ontology document
    pub source_path: Option<PathBuf>,
    /// Path of the target ontology document
    pub target_path: Option<PathBuf>,
    /// Profile score used for weighting
    pub profile_score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_matches_value_names() {
        for format in ReportFormat::value_variants() {
            let name = format.to_string();
            assert_eq!(ReportFormat::from_str(&name, true).ok(), Some(*format));
        }
    }

    #[test]
    fn test_entity_iris_resolve_declared_then_fragment() {
        use crate::model::Concept;

        let vehicles = Ontology::new("http://example.org/v")
            .with_concept(Concept::new("Car").with_iri("http://example.org/v/Car"))
            .with_concept(Concept::new("Bus"));
        let entities = EntityIris::from_ontologies([&vehicles]);
        assert_eq!(entities.resolve("http://example.org/v", "Car"), "http://example.org/v/Car");
        assert_eq!(entities.resolve("http://example.org/v", "Bus"), "http://example.org/v#Bus");
        assert_eq!(entities.resolve("other", "Car"), "other#Car");
    }

    #[test]
    fn test_alignment_alias() {
        assert_eq!(ReportFormat::from_str("alignment", true).ok(), Some(ReportFormat::Rdf));
    }
}
