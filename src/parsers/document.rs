//! JSON and YAML ontology documents.
//!
//! ```yaml
//! id: vehicles
//! concepts:
//!   - id: Car
//!     label: car
//!     definition: A road vehicle with four wheels.
//!     iri: http://example.org/vehicles/Car   # optional
//! ```

use super::traits::{invalid_document, FormatConfidence, FormatDetection, OntologyParser};
use crate::error::{MatcherError, OntologyErrorKind, Result};
use crate::model::{Concept, Ontology};
use serde::Deserialize;

/// Serialization flavour of a concept-list document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSyntax {
    Json,
    Yaml,
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    concepts: Vec<RawConcept>,
}

#[derive(Debug, Deserialize)]
struct RawConcept {
    id: Option<String>,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    definition: Option<String>,
    #[serde(default)]
    iri: Option<String>,
}

/// Parser for `{ id, concepts: [{ id, label, definition }] }` documents
#[derive(Debug, Clone, Copy)]
pub struct DocumentParser {
    syntax: DocumentSyntax,
}

impl DocumentParser {
    /// JSON document parser
    #[must_use]
    pub const fn json() -> Self {
        Self {
            syntax: DocumentSyntax::Json,
        }
    }

    /// YAML document parser
    #[must_use]
    pub const fn yaml() -> Self {
        Self {
            syntax: DocumentSyntax::Yaml,
        }
    }

    /// Which syntax this parser reads
    #[must_use]
    pub const fn syntax(&self) -> DocumentSyntax {
        self.syntax
    }

    fn decode(&self, content: &str) -> Result<RawDocument> {
        match self.syntax {
            DocumentSyntax::Json => serde_json::from_str(content).map_err(|e| {
                invalid_document("JSON", OntologyErrorKind::InvalidJson(e.to_string()))
            }),
            DocumentSyntax::Yaml => serde_yaml::from_str(content).map_err(|e| {
                invalid_document("YAML", OntologyErrorKind::InvalidYaml(e.to_string()))
            }),
        }
    }
}

impl OntologyParser for DocumentParser {
    fn parse_str(&self, content: &str, fallback_id: &str) -> Result<Ontology> {
        let raw = self.decode(content)?;
        let id = raw
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| fallback_id.to_string());
        let mut ontology = Ontology::new(id);

        for (position, concept) in raw.concepts.into_iter().enumerate() {
            let concept_id = concept
                .id
                .filter(|id| !id.trim().is_empty())
                .ok_or_else(|| {
                    MatcherError::missing_field("id", format!("concept #{position}"))
                })?;
            let mut parsed = Concept::new(concept_id);
            if let Some(label) = concept.label.filter(|l| !l.trim().is_empty()) {
                parsed = parsed.with_label(label);
            }
            if let Some(definition) = concept.definition {
                parsed = parsed.with_definition(definition.trim());
            }
            if let Some(iri) = concept.iri.filter(|i| !i.trim().is_empty()) {
                parsed = parsed.with_iri(iri.trim());
            }
            ontology.add_concept(parsed);
        }

        Ok(ontology)
    }

    fn format_name(&self) -> &str {
        match self.syntax {
            DocumentSyntax::Json => "JSON",
            DocumentSyntax::Yaml => "YAML",
        }
    }

    fn detect(&self, content: &str) -> FormatDetection {
        let trimmed = content.trim_start();
        match self.syntax {
            DocumentSyntax::Json => {
                if !trimmed.starts_with('{') {
                    return FormatDetection::no_match();
                }
                let confidence = if trimmed.contains("\"concepts\"") {
                    FormatConfidence::HIGH
                } else {
                    FormatConfidence::LOW
                };
                FormatDetection::with_confidence(confidence).variant("JSON")
            }
            DocumentSyntax::Yaml => {
                if trimmed.starts_with('{') || trimmed.starts_with('<') {
                    return FormatDetection::no_match();
                }
                let has_concepts = trimmed
                    .lines()
                    .any(|line| line.trim_start().starts_with("concepts:"));
                if has_concepts {
                    FormatDetection::with_confidence(FormatConfidence::HIGH).variant("YAML")
                } else {
                    FormatDetection::no_match()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConceptView;

    #[test]
    fn test_parse_json_document() {
        let content = r#"{
            "id": "vehicles",
            "concepts": [
                {"id": "Car", "label": "car", "definition": " A road vehicle. "},
                {"id": "Bus"}
            ]
        }"#;
        let ontology = DocumentParser::json().parse_str(content, "fallback").expect("parse");
        assert_eq!(ontology.id, "vehicles");
        assert_eq!(ontology.concept_count(), 2);
        let car = ontology.get("Car").expect("car");
        assert_eq!(car.label(), "car");
        assert_eq!(car.definition(), "A road vehicle.");
        assert_eq!(car.ontology, "vehicles");
        assert_eq!(ontology.get("Bus").map(ConceptView::label), Some("Bus"));
        assert_eq!(car.iri, None);
    }

    #[test]
    fn test_declared_iri_is_kept() {
        let content = "id: v\nconcepts:\n  - id: Car\n    iri: http://example.org/v/Car\n";
        let ontology = DocumentParser::yaml().parse_str(content, "v").expect("parse");
        assert_eq!(ontology.concept_iri("Car"), "http://example.org/v/Car");
    }

    #[test]
    fn test_parse_yaml_document_uses_fallback_id() {
        let content = "concepts:\n  - id: Car\n    definition: A car.\n";
        let ontology = DocumentParser::yaml().parse_str(content, "cars").expect("parse");
        assert_eq!(ontology.id, "cars");
        assert_eq!(ontology.concept_count(), 1);
    }

    #[test]
    fn test_missing_concept_id_is_fatal() {
        let content = r#"{"concepts": [{"label": "orphan"}]}"#;
        let err = DocumentParser::json().parse_str(content, "x").unwrap_err();
        assert!(err.is_ontology_error());
    }

    #[test]
    fn test_invalid_json_is_fatal() {
        let err = DocumentParser::json().parse_str("{not json", "x").unwrap_err();
        assert!(err.is_ontology_error());
    }

    #[test]
    fn test_empty_document_is_accepted() {
        let ontology = DocumentParser::json().parse_str(r#"{"id": "e"}"#, "x").expect("parse");
        assert!(ontology.is_empty());
    }

    #[test]
    fn test_detection() {
        assert!(DocumentParser::json().can_parse(r#"{"concepts": []}"#));
        assert!(!DocumentParser::json().can_parse("concepts: []"));
        assert!(DocumentParser::yaml().can_parse("id: x\nconcepts: []\n"));
        assert!(!DocumentParser::yaml().can_parse("<rdf:RDF/>"));
    }
}
