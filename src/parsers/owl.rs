//! OWL ontology parser for the RDF/XML serialization.
//!
//! Every top-level `owl:Class` node carrying `rdf:about` or `rdf:ID` becomes a
//! concept. Class elements nested inside another class (`rdfs:subClassOf`
//! targets, restrictions, unions) are references and never declare a concept.
//! A class described in several places is merged into one concept. Labels and
//! comments are only read from direct children of the class element.

use super::traits::{
    invalid_document, iri_fragment, FormatConfidence, FormatDetection, OntologyParser,
};
use crate::error::{OntologyErrorKind, Result};
use crate::model::{Concept, Ontology};
use indexmap::IndexMap;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Parser for OWL documents in RDF/XML
#[derive(Debug, Default, Clone, Copy)]
pub struct OwlParser;

/// A class element still open on the element stack
#[derive(Debug)]
struct ClassFrame {
    depth: usize,
    id: String,
    iri: String,
    label: Option<String>,
    label_is_preferred: bool,
    comments: Vec<String>,
}

impl ClassFrame {
    fn open(depth: usize, id: String, iri: String) -> Self {
        Self {
            depth,
            id,
            iri,
            label: None,
            label_is_preferred: false,
            comments: Vec::new(),
        }
    }

    fn set_label(&mut self, label: String, preferred: bool) {
        if self.label.is_none() || (preferred && !self.label_is_preferred) {
            self.label = Some(label);
            self.label_is_preferred = preferred;
        }
    }

    /// Fold a later description of the same class into this one
    fn merge(&mut self, other: Self) {
        if let Some(label) = other.label {
            self.set_label(label, other.label_is_preferred);
        }
        self.comments.extend(other.comments);
    }

    fn into_concept(self, base: Option<&str>) -> Concept {
        let mut concept = Concept::new(self.id);
        if let Some(label) = self.label {
            concept = concept.with_label(label);
        }
        if let Some(iri) = resolve_iri(&self.iri, base) {
            concept = concept.with_iri(iri);
        }
        concept.with_definition(self.comments.join(" "))
    }
}

/// Resolve a class reference against the document base.
///
/// Absolute IRIs are kept; `#Fragment` references need a base.
fn resolve_iri(iri: &str, base: Option<&str>) -> Option<String> {
    if iri.contains("://") || iri.starts_with("urn:") {
        return Some(iri.to_string());
    }
    let fragment = iri.strip_prefix('#')?;
    let base = base?.split('#').next()?;
    Some(format!("{base}#{fragment}"))
}

fn close_class(classes: &mut IndexMap<String, ClassFrame>, frame: ClassFrame) {
    match classes.get_mut(&frame.id) {
        Some(existing) => existing.merge(frame),
        None => {
            classes.insert(frame.id.clone(), frame);
        }
    }
}

/// Literal child element being collected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Literal {
    Label { preferred: bool },
    Comment,
}

impl OwlParser {
    /// Create a new OWL parser
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Split a qualified XML name into prefix and local part
    fn split_name(name: &[u8]) -> (String, String) {
        let name_str = String::from_utf8_lossy(name);
        name_str.rfind(':').map_or_else(
            || (String::new(), name_str.to_string()),
            |idx| (name_str[..idx].to_string(), name_str[idx + 1..].to_string()),
        )
    }

    fn is_owl(prefix: &str, local: &str, expected: &str) -> bool {
        local == expected && (prefix == "owl" || prefix.is_empty())
    }

    fn attribute(e: &BytesStart<'_>, wanted: &[u8]) -> Option<String> {
        e.attributes()
            .filter_map(std::result::Result::ok)
            .find(|attr| attr.key.as_ref() == wanted)
            .and_then(|attr| attr.unescape_value().ok().map(|v| v.trim().to_string()))
    }

    /// Concept identifier and declared IRI of a class node, `None` for
    /// anonymous classes
    fn class_id(e: &BytesStart<'_>) -> Option<(String, String)> {
        let iri = Self::attribute(e, b"rdf:about")
            .or_else(|| Self::attribute(e, b"rdf:ID").map(|id| format!("#{id}")))?;
        let fragment = iri_fragment(&iri);
        if fragment.is_empty() {
            None
        } else {
            Some((fragment.to_string(), iri))
        }
    }

    fn literal_kind(e: &BytesStart<'_>) -> Option<Literal> {
        let (prefix, local) = Self::split_name(e.name().as_ref());
        if prefix != "rdfs" {
            return None;
        }
        match local.as_str() {
            "label" => {
                let preferred = Self::attribute(e, b"xml:lang")
                    .map_or(true, |lang| lang.is_empty() || lang.to_lowercase().starts_with("en"));
                Some(Literal::Label { preferred })
            }
            "comment" => Some(Literal::Comment),
            _ => None,
        }
    }

    fn parse_rdf_xml(content: &str, fallback_id: &str) -> Result<Ontology> {
        let mut reader = Reader::from_str(content);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut depth = 0usize;
        let mut ontology_iri: Option<String> = None;
        let mut xml_base: Option<String> = None;
        let mut declared: IndexMap<String, ClassFrame> = IndexMap::new();
        let mut open: Option<ClassFrame> = None;
        // depths of every open owl:Class element, named or anonymous
        let mut class_depths: Vec<usize> = Vec::new();
        let mut literal: Option<(Literal, usize)> = None;
        let mut current_text = String::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    depth += 1;
                    let (prefix, local) = Self::split_name(e.name().as_ref());

                    if depth == 1 {
                        xml_base = Self::attribute(e, b"xml:base").filter(|b| !b.is_empty());
                    }

                    if Self::is_owl(&prefix, &local, "Ontology") {
                        if ontology_iri.is_none() {
                            ontology_iri = Self::attribute(e, b"rdf:about").filter(|a| !a.is_empty());
                        }
                    } else if Self::is_owl(&prefix, &local, "Class") {
                        if class_depths.is_empty() {
                            if let Some((id, iri)) = Self::class_id(e) {
                                open = Some(ClassFrame::open(depth, id, iri));
                            }
                        }
                        class_depths.push(depth);
                    } else if let Some(frame) = &open {
                        if frame.depth + 1 == depth {
                            literal = Self::literal_kind(e).map(|kind| (kind, depth));
                            current_text.clear();
                        }
                    }
                }
                Ok(Event::Empty(ref e)) => {
                    let (prefix, local) = Self::split_name(e.name().as_ref());
                    if Self::is_owl(&prefix, &local, "Ontology") {
                        if ontology_iri.is_none() {
                            ontology_iri = Self::attribute(e, b"rdf:about").filter(|a| !a.is_empty());
                        }
                    } else if Self::is_owl(&prefix, &local, "Class") && class_depths.is_empty() {
                        if let Some((id, iri)) = Self::class_id(e) {
                            close_class(&mut declared, ClassFrame::open(depth + 1, id, iri));
                        }
                    }
                }
                Ok(Event::Text(ref e)) => {
                    if literal.is_some() {
                        let text = e.unescape().map_err(|err| {
                            invalid_document(
                                "OWL",
                                OntologyErrorKind::InvalidXml(format!(
                                    "bad text at position {}: {err}",
                                    reader.buffer_position()
                                )),
                            )
                        })?;
                        current_text.push_str(&text);
                    }
                }
                Ok(Event::CData(ref e)) => {
                    if literal.is_some() {
                        current_text.push_str(&String::from_utf8_lossy(e));
                    }
                }
                Ok(Event::End(_)) => {
                    if let Some((kind, literal_depth)) = literal {
                        if literal_depth == depth {
                            if let Some(frame) = open.as_mut() {
                                let text = current_text.trim().to_string();
                                if !text.is_empty() {
                                    match kind {
                                        Literal::Comment => frame.comments.push(text),
                                        Literal::Label { preferred } => frame.set_label(text, preferred),
                                    }
                                }
                            }
                            literal = None;
                            current_text.clear();
                        }
                    }

                    if class_depths.last() == Some(&depth) {
                        class_depths.pop();
                    }
                    if open.as_ref().is_some_and(|frame| frame.depth == depth) {
                        if let Some(frame) = open.take() {
                            close_class(&mut declared, frame);
                        }
                    }
                    depth = depth.saturating_sub(1);
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(invalid_document(
                        "OWL",
                        OntologyErrorKind::InvalidXml(format!(
                            "error at position {}: {e}",
                            reader.buffer_position()
                        )),
                    ))
                }
                _ => {}
            }
            buf.clear();
        }

        if !class_depths.is_empty() {
            return Err(invalid_document(
                "OWL",
                OntologyErrorKind::InvalidXml("unterminated owl:Class element".to_string()),
            ));
        }

        let base = xml_base.clone().or_else(|| ontology_iri.clone());
        let id = ontology_iri
            .or(xml_base)
            .unwrap_or_else(|| fallback_id.to_string());
        let mut ontology = Ontology::new(id);
        for frame in declared.into_values() {
            ontology.add_concept(frame.into_concept(base.as_deref()));
        }
        Ok(ontology)
    }
}

impl OntologyParser for OwlParser {
    fn parse_str(&self, content: &str, fallback_id: &str) -> Result<Ontology> {
        Self::parse_rdf_xml(content, fallback_id)
    }

    fn format_name(&self) -> &str {
        "OWL"
    }

    fn detect(&self, content: &str) -> FormatDetection {
        let trimmed = content.trim_start();
        if !trimmed.starts_with('<') {
            return FormatDetection::no_match();
        }
        let confidence = if trimmed.contains("owl:Class") || trimmed.contains("owl:Ontology") {
            FormatConfidence::CERTAIN
        } else if trimmed.contains("rdf:RDF") {
            FormatConfidence::HIGH
        } else {
            FormatConfidence::LOW
        };
        FormatDetection::with_confidence(confidence).variant("RDF/XML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConceptView;

    const VEHICLES: &str = r##"<?xml version="1.0"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#"
         xmlns:owl="http://www.w3.org/2002/07/owl#"
         xml:base="http://example.org/vehicles">
  <owl:Ontology rdf:about="http://example.org/vehicles#onto"/>
  <owl:Class rdf:about="http://example.org/vehicles#Vehicle">
    <rdfs:label xml:lang="de">Fahrzeug</rdfs:label>
    <rdfs:label xml:lang="en">vehicle</rdfs:label>
    <rdfs:comment>A means of transport,</rdfs:comment>
    <rdfs:comment>including cars &amp; buses.</rdfs:comment>
  </owl:Class>
  <owl:Class rdf:ID="Car">
    <rdfs:subClassOf>
      <owl:Restriction>
        <rdfs:label>ignored</rdfs:label>
      </owl:Restriction>
    </rdfs:subClassOf>
  </owl:Class>
  <owl:Class rdf:about="#Bus"/>
  <owl:Class>
    <rdfs:label>anonymous</rdfs:label>
  </owl:Class>
  <owl:Class rdf:about="#Car">
    <rdfs:comment>A road vehicle.</rdfs:comment>
  </owl:Class>
</rdf:RDF>"##;

    #[test]
    fn test_parse_classes() {
        let ontology = OwlParser::new().parse_str(VEHICLES, "fallback").expect("parse");
        assert_eq!(ontology.id, "http://example.org/vehicles#onto");
        assert_eq!(ontology.concept_count(), 3);

        let vehicle = ontology.get("Vehicle").expect("vehicle");
        assert_eq!(vehicle.label(), "vehicle");
        assert_eq!(
            vehicle.definition(),
            "A means of transport, including cars & buses."
        );
    }

    #[test]
    fn test_label_defaults_to_fragment() {
        let ontology = OwlParser::new().parse_str(VEHICLES, "fallback").expect("parse");
        let car = ontology.get("Car").expect("car");
        assert_eq!(car.label(), "Car");
        assert_eq!(ontology.get("Bus").map(ConceptView::label), Some("Bus"));
    }

    #[test]
    fn test_repeated_class_descriptions_are_merged() {
        let ontology = OwlParser::new().parse_str(VEHICLES, "fallback").expect("parse");
        let ids: Vec<&str> = ontology.concepts().map(ConceptView::id).collect();
        assert_eq!(ids, ["Vehicle", "Car", "Bus"]);
        assert_eq!(ontology.get("Car").map(ConceptView::definition), Some("A road vehicle."));
    }

    #[test]
    fn test_subclass_reference_does_not_shadow_later_declaration() {
        let content = r##"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
                 xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#"
                 xmlns:owl="http://www.w3.org/2002/07/owl#"
                 xml:base="http://example.org/v">
  <owl:Class rdf:about="#Car">
    <rdfs:subClassOf><owl:Class rdf:about="#Vehicle"/></rdfs:subClassOf>
    <rdfs:subClassOf>
      <owl:Class rdf:about="#Machine"><rdfs:label>machine</rdfs:label></owl:Class>
    </rdfs:subClassOf>
  </owl:Class>
  <owl:Class rdf:about="#Vehicle">
    <rdfs:label>vehicle</rdfs:label>
    <rdfs:comment>Transport, including cars.</rdfs:comment>
  </owl:Class>
</rdf:RDF>"##;
        let ontology = OwlParser::new().parse_str(content, "v").expect("parse");
        let ids: Vec<&str> = ontology.concepts().map(ConceptView::id).collect();
        assert_eq!(ids, ["Car", "Vehicle"]);

        let vehicle = ontology.get("Vehicle").expect("vehicle");
        assert_eq!(vehicle.label(), "vehicle");
        assert_eq!(vehicle.definition(), "Transport, including cars.");
        assert_eq!(ontology.get("Car").map(ConceptView::label), Some("Car"));
    }

    #[test]
    fn test_declared_iris_are_resolved() {
        let content = r##"<rdf:RDF xmlns:rdf="r" xmlns:owl="o" xml:base="http://example.org/v">
            <owl:Class rdf:about="http://example.org/v/terms/Car"/>
            <owl:Class rdf:about="#Bus"/>
            <owl:Class rdf:ID="Train"/>
        </rdf:RDF>"##;
        let ontology = OwlParser::new().parse_str(content, "v").expect("parse");
        let iri = |id: &str| ontology.get(id).and_then(|c| c.iri.clone());
        assert_eq!(iri("Car").as_deref(), Some("http://example.org/v/terms/Car"));
        assert_eq!(iri("Bus").as_deref(), Some("http://example.org/v#Bus"));
        assert_eq!(iri("Train").as_deref(), Some("http://example.org/v#Train"));
    }

    #[test]
    fn test_relative_iri_without_base_is_not_recorded() {
        assert_eq!(resolve_iri("#A", None), None);
        assert_eq!(resolve_iri("urn:x:A", None).as_deref(), Some("urn:x:A"));
        assert_eq!(
            resolve_iri("#A", Some("http://x.org/o#onto")).as_deref(),
            Some("http://x.org/o#A")
        );
    }

    #[test]
    fn test_ontology_id_falls_back_to_base_then_stem() {
        let based = r##"<rdf:RDF xmlns:rdf="r" xmlns:owl="o" xml:base="http://example.org/b">
            <owl:Class rdf:about="#A"/></rdf:RDF>"##;
        let ontology = OwlParser::new().parse_str(based, "stem").expect("parse");
        assert_eq!(ontology.id, "http://example.org/b");

        let bare = r##"<rdf:RDF xmlns:rdf="r" xmlns:owl="o"><owl:Class rdf:about="#A"/></rdf:RDF>"##;
        let ontology = OwlParser::new().parse_str(bare, "stem").expect("parse");
        assert_eq!(ontology.id, "stem");
    }

    #[test]
    fn test_malformed_xml_is_fatal() {
        let err = OwlParser::new()
            .parse_str("<rdf:RDF><owl:Class rdf:about=\"#A\"></rdf:RDF>", "x")
            .unwrap_err();
        assert!(err.is_ontology_error());
    }

    #[test]
    fn test_detection() {
        let parser = OwlParser::new();
        assert!(parser.can_parse(VEHICLES));
        assert!(!parser.can_parse(r#"{"concepts": []}"#));
    }
}
