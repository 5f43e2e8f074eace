//! Concepts and the ontologies that own them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Narrow read-only view of a concept, as needed by the matchers.
///
/// Matchers only ever see identifier, label and definition text; any richer
/// ontology representation is adapted to this trait.
pub trait ConceptView {
    /// Identifier, unique within the owning ontology
    fn id(&self) -> &str;

    /// Human-readable label
    fn label(&self) -> &str;

    /// Full definition text, empty when the concept has none
    fn definition(&self) -> &str;

    /// Lower-cased label used as the lookup key for vectors and candidates
    fn label_key(&self) -> String {
        self.label().to_lowercase()
    }
}

/// A named class within an ontology document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    /// Identifier, unique within the owning ontology
    pub id: String,
    /// Label (`rdfs:label`, or the IRI fragment when no label is declared)
    pub label: String,
    /// Full definition text (all `rdfs:comment` values), may be empty
    #[serde(default)]
    pub definition: String,
    /// Identifier of the owning ontology
    #[serde(default)]
    pub ontology: String,
    /// Full IRI as declared in the source document, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iri: Option<String>,
}

impl Concept {
    /// Create a concept whose label equals its identifier
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            definition: String::new(),
            ontology: String::new(),
            iri: None,
        }
    }

    /// Set the label
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the definition text
    #[must_use]
    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = definition.into();
        self
    }

    /// Set the declared IRI
    #[must_use]
    pub fn with_iri(mut self, iri: impl Into<String>) -> Self {
        self.iri = Some(iri.into());
        self
    }
}

impl ConceptView for Concept {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn definition(&self) -> &str {
        &self.definition
    }
}

/// An ontology: an identifier plus its concepts in document order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ontology {
    /// Ontology identifier (IRI or document name)
    pub id: String,
    /// Concepts indexed by identifier, in document order
    concepts: IndexMap<String, Concept>,
}

impl Ontology {
    /// Create an empty ontology
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            concepts: IndexMap::new(),
        }
    }

    /// Add a concept, stamping it with this ontology's identifier.
    ///
    /// Returns `false` and keeps the existing concept when the identifier is
    /// already present.
    pub fn add_concept(&mut self, mut concept: Concept) -> bool {
        if self.concepts.contains_key(&concept.id) {
            tracing::warn!(
                "Duplicate concept '{}' in ontology '{}', keeping the first definition",
                concept.id,
                self.id
            );
            return false;
        }
        concept.ontology.clone_from(&self.id);
        self.concepts.insert(concept.id.clone(), concept);
        true
    }

    /// Builder-style variant of [`Ontology::add_concept`]
    #[must_use]
    pub fn with_concept(mut self, concept: Concept) -> Self {
        self.add_concept(concept);
        self
    }

    /// Look up a concept by identifier
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Concept> {
        self.concepts.get(id)
    }

    /// Iterate over concepts in document order
    pub fn concepts(&self) -> impl ExactSizeIterator<Item = &Concept> {
        self.concepts.values()
    }

    /// IRI of a concept: the declared one, else the ontology IRI with the
    /// identifier as fragment
    #[must_use]
    pub fn concept_iri(&self, id: &str) -> String {
        self.concepts
            .get(id)
            .and_then(|c| c.iri.clone())
            .unwrap_or_else(|| fragment_iri(&self.id, id))
    }

    /// Concepts as a slice-like vector of references, in document order
    #[must_use]
    pub fn concept_refs(&self) -> Vec<&Concept> {
        self.concepts.values().collect()
    }

    /// Number of concepts
    #[must_use]
    pub fn concept_count(&self) -> usize {
        self.concepts.len()
    }

    /// Whether the ontology declares no concepts
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }
}

/// The ontology IRI with `id` as fragment, replacing any existing fragment.
///
/// # Examples
///
/// ```
/// use onto_matchers::model::fragment_iri;
///
/// assert_eq!(fragment_iri("http://example.org/cars#", "Car"), "http://example.org/cars#Car");
/// assert_eq!(fragment_iri("cars", "Car"), "cars#Car");
/// ```
#[must_use]
pub fn fragment_iri(ontology: &str, id: &str) -> String {
    let base = ontology.split('#').next().unwrap_or(ontology);
    format!("{base}#{id}")
}
