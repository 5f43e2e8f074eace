//! Parser trait definitions.
//!
//! This module defines the `OntologyParser` trait for format-specific parsers
//! and the confidence scores used to pick a parser for a document.

use crate::error::{MatcherError, OntologyErrorKind, Result};
use crate::model::Ontology;
use std::path::Path;

/// Confidence level for format detection
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FormatConfidence(f32);

impl FormatConfidence {
    /// Definitely not this format
    pub const NONE: Self = Self(0.0);
    /// Might be this format
    pub const LOW: Self = Self(0.25);
    /// Likely this format
    pub const MEDIUM: Self = Self(0.5);
    /// Almost certainly this format
    pub const HIGH: Self = Self(0.75);
    /// Definitely this format
    pub const CERTAIN: Self = Self(1.0);

    /// Create a new confidence value
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the confidence value
    #[must_use]
    pub const fn value(&self) -> f32 {
        self.0
    }

    /// Check if this confidence indicates the format can be parsed
    #[must_use]
    pub fn can_parse(&self) -> bool {
        self.0 >= Self::LOW.0
    }
}

impl Default for FormatConfidence {
    fn default() -> Self {
        Self::NONE
    }
}

/// Detection result from a parser
#[derive(Debug, Clone, Default)]
pub struct FormatDetection {
    /// Confidence that this parser can handle the content
    pub confidence: FormatConfidence,
    /// Detected variant (e.g. "JSON", "YAML", "RDF/XML")
    pub variant: Option<String>,
}

impl FormatDetection {
    /// Create a detection result indicating no match
    #[must_use]
    pub const fn no_match() -> Self {
        Self {
            confidence: FormatConfidence::NONE,
            variant: None,
        }
    }

    /// Create a detection result with confidence
    #[must_use]
    pub const fn with_confidence(confidence: FormatConfidence) -> Self {
        Self {
            confidence,
            variant: None,
        }
    }

    /// Set the detected variant
    #[must_use]
    pub fn variant(mut self, variant: &str) -> Self {
        self.variant = Some(variant.to_string());
        self
    }
}

/// Trait for ontology document parsers
///
/// Implementors provide format detection via `detect()` and parsing via
/// `parse_str()`. A parse failure is always fatal for the run.
pub trait OntologyParser {
    /// Parse an ontology from a file path.
    ///
    /// The file stem is the ontology identifier of last resort.
    fn parse(&self, path: &Path) -> Result<Ontology> {
        let content = std::fs::read_to_string(path).map_err(|e| MatcherError::io(path, e))?;
        let fallback = fallback_id(path);
        self.parse_str(&content, &fallback)
    }

    /// Parse an ontology from string content.
    ///
    /// `fallback_id` is used when the document does not name itself.
    fn parse_str(&self, content: &str, fallback_id: &str) -> Result<Ontology>;

    /// Get format name
    fn format_name(&self) -> &str;

    /// Detect if this parser can handle the given content
    fn detect(&self, content: &str) -> FormatDetection;

    /// Quick check if this parser can likely handle the content
    fn can_parse(&self, content: &str) -> bool {
        self.detect(content).confidence.can_parse()
    }
}

/// Ontology identifier derived from a file name
pub(crate) fn fallback_id(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "ontology".to_string())
}

/// Identifier of a resource IRI: the text after `#`, else after the last `/`
pub(crate) fn iri_fragment(iri: &str) -> &str {
    let trimmed = iri.trim_end_matches(['#', '/']);
    trimmed.rfind('#').map_or_else(
        || trimmed.rfind('/').map_or(trimmed, |idx| &trimmed[idx + 1..]),
        |idx| &trimmed[idx + 1..],
    )
}

pub(crate) fn invalid_document(format: &str, kind: OntologyErrorKind) -> MatcherError {
    MatcherError::ontology(format!("parsing {format} ontology"), kind)
}
