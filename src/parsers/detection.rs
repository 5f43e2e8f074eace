//! Centralized ontology format detection.
//!
//! Each parser scores the content; the best score above the threshold wins.
//! The file extension breaks ties and rescues YAML documents that do not
//! start with a recognisable key.

use super::document::DocumentParser;
use super::owl::OwlParser;
use super::traits::{FormatConfidence, OntologyParser};
use std::path::Path;

/// Minimum confidence for a parser to be selected
pub const MIN_CONFIDENCE_THRESHOLD: f32 = 0.25;

/// Ontology document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OntologyFormat {
    /// OWL in RDF/XML
    Owl,
    /// Concept-list JSON document
    Json,
    /// Concept-list YAML document
    Yaml,
}

impl OntologyFormat {
    /// Get the display name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Owl => "OWL",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }

    /// Guess the format from a file extension
    #[must_use]
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_string_lossy().to_lowercase();
        match ext.as_str() {
            "owl" | "rdf" | "xml" => Some(Self::Owl),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Parser for this format
    #[must_use]
    pub fn parser(&self) -> Box<dyn OntologyParser> {
        match self {
            Self::Owl => Box::new(OwlParser::new()),
            Self::Json => Box::new(DocumentParser::json()),
            Self::Yaml => Box::new(DocumentParser::yaml()),
        }
    }
}

/// Result of format detection
#[derive(Debug, Clone)]
pub struct DetectionResult {
    /// Selected format, `None` when nothing matched
    pub format: Option<OntologyFormat>,
    /// Confidence of the selection
    pub confidence: FormatConfidence,
}

impl DetectionResult {
    /// Check if the detection is confident enough to parse
    #[must_use]
    pub fn can_parse(&self) -> bool {
        self.format.is_some() && self.confidence.value() >= MIN_CONFIDENCE_THRESHOLD
    }
}

/// Format detector over all ontology parsers
#[derive(Debug, Clone, Copy)]
pub struct FormatDetector {
    owl: OwlParser,
    json: DocumentParser,
    yaml: DocumentParser,
    min_confidence: f32,
}

impl Default for FormatDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatDetector {
    /// Create a new format detector with default settings
    #[must_use]
    pub const fn new() -> Self {
        Self {
            owl: OwlParser::new(),
            json: DocumentParser::json(),
            yaml: DocumentParser::yaml(),
            min_confidence: MIN_CONFIDENCE_THRESHOLD,
        }
    }

    /// Detect format from content, using the path extension as a hint
    #[must_use]
    pub fn detect(&self, content: &str, path: Option<&Path>) -> DetectionResult {
        let hint = path.and_then(OntologyFormat::from_extension);
        let scores = [
            (OntologyFormat::Owl, self.owl.detect(content).confidence),
            (OntologyFormat::Json, self.json.detect(content).confidence),
            (OntologyFormat::Yaml, self.yaml.detect(content).confidence),
        ];

        tracing::debug!(
            "Format detection: OWL={:.2}, JSON={:.2}, YAML={:.2}, hint={:?}",
            scores[0].1.value(),
            scores[1].1.value(),
            scores[2].1.value(),
            hint
        );

        let best = scores
            .iter()
            .filter(|(_, confidence)| confidence.value() >= self.min_confidence)
            .max_by(|(fa, a), (fb, b)| {
                a.value()
                    .total_cmp(&b.value())
                    .then_with(|| (Some(*fa) == hint).cmp(&(Some(*fb) == hint)))
            })
            .copied();

        match (best, hint) {
            (Some((format, confidence)), _) => DetectionResult {
                format: Some(format),
                confidence,
            },
            (None, Some(OntologyFormat::Yaml)) => DetectionResult {
                format: Some(OntologyFormat::Yaml),
                confidence: FormatConfidence::LOW,
            },
            (None, _) => DetectionResult {
                format: None,
                confidence: FormatConfidence::NONE,
            },
        }
    }
}
