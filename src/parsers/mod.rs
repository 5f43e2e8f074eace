//! Ontology document parsers.
//!
//! Ontologies are read from OWL RDF/XML or from a plain concept-list
//! document in JSON or YAML, and converted to [`Ontology`]. Any read or parse
//! failure is fatal for the run.
//!
//! ## Usage
//!
//! ```no_run
//! use onto_matchers::parsers::parse_ontology;
//! use std::path::Path;
//!
//! let ontology = parse_ontology(Path::new("vehicles.owl")).unwrap();
//! println!("{} concepts", ontology.concept_count());
//! ```

mod detection;
mod document;
mod owl;
mod traits;

pub use detection::{DetectionResult, FormatDetector, OntologyFormat, MIN_CONFIDENCE_THRESHOLD};
pub use document::{DocumentParser, DocumentSyntax};
pub use owl::OwlParser;
pub use traits::{FormatConfidence, FormatDetection, OntologyParser};

use crate::error::{MatcherError, Result};
use crate::model::Ontology;
use std::path::Path;

/// Maximum ontology file size (256 MB)
const MAX_ONTOLOGY_FILE_SIZE: u64 = 256 * 1024 * 1024;

/// Detect the format of an ontology file and parse it
pub fn parse_ontology(path: &Path) -> Result<Ontology> {
    let metadata = std::fs::metadata(path).map_err(|e| MatcherError::io(path, e))?;
    if metadata.len() > MAX_ONTOLOGY_FILE_SIZE {
        return Err(MatcherError::io(
            path,
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!(
                    "ontology file is {} MB, exceeding the {} MB limit",
                    metadata.len() / (1024 * 1024),
                    MAX_ONTOLOGY_FILE_SIZE / (1024 * 1024)
                ),
            ),
        ));
    }
    let content = std::fs::read_to_string(path).map_err(|e| MatcherError::io(path, e))?;
    let detection = FormatDetector::new().detect(&content, Some(path));
    let Some(format) = detection.format.filter(|_| detection.can_parse()) else {
        return Err(MatcherError::unknown_format(path.display().to_string()));
    };

    let ontology = format
        .parser()
        .parse_str(&content, &traits::fallback_id(path))?;
    tracing::info!(
        "Parsed {} ontology '{}' from {}: {} concepts",
        format.name(),
        ontology.id,
        path.display(),
        ontology.concept_count()
    );
    Ok(ontology)
}

/// Parse ontology content, detecting its format
pub fn parse_ontology_str(content: &str, fallback_id: &str) -> Result<Ontology> {
    let detection = FormatDetector::new().detect(content, None);
    match detection.format.filter(|_| detection.can_parse()) {
        Some(format) => format.parser().parse_str(content, fallback_id),
        None => Err(MatcherError::unknown_format(fallback_id)),
    }
}
