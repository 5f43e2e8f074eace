//! Ontology parsing stage.

use super::PipelineError;
use crate::model::Ontology;
use crate::parsers::parse_ontology;
use std::path::Path;

/// Parse an ontology, attaching the path to any failure
pub fn parse_ontology_with_context(path: &Path) -> Result<Ontology, PipelineError> {
    tracing::info!("Parsing ontology: {}", path.display());
    let ontology = parse_ontology(path).map_err(|source| PipelineError::ParseFailed {
        path: path.display().to_string(),
        source,
    })?;
    if ontology.is_empty() {
        tracing::warn!("Ontology {} declares no concepts", path.display());
    }
    Ok(ontology)
}

/// Parse the source and target ontologies of a run
pub fn load_ontology_pair(
    source: &Path,
    target: &Path,
) -> Result<(Ontology, Ontology), PipelineError> {
    let source = parse_ontology_with_context(source)?;
    let target = parse_ontology_with_context(target)?;
    Ok((source, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_failure_carries_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{\"concepts\": [").expect("write");
        let err = parse_ontology_with_context(&path).unwrap_err();
        assert!(matches!(err, PipelineError::ParseFailed { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_missing_file_is_parse_failure() {
        let err = parse_ontology_with_context(Path::new("/nonexistent/a.owl")).unwrap_err();
        assert_eq!(err.exit_code(), super::super::exit_codes::ONTOLOGY_ERROR);
    }
}
