//! Resource loading stage.
//!
//! Loads the vector table and lexicon the selected matchers need, before any
//! matching starts. A matcher selected without its resource is an error.

use super::PipelineError;
use crate::config::ResourceConfig;
use crate::error::{ErrorContext, MatcherError};
use crate::matching::{DomainLexicon, MatcherKind, VectorTable};

/// Read-only resources shared by the matchers of one run
#[derive(Debug, Default)]
pub struct MatchingResources {
    /// Embedding vectors, present when an equivalence matcher is selected
    pub vectors: Option<VectorTable>,
    /// Domain lexicon, present when the subsumption matcher is selected
    pub lexicon: Option<DomainLexicon>,
}

/// Load the resources required by `matchers`
pub fn load_resources(
    config: &ResourceConfig,
    matchers: &[MatcherKind],
    dimension: usize,
) -> Result<MatchingResources, PipelineError> {
    let mut resources = MatchingResources::default();

    if let Some(kind) = matchers.iter().find(|k| k.needs_vectors()) {
        let path = config.vectors.as_deref().ok_or_else(|| PipelineError::ResourceFailed {
            source: MatcherError::missing_resource(kind.name(), "vector table (--vectors)"),
        })?;
        let table = VectorTable::load(path, dimension)
            .with_context(|| format!("{} matcher", kind.name()))
            .map_err(|source| PipelineError::ResourceFailed { source })?;
        resources.vectors = Some(table);
    }

    if let Some(kind) = matchers.iter().find(|k| k.needs_lexicon()) {
        let path = config.lexicon.as_deref().ok_or_else(|| PipelineError::ResourceFailed {
            source: MatcherError::missing_resource(kind.name(), "lexicon (--lexicon)"),
        })?;
        let lexicon = DomainLexicon::load(path)
            .with_context(|| format!("{} matcher", kind.name()))
            .map_err(|source| PipelineError::ResourceFailed { source })?;
        resources.lexicon = Some(lexicon);
    }

    Ok(resources)
}
