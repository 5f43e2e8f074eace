//! Matching stage: run every selected matcher over the ontology pair.

use super::resources::MatchingResources;
use super::PipelineError;
use crate::error::MatcherError;
use crate::matching::{
    DefinitionEquivalenceMatcher, DefinitionSubsumptionMatcher, EmbeddingEquivalenceMatcher,
    MatchParams, MatcherKind, OntologyMatcher,
};
use crate::model::{AlignmentResult, Ontology};
use std::time::Instant;

/// Build a matcher of the given kind over the loaded resources
pub fn build_matcher<'a>(
    kind: MatcherKind,
    resources: &'a MatchingResources,
) -> Result<Box<dyn OntologyMatcher + 'a>, PipelineError> {
    let missing = |resource: &str| PipelineError::ResourceFailed {
        source: MatcherError::missing_resource(kind.name(), resource),
    };
    let matcher: Box<dyn OntologyMatcher + 'a> = match kind {
        MatcherKind::Embedding => Box::new(EmbeddingEquivalenceMatcher::new(
            resources.vectors.as_ref().ok_or_else(|| missing("vector table"))?,
        )),
        MatcherKind::Definition => Box::new(DefinitionEquivalenceMatcher::new(
            resources.vectors.as_ref().ok_or_else(|| missing("vector table"))?,
        )),
        MatcherKind::Subsumption => Box::new(DefinitionSubsumptionMatcher::new(
            resources.lexicon.as_ref().ok_or_else(|| missing("lexicon"))?,
        )),
    };
    Ok(matcher)
}

/// Run the selected matchers, one complete result per matcher
pub fn run_matchers(
    source: &Ontology,
    target: &Ontology,
    matchers: &[MatcherKind],
    resources: &MatchingResources,
    params: &MatchParams,
) -> Result<Vec<AlignmentResult>, PipelineError> {
    let built = matchers
        .iter()
        .map(|kind| build_matcher(*kind, resources))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!(
        "Matching {} x {} concepts with {} matcher(s), weight {:.3}",
        source.concept_count(),
        target.concept_count(),
        built.len(),
        params.weight()
    );

    Ok(built
        .iter()
        .map(|matcher| {
            let start = Instant::now();
            let mut result = matcher.match_ontologies(source, target, params);
            result.normalise();
            tracing::debug!("{} finished in {:?}", matcher.name(), start.elapsed());
            result
        })
        .collect())
}
