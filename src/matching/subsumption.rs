//! Definition subsumption matching.
//!
//! If the definition of a source concept enumerates the target's label
//! ("a vehicle ..., including cars"), the source is taken to be broader than
//! the target, and symmetrically for target definitions. A lexical resource
//! grades the evidence: a shared domain without a part-whole relation is
//! strong evidence, either condition alone is weaker evidence, and neither
//! condition rejects the candidate.

use super::lexicon::LexicalResource;
use super::patterns::{CandidateTermSet, SubsumptionPatternExtractor};
use super::{enumerate_pairs, MatchParams, MatcherKind, OntologyMatcher};
use crate::model::{AlignmentAccumulator, AlignmentResult, Concept, ConceptView, Relation, RelationCell};

/// Raw evidence for a candidate confirmed by domain and not a meronym.
pub const STRONG_EVIDENCE: f64 = 1.0;
/// Raw evidence for a candidate passing only one of the two checks.
pub const WEAK_EVIDENCE: f64 = 0.75;

/// Subsumption matcher over definition enumerations.
#[derive(Clone, Copy)]
pub struct DefinitionSubsumptionMatcher<'a> {
    lexicon: &'a dyn LexicalResource,
}

impl std::fmt::Debug for DefinitionSubsumptionMatcher<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefinitionSubsumptionMatcher").finish_non_exhaustive()
    }
}

impl<'a> DefinitionSubsumptionMatcher<'a> {
    /// Create a matcher consulting the given lexical resource
    #[must_use]
    pub fn new(lexicon: &'a dyn LexicalResource) -> Self {
        Self { lexicon }
    }

    /// Grade a candidate pair; `None` when the lexicon rejects it.
    #[must_use]
    pub fn evidence(&self, broader: &str, narrower: &str) -> Option<f64> {
        let same_domain = self.lexicon.same_domain(broader, narrower);
        let meronym = self.lexicon.is_meronym(broader, narrower);
        if same_domain && !meronym {
            Some(STRONG_EVIDENCE)
        } else if same_domain || !meronym {
            Some(WEAK_EVIDENCE)
        } else {
            None
        }
    }

    fn score_pair(
        &self,
        index: usize,
        source: &Concept,
        target: &Concept,
        source_candidates: &CandidateTermSet,
        target_candidates: &CandidateTermSet,
        params: &MatchParams,
    ) -> RelationCell {
        let name = self.name();
        let (relation, raw) = if source_candidates.mentions(&source.id, target.label()) {
            (Relation::Broader, self.evidence(source.label(), target.label()))
        } else if target_candidates.mentions(&target.id, source.label()) {
            (Relation::Narrower, self.evidence(target.label(), source.label()))
        } else {
            (Relation::None, None)
        };

        match raw {
            Some(raw) => RelationCell::new(
                name,
                index,
                &source.id,
                &target.id,
                relation,
                params.confidence(raw),
            ),
            None => {
                if relation != Relation::None {
                    tracing::debug!(
                        "Candidate {} {} {} rejected by lexicon",
                        source.id,
                        relation.symbol(),
                        target.id
                    );
                }
                RelationCell::empty(name, index, &source.id, &target.id, Relation::None)
            }
        }
    }
}

impl OntologyMatcher for DefinitionSubsumptionMatcher<'_> {
    fn kind(&self) -> MatcherKind {
        MatcherKind::Subsumption
    }

    fn match_concepts(
        &self,
        source_ontology: &str,
        target_ontology: &str,
        source: &[&Concept],
        target: &[&Concept],
        params: &MatchParams,
    ) -> AlignmentResult {
        let extractor = SubsumptionPatternExtractor::new(params.candidate_merge);
        let source_candidates = extractor.extract_candidates(source.iter().copied());
        let target_candidates = extractor.extract_candidates(target.iter().copied());
        tracing::debug!(
            "Pattern candidates: {} source concepts, {} target concepts",
            source_candidates.len(),
            target_candidates.len()
        );

        let cells = enumerate_pairs(source, target, params.parallel, |index, s, t| {
            self.score_pair(index, s, t, &source_candidates, &target_candidates, params)
        });

        let mut acc = AlignmentAccumulator::new(self.name(), source_ontology, target_ontology);
        acc.extend(cells);
        acc.finish()
    }
}
