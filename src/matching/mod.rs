//! Concept matchers for ontology alignment.
//!
//! Three matchers share one scoring transform and one pairwise enumeration:
//!
//! - [`EmbeddingEquivalenceMatcher`]: cosine similarity of label vectors
//! - [`DefinitionEquivalenceMatcher`]: cosine similarity of label + definition vectors
//! - [`DefinitionSubsumptionMatcher`]: enumeration patterns in definitions,
//!   confirmed against a [`LexicalResource`]
//!
//! Every matcher returns one cell per (source, target) pair. Raw evidence is
//! turned into a confidence by [`ConfidenceWeighting`], which folds in the
//! externally supplied profile score.
//!
//! # Example
//!
//! ```ignore
//! use onto_matchers::matching::{
//!     EmbeddingEquivalenceMatcher, MatchParams, OntologyMatcher, VectorTable,
//! };
//!
//! let table = VectorTable::load(Path::new("vectors.txt"), 300)?;
//! let matcher = EmbeddingEquivalenceMatcher::new(&table);
//! let params = MatchParams::balanced().with_profile_score(0.8);
//! let alignment = matcher.match_ontologies(&source, &target, &params);
//! ```

mod config;
pub mod definition;
pub mod embedding;
pub mod lexicon;
pub mod patterns;
pub mod scoring;
pub mod subsumption;
pub mod text;
mod traits;
pub mod vectors;

pub use config::MatchParams;
pub use definition::DefinitionEquivalenceMatcher;
pub use embedding::EmbeddingEquivalenceMatcher;
pub use lexicon::{DomainLexicon, LexicalResource};
pub use patterns::{CandidateMerge, CandidateTermSet, SubsumptionPatternExtractor};
pub use scoring::{transform_profile_weight, weighted_sigmoid, ConfidenceWeighting};
pub use subsumption::DefinitionSubsumptionMatcher;
pub use traits::{MatcherKind, OntologyMatcher};
pub use vectors::{
    cosine_similarity, ResolutionMode, VectorSpaceBuilder, VectorTable, VectorTableStats,
};

use crate::model::RelationCell;
use rayon::prelude::*;

/// Evaluate `score` for every (source, target) pair.
///
/// Cells come back in pair-index order (`i * target.len() + j`) whether or
/// not the pairs were evaluated in parallel.
pub(crate) fn enumerate_pairs<S, T, F>(
    source: &[S],
    target: &[T],
    parallel: bool,
    score: F,
) -> Vec<RelationCell>
where
    S: Sync,
    T: Sync,
    F: Fn(usize, &S, &T) -> RelationCell + Sync,
{
    let width = target.len();
    let total = source.len() * width;
    if total == 0 {
        return Vec::new();
    }

    let cell_at = |index: usize| {
        let (i, j) = (index / width, index % width);
        score(index, &source[i], &target[j])
    };

    if parallel {
        (0..total).into_par_iter().map(cell_at).collect()
    } else {
        (0..total).map(cell_at).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Relation;

    #[test]
    fn test_enumerate_pairs_is_total_and_ordered() {
        let source = ["a", "b"];
        let target = ["x", "y", "z"];
        for parallel in [false, true] {
            let cells = enumerate_pairs(&source, &target, parallel, |index, s, t| {
                RelationCell::empty("m", index, *s, *t, Relation::None)
            });
            assert_eq!(cells.len(), 6);
            assert_eq!(cells[4].source, "b");
            assert_eq!(cells[4].target, "y");
            assert!(cells.iter().enumerate().all(|(i, c)| c.index == i));
        }
    }

    #[test]
    fn test_enumerate_pairs_empty_side() {
        let source: [&str; 0] = [];
        let cells = enumerate_pairs(&source, &["x"], true, |index, s, t| {
            RelationCell::empty("m", index, *s, *t, Relation::None)
        });
        assert!(cells.is_empty());
    }
}
