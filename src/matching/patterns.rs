//! Lexico-syntactic pattern extraction from concept definitions.
//!
//! Phrases such as "including" or "such as" announce an enumeration of
//! examples. The sentence fragment after the phrase is cleaned, tokenized and
//! lemmatized into candidate terms for the concept.

use super::text;
use crate::model::ConceptView;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Enumeration phrases, in the order they are applied.
pub const DEFAULT_PATTERNS: &[&str] = &["including", "includes", "e.g.", "such as", "for example"];

/// What happens when several patterns match the same definition.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    schemars::JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum CandidateMerge {
    /// Concatenate candidates of every matching pattern, dropping repeats
    #[default]
    Union,
    /// Keep only the candidates of the last matching pattern
    LastMatchWins,
}

/// Candidate terms per concept, keyed by concept identifier.
///
/// Concepts whose definition matched no pattern have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateTermSet {
    terms: IndexMap<String, Vec<String>>,
}

impl CandidateTermSet {
    /// Candidates of the concept with identifier `id`
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&[String]> {
        self.terms.get(id).map(Vec::as_slice)
    }

    /// Whether any candidate of concept `id` equals `term` (case-insensitive)
    #[must_use]
    pub fn mentions(&self, id: &str, term: &str) -> bool {
        let term_lower = term.to_lowercase();
        let term_lemma = text::normalize_term(term);
        self.get(id).is_some_and(|candidates| {
            candidates
                .iter()
                .any(|c| c.eq_ignore_ascii_case(&term_lower) || *c == term_lemma)
        })
    }

    /// Number of concepts with candidates
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether no concept produced candidates
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over (concept id, candidates)
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.terms.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Extracts candidate terms from definitions.
#[derive(Debug, Clone)]
pub struct SubsumptionPatternExtractor {
    patterns: Vec<String>,
    merge: CandidateMerge,
}

impl Default for SubsumptionPatternExtractor {
    fn default() -> Self {
        Self::new(CandidateMerge::default())
    }
}

impl SubsumptionPatternExtractor {
    /// Extractor over [`DEFAULT_PATTERNS`]
    #[must_use]
    pub fn new(merge: CandidateMerge) -> Self {
        Self {
            patterns: DEFAULT_PATTERNS.iter().map(|p| (*p).to_string()).collect(),
            merge,
        }
    }

    /// Extractor over a custom ordered pattern list
    #[must_use]
    pub fn with_patterns<I, S>(patterns: I, merge: CandidateMerge) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(|p| p.into().to_lowercase())
                .collect(),
            merge,
        }
    }

    /// Patterns in application order
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Candidate terms following one pattern, or `None` if it does not occur.
    #[must_use]
    pub fn extract_for_pattern(definition: &str, pattern: &str) -> Option<Vec<String>> {
        let lowered = definition.to_lowercase();
        let start = lowered.find(pattern)? + pattern.len();
        let extract = &lowered[start..];
        let sentence = extract.find('.').map_or(extract, |end| &extract[..end]);
        let refined = text::remove_stopwords_and_digits(sentence);
        Some(text::tokenize_and_lemmatize(&refined))
    }

    /// Candidate terms of one concept, or `None` if no pattern matched.
    #[must_use]
    pub fn extract<C: ConceptView + ?Sized>(&self, concept: &C) -> Option<Vec<String>> {
        let mut result: Option<Vec<String>> = None;
        for pattern in &self.patterns {
            let Some(tokens) = Self::extract_for_pattern(concept.definition(), pattern) else {
                continue;
            };
            match (self.merge, result.as_mut()) {
                (CandidateMerge::Union, Some(existing)) => {
                    for token in tokens {
                        if !existing.contains(&token) {
                            existing.push(token);
                        }
                    }
                }
                (CandidateMerge::Union, None) => {
                    let mut deduped: Vec<String> = Vec::with_capacity(tokens.len());
                    for token in tokens {
                        if !deduped.contains(&token) {
                            deduped.push(token);
                        }
                    }
                    result = Some(deduped);
                }
                (CandidateMerge::LastMatchWins, _) => result = Some(tokens),
            }
        }
        result
    }

    /// Candidate terms for every concept of an ontology.
    #[must_use]
    pub fn extract_candidates<'c, C, I>(&self, concepts: I) -> CandidateTermSet
    where
        C: ConceptView + ?Sized + 'c,
        I: IntoIterator<Item = &'c C>,
    {
        let mut set = CandidateTermSet::default();
        for concept in concepts {
            if let Some(candidates) = self.extract(concept) {
                tracing::debug!(
                    "Definition of '{}' yields candidates {:?}",
                    concept.id(),
                    candidates
                );
                set.terms.insert(concept.id().to_string(), candidates);
            }
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Concept;

    fn vehicle() -> Concept {
        Concept::new("Vehicle")
            .with_definition("A vehicle is a mode of transport, including cars, trucks and buses.")
    }

    #[test]
    fn test_including_pattern() {
        let extractor = SubsumptionPatternExtractor::default();
        assert_eq!(
            extractor.extract(&vehicle()),
            Some(vec!["car".to_string(), "truck".to_string(), "bus".to_string()])
        );
    }

    #[test]
    fn test_only_following_sentence_is_used() {
        let tokens = SubsumptionPatternExtractor::extract_for_pattern(
            "Fruit such as apples. Vegetables are different.",
            "such as",
        );
        assert_eq!(tokens, Some(vec!["apple".to_string()]));
    }

    #[test]
    fn test_no_pattern_no_entry() {
        let extractor = SubsumptionPatternExtractor::default();
        let concept = Concept::new("Car").with_definition("A road vehicle with four wheels.");
        assert_eq!(extractor.extract(&concept), None);
        let set = extractor.extract_candidates([&concept]);
        assert!(set.is_empty());
    }

    #[test]
    fn test_empty_definition() {
        let extractor = SubsumptionPatternExtractor::default();
        assert_eq!(extractor.extract(&Concept::new("Thing")), None);
    }

    #[test]
    fn test_digits_removed() {
        let tokens =
            SubsumptionPatternExtractor::extract_for_pattern("Ships, e.g. 3 ferries", "e.g.");
        assert_eq!(tokens, Some(vec!["ferry".to_string()]));
    }

    #[test]
    fn test_union_merge() {
        let concept = Concept::new("Animal")
            .with_definition("An animal, including dogs. Other examples: for example cats.");
        let extractor = SubsumptionPatternExtractor::new(CandidateMerge::Union);
        assert_eq!(
            extractor.extract(&concept),
            Some(vec!["dog".to_string(), "cat".to_string()])
        );
    }

    #[test]
    fn test_last_match_wins_merge() {
        let concept = Concept::new("Animal")
            .with_definition("An animal, including dogs. Other examples: for example cats.");
        let extractor = SubsumptionPatternExtractor::new(CandidateMerge::LastMatchWins);
        assert_eq!(extractor.extract(&concept), Some(vec!["cat".to_string()]));
    }

    #[test]
    fn test_candidate_set_mentions() {
        let extractor = SubsumptionPatternExtractor::default();
        let concept = vehicle();
        let set = extractor.extract_candidates([&concept]);
        assert!(set.mentions("Vehicle", "Car"));
        assert!(set.mentions("Vehicle", "Buses"));
        assert!(!set.mentions("Vehicle", "Bicycle"));
        assert!(!set.mentions("Car", "vehicle"));
    }

    #[test]
    fn test_candidates_keyed_by_identifier() {
        let extractor = SubsumptionPatternExtractor::default();
        let transport = Concept::new("VehicleA")
            .with_label("Vehicle")
            .with_definition("Transport, including cars.");
        let storage = Concept::new("VehicleB")
            .with_label("Vehicle")
            .with_definition("Storage, including boxes.");
        let set = extractor.extract_candidates([&transport, &storage]);
        assert_eq!(set.len(), 2);
        assert!(set.mentions("VehicleA", "car"));
        assert!(!set.mentions("VehicleA", "box"));
        assert!(set.mentions("VehicleB", "box"));
    }
}
