//! Matcher invocation parameters.

use super::patterns::CandidateMerge;
use super::scoring::ConfidenceWeighting;
use super::vectors::DEFAULT_DIMENSION;
use serde::{Deserialize, Serialize};

/// Parameters shared by every matcher of one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchParams {
    /// Externally computed profile score of the ontology pair, in [0, 1]
    pub profile_score: f64,
    /// Logistic slope and weight range
    pub weighting: ConfidenceWeighting,
    /// Vector length required for a pair to be compared
    pub dimension: usize,
    /// Policy for definitions matching several patterns
    pub candidate_merge: CandidateMerge,
    /// Evaluate pairs on the rayon thread pool
    pub parallel: bool,
}

impl MatchParams {
    /// Balanced defaults: slope 5, weights in [0.5, 1.0]
    #[must_use]
    pub const fn balanced() -> Self {
        Self {
            profile_score: 1.0,
            weighting: ConfidenceWeighting::new(5, 0.5, 1.0),
            dimension: DEFAULT_DIMENSION,
            candidate_merge: CandidateMerge::Union,
            parallel: true,
        }
    }

    /// Steep curve and a narrow weight band; only strong evidence scores high
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            weighting: ConfidenceWeighting::new(12, 0.6, 0.9),
            ..Self::balanced()
        }
    }

    /// Shallow curve and a wide weight band
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            weighting: ConfidenceWeighting::new(3, 0.3, 1.0),
            ..Self::balanced()
        }
    }

    /// Create params from a preset name
    #[must_use]
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "balanced" | "default" => Some(Self::balanced()),
            "strict" => Some(Self::strict()),
            "lenient" | "permissive" => Some(Self::lenient()),
            _ => None,
        }
    }

    /// Set the profile score
    #[must_use]
    pub const fn with_profile_score(mut self, profile_score: f64) -> Self {
        self.profile_score = profile_score;
        self
    }

    /// Set the logistic slope and weight range
    #[must_use]
    pub const fn with_weighting(mut self, weighting: ConfidenceWeighting) -> Self {
        self.weighting = weighting;
        self
    }

    /// Set the expected vector dimensionality
    #[must_use]
    pub const fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Set the candidate merge policy
    #[must_use]
    pub const fn with_candidate_merge(mut self, merge: CandidateMerge) -> Self {
        self.candidate_merge = merge;
        self
    }

    /// Toggle parallel evaluation
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Weight derived from the profile score
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weighting.weight(self.profile_score)
    }

    /// Final confidence for a raw evidence value
    #[must_use]
    pub fn confidence(&self, raw: f64) -> f64 {
        self.weighting.confidence(raw, self.weight())
    }
}

impl Default for MatchParams {
    fn default() -> Self {
        Self::balanced()
    }
}
