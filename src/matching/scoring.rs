//! Confidence weighting.
//!
//! Folds an externally computed ontology profile score into a matcher's raw
//! evidence value. The profile score is first rescaled into a weight range,
//! then the raw value passes through a logistic curve centred on 0.5 and is
//! multiplied by that weight.
//!
//! The logistic curve is renormalised so that it passes through (0, 0) and
//! (1, 1): zero evidence always yields zero confidence, whatever the weight,
//! and full evidence yields exactly the weight.

use serde::{Deserialize, Serialize};

/// Midpoint of the raw-score domain the logistic curve is centred on.
pub const SIGMOID_MIDPOINT: f64 = 0.5;

/// Linearly rescale a profile score from [0, 1] into `[range_min, range_max]`.
///
/// Scores outside [0, 1] are clamped first.
#[must_use]
pub fn transform_profile_weight(profile_score: f64, range_min: f64, range_max: f64) -> f64 {
    let score = if profile_score.is_nan() {
        0.0
    } else {
        profile_score.clamp(0.0, 1.0)
    };
    (range_max - range_min).mul_add(score, range_min)
}

/// Standard logistic function
#[must_use]
pub fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Weighted logistic transform of a raw evidence value.
///
/// `raw` is clamped to [0, 1]; negative similarities count as no evidence.
/// A `slope` of zero degenerates to the linear map `weight * raw`.
#[must_use]
pub fn weighted_sigmoid(slope: u32, raw: f64, weight: f64) -> f64 {
    if raw.is_nan() || raw <= 0.0 || weight.is_nan() || weight <= 0.0 {
        return 0.0;
    }
    let raw = raw.min(1.0);
    let shaped = if slope == 0 {
        raw
    } else {
        let s = f64::from(slope);
        let floor = logistic(-s * SIGMOID_MIDPOINT);
        let ceiling = logistic(s * (1.0 - SIGMOID_MIDPOINT));
        (logistic(s * (raw - SIGMOID_MIDPOINT)) - floor) / (ceiling - floor)
    };
    (shaped * weight).clamp(0.0, 1.0)
}

/// Scoring parameters shared by all matchers of one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceWeighting {
    /// Logistic steepness
    pub slope: u32,
    /// Weight assigned to a profile score of 0
    pub range_min: f64,
    /// Weight assigned to a profile score of 1
    pub range_max: f64,
}

impl ConfidenceWeighting {
    /// Create weighting parameters
    #[must_use]
    pub const fn new(slope: u32, range_min: f64, range_max: f64) -> Self {
        Self {
            slope,
            range_min,
            range_max,
        }
    }

    /// Weight derived from a profile score
    #[must_use]
    pub fn weight(&self, profile_score: f64) -> f64 {
        transform_profile_weight(profile_score, self.range_min, self.range_max)
    }

    /// Final confidence for a raw evidence value under a given weight
    #[must_use]
    pub fn confidence(&self, raw: f64, weight: f64) -> f64 {
        weighted_sigmoid(self.slope, raw, weight)
    }

    /// Convenience: confidence straight from a profile score
    #[must_use]
    pub fn score(&self, raw: f64, profile_score: f64) -> f64 {
        self.confidence(raw, self.weight(profile_score))
    }
}

impl Default for ConfidenceWeighting {
    fn default() -> Self {
        Self::new(5, 0.5, 1.0)
    }
}
