//! Configuration types for onto-matchers runs.
//!
//! Provides structured configuration for matching, resource loading and
//! report output.

use super::defaults::DEFAULT_REPORT_THRESHOLD;
use crate::matching::{CandidateMerge, ConfidenceWeighting, MatchParams, MatcherKind};
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Matching configuration (profile score, weighting, matchers)
    pub matching: MatchingConfig,
    /// Matching resources (vector table, lexicon)
    pub resources: ResourceConfig,
    /// Output configuration (format, file, threshold)
    pub output: OutputConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the ontology profile score.
    pub const fn profile_score(mut self, score: f64) -> Self {
        self.config.matching.profile_score = score;
        self
    }

    /// Set the logistic slope.
    pub const fn slope(mut self, slope: u32) -> Self {
        self.config.matching.slope = slope;
        self
    }

    /// Set the weight range.
    pub const fn weight_range(mut self, range_min: f64, range_max: f64) -> Self {
        self.config.matching.range_min = range_min;
        self.config.matching.range_max = range_max;
        self
    }

    /// Select which matchers run.
    pub fn matchers(mut self, matchers: Vec<MatcherKind>) -> Self {
        self.config.matching.matchers = matchers;
        self
    }

    /// Set the vector table path.
    pub fn vectors(mut self, path: Option<PathBuf>) -> Self {
        self.config.resources.vectors = path;
        self
    }

    /// Set the lexicon path.
    pub fn lexicon(mut self, path: Option<PathBuf>) -> Self {
        self.config.resources.lexicon = path;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Set the report threshold.
    pub const fn threshold(mut self, threshold: f64) -> Self {
        self.config.output.threshold = threshold;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Set the expected vector dimensionality.
    pub const fn dimension(mut self, dimension: usize) -> Self {
        self.config.matching.dimension = dimension;
        self
    }

    /// Toggle parallel evaluation.
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.config.matching.parallel = parallel;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Matching Configuration
// ============================================================================

/// Scoring and matcher selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MatchingConfig {
    /// Profile score of the ontology pair (0.0-1.0)
    pub profile_score: f64,
    /// Logistic slope; 0 makes confidence linear in the raw value
    pub slope: u32,
    /// Weight assigned to a profile score of 0
    pub range_min: f64,
    /// Weight assigned to a profile score of 1
    pub range_max: f64,
    /// Expected vector dimensionality
    pub dimension: usize,
    /// How candidates from several enumeration patterns combine
    pub candidate_merge: CandidateMerge,
    /// Evaluate pairs in parallel
    pub parallel: bool,
    /// Matchers to run
    pub matchers: Vec<MatcherKind>,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        let params = MatchParams::balanced();
        Self {
            profile_score: params.profile_score,
            slope: params.weighting.slope,
            range_min: params.weighting.range_min,
            range_max: params.weighting.range_max,
            dimension: params.dimension,
            candidate_merge: params.candidate_merge,
            parallel: params.parallel,
            matchers: MatcherKind::ALL.to_vec(),
        }
    }
}

impl MatchingConfig {
    /// Convert to matcher invocation parameters.
    #[must_use]
    pub const fn to_params(&self) -> MatchParams {
        MatchParams {
            profile_score: self.profile_score,
            weighting: ConfidenceWeighting::new(self.slope, self.range_min, self.range_max),
            dimension: self.dimension,
            candidate_merge: self.candidate_merge,
            parallel: self.parallel,
        }
    }

    /// Copy weighting fields from a parameter preset.
    pub(crate) fn apply_params(&mut self, params: &MatchParams) {
        self.slope = params.weighting.slope;
        self.range_min = params.weighting.range_min;
        self.range_max = params.weighting.range_max;
    }
}

// ============================================================================
// Resource Configuration
// ============================================================================

/// Paths to the read-only resources the matchers consult.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ResourceConfig {
    /// Embedding vector table (text format, optional word2vec header)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vectors: Option<PathBuf>,
    /// Domain/meronym lexicon (YAML or JSON)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lexicon: Option<PathBuf>,
}

// ============================================================================
// Output Configuration
// ============================================================================

/// Report output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (stdout when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Cells below this confidence are left out of the report
    pub threshold: f64,
    /// Number of top cells listed per matcher in the summary
    pub summary_top: usize,
    /// Disable colored summary output
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Json,
            file: None,
            threshold: DEFAULT_REPORT_THRESHOLD,
            summary_top: 10,
            no_color: false,
        }
    }
}
