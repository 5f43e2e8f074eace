//! Match command handler.
//!
//! Implements the `match` subcommand: align two ontologies with the selected
//! matchers and write the report.

use crate::config::{AppConfig, ConfigPreset, Validatable};
use crate::matching::{CandidateMerge, MatcherKind};
use crate::pipeline::{
    exit_codes, load_ontology_pair, load_resources, output_report, run_matchers, PipelineError,
};
use crate::reports::{EntityIris, ReportConfig, ReportFormat};
use crate::error::MatcherError;
use anyhow::Result;
use std::path::PathBuf;

/// Input documents of a match run
#[derive(Debug, Clone)]
pub struct MatchPaths {
    /// Source ontology document
    pub source: PathBuf,
    /// Target ontology document
    pub target: PathBuf,
}

/// Command-line values layered over the file configuration.
///
/// `None` (or an empty list) leaves the configured value untouched.
#[derive(Debug, Clone, Default)]
pub struct MatchOverrides {
    /// Weighting preset, applied before explicit values
    pub preset: Option<ConfigPreset>,
    /// Matchers to run
    pub matchers: Vec<MatcherKind>,
    /// Vector table path
    pub vectors: Option<PathBuf>,
    /// Lexicon path
    pub lexicon: Option<PathBuf>,
    /// Ontology profile score
    pub profile_score: Option<f64>,
    /// Logistic slope
    pub slope: Option<u32>,
    /// Lower weight bound
    pub range_min: Option<f64>,
    /// Upper weight bound
    pub range_max: Option<f64>,
    /// Expected vector dimensionality
    pub dimension: Option<usize>,
    /// Candidate merge policy
    pub candidate_merge: Option<CandidateMerge>,
    /// Report confidence threshold
    pub threshold: Option<f64>,
    /// Report format
    pub format: Option<ReportFormat>,
    /// Report file
    pub output_file: Option<PathBuf>,
    /// Top cells per matcher in the summary
    pub summary_top: Option<usize>,
    /// Disable parallel evaluation
    pub sequential: bool,
    /// Disable colored output
    pub no_color: bool,
}

impl MatchOverrides {
    /// Apply the overrides; a preset is applied first so explicit values win.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(preset) = self.preset {
            config.matching.apply_params(&preset.params());
        }
        if !self.matchers.is_empty() {
            config.matching.matchers.clone_from(&self.matchers);
        }
        if self.vectors.is_some() {
            config.resources.vectors.clone_from(&self.vectors);
        }
        if self.lexicon.is_some() {
            config.resources.lexicon.clone_from(&self.lexicon);
        }
        if let Some(score) = self.profile_score {
            config.matching.profile_score = score;
        }
        if let Some(slope) = self.slope {
            config.matching.slope = slope;
        }
        if let Some(range_min) = self.range_min {
            config.matching.range_min = range_min;
        }
        if let Some(range_max) = self.range_max {
            config.matching.range_max = range_max;
        }
        if let Some(dimension) = self.dimension {
            config.matching.dimension = dimension;
        }
        if let Some(merge) = self.candidate_merge {
            config.matching.candidate_merge = merge;
        }
        if let Some(threshold) = self.threshold {
            config.output.threshold = threshold;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if self.output_file.is_some() {
            config.output.file.clone_from(&self.output_file);
        }
        if let Some(top) = self.summary_top {
            config.output.summary_top = top;
        }
        if self.sequential {
            config.matching.parallel = false;
        }
        if self.no_color {
            config.output.no_color = true;
        }
    }
}

/// Run the match command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_match(config: &AppConfig, paths: &MatchPaths) -> Result<i32> {
    let errors = config.validate();
    if !errors.is_empty() {
        let list: Vec<String> = errors.iter().map(ToString::to_string).collect();
        return Err(MatcherError::validation(list.join("; ")).into());
    }

    match align(config, paths) {
        Ok(()) => Ok(exit_codes::SUCCESS),
        Err(PipelineError::ReportFailed { source }) => Err(source),
        Err(err) => {
            tracing::error!("{}", err);
            Ok(err.exit_code())
        }
    }
}

fn align(config: &AppConfig, paths: &MatchPaths) -> std::result::Result<(), PipelineError> {
    let matchers = &config.matching.matchers;
    let params = config.matching.to_params();

    let (source, target) = load_ontology_pair(&paths.source, &paths.target)?;
    let resources = load_resources(&config.resources, matchers, params.dimension)?;
    let results = run_matchers(&source, &target, matchers, &resources, &params)?;

    let mut report_config = ReportConfig::default()
        .with_threshold(config.output.threshold)
        .with_summary_top(config.output.summary_top)
        .with_paths(Some(paths.source.clone()), Some(paths.target.clone()))
        .with_entities(EntityIris::from_ontologies([&source, &target]));
    report_config.metadata.profile_score = Some(params.profile_score);

    output_report(&config.output, &report_config, &results)
}
