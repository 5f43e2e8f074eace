//! Pipeline orchestration for alignment runs.
//!
//! This module provides the parse → load resources → match → report
//! workflow shared by the CLI command handlers. Resources are loaded before
//! any matcher runs, so a run either fails up front or produces a complete
//! result for every selected matcher.

mod match_stage;
mod output;
mod parse;
mod report_stage;
mod resources;

pub use match_stage::{build_matcher, run_matchers};
pub use output::{should_use_color, write_output, OutputTarget};
pub use parse::{load_ontology_pair, parse_ontology_with_context};
pub use report_stage::output_report;
pub use resources::{load_resources, MatchingResources};

use crate::error::MatcherError;

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or parse an ontology document
    #[error("Parse failed for {path}: {source}")]
    ParseFailed {
        path: String,
        #[source]
        source: MatcherError,
    },

    /// A vector table or lexicon could not be loaded, or was not supplied
    #[error("Resource loading failed: {source}")]
    ResourceFailed {
        #[source]
        source: MatcherError,
    },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

impl PipelineError {
    /// Process exit code for this failure
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::ParseFailed { .. } => exit_codes::ONTOLOGY_ERROR,
            Self::ResourceFailed { .. } => exit_codes::RESOURCE_ERROR,
            Self::ReportFailed { .. } => exit_codes::ERROR,
        }
    }
}

/// Exit codes for scripted use
pub mod exit_codes {
    /// Alignment completed
    pub const SUCCESS: i32 = 0;
    /// An unexpected error occurred
    pub const ERROR: i32 = 1;
    /// A matching resource was missing or unusable
    pub const RESOURCE_ERROR: i32 = 2;
    /// An ontology document could not be parsed
    pub const ONTOLOGY_ERROR: i32 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::ERROR, 1);
        assert_eq!(exit_codes::RESOURCE_ERROR, 2);
        assert_eq!(exit_codes::ONTOLOGY_ERROR, 3);
    }

    #[test]
    fn test_pipeline_error_exit_codes() {
        let parse = PipelineError::ParseFailed {
            path: "a.owl".to_string(),
            source: MatcherError::unknown_format("a.owl"),
        };
        assert_eq!(parse.exit_code(), exit_codes::ONTOLOGY_ERROR);

        let resource = PipelineError::ResourceFailed {
            source: MatcherError::missing_resource("embedding-equivalence", "vector table"),
        };
        assert_eq!(resource.exit_code(), exit_codes::RESOURCE_ERROR);
    }
}
