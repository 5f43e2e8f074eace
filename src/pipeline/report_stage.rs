//! Report generation and output stage.

use super::output::{should_use_color, write_output, OutputTarget};
use super::PipelineError;
use crate::config::OutputConfig;
use crate::model::AlignmentResult;
use crate::reports::{create_reporter_with_options, ReportConfig};

/// Render the results in the configured format and write them out
pub fn output_report(
    output: &OutputConfig,
    report_config: &ReportConfig,
    results: &[AlignmentResult],
) -> Result<(), PipelineError> {
    let target = OutputTarget::from_option(output.file.clone());
    let color = should_use_color(output.no_color, &target);
    let reporter = create_reporter_with_options(output.format, color);

    let content = reporter
        .generate(results, report_config)
        .map_err(|e| PipelineError::ReportFailed { source: e.into() })?;
    write_output(&content, &target).map_err(|source| PipelineError::ReportFailed { source })
}
