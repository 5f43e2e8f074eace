//! Report generation for alignment results.
//!
//! This module provides several output formats for the cells of a run:
//! - JSON: Structured data for programmatic integration
//! - RDF: the Alignment format consumed by ontology-alignment toolchains
//! - Summary: Compact per-matcher overview for the terminal
//! - TSV: One cell per line for spreadsheets and shell pipelines
//!
//! Every generator receives the complete results of all matchers of a run
//! and applies the configured confidence threshold itself.

pub mod escape;
mod json;
mod rdf;
mod summary;
mod tsv;
mod types;

pub use json::JsonReporter;
pub use rdf::AlignmentRdfReporter;
pub use summary::SummaryReporter;
pub use tsv::TsvReporter;
pub use types::{EntityIris, ReportConfig, ReportFormat, ReportMetadata};

use crate::error::Result;
use crate::model::AlignmentResult;
use std::io::Write;

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report for the results of one run
    fn generate(&self, results: &[AlignmentResult], config: &ReportConfig) -> Result<String>;

    /// Write report to a writer
    fn write_report(
        &self,
        results: &[AlignmentResult],
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let report = self.generate(results, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(format: ReportFormat, color: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Rdf => Box::new(AlignmentRdfReporter::new()),
        ReportFormat::Summary => {
            let reporter = SummaryReporter::new();
            Box::new(if color { reporter } else { reporter.no_color() })
        }
        ReportFormat::Tsv => Box::new(TsvReporter::new()),
    }
}

/// Apply the report threshold to every result
pub(crate) fn filtered(results: &[AlignmentResult], config: &ReportConfig) -> Vec<AlignmentResult> {
    results
        .iter()
        .map(|result| result.retain_above(config.threshold))
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::model::{AlignmentAccumulator, AlignmentResult, Relation, RelationCell};

    pub fn sample_results() -> Vec<AlignmentResult> {
        let mut eq = AlignmentAccumulator::new(
            "embedding-equivalence",
            "http://example.org/vehicles",
            "http://example.org/transport",
        );
        eq.push(RelationCell::new("embedding-equivalence", 0, "Car", "Automobile", Relation::Equivalence, 0.91));
        eq.push(RelationCell::new("embedding-equivalence", 1, "Car", "Train", Relation::Equivalence, 0.12));

        let mut sub = AlignmentAccumulator::new(
            "definition-subsumption",
            "http://example.org/vehicles",
            "http://example.org/transport",
        );
        sub.push(RelationCell::new("definition-subsumption", 0, "Car", "Automobile", Relation::None, 0.0));
        sub.push(RelationCell::new("definition-subsumption", 1, "Car", "Train", Relation::Broader, 0.64));

        vec![eq.finish(), sub.finish()]
    }
}
