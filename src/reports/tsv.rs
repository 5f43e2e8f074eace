//! TSV report generator.

use super::escape::escape_tsv;
use super::{filtered, ReportConfig, ReportFormat, ReportGenerator};
use crate::error::Result;
use crate::model::AlignmentResult;
use std::fmt::Write;

/// TSV reporter: one line per cell with a header row
pub struct TsvReporter;

impl TsvReporter {
    /// Create a new TSV reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TsvReporter {
    fn generate(&self, results: &[AlignmentResult], config: &ReportConfig) -> Result<String> {
        let mut out = String::from("matcher\tcell\tsource\ttarget\trelation\tconfidence\n");
        for result in &filtered(results, config) {
            for cell in result {
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}\t{}\t{:.6}",
                    escape_tsv(&result.matcher),
                    escape_tsv(&cell.id),
                    escape_tsv(&cell.source),
                    escape_tsv(&cell.target),
                    cell.relation.symbol(),
                    cell.confidence
                )?;
            }
        }
        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Tsv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::sample_results;

    #[test]
    fn test_tsv_rows() {
        let tsv = TsvReporter::new()
            .generate(&sample_results(), &ReportConfig::default())
            .expect("tsv");
        let lines: Vec<_> = tsv.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("matcher\t"));
        assert_eq!(
            lines[4],
            "definition-subsumption\tdefinition-subsumption-1\tCar\tTrain\t>\t0.640000"
        );
    }
}
