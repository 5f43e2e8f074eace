//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable overview per matcher: cell counts,
//! relation breakdown and the highest-confidence cells.

use super::{filtered, ReportConfig, ReportFormat, ReportGenerator};
use crate::error::Result;
use crate::model::{AlignmentResult, Relation};
use std::fmt::Write;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn write_result(
        &self,
        out: &mut String,
        full: &AlignmentResult,
        kept: &AlignmentResult,
        config: &ReportConfig,
    ) -> std::fmt::Result {
        writeln!(out, "{}", self.color(&full.matcher, "bold"))?;
        writeln!(
            out,
            "  {} -> {}",
            full.source_ontology, full.target_ontology
        )?;
        writeln!(
            out,
            "  cells: {} total, {} with evidence, {} at or above {:.2}",
            full.len(),
            full.evidence_count(),
            kept.len(),
            config.threshold
        )?;

        let breakdown: Vec<String> = [
            Relation::Equivalence,
            Relation::Broader,
            Relation::Narrower,
        ]
        .iter()
        .map(|relation| {
            let count = full
                .with_relation(*relation)
                .filter(|c| c.has_evidence())
                .count();
            format!("{} {}", relation.symbol(), count)
        })
        .collect();
        writeln!(out, "  relations: {}", breakdown.join(", "))?;
        writeln!(
            out,
            "  {}",
            self.color(&format!("fingerprint: {:016x}", full.fingerprint()), "dim")
        )?;

        let top: Vec<_> = kept
            .top(config.summary_top)
            .into_iter()
            .filter(|c| c.has_evidence())
            .collect();
        if !top.is_empty() {
            writeln!(out, "  top cells:")?;
            for cell in top {
                let confidence = format!("{:.3}", cell.confidence);
                let colored = if cell.confidence >= 0.75 {
                    self.color(&confidence, "green")
                } else if cell.confidence >= 0.5 {
                    self.color(&confidence, "yellow")
                } else {
                    confidence
                };
                writeln!(
                    out,
                    "    {} {} {}  {}",
                    truncate(&cell.source, 40),
                    self.color(cell.relation.symbol(), "cyan"),
                    truncate(&cell.target, 40),
                    colored
                )?;
            }
        }
        Ok(())
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(&self, results: &[AlignmentResult], config: &ReportConfig) -> Result<String> {
        let mut out = String::new();
        let kept = filtered(results, config);
        for (i, (full, kept)) in results.iter().zip(&kept).enumerate() {
            if i > 0 {
                out.push('\n');
            }
            self.write_result(&mut out, full, kept, config)?;
        }
        if results.is_empty() {
            out.push_str("No matchers were run.\n");
        }
        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

/// Truncate to at most `max_len` characters, marking the cut with `...`
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::sample_results;

    #[test]
    fn test_summary_lists_each_matcher() {
        let summary = SummaryReporter::new()
            .no_color()
            .generate(&sample_results(), &ReportConfig::default())
            .expect("summary");
        assert!(summary.contains("embedding-equivalence"));
        assert!(summary.contains("definition-subsumption"));
        assert!(summary.contains("cells: 2 total, 2 with evidence"));
        assert!(summary.contains("Car > Train  0.640"));
        assert!(!summary.contains('\x1b'));
    }

    #[test]
    fn test_summary_without_results() {
        let summary = SummaryReporter::new()
            .generate(&[], &ReportConfig::default())
            .expect("summary");
        assert_eq!(summary, "No matchers were run.\n");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a-very-long-concept-name", 10), "a-very-...");
    }
}
