//! JSON report generator.

use super::{filtered, ReportConfig, ReportFormat, ReportGenerator};
use crate::error::Result;
use crate::model::{AlignmentResult, RelationCell};
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, results: &[AlignmentResult], config: &ReportConfig) -> Result<String> {
        let kept = filtered(results, config);
        let report = JsonAlignmentReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo {
                    name: env!("CARGO_PKG_NAME").to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
                generated_at: Utc::now().to_rfc3339(),
                source_path: config
                    .metadata
                    .source_path
                    .as_ref()
                    .map(|p| p.display().to_string()),
                target_path: config
                    .metadata
                    .target_path
                    .as_ref()
                    .map(|p| p.display().to_string()),
                profile_score: config.metadata.profile_score,
                threshold: config.threshold,
            },
            alignments: results
                .iter()
                .zip(&kept)
                .map(|(full, kept)| JsonAlignment {
                    matcher: &full.matcher,
                    source_ontology: &full.source_ontology,
                    target_ontology: &full.target_ontology,
                    fingerprint: format!("{:016x}", full.fingerprint()),
                    total_cells: full.len(),
                    evidence_cells: full.evidence_count(),
                    cells: kept.cells.iter().collect(),
                })
                .collect(),
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)?
        } else {
            serde_json::to_string(&report)?
        };
        Ok(json)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[derive(Serialize)]
struct JsonAlignmentReport<'a> {
    metadata: JsonReportMetadata,
    alignments: Vec<JsonAlignment<'a>>,
}

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    profile_score: Option<f64>,
    threshold: f64,
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}

#[derive(Serialize)]
struct JsonAlignment<'a> {
    matcher: &'a str,
    source_ontology: &'a str,
    target_ontology: &'a str,
    fingerprint: String,
    total_cells: usize,
    evidence_cells: usize,
    cells: Vec<&'a RelationCell>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::sample_results;

    #[test]
    fn test_json_report_structure() {
        let results = sample_results();
        let json = JsonReporter::new()
            .generate(&results, &ReportConfig::default())
            .expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["metadata"]["tool"]["name"], "onto-matchers");
        let alignments = value["alignments"].as_array().expect("array");
        assert_eq!(alignments.len(), 2);
        assert_eq!(alignments[0]["matcher"], "embedding-equivalence");
        assert_eq!(alignments[0]["cells"].as_array().map(Vec::len), Some(2));
        assert_eq!(alignments[1]["cells"][1]["relation"], "broader");
    }

    #[test]
    fn test_threshold_filters_cells_but_not_totals() {
        let results = sample_results();
        let config = ReportConfig::default().with_threshold(0.5);
        let json = JsonReporter::new().pretty(false).generate(&results, &config).expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["alignments"][0]["cells"].as_array().map(Vec::len), Some(1));
        assert_eq!(value["alignments"][0]["total_cells"], 2);
    }
}
