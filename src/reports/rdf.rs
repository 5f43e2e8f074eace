//! Alignment format (RDF/XML) report generator.
//!
//! Each matcher result becomes one `<Alignment>` element whose `<map>` holds
//! a `<Cell>` per relation cell with `<entity1>`, `<entity2>`, `<relation>`
//! and `<measure>`.

use super::escape::escape_xml;
use super::{filtered, EntityIris, ReportConfig, ReportFormat, ReportGenerator};
use crate::error::Result;
use crate::model::AlignmentResult;
use std::fmt::Write;

const ALIGN_NS: &str = "http://knowledgeweb.semanticweb.org/heterogeneity/alignment#";
const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";

/// Alignment format reporter
pub struct AlignmentRdfReporter;

impl AlignmentRdfReporter {
    /// Create a new reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn write_ontology(out: &mut String, tag: &str, iri: &str) -> std::fmt::Result {
        let iri = escape_xml(iri);
        writeln!(out, "    <{tag}>")?;
        writeln!(out, "      <Ontology rdf:about=\"{iri}\">")?;
        writeln!(out, "        <location>{iri}</location>")?;
        writeln!(out, "      </Ontology>")?;
        writeln!(out, "    </{tag}>")
    }

    fn write_alignment(
        out: &mut String,
        result: &AlignmentResult,
        entities: &EntityIris,
    ) -> std::fmt::Result {
        writeln!(out, "  <Alignment>")?;
        writeln!(out, "    <xml>yes</xml>")?;
        writeln!(out, "    <level>0</level>")?;
        writeln!(out, "    <type>**</type>")?;
        writeln!(out, "    <method>{}</method>", escape_xml(&result.matcher))?;
        Self::write_ontology(out, "onto1", &result.source_ontology)?;
        Self::write_ontology(out, "onto2", &result.target_ontology)?;

        for cell in result {
            writeln!(out, "    <map>")?;
            writeln!(out, "      <Cell rdf:about=\"#{}\">", escape_xml(&cell.id))?;
            writeln!(
                out,
                "        <entity1 rdf:resource=\"{}\"/>",
                escape_xml(&entities.resolve(&result.source_ontology, &cell.source))
            )?;
            writeln!(
                out,
                "        <entity2 rdf:resource=\"{}\"/>",
                escape_xml(&entities.resolve(&result.target_ontology, &cell.target))
            )?;
            writeln!(
                out,
                "        <relation>{}</relation>",
                escape_xml(cell.relation.symbol())
            )?;
            writeln!(
                out,
                "        <measure rdf:datatype=\"{XSD_NS}float\">{}</measure>",
                cell.confidence
            )?;
            writeln!(out, "      </Cell>")?;
            writeln!(out, "    </map>")?;
        }

        writeln!(out, "  </Alignment>")
    }
}

impl Default for AlignmentRdfReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for AlignmentRdfReporter {
    fn generate(&self, results: &[AlignmentResult], config: &ReportConfig) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "<?xml version=\"1.0\" encoding=\"utf-8\" standalone=\"no\"?>")?;
        writeln!(
            out,
            "<rdf:RDF xmlns=\"{ALIGN_NS}\" xmlns:rdf=\"{RDF_NS}\" xmlns:xsd=\"{XSD_NS}\" xmlns:align=\"{ALIGN_NS}\">"
        )?;
        for result in &filtered(results, config) {
            Self::write_alignment(&mut out, result, &config.entities)?;
        }
        writeln!(out, "</rdf:RDF>")?;
        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Rdf
    }
}
