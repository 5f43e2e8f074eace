//! **Concept matchers for ontology alignment.**
//!
//! `onto-matchers` compares the concepts (classes) of two independently
//! authored ontologies and produces scored semantic relations between every
//! source/target pair. It is meant to be one matcher component of a larger
//! alignment pipeline: each matcher returns a complete result set that the
//! caller combines with the output of other matchers.
//!
//! ## Matchers
//!
//! - **Embedding equivalence**: cosine similarity of pre-trained label vectors.
//! - **Definition equivalence**: the same, over vectors that also carry the
//!   concept's definition text.
//! - **Definition subsumption**: lexico-syntactic enumeration patterns
//!   ("including", "such as", ...) in definitions, confirmed against a
//!   domain/meronym lexicon.
//!
//! Every raw similarity or evidence value passes through one confidence
//! transform that folds in an externally computed ontology *profile score*.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`Concept`], [`Ontology`], [`RelationCell`] and [`AlignmentResult`].
//! - **[`parsers`]**: OWL RDF/XML and JSON/YAML concept documents.
//! - **[`matching`]**: the three matchers, the vector table, the lexicon and
//!   the scoring transform.
//! - **[`pipeline`]**: parse → load resources → match → report orchestration.
//! - **[`reports`]**: JSON, Alignment-format RDF/XML, summary and TSV output.
//! - **[`config`]**: typed configuration, presets and YAML config files.
//!
//! ## Getting Started
//!
//! ```no_run
//! use std::path::Path;
//! use onto_matchers::{parse_ontology, EmbeddingEquivalenceMatcher, MatchParams, OntologyMatcher, VectorTable};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = parse_ontology(Path::new("vehicles.owl"))?;
//!     let target = parse_ontology(Path::new("transport.owl"))?;
//!     let table = VectorTable::load(Path::new("vectors.txt"), 300)?;
//!
//!     let params = MatchParams::balanced().with_profile_score(0.8);
//!     let alignment = EmbeddingEquivalenceMatcher::new(&table)
//!         .match_ontologies(&source, &target, &params);
//!
//!     for cell in alignment.top(5) {
//!         println!("{} {} {} {:.3}", cell.source, cell.relation.symbol(), cell.target, cell.confidence);
//!     }
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::struct_excessive_bools,
    clippy::module_name_repetitions,
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod matching;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset, MatchingConfig, OutputConfig};
pub use config::{ConfigError, ResourceConfig, Validatable};
pub use error::{ErrorContext, MatcherError, Result};
pub use matching::{
    CandidateMerge, ConfidenceWeighting, DefinitionEquivalenceMatcher,
    DefinitionSubsumptionMatcher, DomainLexicon, EmbeddingEquivalenceMatcher, LexicalResource,
    MatchParams, MatcherKind, OntologyMatcher, VectorTable,
};
pub use model::{
    AlignmentAccumulator, AlignmentResult, Concept, ConceptView, Ontology, Relation, RelationCell,
};
pub use parsers::{parse_ontology, parse_ontology_str, OntologyParser};
pub use reports::{ReportFormat, ReportGenerator};
