//! Intermediate representation for ontologies and alignments.
//!
//! Every supported ontology format is normalized into an [`Ontology`] of
//! read-only [`Concept`]s before matching. Matchers produce an
//! [`AlignmentResult`] holding one [`RelationCell`] per concept pair.

mod alignment;
mod concept;

pub use alignment::*;
pub use concept::*;
