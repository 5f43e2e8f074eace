//! Relation cells and the alignment result a matcher hands to its caller.

use serde::{Deserialize, Serialize};
use std::fmt;
use xxhash_rust::xxh3::Xxh3;

/// Semantic relation asserted between a source and a target concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    /// Source and target denote the same concept (`=`)
    Equivalence,
    /// Source is broader than target, i.e. source subsumes target (`>`)
    Broader,
    /// Source is narrower than target, i.e. target subsumes source (`<`)
    Narrower,
    /// No relation was found (`!`)
    None,
}

impl Relation {
    /// Symbol used by the Alignment format
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Equivalence => "=",
            Self::Broader => ">",
            Self::Narrower => "<",
            Self::None => "!",
        }
    }

}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Equivalence => "equivalence",
            Self::Broader => "broader",
            Self::Narrower => "narrower",
            Self::None => "none",
        };
        f.write_str(name)
    }
}

/// The atomic output unit: one scored relation between two concepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationCell {
    /// Cell identifier, `<matcher>-<pair index>`
    pub id: String,
    /// Position of the pair in the source × target enumeration
    pub index: usize,
    /// Source concept identifier
    pub source: String,
    /// Target concept identifier
    pub target: String,
    /// Asserted relation
    pub relation: Relation,
    /// Confidence in [0, 1]
    pub confidence: f64,
}

impl RelationCell {
    /// Create a cell; the confidence is clamped into [0, 1] and NaN becomes 0.
    pub fn new(
        matcher: &str,
        index: usize,
        source: impl Into<String>,
        target: impl Into<String>,
        relation: Relation,
        confidence: f64,
    ) -> Self {
        Self {
            id: format!("{matcher}-{index}"),
            index,
            source: source.into(),
            target: target.into(),
            relation,
            confidence: clamp_confidence(confidence),
        }
    }

    /// A zero-confidence cell for a pair without evidence
    pub fn empty(
        matcher: &str,
        index: usize,
        source: impl Into<String>,
        target: impl Into<String>,
        relation: Relation,
    ) -> Self {
        Self::new(matcher, index, source, target, relation, 0.0)
    }

    /// Whether the cell carries any evidence
    #[must_use]
    pub fn has_evidence(&self) -> bool {
        self.confidence > 0.0 && self.relation != Relation::None
    }
}

fn clamp_confidence(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// The complete set of cells one matcher produced for one ontology pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentResult {
    /// Name of the matcher that produced the cells
    pub matcher: String,
    /// Source ontology identifier
    pub source_ontology: String,
    /// Target ontology identifier
    pub target_ontology: String,
    /// Cells in pair-index order
    pub cells: Vec<RelationCell>,
}

impl AlignmentResult {
    /// Number of cells
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the result holds no cells
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over the cells
    pub fn iter(&self) -> std::slice::Iter<'_, RelationCell> {
        self.cells.iter()
    }

    /// Find the cell for a (source, target) pair
    #[must_use]
    pub fn cell(&self, source: &str, target: &str) -> Option<&RelationCell> {
        self.cells
            .iter()
            .find(|c| c.source == source && c.target == target)
    }

    /// Cells asserting the given relation
    pub fn with_relation(&self, relation: Relation) -> impl Iterator<Item = &RelationCell> {
        self.cells.iter().filter(move |c| c.relation == relation)
    }

    /// Number of cells that carry evidence
    #[must_use]
    pub fn evidence_count(&self) -> usize {
        self.cells.iter().filter(|c| c.has_evidence()).count()
    }

    /// Put cells back into pair-index order and re-clamp their confidences.
    ///
    /// Every cell is kept; a matcher result is always the full cross product.
    pub fn normalise(&mut self) {
        self.cells.sort_by_key(|c| c.index);
        for cell in &mut self.cells {
            cell.confidence = clamp_confidence(cell.confidence);
        }
    }

    /// Copy of this result keeping only cells at or above `threshold`.
    ///
    /// Used for report output; matchers themselves always return the full
    /// cross product.
    #[must_use]
    pub fn retain_above(&self, threshold: f64) -> Self {
        Self {
            matcher: self.matcher.clone(),
            source_ontology: self.source_ontology.clone(),
            target_ontology: self.target_ontology.clone(),
            cells: self
                .cells
                .iter()
                .filter(|c| c.confidence >= threshold)
                .cloned()
                .collect(),
        }
    }

    /// The `n` highest-confidence cells, ties broken by pair index
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<&RelationCell> {
        let mut cells: Vec<_> = self.cells.iter().collect();
        cells.sort_by(|a, b| {
            b.confidence
                .total_cmp(&a.confidence)
                .then(a.index.cmp(&b.index))
        });
        cells.truncate(n);
        cells
    }

    /// Content fingerprint over every cell, independent of run or thread count.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.update(self.matcher.as_bytes());
        hasher.update(self.source_ontology.as_bytes());
        hasher.update(self.target_ontology.as_bytes());
        for cell in &self.cells {
            hasher.update(cell.id.as_bytes());
            hasher.update(cell.source.as_bytes());
            hasher.update(cell.target.as_bytes());
            hasher.update(cell.relation.symbol().as_bytes());
            hasher.update(&cell.confidence.to_bits().to_le_bytes());
        }
        hasher.digest()
    }
}

impl<'a> IntoIterator for &'a AlignmentResult {
    type Item = &'a RelationCell;
    type IntoIter = std::slice::Iter<'a, RelationCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Collects emitted cells into an [`AlignmentResult`].
#[derive(Debug)]
#[must_use]
pub struct AlignmentAccumulator {
    result: AlignmentResult,
}

impl AlignmentAccumulator {
    /// Start collecting cells for a matcher run over an ontology pair
    pub fn new(
        matcher: impl Into<String>,
        source_ontology: impl Into<String>,
        target_ontology: impl Into<String>,
    ) -> Self {
        Self {
            result: AlignmentResult {
                matcher: matcher.into(),
                source_ontology: source_ontology.into(),
                target_ontology: target_ontology.into(),
                cells: Vec::new(),
            },
        }
    }

    /// Append a cell
    pub fn push(&mut self, cell: RelationCell) {
        self.result.cells.push(cell);
    }

    /// Finish collecting and hand the result over
    #[must_use]
    pub fn finish(self) -> AlignmentResult {
        self.result
    }
}

impl Extend<RelationCell> for AlignmentAccumulator {
    fn extend<I: IntoIterator<Item = RelationCell>>(&mut self, iter: I) {
        self.result.cells.extend(iter);
    }
}
