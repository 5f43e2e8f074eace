//! Term vector tables and concept vector resolution.
//!
//! A [`VectorTable`] maps lower-cased terms to embedding vectors loaded from
//! a whitespace-separated text file (`term v1 v2 ... vN` per line, with an
//! optional word2vec `<count> <dim>` header). [`VectorSpaceBuilder`] turns a
//! concept into a single vector using either its label alone or its label
//! combined with its definition.

use crate::error::{MatcherError, ResourceErrorKind, Result};
use crate::matching::text;
use crate::model::ConceptView;
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Dimensionality of the pre-trained embeddings the matchers expect.
pub const DEFAULT_DIMENSION: usize = 300;

/// Statistics gathered while loading a vector table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VectorTableStats {
    /// Records stored in the table
    pub loaded: usize,
    /// Records skipped because a component was not a number
    pub malformed: usize,
    /// Records skipped because the term was already present
    pub duplicates: usize,
    /// Stored records whose length differs from the expected dimensionality
    pub off_dimension: usize,
}

/// Read-only term → vector mapping.
#[derive(Debug, Clone, Default)]
pub struct VectorTable {
    vectors: HashMap<String, Vec<f64>>,
    dimension: usize,
    stats: VectorTableStats,
}

impl VectorTable {
    /// Create an empty table expecting vectors of `dimension` components
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        Self {
            vectors: HashMap::new(),
            dimension,
            stats: VectorTableStats::default(),
        }
    }

    /// Load a table from a vector file.
    ///
    /// Fails if the file cannot be read or holds no usable record.
    pub fn load(path: &Path, dimension: usize) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| {
            MatcherError::resource(
                format!("opening {}: {e}", path.display()),
                ResourceErrorKind::VectorTableNotFound(path.display().to_string()),
            )
        })?;
        let table = Self::from_reader(file, dimension).map_err(|e| match e {
            MatcherError::ResourceLoad { source, .. } => {
                MatcherError::resource(path.display().to_string(), source)
            }
            other => other,
        })?;
        tracing::info!(
            "Loaded {} term vectors from {} ({} malformed, {} off-dimension)",
            table.stats.loaded,
            path.display(),
            table.stats.malformed,
            table.stats.off_dimension
        );
        Ok(table)
    }

    /// Load a table from any reader.
    pub fn from_reader<R: Read>(reader: R, dimension: usize) -> Result<Self> {
        let mut table = Self::new(dimension);
        let reader = BufReader::new(reader);

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line_no == 0 && is_word2vec_header(line) {
                continue;
            }

            let mut fields = line.split_whitespace();
            let Some(term) = fields.next() else {
                continue;
            };
            let parsed: std::result::Result<Vec<f64>, _> =
                fields.map(str::parse::<f64>).collect();
            match parsed {
                Ok(vector) if !vector.is_empty() => {
                    table.insert_record(term, vector);
                }
                _ => {
                    tracing::warn!("Skipping malformed vector record on line {}", line_no + 1);
                    table.stats.malformed += 1;
                }
            }
        }

        if table.vectors.is_empty() {
            return Err(MatcherError::resource(
                "vector table",
                ResourceErrorKind::EmptyVectorTable(format!(
                    "{} malformed records",
                    table.stats.malformed
                )),
            ));
        }
        Ok(table)
    }

    fn insert_record(&mut self, term: &str, vector: Vec<f64>) {
        let key = term.to_lowercase();
        if self.vectors.contains_key(&key) {
            self.stats.duplicates += 1;
            return;
        }
        if vector.len() != self.dimension {
            self.stats.off_dimension += 1;
        }
        self.stats.loaded += 1;
        self.vectors.insert(key, vector);
    }

    /// Add a vector for a term, replacing any existing entry
    pub fn insert(&mut self, term: &str, vector: Vec<f64>) {
        self.vectors.insert(term.to_lowercase(), vector);
    }

    /// Builder-style variant of [`VectorTable::insert`]
    #[must_use]
    pub fn with_vector(mut self, term: &str, vector: Vec<f64>) -> Self {
        self.insert(term, vector);
        self
    }

    /// Case-insensitive lookup
    #[must_use]
    pub fn get(&self, term: &str) -> Option<&[f64]> {
        self.vectors
            .get(&term.to_lowercase())
            .map(Vec::as_slice)
    }

    /// Whether the table holds a vector for the term
    #[must_use]
    pub fn contains(&self, term: &str) -> bool {
        self.vectors.contains_key(&term.to_lowercase())
    }

    /// Expected vector dimensionality
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of terms
    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Load statistics
    #[must_use]
    pub const fn stats(&self) -> VectorTableStats {
        self.stats
    }
}

/// A word2vec text header is exactly two unsigned integers.
fn is_word2vec_header(line: &str) -> bool {
    let fields: Vec<&str> = line.split_whitespace().collect();
    fields.len() == 2 && fields.iter().all(|f| f.parse::<u64>().is_ok())
}

/// Cosine similarity of two vectors in [-1, 1].
///
/// Returns 0 for vectors of different length or zero magnitude.
#[must_use]
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b) {
        dot = x.mul_add(*y, dot);
        norm_a = x.mul_add(*x, norm_a);
        norm_b = y.mul_add(*y, norm_b);
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(-1.0, 1.0)
}

/// How a concept is turned into a vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionMode {
    /// The lower-cased label's vector
    Label,
    /// The label's vector averaged with the centroid of definition token vectors
    Definition,
}

/// Resolves concepts to vectors against a [`VectorTable`].
///
/// Dimensionality is not validated here; callers compare the result against
/// [`VectorTable::dimension`].
#[derive(Debug, Clone, Copy)]
pub struct VectorSpaceBuilder<'a> {
    table: &'a VectorTable,
    mode: ResolutionMode,
}

impl<'a> VectorSpaceBuilder<'a> {
    /// Create a builder over a table
    #[must_use]
    pub const fn new(table: &'a VectorTable, mode: ResolutionMode) -> Self {
        Self { table, mode }
    }

    /// Resolution mode in use
    #[must_use]
    pub const fn mode(&self) -> ResolutionMode {
        self.mode
    }

    /// Resolve a concept, or `None` when its label has no entry.
    #[must_use]
    pub fn resolve<C: ConceptView + ?Sized>(&self, concept: &C) -> Option<Vec<f64>> {
        let label_vector = self.table.get(&concept.label_key())?;
        match self.mode {
            ResolutionMode::Label => Some(label_vector.to_vec()),
            ResolutionMode::Definition => {
                Some(self.global_vector(label_vector, concept.definition()))
            }
        }
    }

    /// Combine the label vector with the centroid of the definition's tokens.
    fn global_vector(&self, label_vector: &[f64], definition: &str) -> Vec<f64> {
        let tokens = text::tokenize_and_lemmatize(definition);
        let mut centroid = vec![0.0; label_vector.len()];
        let mut found = 0usize;

        for token in &tokens {
            let Some(v) = self.table.get(token) else {
                continue;
            };
            if v.len() != label_vector.len() {
                continue;
            }
            for (acc, x) in centroid.iter_mut().zip(v) {
                *acc += x;
            }
            found += 1;
        }

        if found == 0 {
            return label_vector.to_vec();
        }
        let n = found as f64;
        label_vector
            .iter()
            .zip(&centroid)
            .map(|(l, c)| (l + c / n) / 2.0)
            .collect()
    }
}
