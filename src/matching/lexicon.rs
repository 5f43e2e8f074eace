//! Lexical resource used to confirm subsumption candidates.
//!
//! The subsumption matcher asks two questions of a lexical resource: do two
//! terms belong to the same subject domain, and is one of them a part of the
//! other. [`DomainLexicon`] answers both from a YAML or JSON file:
//!
//! ```yaml
//! domains:
//!   vehicle: [transport]
//!   car: [transport]
//!   wheel: [transport, mechanics]
//! meronyms:
//!   - [wheel, car]     # part, whole
//! ```

use super::text;
use crate::error::{MatcherError, ResourceErrorKind, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Domain tag that is attached to general-purpose words and never counts.
pub const GENERIC_DOMAIN: &str = "factotum";

/// Read-only lexical predicates over term pairs.
pub trait LexicalResource: Send + Sync {
    /// Whether the two terms share a subject domain
    fn same_domain(&self, a: &str, b: &str) -> bool;

    /// Whether one term denotes a part of the other
    fn is_meronym(&self, a: &str, b: &str) -> bool;
}

/// On-disk lexicon layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct LexiconFile {
    domains: HashMap<String, Vec<String>>,
    meronyms: Vec<(String, String)>,
}

/// Domain and part-whole lexicon held in memory.
#[derive(Debug, Clone, Default)]
pub struct DomainLexicon {
    domains: HashMap<String, HashSet<String>>,
    meronyms: HashSet<(String, String)>,
}

impl DomainLexicon {
    /// Create an empty lexicon
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a lexicon from a YAML or JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            MatcherError::resource(
                format!("reading {}: {e}", path.display()),
                ResourceErrorKind::LexiconNotFound(path.display().to_string()),
            )
        })?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        let lexicon = if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
        .map_err(|e| match e {
            MatcherError::ResourceLoad { source, .. } => {
                MatcherError::resource(path.display().to_string(), source)
            }
            other => other,
        })?;
        tracing::info!(
            "Loaded lexicon from {} ({} terms, {} part-whole pairs)",
            path.display(),
            lexicon.domains.len(),
            lexicon.meronyms.len()
        );
        Ok(lexicon)
    }

    /// Parse a YAML lexicon
    pub fn from_yaml(content: &str) -> Result<Self> {
        let file: LexiconFile = serde_yaml::from_str(content).map_err(|e| {
            MatcherError::resource("lexicon", ResourceErrorKind::InvalidLexicon(e.to_string()))
        })?;
        Ok(Self::from_file(file))
    }

    /// Parse a JSON lexicon
    pub fn from_json(content: &str) -> Result<Self> {
        let file: LexiconFile = serde_json::from_str(content).map_err(|e| {
            MatcherError::resource("lexicon", ResourceErrorKind::InvalidLexicon(e.to_string()))
        })?;
        Ok(Self::from_file(file))
    }

    fn from_file(file: LexiconFile) -> Self {
        let mut lexicon = Self::new();
        for (term, domains) in file.domains {
            let tags: Vec<&str> = domains.iter().map(String::as_str).collect();
            lexicon.add_domains(&term, &tags);
        }
        for (part, whole) in file.meronyms {
            lexicon.add_meronym(&part, &whole);
        }
        lexicon
    }

    /// Attach domain tags to a term
    pub fn add_domains(&mut self, term: &str, domains: &[&str]) {
        let entry = self.domains.entry(text::normalize_term(term)).or_default();
        for domain in domains {
            entry.insert(domain.to_lowercase());
        }
    }

    /// Record that `part` is a part of `whole`
    pub fn add_meronym(&mut self, part: &str, whole: &str) {
        self.meronyms
            .insert((text::normalize_term(part), text::normalize_term(whole)));
    }

    /// Builder-style variant of [`DomainLexicon::add_domains`]
    #[must_use]
    pub fn with_domains(mut self, term: &str, domains: &[&str]) -> Self {
        self.add_domains(term, domains);
        self
    }

    /// Builder-style variant of [`DomainLexicon::add_meronym`]
    #[must_use]
    pub fn with_meronym(mut self, part: &str, whole: &str) -> Self {
        self.add_meronym(part, whole);
        self
    }

    /// Domains of a term, looked up on the whole term and each compound part
    fn domains_of(&self, term: &str) -> HashSet<&str> {
        let mut keys = vec![text::normalize_term(term)];
        keys.extend(
            text::split_compound(term)
                .iter()
                .map(|part| text::lemmatize(part)),
        );

        keys.iter()
            .filter_map(|k| self.domains.get(k))
            .flat_map(|set| set.iter().map(String::as_str))
            .filter(|d| *d != GENERIC_DOMAIN)
            .collect()
    }
}

impl LexicalResource for DomainLexicon {
    fn same_domain(&self, a: &str, b: &str) -> bool {
        let domains_a = self.domains_of(a);
        if domains_a.is_empty() {
            return false;
        }
        let domains_b = self.domains_of(b);
        !domains_a.is_disjoint(&domains_b)
    }

    fn is_meronym(&self, a: &str, b: &str) -> bool {
        let a = text::normalize_term(a);
        let b = text::normalize_term(b);
        self.meronyms.contains(&(a.clone(), b.clone())) || self.meronyms.contains(&(b, a))
    }
}
