//! Unified error types for onto-matchers.
//!
//! Errors fall into two groups: fatal ontology errors that abort a run, and
//! resource-load errors raised before any matching starts. Missing evidence
//! during matching is never an error; it degrades to a zero-confidence cell.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for onto-matchers operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MatcherError {
    /// An ontology document could not be read or parsed
    #[error("Failed to load ontology: {context}")]
    Ontology {
        context: String,
        #[source]
        source: OntologyErrorKind,
    },

    /// A matching resource (vector table, lexicon) is unavailable
    #[error("Failed to load matching resource: {context}")]
    ResourceLoad {
        context: String,
        #[source]
        source: ResourceErrorKind,
    },

    /// Errors during alignment report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific ontology error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum OntologyErrorKind {
    #[error("Unknown ontology format - expected OWL RDF/XML, JSON or YAML")]
    UnknownFormat,

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("Invalid XML structure: {0}")]
    InvalidXml(String),

    #[error("Missing required field: {field} in {context}")]
    MissingField { field: String, context: String },
}

/// Specific resource error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ResourceErrorKind {
    #[error("Vector table not found: {0}")]
    VectorTableNotFound(String),

    #[error("Vector table contains no usable records: {0}")]
    EmptyVectorTable(String),

    #[error("Lexicon not found: {0}")]
    LexiconNotFound(String),

    #[error("Invalid lexicon: {0}")]
    InvalidLexicon(String),

    #[error("Resource required by matcher '{matcher}' was not supplied: {resource}")]
    Missing { matcher: String, resource: String },
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("Formatting failed: {0}")]
    FormatError(#[from] std::fmt::Error),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for onto-matchers operations
pub type Result<T> = std::result::Result<T, MatcherError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl MatcherError {
    /// Create an ontology error with context
    pub fn ontology(context: impl Into<String>, source: OntologyErrorKind) -> Self {
        Self::Ontology {
            context: context.into(),
            source,
        }
    }

    /// Create an ontology error for an unrecognised document
    pub fn unknown_format(path: impl Into<String>) -> Self {
        Self::ontology(format!("at {}", path.into()), OntologyErrorKind::UnknownFormat)
    }

    /// Create an ontology error for a missing field
    pub fn missing_field(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::ontology(
            "missing required field",
            OntologyErrorKind::MissingField {
                field: field.into(),
                context: context.into(),
            },
        )
    }

    /// Create a resource-load error with context
    pub fn resource(context: impl Into<String>, source: ResourceErrorKind) -> Self {
        Self::ResourceLoad {
            context: context.into(),
            source,
        }
    }

    /// Create a resource error for a matcher that was run without its resource
    pub fn missing_resource(matcher: impl Into<String>, resource: impl Into<String>) -> Self {
        let matcher = matcher.into();
        let resource = resource.into();
        Self::resource(
            format!("{resource} required by matcher '{matcher}' is not configured"),
            ResourceErrorKind::Missing { matcher, resource },
        )
    }

    /// Create a report error with context
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this error was raised while loading a matching resource.
    #[must_use]
    pub const fn is_resource_error(&self) -> bool {
        matches!(self, Self::ResourceLoad { .. })
    }

    /// Whether this error was raised while loading an ontology document.
    #[must_use]
    pub const fn is_ontology_error(&self) -> bool {
        matches!(self, Self::Ontology { .. })
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for MatcherError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for MatcherError {
    fn from(err: serde_json::Error) -> Self {
        Self::report(
            "JSON serialization",
            ReportErrorKind::JsonSerializationError(err.to_string()),
        )
    }
}

impl From<std::fmt::Error> for MatcherError {
    fn from(err: std::fmt::Error) -> Self {
        Self::report("writing report", ReportErrorKind::FormatError(err))
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is chained in front of any existing context, so a
/// failure reads as a path through the code:
///
/// ```ignore
/// use onto_matchers::error::ErrorContext;
///
/// let table = VectorTable::load(path, 300)
///     .with_context(|| format!("loading vectors for {}", source.id()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (lazy evaluation).
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<MatcherError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: MatcherError, new_ctx: &str) -> MatcherError {
    match err {
        MatcherError::Ontology {
            context: existing,
            source,
        } => MatcherError::Ontology {
            context: chain_context(new_ctx, &existing),
            source,
        },
        MatcherError::ResourceLoad {
            context: existing,
            source,
        } => MatcherError::ResourceLoad {
            context: chain_context(new_ctx, &existing),
            source,
        },
        MatcherError::Report {
            context: existing,
            source,
        } => MatcherError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        MatcherError::Io {
            path,
            message,
            source,
        } => MatcherError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        MatcherError::Config(msg) => MatcherError::Config(chain_context(new_ctx, &msg)),
        MatcherError::Validation(msg) => MatcherError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MatcherError::unknown_format("onto.ttl");
        let display = err.to_string();
        assert!(display.contains("ontology"), "unexpected message: {display}");

        let err = MatcherError::missing_resource("embedding", "vector table");
        assert!(err.is_resource_error());
        assert!(!err.is_ontology_error());
        let display = err.to_string();
        assert!(display.contains("'embedding'"), "unexpected message: {display}");
        assert!(display.contains("vector table"), "unexpected message: {display}");
    }

    #[test]
    fn test_error_chain() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = MatcherError::io("/path/to/vectors.txt", io_err);

        assert!(err.to_string().contains("/path/to/vectors.txt"));
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(MatcherError::ontology("base", OntologyErrorKind::UnknownFormat))
        }

        fn middle() -> Result<()> {
            inner().context("middle layer")
        }

        fn outer() -> Result<()> {
            middle().context("outer layer")
        }

        match outer() {
            Err(MatcherError::Ontology { context, .. }) => {
                assert_eq!(context, "outer layer: middle layer: base");
            }
            other => panic!("Expected Ontology error, got {other:?}"),
        }
    }

    #[test]
    fn test_resource_context_preserved() {
        let err: Result<()> = Err(MatcherError::resource(
            "vectors.txt",
            ResourceErrorKind::EmptyVectorTable("vectors.txt".to_string()),
        ));
        match err.context("embedding matcher") {
            Err(MatcherError::ResourceLoad { context, .. }) => {
                assert_eq!(context, "embedding matcher: vectors.txt");
            }
            other => panic!("Expected ResourceLoad error, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");

        let err_result: Result<i32> = Err(MatcherError::validation("error"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
    }
}
