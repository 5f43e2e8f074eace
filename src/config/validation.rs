//! Configuration validation for onto-matchers.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{AppConfig, MatchingConfig, OutputConfig, ResourceConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.matching.validate());
        errors.extend(self.resources.validate());
        errors.extend(self.output.validate());
        errors
    }
}

fn unit_interval(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

impl Validatable for MatchingConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !unit_interval(self.profile_score) {
            errors.push(ConfigError::new(
                "matching.profile_score",
                format!("Profile score must be between 0.0 and 1.0, got {}", self.profile_score),
            ));
        }
        if !unit_interval(self.range_min) {
            errors.push(ConfigError::new(
                "matching.range_min",
                format!("Range minimum must be between 0.0 and 1.0, got {}", self.range_min),
            ));
        }
        if !unit_interval(self.range_max) {
            errors.push(ConfigError::new(
                "matching.range_max",
                format!("Range maximum must be between 0.0 and 1.0, got {}", self.range_max),
            ));
        }
        if self.range_min > self.range_max {
            errors.push(ConfigError::new(
                "matching.range_min",
                format!(
                    "Range minimum {} exceeds range maximum {}",
                    self.range_min, self.range_max
                ),
            ));
        }
        if self.dimension == 0 {
            errors.push(ConfigError::new(
                "matching.dimension",
                "Vector dimension must be greater than 0",
            ));
        }
        if self.matchers.is_empty() {
            errors.push(ConfigError::new(
                "matching.matchers",
                "At least one matcher must be selected",
            ));
        }

        errors
    }
}

impl Validatable for ResourceConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.vectors.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            errors.push(ConfigError::new("resources.vectors", "Path must not be empty"));
        }
        if self.lexicon.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            errors.push(ConfigError::new("resources.lexicon", "Path must not be empty"));
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !unit_interval(self.threshold) {
            errors.push(ConfigError::new(
                "output.threshold",
                format!("Threshold must be between 0.0 and 1.0, got {}", self.threshold),
            ));
        }

        if let Some(parent) = self.file.as_ref().and_then(|f| f.parent()) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                errors.push(ConfigError::new(
                    "output.file",
                    format!("Parent directory does not exist: {}", parent.display()),
                ));
            }
        }

        errors
    }
}
