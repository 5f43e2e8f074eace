//! Default configurations and presets for onto-matchers.
//!
//! Provides named presets for common use cases and default values.

use super::types::{AppConfig, MatchingConfig};
use crate::matching::MatchParams;

/// Default profile score when none is supplied
pub const DEFAULT_PROFILE_SCORE: f64 = 1.0;

/// Default report threshold (keep every cell)
pub const DEFAULT_REPORT_THRESHOLD: f64 = 0.0;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Slope 5, weights in [0.5, 1.0]
    Default,
    /// Steep curve, narrow weight band
    Strict,
    /// Shallow curve, wide weight band
    Lenient,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" | "balanced" => Some(Self::Default),
            "strict" => Some(Self::Strict),
            "lenient" | "permissive" => Some(Self::Lenient),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Balanced weighting suitable for most ontology pairs",
            Self::Strict => "Only strong evidence from well-profiled ontologies scores high",
            Self::Lenient => "Weak evidence still yields usable confidences",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Strict, Self::Lenient]
    }

    /// Matcher parameters of this preset
    #[must_use]
    pub const fn params(&self) -> MatchParams {
        match self {
            Self::Default => MatchParams::balanced(),
            Self::Strict => MatchParams::strict(),
            Self::Lenient => MatchParams::lenient(),
        }
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        let mut matching = MatchingConfig::default();
        matching.apply_params(&preset.params());
        Self {
            matching,
            ..Self::default()
        }
    }
}
