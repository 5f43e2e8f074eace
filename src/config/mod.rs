//! Configuration module for onto-matchers.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use onto_matchers::config::{AppConfig, ConfigPreset};
//!
//! let config = AppConfig::from_preset(ConfigPreset::Strict);
//!
//! let config = AppConfig::builder()
//!     .profile_score(0.8)
//!     .slope(5)
//!     .build();
//!
//! use onto_matchers::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.onto-matchers.yaml` file in your working directory or
//! `~/.config/onto-matchers/`:
//!
//! ```yaml
//! matching:
//!   profile_score: 0.8
//!   slope: 5
//!   matchers: [embedding, subsumption]
//! resources:
//!   vectors: glove.300d.txt
//!   lexicon: lexicon.yaml
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{ConfigPreset, DEFAULT_PROFILE_SCORE, DEFAULT_REPORT_THRESHOLD};
pub use types::{AppConfig, AppConfigBuilder, MatchingConfig, OutputConfig, ResourceConfig};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_for_run, load_or_default,
    CONFIG_FILE_NAMES,
    ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// The schema documents every option of `.onto-matchers.yaml` files and can
/// be used by editors for validation and autocompletion.
pub fn generate_json_schema() -> crate::error::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    Ok(serde_json::to_string_pretty(&schema)?)
}
