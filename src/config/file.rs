//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".onto-matchers.yaml",
    ".onto-matchers.yml",
    "onto-matchers.yaml",
    "onto-matchers.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. User config directory (~/.config/onto-matchers/)
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    if let Some(path) = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_in_dir(&cwd))
    {
        return Some(path);
    }

    dirs::config_dir().and_then(|dir| find_config_in_dir(&dir.join("onto-matchers")))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

/// Load the configuration for a run.
///
/// An explicitly named file must load; otherwise discovery falls back to
/// defaults when no file is found.
pub fn load_for_run(
    explicit_path: Option<&Path>,
) -> crate::error::Result<(AppConfig, Option<PathBuf>)> {
    match explicit_path {
        Some(path) => load_config_file(path)
            .map(|config| (config, Some(path.to_path_buf())))
            .map_err(|e| crate::error::MatcherError::config(e.to_string())),
        None => Ok(load_or_default(None)),
    }
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Fields of `other` still at their default value do not override.
    pub fn merge(&mut self, other: &Self) {
        let defaults = Self::default();

        let matching = &other.matching;
        if matching.profile_score != defaults.matching.profile_score {
            self.matching.profile_score = matching.profile_score;
        }
        if matching.slope != defaults.matching.slope {
            self.matching.slope = matching.slope;
        }
        if matching.range_min != defaults.matching.range_min {
            self.matching.range_min = matching.range_min;
        }
        if matching.range_max != defaults.matching.range_max {
            self.matching.range_max = matching.range_max;
        }
        if matching.dimension != defaults.matching.dimension {
            self.matching.dimension = matching.dimension;
        }
        if matching.candidate_merge != defaults.matching.candidate_merge {
            self.matching.candidate_merge = matching.candidate_merge;
        }
        if !matching.parallel {
            self.matching.parallel = false;
        }
        if matching.matchers != defaults.matching.matchers {
            self.matching.matchers.clone_from(&matching.matchers);
        }

        if other.resources.vectors.is_some() {
            self.resources.vectors.clone_from(&other.resources.vectors);
        }
        if other.resources.lexicon.is_some() {
            self.resources.lexicon.clone_from(&other.resources.lexicon);
        }

        if other.output.format != defaults.output.format {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.threshold != defaults.output.threshold {
            self.output.threshold = other.output.threshold;
        }
        if other.output.summary_top != defaults.output.summary_top {
            self.output.summary_top = other.output.summary_top;
        }
        if other.output.no_color {
            self.output.no_color = true;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# onto-matchers configuration
# Place this file at .onto-matchers.yaml in your working directory or ~/.config/onto-matchers/

{}
",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::MatcherKind;
    use crate::reports::ReportFormat;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".onto-matchers.yaml");
        std::fs::write(&config_path, "matching:\n  slope: 7\n").unwrap();

        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(find_config_in_dir(tmp.path()), None);
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");

        let yaml = r"
matching:
  profile_score: 0.6
  slope: 8
  matchers: [subsumption]
resources:
  lexicon: lexicon.yaml
output:
  format: rdf
  threshold: 0.2
";
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.matching.profile_score, 0.6);
        assert_eq!(config.matching.slope, 8);
        assert_eq!(config.matching.matchers, vec![MatcherKind::Subsumption]);
        assert_eq!(config.resources.lexicon, Some(PathBuf::from("lexicon.yaml")));
        assert_eq!(config.output.format, ReportFormat::Rdf);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_config_file_invalid_yaml() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("bad.yaml");
        std::fs::write(&config_path, "matching: [unclosed").unwrap();
        assert!(matches!(
            load_config_file(&config_path),
            Err(ConfigFileError::Parse(_))
        ));
    }

    #[test]
    fn test_config_merge() {
        let mut base = AppConfig::builder()
            .slope(9)
            .vectors(Some(PathBuf::from("file-vectors.txt")))
            .build();
        let overrides = AppConfig::builder()
            .profile_score(0.3)
            .lexicon(Some(PathBuf::from("cli-lexicon.yaml")))
            .parallel(false)
            .build();

        base.merge(&overrides);

        assert_eq!(base.matching.profile_score, 0.3);
        assert_eq!(base.matching.slope, 9);
        assert_eq!(base.resources.vectors, Some(PathBuf::from("file-vectors.txt")));
        assert_eq!(base.resources.lexicon, Some(PathBuf::from("cli-lexicon.yaml")));
        assert!(!base.matching.parallel);
    }

    #[test]
    fn test_generate_example_config() {
        let example = generate_example_config();
        assert!(example.contains("matching:"));
        assert!(example.contains("profile_score"));
    }

    #[test]
    fn test_load_for_run_explicit_missing_is_error() {
        let err = load_for_run(Some(Path::new("/nonexistent/onto-matchers.yaml"))).unwrap_err();
        assert!(matches!(err, crate::error::MatcherError::Config(_)));
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom-config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "matching:\n  slope: 3").unwrap();

        assert_eq!(discover_config_file(Some(&config_path)), Some(config_path));
    }
}
