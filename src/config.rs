//! Configuration loading, built around a `#[serde(default = "...")]`-per-field
//! pattern so a partial TOML file still fills in sane defaults.
//!
//! The core takes `SimilarityConfig`/`FormatterConfig` as plain parameters
//! and never reads configuration itself.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{FormatterConfig, Language, SimilarityConfig};
use crate::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_color_enabled")]
    pub color_enabled: bool,

    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default = "default_max_distance")]
    pub max_distance: usize,

    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,

    #[serde(default = "default_min_score")]
    pub min_score: f64,
}

fn default_color_enabled() -> bool {
    atty::is(atty::Stream::Stdout)
}

fn default_language() -> String {
    "ja".to_string()
}

fn default_max_distance() -> usize {
    3
}

fn default_max_suggestions() -> usize {
    5
}

fn default_min_score() -> f64 {
    0.5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color_enabled: default_color_enabled(),
            language: default_language(),
            max_distance: default_max_distance(),
            max_suggestions: default_max_suggestions(),
            min_score: default_min_score(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file, falling back to defaults for any
    /// missing field. Returns defaults outright if `path` doesn't exist.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|source| AppError::Io { path: path.to_path_buf(), source })?;
        toml::from_str(&content).map_err(|source| AppError::Config { path: path.to_path_buf(), source })
    }

    pub fn similarity_config(&self) -> SimilarityConfig {
        SimilarityConfig {
            max_distance: self.max_distance,
            max_suggestions: self.max_suggestions,
            min_score: self.min_score,
        }
    }

    pub fn formatter_config(&self) -> FormatterConfig {
        FormatterConfig {
            color_enabled: self.color_enabled,
            language: Language::from_code(&self.language).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let settings = Settings::load(Path::new("/nonexistent/path.toml")).unwrap();
        assert_eq!(settings.max_distance, 3);
        assert_eq!(settings.max_suggestions, 5);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "language = \"en\"\n").unwrap();
        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.language, "en");
        assert_eq!(settings.max_distance, 3);
    }
}
