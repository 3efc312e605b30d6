//! Engine configuration file support.
//!
//! This module reads the chart-shaping thresholds and the default locale
//! from a TOML configuration file. Every field has a default, so an empty
//! file (or no file at all) yields the dashboard's standard behavior.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult, ErrorContext};
use crate::models::LocaleId;

/// Engine configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub charts: ChartSettings,
    #[serde(default)]
    pub labels: LabelSettings,
}

/// Thresholds that decide chart shape and point label format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSettings {
    /// Aligned length above which one series per period is emitted instead
    /// of one series per date.
    #[serde(default = "default_series_split_threshold")]
    pub series_split_threshold: usize,
    /// Spans of at most this many days are labelled by weekday name.
    #[serde(default = "default_weekday_label_max_days")]
    pub weekday_label_max_days: usize,
}

/// Locale settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelSettings {
    #[serde(default)]
    pub default_locale: LocaleId,
}

fn default_series_split_threshold() -> usize {
    31
}

fn default_weekday_label_max_days() -> usize {
    7
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            series_split_threshold: default_series_split_threshold(),
            weekday_label_max_days: default_weekday_label_max_days(),
        }
    }
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            default_locale: LocaleId::default(),
        }
    }
}

impl EngineConfig {
    /// The requested locale, or `[labels] default_locale` when none was given.
    pub fn locale_or_default(&self, requested: Option<LocaleId>) -> LocaleId {
        requested.unwrap_or(self.labels.default_locale)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> EngineResult<Self> {
        toml::from_str(content).map_err(|e| {
            EngineError::configuration_with_context(
                format!("Failed to parse config: {}", e),
                ErrorContext::new("load_config"),
            )
        })
    }

    /// Load engine configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(EngineConfig)` if successful
    /// * `Err(EngineError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            EngineError::configuration_with_context(
                format!("Failed to read config file: {}", e),
                ErrorContext::new("load_config").with_entity(path.display().to_string()),
            )
        })?;

        let config = Self::from_toml_str(&content)
            .map_err(|e| e.with_operation("load_config_file"))?;
        log::debug!("Loaded engine config from {}", path.display());

        Ok(config)
    }

    /// Load engine configuration from the default location.
    ///
    /// Searches for `comparison.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> EngineResult<Self> {
        match default_config_path() {
            Some(path) => Self::from_file(&path),
            None => Err(EngineError::configuration_with_context(
                "No comparison.toml found in standard locations",
                ErrorContext::new("load_config"),
            )),
        }
    }

    /// Like [`EngineConfig::from_default_location`], but falls back to the
    /// built-in defaults when no file exists. A file that exists but does not
    /// parse is still an error.
    pub fn from_default_location_or_default() -> EngineResult<Self> {
        match default_config_path() {
            Some(path) => Self::from_file(&path),
            None => {
                log::debug!("No comparison.toml found, using built-in defaults");
                Ok(Self::default())
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    [
        PathBuf::from("comparison.toml"),
        PathBuf::from("backend/comparison.toml"),
        PathBuf::from("../comparison.toml"),
    ]
    .into_iter()
    .find(|path| path.exists())
}
