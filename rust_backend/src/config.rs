//! Explorer configuration file support.
//!
//! This module reads data paths and chart defaults from a TOML file. Every
//! section is optional; missing values fall back to the MovieLens defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::ChartSettings;
use crate::error::{ExplorerError, ExplorerResult};

/// Name of the configuration file searched by [`ExplorerConfig::from_default_location`].
pub const CONFIG_FILE_NAME: &str = "explorer.toml";

/// Explorer configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub charts: ChartSettings,
}

/// Locations of the two input tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_ratings_path")]
    pub ratings_path: PathBuf,
    #[serde(default = "default_movies_path")]
    pub movies_path: PathBuf,
}

fn default_ratings_path() -> PathBuf {
    PathBuf::from("ratings.csv")
}

fn default_movies_path() -> PathBuf {
    PathBuf::from("movies.csv")
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            ratings_path: default_ratings_path(),
            movies_path: default_movies_path(),
        }
    }
}

impl ExplorerConfig {
    /// Load explorer configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(ExplorerConfig)` if successful
    /// * `Err(ExplorerError::Configuration)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> ExplorerResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ExplorerError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse explorer configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ExplorerResult<Self> {
        toml::from_str(content).map_err(|e| {
            ExplorerError::Configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// Load explorer configuration from the default location.
    ///
    /// Searches for `explorer.toml` in:
    /// 1. Current directory
    /// 2. `rust_backend/` directory
    /// 3. Parent directory
    ///
    /// # Returns
    /// * `Ok(Some(ExplorerConfig))` if found and parsed successfully
    /// * `Ok(None)` if no config file exists in any of the locations
    /// * `Err(ExplorerError)` if a file was found but could not be parsed
    pub fn from_default_location() -> ExplorerResult<Option<Self>> {
        let search_paths = [
            PathBuf::from(CONFIG_FILE_NAME),
            Path::new("rust_backend").join(CONFIG_FILE_NAME),
            Path::new("..").join(CONFIG_FILE_NAME),
        ];

        for path in search_paths {
            if path.exists() {
                log::info!("Using configuration from {}", path.display());
                return Self::from_file(&path).map(Some);
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_full_config() {
        let config = ExplorerConfig::from_toml_str(
            r#"
            [data]
            ratings_path = "data/ratings.csv"
            movies_path = "data/movies.csv"

            [charts]
            rating_bins = 9
            activity_bins = 25
            "#,
        )
        .unwrap();

        assert_eq!(config.data.ratings_path, PathBuf::from("data/ratings.csv"));
        assert_eq!(config.charts.rating_bins, 9);
        assert_eq!(config.charts.activity_bins, 25);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ExplorerConfig::from_toml_str("").unwrap();
        assert_eq!(config, ExplorerConfig::default());
        assert_eq!(config.data.movies_path, PathBuf::from("movies.csv"));
        assert_eq!(config.charts.rating_bins, 10);
        assert_eq!(config.charts.activity_bins, 50);
    }

    #[test]
    fn test_invalid_config() {
        let result = ExplorerConfig::from_toml_str("[charts]\nrating_bins = \"ten\"\n");
        assert!(matches!(result, Err(ExplorerError::Configuration(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[data]\nratings_path = \"/tmp/r.csv\"\n").unwrap();

        let config = ExplorerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.data.ratings_path, PathBuf::from("/tmp/r.csv"));
        assert_eq!(config.data.movies_path, PathBuf::from("movies.csv"));
    }

    #[test]
    fn test_from_missing_file() {
        let result = ExplorerConfig::from_file("/nonexistent/explorer.toml");
        assert!(matches!(result, Err(ExplorerError::Configuration(_))));
    }
}
