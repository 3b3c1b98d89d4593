//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{TrackerError, TrackerResult};
use crate::statistics::{MedianPolicy, SplitPolicy};

use super::types::{
    AppConfig, PaginationConfig, PopularityConfig, SeedData, ServerConfig, StatisticsConfig,
};

/// Loads and provides access to the service configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── server.yaml      # Bind address, pagination, logging
/// ├── statistics.yaml  # Median and popularity policies
/// └── seed.yaml        # Optional initial records
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_tracker::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Listening on {}", loader.bind_address());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `server.yaml` or `statistics.yaml` is missing, or
    /// if any present file contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> TrackerResult<Self> {
        let path = path.as_ref();

        let server = Self::load_yaml::<ServerConfig>(&path.join("server.yaml"))?;
        let statistics = Self::load_yaml::<StatisticsConfig>(&path.join("statistics.yaml"))?;

        let seed_path = path.join("seed.yaml");
        let seed = if seed_path.exists() {
            Some(Self::load_yaml::<SeedData>(&seed_path)?)
        } else {
            None
        };

        Ok(Self {
            config: AppConfig::new(server, statistics, seed),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: AppConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> TrackerResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| TrackerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| TrackerError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The `host:port` pair to bind.
    pub fn bind_address(&self) -> String {
        let server = self.config.server();
        format!("{}:{}", server.host, server.port)
    }

    /// Contribution list paging.
    pub fn pagination(&self) -> PaginationConfig {
        self.config.server().pagination
    }

    /// Median computation policy.
    pub fn median_policy(&self) -> MedianPolicy {
        self.config.statistics().median_policy
    }

    /// Popular companies split.
    pub fn popularity(&self) -> PopularityConfig {
        self.config.statistics().popularity
    }

    /// Popular companies split policy.
    pub fn split_policy(&self) -> SplitPolicy {
        self.popularity().split
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config/default"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.bind_address(), "127.0.0.1:8000");
        assert_eq!(loader.median_policy(), MedianPolicy::Average);
        assert_eq!(loader.split_policy(), SplitPolicy::Contiguous);
        assert_eq!(loader.popularity().top, 4);
    }

    #[test]
    fn test_seed_loaded_when_present() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let seed = loader.config().seed().expect("seed.yaml should be loaded");
        assert!(!seed.companies.is_empty());
        assert!(seed.companies.iter().any(|c| c.short_name == "Acme"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(TrackerError::ConfigNotFound { path }) => {
                assert!(path.contains("server.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_default_loader_uses_correct_policies() {
        let loader = ConfigLoader::default();
        assert_eq!(loader.median_policy(), MedianPolicy::Average);
        assert_eq!(loader.pagination().max_page_size, 100);
        assert!(loader.config().seed().is_none());
    }
}
