//! Configuration types for the salary tracker.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML files of a configuration directory.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{AcademicLevel, Gender, optional_timestamp_wire};
use crate::statistics::{MedianPolicy, SplitPolicy};

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable single-line output.
    #[default]
    Compact,
    /// One JSON object per event.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "salary_tracker=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            filter: default_log_filter(),
        }
    }
}

/// Page sizes for the contribution list.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PaginationConfig {
    /// Page size when the request does not give one.
    pub page_size: usize,
    /// Largest page size a request may ask for.
    pub max_page_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            max_page_size: 100,
        }
    }
}

/// Server configuration from server.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Contribution list paging.
    #[serde(default)]
    pub pagination: PaginationConfig,
    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            pagination: PaginationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// How the popular companies listing is split.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PopularityConfig {
    /// How the unpopular slice starts relative to the popular one.
    #[serde(default)]
    pub split: SplitPolicy,
    /// Number of companies in the popular slice.
    #[serde(default = "default_popular_count")]
    pub top: usize,
}

fn default_popular_count() -> usize {
    4
}

impl Default for PopularityConfig {
    fn default() -> Self {
        Self {
            split: SplitPolicy::default(),
            top: default_popular_count(),
        }
    }
}

/// Statistics configuration from statistics.yaml.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct StatisticsConfig {
    /// Median computation for even-sized collections.
    #[serde(default)]
    pub median_policy: MedianPolicy,
    /// Popular companies split.
    #[serde(default)]
    pub popularity: PopularityConfig,
}

/// Initial records from seed.yaml.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    /// Companies with their dependent records.
    #[serde(default)]
    pub companies: Vec<SeedCompany>,
}

/// A seeded company and everything that belongs to it.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedCompany {
    /// Full company name.
    pub name: String,
    /// Abbreviated identifier.
    pub short_name: String,
    /// Where the company is based.
    pub location: String,
    /// Levels of the company.
    #[serde(default)]
    pub levels: Vec<SeedLevel>,
    /// Compensation bands, referring to levels by name.
    #[serde(default)]
    pub compensations: Vec<SeedCompensation>,
    /// Contributions, referring to levels by name.
    #[serde(default)]
    pub contributions: Vec<SeedContribution>,
}

/// A seeded level.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedLevel {
    /// Display name.
    pub name: String,
    /// Sort position.
    pub order: u32,
}

/// A seeded compensation band.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedCompensation {
    /// Name of a level declared by the same company.
    pub level: String,
    /// The recorded salary.
    pub salary: Decimal,
    /// Names of certificates attached to the band.
    #[serde(default)]
    pub certificates: Vec<String>,
}

/// A seeded contribution.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedContribution {
    /// Name of a level declared by the same company.
    pub level: String,
    /// Job title.
    pub job_title: String,
    /// Total years of professional experience.
    #[serde(default)]
    pub years_of_experience: Option<u32>,
    /// Years spent at the company.
    #[serde(default)]
    pub years_at_company: Option<u32>,
    /// Yearly base salary.
    #[serde(default)]
    pub salary: Option<Decimal>,
    /// Yearly bonus.
    #[serde(default)]
    pub bonus: Option<Decimal>,
    /// Self-reported gender.
    pub gender: Gender,
    /// Highest academic level attained.
    pub highest_academic_level_attained: AcademicLevel,
    /// Submission time; the load time is used when absent.
    #[serde(default, with = "optional_timestamp_wire")]
    pub datetime_of_contribution: Option<NaiveDateTime>,
}

/// The complete configuration loaded from a configuration directory.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    server: ServerConfig,
    statistics: StatisticsConfig,
    seed: Option<SeedData>,
}

impl AppConfig {
    /// Creates a new AppConfig from its component parts.
    pub fn new(server: ServerConfig, statistics: StatisticsConfig, seed: Option<SeedData>) -> Self {
        Self {
            server,
            statistics,
            seed,
        }
    }

    /// Returns the server configuration.
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Returns the statistics configuration.
    pub fn statistics(&self) -> &StatisticsConfig {
        &self.statistics
    }

    /// Returns the seed data, if a seed file was present.
    pub fn seed(&self) -> Option<&SeedData> {
        self.seed.as_ref()
    }
}
