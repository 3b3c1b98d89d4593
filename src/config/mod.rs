//! Configuration loading and management for the salary tracker.
//!
//! This module loads the service configuration from a directory of YAML
//! files: bind address and paging, statistics policies, and optional seed
//! records for the store.
//!
//! # Example
//!
//! ```no_run
//! use salary_tracker::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Median policy: {:?}", config.median_policy());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, LogFormat, LoggingConfig, PaginationConfig, PopularityConfig, SeedCompany,
    SeedCompensation, SeedContribution, SeedData, SeedLevel, ServerConfig, StatisticsConfig,
};
