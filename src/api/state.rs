//! Application state for the salary tracker API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::error::TrackerResult;
use crate::store::RecordStore;

/// Shared application state.
///
/// Holds the record store and the loaded configuration. Cloning is cheap:
/// both live behind an [`Arc`].
#[derive(Clone)]
pub struct AppState {
    store: Arc<RecordStore>,
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a state around an existing store.
    pub fn new(store: RecordStore, config: ConfigLoader) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }

    /// Creates a store, seeds it from the configuration's seed data if any,
    /// and wraps both.
    pub fn from_config(config: ConfigLoader) -> TrackerResult<Self> {
        let store = RecordStore::new();
        if let Some(seed) = config.config().seed() {
            store.seed(seed)?;
        }
        Ok(Self::new(store, config))
    }

    /// Returns the record store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_from_config_seeds_store() {
        let config = ConfigLoader::load("./config/default").unwrap();
        let state = AppState::from_config(config).unwrap();
        assert_eq!(state.store().counts().companies, 4);
    }

    #[test]
    fn test_from_config_without_seed_is_empty() {
        let state = AppState::from_config(ConfigLoader::default()).unwrap();
        assert_eq!(state.store().counts().contributions, 0);
    }
}
