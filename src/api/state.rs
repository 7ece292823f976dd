//! Application state for the take-home pay API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, TaxConfiguration};

/// Shared application state.
///
/// Holds the tax configuration loaded at start-up. Requests only read it, so
/// handlers running in parallel share one copy without locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded tax configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the thresholds and rates used for calculations.
    pub fn tax_config(&self) -> &TaxConfiguration {
        self.config.config()
    }
}
