//! Application state for the payroll engine API.

use std::sync::Arc;

use crate::config::{ConfigLoader, PayrollRules};

/// Shared application state.
///
/// Holds the loaded statutory configuration, read by every handler.
#[derive(Clone)]
pub struct AppState {
    /// The loaded statutory configuration.
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

    /// Returns the payroll rules the handlers calculate with.
    pub fn rules(&self) -> &PayrollRules {
        self.config.rules()
    }
}

impl Default for AppState {
    /// State carrying the built-in statutory rules.
    fn default() -> Self {
        Self::new(ConfigLoader::default())
    }
}
