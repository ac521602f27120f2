//! Application Configuration

use log::LevelFilter;

/// Local storage key holding the saved list
pub const DEFAULT_STORAGE_KEY: &str = "todos";

/// Startup settings, passed to the controller and the logger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage_key: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}
