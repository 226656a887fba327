// Configuration module for oscyank
// This module handles loading and parsing configuration from ~/.config/oscyank/config.toml

mod types;

pub use types::{BackendPreference, ClipboardConfig, Config};

use std::fs;
use std::path::{Path, PathBuf};

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/oscyank/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_from(&get_config_path())
}

/// Missing file means defaults; an unreadable or invalid one means defaults
/// plus a warning for the user
pub fn load_config_from(config_path: &Path) -> ConfigResult {
    if !config_path.exists() {
        log::debug!("No config at {:?}, using defaults", config_path);
        return ConfigResult::defaults(None);
    }

    let parsed = fs::read_to_string(config_path)
        .map_err(|e| format!("Failed to read config: {}", e))
        .and_then(|contents| {
            toml::from_str::<Config>(&contents).map_err(|e| format!("Invalid config: {}", e))
        });

    match parsed {
        Ok(config) => {
            log::debug!("Loaded {:?}: backend {}", config_path, config.clipboard.backend);
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(warning) => ConfigResult::defaults(Some(warning)),
    }
}

impl ConfigResult {
    fn defaults(warning: Option<String>) -> Self {
        ConfigResult {
            config: Config::default(),
            warning,
        }
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/oscyank/config.toml on all platforms for consistency.
pub fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("oscyank")
        .join("config.toml")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
