// Configuration type definitions

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::OscyankError;

/// Clipboard backend preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendPreference {
    #[default]
    Auto,
    #[serde(alias = "osc52")]
    Osc,
    Manager,
}

impl FromStr for BackendPreference {
    type Err = OscyankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(BackendPreference::Auto),
            "osc" | "osc52" => Ok(BackendPreference::Osc),
            "manager" => Ok(BackendPreference::Manager),
            _ => Err(OscyankError::InvalidConfigurationValue {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for BackendPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BackendPreference::Auto => "auto",
            BackendPreference::Osc => "osc",
            BackendPreference::Manager => "manager",
        };
        f.write_str(name)
    }
}

/// Clipboard configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: BackendPreference,
    /// Send `ESC ] 52 ; c ; ! BEL` before the payload when running inside kitty
    #[serde(default)]
    pub kitty_clear: bool,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
