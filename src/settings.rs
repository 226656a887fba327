//! Option value parsing
//!
//! Settings arrive as raw strings from the command line. They are parsed into
//! a small closed set of value kinds before being interpreted by whoever owns
//! the option.

use crate::config::BackendPreference;
use crate::error::OscyankError;

/// A parsed option value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Bool(bool),
    Null,
    String(String),
}

/// Parse a raw option string
///
/// Booleans accept `true/on/yes/1` and `false/off/no/0`, `none` maps to
/// [`OptionValue::Null`], all comparisons ignore case. Everything else is kept
/// verbatim as a string. There is no numeric or list support.
pub fn parse_option_value(raw: &str) -> OptionValue {
    let lowered = raw.to_lowercase();
    match lowered.as_str() {
        "true" | "on" | "yes" | "1" => OptionValue::Bool(true),
        "false" | "off" | "no" | "0" => OptionValue::Bool(false),
        "none" => OptionValue::Null,
        _ => OptionValue::String(raw.to_string()),
    }
}

impl TryFrom<&OptionValue> for BackendPreference {
    type Error = OscyankError;

    fn try_from(value: &OptionValue) -> Result<Self, Self::Error> {
        match value {
            OptionValue::String(s) => s.parse(),
            OptionValue::Bool(b) => Err(OscyankError::InvalidConfigurationValue {
                value: b.to_string(),
            }),
            OptionValue::Null => Err(OscyankError::InvalidConfigurationValue {
                value: "none".to_string(),
            }),
        }
    }
}
