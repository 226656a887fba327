//! oscyank library - copy selected paths to the clipboard from a terminal
//!
//! This library exposes the core functionality of oscyank for testing purposes.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod selection;
pub mod settings;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::OscyankError;
