use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OscyankError {
    #[error("No available tty is found!")]
    TerminalNotFound,

    #[error("Invalid value for clipboard backend: {value} (expected auto, osc, osc52 or manager)")]
    InvalidConfigurationValue { value: String },

    #[error("Unknown mode: {token} (expected name, name_without_extension, dir or path)")]
    UnknownMode { token: String },

    #[error("{program} failed: {reason}")]
    Subprocess { program: String, reason: String },

    #[error("Not a file or directory name: {}", path.display())]
    NoFileName { path: PathBuf },

    #[error("Nothing selected")]
    EmptySelection,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl OscyankError {
    pub(crate) fn subprocess(program: &str, reason: impl ToString) -> Self {
        OscyankError::Subprocess {
            program: program.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T, E = OscyankError> = std::result::Result<T, E>;
