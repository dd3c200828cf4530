//! Error kinds surfaced by the comparison run and their process exit codes.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid file path.")]
    InvalidInputPath,
    #[error("{0}")]
    InvalidOption(String),
    #[error("Failed to read file at {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse file at {}: {source}", .path.display())]
    FileParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to write to file at {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    /// 1 for bad input at the prompt/option stage, 2 for file failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidInputPath | Error::InvalidOption(_) => 1,
            Error::FileRead { .. } | Error::FileParse { .. } | Error::FileWrite { .. } => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
