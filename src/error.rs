//! Error types for dynamic routing runs.
//!
//! There is no recoverable error class: every variant aborts the run.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid run parameters.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Malformed adjacency matrix description.
    #[error("format error in line {line}: {message}")]
    Format { line: usize, message: String },

    /// Reading the input or writing an output failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The external renderer could not be started or reported a failure.
    #[error("renderer '{program}' failed: {message}")]
    Render { program: String, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn config(message: impl Into<String>) -> Error {
        Error::Config {
            message: message.into(),
        }
    }

    pub fn format(line: usize, message: impl Into<String>) -> Error {
        Error::Format {
            line,
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Error {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
