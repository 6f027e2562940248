//! Error types for declaration generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors during declaration generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    // IO errors (exit code 3)
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "remote")]
    #[error("failed to fetch {url}: {source}")]
    NetworkError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    // Parse errors (exit code 2)
    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    // Schema errors (exit code 2)
    #[error("document has no definitions object")]
    MissingDefinitions,

    #[error("reference \"{reference}\" does not point at a known definition")]
    UnknownReference { reference: String },

    #[error("circular reference through \"{name}\" never bottoms out")]
    CircularReference { name: String },

    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Errors from the output formatting pass.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("generated text is unbalanced: unexpected '}}' on line {line}")]
    UnexpectedClose { line: usize },

    #[error("generated text is unbalanced: {count} unclosed '{{' at end of input")]
    UnclosedBraces { count: usize },
}

impl GenerateError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            GenerateError::FileNotFound { .. } | GenerateError::ReadError { .. } => 3,
            #[cfg(feature = "remote")]
            GenerateError::NetworkError { .. } => 3,
            _ => 2,
        }
    }
}
