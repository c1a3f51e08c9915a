//! Error types for ctxsum

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fingerprinting operations
#[derive(Error, Debug)]
pub enum CtxsumError {
    /// Ignore-pattern errors, raised while compiling the rule set
    #[error("invalid ignore pattern on line {line}: `{pattern}` ({reason})")]
    Pattern {
        line: usize,
        pattern: String,
        reason: String,
    },

    /// The ignore file exists but could not be read
    #[error("failed to read ignore file {path}: {source}")]
    IgnoreRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed
    #[error("failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A file selected for hashing could not be read
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The walk root itself is missing or not a directory
    #[error("context root not found: {path}")]
    RootNotFound { path: PathBuf },

    /// I/O errors with no more specific classification
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CtxsumError {
    /// Create a new pattern error
    pub fn pattern(line: usize, pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Pattern {
            line,
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Create a new ignore-file read error
    pub fn ignore_read(path: PathBuf, source: std::io::Error) -> Self {
        Self::IgnoreRead { path, source }
    }

    /// Create a new file read error
    pub fn file_read(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileRead { path, source }
    }

    /// Create a new root not found error
    pub fn root_not_found(path: PathBuf) -> Self {
        Self::RootNotFound { path }
    }
}

/// Result type alias for fingerprinting operations
pub type Result<T> = std::result::Result<T, CtxsumError>;
