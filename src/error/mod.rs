//! Error handling module for ClipPrep

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Main error type for ClipPrep operations
#[derive(Error, Debug)]
pub enum PrepError {
    /// The external encoder could not be started or rejected `-version`
    #[error("External tool unavailable: {tool}")]
    ToolUnavailable { tool: String },

    /// Configuration file could not be read
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML or has unknown keys
    #[error("Invalid config file {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Output directory could not be created
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest serialization error
    #[error("Failed to serialize manifest: {0}")]
    ManifestEncode(#[from] serde_json::Error),

    /// Manifest write error
    #[error("Failed to write manifest {path}: {source}")]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Domain invariant violation
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Result type alias for ClipPrep operations
pub type PrepResult<T> = std::result::Result<T, PrepError>;
