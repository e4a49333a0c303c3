//! Error types for the specindex pipeline.
//!
//! Only run-level failures are errors. Problems with a single document
//! (unreadable file, missing body, dangling anchors) are reported as
//! [`Diagnostic`](crate::core::types::Diagnostic) values and never abort
//! the run.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for specindex operations
pub type Result<T> = std::result::Result<T, IndexError>;

/// Main error type for the indexer
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to write {path:?}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl IndexError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this error came from writing an output artifact
    pub fn is_write_failure(&self) -> bool {
        matches!(self, IndexError::WriteFailed { .. })
    }

    /// Check if this is a configuration problem (bad TOML or values)
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            IndexError::ConfigError(_) | IndexError::TomlError(_)
        )
    }
}
