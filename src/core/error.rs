//! Error types and error handling for mdlaunch.
//!
//! Only configuration errors abort a run. Walk, read, write and delete
//! failures are logged by the pipeline and isolated to the file or
//! phase in progress.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mdlaunch operations
pub type Result<T> = std::result::Result<T, MdlaunchError>;

/// Main error type for mdlaunch
#[derive(Error, Debug)]
pub enum MdlaunchError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Walk error: {0}")]
    WalkError(String),

    #[error("Failed to read document {path:?}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write shortcut {path:?}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl MdlaunchError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this error must abort the whole run
    ///
    /// Per-file errors are recoverable; only malformed configuration
    /// (including malformed rule files) stops a run before output is
    /// touched.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            MdlaunchError::ConfigError(_) | MdlaunchError::TomlError(_)
        )
    }

    /// Check if this is a per-file error the pipeline isolates
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            MdlaunchError::ReadError { .. } | MdlaunchError::WriteError { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_is_fatal() {
        let err = MdlaunchError::ConfigError("uneven rule file".to_string());
        assert!(err.is_fatal());
        assert!(!err.is_per_file());
    }

    #[test]
    fn test_read_error_is_per_file() {
        let err = MdlaunchError::ReadError {
            path: PathBuf::from("/docs/cheat_vim.md"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "locked"),
        };
        assert!(err.is_per_file());
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_write_error_is_per_file() {
        let err = MdlaunchError::WriteError {
            path: PathBuf::from("/urls/Hugo - vim.url"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        assert!(err.is_per_file());
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_walk_error_is_recoverable() {
        let err = MdlaunchError::WalkError("permission denied".to_string());
        assert!(!err.is_fatal());
        assert!(!err.is_per_file());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = MdlaunchError::from(io_err);
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_error_message() {
        let err = MdlaunchError::ConfigError("bad pattern".to_string());
        assert!(err.message().contains("bad pattern"));
        assert!(err.message().contains("Configuration"));
    }
}
