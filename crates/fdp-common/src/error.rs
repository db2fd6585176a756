//! Error types for FDP

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for FDP operations
pub type Result<T> = std::result::Result<T, EtlError>;

/// Main error type for the FDP pipeline
///
/// Where a failure is fatal depends on the stage that hits it: a store
/// error is fatal at connect time, a warning during index or shard
/// provisioning, and abandons a single entity during the load stage.
#[derive(Error, Debug)]
pub enum EtlError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("document store error: {0}")]
    Store(#[from] mongodb::error::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_not_found_names_the_path() {
        let err = EtlError::SourceNotFound(PathBuf::from("dataset/players.csv"));
        assert_eq!(err.to_string(), "source file not found: dataset/players.csv");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = EtlError::from(io);
        assert!(matches!(err, EtlError::Io(_)));
    }

    #[test]
    fn test_config_error_display() {
        let err = EtlError::Config("database name cannot be empty".to_string());
        assert!(err.to_string().contains("database name cannot be empty"));
    }
}
