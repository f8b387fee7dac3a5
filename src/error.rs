//! Error taxonomy shared by the stores, the session and the CLI
//!
//! Kinds:
//! - `StorageError`: data files missing, unreadable, unwritable or malformed
//! - `ValidationError`: rejected add/remove requests
//! - `AppError`: what `main` reports before exiting non-zero
//!
//! Unreadable terminal lines are not errors here; the input handler turns
//! them into empty lines.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while reading or writing one of the JSON data files
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Rejected vocabulary edit
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("--{0} is required and cannot be blank")]
    MissingField(&'static str),

    #[error("word '{0}' already exists in vocab")]
    AlreadyExists(String),

    #[error("word '{0}' does not exist in vocab")]
    NotFound(String),
}

/// Top-level error returned by every dispatched command
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("terminal output failed: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_name_the_problem() {
        assert_eq!(
            ValidationError::MissingField("pos").to_string(),
            "--pos is required and cannot be blank"
        );
        assert_eq!(
            ValidationError::AlreadyExists("précis".into()).to_string(),
            "word 'précis' already exists in vocab"
        );
        assert_eq!(
            ValidationError::NotFound("zzz".into()).to_string(),
            "word 'zzz' does not exist in vocab"
        );
    }

    #[test]
    fn test_app_error_wraps_kinds_transparently() {
        let err: AppError = ValidationError::NotFound("x".into()).into();
        assert!(matches!(err, AppError::Validation(ValidationError::NotFound(_))));
        assert_eq!(err.to_string(), "word 'x' does not exist in vocab");
    }
}
