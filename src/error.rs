//! Error types for threadboard.

use thiserror::Error;

/// Common error type for threadboard.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Database error.
    ///
    /// Errors from sqlx are converted into this variant.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required field is missing or malformed.
    #[error("validation error: {0}")]
    Validation(String),

    /// Thread or reply not found.
    #[error("{0} not found")]
    NotFound(String),

    /// A document changed between read and write too many times.
    #[error("update conflict: {0}")]
    Conflict(String),

    /// Delete password could not be hashed or the stored hash is unusable.
    #[error("password error: {0}")]
    Password(String),

    /// Stored document could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for BoardError {
    fn from(e: sqlx::Error) -> Self {
        BoardError::Database(e.to_string())
    }
}

/// Result type alias for threadboard operations.
pub type Result<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error_display() {
        let err = BoardError::NotFound("thread".to_string());
        assert_eq!(err.to_string(), "thread not found");
    }

    #[test]
    fn test_validation_error_display() {
        let err = BoardError::Validation("text is required".to_string());
        assert_eq!(err.to_string(), "validation error: text is required");
    }

    #[test]
    fn test_conflict_error_display() {
        let err = BoardError::Conflict("thread abc".to_string());
        assert_eq!(err.to_string(), "update conflict: thread abc");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BoardError = io_err.into();
        assert!(matches!(err, BoardError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_serde_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: BoardError = json_err.into();
        assert!(matches!(err, BoardError::Serialization(_)));
    }

    #[test]
    fn test_sqlx_error_conversion() {
        let err: BoardError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, BoardError::Database(_)));
    }

    #[test]
    fn test_result_alias() {
        fn sample_ok() -> Result<i32> {
            Ok(42)
        }

        fn sample_err() -> Result<i32> {
            Err(BoardError::NotFound("reply".to_string()))
        }

        assert_eq!(sample_ok().unwrap(), 42);
        assert!(sample_err().is_err());
    }
}
