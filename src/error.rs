/// Error types for aa-questions
///
/// This module defines all possible errors that can occur in the access layer.
/// Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for aa-questions operations
#[derive(Error, Debug)]
pub enum QuestionsError {
    /// Database-related errors, including rows that fail to decode
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O errors (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Record already carries an id and cannot be inserted again
    #[error("{0} already in database")]
    AlreadyPersisted(String),

    /// Record has no id yet, so it cannot be used to navigate relations
    #[error("{0} has not been saved")]
    NotPersisted(String),

    /// Karma ratio has a zero denominator (no likes received)
    #[error("Karma is undefined for user {0}: no likes received")]
    KarmaUndefined(i64),

    /// Lookup that the caller required to succeed matched nothing
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for aa-questions operations
pub type Result<T> = std::result::Result<T, QuestionsError>;

/// Convert QuestionsError to a user-friendly error message
impl QuestionsError {
    pub fn user_message(&self) -> String {
        match self {
            QuestionsError::Database(e) => {
                format!("Database error occurred. Is the schema loaded? Details: {}", e)
            }
            QuestionsError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            QuestionsError::AlreadyPersisted(what) => {
                format!("{} was already saved and cannot be inserted twice", what)
            }
            QuestionsError::NotPersisted(what) => {
                format!("{} must be saved before it can be queried", what)
            }
            QuestionsError::KarmaUndefined(user_id) => {
                format!("User {} has no likes yet, so karma is undefined", user_id)
            }
            QuestionsError::NotFound(what) => format!("{} not found", what),
            QuestionsError::Config(msg) => format!("Configuration issue: {}", msg),
            QuestionsError::Serialization(e) => format!("Data format error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_user_messages() {
        let err = QuestionsError::NotFound("Question 7".to_string());
        assert!(err.user_message().contains("Question 7"));

        let err = QuestionsError::KarmaUndefined(3);
        assert!(err.user_message().contains("no likes"));
    }

    #[test]
    fn test_error_display() {
        let err = QuestionsError::AlreadyPersisted("User Ada Lovelace (id 1)".to_string());
        let display = format!("{}", err);
        assert_eq!(display, "User Ada Lovelace (id 1) already in database");
    }

    #[test]
    fn test_every_variant_has_a_message() {
        let errors = vec![
            QuestionsError::Database(sqlx::Error::RowNotFound),
            QuestionsError::Io(std::io::Error::other("disk")),
            QuestionsError::AlreadyPersisted("User Ada Lovelace (id 1)".to_string()),
            QuestionsError::NotPersisted("User Ada Lovelace".to_string()),
            QuestionsError::KarmaUndefined(1),
            QuestionsError::NotFound("Reply 2".to_string()),
            QuestionsError::Config("bad path".to_string()),
            QuestionsError::Serialization(serde_json::from_str::<i64>("x").unwrap_err()),
        ];

        for err in errors {
            assert!(!err.user_message().is_empty());
            assert!(!err.to_string().is_empty());
        }
    }
}
