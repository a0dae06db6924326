//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Question not found: {0}")]
    QuestionNotFound(String),

    #[error("No questions available")]
    EmptyCatalog,

    #[error("Invalid question category: {0}")]
    InvalidCategory(String),

    #[error("Invalid question: {0}")]
    InvalidQuestion(String),
}

impl DomainError {
    /// Check if this error means the requested question does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DomainError::QuestionNotFound(_) | DomainError::EmptyCatalog
        )
    }
}
