//! Helpers shared by the use cases

use interview_domain::{DomainError, Question, QuestionCatalog};

/// Look up a question, turning absence into [`DomainError::QuestionNotFound`]
pub fn find_question<'a>(
    catalog: &'a QuestionCatalog,
    question_id: &str,
) -> Result<&'a Question, DomainError> {
    catalog
        .get(question_id)
        .ok_or_else(|| DomainError::QuestionNotFound(question_id.to_string()))
}

/// Random question, or [`DomainError::EmptyCatalog`]
pub fn random_question(catalog: &QuestionCatalog) -> Result<&Question, DomainError> {
    catalog.random().ok_or(DomainError::EmptyCatalog)
}
