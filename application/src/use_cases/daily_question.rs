//! Daily Question use case
//!
//! Returns the question assigned to a user for a given day, assigning and
//! persisting one if needed.

use crate::ports::progress_repository::{ProgressRepository, RepositoryError};
use chrono::NaiveDate;
use interview_domain::{DomainError, Question, QuestionCatalog, UserId, select_daily_question};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while fetching the daily question
#[derive(Error, Debug)]
pub enum DailyQuestionError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Could not access daily question: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use case for the per-user daily question
pub struct DailyQuestionUseCase {
    catalog: Arc<QuestionCatalog>,
    repository: Arc<dyn ProgressRepository>,
}

impl DailyQuestionUseCase {
    pub fn new(catalog: Arc<QuestionCatalog>, repository: Arc<dyn ProgressRepository>) -> Self {
        Self {
            catalog,
            repository,
        }
    }

    pub async fn execute(
        &self,
        user_id: UserId,
        today: NaiveDate,
    ) -> Result<Question, DailyQuestionError> {
        let stored = self.repository.daily_question(user_id).await?;

        let selection = select_daily_question(&self.catalog, user_id, today, stored.as_ref())
            .ok_or(DomainError::EmptyCatalog)?;

        if selection.is_new {
            debug!(
                "Assigning daily question {} to user {} for {}",
                selection.question.id(),
                user_id,
                today
            );
            self.repository
                .save_daily_question(selection.record.clone())
                .await?;
        }

        Ok(selection.question.clone())
    }
}
