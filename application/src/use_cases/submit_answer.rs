//! Submit Answer use case
//!
//! Scores an answer and persists it as a progress record, updating the
//! user's streak, answer count and points.

use crate::ports::progress_repository::{ProgressRepository, RepositoryError};
use crate::use_cases::evaluate_answer::AnswerEvaluator;
use crate::use_cases::shared::find_question;
use chrono::{DateTime, Local, NaiveDate, Utc};
use interview_domain::{
    DomainError, ProgressRecord, Question, QuestionCatalog, ScoreResult, UserId, UserStats,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while submitting an answer
#[derive(Error, Debug)]
pub enum SubmitAnswerError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Could not save progress: {0}")]
    Repository(#[from] RepositoryError),
}

/// Input for the SubmitAnswer use case
#[derive(Debug, Clone)]
pub struct SubmitAnswerInput {
    pub user_id: UserId,
    pub question_id: String,
    pub answer: String,
    /// Keywords to score against; the question's own keywords when `None`
    pub expected_keywords: Option<Vec<String>>,
    pub submitted_at: DateTime<Utc>,
    /// Calendar day used for the streak
    pub today: NaiveDate,
}

impl SubmitAnswerInput {
    /// Input stamped with the current time; `today` is the local calendar day
    pub fn new(user_id: UserId, question_id: impl Into<String>, answer: impl Into<String>) -> Self {
        let now = Local::now();
        Self {
            user_id,
            question_id: question_id.into(),
            answer: answer.into(),
            expected_keywords: None,
            submitted_at: now.with_timezone(&Utc),
            today: now.date_naive(),
        }
    }

    pub fn with_expected_keywords(mut self, keywords: Vec<String>) -> Self {
        self.expected_keywords = Some(keywords);
        self
    }

    pub fn at(mut self, submitted_at: DateTime<Utc>, today: NaiveDate) -> Self {
        self.submitted_at = submitted_at;
        self.today = today;
        self
    }
}

/// Output of the SubmitAnswer use case
#[derive(Debug, Clone, Serialize)]
pub struct SubmitAnswerOutput {
    pub question: Question,
    pub score: ScoreResult,
    pub record: ProgressRecord,
    pub stats: UserStats,
}

/// Use case for scoring and saving an answer
pub struct SubmitAnswerUseCase {
    catalog: Arc<QuestionCatalog>,
    evaluator: AnswerEvaluator,
    repository: Arc<dyn ProgressRepository>,
}

impl SubmitAnswerUseCase {
    pub fn new(
        catalog: Arc<QuestionCatalog>,
        evaluator: AnswerEvaluator,
        repository: Arc<dyn ProgressRepository>,
    ) -> Self {
        Self {
            catalog,
            evaluator,
            repository,
        }
    }

    pub async fn execute(
        &self,
        input: SubmitAnswerInput,
    ) -> Result<SubmitAnswerOutput, SubmitAnswerError> {
        let question = find_question(&self.catalog, &input.question_id)?;

        let score = match &input.expected_keywords {
            Some(keywords) => self.evaluator.evaluate(question, &input.answer, keywords),
            None => self.evaluator.evaluate_question(question, &input.answer),
        };

        let record = ProgressRecord::from_score(
            input.user_id,
            question.id(),
            input.answer,
            &score,
            input.submitted_at,
        );

        let stats = self
            .repository
            .save_submission(record.clone(), input.today)
            .await?;

        info!(
            "Saved answer from user {} to {} (score {}, streak {})",
            input.user_id,
            question.id(),
            score.keyword_score,
            stats.streak
        );

        Ok(SubmitAnswerOutput {
            question: question.clone(),
            score,
            record,
            stats,
        })
    }
}
