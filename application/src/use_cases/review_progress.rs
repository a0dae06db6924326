//! Review Progress use case
//!
//! Builds a user's progress report: stats, score history and the list of
//! past answers with their feedback.

use crate::ports::progress_repository::{ProgressRepository, RepositoryError};
use chrono::NaiveDate;
use interview_domain::{ProgressRecord, QuestionCatalog, UserId, UserStats};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Prompt shown for records whose question is no longer in the catalog
pub const UNKNOWN_QUESTION: &str = "Unknown";

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Errors that can occur while building a progress report
#[derive(Error, Debug)]
pub enum ReviewProgressError {
    #[error("Could not load progress: {0}")]
    Repository(#[from] RepositoryError),
}

/// One past answer, ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub question_id: String,
    pub question: String,
    pub answer: String,
    pub feedback: String,
    pub score: f64,
    pub sentiment: f64,
    pub keywords: String,
    pub time: String,
}

impl ProgressEntry {
    fn from_record(record: &ProgressRecord, catalog: &QuestionCatalog) -> Self {
        Self {
            question_id: record.question_id.clone(),
            question: catalog
                .get(&record.question_id)
                .map(|q| q.text().to_string())
                .unwrap_or_else(|| UNKNOWN_QUESTION.to_string()),
            answer: record.answer.clone(),
            feedback: record.feedback.clone(),
            score: record.keyword_score,
            sentiment: record.sentiment_score,
            keywords: record.keywords_summary(),
            time: record.timestamp.format(TIME_FORMAT).to_string(),
        }
    }
}

/// A user's progress report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub user_id: UserId,
    /// Live streak as of the review date; 0 once a day has been missed
    pub streak: u32,
    pub total_answers: u64,
    pub points: u64,
    /// Keyword score per answer, oldest first
    pub scores: Vec<f64>,
    /// Sentiment per answer, oldest first
    pub sentiment: Vec<f64>,
    /// Matched keyword count per answer, oldest first
    pub keyword_counts: Vec<usize>,
    pub entries: Vec<ProgressEntry>,
}

impl ProgressReport {
    pub fn build(
        user_id: UserId,
        stats: &UserStats,
        records: &[ProgressRecord],
        catalog: &QuestionCatalog,
        today: NaiveDate,
    ) -> Self {
        Self {
            user_id,
            streak: stats.current_streak(today),
            total_answers: stats.total_answers,
            points: stats.points,
            scores: records.iter().map(|r| r.keyword_score).collect(),
            sentiment: records.iter().map(|r| r.sentiment_score).collect(),
            keyword_counts: records.iter().map(|r| r.keywords.len()).collect(),
            entries: records
                .iter()
                .map(|r| ProgressEntry::from_record(r, catalog))
                .collect(),
        }
    }

    /// Mean keyword score, if the user has answered anything
    pub fn average_score(&self) -> Option<f64> {
        if self.scores.is_empty() {
            None
        } else {
            Some(self.scores.iter().sum::<f64>() / self.scores.len() as f64)
        }
    }
}

/// Use case for reviewing a user's progress
pub struct ReviewProgressUseCase {
    catalog: Arc<QuestionCatalog>,
    repository: Arc<dyn ProgressRepository>,
}

impl ReviewProgressUseCase {
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
    ) -> Result<ProgressReport, ReviewProgressError> {
        let stats = self.repository.user_stats(user_id).await?;
        let records = self.repository.list_progress(user_id).await?;
        Ok(ProgressReport::build(
            user_id,
            &stats,
            &records,
            &self.catalog,
            today,
        ))
    }
}
