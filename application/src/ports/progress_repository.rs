//! Progress persistence port
//!
//! Stores submissions, per-user stats and daily question assignments.

use async_trait::async_trait;
use chrono::NaiveDate;
use interview_domain::{DailyQuestionRecord, ProgressRecord, UserId, UserStats};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur in a progress repository
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Storage I/O error: {0}")]
    Io(String),

    #[error("Corrupt progress data: {0}")]
    Corrupt(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Persistence for user progress
///
/// Implementations must apply [`save_submission`](Self::save_submission)
/// atomically per user: the record is appended and the stats updated as one
/// step, so concurrent submissions by the same user cannot lose updates.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Append a submission and fold it into the user's stats.
    ///
    /// Returns the updated stats.
    async fn save_submission(
        &self,
        record: ProgressRecord,
        today: NaiveDate,
    ) -> Result<UserStats, RepositoryError>;

    /// Stats for a user (defaults if the user has never answered)
    async fn user_stats(&self, user_id: UserId) -> Result<UserStats, RepositoryError>;

    /// All submissions of a user, oldest first
    async fn list_progress(&self, user_id: UserId) -> Result<Vec<ProgressRecord>, RepositoryError>;

    /// The stored daily question assignment of a user, if any
    async fn daily_question(
        &self,
        user_id: UserId,
    ) -> Result<Option<DailyQuestionRecord>, RepositoryError>;

    /// Replace the daily question assignment of a user
    async fn save_daily_question(&self, record: DailyQuestionRecord)
    -> Result<(), RepositoryError>;
}

/// All progress data, keyed by user
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ProgressSnapshot {
    #[serde(default)]
    pub records: Vec<ProgressRecord>,
    #[serde(default)]
    pub stats: HashMap<UserId, UserStats>,
    #[serde(default)]
    pub daily: HashMap<UserId, DailyQuestionRecord>,
}

impl ProgressSnapshot {
    /// Append a submission and update the owner's stats
    pub fn apply_submission(&mut self, record: ProgressRecord, today: NaiveDate) -> UserStats {
        let stats = self.stats.entry(record.user_id).or_default();
        stats.record_answer(record.keyword_score, today);
        let updated = stats.clone();
        debug!(
            "User {} now at streak {} with {} points",
            record.user_id, updated.streak, updated.points
        );
        self.records.push(record);
        updated
    }

    pub fn user_stats(&self, user_id: UserId) -> UserStats {
        self.stats.get(&user_id).cloned().unwrap_or_default()
    }

    pub fn user_records(&self, user_id: UserId) -> Vec<ProgressRecord> {
        self.records
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect()
    }
}

/// Non-persistent repository, for tests and throwaway sessions
#[derive(Default)]
pub struct InMemoryProgressRepository {
    snapshot: Mutex<ProgressSnapshot>,
}

impl InMemoryProgressRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, ProgressSnapshot>, RepositoryError> {
        self.snapshot
            .lock()
            .map_err(|_| RepositoryError::Unavailable("progress lock poisoned".into()))
    }
}

#[async_trait]
impl ProgressRepository for InMemoryProgressRepository {
    async fn save_submission(
        &self,
        record: ProgressRecord,
        today: NaiveDate,
    ) -> Result<UserStats, RepositoryError> {
        let mut snapshot = self.lock()?;
        Ok(snapshot.apply_submission(record, today))
    }

    async fn user_stats(&self, user_id: UserId) -> Result<UserStats, RepositoryError> {
        Ok(self.lock()?.user_stats(user_id))
    }

    async fn list_progress(&self, user_id: UserId) -> Result<Vec<ProgressRecord>, RepositoryError> {
        Ok(self.lock()?.user_records(user_id))
    }

    async fn daily_question(
        &self,
        user_id: UserId,
    ) -> Result<Option<DailyQuestionRecord>, RepositoryError> {
        Ok(self.lock()?.daily.get(&user_id).cloned())
    }

    async fn save_daily_question(
        &self,
        record: DailyQuestionRecord,
    ) -> Result<(), RepositoryError> {
        self.lock()?.daily.insert(record.user_id, record);
        Ok(())
    }
}
