//! Progress entities: stored submissions, per-user stats, daily question records

use crate::scoring::ScoreResult;
use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Numeric user identifier supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// One scored submission (Entity)
///
/// Created once per submission and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub user_id: UserId,
    pub question_id: String,
    pub answer: String,
    pub feedback: String,
    /// Expected keywords that were found in the answer
    pub keywords: Vec<String>,
    pub keyword_score: f64,
    pub sentiment_score: f64,
    pub timestamp: DateTime<Utc>,
}

impl ProgressRecord {
    /// Build a record from a scored answer
    pub fn from_score(
        user_id: UserId,
        question_id: impl Into<String>,
        answer: impl Into<String>,
        score: &ScoreResult,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            question_id: question_id.into(),
            answer: answer.into(),
            feedback: score.final_feedback.clone(),
            keywords: score.matched_keywords.clone(),
            keyword_score: score.keyword_score,
            sentiment_score: score.sentiment_score.value(),
            timestamp,
        }
    }

    /// Comma-joined summary of matched keywords
    pub fn keywords_summary(&self) -> String {
        self.keywords.join(",")
    }
}

/// Running totals for a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    /// Consecutive calendar days with at least one answer
    pub streak: u32,
    pub total_answers: u64,
    /// Sum of the integer part of every keyword score
    pub points: u64,
    pub last_answered: Option<NaiveDate>,
}

impl UserStats {
    /// Fold one saved submission into the stats.
    ///
    /// A second answer on the same day leaves the streak alone, an answer
    /// the day after the last one extends it, and anything else restarts it
    /// at 1.
    pub fn record_answer(&mut self, keyword_score: f64, today: NaiveDate) {
        self.streak = match self.last_answered {
            Some(last) if last == today => self.streak.max(1),
            Some(last) if last.checked_add_days(Days::new(1)) == Some(today) => {
                self.streak.saturating_add(1)
            }
            _ => 1,
        };
        self.last_answered = Some(today);
        self.total_answers = self.total_answers.saturating_add(1);
        self.points = self
            .points
            .saturating_add(keyword_score.max(0.0).trunc() as u64);
    }

    /// Streak as of `today`: zero if the user missed yesterday and today
    pub fn current_streak(&self, today: NaiveDate) -> u32 {
        match self.last_answered {
            Some(last)
                if last == today || last.checked_add_days(Days::new(1)) == Some(today) =>
            {
                self.streak
            }
            _ => 0,
        }
    }
}

/// The question assigned to a user for a given day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyQuestionRecord {
    pub user_id: UserId,
    pub date: NaiveDate,
    pub question_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{FeedbackPolicy, SentimentScore, match_keywords};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_first_answer_starts_streak() {
        let mut stats = UserStats::default();
        stats.record_answer(7.5, day(1));
        assert_eq!(stats.streak, 1);
        assert_eq!(stats.total_answers, 1);
        assert_eq!(stats.points, 7);
        assert_eq!(stats.last_answered, Some(day(1)));
    }

    #[test]
    fn test_same_day_does_not_extend_streak() {
        let mut stats = UserStats::default();
        stats.record_answer(5.0, day(1));
        stats.record_answer(10.0, day(1));
        assert_eq!(stats.streak, 1);
        assert_eq!(stats.total_answers, 2);
        assert_eq!(stats.points, 15);
    }

    #[test]
    fn test_consecutive_days_extend_streak() {
        let mut stats = UserStats::default();
        for d in 1..=4 {
            stats.record_answer(3.33, day(d));
        }
        assert_eq!(stats.streak, 4);
        assert_eq!(stats.points, 12);
    }

    #[test]
    fn test_gap_resets_streak() {
        let mut stats = UserStats::default();
        stats.record_answer(5.0, day(1));
        stats.record_answer(5.0, day(2));
        stats.record_answer(5.0, day(5));
        assert_eq!(stats.streak, 1);
        assert_eq!(stats.total_answers, 3);
    }

    #[test]
    fn test_current_streak_expires() {
        let mut stats = UserStats::default();
        stats.record_answer(5.0, day(1));
        stats.record_answer(5.0, day(2));
        assert_eq!(stats.current_streak(day(2)), 2);
        assert_eq!(stats.current_streak(day(3)), 2);
        assert_eq!(stats.current_streak(day(4)), 0);
    }

    #[test]
    fn test_record_from_score() {
        let score = ScoreResult::compose(
            match_keywords("rest and http", &["rest", "api", "http"]),
            SentimentScore::new(0.2),
            &FeedbackPolicy::default(),
        );
        let record = ProgressRecord::from_score(UserId(3), "g2", "rest and http", &score, Utc::now());
        assert_eq!(record.keywords_summary(), "rest,http");
        assert_eq!(record.keyword_score, 6.67);
        assert_eq!(record.sentiment_score, 0.2);
        assert_eq!(record.feedback, score.final_feedback);
    }

    #[test]
    fn test_user_id_serializes_as_number() {
        assert_eq!(serde_json::to_string(&UserId(42)).unwrap(), "42");
    }
}
