//! User progress: stored submissions, streak/points stats and the daily question.

pub mod daily;
pub mod entities;

pub use daily::{DailySelection, select_daily_question};
pub use entities::{DailyQuestionRecord, ProgressRecord, UserId, UserStats};
