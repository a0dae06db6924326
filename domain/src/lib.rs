//! Domain layer for mock-interview
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Question Catalog
//!
//! A fixed, read-only table of interview questions, each with the keywords a
//! good answer is expected to mention.
//!
//! ## Scoring
//!
//! An answer is scored by keyword overlap (normalized tokens against expected
//! keywords, scaled to 0-10) and by sentiment polarity (-1 to 1, shown as a
//! 0-10 confidence figure). Both feed a templated feedback string.
//!
//! ## Progress
//!
//! Every saved submission becomes a [`ProgressRecord`]; [`UserStats`] keep the
//! streak, answer count and points.

pub mod catalog;
pub mod config;
pub mod core;
pub mod progress;
pub mod scoring;

// Re-export commonly used types
pub use catalog::QuestionCatalog;
pub use config::OutputFormat;
pub use core::{
    error::DomainError,
    question::{Question, QuestionCategory},
};
pub use progress::{
    DailyQuestionRecord, DailySelection, ProgressRecord, UserId, UserStats, select_daily_question,
};
pub use scoring::{
    FeedbackPolicy, KeywordMatch, ScoreResult, SentimentScore, compose_feedback, match_keywords,
    normalize,
};
