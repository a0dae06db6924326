//! Application layer for mock-interview
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    progress_repository::{
        InMemoryProgressRepository, ProgressRepository, ProgressSnapshot, RepositoryError,
    },
    sentiment::{FixedSentiment, NeutralSentiment, SentimentAnalyzer},
};
pub use use_cases::daily_question::{DailyQuestionError, DailyQuestionUseCase};
pub use use_cases::evaluate_answer::AnswerEvaluator;
pub use use_cases::review_progress::{
    ProgressEntry, ProgressReport, ReviewProgressError, ReviewProgressUseCase,
};
pub use use_cases::shared::{find_question, random_question};
pub use use_cases::submit_answer::{
    SubmitAnswerError, SubmitAnswerInput, SubmitAnswerOutput, SubmitAnswerUseCase,
};
