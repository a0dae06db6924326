//! Evaluate Answer use case
//!
//! The scoring pipeline: keyword matching, then sentiment, then feedback.
//! Pure over its inputs; no I/O and no shared mutable state.

use crate::ports::sentiment::SentimentAnalyzer;
use interview_domain::{FeedbackPolicy, Question, ScoreResult, match_keywords};
use std::sync::Arc;
use tracing::debug;

/// Scores answers against expected keywords
#[derive(Clone)]
pub struct AnswerEvaluator {
    sentiment: Arc<dyn SentimentAnalyzer>,
    policy: FeedbackPolicy,
}

impl AnswerEvaluator {
    pub fn new(sentiment: Arc<dyn SentimentAnalyzer>) -> Self {
        Self {
            sentiment,
            policy: FeedbackPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: FeedbackPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Score `answer` against `expected_keywords`
    pub fn evaluate<S: AsRef<str>>(
        &self,
        question: &Question,
        answer: &str,
        expected_keywords: &[S],
    ) -> ScoreResult {
        let keywords = match_keywords(answer, expected_keywords);
        let sentiment = self.sentiment.polarity(answer);

        debug!(
            "Scored answer to {}: {}/{} keywords, sentiment {:.3}",
            question.id(),
            keywords.matched_count(),
            keywords.expected_count,
            sentiment.value()
        );

        ScoreResult::compose(keywords, sentiment, &self.policy)
    }

    /// Score `answer` against the question's own keywords
    pub fn evaluate_question(&self, question: &Question, answer: &str) -> ScoreResult {
        self.evaluate(question, answer, question.keywords())
    }
}
