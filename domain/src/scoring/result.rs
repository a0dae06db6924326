//! Score result value object

use super::feedback::{FeedbackPolicy, compose_feedback};
use super::keywords::KeywordMatch;
use super::sentiment::SentimentScore;
use serde::{Deserialize, Serialize};

/// Scored answer: keyword score, sentiment polarity and feedback text
///
/// Serializes with the keys `keyword_score`, `sentiment_score` and
/// `final_feedback`, plus the matched keywords.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Keyword score in `[0, 10]`
    pub keyword_score: f64,
    /// Sentiment polarity in `[-1, 1]`
    pub sentiment_score: SentimentScore,
    /// Human-readable feedback
    pub final_feedback: String,
    /// Expected keywords found in the answer
    pub matched_keywords: Vec<String>,
}

impl ScoreResult {
    /// Assemble a result from the keyword match and sentiment of an answer
    pub fn compose(
        keywords: KeywordMatch,
        sentiment: SentimentScore,
        policy: &FeedbackPolicy,
    ) -> Self {
        let final_feedback = compose_feedback(&keywords, sentiment, policy);
        Self {
            keyword_score: keywords.score,
            sentiment_score: sentiment,
            final_feedback,
            matched_keywords: keywords.matched,
        }
    }

    /// Confidence figure in `[0, 10]` derived from the sentiment
    pub fn confidence(&self) -> f64 {
        self.sentiment_score.confidence()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::match_keywords;

    #[test]
    fn test_compose_from_parts() {
        let keywords = match_keywords(
            "I understand REST and HTTP endpoints",
            &["rest", "api", "endpoint", "http"],
        );
        let result = ScoreResult::compose(
            keywords,
            SentimentScore::new(0.0),
            &FeedbackPolicy::default(),
        );
        assert_eq!(result.keyword_score, 5.0);
        assert_eq!(result.matched_keywords, vec!["rest", "http"]);
        assert!(result.final_feedback.starts_with("Keyword Score: 5.0/10"));
        assert_eq!(result.confidence(), 5.0);
    }

    #[test]
    fn test_serialized_keys() {
        let result = ScoreResult::compose(
            match_keywords("thread", &["thread"]),
            SentimentScore::new(-0.5),
            &FeedbackPolicy::default(),
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["keyword_score"], 10.0);
        assert_eq!(json["sentiment_score"], -0.5);
        assert!(json["final_feedback"].as_str().unwrap().contains("more confidence"));
    }
}
