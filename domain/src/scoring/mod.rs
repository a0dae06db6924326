//! Answer scoring
//!
//! The pure parts of the scoring pipeline:
//!
//! - [`normalize`]: lowercase, punctuation-free, stopword-filtered tokens
//! - [`match_keywords`]: exact-token keyword overlap scaled to `[0, 10]`
//! - [`SentimentScore`]: polarity value object and confidence remap
//! - [`compose_feedback`]: templated feedback string
//! - [`ScoreResult`]: the combined outcome
//!
//! Sentiment analysis itself is an external capability; see the
//! application layer's `SentimentAnalyzer` port.

pub mod feedback;
pub mod keywords;
pub mod normalize;
pub mod result;
pub mod sentiment;
pub mod stopwords;

pub use feedback::{FeedbackPolicy, compose_feedback, format_score};
pub use keywords::{KeywordMatch, MAX_KEYWORD_SCORE, match_keywords};
pub use normalize::normalize;
pub use result::ScoreResult;
pub use sentiment::SentimentScore;

/// Round to two decimal places
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(6.666_666), 6.67);
        assert_eq!(round2(5.0), 5.0);
        assert_eq!(round2(0.0), 0.0);
    }
}
