//! Sentiment analysis port
//!
//! Defines the interface for scoring the polarity of free text.

use interview_domain::SentimentScore;

/// Lexicon/rule based polarity scoring
///
/// Implementations must be total: any string, including the empty string,
/// yields a score in `[-1, 1]`. Text without sentiment-bearing words should
/// score [`SentimentScore::NEUTRAL`].
pub trait SentimentAnalyzer: Send + Sync {
    /// Compound polarity of `text`
    fn polarity(&self, text: &str) -> SentimentScore;
}

/// Analyzer that reports every text as neutral
pub struct NeutralSentiment;

impl SentimentAnalyzer for NeutralSentiment {
    fn polarity(&self, _text: &str) -> SentimentScore {
        SentimentScore::NEUTRAL
    }
}

/// Analyzer that always returns the same score
pub struct FixedSentiment(pub SentimentScore);

impl SentimentAnalyzer for FixedSentiment {
    fn polarity(&self, _text: &str) -> SentimentScore {
        self.0
    }
}
