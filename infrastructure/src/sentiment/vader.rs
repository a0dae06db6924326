//! VADER sentiment adapter
//!
//! Implements [`SentimentAnalyzer`] with the `vader_sentiment` lexicon and
//! rule set, reporting the `compound` polarity.

use interview_application::SentimentAnalyzer;
use interview_domain::SentimentScore;
use tracing::trace;
use vader_sentiment::SentimentIntensityAnalyzer;

const COMPOUND: &str = "compound";

/// Lexicon/rule based sentiment analyzer (VADER)
#[derive(Debug, Default, Clone, Copy)]
pub struct VaderSentimentAnalyzer;

impl VaderSentimentAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentAnalyzer for VaderSentimentAnalyzer {
    fn polarity(&self, text: &str) -> SentimentScore {
        if text.trim().is_empty() {
            return SentimentScore::NEUTRAL;
        }

        let analyzer = SentimentIntensityAnalyzer::new();
        let scores = analyzer.polarity_scores(text);
        let compound = scores.get(COMPOUND).copied().unwrap_or(0.0);
        trace!("VADER compound {:.4} for {} chars", compound, text.len());

        SentimentScore::new(compound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_neutral() {
        let analyzer = VaderSentimentAnalyzer::new();
        assert_eq!(analyzer.polarity(""), SentimentScore::NEUTRAL);
        assert_eq!(analyzer.polarity("  \n\t"), SentimentScore::NEUTRAL);
    }

    #[test]
    fn test_emoji_only_text_is_scored() {
        let analyzer = VaderSentimentAnalyzer::new();
        for text in ["😀", "👍 👍", ":)"] {
            let value = analyzer.polarity(text).value();
            assert!((-1.0..=1.0).contains(&value), "{text}: {value}");
        }
    }

    #[test]
    fn test_positive_text() {
        let analyzer = VaderSentimentAnalyzer::new();
        let score = analyzer.polarity("I love this work and I am great at it");
        assert!(score.value() > 0.0);
    }

    #[test]
    fn test_negative_text() {
        let analyzer = VaderSentimentAnalyzer::new();
        let score = analyzer.polarity("This is terrible, I hate it and it is awful");
        assert!(score.is_negative());
    }

    #[test]
    fn test_score_in_range() {
        let analyzer = VaderSentimentAnalyzer::new();
        for text in [
            "REST uses HTTP endpoints",
            "AMAZING!!! BEST EVER!!!",
            "worst, horrible, disgusting",
        ] {
            let value = analyzer.polarity(text).value();
            assert!((-1.0..=1.0).contains(&value));
        }
    }
}
