//! Sentiment polarity value object

use super::round2;
use serde::{Deserialize, Serialize};

/// Compound sentiment polarity in `[-1, 1]`
///
/// Produced by a sentiment analyzer port; values outside the range are
/// clamped and non-finite values fall back to [`SentimentScore::NEUTRAL`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SentimentScore(f64);

impl SentimentScore {
    /// Score reported for text with no sentiment-bearing words (including empty text)
    pub const NEUTRAL: SentimentScore = SentimentScore(0.0);

    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(-1.0, 1.0))
        } else {
            Self::NEUTRAL
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Linear remap of `[-1, 1]` onto a `[0, 10]` confidence figure, rounded to 2 places
    pub fn confidence(&self) -> f64 {
        round2((self.0 + 1.0) * 5.0)
    }
}

impl Default for SentimentScore {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl From<f64> for SentimentScore {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_out_of_range() {
        assert_eq!(SentimentScore::new(1.7).value(), 1.0);
        assert_eq!(SentimentScore::new(-3.0).value(), -1.0);
    }

    #[test]
    fn test_non_finite_is_neutral() {
        assert_eq!(SentimentScore::new(f64::NAN), SentimentScore::NEUTRAL);
        assert_eq!(SentimentScore::new(f64::INFINITY), SentimentScore::NEUTRAL);
    }

    #[test]
    fn test_confidence_remap() {
        assert_eq!(SentimentScore::new(-1.0).confidence(), 0.0);
        assert_eq!(SentimentScore::NEUTRAL.confidence(), 5.0);
        assert_eq!(SentimentScore::new(1.0).confidence(), 10.0);
        assert_eq!(SentimentScore::new(0.4404).confidence(), 7.2);
    }

    #[test]
    fn test_confidence_always_in_range() {
        for i in -20..=20 {
            let c = SentimentScore::new(i as f64 / 10.0).confidence();
            assert!((0.0..=10.0).contains(&c));
        }
    }

    #[test]
    fn test_zero_is_not_negative() {
        assert!(!SentimentScore::NEUTRAL.is_negative());
        assert!(SentimentScore::new(-0.01).is_negative());
    }
}
