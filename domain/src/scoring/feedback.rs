//! Feedback text composition
//!
//! Deterministic: identical inputs always produce byte-identical text.

use super::keywords::{KeywordMatch, MAX_KEYWORD_SCORE};
use super::sentiment::SentimentScore;
use serde::{Deserialize, Serialize};

pub const LOW_KEYWORD_REMARK: &str = "Include more domain-specific keywords in your answer.";
pub const GOOD_KEYWORD_REMARK: &str = "Good use of necessary keywords.";
pub const LOW_CONFIDENCE_REMARK: &str = "Try answering with more confidence.";
pub const GOOD_CONFIDENCE_REMARK: &str = "Your answer reflects good confidence.";

/// Knobs for feedback assembly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackPolicy {
    /// Keyword scores below this get the "more keywords" remark
    pub good_keyword_threshold: f64,
    /// Separator placed between feedback segments
    pub delimiter: String,
}

impl Default for FeedbackPolicy {
    fn default() -> Self {
        Self {
            good_keyword_threshold: 5.0,
            delimiter: " | ".to_string(),
        }
    }
}

/// Build the feedback string for a scored answer.
///
/// Segments: keyword score, confidence score, keyword remark, confidence remark.
pub fn compose_feedback(
    keywords: &KeywordMatch,
    sentiment: SentimentScore,
    policy: &FeedbackPolicy,
) -> String {
    let keyword_remark = if keywords.score < policy.good_keyword_threshold {
        LOW_KEYWORD_REMARK
    } else {
        GOOD_KEYWORD_REMARK
    };

    let confidence_remark = if sentiment.is_negative() {
        LOW_CONFIDENCE_REMARK
    } else {
        GOOD_CONFIDENCE_REMARK
    };

    let segments = [
        format!(
            "Keyword Score: {}/{}",
            format_score(keywords.score),
            MAX_KEYWORD_SCORE as u32
        ),
        format!(
            "Confidence (Sentiment) Score: {}/{}",
            format_score(sentiment.confidence()),
            MAX_KEYWORD_SCORE as u32
        ),
        keyword_remark.to_string(),
        confidence_remark.to_string(),
    ];

    segments.join(&policy.delimiter)
}

/// Render a score with at least one decimal place ("5.0", "6.67")
pub fn format_score(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
