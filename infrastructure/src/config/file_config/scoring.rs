//! Scoring configuration from TOML (`[scoring]` section)

use interview_domain::FeedbackPolicy;
use serde::{Deserialize, Serialize};

/// Raw scoring configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileScoringConfig {
    /// Keyword score below which the feedback asks for more keywords
    pub good_keyword_threshold: f64,
    /// Separator between feedback segments
    pub feedback_delimiter: String,
}

impl Default for FileScoringConfig {
    fn default() -> Self {
        let policy = FeedbackPolicy::default();
        Self {
            good_keyword_threshold: policy.good_keyword_threshold,
            feedback_delimiter: policy.delimiter,
        }
    }
}

impl FileScoringConfig {
    pub fn to_feedback_policy(&self) -> FeedbackPolicy {
        FeedbackPolicy {
            good_keyword_threshold: self.good_keyword_threshold,
            delimiter: self.feedback_delimiter.clone(),
        }
    }
}
