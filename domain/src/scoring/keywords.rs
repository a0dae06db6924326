//! Keyword matching against normalized answer tokens

use super::normalize::normalize;
use super::round2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Maximum keyword score
pub const MAX_KEYWORD_SCORE: f64 = 10.0;

/// Outcome of matching an answer against a question's expected keywords
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatch {
    /// `round((matched / expected) * 10, 2)`, or 0 when nothing was expected
    pub score: f64,
    /// Lowercased expected keywords that were found, in expected order
    pub matched: Vec<String>,
    /// Number of expected keywords
    pub expected_count: usize,
}

impl KeywordMatch {
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    /// Whether every expected keyword was found
    pub fn is_complete(&self) -> bool {
        self.expected_count > 0 && self.matched.len() == self.expected_count
    }
}

/// Match `expected` keywords against the normalized tokens of `answer`.
///
/// A keyword counts when its lowercase form is exactly one of the tokens.
/// There is no stemming, so "running" does not match "run", and multi-word
/// keywords can never match a single token.
///
/// An empty keyword list scores 0.
pub fn match_keywords<S: AsRef<str>>(answer: &str, expected: &[S]) -> KeywordMatch {
    let tokens: HashSet<String> = normalize(answer).into_iter().collect();

    let matched: Vec<String> = expected
        .iter()
        .map(|kw| kw.as_ref().to_lowercase())
        .filter(|kw| tokens.contains(kw))
        .collect();

    let score = if expected.is_empty() {
        0.0
    } else {
        round2(matched.len() as f64 / expected.len() as f64 * MAX_KEYWORD_SCORE)
    };

    KeywordMatch {
        score,
        matched,
        expected_count: expected.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_http_scenario() {
        let result = match_keywords(
            "I understand REST and HTTP endpoints",
            &["rest", "api", "endpoint", "http"],
        );
        assert_eq!(result.matched, vec!["rest", "http"]);
        assert_eq!(result.expected_count, 4);
        assert_eq!(result.score, 5.0);
    }

    #[test]
    fn test_empty_keywords_score_zero() {
        let none: [&str; 0] = [];
        for answer in ["", "anything at all", "rest api http"] {
            let result = match_keywords(answer, &none);
            assert_eq!(result.score, 0.0);
            assert!(result.matched.is_empty());
            assert!(!result.is_complete());
        }
    }

    #[test]
    fn test_all_keywords_score_ten() {
        let result = match_keywords(
            "Lists are mutable, a tuple is not; a list can grow.",
            &["list", "tuple", "mutable"],
        );
        assert_eq!(result.score, 10.0);
        assert!(result.is_complete());
    }

    #[test]
    fn test_keyword_case_insensitive() {
        let result = match_keywords("hashing uses a hash map", &["HASH", "Map", "collision"]);
        assert_eq!(result.matched, vec!["hash", "map"]);
        assert_eq!(result.score, 6.67);
    }

    #[test]
    fn test_curly_quotes_and_ellipsis_do_not_block_matches() {
        let result = match_keywords("I know “REST” and HTTP…", &["rest", "http"]);
        assert_eq!(result.matched, vec!["rest", "http"]);
        assert_eq!(result.score, 10.0);
    }

    #[test]
    fn test_no_stemming() {
        let result = match_keywords("I run every day", &["running"]);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_multi_word_keyword_never_matches() {
        let result = match_keywords(
            "Netflix uses machine learning for recommendation",
            &["recommendation", "algorithm", "machine learning"],
        );
        assert_eq!(result.matched, vec!["recommendation"]);
        assert_eq!(result.score, 3.33);
    }

    #[test]
    fn test_empty_answer() {
        let result = match_keywords("", &["thread", "parallel"]);
        assert_eq!(result.matched_count(), 0);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_score_always_in_range() {
        let keywords = ["thread", "parallel", "concurrency"];
        let answers = [
            "",
            "thread",
            "Thread, parallel, CONCURRENCY!",
            "thread thread thread",
            "nothing relevant here",
        ];
        for answer in answers {
            let result = match_keywords(answer, &keywords);
            assert!((0.0..=MAX_KEYWORD_SCORE).contains(&result.score));
            assert_eq!(result.score == MAX_KEYWORD_SCORE, result.is_complete());
        }
    }
}
