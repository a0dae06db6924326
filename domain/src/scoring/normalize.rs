//! Text normalization: lowercase, strip punctuation, tokenize, drop stopwords.

use super::stopwords::is_stopword;

/// Normalize free text into a sequence of content tokens.
///
/// Steps, in order: lowercase, remove every character that is neither
/// alphanumeric nor whitespace, split on whitespace, drop stopwords.
/// Unicode punctuation (curly quotes, ellipses, guillemets) is removed too.
/// Empty input yields an empty vector.
///
/// # Example
///
/// ```
/// use interview_domain::scoring::normalize;
///
/// assert_eq!(normalize("I understand REST, and HTTP!"), vec!["understand", "rest", "http"]);
/// ```
pub fn normalize(text: &str) -> Vec<String> {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    stripped
        .split_whitespace()
        .filter(|token| !is_stopword(token))
        .map(str::to_string)
        .collect()
}
