//! Question value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Which part of an interview a question belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionCategory {
    /// General technical questions
    General,
    /// HR / behavioural questions
    Hr,
    /// Company-specific questions
    Company,
}

impl QuestionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionCategory::General => "general",
            QuestionCategory::Hr => "hr",
            QuestionCategory::Company => "company",
        }
    }
}

impl std::fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for QuestionCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "general" => Ok(QuestionCategory::General),
            "hr" => Ok(QuestionCategory::Hr),
            "company" => Ok(QuestionCategory::Company),
            other => Err(DomainError::InvalidCategory(other.to_string())),
        }
    }
}

/// An interview question with the keywords a good answer is expected to use
///
/// Identity is the `id`. Questions are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: String,
    text: String,
    keywords: Vec<String>,
    category: QuestionCategory,
}

impl Question {
    /// Create a new question
    ///
    /// Returns an error if the id or the prompt text is blank.
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        keywords: Vec<String>,
        category: QuestionCategory,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        let text = text.into();
        if id.trim().is_empty() {
            return Err(DomainError::InvalidQuestion("id cannot be empty".into()));
        }
        if text.trim().is_empty() {
            return Err(DomainError::InvalidQuestion(format!(
                "question {} has no text",
                id
            )));
        }
        Ok(Self {
            id,
            text,
            keywords,
            category,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The prompt shown to the candidate
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Expected keywords, in catalog order
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn category(&self) -> QuestionCategory {
        self.category
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.id, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_question_creation() {
        let q = Question::new(
            "g2",
            "What is a REST API?",
            kw(&["rest", "api"]),
            QuestionCategory::General,
        )
        .unwrap();
        assert_eq!(q.id(), "g2");
        assert_eq!(q.text(), "What is a REST API?");
        assert_eq!(q.keywords(), &["rest".to_string(), "api".to_string()]);
        assert_eq!(q.category(), QuestionCategory::General);
    }

    #[test]
    fn test_blank_id_rejected() {
        let err = Question::new(" ", "text", vec![], QuestionCategory::Hr).unwrap_err();
        assert!(matches!(err, DomainError::InvalidQuestion(_)));
    }

    #[test]
    fn test_blank_text_rejected() {
        assert!(Question::new("hr1", "", vec![], QuestionCategory::Hr).is_err());
    }

    #[test]
    fn test_empty_keywords_allowed() {
        let q = Question::new("x1", "Anything?", vec![], QuestionCategory::General).unwrap();
        assert!(q.keywords().is_empty());
    }

    #[test]
    fn test_category_parse_and_display() {
        assert_eq!(
            "HR".parse::<QuestionCategory>().unwrap(),
            QuestionCategory::Hr
        );
        assert_eq!(QuestionCategory::Company.to_string(), "company");
        assert!("sales".parse::<QuestionCategory>().is_err());
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&QuestionCategory::General).unwrap();
        assert_eq!(json, "\"general\"");
    }
}
