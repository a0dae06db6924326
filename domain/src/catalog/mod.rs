//! Question catalog
//!
//! A fixed, read-only list of questions built once at startup and shared by
//! reference (typically behind an `Arc`). Lookups never mutate, so the
//! catalog is safe to use from any number of concurrent requests.

mod bank;

use crate::core::question::Question;
use rand::Rng;
use rand::seq::SliceRandom;

pub use bank::default_questions;

/// Immutable question table
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Catalog containing the built-in question bank
    pub fn builtin() -> Self {
        Self::with_questions(default_questions())
    }

    /// Catalog over an explicit list of questions
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Catalog with no questions
    pub fn empty() -> Self {
        Self { questions: vec![] }
    }

    /// Uniformly random question, or `None` if the catalog is empty
    pub fn random(&self) -> Option<&Question> {
        self.random_with(&mut rand::thread_rng())
    }

    /// Uniformly random question drawn from the given RNG
    pub fn random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Question> {
        self.questions.choose(rng)
    }

    /// Look up a question by id
    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Question at a position in catalog order
    pub fn get_index(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuestionCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::question::QuestionCategory;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_builtin_has_ten_questions() {
        let catalog = QuestionCatalog::builtin();
        assert_eq!(catalog.len(), 10);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = QuestionCatalog::builtin();
        let q = catalog.get("g2").unwrap();
        assert_eq!(q.text(), "What is a REST API and how does it work?");
        assert_eq!(q.keywords(), &["rest", "api", "endpoint", "http"]);
    }

    #[test]
    fn test_unknown_id_is_none() {
        let catalog = QuestionCatalog::builtin();
        assert!(catalog.get("zzz").is_none());
    }

    #[test]
    fn test_empty_catalog_returns_none() {
        let catalog = QuestionCatalog::empty();
        assert!(catalog.random().is_none());
        assert!(catalog.get("g1").is_none());
    }

    #[test]
    fn test_random_is_member_of_catalog() {
        let catalog = QuestionCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let q = catalog.random_with(&mut rng).unwrap();
            assert!(catalog.get(q.id()).is_some());
        }
    }

    #[test]
    fn test_random_covers_catalog() {
        let catalog = QuestionCatalog::with_questions(vec![
            Question::new("a", "A?", vec![], QuestionCategory::General).unwrap(),
            Question::new("b", "B?", vec![], QuestionCategory::General).unwrap(),
        ]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            seen.insert(catalog.random_with(&mut rng).unwrap().id().to_string());
        }
        assert_eq!(seen.len(), 2);
    }
}
