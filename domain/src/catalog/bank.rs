//! Built-in question bank (general technical, HR and company-specific)

use crate::core::question::{Question, QuestionCategory};

const BANK: &[(&str, QuestionCategory, &str, &[&str])] = &[
    (
        "g1",
        QuestionCategory::General,
        "Explain the difference between lists and tuples in Python.",
        &["list", "tuple", "mutable"],
    ),
    (
        "g2",
        QuestionCategory::General,
        "What is a REST API and how does it work?",
        &["rest", "api", "endpoint", "http"],
    ),
    (
        "g3",
        QuestionCategory::General,
        "Explain OOP concepts with examples.",
        &["oop", "inheritance", "polymorphism", "encapsulation"],
    ),
    (
        "hr1",
        QuestionCategory::Hr,
        "Tell me about yourself.",
        &["background", "experience", "strength"],
    ),
    (
        "hr2",
        QuestionCategory::Hr,
        "What are your strengths and weaknesses?",
        &["strength", "weakness"],
    ),
    (
        "a1",
        QuestionCategory::Company,
        "Explain how Netflix recommends movies using ML.",
        &["recommendation", "algorithm", "machine learning"],
    ),
    (
        "a2",
        QuestionCategory::Company,
        "How does Google use PageRank?",
        &["pagerank", "google", "ranking"],
    ),
    (
        "a3",
        QuestionCategory::Company,
        "How does Amazon handle large-scale database systems?",
        &["distributed", "database", "scalability"],
    ),
    (
        "g4",
        QuestionCategory::General,
        "Explain how hashing works.",
        &["hash", "map", "collision"],
    ),
    (
        "g5",
        QuestionCategory::General,
        "What is multithreading?",
        &["thread", "parallel", "concurrency"],
    ),
];

/// The built-in questions, in catalog order
pub fn default_questions() -> Vec<Question> {
    BANK.iter()
        .filter_map(|(id, category, text, keywords)| {
            Question::new(
                *id,
                *text,
                keywords.iter().map(|k| k.to_string()).collect(),
                *category,
            )
            .ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let questions = default_questions();
        let ids: HashSet<_> = questions.iter().map(|q| q.id().to_string()).collect();
        assert_eq!(ids.len(), questions.len());
    }

    #[test]
    fn test_every_question_has_keywords() {
        assert!(default_questions().iter().all(|q| !q.keywords().is_empty()));
    }

    #[test]
    fn test_category_counts() {
        let questions = default_questions();
        let count = |c| questions.iter().filter(|q| q.category() == c).count();
        assert_eq!(count(QuestionCategory::General), 5);
        assert_eq!(count(QuestionCategory::Hr), 2);
        assert_eq!(count(QuestionCategory::Company), 3);
    }
}
