//! Console output formatter for questions, scores and progress

use colored::Colorize;
use interview_application::{ProgressReport, SubmitAnswerOutput};
use interview_domain::scoring::format_score;
use interview_domain::{Question, ScoreResult};
use serde::Serialize;

/// Formats command results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a single question with its expected keywords
    pub fn format_question(question: &Question) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            format!("[{}]", question.id()).yellow().bold(),
            question.text()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Category:".cyan().bold(),
            question.category()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Keywords:".cyan().bold(),
            question.keywords().join(", ")
        ));

        output
    }

    /// Format the whole catalog, one line per question
    pub fn format_questions(questions: &[Question]) -> String {
        let mut output = Self::header("Question Catalog");
        for question in questions {
            output.push_str(&format!(
                "  {:<5} {:<8} {}\n",
                question.id().yellow(),
                question.category().to_string().dimmed(),
                question.text()
            ));
        }
        output
    }

    /// Format an evaluated answer
    pub fn format_score(question: &Question, score: &ScoreResult) -> String {
        let mut output = Self::header("Answer Feedback");

        output.push_str(&format!("{} {}\n\n", "Q:".bold(), question.text()));
        output.push_str(&format!(
            "{} {}/10\n",
            "Keyword score:   ".cyan().bold(),
            Self::colored_score(score.keyword_score)
        ));
        output.push_str(&format!(
            "{} {}/10 (sentiment {:+.3})\n",
            "Confidence score:".cyan().bold(),
            Self::colored_score(score.confidence()),
            score.sentiment_score.value()
        ));

        let matched = if score.matched_keywords.is_empty() {
            "none".dimmed().to_string()
        } else {
            score.matched_keywords.join(", ")
        };
        output.push_str(&format!("{} {}\n\n", "Matched keywords:".cyan().bold(), matched));

        output.push_str(&format!("{}\n", "Feedback:".green().bold()));
        output.push_str(&format!("  {}\n", score.final_feedback));

        output
    }

    /// Format a saved submission: the score plus the updated stats
    pub fn format_submission(submission: &SubmitAnswerOutput) -> String {
        let mut output = Self::format_score(&submission.question, &submission.score);

        output.push_str(&format!(
            "\n{} {}   {} {}   {} {}\n",
            "Streak:".yellow().bold(),
            submission.stats.streak,
            "Answers:".yellow().bold(),
            submission.stats.total_answers,
            "Points:".yellow().bold(),
            submission.stats.points
        ));

        output
    }

    /// Format a progress report
    pub fn format_progress(report: &ProgressReport) -> String {
        let mut output = Self::header(&format!("Progress for user {}", report.user_id));

        output.push_str(&format!(
            "{} {}   {} {}   {} {}\n",
            "Streak:".yellow().bold(),
            report.streak,
            "Answers:".yellow().bold(),
            report.total_answers,
            "Points:".yellow().bold(),
            report.points
        ));

        if let Some(avg) = report.average_score() {
            output.push_str(&format!(
                "{} {:.2}/10\n",
                "Average keyword score:".yellow().bold(),
                avg
            ));
        }

        if report.entries.is_empty() {
            output.push_str(&format!("\n{}\n", "No answers yet.".dimmed()));
            return output;
        }

        for entry in &report.entries {
            output.push_str(&format!(
                "\n{} {}\n",
                format!("── {} ──", entry.time).yellow().bold(),
                entry.question
            ));
            output.push_str(&format!("  {} {}\n", "Answer:".bold(), entry.answer));
            output.push_str(&format!(
                "  {} {}/10  {} {:+.3}  {} {}\n",
                "Score:".bold(),
                format_score(entry.score),
                "Sentiment:".bold(),
                entry.sentiment,
                "Keywords:".bold(),
                entry.keywords
            ));
            output.push_str(&format!("  {}\n", entry.feedback.dimmed()));
        }

        output
    }

    /// Format any result as pretty JSON
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn colored_score(value: f64) -> String {
        let text = format_score(value);
        if value >= 7.0 {
            text.green().bold().to_string()
        } else if value >= 5.0 {
            text.yellow().bold().to_string()
        } else {
            text.red().bold().to_string()
        }
    }

    fn header(title: &str) -> String {
        format!("{}\n\n", format!("=== {} ===", title).cyan().bold())
    }
}
