//! HTTP route handlers
//!
//! JSON in, JSON out. Every success body carries `"status": "success"`,
//! every error body `"status": "error"` plus a message.

use super::error::ApiError;
use super::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{Local, NaiveDate, Utc};
use interview_application::{
    ProgressReport, SubmitAnswerInput, find_question, random_question,
};
use interview_domain::{Question, QuestionCategory, UserId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const SUCCESS: &str = "success";

/// Calendar day used for streaks and the daily question
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub status: String,
    pub question_id: String,
    pub question: String,
    pub keywords: Vec<String>,
    pub category: QuestionCategory,
}

impl From<&Question> for QuestionResponse {
    fn from(q: &Question) -> Self {
        Self {
            status: SUCCESS.to_string(),
            question_id: q.id().to_string(),
            question: q.text().to_string(),
            keywords: q.keywords().to_vec(),
            category: q.category(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyseRequest {
    pub question_id: String,
    pub answer: String,
    /// Defaults to the question's own keywords
    #[serde(default)]
    pub expected_keywords: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyseResponse {
    pub status: String,
    pub keyword_score: f64,
    pub sentiment_score: f64,
    pub final_feedback: String,
    pub matched_keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SaveProgressRequest {
    pub user_id: u64,
    pub question_id: String,
    pub answer: String,
    #[serde(default)]
    pub expected_keywords: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SaveProgressResponse {
    pub status: String,
    pub keyword_score: f64,
    pub sentiment_score: f64,
    pub final_feedback: String,
    pub matched_keywords: Vec<String>,
    pub streak: u32,
    pub total_answers: u64,
    pub points: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub status: String,
    #[serde(flatten)]
    pub report: ProgressReport,
}

pub async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn random_question_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<QuestionResponse>, ApiError> {
    let question = random_question(&state.catalog)?;
    Ok(Json(question.into()))
}

pub async fn question_handler(
    State(state): State<Arc<AppState>>,
    Path(question_id): Path<String>,
) -> Result<Json<QuestionResponse>, ApiError> {
    let question = find_question(&state.catalog, &question_id)?;
    Ok(Json(question.into()))
}

pub async fn daily_question_handler(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<u64>,
) -> Result<Json<QuestionResponse>, ApiError> {
    let question = state
        .daily_question
        .execute(UserId(user_id), today())
        .await?;
    Ok(Json((&question).into()))
}

pub async fn analyse_answer_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AnalyseRequest>,
) -> Result<Json<AnalyseResponse>, ApiError> {
    let question = find_question(&state.catalog, &payload.question_id)?;

    let score = match &payload.expected_keywords {
        Some(keywords) => state.evaluator.evaluate(question, &payload.answer, keywords),
        None => state.evaluator.evaluate_question(question, &payload.answer),
    };

    Ok(Json(AnalyseResponse {
        status: SUCCESS.to_string(),
        keyword_score: score.keyword_score,
        sentiment_score: score.sentiment_score.value(),
        final_feedback: score.final_feedback,
        matched_keywords: score.matched_keywords,
    }))
}

pub async fn save_progress_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SaveProgressRequest>,
) -> Result<Json<SaveProgressResponse>, ApiError> {
    let mut input = SubmitAnswerInput::new(
        UserId(payload.user_id),
        payload.question_id,
        payload.answer,
    )
    .at(Utc::now(), today());
    if let Some(keywords) = payload.expected_keywords {
        input = input.with_expected_keywords(keywords);
    }

    let output = state.submit_answer.execute(input).await?;

    Ok(Json(SaveProgressResponse {
        status: SUCCESS.to_string(),
        keyword_score: output.score.keyword_score,
        sentiment_score: output.score.sentiment_score.value(),
        final_feedback: output.score.final_feedback,
        matched_keywords: output.score.matched_keywords,
        streak: output.stats.streak,
        total_answers: output.stats.total_answers,
        points: output.stats.points,
    }))
}

pub async fn progress_handler(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<u64>,
) -> Result<Json<ProgressResponse>, ApiError> {
    let report = state
        .review_progress
        .execute(UserId(user_id), today())
        .await?;
    Ok(Json(ProgressResponse {
        status: SUCCESS.to_string(),
        report,
    }))
}
