//! Shared state for HTTP handlers

use interview_application::{
    AnswerEvaluator, DailyQuestionUseCase, ProgressRepository, ReviewProgressUseCase,
    SubmitAnswerUseCase,
};
use interview_domain::QuestionCatalog;
use std::sync::Arc;

/// Read-only catalog plus the use cases the routes call
pub struct AppState {
    pub catalog: Arc<QuestionCatalog>,
    pub evaluator: AnswerEvaluator,
    pub submit_answer: SubmitAnswerUseCase,
    pub daily_question: DailyQuestionUseCase,
    pub review_progress: ReviewProgressUseCase,
}

impl AppState {
    pub fn new(
        catalog: Arc<QuestionCatalog>,
        evaluator: AnswerEvaluator,
        repository: Arc<dyn ProgressRepository>,
    ) -> Arc<Self> {
        Arc::new(Self {
            submit_answer: SubmitAnswerUseCase::new(
                Arc::clone(&catalog),
                evaluator.clone(),
                Arc::clone(&repository),
            ),
            daily_question: DailyQuestionUseCase::new(Arc::clone(&catalog), Arc::clone(&repository)),
            review_progress: ReviewProgressUseCase::new(Arc::clone(&catalog), repository),
            catalog,
            evaluator,
        })
    }
}
