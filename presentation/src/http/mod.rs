//! HTTP API
//!
//! | Route | Handler |
//! |-------|---------|
//! | `GET /health` | liveness |
//! | `GET /get_question` | random question |
//! | `GET /questions/{id}` | question by id |
//! | `GET /daily_question/{user_id}` | the user's question for today |
//! | `POST /analyse_answer` | score an answer |
//! | `POST /save_progress` | score and save an answer |
//! | `GET /get_progress/{user_id}` | progress report |

pub mod error;
pub mod routes;
pub mod state;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub use error::ApiError;
pub use state::AppState;

use routes::{
    analyse_answer_handler, daily_question_handler, health_handler, progress_handler,
    question_handler, random_question_handler, save_progress_handler,
};

/// Build the API router over shared state
pub fn router(state: Arc<AppState>, cors_max_age: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(cors_max_age);

    Router::new()
        .route("/health", get(health_handler))
        .route("/get_question", get(random_question_handler))
        .route("/questions/{id}", get(question_handler))
        .route("/daily_question/{user_id}", get(daily_question_handler))
        .route("/analyse_answer", post(analyse_answer_handler))
        .route("/save_progress", post(save_progress_handler))
        .route("/get_progress/{user_id}", get(progress_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Serve the API on `address` until Ctrl+C or SIGTERM
pub async fn serve(
    state: Arc<AppState>,
    address: &str,
    cors_max_age: Duration,
) -> std::io::Result<()> {
    let app = router(state, cors_max_age);

    info!("Binding to {address}");
    let listener = TcpListener::bind(address).await?;
    info!("Server running on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use interview_application::{
        AnswerEvaluator, InMemoryProgressRepository, NeutralSentiment,
    };
    use interview_domain::QuestionCatalog;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app_with(catalog: QuestionCatalog) -> Router {
        let state = AppState::new(
            Arc::new(catalog),
            AnswerEvaluator::new(Arc::new(NeutralSentiment)),
            Arc::new(InMemoryProgressRepository::new()),
        );
        router(state, Duration::from_secs(60))
    }

    fn app() -> Router {
        app_with(QuestionCatalog::builtin())
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), get_req("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_random_question() {
        let (status, body) = send(&app(), get_req("/get_question")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        let id = body["question_id"].as_str().unwrap();
        assert!(QuestionCatalog::builtin().get(id).is_some());
        assert!(body["keywords"].as_array().is_some());
    }

    #[tokio::test]
    async fn test_random_question_empty_catalog() {
        let (status, body) = send(&app_with(QuestionCatalog::empty()), get_req("/get_question")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "No questions available");
    }

    #[tokio::test]
    async fn test_question_by_id() {
        let (status, body) = send(&app(), get_req("/questions/hr1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["question"], "Tell me about yourself.");
        assert_eq!(body["category"], "hr");
    }

    #[tokio::test]
    async fn test_unknown_question_is_404() {
        let (status, body) = send(&app(), get_req("/questions/zzz")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Question not found: zzz");
    }

    #[tokio::test]
    async fn test_analyse_answer() {
        let (status, body) = send(
            &app(),
            post_json(
                "/analyse_answer",
                json!({
                    "question_id": "g2",
                    "answer": "I understand REST and HTTP endpoints",
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["keyword_score"], 5.0);
        assert_eq!(body["sentiment_score"], 0.0);
        assert_eq!(
            body["final_feedback"],
            "Keyword Score: 5.0/10 | Confidence (Sentiment) Score: 5.0/10 | \
             Good use of necessary keywords. | Your answer reflects good confidence."
        );
        assert_eq!(body["matched_keywords"], json!(["rest", "http"]));
    }

    #[tokio::test]
    async fn test_analyse_answer_with_expected_keywords() {
        let (status, body) = send(
            &app(),
            post_json(
                "/analyse_answer",
                json!({
                    "question_id": "g2",
                    "answer": "endpoints",
                    "expected_keywords": ["endpoints", "verbs"],
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["keyword_score"], 5.0);
    }

    #[tokio::test]
    async fn test_analyse_unknown_question() {
        let (status, _) = send(
            &app(),
            post_json("/analyse_answer", json!({"question_id": "zzz", "answer": "x"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_body_rejected() {
        let (status, _) = send(
            &app(),
            post_json("/analyse_answer", json!({"answer": "missing question id"})),
        )
        .await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn test_save_then_get_progress() {
        let app = app();

        for answer in ["list and tuple", "a list is mutable, a tuple is not"] {
            let (status, body) = send(
                &app,
                post_json(
                    "/save_progress",
                    json!({"user_id": 9, "question_id": "g1", "answer": answer}),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["status"], "success");
            assert_eq!(body["streak"], 1);
        }

        let (status, body) = send(&app, get_req("/get_progress/9")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["total_answers"], 2);
        assert_eq!(body["points"], 16);
        assert_eq!(body["scores"], json!([6.67, 10.0]));
        assert_eq!(body["keyword_counts"], json!([2, 3]));
        assert_eq!(body["entries"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_progress_for_new_user() {
        let (status, body) = send(&app(), get_req("/get_progress/404")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_answers"], 0);
        assert_eq!(body["scores"], json!([]));
    }

    #[tokio::test]
    async fn test_daily_question_is_stable() {
        let app = app();
        let (_, first) = send(&app, get_req("/daily_question/3")).await;
        let (status, second) = send(&app, get_req("/daily_question/3")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first["question_id"], second["question_id"]);
    }
}
