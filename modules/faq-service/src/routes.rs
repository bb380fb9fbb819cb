//! Axum route handlers for the FAQ API.

use crate::dashboard;
use crate::error::StoreError;
use crate::store::{KnowledgeStore, MISSING_FIELDS_MESSAGE};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use faq_types::*;
use std::sync::Arc;
use std::time::Instant;

pub struct AppState {
    pub store: KnowledgeStore,
    pub start_time: Instant,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(err: StoreError) -> ApiError {
    if err.is_validation() {
        (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(err.to_string())))
    } else {
        log::error!("Storage write failed: {}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(err.to_string())),
        )
    }
}

pub fn router(state: Arc<AppState>) -> axum::Router {
    let cors = tower_http::cors::CorsLayer::permissive();

    axum::Router::new()
        .route("/", get(dashboard::dashboard))
        .route("/faq", get(list_faq))
        .route("/unanswered", get(list_unanswered))
        .route("/ask", get(ask))
        .route("/answer", post(answer))
        .route("/status", get(status))
        .with_state(state)
        .layer(cors)
}

// GET /faq
pub async fn list_faq(State(state): State<Arc<AppState>>) -> Json<Vec<FaqEntry>> {
    Json(state.store.list_faq())
}

// GET /unanswered
pub async fn list_unanswered(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.store.list_unanswered())
}

// GET /ask?question=...
pub async fn ask(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AskQuery>,
) -> Result<Json<AskResponse>, ApiError> {
    let Some(question) = query.question else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Missing 'question' query parameter.")),
        ));
    };

    let answer = state.store.ask(&question).map_err(error_response)?;
    Ok(Json(AskResponse { answer }))
}

// POST /answer
pub async fn answer(
    State(state): State<Arc<AppState>>,
    body: Result<Json<AnswerRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let req = match body {
        Ok(Json(req)) => req,
        Err(e) => {
            log::debug!("Rejected /answer body: {}", e);
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(MISSING_FIELDS_MESSAGE)),
            ));
        }
    };

    let question = req.question.unwrap_or_default();
    let answer = req.answer.unwrap_or_default();
    let message = state
        .store
        .answer(&question, &answer)
        .map_err(error_response)?;

    Ok(Json(MessageResponse {
        message: message.to_string(),
    }))
}

// GET /status
pub async fn status(State(state): State<Arc<AppState>>) -> Json<ServiceStatus> {
    let stats = state.store.stats();
    Json(ServiceStatus {
        running: true,
        uptime_secs: state.start_time.elapsed().as_secs(),
        faq_count: stats.faq_count,
        unanswered_count: stats.unanswered_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FaqStorage, FileStorage, MemoryStorage};
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use serde_json::{Value, json};
    use std::fs;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn app_with(storage: Arc<dyn FaqStorage>) -> axum::Router {
        router(Arc::new(AppState {
            store: KnowledgeStore::new(storage),
            start_time: Instant::now(),
        }))
    }

    fn file_app(dir: &TempDir) -> (axum::Router, Arc<FileStorage>) {
        let storage = Arc::new(FileStorage::new(
            dir.path().join("faq.txt"),
            dir.path().join("unanswered_questions.txt"),
        ));
        (app_with(storage.clone()), storage)
    }

    async fn send(app: &axum::Router, req: Request<Body>) -> (StatusCode, Value) {
        let resp = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_empty_storage_scenario() {
        let dir = TempDir::new().unwrap();
        let (app, storage) = file_app(&dir);

        let (status, body) = send(&app, get_req("/faq")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        let (status, body) = send(&app, get_req("/ask?question=hours")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "answer": FALLBACK_ANSWER }));

        let raw = fs::read_to_string(storage.unanswered_path()).unwrap();
        assert_eq!(raw.lines().collect::<Vec<_>>(), vec!["hours"]);

        let (_, body) = send(&app, get_req("/unanswered")).await;
        assert_eq!(body, json!(["hours"]));
    }

    #[tokio::test]
    async fn test_ask_matches_stored_entry() {
        let dir = TempDir::new().unwrap();
        let (app, storage) = file_app(&dir);
        fs::write(storage.faq_path(), "What are your hours? - 9 to 5\n").unwrap();

        let (status, body) = send(&app, get_req("/ask?question=hours")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "answer": "9 to 5" }));
        assert!(!storage.unanswered_path().exists());

        let (_, body) = send(&app, get_req("/faq")).await;
        assert_eq!(
            body,
            json!([{ "question": "What are your hours?", "answer": "9 to 5" }])
        );
    }

    #[tokio::test]
    async fn test_ask_decodes_query_string() {
        let app = app_with(Arc::new(MemoryStorage::with_entries(vec![FaqEntry::new(
            "Do you deliver on Sunday?",
            "No",
        )])));

        let (_, body) = send(&app, get_req("/ask?question=deliver%20on%20sunday")).await;
        assert_eq!(body, json!({ "answer": "No" }));
    }

    #[tokio::test]
    async fn test_ask_without_question_is_client_error() {
        let app = app_with(Arc::new(MemoryStorage::default()));

        let (status, body) = send(&app, get_req("/ask")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_answer_flow() {
        let app = app_with(Arc::new(MemoryStorage::default()));
        send(&app, get_req("/ask?question=parking")).await;

        let (status, body) = send(
            &app,
            post_json("/answer", r#"{"question":"parking","answer":"Behind the store"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Answer saved successfully." }));

        let (_, body) = send(&app, get_req("/unanswered")).await;
        assert_eq!(body, json!([]));

        let (_, body) = send(&app, get_req("/ask?question=Parking")).await;
        assert_eq!(body, json!({ "answer": "Behind the store" }));
    }

    #[tokio::test]
    async fn test_answer_missing_fields() {
        let dir = TempDir::new().unwrap();
        let (app, storage) = file_app(&dir);

        for body in [
            r#"{"question":"","answer":"x"}"#,
            r#"{"question":"x","answer":""}"#,
            r#"{"question":"x"}"#,
            r#"{}"#,
            "not json",
        ] {
            let (status, resp) = send(&app, post_json("/answer", body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
            assert_eq!(resp, json!({ "error": MISSING_FIELDS_MESSAGE }));
        }

        assert!(!storage.faq_path().exists());
        assert!(!storage.unanswered_path().exists());
    }

    #[tokio::test]
    async fn test_line_breaks_never_split_stored_lines() {
        let dir = TempDir::new().unwrap();
        let (app, storage) = file_app(&dir);

        for _ in 0..2 {
            let (status, body) = send(&app, get_req("/ask?question=opening%0D%0Ahours")).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, json!({ "answer": FALLBACK_ANSWER }));
        }
        let (_, body) = send(&app, get_req("/unanswered")).await;
        assert_eq!(body, json!(["opening hours"]));

        let (status, body) = send(
            &app,
            post_json("/answer", r#"{"question":"a\nb - injected","answer":"x"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": crate::store::MULTILINE_MESSAGE }));
        assert!(!storage.faq_path().exists());
    }

    #[tokio::test]
    async fn test_write_failure_is_server_error() {
        let dir = TempDir::new().unwrap();
        let storage = Arc::new(FileStorage::new(
            dir.path().join("missing").join("faq.txt"),
            dir.path().join("missing").join("unanswered_questions.txt"),
        ));
        let app = app_with(storage);

        // Reads of absent files are still empty, not errors
        let (status, body) = send(&app, get_req("/faq")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        let (status, body) = send(&app, get_req("/ask?question=hours")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_status_counts() {
        let app = app_with(Arc::new(MemoryStorage::with_entries(vec![
            FaqEntry::new("a", "1"),
            FaqEntry::new("b", "2"),
        ])));
        send(&app, get_req("/ask?question=zzz")).await;

        let (status, body) = send(&app, get_req("/status")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["running"], json!(true));
        assert_eq!(body["faq_count"], json!(2));
        assert_eq!(body["unanswered_count"], json!(1));
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let app = app_with(Arc::new(MemoryStorage::default()));
        let req = Request::builder()
            .uri("/faq")
            .header(header::ORIGIN, "http://localhost:3000")
            .body(Body::empty())
            .unwrap();

        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
    }
}
