//! HTTP surface of the student service

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::models::{ErrorResponse, Student, StudentCreate, StudentUpdate};
use crate::store::StudentStore;

#[derive(Clone)]
struct AppState {
    store: Arc<StudentStore>,
}

type NotFound = (StatusCode, Json<ErrorResponse>);

fn not_found() -> NotFound {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "not_found".to_string(),
            message: "Student not found".to_string(),
        }),
    )
}

/// Build the service router
#[must_use]
pub fn app() -> Router {
    let state = AppState {
        store: Arc::new(StudentStore::default()),
    };

    Router::new()
        .route("/", get(root))
        .route("/api/students", get(list).post(create))
        .route(
            "/api/students/:id",
            get(get_one).put(update).delete(delete_one),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until the process is stopped
pub async fn serve(addr: std::net::SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("student service listening on {}", addr);
    axum::serve(listener, app()).await?;
    Ok(())
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({"message": "Student service is running"}))
}

async fn list(State(state): State<AppState>) -> Json<Vec<Student>> {
    Json(state.store.list())
}

async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Student>, NotFound> {
    state.store.get(id).map(Json).ok_or_else(not_found)
}

async fn create(
    State(state): State<AppState>,
    Json(payload): Json<StudentCreate>,
) -> (StatusCode, Json<Student>) {
    let student = state.store.create(payload);
    (StatusCode::CREATED, Json(student))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<StudentUpdate>,
) -> Result<Json<Student>, NotFound> {
    state
        .store
        .update(id, payload)
        .map(Json)
        .ok_or_else(not_found)
}

async fn delete_one(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, NotFound> {
    if state.store.delete(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found())
    }
}
