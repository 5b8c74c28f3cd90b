//! HTTP surface of the course service

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::models::{Course, CourseCreate, CourseUpdate, ErrorResponse};
use crate::store::CourseStore;

#[derive(Clone)]
struct AppState {
    store: Arc<CourseStore>,
}

type NotFound = (StatusCode, Json<ErrorResponse>);

fn not_found() -> NotFound {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "not_found".to_string(),
            message: "Course not found".to_string(),
        }),
    )
}

/// Build the service router
#[must_use]
pub fn app() -> Router {
    let state = AppState {
        store: Arc::new(CourseStore::default()),
    };

    Router::new()
        .route("/", get(root))
        .route("/api/courses", get(list).post(create))
        .route(
            "/api/courses/:id",
            get(get_one).put(update).delete(delete_one),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until the process is stopped
pub async fn serve(addr: std::net::SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("course service listening on {}", addr);
    axum::serve(listener, app()).await?;
    Ok(())
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({"message": "Course service is running"}))
}

async fn list(State(state): State<AppState>) -> Json<Vec<Course>> {
    Json(state.store.list())
}

async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Course>, NotFound> {
    state.store.get(id).map(Json).ok_or_else(not_found)
}

async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CourseCreate>,
) -> (StatusCode, Json<Course>) {
    let course = state.store.create(payload);
    (StatusCode::CREATED, Json(course))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CourseUpdate>,
) -> Result<Json<Course>, NotFound> {
    state.store.update(id, payload).map(Json).ok_or_else(not_found)
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
