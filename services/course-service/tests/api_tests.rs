//! HTTP contract tests for the course service

use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::{Value, json};

async fn spawn_service() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().expect("listener has no local addr");

    tokio::spawn(async move {
        axum::serve(listener, course_service::app())
            .await
            .expect("server failed");
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn list_returns_the_seeded_courses() {
    let base = spawn_service().await;

    let response = reqwest::get(format!("{base}/api/courses")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    let courses = body.as_array().unwrap();
    assert_eq!(courses.len(), 3);
    assert_eq!(courses[2]["code"], "SE303");
}

#[tokio::test]
async fn get_unknown_id_is_404() {
    let base = spawn_service().await;

    let response = reqwest::get(format!("{base}/api/courses/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn create_assigns_the_next_id_and_returns_201() {
    let base = spawn_service().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/api/courses"))
        .json(&json!({"title": "Networks", "code": "CS210", "credits": 3}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["id"], 4);
    assert_eq!(body["code"], "CS210");
}

#[tokio::test]
async fn put_applies_a_partial_update() {
    let base = spawn_service().await;
    let client = reqwest::Client::new();

    let response = client
        .put(format!("{base}/api/courses/1"))
        .json(&json!({"credits": 4}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["credits"], 4);
    // untouched fields keep their seeded values
    assert_eq!(body["title"], "Intro to Programming");
    assert_eq!(body["code"], "CS101");
}

#[tokio::test]
async fn delete_returns_204_then_404() {
    let base = spawn_service().await;
    let client = reqwest::Client::new();

    let response = client
        .delete(format!("{base}/api/courses/2"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = client
        .delete(format!("{base}/api/courses/2"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
