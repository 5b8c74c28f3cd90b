//! HTTP contract tests for the student service

use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::{Value, json};

async fn spawn_service() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().expect("listener has no local addr");

    tokio::spawn(async move {
        axum::serve(listener, student_service::app())
            .await
            .expect("server failed");
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn list_returns_the_seeded_students() {
    let base = spawn_service().await;

    let response = reqwest::get(format!("{base}/api/students")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    let students = body.as_array().unwrap();
    assert_eq!(students.len(), 3);
    assert_eq!(students[0]["name"], "Alice Johnson");
}

#[tokio::test]
async fn crud_cycle_assigns_ids_and_applies_partial_updates() {
    let base = spawn_service().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/api/students"))
        .json(&json!({
            "name": "Dana White",
            "age": 23,
            "email": "dana@university.edu",
            "course": "CS101"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = response.json().await.unwrap();
    assert_eq!(created["id"], 4);

    let response = client
        .put(format!("{base}/api/students/4"))
        .json(&json!({"age": 24}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["age"], 24);
    assert_eq!(updated["name"], "Dana White");

    let response = client
        .delete(format!("{base}/api/students/4"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = reqwest::get(format!("{base}/api/students/4")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "not_found");
}
