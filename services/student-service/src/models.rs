//! Student models and request payloads

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub age: u32,
    pub email: String,
    pub course: String,
}

/// Creation payload; all fields required
#[derive(Debug, Serialize, Deserialize)]
pub struct StudentCreate {
    pub name: String,
    pub age: u32,
    pub email: String,
    pub course: String,
}

/// Partial-update payload; only present fields are applied
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StudentUpdate {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub email: Option<String>,
    pub course: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
