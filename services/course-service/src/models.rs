//! Course models and request payloads

use serde::{Deserialize, Serialize};

/// A course as stored and returned by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub code: String,
    pub credits: u32,
}

/// Creation payload; all fields required
#[derive(Debug, Serialize, Deserialize)]
pub struct CourseCreate {
    pub title: String,
    pub code: String,
    pub credits: u32,
}

/// Partial-update payload; only present fields are applied
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CourseUpdate {
    pub title: Option<String>,
    pub code: Option<String>,
    pub credits: Option<u32>,
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
}
