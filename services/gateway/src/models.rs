//! REST API models and request/response types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Login request body
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username for authentication
    pub username: String,
    /// Password for authentication
    pub password: String,
}

/// Successful login response
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed bearer token
    pub access_token: String,
    /// Token expiration timestamp (unix seconds)
    pub expires_at: i64,
}

/// Error response body used for gateway-originated failures
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
}

/// Normalized envelope wrapping a backend error body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Logical name of the service that produced the error
    pub service: String,
    /// Backend path the request was forwarded to
    pub path: String,
    /// The backend's own error body, parsed as JSON when possible
    pub error: Value,
}

/// Root endpoint response
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
}
