//! Gateway error taxonomy

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Errors originating at the gateway itself.
///
/// Backend-reported errors (status >= 400 from a reachable service) are not
/// represented here; they pass through as
/// [`ForwardReply::BackendError`](crate::forwarder::ForwardReply) with the
/// backend's own status code and body.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Login attempted with anything other than the configured identity
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Missing, malformed, badly signed, or expired bearer token
    #[error("invalid or expired token")]
    InvalidToken,

    /// Route references a service name absent from the registry
    #[error("unknown service: {0}")]
    UnknownService(String),

    /// Transport-level failure reaching a resolved backend
    #[error("service unavailable")]
    ServiceUnavailable,

    /// Token signing failed
    #[error("failed to sign token")]
    TokenSigning(#[source] jsonwebtoken::errors::Error),
}

impl GatewayError {
    /// HTTP status code this error maps to at the gateway boundary
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::UnknownService(_) => StatusCode::NOT_FOUND,
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::TokenSigning(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "invalid_credentials",
            Self::InvalidToken => "invalid_token",
            Self::UnknownService(_) => "unknown_service",
            Self::ServiceUnavailable => "service_unavailable",
            Self::TokenSigning(_) => "internal_error",
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.error_code().to_string(),
            message: self.to_string(),
        });
        (self.status_code(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(
            GatewayError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            GatewayError::InvalidToken.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            GatewayError::UnknownService("rooms".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            GatewayError::ServiceUnavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
