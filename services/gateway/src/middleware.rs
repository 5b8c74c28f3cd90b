//! Middleware for authentication and request logging

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{info, warn};

use crate::error::GatewayError;
use crate::token::TokenService;

/// Identity extracted from a verified bearer token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub subject: String,
}

/// Authentication middleware state
#[derive(Debug, Clone)]
pub struct AuthState {
    pub tokens: TokenService,
}

/// Authentication middleware.
///
/// Public endpoints pass straight through. Everything else must carry a
/// currently valid bearer token or the pipeline terminates here with 401 —
/// no request reaches a backend without one. A missing header and a failed
/// verification are indistinguishable to the caller.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let path = request.uri().path();
    if is_public_endpoint(path) {
        return Ok(next.run(request).await);
    }

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok());

    let token = match auth_header {
        Some(header) if header.starts_with("Bearer ") => &header[7..],
        _ => {
            warn!(path, "missing or malformed Authorization header");
            return Err(GatewayError::InvalidToken.into_response());
        }
    };

    match state.tokens.verify(token) {
        Ok(claims) => {
            request.extensions_mut().insert(AuthenticatedUser {
                subject: claims.sub,
            });
            Ok(next.run(request).await)
        }
        Err(e) => {
            warn!(path, "token verification failed");
            Err(e.into_response())
        }
    }
}

/// Request logging middleware.
///
/// Outermost layer: every request, including ones short-circuited by the
/// auth middleware, produces exactly one timing line on its way out.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();

    info!(
        method = %method,
        path = %path,
        status = %status,
        duration_ms = duration.as_millis(),
        "request processed"
    );

    response
}

/// Check if an endpoint is public (doesn't require authentication)
#[must_use]
pub fn is_public_endpoint(path: &str) -> bool {
    matches!(path, "/" | "/auth/login")
}
