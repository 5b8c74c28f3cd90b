//! Request forwarding to backend services
//!
//! Builds and executes the outbound request for an inbound gateway call and
//! normalizes the backend's response into a [`ForwardReply`]. The gateway
//! never invents a status code for a reachable backend; it only originates
//! 404 (unknown route) and 503 (unreachable backend).

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    Json,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::config::UpstreamConfig;
use crate::error::GatewayError;
use crate::models::ErrorEnvelope;
use crate::registry::ServiceRegistry;

/// Outcome of forwarding a request to a reachable backend.
///
/// Exactly one shape is produced per call. Gateway-level failures
/// (`UnknownService`, `ServiceUnavailable`) travel on the error side of the
/// `Result` instead.
#[derive(Debug)]
pub enum ForwardReply {
    /// Backend answered below 400; payload and status pass through unchanged
    Success { status: StatusCode, body: Value },
    /// Backend answered 400 or above; body wrapped in the error envelope,
    /// original status preserved
    BackendError {
        status: StatusCode,
        envelope: ErrorEnvelope,
    },
}

impl IntoResponse for ForwardReply {
    fn into_response(self) -> Response {
        match self {
            Self::Success { status, body } => {
                if status == StatusCode::NO_CONTENT {
                    status.into_response()
                } else {
                    (status, Json(body)).into_response()
                }
            }
            Self::BackendError { status, envelope } => (status, Json(envelope)).into_response(),
        }
    }
}

/// Forwards inbound request semantics to resolved backends
#[derive(Debug, Clone)]
pub struct Forwarder {
    client: reqwest::Client,
    registry: Arc<ServiceRegistry>,
}

impl Forwarder {
    /// Build a forwarder with a bounded per-attempt timeout so a hung
    /// backend cannot starve gateway resources.
    pub fn new(registry: Arc<ServiceRegistry>, upstream: &UpstreamConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(upstream.timeout_seconds))
            .connect_timeout(Duration::from_secs(upstream.connect_timeout_seconds))
            .build()?;

        Ok(Self { client, registry })
    }

    /// Forward a request to the named service.
    ///
    /// Resolution failures skip the network entirely; transport failures
    /// (connection refused, timeout, DNS) surface as `ServiceUnavailable`
    /// without retry. Backend responses pass through with their original
    /// status, wrapped in the error envelope when the status is >= 400.
    pub async fn forward(
        &self,
        service: &str,
        path: &str,
        method: Method,
        body: Option<&Value>,
    ) -> Result<ForwardReply, GatewayError> {
        let target = self.registry.resolve(service)?;
        let url = format!("{}{}", target.base_url, path);

        debug!(%method, %url, "forwarding request");

        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            warn!(service, path, error = %e, "backend unreachable");
            GatewayError::ServiceUnavailable
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            warn!(service, path, error = %e, "failed to read backend response");
            GatewayError::ServiceUnavailable
        })?;

        let payload = parse_backend_body(&text);

        if status.is_client_error() || status.is_server_error() {
            Ok(ForwardReply::BackendError {
                status,
                envelope: ErrorEnvelope {
                    service: service.to_string(),
                    path: path.to_string(),
                    error: payload,
                },
            })
        } else {
            Ok(ForwardReply::Success {
                status,
                body: payload,
            })
        }
    }
}

/// Best-effort parse of a backend response body.
///
/// Parsing is an enrichment, never a required step: an empty body becomes
/// JSON null and an unparseable one is carried as raw text instead of being
/// discarded or failing the call.
fn parse_backend_body(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| json!({ "raw_response": text }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_body_parses_to_null() {
        assert_eq!(parse_backend_body(""), Value::Null);
    }

    #[test]
    fn json_body_parses_structurally() {
        assert_eq!(
            parse_backend_body(r#"{"detail":"Course not found"}"#),
            json!({"detail": "Course not found"})
        );
    }

    #[test]
    fn non_json_body_is_carried_raw() {
        assert_eq!(
            parse_backend_body("upstream exploded"),
            json!({"raw_response": "upstream exploded"})
        );
    }
}
