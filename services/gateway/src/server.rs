//! Gateway server implementation

use anyhow::Result;
use axum::{
    Router,
    extract::{DefaultBodyLimit, Path, State},
    http::Method,
    middleware,
    response::Json,
    routing::{get, post},
};
use serde_json::Value;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{error, info};

use crate::{
    config::GatewayConfig,
    error::GatewayError,
    forwarder::{ForwardReply, Forwarder},
    middleware::{AuthState, auth_middleware, logging_middleware},
    models::{LoginRequest, LoginResponse, ServiceInfo},
    registry::ServiceRegistry,
    token::TokenService,
};

/// Unified application state shared by all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub registry: Arc<ServiceRegistry>,
    pub forwarder: Forwarder,
    pub tokens: TokenService,
}

/// Gateway server
pub struct GatewayServer {
    config: GatewayConfig,
}

impl GatewayServer {
    /// Create a new gateway server from configuration
    #[must_use]
    pub fn new(config: GatewayConfig) -> Self {
        Self { config }
    }

    /// Build the axum application with all routes and middleware.
    ///
    /// Exposed separately from [`start`](Self::start) so tests can drive the
    /// router without binding a fixed port.
    pub fn app(&self) -> Result<Router> {
        let registry = Arc::new(ServiceRegistry::new(self.config.services.clone()));
        let forwarder = Forwarder::new(Arc::clone(&registry), &self.config.upstream)?;
        let tokens = TokenService::new(&self.config.auth);

        let app_state = AppState {
            registry,
            forwarder,
            tokens: tokens.clone(),
        };

        let auth_state = AuthState { tokens };

        let app = Router::new()
            // Public endpoints
            .route("/", get(service_info))
            .route("/auth/login", post(login))
            // Forwarding routes (auth required)
            .route(
                "/gateway/:resource",
                get(forward_collection).post(forward_collection),
            )
            .route(
                "/gateway/:resource/:id",
                get(forward_item).put(forward_item).delete(forward_item),
            )
            .with_state(app_state)
            // Innermost to outermost: body limit, inbound timeout, auth,
            // then the timing log wrapped around everything
            .layer(DefaultBodyLimit::max(self.config.server.max_body_size))
            .layer(TimeoutLayer::new(std::time::Duration::from_secs(
                self.config.server.timeout_seconds,
            )))
            .layer(middleware::from_fn_with_state(auth_state, auth_middleware))
            .layer(middleware::from_fn(logging_middleware))
            .layer(TraceLayer::new_for_http());

        Ok(app)
    }

    /// Start the server
    pub async fn start(self) -> Result<()> {
        let addr: SocketAddr = self
            .config
            .server_address()
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid server address: {e}"))?;

        let app = self.app()?;

        info!("Starting gateway server on {}", addr);

        let listener = match tokio::net::TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(e) => {
                error!("Failed to bind TCP listener to {}: {}", addr, e);
                return Err(anyhow::anyhow!("failed to bind to address {addr}: {e}"));
            }
        };

        if let Err(e) = axum::serve(listener, app).await {
            error!("Server encountered a fatal error: {}", e);
            return Err(anyhow::anyhow!("server error: {e}"));
        }

        Ok(())
    }
}

async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Campus API Gateway is running".to_string(),
    })
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, GatewayError> {
    info!("Login request for user: {}", request.username);

    let issued = state.tokens.issue(&request.username, &request.password)?;

    info!("Login successful for user: {}", request.username);
    Ok(Json(LoginResponse {
        access_token: issued.access_token,
        expires_at: issued.expires_at,
    }))
}

async fn forward_collection(
    State(state): State<AppState>,
    method: Method,
    Path(resource): Path<String>,
    body: Option<Json<Value>>,
) -> Result<ForwardReply, GatewayError> {
    let (service, _) = state.registry.route(&resource)?;
    let service = service.to_string();
    let path = format!("/api/{resource}");
    let body = body.map(|Json(v)| v);

    state
        .forwarder
        .forward(&service, &path, method, body.as_ref())
        .await
}

async fn forward_item(
    State(state): State<AppState>,
    method: Method,
    Path((resource, id)): Path<(String, i64)>,
    body: Option<Json<Value>>,
) -> Result<ForwardReply, GatewayError> {
    let (service, _) = state.registry.route(&resource)?;
    let service = service.to_string();
    let path = format!("/api/{resource}/{id}");
    let body = body.map(|Json(v)| v);

    state
        .forwarder
        .forward(&service, &path, method, body.as_ref())
        .await
}

/// API route documentation
pub fn print_routes() {
    println!("Campus Gateway Routes:");
    println!("======================");
    println!();
    println!("Public:");
    println!("  GET  /                          - Gateway info");
    println!("  POST /auth/login                - Obtain a bearer token");
    println!();
    println!("Forwarding (bearer token required):");
    println!("  GET    /gateway/:resource       - List resources");
    println!("  POST   /gateway/:resource       - Create a resource");
    println!("  GET    /gateway/:resource/:id   - Fetch one resource");
    println!("  PUT    /gateway/:resource/:id   - Partially update a resource");
    println!("  DELETE /gateway/:resource/:id   - Delete a resource");
}
