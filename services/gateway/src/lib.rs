//! Campus API Gateway
//!
//! Single public-facing entry point for the campus microservices.
//! Features:
//! - JWT authentication for all non-public routes
//! - Name-based routing to backend services
//! - Transparent request forwarding with error normalization
//! - Per-request timing and logging

use anyhow::Result;

pub mod config;
pub mod error;
pub mod forwarder;
pub mod middleware;
pub mod models;
pub mod registry;
pub mod server;
pub mod token;

pub use config::{AuthConfig, GatewayConfig, ServerConfig, ServiceTarget, UpstreamConfig};
pub use error::GatewayError;
pub use server::GatewayServer;

/// Start the gateway server
pub async fn start_server(config: GatewayConfig) -> Result<()> {
    let server = GatewayServer::new(config);
    server.start().await
}
