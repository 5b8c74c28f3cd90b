//! Configuration for the gateway

use anyhow::Result;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Gateway configuration, loaded once at startup and read-only afterwards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Backend service table, keyed by logical service name
    pub services: FxHashMap<String, ServiceTarget>,
    /// Authentication configuration
    pub auth: AuthConfig,
    /// Outbound HTTP client configuration
    pub upstream: UpstreamConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Inbound request timeout in seconds
    pub timeout_seconds: u64,
    /// Maximum request body size in bytes
    pub max_body_size: usize,
}

/// A backend service reachable through the gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceTarget {
    /// Base address of the service, e.g. `http://127.0.0.1:8002`
    pub base_url: String,
    /// Resource segment the service owns, e.g. `courses`
    pub resource: String,
}

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared secret for signing and verifying tokens
    pub jwt_secret: String,
    /// Token validity window in seconds
    pub token_expiry_seconds: u64,
    /// The single identity accepted by the login endpoint
    pub username: String,
    /// Password for that identity
    pub password: String,
}

/// Outbound HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Per-attempt timeout for backend calls in seconds
    pub timeout_seconds: u64,
    /// Connect timeout in seconds
    pub connect_timeout_seconds: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        let mut services = FxHashMap::default();
        services.insert(
            "student".to_string(),
            ServiceTarget {
                base_url: "http://127.0.0.1:8001".to_string(),
                resource: "students".to_string(),
            },
        );
        services.insert(
            "course".to_string(),
            ServiceTarget {
                base_url: "http://127.0.0.1:8002".to_string(),
                resource: "courses".to_string(),
            },
        );

        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8000,
                timeout_seconds: 30,
                max_body_size: 1024 * 1024, // 1MB
            },
            services,
            auth: AuthConfig {
                jwt_secret: "supersecretkey".to_string(),
                token_expiry_seconds: 3600, // 1 hour
                username: "admin".to_string(),
                password: "admin123".to_string(),
            },
            upstream: UpstreamConfig {
                timeout_seconds: 10,
                connect_timeout_seconds: 3,
            },
        }
    }
}

impl GatewayConfig {
    /// Load configuration from file, with `GATEWAY_*` environment overrides
    pub fn from_file(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("GATEWAY"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Get server address
    #[must_use]
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_registers_both_services() {
        let config = GatewayConfig::default();
        assert_eq!(config.services.len(), 2);
        assert_eq!(config.services["course"].resource, "courses");
        assert_eq!(config.services["student"].resource, "students");
    }

    #[test]
    fn server_address_joins_host_and_port() {
        let config = GatewayConfig::default();
        assert_eq!(config.server_address(), "127.0.0.1:8000");
    }
}
