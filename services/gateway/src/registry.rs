//! Static service registry
//!
//! Fixed at process start from configuration; read-only afterwards, so
//! concurrent requests share it without locking.

use rustc_hash::FxHashMap;

use crate::config::ServiceTarget;
use crate::error::GatewayError;

/// Read-only mapping from logical service name to backend target
#[derive(Debug, Clone)]
pub struct ServiceRegistry {
    targets: FxHashMap<String, ServiceTarget>,
}

impl ServiceRegistry {
    #[must_use]
    pub fn new(targets: FxHashMap<String, ServiceTarget>) -> Self {
        Self { targets }
    }

    /// Resolve a logical service name to its target.
    ///
    /// Unknown names are a routing error (404 at the boundary), not a fault.
    pub fn resolve(&self, service: &str) -> Result<&ServiceTarget, GatewayError> {
        self.targets
            .get(service)
            .ok_or_else(|| GatewayError::UnknownService(service.to_string()))
    }

    /// Map an inbound resource segment (e.g. `courses`) to the owning
    /// service name and target.
    pub fn route(&self, resource: &str) -> Result<(&str, &ServiceTarget), GatewayError> {
        self.targets
            .iter()
            .find(|(_, target)| target.resource == resource)
            .map(|(name, target)| (name.as_str(), target))
            .ok_or_else(|| GatewayError::UnknownService(resource.to_string()))
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GatewayConfig;

    fn registry() -> ServiceRegistry {
        ServiceRegistry::new(GatewayConfig::default().services)
    }

    #[test]
    fn resolve_returns_the_registered_target() {
        let registry = registry();
        let target = registry.resolve("course").unwrap();
        assert_eq!(target.base_url, "http://127.0.0.1:8002");
    }

    #[test]
    fn resolve_fails_for_unknown_names() {
        assert!(matches!(
            registry().resolve("billing"),
            Err(GatewayError::UnknownService(name)) if name == "billing"
        ));
    }

    #[test]
    fn route_maps_resource_segments_to_services() {
        let registry = registry();
        let (name, target) = registry.route("students").unwrap();
        assert_eq!(name, "student");
        assert_eq!(target.base_url, "http://127.0.0.1:8001");
    }

    #[test]
    fn route_fails_for_unknown_segments() {
        assert!(matches!(
            registry().route("rooms"),
            Err(GatewayError::UnknownService(_))
        ));
    }
}
