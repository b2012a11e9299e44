//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::KnownResourceNames;

/// Root configuration for the request-shape service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ShapeConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Path resolution settings.
    pub resolver: ResolverConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Path resolution configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ResolverConfig {
    /// Mount prefix stripped from every request path (e.g., "/api").
    /// Empty means the service is mounted at the root.
    pub context_path: String,

    /// Valid resource-type tokens.
    pub resource_names: Vec<String>,
}

impl ResolverConfig {
    /// Build the vocabulary used during resolution.
    pub fn known_resource_names(&self) -> KnownResourceNames {
        self.resource_names.iter().cloned().collect()
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config() {
        let config: ShapeConfig = toml::from_str(
            r#"
            [resolver]
            resource_names = ["users", "items"]
            "#,
        )
        .unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.resolver.context_path, "");
        assert!(config.resolver.known_resource_names().contains("items"));
        assert!(!config.observability.metrics_enabled);
    }
}
