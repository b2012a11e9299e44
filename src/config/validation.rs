//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses and the context prefix
//! - Reject resource names the path resolver could never match
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ShapeConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ShapeConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid bind address {0:?}")]
    BindAddress(String),

    #[error("invalid metrics address {0:?}")]
    MetricsAddress(String),

    #[error("context path {0:?} must start with '/' and must not end with '/'")]
    ContextPath(String),

    #[error("resource name must not be empty")]
    EmptyResourceName,

    #[error("resource name {0:?} must not contain '/'")]
    ResourceNameSeparator(String),

    #[error("resource name {0:?} ends with a format extension")]
    ResourceNameExtension(String),

    #[error("duplicate resource name {0:?}")]
    DuplicateResourceName(String),
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &ShapeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    let observability = &config.observability;
    if observability.metrics_enabled && observability.metrics_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::MetricsAddress(observability.metrics_address.clone()));
    }

    let context = &config.resolver.context_path;
    if !context.is_empty() && (!context.starts_with('/') || context.ends_with('/')) {
        errors.push(ValidationError::ContextPath(context.clone()));
    }

    let mut seen = HashSet::new();
    for name in &config.resolver.resource_names {
        if name.is_empty() {
            errors.push(ValidationError::EmptyResourceName);
        } else if name.contains('/') {
            errors.push(ValidationError::ResourceNameSeparator(name.clone()));
        } else if name.ends_with(".json") || name.ends_with(".xml") {
            errors.push(ValidationError::ResourceNameExtension(name.clone()));
        }
        if !seen.insert(name.as_str()) {
            errors.push(ValidationError::DuplicateResourceName(name.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
