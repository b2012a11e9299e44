//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing / negotiation / http produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (resolution outcomes, negotiated formats)
//!
//! Consumers:
//!     → stdout (fmt layer)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Offending tokens are logged as structured fields, not in the message
//! - Request ID flows through the HTTP span
//! - Metrics are cheap (atomic increments) and optional

pub mod logging;
pub mod metrics;
