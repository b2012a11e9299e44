//! Request-shape resolver library.
//!
//! Turns a raw request path into an ordered resource map and decides which
//! serialization format a request and its response use.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod negotiation;
pub mod observability;
pub mod routing;

pub use config::schema::ShapeConfig;
pub use error::{BadRequest, ResolveResult};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use negotiation::{request_format, response_format, SerializationFormat};
pub use routing::{resolve, KnownResourceNames, ParsedRequest};
