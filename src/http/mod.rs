//! HTTP inspection service.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, trace span)
//!     → request.rs (read Accept / Content-Type)
//!     → routing::resolve (resource map, extension hint)
//!     → negotiation::negotiate (response + request formats)
//!     → response.rs (JSON description of the shape, or 400)
//! ```
//!
//! # Design Decisions
//! - The service describes the resolved shape; encoding bodies in the
//!   negotiated format is left to the handlers that consume it
//! - Vocabulary is swapped atomically on reload; a request sees one snapshot

pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuid, X_NEGOTIATED_FORMAT, X_REQUEST_ID};
pub use response::ShapeResponse;
pub use server::{HttpServer, VocabularyHandle};
