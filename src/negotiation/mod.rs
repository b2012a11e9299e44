//! Serialization format negotiation.
//!
//! # Data Flow
//! ```text
//! Response side:
//!     extension hint (from routing)
//!     → set? return it
//!     → Accept header absent? Unspecified
//!     → accept.rs (media type → weight)
//!     → negotiator.rs (JSON vs XML decision table)
//!
//! Request side:
//!     Content-Type → negotiator.rs (exact match)
//! ```
//!
//! # Design Decisions
//! - URL extension always beats headers
//! - Only the literal `application/json` and `application/xml` tokens count;
//!   wildcards are not expanded
//! - Ties go to JSON
//! - Content-Type parameters are not stripped

pub mod accept;
pub mod format;
pub mod negotiator;

pub use accept::AcceptWeights;
pub use format::SerializationFormat;
pub use negotiator::{negotiate, request_format, response_format, Negotiated};
