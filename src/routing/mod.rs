//! Path resolution subsystem.
//!
//! # Data Flow
//! ```text
//! Raw request path + query string
//!     → path.rs (strip context prefix, split, extension hint)
//!     → path.rs (walk segments against vocabulary.rs)
//!     → query.rs (multi-valued parameter map)
//!     → Return: ParsedRequest or BadRequest
//! ```
//!
//! # Design Decisions
//! - Pure functions: no state survives a request
//! - Vocabulary is supplied by the caller and only read
//! - Greedy left-to-right pairing; an id colliding with a resource
//!   type is read as a type
//! - Repeated separators are never collapsed

pub mod path;
pub mod query;
pub mod types;
pub mod vocabulary;

pub use path::{resolve, resolve_segments, strip_context};
pub use query::parse_query;
pub use types::{ParsedRequest, QueryParams, ResourceMap};
pub use vocabulary::KnownResourceNames;
