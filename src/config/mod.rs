//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ShapeConfig (validated, immutable)
//!     → KnownResourceNames shared via ArcSwap
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs parses and validates the new file
//!     → resolver section unchanged? dropped
//!     → published on a watch channel
//!     → http server swaps the vocabulary
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{ListenerConfig, ObservabilityConfig, ResolverConfig, ShapeConfig};
pub use validation::ValidationError;
pub use watcher::{Reload, VocabularyWatcher};
