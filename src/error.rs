//! Request-shape error definitions.
//!
//! `BadRequest` is the only failure the resolver and negotiator report.
//! Anything else escaping this crate is a defect, not a client error.

use axum::http::StatusCode;
use thiserror::Error;

/// A malformed or semantically invalid request.
///
/// Every variant maps to a 400-class response; the message names the
/// offending token so the client can act on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BadRequest {
    /// The path does not start with the configured context prefix and separator.
    #[error("Error Parsing URL: {path}")]
    MalformedPath { path: String },

    /// Nothing is left to resolve once the context prefix is stripped.
    #[error("Empty resource path")]
    EmptyPath,

    /// A non-final segment is not a known resource type.
    #[error("Unknown Resource: {0}")]
    UnknownResource(String),

    /// An `Accept` clause carries a `q=` weight that is not a finite number.
    #[error("Malformed quality value {value:?} for media type {media_type}")]
    MalformedQuality { media_type: String, value: String },
}

impl BadRequest {
    /// HTTP status the caller should answer with.
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

/// Result type for resolution and negotiation.
pub type ResolveResult<T> = Result<T, BadRequest>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BadRequest::UnknownResource("widgets".to_string());
        assert_eq!(err.to_string(), "Unknown Resource: widgets");

        let err = BadRequest::MalformedQuality {
            media_type: "application/json".to_string(),
            value: "high".to_string(),
        };
        assert!(err.to_string().contains("\"high\""));
        assert!(err.to_string().contains("application/json"));
    }

    #[test]
    fn test_every_variant_is_client_error() {
        let errors = [
            BadRequest::MalformedPath { path: "/x".into() },
            BadRequest::EmptyPath,
            BadRequest::UnknownResource("x".into()),
            BadRequest::MalformedQuality {
                media_type: "a/b".into(),
                value: "?".into(),
            },
        ];
        for err in errors {
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        }
    }
}
