//! Response rendering.
//!
//! # Responsibilities
//! - Describe a resolved request as JSON
//! - Map `BadRequest` to a 400 with a JSON error body

use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::BadRequest;
use crate::http::request::X_NEGOTIATED_FORMAT;
use crate::negotiation::{Negotiated, SerializationFormat};
use crate::routing::ParsedRequest;

/// Body returned for a resolved request.
#[derive(Debug, Clone, Serialize)]
pub struct ShapeResponse {
    #[serde(flatten)]
    pub parsed: ParsedRequest,
    pub response_format: SerializationFormat,
    pub request_format: SerializationFormat,
}

impl ShapeResponse {
    pub fn new(parsed: ParsedRequest, negotiated: Negotiated) -> Self {
        Self {
            parsed,
            response_format: negotiated.response,
            request_format: negotiated.request,
        }
    }
}

impl IntoResponse for ShapeResponse {
    fn into_response(self) -> Response {
        let format = HeaderValue::from_static(self.response_format.as_str());
        let mut response = Json(self).into_response();
        response.headers_mut().insert(X_NEGOTIATED_FORMAT, format);
        response
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for BadRequest {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
