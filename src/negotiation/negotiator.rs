//! Response and request format decisions.

use serde::Serialize;

use crate::error::ResolveResult;

use super::accept::AcceptWeights;
use super::format::{SerializationFormat, APPLICATION_JSON, APPLICATION_XML};

/// Both negotiated formats for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Negotiated {
    pub response: SerializationFormat,
    pub request: SerializationFormat,
}

/// Decide the response format.
///
/// The URL extension wins outright. Otherwise the `Accept` header is
/// consulted for the literal JSON and XML media types; ties favour JSON.
/// Only a malformed weight in a header that has to be parsed fails.
pub fn response_format(
    extension_hint: SerializationFormat,
    accept: Option<&str>,
) -> ResolveResult<SerializationFormat> {
    if extension_hint.is_specified() {
        return Ok(extension_hint);
    }
    let Some(header) = accept else {
        return Ok(SerializationFormat::Unspecified);
    };

    let weights = AcceptWeights::parse(header)?;
    let format = match (weights.weight(APPLICATION_JSON), weights.weight(APPLICATION_XML)) {
        (None, None) => SerializationFormat::Other,
        (None, Some(_)) => SerializationFormat::Xml,
        (Some(_), None) => SerializationFormat::Json,
        (Some(json), Some(xml)) if json >= xml => SerializationFormat::Json,
        (Some(_), Some(_)) => SerializationFormat::Xml,
    };
    Ok(format)
}

/// Decide the declared request body format from `Content-Type`.
///
/// Exact match only: `application/json; charset=utf-8` is `Other`.
pub fn request_format(content_type: Option<&str>) -> SerializationFormat {
    match content_type {
        None => SerializationFormat::Unspecified,
        Some(APPLICATION_XML) => SerializationFormat::Xml,
        Some(APPLICATION_JSON) => SerializationFormat::Json,
        Some(_) => SerializationFormat::Other,
    }
}

/// Run both decisions.
pub fn negotiate(
    extension_hint: SerializationFormat,
    accept: Option<&str>,
    content_type: Option<&str>,
) -> ResolveResult<Negotiated> {
    let response = response_format(extension_hint, accept)?;
    let request = request_format(content_type);
    tracing::debug!(%response, %request, "Negotiated serialization formats");
    Ok(Negotiated { response, request })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BadRequest;
    use SerializationFormat::*;

    #[test]
    fn test_extension_wins() {
        for accept in [None, Some("application/xml"), Some("text/html"), Some("application/xml;q=bad")] {
            assert_eq!(response_format(Json, accept), Ok(Json));
            assert_eq!(response_format(Xml, accept), Ok(Xml));
        }
    }

    #[test]
    fn test_no_header() {
        assert_eq!(response_format(Unspecified, None), Ok(Unspecified));
    }

    #[test]
    fn test_decision_table() {
        let cases = [
            ("text/html", Other),
            ("*/*", Other),
            ("application/xml", Xml),
            ("application/json", Json),
            ("application/json,application/xml", Json),
            ("application/json;q=0.8,application/xml;q=0.9", Xml),
            ("application/json;q=0.9,application/xml;q=0.8", Json),
            ("application/xml;q=0.5,application/json;q=0.5", Json),
            ("text/html,application/xml;q=0.1", Xml),
        ];
        for (header, expected) in cases {
            assert_eq!(response_format(Unspecified, Some(header)), Ok(expected), "{header}");
        }
    }

    #[test]
    fn test_non_ascii_whitespace_is_part_of_the_token() {
        assert_eq!(response_format(Unspecified, Some("\u{a0}application/xml")), Ok(Other));
    }

    #[test]
    fn test_zero_weight_still_counts_as_present() {
        assert_eq!(response_format(Unspecified, Some("application/json;q=0")), Ok(Json));
    }

    #[test]
    fn test_malformed_weight_is_bad_request() {
        let result = response_format(Unspecified, Some("application/json;q=abc"));
        assert!(matches!(result, Err(BadRequest::MalformedQuality { .. })));
    }

    #[test]
    fn test_request_format() {
        assert_eq!(request_format(None), Unspecified);
        assert_eq!(request_format(Some("application/json")), Json);
        assert_eq!(request_format(Some("application/xml")), Xml);
        assert_eq!(request_format(Some("application/json; charset=utf-8")), Other);
        assert_eq!(request_format(Some("text/xml")), Other);
        assert_eq!(request_format(Some("")), Other);
    }

    #[test]
    fn test_negotiate_pairs_both() {
        let negotiated = negotiate(Unspecified, Some("application/xml"), Some("application/json")).unwrap();
        assert_eq!(negotiated, Negotiated { response: Xml, request: Json });
    }
}
