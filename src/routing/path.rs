//! Request path resolution.
//!
//! # Responsibilities
//! - Strip the context prefix without collapsing repeated separators
//! - Detect a `.json`/`.xml` extension on the final segment
//! - Pair resource types with their ids, left to right
//!
//! # Design Decisions
//! - Empty segments between separators are kept; trailing ones are dropped
//! - The final segment is recorded without a vocabulary check: it has
//!   nothing to pair with
//! - A segment following a known type is its id unless it is itself a
//!   known type (greedy, no backtracking)

use crate::error::{BadRequest, ResolveResult};
use crate::negotiation::SerializationFormat;

use super::query::parse_query;
use super::types::{ParsedRequest, ResourceMap};
use super::vocabulary::KnownResourceNames;

const SEPARATOR: char = '/';

/// Resolve a full request path (context prefix included) and its query string.
pub fn resolve(
    path: &str,
    query: Option<&str>,
    context_path: &str,
    known: &KnownResourceNames,
) -> ResolveResult<ParsedRequest> {
    let result = strip_context(path, context_path)
        .and_then(|remainder| resolve_segments(remainder, query, known));

    match &result {
        Ok(parsed) => tracing::debug!(
            path = %path,
            resources = parsed.resource_map().len(),
            extension = %parsed.extension_format(),
            "Resolved request path"
        ),
        Err(e) => tracing::warn!(path = %path, error = %e, "Rejected request path"),
    }
    result
}

/// Remove `context_path` and the separator that follows it.
///
/// The remainder is returned untouched, so `//` inside it survives.
pub fn strip_context<'a>(path: &'a str, context_path: &str) -> ResolveResult<&'a str> {
    path.strip_prefix(context_path)
        .and_then(|rest| rest.strip_prefix(SEPARATOR))
        .ok_or_else(|| BadRequest::MalformedPath {
            path: path.to_string(),
        })
}

/// Resolve a path whose context prefix has already been stripped.
pub fn resolve_segments(
    remainder: &str,
    query: Option<&str>,
    known: &KnownResourceNames,
) -> ResolveResult<ParsedRequest> {
    let mut segments = split_segments(remainder);
    let extension = match segments.last_mut() {
        Some(last) => {
            let (stem, format) = split_extension(*last);
            *last = stem;
            format
        }
        None => return Err(BadRequest::EmptyPath),
    };
    if segments.len() == 1 && segments[0].is_empty() {
        return Err(BadRequest::EmptyPath);
    }

    let resource_map = pair_segments(&segments, known)?;
    Ok(ParsedRequest::new(resource_map, parse_query(query), extension))
}

/// Split on the separator, keeping inner empty segments and dropping
/// trailing ones.
fn split_segments(remainder: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = remainder.split(SEPARATOR).collect();
    while segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }
    segments
}

/// Strip a recognised extension from the final segment.
fn split_extension(segment: &str) -> (&str, SerializationFormat) {
    // Only the trailing extension goes: `a.json.json` keeps `a.json`, not `a`.
    match segment.rsplit_once('.') {
        Some((stem, extension)) => match SerializationFormat::from_extension(extension) {
            SerializationFormat::Unspecified => (segment, SerializationFormat::Unspecified),
            format => (stem, format),
        },
        None => (segment, SerializationFormat::Unspecified),
    }
}

fn pair_segments(segments: &[&str], known: &KnownResourceNames) -> ResolveResult<ResourceMap> {
    let mut resource_map = ResourceMap::new();
    let mut i = 0;
    while i < segments.len() {
        let current = segments[i];
        if i == segments.len() - 1 {
            resource_map.insert(current.to_string(), None);
            i += 1;
        } else if !known.contains(current) {
            return Err(BadRequest::UnknownResource(current.to_string()));
        } else if !known.contains(segments[i + 1]) {
            resource_map.insert(current.to_string(), Some(segments[i + 1].to_string()));
            i += 2;
        } else {
            resource_map.insert(current.to_string(), None);
            i += 1;
        }
    }
    Ok(resource_map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known() -> KnownResourceNames {
        KnownResourceNames::new(["users", "items", "ratings"])
    }

    fn pairs(parsed: &ParsedRequest) -> Vec<(&str, Option<&str>)> {
        parsed
            .resource_map()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_deref()))
            .collect()
    }

    #[test]
    fn test_type_id_pairs() {
        let parsed = resolve("/app/users/42/items/7", None, "/app", &known()).unwrap();
        assert_eq!(pairs(&parsed), vec![("users", Some("42")), ("items", Some("7"))]);
        assert_eq!(parsed.extension_format(), SerializationFormat::Unspecified);
    }

    #[test]
    fn test_collection_endpoint() {
        let parsed = resolve("/app/users/items", None, "/app", &known()).unwrap();
        assert_eq!(pairs(&parsed), vec![("users", None), ("items", None)]);
    }

    #[test]
    fn test_extension_is_stripped_before_pairing() {
        let parsed = resolve("/app/users/42.json", None, "/app", &known()).unwrap();
        assert_eq!(pairs(&parsed), vec![("users", Some("42"))]);
        assert_eq!(parsed.extension_format(), SerializationFormat::Json);

        let parsed = resolve("/app/users/items.xml", None, "/app", &known()).unwrap();
        assert_eq!(pairs(&parsed), vec![("users", None), ("items", None)]);
        assert_eq!(parsed.extension_format(), SerializationFormat::Xml);
    }

    #[test]
    fn test_only_the_suffix_is_stripped() {
        let parsed = resolve("/app/users/a.json.json", None, "/app", &known()).unwrap();
        assert_eq!(parsed.resource_id("users"), Some("a.json"));
        assert_eq!(parsed.extension_format(), SerializationFormat::Json);

        let parsed = resolve("/app/users/a.json.xml", None, "/app", &known()).unwrap();
        assert_eq!(parsed.resource_id("users"), Some("a.json"));
        assert_eq!(parsed.extension_format(), SerializationFormat::Xml);

        let parsed = resolve("/app/users/v1.2", None, "/app", &known()).unwrap();
        assert_eq!(parsed.resource_id("users"), Some("v1.2"));
        assert_eq!(parsed.extension_format(), SerializationFormat::Unspecified);

        let parsed = resolve("/app/users/report.JSON", None, "/app", &known()).unwrap();
        assert_eq!(parsed.resource_id("users"), Some("report.JSON"));
        assert_eq!(parsed.extension_format(), SerializationFormat::Unspecified);
    }

    #[test]
    fn test_unknown_leading_segment() {
        let err = resolve("/app/widgets/1", None, "/app", &known()).unwrap_err();
        assert_eq!(err, BadRequest::UnknownResource("widgets".into()));
    }

    #[test]
    fn test_final_segment_is_not_checked() {
        let parsed = resolve("/app/users/42/anything", None, "/app", &known()).unwrap();
        assert_eq!(pairs(&parsed), vec![("users", Some("42")), ("anything", None)]);
    }

    #[test]
    fn test_empty_inner_segment_is_preserved() {
        let parsed = resolve("/app/users//items", None, "/app", &known()).unwrap();
        assert_eq!(pairs(&parsed), vec![("users", Some("")), ("items", None)]);

        let err = resolve("/app//users", None, "/app", &known()).unwrap_err();
        assert_eq!(err, BadRequest::UnknownResource(String::new()));
    }

    #[test]
    fn test_trailing_separator_is_dropped() {
        let parsed = resolve("/app/users/42/", None, "/app", &known()).unwrap();
        assert_eq!(pairs(&parsed), vec![("users", Some("42"))]);
    }

    #[test]
    fn test_repeated_type_keeps_first_position() {
        let parsed = resolve("/app/users/1/items/2/users/3", None, "/app", &known()).unwrap();
        assert_eq!(pairs(&parsed), vec![("users", Some("3")), ("items", Some("2"))]);
    }

    #[test]
    fn test_empty_paths() {
        assert_eq!(resolve("/app/", None, "/app", &known()), Err(BadRequest::EmptyPath));
        assert_eq!(resolve("/app///", None, "/app", &known()), Err(BadRequest::EmptyPath));
        assert_eq!(resolve("/app/.json", None, "/app", &known()), Err(BadRequest::EmptyPath));
    }

    #[test]
    fn test_context_prefix() {
        assert!(matches!(
            resolve("/app", None, "/app", &known()),
            Err(BadRequest::MalformedPath { .. })
        ));
        assert!(matches!(
            resolve("/other/users", None, "/app", &known()),
            Err(BadRequest::MalformedPath { .. })
        ));
        assert!(matches!(
            resolve("/application/users", None, "/app", &known()),
            Err(BadRequest::MalformedPath { .. })
        ));

        let parsed = resolve("/users/1", None, "", &known()).unwrap();
        assert_eq!(parsed.resource_id("users"), Some("1"));
    }

    #[test]
    fn test_strip_context_keeps_repeated_separators() {
        assert_eq!(strip_context("/app//users", "/app"), Ok("/users"));
        assert_eq!(strip_context("/users", ""), Ok("users"));
    }

    #[test]
    fn test_query_is_attached() {
        let parsed = resolve("/app/users", Some("sort=name&sort=id"), "/app", &known()).unwrap();
        assert_eq!(parsed.params()["sort"], vec!["name", "id"]);
    }
}
