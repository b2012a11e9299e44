//! Query-string parsing.
//!
//! Values are kept exactly as they appear on the wire: percent-escapes and
//! `+` are not decoded here. Decoding belongs to whoever consumes the value.

use super::types::QueryParams;

/// Parse a raw query string into a multi-valued parameter map.
///
/// Pieces are separated by `&` and split on their first `=`. A piece with no
/// `=` is skipped without failing the rest of the parse.
pub fn parse_query(query: Option<&str>) -> QueryParams {
    let mut params = QueryParams::new();
    let Some(query) = query else {
        return params;
    };

    for piece in query.split('&') {
        let Some((key, value)) = piece.split_once('=') else {
            tracing::trace!(fragment = %piece, "Skipping query fragment without '='");
            continue;
        };
        params
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
    }
    params
}
