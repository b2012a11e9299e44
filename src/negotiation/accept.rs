//! Accept header weight parsing.

use indexmap::IndexMap;

use crate::error::{BadRequest, ResolveResult};

const DEFAULT_WEIGHT: f32 = 1.0;

/// Media type token → quality weight, as listed in an `Accept` header.
///
/// Tokens are kept verbatim (after whitespace removal). A clause that has
/// parameters but no `q=` is stored with its parameters attached, so it will
/// not match a bare media type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AcceptWeights {
    weights: IndexMap<String, f32>,
}

impl AcceptWeights {
    /// Parse an `Accept` header value.
    ///
    /// Fails on a `q=` value that is not a finite number.
    pub fn parse(header: &str) -> ResolveResult<Self> {
        let compact: String = header.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        let mut weights = IndexMap::new();

        for clause in compact.split(',') {
            if clause.contains(';') && clause.contains("q=") {
                let mut parts = clause.split(';');
                let media_type = parts.next().unwrap_or_default();
                for param in parts.filter(|p| p.contains("q=")) {
                    let raw = param.split_once('=').map(|(_, v)| v).unwrap_or_default();
                    let weight = parse_weight(media_type, raw)?;
                    weights.insert(media_type.to_string(), weight);
                }
            } else {
                weights.insert(clause.to_string(), DEFAULT_WEIGHT);
            }
        }
        Ok(Self { weights })
    }

    /// Weight listed for exactly `media_type`.
    pub fn weight(&self, media_type: &str) -> Option<f32> {
        self.weights.get(media_type).copied()
    }
}

fn parse_weight(media_type: &str, raw: &str) -> ResolveResult<f32> {
    match raw.parse::<f32>() {
        Ok(weight) if weight.is_finite() => Ok(weight),
        _ => Err(BadRequest::MalformedQuality {
            media_type: media_type.to_string(),
            value: raw.to_string(),
        }),
    }
}
