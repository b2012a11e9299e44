//! Resolved request types.

use indexmap::IndexMap;
use serde::Serialize;

use crate::negotiation::SerializationFormat;

/// Resource type → optional resource id, in path order.
pub type ResourceMap = IndexMap<String, Option<String>>;

/// Query parameter name → values, in order of appearance.
pub type QueryParams = IndexMap<String, Vec<String>>;

/// The shape of a single request: which resources it addresses, its query
/// parameters, and the format named by its URL extension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedRequest {
    #[serde(rename = "resources")]
    resource_map: ResourceMap,
    params: QueryParams,
    extension_format: SerializationFormat,
}

impl ParsedRequest {
    pub(crate) fn new(
        resource_map: ResourceMap,
        params: QueryParams,
        extension_format: SerializationFormat,
    ) -> Self {
        Self {
            resource_map,
            params,
            extension_format,
        }
    }

    pub fn resource_map(&self) -> &ResourceMap {
        &self.resource_map
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Format named by a trailing `.json`/`.xml`, or `Unspecified`.
    pub fn extension_format(&self) -> SerializationFormat {
        self.extension_format
    }

    /// Id bound to `resource_type`, if the type is present and carries one.
    pub fn resource_id(&self, resource_type: &str) -> Option<&str> {
        self.resource_map
            .get(resource_type)
            .and_then(|id| id.as_deref())
    }

    /// First value of a query parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Rebuild the consumed segment sequence by interleaving types and ids.
    pub fn segments(&self) -> Vec<&str> {
        let mut segments = Vec::with_capacity(self.resource_map.len() * 2);
        for (resource_type, id) in &self.resource_map {
            segments.push(resource_type.as_str());
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }
        segments
    }
}
