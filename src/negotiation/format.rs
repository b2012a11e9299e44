//! Serialization format signal.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const APPLICATION_JSON: &str = "application/json";
pub const APPLICATION_XML: &str = "application/xml";

/// Which serialization a request or response uses.
///
/// `Unspecified` means no signal was present; `Other` means a signal was
/// present but named neither JSON nor XML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SerializationFormat {
    Json,
    Xml,
    #[default]
    Unspecified,
    Other,
}

impl SerializationFormat {
    /// Format named by a bare extension (`json`, `xml`). Case-sensitive.
    pub fn from_extension(extension: &str) -> Self {
        match extension {
            "json" => Self::Json,
            "xml" => Self::Xml,
            _ => Self::Unspecified,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Unspecified => "unspecified",
            Self::Other => "other",
        }
    }

    pub fn is_specified(self) -> bool {
        self != Self::Unspecified
    }
}

impl fmt::Display for SerializationFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
