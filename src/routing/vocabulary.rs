//! Known resource-type vocabulary.

use std::collections::HashSet;

/// The set of valid resource-type tokens (e.g. `users`, `items`).
///
/// Built once from routing configuration and shared read-only. Callers that
/// need to change the vocabulary build a new set and swap it in; mutating a
/// set while a resolution is reading it is not supported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownResourceNames {
    names: HashSet<String>,
}

impl KnownResourceNames {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().collect()
    }

    /// Returns true if `segment` names a resource type.
    pub fn contains(&self, segment: &str) -> bool {
        self.names.contains(segment)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for KnownResourceNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
