//! Catalog-facing message path types.

use std::fmt;

use serde::Serialize;

/// Coarse data type used when cataloging message paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CanonicalType {
    Number,
    Boolean,
    String,
    Array,
    Unknown,
}

impl CanonicalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalType::Number => "number",
            CanonicalType::Boolean => "boolean",
            CanonicalType::String => "string",
            CanonicalType::Array => "array",
            CanonicalType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CanonicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A queryable path into a topic's messages.
///
/// Array fields contribute a root path (`accel`) and a single element path
/// (`accel.[*]`) regardless of their length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessagePath {
    pub path: String,
    /// Declared primitive type, `<type>[]` for array roots.
    pub data_type: String,
    pub canonical_type: CanonicalType,
}

impl MessagePath {
    pub fn new(
        path: impl Into<String>,
        data_type: impl Into<String>,
        canonical_type: CanonicalType,
    ) -> Self {
        Self {
            path: path.into(),
            data_type: data_type.into(),
            canonical_type,
        }
    }
}
