use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{path::CanonicalType, schema::ScalarKind};

/// Name prefix of alignment fields inserted by the logger. Such fields carry
/// no data and never reach schemas, paths or messages.
pub const PADDING_PREFIX: &str = "_padding";

/// Primitive type names used in ULog message format definitions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PrimitiveType {
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float,
    Double,
    Bool,
    Char,
    /// Any type name outside the table above (nested formats included).
    Other(String),
}

impl PrimitiveType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Int8 => "int8_t",
            Self::UInt8 => "uint8_t",
            Self::Int16 => "int16_t",
            Self::UInt16 => "uint16_t",
            Self::Int32 => "int32_t",
            Self::UInt32 => "uint32_t",
            Self::Int64 => "int64_t",
            Self::UInt64 => "uint64_t",
            Self::Float => "float",
            Self::Double => "double",
            Self::Bool => "bool",
            Self::Char => "char",
            Self::Other(s) => s,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// JSON-Schema kind for this type. Unknown types fall back to `string`.
    pub fn scalar_kind(&self) -> ScalarKind {
        match self {
            Self::Int8
            | Self::UInt8
            | Self::Int16
            | Self::UInt16
            | Self::Int32
            | Self::UInt32
            | Self::Int64
            | Self::UInt64 => ScalarKind::Integer,
            Self::Float | Self::Double => ScalarKind::Number,
            Self::Bool => ScalarKind::Boolean,
            Self::Char | Self::Other(_) => ScalarKind::String,
        }
    }

    /// Catalog-facing classification. Unknown types map to [`CanonicalType::Unknown`].
    pub fn canonical_type(&self) -> CanonicalType {
        match self {
            Self::Other(_) => CanonicalType::Unknown,
            _ => match self.scalar_kind() {
                ScalarKind::Integer | ScalarKind::Number => CanonicalType::Number,
                ScalarKind::Boolean => CanonicalType::Boolean,
                ScalarKind::String => CanonicalType::String,
            },
        }
    }

    /// Encoded size in bytes, `None` for unknown types.
    pub fn size_bytes(&self) -> Option<usize> {
        match self {
            Self::Int8 | Self::UInt8 | Self::Bool | Self::Char => Some(1),
            Self::Int16 | Self::UInt16 => Some(2),
            Self::Int32 | Self::UInt32 | Self::Float => Some(4),
            Self::Int64 | Self::UInt64 | Self::Double => Some(8),
            Self::Other(_) => None,
        }
    }
}

impl From<&str> for PrimitiveType {
    fn from(s: &str) -> Self {
        match s {
            "int8_t" => Self::Int8,
            "uint8_t" => Self::UInt8,
            "int16_t" => Self::Int16,
            "uint16_t" => Self::UInt16,
            "int32_t" => Self::Int32,
            "uint32_t" => Self::UInt32,
            "int64_t" => Self::Int64,
            "uint64_t" => Self::UInt64,
            "float" => Self::Float,
            "double" => Self::Double,
            "bool" => Self::Bool,
            "char" => Self::Char,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for PrimitiveType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<PrimitiveType> for String {
    fn from(value: PrimitiveType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One declared field of a message format.
///
/// Data streams carry their fields flattened: an array `accel[3]` appears as
/// `accel[0]`, `accel[1]`, `accel[2]`, each with `array_size == 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    #[serde(rename = "type")]
    pub type_name: PrimitiveType,
    #[serde(default = "default_array_size")]
    pub array_size: usize,
    pub name: String,
}

fn default_array_size() -> usize {
    1
}

impl FieldDefinition {
    pub fn new(type_name: impl Into<PrimitiveType>, array_size: usize, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            array_size,
            name: name.into(),
        }
    }

    pub fn is_padding(&self) -> bool {
        self.name.starts_with(PADDING_PREFIX)
    }

    pub fn is_array(&self) -> bool {
        self.array_size > 1
    }

    /// Field name without any bracket suffix (`accel[2]` -> `accel`).
    pub fn base_name(&self) -> &str {
        split_array_index(&self.name).map_or(self.name.as_str(), |(base, _)| base)
    }
}

/// Split a bracket-indexed name into its base name and index.
///
/// Returns `None` when the name has no `[`. The index is `None` when the
/// bracket content is not a decimal integer.
pub fn split_array_index(name: &str) -> Option<(&str, Option<usize>)> {
    let open = name.find('[')?;
    let base = &name[..open];
    let rest = &name[open + 1..];
    let index = rest
        .find(']')
        .and_then(|close| rest[..close].trim().parse::<usize>().ok());
    Some((base, index))
}

/// A named message layout declared once per log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageFormat {
    pub name: String,
    pub fields: Vec<FieldDefinition>,
}

impl MessageFormat {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDefinition>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}
