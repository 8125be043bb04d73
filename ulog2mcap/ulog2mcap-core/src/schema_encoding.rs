use std::fmt;

/// Schema record encodings, as named in the MCAP registry.
/// <https://mcap.dev/spec/registry>
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SchemaEncoding {
    /// No schema
    None,
    /// JSON Schema (`jsonschema`), the only encoding this workspace writes
    JsonSchema,
    /// Any other registry or custom encoding
    Unknown(String),
}

impl SchemaEncoding {
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "",
            Self::JsonSchema => "jsonschema",
            Self::Unknown(s) => s,
        }
    }
}

impl From<&str> for SchemaEncoding {
    fn from(s: &str) -> Self {
        match s {
            "" => Self::None,
            "jsonschema" => Self::JsonSchema,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for SchemaEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
