use std::fmt;

/// Channel message encodings, as named in the MCAP registry.
/// <https://mcap.dev/spec/registry>
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MessageEncoding {
    /// JSON text (`json`)
    Json,
    /// Any other registry or custom encoding
    Unknown(String),
}

impl MessageEncoding {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Json => "json",
            Self::Unknown(s) => s,
        }
    }
}

impl From<&str> for MessageEncoding {
    fn from(s: &str) -> Self {
        match s {
            "json" => Self::Json,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for MessageEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
