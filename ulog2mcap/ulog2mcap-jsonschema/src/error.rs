use thiserror::Error;

/// A schema that cannot be given a stable identity.
///
/// Cloned into the report of every data stream that uses the failed format.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("property '{name}' is declared more than once")]
    DuplicateProperty { name: String },
    #[error("required entry '{name}' has no matching property")]
    UnknownRequired { name: String },
    #[error("property '{name}' is not listed as required")]
    NotRequired { name: String },
    #[error("failed to serialize schema: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for SchemaError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value.to_string())
    }
}
