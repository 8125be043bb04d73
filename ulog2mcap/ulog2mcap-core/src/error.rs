//! Error types for malformed decoded-log input.

/// A raw value did not have the shape required by its consumer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("expected {expected}, found {actual}")]
pub struct ValueTypeError {
    pub expected: String,
    pub actual: String,
}

impl ValueTypeError {
    pub fn new(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// Structural problems in a [`DataStream`](crate::DataStream).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StreamError {
    /// A column named by the stream's field list (or the timestamp column) is absent.
    #[error("data stream '{stream}' has no '{column}' column")]
    MissingColumn { stream: String, column: String },

    /// A column does not have one value per row.
    #[error("column '{column}' of data stream '{stream}' has {actual} values, expected {expected}")]
    ColumnLength {
        stream: String,
        column: String,
        expected: usize,
        actual: usize,
    },

    /// A timestamp cell is not a non-negative integer.
    #[error("invalid timestamp at row {row} of data stream '{stream}': {source}")]
    InvalidTimestamp {
        stream: String,
        row: usize,
        #[source]
        source: ValueTypeError,
    },
}
