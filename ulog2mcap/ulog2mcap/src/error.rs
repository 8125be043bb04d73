//! Error types for conversion and container inspection.

use ulog2mcap_core::StreamError;
use ulog2mcap_jsonschema::SchemaError;

/// Failure of a single topic. Sibling topics are unaffected.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The data stream is missing columns or has unreadable timestamps.
    #[error("malformed input: {0}")]
    MalformedInput(#[from] StreamError),

    /// The data stream names a message format the log does not declare.
    #[error("message format '{format}' not found")]
    FormatNotFound { format: String },

    /// The stream's message format has no valid schema.
    #[error("schema for message format '{format}' is invalid: {source}")]
    Schema {
        format: String,
        #[source]
        source: SchemaError,
    },

    /// Two streams resolved to the same output topic name.
    #[error("topic name '{topic}' is already taken by another data stream")]
    TopicNameCollision { topic: String },

    /// Error from the underlying `mcap` writer.
    #[error(transparent)]
    Mcap(#[from] mcap::McapError),

    /// A coerced message could not be encoded as JSON.
    #[error("failed to encode message {sequence}: {source}")]
    Encode {
        sequence: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A microsecond timestamp does not fit in nanoseconds.
    #[error("timestamp {timestamp_us} us at row {row} overflows nanoseconds")]
    TimestampOverflow { row: usize, timestamp_us: u64 },

    /// More rows than the container's sequence counter can number.
    #[error("row {row} exceeds the maximum message sequence")]
    SequenceOverflow { row: usize },

    /// The finished container could not be persisted.
    #[error("failed to persist container for topic '{topic}': {source}")]
    ContainerIo {
        topic: String,
        #[source]
        source: std::io::Error,
    },

    /// The run was cancelled before the container was finalized.
    #[error("conversion cancelled")]
    Cancelled,
}

/// Failure of a whole conversion run, before any topic is written.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The worker pool could not be started.
    #[error(transparent)]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Errors produced by [`inspect_container`](crate::inspect_container).
#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    /// I/O error while opening or memory-mapping a file.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Error from the underlying `mcap` crate (bad magic, CRC mismatch, ...).
    #[error(transparent)]
    Mcap(#[from] mcap::McapError),

    /// The container has no summary section, so it was never finalized.
    #[error("MCAP summary not available in {path}")]
    SummaryNotAvailable { path: String },

    /// The container does not hold exactly one channel.
    #[error("expected exactly one channel in {path}, found {count}")]
    ChannelCount { path: String, count: usize },

    /// The channel has no schema attached.
    #[error("schema not available for topic '{topic}' (channel id {channel_id})")]
    SchemaNotAvailable { topic: String, channel_id: u16 },
}
