//! Per-topic results handed to the cataloging step.

use std::path::PathBuf;

use serde::Serialize;
use ulog2mcap_core::{MessagePath, Schema};
use ulog2mcap_jsonschema::SchemaChecksum;

use crate::error::ConvertError;

/// Everything a catalog needs to register one converted topic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicSummary {
    pub topic_name: String,
    pub schema_name: String,
    pub multi_id: u32,
    pub schema: Schema,
    pub schema_checksum: SchemaChecksum,
    pub message_paths: Vec<MessagePath>,
    pub message_count: u64,
    /// Nanoseconds, `None` when the topic has no messages.
    pub start_time: Option<u64>,
    /// Nanoseconds, `None` when the topic has no messages.
    pub end_time: Option<u64>,
    pub location: PathBuf,
}

/// A topic that could not be converted.
#[derive(Debug)]
pub struct TopicFailure {
    pub topic: String,
    pub error: ConvertError,
}

/// Outcome of a conversion run: converted topics and per-topic failures,
/// both ordered by topic name.
#[derive(Debug, Default)]
pub struct ConversionReport {
    pub topics: Vec<TopicSummary>,
    pub failures: Vec<TopicFailure>,
}

impl ConversionReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn topic(&self, name: &str) -> Option<&TopicSummary> {
        self.topics.iter().find(|t| t.topic_name == name)
    }

    pub fn failure(&self, name: &str) -> Option<&ConvertError> {
        self.failures
            .iter()
            .find(|f| f.topic == name)
            .map(|f| &f.error)
    }
}
