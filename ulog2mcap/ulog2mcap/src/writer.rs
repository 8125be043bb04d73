//! Single-topic MCAP container writer.

use std::{
    collections::BTreeMap,
    io::Cursor,
    sync::atomic::{AtomicBool, Ordering},
};

use mcap::records::MessageHeader;
use ulog2mcap_core::{DataStream, MessageEncoding, SchemaEncoding};
use ulog2mcap_jsonschema::{RegisteredSchema, coerce_record};

use crate::error::ConvertError;

/// File extension of written containers.
pub const CONTAINER_EXTENSION: &str = "mcap";

/// Message statistics of a finalized container. Times are nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContainerStats {
    pub message_count: u64,
    pub start_time: Option<u64>,
    pub end_time: Option<u64>,
}

impl ContainerStats {
    fn observe(&mut self, log_time: u64) {
        self.message_count += 1;
        self.start_time = Some(self.start_time.map_or(log_time, |t| t.min(log_time)));
        self.end_time = Some(self.end_time.map_or(log_time, |t| t.max(log_time)));
    }
}

/// The bytes of a finalized container and what was written into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedContainer {
    pub bytes: Vec<u8>,
    pub stats: ContainerStats,
}

/// Write one data stream as a finalized MCAP container.
///
/// The container holds one `jsonschema` schema record, one `json` channel
/// named `topic`, and one message per row in row order with
/// `log_time == publish_time == timestamp_us * 1000` and `sequence` equal to
/// the row index.
///
/// The container is built in memory and only returned once finalized; on any
/// error (including cancellation through `cancel`) the partial container is
/// dropped.
pub fn write_container(
    stream: &DataStream,
    schema: &RegisteredSchema,
    topic: &str,
    cancel: &AtomicBool,
) -> Result<FinishedContainer, ConvertError> {
    let records = stream.records()?;
    if cancel.load(Ordering::Relaxed) {
        return Err(ConvertError::Cancelled);
    }
    let mut buffer = Cursor::new(Vec::new());
    let mut stats = ContainerStats::default();

    {
        let mut writer = mcap::Writer::new(&mut buffer)?;
        let schema_id = writer.add_schema(
            &schema.name,
            SchemaEncoding::JsonSchema.as_str(),
            &schema.data,
        )?;
        let channel_id = writer.add_channel(
            schema_id,
            topic,
            MessageEncoding::Json.as_str(),
            &BTreeMap::new(),
        )?;

        for record in records {
            if cancel.load(Ordering::Relaxed) {
                return Err(ConvertError::Cancelled);
            }

            let row = record.index;
            let log_time =
                record
                    .timestamp
                    .checked_mul(1000)
                    .ok_or(ConvertError::TimestampOverflow {
                        row,
                        timestamp_us: record.timestamp,
                    })?;
            let sequence =
                u32::try_from(row).map_err(|_| ConvertError::SequenceOverflow { row })?;
            let payload = coerce_record(record.fields)
                .to_json_bytes()
                .map_err(|source| ConvertError::Encode {
                    sequence: row,
                    source,
                })?;

            writer.write_to_known_channel(
                &MessageHeader {
                    channel_id,
                    sequence,
                    log_time,
                    publish_time: log_time,
                },
                &payload,
            )?;
            stats.observe(log_time);
        }

        writer.finish()?;
    }

    tracing::debug!(
        topic,
        messages = stats.message_count,
        bytes = buffer.get_ref().len(),
        "container finalized"
    );

    Ok(FinishedContainer {
        bytes: buffer.into_inner(),
        stats,
    })
}
