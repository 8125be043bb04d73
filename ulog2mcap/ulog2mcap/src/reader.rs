//! Read back the summary of a written per-topic container.

use std::{fs, path::Path, sync::Arc};

use memmap2::Mmap;
use ulog2mcap_core::{MessageEncoding, SchemaEncoding};

use crate::error::InspectError;

/// What a finalized per-topic container declares about itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerInfo {
    pub topic: String,
    pub schema_name: String,
    pub schema_encoding: SchemaEncoding,
    pub message_encoding: MessageEncoding,
    pub message_count: u64,
    /// Nanoseconds, `None` for an empty container.
    pub start_time: Option<u64>,
    /// Nanoseconds, `None` for an empty container.
    pub end_time: Option<u64>,
}

fn mmap_file(path: &Path) -> Result<Mmap, InspectError> {
    let file = fs::File::open(path)?;
    Ok(unsafe { Mmap::map(&file) }?)
}

/// Inspect a container written by the converter.
///
/// Only the summary section is read, so this is cheap even for large
/// containers. A container without a summary was never finalized and is
/// rejected.
pub fn inspect_container(path: &Path) -> Result<ContainerInfo, InspectError> {
    let mmap = mmap_file(path)?;
    let summary =
        mcap::read::Summary::read(&mmap)?.ok_or_else(|| InspectError::SummaryNotAvailable {
            path: path.display().to_string(),
        })?;

    if summary.channels.len() != 1 {
        return Err(InspectError::ChannelCount {
            path: path.display().to_string(),
            count: summary.channels.len(),
        });
    }
    let Some(channel) = summary.channels.values().next() else {
        return Err(InspectError::ChannelCount {
            path: path.display().to_string(),
            count: 0,
        });
    };
    let schema = get_schema_from_channel(channel)?;

    let (message_count, start_time, end_time) = match summary.stats.as_ref() {
        Some(stats) if stats.message_count > 0 => (
            stats.message_count,
            Some(stats.message_start_time),
            Some(stats.message_end_time),
        ),
        _ => (0, None, None),
    };

    Ok(ContainerInfo {
        topic: channel.topic.clone(),
        schema_name: schema.name.clone(),
        schema_encoding: SchemaEncoding::from(schema.encoding.as_str()),
        message_encoding: MessageEncoding::from(channel.message_encoding.as_str()),
        message_count,
        start_time,
        end_time,
    })
}

fn get_schema_from_channel<'a>(
    channel: &'a Arc<mcap::Channel>,
) -> Result<&'a Arc<mcap::Schema<'a>>, InspectError> {
    channel
        .schema
        .as_ref()
        .ok_or_else(|| InspectError::SchemaNotAvailable {
            topic: channel.topic.clone(),
            channel_id: channel.id,
        })
}
