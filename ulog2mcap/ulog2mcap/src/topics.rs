//! Output topic naming for multi-instance data streams.

use std::collections::{BTreeMap, BTreeSet};

use ulog2mcap_core::DataStream;

/// Identity of a data stream within one log: base name and instance index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TopicKey {
    pub name: String,
    pub multi_id: u32,
}

impl TopicKey {
    pub fn new(name: impl Into<String>, multi_id: u32) -> Self {
        Self {
            name: name.into(),
            multi_id,
        }
    }

    pub fn of(stream: &DataStream) -> Self {
        Self::new(stream.name.clone(), stream.multi_id)
    }
}

/// Assign a final topic name to every (name, instance) pair.
///
/// A base name logged by a single instance keeps its bare name. Once two or
/// more distinct instances share a base name, every one of them, instance 0
/// included, is suffixed with its two-digit zero-padded index
/// (`sensor_gyro_00`, `sensor_gyro_01`, ...).
pub fn disambiguate_topics<'a>(
    streams: impl IntoIterator<Item = &'a DataStream>,
) -> BTreeMap<TopicKey, String> {
    let mut instances: BTreeMap<&str, BTreeSet<u32>> = BTreeMap::new();
    for stream in streams {
        instances
            .entry(stream.name.as_str())
            .or_default()
            .insert(stream.multi_id);
    }

    instances
        .into_iter()
        .flat_map(|(name, ids)| {
            let multi_instance = ids.len() > 1;
            ids.into_iter().map(move |multi_id| {
                let topic = if multi_instance {
                    format!("{name}_{multi_id:02}")
                } else {
                    name.to_string()
                };
                (TopicKey::new(name, multi_id), topic)
            })
        })
        .collect()
}
