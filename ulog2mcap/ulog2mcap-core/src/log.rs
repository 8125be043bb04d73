//! The decoded log handed over by the binary log parser.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{field::MessageFormat, stream::DataStream};

/// An already-parsed flight log: message formats, data streams and the
/// logger's info key/values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DecodedLog {
    pub message_formats: BTreeMap<String, MessageFormat>,
    pub data_list: Vec<DataStream>,
    #[serde(default)]
    pub info: BTreeMap<String, String>,
    /// Microseconds.
    #[serde(default)]
    pub start_timestamp: Option<u64>,
    /// Microseconds.
    #[serde(default)]
    pub last_timestamp: Option<u64>,
}

impl DecodedLog {
    pub fn new(formats: impl IntoIterator<Item = MessageFormat>, data_list: Vec<DataStream>) -> Self {
        Self {
            message_formats: formats
                .into_iter()
                .map(|format| (format.name.clone(), format))
                .collect(),
            data_list,
            ..Self::default()
        }
    }

    pub fn format(&self, name: &str) -> Option<&MessageFormat> {
        self.message_formats.get(name)
    }
}
