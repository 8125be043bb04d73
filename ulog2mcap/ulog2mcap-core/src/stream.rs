//! Decoded data streams and per-row record views.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    error::StreamError,
    field::{FieldDefinition, PrimitiveType},
    value::RawValue,
};

/// Column holding each row's microsecond timestamp.
pub const TIMESTAMP_FIELD: &str = "timestamp";

/// One logged instance of a topic: a field list plus column-major data.
///
/// `multi_id` distinguishes concurrent instances of the same topic (for
/// example redundant sensors) and is never rewritten after decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataStream {
    pub name: String,
    #[serde(default)]
    pub multi_id: u32,
    pub field_data: Vec<FieldDefinition>,
    #[serde(default)]
    pub data: BTreeMap<String, Vec<RawValue>>,
}

/// A field's declared type and its value in one row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldValue<'a> {
    pub name: &'a str,
    pub type_name: &'a PrimitiveType,
    pub value: &'a RawValue,
}

/// One row of a [`DataStream`], borrowed from its columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<'a> {
    pub index: usize,
    /// Microseconds.
    pub timestamp: u64,
    pub fields: Vec<FieldValue<'a>>,
}

impl DataStream {
    pub fn new(name: impl Into<String>, multi_id: u32, field_data: Vec<FieldDefinition>) -> Self {
        Self {
            name: name.into(),
            multi_id,
            field_data,
            data: BTreeMap::new(),
        }
    }

    /// Attach a column, replacing any existing one with the same name.
    pub fn with_column(mut self, name: impl Into<String>, values: Vec<RawValue>) -> Self {
        self.data.insert(name.into(), values);
        self
    }

    /// Number of rows, taken from the timestamp column.
    pub fn row_count(&self) -> usize {
        self.data.get(TIMESTAMP_FIELD).map_or(0, Vec::len)
    }

    /// Sum of the declared field sizes, in bytes. Unknown types count as zero.
    pub fn message_size(&self) -> usize {
        self.field_data
            .iter()
            .map(|f| f.type_name.size_bytes().unwrap_or(0) * f.array_size.max(1))
            .sum()
    }

    /// Parse the timestamp column.
    pub fn timestamps(&self) -> Result<Vec<u64>, StreamError> {
        let column = self
            .data
            .get(TIMESTAMP_FIELD)
            .ok_or_else(|| StreamError::MissingColumn {
                stream: self.name.clone(),
                column: TIMESTAMP_FIELD.to_string(),
            })?;

        column
            .iter()
            .enumerate()
            .map(|(row, value)| {
                value
                    .try_u64()
                    .map_err(|source| StreamError::InvalidTimestamp {
                        stream: self.name.clone(),
                        row,
                        source,
                    })
            })
            .collect()
    }

    /// Smallest and largest timestamp, `None` for an empty stream.
    pub fn time_range(&self) -> Result<Option<(u64, u64)>, StreamError> {
        let timestamps = self.timestamps()?;
        Ok(timestamps
            .iter()
            .min()
            .zip(timestamps.iter().max())
            .map(|(min, max)| (*min, *max)))
    }

    fn columns(&self, rows: usize) -> Result<Vec<(&FieldDefinition, &[RawValue])>, StreamError> {
        self.field_data
            .iter()
            .filter(|f| !f.is_padding())
            .map(|field| {
                let column =
                    self.data
                        .get(&field.name)
                        .ok_or_else(|| StreamError::MissingColumn {
                            stream: self.name.clone(),
                            column: field.name.clone(),
                        })?;
                if column.len() != rows {
                    return Err(StreamError::ColumnLength {
                        stream: self.name.clone(),
                        column: field.name.clone(),
                        expected: rows,
                        actual: column.len(),
                    });
                }
                Ok((field, column.as_slice()))
            })
            .collect()
    }

    /// Check that every non-padding field has a full column and that the
    /// timestamps parse. Returns the row count.
    pub fn validate(&self) -> Result<usize, StreamError> {
        let rows = self.timestamps()?.len();
        self.columns(rows)?;
        Ok(rows)
    }

    /// Rows in their original order. Validates the stream first.
    pub fn records(&self) -> Result<impl ExactSizeIterator<Item = Record<'_>> + '_, StreamError> {
        let timestamps = self.timestamps()?;
        let columns = self.columns(timestamps.len())?;

        Ok(timestamps
            .into_iter()
            .enumerate()
            .map(move |(index, timestamp)| Record {
                index,
                timestamp,
                fields: columns
                    .iter()
                    .map(|&(field, column)| FieldValue {
                        name: field.name.as_str(),
                        type_name: &field.type_name,
                        value: &column[index],
                    })
                    .collect(),
            }))
    }
}
