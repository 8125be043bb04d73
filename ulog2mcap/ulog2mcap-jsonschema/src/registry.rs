//! Per-log cache of inferred schemas and their checksums.

use std::{collections::HashMap, sync::Arc};

use ulog2mcap_core::{MessageFormat, Schema};

use crate::{
    checksum::{SchemaChecksum, compute_checksum},
    error::SchemaError,
    infer::infer_schema,
};

/// A message format's schema, checksum and the JSON bytes stored in the
/// container's schema record.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredSchema {
    pub name: String,
    pub schema: Schema,
    pub checksum: SchemaChecksum,
    pub data: Vec<u8>,
}

impl RegisteredSchema {
    pub fn build(format: &MessageFormat) -> Result<Self, SchemaError> {
        let schema = infer_schema(&format.fields);
        let checksum = compute_checksum(&schema)?;
        let data = serde_json::to_vec(&schema)?;
        Ok(Self {
            name: format.name.clone(),
            schema,
            checksum,
            data,
        })
    }
}

/// Schemas keyed by message format name, computed once and then shared
/// read-only between workers.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    entries: HashMap<String, Result<Arc<RegisteredSchema>, SchemaError>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_formats<'a>(formats: impl IntoIterator<Item = &'a MessageFormat>) -> Self {
        let mut registry = Self::new();
        for format in formats {
            registry.register(format);
        }
        registry
    }

    /// Infer and checksum `format`. A failure is kept and reported to every
    /// stream that looks the format up.
    pub fn register(&mut self, format: &MessageFormat) {
        let entry = RegisteredSchema::build(format).map(Arc::new);
        match &entry {
            Ok(registered) => tracing::debug!(
                format = %format.name,
                checksum = %registered.checksum,
                properties = registered.schema.len(),
                "registered schema"
            ),
            Err(e) => tracing::warn!(format = %format.name, error = %e, "schema rejected"),
        }
        self.entries.insert(format.name.clone(), entry);
    }

    pub fn get(&self, name: &str) -> Option<Result<&Arc<RegisteredSchema>, &SchemaError>> {
        self.entries.get(name).map(Result::as_ref)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
