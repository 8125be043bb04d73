//! Content-addressed schema identity.
//!
//! The canonical form is the compact JSON serialization of the schema with
//! keys sorted at every level and the `required` list sorted as well, so two
//! schemas with the same properties checksum identically whatever order the
//! fields were declared in.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

use serde::{Serialize, Serializer, ser::SerializeStruct};
use sha2::{Digest, Sha256};
use ulog2mcap_core::{PropertySpec, Schema};

use crate::error::SchemaError;

/// SHA-256 digest of a schema's canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SchemaChecksum(pub [u8; 32]);

impl SchemaChecksum {
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for SchemaChecksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for SchemaChecksum {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

struct CanonicalSchema<'a> {
    properties: BTreeMap<&'a str, &'a PropertySpec>,
    required: Vec<&'a str>,
}

impl Serialize for CanonicalSchema<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Schema", 3)?;
        s.serialize_field("properties", &self.properties)?;
        s.serialize_field("required", &self.required)?;
        s.serialize_field("type", "object")?;
        s.end()
    }
}

/// Canonical bytes hashed by [`compute_checksum`].
///
/// Fails when property names repeat or `required` does not name exactly the
/// schema's properties, since such a schema has no well-defined content.
pub fn canonical_schema_bytes(schema: &Schema) -> Result<Vec<u8>, SchemaError> {
    let mut properties = BTreeMap::new();
    for property in &schema.properties {
        if properties
            .insert(property.name.as_str(), &property.spec)
            .is_some()
        {
            return Err(SchemaError::DuplicateProperty {
                name: property.name.clone(),
            });
        }
    }

    let mut required = BTreeSet::new();
    for name in &schema.required {
        if !properties.contains_key(name.as_str()) {
            return Err(SchemaError::UnknownRequired { name: name.clone() });
        }
        if !required.insert(name.as_str()) {
            return Err(SchemaError::DuplicateProperty { name: name.clone() });
        }
    }
    if let Some(name) = properties.keys().find(|name| !required.contains(*name)) {
        return Err(SchemaError::NotRequired {
            name: name.to_string(),
        });
    }

    let canonical = CanonicalSchema {
        properties,
        required: required.into_iter().collect(),
    };
    Ok(serde_json::to_vec(&canonical)?)
}

/// Compute the schema's SHA-256 checksum over its canonical form.
pub fn compute_checksum(schema: &Schema) -> Result<SchemaChecksum, SchemaError> {
    let bytes = canonical_schema_bytes(schema)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&hasher.finalize());
    Ok(SchemaChecksum(digest))
}
