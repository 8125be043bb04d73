//! JSON conversion layer for `ulog2mcap`.
//!
//! This crate turns `ulog2mcap-core` input types into what a JSON-encoded
//! MCAP container needs:
//! 1. [`infer_schema`] builds a [`Schema`](ulog2mcap_core::Schema) from a
//!    message format's field list.
//! 2. [`compute_checksum`] derives a content hash that identifies a schema
//!    regardless of property or `required` order.
//! 3. [`coerce_record`] turns one decoded row into a JSON object, grouping
//!    `name[i]` elements into arrays.
//! 4. [`message_paths`] lists the catalog paths of a topic.
//!
//! [`SchemaRegistry`] runs steps 1 and 2 once per log and caches the result
//! by format name.
//!
//! # Typical Flow
//! ```rust
//! use ulog2mcap_core::FieldDefinition;
//! use ulog2mcap_jsonschema::{compute_checksum, infer_schema};
//!
//! let fields = vec![FieldDefinition::new("float", 1, "x")];
//! let schema = infer_schema(&fields);
//! let checksum = compute_checksum(&schema).unwrap();
//! assert_eq!(checksum.to_hex().len(), 64);
//! ```
pub mod checksum;
pub mod coerce;
pub mod error;
pub mod infer;
pub mod paths;
pub mod registry;

/// Re-exports from [`checksum`].
pub use checksum::{SchemaChecksum, canonical_schema_bytes, compute_checksum};
/// Re-exports from [`coerce`].
pub use coerce::{CoercedMessage, coerce_record, coerce_value};
/// Re-export of [`error::SchemaError`].
pub use error::SchemaError;
/// Re-export of [`infer::infer_schema`].
pub use infer::infer_schema;
/// Re-export of [`paths::message_paths`].
pub use paths::message_paths;
/// Re-exports from [`registry`].
pub use registry::{RegisteredSchema, SchemaRegistry};
