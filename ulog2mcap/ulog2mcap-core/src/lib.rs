//! Encoding-agnostic core types for `ulog2mcap`.
//!
//! This crate describes an already-decoded flight log ([`DecodedLog`],
//! [`MessageFormat`], [`DataStream`]), the JSON-Schema intermediate
//! representation inferred from it ([`Schema`] / [`PropertySpec`]) and the
//! catalog-facing [`MessagePath`] classification.

mod error;
mod field;
mod log;
mod message_encoding;
mod path;
mod schema;
mod schema_encoding;
mod stream;
mod value;

pub use error::{StreamError, ValueTypeError};
pub use field::{FieldDefinition, MessageFormat, PADDING_PREFIX, PrimitiveType, split_array_index};
pub use log::DecodedLog;
pub use message_encoding::MessageEncoding;
pub use path::{CanonicalType, MessagePath};
pub use schema::{Property, PropertySpec, ScalarKind, Schema, format_schema};
pub use schema_encoding::SchemaEncoding;
pub use stream::{DataStream, FieldValue, Record, TIMESTAMP_FIELD};
pub use value::RawValue;
