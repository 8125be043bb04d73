//! JSON-Schema intermediate representation inferred from message formats.

mod format;
mod types;

pub use format::format_schema;
pub use types::{Property, PropertySpec, ScalarKind, Schema};
