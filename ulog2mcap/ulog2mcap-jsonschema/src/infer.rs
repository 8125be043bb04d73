//! Message format -> JSON Schema inference.

use ulog2mcap_core::{FieldDefinition, PropertySpec, Schema};

/// Build the object schema for a message format's field list.
///
/// - Padding fields are skipped.
/// - A bracket suffix on the declared name is dropped (`arr[4]` -> `arr`).
/// - `array_size > 1` yields a fixed-length array with
///   `minItems == maxItems == array_size`.
/// - Unknown primitive types are typed as `string`.
///
/// `required` lists every remaining field in declaration order.
pub fn infer_schema(fields: &[FieldDefinition]) -> Schema {
    let mut schema = Schema::new();

    for field in fields.iter().filter(|f| !f.is_padding()) {
        if !field.type_name.is_known() {
            tracing::debug!(
                field = %field.name,
                type_name = %field.type_name,
                "unknown field type, inferring string"
            );
        }

        let kind = field.type_name.scalar_kind();
        let spec = if field.is_array() {
            PropertySpec::Array {
                items: kind,
                size: field.array_size,
            }
        } else {
            PropertySpec::Scalar(kind)
        };

        schema.push(field.base_name(), spec);
    }

    schema
}
