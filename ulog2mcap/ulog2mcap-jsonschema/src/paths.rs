//! Field list -> catalog message paths.

use std::collections::HashSet;

use ulog2mcap_core::{CanonicalType, FieldDefinition, MessagePath, split_array_index};

/// List the message paths of a topic's field list.
///
/// Scalar fields produce one path each. An array, whether declared with
/// `array_size > 1` or flattened into `name[i]` elements, produces exactly
/// two paths: the root `name` typed [`CanonicalType::Array`] and the element
/// path `name.[*]` typed after the element. Padding fields are skipped.
pub fn message_paths(fields: &[FieldDefinition]) -> Vec<MessagePath> {
    let mut paths = Vec::new();
    let mut seen_arrays = HashSet::new();

    for field in fields.iter().filter(|f| !f.is_padding()) {
        let canonical = field.type_name.canonical_type();
        let array_name = match split_array_index(&field.name) {
            Some((base, _)) => Some(base),
            None if field.is_array() => Some(field.name.as_str()),
            None => None,
        };

        match array_name {
            Some(name) => {
                if !seen_arrays.insert(name) {
                    continue;
                }
                paths.push(MessagePath::new(
                    name,
                    format!("{}[]", field.type_name),
                    CanonicalType::Array,
                ));
                paths.push(MessagePath::new(
                    format!("{name}.[*]"),
                    field.type_name.as_str(),
                    canonical,
                ));
            }
            None => paths.push(MessagePath::new(
                field.name.as_str(),
                field.type_name.as_str(),
                canonical,
            )),
        }
    }

    paths
}
