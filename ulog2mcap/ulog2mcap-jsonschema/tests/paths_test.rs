use ulog2mcap_core::{CanonicalType, FieldDefinition, MessagePath};
use ulog2mcap_jsonschema::message_paths;

#[test]
fn scalar_fields_map_one_to_one() {
    let paths = message_paths(&[
        FieldDefinition::new("uint64_t", 1, "timestamp"),
        FieldDefinition::new("bool", 1, "armed"),
        FieldDefinition::new("char", 1, "label"),
        FieldDefinition::new("custom_t", 1, "blob"),
    ]);

    assert_eq!(
        paths,
        vec![
            MessagePath::new("timestamp", "uint64_t", CanonicalType::Number),
            MessagePath::new("armed", "bool", CanonicalType::Boolean),
            MessagePath::new("label", "char", CanonicalType::String),
            MessagePath::new("blob", "custom_t", CanonicalType::Unknown),
        ]
    );
}

#[test]
fn flattened_array_yields_root_and_element_paths() {
    let mut fields = vec![FieldDefinition::new("uint64_t", 1, "timestamp")];
    for i in 0..32 {
        fields.push(FieldDefinition::new("float", 1, format!("samples[{i}]")));
    }

    let paths = message_paths(&fields);

    assert_eq!(
        paths,
        vec![
            MessagePath::new("timestamp", "uint64_t", CanonicalType::Number),
            MessagePath::new("samples", "float[]", CanonicalType::Array),
            MessagePath::new("samples.[*]", "float", CanonicalType::Number),
        ]
    );
}

#[test]
fn declared_array_yields_root_and_element_paths() {
    let paths = message_paths(&[FieldDefinition::new("uint8_t", 4, "arr")]);
    assert_eq!(
        paths,
        vec![
            MessagePath::new("arr", "uint8_t[]", CanonicalType::Array),
            MessagePath::new("arr.[*]", "uint8_t", CanonicalType::Number),
        ]
    );
}

#[test]
fn padding_never_appears() {
    let paths = message_paths(&[
        FieldDefinition::new("uint8_t", 7, "_padding0"),
        FieldDefinition::new("uint8_t", 1, "_padding1[0]"),
        FieldDefinition::new("int8_t", 1, "x"),
    ]);
    assert_eq!(paths.len(), 1);
    assert!(paths.iter().all(|p| !p.path.starts_with("_padding")));
}
