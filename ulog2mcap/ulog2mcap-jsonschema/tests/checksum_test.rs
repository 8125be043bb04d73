use ulog2mcap_core::{FieldDefinition, PropertySpec, ScalarKind, Schema};
use ulog2mcap_jsonschema::{SchemaError, canonical_schema_bytes, compute_checksum, infer_schema};

fn fields() -> Vec<FieldDefinition> {
    vec![
        FieldDefinition::new("uint64_t", 1, "timestamp"),
        FieldDefinition::new("float", 1, "x"),
        FieldDefinition::new("uint8_t", 4, "arr"),
        FieldDefinition::new("uint8_t", 2, "_padding0"),
        FieldDefinition::new("bool", 1, "armed"),
    ]
}

#[test]
fn checksum_matches_known_digest() {
    let schema = infer_schema(&[
        FieldDefinition::new("float", 1, "x"),
        FieldDefinition::new("uint8_t", 4, "arr"),
    ]);

    let canonical = canonical_schema_bytes(&schema).unwrap();
    assert_eq!(
        String::from_utf8(canonical).unwrap(),
        r#"{"properties":{"arr":{"items":{"type":"integer"},"maxItems":4,"minItems":4,"type":"array"},"x":{"type":"number"}},"required":["arr","x"],"type":"object"}"#
    );
    assert_eq!(
        compute_checksum(&schema).unwrap().to_hex(),
        "df9c020747be8f70cc3d02fd9ae53db21e281ace07ff45f9f41faba74fe10eae"
    );
}

#[test]
fn checksum_is_lowercase_hex_of_256_bits() {
    let hex = compute_checksum(&infer_schema(&fields())).unwrap().to_string();
    assert_eq!(hex.len(), 64);
    assert!(hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
}

#[test]
fn checksum_ignores_field_declaration_order() {
    let original = compute_checksum(&infer_schema(&fields())).unwrap();

    let mut reversed = fields();
    reversed.reverse();
    assert_eq!(compute_checksum(&infer_schema(&reversed)).unwrap(), original);

    let mut rotated = fields();
    rotated.rotate_left(2);
    assert_eq!(compute_checksum(&infer_schema(&rotated)).unwrap(), original);
}

#[test]
fn checksum_ignores_padding_changes() {
    let mut without_padding = fields();
    without_padding.retain(|f| !f.is_padding());
    assert_eq!(
        compute_checksum(&infer_schema(&without_padding)).unwrap(),
        compute_checksum(&infer_schema(&fields())).unwrap()
    );
}

#[test]
fn checksum_changes_with_content() {
    let base = compute_checksum(&infer_schema(&fields())).unwrap();

    let mut resized = fields();
    resized[2].array_size = 5;
    assert_ne!(compute_checksum(&infer_schema(&resized)).unwrap(), base);

    let mut retyped = fields();
    retyped[1] = FieldDefinition::new("double", 1, "x");
    // float and double both infer "number".
    assert_eq!(compute_checksum(&infer_schema(&retyped)).unwrap(), base);

    retyped[1] = FieldDefinition::new("int32_t", 1, "x");
    assert_ne!(compute_checksum(&infer_schema(&retyped)).unwrap(), base);
}

#[test]
fn duplicate_property_is_rejected() {
    let schema = infer_schema(&[
        FieldDefinition::new("float", 1, "x"),
        FieldDefinition::new("float", 1, "x"),
    ]);
    assert!(matches!(
        compute_checksum(&schema),
        Err(SchemaError::DuplicateProperty { name }) if name == "x"
    ));
}

#[test]
fn required_must_match_properties() {
    let mut schema = Schema::new();
    schema.push("x", PropertySpec::Scalar(ScalarKind::Number));
    schema.required.push("ghost".to_string());
    assert!(matches!(
        compute_checksum(&schema),
        Err(SchemaError::UnknownRequired { .. })
    ));

    let mut schema = Schema::new();
    schema.push("x", PropertySpec::Scalar(ScalarKind::Number));
    schema.required.clear();
    assert!(matches!(
        compute_checksum(&schema),
        Err(SchemaError::NotRequired { .. })
    ));
}
