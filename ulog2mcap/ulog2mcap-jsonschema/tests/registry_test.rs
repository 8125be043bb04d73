use ulog2mcap_core::{FieldDefinition, MessageFormat};
use ulog2mcap_jsonschema::{SchemaError, SchemaRegistry, compute_checksum};

#[test]
fn registry_caches_schema_and_checksum_per_format() {
    let formats = [
        MessageFormat::new(
            "vehicle_status",
            vec![
                FieldDefinition::new("uint64_t", 1, "timestamp"),
                FieldDefinition::new("uint8_t", 1, "arming_state"),
            ],
        ),
        MessageFormat::new(
            "broken",
            vec![
                FieldDefinition::new("float", 1, "x"),
                FieldDefinition::new("float", 1, "x"),
            ],
        ),
    ];

    let registry = SchemaRegistry::from_formats(&formats);
    assert_eq!(registry.len(), 2);

    let status = registry.get("vehicle_status").unwrap().unwrap();
    assert_eq!(status.name, "vehicle_status");
    assert_eq!(status.checksum, compute_checksum(&status.schema).unwrap());
    assert_eq!(status.data, serde_json::to_vec(&status.schema).unwrap());

    assert!(matches!(
        registry.get("broken"),
        Some(Err(SchemaError::DuplicateProperty { .. }))
    ));
    assert!(registry.get("missing").is_none());
}
