use serde_json::{Value, json};
use ulog2mcap_core::{FieldValue, PrimitiveType, RawValue};
use ulog2mcap_jsonschema::{coerce_record, coerce_value};

struct Cell {
    name: &'static str,
    type_name: PrimitiveType,
    value: RawValue,
}

fn cell(name: &'static str, type_name: &str, value: impl Into<RawValue>) -> Cell {
    Cell {
        name,
        type_name: PrimitiveType::from(type_name),
        value: value.into(),
    }
}

fn views(cells: &[Cell]) -> Vec<FieldValue<'_>> {
    cells
        .iter()
        .map(|c| FieldValue {
            name: c.name,
            type_name: &c.type_name,
            value: &c.value,
        })
        .collect()
}

#[test]
fn end_to_end_record_with_nan_and_array() {
    let cells = [
        cell("x", "float", 1.5),
        cell("y", "float", f64::NAN),
        cell("arr[0]", "uint8_t", 1u64),
        cell("arr[1]", "uint8_t", 2u64),
        cell("arr[2]", "uint8_t", 3u64),
        cell("arr[3]", "uint8_t", 4u64),
    ];

    let message = coerce_record(views(&cells));

    assert_eq!(
        serde_json::to_value(&message).unwrap(),
        json!({"x": 1.5, "y": null, "arr": [1, 2, 3, 4]})
    );
    assert_eq!(message.keys().collect::<Vec<_>>(), vec!["x", "y", "arr"]);
}

#[test]
fn array_elements_are_ordered_by_index() {
    let cells = [
        cell("q[2]", "float", 3.0),
        cell("q[0]", "float", 1.0),
        cell("q[1]", "float", 2.0),
    ];

    let message = coerce_record(views(&cells));

    assert_eq!(message.get("q"), Some(&json!([1.0, 2.0, 3.0])));
    assert_eq!(message.len(), 1);
    assert!(message.get("q[0]").is_none());
}

#[test]
fn array_keeps_position_of_first_element() {
    let cells = [
        cell("timestamp", "uint64_t", 10u64),
        cell("v[0]", "int16_t", -1i64),
        cell("v[1]", "int16_t", 2u64),
        cell("armed", "bool", 1u64),
    ];

    let message = coerce_record(views(&cells));

    assert_eq!(message.keys().collect::<Vec<_>>(), vec!["timestamp", "v", "armed"]);
    assert_eq!(
        String::from_utf8(message.to_json_bytes().unwrap()).unwrap(),
        r#"{"timestamp":10,"v":[-1,2],"armed":true}"#
    );
}

#[test]
fn padding_is_dropped() {
    let cells = [cell("_padding0", "uint8_t", 0u64), cell("x", "int8_t", 1i64)];
    let message = coerce_record(views(&cells));
    assert_eq!(serde_json::to_value(&message).unwrap(), json!({"x": 1}));
}

#[test]
fn scalar_coercion_by_declared_type() {
    let uint = PrimitiveType::from("uint32_t");
    let double = PrimitiveType::from("double");
    let boolean = PrimitiveType::from("bool");
    let chr = PrimitiveType::from("char");
    let unknown = PrimitiveType::from("mystery_t");

    assert_eq!(coerce_value(&uint, &RawValue::UInt(7)), json!(7));
    assert_eq!(coerce_value(&uint, &RawValue::Float(7.9)), json!(7));
    assert_eq!(coerce_value(&double, &RawValue::UInt(2)), json!(2.0));
    assert_eq!(coerce_value(&double, &RawValue::Float(f64::INFINITY)), Value::Null);
    assert_eq!(coerce_value(&boolean, &RawValue::UInt(0)), json!(false));
    assert_eq!(coerce_value(&boolean, &RawValue::UInt(1)), json!(true));
    assert_eq!(coerce_value(&boolean, &RawValue::Bool(true)), json!(true));
    assert_eq!(coerce_value(&chr, &RawValue::text("A")), json!("A"));
    assert_eq!(coerce_value(&unknown, &RawValue::Int(-3)), json!("-3"));
}

#[test]
fn nan_is_null_for_every_declared_type() {
    for type_name in ["float", "double", "int32_t", "bool", "char"] {
        assert_eq!(
            coerce_value(&PrimitiveType::from(type_name), &RawValue::Float(f64::NAN)),
            Value::Null,
            "{type_name}"
        );
    }
}

#[test]
fn integers_stored_as_float_do_not_saturate() {
    let uint64 = PrimitiveType::from("uint64_t");
    let int64 = PrimitiveType::from("int64_t");

    assert_eq!(
        coerce_value(&uint64, &RawValue::Float(1.8e19)),
        json!(18_000_000_000_000_000_000u64)
    );
    assert_eq!(coerce_value(&int64, &RawValue::Float(-42.7)), json!(-42));
    assert_eq!(coerce_value(&int64, &RawValue::Float(-1e20)), json!(-1e20));
    assert_eq!(coerce_value(&uint64, &RawValue::Float(1e30)), json!(1e30));
}
