use ulog2mcap_core::{DataStream, DecodedLog, FieldDefinition, RawValue, StreamError};

fn imu_stream() -> DataStream {
    DataStream::new(
        "sensor_accel",
        0,
        vec![
            FieldDefinition::new("uint64_t", 1, "timestamp"),
            FieldDefinition::new("float", 1, "x"),
            FieldDefinition::new("uint8_t", 1, "_padding0"),
        ],
    )
    .with_column("timestamp", vec![RawValue::UInt(30), RawValue::UInt(10)])
    .with_column("x", vec![RawValue::Float(0.5), RawValue::Float(1.5)])
}

#[test]
fn records_follow_row_order_and_skip_padding() {
    let stream = imu_stream();
    let records: Vec<_> = stream.records().unwrap().collect();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].index, 0);
    assert_eq!(records[0].timestamp, 30);
    assert_eq!(records[1].timestamp, 10);

    let names: Vec<_> = records[1].fields.iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["timestamp", "x"]);
    assert_eq!(records[1].fields[1].value, &RawValue::Float(1.5));
}

#[test]
fn time_range_and_sizes() {
    let stream = imu_stream();
    assert_eq!(stream.row_count(), 2);
    assert_eq!(stream.time_range().unwrap(), Some((10, 30)));
    assert_eq!(stream.message_size(), 8 + 4 + 1);
}

#[test]
fn missing_timestamp_column_is_malformed() {
    let stream = DataStream::new("empty", 0, vec![FieldDefinition::new("float", 1, "x")])
        .with_column("x", vec![RawValue::Float(1.0)]);

    assert!(matches!(
        stream.validate(),
        Err(StreamError::MissingColumn { column, .. }) if column == "timestamp"
    ));
}

#[test]
fn short_column_is_malformed() {
    let stream = imu_stream().with_column("x", vec![RawValue::Float(0.5)]);

    assert!(matches!(
        stream.records().err(),
        Some(StreamError::ColumnLength {
            expected: 2,
            actual: 1,
            ..
        })
    ));
}

#[test]
fn negative_timestamp_is_malformed() {
    let stream = imu_stream().with_column("timestamp", vec![RawValue::Int(-1), RawValue::UInt(2)]);

    assert!(matches!(
        stream.timestamps(),
        Err(StreamError::InvalidTimestamp { row: 0, .. })
    ));
}

#[test]
fn decoded_log_parses_from_json() {
    let log: DecodedLog = serde_json::from_str(
        r#"{
            "message_formats": {
                "sensor_accel": {
                    "name": "sensor_accel",
                    "fields": [
                        {"type": "uint64_t", "array_size": 1, "name": "timestamp"},
                        {"type": "float", "array_size": 3, "name": "xyz"}
                    ]
                }
            },
            "data_list": [{
                "name": "sensor_accel",
                "multi_id": 1,
                "field_data": [{"type": "uint64_t", "name": "timestamp"}],
                "data": {"timestamp": [1, 2]}
            }],
            "info": {"sys_name": "PX4"}
        }"#,
    )
    .unwrap();

    assert_eq!(log.format("sensor_accel").unwrap().fields[1].array_size, 3);
    assert_eq!(log.data_list[0].multi_id, 1);
    assert_eq!(log.data_list[0].row_count(), 2);
    assert_eq!(log.info["sys_name"], "PX4");
    assert_eq!(log.start_timestamp, None);
}
