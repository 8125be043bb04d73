use std::{collections::BTreeMap, fs, io::Cursor, path::PathBuf};

use ulog2mcap::{
    Converter, DirectorySink, InspectError, inspect_container,
    core::{MessageEncoding, SchemaEncoding},
};
use ulog2mcap_core::DecodedLog;

fn convert_fixture(dir: &std::path::Path) -> DirectorySink {
    let log: DecodedLog = serde_json::from_str(include_str!("fixtures/flight.json")).unwrap();
    let sink = DirectorySink::new(dir).unwrap();
    let report = Converter::new().convert(&log, &sink).unwrap();
    assert!(report.is_success());
    sink
}

#[test]
fn inspect_reads_topic_encodings_and_stats() {
    let dir = tempfile::tempdir().unwrap();
    let sink = convert_fixture(dir.path());

    let info = inspect_container(&sink.root().join("sensor_gyro_00.mcap")).unwrap();

    assert_eq!(info.topic, "sensor_gyro_00");
    assert_eq!(info.schema_name, "sensor_gyro");
    assert_eq!(info.schema_encoding, SchemaEncoding::JsonSchema);
    assert_eq!(info.message_encoding, MessageEncoding::Json);
    assert_eq!(info.message_count, 1);
    assert_eq!(info.start_time, Some(1_200_000));
    assert_eq!(info.end_time, Some(1_200_000));
}

#[test]
fn inspect_rejects_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    let err = inspect_container(&dir.path().join("absent.mcap")).unwrap_err();

    assert!(matches!(err, InspectError::Io(_)));
}

#[test]
fn inspect_rejects_non_container_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.mcap");
    fs::write(&path, b"definitely not a container").unwrap();

    assert!(inspect_container(&path).is_err());
}

#[test]
fn inspect_rejects_multi_channel_container() {
    let dir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("two_channels.mcap");

    let mut buffer = Cursor::new(Vec::new());
    {
        let mut writer = mcap::Writer::new(&mut buffer).unwrap();
        let schema_id = writer.add_schema("s", "jsonschema", b"{}").unwrap();
        writer
            .add_channel(schema_id, "a", "json", &BTreeMap::new())
            .unwrap();
        writer
            .add_channel(schema_id, "b", "json", &BTreeMap::new())
            .unwrap();
        writer.finish().unwrap();
    }
    fs::write(&path, buffer.into_inner()).unwrap();

    assert!(matches!(
        inspect_container(&path),
        Err(InspectError::ChannelCount { count: 2, .. })
    ));
}
