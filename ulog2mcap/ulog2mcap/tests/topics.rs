use ulog2mcap::{TopicKey, disambiguate_topics};
use ulog2mcap_core::DataStream;

fn stream(name: &str, multi_id: u32) -> DataStream {
    DataStream::new(name, multi_id, Vec::new())
}

#[test]
fn multi_instance_topics_get_two_digit_suffixes() {
    let streams = vec![
        stream("sensor_baro", 2),
        stream("sensor_baro", 0),
        stream("sensor_baro", 1),
        stream("vehicle_imu", 0),
    ];

    let names = disambiguate_topics(&streams);

    assert_eq!(names[&TopicKey::new("sensor_baro", 0)], "sensor_baro_00");
    assert_eq!(names[&TopicKey::new("sensor_baro", 1)], "sensor_baro_01");
    assert_eq!(names[&TopicKey::new("sensor_baro", 2)], "sensor_baro_02");
    assert_eq!(names[&TopicKey::new("vehicle_imu", 0)], "vehicle_imu");
    assert_eq!(names.len(), 4);
}

#[test]
fn lone_instance_keeps_bare_name_whatever_its_index() {
    let streams = vec![stream("distance_sensor", 3)];

    let names = disambiguate_topics(&streams);

    assert_eq!(names[&TopicKey::new("distance_sensor", 3)], "distance_sensor");
}

#[test]
fn repeated_stream_of_one_instance_is_not_suffixed() {
    let streams = vec![stream("actuator_outputs", 0), stream("actuator_outputs", 0)];

    let names = disambiguate_topics(&streams);

    assert_eq!(names.len(), 1);
    assert_eq!(
        names[&TopicKey::new("actuator_outputs", 0)],
        "actuator_outputs"
    );
}

#[test]
fn large_indices_are_not_truncated() {
    let streams = vec![stream("esc_status", 0), stream("esc_status", 123)];

    let names = disambiguate_topics(&streams);

    assert_eq!(names[&TopicKey::new("esc_status", 123)], "esc_status_123");
}
