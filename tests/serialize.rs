use nalgebra::{Point3, Vector3};
use plane_edges::prelude::*;

#[test]
fn test_serialization() {
    let plane = TrackedPlane::<f64>::new(
        PlaneId::new(1, 2),
        Point3::origin(),
        Vector3::y(),
        vec![
            Point3::new(-1., 0., -1.),
            Point3::new(1., 0., -1.),
            Point3::new(1., 0., 1.),
        ],
    );
    let json = serde_json::to_string_pretty(&plane).unwrap();
    let restored: TrackedPlane<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(plane, restored);

    let options: TrackerOptions<f64> =
        serde_json::from_str(r#"{ "min_angle_degrees": 10.0, "max_distance": 4.0 }"#).unwrap();
    assert!(options.validate().is_ok());
    assert_eq!(options.min_angle_degrees(), 10.);
}

#[test]
fn test_event_serialization() {
    let event = SegmentEvent::<f64>::Deleted(PairKey::new(3, 1));
    let json = serde_json::to_value(&event).unwrap();
    let key = &json["Deleted"];
    assert_eq!(key["first"], serde_json::json!({ "high": 0, "low": 1 }));
    assert_eq!(key["second"], serde_json::json!({ "high": 0, "low": 3 }));

    let restored: SegmentEvent<f64> = serde_json::from_value(json).unwrap();
    assert_eq!(restored.key(), PairKey::new(1, 3));
}
