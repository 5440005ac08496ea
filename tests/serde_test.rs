//! Serde round-trip for the parsed tree (requires the `serde` feature)
#![cfg(feature = "serde")]

use octofhir_hl7v2::{Delimiters, Location, Segment};

#[test]
fn test_segment_tree_round_trips_through_json() {
    let delimiters = Delimiters::default();
    let segment = Segment::parse("PID|1|a^b&c~d", &delimiters).unwrap();
    let json = serde_json::to_string(&segment).unwrap();
    let back: Segment = serde_json::from_str(&json).unwrap();
    assert_eq!(back, segment);
}

#[test]
fn test_configuration_types_round_trip_through_json() {
    let delimiters = Delimiters::standard().with_lf_termination(true);
    let json = serde_json::to_string(&delimiters).unwrap();
    let back: Delimiters = serde_json::from_str(&json).unwrap();
    assert_eq!(back, delimiters);

    let location = Location::field(3).with_component(1);
    let json = serde_json::to_string(&location).unwrap();
    let back: Location = serde_json::from_str(&json).unwrap();
    assert_eq!(back, location);
}
