//! Segment parse and encode behavior over raw lines

use octofhir_hl7v2::{Delimiters, Hl7Error, Location, Segment};
use pretty_assertions::assert_eq;

#[test]
fn test_round_trip_preserves_raw_value() {
    let delimiters = Delimiters::default();
    let lines = [
        "PID|1||12345^^^MRN||Doe^John&H|",
        "OBX|1|TX|note^comment|some \\|escaped\\| text",
        "NTE|1~2~3|a^b~c",
        "EVN|||",
    ];
    for line in lines {
        let mut segment = Segment::parse(line, &delimiters).unwrap();
        assert_eq!(segment.value(), line);
        // rewriting a field re-encodes the raw value from the field tree
        let first = segment.get(&Location::field(1)).unwrap();
        segment
            .set(&Location::field(1), &first, &delimiters)
            .unwrap();
        assert_eq!(segment.value(), line);
    }
}

#[test]
fn test_header_separator_self_reference() {
    let delimiters = Delimiters::default();
    let segment = Segment::parse("MSH|^~\\&|sending^app|recv", &delimiters).unwrap();
    assert_eq!(segment.get(&Location::field(1)).unwrap(), "|");
    // ordinary fields after the encoding characters split as usual
    assert_eq!(segment.field(3).unwrap().components().len(), 2);
}

#[test]
fn test_header_encoding_characters_unsplit() {
    let delimiters = Delimiters::default();
    let segment = Segment::parse("MSH|^~\\&|app", &delimiters).unwrap();
    let encoding = segment.all_fields(2).unwrap();
    assert_eq!(encoding.len(), 1);
    assert_eq!(encoding[0].value(), "^~\\&");
    assert_eq!(encoding[0].components().len(), 1);
}

#[test]
fn test_repetitions_share_sequence() {
    let delimiters = Delimiters::default();
    let segment = Segment::parse("PID|a~b~c|x", &delimiters).unwrap();
    let repetitions = segment.all_fields(1).unwrap();
    assert_eq!(repetitions.len(), 3);
    assert!(repetitions.iter().all(|field| field.seq() == 1));
    assert_eq!(
        segment.get_all(&Location::field(1)).unwrap(),
        vec!["a", "b", "c"]
    );
}

#[test]
fn test_escaped_field_delimiter_not_split() {
    let delimiters = Delimiters::default();
    let segment = Segment::parse("PID|a\\|b|c", &delimiters).unwrap();
    assert_eq!(segment.get(&Location::field(1)).unwrap(), "a\\|b");
    assert_eq!(segment.get(&Location::field(2)).unwrap(), "c");
}

#[test]
fn test_trailing_escape_carried_verbatim() {
    let delimiters = Delimiters::default();
    let segment = Segment::parse("PID|ab\\", &delimiters).unwrap();
    assert_eq!(segment.field(1).unwrap().value(), "ab\\");
}

#[test]
fn test_trailing_delimiter_keeps_empty_field() {
    let delimiters = Delimiters::default();
    let segment = Segment::parse("PID|a|", &delimiters).unwrap();
    assert_eq!(segment.fields().len(), 3);
    assert_eq!(segment.get(&Location::field(2)).unwrap(), "");
}

#[test]
fn test_whole_segment_reads() {
    let delimiters = Delimiters::default();
    let segment = Segment::parse("PID|a|b", &delimiters).unwrap();
    assert_eq!(segment.get(&Location::segment()).unwrap(), "PID|a|b");
    assert_eq!(
        segment.get_all(&Location::segment()).unwrap(),
        vec!["PID|a|b"]
    );
    assert_eq!(segment.to_string(), "PID|a|b");
}

#[test]
fn test_too_short_segment_rejected() {
    let delimiters = Delimiters::default();
    assert_eq!(
        Segment::parse("AB", &delimiters).unwrap_err(),
        Hl7Error::SegmentTooShort { len: 2 }
    );
}

#[test]
fn test_alternate_delimiter_set() {
    let delimiters = Delimiters::new('#', '%', '@', '+', '?');
    let segment = Segment::parse("ZZZ#a@b%c#x+y", &delimiters).unwrap();
    assert_eq!(segment.all_fields(1).unwrap().len(), 2);
    assert_eq!(
        segment
            .get(&Location::field(1).with_component(2))
            .unwrap(),
        "b"
    );
    assert_eq!(
        segment
            .get(&Location::field(2).with_component(1).with_subcomponent(2))
            .unwrap(),
        "y"
    );
}
