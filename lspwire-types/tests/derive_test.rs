//! Integration tests for the `Record` and `Variant` derives

use lspwire_core::{
    from_value, json, to_value, DecodeErrorKind, EnumCodec, Value, Wire,
};
use lspwire_macros::{Record, Variant};
use lspwire_types::{TextDocumentIdentifier, TextDocumentItem};
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Level {
    Low,
    High,
}

fn level_to_wire(level: Level) -> Value {
    match level {
        Level::Low => Value::from("low"),
        Level::High => Value::from("high"),
    }
}

fn level_codec() -> EnumCodec<Level> {
    EnumCodec::new("Level", &[Level::Low, Level::High], level_to_wire)
}

#[derive(Debug, Clone, Default, PartialEq, Record)]
#[wire(name = "Marker", constant(key = "kind", value = "marker"), constant(key = "version", value = 2))]
struct Marker {
    #[wire(key = "label")]
    label: String,
    #[wire(key = "level", with = "level_codec()")]
    level: Option<Level>,
    #[wire(key = "parent", nullable)]
    parent: Option<String>,
    #[wire(key = "counts")]
    counts: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Variant)]
#[wire(tagged, tag = "event", payload = "body")]
enum Event {
    #[wire(name = "opened")]
    Opened(TextDocumentItem),
    #[wire(name = "closed")]
    Closed(TextDocumentIdentifier),
    #[wire(name = "tick")]
    Tick(()),
}

#[derive(Debug, Clone, PartialEq, Variant)]
#[wire(tagged)]
enum Setting {
    #[wire(name = "flag")]
    Flag(bool),
    #[wire(name = "count")]
    Count(i64),
}

#[derive(Debug, Clone, PartialEq, Variant)]
#[wire(untagged, name = "Label or level")]
enum LabelOrLevel {
    #[wire(name = "label")]
    Label(String),
    #[wire(name = "level", with = "level_codec()")]
    Level(Level),
}

fn value(json: serde_json::Value) -> Value {
    Value::from(json)
}

#[test]
fn test_record_layout() {
    let marker = Marker {
        label: "m".into(),
        level: Some(Level::High),
        parent: None,
        counts: vec![1, 2],
    };
    let encoded = to_value(&marker);
    assert_eq!(
        encoded,
        value(json!({
            "kind": "marker",
            "version": 2,
            "label": "m",
            "level": "high",
            "parent": null,
            "counts": [1, 2]
        }))
    );
    assert_eq!(
        json::to_string(&encoded).unwrap(),
        r#"{"kind":"marker","version":2,"label":"m","level":"high","parent":null,"counts":[1,2]}"#
    );
    assert_eq!(from_value::<Marker>(&encoded).unwrap(), marker);
}

#[test]
fn test_record_constant_mismatch_names_the_record() {
    let input = value(json!({"kind": "marker", "version": 3, "label": "m", "counts": []}));
    let err = from_value::<Marker>(&input).unwrap_err();
    assert_eq!(err.path().to_string(), "$.version");
    match err.kind() {
        DecodeErrorKind::InvalidValue(message) => assert!(message.starts_with("Marker requires 2")),
        other => panic!("Expected invalid value, got {other:?}"),
    }
}

#[test]
fn test_record_with_codec_errors_keep_path() {
    let input = value(json!({"kind": "marker", "version": 2, "label": "m", "level": "mid", "counts": []}));
    let err = from_value::<Marker>(&input).unwrap_err();
    assert_eq!(err.path().to_string(), "$.level");
}

#[test]
fn test_record_keys_follow_declaration() {
    let keys: Vec<&str> = Marker::codec().keys().collect();
    assert_eq!(keys, ["kind", "version", "label", "level", "parent", "counts"]);
    assert_eq!(Marker::codec().name(), "Marker");
}

#[test]
fn test_tagged_custom_fields() {
    let event = Event::Closed(TextDocumentIdentifier::new("file:///a"));
    let encoded = to_value(&event);
    assert_eq!(
        encoded,
        value(json!({"event": "closed", "body": {"uri": "file:///a"}}))
    );
    assert_eq!(from_value::<Event>(&encoded).unwrap(), event);

    let codec = Event::codec();
    assert_eq!(codec.tag_field(), "event");
    assert_eq!(codec.payload_field(), "body");
    assert_eq!(codec.tags().collect::<Vec<_>>(), ["opened", "closed", "tick"]);
}

#[test]
fn test_tagged_unit_payload_may_be_omitted() {
    let decoded = from_value::<Event>(&value(json!({"event": "tick"}))).unwrap();
    assert_eq!(decoded, Event::Tick(()));

    let err = from_value::<Event>(&value(json!({"event": "opened"}))).unwrap_err();
    assert_eq!(err.kind(), &DecodeErrorKind::MissingField("body".into()));
}

#[test]
fn test_tagged_payload_error_path() {
    let err = from_value::<Event>(&value(json!({
        "event": "opened",
        "body": {"uri": "file:///a", "languageId": "rust", "version": "one", "text": ""}
    })))
    .unwrap_err();
    assert_eq!(err.path().to_string(), "$.body.version");
}

#[test]
fn test_tagged_default_fields() {
    let encoded = to_value(&Setting::Count(4));
    assert_eq!(encoded, value(json!({"type": "count", "data": 4})));

    let err = from_value::<Setting>(&value(json!({"type": "ratio", "data": 0.5}))).unwrap_err();
    assert_eq!(err.kind(), &DecodeErrorKind::UnknownTag("ratio".into()));
}

#[test]
fn test_untagged_with_codec() {
    assert_eq!(
        from_value::<LabelOrLevel>(&Value::from("low")).unwrap(),
        LabelOrLevel::Label("low".into())
    );
    assert_eq!(to_value(&LabelOrLevel::Level(Level::High)), Value::from("high"));

    let err = from_value::<LabelOrLevel>(&Value::Int(1)).unwrap_err();
    match err.kind() {
        DecodeErrorKind::NoAlternativeMatched { variant, attempts } => {
            assert_eq!(variant, "Label or level");
            assert_eq!(attempts.len(), 2);
        }
        other => panic!("Expected no alternative matched, got {other:?}"),
    }
}
