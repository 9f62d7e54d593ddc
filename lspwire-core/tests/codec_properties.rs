//! Property tests for the codec engine
//!
//! Round trips through each composite codec, through JSON text, and the
//! first-declared-wins rule of untagged variants.

use lspwire_core::{
    alternative, json, ArrayCodec, BoolCodec, Codec, DecodeErrorKind, FloatCodec, IntCodec,
    OptionalCodec, RecordCodec, StringCodec, TaggedVariantCodec, UntaggedVariantCodec, Value,
};
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(i64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
enum Payload {
    Flag(bool),
    Ratio(f64),
    Token(Token),
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Entry {
    id: Option<u32>,
    label: String,
    token: Option<Token>,
    tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Narrow {
    label: String,
}

#[derive(Debug, Clone, PartialEq)]
enum Either {
    Wide(Entry),
    Narrow(Narrow),
}

fn token_codec() -> UntaggedVariantCodec<Token> {
    UntaggedVariantCodec::new(
        "Token",
        vec![
            alternative!("integer", Token::Number, IntCodec::<i64>::new()),
            alternative!("string", Token::Text, StringCodec),
        ],
    )
}

fn payload_codec() -> TaggedVariantCodec<Payload> {
    TaggedVariantCodec::new(
        "Payload",
        vec![
            alternative!("flag", Payload::Flag, BoolCodec),
            alternative!("ratio", Payload::Ratio, FloatCodec),
            alternative!("token", Payload::Token, token_codec()),
        ],
    )
}

fn entry_codec() -> RecordCodec<Entry> {
    RecordCodec::builder("Entry")
        .optional("id", IntCodec::<u32>::new(), |r: &Entry| &r.id, |r: &mut Entry| &mut r.id)
        .field("label", StringCodec, |r: &Entry| &r.label, |r: &mut Entry| &mut r.label)
        .optional("token", token_codec(), |r: &Entry| &r.token, |r: &mut Entry| &mut r.token)
        .field("tags", ArrayCodec::new(StringCodec), |r: &Entry| &r.tags, |r: &mut Entry| &mut r.tags)
        .build()
}

fn narrow_codec() -> RecordCodec<Narrow> {
    RecordCodec::builder("Narrow")
        .field("label", StringCodec, |r: &Narrow| &r.label, |r: &mut Narrow| &mut r.label)
        .build()
}

fn arb_token() -> impl Strategy<Value = Token> {
    prop_oneof![
        any::<i64>().prop_map(Token::Number),
        "[a-z0-9 ]{0,12}".prop_map(Token::Text),
    ]
}

fn arb_payload() -> impl Strategy<Value = Payload> {
    prop_oneof![
        any::<bool>().prop_map(Payload::Flag),
        (-1.0e9f64..1.0e9).prop_map(Payload::Ratio),
        arb_token().prop_map(Payload::Token),
    ]
}

fn arb_entry() -> impl Strategy<Value = Entry> {
    (
        prop::option::of(any::<u32>()),
        "[a-zA-Z]{0,8}",
        prop::option::of(arb_token()),
        prop::collection::vec("[a-z]{1,4}", 0..4),
    )
        .prop_map(|(id, label, token, tags)| Entry {
            id,
            label,
            token,
            tags,
        })
}

proptest! {
    #[test]
    fn prop_optional_roundtrip(value in prop::option::of(any::<i64>())) {
        let codec = OptionalCodec::new(IntCodec::<i64>::new());
        prop_assert_eq!(codec.decode(&codec.encode(&value)).unwrap(), value);
    }

    #[test]
    fn prop_untagged_roundtrip(token in arb_token()) {
        let codec = token_codec();
        prop_assert_eq!(codec.decode(&codec.encode(&token)).unwrap(), token);
    }

    #[test]
    fn prop_tagged_roundtrip(payload in arb_payload()) {
        let codec = payload_codec();
        prop_assert_eq!(codec.decode(&codec.encode(&payload)).unwrap(), payload);
    }

    #[test]
    fn prop_record_roundtrip_through_text(entry in arb_entry()) {
        let codec = entry_codec();
        let text = json::encode_to_string(&codec, &entry).unwrap();
        prop_assert_eq!(json::decode_from_str(&codec, &text).unwrap(), entry.clone());

        let value = codec.encode(&entry);
        prop_assert_eq!(value.get("id").is_some(), entry.id.is_some());
        prop_assert_eq!(value.get("token").is_some(), entry.token.is_some());
    }

    #[test]
    fn prop_untagged_earliest_alternative_wins(entry in arb_entry()) {
        // Every Entry object also satisfies Narrow, so declaration order decides
        let wide_first = UntaggedVariantCodec::new(
            "Either",
            vec![
                alternative!("Entry", Either::Wide, entry_codec()),
                alternative!("Narrow", Either::Narrow, narrow_codec()),
            ],
        );
        let narrow_first = UntaggedVariantCodec::new(
            "Either",
            vec![
                alternative!("Narrow", Either::Narrow, narrow_codec()),
                alternative!("Entry", Either::Wide, entry_codec()),
            ],
        );
        let value = entry_codec().encode(&entry);

        for _ in 0..2 {
            prop_assert_eq!(wide_first.decode(&value).unwrap(), Either::Wide(entry.clone()));
            prop_assert_eq!(
                narrow_first.decode(&value).unwrap(),
                Either::Narrow(Narrow { label: entry.label.clone() })
            );
        }
    }

    #[test]
    fn prop_extra_keys_ignored(entry in arb_entry(), extra in "[A-Z]{1,6}", n in any::<i32>()) {
        let codec = entry_codec();
        let mut value = codec.encode(&entry);
        if let Value::Object(map) = &mut value {
            map.insert(extra, Value::from(n));
        }
        prop_assert_eq!(codec.decode(&value).unwrap(), entry);
    }

    #[test]
    fn prop_untagged_exhaustion(b in any::<bool>()) {
        let err = token_codec().decode(&Value::Bool(b)).unwrap_err();
        let is_exhausted = matches!(
            err.kind(),
            DecodeErrorKind::NoAlternativeMatched { attempts, .. } if attempts.len() == 2
        );
        prop_assert!(is_exhausted);
    }
}
