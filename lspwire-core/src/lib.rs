//! Core value model and codec engine for lspwire
//!
//! This crate converts typed Rust data to and from the generic JSON value tree
//! used by the Language Server Protocol. It includes:
//!
//! - **Value**: an in-memory JSON tree ([`Value`]) with kind and shape metadata
//! - **Codecs**: composable encode/decode pairs for primitives, optionals,
//!   arrays, maps, enumerations, records and variants
//! - **Error handling**: decode errors that carry the path to the offending value
//! - **JSON boundary**: text ↔ [`Value`] conversion through `serde_json`
//! - **Logging**: `tracing` subscriber setup for applications
//!
//! # Overview
//!
//! LSP messages are JSON objects whose fields may be optional, may hold one of
//! several alternative shapes, or may be nested records. Each Rust type gets a
//! [`Codec`] that knows its exact wire shape:
//!
//! - optional fields map "absent" to `null` or to an omitted key
//! - untagged variants try each alternative in declared order; the first that
//!   decodes wins
//! - tagged variants dispatch on an explicit discriminator field
//! - records map declared wire keys to struct fields and ignore unknown keys
//!
//! # Architecture
//!
//! The crate does no I/O. Text enters through [`json::from_str`], codecs work on
//! the resulting tree, and the caller decides how bytes move. The
//! `lspwire-types` crate declares the protocol's records on top of this engine,
//! and `lspwire-macros` generates those declarations from annotated structs.
//!
//! # Example
//!
//! ```rust
//! use lspwire_core::{alternative, json, Codec, IntCodec, RecordCodec, StringCodec, UntaggedVariantCodec};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Code {
//!     Number(i32),
//!     Text(String),
//! }
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Report {
//!     code: Option<Code>,
//!     message: String,
//! }
//!
//! let code = UntaggedVariantCodec::new(
//!     "Code",
//!     vec![
//!         alternative!("integer", Code::Number, IntCodec::<i32>::new()),
//!         alternative!("string", Code::Text, StringCodec),
//!     ],
//! );
//! let report = RecordCodec::builder("Report")
//!     .optional("code", code, |r: &Report| &r.code, |r: &mut Report| &mut r.code)
//!     .field("message", StringCodec, |r: &Report| &r.message, |r: &mut Report| &mut r.message)
//!     .build();
//!
//! let decoded = json::decode_from_str(&report, r#"{"code":"E042","message":"bad"}"#).unwrap();
//! assert_eq!(decoded.code, Some(Code::Text("E042".into())));
//!
//! let text = json::encode_to_string(&report, &Report { code: None, message: "ok".into() }).unwrap();
//! assert_eq!(text, r#"{"message":"ok"}"#);
//! ```

pub mod codec;
pub mod error;
pub mod json;
pub mod logging;
pub mod value;

// Re-export the most commonly used types for convenience
pub use codec::{
    from_value, to_value, Alternative, ArrayCodec, BoolCodec, BoxedCodec, Codec, EnumCodec,
    FloatCodec, IntCodec, MapCodec, OptionalCodec, RecordBuilder, RecordCodec, StringCodec,
    TaggedVariantCodec, UnitCodec, UntaggedVariantCodec, ValueCodec, Wire, WireInteger,
};
pub use error::{AlternativeFailure, DecodeError, DecodeErrorKind, Error, Path, PathSegment, Result};
pub use logging::{init_logging, LoggingConfig};
pub use value::{Map, Shape, Value, ValueKind};
