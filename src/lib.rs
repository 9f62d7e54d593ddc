//! lspwire - Language Server Protocol data shapes over a composable JSON codec
//!
//! This is the convenience crate that re-exports the lspwire sub-crates. Use it
//! when a single dependency should provide the codec engine, the derives and
//! the protocol catalog.
//!
//! # Architecture
//!
//! lspwire is organized into modular crates:
//!
//! - **lspwire-core**: Value model, codecs (optional, untagged and tagged
//!   variants, records, arrays, maps, enumerations), decode errors, JSON text
//!   boundary, logging setup
//! - **lspwire-macros**: `Record` and `Variant` derives that declare codecs
//!   with explicit wire keys and discriminators
//! - **lspwire-types**: LSP structures and the JSON-RPC message envelope
//!
//! # Quick Start - Decoding a message
//!
//! ```rust
//! use lspwire::types::{decode_message, decode_params, DidCloseTextDocumentParams, Message};
//!
//! let text = r#"{"jsonrpc":"2.0","method":"textDocument/didClose",
//!                "params":{"textDocument":{"uri":"file:///main.rs"}}}"#;
//!
//! let message = decode_message(text).unwrap();
//! if let Message::Notification(notification) = &message {
//!     let params: DidCloseTextDocumentParams =
//!         decode_params(notification.params.as_ref()).unwrap();
//!     assert_eq!(params.text_document.uri, "file:///main.rs");
//! }
//! ```
//!
//! # Quick Start - Declaring shapes
//!
//! The derives refer to the engine as `::lspwire_core` by default. Crates that
//! only depend on `lspwire` point them at the re-export:
//!
//! ```rust
//! use lspwire::{from_value, to_value, Record, Value, Variant};
//!
//! #[derive(Debug, Clone, Default, PartialEq, Record)]
//! #[wire(crate = "::lspwire::core")]
//! struct Hover {
//!     #[wire(key = "contents")]
//!     contents: String,
//!     #[wire(key = "range")]
//!     range: Option<lspwire::types::Range>,
//! }
//!
//! #[derive(Debug, Clone, PartialEq, Variant)]
//! #[wire(untagged, crate = "::lspwire::core")]
//! enum HoverResult {
//!     #[wire(name = "Hover")]
//!     Hover(Hover),
//!     #[wire(name = "null")]
//!     Nothing(()),
//! }
//!
//! let hover = HoverResult::Hover(Hover { contents: "fn main()".into(), range: None });
//! let value = to_value(&hover);
//! assert_eq!(value.to_string(), r#"{"contents":"fn main()"}"#);
//! assert_eq!(from_value::<HoverResult>(&value).unwrap(), hover);
//! assert_eq!(from_value::<HoverResult>(&Value::Null).unwrap(), HoverResult::Nothing(()));
//! ```
//!
//! Tagged wrappers compose with the catalog's own variants:
//!
//! ```rust
//! use lspwire::types::{WorkDoneProgress, WorkDoneProgressBegin};
//! use lspwire::{from_value, json, to_value, Variant};
//!
//! #[derive(Debug, Clone, PartialEq, Variant)]
//! #[wire(tagged, tag = "kind", payload = "value", crate = "::lspwire::core")]
//! enum Telemetry {
//!     #[wire(name = "progress")]
//!     Progress(WorkDoneProgress),
//!     #[wire(name = "note")]
//!     Note(String),
//! }
//!
//! let event = Telemetry::Progress(WorkDoneProgress::Begin(WorkDoneProgressBegin {
//!     title: "Indexing".into(),
//!     cancellable: Some(false),
//!     ..Default::default()
//! }));
//! let value = to_value(&event);
//! assert_eq!(
//!     json::to_string(&value).unwrap(),
//!     r#"{"kind":"progress","value":{"kind":"begin","title":"Indexing","cancellable":false}}"#
//! );
//! assert_eq!(from_value::<Telemetry>(&value).unwrap(), event);
//! ```
//!
//! # Logging
//!
//! Codecs emit `tracing` events (untagged trials at `trace`, dispatch failures
//! at `debug`, duplicate declarations at `error`). [`init_logging`] installs a
//! subscriber for binaries and tests that want to see them.
//!
//! ```rust
//! use lspwire::types::{DidSaveTextDocumentParams, NotificationMessage, TextDocumentIdentifier};
//! use lspwire::{decode_message, encode_message, init_logging, to_value, LoggingConfig, Message};
//!
//! // Err when a subscriber is already installed
//! let _ = init_logging(&LoggingConfig::new().with_level("trace"));
//!
//! let params = DidSaveTextDocumentParams {
//!     text_document: TextDocumentIdentifier::new("file:///saved.rs"),
//!     text: Some("fn main() {}".into()),
//! };
//! let message = Message::Notification(NotificationMessage::new(
//!     "textDocument/didSave",
//!     Some(to_value(&params)),
//! ));
//! let text = encode_message(&message).unwrap();
//! assert_eq!(decode_message(&text).unwrap(), message);
//! ```

pub use lspwire_core as core;
pub use lspwire_types as types;

pub use lspwire_core::{
    from_value, init_logging, json, to_value, Codec, DecodeError, DecodeErrorKind, Error,
    LoggingConfig, Value, Wire,
};
pub use lspwire_macros::{Record, Variant};
pub use lspwire_types::{decode_message, encode_message, Message, ResponseError};
