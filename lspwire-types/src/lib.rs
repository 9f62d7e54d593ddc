//! Language Server Protocol message shapes for lspwire
//!
//! This crate declares the protocol's records, enumerations and variants on
//! top of the `lspwire-core` codec engine. It includes:
//!
//! - **Base types**: integers, `LSPAny`, cancellation and progress tokens
//! - **Basic structures**: positions, ranges, text edits, diagnostics,
//!   workspace edits and resource operations
//! - **Registration**: dynamic capability (un)registration
//! - **Initialization**: the `initialize` handshake with client and server
//!   capabilities
//! - **Navigation**: go-to-declaration/definition/type definition/implementation
//!   and find-references params, options and client capabilities
//! - **Text document sync**: open/change/save/close notifications
//! - **Messages**: the JSON-RPC 2.0 envelope (requests, responses,
//!   notifications) and the protocol's error codes
//!
//! # Wire keys
//!
//! Every field carries its lowerCamelCase wire key explicitly. Structures that
//! extend other structures in the protocol are declared with the inherited
//! fields inlined.
//!
//! # Example
//!
//! ```rust
//! use lspwire_types::{decode_message, encode_message, Message, Position, Range};
//! use lspwire_core::to_value;
//!
//! let range = Range::new(Position::new(0, 0), Position::new(0, 5));
//! assert_eq!(
//!     to_value(&range).to_string(),
//!     r#"{"start":{"line":0,"character":0},"end":{"line":0,"character":5}}"#
//! );
//!
//! let text = r#"{"jsonrpc":"2.0","id":1,"method":"shutdown"}"#;
//! let message = decode_message(text).unwrap();
//! assert!(message.is_request());
//! assert_eq!(encode_message(&message).unwrap(), text);
//! ```

pub mod base;
pub mod basic;
pub mod error;
pub mod initialization;
pub mod message;
pub mod navigation;
pub mod registration;
pub mod text_document;

pub use base::*;
pub use basic::*;
pub use error::{error_codes, ResponseError};
pub use message::{
    decode_message, decode_params, encode_message, ErrorResponse, Message, NotificationMessage,
    RequestId, RequestMessage, ResponseMessage, SuccessResponse,
};
pub use initialization::*;
pub use navigation::*;
pub use registration::*;
pub use text_document::*;
