//! JSON-RPC 2.0 message envelope
//!
//! The Language Server Protocol exchanges three kinds of message, all carrying
//! `"jsonrpc": "2.0"`:
//!
//! 1. **Request**: `id` and `method`, optional `params`; expects a response
//! 2. **Response**: `id` and either `result` or `error`
//! 3. **Notification**: `method` and optional `params`, no `id`
//!
//! # Decoding order
//!
//! [`Message`] is an untagged variant. Records ignore keys they do not
//! declare, so every request also satisfies the notification shape; the
//! request alternative is tried first and the notification last.
//!
//! # Params
//!
//! Params and results travel as untyped [`LspAny`] in the envelope. Handlers
//! decode them with the codec of the method's params type through
//! [`decode_params`], which turns a decode failure into an `InvalidParams`
//! response error.

use crate::base::{Integer, LspAny};
use crate::error::ResponseError;
use lspwire_core::{json, Codec, Value, Wire};
use lspwire_macros::{Record, Variant};
use std::fmt;
use tracing::debug;

/// Request id
///
/// Implements `Hash` and `Eq` so pending requests can be tracked in a map.
///
/// ```rust
/// use lspwire_types::RequestId;
///
/// let id1: RequestId = "req-123".into();
/// let id2: RequestId = 42.into();
/// assert_eq!(id1.to_string(), "\"req-123\"");
/// assert_eq!(id2.to_string(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Variant)]
#[wire(untagged, name = "RequestId")]
pub enum RequestId {
    #[wire(name = "integer")]
    Number(Integer),
    #[wire(name = "string")]
    String(String),
}

impl Default for RequestId {
    fn default() -> Self {
        RequestId::Number(0)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestId::Number(n) => write!(f, "{}", n),
            RequestId::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl From<Integer> for RequestId {
    fn from(n: Integer) -> Self {
        RequestId::Number(n)
    }
}

impl From<String> for RequestId {
    fn from(s: String) -> Self {
        RequestId::String(s)
    }
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        RequestId::String(s.to_string())
    }
}

/// Request message
///
/// A `params` key holding `null` decodes the same as an absent key.
#[derive(Debug, Clone, Default, PartialEq, Record)]
#[wire(constant(key = "jsonrpc", value = "2.0"))]
pub struct RequestMessage {
    #[wire(key = "id")]
    pub id: RequestId,
    #[wire(key = "method")]
    pub method: String,
    #[wire(key = "params")]
    pub params: Option<LspAny>,
}

impl RequestMessage {
    pub fn new(id: impl Into<RequestId>, method: impl Into<String>, params: Option<LspAny>) -> Self {
        Self {
            id: id.into(),
            method: method.into(),
            params,
        }
    }
}

/// Notification message; the receiver sends no response
#[derive(Debug, Clone, Default, PartialEq, Record)]
#[wire(constant(key = "jsonrpc", value = "2.0"))]
pub struct NotificationMessage {
    #[wire(key = "method")]
    pub method: String,
    #[wire(key = "params")]
    pub params: Option<LspAny>,
}

impl NotificationMessage {
    pub fn new(method: impl Into<String>, params: Option<LspAny>) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }
}

/// Successful response; `id` and `result` are required and may be `null`
#[derive(Debug, Clone, Default, PartialEq, Record)]
#[wire(constant(key = "jsonrpc", value = "2.0"))]
pub struct SuccessResponse {
    #[wire(key = "id", required)]
    pub id: Option<RequestId>,
    #[wire(key = "result")]
    pub result: LspAny,
}

/// Failed response
///
/// `id` is required; it is `null` when the request id could not be read, e.g.
/// after a parse error.
#[derive(Debug, Clone, Default, PartialEq, Record)]
#[wire(constant(key = "jsonrpc", value = "2.0"))]
pub struct ErrorResponse {
    #[wire(key = "id", required)]
    pub id: Option<RequestId>,
    #[wire(key = "error")]
    pub error: ResponseError,
}

/// Response message
#[derive(Debug, Clone, PartialEq, Variant)]
#[wire(untagged)]
pub enum ResponseMessage {
    #[wire(name = "success")]
    Success(SuccessResponse),
    #[wire(name = "error")]
    Failure(ErrorResponse),
}

impl ResponseMessage {
    pub fn success(id: impl Into<RequestId>, result: LspAny) -> Self {
        ResponseMessage::Success(SuccessResponse {
            id: Some(id.into()),
            result,
        })
    }

    pub fn error(id: Option<RequestId>, error: ResponseError) -> Self {
        ResponseMessage::Failure(ErrorResponse { id, error })
    }

    pub fn id(&self) -> Option<&RequestId> {
        match self {
            ResponseMessage::Success(response) => response.id.as_ref(),
            ResponseMessage::Failure(response) => response.id.as_ref(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResponseMessage::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ResponseMessage::Failure(_))
    }
}

/// Any message on the wire
#[derive(Debug, Clone, PartialEq, Variant)]
#[wire(untagged)]
pub enum Message {
    #[wire(name = "request")]
    Request(RequestMessage),
    #[wire(name = "response")]
    Response(ResponseMessage),
    #[wire(name = "notification")]
    Notification(NotificationMessage),
}

impl Message {
    pub fn is_request(&self) -> bool {
        matches!(self, Message::Request(_))
    }

    pub fn is_response(&self) -> bool {
        matches!(self, Message::Response(_))
    }

    pub fn is_notification(&self) -> bool {
        matches!(self, Message::Notification(_))
    }

    /// Method of a request or notification
    pub fn method(&self) -> Option<&str> {
        match self {
            Message::Request(request) => Some(&request.method),
            Message::Notification(notification) => Some(&notification.method),
            Message::Response(_) => None,
        }
    }
}

impl From<RequestMessage> for Message {
    fn from(request: RequestMessage) -> Self {
        Message::Request(request)
    }
}

impl From<ResponseMessage> for Message {
    fn from(response: ResponseMessage) -> Self {
        Message::Response(response)
    }
}

impl From<NotificationMessage> for Message {
    fn from(notification: NotificationMessage) -> Self {
        Message::Notification(notification)
    }
}

/// Encode a message as JSON text
///
/// Fails only when the message holds a non-finite float.
pub fn encode_message(message: &Message) -> lspwire_core::Result<String> {
    json::encode_to_string(Message::codec(), message)
}

/// Decode a message from JSON text
///
/// # Errors
///
/// - `Error::Json` if the text is not valid JSON
/// - `Error::Decode` if it is not a request, response or notification; the
///   error lists why each alternative was rejected
///
/// ```rust
/// use lspwire_types::decode_message;
///
/// let message = decode_message(r#"{"jsonrpc":"2.0","method":"initialized","params":{}}"#).unwrap();
/// assert!(message.is_notification());
/// assert_eq!(message.method(), Some("initialized"));
/// ```
pub fn decode_message(text: &str) -> lspwire_core::Result<Message> {
    json::decode_from_str(Message::codec(), text)
}

/// Decode the params of a request or notification
///
/// Absent params decode as `null`, which only payload-less types such as `()`
/// accept. The error's `data.path` locates the offending value from the
/// `params` member.
///
/// ```rust
/// use lspwire_core::json;
/// use lspwire_types::{decode_params, error_codes, CancelParams, NumberOrString};
///
/// let params = json::from_str(r#"{"id":"r1"}"#).unwrap();
/// let cancel: CancelParams = decode_params(Some(&params)).unwrap();
/// assert_eq!(cancel.id, NumberOrString::from("r1"));
///
/// let err = decode_params::<CancelParams>(None).unwrap_err();
/// assert_eq!(err.code, error_codes::INVALID_PARAMS);
/// ```
pub fn decode_params<T: Wire>(params: Option<&Value>) -> Result<T, ResponseError> {
    let null = Value::Null;
    let value = params.unwrap_or(&null);
    Codec::<T>::decode(&T::codec(), value).map_err(|err| {
        debug!(error = %err, "params rejected");
        ResponseError::from(err.at_key("params"))
    })
}
