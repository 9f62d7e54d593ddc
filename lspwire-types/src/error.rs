//! Response errors and protocol error codes
//!
//! JSON-RPC 2.0 reserves `-32768` to `-32000`. The Language Server Protocol
//! adds its own codes in the `-32899` to `-32800` range:
//!
//! - `-32700`: Parse error
//! - `-32600`: Invalid Request
//! - `-32601`: Method not found
//! - `-32602`: Invalid params
//! - `-32603`: Internal error
//! - `-32002`: Server not initialized
//! - `-32001`: Unknown error code
//! - `-32803`: Request failed
//! - `-32802`: Server cancelled
//! - `-32801`: Content modified
//! - `-32800`: Request cancelled

use crate::base::{Integer, LspAny};
use lspwire_core::{DecodeError, Value};
use lspwire_macros::Record;
use thiserror::Error;

/// Numeric error codes
pub mod error_codes {
    use crate::base::Integer;

    pub const PARSE_ERROR: Integer = -32700;
    pub const INVALID_REQUEST: Integer = -32600;
    pub const METHOD_NOT_FOUND: Integer = -32601;
    pub const INVALID_PARAMS: Integer = -32602;
    pub const INTERNAL_ERROR: Integer = -32603;

    /// Start of the range reserved for JSON-RPC errors
    pub const JSONRPC_RESERVED_ERROR_RANGE_START: Integer = -32099;
    /// Sent before the server received `initialize`
    pub const SERVER_NOT_INITIALIZED: Integer = -32002;
    pub const UNKNOWN_ERROR_CODE: Integer = -32001;
    /// End of the range reserved for JSON-RPC errors
    pub const JSONRPC_RESERVED_ERROR_RANGE_END: Integer = -32000;

    /// Start of the range reserved for LSP errors
    pub const LSP_RESERVED_ERROR_RANGE_START: Integer = -32899;
    /// Syntactically correct request that failed anyway
    pub const REQUEST_FAILED: Integer = -32803;
    pub const SERVER_CANCELLED: Integer = -32802;
    /// The document changed while the request was computed
    pub const CONTENT_MODIFIED: Integer = -32801;
    pub const REQUEST_CANCELLED: Integer = -32800;
    /// End of the range reserved for LSP errors
    pub const LSP_RESERVED_ERROR_RANGE_END: Integer = -32800;
}

/// Error object of a failed response
///
/// # Examples
///
/// ```rust
/// use lspwire_types::{error_codes, ResponseError};
///
/// let error = ResponseError::method_not_found("textDocument/foo");
/// assert_eq!(error.code, error_codes::METHOD_NOT_FOUND);
/// assert_eq!(error.to_string(), "[-32601] Method not found: textDocument/foo");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Error, Record)]
#[error("[{code}] {message}")]
pub struct ResponseError {
    #[wire(key = "code")]
    pub code: Integer,
    #[wire(key = "message")]
    pub message: String,
    /// Additional structured information
    #[wire(key = "data")]
    pub data: Option<LspAny>,
}

impl ResponseError {
    pub fn new(code: Integer, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn with_data(code: Integer, message: impl Into<String>, data: LspAny) -> Self {
        Self {
            code,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Invalid JSON was received (-32700)
    pub fn parse_error() -> Self {
        Self::new(error_codes::PARSE_ERROR, "Parse error")
    }

    /// The JSON is not a valid request object (-32600)
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::new(error_codes::INVALID_REQUEST, msg)
    }

    /// Method does not exist (-32601)
    pub fn method_not_found(method: impl Into<String>) -> Self {
        Self::new(
            error_codes::METHOD_NOT_FOUND,
            format!("Method not found: {}", method.into()),
        )
    }

    /// Params do not match the method's declared shape (-32602)
    pub fn invalid_params(msg: impl Into<String>) -> Self {
        Self::new(error_codes::INVALID_PARAMS, msg)
    }

    /// Internal error (-32603)
    pub fn internal_error(msg: impl Into<String>) -> Self {
        Self::new(error_codes::INTERNAL_ERROR, msg)
    }

    /// Request received before `initialize` (-32002)
    pub fn server_not_initialized() -> Self {
        Self::new(error_codes::SERVER_NOT_INITIALIZED, "Server not initialized")
    }

    /// Request cancelled by the client (-32800)
    pub fn request_cancelled() -> Self {
        Self::new(error_codes::REQUEST_CANCELLED, "Request cancelled")
    }

    /// Result invalidated by a document change (-32801)
    pub fn content_modified() -> Self {
        Self::new(error_codes::CONTENT_MODIFIED, "Content modified")
    }

    /// Request cancelled by the server (-32802)
    pub fn server_cancelled() -> Self {
        Self::new(error_codes::SERVER_CANCELLED, "Server cancelled")
    }

    /// Request failed although it was well formed (-32803)
    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::new(error_codes::REQUEST_FAILED, msg)
    }
}

/// Invalid params carrying the decode path as `data.path`
impl From<DecodeError> for ResponseError {
    fn from(err: DecodeError) -> Self {
        let data = Value::from_iter([("path".to_string(), Value::from(err.path().to_string()))]);
        Self::with_data(error_codes::INVALID_PARAMS, err.kind().to_string(), data)
    }
}

impl From<lspwire_core::Error> for ResponseError {
    fn from(err: lspwire_core::Error) -> Self {
        match err {
            lspwire_core::Error::Json(_) => Self::parse_error(),
            lspwire_core::Error::Decode(err) => Self::invalid_request(err.to_string()),
            lspwire_core::Error::Serialization(msg) => Self::internal_error(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lspwire_core::{from_value, json, to_value};

    #[test]
    fn test_standard_codes() {
        assert_eq!(ResponseError::parse_error().code, -32700);
        assert_eq!(ResponseError::invalid_request("x").code, -32600);
        assert_eq!(ResponseError::method_not_found("x").code, -32601);
        assert_eq!(ResponseError::invalid_params("x").code, -32602);
        assert_eq!(ResponseError::internal_error("x").code, -32603);
        assert_eq!(ResponseError::server_not_initialized().code, -32002);
        assert_eq!(ResponseError::request_failed("x").code, -32803);
        assert_eq!(ResponseError::server_cancelled().code, -32802);
        assert_eq!(ResponseError::content_modified().code, -32801);
        assert_eq!(ResponseError::request_cancelled().code, -32800);
    }

    #[test]
    fn test_display() {
        let error = ResponseError::new(-32000, "Database down");
        assert_eq!(error.to_string(), "[-32000] Database down");
    }

    #[test]
    fn test_wire_form_omits_absent_data() {
        let error = ResponseError::invalid_params("bad");
        assert_eq!(
            to_value(&error).to_string(),
            r#"{"code":-32602,"message":"bad"}"#
        );

        let with_data = ResponseError::with_data(1001, "custom", Value::from(vec![Value::from(1)]));
        let value = to_value(&with_data);
        assert_eq!(value.to_string(), r#"{"code":1001,"message":"custom","data":[1]}"#);
        assert_eq!(from_value::<ResponseError>(&value).unwrap(), with_data);
    }

    #[test]
    fn test_from_decode_error_keeps_path() {
        let err = DecodeError::missing_field("uri").at_key("textDocument");
        let error = ResponseError::from(err);
        assert_eq!(error.code, error_codes::INVALID_PARAMS);
        assert_eq!(error.message, "missing field `uri`");
        assert_eq!(
            error.data.as_ref().and_then(|data| data.get("path")),
            Some(&Value::from("$.textDocument"))
        );
    }

    #[test]
    fn test_from_malformed_json() {
        let err = json::from_str("{nope").unwrap_err();
        assert_eq!(ResponseError::from(err), ResponseError::parse_error());
    }
}
