//! Base protocol types
//!
//! Integer aliases, the untyped `LSPAny` payload, cancellation and progress.

use lspwire_core::{Codec, RecordCodec, Value, Wire};
use lspwire_macros::{Record, Variant};
use std::fmt;

/// Signed 32-bit protocol integer
pub type Integer = i32;

/// Unsigned 32-bit protocol integer
pub type UInteger = u32;

/// Protocol decimal
pub type Decimal = f64;

/// Any JSON value
///
/// Declared optional fields of this type cannot tell a present `null` from an
/// absent key; both decode as `None`.
pub type LspAny = Value;

/// Any JSON object
pub type LspObject = lspwire_core::Map;

/// Any JSON array
pub type LspArray = Vec<Value>;

/// `integer | string`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Variant)]
#[wire(untagged, name = "integer | string")]
pub enum NumberOrString {
    #[wire(name = "integer")]
    Number(Integer),
    #[wire(name = "string")]
    String(String),
}

impl Default for NumberOrString {
    fn default() -> Self {
        NumberOrString::Number(0)
    }
}

impl fmt::Display for NumberOrString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberOrString::Number(n) => write!(f, "{}", n),
            NumberOrString::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl From<Integer> for NumberOrString {
    fn from(n: Integer) -> Self {
        NumberOrString::Number(n)
    }
}

impl From<String> for NumberOrString {
    fn from(s: String) -> Self {
        NumberOrString::String(s)
    }
}

impl From<&str> for NumberOrString {
    fn from(s: &str) -> Self {
        NumberOrString::String(s.to_string())
    }
}

/// Token identifying a progress stream
pub type ProgressToken = NumberOrString;

/// Params of `$/cancelRequest`
#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct CancelParams {
    /// Id of the request to cancel
    #[wire(key = "id")]
    pub id: NumberOrString,
}

/// Params of `$/progress`
///
/// Generic over the reported value, so the codec is declared by hand with the
/// value's codec:
///
/// ```rust
/// use lspwire_core::{Codec, StringCodec};
/// use lspwire_types::{NumberOrString, ProgressParams};
///
/// let codec = ProgressParams::codec(StringCodec);
/// let params = ProgressParams::new(NumberOrString::from("t1"), "half way".to_string());
/// assert_eq!(
///     codec.encode(&params).to_string(),
///     r#"{"token":"t1","value":"half way"}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressParams<T> {
    pub token: ProgressToken,
    pub value: T,
}

impl<T> ProgressParams<T> {
    pub fn new(token: ProgressToken, value: T) -> Self {
        Self { token, value }
    }
}

impl<T: Default + 'static> ProgressParams<T> {
    /// Record codec using `value` for the reported value
    pub fn codec<C: Codec<T> + 'static>(value: C) -> RecordCodec<Self> {
        RecordCodec::builder("ProgressParams")
            .field(
                "token",
                ProgressToken::codec(),
                |p: &Self| &p.token,
                |p: &mut Self| &mut p.token,
            )
            .field("value", value, |p: &Self| &p.value, |p: &mut Self| &mut p.value)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lspwire_core::{from_value, to_value, DecodeErrorKind};

    #[test]
    fn test_number_or_string() {
        assert_eq!(to_value(&NumberOrString::from(7)), Value::Int(7));
        assert_eq!(to_value(&NumberOrString::from("abc")), Value::from("abc"));
        assert_eq!(
            from_value::<NumberOrString>(&Value::from("x")).unwrap(),
            NumberOrString::String("x".into())
        );
        assert_eq!(NumberOrString::from("a").to_string(), "\"a\"");
    }

    #[test]
    fn test_number_or_string_rejects_float() {
        let err = from_value::<NumberOrString>(&Value::Float(1.5)).unwrap_err();
        assert!(matches!(err.kind(), DecodeErrorKind::NoAlternativeMatched { .. }));
    }

    #[test]
    fn test_cancel_params() {
        let params = CancelParams { id: 12.into() };
        let value = to_value(&params);
        assert_eq!(value.to_string(), r#"{"id":12}"#);
        assert_eq!(from_value::<CancelParams>(&value).unwrap(), params);
    }

    #[test]
    fn test_progress_params_with_record_value() {
        let codec = ProgressParams::codec(CancelParams::codec());
        let params = ProgressParams::new(3.into(), CancelParams { id: "r".into() });
        let value = codec.encode(&params);
        assert_eq!(value.to_string(), r#"{"token":3,"value":{"id":"r"}}"#);
        assert_eq!(codec.decode(&value).unwrap(), params);
    }
}
