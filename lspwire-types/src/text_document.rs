//! Text document synchronization
//!
//! Open, change, save and close notifications with their registration
//! options and capabilities.

use crate::base::UInteger;
use crate::basic::{
    DocumentSelector, Range, TextDocumentIdentifier, TextDocumentItem,
    VersionedTextDocumentIdentifier,
};
use lspwire_core::wire_enum;
use lspwire_macros::{Record, Variant};

wire_enum! {
    /// How the client sends document changes
    pub enum TextDocumentSyncKind {
        None = 0,
        /// The whole document on every change
        Full = 1,
        /// Only the changed ranges
        Incremental = 2,
    }
}

wire_enum! {
    pub enum TextDocumentSaveReason {
        Manual = 1,
        AfterDelay = 2,
        FocusOut = 3,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct DidOpenTextDocumentParams {
    #[wire(key = "textDocument")]
    pub text_document: TextDocumentItem,
}

/// Registration options for `textDocument/didChange`
#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct TextDocumentChangeRegistrationOptions {
    #[wire(key = "documentSelector", required)]
    pub document_selector: Option<DocumentSelector>,
    #[wire(key = "syncKind")]
    pub sync_kind: TextDocumentSyncKind,
}

/// Replacement of a range of the document
#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct RangeChange {
    #[wire(key = "range")]
    pub range: Range,
    #[wire(key = "rangeLength")]
    pub range_length: Option<UInteger>,
    #[wire(key = "text")]
    pub text: String,
}

/// New full content of the document
#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct FullChange {
    #[wire(key = "text")]
    pub text: String,
}

/// One change to a document
///
/// An incremental change carries `range`; a full replacement only has `text`.
/// Every incremental change also satisfies the full form, so incremental is
/// tried first.
#[derive(Debug, Clone, PartialEq, Eq, Variant)]
#[wire(untagged)]
pub enum TextDocumentContentChangeEvent {
    #[wire(name = "incremental change")]
    Incremental(RangeChange),
    #[wire(name = "full change")]
    Full(FullChange),
}

impl TextDocumentContentChangeEvent {
    pub fn incremental(range: Range, text: impl Into<String>) -> Self {
        TextDocumentContentChangeEvent::Incremental(RangeChange {
            range,
            range_length: None,
            text: text.into(),
        })
    }

    pub fn full(text: impl Into<String>) -> Self {
        TextDocumentContentChangeEvent::Full(FullChange { text: text.into() })
    }

    /// The inserted text
    pub fn text(&self) -> &str {
        match self {
            TextDocumentContentChangeEvent::Incremental(change) => &change.text,
            TextDocumentContentChangeEvent::Full(change) => &change.text,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct DidChangeTextDocumentParams {
    #[wire(key = "textDocument")]
    pub text_document: VersionedTextDocumentIdentifier,
    /// Applied in order
    #[wire(key = "contentChanges")]
    pub content_changes: Vec<TextDocumentContentChangeEvent>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct WillSaveTextDocumentParams {
    #[wire(key = "textDocument")]
    pub text_document: TextDocumentIdentifier,
    #[wire(key = "reason")]
    pub reason: TextDocumentSaveReason,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Record)]
pub struct SaveOptions {
    /// Client should include the content on save
    #[wire(key = "includeText")]
    pub include_text: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct TextDocumentSaveRegistrationOptions {
    #[wire(key = "documentSelector", required)]
    pub document_selector: Option<DocumentSelector>,
    #[wire(key = "includeText")]
    pub include_text: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct DidSaveTextDocumentParams {
    #[wire(key = "textDocument")]
    pub text_document: TextDocumentIdentifier,
    /// Present when the save registration asked for it
    #[wire(key = "text")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct DidCloseTextDocumentParams {
    #[wire(key = "textDocument")]
    pub text_document: TextDocumentIdentifier,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct TextDocumentSyncClientCapabilities {
    #[wire(key = "dynamicRegistration")]
    pub dynamic_registration: Option<bool>,
    #[wire(key = "willSave")]
    pub will_save: Option<bool>,
    #[wire(key = "willSaveWaitUntil")]
    pub will_save_wait_until: Option<bool>,
    #[wire(key = "didSave")]
    pub did_save: Option<bool>,
}

/// `boolean | SaveOptions`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Variant)]
#[wire(untagged)]
pub enum SaveOption {
    #[wire(name = "boolean")]
    Supported(bool),
    #[wire(name = "SaveOptions")]
    Options(SaveOptions),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct TextDocumentSyncOptions {
    #[wire(key = "openClose")]
    pub open_close: Option<bool>,
    #[wire(key = "change")]
    pub change: Option<TextDocumentSyncKind>,
    #[wire(key = "willSave")]
    pub will_save: Option<bool>,
    #[wire(key = "willSaveWaitUntil")]
    pub will_save_wait_until: Option<bool>,
    #[wire(key = "save")]
    pub save: Option<SaveOption>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::Position;
    use lspwire_core::{from_value, json, to_value, DecodeErrorKind, Value};

    #[test]
    fn test_sync_kind_is_integer() {
        assert_eq!(to_value(&TextDocumentSyncKind::Incremental), Value::Int(2));
        assert_eq!(TextDocumentSyncKind::default(), TextDocumentSyncKind::None);
        let err = from_value::<TextDocumentSyncKind>(&Value::from("full")).unwrap_err();
        assert!(matches!(err.kind(), DecodeErrorKind::TypeMismatch { .. }));
    }

    #[test]
    fn test_content_changes_decode_in_order() {
        let value = json::from_str(
            r#"{"textDocument":{"uri":"file:///a","version":3},
                "contentChanges":[
                    {"range":{"start":{"line":0,"character":0},"end":{"line":0,"character":2}},"rangeLength":2,"text":"ab"},
                    {"text":"whole"}
                ]}"#,
        )
        .unwrap();
        let params = from_value::<DidChangeTextDocumentParams>(&value).unwrap();
        assert_eq!(params.text_document.version, 3);
        assert_eq!(params.content_changes.len(), 2);
        match &params.content_changes[0] {
            TextDocumentContentChangeEvent::Incremental(change) => {
                assert_eq!(change.range_length, Some(2));
                assert_eq!(change.text, "ab");
            }
            other => panic!("Expected incremental change, got {other:?}"),
        }
        assert_eq!(
            params.content_changes[1],
            TextDocumentContentChangeEvent::full("whole")
        );
    }

    #[test]
    fn test_incremental_change_encoding() {
        let change = TextDocumentContentChangeEvent::incremental(
            Range::new(Position::new(1, 0), Position::new(1, 4)),
            "text",
        );
        assert_eq!(
            to_value(&change).to_string(),
            r#"{"range":{"start":{"line":1,"character":0},"end":{"line":1,"character":4}},"text":"text"}"#
        );
        assert_eq!(change.text(), "text");
    }

    #[test]
    fn test_bad_change_reports_every_attempt() {
        let value = json::from_str(r#"{"textDocument":{"uri":"file:///a","version":1},"contentChanges":[{}]}"#)
            .unwrap();
        let err = from_value::<DidChangeTextDocumentParams>(&value).unwrap_err();
        assert_eq!(err.path().to_string(), "$.contentChanges[0]");
        match err.kind() {
            DecodeErrorKind::NoAlternativeMatched { attempts, .. } => {
                let names: Vec<&str> = attempts.iter().map(|a| a.alternative.as_str()).collect();
                assert_eq!(names, ["incremental change", "full change"]);
            }
            other => panic!("Expected no alternative matched, got {other:?}"),
        }
    }

    #[test]
    fn test_will_save_reason() {
        let value = json::from_str(r#"{"textDocument":{"uri":"file:///a"},"reason":3}"#).unwrap();
        let params = from_value::<WillSaveTextDocumentParams>(&value).unwrap();
        assert_eq!(params.reason, TextDocumentSaveReason::FocusOut);
    }

    #[test]
    fn test_save_option_forms() {
        let options = TextDocumentSyncOptions {
            open_close: Some(true),
            change: Some(TextDocumentSyncKind::Full),
            save: Some(SaveOption::Options(SaveOptions {
                include_text: Some(true),
            })),
            ..Default::default()
        };
        let value = to_value(&options);
        assert_eq!(
            value.to_string(),
            r#"{"openClose":true,"change":1,"save":{"includeText":true}}"#
        );
        assert_eq!(from_value::<TextDocumentSyncOptions>(&value).unwrap(), options);

        let flag = json::from_str(r#"{"save":false}"#).unwrap();
        assert_eq!(
            from_value::<TextDocumentSyncOptions>(&flag).unwrap().save,
            Some(SaveOption::Supported(false))
        );
    }

    #[test]
    fn test_did_save_text_is_optional() {
        let params = DidSaveTextDocumentParams {
            text_document: TextDocumentIdentifier::new("file:///a"),
            text: None,
        };
        assert_eq!(
            to_value(&params).to_string(),
            r#"{"textDocument":{"uri":"file:///a"}}"#
        );
    }

    fn assert_total_eq<T: Eq + std::fmt::Debug>(left: &T, right: &T) {
        assert_eq!(left, right);
    }

    #[test]
    fn test_did_open_params_are_eq() {
        let value = json::from_str(
            r#"{"textDocument":{"uri":"file:///a","languageId":"rust","version":1,"text":""}}"#,
        )
        .unwrap();
        let params = from_value::<DidOpenTextDocumentParams>(&value).unwrap();
        let expected = DidOpenTextDocumentParams {
            text_document: TextDocumentItem {
                uri: "file:///a".into(),
                language_id: "rust".into(),
                version: 1,
                text: String::new(),
            },
        };
        assert_total_eq(&params, &expected);
    }

    #[test]
    fn test_change_registration_options() {
        let options = TextDocumentChangeRegistrationOptions {
            document_selector: None,
            sync_kind: TextDocumentSyncKind::Incremental,
        };
        let value = to_value(&options);
        assert_eq!(value.to_string(), r#"{"documentSelector":null,"syncKind":2}"#);
        assert_eq!(
            from_value::<TextDocumentChangeRegistrationOptions>(&value).unwrap(),
            options
        );
    }
}
