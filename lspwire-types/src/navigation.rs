//! Language features for code navigation
//!
//! Go to declaration, definition, type definition and implementation share one
//! shape: a client capability with `dynamicRegistration`/`linkSupport`, server
//! options, registration options and position params with progress tokens.
//! They are declared together by `goto_request!`. Find references adds a
//! [`ReferenceContext`] and has no link support.

use crate::base::ProgressToken;
use crate::basic::{DocumentSelector, Position, TextDocumentIdentifier};
use lspwire_macros::Record;

macro_rules! goto_request {
    (
        $(#[$doc:meta])*
        $capabilities:ident, $options:ident, $registration:ident, $params:ident
    ) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
        pub struct $capabilities {
            #[wire(key = "dynamicRegistration")]
            pub dynamic_registration: Option<bool>,
            /// Client supports `LocationLink` results
            #[wire(key = "linkSupport")]
            pub link_support: Option<bool>,
        }

        #[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
        pub struct $options {
            #[wire(key = "workDoneProgress")]
            pub work_done_progress: Option<bool>,
        }

        #[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
        pub struct $registration {
            #[wire(key = "documentSelector", required)]
            pub document_selector: Option<DocumentSelector>,
            #[wire(key = "workDoneProgress")]
            pub work_done_progress: Option<bool>,
            #[wire(key = "id")]
            pub id: Option<String>,
        }

        #[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
        pub struct $params {
            #[wire(key = "textDocument")]
            pub text_document: TextDocumentIdentifier,
            #[wire(key = "position")]
            pub position: Position,
            #[wire(key = "workDoneToken")]
            pub work_done_token: Option<ProgressToken>,
            #[wire(key = "partialResultToken")]
            pub partial_result_token: Option<ProgressToken>,
        }

        impl $params {
            pub fn new(text_document: TextDocumentIdentifier, position: Position) -> Self {
                Self {
                    text_document,
                    position,
                    ..Self::default()
                }
            }
        }
    };
}

goto_request! {
    /// `textDocument/declaration` client capabilities
    DeclarationClientCapabilities, DeclarationOptions, DeclarationRegistrationOptions, DeclarationParams
}

goto_request! {
    /// `textDocument/definition` client capabilities
    DefinitionClientCapabilities, DefinitionOptions, DefinitionRegistrationOptions, DefinitionParams
}

goto_request! {
    /// `textDocument/typeDefinition` client capabilities
    TypeDefinitionClientCapabilities, TypeDefinitionOptions, TypeDefinitionRegistrationOptions, TypeDefinitionParams
}

goto_request! {
    /// `textDocument/implementation` client capabilities
    ImplementationClientCapabilities, ImplementationOptions, ImplementationRegistrationOptions, ImplementationParams
}

/// `textDocument/references` client capabilities
#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct ReferenceClientCapabilities {
    #[wire(key = "dynamicRegistration")]
    pub dynamic_registration: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct ReferenceOptions {
    #[wire(key = "workDoneProgress")]
    pub work_done_progress: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct ReferenceRegistrationOptions {
    #[wire(key = "documentSelector", required)]
    pub document_selector: Option<DocumentSelector>,
    #[wire(key = "workDoneProgress")]
    pub work_done_progress: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Record)]
pub struct ReferenceContext {
    /// Include the declaration of the current symbol
    #[wire(key = "includeDeclaration")]
    pub include_declaration: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct ReferenceParams {
    #[wire(key = "textDocument")]
    pub text_document: TextDocumentIdentifier,
    #[wire(key = "position")]
    pub position: Position,
    #[wire(key = "workDoneToken")]
    pub work_done_token: Option<ProgressToken>,
    #[wire(key = "partialResultToken")]
    pub partial_result_token: Option<ProgressToken>,
    #[wire(key = "context")]
    pub context: ReferenceContext,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::{Location, LocationLink, Range};
    use lspwire_core::{from_value, json, to_value, DecodeErrorKind};

    #[test]
    fn test_definition_params() {
        let mut params = DefinitionParams::new(
            TextDocumentIdentifier::new("file:///src/main.rs"),
            Position::new(10, 4),
        );
        params.work_done_token = Some("wd-1".into());
        let value = to_value(&params);
        assert_eq!(
            value.to_string(),
            r#"{"textDocument":{"uri":"file:///src/main.rs"},"position":{"line":10,"character":4},"workDoneToken":"wd-1"}"#
        );
        assert_eq!(from_value::<DefinitionParams>(&value).unwrap(), params);
    }

    #[test]
    fn test_params_missing_position() {
        let value = json::from_str(r#"{"textDocument":{"uri":"file:///a"}}"#).unwrap();
        let err = from_value::<DeclarationParams>(&value).unwrap_err();
        assert_eq!(err.kind(), &DecodeErrorKind::MissingField("position".into()));
    }

    #[test]
    fn test_client_capabilities() {
        let value = json::from_str(r#"{"dynamicRegistration":true,"linkSupport":false}"#).unwrap();
        let caps = from_value::<TypeDefinitionClientCapabilities>(&value).unwrap();
        assert_eq!(caps.dynamic_registration, Some(true));
        assert_eq!(caps.link_support, Some(false));

        let empty = from_value::<ImplementationClientCapabilities>(
            &json::from_str("{}").unwrap(),
        )
        .unwrap();
        assert_eq!(empty, ImplementationClientCapabilities::default());
    }

    #[test]
    fn test_registration_options_keep_null_selector() {
        let options = DefinitionRegistrationOptions {
            work_done_progress: Some(true),
            ..Default::default()
        };
        assert_eq!(
            to_value(&options).to_string(),
            r#"{"documentSelector":null,"workDoneProgress":true}"#
        );
    }

    #[test]
    fn test_reference_params_context() {
        let value = json::from_str(
            r#"{"textDocument":{"uri":"file:///a"},"position":{"line":1,"character":2},
                "context":{"includeDeclaration":true},"partialResultToken":7}"#,
        )
        .unwrap();
        let params = from_value::<ReferenceParams>(&value).unwrap();
        assert!(params.context.include_declaration);
        assert_eq!(params.partial_result_token, Some(ProgressToken::from(7)));

        let missing = json::from_str(
            r#"{"textDocument":{"uri":"file:///a"},"position":{"line":1,"character":2},"context":{}}"#,
        )
        .unwrap();
        let err = from_value::<ReferenceParams>(&missing).unwrap_err();
        assert_eq!(err.path().to_string(), "$.context");
    }

    #[test]
    fn test_results_are_locations_or_links() {
        let location = Location::new("file:///a", Range::default());
        let link = LocationLink {
            target_uri: "file:///b".into(),
            ..Default::default()
        };
        let locations = to_value(&vec![location.clone()]);
        assert_eq!(from_value::<Vec<Location>>(&locations).unwrap(), vec![location]);
        let links = to_value(&vec![link.clone()]);
        assert_eq!(from_value::<Vec<LocationLink>>(&links).unwrap(), vec![link]);
    }
}
