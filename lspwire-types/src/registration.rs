//! Dynamic capability registration
//!
//! `client/registerCapability` and `client/unregisterCapability` params, plus
//! the option records shared by every registration.

use crate::base::LspAny;
use crate::basic::DocumentSelector;
use lspwire_macros::Record;

/// General parameters to register for a capability
#[derive(Debug, Clone, Default, PartialEq, Record)]
pub struct Registration {
    /// Id used to unregister the request again
    #[wire(key = "id")]
    pub id: String,
    /// Method or capability to register for
    #[wire(key = "method")]
    pub method: String,
    #[wire(key = "registerOptions")]
    pub register_options: Option<LspAny>,
}

impl Registration {
    pub fn new(id: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            method: method.into(),
            register_options: None,
        }
    }

    pub fn with_options(mut self, options: LspAny) -> Self {
        self.register_options = Some(options);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Record)]
pub struct RegistrationParams {
    #[wire(key = "registrations")]
    pub registrations: Vec<Registration>,
}

/// General parameters to unregister a capability
#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct Unregistration {
    #[wire(key = "id")]
    pub id: String,
    #[wire(key = "method")]
    pub method: String,
}

/// Params of `client/unregisterCapability`
///
/// The wire key keeps the protocol's historical spelling `unregisterations`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct UnregistrationParams {
    #[wire(key = "unregisterations")]
    pub unregistrations: Vec<Unregistration>,
}

/// Static registration options; `id` lets the request be unregistered later
#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct StaticRegistrationOptions {
    #[wire(key = "id")]
    pub id: Option<String>,
}

/// `null` selects the document selector provided by the client; the key
/// itself is required
#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct TextDocumentRegistrationOptions {
    #[wire(key = "documentSelector", required)]
    pub document_selector: Option<DocumentSelector>,
}
