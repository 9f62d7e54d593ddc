//! The `initialize` handshake
//!
//! The client opens a session with an `initialize` request carrying
//! [`InitializeParams`] and its [`ClientCapabilities`]; the server answers with
//! an [`InitializeResult`] listing its [`ServerCapabilities`].
//!
//! # Providers
//!
//! Most server capabilities are `boolean | XOptions` or
//! `boolean | XOptions | XRegistrationOptions`. Each is an untagged variant
//! declared by `provider!`:
//!
//! 1. `Enabled(bool)`
//! 2. `Registration(XRegistrationOptions)`, when the capability has one
//! 3. `Options(XOptions)`
//!
//! Registration options carry a required `documentSelector` key (its value may
//! be `null`) that plain options never have, so an options object falls
//! through to the last alternative.
//!
//! # Capability sub-trees
//!
//! Client capabilities this catalog does not declare (completion, hover,
//! semantic tokens and the like) are kept as [`LspAny`] so they round-trip
//! untouched.

use crate::base::{Integer, LspAny, ProgressToken};
use crate::basic::{
    DocumentSelector, DocumentUri, RegularExpressionsClientCapabilities, TraceValue, Uri,
    WorkspaceEditClientCapabilities,
};
use crate::error::ResponseError;
use crate::navigation::{
    DeclarationClientCapabilities, DeclarationOptions, DeclarationRegistrationOptions,
    DefinitionClientCapabilities, DefinitionOptions, ImplementationClientCapabilities,
    ImplementationOptions, ImplementationRegistrationOptions, ReferenceClientCapabilities,
    ReferenceOptions, TypeDefinitionClientCapabilities, TypeDefinitionOptions,
    TypeDefinitionRegistrationOptions,
};
use crate::text_document::{
    TextDocumentSyncClientCapabilities, TextDocumentSyncKind, TextDocumentSyncOptions,
};
use lspwire_core::{wire_enum, Value};
use lspwire_macros::{Record, Variant};

/// `InitializeErrorCodes.unknownProtocolVersion`
pub const UNKNOWN_PROTOCOL_VERSION: Integer = 1;

wire_enum! {
    /// Encoding of `Position.character`; UTF-16 unless both sides agree otherwise
    pub enum PositionEncodingKind {
        Utf16 = "utf-16",
        Utf8 = "utf-8",
        Utf32 = "utf-32",
    }
}

wire_enum! {
    pub enum FileOperationPatternKind {
        File = "file",
        Folder = "folder",
    }
}

macro_rules! dynamic_registration_capabilities {
    ($($(#[$doc:meta])* $name:ident;)*) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
            pub struct $name {
                #[wire(key = "dynamicRegistration")]
                pub dynamic_registration: Option<bool>,
            }
        )*
    };
}

macro_rules! refresh_capabilities {
    ($($(#[$doc:meta])* $name:ident;)*) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
            pub struct $name {
                /// Client supports the server asking for a refresh
                #[wire(key = "refreshSupport")]
                pub refresh_support: Option<bool>,
            }
        )*
    };
}

macro_rules! work_done_options {
    ($($(#[$doc:meta])* $name:ident;)*) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
            pub struct $name {
                #[wire(key = "workDoneProgress")]
                pub work_done_progress: Option<bool>,
            }
        )*
    };
}

macro_rules! registration_options {
    ($($(#[$doc:meta])* $name:ident;)*) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
            pub struct $name {
                #[wire(key = "documentSelector", required)]
                pub document_selector: Option<DocumentSelector>,
                #[wire(key = "workDoneProgress")]
                pub work_done_progress: Option<bool>,
                #[wire(key = "id")]
                pub id: Option<String>,
            }
        )*
    };
}

macro_rules! provider {
    ($(#[$doc:meta])* $name:ident($options:ident)) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Variant)]
        #[wire(untagged)]
        pub enum $name {
            #[wire(name = "boolean")]
            Enabled(bool),
            #[wire(name = "options")]
            Options($options),
        }

        impl From<bool> for $name {
            fn from(enabled: bool) -> Self {
                $name::Enabled(enabled)
            }
        }
    };
    ($(#[$doc:meta])* $name:ident($options:ident, $registration:ident)) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Variant)]
        #[wire(untagged)]
        pub enum $name {
            #[wire(name = "boolean")]
            Enabled(bool),
            #[wire(name = "registration options")]
            Registration($registration),
            #[wire(name = "options")]
            Options($options),
        }

        impl From<bool> for $name {
            fn from(enabled: bool) -> Self {
                $name::Enabled(enabled)
            }
        }
    };
}

// Client capabilities

dynamic_registration_capabilities! {
    DidChangeConfigurationClientCapabilities;
    ExecuteCommandClientCapabilities;
    DocumentHighlightClientCapabilities;
    DocumentColorClientCapabilities;
    DocumentFormattingClientCapabilities;
    DocumentRangeFormattingClientCapabilities;
    DocumentOnTypeFormattingClientCapabilities;
    SelectionRangeClientCapabilities;
    LinkedEditingRangeClientCapabilities;
    CallHierarchyClientCapabilities;
    MonikerClientCapabilities;
    TypeHierarchyClientCapabilities;
    InlineValueClientCapabilities;
}

refresh_capabilities! {
    SemanticTokensWorkspaceClientCapabilities;
    CodeLensWorkspaceClientCapabilities;
    InlineValueWorkspaceClientCapabilities;
    InlayHintWorkspaceClientCapabilities;
    DiagnosticWorkspaceClientCapabilities;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct DidChangeWatchedFilesClientCapabilities {
    #[wire(key = "dynamicRegistration")]
    pub dynamic_registration: Option<bool>,
    #[wire(key = "relativePatternSupport")]
    pub relative_pattern_support: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Record)]
pub struct TextDocumentClientCapabilities {
    #[wire(key = "synchronization")]
    pub synchronization: Option<TextDocumentSyncClientCapabilities>,
    #[wire(key = "completion")]
    pub completion: Option<LspAny>,
    #[wire(key = "hover")]
    pub hover: Option<LspAny>,
    #[wire(key = "signatureHelp")]
    pub signature_help: Option<LspAny>,
    #[wire(key = "declaration")]
    pub declaration: Option<DeclarationClientCapabilities>,
    #[wire(key = "definition")]
    pub definition: Option<DefinitionClientCapabilities>,
    #[wire(key = "typeDefinition")]
    pub type_definition: Option<TypeDefinitionClientCapabilities>,
    #[wire(key = "implementation")]
    pub implementation: Option<ImplementationClientCapabilities>,
    #[wire(key = "references")]
    pub references: Option<ReferenceClientCapabilities>,
    #[wire(key = "documentHighlight")]
    pub document_highlight: Option<DocumentHighlightClientCapabilities>,
    #[wire(key = "documentSymbol")]
    pub document_symbol: Option<LspAny>,
    #[wire(key = "codeAction")]
    pub code_action: Option<LspAny>,
    #[wire(key = "codeLens")]
    pub code_lens: Option<LspAny>,
    #[wire(key = "documentLink")]
    pub document_link: Option<LspAny>,
    #[wire(key = "colorProvider")]
    pub color_provider: Option<DocumentColorClientCapabilities>,
    #[wire(key = "formatting")]
    pub formatting: Option<DocumentFormattingClientCapabilities>,
    #[wire(key = "rangeFormatting")]
    pub range_formatting: Option<DocumentRangeFormattingClientCapabilities>,
    #[wire(key = "onTypeFormatting")]
    pub on_type_formatting: Option<DocumentOnTypeFormattingClientCapabilities>,
    #[wire(key = "rename")]
    pub rename: Option<LspAny>,
    #[wire(key = "publishDiagnostics")]
    pub publish_diagnostics: Option<LspAny>,
    #[wire(key = "foldingRange")]
    pub folding_range: Option<LspAny>,
    #[wire(key = "selectionRange")]
    pub selection_range: Option<SelectionRangeClientCapabilities>,
    #[wire(key = "linkedEditingRange")]
    pub linked_editing_range: Option<LinkedEditingRangeClientCapabilities>,
    #[wire(key = "callHierarchy")]
    pub call_hierarchy: Option<CallHierarchyClientCapabilities>,
    #[wire(key = "semanticTokens")]
    pub semantic_tokens: Option<LspAny>,
    #[wire(key = "moniker")]
    pub moniker: Option<MonikerClientCapabilities>,
    #[wire(key = "typeHierarchy")]
    pub type_hierarchy: Option<TypeHierarchyClientCapabilities>,
    #[wire(key = "inlineValue")]
    pub inline_value: Option<InlineValueClientCapabilities>,
    #[wire(key = "inlayHint")]
    pub inlay_hint: Option<LspAny>,
    #[wire(key = "diagnostic")]
    pub diagnostic: Option<LspAny>,
}

#[derive(Debug, Clone, Default, PartialEq, Record)]
pub struct NotebookDocumentClientCapabilities {
    #[wire(key = "synchronization")]
    pub synchronization: LspAny,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct FileOperationsClientCapabilities {
    #[wire(key = "dynamicRegistration")]
    pub dynamic_registration: Option<bool>,
    #[wire(key = "didCreate")]
    pub did_create: Option<bool>,
    #[wire(key = "willCreate")]
    pub will_create: Option<bool>,
    #[wire(key = "didRename")]
    pub did_rename: Option<bool>,
    #[wire(key = "willRename")]
    pub will_rename: Option<bool>,
    #[wire(key = "didDelete")]
    pub did_delete: Option<bool>,
    #[wire(key = "willDelete")]
    pub will_delete: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Record)]
pub struct WorkspaceClientCapabilities {
    /// Client supports `workspace/applyEdit`
    #[wire(key = "applyEdit")]
    pub apply_edit: Option<bool>,
    #[wire(key = "workspaceEdit")]
    pub workspace_edit: Option<WorkspaceEditClientCapabilities>,
    #[wire(key = "didChangeConfiguration")]
    pub did_change_configuration: Option<DidChangeConfigurationClientCapabilities>,
    #[wire(key = "didChangeWatchedFiles")]
    pub did_change_watched_files: Option<DidChangeWatchedFilesClientCapabilities>,
    #[wire(key = "symbol")]
    pub symbol: Option<LspAny>,
    #[wire(key = "executeCommand")]
    pub execute_command: Option<ExecuteCommandClientCapabilities>,
    #[wire(key = "workspaceFolders")]
    pub workspace_folders: Option<bool>,
    #[wire(key = "configuration")]
    pub configuration: Option<bool>,
    #[wire(key = "semanticTokens")]
    pub semantic_tokens: Option<SemanticTokensWorkspaceClientCapabilities>,
    #[wire(key = "codeLens")]
    pub code_lens: Option<CodeLensWorkspaceClientCapabilities>,
    #[wire(key = "fileOperations")]
    pub file_operations: Option<FileOperationsClientCapabilities>,
    #[wire(key = "inlineValue")]
    pub inline_value: Option<InlineValueWorkspaceClientCapabilities>,
    #[wire(key = "inlayHint")]
    pub inlay_hint: Option<InlayHintWorkspaceClientCapabilities>,
    #[wire(key = "diagnostics")]
    pub diagnostics: Option<DiagnosticWorkspaceClientCapabilities>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct MessageActionItemClientCapabilities {
    #[wire(key = "additionalPropertiesSupport")]
    pub additional_properties_support: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct ShowMessageRequestClientCapabilities {
    #[wire(key = "messageActionItem")]
    pub message_action_item: Option<MessageActionItemClientCapabilities>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct ShowDocumentClientCapabilities {
    #[wire(key = "support")]
    pub support: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct WindowClientCapabilities {
    #[wire(key = "workDoneProgress")]
    pub work_done_progress: Option<bool>,
    #[wire(key = "showMessage")]
    pub show_message: Option<ShowMessageRequestClientCapabilities>,
    #[wire(key = "showDocument")]
    pub show_document: Option<ShowDocumentClientCapabilities>,
}

/// How the client treats requests that went stale
#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct StaleRequestSupportClientCapabilities {
    #[wire(key = "cancel")]
    pub cancel: bool,
    /// Methods the client retries after a `ContentModified` error
    #[wire(key = "retryOnContentModified")]
    pub retry_on_content_modified: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct MarkdownClientCapabilities {
    #[wire(key = "parser")]
    pub parser: String,
    #[wire(key = "version")]
    pub version: Option<String>,
    #[wire(key = "allowedTags")]
    pub allowed_tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct GeneralClientCapabilities {
    #[wire(key = "staleRequestSupport")]
    pub stale_request_support: Option<StaleRequestSupportClientCapabilities>,
    #[wire(key = "regularExpressions")]
    pub regular_expressions: Option<RegularExpressionsClientCapabilities>,
    #[wire(key = "markdown")]
    pub markdown: Option<MarkdownClientCapabilities>,
    /// Preferred first
    #[wire(key = "positionEncodings")]
    pub position_encodings: Option<Vec<PositionEncodingKind>>,
}

#[derive(Debug, Clone, Default, PartialEq, Record)]
pub struct ClientCapabilities {
    #[wire(key = "workspace")]
    pub workspace: Option<WorkspaceClientCapabilities>,
    #[wire(key = "textDocument")]
    pub text_document: Option<TextDocumentClientCapabilities>,
    #[wire(key = "notebookDocument")]
    pub notebook_document: Option<NotebookDocumentClientCapabilities>,
    #[wire(key = "window")]
    pub window: Option<WindowClientCapabilities>,
    #[wire(key = "general")]
    pub general: Option<GeneralClientCapabilities>,
    #[wire(key = "experimental")]
    pub experimental: Option<LspAny>,
}

// Initialize request

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct ClientInfo {
    #[wire(key = "name")]
    pub name: String,
    #[wire(key = "version")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct WorkspaceFolder {
    #[wire(key = "uri")]
    pub uri: Uri,
    /// Name shown in the user interface
    #[wire(key = "name")]
    pub name: String,
}

/// `initialize` params
///
/// `processId` and `rootUri` are written as `null` when unknown. Both are
/// read leniently: a client that leaves them out decodes as `None`.
#[derive(Debug, Clone, Default, PartialEq, Record)]
pub struct InitializeParams {
    #[wire(key = "workDoneToken")]
    pub work_done_token: Option<ProgressToken>,
    #[wire(key = "processId", nullable)]
    pub process_id: Option<Integer>,
    #[wire(key = "clientInfo")]
    pub client_info: Option<ClientInfo>,
    #[wire(key = "locale")]
    pub locale: Option<String>,
    /// Superseded by `rootUri`
    #[wire(key = "rootPath")]
    pub root_path: Option<String>,
    #[wire(key = "rootUri", nullable)]
    pub root_uri: Option<DocumentUri>,
    #[wire(key = "initializationOptions")]
    pub initialization_options: Option<LspAny>,
    #[wire(key = "capabilities")]
    pub capabilities: ClientCapabilities,
    #[wire(key = "trace")]
    pub trace: Option<TraceValue>,
    #[wire(key = "workspaceFolders")]
    pub workspace_folders: Option<Vec<WorkspaceFolder>>,
}

/// `initialized` params; carries nothing
#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct InitializedParams {}

// Server capabilities

work_done_options! {
    HoverOptions;
    DocumentHighlightOptions;
    DocumentFormattingOptions;
    DocumentRangeFormattingOptions;
    DocumentColorOptions;
    FoldingRangeOptions;
    SelectionRangeOptions;
    LinkedEditingRangeOptions;
    CallHierarchyOptions;
    MonikerOptions;
    TypeHierarchyOptions;
    InlineValueOptions;
}

registration_options! {
    DocumentColorRegistrationOptions;
    FoldingRangeRegistrationOptions;
    SelectionRangeRegistrationOptions;
    LinkedEditingRangeRegistrationOptions;
    CallHierarchyRegistrationOptions;
    MonikerRegistrationOptions;
    TypeHierarchyRegistrationOptions;
    InlineValueRegistrationOptions;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct CompletionOptions {
    #[wire(key = "workDoneProgress")]
    pub work_done_progress: Option<bool>,
    #[wire(key = "triggerCharacters")]
    pub trigger_characters: Option<Vec<String>>,
    #[wire(key = "allCommitCharacters")]
    pub all_commit_characters: Option<Vec<String>>,
    #[wire(key = "resolveProvider")]
    pub resolve_provider: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct SignatureHelpOptions {
    #[wire(key = "workDoneProgress")]
    pub work_done_progress: Option<bool>,
    #[wire(key = "triggerCharacters")]
    pub trigger_characters: Option<Vec<String>>,
    #[wire(key = "retriggerCharacters")]
    pub retrigger_characters: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct DocumentSymbolOptions {
    #[wire(key = "workDoneProgress")]
    pub work_done_progress: Option<bool>,
    /// Shown when a client displays several outlines for one document
    #[wire(key = "label")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct CodeActionOptions {
    #[wire(key = "workDoneProgress")]
    pub work_done_progress: Option<bool>,
    #[wire(key = "codeActionKinds")]
    pub code_action_kinds: Option<Vec<String>>,
    #[wire(key = "resolveProvider")]
    pub resolve_provider: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct CodeLensOptions {
    #[wire(key = "workDoneProgress")]
    pub work_done_progress: Option<bool>,
    #[wire(key = "resolveProvider")]
    pub resolve_provider: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct DocumentLinkOptions {
    #[wire(key = "workDoneProgress")]
    pub work_done_progress: Option<bool>,
    #[wire(key = "resolveProvider")]
    pub resolve_provider: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct DocumentOnTypeFormattingOptions {
    #[wire(key = "firstTriggerCharacter")]
    pub first_trigger_character: String,
    #[wire(key = "moreTriggerCharacter")]
    pub more_trigger_character: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct RenameOptions {
    #[wire(key = "workDoneProgress")]
    pub work_done_progress: Option<bool>,
    /// Server supports `textDocument/prepareRename`
    #[wire(key = "prepareProvider")]
    pub prepare_provider: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct ExecuteCommandOptions {
    #[wire(key = "workDoneProgress")]
    pub work_done_progress: Option<bool>,
    #[wire(key = "commands")]
    pub commands: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct InlayHintOptions {
    #[wire(key = "workDoneProgress")]
    pub work_done_progress: Option<bool>,
    #[wire(key = "resolveProvider")]
    pub resolve_provider: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct InlayHintRegistrationOptions {
    #[wire(key = "documentSelector", required)]
    pub document_selector: Option<DocumentSelector>,
    #[wire(key = "workDoneProgress")]
    pub work_done_progress: Option<bool>,
    #[wire(key = "resolveProvider")]
    pub resolve_provider: Option<bool>,
    #[wire(key = "id")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct WorkspaceSymbolOptions {
    #[wire(key = "workDoneProgress")]
    pub work_done_progress: Option<bool>,
    #[wire(key = "resolveProvider")]
    pub resolve_provider: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct DiagnosticOptions {
    #[wire(key = "workDoneProgress")]
    pub work_done_progress: Option<bool>,
    #[wire(key = "identifier")]
    pub identifier: Option<String>,
    /// Diagnostics of one document can change when another changes
    #[wire(key = "interFileDependencies")]
    pub inter_file_dependencies: bool,
    #[wire(key = "workspaceDiagnostics")]
    pub workspace_diagnostics: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct DiagnosticRegistrationOptions {
    #[wire(key = "documentSelector", required)]
    pub document_selector: Option<DocumentSelector>,
    #[wire(key = "workDoneProgress")]
    pub work_done_progress: Option<bool>,
    #[wire(key = "identifier")]
    pub identifier: Option<String>,
    #[wire(key = "interFileDependencies")]
    pub inter_file_dependencies: bool,
    #[wire(key = "workspaceDiagnostics")]
    pub workspace_diagnostics: bool,
    #[wire(key = "id")]
    pub id: Option<String>,
}

/// `DiagnosticOptions | DiagnosticRegistrationOptions`
#[derive(Debug, Clone, PartialEq, Eq, Variant)]
#[wire(untagged)]
pub enum DiagnosticProvider {
    #[wire(name = "registration options")]
    Registration(DiagnosticRegistrationOptions),
    #[wire(name = "options")]
    Options(DiagnosticOptions),
}

/// `TextDocumentSyncOptions | TextDocumentSyncKind`
#[derive(Debug, Clone, PartialEq, Eq, Variant)]
#[wire(untagged)]
pub enum TextDocumentSync {
    #[wire(name = "options")]
    Options(TextDocumentSyncOptions),
    #[wire(name = "kind")]
    Kind(TextDocumentSyncKind),
}

impl From<TextDocumentSyncKind> for TextDocumentSync {
    fn from(kind: TextDocumentSyncKind) -> Self {
        TextDocumentSync::Kind(kind)
    }
}

provider!(HoverProvider(HoverOptions));
provider!(DefinitionProvider(DefinitionOptions));
provider!(ReferencesProvider(ReferenceOptions));
provider!(DocumentHighlightProvider(DocumentHighlightOptions));
provider!(DocumentSymbolProvider(DocumentSymbolOptions));
provider!(CodeActionProvider(CodeActionOptions));
provider!(DocumentFormattingProvider(DocumentFormattingOptions));
provider!(DocumentRangeFormattingProvider(DocumentRangeFormattingOptions));
provider!(RenameProvider(RenameOptions));
provider!(WorkspaceSymbolProvider(WorkspaceSymbolOptions));
provider!(DeclarationProvider(DeclarationOptions, DeclarationRegistrationOptions));
provider!(TypeDefinitionProvider(TypeDefinitionOptions, TypeDefinitionRegistrationOptions));
provider!(ImplementationProvider(ImplementationOptions, ImplementationRegistrationOptions));
provider!(ColorProvider(DocumentColorOptions, DocumentColorRegistrationOptions));
provider!(FoldingRangeProvider(FoldingRangeOptions, FoldingRangeRegistrationOptions));
provider!(SelectionRangeProvider(SelectionRangeOptions, SelectionRangeRegistrationOptions));
provider!(LinkedEditingRangeProvider(LinkedEditingRangeOptions, LinkedEditingRangeRegistrationOptions));
provider!(CallHierarchyProvider(CallHierarchyOptions, CallHierarchyRegistrationOptions));
provider!(MonikerProvider(MonikerOptions, MonikerRegistrationOptions));
provider!(TypeHierarchyProvider(TypeHierarchyOptions, TypeHierarchyRegistrationOptions));
provider!(InlineValueProvider(InlineValueOptions, InlineValueRegistrationOptions));
provider!(InlayHintProvider(InlayHintOptions, InlayHintRegistrationOptions));

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct FileOperationPatternOptions {
    #[wire(key = "ignoreCase")]
    pub ignore_case: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct FileOperationPattern {
    #[wire(key = "glob")]
    pub glob: String,
    /// Both files and folders when absent
    #[wire(key = "matches")]
    pub matches: Option<FileOperationPatternKind>,
    #[wire(key = "options")]
    pub options: Option<FileOperationPatternOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct FileOperationFilter {
    #[wire(key = "scheme")]
    pub scheme: Option<String>,
    #[wire(key = "pattern")]
    pub pattern: FileOperationPattern,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct FileOperationRegistrationOptions {
    #[wire(key = "filters")]
    pub filters: Vec<FileOperationFilter>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct FileOperationServerCapabilities {
    #[wire(key = "didCreate")]
    pub did_create: Option<FileOperationRegistrationOptions>,
    #[wire(key = "willCreate")]
    pub will_create: Option<FileOperationRegistrationOptions>,
    #[wire(key = "didRename")]
    pub did_rename: Option<FileOperationRegistrationOptions>,
    #[wire(key = "willRename")]
    pub will_rename: Option<FileOperationRegistrationOptions>,
    #[wire(key = "didDelete")]
    pub did_delete: Option<FileOperationRegistrationOptions>,
    #[wire(key = "willDelete")]
    pub will_delete: Option<FileOperationRegistrationOptions>,
}

/// `string | boolean`; a string is the registration id used to unregister
#[derive(Debug, Clone, PartialEq, Eq, Variant)]
#[wire(untagged)]
pub enum ChangeNotifications {
    #[wire(name = "registration id")]
    Id(String),
    #[wire(name = "boolean")]
    Enabled(bool),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct WorkspaceFoldersServerCapabilities {
    #[wire(key = "supported")]
    pub supported: Option<bool>,
    #[wire(key = "changeNotifications")]
    pub change_notifications: Option<ChangeNotifications>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct WorkspaceServerCapabilities {
    #[wire(key = "workspaceFolders")]
    pub workspace_folders: Option<WorkspaceFoldersServerCapabilities>,
    #[wire(key = "fileOperations")]
    pub file_operations: Option<FileOperationServerCapabilities>,
}

/// Capabilities the server announces in its `initialize` result
///
/// Every member is optional; an absent provider means the feature is not
/// supported.
#[derive(Debug, Clone, Default, PartialEq, Record)]
pub struct ServerCapabilities {
    #[wire(key = "positionEncoding")]
    pub position_encoding: Option<PositionEncodingKind>,
    #[wire(key = "textDocumentSync")]
    pub text_document_sync: Option<TextDocumentSync>,
    #[wire(key = "notebookDocumentSync")]
    pub notebook_document_sync: Option<LspAny>,
    #[wire(key = "completionProvider")]
    pub completion_provider: Option<CompletionOptions>,
    #[wire(key = "hoverProvider")]
    pub hover_provider: Option<HoverProvider>,
    #[wire(key = "signatureHelpProvider")]
    pub signature_help_provider: Option<SignatureHelpOptions>,
    #[wire(key = "declarationProvider")]
    pub declaration_provider: Option<DeclarationProvider>,
    #[wire(key = "definitionProvider")]
    pub definition_provider: Option<DefinitionProvider>,
    #[wire(key = "typeDefinitionProvider")]
    pub type_definition_provider: Option<TypeDefinitionProvider>,
    #[wire(key = "implementationProvider")]
    pub implementation_provider: Option<ImplementationProvider>,
    #[wire(key = "referencesProvider")]
    pub references_provider: Option<ReferencesProvider>,
    #[wire(key = "documentHighlightProvider")]
    pub document_highlight_provider: Option<DocumentHighlightProvider>,
    #[wire(key = "documentSymbolProvider")]
    pub document_symbol_provider: Option<DocumentSymbolProvider>,
    #[wire(key = "codeActionProvider")]
    pub code_action_provider: Option<CodeActionProvider>,
    #[wire(key = "codeLensProvider")]
    pub code_lens_provider: Option<CodeLensOptions>,
    #[wire(key = "documentLinkProvider")]
    pub document_link_provider: Option<DocumentLinkOptions>,
    #[wire(key = "colorProvider")]
    pub color_provider: Option<ColorProvider>,
    #[wire(key = "documentFormattingProvider")]
    pub document_formatting_provider: Option<DocumentFormattingProvider>,
    #[wire(key = "documentRangeFormattingProvider")]
    pub document_range_formatting_provider: Option<DocumentRangeFormattingProvider>,
    #[wire(key = "documentOnTypeFormattingProvider")]
    pub document_on_type_formatting_provider: Option<DocumentOnTypeFormattingOptions>,
    #[wire(key = "renameProvider")]
    pub rename_provider: Option<RenameProvider>,
    #[wire(key = "foldingRangeProvider")]
    pub folding_range_provider: Option<FoldingRangeProvider>,
    #[wire(key = "executeCommandProvider")]
    pub execute_command_provider: Option<ExecuteCommandOptions>,
    #[wire(key = "selectionRangeProvider")]
    pub selection_range_provider: Option<SelectionRangeProvider>,
    #[wire(key = "linkedEditingRangeProvider")]
    pub linked_editing_range_provider: Option<LinkedEditingRangeProvider>,
    #[wire(key = "callHierarchyProvider")]
    pub call_hierarchy_provider: Option<CallHierarchyProvider>,
    #[wire(key = "semanticTokensProvider")]
    pub semantic_tokens_provider: Option<LspAny>,
    #[wire(key = "monikerProvider")]
    pub moniker_provider: Option<MonikerProvider>,
    #[wire(key = "typeHierarchyProvider")]
    pub type_hierarchy_provider: Option<TypeHierarchyProvider>,
    #[wire(key = "inlineValueProvider")]
    pub inline_value_provider: Option<InlineValueProvider>,
    #[wire(key = "inlayHintProvider")]
    pub inlay_hint_provider: Option<InlayHintProvider>,
    #[wire(key = "diagnosticProvider")]
    pub diagnostic_provider: Option<DiagnosticProvider>,
    #[wire(key = "workspaceSymbolProvider")]
    pub workspace_symbol_provider: Option<WorkspaceSymbolProvider>,
    #[wire(key = "workspace")]
    pub workspace: Option<WorkspaceServerCapabilities>,
    #[wire(key = "experimental")]
    pub experimental: Option<LspAny>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct ServerInfo {
    #[wire(key = "name")]
    pub name: String,
    #[wire(key = "version")]
    pub version: Option<String>,
}

/// `initialize` result
#[derive(Debug, Clone, Default, PartialEq, Record)]
pub struct InitializeResult {
    #[wire(key = "capabilities")]
    pub capabilities: ServerCapabilities,
    #[wire(key = "serverInfo")]
    pub server_info: Option<ServerInfo>,
}

/// `data` of an `initialize` error response
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Record)]
pub struct InitializeError {
    /// Client may retry after showing the error message to the user
    #[wire(key = "retry")]
    pub retry: bool,
}

impl From<InitializeError> for ResponseError {
    fn from(error: InitializeError) -> Self {
        ResponseError::with_data(
            UNKNOWN_PROTOCOL_VERSION,
            "Unknown protocol version",
            Value::from_iter([("retry".to_string(), Value::Bool(error.retry))]),
        )
    }
}
