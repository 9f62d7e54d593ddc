//! Basic JSON structures
//!
//! Documents, positions and ranges, text edits, diagnostics, commands, markup,
//! resource operations and workspace edits.
//!
//! # Variant order
//!
//! Several fields hold untagged unions whose alternatives overlap, because a
//! record decoder ignores keys it does not declare. In each case the
//! alternative with more required keys is declared first:
//!
//! - [`AnyTextEdit`]: `AnnotatedTextEdit` before `TextEdit`
//! - [`DocumentChanges`]: plain edit list before the mixed operation list
//! - [`WorkDoneProgress`]: begin, report, end are kept apart by their `kind`
//!   constant

use crate::base::{Integer, LspAny, ProgressToken, UInteger};
use lspwire_core::wire_enum;
use lspwire_macros::{Record, Variant};
use std::collections::BTreeMap;

/// Document URI, e.g. `file:///home/user/main.rs`
pub type DocumentUri = String;

/// Any URI
pub type Uri = String;

/// Identifier of a [`ChangeAnnotation`] inside a [`WorkspaceEdit`]
pub type ChangeAnnotationIdentifier = String;

/// Client capabilities for regular expressions
#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct RegularExpressionsClientCapabilities {
    #[wire(key = "engine")]
    pub engine: String,
    #[wire(key = "version")]
    pub version: Option<String>,
}

/// Zero-based line and character offset in a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Record)]
pub struct Position {
    #[wire(key = "line")]
    pub line: UInteger,
    #[wire(key = "character")]
    pub character: UInteger,
}

impl Position {
    pub fn new(line: UInteger, character: UInteger) -> Self {
        Self { line, character }
    }
}

/// Half-open range between two positions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Record)]
pub struct Range {
    #[wire(key = "start")]
    pub start: Position,
    #[wire(key = "end")]
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// Document transferred from the client on open
#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct TextDocumentItem {
    #[wire(key = "uri")]
    pub uri: DocumentUri,
    #[wire(key = "languageId")]
    pub language_id: String,
    #[wire(key = "version")]
    pub version: Integer,
    #[wire(key = "text")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Record)]
pub struct TextDocumentIdentifier {
    #[wire(key = "uri")]
    pub uri: DocumentUri,
}

impl TextDocumentIdentifier {
    pub fn new(uri: impl Into<DocumentUri>) -> Self {
        Self { uri: uri.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Record)]
pub struct VersionedTextDocumentIdentifier {
    #[wire(key = "uri")]
    pub uri: DocumentUri,
    #[wire(key = "version")]
    pub version: Integer,
}

/// Document identifier whose version is `null` when the document is not open
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Record)]
pub struct OptionalVersionedTextDocumentIdentifier {
    #[wire(key = "uri")]
    pub uri: DocumentUri,
    #[wire(key = "version", nullable)]
    pub version: Option<Integer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct TextDocumentPositionParams {
    #[wire(key = "textDocument")]
    pub text_document: TextDocumentIdentifier,
    #[wire(key = "position")]
    pub position: Position,
}

/// Document filter by language, scheme and/or glob pattern
#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct DocumentFilter {
    #[wire(key = "language")]
    pub language: Option<String>,
    #[wire(key = "scheme")]
    pub scheme: Option<String>,
    #[wire(key = "pattern")]
    pub pattern: Option<String>,
}

pub type DocumentSelector = Vec<DocumentFilter>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct TextEdit {
    #[wire(key = "range")]
    pub range: Range,
    #[wire(key = "newText")]
    pub new_text: String,
}

impl TextEdit {
    pub fn new(range: Range, new_text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct ChangeAnnotation {
    #[wire(key = "label")]
    pub label: String,
    #[wire(key = "needsConfirmation")]
    pub needs_confirmation: Option<bool>,
    #[wire(key = "description")]
    pub description: Option<String>,
}

/// Text edit tied to a change annotation
#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct AnnotatedTextEdit {
    #[wire(key = "range")]
    pub range: Range,
    #[wire(key = "newText")]
    pub new_text: String,
    #[wire(key = "annotationId")]
    pub annotation_id: ChangeAnnotationIdentifier,
}

/// `TextEdit | AnnotatedTextEdit`
///
/// Every annotated edit is also a valid plain edit, so the annotated form is
/// tried first.
#[derive(Debug, Clone, PartialEq, Eq, Variant)]
#[wire(untagged)]
pub enum AnyTextEdit {
    #[wire(name = "AnnotatedTextEdit")]
    Annotated(AnnotatedTextEdit),
    #[wire(name = "TextEdit")]
    Plain(TextEdit),
}

impl From<TextEdit> for AnyTextEdit {
    fn from(edit: TextEdit) -> Self {
        AnyTextEdit::Plain(edit)
    }
}

impl From<AnnotatedTextEdit> for AnyTextEdit {
    fn from(edit: AnnotatedTextEdit) -> Self {
        AnyTextEdit::Annotated(edit)
    }
}

/// Edits to one version of one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct TextDocumentEdit {
    #[wire(key = "textDocument")]
    pub text_document: OptionalVersionedTextDocumentIdentifier,
    #[wire(key = "edits")]
    pub edits: Vec<AnyTextEdit>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Record)]
pub struct Location {
    #[wire(key = "uri")]
    pub uri: DocumentUri,
    #[wire(key = "range")]
    pub range: Range,
}

impl Location {
    pub fn new(uri: impl Into<DocumentUri>, range: Range) -> Self {
        Self {
            uri: uri.into(),
            range,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct LocationLink {
    #[wire(key = "originSelectionRange")]
    pub origin_selection_range: Option<Range>,
    #[wire(key = "targetUri")]
    pub target_uri: DocumentUri,
    #[wire(key = "targetRange")]
    pub target_range: Range,
    #[wire(key = "targetSelectionRange")]
    pub target_selection_range: Range,
}

wire_enum! {
    pub enum DiagnosticSeverity {
        Error = 1,
        Warning = 2,
        Information = 3,
        Hint = 4,
    }
}

wire_enum! {
    pub enum DiagnosticTag {
        /// Unused or unnecessary code
        Unnecessary = 1,
        Deprecated = 2,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct CodeDescription {
    #[wire(key = "href")]
    pub href: Uri,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct DiagnosticRelatedInformation {
    #[wire(key = "location")]
    pub location: Location,
    #[wire(key = "message")]
    pub message: String,
}

/// `integer | string` diagnostic code
pub type DiagnosticCode = crate::base::NumberOrString;

#[derive(Debug, Clone, Default, PartialEq, Record)]
pub struct Diagnostic {
    #[wire(key = "range")]
    pub range: Range,
    #[wire(key = "severity")]
    pub severity: Option<DiagnosticSeverity>,
    #[wire(key = "code")]
    pub code: Option<DiagnosticCode>,
    #[wire(key = "codeDescription")]
    pub code_description: Option<CodeDescription>,
    #[wire(key = "source")]
    pub source: Option<String>,
    #[wire(key = "message")]
    pub message: String,
    #[wire(key = "tags")]
    pub tags: Option<Vec<DiagnosticTag>>,
    #[wire(key = "relatedInformation")]
    pub related_information: Option<Vec<DiagnosticRelatedInformation>>,
    #[wire(key = "data")]
    pub data: Option<LspAny>,
}

impl Diagnostic {
    pub fn new(range: Range, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_severity(mut self, severity: DiagnosticSeverity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn with_code(mut self, code: impl Into<DiagnosticCode>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// Reference to a command the client can run
#[derive(Debug, Clone, Default, PartialEq, Record)]
pub struct Command {
    #[wire(key = "title")]
    pub title: String,
    #[wire(key = "command")]
    pub command: String,
    #[wire(key = "arguments")]
    pub arguments: Option<Vec<LspAny>>,
}

wire_enum! {
    pub enum MarkupKind {
        PlainText = "plaintext",
        Markdown = "markdown",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct MarkupContent {
    #[wire(key = "kind")]
    pub kind: MarkupKind,
    #[wire(key = "value")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct CreateFileOptions {
    #[wire(key = "overwrite")]
    pub overwrite: Option<bool>,
    #[wire(key = "ignoreIfExists")]
    pub ignore_if_exists: Option<bool>,
}

/// Create file operation; `"kind": "create"` on the wire
#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
#[wire(constant(key = "kind", value = "create"))]
pub struct CreateFile {
    #[wire(key = "uri")]
    pub uri: DocumentUri,
    #[wire(key = "options")]
    pub options: Option<CreateFileOptions>,
    #[wire(key = "annotationId")]
    pub annotation_id: Option<ChangeAnnotationIdentifier>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct RenameFileOptions {
    #[wire(key = "overwrite")]
    pub overwrite: Option<bool>,
    #[wire(key = "ignoreIfExists")]
    pub ignore_if_exists: Option<bool>,
}

/// Rename file operation; `"kind": "rename"` on the wire
#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
#[wire(constant(key = "kind", value = "rename"))]
pub struct RenameFile {
    #[wire(key = "oldUri")]
    pub old_uri: DocumentUri,
    #[wire(key = "newUri")]
    pub new_uri: DocumentUri,
    #[wire(key = "options")]
    pub options: Option<RenameFileOptions>,
    #[wire(key = "annotationId")]
    pub annotation_id: Option<ChangeAnnotationIdentifier>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct DeleteFileOptions {
    #[wire(key = "recursive")]
    pub recursive: Option<bool>,
    #[wire(key = "ignoreIfNotExists")]
    pub ignore_if_not_exists: Option<bool>,
}

/// Delete file operation; `"kind": "delete"` on the wire
#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
#[wire(constant(key = "kind", value = "delete"))]
pub struct DeleteFile {
    #[wire(key = "uri")]
    pub uri: DocumentUri,
    #[wire(key = "options")]
    pub options: Option<DeleteFileOptions>,
    #[wire(key = "annotationId")]
    pub annotation_id: Option<ChangeAnnotationIdentifier>,
}

/// `TextDocumentEdit | CreateFile | RenameFile | DeleteFile`
#[derive(Debug, Clone, PartialEq, Eq, Variant)]
#[wire(untagged)]
pub enum DocumentChangeOperation {
    #[wire(name = "TextDocumentEdit")]
    Edit(TextDocumentEdit),
    #[wire(name = "CreateFile")]
    Create(CreateFile),
    #[wire(name = "RenameFile")]
    Rename(RenameFile),
    #[wire(name = "DeleteFile")]
    Delete(DeleteFile),
}

/// `TextDocumentEdit[] | (TextDocumentEdit | CreateFile | RenameFile | DeleteFile)[]`
///
/// A list holding only text document edits decodes as [`DocumentChanges::Edits`].
#[derive(Debug, Clone, PartialEq, Eq, Variant)]
#[wire(untagged)]
pub enum DocumentChanges {
    #[wire(name = "TextDocumentEdit[]")]
    Edits(Vec<TextDocumentEdit>),
    #[wire(name = "DocumentChangeOperation[]")]
    Operations(Vec<DocumentChangeOperation>),
}

/// Changes to many resources managed in the workspace
#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct WorkspaceEdit {
    #[wire(key = "changes")]
    pub changes: Option<BTreeMap<DocumentUri, Vec<TextEdit>>>,
    #[wire(key = "documentChanges")]
    pub document_changes: Option<DocumentChanges>,
    #[wire(key = "changeAnnotations")]
    pub change_annotations: Option<BTreeMap<ChangeAnnotationIdentifier, ChangeAnnotation>>,
}

wire_enum! {
    pub enum ResourceOperationKind {
        Create = "create",
        Rename = "rename",
        Delete = "delete",
    }
}

wire_enum! {
    pub enum FailureHandlingKind {
        Abort = "abort",
        Transactional = "transactional",
        Undo = "undo",
        TextOnlyTransactional = "textOnlyTransactional",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct ChangeAnnotationSupport {
    #[wire(key = "groupsOnLabel")]
    pub groups_on_label: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct WorkspaceEditClientCapabilities {
    #[wire(key = "documentChanges")]
    pub document_changes: Option<bool>,
    #[wire(key = "resourceOperations")]
    pub resource_operations: Option<Vec<ResourceOperationKind>>,
    #[wire(key = "failureHandling")]
    pub failure_handling: Option<FailureHandlingKind>,
    #[wire(key = "normalizesLineEndings")]
    pub normalizes_line_endings: Option<bool>,
    #[wire(key = "changeAnnotationSupport")]
    pub change_annotation_support: Option<ChangeAnnotationSupport>,
}

/// Start of a work done progress stream; `"kind": "begin"`
#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
#[wire(constant(key = "kind", value = "begin"))]
pub struct WorkDoneProgressBegin {
    #[wire(key = "title")]
    pub title: String,
    #[wire(key = "cancellable")]
    pub cancellable: Option<bool>,
    #[wire(key = "message")]
    pub message: Option<String>,
    #[wire(key = "percentage")]
    pub percentage: Option<UInteger>,
}

/// Intermediate progress report; `"kind": "report"`
#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
#[wire(constant(key = "kind", value = "report"))]
pub struct WorkDoneProgressReport {
    #[wire(key = "cancellable")]
    pub cancellable: Option<bool>,
    #[wire(key = "message")]
    pub message: Option<String>,
    #[wire(key = "percentage")]
    pub percentage: Option<UInteger>,
}

/// End of a work done progress stream; `"kind": "end"`
#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
#[wire(constant(key = "kind", value = "end"))]
pub struct WorkDoneProgressEnd {
    #[wire(key = "message")]
    pub message: Option<String>,
}

/// Value carried by `$/progress` for work done progress
#[derive(Debug, Clone, PartialEq, Eq, Variant)]
#[wire(untagged)]
pub enum WorkDoneProgress {
    #[wire(name = "WorkDoneProgressBegin")]
    Begin(WorkDoneProgressBegin),
    #[wire(name = "WorkDoneProgressReport")]
    Report(WorkDoneProgressReport),
    #[wire(name = "WorkDoneProgressEnd")]
    End(WorkDoneProgressEnd),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct WorkDoneProgressParams {
    #[wire(key = "workDoneToken")]
    pub work_done_token: Option<ProgressToken>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct WorkDoneProgressOptions {
    #[wire(key = "workDoneProgress")]
    pub work_done_progress: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Record)]
pub struct PartialResultParams {
    #[wire(key = "partialResultToken")]
    pub partial_result_token: Option<ProgressToken>,
}

wire_enum! {
    pub enum TraceValue {
        Off = "off",
        Messages = "messages",
        Verbose = "verbose",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lspwire_core::{from_value, json, to_value, DecodeErrorKind, Value};

    fn edit(line: u32, text: &str) -> TextEdit {
        TextEdit::new(
            Range::new(Position::new(line, 0), Position::new(line, 3)),
            text,
        )
    }

    #[test]
    fn test_position_wire_keys() {
        let value = to_value(&Position::new(3, 7));
        assert_eq!(value.to_string(), r#"{"line":3,"character":7}"#);
    }

    #[test]
    fn test_text_document_item_camel_case() {
        let item = TextDocumentItem {
            uri: "file:///a.rs".into(),
            language_id: "rust".into(),
            version: 1,
            text: "fn main() {}".into(),
        };
        let value = to_value(&item);
        assert!(value.get("languageId").is_some());
        assert!(value.get("language_id").is_none());
        assert_eq!(from_value::<TextDocumentItem>(&value).unwrap(), item);
    }

    #[test]
    fn test_optional_version_is_written_as_null() {
        let id = OptionalVersionedTextDocumentIdentifier {
            uri: "file:///a".into(),
            version: None,
        };
        assert_eq!(
            to_value(&id).to_string(),
            r#"{"uri":"file:///a","version":null}"#
        );
    }

    #[test]
    fn test_annotated_edit_is_preferred() {
        let value = json::from_str(
            r#"{"range":{"start":{"line":0,"character":0},"end":{"line":0,"character":1}},
                "newText":"x","annotationId":"a1"}"#,
        )
        .unwrap();
        match from_value::<AnyTextEdit>(&value).unwrap() {
            AnyTextEdit::Annotated(edit) => assert_eq!(edit.annotation_id, "a1"),
            other => panic!("Expected annotated edit, got {other:?}"),
        }

        let plain = to_value(&edit(0, "y"));
        assert!(matches!(
            from_value::<AnyTextEdit>(&plain).unwrap(),
            AnyTextEdit::Plain(_)
        ));
    }

    #[test]
    fn test_diagnostic_omits_absent_fields() {
        let diagnostic = Diagnostic::new(Range::default(), "unused variable")
            .with_severity(DiagnosticSeverity::Warning)
            .with_code("W001");
        let value = to_value(&diagnostic);

        assert_eq!(value.get("severity"), Some(&Value::Int(2)));
        assert_eq!(value.get("code"), Some(&Value::from("W001")));
        assert!(value.get("source").is_none());
        assert!(value.get("tags").is_none());
        assert_eq!(from_value::<Diagnostic>(&value).unwrap(), diagnostic);
    }

    #[test]
    fn test_diagnostic_bad_severity_path() {
        let value = json::from_str(
            r#"{"range":{"start":{"line":0,"character":0},"end":{"line":0,"character":0}},
                "message":"m","severity":9}"#,
        )
        .unwrap();
        let err = from_value::<Diagnostic>(&value).unwrap_err();
        assert_eq!(err.path().to_string(), "$.severity");
        assert!(matches!(err.kind(), DecodeErrorKind::InvalidValue(_)));
    }

    #[test]
    fn test_markup_content() {
        let content = MarkupContent {
            kind: MarkupKind::Markdown,
            value: "# Title".into(),
        };
        let value = to_value(&content);
        assert_eq!(value.to_string(), r##"{"kind":"markdown","value":"# Title"}"##);
        assert_eq!(from_value::<MarkupContent>(&value).unwrap(), content);
    }

    #[test]
    fn test_resource_operations_are_told_apart_by_kind() {
        let ops = vec![
            DocumentChangeOperation::Create(CreateFile {
                uri: "file:///new".into(),
                ..Default::default()
            }),
            DocumentChangeOperation::Delete(DeleteFile {
                uri: "file:///old".into(),
                options: Some(DeleteFileOptions {
                    recursive: Some(true),
                    ignore_if_not_exists: None,
                }),
                annotation_id: None,
            }),
            DocumentChangeOperation::Rename(RenameFile {
                old_uri: "file:///a".into(),
                new_uri: "file:///b".into(),
                ..Default::default()
            }),
        ];
        let value = to_value(&ops);
        assert_eq!(
            value.as_array().unwrap()[1].to_string(),
            r#"{"kind":"delete","uri":"file:///old","options":{"recursive":true}}"#
        );
        assert_eq!(from_value::<Vec<DocumentChangeOperation>>(&value).unwrap(), ops);
    }

    #[test]
    fn test_workspace_edit_document_changes() {
        let text_edit = TextDocumentEdit {
            text_document: OptionalVersionedTextDocumentIdentifier {
                uri: "file:///a".into(),
                version: Some(4),
            },
            edits: vec![edit(1, "abc").into()],
        };

        let only_edits = WorkspaceEdit {
            document_changes: Some(DocumentChanges::Edits(vec![text_edit.clone()])),
            ..Default::default()
        };
        let value = to_value(&only_edits);
        assert_eq!(from_value::<WorkspaceEdit>(&value).unwrap(), only_edits);

        let mixed = WorkspaceEdit {
            document_changes: Some(DocumentChanges::Operations(vec![
                DocumentChangeOperation::Edit(text_edit),
                DocumentChangeOperation::Create(CreateFile {
                    uri: "file:///b".into(),
                    ..Default::default()
                }),
            ])),
            ..Default::default()
        };
        let value = to_value(&mixed);
        assert_eq!(from_value::<WorkspaceEdit>(&value).unwrap(), mixed);
    }

    #[test]
    fn test_workspace_edit_changes_map() {
        let mut changes = BTreeMap::new();
        changes.insert("file:///z".to_string(), vec![edit(0, "z")]);
        changes.insert("file:///a".to_string(), vec![]);
        let workspace_edit = WorkspaceEdit {
            changes: Some(changes),
            ..Default::default()
        };
        let text = json::to_string(&to_value(&workspace_edit)).unwrap();
        assert!(text.starts_with(r#"{"changes":{"file:///a":[],"file:///z":"#));
    }

    #[test]
    fn test_work_done_progress_kinds() {
        let begin = WorkDoneProgress::Begin(WorkDoneProgressBegin {
            title: "Indexing".into(),
            percentage: Some(0),
            ..Default::default()
        });
        let report = WorkDoneProgress::Report(WorkDoneProgressReport {
            percentage: Some(50),
            ..Default::default()
        });
        let end = WorkDoneProgress::End(WorkDoneProgressEnd::default());

        assert_eq!(to_value(&end).to_string(), r#"{"kind":"end"}"#);
        for progress in [begin, report, end] {
            let value = to_value(&progress);
            assert_eq!(from_value::<WorkDoneProgress>(&value).unwrap(), progress);
        }
    }

    #[test]
    fn test_enumerations() {
        assert_eq!(to_value(&TraceValue::Messages), Value::from("messages"));
        assert_eq!(
            from_value::<FailureHandlingKind>(&Value::from("textOnlyTransactional")).unwrap(),
            FailureHandlingKind::TextOnlyTransactional
        );
        assert_eq!(to_value(&DiagnosticTag::Deprecated), Value::Int(2));
    }
}
