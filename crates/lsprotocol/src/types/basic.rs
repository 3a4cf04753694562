//! Structures shared by most requests: positions, locations, edits,
//! diagnostics and document filters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::base::{
    ChangeAnnotationIdentifier, CreateKind, DeleteKind, DocumentUri, LspAny, Pattern,
    RenameKind, SnippetKind, Uri,
};
use super::enums::{DiagnosticSeverity, DiagnosticTag, LanguageKind, MarkupKind};

lsp_union! {
    /// A token reporting progress for a request, chosen by the sender.
    #[derive(Eq, Hash)]
    pub enum ProgressToken {
        /// Integer token.
        Integer(i32),
        /// String token.
        String(String),
    }
}

lsp_union! {
    /// An integer or a string, as used by diagnostic codes.
    #[derive(Eq, Hash)]
    pub enum IntegerOrString {
        /// Integer value.
        Integer(i32),
        /// String value.
        String(String),
    }
}

/// A zero-based position in a text document.
///
/// `character` counts code units in the negotiated position encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Line position in a document, zero-based.
    pub line: u32,
    /// Character offset on a line, zero-based.
    pub character: u32,
}

impl Position {
    /// Builds a position from a line and character offset.
    #[must_use]
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// A range in a text document, end-exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    /// Start position, inclusive.
    pub start: Position,
    /// End position, exclusive.
    pub end: Position,
}

impl Range {
    /// Builds a range from its bounds.
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// A location inside a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Resource holding the range.
    pub uri: DocumentUri,
    /// Range inside the resource.
    pub range: Range,
}

impl Location {
    /// Builds a location.
    #[must_use]
    pub const fn new(uri: DocumentUri, range: Range) -> Self {
        Self { uri, range }
    }
}

/// A link between a source and a target location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationLink {
    /// Span of the origin of this link, used for highlighting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_selection_range: Option<Range>,
    /// The target resource identifier.
    pub target_uri: DocumentUri,
    /// Full target range, for example a whole function body.
    pub target_range: Range,
    /// Range to select and reveal when following the link.
    pub target_selection_range: Range,
}

/// A location carrying only a URI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationUriOnly {
    /// Resource identifier.
    pub uri: DocumentUri,
}

/// Identifies a text document by URI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextDocumentIdentifier {
    /// The document's URI.
    pub uri: DocumentUri,
}

impl TextDocumentIdentifier {
    /// Builds an identifier for `uri`.
    #[must_use]
    pub const fn new(uri: DocumentUri) -> Self {
        Self { uri }
    }
}

/// Identifies a specific version of a text document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionedTextDocumentIdentifier {
    /// The document's URI.
    pub uri: DocumentUri,
    /// Version number, increasing after each change.
    pub version: i32,
}

/// Identifies a text document, optionally at a specific version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionalVersionedTextDocumentIdentifier {
    /// The document's URI.
    pub uri: DocumentUri,
    /// Version number, or `null` when the document is not open.
    pub version: Option<i32>,
}

/// A text document transferred from the client to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentItem {
    /// The document's URI.
    pub uri: DocumentUri,
    /// The document's language identifier.
    pub language_id: LanguageKind,
    /// Version number, increasing after each change.
    pub version: i32,
    /// The content of the opened document.
    pub text: String,
}

/// A text document and a position inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentPositionParams {
    /// The text document.
    pub text_document: TextDocumentIdentifier,
    /// The position inside the text document.
    pub position: Position,
}

/// A textual edit applicable to a text document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextEdit {
    /// Range to manipulate. Use an empty range to insert.
    pub range: Range,
    /// Replacement text. Use an empty string to delete.
    pub new_text: String,
}

impl TextEdit {
    /// Builds an edit replacing `range` with `new_text`.
    #[must_use]
    pub fn new(range: Range, new_text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }
}

/// A text edit with an attached change annotation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedTextEdit {
    /// Range to manipulate.
    pub range: Range,
    /// Replacement text.
    pub new_text: String,
    /// The annotation identifier.
    pub annotation_id: ChangeAnnotationIdentifier,
}

/// A string value interpreted as a snippet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringValue {
    /// Always `"snippet"`.
    pub kind: SnippetKind,
    /// Snippet text.
    pub value: String,
}

/// An interactive text edit in snippet syntax.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetTextEdit {
    /// Range to manipulate.
    pub range: Range,
    /// The snippet to insert.
    pub snippet: StringValue,
    /// Optional annotation identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation_id: Option<ChangeAnnotationIdentifier>,
}

lsp_union! {
    /// One edit inside a [`TextDocumentEdit`].
    #[derive(Eq)]
    pub enum TextDocumentEditItem {
        /// Plain edit.
        Text(TextEdit),
        /// Annotated edit.
        Annotated(AnnotatedTextEdit),
        /// Snippet edit.
        Snippet(SnippetTextEdit),
    }
}

/// Additional information describing a group of edits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeAnnotation {
    /// Human-readable description, rendered prominently.
    pub label: String,
    /// Whether the user must confirm before the change is applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs_confirmation: Option<bool>,
    /// Less prominent description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Edits to one versioned text document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentEdit {
    /// The document to change.
    pub text_document: OptionalVersionedTextDocumentIdentifier,
    /// The edits to apply.
    pub edits: Vec<TextDocumentEditItem>,
}

/// Options for a create file operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFileOptions {
    /// Overwrite an existing file. Wins over `ignore_if_exists`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
    /// Ignore the operation if the file already exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_if_exists: Option<bool>,
}

/// Create file operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFile {
    /// Always `"create"`.
    pub kind: CreateKind,
    /// The resource to create.
    pub uri: DocumentUri,
    /// Additional options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<CreateFileOptions>,
    /// Optional annotation identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation_id: Option<ChangeAnnotationIdentifier>,
}

/// Options for a rename file operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameFileOptions {
    /// Overwrite the target if it exists. Wins over `ignore_if_exists`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
    /// Ignore the operation if the target exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_if_exists: Option<bool>,
}

/// Rename file operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameFile {
    /// Always `"rename"`.
    pub kind: RenameKind,
    /// The old resource.
    pub old_uri: DocumentUri,
    /// The new resource.
    pub new_uri: DocumentUri,
    /// Rename options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<RenameFileOptions>,
    /// Optional annotation identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation_id: Option<ChangeAnnotationIdentifier>,
}

/// Options for a delete file operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFileOptions {
    /// Delete folder content recursively.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recursive: Option<bool>,
    /// Ignore the operation if the file does not exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_if_not_exists: Option<bool>,
}

/// Delete file operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFile {
    /// Always `"delete"`.
    pub kind: DeleteKind,
    /// The file to delete.
    pub uri: DocumentUri,
    /// Delete options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<DeleteFileOptions>,
    /// Optional annotation identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation_id: Option<ChangeAnnotationIdentifier>,
}

lsp_union! {
    /// One entry of [`WorkspaceEdit::document_changes`].
    pub enum DocumentChange {
        /// Text edits to one document.
        Edit(TextDocumentEdit),
        /// File creation.
        Create(CreateFile),
        /// File rename.
        Rename(RenameFile),
        /// File deletion.
        Delete(DeleteFile),
    }
}

/// Changes to many resources managed in the workspace.
///
/// When both `changes` and `document_changes` are present, clients that
/// support versioned edits prefer `document_changes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceEdit {
    /// Edits to existing documents, keyed by URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<BTreeMap<DocumentUri, Vec<TextEdit>>>,
    /// Versioned document edits and resource operations, applied in order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_changes: Option<Vec<DocumentChange>>,
    /// Change annotations referenced by annotated edits and file operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_annotations: Option<BTreeMap<ChangeAnnotationIdentifier, ChangeAnnotation>>,
}

/// A link to documentation for a diagnostic code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeDescription {
    /// URI to open with more information.
    pub href: Uri,
}

/// A related message and source location for a diagnostic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticRelatedInformation {
    /// Location of this related information.
    pub location: Location,
    /// The message of this related information.
    pub message: String,
}

/// A compiler error, warning or hint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// Range the message applies to.
    pub range: Range,
    /// Severity; clients decide when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<DiagnosticSeverity>,
    /// Diagnostic code, possibly shown in the UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<IntegerOrString>,
    /// Link to documentation for the code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_description: Option<CodeDescription>,
    /// Human-readable origin, for example `"rustc"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// The diagnostic's message.
    pub message: String,
    /// Additional metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<DiagnosticTag>>,
    /// Related messages and locations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_information: Option<Vec<DiagnosticRelatedInformation>>,
    /// Data preserved between a publish and a code action request.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::codec::nullable::present"
    )]
    pub data: Option<LspAny>,
}

/// A reference to a command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Title of the command, like `save`.
    pub title: String,
    /// Tooltip shown when hovering the command in the UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    /// Identifier of the command handler.
    pub command: String,
    /// Arguments passed to the handler.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<LspAny>>,
}

/// Rich text rendered as plain text or markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupContent {
    /// The format of `value`.
    pub kind: MarkupKind,
    /// The content itself.
    pub value: String,
}

/// A code block tagged with a language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkedStringWithLanguage {
    /// Language identifier for syntax highlighting.
    pub language: String,
    /// The code.
    pub value: String,
}

lsp_union! {
    /// Markdown text or a language-tagged code block.
    #[derive(Eq)]
    pub enum MarkedString {
        /// Markdown string.
        String(String),
        /// Code block.
        WithLanguage(MarkedStringWithLanguage),
    }
}

/// A workspace folder as configured in the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkspaceFolder {
    /// The associated URI.
    pub uri: Uri,
    /// Name used to refer to the folder in the UI.
    pub name: String,
}

lsp_union! {
    /// A workspace folder or a plain URI, used as a pattern base.
    #[derive(Eq)]
    pub enum WorkspaceFolderOrUri {
        /// Workspace folder.
        Folder(WorkspaceFolder),
        /// Base URI.
        Uri(Uri),
    }
}

/// A glob pattern resolved relative to a base URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelativePattern {
    /// The base against which `pattern` is matched.
    pub base_uri: WorkspaceFolderOrUri,
    /// The glob pattern.
    pub pattern: Pattern,
}

lsp_union! {
    /// A glob, either absolute or relative to a base.
    #[derive(Eq)]
    pub enum GlobPattern {
        /// Plain glob.
        Pattern(Pattern),
        /// Glob relative to a base.
        Relative(RelativePattern),
    }
}

/// A document filter selecting by language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDocumentFilterLanguage {
    /// Language id, like `typescript`.
    pub language: String,
    /// URI scheme, like `file`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    /// Glob applied to the document path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<GlobPattern>,
}

/// A document filter selecting by URI scheme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDocumentFilterScheme {
    /// Language id, like `typescript`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// URI scheme, like `file`.
    pub scheme: String,
    /// Glob applied to the document path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<GlobPattern>,
}

/// A document filter selecting by path glob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDocumentFilterPattern {
    /// Language id, like `typescript`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// URI scheme, like `file`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    /// Glob applied to the document path.
    pub pattern: GlobPattern,
}

lsp_union! {
    /// Selects text documents by language, scheme or path.
    #[derive(Eq)]
    pub enum TextDocumentFilter {
        /// Filter keyed on language.
        Language(TextDocumentFilterLanguage),
        /// Filter keyed on scheme.
        Scheme(TextDocumentFilterScheme),
        /// Filter keyed on pattern.
        Pattern(TextDocumentFilterPattern),
    }
}

/// A notebook filter selecting by notebook type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookDocumentFilterNotebookType {
    /// Notebook type, like `jupyter-notebook`.
    pub notebook_type: String,
    /// URI scheme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    /// Glob applied to the notebook path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<GlobPattern>,
}

/// A notebook filter selecting by URI scheme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookDocumentFilterScheme {
    /// Notebook type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook_type: Option<String>,
    /// URI scheme.
    pub scheme: String,
    /// Glob applied to the notebook path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<GlobPattern>,
}

/// A notebook filter selecting by path glob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookDocumentFilterPattern {
    /// Notebook type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook_type: Option<String>,
    /// URI scheme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    /// Glob applied to the notebook path.
    pub pattern: GlobPattern,
}

lsp_union! {
    /// Selects notebook documents by type, scheme or path.
    #[derive(Eq)]
    pub enum NotebookDocumentFilter {
        /// Filter keyed on notebook type.
        NotebookType(NotebookDocumentFilterNotebookType),
        /// Filter keyed on scheme.
        Scheme(NotebookDocumentFilterScheme),
        /// Filter keyed on pattern.
        Pattern(NotebookDocumentFilterPattern),
    }
}

lsp_union! {
    /// A notebook type name or a full notebook filter.
    #[derive(Eq)]
    pub enum StringOrNotebookDocumentFilter {
        /// Notebook type shorthand.
        String(String),
        /// Full filter.
        Filter(NotebookDocumentFilter),
    }
}

/// Selects the cells of matching notebooks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookCellTextDocumentFilter {
    /// Filter matched against the notebook containing the cell.
    pub notebook: StringOrNotebookDocumentFilter,
    /// Cell language, like `python`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

lsp_union! {
    /// Selects text documents or notebook cells.
    #[derive(Eq)]
    pub enum DocumentFilter {
        /// Text document filter.
        Text(TextDocumentFilter),
        /// Notebook cell filter.
        NotebookCell(NotebookCellTextDocumentFilter),
    }
}

/// A combination of document filters; a document matches when any filter does.
pub type DocumentSelector = Vec<DocumentFilter>;

/// Registration options scoping a feature to a set of documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentRegistrationOptions {
    /// Selector identifying the documents; `null` uses the client's selector.
    pub document_selector: Option<DocumentSelector>,
}

/// Options signalling work-done progress support.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkDoneProgressOptions {
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
}

/// Options for a static registration carrying an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticRegistrationOptions {
    /// Id used to unregister the request again.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Carries an optional work-done progress token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkDoneProgressParams {
    /// Token reporting work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_token: Option<ProgressToken>,
}

/// Carries an optional partial-result token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialResultParams {
    /// Token reporting partial results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_result_token: Option<ProgressToken>,
}
