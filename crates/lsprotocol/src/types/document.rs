//! Text and notebook document synchronisation.

use serde::{Deserialize, Serialize};

use super::base::{DocumentUri, LspObject, Uri};
use super::basic::{
    DocumentSelector, Range, StringOrNotebookDocumentFilter, TextDocumentIdentifier,
    TextDocumentItem, VersionedTextDocumentIdentifier,
};
use super::enums::{NotebookCellKind, TextDocumentSaveReason, TextDocumentSyncKind};

/// Parameters of `textDocument/didOpen`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidOpenTextDocumentParams {
    /// The document that was opened.
    pub text_document: TextDocumentItem,
}

/// A change to a range of a text document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentContentChangePartial {
    /// The range of the document that changed.
    pub range: Range,
    /// The length of the replaced range. Superseded by `range`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_length: Option<u32>,
    /// The new text for the range.
    pub text: String,
}

/// A replacement of a whole text document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDocumentContentChangeWholeDocument {
    /// The new text of the whole document.
    pub text: String,
}

lsp_union! {
    /// A change event on a text document.
    #[derive(Eq)]
    pub enum TextDocumentContentChangeEvent {
        /// Incremental change.
        Partial(TextDocumentContentChangePartial),
        /// Full replacement.
        WholeDocument(TextDocumentContentChangeWholeDocument),
    }
}

/// Parameters of `textDocument/didChange`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidChangeTextDocumentParams {
    /// The document that changed, at its version after the change.
    pub text_document: VersionedTextDocumentIdentifier,
    /// The changes, applied in order.
    pub content_changes: Vec<TextDocumentContentChangeEvent>,
}

/// Registration options for `textDocument/didChange`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentChangeRegistrationOptions {
    /// Selector identifying the documents; `null` uses the client's selector.
    pub document_selector: Option<DocumentSelector>,
    /// How documents are synced to the server.
    pub sync_kind: TextDocumentSyncKind,
}

/// Parameters of `textDocument/didClose`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidCloseTextDocumentParams {
    /// The document that was closed.
    pub text_document: TextDocumentIdentifier,
}

/// Parameters of `textDocument/didSave`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidSaveTextDocumentParams {
    /// The document that was saved.
    pub text_document: TextDocumentIdentifier,
    /// Content when saved, depending on `include_text`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Registration options for `textDocument/didSave`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentSaveRegistrationOptions {
    /// Selector identifying the documents; `null` uses the client's selector.
    pub document_selector: Option<DocumentSelector>,
    /// Whether the client includes the content on save.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_text: Option<bool>,
}

/// Parameters of `textDocument/willSave` and `textDocument/willSaveWaitUntil`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WillSaveTextDocumentParams {
    /// The document that will be saved.
    pub text_document: TextDocumentIdentifier,
    /// The reason for the save.
    pub reason: TextDocumentSaveReason,
}

/// Save options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveOptions {
    /// Whether the client includes the content on save.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_text: Option<bool>,
}

lsp_union! {
    /// A plain flag or save options.
    #[derive(Eq)]
    pub enum BoolOrSaveOptions {
        /// Flag.
        Bool(bool),
        /// Detailed options.
        Options(SaveOptions),
    }
}

/// Detailed text document sync options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentSyncOptions {
    /// Whether open and close notifications are sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_close: Option<bool>,
    /// How change notifications are sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<TextDocumentSyncKind>,
    /// Whether will-save notifications are sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub will_save: Option<bool>,
    /// Whether will-save-wait-until requests are sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub will_save_wait_until: Option<bool>,
    /// Whether save notifications are sent, and with which options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save: Option<BoolOrSaveOptions>,
}

lsp_union! {
    /// Text document sync capability of a server.
    #[derive(Eq)]
    pub enum TextDocumentSync {
        /// Detailed options.
        Options(TextDocumentSyncOptions),
        /// Sync kind shorthand.
        Kind(TextDocumentSyncKind),
    }
}

/// Execution summary of a notebook cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionSummary {
    /// A strictly monotonically increasing execution counter.
    pub execution_order: u32,
    /// Whether the execution succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

/// A notebook cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookCell {
    /// The cell's kind.
    pub kind: NotebookCellKind,
    /// URI of the text document holding the cell's content.
    pub document: DocumentUri,
    /// Additional metadata stored with the cell.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<LspObject>,
    /// Additional execution summary information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_summary: Option<ExecutionSummary>,
}

/// A notebook document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookDocument {
    /// The notebook document's URI.
    pub uri: Uri,
    /// The type of the notebook.
    pub notebook_type: String,
    /// Version number, increasing after each change.
    pub version: i32,
    /// Additional metadata stored with the notebook.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<LspObject>,
    /// The cells of the notebook.
    pub cells: Vec<NotebookCell>,
}

/// Identifies a notebook document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookDocumentIdentifier {
    /// The notebook document's URI.
    pub uri: Uri,
}

/// Identifies a specific version of a notebook document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionedNotebookDocumentIdentifier {
    /// The version number of this notebook document.
    pub version: i32,
    /// The notebook document's URI.
    pub uri: Uri,
}

/// Parameters of `notebookDocument/didOpen`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidOpenNotebookDocumentParams {
    /// The notebook document that was opened.
    pub notebook_document: NotebookDocument,
    /// Text documents holding the content of the notebook cells.
    pub cell_text_documents: Vec<TextDocumentItem>,
}

/// A change to the cell array of a notebook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookCellArrayChange {
    /// The start offset of the cell that changed.
    pub start: u32,
    /// The number of deleted cells.
    pub delete_count: u32,
    /// The new cells, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cells: Option<Vec<NotebookCell>>,
}

/// Structural changes to the cells of a notebook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookDocumentCellChangeStructure {
    /// The change to the cell array.
    pub array: NotebookCellArrayChange,
    /// Documents of additional cells that were opened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub did_open: Option<Vec<TextDocumentItem>>,
    /// Documents of cells that were closed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub did_close: Option<Vec<TextDocumentIdentifier>>,
}

/// Content changes to one notebook cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookDocumentCellContentChanges {
    /// The cell document that changed.
    pub document: VersionedTextDocumentIdentifier,
    /// The changes to the cell's content.
    pub changes: Vec<TextDocumentContentChangeEvent>,
}

/// Cell changes to a notebook document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookDocumentCellChanges {
    /// Changes to the cell structure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structure: Option<NotebookDocumentCellChangeStructure>,
    /// Changes to cell properties like metadata or execution summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<NotebookCell>>,
    /// Changes to the text content of notebook cells.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_content: Option<Vec<NotebookDocumentCellContentChanges>>,
}

/// A change event for a notebook document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotebookDocumentChangeEvent {
    /// The changed metadata, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<LspObject>,
    /// Changes to cells.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cells: Option<NotebookDocumentCellChanges>,
}

/// Parameters of `notebookDocument/didChange`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidChangeNotebookDocumentParams {
    /// The notebook document that changed, at its version after the change.
    pub notebook_document: VersionedNotebookDocumentIdentifier,
    /// The actual changes.
    pub change: NotebookDocumentChangeEvent,
}

/// Parameters of `notebookDocument/didSave`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidSaveNotebookDocumentParams {
    /// The notebook document that was saved.
    pub notebook_document: NotebookDocumentIdentifier,
}

/// Parameters of `notebookDocument/didClose`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidCloseNotebookDocumentParams {
    /// The notebook document that was closed.
    pub notebook_document: NotebookDocumentIdentifier,
    /// Text documents of the closed notebook's cells.
    pub cell_text_documents: Vec<TextDocumentIdentifier>,
}

/// A cell language selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookCellLanguage {
    /// The cell language.
    pub language: String,
}

/// A notebook selector requiring a notebook filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookDocumentFilterWithNotebook {
    /// Notebook type or filter the notebook must match.
    pub notebook: StringOrNotebookDocumentFilter,
    /// Cells of the matching notebook to be synced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cells: Option<Vec<NotebookCellLanguage>>,
}

/// A notebook selector requiring a cell filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookDocumentFilterWithCells {
    /// Notebook type or filter the notebook must match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook: Option<StringOrNotebookDocumentFilter>,
    /// Cells of the matching notebook to be synced.
    pub cells: Vec<NotebookCellLanguage>,
}

lsp_union! {
    /// One entry of a notebook selector.
    #[derive(Eq)]
    pub enum NotebookSelector {
        /// Selector keyed on the notebook.
        WithNotebook(NotebookDocumentFilterWithNotebook),
        /// Selector keyed on the cells.
        WithCells(NotebookDocumentFilterWithCells),
    }
}

/// Options describing which notebooks a server wants synced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookDocumentSyncOptions {
    /// The notebooks to be synced.
    pub notebook_selector: Vec<NotebookSelector>,
    /// Whether save notifications are forwarded to the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save: Option<bool>,
}

/// Registration options for notebook document sync.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookDocumentSyncRegistrationOptions {
    /// The notebooks to be synced.
    pub notebook_selector: Vec<NotebookSelector>,
    /// Whether save notifications are forwarded to the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save: Option<bool>,
    /// Id used to unregister the request again.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

lsp_union! {
    /// Notebook sync capability of a server.
    #[derive(Eq)]
    pub enum NotebookDocumentSync {
        /// Static options.
        Options(NotebookDocumentSyncOptions),
        /// Options with a registration id.
        RegistrationOptions(NotebookDocumentSyncRegistrationOptions),
    }
}
