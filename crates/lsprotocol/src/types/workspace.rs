//! Workspace-wide requests: configuration, folders, commands, edits, file
//! operations, file watching, symbols and virtual document content.

use serde::{Deserialize, Serialize};

use super::base::{DocumentUri, LspAny, Uri};
use super::basic::{
    GlobPattern, Location, LocationUriOnly, ProgressToken, WorkspaceEdit, WorkspaceFolder,
};
use super::enums::{FileChangeType, FileOperationPatternKind, SymbolKind, SymbolTag, WatchKind};

/// Parameters of `workspace/configuration`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationParams {
    /// The configuration sections requested.
    pub items: Vec<ConfigurationItem>,
}

/// One configuration section request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationItem {
    /// The scope to get the configuration section for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope_uri: Option<Uri>,
    /// The configuration section asked for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

/// Parameters of `workspace/didChangeConfiguration`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DidChangeConfigurationParams {
    /// The actual changed settings.
    pub settings: LspAny,
}

lsp_union! {
    /// One name or a list of names.
    #[derive(Eq)]
    pub enum StringOrStrings {
        /// Single value.
        One(String),
        /// Several values.
        Many(Vec<String>),
    }
}

/// Registration options for `workspace/didChangeConfiguration`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DidChangeConfigurationRegistrationOptions {
    /// Configuration sections the server is interested in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<StringOrStrings>,
}

/// The added and removed workspace folders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceFoldersChangeEvent {
    /// The array of added workspace folders.
    pub added: Vec<WorkspaceFolder>,
    /// The array of removed workspace folders.
    pub removed: Vec<WorkspaceFolder>,
}

/// Parameters of `workspace/didChangeWorkspaceFolders`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DidChangeWorkspaceFoldersParams {
    /// The actual workspace folder change event.
    pub event: WorkspaceFoldersChangeEvent,
}

/// Parameters of `workspace/executeCommand`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteCommandParams {
    /// Token reporting work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_token: Option<ProgressToken>,
    /// The identifier of the command handler.
    pub command: String,
    /// Arguments the command should be invoked with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<LspAny>>,
}

/// Server capabilities for `workspace/executeCommand`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteCommandOptions {
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
    /// The commands to be executed on the server.
    pub commands: Vec<String>,
}

/// Registration options for `workspace/executeCommand`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteCommandRegistrationOptions {
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
    /// The commands to be executed on the server.
    pub commands: Vec<String>,
}

/// Additional data about a workspace edit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceEditMetadata {
    /// Signal to the editor that this edit is a refactoring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_refactoring: Option<bool>,
}

/// Parameters of `workspace/applyEdit`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplyWorkspaceEditParams {
    /// Optional label, presented in the undo stack.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// The edits to apply.
    pub edit: WorkspaceEdit,
    /// Additional data about the edit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<WorkspaceEditMetadata>,
}

/// The result of `workspace/applyEdit`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyWorkspaceEditResult {
    /// Whether the edit was applied.
    pub applied: bool,
    /// Optional textual description of why the edit was not applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    /// Index of the first failed change, when the client signals it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_change: Option<u32>,
}

/// A file created in the workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCreate {
    /// A `file://` URI for the location of the created file or folder.
    pub uri: String,
}

/// Parameters of `workspace/willCreateFiles` and `workspace/didCreateFiles`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFilesParams {
    /// The files and folders being created.
    pub files: Vec<FileCreate>,
}

/// A file renamed in the workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRename {
    /// The original location.
    pub old_uri: String,
    /// The new location.
    pub new_uri: String,
}

/// Parameters of `workspace/willRenameFiles` and `workspace/didRenameFiles`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameFilesParams {
    /// The files and folders being renamed.
    pub files: Vec<FileRename>,
}

/// A file deleted in the workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDelete {
    /// A `file://` URI for the location of the deleted file or folder.
    pub uri: String,
}

/// Parameters of `workspace/willDeleteFiles` and `workspace/didDeleteFiles`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteFilesParams {
    /// The files and folders being deleted.
    pub files: Vec<FileDelete>,
}

/// Matching options for a file operation pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileOperationPatternOptions {
    /// Whether the pattern matches case-insensitively.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_case: Option<bool>,
}

/// A glob describing the files a file operation applies to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOperationPattern {
    /// The glob pattern to match.
    pub glob: String,
    /// Whether to match files or folders; both when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<FileOperationPatternKind>,
    /// Additional matching options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<FileOperationPatternOptions>,
}

/// A filter selecting the files a file operation applies to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOperationFilter {
    /// A URI scheme like `file` or `untitled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    /// The actual file operation pattern.
    pub pattern: FileOperationPattern,
}

/// Registration options for file operation requests and notifications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOperationRegistrationOptions {
    /// The actual filters.
    pub filters: Vec<FileOperationFilter>,
}

/// Server capabilities for file operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileOperationOptions {
    /// Interest in `workspace/didCreateFiles`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub did_create: Option<FileOperationRegistrationOptions>,
    /// Interest in `workspace/willCreateFiles`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub will_create: Option<FileOperationRegistrationOptions>,
    /// Interest in `workspace/didRenameFiles`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub did_rename: Option<FileOperationRegistrationOptions>,
    /// Interest in `workspace/willRenameFiles`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub will_rename: Option<FileOperationRegistrationOptions>,
    /// Interest in `workspace/didDeleteFiles`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub did_delete: Option<FileOperationRegistrationOptions>,
    /// Interest in `workspace/willDeleteFiles`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub will_delete: Option<FileOperationRegistrationOptions>,
}

/// An event describing a file change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEvent {
    /// The file's URI.
    pub uri: DocumentUri,
    /// The change type.
    #[serde(rename = "type")]
    pub typ: FileChangeType,
}

/// Parameters of `workspace/didChangeWatchedFiles`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DidChangeWatchedFilesParams {
    /// The actual file events.
    pub changes: Vec<FileEvent>,
}

/// A watcher registered for file system events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSystemWatcher {
    /// The glob pattern to watch.
    pub glob_pattern: GlobPattern,
    /// The events of interest; all three when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<WatchKind>,
}

/// Registration options for `workspace/didChangeWatchedFiles`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DidChangeWatchedFilesRegistrationOptions {
    /// The watchers to register.
    pub watchers: Vec<FileSystemWatcher>,
}

/// Parameters of `workspace/symbol`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSymbolParams {
    /// Token reporting work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_token: Option<ProgressToken>,
    /// Token reporting partial results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_result_token: Option<ProgressToken>,
    /// A query string to filter symbols by; empty means all symbols.
    pub query: String,
}

/// Information about a programming construct such as a variable or class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInformation {
    /// The name of this symbol.
    pub name: String,
    /// The kind of this symbol.
    pub kind: SymbolKind,
    /// Tags for this symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<SymbolTag>>,
    /// The name of the symbol containing this symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_name: Option<String>,
    /// Whether this symbol is deprecated. Superseded by `tags`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    /// The location of this symbol.
    pub location: Location,
}

lsp_union! {
    /// A full location or a URI-only location.
    #[derive(Eq)]
    pub enum WorkspaceSymbolLocation {
        /// Location with a range.
        Location(Location),
        /// Location without a range; resolved lazily.
        UriOnly(LocationUriOnly),
    }
}

/// A special workspace symbol that supports locations without a range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSymbol {
    /// The name of this symbol.
    pub name: String,
    /// The kind of this symbol.
    pub kind: SymbolKind,
    /// Tags for this symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<SymbolTag>>,
    /// The name of the symbol containing this symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_name: Option<String>,
    /// The location of the symbol.
    pub location: WorkspaceSymbolLocation,
    /// Data preserved between a workspace symbol and its resolve request.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::codec::nullable::present"
    )]
    pub data: Option<LspAny>,
}

lsp_union! {
    /// The result of `workspace/symbol`.
    pub enum WorkspaceSymbolResult {
        /// Flat symbol information.
        Information(Vec<SymbolInformation>),
        /// Workspace symbols.
        Symbols(Vec<WorkspaceSymbol>),
    }
}

/// Server capabilities for `workspace/symbol`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSymbolOptions {
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
    /// Whether the server resolves additional information for a symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_provider: Option<bool>,
}

/// Registration options for `workspace/symbol`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSymbolRegistrationOptions {
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
    /// Whether the server resolves additional information for a symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_provider: Option<bool>,
}

/// Parameters of `workspace/textDocumentContent`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDocumentContentParams {
    /// The URI of the text document.
    pub uri: DocumentUri,
}

/// The result of `workspace/textDocumentContent`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDocumentContentResult {
    /// The text content of the document.
    pub text: String,
}

/// Server capabilities for `workspace/textDocumentContent`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDocumentContentOptions {
    /// The schemes for which the server provides content.
    pub schemes: Vec<String>,
}

/// Registration options for `workspace/textDocumentContent`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDocumentContentRegistrationOptions {
    /// The schemes for which the server provides content.
    pub schemes: Vec<String>,
    /// Id used to unregister the request again.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Parameters of `workspace/textDocumentContent/refresh`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDocumentContentRefreshParams {
    /// The URI of the text document to refresh.
    pub uri: DocumentUri,
}

/// Server capabilities for workspace folders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceFoldersServerCapabilities {
    /// Whether the server supports workspace folders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported: Option<bool>,
    /// Whether the server wants folder change notifications, optionally
    /// naming the registration id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_notifications: Option<StringOrBool>,
}

lsp_union! {
    /// A registration id or a plain flag.
    #[derive(Eq)]
    pub enum StringOrBool {
        /// Registration id.
        String(String),
        /// Flag.
        Bool(bool),
    }
}
