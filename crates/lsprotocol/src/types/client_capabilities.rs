//! Capabilities announced by the client during initialisation.
//!
//! Many leaf capability records share a shape (a lone `dynamicRegistration`
//! flag, a lone `refreshSupport` flag, a `valueSet` list). Those shapes are
//! declared once and aliased under each published name.

use serde::{Deserialize, Serialize};

use super::base::{LspAny, RegularExpressionEngineKind};
use super::enums::{
    CodeActionKind, CodeActionTag, CompletionItemKind, CompletionItemTag, DiagnosticTag,
    FailureHandlingKind, FoldingRangeKind, InsertTextMode, MarkupKind, PositionEncodingKind,
    PrepareSupportDefaultBehavior, ResourceOperationKind, SymbolKind, SymbolTag, TokenFormat,
};
use super::hints::{SemanticTokensFullProvider, SemanticTokensRangeProvider};

/// Defines capabilities for dynamic registration, workspace and text
/// document features the client supports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCapabilities {
    /// Workspace specific client capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<WorkspaceClientCapabilities>,
    /// Text document specific client capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_document: Option<TextDocumentClientCapabilities>,
    /// Notebook document specific client capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook_document: Option<NotebookDocumentClientCapabilities>,
    /// Window specific client capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<WindowClientCapabilities>,
    /// General client capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general: Option<GeneralClientCapabilities>,
    /// Experimental client capabilities.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::codec::nullable::present"
    )]
    pub experimental: Option<LspAny>,
}

// ---------------------------------------------------------------------------
// Shared shapes
// ---------------------------------------------------------------------------

/// Capability consisting of a lone dynamic registration flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicRegistrationClientCapabilities {
    /// Whether the feature supports dynamic registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
}

/// Capability consisting of a lone refresh flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshClientCapabilities {
    /// Whether the client supports a server-initiated refresh request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_support: Option<bool>,
}

/// Capability for the goto family of requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GotoClientCapabilities {
    /// Whether the request supports dynamic registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    /// The client supports additional metadata in the form of links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_support: Option<bool>,
}

/// A set of supported values; absent means a default set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientValueSet<T> {
    /// The values the client supports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_set: Option<Vec<T>>,
}

/// A set of supported values that must be given explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRequiredValueSet<T> {
    /// The values the client supports.
    pub value_set: Vec<T>,
}

/// Properties the client can resolve lazily.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientResolveOptions {
    /// The property names.
    pub properties: Vec<String>,
}

/// Supported symbol kinds.
pub type ClientSymbolKindOptions = ClientValueSet<SymbolKind>;
/// Supported symbol tags.
pub type ClientSymbolTagOptions = ClientRequiredValueSet<SymbolTag>;
/// Lazily resolved workspace symbol properties.
pub type ClientSymbolResolveOptions = ClientResolveOptions;
/// Supported completion item kinds.
pub type ClientCompletionItemOptionsKind = ClientValueSet<CompletionItemKind>;
/// Supported completion item tags.
pub type CompletionItemTagOptions = ClientRequiredValueSet<CompletionItemTag>;
/// Supported insert text modes.
pub type ClientCompletionItemInsertTextModeOptions = ClientRequiredValueSet<InsertTextMode>;
/// Lazily resolved completion item properties.
pub type ClientCompletionItemResolveOptions = ClientResolveOptions;
/// Supported code action kinds.
pub type ClientCodeActionKindOptions = ClientRequiredValueSet<CodeActionKind>;
/// Supported code action tags.
pub type CodeActionTagOptions = ClientRequiredValueSet<CodeActionTag>;
/// Lazily resolved code action properties.
pub type ClientCodeActionResolveOptions = ClientResolveOptions;
/// Lazily resolved code lens properties.
pub type ClientCodeLensResolveOptions = ClientResolveOptions;
/// Lazily resolved inlay hint properties.
pub type ClientInlayHintResolveOptions = ClientResolveOptions;
/// Supported folding range kinds.
pub type ClientFoldingRangeKindOptions = ClientValueSet<FoldingRangeKind>;
/// Supported diagnostic tags.
pub type ClientDiagnosticsTagOptions = ClientRequiredValueSet<DiagnosticTag>;

// ---------------------------------------------------------------------------
// Workspace
// ---------------------------------------------------------------------------

/// Workspace specific client capabilities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceClientCapabilities {
    /// The client supports applying batch edits to the workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_edit: Option<bool>,
    /// Capabilities specific to workspace edits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_edit: Option<WorkspaceEditClientCapabilities>,
    /// Capabilities specific to `workspace/didChangeConfiguration`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub did_change_configuration: Option<DidChangeConfigurationClientCapabilities>,
    /// Capabilities specific to `workspace/didChangeWatchedFiles`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub did_change_watched_files: Option<DidChangeWatchedFilesClientCapabilities>,
    /// Capabilities specific to `workspace/symbol`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<WorkspaceSymbolClientCapabilities>,
    /// Capabilities specific to `workspace/executeCommand`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execute_command: Option<ExecuteCommandClientCapabilities>,
    /// The client supports workspace folders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_folders: Option<bool>,
    /// The client supports `workspace/configuration` requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<bool>,
    /// Workspace-wide semantic token capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic_tokens: Option<SemanticTokensWorkspaceClientCapabilities>,
    /// Workspace-wide code lens capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_lens: Option<CodeLensWorkspaceClientCapabilities>,
    /// The client has support for file notifications and requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_operations: Option<FileOperationClientCapabilities>,
    /// Workspace-wide inline value capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_value: Option<InlineValueWorkspaceClientCapabilities>,
    /// Workspace-wide inlay hint capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inlay_hint: Option<InlayHintWorkspaceClientCapabilities>,
    /// Workspace-wide diagnostic capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<DiagnosticWorkspaceClientCapabilities>,
    /// Workspace-wide folding range capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folding_range: Option<FoldingRangeWorkspaceClientCapabilities>,
    /// Capabilities specific to `workspace/textDocumentContent`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_document_content: Option<TextDocumentContentClientCapabilities>,
}

/// Change annotation support inside workspace edits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeAnnotationsSupportOptions {
    /// Whether the client groups edits with equal labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups_on_label: Option<bool>,
}

/// Capabilities specific to workspace edits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceEditClientCapabilities {
    /// The client supports versioned document changes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_changes: Option<bool>,
    /// The resource operations the client supports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_operations: Option<Vec<ResourceOperationKind>>,
    /// How the client handles failures when applying an edit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_handling: Option<FailureHandlingKind>,
    /// Whether the client normalises line endings in text edits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalizes_line_endings: Option<bool>,
    /// Change annotation support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_annotation_support: Option<ChangeAnnotationsSupportOptions>,
    /// Whether the client supports edit metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_support: Option<bool>,
    /// Whether the client supports snippet text edits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet_edit_support: Option<bool>,
}

/// Capabilities of `workspace/didChangeConfiguration`.
pub type DidChangeConfigurationClientCapabilities = DynamicRegistrationClientCapabilities;

/// Capabilities of `workspace/didChangeWatchedFiles`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidChangeWatchedFilesClientCapabilities {
    /// Whether the notification supports dynamic registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    /// Whether the client supports relative patterns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_pattern_support: Option<bool>,
}

/// Capabilities of `workspace/symbol`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSymbolClientCapabilities {
    /// Whether the request supports dynamic registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    /// Supported symbol kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_kind: Option<ClientSymbolKindOptions>,
    /// Supported symbol tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_support: Option<ClientSymbolTagOptions>,
    /// Properties the client resolves lazily.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_support: Option<ClientSymbolResolveOptions>,
}

/// Capabilities of `workspace/executeCommand`.
pub type ExecuteCommandClientCapabilities = DynamicRegistrationClientCapabilities;
/// Workspace-wide semantic token capabilities.
pub type SemanticTokensWorkspaceClientCapabilities = RefreshClientCapabilities;
/// Workspace-wide code lens capabilities.
pub type CodeLensWorkspaceClientCapabilities = RefreshClientCapabilities;
/// Workspace-wide inline value capabilities.
pub type InlineValueWorkspaceClientCapabilities = RefreshClientCapabilities;
/// Workspace-wide inlay hint capabilities.
pub type InlayHintWorkspaceClientCapabilities = RefreshClientCapabilities;
/// Workspace-wide diagnostic capabilities.
pub type DiagnosticWorkspaceClientCapabilities = RefreshClientCapabilities;
/// Workspace-wide folding range capabilities.
pub type FoldingRangeWorkspaceClientCapabilities = RefreshClientCapabilities;
/// Capabilities of `workspace/textDocumentContent`.
pub type TextDocumentContentClientCapabilities = DynamicRegistrationClientCapabilities;

/// Capabilities for file operation notifications and requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileOperationClientCapabilities {
    /// Whether file operations support dynamic registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    /// The client sends `workspace/didCreateFiles`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub did_create: Option<bool>,
    /// The client sends `workspace/willCreateFiles`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub will_create: Option<bool>,
    /// The client sends `workspace/didRenameFiles`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub did_rename: Option<bool>,
    /// The client sends `workspace/willRenameFiles`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub will_rename: Option<bool>,
    /// The client sends `workspace/didDeleteFiles`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub did_delete: Option<bool>,
    /// The client sends `workspace/willDeleteFiles`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub will_delete: Option<bool>,
}

// ---------------------------------------------------------------------------
// Text documents
// ---------------------------------------------------------------------------

/// Text document specific client capabilities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentClientCapabilities {
    /// Synchronisation capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synchronization: Option<TextDocumentSyncClientCapabilities>,
    /// Document filter capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<TextDocumentFilterClientCapabilities>,
    /// Capabilities of `textDocument/completion`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion: Option<CompletionClientCapabilities>,
    /// Capabilities of `textDocument/hover`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<HoverClientCapabilities>,
    /// Capabilities of `textDocument/signatureHelp`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_help: Option<SignatureHelpClientCapabilities>,
    /// Capabilities of `textDocument/declaration`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declaration: Option<DeclarationClientCapabilities>,
    /// Capabilities of `textDocument/definition`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<DefinitionClientCapabilities>,
    /// Capabilities of `textDocument/typeDefinition`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_definition: Option<TypeDefinitionClientCapabilities>,
    /// Capabilities of `textDocument/implementation`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implementation: Option<ImplementationClientCapabilities>,
    /// Capabilities of `textDocument/references`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<ReferenceClientCapabilities>,
    /// Capabilities of `textDocument/documentHighlight`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_highlight: Option<DocumentHighlightClientCapabilities>,
    /// Capabilities of `textDocument/documentSymbol`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_symbol: Option<DocumentSymbolClientCapabilities>,
    /// Capabilities of `textDocument/codeAction`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_action: Option<CodeActionClientCapabilities>,
    /// Capabilities of `textDocument/codeLens`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_lens: Option<CodeLensClientCapabilities>,
    /// Capabilities of `textDocument/documentLink`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_link: Option<DocumentLinkClientCapabilities>,
    /// Capabilities of `textDocument/documentColor`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_provider: Option<DocumentColorClientCapabilities>,
    /// Capabilities of `textDocument/formatting`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatting: Option<DocumentFormattingClientCapabilities>,
    /// Capabilities of `textDocument/rangeFormatting`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_formatting: Option<DocumentRangeFormattingClientCapabilities>,
    /// Capabilities of `textDocument/onTypeFormatting`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_type_formatting: Option<DocumentOnTypeFormattingClientCapabilities>,
    /// Capabilities of `textDocument/rename`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rename: Option<RenameClientCapabilities>,
    /// Capabilities of `textDocument/foldingRange`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folding_range: Option<FoldingRangeClientCapabilities>,
    /// Capabilities of `textDocument/selectionRange`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_range: Option<SelectionRangeClientCapabilities>,
    /// Capabilities of `textDocument/publishDiagnostics`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_diagnostics: Option<PublishDiagnosticsClientCapabilities>,
    /// Capabilities of the call hierarchy requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_hierarchy: Option<CallHierarchyClientCapabilities>,
    /// Capabilities of the semantic token requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic_tokens: Option<SemanticTokensClientCapabilities>,
    /// Capabilities of `textDocument/linkedEditingRange`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_editing_range: Option<LinkedEditingRangeClientCapabilities>,
    /// Capabilities of `textDocument/moniker`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moniker: Option<MonikerClientCapabilities>,
    /// Capabilities of the type hierarchy requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_hierarchy: Option<TypeHierarchyClientCapabilities>,
    /// Capabilities of `textDocument/inlineValue`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_value: Option<InlineValueClientCapabilities>,
    /// Capabilities of `textDocument/inlayHint`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inlay_hint: Option<InlayHintClientCapabilities>,
    /// Capabilities of `textDocument/diagnostic`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<DiagnosticClientCapabilities>,
    /// Capabilities of `textDocument/inlineCompletion`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_completion: Option<InlineCompletionClientCapabilities>,
}

/// Capabilities of text document synchronisation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentSyncClientCapabilities {
    /// Whether synchronisation supports dynamic registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    /// The client sends will-save notifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub will_save: Option<bool>,
    /// The client sends will-save-wait-until requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub will_save_wait_until: Option<bool>,
    /// The client sends did-save notifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub did_save: Option<bool>,
}

/// Capabilities of document filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentFilterClientCapabilities {
    /// The client supports relative patterns in filters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_pattern_support: Option<bool>,
}

/// Capabilities of completion items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCompletionItemOptions {
    /// The client supports snippets as insert text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet_support: Option<bool>,
    /// The client supports commit characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_characters_support: Option<bool>,
    /// Content formats for the documentation property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation_format: Option<Vec<MarkupKind>>,
    /// The client supports the deprecated property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated_support: Option<bool>,
    /// The client supports the preselect property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preselect_support: Option<bool>,
    /// Supported completion item tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_support: Option<CompletionItemTagOptions>,
    /// The client supports insert-replace edits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_replace_support: Option<bool>,
    /// Properties the client resolves lazily.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_support: Option<ClientCompletionItemResolveOptions>,
    /// Supported insert text modes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_text_mode_support: Option<ClientCompletionItemInsertTextModeOptions>,
    /// The client supports label details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_details_support: Option<bool>,
}

/// Capabilities of completion lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionListCapabilities {
    /// Supported item defaults by property name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_defaults: Option<Vec<String>>,
    /// The client supports `applyKind` on completion lists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_kind_support: Option<bool>,
}

/// Capabilities of `textDocument/completion`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionClientCapabilities {
    /// Whether completion supports dynamic registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    /// Completion item capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_item: Option<ClientCompletionItemOptions>,
    /// Supported completion item kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_item_kind: Option<ClientCompletionItemOptionsKind>,
    /// Default insert text mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_text_mode: Option<InsertTextMode>,
    /// The client sends additional context information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_support: Option<bool>,
    /// Completion list capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_list: Option<CompletionListCapabilities>,
}

/// Capabilities of `textDocument/hover`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverClientCapabilities {
    /// Whether hover supports dynamic registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    /// Supported content formats, preferred first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_format: Option<Vec<MarkupKind>>,
}

/// Capabilities of signature parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSignatureParameterInformationOptions {
    /// The client supports label offsets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_offset_support: Option<bool>,
}

/// Capabilities of signature information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSignatureInformationOptions {
    /// Supported content formats for documentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation_format: Option<Vec<MarkupKind>>,
    /// Parameter information capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_information: Option<ClientSignatureParameterInformationOptions>,
    /// The client supports `activeParameter` on signatures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_parameter_support: Option<bool>,
    /// The client supports `null` as an active parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_active_parameter_support: Option<bool>,
}

/// Capabilities of `textDocument/signatureHelp`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureHelpClientCapabilities {
    /// Whether signature help supports dynamic registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    /// Signature information capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_information: Option<ClientSignatureInformationOptions>,
    /// The client sends additional context information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_support: Option<bool>,
}

/// Capabilities of `textDocument/declaration`.
pub type DeclarationClientCapabilities = GotoClientCapabilities;
/// Capabilities of `textDocument/definition`.
pub type DefinitionClientCapabilities = GotoClientCapabilities;
/// Capabilities of `textDocument/typeDefinition`.
pub type TypeDefinitionClientCapabilities = GotoClientCapabilities;
/// Capabilities of `textDocument/implementation`.
pub type ImplementationClientCapabilities = GotoClientCapabilities;
/// Capabilities of `textDocument/references`.
pub type ReferenceClientCapabilities = DynamicRegistrationClientCapabilities;
/// Capabilities of `textDocument/documentHighlight`.
pub type DocumentHighlightClientCapabilities = DynamicRegistrationClientCapabilities;

/// Capabilities of `textDocument/documentSymbol`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSymbolClientCapabilities {
    /// Whether document symbols support dynamic registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    /// Supported symbol kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_kind: Option<ClientSymbolKindOptions>,
    /// The client supports hierarchical document symbols.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchical_document_symbol_support: Option<bool>,
    /// Supported symbol tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_support: Option<ClientSymbolTagOptions>,
    /// The client supports an additional label in the outline view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_support: Option<bool>,
}

/// Code action literal support.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCodeActionLiteralOptions {
    /// Supported code action kinds.
    pub code_action_kind: ClientCodeActionKindOptions,
}

/// Capabilities of `textDocument/codeAction`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeActionClientCapabilities {
    /// Whether code actions support dynamic registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    /// The client supports code action literals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_action_literal_support: Option<ClientCodeActionLiteralOptions>,
    /// The client supports the `isPreferred` property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_preferred_support: Option<bool>,
    /// The client supports the `disabled` property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_support: Option<bool>,
    /// The client preserves the `data` property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_support: Option<bool>,
    /// Properties the client resolves lazily.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_support: Option<ClientCodeActionResolveOptions>,
    /// The client honours change annotations in workspace edits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub honors_change_annotations: Option<bool>,
    /// The client supports code action documentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation_support: Option<bool>,
    /// Supported code action tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_support: Option<CodeActionTagOptions>,
}

/// Capabilities of `textDocument/codeLens`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeLensClientCapabilities {
    /// Whether code lenses support dynamic registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    /// Properties the client resolves lazily.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_support: Option<ClientCodeLensResolveOptions>,
}

/// Capabilities of `textDocument/documentLink`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentLinkClientCapabilities {
    /// Whether document links support dynamic registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    /// The client supports the `tooltip` property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip_support: Option<bool>,
}

/// Capabilities of `textDocument/documentColor`.
pub type DocumentColorClientCapabilities = DynamicRegistrationClientCapabilities;
/// Capabilities of `textDocument/formatting`.
pub type DocumentFormattingClientCapabilities = DynamicRegistrationClientCapabilities;
/// Capabilities of `textDocument/onTypeFormatting`.
pub type DocumentOnTypeFormattingClientCapabilities = DynamicRegistrationClientCapabilities;

/// Capabilities of `textDocument/rangeFormatting`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRangeFormattingClientCapabilities {
    /// Whether range formatting supports dynamic registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    /// The client supports formatting multiple ranges at once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranges_support: Option<bool>,
}

/// Capabilities of `textDocument/rename`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameClientCapabilities {
    /// Whether rename supports dynamic registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    /// The client supports testing a rename before executing it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prepare_support: Option<bool>,
    /// The client's default behaviour for prepare-rename.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prepare_support_default_behavior: Option<PrepareSupportDefaultBehavior>,
    /// The client honours change annotations in workspace edits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub honors_change_annotations: Option<bool>,
}

/// Folding range item capabilities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientFoldingRangeOptions {
    /// The client supports collapsed text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed_text: Option<bool>,
}

/// Capabilities of `textDocument/foldingRange`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoldingRangeClientCapabilities {
    /// Whether folding ranges support dynamic registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    /// Maximum number of folding ranges the client prefers per document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_limit: Option<u32>,
    /// The client only folds complete lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_folding_only: Option<bool>,
    /// Supported folding range kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folding_range_kind: Option<ClientFoldingRangeKindOptions>,
    /// Folding range item capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folding_range: Option<ClientFoldingRangeOptions>,
}

/// Capabilities of `textDocument/selectionRange`.
pub type SelectionRangeClientCapabilities = DynamicRegistrationClientCapabilities;

/// Capabilities of `textDocument/publishDiagnostics`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishDiagnosticsClientCapabilities {
    /// The client accepts related information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_information: Option<bool>,
    /// Supported diagnostic tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_support: Option<ClientDiagnosticsTagOptions>,
    /// The client supports code descriptions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_description_support: Option<bool>,
    /// The client preserves the `data` property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_support: Option<bool>,
    /// The client interprets the version property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_support: Option<bool>,
}

/// Capabilities of the call hierarchy requests.
pub type CallHierarchyClientCapabilities = DynamicRegistrationClientCapabilities;

/// Full-document request options in semantic token capabilities.
pub type ClientSemanticTokensRequestFullDelta = super::hints::SemanticTokensFullDelta;

/// Which semantic token requests the client sends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSemanticTokensRequestOptions {
    /// The client sends range requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<SemanticTokensRangeProvider>,
    /// The client sends full-document requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full: Option<SemanticTokensFullProvider>,
}

/// Capabilities of the semantic token requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticTokensClientCapabilities {
    /// Whether semantic tokens support dynamic registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    /// Which requests the client supports.
    pub requests: ClientSemanticTokensRequestOptions,
    /// The token types the client supports.
    pub token_types: Vec<String>,
    /// The token modifiers the client supports.
    pub token_modifiers: Vec<String>,
    /// The token formats the client supports.
    pub formats: Vec<TokenFormat>,
    /// The client supports overlapping tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlapping_token_support: Option<bool>,
    /// The client supports tokens spanning multiple lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiline_token_support: Option<bool>,
    /// The client allows the server to cancel semantic token requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_cancel_support: Option<bool>,
    /// Semantic tokens augment the client's own syntax tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub augments_syntax_tokens: Option<bool>,
}

/// Capabilities of `textDocument/linkedEditingRange`.
pub type LinkedEditingRangeClientCapabilities = DynamicRegistrationClientCapabilities;
/// Capabilities of `textDocument/moniker`.
pub type MonikerClientCapabilities = DynamicRegistrationClientCapabilities;
/// Capabilities of the type hierarchy requests.
pub type TypeHierarchyClientCapabilities = DynamicRegistrationClientCapabilities;
/// Capabilities of `textDocument/inlineValue`.
pub type InlineValueClientCapabilities = DynamicRegistrationClientCapabilities;
/// Capabilities of `textDocument/inlineCompletion`.
pub type InlineCompletionClientCapabilities = DynamicRegistrationClientCapabilities;

/// Capabilities of `textDocument/inlayHint`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlayHintClientCapabilities {
    /// Whether inlay hints support dynamic registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    /// Properties the client resolves lazily.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_support: Option<ClientInlayHintResolveOptions>,
}

/// Capabilities of `textDocument/diagnostic`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticClientCapabilities {
    /// Whether pull diagnostics support dynamic registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    /// The client supports related documents in reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_document_support: Option<bool>,
    /// The client accepts related information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_information: Option<bool>,
    /// Supported diagnostic tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_support: Option<ClientDiagnosticsTagOptions>,
    /// The client supports code descriptions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_description_support: Option<bool>,
    /// The client preserves the `data` property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_support: Option<bool>,
}

// ---------------------------------------------------------------------------
// Notebooks, window and general
// ---------------------------------------------------------------------------

/// Capabilities of notebook document synchronisation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookDocumentSyncClientCapabilities {
    /// Whether synchronisation supports dynamic registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    /// The client supports sending execution summaries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_summary_support: Option<bool>,
}

/// Notebook document specific client capabilities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookDocumentClientCapabilities {
    /// Notebook synchronisation capabilities.
    pub synchronization: NotebookDocumentSyncClientCapabilities,
}

/// Message action item capabilities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientShowMessageActionItemOptions {
    /// The client preserves additional properties on action items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties_support: Option<bool>,
}

/// Capabilities of `window/showMessageRequest`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowMessageRequestClientCapabilities {
    /// Message action item capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_action_item: Option<ClientShowMessageActionItemOptions>,
}

/// Capabilities of `window/showDocument`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowDocumentClientCapabilities {
    /// The client supports the request.
    pub support: bool,
}

/// Window specific client capabilities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowClientCapabilities {
    /// The client supports server-initiated progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
    /// Capabilities of `window/showMessageRequest`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_message: Option<ShowMessageRequestClientCapabilities>,
    /// Capabilities of `window/showDocument`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_document: Option<ShowDocumentClientCapabilities>,
}

/// How the client handles stale requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaleRequestSupportOptions {
    /// The client actively cancels the request.
    pub cancel: bool,
    /// Requests retried on `ContentModified`.
    pub retry_on_content_modified: Vec<String>,
}

/// Regular expression engine used by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegularExpressionsClientCapabilities {
    /// The engine's name.
    pub engine: RegularExpressionEngineKind,
    /// The engine's version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Markdown parser used by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkdownClientCapabilities {
    /// The parser's name.
    pub parser: String,
    /// The parser's version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// HTML tags the client allows in Markdown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_tags: Option<Vec<String>>,
}

/// General client capabilities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralClientCapabilities {
    /// How the client handles stale requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stale_request_support: Option<StaleRequestSupportOptions>,
    /// Regular expression engine capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular_expressions: Option<RegularExpressionsClientCapabilities>,
    /// Markdown parser capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<MarkdownClientCapabilities>,
    /// Position encodings the client supports, preferred first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_encodings: Option<Vec<PositionEncodingKind>>,
}
