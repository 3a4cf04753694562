//! Capabilities announced by the server in the initialise result.

use serde::{Deserialize, Serialize};

use super::base::LspAny;
use super::completion::{
    CompletionOptions, HoverOptions, InlineCompletionOptions, SignatureHelpOptions,
};
use super::diagnostics::{DiagnosticOptions, DiagnosticRegistrationOptions};
use super::document::{NotebookDocumentSync, TextDocumentSync};
use super::editing::{
    CodeActionOptions, CodeLensOptions, DocumentFormattingOptions,
    DocumentOnTypeFormattingOptions, DocumentRangeFormattingOptions, RenameOptions,
};
use super::enums::PositionEncodingKind;
use super::hints::{
    InlayHintOptions, InlayHintRegistrationOptions, SemanticTokensOptions,
    SemanticTokensRegistrationOptions,
};
use super::navigation::{
    DocumentLinkOptions, DocumentSymbolOptions, FeatureOptions, StaticFeatureRegistrationOptions,
};
use super::workspace::{
    ExecuteCommandOptions, FileOperationOptions, TextDocumentContentOptions,
    TextDocumentContentRegistrationOptions, WorkspaceFoldersServerCapabilities,
    WorkspaceSymbolOptions,
};

lsp_union! {
    /// A feature switch that may carry work-done options.
    #[derive(Eq)]
    pub enum BoolOrFeatureOptions {
        /// Plain switch.
        Bool(bool),
        /// Enabled with options.
        Options(FeatureOptions),
    }
}

lsp_union! {
    /// A feature switch that may carry options or static registration.
    pub enum FeatureProvider {
        /// Plain switch.
        Bool(bool),
        /// Enabled with options.
        Options(FeatureOptions),
        /// Enabled with static registration options.
        Registration(StaticFeatureRegistrationOptions),
    }
}

lsp_union! {
    /// Hover support.
    #[derive(Eq)]
    pub enum HoverProvider {
        /// Plain switch.
        Bool(bool),
        /// Enabled with options.
        Options(HoverOptions),
    }
}

lsp_union! {
    /// Document symbol support.
    pub enum DocumentSymbolProvider {
        /// Plain switch.
        Bool(bool),
        /// Enabled with options.
        Options(DocumentSymbolOptions),
    }
}

lsp_union! {
    /// Code action support.
    pub enum CodeActionProvider {
        /// Plain switch.
        Bool(bool),
        /// Enabled with options.
        Options(CodeActionOptions),
    }
}

lsp_union! {
    /// Workspace symbol support.
    pub enum WorkspaceSymbolProvider {
        /// Plain switch.
        Bool(bool),
        /// Enabled with options.
        Options(WorkspaceSymbolOptions),
    }
}

lsp_union! {
    /// Whole-document formatting support.
    #[derive(Eq)]
    pub enum DocumentFormattingProvider {
        /// Plain switch.
        Bool(bool),
        /// Enabled with options.
        Options(DocumentFormattingOptions),
    }
}

lsp_union! {
    /// Range formatting support.
    #[derive(Eq)]
    pub enum DocumentRangeFormattingProvider {
        /// Plain switch.
        Bool(bool),
        /// Enabled with options.
        Options(DocumentRangeFormattingOptions),
    }
}

lsp_union! {
    /// Rename support.
    #[derive(Eq)]
    pub enum RenameProvider {
        /// Plain switch.
        Bool(bool),
        /// Enabled with options.
        Options(RenameOptions),
    }
}

lsp_union! {
    /// Inlay hint support.
    pub enum InlayHintProvider {
        /// Plain switch.
        Bool(bool),
        /// Enabled with options.
        Options(InlayHintOptions),
        /// Enabled with registration options.
        Registration(InlayHintRegistrationOptions),
    }
}

lsp_union! {
    /// Inline completion support.
    pub enum InlineCompletionProvider {
        /// Plain switch.
        Bool(bool),
        /// Enabled with options.
        Options(InlineCompletionOptions),
    }
}

lsp_union! {
    /// Semantic token support.
    pub enum SemanticTokensProvider {
        /// Options only.
        Options(SemanticTokensOptions),
        /// Options with registration.
        Registration(SemanticTokensRegistrationOptions),
    }
}

lsp_union! {
    /// Pull diagnostic support.
    pub enum DiagnosticProvider {
        /// Options only.
        Options(DiagnosticOptions),
        /// Options with registration.
        Registration(DiagnosticRegistrationOptions),
    }
}

lsp_union! {
    /// Text document content support.
    pub enum TextDocumentContentProvider {
        /// Options only.
        Options(TextDocumentContentOptions),
        /// Options with registration.
        Registration(TextDocumentContentRegistrationOptions),
    }
}

/// Workspace specific server capabilities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceOptions {
    /// The server supports workspace folders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_folders: Option<WorkspaceFoldersServerCapabilities>,
    /// File operations the server is interested in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_operations: Option<FileOperationOptions>,
    /// The server supports `workspace/textDocumentContent`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_document_content: Option<TextDocumentContentProvider>,
}

/// Defines the capabilities provided by a language server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerCapabilities {
    /// The position encoding the server picked from the client's offer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_encoding: Option<PositionEncodingKind>,
    /// How text documents are synced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_document_sync: Option<TextDocumentSync>,
    /// How notebook documents are synced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook_document_sync: Option<NotebookDocumentSync>,
    /// Completion support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_provider: Option<CompletionOptions>,
    /// Hover support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_provider: Option<HoverProvider>,
    /// Signature help support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_help_provider: Option<SignatureHelpOptions>,
    /// Goto declaration support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declaration_provider: Option<FeatureProvider>,
    /// Goto definition support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition_provider: Option<BoolOrFeatureOptions>,
    /// Goto type definition support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_definition_provider: Option<FeatureProvider>,
    /// Goto implementation support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implementation_provider: Option<FeatureProvider>,
    /// Find references support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references_provider: Option<BoolOrFeatureOptions>,
    /// Document highlight support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_highlight_provider: Option<BoolOrFeatureOptions>,
    /// Document symbol support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_symbol_provider: Option<DocumentSymbolProvider>,
    /// Code action support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_action_provider: Option<CodeActionProvider>,
    /// Code lens support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_lens_provider: Option<CodeLensOptions>,
    /// Document link support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_link_provider: Option<DocumentLinkOptions>,
    /// Colour provider support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_provider: Option<FeatureProvider>,
    /// Workspace symbol support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_symbol_provider: Option<WorkspaceSymbolProvider>,
    /// Whole-document formatting support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_formatting_provider: Option<DocumentFormattingProvider>,
    /// Range formatting support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_range_formatting_provider: Option<DocumentRangeFormattingProvider>,
    /// On-type formatting support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_on_type_formatting_provider: Option<DocumentOnTypeFormattingOptions>,
    /// Rename support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rename_provider: Option<RenameProvider>,
    /// Folding range support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folding_range_provider: Option<FeatureProvider>,
    /// Selection range support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_range_provider: Option<FeatureProvider>,
    /// Execute command support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execute_command_provider: Option<ExecuteCommandOptions>,
    /// Call hierarchy support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_hierarchy_provider: Option<FeatureProvider>,
    /// Linked editing range support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_editing_range_provider: Option<FeatureProvider>,
    /// Semantic tokens support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic_tokens_provider: Option<SemanticTokensProvider>,
    /// Moniker support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moniker_provider: Option<FeatureProvider>,
    /// Type hierarchy support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_hierarchy_provider: Option<FeatureProvider>,
    /// Inline value support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_value_provider: Option<FeatureProvider>,
    /// Inlay hint support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inlay_hint_provider: Option<InlayHintProvider>,
    /// Pull diagnostic support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic_provider: Option<DiagnosticProvider>,
    /// Inline completion support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_completion_provider: Option<InlineCompletionProvider>,
    /// Workspace specific server capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<WorkspaceOptions>,
    /// Experimental server capabilities.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::codec::nullable::present"
    )]
    pub experimental: Option<LspAny>,
}
