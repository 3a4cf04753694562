//! Editing features: code actions, code lenses, formatting, rename, colours
//! and folding.

use serde::{Deserialize, Serialize};

use super::base::LspAny;
use super::basic::{
    Command, Diagnostic, DocumentSelector, Position, ProgressToken, Range,
    TextDocumentIdentifier, TextEdit, WorkspaceEdit,
};
use super::enums::{CodeActionKind, CodeActionTag, CodeActionTriggerKind, FoldingRangeKind};
use super::navigation::{DocumentSymbolParams, FeatureOptions, StaticFeatureRegistrationOptions};

// ---------------------------------------------------------------------------
// Code actions
// ---------------------------------------------------------------------------

/// Additional diagnostic information about the context of a code action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeActionContext {
    /// Diagnostics known on the client overlapping the requested range.
    pub diagnostics: Vec<Diagnostic>,
    /// Requested kinds of actions to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only: Option<Vec<CodeActionKind>>,
    /// Why code actions were requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_kind: Option<CodeActionTriggerKind>,
}

/// Parameters of `textDocument/codeAction`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeActionParams {
    /// Token reporting work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_token: Option<ProgressToken>,
    /// Token reporting partial results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_result_token: Option<ProgressToken>,
    /// The document in which the command was invoked.
    pub text_document: TextDocumentIdentifier,
    /// The range for which the command was invoked.
    pub range: Range,
    /// Context carrying additional information.
    pub context: CodeActionContext,
}

/// Why a code action is disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeActionDisabled {
    /// Human-readable description, shown in the UI.
    pub reason: String,
}

/// A change to perform in code, like a quick fix or refactoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeAction {
    /// A short, human-readable title.
    pub title: String,
    /// The kind of the code action, used to filter actions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<CodeActionKind>,
    /// The diagnostics this action resolves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<Vec<Diagnostic>>,
    /// Marks this as a preferred action, used by auto-fix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_preferred: Option<bool>,
    /// Marks the action as currently unavailable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<CodeActionDisabled>,
    /// The workspace edit this code action performs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit: Option<WorkspaceEdit>,
    /// A command executed after the edit is applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,
    /// Data preserved between a code action and its resolve request.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::codec::nullable::present"
    )]
    pub data: Option<LspAny>,
    /// Tags for this code action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<CodeActionTag>>,
}

lsp_union! {
    /// One entry of a code action response.
    pub enum CommandOrCodeAction {
        /// Bare command.
        Command(Command),
        /// Full code action.
        CodeAction(CodeAction),
    }
}

/// Documentation for a class of code actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeActionKindDocumentation {
    /// The kind of the code action being documented.
    pub kind: CodeActionKind,
    /// Command that shows the documentation.
    pub command: Command,
}

/// Server capabilities for code actions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeActionOptions {
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
    /// Code action kinds this server may return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_action_kinds: Option<Vec<CodeActionKind>>,
    /// Static documentation for classes of code actions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<Vec<CodeActionKindDocumentation>>,
    /// Whether the server resolves additional code action information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_provider: Option<bool>,
}

/// Registration options for code actions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeActionRegistrationOptions {
    /// Selector identifying the documents; `null` uses the client's selector.
    pub document_selector: Option<DocumentSelector>,
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
    /// Code action kinds this server may return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_action_kinds: Option<Vec<CodeActionKind>>,
    /// Static documentation for classes of code actions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<Vec<CodeActionKindDocumentation>>,
    /// Whether the server resolves additional code action information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_provider: Option<bool>,
}

// ---------------------------------------------------------------------------
// Code lenses
// ---------------------------------------------------------------------------

/// Parameters of `textDocument/codeLens`.
pub type CodeLensParams = DocumentSymbolParams;

/// A command shown inline with source text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeLens {
    /// The range this lens is valid for; one line only.
    pub range: Range,
    /// The command this lens represents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,
    /// Data preserved between a code lens and its resolve request.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::codec::nullable::present"
    )]
    pub data: Option<LspAny>,
}

/// Server capabilities for code lenses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeLensOptions {
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
    /// Whether code lenses have a resolve provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_provider: Option<bool>,
}

/// Registration options for code lenses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeLensRegistrationOptions {
    /// Selector identifying the documents; `null` uses the client's selector.
    pub document_selector: Option<DocumentSelector>,
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
    /// Whether code lenses have a resolve provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_provider: Option<bool>,
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Value-object describing what options formatting should use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingOptions {
    /// Size of a tab in spaces.
    pub tab_size: u32,
    /// Prefer spaces over tabs.
    pub insert_spaces: bool,
    /// Trim trailing whitespace on a line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim_trailing_whitespace: Option<bool>,
    /// Insert a newline character at the end of the file if missing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_final_newline: Option<bool>,
    /// Trim all newlines after the final newline at the end of the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim_final_newlines: Option<bool>,
}

/// Parameters of `textDocument/formatting`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFormattingParams {
    /// Token reporting work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_token: Option<ProgressToken>,
    /// The document to format.
    pub text_document: TextDocumentIdentifier,
    /// The format options.
    pub options: FormattingOptions,
}

/// Parameters of `textDocument/rangeFormatting`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRangeFormattingParams {
    /// Token reporting work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_token: Option<ProgressToken>,
    /// The document to format.
    pub text_document: TextDocumentIdentifier,
    /// The range to format.
    pub range: Range,
    /// The format options.
    pub options: FormattingOptions,
}

/// Parameters of `textDocument/rangesFormatting`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRangesFormattingParams {
    /// Token reporting work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_token: Option<ProgressToken>,
    /// The document to format.
    pub text_document: TextDocumentIdentifier,
    /// The ranges to format.
    pub ranges: Vec<Range>,
    /// The format options.
    pub options: FormattingOptions,
}

/// Parameters of `textDocument/onTypeFormatting`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentOnTypeFormattingParams {
    /// The document to format.
    pub text_document: TextDocumentIdentifier,
    /// The position around which on-type formatting applies.
    pub position: Position,
    /// The character that was typed.
    pub ch: String,
    /// The format options.
    pub options: FormattingOptions,
}

/// Server capabilities for document formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFormattingOptions {
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
}

/// Registration options for document formatting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFormattingRegistrationOptions {
    /// Selector identifying the documents; `null` uses the client's selector.
    pub document_selector: Option<DocumentSelector>,
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
}

/// Server capabilities for range formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRangeFormattingOptions {
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
    /// Whether the server supports formatting several ranges at once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranges_support: Option<bool>,
}

/// Registration options for range formatting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRangeFormattingRegistrationOptions {
    /// Selector identifying the documents; `null` uses the client's selector.
    pub document_selector: Option<DocumentSelector>,
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
    /// Whether the server supports formatting several ranges at once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranges_support: Option<bool>,
}

/// Server capabilities for on-type formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentOnTypeFormattingOptions {
    /// A character on which formatting should be triggered, like `{`.
    pub first_trigger_character: String,
    /// More trigger characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_trigger_character: Option<Vec<String>>,
}

/// Registration options for on-type formatting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentOnTypeFormattingRegistrationOptions {
    /// Selector identifying the documents; `null` uses the client's selector.
    pub document_selector: Option<DocumentSelector>,
    /// A character on which formatting should be triggered, like `{`.
    pub first_trigger_character: String,
    /// More trigger characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_trigger_character: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Rename
// ---------------------------------------------------------------------------

/// Parameters of `textDocument/rename`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameParams {
    /// The document to rename in.
    pub text_document: TextDocumentIdentifier,
    /// The position at which this request was sent.
    pub position: Position,
    /// The new name of the symbol.
    pub new_name: String,
    /// Token reporting work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_token: Option<ProgressToken>,
}

/// Server capabilities for rename.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameOptions {
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
    /// Renames should be checked and tested before being executed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prepare_provider: Option<bool>,
}

/// Registration options for rename.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameRegistrationOptions {
    /// Selector identifying the documents; `null` uses the client's selector.
    pub document_selector: Option<DocumentSelector>,
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
    /// Renames should be checked and tested before being executed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prepare_provider: Option<bool>,
}

/// Parameters of `textDocument/prepareRename`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepareRenameParams {
    /// The text document.
    pub text_document: TextDocumentIdentifier,
    /// The position inside the text document.
    pub position: Position,
    /// Token reporting work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_token: Option<ProgressToken>,
}

/// A rename range with a placeholder text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepareRenamePlaceholder {
    /// The range of the string to rename.
    pub range: Range,
    /// Placeholder text of the string content to be renamed.
    pub placeholder: String,
}

/// Asks the client to use its default rename behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepareRenameDefaultBehavior {
    /// Always `true` when sent.
    pub default_behavior: bool,
}

lsp_union! {
    /// The result of `textDocument/prepareRename`.
    #[derive(Eq)]
    pub enum PrepareRenameResult {
        /// The range of the string to rename.
        Range(Range),
        /// A range with a placeholder.
        Placeholder(PrepareRenamePlaceholder),
        /// Use the client's default behaviour.
        DefaultBehavior(PrepareRenameDefaultBehavior),
    }
}

// ---------------------------------------------------------------------------
// Colours
// ---------------------------------------------------------------------------

/// Parameters of `textDocument/documentColor`.
pub type DocumentColorParams = DocumentSymbolParams;

/// A colour in RGBA space, each component in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// The red component.
    pub red: f64,
    /// The green component.
    pub green: f64,
    /// The blue component.
    pub blue: f64,
    /// The alpha component.
    pub alpha: f64,
}

/// A colour range inside a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorInformation {
    /// The range in the document where this colour appears.
    pub range: Range,
    /// The actual colour value.
    pub color: Color,
}

/// Parameters of `textDocument/colorPresentation`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPresentationParams {
    /// Token reporting work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_token: Option<ProgressToken>,
    /// Token reporting partial results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_result_token: Option<ProgressToken>,
    /// The text document.
    pub text_document: TextDocumentIdentifier,
    /// The colour to request presentations for.
    pub color: Color,
    /// The range where the colour would be inserted.
    pub range: Range,
}

/// A textual presentation of a colour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPresentation {
    /// The label of this presentation, also inserted by default.
    pub label: String,
    /// The edit applied when selecting this presentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_edit: Option<TextEdit>,
    /// Additional edits applied when selecting this presentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_text_edits: Option<Vec<TextEdit>>,
}

/// Server capabilities for document colours.
pub type DocumentColorOptions = FeatureOptions;
/// Registration options for document colours.
pub type DocumentColorRegistrationOptions = StaticFeatureRegistrationOptions;

// ---------------------------------------------------------------------------
// Folding
// ---------------------------------------------------------------------------

/// Parameters of `textDocument/foldingRange`.
pub type FoldingRangeParams = DocumentSymbolParams;

/// A foldable range in a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoldingRange {
    /// The zero-based start line of the range to fold.
    pub start_line: u32,
    /// The zero-based character offset where the folded range starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_character: Option<u32>,
    /// The zero-based end line of the range to fold.
    pub end_line: u32,
    /// The zero-based character offset before the folded range ends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_character: Option<u32>,
    /// The kind of folding range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<FoldingRangeKind>,
    /// Text shown when the range is collapsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed_text: Option<String>,
}

/// Server capabilities for folding ranges.
pub type FoldingRangeOptions = FeatureOptions;
/// Registration options for folding ranges.
pub type FoldingRangeRegistrationOptions = StaticFeatureRegistrationOptions;
