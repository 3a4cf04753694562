//! Hover, completion, signature help and inline completion.

use serde::{Deserialize, Serialize};

use super::base::LspAny;
use super::basic::{
    Command, DocumentSelector, MarkedString, MarkupContent, Position, ProgressToken, Range,
    StringValue, TextDocumentIdentifier, TextEdit,
};
use super::enums::{
    ApplyKind, CompletionItemKind, CompletionItemTag, CompletionTriggerKind,
    InlineCompletionTriggerKind, InsertTextFormat, InsertTextMode, SignatureHelpTriggerKind,
};
use crate::codec::Tuple;

lsp_union! {
    /// Plain text or rich markup content.
    #[derive(Eq)]
    pub enum StringOrMarkupContent {
        /// Plain string.
        String(String),
        /// Markup content.
        Markup(MarkupContent),
    }
}

// ---------------------------------------------------------------------------
// Hover
// ---------------------------------------------------------------------------

/// Parameters of `textDocument/hover`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverParams {
    /// The text document.
    pub text_document: TextDocumentIdentifier,
    /// The position inside the text document.
    pub position: Position,
    /// Token reporting work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_token: Option<ProgressToken>,
}

lsp_union! {
    /// The contents of a hover.
    #[derive(Eq)]
    pub enum HoverContents {
        /// Markup content.
        Markup(MarkupContent),
        /// A single marked string.
        Marked(MarkedString),
        /// Several marked strings.
        MarkedList(Vec<MarkedString>),
    }
}

/// The result of a hover request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hover {
    /// The hover's content.
    pub contents: HoverContents,
    /// Range used to visualise the hover.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
}

/// Server capabilities for hovers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverOptions {
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
}

/// Registration options for hovers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverRegistrationOptions {
    /// Selector identifying the documents; `null` uses the client's selector.
    pub document_selector: Option<DocumentSelector>,
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
}

// ---------------------------------------------------------------------------
// Completion
// ---------------------------------------------------------------------------

/// Additional information about how completion was triggered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionContext {
    /// How the completion was triggered.
    pub trigger_kind: CompletionTriggerKind,
    /// The trigger character, when `trigger_kind` is `TRIGGER_CHARACTER`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_character: Option<String>,
}

/// Parameters of `textDocument/completion`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionParams {
    /// The text document.
    pub text_document: TextDocumentIdentifier,
    /// The position inside the text document.
    pub position: Position,
    /// Token reporting work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_token: Option<ProgressToken>,
    /// Token reporting partial results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_result_token: Option<ProgressToken>,
    /// The completion context, when the client signals it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<CompletionContext>,
}

/// Additional details for a completion item label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionItemLabelDetails {
    /// Rendered less prominently directly after the label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Rendered less prominently after `detail`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A special text edit providing separate insert and replace ranges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertReplaceEdit {
    /// The string to be inserted.
    pub new_text: String,
    /// The range if the insert is requested.
    pub insert: Range,
    /// The range if the replace is requested.
    pub replace: Range,
}

lsp_union! {
    /// The edit applied when a completion item is selected.
    #[derive(Eq)]
    pub enum CompletionTextEdit {
        /// Single-range edit.
        Edit(TextEdit),
        /// Edit with insert and replace ranges.
        InsertReplace(InsertReplaceEdit),
    }
}

/// A completion entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionItem {
    /// The label of this completion item, also inserted by default.
    pub label: String,
    /// Additional details for the label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_details: Option<CompletionItemLabelDetails>,
    /// The kind of this completion item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<CompletionItemKind>,
    /// Tags for this completion item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<CompletionItemTag>>,
    /// Additional information, like type or symbol information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// A doc-comment for the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<StringOrMarkupContent>,
    /// Whether this item is deprecated. Superseded by `tags`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    /// Select this item when showing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preselect: Option<bool>,
    /// Sort key; `label` is used when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_text: Option<String>,
    /// Filter key; `label` is used when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_text: Option<String>,
    /// Text inserted when the item is selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_text: Option<String>,
    /// Format of the insert text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_text_format: Option<InsertTextFormat>,
    /// How whitespace and indentation is handled during insertion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_text_mode: Option<InsertTextMode>,
    /// The edit applied to the document when selecting this item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_edit: Option<CompletionTextEdit>,
    /// Edit text used with the list's default edit range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_edit_text: Option<String>,
    /// Additional edits unrelated to the cursor position, like imports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_text_edits: Option<Vec<TextEdit>>,
    /// Characters that accept this item when typed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_characters: Option<Vec<String>>,
    /// Command executed after inserting this item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,
    /// Data preserved between a completion and its resolve request.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::codec::nullable::present"
    )]
    pub data: Option<LspAny>,
}

/// Separate insert and replace ranges for a list's default edit range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditRangeWithInsertReplace {
    /// The insert range.
    pub insert: Range,
    /// The replace range.
    pub replace: Range,
}

lsp_union! {
    /// A default edit range for completion items.
    #[derive(Eq)]
    pub enum EditRange {
        /// Single range.
        Range(Range),
        /// Insert and replace ranges.
        InsertReplace(EditRangeWithInsertReplace),
    }
}

/// Defaults applied to the items of a completion list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionItemDefaults {
    /// Default commit characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_characters: Option<Vec<String>>,
    /// Default edit range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_range: Option<EditRange>,
    /// Default insert text format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_text_format: Option<InsertTextFormat>,
    /// Default insert text mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_text_mode: Option<InsertTextMode>,
    /// Default data value.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::codec::nullable::present"
    )]
    pub data: Option<LspAny>,
}

/// How item values combine with the list defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionItemApplyKinds {
    /// How commit characters combine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_characters: Option<ApplyKind>,
    /// How data combines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ApplyKind>,
}

/// A collection of completion items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionList {
    /// Whether further typing should recompute this list.
    pub is_incomplete: bool,
    /// Defaults for the items of this list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_defaults: Option<CompletionItemDefaults>,
    /// How item values combine with the defaults.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_kind: Option<CompletionItemApplyKinds>,
    /// The completion items.
    pub items: Vec<CompletionItem>,
}

lsp_union! {
    /// The result of a completion request.
    pub enum CompletionResponseValue {
        /// Bare item list.
        Items(Vec<CompletionItem>),
        /// Completion list.
        List(CompletionList),
    }
}

/// Completion item capabilities the server advertises.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerCompletionItemOptions {
    /// Whether the server supports label details on completion items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_details_support: Option<bool>,
}

/// Server capabilities for completion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionOptions {
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
    /// Characters that trigger completion automatically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_characters: Option<Vec<String>>,
    /// Characters that commit any completion item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_commit_characters: Option<Vec<String>>,
    /// Whether the server resolves additional item information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_provider: Option<bool>,
    /// Completion item capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_item: Option<ServerCompletionItemOptions>,
}

/// Registration options for completion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRegistrationOptions {
    /// Selector identifying the documents; `null` uses the client's selector.
    pub document_selector: Option<DocumentSelector>,
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
    /// Characters that trigger completion automatically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_characters: Option<Vec<String>>,
    /// Characters that commit any completion item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_commit_characters: Option<Vec<String>>,
    /// Whether the server resolves additional item information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_provider: Option<bool>,
    /// Completion item capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_item: Option<ServerCompletionItemOptions>,
}

// ---------------------------------------------------------------------------
// Signature help
// ---------------------------------------------------------------------------

lsp_union! {
    /// A parameter label: its text or its offsets inside the signature label.
    #[derive(Eq)]
    pub enum ParameterLabel {
        /// Substring of the signature label.
        String(String),
        /// Inclusive start and exclusive end offsets.
        Offsets(Tuple<u32, u32>),
    }
}

/// A parameter of a callable signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterInformation {
    /// The label of this parameter.
    pub label: ParameterLabel,
    /// The human-readable doc-comment of this parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<StringOrMarkupContent>,
}

/// The signature of something callable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureInformation {
    /// The label of this signature, shown in the UI.
    pub label: String,
    /// The human-readable doc-comment of this signature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<StringOrMarkupContent>,
    /// The parameters of this signature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ParameterInformation>>,
    /// Index of the active parameter; `null` means none is active.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::codec::nullable::deserialize"
    )]
    pub active_parameter: Option<Option<u32>>,
}

/// Signature information for the callable at the cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureHelp {
    /// One or more signatures.
    pub signatures: Vec<SignatureInformation>,
    /// The active signature.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::codec::nullable::deserialize"
    )]
    pub active_signature: Option<Option<u32>>,
    /// The active parameter of the active signature.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::codec::nullable::deserialize"
    )]
    pub active_parameter: Option<Option<u32>>,
}

/// Additional information about how signature help was triggered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureHelpContext {
    /// Action that caused signature help to be triggered.
    pub trigger_kind: SignatureHelpTriggerKind,
    /// Character that caused signature help to be triggered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_character: Option<String>,
    /// Whether signature help was already showing.
    pub is_retrigger: bool,
    /// The currently active signature help, with its active signature
    /// updated from user navigation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_signature_help: Option<SignatureHelp>,
}

/// Parameters of `textDocument/signatureHelp`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureHelpParams {
    /// The text document.
    pub text_document: TextDocumentIdentifier,
    /// The position inside the text document.
    pub position: Position,
    /// Token reporting work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_token: Option<ProgressToken>,
    /// The signature help context, when the client signals it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<SignatureHelpContext>,
}

/// Server capabilities for signature help.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureHelpOptions {
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
    /// Characters that trigger signature help automatically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_characters: Option<Vec<String>>,
    /// Characters that re-trigger signature help while it is showing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrigger_characters: Option<Vec<String>>,
}

/// Registration options for signature help.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureHelpRegistrationOptions {
    /// Selector identifying the documents; `null` uses the client's selector.
    pub document_selector: Option<DocumentSelector>,
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
    /// Characters that trigger signature help automatically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_characters: Option<Vec<String>>,
    /// Characters that re-trigger signature help while it is showing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrigger_characters: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Inline completion
// ---------------------------------------------------------------------------

/// The completion item currently selected in the widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedCompletionInfo {
    /// The range replaced if the item is accepted.
    pub range: Range,
    /// The text the range is replaced with.
    pub text: String,
}

/// Additional information about how inline completion was triggered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineCompletionContext {
    /// How the inline completion was triggered.
    pub trigger_kind: InlineCompletionTriggerKind,
    /// The selected completion item, if the widget is visible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_completion_info: Option<SelectedCompletionInfo>,
}

/// Parameters of `textDocument/inlineCompletion`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineCompletionParams {
    /// The text document.
    pub text_document: TextDocumentIdentifier,
    /// The position inside the text document.
    pub position: Position,
    /// Token reporting work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_token: Option<ProgressToken>,
    /// The inline completion context.
    pub context: InlineCompletionContext,
}

lsp_union! {
    /// Plain text or a snippet.
    #[derive(Eq)]
    pub enum StringOrStringValue {
        /// Plain text.
        String(String),
        /// Snippet.
        Snippet(StringValue),
    }
}

/// An inline completion suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineCompletionItem {
    /// The text to replace the range with.
    pub insert_text: StringOrStringValue,
    /// Text used to decide whether the item is shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_text: Option<String>,
    /// The range to replace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
    /// Command executed after inserting this item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,
}

/// A collection of inline completion items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InlineCompletionList {
    /// The inline completion items.
    pub items: Vec<InlineCompletionItem>,
}

lsp_union! {
    /// The result of an inline completion request.
    pub enum InlineCompletionResponseValue {
        /// Completion list.
        List(InlineCompletionList),
        /// Bare item list.
        Items(Vec<InlineCompletionItem>),
    }
}

/// Server capabilities for inline completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineCompletionOptions {
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
}

/// Registration options for inline completion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineCompletionRegistrationOptions {
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
    /// Selector identifying the documents; `null` uses the client's selector.
    pub document_selector: Option<DocumentSelector>,
    /// Id used to unregister the request again.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}
