//! Semantic tokens, inlay hints and inline values.

use serde::{Deserialize, Serialize};

use super::base::LspAny;
use super::basic::{
    Command, DocumentSelector, Location, Position, ProgressToken, Range, TextDocumentIdentifier,
    TextEdit,
};
use super::completion::StringOrMarkupContent;
use super::enums::InlayHintKind;
use super::navigation::{DocumentSymbolParams, FeatureOptions, StaticFeatureRegistrationOptions};

// ---------------------------------------------------------------------------
// Semantic tokens
// ---------------------------------------------------------------------------

/// Token types and modifiers a server uses, indexed by the encoded tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticTokensLegend {
    /// The token types a server uses.
    pub token_types: Vec<String>,
    /// The token modifiers a server uses.
    pub token_modifiers: Vec<String>,
}

/// Parameters of `textDocument/semanticTokens/full`.
pub type SemanticTokensParams = DocumentSymbolParams;

/// Parameters of `textDocument/semanticTokens/full/delta`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticTokensDeltaParams {
    /// Token reporting work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_token: Option<ProgressToken>,
    /// Token reporting partial results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_result_token: Option<ProgressToken>,
    /// The text document.
    pub text_document: TextDocumentIdentifier,
    /// The result id of a previous response.
    pub previous_result_id: String,
}

/// Parameters of `textDocument/semanticTokens/range`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticTokensRangeParams {
    /// Token reporting work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_token: Option<ProgressToken>,
    /// Token reporting partial results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_result_token: Option<ProgressToken>,
    /// The text document.
    pub text_document: TextDocumentIdentifier,
    /// The range the semantic tokens are requested for.
    pub range: Range,
}

/// Encoded semantic tokens for a document or range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticTokens {
    /// Identifier for delta requests against this result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_id: Option<String>,
    /// The actual tokens, five integers per token.
    pub data: Vec<u32>,
}

/// Partial result of a semantic tokens request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticTokensPartialResult {
    /// Token data.
    pub data: Vec<u32>,
}

/// A single edit against a previous token array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticTokensEdit {
    /// The start offset of the edit.
    pub start: u32,
    /// The count of elements to remove.
    pub delete_count: u32,
    /// The elements to insert.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<u32>>,
}

/// Edits against a previous semantic tokens result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticTokensDelta {
    /// Identifier for further delta requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_id: Option<String>,
    /// The semantic token edits to transform a previous result.
    pub edits: Vec<SemanticTokensEdit>,
}

/// Partial result of a semantic tokens delta request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticTokensDeltaPartialResult {
    /// Token edits.
    pub edits: Vec<SemanticTokensEdit>,
}

lsp_union! {
    /// The result of a delta request: either full tokens or edits.
    #[derive(Eq)]
    pub enum SemanticTokensDeltaResult {
        /// A full replacement.
        Tokens(SemanticTokens),
        /// Edits against the previous result.
        Delta(SemanticTokensDelta),
    }
}

/// Marker object enabling range requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticTokensRangeOptions {}

/// Options for full-document semantic tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticTokensFullDelta {
    /// The server supports deltas for full documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<bool>,
}

lsp_union! {
    /// Whether range requests are supported.
    #[derive(Eq)]
    pub enum SemanticTokensRangeProvider {
        /// Plain switch.
        Bool(bool),
        /// Enabled with (empty) options.
        Options(SemanticTokensRangeOptions),
    }
}

lsp_union! {
    /// Whether full-document requests are supported.
    #[derive(Eq)]
    pub enum SemanticTokensFullProvider {
        /// Plain switch.
        Bool(bool),
        /// Enabled with delta support settings.
        Options(SemanticTokensFullDelta),
    }
}

/// Server capabilities for semantic tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticTokensOptions {
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
    /// The legend used by the server.
    pub legend: SemanticTokensLegend,
    /// Range requests support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<SemanticTokensRangeProvider>,
    /// Full-document requests support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full: Option<SemanticTokensFullProvider>,
}

/// Registration options for semantic tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticTokensRegistrationOptions {
    /// Selector identifying the documents; `null` uses the client's selector.
    pub document_selector: Option<DocumentSelector>,
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
    /// The legend used by the server.
    pub legend: SemanticTokensLegend,
    /// Range requests support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<SemanticTokensRangeProvider>,
    /// Full-document requests support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full: Option<SemanticTokensFullProvider>,
    /// Id used to unregister the request again.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

// ---------------------------------------------------------------------------
// Inlay hints
// ---------------------------------------------------------------------------

/// Parameters of `textDocument/inlayHint`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlayHintParams {
    /// Token reporting work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_token: Option<ProgressToken>,
    /// The text document.
    pub text_document: TextDocumentIdentifier,
    /// The visible document range for which hints should be computed.
    pub range: Range,
}

/// One interactive part of an inlay hint label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InlayHintLabelPart {
    /// The value of this label part.
    pub value: String,
    /// Tooltip text shown on hover.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<StringOrMarkupContent>,
    /// Source code location this part links to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Command run when this part is clicked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,
}

lsp_union! {
    /// The label of an inlay hint.
    pub enum InlayHintLabel {
        /// Plain text.
        String(String),
        /// Interactive label parts.
        Parts(Vec<InlayHintLabelPart>),
    }
}

/// Inline annotation such as a parameter name or inferred type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlayHint {
    /// The position of this hint.
    pub position: Position,
    /// The label of this hint.
    pub label: InlayHintLabel,
    /// The kind of this hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<InlayHintKind>,
    /// Edits performed when accepting this hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_edits: Option<Vec<TextEdit>>,
    /// The tooltip text shown on hover.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<StringOrMarkupContent>,
    /// Render padding before the hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<bool>,
    /// Render padding after the hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<bool>,
    /// Data preserved between an inlay hint and its resolve request.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::codec::nullable::present"
    )]
    pub data: Option<LspAny>,
}

/// Server capabilities for inlay hints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlayHintOptions {
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
    /// The server provides support to resolve additional information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_provider: Option<bool>,
}

/// Registration options for inlay hints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlayHintRegistrationOptions {
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
    /// The server provides support to resolve additional information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_provider: Option<bool>,
    /// Selector identifying the documents; `null` uses the client's selector.
    pub document_selector: Option<DocumentSelector>,
    /// Id used to unregister the request again.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

// ---------------------------------------------------------------------------
// Inline values
// ---------------------------------------------------------------------------

/// Debugger state in which inline values are requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineValueContext {
    /// The stack frame where execution has stopped.
    pub frame_id: i32,
    /// The range where execution has stopped.
    pub stopped_location: Range,
}

/// Parameters of `textDocument/inlineValue`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineValueParams {
    /// Token reporting work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_token: Option<ProgressToken>,
    /// The text document.
    pub text_document: TextDocumentIdentifier,
    /// The document range for which inline values should be computed.
    pub range: Range,
    /// Additional information about the debugger context.
    pub context: InlineValueContext,
}

/// Inline value provided as literal text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineValueText {
    /// The document range the value applies to.
    pub range: Range,
    /// The text of the inline value.
    pub text: String,
}

/// Inline value resolved through a variable lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineValueVariableLookup {
    /// The document range the value applies to.
    pub range: Range,
    /// Variable name to look up; taken from the range when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_name: Option<String>,
    /// How to perform the lookup.
    pub case_sensitive_lookup: bool,
}

/// Inline value computed by evaluating an expression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineValueEvaluatableExpression {
    /// The document range the value applies to.
    pub range: Range,
    /// Expression to evaluate; taken from the range when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
}

lsp_union! {
    /// One inline value shown by a debugger.
    #[derive(Eq)]
    pub enum InlineValue {
        /// Literal text.
        Text(InlineValueText),
        /// Variable lookup.
        VariableLookup(InlineValueVariableLookup),
        /// Expression evaluation.
        EvaluatableExpression(InlineValueEvaluatableExpression),
    }
}

/// Server capabilities for inline values.
pub type InlineValueOptions = FeatureOptions;
/// Registration options for inline values.
pub type InlineValueRegistrationOptions = StaticFeatureRegistrationOptions;
