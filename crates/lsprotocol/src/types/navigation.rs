//! Code navigation: go-to requests, references, highlights, symbols, links,
//! call and type hierarchies, monikers, selection ranges and linked editing.

use serde::{Deserialize, Serialize};

use super::base::{DocumentUri, LspAny, Uri};
use super::basic::{
    DocumentSelector, Location, LocationLink, Position, ProgressToken, Range,
    TextDocumentIdentifier,
};
use super::enums::{DocumentHighlightKind, MonikerKind, SymbolKind, SymbolTag, UniquenessLevel};
use super::workspace::SymbolInformation;

// ---------------------------------------------------------------------------
// Go to declaration, definition, type definition and implementation
// ---------------------------------------------------------------------------

/// Parameters shared by the go-to requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GotoParams {
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
}

/// Parameters of `textDocument/declaration`.
pub type DeclarationParams = GotoParams;
/// Parameters of `textDocument/definition`.
pub type DefinitionParams = GotoParams;
/// Parameters of `textDocument/typeDefinition`.
pub type TypeDefinitionParams = GotoParams;
/// Parameters of `textDocument/implementation`.
pub type ImplementationParams = GotoParams;

lsp_union! {
    /// One or more locations a symbol is defined or declared at.
    #[derive(Eq)]
    pub enum Definition {
        /// Single location.
        Location(Location),
        /// Several locations.
        Locations(Vec<Location>),
    }
}

/// The declaration of a symbol; same shape as [`Definition`].
pub type Declaration = Definition;

lsp_union! {
    /// The result of the go-to requests.
    #[derive(Eq)]
    pub enum GotoResult {
        /// Plain locations.
        Definition(Definition),
        /// Location links with origin ranges.
        Links(Vec<LocationLink>),
    }
}

/// Work-done progress options shared by features with no other settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureOptions {
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
}

/// Registration options for features that only scope a document selector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRegistrationOptions {
    /// Selector identifying the documents; `null` uses the client's selector.
    pub document_selector: Option<DocumentSelector>,
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
}

/// Registration options for features that also accept a static id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticFeatureRegistrationOptions {
    /// Selector identifying the documents; `null` uses the client's selector.
    pub document_selector: Option<DocumentSelector>,
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
    /// Id used to unregister the request again.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Server capabilities for go to declaration.
pub type DeclarationOptions = FeatureOptions;
/// Registration options for go to declaration.
pub type DeclarationRegistrationOptions = StaticFeatureRegistrationOptions;
/// Server capabilities for go to definition.
pub type DefinitionOptions = FeatureOptions;
/// Registration options for go to definition.
pub type DefinitionRegistrationOptions = FeatureRegistrationOptions;
/// Server capabilities for go to type definition.
pub type TypeDefinitionOptions = FeatureOptions;
/// Registration options for go to type definition.
pub type TypeDefinitionRegistrationOptions = StaticFeatureRegistrationOptions;
/// Server capabilities for go to implementation.
pub type ImplementationOptions = FeatureOptions;
/// Registration options for go to implementation.
pub type ImplementationRegistrationOptions = StaticFeatureRegistrationOptions;

// ---------------------------------------------------------------------------
// References and highlights
// ---------------------------------------------------------------------------

/// Extra context for a references request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceContext {
    /// Include the declaration of the current symbol.
    pub include_declaration: bool,
}

/// Parameters of `textDocument/references`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceParams {
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
    /// Request context.
    pub context: ReferenceContext,
}

/// Server capabilities for find references.
pub type ReferenceOptions = FeatureOptions;
/// Registration options for find references.
pub type ReferenceRegistrationOptions = FeatureRegistrationOptions;

/// Parameters of `textDocument/documentHighlight`.
pub type DocumentHighlightParams = GotoParams;

/// A range inside a document that deserves special attention.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentHighlight {
    /// The range this highlight applies to.
    pub range: Range,
    /// The highlight kind; `TEXT` when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<DocumentHighlightKind>,
}

/// Server capabilities for document highlights.
pub type DocumentHighlightOptions = FeatureOptions;
/// Registration options for document highlights.
pub type DocumentHighlightRegistrationOptions = FeatureRegistrationOptions;

// ---------------------------------------------------------------------------
// Document symbols
// ---------------------------------------------------------------------------

/// Parameters of `textDocument/documentSymbol`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSymbolParams {
    /// Token reporting work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_token: Option<ProgressToken>,
    /// Token reporting partial results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_result_token: Option<ProgressToken>,
    /// The text document.
    pub text_document: TextDocumentIdentifier,
}

/// A hierarchical symbol inside a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSymbol {
    /// The name of this symbol.
    pub name: String,
    /// More detail, like the signature of a function.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// The kind of this symbol.
    pub kind: SymbolKind,
    /// Tags for this symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<SymbolTag>>,
    /// Whether this symbol is deprecated. Superseded by `tags`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    /// The range enclosing this symbol, including its body.
    pub range: Range,
    /// The range to select when the symbol is picked, like its name.
    pub selection_range: Range,
    /// Children of this symbol, like the fields of a struct.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<DocumentSymbol>>,
}

lsp_union! {
    /// The result of `textDocument/documentSymbol`.
    #[derive(Eq)]
    pub enum DocumentSymbolResult {
        /// Flat symbol information.
        Information(Vec<SymbolInformation>),
        /// Hierarchical symbols.
        Symbols(Vec<DocumentSymbol>),
    }
}

/// Server capabilities for document symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSymbolOptions {
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
    /// Label shown when several outline trees are displayed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Registration options for document symbols.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSymbolRegistrationOptions {
    /// Selector identifying the documents; `null` uses the client's selector.
    pub document_selector: Option<DocumentSelector>,
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
    /// Label shown when several outline trees are displayed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

// ---------------------------------------------------------------------------
// Document links
// ---------------------------------------------------------------------------

/// Parameters of `textDocument/documentLink`.
pub type DocumentLinkParams = DocumentSymbolParams;

/// A range in a document linking to an internal or external resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentLink {
    /// The range this link applies to.
    pub range: Range,
    /// The URI this link points to; resolved later when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Uri>,
    /// Tooltip shown when hovering over the link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    /// Data preserved between a document link and its resolve request.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::codec::nullable::present"
    )]
    pub data: Option<LspAny>,
}

/// Server capabilities for document links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentLinkOptions {
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
    /// Whether document links have a resolve provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_provider: Option<bool>,
}

/// Registration options for document links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentLinkRegistrationOptions {
    /// Selector identifying the documents; `null` uses the client's selector.
    pub document_selector: Option<DocumentSelector>,
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
    /// Whether document links have a resolve provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_provider: Option<bool>,
}

// ---------------------------------------------------------------------------
// Call hierarchy
// ---------------------------------------------------------------------------

/// Parameters of `textDocument/prepareCallHierarchy`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallHierarchyPrepareParams {
    /// The text document.
    pub text_document: TextDocumentIdentifier,
    /// The position inside the text document.
    pub position: Position,
    /// Token reporting work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_token: Option<ProgressToken>,
}

/// A programming construct in the context of call hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallHierarchyItem {
    /// The name of this item.
    pub name: String,
    /// The kind of this item.
    pub kind: SymbolKind,
    /// Tags for this item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<SymbolTag>>,
    /// More detail, like the signature of a function.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// The resource identifier of this item.
    pub uri: DocumentUri,
    /// The range enclosing this symbol.
    pub range: Range,
    /// The range to select when the item is picked.
    pub selection_range: Range,
    /// Data preserved between prepare and the incoming or outgoing calls.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::codec::nullable::present"
    )]
    pub data: Option<LspAny>,
}

/// Parameters of `callHierarchy/incomingCalls`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallHierarchyIncomingCallsParams {
    /// Token reporting work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_token: Option<ProgressToken>,
    /// Token reporting partial results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_result_token: Option<ProgressToken>,
    /// The item to find callers of.
    pub item: CallHierarchyItem,
}

/// An incoming call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallHierarchyIncomingCall {
    /// The item that makes the call.
    pub from: CallHierarchyItem,
    /// Ranges of the calls, relative to the caller.
    pub from_ranges: Vec<Range>,
}

/// Parameters of `callHierarchy/outgoingCalls`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallHierarchyOutgoingCallsParams {
    /// Token reporting work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_token: Option<ProgressToken>,
    /// Token reporting partial results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_result_token: Option<ProgressToken>,
    /// The item to find callees of.
    pub item: CallHierarchyItem,
}

/// An outgoing call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallHierarchyOutgoingCall {
    /// The item that is called.
    pub to: CallHierarchyItem,
    /// Ranges of the calls, relative to the caller.
    pub from_ranges: Vec<Range>,
}

/// Server capabilities for call hierarchy.
pub type CallHierarchyOptions = FeatureOptions;
/// Registration options for call hierarchy.
pub type CallHierarchyRegistrationOptions = StaticFeatureRegistrationOptions;

// ---------------------------------------------------------------------------
// Type hierarchy
// ---------------------------------------------------------------------------

/// Parameters of `textDocument/prepareTypeHierarchy`.
pub type TypeHierarchyPrepareParams = CallHierarchyPrepareParams;

/// A programming construct in the context of type hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeHierarchyItem {
    /// The name of this item.
    pub name: String,
    /// The kind of this item.
    pub kind: SymbolKind,
    /// Tags for this item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<SymbolTag>>,
    /// More detail, like the signature of a function.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// The resource identifier of this item.
    pub uri: DocumentUri,
    /// The range enclosing this symbol.
    pub range: Range,
    /// The range to select when the item is picked.
    pub selection_range: Range,
    /// Data preserved between prepare and the supertypes or subtypes calls.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::codec::nullable::present"
    )]
    pub data: Option<LspAny>,
}

/// Parameters of `typeHierarchy/supertypes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeHierarchySupertypesParams {
    /// Token reporting work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_token: Option<ProgressToken>,
    /// Token reporting partial results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_result_token: Option<ProgressToken>,
    /// The item to find supertypes of.
    pub item: TypeHierarchyItem,
}

/// Parameters of `typeHierarchy/subtypes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeHierarchySubtypesParams {
    /// Token reporting work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_token: Option<ProgressToken>,
    /// Token reporting partial results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_result_token: Option<ProgressToken>,
    /// The item to find subtypes of.
    pub item: TypeHierarchyItem,
}

/// Server capabilities for type hierarchy.
pub type TypeHierarchyOptions = FeatureOptions;
/// Registration options for type hierarchy.
pub type TypeHierarchyRegistrationOptions = StaticFeatureRegistrationOptions;

// ---------------------------------------------------------------------------
// Monikers
// ---------------------------------------------------------------------------

/// Parameters of `textDocument/moniker`.
pub type MonikerParams = GotoParams;

/// A symbol identifier stable across projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Moniker {
    /// The scheme of the moniker, for example `tsc` or `.Net`.
    pub scheme: String,
    /// The identifier, opaque within its scheme.
    pub identifier: String,
    /// The scope in which the moniker is unique.
    pub unique: UniquenessLevel,
    /// The moniker kind, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<MonikerKind>,
}

/// Server capabilities for monikers.
pub type MonikerOptions = FeatureOptions;
/// Registration options for monikers.
pub type MonikerRegistrationOptions = FeatureRegistrationOptions;

// ---------------------------------------------------------------------------
// Selection ranges and linked editing
// ---------------------------------------------------------------------------

/// Parameters of `textDocument/selectionRange`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRangeParams {
    /// Token reporting work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_token: Option<ProgressToken>,
    /// Token reporting partial results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_result_token: Option<ProgressToken>,
    /// The text document.
    pub text_document: TextDocumentIdentifier,
    /// The positions inside the text document.
    pub positions: Vec<Position>,
}

/// A selection range and its enclosing parents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRange {
    /// The range of this selection range.
    pub range: Range,
    /// The parent selection range containing this range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<SelectionRange>>,
}

/// Server capabilities for selection ranges.
pub type SelectionRangeOptions = FeatureOptions;
/// Registration options for selection ranges.
pub type SelectionRangeRegistrationOptions = StaticFeatureRegistrationOptions;

/// Parameters of `textDocument/linkedEditingRange`.
pub type LinkedEditingRangeParams = CallHierarchyPrepareParams;

/// Ranges that are edited together, like matching HTML tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedEditingRanges {
    /// Ranges of equal length and content that change together.
    pub ranges: Vec<Range>,
    /// Pattern describing valid contents of the ranges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_pattern: Option<String>,
}

/// Server capabilities for linked editing.
pub type LinkedEditingRangeOptions = FeatureOptions;
/// Registration options for linked editing.
pub type LinkedEditingRangeRegistrationOptions = StaticFeatureRegistrationOptions;
