//! Request catalogue.
//!
//! One uninhabited marker per request method binds the method to its params
//! and result types through [`LspRequest`](crate::message::LspRequest).
//! `XRequest` and `XResponse` name the envelopes for marker `X`.
//!
//! Entries without a `params` member carry [`LspNull`] and their requests
//! encode without `params`. Methods without a result use [`LspNull`] too.

use crate::types::{self, LspNull};

lsp_requests! {
    /// A request to resolve the implementation locations of a symbol.
    Implementation => ImplementationRequest, ImplementationResponse {
        params: types::ImplementationParams,
        result: Option<types::GotoResult>,
    }
    /// A request to resolve the type definition locations of a symbol.
    TypeDefinition => TypeDefinitionRequest, TypeDefinitionResponse {
        params: types::TypeDefinitionParams,
        result: Option<types::GotoResult>,
    }
    /// Fetches the current open workspace folders.
    WorkspaceFolders => WorkspaceFoldersRequest, WorkspaceFoldersResponse {
        result: Option<Vec<types::WorkspaceFolder>>,
    }
    /// Fetches configuration settings from the client.
    Configuration => ConfigurationRequest, ConfigurationResponse {
        params: types::ConfigurationParams,
        result: Vec<types::LspAny>,
    }
    /// Lists the colour references found in a document.
    DocumentColor => DocumentColorRequest, DocumentColorResponse {
        params: types::DocumentColorParams,
        result: Vec<types::ColorInformation>,
    }
    /// Lists the presentations for a colour value.
    ColorPresentation => ColorPresentationRequest, ColorPresentationResponse {
        params: types::ColorPresentationParams,
        result: Vec<types::ColorPresentation>,
    }
    /// Provides folding ranges in a document.
    FoldingRange => FoldingRangeRequest, FoldingRangeResponse {
        params: types::FoldingRangeParams,
        result: Option<Vec<types::FoldingRange>>,
    }
    /// The `workspace/foldingRange/refresh` request.
    FoldingRangeRefresh => FoldingRangeRefreshRequest, FoldingRangeRefreshResponse {
        result: LspNull,
    }
    /// Resolves the declaration locations of a symbol.
    Declaration => DeclarationRequest, DeclarationResponse {
        params: types::DeclarationParams,
        result: Option<types::GotoResult>,
    }
    /// Provides selection ranges around positions.
    SelectionRange => SelectionRangeRequest, SelectionRangeResponse {
        params: types::SelectionRangeParams,
        result: Option<Vec<types::SelectionRange>>,
    }
    /// Asks the client to create a work done progress.
    WorkDoneProgressCreate => WorkDoneProgressCreateRequest, WorkDoneProgressCreateResponse {
        params: types::WorkDoneProgressCreateParams,
        result: LspNull,
    }
    /// Resolves the call hierarchy item at a position.
    CallHierarchyPrepare => CallHierarchyPrepareRequest, CallHierarchyPrepareResponse {
        params: types::CallHierarchyPrepareParams,
        result: Option<Vec<types::CallHierarchyItem>>,
    }
    /// Resolves the incoming calls for a call hierarchy item.
    CallHierarchyIncomingCalls => CallHierarchyIncomingCallsRequest, CallHierarchyIncomingCallsResponse {
        params: types::CallHierarchyIncomingCallsParams,
        result: Option<Vec<types::CallHierarchyIncomingCall>>,
    }
    /// Resolves the outgoing calls for a call hierarchy item.
    CallHierarchyOutgoingCalls => CallHierarchyOutgoingCallsRequest, CallHierarchyOutgoingCallsResponse {
        params: types::CallHierarchyOutgoingCallsParams,
        result: Option<Vec<types::CallHierarchyOutgoingCall>>,
    }
    /// The `textDocument/semanticTokens/full` request.
    SemanticTokens => SemanticTokensRequest, SemanticTokensResponse {
        params: types::SemanticTokensParams,
        result: Option<types::SemanticTokens>,
    }
    /// The `textDocument/semanticTokens/full/delta` request.
    SemanticTokensDelta => SemanticTokensDeltaRequest, SemanticTokensDeltaResponse {
        params: types::SemanticTokensDeltaParams,
        result: Option<types::SemanticTokensDeltaResult>,
    }
    /// The `textDocument/semanticTokens/range` request.
    SemanticTokensRange => SemanticTokensRangeRequest, SemanticTokensRangeResponse {
        params: types::SemanticTokensRangeParams,
        result: Option<types::SemanticTokens>,
    }
    /// The `workspace/semanticTokens/refresh` request.
    SemanticTokensRefresh => SemanticTokensRefreshRequest, SemanticTokensRefreshResponse {
        result: LspNull,
    }
    /// Asks the client to display a resource.
    ShowDocument => ShowDocumentRequest, ShowDocumentResponse {
        params: types::ShowDocumentParams,
        result: types::ShowDocumentResult,
    }
    /// The `textDocument/linkedEditingRange` request.
    LinkedEditingRange => LinkedEditingRangeRequest, LinkedEditingRangeResponse {
        params: types::LinkedEditingRangeParams,
        result: Option<types::LinkedEditingRanges>,
    }
    /// Sent before files are created, allowing the server to return edits.
    WillCreateFiles => WillCreateFilesRequest, WillCreateFilesResponse {
        params: types::CreateFilesParams,
        result: Option<types::WorkspaceEdit>,
    }
    /// The `workspace/willRenameFiles` request.
    WillRenameFiles => WillRenameFilesRequest, WillRenameFilesResponse {
        params: types::RenameFilesParams,
        result: Option<types::WorkspaceEdit>,
    }
    /// The `workspace/willDeleteFiles` request.
    WillDeleteFiles => WillDeleteFilesRequest, WillDeleteFilesResponse {
        params: types::DeleteFilesParams,
        result: Option<types::WorkspaceEdit>,
    }
    /// The `textDocument/moniker` request.
    Moniker => MonikerRequest, MonikerResponse {
        params: types::MonikerParams,
        result: Option<Vec<types::Moniker>>,
    }
    /// The `textDocument/prepareTypeHierarchy` request.
    TypeHierarchyPrepare => TypeHierarchyPrepareRequest, TypeHierarchyPrepareResponse {
        params: types::TypeHierarchyPrepareParams,
        result: Option<Vec<types::TypeHierarchyItem>>,
    }
    /// The `typeHierarchy/supertypes` request.
    TypeHierarchySupertypes => TypeHierarchySupertypesRequest, TypeHierarchySupertypesResponse {
        params: types::TypeHierarchySupertypesParams,
        result: Option<Vec<types::TypeHierarchyItem>>,
    }
    /// The `typeHierarchy/subtypes` request.
    TypeHierarchySubtypes => TypeHierarchySubtypesRequest, TypeHierarchySubtypesResponse {
        params: types::TypeHierarchySubtypesParams,
        result: Option<Vec<types::TypeHierarchyItem>>,
    }
    /// The `textDocument/inlineValue` request.
    InlineValue => InlineValueRequest, InlineValueResponse {
        params: types::InlineValueParams,
        result: Option<Vec<types::InlineValue>>,
    }
    /// The `workspace/inlineValue/refresh` request.
    InlineValueRefresh => InlineValueRefreshRequest, InlineValueRefreshResponse {
        result: LspNull,
    }
    /// The `textDocument/inlayHint` request.
    InlayHint => InlayHintRequest, InlayHintResponse {
        params: types::InlayHintParams,
        result: Option<Vec<types::InlayHint>>,
    }
    /// The `inlayHint/resolve` request.
    InlayHintResolve => InlayHintResolveRequest, InlayHintResolveResponse {
        params: types::InlayHint,
        result: types::InlayHint,
    }
    /// The `workspace/inlayHint/refresh` request.
    InlayHintRefresh => InlayHintRefreshRequest, InlayHintRefreshResponse {
        result: LspNull,
    }
    /// Pulls the diagnostics of one document.
    DocumentDiagnostic => DocumentDiagnosticRequest, DocumentDiagnosticResponse {
        params: types::DocumentDiagnosticParams,
        result: types::DocumentDiagnosticReport,
    }
    /// Pulls the diagnostics of the whole workspace.
    WorkspaceDiagnostic => WorkspaceDiagnosticRequest, WorkspaceDiagnosticResponse {
        params: types::WorkspaceDiagnosticParams,
        result: types::WorkspaceDiagnosticReport,
    }
    /// The `workspace/diagnostic/refresh` request.
    DiagnosticRefresh => DiagnosticRefreshRequest, DiagnosticRefreshResponse {
        result: LspNull,
    }
    /// The `textDocument/inlineCompletion` request.
    InlineCompletion => InlineCompletionRequest, InlineCompletionResponse {
        params: types::InlineCompletionParams,
        result: Option<types::InlineCompletionResponseValue>,
    }
    /// The `workspace/textDocumentContent` request.
    TextDocumentContent => TextDocumentContentRequest, TextDocumentContentResponse {
        params: types::TextDocumentContentParams,
        result: types::TextDocumentContentResult,
    }
    /// The `workspace/textDocumentContent/refresh` request.
    TextDocumentContentRefresh => TextDocumentContentRefreshRequest, TextDocumentContentRefreshResponse {
        params: types::TextDocumentContentRefreshParams,
        result: LspNull,
    }
    /// Registers a capability dynamically.
    Registration => RegistrationRequest, RegistrationResponse {
        params: types::RegistrationParams,
        result: LspNull,
    }
    /// The `client/unregisterCapability` request.
    Unregistration => UnregistrationRequest, UnregistrationResponse {
        params: types::UnregistrationParams,
        result: LspNull,
    }
    /// The first request a client sends.
    Initialize => InitializeRequest, InitializeResponse {
        params: types::InitializeParams,
        result: types::InitializeResult,
    }
    /// Asks the server to shut down without exiting.
    Shutdown => ShutdownRequest, ShutdownResponse {
        result: LspNull,
    }
    /// The `window/showMessageRequest` request.
    ShowMessageRequest => ShowMessageRequestRequest, ShowMessageRequestResponse {
        params: types::ShowMessageRequestParams,
        result: Option<types::MessageActionItem>,
    }
    /// The `textDocument/willSaveWaitUntil` request.
    WillSaveTextDocumentWaitUntil => WillSaveTextDocumentWaitUntilRequest, WillSaveTextDocumentWaitUntilResponse {
        params: types::WillSaveTextDocumentParams,
        result: Option<Vec<types::TextEdit>>,
    }
    /// Requests completion items at a position.
    Completion => CompletionRequest, CompletionResponse {
        params: types::CompletionParams,
        result: Option<types::CompletionResponseValue>,
    }
    /// The `completionItem/resolve` request.
    CompletionResolve => CompletionResolveRequest, CompletionResolveResponse {
        params: types::CompletionItem,
        result: types::CompletionItem,
    }
    /// Requests hover information at a position.
    Hover => HoverRequest, HoverResponse {
        params: types::HoverParams,
        result: Option<types::Hover>,
    }
    /// The `textDocument/signatureHelp` request.
    SignatureHelp => SignatureHelpRequest, SignatureHelpResponse {
        params: types::SignatureHelpParams,
        result: Option<types::SignatureHelp>,
    }
    /// The `textDocument/definition` request.
    Definition => DefinitionRequest, DefinitionResponse {
        params: types::DefinitionParams,
        result: Option<types::GotoResult>,
    }
    /// The `textDocument/references` request.
    References => ReferencesRequest, ReferencesResponse {
        params: types::ReferenceParams,
        result: Option<Vec<types::Location>>,
    }
    /// The `textDocument/documentHighlight` request.
    DocumentHighlight => DocumentHighlightRequest, DocumentHighlightResponse {
        params: types::DocumentHighlightParams,
        result: Option<Vec<types::DocumentHighlight>>,
    }
    /// The `textDocument/documentSymbol` request.
    DocumentSymbol => DocumentSymbolRequest, DocumentSymbolResponse {
        params: types::DocumentSymbolParams,
        result: Option<types::DocumentSymbolResult>,
    }
    /// The `textDocument/codeAction` request.
    CodeAction => CodeActionRequest, CodeActionResponse {
        params: types::CodeActionParams,
        result: Option<Vec<types::CommandOrCodeAction>>,
    }
    /// The `codeAction/resolve` request.
    CodeActionResolve => CodeActionResolveRequest, CodeActionResolveResponse {
        params: types::CodeAction,
        result: types::CodeAction,
    }
    /// The `workspace/symbol` request.
    WorkspaceSymbol => WorkspaceSymbolRequest, WorkspaceSymbolResponse {
        params: types::WorkspaceSymbolParams,
        result: Option<types::WorkspaceSymbolResult>,
    }
    /// The `workspaceSymbol/resolve` request.
    WorkspaceSymbolResolve => WorkspaceSymbolResolveRequest, WorkspaceSymbolResolveResponse {
        params: types::WorkspaceSymbol,
        result: types::WorkspaceSymbol,
    }
    /// The `textDocument/codeLens` request.
    CodeLens => CodeLensRequest, CodeLensResponse {
        params: types::CodeLensParams,
        result: Option<Vec<types::CodeLens>>,
    }
    /// The `codeLens/resolve` request.
    CodeLensResolve => CodeLensResolveRequest, CodeLensResolveResponse {
        params: types::CodeLens,
        result: types::CodeLens,
    }
    /// The `workspace/codeLens/refresh` request.
    CodeLensRefresh => CodeLensRefreshRequest, CodeLensRefreshResponse {
        result: LspNull,
    }
    /// The `textDocument/documentLink` request.
    DocumentLink => DocumentLinkRequest, DocumentLinkResponse {
        params: types::DocumentLinkParams,
        result: Option<Vec<types::DocumentLink>>,
    }
    /// The `documentLink/resolve` request.
    DocumentLinkResolve => DocumentLinkResolveRequest, DocumentLinkResolveResponse {
        params: types::DocumentLink,
        result: types::DocumentLink,
    }
    /// The `textDocument/formatting` request.
    DocumentFormatting => DocumentFormattingRequest, DocumentFormattingResponse {
        params: types::DocumentFormattingParams,
        result: Option<Vec<types::TextEdit>>,
    }
    /// The `textDocument/rangeFormatting` request.
    DocumentRangeFormatting => DocumentRangeFormattingRequest, DocumentRangeFormattingResponse {
        params: types::DocumentRangeFormattingParams,
        result: Option<Vec<types::TextEdit>>,
    }
    /// The `textDocument/rangesFormatting` request.
    DocumentRangesFormatting => DocumentRangesFormattingRequest, DocumentRangesFormattingResponse {
        params: types::DocumentRangesFormattingParams,
        result: Option<Vec<types::TextEdit>>,
    }
    /// The `textDocument/onTypeFormatting` request.
    DocumentOnTypeFormatting => DocumentOnTypeFormattingRequest, DocumentOnTypeFormattingResponse {
        params: types::DocumentOnTypeFormattingParams,
        result: Option<Vec<types::TextEdit>>,
    }
    /// The `textDocument/rename` request.
    Rename => RenameRequest, RenameResponse {
        params: types::RenameParams,
        result: Option<types::WorkspaceEdit>,
    }
    /// The `textDocument/prepareRename` request.
    PrepareRename => PrepareRenameRequest, PrepareRenameResponse {
        params: types::PrepareRenameParams,
        result: Option<types::PrepareRenameResult>,
    }
    /// The `workspace/executeCommand` request.
    ExecuteCommand => ExecuteCommandRequest, ExecuteCommandResponse {
        params: types::ExecuteCommandParams,
        result: types::LspAny,
    }
    /// Asks the client to apply a workspace edit.
    ApplyWorkspaceEdit => ApplyWorkspaceEditRequest, ApplyWorkspaceEditResponse {
        params: types::ApplyWorkspaceEditParams,
        result: types::ApplyWorkspaceEditResult,
    }
}
