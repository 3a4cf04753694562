//! Method registries.
//!
//! [`RequestMethod`] and [`NotificationMethod`] name every method of the
//! protocol by its exact wire string. Unrecognised strings map to the
//! reserved `Unknown` symbol, whose wire form is the empty string, so lookups
//! never fail; callers decide how to report methods they do not serve.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

macro_rules! method_registry {
    (
        $(#[$meta:meta])*
        pub enum $name:ident in $registry:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $wire:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            Display,
            EnumIter,
            EnumString,
            IntoStaticStr,
        )]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[strum(serialize = $wire)]
                $variant,
            )+
            /// A method outside the protocol.
            #[strum(serialize = "")]
            Unknown,
        }

        impl $name {
            /// Returns the exact wire string; empty for `Unknown`.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                self.into()
            }

            /// Resolves a wire string, yielding `Unknown` when it is not a
            /// protocol method.
            #[must_use]
            pub fn from_wire(method: &str) -> Self {
                $registry.get(method).copied().unwrap_or(Self::Unknown)
            }

            /// Reports whether this symbol names a protocol method.
            #[must_use]
            pub fn is_known(self) -> bool {
                self != Self::Unknown
            }
        }

        #[doc = concat!("Wire string to [`", stringify!($name), "`] lookup table.")]
        pub static $registry: Lazy<HashMap<&'static str, $name>> = Lazy::new(|| {
            $name::iter()
                .filter(|method| method.is_known())
                .map(|method| (method.as_str(), method))
                .collect()
        });

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let wire = String::deserialize(deserializer)?;
                Ok(Self::from_wire(&wire))
            }
        }
    };
}

method_registry! {
    /// Every request method, client-to-server and server-to-client.
    pub enum RequestMethod in REQUEST_METHODS {
        /// `textDocument/implementation`
        Implementation = "textDocument/implementation",
        /// `textDocument/typeDefinition`
        TypeDefinition = "textDocument/typeDefinition",
        /// `workspace/workspaceFolders`
        WorkspaceFolders = "workspace/workspaceFolders",
        /// `workspace/configuration`
        Configuration = "workspace/configuration",
        /// `textDocument/documentColor`
        DocumentColor = "textDocument/documentColor",
        /// `textDocument/colorPresentation`
        ColorPresentation = "textDocument/colorPresentation",
        /// `textDocument/foldingRange`
        FoldingRange = "textDocument/foldingRange",
        /// `workspace/foldingRange/refresh`
        FoldingRangeRefresh = "workspace/foldingRange/refresh",
        /// `textDocument/declaration`
        Declaration = "textDocument/declaration",
        /// `textDocument/selectionRange`
        SelectionRange = "textDocument/selectionRange",
        /// `window/workDoneProgress/create`
        WorkDoneProgressCreate = "window/workDoneProgress/create",
        /// `textDocument/prepareCallHierarchy`
        CallHierarchyPrepare = "textDocument/prepareCallHierarchy",
        /// `callHierarchy/incomingCalls`
        CallHierarchyIncomingCalls = "callHierarchy/incomingCalls",
        /// `callHierarchy/outgoingCalls`
        CallHierarchyOutgoingCalls = "callHierarchy/outgoingCalls",
        /// `textDocument/semanticTokens/full`
        SemanticTokens = "textDocument/semanticTokens/full",
        /// `textDocument/semanticTokens/full/delta`
        SemanticTokensDelta = "textDocument/semanticTokens/full/delta",
        /// `textDocument/semanticTokens/range`
        SemanticTokensRange = "textDocument/semanticTokens/range",
        /// `workspace/semanticTokens/refresh`
        SemanticTokensRefresh = "workspace/semanticTokens/refresh",
        /// `window/showDocument`
        ShowDocument = "window/showDocument",
        /// `textDocument/linkedEditingRange`
        LinkedEditingRange = "textDocument/linkedEditingRange",
        /// `workspace/willCreateFiles`
        WillCreateFiles = "workspace/willCreateFiles",
        /// `workspace/willRenameFiles`
        WillRenameFiles = "workspace/willRenameFiles",
        /// `workspace/willDeleteFiles`
        WillDeleteFiles = "workspace/willDeleteFiles",
        /// `textDocument/moniker`
        Moniker = "textDocument/moniker",
        /// `textDocument/prepareTypeHierarchy`
        TypeHierarchyPrepare = "textDocument/prepareTypeHierarchy",
        /// `typeHierarchy/supertypes`
        TypeHierarchySupertypes = "typeHierarchy/supertypes",
        /// `typeHierarchy/subtypes`
        TypeHierarchySubtypes = "typeHierarchy/subtypes",
        /// `textDocument/inlineValue`
        InlineValue = "textDocument/inlineValue",
        /// `workspace/inlineValue/refresh`
        InlineValueRefresh = "workspace/inlineValue/refresh",
        /// `textDocument/inlayHint`
        InlayHint = "textDocument/inlayHint",
        /// `inlayHint/resolve`
        InlayHintResolve = "inlayHint/resolve",
        /// `workspace/inlayHint/refresh`
        InlayHintRefresh = "workspace/inlayHint/refresh",
        /// `textDocument/diagnostic`
        DocumentDiagnostic = "textDocument/diagnostic",
        /// `workspace/diagnostic`
        WorkspaceDiagnostic = "workspace/diagnostic",
        /// `workspace/diagnostic/refresh`
        DiagnosticRefresh = "workspace/diagnostic/refresh",
        /// `textDocument/inlineCompletion`
        InlineCompletion = "textDocument/inlineCompletion",
        /// `workspace/textDocumentContent`
        TextDocumentContent = "workspace/textDocumentContent",
        /// `workspace/textDocumentContent/refresh`
        TextDocumentContentRefresh = "workspace/textDocumentContent/refresh",
        /// `client/registerCapability`
        Registration = "client/registerCapability",
        /// `client/unregisterCapability`
        Unregistration = "client/unregisterCapability",
        /// `initialize`
        Initialize = "initialize",
        /// `shutdown`
        Shutdown = "shutdown",
        /// `window/showMessageRequest`
        ShowMessageRequest = "window/showMessageRequest",
        /// `textDocument/willSaveWaitUntil`
        WillSaveTextDocumentWaitUntil = "textDocument/willSaveWaitUntil",
        /// `textDocument/completion`
        Completion = "textDocument/completion",
        /// `completionItem/resolve`
        CompletionResolve = "completionItem/resolve",
        /// `textDocument/hover`
        Hover = "textDocument/hover",
        /// `textDocument/signatureHelp`
        SignatureHelp = "textDocument/signatureHelp",
        /// `textDocument/definition`
        Definition = "textDocument/definition",
        /// `textDocument/references`
        References = "textDocument/references",
        /// `textDocument/documentHighlight`
        DocumentHighlight = "textDocument/documentHighlight",
        /// `textDocument/documentSymbol`
        DocumentSymbol = "textDocument/documentSymbol",
        /// `textDocument/codeAction`
        CodeAction = "textDocument/codeAction",
        /// `codeAction/resolve`
        CodeActionResolve = "codeAction/resolve",
        /// `workspace/symbol`
        WorkspaceSymbol = "workspace/symbol",
        /// `workspaceSymbol/resolve`
        WorkspaceSymbolResolve = "workspaceSymbol/resolve",
        /// `textDocument/codeLens`
        CodeLens = "textDocument/codeLens",
        /// `codeLens/resolve`
        CodeLensResolve = "codeLens/resolve",
        /// `workspace/codeLens/refresh`
        CodeLensRefresh = "workspace/codeLens/refresh",
        /// `textDocument/documentLink`
        DocumentLink = "textDocument/documentLink",
        /// `documentLink/resolve`
        DocumentLinkResolve = "documentLink/resolve",
        /// `textDocument/formatting`
        DocumentFormatting = "textDocument/formatting",
        /// `textDocument/rangeFormatting`
        DocumentRangeFormatting = "textDocument/rangeFormatting",
        /// `textDocument/rangesFormatting`
        DocumentRangesFormatting = "textDocument/rangesFormatting",
        /// `textDocument/onTypeFormatting`
        DocumentOnTypeFormatting = "textDocument/onTypeFormatting",
        /// `textDocument/rename`
        Rename = "textDocument/rename",
        /// `textDocument/prepareRename`
        PrepareRename = "textDocument/prepareRename",
        /// `workspace/executeCommand`
        ExecuteCommand = "workspace/executeCommand",
        /// `workspace/applyEdit`
        ApplyWorkspaceEdit = "workspace/applyEdit",
    }
}

method_registry! {
    /// Every notification method, client-to-server and server-to-client.
    pub enum NotificationMethod in NOTIFICATION_METHODS {
        /// `workspace/didChangeWorkspaceFolders`
        DidChangeWorkspaceFolders = "workspace/didChangeWorkspaceFolders",
        /// `window/workDoneProgress/cancel`
        WorkDoneProgressCancel = "window/workDoneProgress/cancel",
        /// `workspace/didCreateFiles`
        DidCreateFiles = "workspace/didCreateFiles",
        /// `workspace/didRenameFiles`
        DidRenameFiles = "workspace/didRenameFiles",
        /// `workspace/didDeleteFiles`
        DidDeleteFiles = "workspace/didDeleteFiles",
        /// `notebookDocument/didOpen`
        DidOpenNotebookDocument = "notebookDocument/didOpen",
        /// `notebookDocument/didChange`
        DidChangeNotebookDocument = "notebookDocument/didChange",
        /// `notebookDocument/didSave`
        DidSaveNotebookDocument = "notebookDocument/didSave",
        /// `notebookDocument/didClose`
        DidCloseNotebookDocument = "notebookDocument/didClose",
        /// `initialized`
        Initialized = "initialized",
        /// `exit`
        Exit = "exit",
        /// `workspace/didChangeConfiguration`
        DidChangeConfiguration = "workspace/didChangeConfiguration",
        /// `window/showMessage`
        ShowMessage = "window/showMessage",
        /// `window/logMessage`
        LogMessage = "window/logMessage",
        /// `telemetry/event`
        TelemetryEvent = "telemetry/event",
        /// `textDocument/didOpen`
        DidOpenTextDocument = "textDocument/didOpen",
        /// `textDocument/didChange`
        DidChangeTextDocument = "textDocument/didChange",
        /// `textDocument/didClose`
        DidCloseTextDocument = "textDocument/didClose",
        /// `textDocument/didSave`
        DidSaveTextDocument = "textDocument/didSave",
        /// `textDocument/willSave`
        WillSaveTextDocument = "textDocument/willSave",
        /// `workspace/didChangeWatchedFiles`
        DidChangeWatchedFiles = "workspace/didChangeWatchedFiles",
        /// `textDocument/publishDiagnostics`
        PublishDiagnostics = "textDocument/publishDiagnostics",
        /// `$/setTrace`
        SetTrace = "$/setTrace",
        /// `$/logTrace`
        LogTrace = "$/logTrace",
        /// `$/cancelRequest`
        Cancel = "$/cancelRequest",
        /// `$/progress`
        Progress = "$/progress",
    }
}

#[cfg(test)]
mod tests;
