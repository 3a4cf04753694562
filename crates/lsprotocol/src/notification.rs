//! Notification catalogue.
//!
//! Counterpart of [`crate::request`] for methods that expect no response.

use crate::types;

lsp_notifications! {
    /// The `workspace/didChangeWorkspaceFolders` notification.
    DidChangeWorkspaceFolders => DidChangeWorkspaceFoldersNotification {
        params: types::DidChangeWorkspaceFoldersParams,
    }
    /// The `window/workDoneProgress/cancel` notification.
    WorkDoneProgressCancel => WorkDoneProgressCancelNotification {
        params: types::WorkDoneProgressCancelParams,
    }
    /// Sent after files were created from within the client.
    DidCreateFiles => DidCreateFilesNotification {
        params: types::CreateFilesParams,
    }
    /// The `workspace/didRenameFiles` notification.
    DidRenameFiles => DidRenameFilesNotification {
        params: types::RenameFilesParams,
    }
    /// The `workspace/didDeleteFiles` notification.
    DidDeleteFiles => DidDeleteFilesNotification {
        params: types::DeleteFilesParams,
    }
    /// The `notebookDocument/didOpen` notification.
    DidOpenNotebookDocument => DidOpenNotebookDocumentNotification {
        params: types::DidOpenNotebookDocumentParams,
    }
    /// The `notebookDocument/didChange` notification.
    DidChangeNotebookDocument => DidChangeNotebookDocumentNotification {
        params: types::DidChangeNotebookDocumentParams,
    }
    /// The `notebookDocument/didSave` notification.
    DidSaveNotebookDocument => DidSaveNotebookDocumentNotification {
        params: types::DidSaveNotebookDocumentParams,
    }
    /// The `notebookDocument/didClose` notification.
    DidCloseNotebookDocument => DidCloseNotebookDocumentNotification {
        params: types::DidCloseNotebookDocumentParams,
    }
    /// Sent once the client received the initialize result.
    Initialized => InitializedNotification {
        params: types::InitializedParams,
    }
    /// Asks the server to exit its process.
    Exit => ExitNotification {}
    /// The `workspace/didChangeConfiguration` notification.
    DidChangeConfiguration => DidChangeConfigurationNotification {
        params: types::DidChangeConfigurationParams,
    }
    /// The `window/showMessage` notification.
    ShowMessage => ShowMessageNotification {
        params: types::ShowMessageParams,
    }
    /// The `window/logMessage` notification.
    LogMessage => LogMessageNotification {
        params: types::LogMessageParams,
    }
    /// The `telemetry/event` notification.
    TelemetryEvent => TelemetryEventNotification {
        params: types::LspAny,
    }
    /// The `textDocument/didOpen` notification.
    DidOpenTextDocument => DidOpenTextDocumentNotification {
        params: types::DidOpenTextDocumentParams,
    }
    /// The `textDocument/didChange` notification.
    DidChangeTextDocument => DidChangeTextDocumentNotification {
        params: types::DidChangeTextDocumentParams,
    }
    /// The `textDocument/didClose` notification.
    DidCloseTextDocument => DidCloseTextDocumentNotification {
        params: types::DidCloseTextDocumentParams,
    }
    /// The `textDocument/didSave` notification.
    DidSaveTextDocument => DidSaveTextDocumentNotification {
        params: types::DidSaveTextDocumentParams,
    }
    /// The `textDocument/willSave` notification.
    WillSaveTextDocument => WillSaveTextDocumentNotification {
        params: types::WillSaveTextDocumentParams,
    }
    /// The `workspace/didChangeWatchedFiles` notification.
    DidChangeWatchedFiles => DidChangeWatchedFilesNotification {
        params: types::DidChangeWatchedFilesParams,
    }
    /// Diagnostics pushed from the server.
    PublishDiagnostics => PublishDiagnosticsNotification {
        params: types::PublishDiagnosticsParams,
    }
    /// The `$/setTrace` notification.
    SetTrace => SetTraceNotification {
        params: types::SetTraceParams,
    }
    /// The `$/logTrace` notification.
    LogTrace => LogTraceNotification {
        params: types::LogTraceParams,
    }
    /// Cancels a request by id.
    Cancel => CancelNotification {
        params: types::CancelParams,
    }
    /// Reports progress against a token.
    Progress => ProgressNotification {
        params: types::ProgressParams,
    }
}
