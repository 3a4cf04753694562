//! Session lifecycle: initialisation, capability registration, tracing,
//! cancellation and progress.

use serde::{Deserialize, Serialize};

use super::base::{BeginKind, DocumentUri, EndKind, LspAny, ReportKind};
use super::basic::{IntegerOrString, ProgressToken, WorkspaceFolder};
use super::client_capabilities::ClientCapabilities;
use super::enums::TraceValue;
use super::server_capabilities::ServerCapabilities;

/// Information about the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    /// The client's name as defined by the client.
    pub name: String,
    /// The client's version as defined by the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Information about the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    /// The server's name as defined by the server.
    pub name: String,
    /// The server's version as defined by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Parameters of the `initialize` request.
///
/// `process_id` and `root_uri` are required but nullable, so they always
/// encode and `None` encodes as `null`. `root_path` and `workspace_folders`
/// are optional and nullable, so they keep absent and `null` apart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeParams {
    /// Token reporting work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_token: Option<ProgressToken>,
    /// Process id of the parent process, or `null` when there is none.
    pub process_id: Option<i32>,
    /// Information about the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_info: Option<ClientInfo>,
    /// Locale the client is showing its UI in, as an IETF language tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Root path of the workspace. Superseded by `root_uri`.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::codec::nullable::deserialize"
    )]
    pub root_path: Option<Option<String>>,
    /// Root URI of the workspace. Superseded by `workspace_folders`.
    pub root_uri: Option<DocumentUri>,
    /// Capabilities provided by the client.
    pub capabilities: ClientCapabilities,
    /// User-provided initialisation options.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::codec::nullable::present"
    )]
    pub initialization_options: Option<LspAny>,
    /// Initial trace setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<TraceValue>,
    /// Workspace folders configured at startup, or `null` when none are.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::codec::nullable::deserialize"
    )]
    pub workspace_folders: Option<Option<Vec<WorkspaceFolder>>>,
}

/// The result of the `initialize` request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    /// Capabilities the language server provides.
    pub capabilities: ServerCapabilities,
    /// Information about the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_info: Option<ServerInfo>,
}

/// Error data returned when `initialize` fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitializeError {
    /// Whether the client should retry after showing the error.
    pub retry: bool,
}

/// Parameters of the `initialized` notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitializedParams {}

/// General parameters to register for a capability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    /// Id used to register the request, reused to unregister it.
    pub id: String,
    /// The method to register for.
    pub method: String,
    /// Options necessary for the registration.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::codec::nullable::present"
    )]
    pub register_options: Option<LspAny>,
}

/// Parameters of `client/registerCapability`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationParams {
    /// Registrations to add.
    pub registrations: Vec<Registration>,
}

/// General parameters to unregister a capability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unregistration {
    /// Id used to unregister, usually the one used to register.
    pub id: String,
    /// Method to unregister.
    pub method: String,
}

/// Parameters of `client/unregisterCapability`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnregistrationParams {
    /// Registrations to remove. The wire name keeps the protocol's spelling.
    #[serde(rename = "unregisterations")]
    pub unregistrations: Vec<Unregistration>,
}

/// Parameters of `$/setTrace`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetTraceParams {
    /// The new trace setting.
    pub value: TraceValue,
}

/// Parameters of `$/logTrace`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogTraceParams {
    /// The message to be logged.
    pub message: String,
    /// Additional information, only sent when trace is `verbose`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<String>,
}

/// Parameters of `$/cancelRequest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelParams {
    /// The id of the request to cancel.
    pub id: IntegerOrString,
}

/// Parameters of `$/progress`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressParams {
    /// The progress token supplied by the client or server.
    pub token: ProgressToken,
    /// The progress data.
    pub value: LspAny,
}

/// The first report of a work-done progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDoneProgressBegin {
    /// Always `"begin"`.
    pub kind: BeginKind,
    /// Short title of the operation, like `"Indexing"`.
    pub title: String,
    /// Whether a cancel button should be shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellable: Option<bool>,
    /// More detailed progress message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Progress percentage from 0 to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<u32>,
}

/// An intermediate work-done progress report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDoneProgressReport {
    /// Always `"report"`.
    pub kind: ReportKind,
    /// Updates the cancel button state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellable: Option<bool>,
    /// More detailed progress message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Progress percentage from 0 to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<u32>,
}

/// The final work-done progress report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDoneProgressEnd {
    /// Always `"end"`.
    pub kind: EndKind,
    /// Final message indicating the outcome.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

lsp_union! {
    /// A work-done progress payload carried in [`ProgressParams::value`].
    #[derive(Eq)]
    pub enum WorkDoneProgress {
        /// Start of the operation.
        Begin(WorkDoneProgressBegin),
        /// Intermediate report.
        Report(WorkDoneProgressReport),
        /// End of the operation.
        End(WorkDoneProgressEnd),
    }
}

impl ProgressParams {
    /// Decodes `value` as a work-done progress payload.
    ///
    /// # Errors
    ///
    /// Returns the decode error when `value` is not a begin, report or end
    /// payload.
    pub fn work_done(&self) -> Result<WorkDoneProgress, serde_json::Error> {
        crate::codec::strict::from_value(&self.value)
    }
}

/// Parameters of `window/workDoneProgress/create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDoneProgressCreateParams {
    /// The token to be used to report progress.
    pub token: ProgressToken,
}

/// Parameters of `window/workDoneProgress/cancel`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDoneProgressCancelParams {
    /// The token to be used to report progress.
    pub token: ProgressToken,
}
