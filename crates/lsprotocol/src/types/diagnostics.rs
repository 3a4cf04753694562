//! Published and pulled diagnostics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::base::{DocumentUri, FullKind, UnchangedKind};
use super::basic::{Diagnostic, DocumentSelector, ProgressToken, TextDocumentIdentifier};

/// Parameters of `textDocument/publishDiagnostics`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublishDiagnosticsParams {
    /// The URI for which diagnostic information is reported.
    pub uri: DocumentUri,
    /// Version of the document the diagnostics were computed for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,
    /// Diagnostic information items.
    pub diagnostics: Vec<Diagnostic>,
}

/// Parameters of `textDocument/diagnostic`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDiagnosticParams {
    /// Token reporting work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_token: Option<ProgressToken>,
    /// Token reporting partial results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_result_token: Option<ProgressToken>,
    /// The text document.
    pub text_document: TextDocumentIdentifier,
    /// The additional identifier provided during registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// The result id of a previous response, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_result_id: Option<String>,
}

/// A report carrying a full set of problems.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullDocumentDiagnosticReport {
    /// Always `"full"`.
    pub kind: FullKind,
    /// Result id used by the next request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_id: Option<String>,
    /// The actual items.
    pub items: Vec<Diagnostic>,
}

/// A report indicating nothing changed since the last pull.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnchangedDocumentDiagnosticReport {
    /// Always `"unchanged"`.
    pub kind: UnchangedKind,
    /// Result id used by the next request.
    pub result_id: String,
}

lsp_union! {
    /// A full or unchanged report for a single document.
    pub enum DocumentDiagnosticReportItem {
        /// Full report.
        Full(FullDocumentDiagnosticReport),
        /// Unchanged report.
        Unchanged(UnchangedDocumentDiagnosticReport),
    }
}

/// A full report plus reports for related documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedFullDocumentDiagnosticReport {
    /// Always `"full"`.
    pub kind: FullKind,
    /// Result id used by the next request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_id: Option<String>,
    /// The actual items.
    pub items: Vec<Diagnostic>,
    /// Diagnostics of related documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_documents: Option<BTreeMap<DocumentUri, DocumentDiagnosticReportItem>>,
}

/// An unchanged report plus reports for related documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedUnchangedDocumentDiagnosticReport {
    /// Always `"unchanged"`.
    pub kind: UnchangedKind,
    /// Result id used by the next request.
    pub result_id: String,
    /// Diagnostics of related documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_documents: Option<BTreeMap<DocumentUri, DocumentDiagnosticReportItem>>,
}

lsp_union! {
    /// The result of a document diagnostic pull request.
    pub enum DocumentDiagnosticReport {
        /// Full report.
        Full(RelatedFullDocumentDiagnosticReport),
        /// Unchanged report.
        Unchanged(RelatedUnchangedDocumentDiagnosticReport),
    }
}

/// Partial result of a document diagnostic pull request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDiagnosticReportPartialResult {
    /// Reports for related documents.
    pub related_documents: BTreeMap<DocumentUri, DocumentDiagnosticReportItem>,
}

/// Cancellation data returned from a diagnostic request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticServerCancellationData {
    /// Whether the client should retrigger the request.
    pub retrigger_request: bool,
}

/// A previous result id in a workspace pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviousResultId {
    /// The URI for which the client knows a result id.
    pub uri: DocumentUri,
    /// The value of the previous result id.
    pub value: String,
}

/// Parameters of `workspace/diagnostic`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceDiagnosticParams {
    /// Token reporting work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_token: Option<ProgressToken>,
    /// Token reporting partial results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_result_token: Option<ProgressToken>,
    /// The additional identifier provided during registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// The currently known diagnostic reports with their previous result ids.
    pub previous_result_ids: Vec<PreviousResultId>,
}

/// A full diagnostic report for one workspace document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceFullDocumentDiagnosticReport {
    /// Always `"full"`.
    pub kind: FullKind,
    /// Result id used by the next request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_id: Option<String>,
    /// The actual items.
    pub items: Vec<Diagnostic>,
    /// The URI for which diagnostic information is reported.
    pub uri: DocumentUri,
    /// The version number, or `null` when the document is not open.
    pub version: Option<i32>,
}

/// An unchanged diagnostic report for one workspace document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceUnchangedDocumentDiagnosticReport {
    /// Always `"unchanged"`.
    pub kind: UnchangedKind,
    /// Result id used by the next request.
    pub result_id: String,
    /// The URI for which diagnostic information is reported.
    pub uri: DocumentUri,
    /// The version number, or `null` when the document is not open.
    pub version: Option<i32>,
}

lsp_union! {
    /// A workspace diagnostic document report.
    pub enum WorkspaceDocumentDiagnosticReport {
        /// Full report.
        Full(WorkspaceFullDocumentDiagnosticReport),
        /// Unchanged report.
        Unchanged(WorkspaceUnchangedDocumentDiagnosticReport),
    }
}

/// The result of `workspace/diagnostic`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceDiagnosticReport {
    /// Per-document reports.
    pub items: Vec<WorkspaceDocumentDiagnosticReport>,
}

/// Partial result of `workspace/diagnostic`.
pub type WorkspaceDiagnosticReportPartialResult = WorkspaceDiagnosticReport;

/// Server capabilities for pull diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticOptions {
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
    /// An optional identifier under which the diagnostics are managed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Whether changes in one document can affect diagnostics in others.
    pub inter_file_dependencies: bool,
    /// The server provides support for workspace diagnostics as well.
    pub workspace_diagnostics: bool,
}

/// Registration options for pull diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticRegistrationOptions {
    /// Selector identifying the documents; `null` uses the client's selector.
    pub document_selector: Option<DocumentSelector>,
    /// Whether the server reports work-done progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
    /// An optional identifier under which the diagnostics are managed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Whether changes in one document can affect diagnostics in others.
    pub inter_file_dependencies: bool,
    /// The server provides support for workspace diagnostics as well.
    pub workspace_diagnostics: bool,
    /// Id used to unregister the request again.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}
