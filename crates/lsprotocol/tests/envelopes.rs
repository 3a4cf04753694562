//! End-to-end tests for typed envelopes and message dispatch.
//!
//! These tests drive the public API only: they build messages, encode them,
//! pass the bytes back through `decode_message` and bind the result to the
//! typed envelope for the method.

use insta::assert_snapshot;
use rstest::rstest;
use serde_json::json;

use lsprotocol::notification::{Cancel, Progress, PublishDiagnosticsNotification};
use lsprotocol::request::{
    CallHierarchyIncomingCallsResponse, Completion, CompletionRequest, Initialize,
    InitializeResponse, Shutdown, WorkspaceFoldersResponse,
};
use lsprotocol::{
    CancelParams, CompletionParams, Diagnostic, DecodeConfig, DocumentUri, IncomingMessage,
    InitializeResult, IntegerOrString, NotificationMessage, Position, ProgressParams,
    ProgressToken, PublishDiagnosticsParams, Range, RequestId, ResponseError, ResponseMessage,
    ServerCapabilities, TextDocumentIdentifier, decode_message,
};

// =============================================================================
// Exact encodings
// =============================================================================

#[rstest]
fn completion_request_encoding() {
    let params = CompletionParams {
        text_document: TextDocumentIdentifier::new(DocumentUri::from("file:///a.rs")),
        position: Position::new(0, 4),
        ..CompletionParams::default()
    };
    let request = CompletionRequest::new(7, params);
    let encoded = serde_json::to_string(&request).expect("encode request");
    assert_snapshot!(
        encoded,
        @r#"{"jsonrpc":"2.0","id":7,"method":"textDocument/completion","params":{"textDocument":{"uri":"file:///a.rs"},"position":{"line":0,"character":4}}}"#
    );
}

#[rstest]
fn cancel_notification_encoding() {
    let cancel = NotificationMessage::<Cancel>::new(CancelParams {
        id: IntegerOrString::Integer(7),
    });
    let encoded = serde_json::to_string(&cancel).expect("encode notification");
    assert_snapshot!(
        encoded,
        @r#"{"jsonrpc":"2.0","method":"$/cancelRequest","params":{"id":7}}"#
    );
}

#[rstest]
fn error_response_encoding() {
    let response = ResponseMessage::<Shutdown>::failure(
        Some(RequestId::from("s")),
        ResponseError::new(lsprotocol::LspErrorCodes::REQUEST_FAILED, "busy"),
    );
    let encoded = serde_json::to_string(&response).expect("encode response");
    assert_snapshot!(
        encoded,
        @r#"{"jsonrpc":"2.0","id":"s","error":{"code":-32803,"message":"busy"}}"#
    );
}

// =============================================================================
// Round trips through decode_message
// =============================================================================

#[rstest]
fn request_survives_dispatch_round_trip() {
    let params = CompletionParams {
        text_document: TextDocumentIdentifier::new(DocumentUri::from("file:///b.rs")),
        position: Position::new(3, 1),
        ..CompletionParams::default()
    };
    let sent = CompletionRequest::new("req-1", params);
    let bytes = serde_json::to_vec(&sent).expect("encode request");

    let decoded = decode_message(&bytes, &DecodeConfig::strict()).expect("decode request");
    let IncomingMessage::Request(request) = decoded else {
        panic!("expected request, got {decoded:?}");
    };
    let typed = request
        .parse_with::<Completion>(&DecodeConfig::strict())
        .expect("bind completion");
    assert_eq!(typed, sent);
}

#[rstest]
fn notification_survives_dispatch_round_trip() {
    let range = Range::new(Position::new(0, 0), Position::new(0, 1));
    let sent = PublishDiagnosticsNotification::new(PublishDiagnosticsParams {
        uri: DocumentUri::from("file:///c.rs"),
        version: Some(2),
        diagnostics: vec![Diagnostic {
            range,
            message: String::from("unused import"),
            ..Diagnostic::default()
        }],
    });
    let bytes = serde_json::to_vec(&sent).expect("encode notification");

    let decoded = decode_message(&bytes, &DecodeConfig::default()).expect("decode");
    let IncomingMessage::Notification(notification) = decoded else {
        panic!("expected notification, got {decoded:?}");
    };
    assert_eq!(
        notification
            .parse::<lsprotocol::notification::PublishDiagnostics>()
            .expect("bind publish diagnostics"),
        sent
    );
}

#[rstest]
fn progress_tokens_keep_their_json_type() {
    let bytes = br#"{"jsonrpc":"2.0","method":"$/progress","params":{"token":42,"value":{"kind":"end"}}}"#;
    let decoded = decode_message(bytes, &DecodeConfig::default()).expect("decode progress");
    let IncomingMessage::Notification(notification) = decoded else {
        panic!("expected notification, got {decoded:?}");
    };
    let typed: NotificationMessage<Progress> = notification.parse().expect("bind progress");
    let ProgressParams { token, value } = typed.params;
    assert_eq!(token, ProgressToken::Integer(42));
    assert_eq!(value, json!({ "kind": "end" }));
}

#[rstest]
fn initialize_response_binds_capabilities() {
    let bytes = br#"{"jsonrpc":"2.0","id":0,"result":{"capabilities":{"hoverProvider":true},"serverInfo":{"name":"demo"}}}"#;
    let decoded = decode_message(bytes, &DecodeConfig::default()).expect("decode response");
    let IncomingMessage::Response(response) = decoded else {
        panic!("expected response, got {decoded:?}");
    };
    let typed: InitializeResponse = response.parse::<Initialize>().expect("bind result");
    let InitializeResult {
        capabilities,
        server_info,
    } = typed.result.expect("result present");
    assert!(matches!(
        capabilities,
        ServerCapabilities {
            hover_provider: Some(_),
            ..
        }
    ));
    assert_eq!(server_info.map(|info| info.name).as_deref(), Some("demo"));
}

#[rstest]
fn workspace_folders_response_accepts_null_result() {
    let response: WorkspaceFoldersResponse =
        serde_json::from_str(r#"{"jsonrpc":"2.0","id":1,"result":null}"#).expect("decode");
    assert_eq!(response.result, Some(None));
}

#[rstest]
fn incoming_calls_response_without_id_is_rejected() {
    let error = serde_json::from_str::<CallHierarchyIncomingCallsResponse>(
        r#"{"jsonrpc":"2.0","result":[]}"#,
    )
    .expect_err("missing id");
    let message = error.to_string();
    assert!(
        message.contains("response must have an id and jsonrpc field"),
        "expected presence error in message: {message}"
    );
}

#[rstest]
fn incoming_calls_response_without_result_is_empty() {
    let response: CallHierarchyIncomingCallsResponse =
        serde_json::from_str(r#"{"jsonrpc":"2.0","id":1}"#).expect("decode");
    assert!(response.result.is_none());
}
