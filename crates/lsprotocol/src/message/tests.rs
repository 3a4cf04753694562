//! Unit tests for the JSON-RPC envelopes.

use insta::assert_snapshot;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::config::{DecodeConfig, ParamsMode};
use crate::notification::{DidOpenTextDocument, Exit, TelemetryEvent};
use crate::request::{
    CallHierarchyIncomingCallsResponse, Hover, HoverRequest, HoverResponse, Shutdown,
    ShutdownRequest,
};
use crate::types::{
    self, DocumentUri, LspNull, Position, TextDocumentIdentifier, TextDocumentItem,
};

fn hover_params() -> types::HoverParams {
    types::HoverParams {
        text_document: TextDocumentIdentifier::new(DocumentUri::from("file:///a.rs")),
        position: Position::new(2, 4),
        work_done_token: None,
    }
}

fn error_text(result: Result<impl std::fmt::Debug, serde_json::Error>) -> String {
    result.expect_err("decode should fail").to_string()
}

#[rstest]
fn request_encodes_method_from_marker() {
    let request = HoverRequest::new(1, hover_params());
    let encoded = serde_json::to_value(&request).expect("encode request");
    assert_eq!(
        encoded,
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "textDocument/hover",
            "params": {
                "textDocument": { "uri": "file:///a.rs" },
                "position": { "line": 2, "character": 4 }
            }
        })
    );
}

#[rstest]
fn request_params_keep_declared_field_order() {
    let encoded =
        serde_json::to_string(&HoverRequest::new(1, hover_params())).expect("encode request");
    assert_snapshot!(
        encoded,
        @r#"{"jsonrpc":"2.0","id":1,"method":"textDocument/hover","params":{"textDocument":{"uri":"file:///a.rs"},"position":{"line":2,"character":4}}}"#
    );
}

#[rstest]
#[case::hover(Hover::HAS_PARAMS, true)]
#[case::shutdown(Shutdown::HAS_PARAMS, false)]
#[case::telemetry(TelemetryEvent::HAS_PARAMS, true)]
#[case::exit(Exit::HAS_PARAMS, false)]
fn catalogue_marks_methods_without_params(#[case] has_params: bool, #[case] expected: bool) {
    assert_eq!(has_params, expected);
}

#[rstest]
fn telemetry_event_encodes_null_payload() {
    let encoded = serde_json::to_value(NotificationMessage::<TelemetryEvent>::new(Value::Null))
        .expect("encode telemetry event");
    assert_eq!(
        encoded,
        json!({ "jsonrpc": "2.0", "method": "telemetry/event", "params": null })
    );
    let decoded: NotificationMessage<TelemetryEvent> =
        serde_json::from_value(encoded).expect("decode telemetry event");
    assert_eq!(decoded.params, Value::Null);
}

#[rstest]
fn parameterless_request_omits_params() {
    let request = ShutdownRequest::new("s-1", LspNull);
    let json = serde_json::to_string(&request).expect("encode shutdown");
    assert!(json.contains(r#""id":"s-1""#));
    assert!(!json.contains("params"), "unexpected params in {json}");
}

#[rstest]
fn request_decodes_with_absent_params_as_null() {
    let decoded: ShutdownRequest =
        serde_json::from_value(json!({ "jsonrpc": "2.0", "id": 3, "method": "shutdown" }))
            .expect("decode shutdown");
    assert_eq!(decoded.id, RequestId::Integer(3));
    assert_eq!(decoded.method(), RequestMethod::Shutdown);
}

#[rstest]
#[case::method(json!({ "jsonrpc": "2.0", "id": 1 }), "method")]
#[case::id(json!({ "jsonrpc": "2.0", "method": "shutdown" }), "id")]
#[case::jsonrpc(json!({ "id": 1, "method": "shutdown" }), "jsonrpc")]
#[case::method_first(json!({}), "method")]
#[case::id_before_jsonrpc(json!({ "method": "shutdown" }), "id")]
fn request_presence_is_checked_in_order(#[case] raw: Value, #[case] field: &str) {
    let message = error_text(serde_json::from_value::<ShutdownRequest>(raw));
    assert!(
        message.contains(&format!("missing required request field: {field}")),
        "expected missing {field} in message: {message}"
    );
}

#[rstest]
fn null_request_id_passes_presence_but_fails_decoding() {
    let message = error_text(serde_json::from_value::<ShutdownRequest>(
        json!({ "jsonrpc": "2.0", "id": null, "method": "shutdown" }),
    ));
    assert!(
        !message.contains("missing required request field"),
        "presence check should accept a null id: {message}"
    );
    assert!(
        message.contains("RequestId"),
        "expected union name in message: {message}"
    );
}

#[rstest]
fn typed_request_rejects_other_methods() {
    let message = error_text(serde_json::from_value::<HoverRequest>(
        json!({ "jsonrpc": "2.0", "id": 1, "method": "shutdown" }),
    ));
    assert!(
        message.contains("expected method 'textDocument/hover', got 'shutdown'"),
        "expected method mismatch in message: {message}"
    );
}

#[rstest]
fn response_without_result_decodes_to_none() {
    let response: CallHierarchyIncomingCallsResponse =
        serde_json::from_value(json!({ "jsonrpc": "2.0", "id": 1 })).expect("decode response");
    assert!(response.result.is_none());
    assert!(response.error.is_none());
}

#[rstest]
#[case::id(json!({ "jsonrpc": "2.0", "result": null }))]
#[case::jsonrpc(json!({ "id": 1, "result": null }))]
fn response_presence_is_enforced(#[case] raw: Value) {
    let message = error_text(serde_json::from_value::<CallHierarchyIncomingCallsResponse>(raw));
    assert!(
        message.contains("response must have an id and jsonrpc field"),
        "expected presence error in message: {message}"
    );
}

#[rstest]
fn response_keeps_null_result_apart_from_absent() {
    let response: HoverResponse =
        serde_json::from_value(json!({ "jsonrpc": "2.0", "id": 9, "result": null }))
            .expect("decode response");
    assert_eq!(response.result, Some(None));
}

#[rstest]
fn failed_response_round_trips_with_null_id() {
    let error = ResponseError::new(crate::types::ErrorCodes::PARSE_ERROR, "bad json")
        .with_data(json!({ "offset": 4 }));
    let response = HoverResponse::failure(None, error);
    let encoded = serde_json::to_value(&response).expect("encode response");
    assert_eq!(
        encoded,
        json!({
            "jsonrpc": "2.0",
            "id": null,
            "error": { "code": -32700, "message": "bad json", "data": { "offset": 4 } }
        })
    );
    let decoded: HoverResponse = serde_json::from_value(encoded).expect("decode response");
    assert_eq!(decoded, response);
}

#[rstest]
fn successful_response_round_trips() {
    let response = ResponseMessage::<Shutdown>::success(4, LspNull);
    let encoded = serde_json::to_value(&response).expect("encode response");
    assert_eq!(encoded, json!({ "jsonrpc": "2.0", "id": 4, "result": null }));
    let decoded: ResponseMessage<Shutdown> =
        serde_json::from_value(encoded).expect("decode response");
    assert_eq!(decoded, response);
}

#[rstest]
#[case::method(json!({ "jsonrpc": "2.0" }), "method")]
#[case::jsonrpc(json!({ "method": "exit" }), "jsonrpc")]
fn notification_presence_is_enforced(#[case] raw: Value, #[case] field: &str) {
    let message = error_text(serde_json::from_value::<NotificationMessage<Exit>>(raw));
    assert!(
        message.contains(&format!("missing required notification field: {field}")),
        "expected missing {field} in message: {message}"
    );
}

#[rstest]
fn notification_round_trips() {
    let notification = NotificationMessage::<DidOpenTextDocument>::new(
        types::DidOpenTextDocumentParams {
            text_document: TextDocumentItem {
                uri: DocumentUri::from("file:///a.rs"),
                language_id: types::LanguageKind::RUST,
                version: 1,
                text: String::from("fn main() {}"),
            },
        },
    );
    let encoded = serde_json::to_value(&notification).expect("encode notification");
    assert_eq!(encoded["method"], json!("textDocument/didOpen"));
    let decoded: NotificationMessage<DidOpenTextDocument> =
        serde_json::from_value(encoded).expect("decode notification");
    assert_eq!(decoded, notification);
}

#[rstest]
fn exit_notification_has_no_params() {
    let encoded = serde_json::to_value(NotificationMessage::<Exit>::new(LspNull))
        .expect("encode exit");
    assert_eq!(encoded, json!({ "jsonrpc": "2.0", "method": "exit" }));
}

#[rstest]
#[case::integer(json!(7), RequestId::Integer(7), "7")]
#[case::string(json!("abc"), RequestId::String(String::from("abc")), "abc")]
fn request_ids_decode_and_display(
    #[case] raw: Value,
    #[case] expected: RequestId,
    #[case] shown: &str,
) {
    let id: RequestId = serde_json::from_value(raw).expect("decode id");
    assert_eq!(id, expected);
    assert_eq!(id.to_string(), shown);
}

#[rstest]
fn response_error_keeps_null_data() {
    let error = ResponseError::new(1, "x").with_data(Value::Null);
    let encoded = serde_json::to_value(&error).expect("encode error");
    assert_eq!(encoded, json!({ "code": 1, "message": "x", "data": null }));
    let decoded: ResponseError = serde_json::from_value(encoded).expect("decode error");
    assert_eq!(decoded, error);

    let bare: ResponseError =
        serde_json::from_value(json!({ "code": 1, "message": "x" })).expect("decode error");
    assert!(bare.data.is_none());
}

#[rstest]
fn response_error_displays_message_and_code() {
    let error = ResponseError::from_error(-32803, &"request failed");
    assert_eq!(error.to_string(), "request failed (-32803)");
}

#[rstest]
fn decode_message_binds_request_to_marker() {
    let bytes = br#"{"jsonrpc":"2.0","id":1,"method":"textDocument/hover",
        "params":{"textDocument":{"uri":"file:///a.rs"},"position":{"line":2,"character":4}}}"#;
    let message = decode_message(bytes, &DecodeConfig::default()).expect("decode message");
    let IncomingMessage::Request(request) = message else {
        panic!("expected request, got {message:?}");
    };
    assert_eq!(request.method(), RequestMethod::Hover);
    let typed = request.parse::<Hover>().expect("bind hover");
    assert_eq!(typed.params, hover_params());
}

#[rstest]
fn decode_message_reports_unknown_methods_with_id() {
    let bytes = br#"{"jsonrpc":"2.0","id":"x","method":"custom/ping"}"#;
    let error = decode_message(bytes, &DecodeConfig::default()).expect_err("unknown method");
    assert!(matches!(error, ProtocolError::UnknownMethod { ref method, .. } if method == "custom/ping"));
    assert_eq!(error.request_id(), Some(&RequestId::from("x")));
}

#[rstest]
fn decode_message_rejects_messages_without_method_or_id() {
    let error = decode_message(br#"{"jsonrpc":"2.0"}"#, &DecodeConfig::default())
        .expect_err("no method or id");
    assert!(matches!(error, ProtocolError::MissingMethod));
}

#[rstest]
#[case::not_json(&b"{"[..])]
#[case::array(&b"[]"[..])]
fn decode_message_reports_malformed_input(#[case] bytes: &[u8]) {
    let error = decode_message(bytes, &DecodeConfig::default()).expect_err("malformed");
    assert!(matches!(error, ProtocolError::Malformed(_)));
}

#[rstest]
fn decode_message_validates_params_against_registry() {
    let bytes = br#"{"jsonrpc":"2.0","id":2,"method":"textDocument/hover","params":{"position":1}}"#;
    let error = decode_message(bytes, &DecodeConfig::default()).expect_err("bad params");
    assert!(matches!(
        error,
        ProtocolError::InvalidParams { method: "textDocument/hover", .. }
    ));
    assert_eq!(error.request_id(), Some(&RequestId::Integer(2)));
}

#[rstest]
#[case::lenient(ParamsMode::Lenient, true)]
#[case::strict(ParamsMode::Strict, false)]
fn params_mode_controls_unknown_keys(#[case] mode: ParamsMode, #[case] accepted: bool) {
    let bytes = br#"{"jsonrpc":"2.0","method":"$/cancelRequest","params":{"id":1,"reason":"x"}}"#;
    let config = DecodeConfig::default().with_params(mode);
    assert_eq!(decode_message(bytes, &config).is_ok(), accepted);
}

#[rstest]
#[case::enforced(true, false)]
#[case::relaxed(false, true)]
fn require_version_rejects_other_versions(#[case] require: bool, #[case] accepted: bool) {
    let bytes = br#"{"jsonrpc":"1.0","id":1,"method":"shutdown"}"#;
    let config = DecodeConfig::default().with_require_version(require);
    let result = decode_message(bytes, &config);
    assert_eq!(result.is_ok(), accepted);
    if let Err(error) = result {
        assert!(matches!(error, ProtocolError::UnsupportedVersion { .. }));
    }
}

#[rstest]
fn decode_message_surfaces_envelope_presence_errors() {
    let error = decode_message(br#"{"method":"exit"}"#, &DecodeConfig::default())
        .expect_err("missing jsonrpc");
    assert!(matches!(
        error,
        ProtocolError::MissingNotificationField { field: "jsonrpc" }
    ));
}

#[rstest]
fn decoded_response_binds_result_type() {
    let bytes = br#"{"jsonrpc":"2.0","id":5,"result":{"contents":"docs"}}"#;
    let message = decode_message(bytes, &DecodeConfig::default()).expect("decode response");
    let IncomingMessage::Response(response) = message else {
        panic!("expected response, got {message:?}");
    };
    let typed = response.parse::<Hover>().expect("bind hover result");
    let hover = typed.result.flatten().expect("hover result present");
    assert!(matches!(hover.contents, types::HoverContents::Marked(_)));
}

#[rstest]
fn any_notification_rejects_mismatched_marker() {
    let notification = AnyNotification::new("exit", None);
    let error = notification
        .parse::<DidOpenTextDocument>()
        .expect_err("wrong marker");
    assert!(matches!(error, ProtocolError::MethodMismatch { .. }));
    assert!(notification.parse::<Exit>().is_ok());
}
