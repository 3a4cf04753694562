//! Unit tests for protocol errors.

use rstest::rstest;
use serde_json::json;

use super::*;

fn params_error() -> serde_json::Error {
    serde_json::from_value::<u32>(json!("not a number")).expect_err("string is not a u32")
}

#[rstest]
#[case::request_field(ProtocolError::missing_request_field("id"), "missing required request field: id")]
#[case::notification_field(
    ProtocolError::missing_notification_field("jsonrpc"),
    "missing required notification field: jsonrpc"
)]
#[case::response(
    ProtocolError::MissingResponseField,
    "response must have an id and jsonrpc field"
)]
#[case::mismatch(
    ProtocolError::MethodMismatch { expected: "shutdown", found: String::from("exit") },
    "expected method 'shutdown', got 'exit'"
)]
fn envelope_errors_render_stable_text(#[case] error: ProtocolError, #[case] expected: &str) {
    assert_eq!(error.to_string(), expected);
}

#[rstest]
fn union_mismatch_lists_alternatives_in_order() {
    let error = ProtocolError::union_mismatch("Demo", &["i32", "String", "Vec<u8>"], &json!(false));
    assert_eq!(
        error.to_string(),
        "Demo: expected one of [i32, String, Vec<u8>], got false"
    );
}

#[rstest]
fn null_union_names_union_and_alternatives() {
    let message = ProtocolError::null_union("ProgressToken", &["i32", "String"]).to_string();
    assert!(
        message.contains("ProgressToken [i32, String]"),
        "expected union and alternatives in message: {message}"
    );
}

#[rstest]
#[case::malformed(ProtocolError::Malformed(params_error()), ErrorCodes::PARSE_ERROR)]
#[case::missing_method(ProtocolError::MissingMethod, ErrorCodes::INVALID_REQUEST)]
#[case::missing_field(ProtocolError::missing_request_field("method"), ErrorCodes::INVALID_REQUEST)]
#[case::unknown(
    ProtocolError::UnknownMethod { method: String::from("x/y"), id: None },
    ErrorCodes::METHOD_NOT_FOUND
)]
#[case::params(
    ProtocolError::InvalidParams { method: "textDocument/hover", id: None, source: params_error() },
    ErrorCodes::INVALID_PARAMS
)]
fn errors_map_to_json_rpc_codes(#[case] error: ProtocolError, #[case] expected: ErrorCodes) {
    assert_eq!(error.error_code(), expected);
}

#[rstest]
fn response_error_carries_code_and_message() {
    let error = ProtocolError::UnknownMethod {
        method: String::from("custom/ping"),
        id: Some(RequestId::Integer(7)),
    };
    let response = error.to_response_error();
    assert_eq!(response.code, -32601);
    assert_eq!(response.message, "unknown method 'custom/ping'");
    assert_eq!(error.request_id(), Some(&RequestId::Integer(7)));
}

#[rstest]
fn request_id_is_absent_for_envelope_errors() {
    assert!(ProtocolError::MissingResponseField.request_id().is_none());
}

#[rstest]
fn invalid_params_exposes_source() {
    use std::error::Error as _;

    let error = ProtocolError::InvalidParams {
        method: "initialize",
        id: Some(RequestId::from("init")),
        source: params_error(),
    };
    assert!(error.source().is_some());
    let message = error.to_string();
    assert!(
        message.contains("invalid params for 'initialize'"),
        "expected method in message: {message}"
    );
}
