//! Behaviour-driven tests for message decoding.

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use crate::config::{DecodeConfig, ParamsMode};
use crate::error::ProtocolError;
use crate::message::{IncomingMessage, decode_message};
use crate::request::Hover;
use crate::types::Position;

// ---------------------------------------------------------------------------
// Test world
// ---------------------------------------------------------------------------

#[derive(Default)]
struct TestWorld {
    raw: Vec<u8>,
    config: DecodeConfig,
    outcome: Option<Result<IncomingMessage, ProtocolError>>,
}

#[fixture]
fn world() -> TestWorld {
    TestWorld::default()
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn sample_message(name: &str) -> &'static str {
    match name {
        "hover request" => {
            r#"{"jsonrpc":"2.0","id":1,"method":"textDocument/hover","params":{"textDocument":{"uri":"file:///lib.rs"},"position":{"line":3,"character":7}}}"#
        }
        "exit notification" => r#"{"jsonrpc":"2.0","method":"exit"}"#,
        "bare response" => r#"{"jsonrpc":"2.0","id":1}"#,
        "custom request" => r#"{"jsonrpc":"2.0","id":"c-1","method":"custom/ping"}"#,
        "request without version" => r#"{"id":1,"method":"shutdown"}"#,
        "cancel with extra key" => {
            r#"{"jsonrpc":"2.0","method":"$/cancelRequest","params":{"id":4,"reason":"timeout"}}"#
        }
        other => panic!("unsupported sample message: '{other}'"),
    }
}

fn decoded(world: &TestWorld) -> &IncomingMessage {
    world
        .outcome
        .as_ref()
        .expect("no outcome captured")
        .as_ref()
        .expect("expected a decoded message but got an error")
}

fn decode_error(world: &TestWorld) -> &ProtocolError {
    world
        .outcome
        .as_ref()
        .expect("no outcome captured")
        .as_ref()
        .expect_err("expected an error but decoding succeeded")
}

// ---------------------------------------------------------------------------
// Given steps
// ---------------------------------------------------------------------------

#[given("the raw message {name}")]
fn given_raw_message(world: &mut TestWorld, name: String) {
    world.raw = sample_message(name.trim_matches('"')).as_bytes().to_vec();
}

#[given("strict params decoding")]
fn given_strict_params(world: &mut TestWorld) {
    world.config = world.config.with_params(ParamsMode::Strict);
}

// ---------------------------------------------------------------------------
// When steps
// ---------------------------------------------------------------------------

#[when("the message is decoded")]
fn when_decoded(world: &mut TestWorld) {
    world.outcome = Some(decode_message(&world.raw, &world.config));
}

// ---------------------------------------------------------------------------
// Then steps
// ---------------------------------------------------------------------------

#[then("the message is a request for {method}")]
fn then_request_for(world: &mut TestWorld, method: String) {
    let expected = method.trim_matches('"');
    match decoded(world) {
        IncomingMessage::Request(request) => assert_eq!(request.method, expected),
        other => panic!("expected request, got {other:?}"),
    }
}

#[then("the request binds to the hover params")]
fn then_binds_hover(world: &mut TestWorld) {
    let IncomingMessage::Request(request) = decoded(world) else {
        panic!("expected request");
    };
    let typed = request.parse::<Hover>().expect("bind hover params");
    assert_eq!(typed.params.position, Position::new(3, 7));
}

#[then("the message is a notification for {method}")]
fn then_notification_for(world: &mut TestWorld, method: String) {
    let expected = method.trim_matches('"');
    match decoded(world) {
        IncomingMessage::Notification(notification) => {
            assert_eq!(notification.method, expected);
        }
        other => panic!("expected notification, got {other:?}"),
    }
}

#[then("the message is a response with id {id}")]
fn then_response_with_id(world: &mut TestWorld, id: String) {
    let expected = id.trim_matches('"');
    match decoded(world) {
        IncomingMessage::Response(response) => {
            let shown = response.id.as_ref().map(ToString::to_string);
            assert_eq!(shown.as_deref(), Some(expected));
            assert!(response.result.is_none());
        }
        other => panic!("expected response, got {other:?}"),
    }
}

#[then("decoding fails with {error_kind}")]
fn then_decoding_fails(world: &mut TestWorld, error_kind: String) {
    let err = decode_error(world);
    let kind = error_kind.trim_matches('"');
    match kind {
        "unknown_method" => {
            assert!(
                matches!(err, ProtocolError::UnknownMethod { id: Some(_), .. }),
                "expected UnknownMethod with id, got: {err}"
            );
        }
        "missing_field" => {
            assert!(
                matches!(err, ProtocolError::MissingRequestField { .. }),
                "expected MissingRequestField, got: {err}"
            );
        }
        "invalid_params" => {
            assert!(
                matches!(err, ProtocolError::InvalidParams { .. }),
                "expected InvalidParams, got: {err}"
            );
        }
        other => panic!(
            "unsupported error kind: '{other}' (supported: unknown_method, missing_field, invalid_params)"
        ),
    }
}

#[then("the error code is {code}")]
fn then_error_code(world: &mut TestWorld, code: i32) {
    let err = decode_error(world);
    assert_eq!(err.to_response_error().code, code);
}

// ---------------------------------------------------------------------------
// Scenario registration
// ---------------------------------------------------------------------------

#[scenario(path = "tests/features/message_decoding.feature")]
fn message_decoding_behaviour(world: TestWorld) {
    let _ = world;
}
