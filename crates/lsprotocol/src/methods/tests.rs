//! Unit tests for the method registries.

use rstest::rstest;
use strum::IntoEnumIterator;

use super::*;

#[rstest]
#[case::completion("textDocument/completion", RequestMethod::Completion)]
#[case::initialize("initialize", RequestMethod::Initialize)]
#[case::semantic_delta(
    "textDocument/semanticTokens/full/delta",
    RequestMethod::SemanticTokensDelta
)]
#[case::apply_edit("workspace/applyEdit", RequestMethod::ApplyWorkspaceEdit)]
#[case::incoming_calls("callHierarchy/incomingCalls", RequestMethod::CallHierarchyIncomingCalls)]
fn request_methods_resolve_from_wire(#[case] wire: &str, #[case] expected: RequestMethod) {
    assert_eq!(RequestMethod::from_wire(wire), expected);
    assert_eq!(expected.as_str(), wire);
}

#[rstest]
#[case::cancel("$/cancelRequest", NotificationMethod::Cancel)]
#[case::progress("$/progress", NotificationMethod::Progress)]
#[case::watched_files(
    "workspace/didChangeWatchedFiles",
    NotificationMethod::DidChangeWatchedFiles
)]
#[case::exit("exit", NotificationMethod::Exit)]
fn notification_methods_resolve_from_wire(
    #[case] wire: &str,
    #[case] expected: NotificationMethod,
) {
    assert_eq!(NotificationMethod::from_wire(wire), expected);
    assert_eq!(expected.to_string(), wire);
}

#[rstest]
#[case::empty("")]
#[case::custom("rust-analyzer/expandMacro")]
#[case::wrong_case("textdocument/completion")]
fn unrecognised_methods_map_to_unknown(#[case] wire: &str) {
    assert_eq!(RequestMethod::from_wire(wire), RequestMethod::Unknown);
    assert_eq!(
        NotificationMethod::from_wire(wire),
        NotificationMethod::Unknown
    );
    assert!(!REQUEST_METHODS.contains_key(wire));
}

#[test]
fn unknown_symbols_have_empty_wire_form() {
    assert_eq!(RequestMethod::Unknown.as_str(), "");
    assert_eq!(NotificationMethod::Unknown.as_str(), "");
    assert!(!RequestMethod::Unknown.is_known());
}

#[test]
fn registries_cover_every_known_symbol() {
    let known_requests = RequestMethod::iter().filter(|m| m.is_known()).count();
    let known_notifications = NotificationMethod::iter()
        .filter(|m| m.is_known())
        .count();

    assert_eq!(REQUEST_METHODS.len(), known_requests);
    assert_eq!(NOTIFICATION_METHODS.len(), known_notifications);
    for (wire, method) in REQUEST_METHODS.iter() {
        assert_eq!(method.as_str(), *wire);
    }
}

#[test]
fn request_and_notification_wire_strings_do_not_overlap() {
    for wire in REQUEST_METHODS.keys() {
        assert!(
            !NOTIFICATION_METHODS.contains_key(wire),
            "{wire} registered as both request and notification"
        );
    }
}

#[test]
fn methods_parse_through_from_str() {
    let parsed: RequestMethod = "textDocument/hover"
        .parse()
        .expect("hover should parse");
    assert_eq!(parsed, RequestMethod::Hover);
    assert!("not/a/method".parse::<RequestMethod>().is_err());
}

#[test]
fn methods_serialise_as_wire_strings() {
    let encoded = serde_json::to_string(&NotificationMethod::DidOpenTextDocument)
        .expect("serialise method");
    assert_eq!(encoded, "\"textDocument/didOpen\"");

    let decoded: NotificationMethod =
        serde_json::from_str("\"custom/notify\"").expect("decode is lossy, not fallible");
    assert_eq!(decoded, NotificationMethod::Unknown);
}
