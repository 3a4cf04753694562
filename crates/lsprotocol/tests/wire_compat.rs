//! Wire compatibility with the `lsp-types` binding.
//!
//! Values are encoded by one binding and decoded by the other; the JSON must
//! survive both directions unchanged.

use std::str::FromStr;

use lsp_types::notification::Notification as _;
use lsp_types::request::Request as _;

use rstest::{fixture, rstest};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use lsprotocol::{
    CompletionItem, Diagnostic, DocumentUri, Hover, Location, Position, Range, TextEdit,
};

#[fixture]
fn sample_uri() -> lsp_types::Uri {
    lsp_types::Uri::from_str("file:///workspace/main.rs").expect("invalid test URI")
}

fn sample_range() -> lsp_types::Range {
    lsp_types::Range::new(
        lsp_types::Position::new(1, 2),
        lsp_types::Position::new(1, 9),
    )
}

/// Encodes `reference`, decodes it as `T`, and checks the re-encoding matches.
fn assert_reads_reference<R, T>(reference: &R) -> T
where
    R: Serialize,
    T: Serialize + DeserializeOwned,
{
    let expected = serde_json::to_value(reference).expect("encode reference value");
    let decoded: T = serde_json::from_value(expected.clone()).expect("decode as lsprotocol");
    let actual = serde_json::to_value(&decoded).expect("re-encode lsprotocol value");
    assert_eq!(actual, expected);
    decoded
}

/// Encodes `ours` and checks the reference binding reads it back identically.
fn assert_reference_reads<T, R>(ours: &T)
where
    T: Serialize,
    R: Serialize + DeserializeOwned,
{
    let encoded = serde_json::to_value(ours).expect("encode lsprotocol value");
    let reference: R = serde_json::from_value(encoded.clone()).expect("decode as lsp-types");
    let reencoded: Value = serde_json::to_value(&reference).expect("re-encode reference");
    assert_eq!(reencoded, encoded);
}

#[rstest]
fn positions_and_ranges_interoperate() {
    let position: Position = assert_reads_reference(&lsp_types::Position::new(5, 3));
    assert_eq!(position, Position::new(5, 3));

    let range: Range = assert_reads_reference(&sample_range());
    assert_eq!(range.end.character, 9);
    assert_reference_reads::<_, lsp_types::Range>(&range);
}

#[rstest]
fn locations_interoperate(sample_uri: lsp_types::Uri) {
    let location: Location =
        assert_reads_reference(&lsp_types::Location::new(sample_uri, sample_range()));
    assert_eq!(location.uri, DocumentUri::from("file:///workspace/main.rs"));
}

#[rstest]
fn text_edits_interoperate() {
    let edit = TextEdit::new(
        Range::new(Position::new(0, 0), Position::new(0, 3)),
        "let",
    );
    assert_reference_reads::<_, lsp_types::TextEdit>(&edit);
}

#[rstest]
fn diagnostics_interoperate() {
    let mut reference = lsp_types::Diagnostic::new_simple(sample_range(), String::from("unused"));
    reference.severity = Some(lsp_types::DiagnosticSeverity::WARNING);
    reference.code = Some(lsp_types::NumberOrString::Number(42));
    reference.source = Some(String::from("rustc"));

    let diagnostic: Diagnostic = assert_reads_reference(&reference);
    assert_eq!(diagnostic.severity, Some(lsprotocol::DiagnosticSeverity::WARNING));
    assert_eq!(diagnostic.code, Some(lsprotocol::IntegerOrString::Integer(42)));
}

#[rstest]
fn hovers_interoperate() {
    let reference = lsp_types::Hover {
        contents: lsp_types::HoverContents::Markup(lsp_types::MarkupContent {
            kind: lsp_types::MarkupKind::Markdown,
            value: String::from("`fn main()`"),
        }),
        range: Some(sample_range()),
    };
    let hover: Hover = assert_reads_reference(&reference);
    assert!(matches!(hover.contents, lsprotocol::HoverContents::Markup(_)));
}

#[rstest]
fn completion_items_interoperate() {
    let mut reference = lsp_types::CompletionItem::new_simple(
        String::from("println!"),
        String::from("macro"),
    );
    reference.kind = Some(lsp_types::CompletionItemKind::FUNCTION);

    let item: CompletionItem = assert_reads_reference(&reference);
    assert_eq!(item.kind, Some(lsprotocol::CompletionItemKind::FUNCTION));
    assert_reference_reads::<_, lsp_types::CompletionItem>(&item);
}

#[rstest]
#[case::request("textDocument/completion", lsp_types::request::Completion::METHOD)]
#[case::hover("textDocument/hover", lsp_types::request::HoverRequest::METHOD)]
#[case::rename("textDocument/prepareRename", lsp_types::request::PrepareRenameRequest::METHOD)]
#[case::apply_edit("workspace/applyEdit", lsp_types::request::ApplyWorkspaceEdit::METHOD)]
fn request_method_strings_match(#[case] wire: &str, #[case] reference: &str) {
    assert_eq!(wire, reference);
    assert_eq!(lsprotocol::RequestMethod::from_wire(reference).as_str(), reference);
}

#[rstest]
#[case::cancel(lsp_types::notification::Cancel::METHOD)]
#[case::progress(lsp_types::notification::Progress::METHOD)]
#[case::did_open(lsp_types::notification::DidOpenTextDocument::METHOD)]
#[case::publish(lsp_types::notification::PublishDiagnostics::METHOD)]
fn notification_method_strings_are_registered(#[case] reference: &str) {
    assert!(lsprotocol::NOTIFICATION_METHODS.contains_key(reference));
}
