//! Unit tests for the shared codecs.

use rstest::rstest;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::{Tuple, nullable, strict};
use crate::types::{
    DocumentChange, FeatureProvider, Position, ProgressToken, Range, TextDocumentEditItem,
};

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Holder {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable::deserialize"
    )]
    root_path: Option<Option<String>>,
}

#[rstest]
#[case::absent(json!({}), None)]
#[case::null(json!({ "rootPath": null }), Some(None))]
#[case::value(json!({ "rootPath": "/src" }), Some(Some(String::from("/src"))))]
fn nullable_fields_keep_three_states(
    #[case] raw: Value,
    #[case] expected: Option<Option<String>>,
) {
    let holder: Holder = serde_json::from_value(raw.clone()).expect("decode holder");
    assert_eq!(holder.root_path, expected);
    assert_eq!(serde_json::to_value(&holder).expect("encode holder"), raw);
}

#[rstest]
fn strict_decoder_rejects_nested_unknown_keys() {
    let raw = json!({
        "start": { "line": 1, "character": 0 },
        "end": { "line": 1, "character": 4, "offset": 9 }
    });
    let error = strict::from_value::<Range>(&raw).expect_err("nested extra key should fail");
    let message = error.to_string();
    assert!(
        message.contains("offset"),
        "expected offending key in message: {message}"
    );
}

#[rstest]
fn strict_decoder_rejects_records_encoded_as_arrays() {
    let raw = json!([1, 2]);
    assert!(strict::from_value::<Position>(&raw).is_err());
}

#[rstest]
fn strict_decoder_accepts_exact_records() {
    let raw = json!({ "line": 5, "character": 3 });
    let position: Position = strict::from_value(&raw).expect("exact record");
    assert_eq!(position, Position::new(5, 3));
}

#[rstest]
fn tuple_encodes_as_two_element_array() {
    let pair = Tuple::new(3_u32, String::from("x"));
    let encoded = serde_json::to_value(&pair).expect("encode tuple");
    assert_eq!(encoded, json!([3, "x"]));
    let decoded: Tuple<u32, String> = serde_json::from_value(encoded).expect("decode tuple");
    assert_eq!(decoded.into_inner(), (3, String::from("x")));
}

#[rstest]
#[case::empty(json!([]))]
#[case::single(json!([1]))]
#[case::triple(json!([1, 2, 3]))]
#[case::object(json!({ "0": 1, "1": 2 }))]
fn tuple_rejects_wrong_shapes(#[case] raw: Value) {
    assert!(serde_json::from_value::<Tuple<u32, u32>>(raw).is_err());
}

#[rstest]
#[case::integer(json!(42), ProgressToken::Integer(42))]
#[case::string(json!("abc"), ProgressToken::String(String::from("abc")))]
fn progress_token_selects_alternative_by_json_type(
    #[case] raw: Value,
    #[case] expected: ProgressToken,
) {
    let token: ProgressToken = serde_json::from_value(raw.clone()).expect("decode token");
    assert_eq!(token, expected);
    assert_eq!(serde_json::to_value(&token).expect("encode token"), raw);
}

#[rstest]
fn progress_token_rejects_null_naming_alternatives() {
    let error = serde_json::from_value::<ProgressToken>(Value::Null).expect_err("null token");
    let message = error.to_string();
    assert!(
        message.contains("i32, String"),
        "expected alternatives in message: {message}"
    );
    assert!(message.contains("null"), "expected raw value in message: {message}");
}

#[rstest]
fn union_mismatch_quotes_raw_value() {
    let error = serde_json::from_value::<ProgressToken>(json!(true)).expect_err("bool token");
    let message = error.to_string();
    assert!(
        message.contains("ProgressToken") && message.contains("true"),
        "expected union name and raw value in message: {message}"
    );
}

#[rstest]
fn plain_edit_wins_before_annotated_edit() {
    let plain = json!({
        "range": { "start": { "line": 0, "character": 0 }, "end": { "line": 0, "character": 1 } },
        "newText": "x"
    });
    let item: TextDocumentEditItem = serde_json::from_value(plain).expect("plain edit");
    assert!(matches!(item, TextDocumentEditItem::Text(_)));

    let annotated = json!({
        "range": { "start": { "line": 0, "character": 0 }, "end": { "line": 0, "character": 1 } },
        "newText": "x",
        "annotationId": "rename"
    });
    let item: TextDocumentEditItem = serde_json::from_value(annotated).expect("annotated edit");
    assert!(matches!(item, TextDocumentEditItem::Annotated(_)));
}

#[rstest]
#[case::empty_options(json!({}))]
#[case::work_done(json!({ "workDoneProgress": true }))]
fn narrower_record_wins_when_both_match(#[case] raw: Value) {
    let provider: FeatureProvider = serde_json::from_value(raw).expect("decode provider");
    assert!(
        matches!(provider, FeatureProvider::Options(_)),
        "expected options alternative, got {provider:?}"
    );
}

#[rstest]
fn superset_record_claims_payload_with_its_own_keys() {
    let raw = json!({ "documentSelector": null, "id": "colors" });
    let provider: FeatureProvider = serde_json::from_value(raw).expect("decode provider");
    assert!(matches!(provider, FeatureProvider::Registration(_)));
}

#[rstest]
#[case::create(json!({ "kind": "create", "uri": "file:///a" }), "create")]
#[case::rename(
    json!({ "kind": "rename", "oldUri": "file:///a", "newUri": "file:///b" }),
    "rename"
)]
#[case::delete(json!({ "kind": "delete", "uri": "file:///a" }), "delete")]
fn literal_kind_discriminates_resource_operations(#[case] raw: Value, #[case] kind: &str) {
    let change: DocumentChange = serde_json::from_value(raw).expect("decode change");
    let decoded = match change {
        DocumentChange::Create(_) => "create",
        DocumentChange::Rename(_) => "rename",
        DocumentChange::Delete(_) => "delete",
        DocumentChange::Edit(_) => "edit",
    };
    assert_eq!(decoded, kind);
}
