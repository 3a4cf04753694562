//! Unit tests for the data model's wire encoding.

use insta::assert_snapshot;
use rstest::rstest;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::*;

fn round_trip<T>(raw: &Value) -> Value
where
    T: Serialize + DeserializeOwned,
{
    let decoded: T = serde_json::from_value(raw.clone()).expect("decode value");
    serde_json::to_value(&decoded).expect("encode value")
}

#[rstest]
fn position_encodes_exactly() {
    let encoded = serde_json::to_string(&Position::new(5, 3)).expect("encode position");
    assert_snapshot!(encoded, @r#"{"line":5,"character":3}"#);
}

#[rstest]
fn range_round_trips_byte_for_byte() {
    let text = r#"{"start":{"line":1,"character":2},"end":{"line":3,"character":4}}"#;
    let range: Range = serde_json::from_str(text).expect("decode range");
    assert_eq!(range, Range::new(Position::new(1, 2), Position::new(3, 4)));
    assert_eq!(serde_json::to_string(&range).expect("encode range"), text);
}

#[rstest]
#[case::diagnostic(json!({
    "range": { "start": { "line": 0, "character": 0 }, "end": { "line": 0, "character": 5 } },
    "severity": 1,
    "code": "E0308",
    "source": "rustc",
    "message": "mismatched types",
    "tags": [1]
}))]
#[case::minimal_diagnostic(json!({
    "range": { "start": { "line": 2, "character": 1 }, "end": { "line": 2, "character": 1 } },
    "message": "unused"
}))]
#[case::null_data(json!({
    "range": { "start": { "line": 0, "character": 0 }, "end": { "line": 0, "character": 1 } },
    "message": "m",
    "data": null
}))]
fn diagnostics_round_trip(#[case] raw: Value) {
    assert_eq!(round_trip::<Diagnostic>(&raw), raw);
}

#[rstest]
fn any_typed_data_keeps_explicit_null() {
    let raw = json!({
        "range": { "start": { "line": 0, "character": 0 }, "end": { "line": 0, "character": 1 } },
        "message": "m",
        "data": null
    });
    let diagnostic: Diagnostic = serde_json::from_value(raw).expect("decode diagnostic");
    assert_eq!(diagnostic.data, Some(Value::Null));

    let absent: Diagnostic = serde_json::from_value(json!({
        "range": { "start": { "line": 0, "character": 0 }, "end": { "line": 0, "character": 1 } },
        "message": "m"
    }))
    .expect("decode diagnostic");
    assert_eq!(absent.data, None);
}

#[rstest]
fn code_lens_keeps_null_data() {
    let raw = json!({
        "range": { "start": { "line": 0, "character": 0 }, "end": { "line": 0, "character": 1 } },
        "data": null
    });
    assert_eq!(round_trip::<CodeLens>(&raw), raw);
}

#[rstest]
fn initialize_params_keep_null_any_members() {
    let raw = json!({
        "processId": null,
        "rootUri": null,
        "capabilities": { "experimental": null },
        "initializationOptions": null
    });
    assert_eq!(round_trip::<InitializeParams>(&raw), raw);
}

#[rstest]
#[case::changes(json!({
    "changes": {
        "file:///a.rs": [{
            "range": { "start": { "line": 0, "character": 0 }, "end": { "line": 0, "character": 3 } },
            "newText": "let"
        }]
    }
}))]
#[case::document_changes(json!({
    "documentChanges": [
        { "kind": "create", "uri": "file:///new.rs", "options": { "overwrite": true } },
        {
            "textDocument": { "uri": "file:///new.rs", "version": null },
            "edits": [{
                "range": { "start": { "line": 0, "character": 0 }, "end": { "line": 0, "character": 0 } },
                "newText": "fn main() {}",
                "annotationId": "create"
            }]
        },
        { "kind": "delete", "uri": "file:///old.rs" }
    ],
    "changeAnnotations": { "create": { "label": "Create file" } }
}))]
fn workspace_edits_round_trip(#[case] raw: Value) {
    assert_eq!(round_trip::<WorkspaceEdit>(&raw), raw);
}

#[rstest]
#[case::code_action_kind("my.custom.kind")]
#[case::unpublished_refactor("refactor.reorder")]
fn open_string_enums_keep_unknown_values(#[case] text: &str) {
    let kind: CodeActionKind = serde_json::from_value(json!(text)).expect("decode kind");
    assert!(!kind.is_known());
    assert_eq!(kind.as_str(), text);
    assert_eq!(serde_json::to_value(&kind).expect("encode kind"), json!(text));
}

#[rstest]
fn open_numeric_enums_keep_unknown_values() {
    let kind: CompletionItemKind = serde_json::from_value(json!(99)).expect("decode kind");
    assert!(!kind.is_known());
    assert_eq!(kind.value(), 99);
    assert_eq!(format!("{kind:?}"), "CompletionItemKind(99)");
}

#[rstest]
#[case::severity(DiagnosticSeverity::ERROR.value(), 1)]
#[case::function(CompletionItemKind::FUNCTION.value(), 3)]
fn published_constants_match_wire_codes(#[case] value: u32, #[case] expected: u32) {
    assert_eq!(value, expected);
}

#[rstest]
fn published_string_constants_compare_equal_to_decoded_values() {
    let decoded: CodeActionKind = serde_json::from_value(json!("quickfix")).expect("decode");
    assert_eq!(decoded, CodeActionKind::QUICKFIX);
    assert_eq!(PositionEncodingKind::UTF16.as_str(), "utf-16");
}

#[rstest]
#[case::absent(json!({ "processId": 1, "rootUri": null, "capabilities": {} }), None)]
#[case::null(
    json!({ "processId": 1, "rootPath": null, "rootUri": null, "capabilities": {} }),
    Some(None)
)]
#[case::value(
    json!({ "processId": 1, "rootPath": "/src", "rootUri": null, "capabilities": {} }),
    Some(Some(String::from("/src")))
)]
fn initialize_params_keep_null_and_absent_apart(
    #[case] raw: Value,
    #[case] expected: Option<Option<String>>,
) {
    let params: InitializeParams = serde_json::from_value(raw.clone()).expect("decode params");
    assert_eq!(params.root_path, expected);
    assert_eq!(round_trip::<InitializeParams>(&raw), raw);
}

#[rstest]
fn required_nullable_fields_are_always_encoded() {
    let params = InitializeParams::default();
    let encoded = serde_json::to_value(&params).expect("encode params");
    assert_eq!(encoded.get("processId"), Some(&Value::Null));
    assert_eq!(encoded.get("rootUri"), Some(&Value::Null));
    assert!(encoded.get("rootPath").is_none());
}

#[rstest]
fn non_nullable_union_rejects_null_naming_alternatives() {
    let error = serde_json::from_value::<Definition>(Value::Null).expect_err("null definition");
    let message = error.to_string();
    assert!(
        message.contains("Location, Vec<Location>"),
        "expected alternatives in message: {message}"
    );
}

#[rstest]
fn nullable_union_resolves_null_without_attempting_alternatives() {
    let folders: Option<Vec<WorkspaceFolder>> =
        serde_json::from_value(Value::Null).expect("null folders");
    assert!(folders.is_none());
    let result: Option<GotoResult> = serde_json::from_value(Value::Null).expect("null result");
    assert!(result.is_none());
}

#[rstest]
fn goto_result_distinguishes_locations_from_links() {
    let location = json!({
        "uri": "file:///a.rs",
        "range": { "start": { "line": 0, "character": 0 }, "end": { "line": 0, "character": 1 } }
    });
    let single: GotoResult = serde_json::from_value(location.clone()).expect("location");
    assert!(matches!(single, GotoResult::Definition(Definition::Location(_))));

    let link = json!([{
        "targetUri": "file:///a.rs",
        "targetRange": location["range"],
        "targetSelectionRange": location["range"]
    }]);
    let links: GotoResult = serde_json::from_value(link).expect("links");
    assert!(matches!(links, GotoResult::Links(_)));
}

#[rstest]
fn hover_contents_accept_legacy_marked_strings() {
    let raw = json!({ "contents": [{ "language": "rust", "value": "fn main()" }, "docs"] });
    let hover: Hover = serde_json::from_value(raw.clone()).expect("decode hover");
    assert!(matches!(hover.contents, HoverContents::MarkedList(ref list) if list.len() == 2));
    assert_eq!(serde_json::to_value(&hover).expect("encode hover"), raw);
}

#[rstest]
fn completion_response_prefers_item_arrays() {
    let items: CompletionResponseValue =
        serde_json::from_value(json!([{ "label": "println!" }])).expect("items");
    assert!(matches!(items, CompletionResponseValue::Items(_)));

    let list: CompletionResponseValue =
        serde_json::from_value(json!({ "isIncomplete": false, "items": [] })).expect("list");
    assert!(matches!(list, CompletionResponseValue::List(_)));
}

#[rstest]
fn document_symbol_result_picks_by_shape() {
    let range = json!({ "start": { "line": 0, "character": 0 }, "end": { "line": 4, "character": 1 } });
    let hierarchical = json!([{
        "name": "main",
        "kind": 12,
        "range": range,
        "selectionRange": range
    }]);
    let result: DocumentSymbolResult = serde_json::from_value(hierarchical).expect("symbols");
    assert!(matches!(result, DocumentSymbolResult::Symbols(_)));

    let flat = json!([{
        "name": "main",
        "kind": 12,
        "location": { "uri": "file:///a.rs", "range": range }
    }]);
    let result: DocumentSymbolResult = serde_json::from_value(flat).expect("information");
    assert!(matches!(result, DocumentSymbolResult::Information(_)));
}

#[rstest]
fn document_diagnostic_report_uses_kind_literal() {
    let unchanged = json!({ "kind": "unchanged", "resultId": "r1" });
    let report: DocumentDiagnosticReport =
        serde_json::from_value(unchanged.clone()).expect("unchanged report");
    assert!(matches!(report, DocumentDiagnosticReport::Unchanged(_)));
    assert_eq!(serde_json::to_value(&report).expect("encode report"), unchanged);

    let full = json!({ "kind": "full", "items": [] });
    let report: DocumentDiagnosticReport = serde_json::from_value(full).expect("full report");
    assert!(matches!(report, DocumentDiagnosticReport::Full(_)));
}

#[rstest]
fn workspace_report_encodes_null_version() {
    let raw = json!({ "uri": "file:///a.rs", "version": null, "kind": "full", "items": [] });
    assert_eq!(
        round_trip::<WorkspaceDocumentDiagnosticReport>(&raw),
        raw
    );
}

#[rstest]
fn server_capabilities_round_trip_mixed_providers() {
    let raw = json!({
        "positionEncoding": "utf-16",
        "textDocumentSync": 2,
        "hoverProvider": true,
        "completionProvider": { "triggerCharacters": ["."], "resolveProvider": true },
        "definitionProvider": { "workDoneProgress": false },
        "colorProvider": { "documentSelector": null, "id": "colors" },
        "semanticTokensProvider": {
            "legend": { "tokenTypes": ["keyword"], "tokenModifiers": [] },
            "full": { "delta": true }
        },
        "experimental": { "custom": 1 }
    });
    let capabilities: ServerCapabilities =
        serde_json::from_value(raw.clone()).expect("decode capabilities");
    assert!(matches!(
        capabilities.color_provider,
        Some(FeatureProvider::Registration(_))
    ));
    assert_eq!(
        serde_json::to_value(&capabilities).expect("encode capabilities"),
        raw
    );
}

#[rstest]
fn client_capabilities_default_to_empty_object() {
    let encoded = serde_json::to_value(ClientCapabilities::default()).expect("encode");
    assert_eq!(encoded, json!({}));
}

#[rstest]
fn inlay_hint_label_accepts_parts() {
    let raw = json!({
        "position": { "line": 1, "character": 8 },
        "label": [{ "value": ": " }, { "value": "i32", "tooltip": "a 32-bit integer" }],
        "kind": 1
    });
    let hint: InlayHint = serde_json::from_value(raw.clone()).expect("decode hint");
    assert!(matches!(hint.label, InlayHintLabel::Parts(ref parts) if parts.len() == 2));
    assert_eq!(serde_json::to_value(&hint).expect("encode hint"), raw);
}

#[rstest]
fn prepare_rename_result_discriminates_placeholder_and_default() {
    let default: PrepareRenameResult =
        serde_json::from_value(json!({ "defaultBehavior": true })).expect("default behaviour");
    assert!(matches!(default, PrepareRenameResult::DefaultBehavior(_)));

    let placeholder: PrepareRenameResult = serde_json::from_value(json!({
        "range": { "start": { "line": 0, "character": 3 }, "end": { "line": 0, "character": 7 } },
        "placeholder": "main"
    }))
    .expect("placeholder");
    assert!(matches!(placeholder, PrepareRenameResult::Placeholder(_)));
}
