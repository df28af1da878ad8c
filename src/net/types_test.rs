use super::*;
use serde_json::json;

// =============================================================
// PanelEntry
// =============================================================

#[test]
fn panel_entry_distinguishes_group_headers() {
    let entries: Vec<PanelEntry> = serde_json::from_value(json!([
        { "group_name": "Crypto" },
        { "name": "Tickers", "value": 812, "key": "tickers" },
        { "name": "Updated", "value": "12:00" }
    ]))
    .expect("entries should parse");

    assert_eq!(entries[0], PanelEntry::Group { group_name: "Crypto".to_owned() });
    assert_eq!(
        entries[1],
        PanelEntry::Item { name: "Tickers".to_owned(), value: "812".to_owned(), key: Some("tickers".to_owned()) }
    );
    assert_eq!(
        entries[2],
        PanelEntry::Item { name: "Updated".to_owned(), value: "12:00".to_owned(), key: None }
    );
}

#[test]
fn empty_group_name_is_a_leaf_row() {
    let entry: PanelEntry = serde_json::from_value(json!({ "group_name": "", "name": "Errors", "value": 3 }))
        .expect("entry should parse");
    assert_eq!(entry, PanelEntry::Item { name: "Errors".to_owned(), value: "3".to_owned(), key: None });

    let entry: PanelEntry =
        serde_json::from_value(json!({ "group_name": null, "name": "Queue", "value": "idle" }))
            .expect("entry should parse");
    assert!(matches!(entry, PanelEntry::Item { .. }));
}

#[test]
fn panel_entry_without_name_or_group_is_rejected() {
    assert!(serde_json::from_value::<PanelEntry>(json!({ "value": 1 })).is_err());
}

#[test]
fn info_snapshot_defaults_missing_sections() {
    let snapshot: InfoSnapshot = serde_json::from_value(json!({ "info": [] })).expect("snapshot should parse");
    assert!(snapshot.events.is_empty());
    assert!(snapshot.streams.is_empty());
}

#[test]
fn stream_item_accepts_numeric_id_and_calls() {
    let item: StreamItem = serde_json::from_value(json!({
        "id": 7, "name": "polygon", "calls": 4, "api_key": "k-1", "called": "12:00", "status": "ok"
    }))
    .expect("stream should parse");
    assert_eq!(item.id, "7");
    assert_eq!(item.calls, "4");
}

// =============================================================
// TaskItem
// =============================================================

#[test]
fn task_item_treats_empty_task_id_as_idle() {
    let idle: TaskItem =
        serde_json::from_value(json!({ "name": "update_prices", "task_id": "" })).expect("task should parse");
    assert_eq!(idle.id, None);
    assert_eq!(idle.label(), "update_prices");

    let running: TaskItem = serde_json::from_value(json!({ "name": "update_prices", "name_ru": "Prices", "id": "t-9" }))
        .expect("task should parse");
    assert_eq!(running.id.as_deref(), Some("t-9"));
    assert_eq!(running.label(), "Prices");
}

// =============================================================
// LogItem
// =============================================================

#[test]
fn log_item_parses_string_timestamps() {
    let item: LogItem = serde_json::from_value(json!({
        "time": "2024-03-01 10:20:30.123+00:00",
        "timestamp": "1709288430.123",
        "text": "done",
        "category": 2
    }))
    .expect("log should parse");
    assert!((item.timestamp - 1_709_288_430.123).abs() < 1e-6);
    assert_eq!(item.category, 2);
}

#[test]
fn log_item_rejects_non_numeric_timestamp() {
    let err = serde_json::from_value::<LogItem>(json!({ "timestamp": "soon", "text": "x" }));
    assert!(err.is_err());
}

// =============================================================
// SelectOptionsResponse / actions
// =============================================================

#[test]
fn select_response_parses_list_and_error() {
    let list: SelectOptionsResponse =
        serde_json::from_value(json!([{ "value": 1, "text": "USD", "subtext": "Dollar" }])).expect("list should parse");
    let SelectOptionsResponse::Options(options) = list else {
        panic!("expected options");
    };
    assert_eq!(options[0].value, "1");
    assert_eq!(options[0].subtext.as_deref(), Some("Dollar"));

    let error: SelectOptionsResponse =
        serde_json::from_value(json!({ "message": "Nothing found" })).expect("error should parse");
    assert_eq!(error, SelectOptionsResponse::Error { message: "Nothing found".to_owned() });
}

#[test]
fn action_request_serializes_expected_shape() {
    let request = ActionRequest {
        action: "delete".to_owned(),
        info: vec![FormField { name: "portfolio_id".to_owned(), value: "3".to_owned() }],
        ids: vec!["10".to_owned(), "11".to_owned()],
    };
    assert_eq!(
        serde_json::to_value(&request).expect("request should serialize"),
        json!({ "action": "delete", "info": [{ "name": "portfolio_id", "value": "3" }], "ids": ["10", "11"] })
    );
}

#[test]
fn action_response_redirect_is_optional() {
    let empty: ActionResponse = serde_json::from_value(json!({})).expect("response should parse");
    assert_eq!(empty.redirect, None);
    let redirect: ActionResponse =
        serde_json::from_value(json!({ "redirect": "/portfolios" })).expect("response should parse");
    assert_eq!(redirect.redirect.as_deref(), Some("/portfolios"));
}
