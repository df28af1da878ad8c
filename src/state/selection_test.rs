use super::*;

const DELAY: Duration = Duration::from_millis(500);

#[test]
fn summary_label_and_bar_follow_checked_count() {
    let none = SelectionSummary::new(0, 12);
    let some = SelectionSummary::new(3, 12);
    assert_eq!(some.label(), "3 / 12");
    assert!(!none.bar_active());
    assert!(some.bar_active());
}

#[test]
fn explicit_id_overrides_checked_rows() {
    let info = vec![FormField { name: "portfolio_id".to_owned(), value: "4".to_owned() }];
    let request = ActionRequest::build("delete", Some("42"), vec!["1".to_owned(), "2".to_owned()], info.clone());
    assert_eq!(request.ids, vec!["42".to_owned()]);
    assert_eq!(request.info, info);

    let request = ActionRequest::build("delete", Some(""), vec!["1".to_owned(), "2".to_owned()], Vec::new());
    assert_eq!(request.ids, vec!["1".to_owned(), "2".to_owned()]);
}

#[test]
fn request_serializes_to_wire_shape() {
    let request = ActionRequest::build("archive", None, vec!["7".to_owned()], Vec::new());
    let json = serde_json::to_value(&request).expect("serializable");
    assert_eq!(json, serde_json::json!({ "action": "archive", "info": [], "ids": ["7"] }));
}

#[test]
fn redirect_wins_over_every_other_route() {
    let response = ActionResponse { redirect: Some("/portfolios".to_owned()) };
    assert_eq!(route_action(&response, true, Some("M"), DELAY), ActionRoute::Redirect("/portfolios".to_owned()));
}

#[test]
fn flagged_action_reloads_own_modal() {
    let route = route_action(&ActionResponse::default(), true, Some("AssetModal"), DELAY);
    assert_eq!(route, ActionRoute::ReloadOwnModal { id: "AssetModal".to_owned() });
}

#[test]
fn default_route_defers_to_ancestor_refresh() {
    let route = route_action(&ActionResponse { redirect: Some(String::new()) }, false, Some("M"), DELAY);
    assert_eq!(route, ActionRoute::AncestorRefresh { modal_id: Some("M".to_owned()), delay: DELAY });

    let route = route_action(&ActionResponse::default(), true, None, DELAY);
    assert_eq!(route, ActionRoute::AncestorRefresh { modal_id: None, delay: DELAY });
}
