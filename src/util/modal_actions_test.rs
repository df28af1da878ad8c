use super::*;

#[test]
fn not_update_trigger_drops_enclosing_parent() {
    assert_eq!(trigger_parent(false, Some("PortfolioModal".to_owned())), Some("PortfolioModal".to_owned()));
    assert_eq!(trigger_parent(true, Some("PortfolioModal".to_owned())), None);
    assert_eq!(trigger_parent(false, None), None);
}

#[test]
fn confirmation_and_not_update_modals_opt_out_of_refresh() {
    assert!(refresh_opt_out(CONFIRMATION_MODAL_ID, false));
    assert!(refresh_opt_out("Any", true));
    assert!(!refresh_opt_out("Any", false));
}

#[test]
fn page_reload_requests_content_only() {
    assert_eq!(page_reload_url("https://host/portfolios"), "https://host/portfolios?only_content=true");
    assert_eq!(page_reload_url("https://host/portfolios?page=2"), "https://host/portfolios?page=2&only_content=true");
}

#[test]
fn close_label_translate_is_vertical() {
    assert_eq!(close_label_translate(0), "0 0px");
    assert_eq!(close_label_translate(120), "0 120px");
}
