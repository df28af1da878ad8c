use super::*;

#[test]
fn filtered_rows_carry_hidden_class() {
    assert_eq!(entry_class(2, true), "log-item log-category-2");
    assert_eq!(entry_class(0, false), "log-item log-category-0 visually-hidden");
}

#[test]
fn category_value_parses_with_fallback_to_all() {
    assert_eq!(parse_category(Some("3")), 3);
    assert_eq!(parse_category(Some(" 1 ")), 1);
    assert_eq!(parse_category(Some("error")), 0);
    assert_eq!(parse_category(None), 0);
}

#[test]
fn group_change_applies_checked_radio_value() {
    let mut feed = LogFeed::new();
    feed.set_min_category(category_choice(Some("2"), feed.min_category()));
    assert_eq!(feed.min_category(), 2);
}

#[test]
fn group_change_without_checked_radio_keeps_threshold() {
    let mut feed = LogFeed::new();
    feed.set_min_category(2);
    feed.set_min_category(category_choice(None, feed.min_category()));
    assert_eq!(feed.min_category(), 2);
}
