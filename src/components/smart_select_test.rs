use super::*;

#[test]
fn head_copies_native_classes_and_marks_open() {
    assert_eq!(head_class("", false), "smart-select");
    assert_eq!(head_class("form-select form-select-sm", false), "smart-select form-select form-select-sm");
    assert_eq!(head_class("form-select", true), "smart-select form-select on");
}

#[test]
fn open_head_selector_matches_only_open_heads() {
    let tokens = |class: String| class.split_whitespace().map(str::to_owned).collect::<Vec<_>>();
    let required: Vec<&str> = OPEN_HEAD_SELECTOR.split('.').filter(|t| !t.is_empty()).collect();
    let open = tokens(head_class("form-select", true));
    let closed = tokens(head_class("form-select", false));
    assert!(required.iter().all(|t| open.iter().any(|c| c == t)));
    assert!(!required.iter().all(|t| closed.iter().any(|c| c == t)));
    assert_eq!(WRAPPER_SELECTOR, format!(".{WRAPPER_CLASS}"));
}

#[test]
fn item_class_marks_selection_and_filtered_items() {
    assert_eq!(item_class(false, false), "smart-select__item");
    assert_eq!(item_class(true, false), "smart-select__item selected");
    assert_eq!(item_class(true, true), "smart-select__item selected d-none");
}

#[test]
fn list_style_hides_closed_list_and_anchors_drop_up() {
    assert_eq!(list_style(false, false), "display: none;");
    assert_eq!(list_style(true, true), "display: block; bottom: 45px;");
}

#[test]
fn lists_below_top_quarter_open_upward() {
    assert!(!opens_upward(100.0, 800.0));
    assert!(!opens_upward(200.0, 800.0));
    assert!(opens_upward(201.0, 800.0));
}
