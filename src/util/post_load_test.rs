use super::*;

#[test]
fn sticky_bar_has_count_clear_and_button_slots() {
    let markup = sticky_bar_markup("Selected:");
    assert!(markup.contains(r#"<span class="ms-5">Selected:</span>"#));
    assert!(markup.contains(r#"class="checks-count""#));
    assert!(markup.contains("decheck-all"));
    assert_eq!(markup.matches(r#"class="buttons""#).count(), 1);
}
