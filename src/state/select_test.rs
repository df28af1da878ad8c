use super::*;
use crate::net::types::RemoteOption;
use std::cell::{Cell, RefCell};

#[derive(Default)]
struct FakeControl {
    value: RefCell<String>,
    options: RefCell<Vec<NativeOption>>,
    placeholder: Option<String>,
    options_url: Option<String>,
    action_url: Option<String>,
    changes: Cell<usize>,
}

impl FakeControl {
    fn with_options(pairs: &[(&str, &str)]) -> Self {
        let control = Self::default();
        *control.options.borrow_mut() = pairs
            .iter()
            .map(|(value, label)| NativeOption {
                value: (*value).to_owned(),
                label: (*label).to_owned(),
                ..NativeOption::default()
            })
            .collect();
        control
    }
}

impl SelectControl for FakeControl {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }
    fn set_value(&self, value: &str) {
        *self.value.borrow_mut() = value.to_owned();
        for option in self.options.borrow_mut().iter_mut() {
            option.selected = option.value == value;
        }
    }
    fn notify_change(&self) {
        self.changes.set(self.changes.get() + 1);
    }
    fn options(&self) -> Vec<NativeOption> {
        self.options.borrow().clone()
    }
    fn replace_options(&self, options: &[NativeOption]) {
        *self.options.borrow_mut() = options.to_vec();
    }
    fn placeholder(&self) -> Option<String> {
        self.placeholder.clone()
    }
    fn options_url(&self) -> Option<String> {
        self.options_url.clone()
    }
    fn action_url(&self) -> Option<String> {
        self.action_url.clone()
    }
}

fn remote(value: &str, text: &str) -> RemoteOption {
    RemoteOption { value: value.to_owned(), text: text.to_owned(), subtext: None, info: None }
}

fn item_values(select: &SmartSelect) -> Vec<String> {
    match select.content() {
        Some(ListContent::Items(items)) => items.iter().map(|i| i.value.clone()).collect(),
        _ => Vec::new(),
    }
}

// =============================================================
// Materialization
// =============================================================

#[test]
fn blank_options_are_not_rendered() {
    let control = FakeControl::with_options(&[("", "Choose..."), ("usd", "USD"), ("eur", ""), ("rub", "RUB")]);
    let mut select = SmartSelect::default();
    assert_eq!(select.open(&control), OpenPlan::Ready);
    assert_eq!(item_values(&select), vec!["usd", "rub"]);
}

#[test]
fn static_items_are_materialized_once() {
    let control = FakeControl::with_options(&[("usd", "USD")]);
    let mut select = SmartSelect::default();
    select.open(&control);
    select.close();
    control.options.borrow_mut().push(NativeOption {
        value: "eur".to_owned(),
        label: "EUR".to_owned(),
        ..NativeOption::default()
    });
    select.open(&control);
    assert_eq!(item_values(&select), vec!["usd"]);
}

#[test]
fn remote_select_fetches_on_every_open() {
    let control = FakeControl { options_url: Some("/currencies".to_owned()), ..FakeControl::default() };
    let mut select = SmartSelect::default();

    assert_eq!(select.open(&control), OpenPlan::Fetch("/currencies".to_owned()));
    select.apply_remote(&control, SelectOptionsResponse::Options(vec![remote("usd", "USD")]));
    select.close();

    assert_eq!(select.open(&control), OpenPlan::Fetch("/currencies".to_owned()));
}

#[test]
fn remote_options_are_written_back_and_keep_selection() {
    let control = FakeControl { options_url: Some("/tickers".to_owned()), ..FakeControl::default() };
    control.set_value("btc");
    let mut select = SmartSelect::default();
    select.open(&control);
    select.apply_remote(
        &control,
        SelectOptionsResponse::Options(vec![remote("eth", "Ethereum"), remote("btc", "Bitcoin")]),
    );

    let native = control.options();
    assert_eq!(native.len(), 3);
    assert_eq!(native[0].value, "");
    assert!(native[2].selected);
    assert_eq!(item_values(&select), vec!["eth", "btc"]);
    assert_eq!(head_label(&control), "Bitcoin");
}

#[test]
fn remote_error_renders_single_message() {
    let control = FakeControl { options_url: Some("/tickers".to_owned()), ..FakeControl::default() };
    let mut select = SmartSelect::default();
    select.open(&control);
    select.apply_remote(&control, SelectOptionsResponse::Error { message: "Login required".to_owned() });
    assert_eq!(select.content(), Some(&ListContent::Message("Login required".to_owned())));
    assert_eq!(select.choose(&control, "anything"), None);
    assert_eq!(control.changes.get(), 0);
}

// =============================================================
// Selection
// =============================================================

#[test]
fn choose_writes_control_and_notifies_once() {
    let control = FakeControl::with_options(&[("usd", "USD"), ("eur", "EUR")]);
    let mut select = SmartSelect::default();
    select.open(&control);

    assert_eq!(select.choose(&control, "eur"), Some(ChooseOutcome::Done));
    assert_eq!(control.value(), "eur");
    assert_eq!(control.changes.get(), 1);
    assert!(!select.is_open());
    assert_eq!(head_label(&control), "EUR");

    let Some(ListContent::Items(items)) = select.content() else {
        panic!("expected items");
    };
    assert_eq!(items.iter().filter(|i| i.selected).count(), 1);
    assert!(items.iter().any(|i| i.value == "eur" && i.selected));
}

#[test]
fn choose_unknown_value_changes_nothing() {
    let control = FakeControl::with_options(&[("usd", "USD")]);
    let mut select = SmartSelect::default();
    select.open(&control);
    assert_eq!(select.choose(&control, "gbp"), None);
    assert_eq!(control.value(), "");
    assert_eq!(control.changes.get(), 0);
    assert!(select.is_open());
}

#[test]
fn action_url_turns_selection_into_navigation() {
    let control = FakeControl {
        action_url: Some("/user/settings?field=currency".to_owned()),
        ..FakeControl::with_options(&[("usd", "USD")])
    };
    let mut select = SmartSelect::default();
    select.open(&control);
    assert_eq!(
        select.choose(&control, "usd"),
        Some(ChooseOutcome::Navigate("/user/settings?field=currency&value=usd".to_owned()))
    );
}

// =============================================================
// Head, open/close, filter
// =============================================================

#[test]
fn head_label_falls_back_to_placeholder_then_glyph() {
    let mut control = FakeControl::with_options(&[("usd", "USD")]);
    assert_eq!(head_label(&control), PLACEHOLDER_FALLBACK);
    control.placeholder = Some("Currency".to_owned());
    assert_eq!(head_label(&control), "Currency");
}

#[test]
fn second_toggle_closes_the_list() {
    let control = FakeControl::with_options(&[("usd", "USD")]);
    let mut select = SmartSelect::default();
    assert_eq!(select.toggle(&control), Some(OpenPlan::Ready));
    assert!(select.is_open());
    assert_eq!(select.toggle(&control), None);
    assert!(!select.is_open());
    select.toggle(&control);
    assert_eq!(select.toggle(&control), None);
    assert!(!select.is_open());
}

#[test]
fn filter_offered_from_five_native_options() {
    let four = FakeControl::with_options(&[("a", "A"), ("b", "B"), ("c", "C"), ("d", "D")]);
    let five = FakeControl::with_options(&[("", ""), ("a", "A"), ("b", "B"), ("c", "C"), ("d", "D")]);
    let select = SmartSelect::default();
    assert!(!select.filter_enabled(&four));
    assert!(select.filter_enabled(&five));
}

#[test]
fn filter_matches_case_insensitive_substring() {
    let mut select = SmartSelect::default();
    let bitcoin = SelectItem { value: "btc".to_owned(), label: "Bitcoin".to_owned(), ..SelectItem::default() };
    let ether = SelectItem { value: "eth".to_owned(), label: "Ethereum".to_owned(), ..SelectItem::default() };
    select.set_filter("COIN");
    assert!(select.is_visible(&bitcoin));
    assert!(!select.is_visible(&ether));
    select.set_filter("  ");
    assert!(select.is_visible(&ether));
}

#[test]
fn reopening_clears_filter() {
    let control = FakeControl::with_options(&[("usd", "USD")]);
    let mut select = SmartSelect::default();
    select.open(&control);
    select.set_filter("us");
    select.close();
    select.open(&control);
    assert_eq!(select.filter(), "");
}
