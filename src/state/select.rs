//! Smart select: searchable popup view over a native `<select>`.
//!
//! DESIGN
//! ======
//! The native control is the only store of the selected value. The widget
//! reads it through [`SelectControl`] and writes back through
//! [`SelectControl::set_value`] followed by exactly one
//! [`SelectControl::notify_change`]; [`SmartSelect`] only holds view state
//! (open flag, materialized items, filter text).

#[cfg(test)]
#[path = "select_test.rs"]
mod select_test;

use crate::config::DEFAULT_FILTER_THRESHOLD;
use crate::net::types::{RemoteOption, SelectOptionsResponse};
use crate::util::url::with_query;

/// Head text when neither a selection nor a placeholder exists.
pub const PLACEHOLDER_FALLBACK: &str = "\u{a0}";

/// One `<option>` as the native control holds it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NativeOption {
    pub value: String,
    pub label: String,
    pub subtext: Option<String>,
    pub info: Option<serde_json::Value>,
    pub selected: bool,
}

impl From<RemoteOption> for NativeOption {
    fn from(option: RemoteOption) -> Self {
        Self {
            value: option.value,
            label: option.text,
            subtext: option.subtext,
            info: option.info,
            selected: false,
        }
    }
}

/// The wrapped native control; authoritative for value and options.
pub trait SelectControl {
    fn value(&self) -> String;
    /// Write the value. Does not notify listeners.
    fn set_value(&self, value: &str);
    /// Fire the control's change notification.
    fn notify_change(&self);
    fn options(&self) -> Vec<NativeOption>;
    fn replace_options(&self, options: &[NativeOption]);
    fn placeholder(&self) -> Option<String>;
    /// Remote option source (`data-url`).
    fn options_url(&self) -> Option<String>;
    /// Side-effecting endpoint hit on selection (`data-action-url`).
    fn action_url(&self) -> Option<String>;
}

/// A rendered, selectable list item.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectItem {
    pub value: String,
    pub label: String,
    pub subtext: Option<String>,
    pub info: Option<serde_json::Value>,
    pub selected: bool,
}

/// Materialized list contents.
#[derive(Clone, Debug, PartialEq)]
pub enum ListContent {
    Items(Vec<SelectItem>),
    /// Application error from the remote source; one inert item.
    Message(String),
}

/// How the list must be populated after an open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpenPlan {
    /// Fetch this URL, then call [`SmartSelect::apply_remote`].
    Fetch(String),
    /// The list is ready to show.
    Ready,
}

/// What follows a selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChooseOutcome {
    Done,
    /// GET this URL, then reload the page.
    Navigate(String),
}

/// View state of one upgraded control.
#[derive(Clone, Debug, PartialEq)]
pub struct SmartSelect {
    open: bool,
    content: Option<ListContent>,
    filter: String,
    filter_threshold: usize,
}

impl Default for SmartSelect {
    fn default() -> Self {
        Self::new(DEFAULT_FILTER_THRESHOLD)
    }
}

/// Items for every native option with both a value and a label.
#[must_use]
pub fn items_from_options(options: &[NativeOption], current: &str) -> Vec<SelectItem> {
    options
        .iter()
        .filter(|o| !o.value.is_empty() && !o.label.is_empty())
        .map(|o| SelectItem {
            value: o.value.clone(),
            label: o.label.clone(),
            subtext: o.subtext.clone(),
            info: o.info.clone(),
            selected: o.value == current,
        })
        .collect()
}

/// Head label: selected option's label, else placeholder, else fallback glyph.
pub fn head_label<C: SelectControl>(control: &C) -> String {
    let current = control.value();
    control
        .options()
        .into_iter()
        .find(|o| o.selected || (!current.is_empty() && o.value == current))
        .map(|o| o.label)
        .filter(|label| !label.is_empty())
        .or_else(|| control.placeholder().filter(|p| !p.is_empty()))
        .unwrap_or_else(|| PLACEHOLDER_FALLBACK.to_owned())
}

impl SmartSelect {
    #[must_use]
    pub fn new(filter_threshold: usize) -> Self {
        Self { open: false, content: None, filter: String::new(), filter_threshold }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn content(&self) -> Option<&ListContent> {
        self.content.as_ref()
    }

    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Whether the text filter is offered for this control.
    pub fn filter_enabled<C: SelectControl>(&self, control: &C) -> bool {
        control.options().len() >= self.filter_threshold
    }

    /// Open the list. Remote controls refetch on every open; static
    /// controls materialize once and reuse the cached items.
    pub fn open<C: SelectControl>(&mut self, control: &C) -> OpenPlan {
        self.open = true;
        self.filter.clear();
        if let Some(url) = control.options_url() {
            return OpenPlan::Fetch(url);
        }
        if self.content.is_none() {
            self.content = Some(ListContent::Items(items_from_options(&control.options(), &control.value())));
        }
        OpenPlan::Ready
    }

    /// Rebuild from a remote response, writing options back into the control.
    ///
    /// The previous selection survives when its value is still offered.
    pub fn apply_remote<C: SelectControl>(&mut self, control: &C, response: SelectOptionsResponse) {
        match response {
            SelectOptionsResponse::Error { message } => {
                self.content = Some(ListContent::Message(message));
            }
            SelectOptionsResponse::Options(remote) => {
                let current = control.value();
                let mut options = Vec::with_capacity(remote.len() + 1);
                options.push(NativeOption::default());
                options.extend(remote.into_iter().map(|o| {
                    let mut option = NativeOption::from(o);
                    option.selected = !current.is_empty() && option.value == current;
                    option
                }));
                control.replace_options(&options);
                self.content = Some(ListContent::Items(items_from_options(&options, &current)));
            }
        }
    }

    /// Choose the item carrying `value`.
    ///
    /// Unknown values are ignored. Otherwise the control is written, one
    /// change notification fires, and the list closes.
    pub fn choose<C: SelectControl>(&mut self, control: &C, value: &str) -> Option<ChooseOutcome> {
        let Some(ListContent::Items(items)) = self.content.as_mut() else {
            return None;
        };
        if !items.iter().any(|i| i.value == value) {
            return None;
        }
        for item in items.iter_mut() {
            item.selected = item.value == value;
        }

        control.set_value(value);
        control.notify_change();
        self.close();

        Some(match control.action_url() {
            Some(url) => ChooseOutcome::Navigate(with_query(&url, "value", value)),
            None => ChooseOutcome::Done,
        })
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Head click: toggles the list.
    pub fn toggle<C: SelectControl>(&mut self, control: &C) -> Option<OpenPlan> {
        if self.open {
            self.close();
            None
        } else {
            Some(self.open(control))
        }
    }

    pub fn set_filter(&mut self, text: &str) {
        text.clone_into(&mut self.filter);
    }

    /// Case-insensitive substring match of the filter over the label.
    #[must_use]
    pub fn is_visible(&self, item: &SelectItem) -> bool {
        let needle = self.filter.trim();
        if needle.is_empty() {
            return true;
        }
        item.label.to_lowercase().contains(&needle.to_lowercase())
    }
}
