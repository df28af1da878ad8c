//! Bulk row selection and action-result routing.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::time::Duration;

use crate::net::types::{ActionRequest, ActionResponse, FormField};

/// Checkbox tally for one form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionSummary {
    pub checked: usize,
    pub total: usize,
}

impl SelectionSummary {
    #[must_use]
    pub fn new(checked: usize, total: usize) -> Self {
        Self { checked, total }
    }

    /// `"N / total"` as shown in the sticky bar.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} / {}", self.checked, self.total)
    }

    /// The sticky action bar is shown exactly while something is checked.
    #[must_use]
    pub fn bar_active(&self) -> bool {
        self.checked > 0
    }
}

impl ActionRequest {
    /// Build the POST body; an explicit row id takes precedence over checked rows.
    #[must_use]
    pub fn build(action: &str, explicit_id: Option<&str>, checked: Vec<String>, info: Vec<FormField>) -> Self {
        let ids = match explicit_id.filter(|id| !id.is_empty()) {
            Some(id) => vec![id.to_owned()],
            None => checked,
        };
        Self { action: action.to_owned(), info, ids }
    }
}

/// Where a successful action sends the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionRoute {
    /// Navigate the window.
    Redirect(String),
    /// Reload the enclosing modal from its stored URL.
    ReloadOwnModal { id: String },
    /// After `delay`, run the ancestor-refresh protocol for `modal_id`, or
    /// reload the page content when the action came from the page itself.
    AncestorRefresh { modal_id: Option<String>, delay: Duration },
}

/// Route a successful action response.
#[must_use]
pub fn route_action(
    response: &ActionResponse,
    reload_own_modal: bool,
    modal_id: Option<&str>,
    delay: Duration,
) -> ActionRoute {
    if let Some(url) = response.redirect.as_ref().filter(|u| !u.is_empty()) {
        return ActionRoute::Redirect(url.clone());
    }
    match modal_id {
        Some(id) if reload_own_modal => ActionRoute::ReloadOwnModal { id: id.to_owned() },
        _ => ActionRoute::AncestorRefresh { modal_id: modal_id.map(str::to_owned), delay },
    }
}
