//! Modal loader and executor: applies [`ModalStack`] decisions to the DOM.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every fragment modal lives as a `div.modal` under the shared `#Modals`
//! container. This module fetches fragments into those nodes, mirrors the
//! stack's visibility and stacking state onto them, and executes the
//! [`RefreshPlan`] a close produces. Failed fetches log and leave the node
//! as it was.
//!
//! [`ModalStack`]: crate::state::modal::ModalStack

#[cfg(test)]
#[path = "modal_actions_test.rs"]
mod modal_actions_test;

use crate::config::CONFIRMATION_MODAL_ID;
#[cfg(feature = "csr")]
use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::app::Dashboard;
#[cfg(feature = "csr")]
use crate::state::modal::{Confirmation, LoadRequest, LoadTarget, ModalKind, RefreshPlan};
use crate::util::url::only_content;

/// Trigger class opting a modal out of ancestor chaining.
pub const NOT_UPDATE_CLASS: &str = "not-update";

/// Ancestor recorded for a modal opened from a trigger.
///
/// `enclosing` is the id of the modal around the trigger, if any.
#[must_use]
pub fn trigger_parent(not_update: bool, enclosing: Option<String>) -> Option<String> {
    if not_update { None } else { enclosing }
}

/// Modals that must not run the ancestor-refresh protocol on hide.
#[must_use]
pub fn refresh_opt_out(modal_id: &str, has_not_update_class: bool) -> bool {
    modal_id == CONFIRMATION_MODAL_ID || has_not_update_class
}

/// URL used to reload the page content region in place.
#[must_use]
pub fn page_reload_url(href: &str) -> String {
    only_content(href)
}

/// CSS translation applied to a shifted close affordance.
#[must_use]
pub fn close_label_translate(offset_px: i32) -> String {
    format!("0 {offset_px}px")
}

/// Fetch `url` into modal `modal_id`, creating the node on first use.
#[cfg(feature = "csr")]
pub fn open(dash: &Dashboard, modal_id: &str, url: &str, preset_refresh_parent: bool, parent: Option<String>) {
    let request = dash
        .modals
        .with_untracked(|s| s.plan_load(modal_id, url, preset_refresh_parent, parent.as_deref()));
    let dash = dash.clone();
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_fragment(&request.request_url).await {
            Ok(html) => apply_load(&dash, &request, &html),
            Err(err) => leptos::logging::warn!("modal {} load failed: {err}", request.modal_id),
        }
    });
}

#[cfg(feature = "csr")]
fn apply_load(dash: &Dashboard, request: &LoadRequest, html: &str) {
    use super::dom;

    let Some(node) = modal_node(&request.modal_id) else {
        leptos::logging::warn!("no container for modal {}", request.modal_id);
        return;
    };
    let kind = if request.target == LoadTarget::FullscreenBody {
        if let Some(body) = dom::query(&node, ".modal-body") {
            super::mounts::release_within(&body);
            body.set_inner_html(html);
        }
        ModalKind::Fullscreen
    } else {
        super::mounts::release_within(&node);
        node.set_inner_html(html);
        ModalKind::detect(html)
    };
    let opt_out = refresh_opt_out(&request.modal_id, dom::has_class(&node, NOT_UPDATE_CLASS));
    let commit = dash.modals.try_update(|s| s.commit_load(request, kind, opt_out));

    super::post_load::run(dash, &node);
    if commit.is_some_and(|c| c.already_visible) {
        sync_dom(dash);
        dom::focus_first(&node);
    } else {
        show(dash, &request.modal_id);
    }
}

/// Existing node for `id`, or a fresh hidden overlay appended to `#Modals`.
#[cfg(feature = "csr")]
fn modal_node(id: &str) -> Option<web_sys::Element> {
    use super::dom;

    if let Some(existing) = dom::by_id(id) {
        return Some(existing);
    }
    let document = dom::document()?;
    let node = document.create_element("div").ok()?;
    node.set_id(id);
    node.set_class_name("modal fade");
    let _ = node.set_attribute("tabindex", "-1");
    let _ = node.set_attribute("aria-hidden", "true");
    let container: web_sys::Element = match dom::by_id(crate::config::MODALS_CONTAINER_ID) {
        Some(container) => container,
        None => document.body()?.into(),
    };
    container.append_child(&node).ok()?;
    Some(node)
}

/// Show transition for a loaded modal.
#[cfg(feature = "csr")]
pub fn show(dash: &Dashboard, id: &str) {
    if dash.modals.try_update(|s| s.show(id)).unwrap_or(false) {
        sync_dom(dash);
        if let Some(node) = super::dom::by_id(id) {
            super::dom::focus_first(&node);
        }
    }
}

/// Hide transition, then whatever the ancestor-refresh protocol decides.
#[cfg(feature = "csr")]
pub fn hide(dash: &Dashboard, id: &str) {
    let Some(outcome) = dash.modals.try_update(|s| s.hide(id)).flatten() else {
        return;
    };
    if outcome.clear_body {
        if let Some(body) = super::dom::by_id(id).and_then(|n| super::dom::query(&n, ".modal-body")) {
            super::mounts::release_within(&body);
            body.set_inner_html("");
        }
    }
    sync_dom(dash);
    execute(dash, outcome.refresh);
}

/// Hide the topmost open modal.
#[cfg(feature = "csr")]
pub fn hide_top(dash: &Dashboard) {
    if let Some(id) = dash.modals.with_untracked(|s| s.open_ids().pop()) {
        hide(dash, &id);
    }
}

/// Run an ancestor-refresh decision.
#[cfg(feature = "csr")]
pub fn execute(dash: &Dashboard, plan: RefreshPlan) {
    match plan {
        RefreshPlan::Nothing => {}
        RefreshPlan::ReloadModal { id, url } => open(dash, &id, &url, true, None),
        RefreshPlan::ReloadPage => load_page(dash, None),
        RefreshPlan::CloseModal { id } => hide(dash, &id),
    }
}

/// Run the protocol for `id` without hiding it (used after in-modal actions).
#[cfg(feature = "csr")]
pub fn refresh_ancestor(dash: &Dashboard, id: &str) {
    let plan = dash.modals.try_update(|s| s.ancestor_refresh(id)).unwrap_or(RefreshPlan::Nothing);
    execute(dash, plan);
}

/// Reload a modal from its own stored URL.
#[cfg(feature = "csr")]
pub fn reload_own(dash: &Dashboard, id: &str) {
    let url = dash.modals.with_untracked(|s| s.get(id).and_then(|r| r.url.clone()));
    match url {
        Some(url) => open(dash, id, &url, true, None),
        None => leptos::logging::warn!("modal {id} has no stored url to reload"),
    }
}

/// Point the shared confirmation modal at `confirmation` and show it.
#[cfg(feature = "csr")]
pub fn confirm(dash: &Dashboard, confirmation: Confirmation, parent: Option<String>, close_parent: bool) {
    dash.modals.update(|s| s.open_confirmation(confirmation, parent, close_parent));
    show(dash, CONFIRMATION_MODAL_ID);
}

/// Load `url` (default: the current location, content only) into `#content`.
#[cfg(feature = "csr")]
pub fn load_page(dash: &Dashboard, url: Option<String>) {
    use super::dom;

    let Some(url) = url.or_else(|| dom::current_href().map(|href| page_reload_url(&href))) else {
        return;
    };
    let dash = dash.clone();
    leptos::task::spawn_local(async move {
        let html = match crate::net::api::fetch_fragment(&url).await {
            Ok(html) => html,
            Err(err) => {
                leptos::logging::warn!("page content load failed: {err}");
                return;
            }
        };
        let Some(content) = dom::by_id(crate::config::PAGE_CONTENT_ID) else {
            dom::reload();
            return;
        };
        super::mounts::release_within(&content);
        content.set_inner_html(&html);
        super::post_load::run(&dash, &content);
        dom::focus_first(&content);
    });
}

/// Mirror visibility, z-order and close-label shifts onto the modal nodes.
#[cfg(feature = "csr")]
pub fn sync_dom(dash: &Dashboard) {
    use super::dom;

    let records = dash.modals.with_untracked(|s| s.records().to_vec());
    let mut any_visible = false;
    for record in records {
        any_visible |= record.visible;
        let Some(node) = dom::by_id(&record.id) else {
            continue;
        };
        dom::toggle_class(&node, "show", record.visible);
        dom::set_style(&node, "display", if record.visible { "block" } else { "none" });
        dom::set_style(&node, "z-index", &record.z_index.to_string());
        let _ = node.set_attribute("aria-hidden", if record.visible { "false" } else { "true" });
        for label in dom::query_all(&node, ".modal-close-label") {
            dom::set_style(&label, "translate", &close_label_translate(record.close_label_offset));
        }
    }
    if let Some(body) = dom::body() {
        dom::toggle_class(&body, "modal-open", any_visible);
    }
}
