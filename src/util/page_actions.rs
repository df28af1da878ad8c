//! Page action dispatcher: delegated handlers for server-rendered triggers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Installed once on `<body>` at startup, so triggers inside fragments
//! injected later work without rebinding:
//! - bulk selection (`.check-all`, `.decheck-all`, `.to-check`)
//! - `.action` buttons POSTing JSON to the owning form's `action` URL
//! - modal triggers (`.open-modal`, `.open-modal-confirmation`,
//!   `.load-page-or-modal`), dismissal, and form submission inside modals

#[cfg(test)]
#[path = "page_actions_test.rs"]
mod page_actions_test;

/// Input types that never contribute a serialized field.
const SKIPPED_INPUT_TYPES: [&str; 5] = ["submit", "button", "reset", "file", "image"];

/// Selector of the form an action or confirmation targets.
///
/// An explicit `data-form` selector wins; otherwise the trigger's own form,
/// addressed by id.
#[must_use]
pub fn target_form_selector(data_form: Option<String>, enclosing_form_id: Option<String>) -> Option<String> {
    data_form.or_else(|| enclosing_form_id.filter(|id| !id.is_empty()).map(|id| format!("#{id}")))
}

/// Whether an `<input>` contributes to a serialized form.
#[must_use]
pub fn include_input(input_type: &str, name: &str, checked: bool, disabled: bool) -> bool {
    if disabled || name.is_empty() {
        return false;
    }
    let input_type = input_type.to_ascii_lowercase();
    if SKIPPED_INPUT_TYPES.contains(&input_type.as_str()) {
        return false;
    }
    match input_type.as_str() {
        "checkbox" | "radio" => checked,
        _ => true,
    }
}

#[cfg(feature = "csr")]
pub use browser::install;

#[cfg(feature = "csr")]
mod browser {
    use leptos::logging::warn;
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    use super::{include_input, target_form_selector};
    use crate::app::Dashboard;
    use crate::config::CONFIRMATION_MODAL_ID;
    use crate::net::api;
    use crate::net::types::{ActionRequest, ActionResponse, FormField};
    use crate::state::modal::Confirmation;
    use crate::state::selection::{ActionRoute, SelectionSummary, route_action};
    use crate::util::modal_actions::{self, NOT_UPDATE_CLASS, trigger_parent};
    use crate::util::{delegate, dom};

    /// Install every delegated page handler.
    pub fn install(dash: &Dashboard) {
        delegate::on("change", ".check-all", |el, _| check_all(&el));
        delegate::on("click", ".decheck-all", |el, _| {
            if let Some(form) = dom::closest(&el, "form") {
                set_checked(&form, false);
                recount(&form);
            }
        });
        delegate::on("change", ".to-check", |el, _| {
            if let Some(form) = dom::closest(&el, "form") {
                recount(&form);
            }
        });

        let d = dash.clone();
        delegate::on("click", ".action", move |el, ev| {
            ev.prevent_default();
            dispatch_action(&d, &el);
        });

        let d = dash.clone();
        delegate::on("click", ".open-modal", move |el, ev| {
            ev.prevent_default();
            let (Some(modal_id), Some(url)) = (dom::data(&el, "modal-id"), dom::data(&el, "url")) else {
                warn!("open-modal trigger without data-modal-id/data-url");
                return;
            };
            let parent = trigger_parent(dom::has_class(&el, NOT_UPDATE_CLASS), dom::closest_id(&el, ".modal"));
            modal_actions::open(&d, &modal_id, &url, false, parent);
        });

        let d = dash.clone();
        delegate::on("click", ".open-modal-confirmation", move |el, ev| {
            ev.prevent_default();
            let form = target_form_selector(
                dom::data(&el, "form"),
                dom::closest(&el, "form").map(|f| f.id()),
            );
            let confirmation = Confirmation {
                title: dom::data(&el, "title").unwrap_or_default(),
                action: dom::data(&el, "action").unwrap_or_default(),
                target_id: dom::data(&el, "id").unwrap_or_default(),
                form,
            };
            let close_parent = el.has_attribute("data-pre-need-clean");
            modal_actions::confirm(&d, confirmation, dom::closest_id(&el, ".modal"), close_parent);
        });

        let d = dash.clone();
        delegate::on("click", ".load-page-or-modal", move |el, ev| {
            ev.prevent_default();
            let Some(url) = dom::data(&el, "url") else {
                return;
            };
            match dom::closest_id(&el, ".modal") {
                Some(modal_id) => modal_actions::open(&d, &modal_id, &url, false, None),
                None => modal_actions::load_page(&d, Some(url)),
            }
        });

        let d = dash.clone();
        delegate::on("click", "[data-bs-dismiss=\"modal\"]", move |el, ev| {
            ev.prevent_default();
            if let Some(id) = dom::closest_id(&el, ".modal") {
                modal_actions::hide(&d, &id);
            }
        });

        // Pointer-down on the overlay itself (outside the dialog) closes it.
        let d = dash.clone();
        delegate::on_any("mousedown", move |ev| {
            let Some(target) = dom::event_target_element(&ev) else {
                return;
            };
            if dom::has_class(&target, "modal") && !target.id().is_empty() {
                modal_actions::hide(&d, &target.id());
            }
        });

        let d = dash.clone();
        delegate::on_any("keydown", move |ev| {
            if ev.dyn_ref::<web_sys::KeyboardEvent>().is_some_and(|k| k.key() == "Escape") {
                modal_actions::hide_top(&d);
            }
        });

        let d = dash.clone();
        delegate::on_any("submit", move |ev| submit_in_modal(&d, &ev));
    }

    fn checkbox(el: &web_sys::Element) -> Option<&web_sys::HtmlInputElement> {
        el.dyn_ref::<web_sys::HtmlInputElement>()
    }

    fn set_checked(scope: &web_sys::Element, checked: bool) {
        for el in dom::query_all(scope, ".to-check") {
            if let Some(input) = checkbox(&el) {
                input.set_checked(checked);
            }
        }
    }

    fn check_all(toggle: &web_sys::Element) {
        let checked = checkbox(toggle).is_some_and(web_sys::HtmlInputElement::checked);
        let Some(scope) = dom::closest(toggle, "table").or_else(|| dom::closest(toggle, "form")) else {
            return;
        };
        set_checked(&scope, checked);
        if let Some(form) = dom::closest(toggle, "form") {
            recount(&form);
        }
    }

    /// Recompute the `N / total` summary, the sticky bar, and the check-all box.
    fn recount(form: &web_sys::Element) {
        let boxes = dom::query_all(form, ".to-check");
        let checked = boxes.iter().filter(|el| checkbox(el).is_some_and(web_sys::HtmlInputElement::checked)).count();
        let summary = SelectionSummary::new(checked, boxes.len());

        for bar in dom::query_all(form, ".sticky-bottom.actions") {
            dom::toggle_class(&bar, "active", summary.bar_active());
            if let Some(count) = dom::query(&bar, ".checks-count") {
                count.set_text_content(Some(&summary.label()));
            }
        }
        for toggle in dom::query_all(form, ".check-all") {
            if let Some(input) = checkbox(&toggle) {
                input.set_checked(summary.bar_active());
            }
        }
    }

    /// Serialize named, enabled controls under `scope` as `name`/`value` pairs.
    fn serialize_form(scope: &web_sys::Element) -> Vec<FormField> {
        let mut fields = Vec::new();
        for el in dom::query_all(scope, "input[name], select[name], textarea[name]") {
            if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
                if include_input(&input.type_(), &input.name(), input.checked(), input.disabled()) {
                    fields.push(FormField { name: input.name(), value: input.value() });
                }
            } else if let Some(select) = el.dyn_ref::<web_sys::HtmlSelectElement>() {
                if !select.disabled() {
                    fields.push(FormField { name: select.name(), value: select.value() });
                }
            } else if let Some(area) = el.dyn_ref::<web_sys::HtmlTextAreaElement>() {
                if !area.disabled() {
                    fields.push(FormField { name: area.name(), value: area.value() });
                }
            }
        }
        fields
    }

    fn dispatch_action(dash: &Dashboard, button: &web_sys::Element) {
        let form = dom::data(button, "form")
            .and_then(|selector| dom::query_document(&selector))
            .or_else(|| dom::closest(button, "form"));
        let Some(form) = form else {
            warn!("action button outside any form");
            return;
        };
        let Some(url) = form.get_attribute("action").filter(|u| !u.is_empty()) else {
            warn!("action form has no action url");
            return;
        };
        let info_scope = dom::data(button, "form-info")
            .and_then(|selector| dom::query_document(&selector))
            .unwrap_or_else(|| form.clone());
        let checked = dom::query_all(&form, ".to-check:checked")
            .iter()
            .filter_map(|el| checkbox(el).map(web_sys::HtmlInputElement::value))
            .collect();
        let request = ActionRequest::build(
            &dom::data(button, "action").unwrap_or_default(),
            dom::data(button, "id").as_deref(),
            checked,
            serialize_form(&info_scope),
        );

        let modal_id = dom::closest_id(button, ".modal");
        if let Some(id) = &modal_id {
            dash.modals.update(|s| s.mark_refresh_parent(id));
        }
        let reload_own = button.has_attribute("data-this-need-update");

        let dash = dash.clone();
        leptos::task::spawn_local(async move {
            match api::post_json::<_, ActionResponse>(&url, &request).await {
                Ok(response) => {
                    let route =
                        route_action(&response, reload_own, modal_id.as_deref(), dash.config.action_refresh_delay);
                    follow(&dash, route);
                }
                Err(err) => warn!("action {} failed: {err}", request.action),
            }
        });
    }

    fn follow(dash: &Dashboard, route: ActionRoute) {
        match route {
            ActionRoute::Redirect(url) => dom::navigate(&url),
            ActionRoute::ReloadOwnModal { id } => modal_actions::reload_own(dash, &id),
            ActionRoute::AncestorRefresh { modal_id, delay } => {
                let dash = dash.clone();
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(delay).await;
                    match modal_id {
                        Some(id) => {
                            if id == CONFIRMATION_MODAL_ID {
                                modal_actions::hide(&dash, &id);
                            }
                            modal_actions::refresh_ancestor(&dash, &id);
                        }
                        None => modal_actions::load_page(&dash, None),
                    }
                });
            }
        }
    }

    /// Forms inside a modal POST to their `data-url` instead of navigating;
    /// success marks the modal for ancestor refresh and closes it.
    fn submit_in_modal(dash: &Dashboard, ev: &web_sys::Event) {
        let Some(form) = dom::event_target_element(ev) else {
            return;
        };
        let Some(modal_id) = dom::closest_id(&form, ".modal") else {
            return;
        };
        ev.prevent_default();
        let Some(url) = dom::data(&form, "url") else {
            warn!("form in modal {modal_id} has no data-url");
            return;
        };
        let fields = serialize_form(&form);
        let dash = dash.clone();
        leptos::task::spawn_local(async move {
            match api::post_form(&url, &fields).await {
                Ok(_) => {
                    dash.modals.update(|s| s.mark_refresh_parent(&modal_id));
                    modal_actions::hide(&dash, &modal_id);
                }
                Err(err) => warn!("form submit in modal {modal_id} failed: {err}"),
            }
        });
    }
}
