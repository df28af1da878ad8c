//! Smart select: searchable popup replacing native `<select>` controls.
//!
//! `upgrade` hides each eligible native control, wraps it in
//! `.smart-select-box`, and mounts a head plus an option list next to it.
//! All decisions live in [`SmartSelect`]; this module only renders its view
//! and wires browser events into it.

#[cfg(test)]
#[path = "smart_select_test.rs"]
mod smart_select_test;

/// Class that hides the wrapped native control; also marks it as upgraded.
pub const HIDDEN_CLASS: &str = "visually-hidden";
/// Class of the element wrapping the native control and the rendered widget.
pub const WRAPPER_CLASS: &str = "smart-select-box";
/// Heads of widgets whose list is currently open (see [`head_class`]).
pub const OPEN_HEAD_SELECTOR: &str = ".smart-select.on";
const WRAPPER_SELECTOR: &str = ".smart-select-box";
/// Distance from the list bottom to the head when the list opens upward.
pub const DROP_UP_OFFSET_PX: u32 = 45;

/// Classes of the rendered head; `native` is the wrapped control's class.
#[must_use]
pub fn head_class(native: &str, open: bool) -> String {
    let mut class = String::from("smart-select");
    if !native.trim().is_empty() {
        class.push(' ');
        class.push_str(native.trim());
    }
    if open {
        class.push_str(" on");
    }
    class
}

#[must_use]
pub fn item_class(selected: bool, hidden: bool) -> String {
    let mut class = String::from("smart-select__item");
    if selected {
        class.push_str(" selected");
    }
    if hidden {
        class.push_str(" d-none");
    }
    class
}

#[must_use]
pub fn list_style(open: bool, drop_up: bool) -> String {
    let mut style = String::from(if open { "display: block;" } else { "display: none;" });
    if drop_up {
        style.push_str(&format!(" bottom: {DROP_UP_OFFSET_PX}px;"));
    }
    style
}

/// Lists open upward once the head sits below the top quarter of the viewport.
#[must_use]
pub fn opens_upward(head_top: f64, viewport_height: f64) -> bool {
    head_top > viewport_height / 4.0
}

#[cfg(feature = "csr")]
pub use browser::{NativeSelect, install, upgrade};

#[cfg(feature = "csr")]
mod browser {
    use std::rc::Rc;

    use leptos::logging::warn;
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use super::{HIDDEN_CLASS, head_class, item_class, list_style, opens_upward};
    use crate::app::Dashboard;
    use crate::net::api;
    use crate::net::types::SelectOptionsResponse;
    use crate::state::select::{
        ChooseOutcome, ListContent, NativeOption, OpenPlan, SelectControl, SmartSelect, head_label,
    };
    use super::{OPEN_HEAD_SELECTOR, WRAPPER_CLASS, WRAPPER_SELECTOR};
    use crate::util::{delegate, dom, mounts};

    /// A live `<select>` element as the widget's source of truth.
    pub struct NativeSelect(web_sys::HtmlSelectElement);

    impl SelectControl for NativeSelect {
        fn value(&self) -> String {
            self.0.value()
        }

        fn set_value(&self, value: &str) {
            self.0.set_value(value);
        }

        fn notify_change(&self) {
            dom::dispatch_change(&self.0);
        }

        fn options(&self) -> Vec<NativeOption> {
            dom::query_all(&self.0, "option")
                .into_iter()
                .filter_map(|el| el.dyn_into::<web_sys::HtmlOptionElement>().ok())
                .map(|option| NativeOption {
                    value: option.value(),
                    label: option.text(),
                    subtext: dom::data(&option, "subtext"),
                    info: dom::data(&option, "info").and_then(|raw| serde_json::from_str(&raw).ok()),
                    selected: option.selected(),
                })
                .collect()
        }

        fn replace_options(&self, options: &[NativeOption]) {
            let Some(document) = dom::document() else {
                return;
            };
            self.0.set_inner_html("");
            for option in options {
                let Some(el) = document
                    .create_element("option")
                    .ok()
                    .and_then(|el| el.dyn_into::<web_sys::HtmlOptionElement>().ok())
                else {
                    continue;
                };
                el.set_value(&option.value);
                el.set_text(&option.label);
                if let Some(subtext) = &option.subtext {
                    let _ = el.set_attribute("data-subtext", subtext);
                }
                if let Some(info) = &option.info {
                    let _ = el.set_attribute("data-info", &info.to_string());
                }
                let _ = self.0.append_child(&el);
                el.set_selected(option.selected);
            }
        }

        fn placeholder(&self) -> Option<String> {
            dom::data(&self.0, "placeholder")
        }

        fn options_url(&self) -> Option<String> {
            dom::data(&self.0, "url")
        }

        fn action_url(&self) -> Option<String> {
            dom::data(&self.0, "action-url")
        }
    }

    /// Listener on the native control, removed when its fragment is released.
    struct FocusRedirect {
        select: web_sys::HtmlSelectElement,
        on_focus: Closure<dyn Fn()>,
    }

    impl Drop for FocusRedirect {
        fn drop(&mut self) {
            let _ = self.select.remove_event_listener_with_callback("focus", self.on_focus.as_ref().unchecked_ref());
        }
    }

    /// Install the one outside-click listener shared by every smart select.
    ///
    /// A press outside a widget's wrapper closes it through its own head, so
    /// the widget's state and label stay the single source of truth.
    pub fn install() {
        delegate::on_any("mousedown", |ev| {
            let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            for head in dom::query_document_all(OPEN_HEAD_SELECTOR) {
                let outside = dom::closest(&head, WRAPPER_SELECTOR)
                    .is_some_and(|wrapper| !press_is_inside(&wrapper, target.as_ref()));
                match head.dyn_ref::<web_sys::HtmlElement>() {
                    Some(head) if outside => head.click(),
                    _ => {}
                }
            }
        });
    }

    fn press_is_inside(wrapper: &web_sys::Element, target: Option<&web_sys::Node>) -> bool {
        target.is_some_and(|node| wrapper.contains(Some(node)))
    }

    /// Upgrade every enabled, not yet upgraded `<select>` inside `scope`.
    pub fn upgrade(dash: &Dashboard, scope: &web_sys::Element) {
        for el in dom::query_all(scope, "select") {
            let Ok(select) = el.dyn_into::<web_sys::HtmlSelectElement>() else {
                continue;
            };
            if select.disabled() || dom::has_class(&select, HIDDEN_CLASS) {
                continue;
            }
            wrap(dash, select);
        }
    }

    fn wrap(dash: &Dashboard, select: web_sys::HtmlSelectElement) {
        let (Some(document), Some(parent)) = (dom::document(), select.parent_node()) else {
            return;
        };
        let Ok(wrapper) = document.create_element("div") else {
            return;
        };
        wrapper.set_class_name(WRAPPER_CLASS);
        if parent.insert_before(&wrapper, Some(&select)).is_err() || wrapper.append_child(&select).is_err() {
            return;
        }
        let native_class = select.class_name();
        dom::toggle_class(&select, HIDDEN_CLASS, true);

        let threshold = dash.config.filter_threshold;
        let control = Rc::new(NativeSelect(select));
        let host = wrapper.clone();
        super::super::mount_on(&wrapper, dash, move || {
            view! { <SmartSelectView control=control wrapper=host native_class=native_class threshold=threshold/> }
        });
    }

    fn focus_filter(filter_ref: NodeRef<leptos::html::Input>) {
        request_animation_frame(move || {
            if let Some(input) = filter_ref.get_untracked() {
                let _ = input.focus();
            }
        });
    }

    #[component]
    fn SmartSelectView(
        control: Rc<NativeSelect>,
        wrapper: web_sys::Element,
        native_class: String,
        threshold: usize,
    ) -> impl IntoView {
        let state = RwSignal::new(SmartSelect::new(threshold));
        let label = RwSignal::new(head_label(&*control));
        let drop_up = RwSignal::new(false);
        let show_filter = RwSignal::new(false);
        let head_ref = NodeRef::<leptos::html::Div>::new();
        let filter_ref = NodeRef::<leptos::html::Input>::new();

        let toggle: Rc<dyn Fn()> = {
            let control = Rc::clone(&control);
            Rc::new(move || {
                let Some(plan) = state.try_update(|s| s.toggle(&*control)).flatten() else {
                    return;
                };
                if let Some(head) = head_ref.get_untracked() {
                    drop_up.set(opens_upward(head.get_bounding_client_rect().top(), dom::viewport_height()));
                }
                let enabled = state.with_untracked(|s| s.filter_enabled(&*control));
                show_filter.set(enabled);
                match plan {
                    OpenPlan::Ready => {
                        if enabled {
                            focus_filter(filter_ref);
                        }
                    }
                    OpenPlan::Fetch(url) => {
                        let control = Rc::clone(&control);
                        leptos::task::spawn_local(async move {
                            match api::fetch_json::<SelectOptionsResponse>(&url).await {
                                Ok(response) => {
                                    state.update(|s| s.apply_remote(&*control, response));
                                    label.set(head_label(&*control));
                                    let enabled = state.with_untracked(|s| s.filter_enabled(&*control));
                                    show_filter.set(enabled);
                                    if enabled {
                                        focus_filter(filter_ref);
                                    }
                                }
                                Err(err) => warn!("select options from {url} failed: {err}"),
                            }
                        });
                    }
                }
            })
        };

        // Focus on the hidden native control is redirected into a head click.
        {
            let toggle = Rc::clone(&toggle);
            let select = control.0.clone();
            let on_focus = Closure::<dyn Fn()>::new(move || {
                let _ = select.blur();
                toggle();
            });
            let _ = control.0.add_event_listener_with_callback("focus", on_focus.as_ref().unchecked_ref());
            mounts::register(&wrapper, Box::new(FocusRedirect { select: control.0.clone(), on_focus }));
        }

        let on_choose = {
            let control = Rc::clone(&control);
            move |ev: leptos::ev::MouseEvent| {
                let Some(item) =
                    dom::event_target_element(&ev).and_then(|t| dom::closest(&t, ".smart-select__item"))
                else {
                    return;
                };
                // Message items carry no value and stay inert.
                let Some(value) = item.get_attribute("data-value") else {
                    return;
                };
                let Some(outcome) = state.try_update(|s| s.choose(&*control, &value)).flatten() else {
                    return;
                };
                label.set(head_label(&*control));
                if let ChooseOutcome::Navigate(url) = outcome {
                    leptos::task::spawn_local(async move {
                        match api::trigger(&url).await {
                            Ok(()) => dom::reload(),
                            Err(err) => warn!("select action {url} failed: {err}"),
                        }
                    });
                }
            }
        };

        let items = move || {
            state.with(|s| match s.content() {
                None => ().into_any(),
                Some(ListContent::Message(message)) => {
                    view! { <div class="smart-select__item disabled">{message.clone()}</div> }.into_any()
                }
                Some(ListContent::Items(items)) => items
                    .iter()
                    .map(|item| {
                        view! {
                            <div class=item_class(item.selected, !s.is_visible(item)) data-value=item.value.clone()>
                                <span class="text">{item.label.clone()}</span>
                                {item.subtext.clone().map(|subtext| view! { <span class="subtext">{subtext}</span> })}
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any(),
            })
        };

        view! {
            <div
                node_ref=head_ref
                class=move || head_class(&native_class, state.with(SmartSelect::is_open))
                on:click=move |_| toggle()
            >
                {move || label.get()}
            </div>
            <div
                class="smart-select__list"
                style=move || list_style(state.with(SmartSelect::is_open), drop_up.get())
                on:click=on_choose
            >
                <input
                    node_ref=filter_ref
                    type="text"
                    placeholder="Search"
                    class=move || {
                        if show_filter.get() {
                            "form-control form-control-sm smart-select__filter"
                        } else {
                            "form-control form-control-sm smart-select__filter d-none"
                        }
                    }
                    prop:value=move || state.with(|s| s.filter().to_owned())
                    on:input=move |ev| state.update(|s| s.set_filter(&event_target_value(&ev)))
                />
                {items}
            </div>
        }
    }
}
