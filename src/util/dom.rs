//! Small DOM lookups used by the glue modules.

use wasm_bindgen::JsCast;

pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn body() -> Option<web_sys::HtmlElement> {
    document().and_then(|d| d.body())
}

pub fn by_id(id: &str) -> Option<web_sys::Element> {
    document().and_then(|d| d.get_element_by_id(id))
}

/// All descendants of `scope` matching `selector`.
pub fn query_all(scope: &web_sys::Element, selector: &str) -> Vec<web_sys::Element> {
    let Ok(list) = scope.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

pub fn query(scope: &web_sys::Element, selector: &str) -> Option<web_sys::Element> {
    scope.query_selector(selector).ok().flatten()
}

/// First element in the document matching `selector`.
pub fn query_document(selector: &str) -> Option<web_sys::Element> {
    document().and_then(|d| d.query_selector(selector).ok().flatten())
}

pub fn query_document_all(selector: &str) -> Vec<web_sys::Element> {
    body().map(|b| query_all(&b, selector)).unwrap_or_default()
}

pub fn closest(el: &web_sys::Element, selector: &str) -> Option<web_sys::Element> {
    el.closest(selector).ok().flatten()
}

/// Id of the nearest ancestor (or self) matching `selector`, when non-empty.
pub fn closest_id(el: &web_sys::Element, selector: &str) -> Option<String> {
    closest(el, selector).map(|e| e.id()).filter(|id| !id.is_empty())
}

/// Non-empty `data-{name}` attribute.
pub fn data(el: &web_sys::Element, name: &str) -> Option<String> {
    el.get_attribute(&format!("data-{name}")).filter(|v| !v.is_empty())
}

pub fn has_class(el: &web_sys::Element, class: &str) -> bool {
    el.class_list().contains(class)
}

pub fn toggle_class(el: &web_sys::Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

pub fn set_style(el: &web_sys::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub fn focus(el: &web_sys::Element) {
    if let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() {
        let _ = html.focus();
    }
}

/// Focus the first `.focus` element in `scope`, else the first `.search-input`.
pub fn focus_first(scope: &web_sys::Element) {
    if let Some(el) = query(scope, ".focus").or_else(|| query(scope, ".search-input")) {
        focus(&el);
    }
}

pub fn event_target_element(ev: &web_sys::Event) -> Option<web_sys::Element> {
    ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok())
}

/// Fire a bubbling `change` event so other listeners observe a programmatic write.
pub fn dispatch_change(el: &web_sys::Element) {
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    if let Ok(event) = web_sys::Event::new_with_event_init_dict("change", &init) {
        let _ = el.dispatch_event(&event);
    }
}

pub fn current_href() -> Option<String> {
    web_sys::window().and_then(|w| w.location().href().ok())
}

pub fn navigate(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(url);
    }
}

pub fn reload() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}
