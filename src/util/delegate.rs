//! Body-delegated listeners for server-rendered triggers.
//!
//! Fragments are injected after startup, so triggers are matched at event
//! time with `closest` instead of binding each element. Listeners live for
//! the page lifetime and are intentionally leaked.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::dom;

/// Call `handler` with the element matching `selector` that encloses the
/// event target.
pub fn on(event: &str, selector: &'static str, handler: impl Fn(web_sys::Element, web_sys::Event) + 'static) {
    on_any(event, move |ev| {
        let Some(target) = dom::event_target_element(&ev) else {
            return;
        };
        if let Some(matched) = dom::closest(&target, selector) {
            handler(matched, ev);
        }
    });
}

/// Call `handler` for every `event` reaching `<body>`.
pub fn on_any(event: &str, handler: impl Fn(web_sys::Event) + 'static) {
    let Some(body) = dom::body() else {
        leptos::logging::warn!("no <body>; `{event}` listener not installed");
        return;
    };
    let closure = Closure::<dyn Fn(web_sys::Event)>::new(handler);
    let _ = body.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
