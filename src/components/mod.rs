//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are mounted onto host elements the server already rendered
//! (`.info-box`, `.tasks-box`, `#Modals`, ...). Each mount provides the shared
//! [`Dashboard`](crate::app::Dashboard) as context.

pub mod info_panel;
pub mod log_feed;
pub mod modal_host;
pub mod smart_select;
pub mod streams_table;
pub mod task_list;

/// Mount `f` as the last child of `host`, with the dashboard in context.
///
/// The mount lives until an enclosing fragment is replaced (see
/// [`crate::util::mounts`]).
#[cfg(feature = "csr")]
pub(crate) fn mount_on<F, N>(host: &web_sys::Element, dash: &crate::app::Dashboard, f: F)
where
    F: FnOnce() -> N + 'static,
    N: leptos::prelude::IntoView,
    <N as leptos::prelude::Render>::State: 'static,
{
    use leptos::prelude::provide_context;
    use wasm_bindgen::JsCast;

    let Some(target) = host.dyn_ref::<web_sys::HtmlElement>().cloned() else {
        return;
    };
    let dash = dash.clone();
    let handle = leptos::mount::mount_to(target, move || {
        provide_context(dash);
        f()
    });
    crate::util::mounts::register(host, Box::new(handle));
}
