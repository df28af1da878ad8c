//! Hooks re-run on every freshly injected fragment.
//!
//! Anything the server renders inside a fragment (native selects, sticky
//! action buttons) must be enhanced again after each load, scoped to the
//! loaded node so already-enhanced regions are left alone.

#[cfg(test)]
#[path = "post_load_test.rs"]
mod post_load_test;

/// Container whose children become the sticky bar's buttons.
pub const STICKY_SOURCE_CLASS: &str = "sticky-bottom-buttons";

/// Markup of the sticky bulk-action bar; buttons are moved into `.buttons`.
#[must_use]
pub fn sticky_bar_markup(caption: &str) -> String {
    format!(
        concat!(
            r#"<div class="col-12"><div class="bg-white h-100 d-flex gap-2 align-items-center">"#,
            r#"<span class="ms-5">{caption}</span><span class="checks-count"></span>"#,
            r#"<a class="ms-3 decheck-all" role="button" aria-label="Clear selection">&times;</a>"#,
            r#"<div class="vr my-3"></div><div class="buttons"></div>"#,
            r#"</div></div>"#
        ),
        caption = caption
    )
}

/// Enhance everything inside `scope`.
#[cfg(feature = "csr")]
pub fn run(dash: &crate::app::Dashboard, scope: &web_sys::Element) {
    crate::components::smart_select::upgrade(dash, scope);
    build_sticky_bars(scope);
}

/// Replace each `.sticky-bottom-buttons` container with the sticky bar,
/// adopting its buttons.
#[cfg(feature = "csr")]
fn build_sticky_bars(scope: &web_sys::Element) {
    use super::dom;

    let Some(document) = dom::document() else {
        return;
    };
    for source in dom::query_all(scope, &format!(".{STICKY_SOURCE_CLASS}")) {
        let Some(parent) = source.parent_element() else {
            continue;
        };
        let Ok(bar) = document.create_element("div") else {
            continue;
        };
        bar.set_class_name("sticky-bottom actions");
        bar.set_inner_html(&sticky_bar_markup("Selected:"));
        if let Some(buttons) = dom::query(&bar, ".buttons") {
            while let Some(child) = source.first_child() {
                let _ = buttons.append_child(&child);
            }
        }
        let _ = parent.append_child(&bar);
        source.remove();
    }
}
