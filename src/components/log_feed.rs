//! Live log feed.
//!
//! Rows are keyed by timestamp and never re-fetched; the category filter only
//! flips a visibility class on rows already rendered.

#[cfg(test)]
#[path = "log_feed_test.rs"]
mod log_feed_test;

use leptos::prelude::*;

use crate::state::logs::{LogFeed, display_time};

/// Class list of one log row.
#[must_use]
pub fn entry_class(category: u8, visible: bool) -> String {
    let mut class = format!("log-item log-category-{category}");
    if !visible {
        class.push_str(" visually-hidden");
    }
    class
}

/// Container of the category radio group.
pub const CATEGORY_GROUP_SELECTOR: &str = ".log-category";
/// The chosen radio inside [`CATEGORY_GROUP_SELECTOR`].
pub const CHECKED_CATEGORY_SELECTOR: &str = "input:checked";

/// Minimum category from a filter input value; unknown values show all.
#[must_use]
pub fn parse_category(value: Option<&str>) -> u8 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

/// Threshold after a change on the radio group.
///
/// `checked` is the value of the group's checked radio. A change that leaves
/// no radio checked keeps `current`.
#[must_use]
pub fn category_choice(checked: Option<&str>, current: u8) -> u8 {
    match checked {
        Some(value) => parse_category(Some(value)),
        None => current,
    }
}

#[component]
pub fn LogList(feed: RwSignal<LogFeed>) -> impl IntoView {
    view! {
        <For
            each=move || feed.with(|f| f.entries().to_vec())
            key=|entry| entry.timestamp.to_bits()
            children=move |entry| {
                let category = entry.category;
                let time = display_time(&entry);
                let text = entry.text.clone();
                let class = move || entry_class(category, feed.with(|f| f.is_visible(&entry)));
                view! {
                    <div class=class>
                        <span class="text-average me-2">{time}</span>
                        <span>{text}</span>
                    </div>
                }
            }
        />
    }
}

/// Mount the feed into `.logs-box`, wire the category filter and start
/// polling.
#[cfg(feature = "csr")]
pub fn mount(dash: &crate::app::Dashboard) {
    use leptos::logging::warn;
    use wasm_bindgen::JsCast;

    use crate::net::api;
    use crate::net::types::LogItem;
    use crate::state::logs::CATEGORY_LABELS;
    use crate::state::polling::{PollHandle, spawn_poll};
    use crate::util::{delegate, dom};

    let Some(host) = dom::query_document(".logs-box") else {
        return;
    };
    let Some(url) = dom::data(&host, "url") else {
        warn!(".logs-box has no data-url");
        return;
    };

    let checked_value = |group: &web_sys::Element| {
        dom::query(group, CHECKED_CATEGORY_SELECTOR)
            .and_then(|el| el.dyn_ref::<web_sys::HtmlInputElement>().map(web_sys::HtmlInputElement::value))
    };
    let feed = RwSignal::new(LogFeed::new());
    let initial = dom::query_document(CATEGORY_GROUP_SELECTOR).and_then(|group| checked_value(&group));
    feed.update(|f| f.set_min_category(parse_category(initial.as_deref())));

    delegate::on("change", CATEGORY_GROUP_SELECTOR, move |group, _| {
        let checked = checked_value(&group);
        feed.update(|f| {
            let category = category_choice(checked.as_deref(), f.min_category());
            f.set_min_category(category);
        });
    });

    Effect::new(move || {
        feed.with(|f| {
            for category in (0u8..).take(CATEGORY_LABELS.len()) {
                if let Some(counter) = dom::query_document(&format!(".log-category-{category}-count")) {
                    counter.set_text_content(Some(&f.count(category).to_string()));
                }
            }
        });
    });

    let handle = PollHandle::new();
    spawn_poll(&handle, dash.config.poll_interval, move || {
        let request = feed.with_untracked(|f| f.request_url(&url));
        async move {
            match api::fetch_json::<Vec<LogItem>>(&request).await {
                Ok(items) if !items.is_empty() => feed.update(|f| {
                    f.ingest(&items);
                }),
                Ok(_) => {}
                Err(err) => warn!("log poll {request} failed: {err}"),
            }
        }
    });

    super::mount_on(&host, dash, move || {
        on_cleanup(move || handle.stop());
        view! { <LogList feed=feed/> }
    });
}
