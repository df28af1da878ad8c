//! Info and events panels, fed by the snapshot poller.
//!
//! One endpoint (`.info-url[data-url]`) returns the info, events and streams
//! slices together. Each tick replaces both panels wholesale and reconciles
//! the streams table incrementally.

use leptos::prelude::*;

use crate::state::panels::{EVENT_DETAIL_MODAL_ID, PanelDisplay, PanelRow};

#[component]
pub fn PanelBody(#[prop(into)] display: Signal<PanelDisplay>) -> impl IntoView {
    move || match display.get() {
        PanelDisplay::Hidden => ().into_any(),
        PanelDisplay::Placeholder => view! { <span>"None"</span> }.into_any(),
        PanelDisplay::Rows(rows) => rows.into_iter().map(panel_row).collect_view().into_any(),
    }
}

fn panel_row(row: PanelRow) -> AnyView {
    match row {
        PanelRow::Header(label) => view! {
            <div>
                <span class="me-3 text-average">{label}</span>
            </div>
        }
        .into_any(),
        PanelRow::Pair { name, value, link: None } => view! {
            <div>
                <span class="me-3">{name}</span>
                <span class="text-average">{value}</span>
            </div>
        }
        .into_any(),
        // Opened by the delegated `.open-modal` handler.
        PanelRow::Pair { name, value, link: Some(url) } => view! {
            <div class="open-modal" role="button" data-modal-id=EVENT_DETAIL_MODAL_ID data-url=url>
                <span class="me-3">{name}</span>
                <span class="text-average">{value}</span>
            </div>
        }
        .into_any(),
    }
}

/// Mount the info, events and streams regions and start the snapshot poller.
#[cfg(feature = "csr")]
pub fn mount(dash: &crate::app::Dashboard) {
    use leptos::logging::warn;

    use crate::net::api;
    use crate::net::types::InfoSnapshot;
    use crate::state::panels::{display, event_rows, info_rows};
    use crate::state::polling::{PollHandle, spawn_poll};
    use crate::state::streams::StreamTable;
    use crate::util::dom;

    let Some(url) = dom::query_document(".info-url").and_then(|el| dom::data(&el, "url")) else {
        return;
    };
    let policy = dash.config.empty_policy;
    let snapshot = RwSignal::new(None::<InfoSnapshot>);
    let streams = RwSignal::new(StreamTable::new());

    if let Some(host) = dom::query_document(".info-box") {
        let panel = Signal::derive(move || {
            snapshot.with(|s| s.as_ref().map_or(PanelDisplay::Rows(Vec::new()), |s| display(info_rows(&s.info), policy)))
        });
        bind_region(&host, move || panel.with(PanelDisplay::is_hidden));
        super::mount_on(&host, dash, move || view! { <PanelBody display=panel/> });
    }

    if let Some(host) = dom::query_document(".events-box") {
        let base = dom::data(&host, "url");
        let grouped = host.has_attribute("data-group-segments");
        let panel = Signal::derive(move || {
            snapshot.with(|s| {
                s.as_ref().map_or(PanelDisplay::Rows(Vec::new()), |s| {
                    display(event_rows(&s.events, base.as_deref(), grouped), policy)
                })
            })
        });
        bind_region(&host, move || panel.with(PanelDisplay::is_hidden));
        super::mount_on(&host, dash, move || view! { <PanelBody display=panel/> });
    }

    if let Some(host) = dom::query_document(".streams-box") {
        bind_region(&host, move || streams.with(|t| t.region_hidden(policy)));
        super::streams_table::mount(dash, &host, streams);
    }

    let handle = PollHandle::new();
    spawn_poll(&handle, dash.config.poll_interval, move || {
        let url = url.clone();
        async move {
            match api::fetch_json::<InfoSnapshot>(&url).await {
                Ok(next) => {
                    streams.update(|t| {
                        t.reconcile(&next.streams);
                    });
                    snapshot.set(Some(next));
                }
                Err(err) => warn!("info snapshot {url} failed: {err}"),
            }
        }
    });
}

/// Hide the host's wrapping region whenever `hidden` reports true.
#[cfg(feature = "csr")]
pub(crate) fn bind_region(host: &web_sys::Element, hidden: impl Fn() -> bool + 'static) {
    let Some(region) = host.parent_element() else {
        return;
    };
    Effect::new(move || {
        crate::util::dom::toggle_class(&region, "visually-hidden", hidden());
    });
}
