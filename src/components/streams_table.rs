//! Streams table rendered as id-keyed rows.
//!
//! Rows are keyed by stream id, so a poll only re-renders the three mutable
//! cells of a known row; the name, key and action menu nodes persist.

use leptos::prelude::*;

use crate::config::EmptyPolicy;
use crate::state::streams::{DELETE_ACTION, STREAM_SETTINGS_MODAL_ID, StreamRow, StreamTable};

#[cfg(test)]
#[path = "streams_table_test.rs"]
mod streams_table_test;

/// Attributes of a row's delete link, read by the confirmation flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteLink {
    pub action: &'static str,
    pub id: String,
    pub form: Option<String>,
}

impl DeleteLink {
    #[must_use]
    pub fn for_row(id: &str, form: Option<&str>) -> Self {
        Self { action: DELETE_ACTION, id: id.to_owned(), form: form.map(str::to_owned) }
    }
}

#[component]
pub fn StreamsTable(
    streams: RwSignal<StreamTable>,
    settings_url: Option<String>,
    form: Option<String>,
    policy: EmptyPolicy,
) -> impl IntoView {
    let placeholder = move || {
        (policy == EmptyPolicy::Placeholder && streams.with(|t| t.rows().is_empty()))
            .then(|| view! { <span>"None"</span> })
    };
    view! {
        <For
            each=move || streams.with(StreamTable::ids)
            key=|id| id.clone()
            children=move |id| {
                view! {
                    <StreamRowView streams=streams id=id settings_url=settings_url.clone() form=form.clone()/>
                }
            }
        />
        {placeholder}
    }
}

#[component]
fn StreamRowView(
    streams: RwSignal<StreamTable>,
    id: String,
    settings_url: Option<String>,
    form: Option<String>,
) -> impl IntoView {
    let (name, api_key, edit_url) = streams.with_untracked(|t| {
        t.row(&id).map_or_else(Default::default, |r| {
            (r.name.clone(), r.api_key.clone(), settings_url.as_deref().map(|base| r.settings_url(base)))
        })
    });
    let cell = |pick: fn(&StreamRow) -> String| {
        let id = id.clone();
        move || streams.with(|t| t.row(&id).map(pick).unwrap_or_default())
    };
    let calls = cell(|r| r.calls.clone());
    let called = cell(|r| r.called.clone());
    let status = cell(|r| r.status.clone());
    let delete = DeleteLink::for_row(&id, form.as_deref());

    view! {
        <div class="d-flex align-items-center stream-row" data-id=id>
            <span class="me-3">{format!("{name}:")}</span>
            <span class="me-3">{calls}</span>
            <span class="me-3">{api_key}</span>
            <span class="me-3">{called}</span>
            <span class="text-average">{status}</span>
            <div class="dropdown ms-auto">
                <a class="link-secondary px-2" role="button" data-bs-toggle="dropdown" aria-expanded="false">
                    "⋯"
                </a>
                <ul class="dropdown-menu dropdown-menu-end">
                    <li>
                        <a
                            class="dropdown-item open-modal"
                            role="button"
                            data-modal-id=STREAM_SETTINGS_MODAL_ID
                            data-url=edit_url
                        >
                            "Edit"
                        </a>
                    </li>
                    <li>
                        <a
                            class="dropdown-item open-modal-confirmation"
                            role="button"
                            data-action=delete.action
                            data-id=delete.id
                            data-title="Delete stream?"
                            data-form=delete.form
                        >
                            "Delete"
                        </a>
                    </li>
                </ul>
            </div>
        </div>
    }
}

/// Mount the table into `host` (`.streams-box`).
///
/// Delete confirmations post through the form named by the host's
/// `data-form`, else through the form enclosing the host.
#[cfg(feature = "csr")]
pub fn mount(dash: &crate::app::Dashboard, host: &web_sys::Element, streams: RwSignal<StreamTable>) {
    use crate::util::dom;
    use crate::util::page_actions::target_form_selector;

    let settings_url = dom::data(host, "url-settings");
    let form = target_form_selector(dom::data(host, "form"), dom::closest(host, "form").map(|f| f.id()));
    if form.is_none() {
        leptos::logging::warn!(".streams-box has no data-form and no enclosing form with an id; deletes cannot post");
    }
    let policy = dash.config.empty_policy;
    super::mount_on(host, dash, move || {
        view! { <StreamsTable streams=streams settings_url=settings_url form=form policy=policy/> }
    });
}
