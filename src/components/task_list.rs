//! Background task list with start/stop controls.
//!
//! The list is polled on the shared interval. A control click shows the
//! loading state, fires the control URL, and re-fetches after the shorter
//! repoll delay instead of waiting for the next tick.

use leptos::prelude::*;

use crate::state::tasks::{AggregateAction, TASK_SETTINGS_MODAL_ID, TaskRow, TaskView};

#[component]
pub fn TaskList(tasks: RwSignal<TaskView>, on_control: Callback<String>) -> impl IntoView {
    move || match tasks.get() {
        TaskView::Loading => view! {
            <div class="d-flex justify-content-center py-2">
                <div class="spinner-border spinner-border-sm" role="status"></div>
            </div>
        }
        .into_any(),
        TaskView::Empty => view! { <span>"None"</span> }.into_any(),
        TaskView::Ready { rows, aggregate } => view! {
            <div>{rows.into_iter().map(|row| task_row(row, on_control)).collect_view()}</div>
            <div class="d-flex gap-2 mt-2">
                {aggregate.into_iter().map(|action| aggregate_button(action, on_control)).collect_view()}
            </div>
        }
        .into_any(),
    }
}

fn task_row(row: TaskRow, on_control: Callback<String>) -> impl IntoView {
    let url = row.control.url().to_owned();
    let class = if row.control.is_stop() { "btn btn-sm btn-outline-danger" } else { "btn btn-sm btn-outline-primary" };
    view! {
        <div class="d-flex align-items-center mb-1">
            <a
                class="me-auto open-modal"
                role="button"
                data-modal-id=TASK_SETTINGS_MODAL_ID
                data-url=row.settings_url
            >
                {row.label}
            </a>
            <a
                class=class
                role="button"
                on:click=move |ev| {
                    ev.prevent_default();
                    on_control.run(url.clone());
                }
            >
                {row.control.label()}
            </a>
        </div>
    }
}

fn aggregate_button(action: AggregateAction, on_control: Callback<String>) -> impl IntoView {
    let class = if action.danger { "btn btn-sm btn-danger" } else { "btn btn-sm btn-primary" };
    let url = action.url;
    view! {
        <a
            class=class
            role="button"
            on:click=move |ev| {
                ev.prevent_default();
                on_control.run(url.clone());
            }
        >
            {action.label}
        </a>
    }
}

/// Mount the list into `.tasks-box` and fetch it.
#[cfg(feature = "csr")]
pub fn mount(dash: &crate::app::Dashboard) {
    use leptos::logging::warn;
    use leptos::task::spawn_local;

    use crate::net::api;
    use crate::state::polling::{PollHandle, spawn_delayed, spawn_poll};
    use crate::state::tasks::TaskUrls;
    use crate::util::dom;

    let Some(host) = dom::query_document(".tasks-box") else {
        return;
    };
    let (Some(list), Some(action), Some(settings)) =
        (dom::data(&host, "url"), dom::data(&host, "url-action"), dom::data(&host, "url-settings"))
    else {
        warn!(".tasks-box is missing one of data-url, data-url-action, data-url-settings");
        return;
    };
    let urls = TaskUrls { list, action, settings };
    let tasks = RwSignal::new(TaskView::Loading);
    let settled = StoredValue::new(TaskView::Empty);
    let handle = PollHandle::new();
    let repoll = PollHandle::new();
    let delay = dash.config.task_repoll_delay;

    let polled = urls.clone();
    spawn_poll(&handle, dash.config.poll_interval, move || refresh(tasks, settled, polled.clone()));

    let on_control = Callback::new(move |url: String| {
        tasks.set(TaskView::Loading);
        let urls = urls.clone();
        let repoll = repoll.clone();
        spawn_local(async move {
            if let Err(err) = api::trigger(&url).await {
                warn!("task control {url} failed: {err}");
            }
            spawn_delayed(&repoll, delay, move || refresh(tasks, settled, urls));
        });
    });

    super::mount_on(&host, dash, move || {
        on_cleanup(move || handle.stop());
        view! { <TaskList tasks=tasks on_control=on_control/> }
    });
}

#[cfg(feature = "csr")]
async fn refresh(
    tasks: RwSignal<TaskView>,
    settled: StoredValue<TaskView>,
    urls: crate::state::tasks::TaskUrls,
) {
    use crate::net::types::TaskItem;

    match crate::net::api::fetch_json::<Vec<TaskItem>>(&urls.list).await {
        Ok(items) => {
            let next = TaskView::from_tasks(&items, &urls);
            settled.set_value(next.clone());
            tasks.set(next);
        }
        Err(err) => {
            leptos::logging::warn!("task list {} failed: {err}", urls.list);
            tasks.set(settled.get_value());
        }
    }
}
