//! Task list: full-replace rows with start/stop affordances.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use crate::net::types::TaskItem;
use crate::util::url::with_query;

/// Modal task settings links open.
pub const TASK_SETTINGS_MODAL_ID: &str = "TaskSettingsModal";

/// Endpoints declared by the task list host.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskUrls {
    /// `data-url`: list endpoint.
    pub list: String,
    /// `data-url-action`: start/stop endpoint.
    pub action: String,
    /// `data-url-settings`: settings fragment.
    pub settings: String,
}

/// The start-or-stop affordance of one row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskControl {
    Start { url: String },
    Stop { url: String },
}

impl TaskControl {
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Start { url } | Self::Stop { url } => url,
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Start { .. } => "Start",
            Self::Stop { .. } => "Stop",
        }
    }

    #[must_use]
    pub fn is_stop(&self) -> bool {
        matches!(self, Self::Stop { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskRow {
    pub label: String,
    pub settings_url: String,
    pub control: TaskControl,
}

/// Pool-wide action appended below a non-empty list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AggregateAction {
    pub label: &'static str,
    pub url: String,
    pub danger: bool,
}

/// What the task region shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TaskView {
    /// A fetch or action is in flight.
    #[default]
    Loading,
    /// The server reported no tasks.
    Empty,
    Ready {
        rows: Vec<TaskRow>,
        aggregate: Vec<AggregateAction>,
    },
}

impl TaskView {
    /// Build the view for one list response.
    #[must_use]
    pub fn from_tasks(tasks: &[TaskItem], urls: &TaskUrls) -> Self {
        if tasks.is_empty() {
            return Self::Empty;
        }
        let rows = tasks
            .iter()
            .map(|task| TaskRow {
                label: task.label().to_owned(),
                settings_url: with_query(&urls.settings, "task_name", &task.name),
                control: task_control(task, &urls.action),
            })
            .collect();
        let aggregate = vec![
            AggregateAction {
                label: "Start all recurring",
                url: with_query(&urls.action, "action", "start"),
                danger: false,
            },
            AggregateAction { label: "Stop all", url: with_query(&urls.action, "action", "stop"), danger: true },
        ];
        Self::Ready { rows, aggregate }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

fn task_control(task: &TaskItem, action_url: &str) -> TaskControl {
    match &task.id {
        Some(id) => TaskControl::Stop { url: with_query(&with_query(action_url, "action", "stop"), "task_id", id) },
        None => TaskControl::Start {
            url: with_query(&with_query(action_url, "action", "start"), "task_name", &task.name),
        },
    }
}
