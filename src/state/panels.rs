//! Info and events panels: full-replace views over snapshot slices.

#[cfg(test)]
#[path = "panels_test.rs"]
mod panels_test;

use crate::config::EmptyPolicy;
use crate::net::types::PanelEntry;
use crate::util::url::{with_query, with_segment};

/// Modal id event rows open into.
pub const EVENT_DETAIL_MODAL_ID: &str = "EventDetailModal";

/// A rendered panel row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelRow {
    Header(String),
    Pair {
        name: String,
        value: String,
        /// Detail URL; present only for clickable event rows.
        link: Option<String>,
    },
}

/// How a panel presents itself after a tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelDisplay {
    Rows(Vec<PanelRow>),
    Placeholder,
    Hidden,
}

impl PanelDisplay {
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }
}

/// Apply the empty-panel policy shared by all snapshot panels.
#[must_use]
pub fn display(rows: Vec<PanelRow>, policy: EmptyPolicy) -> PanelDisplay {
    if !rows.is_empty() {
        return PanelDisplay::Rows(rows);
    }
    match policy {
        EmptyPolicy::Hide => PanelDisplay::Hidden,
        EmptyPolicy::Placeholder => PanelDisplay::Placeholder,
    }
}

/// Rows for the info panel; nothing is clickable.
#[must_use]
pub fn info_rows(entries: &[PanelEntry]) -> Vec<PanelRow> {
    entries
        .iter()
        .map(|entry| match entry {
            PanelEntry::Group { group_name } => PanelRow::Header(group_name.clone()),
            PanelEntry::Item { name, value, .. } => {
                PanelRow::Pair { name: name.clone(), value: value.clone(), link: None }
            }
        })
        .collect()
}

/// Rows for the events panel; leaves with a key link to a detail modal.
///
/// With `group_segments`, the lower-cased name of the enclosing group header
/// becomes a path segment of the detail URL.
#[must_use]
pub fn event_rows(entries: &[PanelEntry], base_url: Option<&str>, group_segments: bool) -> Vec<PanelRow> {
    let mut group: Option<&str> = None;
    entries
        .iter()
        .map(|entry| match entry {
            PanelEntry::Group { group_name } => {
                group = Some(group_name.as_str());
                PanelRow::Header(group_name.clone())
            }
            PanelEntry::Item { name, value, key } => {
                let link = match (base_url, key) {
                    (Some(base), Some(key)) => {
                        let group = if group_segments { group } else { None };
                        Some(event_detail_url(base, group, key))
                    }
                    _ => None,
                };
                PanelRow::Pair { name: name.clone(), value: value.clone(), link }
            }
        })
        .collect()
}

/// Detail URL for one event.
#[must_use]
pub fn event_detail_url(base: &str, group: Option<&str>, key: &str) -> String {
    let base = match group {
        Some(group) => with_segment(base, &group.to_lowercase()),
        None => base.to_owned(),
    };
    with_query(&base, "event", key)
}
