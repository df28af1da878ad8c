//! Streams table: id-keyed incremental reconciliation.
//!
//! Rows are identified by the server-assigned stream id. A poll updates the
//! three mutable cells of known rows in place and appends unseen ids; nothing
//! a poll returns (or omits) ever removes a row.

#[cfg(test)]
#[path = "streams_test.rs"]
mod streams_test;

use std::collections::HashMap;

use crate::config::EmptyPolicy;
use crate::net::types::StreamItem;
use crate::util::url::with_query;

/// Modal the per-row edit action opens.
pub const STREAM_SETTINGS_MODAL_ID: &str = "StreamSettingsModal";
/// Action name bound into the row delete confirmation.
pub const DELETE_ACTION: &str = "delete";

/// One rendered stream row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StreamRow {
    pub id: String,
    pub name: String,
    pub api_key: String,
    pub calls: String,
    pub called: String,
    pub status: String,
}

impl StreamRow {
    fn from_item(item: &StreamItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            api_key: item.api_key.clone(),
            calls: item.calls.clone(),
            called: item.called.clone(),
            status: item.status.clone(),
        }
    }

    /// Copy the mutable cells; returns whether anything changed.
    fn refresh_from(&mut self, item: &StreamItem) -> bool {
        let changed = self.calls != item.calls || self.called != item.called || self.status != item.status;
        if changed {
            self.calls.clone_from(&item.calls);
            self.called.clone_from(&item.called);
            self.status.clone_from(&item.status);
        }
        changed
    }

    /// Settings modal URL scoped to this row.
    #[must_use]
    pub fn settings_url(&self, base: &str) -> String {
        with_query(base, "stream_id", &self.id)
    }
}

/// What a reconcile pass did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Ids whose mutable cells changed.
    pub updated: Vec<String>,
    /// Ids appended as new rows.
    pub appended: Vec<String>,
}

/// Rows in first-seen order with an id index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StreamTable {
    rows: Vec<StreamRow>,
    index: HashMap<String, usize>,
    last_response_empty: bool,
}

impl StreamTable {
    #[must_use]
    pub fn new() -> Self {
        Self { last_response_empty: true, ..Self::default() }
    }

    #[must_use]
    pub fn rows(&self) -> &[StreamRow] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, id: &str) -> Option<&StreamRow> {
        self.index.get(id).and_then(|&i| self.rows.get(i))
    }

    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.id.clone()).collect()
    }

    /// The wrapping region is hidden while the latest result set is empty.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.last_response_empty
    }

    /// Whether the wrapping region is hidden under `policy`.
    #[must_use]
    pub fn region_hidden(&self, policy: EmptyPolicy) -> bool {
        match policy {
            EmptyPolicy::Hide => self.last_response_empty,
            EmptyPolicy::Placeholder => false,
        }
    }

    /// Apply one poll response.
    pub fn reconcile(&mut self, items: &[StreamItem]) -> ReconcileReport {
        let mut report = ReconcileReport::default();
        self.last_response_empty = items.is_empty();

        for item in items {
            match self.index.get(&item.id) {
                Some(&i) => {
                    if self.rows[i].refresh_from(item) {
                        report.updated.push(item.id.clone());
                    }
                }
                None => {
                    self.index.insert(item.id.clone(), self.rows.len());
                    self.rows.push(StreamRow::from_item(item));
                    report.appended.push(item.id.clone());
                }
            }
        }
        report
    }
}
