//! Log feed: append-only, cursor-driven, filtered client-side.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each poll asks for entries newer than [`LogFeed::cursor`], the highest
//! timestamp rendered so far. Accepted entries are prepended so the newest is
//! first, bump a per-category counter, and are never fetched again. The
//! category filter only toggles visibility of entries already held.

#[cfg(test)]
#[path = "logs_test.rs"]
mod logs_test;

use std::collections::BTreeMap;

use crate::net::types::LogItem;
use crate::util::url::with_query;

/// Known log categories, in ascending severity.
pub const CATEGORY_LABELS: [&str; 4] = ["info", "debug", "warning", "error"];

/// One rendered log line.
#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: f64,
    pub text: String,
    /// Server-supplied time string, formatted at render time.
    pub time: String,
    pub category: u8,
}

impl From<&LogItem> for LogEntry {
    fn from(item: &LogItem) -> Self {
        Self { timestamp: item.timestamp, text: item.text.clone(), time: item.time.clone(), category: item.category }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogFeed {
    entries: Vec<LogEntry>,
    cursor: f64,
    counts: BTreeMap<u8, u32>,
    min_category: u8,
}

impl LogFeed {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest timestamp rendered; `0` before the first entry.
    #[must_use]
    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    /// Entries newest first.
    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn count(&self, category: u8) -> u32 {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn min_category(&self) -> u8 {
        self.min_category
    }

    /// Poll URL carrying the cursor.
    #[must_use]
    pub fn request_url(&self, base: &str) -> String {
        with_query(base, "timestamp", &self.cursor.to_string())
    }

    /// Accept one poll response; returns how many entries were added.
    ///
    /// Only entries strictly newer than the cursor at call time are taken,
    /// so a replayed or overlapping response renders nothing twice.
    pub fn ingest(&mut self, items: &[LogItem]) -> usize {
        let floor = self.cursor;
        let mut added = 0;
        for item in items {
            if item.timestamp <= floor || self.entries.iter().any(|e| e.timestamp.to_bits() == item.timestamp.to_bits()) {
                continue;
            }
            self.entries.insert(0, LogEntry::from(item));
            *self.counts.entry(item.category).or_insert(0) += 1;
            self.cursor = self.cursor.max(item.timestamp);
            added += 1;
        }
        added
    }

    /// Show only entries at or above `category`. Applies to held entries.
    pub fn set_min_category(&mut self, category: u8) {
        self.min_category = category;
    }

    #[must_use]
    pub fn is_visible(&self, entry: &LogEntry) -> bool {
        entry.category >= self.min_category
    }

    #[must_use]
    pub fn visible(&self) -> Vec<&LogEntry> {
        self.entries.iter().filter(|e| self.is_visible(e)).collect()
    }
}

/// Calendar fields of a log time in the viewer's local zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateParts {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl DateParts {
    /// `DD.MM.YYYY, HH:MM:SS`
    #[must_use]
    pub fn display(&self) -> String {
        format!(
            "{:02}.{:02}.{:04}, {:02}:{:02}:{:02}",
            self.day, self.month, self.year, self.hour, self.minute, self.second
        )
    }

    /// Parse a server time string through the browser's date parser.
    #[cfg(feature = "csr")]
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_browser(time: &str) -> Option<Self> {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(time));
        if date.get_time().is_nan() {
            return None;
        }
        Some(Self {
            year: date.get_full_year(),
            month: date.get_month() + 1,
            day: date.get_date(),
            hour: date.get_hours(),
            minute: date.get_minutes(),
            second: date.get_seconds(),
        })
    }
}

/// Display text for an entry's time; the raw string when it does not parse.
#[must_use]
pub fn display_time(entry: &LogEntry) -> String {
    #[cfg(feature = "csr")]
    {
        DateParts::from_browser(&entry.time).map_or_else(|| entry.time.clone(), |parts| parts.display())
    }
    #[cfg(not(feature = "csr"))]
    {
        entry.time.clone()
    }
}
