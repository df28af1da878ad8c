//! Dashboard behavior configuration.
//!
//! Defaults are compile-time constants. The page can override the timing
//! knobs through `data-*` attributes on `<body>`; unparseable values fall
//! back to the default rather than failing startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 10_000;
pub const DEFAULT_TASK_REPOLL_MS: u64 = 2_000;
pub const DEFAULT_ACTION_REFRESH_MS: u64 = 500;
pub const DEFAULT_MODAL_BASE_Z_INDEX: i32 = 1055;
pub const DEFAULT_CLOSE_LABEL_SHIFT_PX: i32 = 60;
pub const DEFAULT_FILTER_THRESHOLD: usize = 5;

/// Id of the shared container every loaded modal is appended to.
pub const MODALS_CONTAINER_ID: &str = "Modals";
/// Id of the page region reloaded when no ancestor modal exists.
pub const PAGE_CONTENT_ID: &str = "content";
/// Id of the single shared confirmation modal.
pub const CONFIRMATION_MODAL_ID: &str = "ModalConfirmation";

/// What an info/events/streams panel shows when its slice is empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyPolicy {
    /// Hide the panel's wrapping region.
    #[default]
    Hide,
    /// Keep the panel visible with a "None" placeholder.
    Placeholder,
}

/// Typed timing and stacking knobs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardConfig {
    pub poll_interval: Duration,
    pub task_repoll_delay: Duration,
    pub action_refresh_delay: Duration,
    pub modal_base_z_index: i32,
    pub close_label_shift_px: i32,
    pub filter_threshold: usize,
    pub empty_policy: EmptyPolicy,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            task_repoll_delay: Duration::from_millis(DEFAULT_TASK_REPOLL_MS),
            action_refresh_delay: Duration::from_millis(DEFAULT_ACTION_REFRESH_MS),
            modal_base_z_index: DEFAULT_MODAL_BASE_Z_INDEX,
            close_label_shift_px: DEFAULT_CLOSE_LABEL_SHIFT_PX,
            filter_threshold: DEFAULT_FILTER_THRESHOLD,
            empty_policy: EmptyPolicy::default(),
        }
    }
}

impl DashboardConfig {
    /// Build config from an attribute lookup (`name` without the `data-` prefix).
    ///
    /// Recognized:
    /// - `poll-interval-ms`: default 10000
    /// - `task-repoll-ms`: default 2000
    /// - `action-refresh-ms`: default 500
    /// - `empty-policy`: `hide` (default) or `placeholder`
    pub fn from_attributes(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            poll_interval: parse_millis(lookup("poll-interval-ms").as_deref(), DEFAULT_POLL_INTERVAL_MS),
            task_repoll_delay: parse_millis(lookup("task-repoll-ms").as_deref(), DEFAULT_TASK_REPOLL_MS),
            action_refresh_delay: parse_millis(lookup("action-refresh-ms").as_deref(), DEFAULT_ACTION_REFRESH_MS),
            empty_policy: parse_empty_policy(lookup("empty-policy").as_deref()),
            ..defaults
        }
    }

    /// Read overrides from `<body data-*>`; defaults outside the browser.
    pub fn from_document() -> Self {
        #[cfg(feature = "csr")]
        {
            let body = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body());
            match body {
                Some(body) => Self::from_attributes(|name| body.get_attribute(&format!("data-{name}"))),
                None => Self::default(),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}

fn parse_millis(raw: Option<&str>, default: u64) -> Duration {
    let ms = raw
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default);
    Duration::from_millis(ms)
}

fn parse_empty_policy(raw: Option<&str>) -> EmptyPolicy {
    match raw.map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("placeholder") => EmptyPolicy::Placeholder,
        _ => EmptyPolicy::Hide,
    }
}
