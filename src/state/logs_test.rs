use super::*;

fn log(timestamp: f64, category: u8) -> LogItem {
    LogItem {
        time: "2024-05-01T12:00:00".to_owned(),
        timestamp,
        text: format!("event at {timestamp}"),
        category,
    }
}

fn timestamps(feed: &LogFeed) -> Vec<f64> {
    feed.entries().iter().map(|e| e.timestamp).collect()
}

// =============================================================
// Cursor
// =============================================================

#[test]
fn first_poll_requests_from_zero() {
    let feed = LogFeed::new();
    assert_eq!(feed.request_url("/admin/logs"), "/admin/logs?timestamp=0");
    assert_eq!(feed.request_url("/admin/logs?limit=50"), "/admin/logs?limit=50&timestamp=0");
}

#[test]
fn new_entries_prepend_newest_first_and_advance_cursor() {
    let mut feed = LogFeed::new();
    feed.ingest(&[log(100.0, 0)]);
    assert_eq!(feed.cursor(), 100.0);

    let added = feed.ingest(&[log(101.0, 0), log(102.0, 3)]);
    assert_eq!(added, 2);
    assert_eq!(timestamps(&feed), vec![102.0, 101.0, 100.0]);
    assert_eq!(feed.cursor(), 102.0);
    assert_eq!(feed.count(0), 2);
    assert_eq!(feed.count(3), 1);
    assert_eq!(feed.request_url("/logs"), "/logs?timestamp=102");
}

#[test]
fn entries_at_or_below_cursor_are_never_rendered_twice() {
    let mut feed = LogFeed::new();
    feed.ingest(&[log(100.0, 0), log(101.0, 0)]);
    let added = feed.ingest(&[log(100.0, 0), log(101.0, 0), log(103.0, 2)]);
    assert_eq!(added, 1);
    assert_eq!(timestamps(&feed), vec![103.0, 101.0, 100.0]);
    assert_eq!(feed.count(0), 2);
}

#[test]
fn cursor_never_moves_backwards() {
    let mut feed = LogFeed::new();
    feed.ingest(&[log(50.5, 0)]);
    feed.ingest(&[]);
    feed.ingest(&[log(10.0, 0)]);
    assert_eq!(feed.cursor(), 50.5);
}

#[test]
fn duplicate_timestamps_in_one_response_collapse() {
    let mut feed = LogFeed::new();
    assert_eq!(feed.ingest(&[log(5.0, 1), log(5.0, 1)]), 1);
    assert_eq!(feed.count(1), 1);
}

// =============================================================
// Filter
// =============================================================

#[test]
fn filter_applies_to_all_held_entries_without_refetch() {
    let mut feed = LogFeed::new();
    feed.ingest(&[log(1.0, 0), log(2.0, 1), log(3.0, 2), log(4.0, 3)]);
    assert_eq!(feed.visible().len(), 4);

    feed.set_min_category(2);
    let visible: Vec<_> = feed.visible().iter().map(|e| e.category).collect();
    assert_eq!(visible, vec![3, 2]);
    assert_eq!(feed.entries().len(), 4);

    feed.ingest(&[log(5.0, 1)]);
    assert_eq!(feed.visible().len(), 2);
}

// =============================================================
// Display time
// =============================================================

#[test]
fn date_parts_render_day_first_with_padding() {
    let parts = DateParts { year: 2024, month: 5, day: 1, hour: 9, minute: 3, second: 7 };
    assert_eq!(parts.display(), "01.05.2024, 09:03:07");
}

#[cfg(not(feature = "csr"))]
#[test]
fn host_display_time_is_raw_string() {
    let entry = LogEntry::from(&log(1.0, 0));
    assert_eq!(display_time(&entry), "2024-05-01T12:00:00");
}
