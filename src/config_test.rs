use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |name| map.get(name).cloned()
}

#[test]
fn defaults_match_dashboard_timings() {
    let config = DashboardConfig::default();
    assert_eq!(config.poll_interval, Duration::from_secs(10));
    assert_eq!(config.task_repoll_delay, Duration::from_secs(2));
    assert_eq!(config.action_refresh_delay, Duration::from_millis(500));
    assert_eq!(config.filter_threshold, 5);
    assert_eq!(config.empty_policy, EmptyPolicy::Hide);
}

#[test]
fn from_attributes_applies_overrides() {
    let config = DashboardConfig::from_attributes(lookup_from(&[
        ("poll-interval-ms", "3000"),
        ("task-repoll-ms", "750"),
        ("empty-policy", "Placeholder"),
    ]));
    assert_eq!(config.poll_interval, Duration::from_secs(3));
    assert_eq!(config.task_repoll_delay, Duration::from_millis(750));
    assert_eq!(config.action_refresh_delay, Duration::from_millis(DEFAULT_ACTION_REFRESH_MS));
    assert_eq!(config.empty_policy, EmptyPolicy::Placeholder);
}

#[test]
fn from_attributes_ignores_garbage_and_zero() {
    let config = DashboardConfig::from_attributes(lookup_from(&[
        ("poll-interval-ms", "soon"),
        ("task-repoll-ms", "0"),
        ("empty-policy", "sometimes"),
    ]));
    assert_eq!(config, DashboardConfig::default());
}
