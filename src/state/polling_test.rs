use super::*;

#[test]
fn fresh_token_is_live() {
    let handle = PollHandle::new();
    let token = handle.restart();
    assert!(handle.is_live(token));
}

#[test]
fn restart_supersedes_previous_loop() {
    let handle = PollHandle::new();
    let first = handle.restart();
    let second = handle.restart();
    assert!(!handle.is_live(first));
    assert!(handle.is_live(second));
}

#[test]
fn stop_ends_current_loop_through_any_clone() {
    let handle = PollHandle::new();
    let token = handle.restart();
    let cleanup = handle.clone();
    cleanup.stop();
    assert!(!handle.is_live(token));
}

#[test]
fn independent_handles_do_not_interfere() {
    let logs = PollHandle::new();
    let info = PollHandle::new();
    let logs_token = logs.restart();
    let info_token = info.restart();
    info.stop();
    assert!(logs.is_live(logs_token));
    assert!(!info.is_live(info_token));
}
