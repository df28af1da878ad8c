//! Owned poll-loop handles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every polled region owns one [`PollHandle`]. Starting a loop bumps the
//! handle's generation; loops from older generations see themselves
//! superseded on their next wake-up and exit, so re-initializing a view never
//! leaves two pollers against the same region.

#[cfg(test)]
#[path = "polling_test.rs"]
mod polling_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Generation of a loop started from a [`PollHandle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollToken(u64);

/// Cancellable owner of at most one live poll loop.
///
/// Cloning shares the same generation counter, so a clone captured by a
/// cleanup hook can stop the loop started elsewhere.
#[derive(Clone, Debug, Default)]
pub struct PollHandle {
    generation: Arc<AtomicU64>,
}

impl PollHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Supersede any running loop and return the token for a new one.
    pub fn restart(&self) -> PollToken {
        PollToken(self.generation.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Stop whatever loop is running without starting another.
    pub fn stop(&self) {
        self.generation.fetch_add(1, Ordering::Relaxed);
    }

    /// Whether the loop holding `token` should keep going.
    #[must_use]
    pub fn is_live(&self, token: PollToken) -> bool {
        self.generation.load(Ordering::Relaxed) == token.0
    }
}

/// Spawn a loop calling `tick` now and then every `interval` until the
/// handle is restarted or stopped.
#[cfg(feature = "csr")]
pub fn spawn_poll<F, Fut>(handle: &PollHandle, interval: std::time::Duration, tick: F)
where
    F: Fn() -> Fut + 'static,
    Fut: std::future::Future<Output = ()> + 'static,
{
    let token = handle.restart();
    let handle = handle.clone();
    leptos::task::spawn_local(async move {
        loop {
            if !handle.is_live(token) {
                break;
            }
            tick().await;
            gloo_timers::future::sleep(interval).await;
        }
    });
}

/// Run `tick` once after `delay`, superseding any pending run on `handle`.
#[cfg(feature = "csr")]
pub fn spawn_delayed<F, Fut>(handle: &PollHandle, delay: std::time::Duration, tick: F)
where
    F: FnOnce() -> Fut + 'static,
    Fut: std::future::Future<Output = ()> + 'static,
{
    let token = handle.restart();
    let handle = handle.clone();
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(delay).await;
        if handle.is_live(token) {
            tick().await;
        }
    });
}
