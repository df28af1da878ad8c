//! Lifetimes of islands mounted inside replaceable fragments.
//!
//! Modal bodies and the page content region are replaced wholesale on every
//! reload. Anything mounted inside them (smart selects, their listeners) is
//! registered against its host and released right before the replacement,
//! so re-initializing a fragment never accumulates mounts or listeners.

#[cfg(test)]
#[path = "mounts_test.rs"]
mod mounts_test;

/// Keep-alive values grouped by the host element they belong to.
#[derive(Debug)]
pub struct MountRegistry<H, K> {
    entries: Vec<(H, K)>,
}

impl<H, K> Default for MountRegistry<H, K> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<H, K> MountRegistry<H, K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, host: H, keep: K) {
        self.entries.push((host, keep));
    }

    /// Remove and return every value whose host satisfies `inside`.
    ///
    /// The caller drops the returned values outside any borrow of the
    /// registry, since dropping a mount can run arbitrary cleanup.
    pub fn release(&mut self, inside: impl Fn(&H) -> bool) -> Vec<K> {
        let (released, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries).into_iter().partition(|(h, _)| inside(h));
        self.entries = kept;
        released.into_iter().map(|(_, keep)| keep).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(feature = "csr")]
pub use browser::{register, release_within};

#[cfg(feature = "csr")]
mod browser {
    use std::any::Any;
    use std::cell::RefCell;

    use super::MountRegistry;

    thread_local! {
        static MOUNTS: RefCell<MountRegistry<web_sys::Element, Box<dyn Any>>> = RefCell::new(MountRegistry::new());
    }

    /// Keep `keep` alive until `host` is released.
    pub fn register(host: &web_sys::Element, keep: Box<dyn Any>) {
        MOUNTS.with(|m| m.borrow_mut().register(host.clone(), keep));
    }

    /// Drop everything registered on `scope` or its descendants.
    pub fn release_within(scope: &web_sys::Element) {
        let released = MOUNTS.with(|m| m.borrow_mut().release(|host| scope.contains(Some(host))));
        drop(released);
    }
}
