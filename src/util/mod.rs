//! Utility helpers shared across the enhancement layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (DOM lookups, delegated listeners,
//! modal and page side effects) from the view models in `state`.

#[cfg(feature = "csr")]
pub mod delegate;
#[cfg(feature = "csr")]
pub mod dom;
pub mod modal_actions;
pub mod mounts;
pub mod page_actions;
pub mod post_load;
pub mod url;
