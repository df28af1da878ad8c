//! Networking modules for fragment loads and JSON endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `error` classifies their failures, and
//! `types` defines the consumed JSON schema.

pub mod api;
pub mod error;
pub mod types;
