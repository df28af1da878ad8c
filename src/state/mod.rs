//! Browser-independent view models.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each model owns the decisions for one enhanced region (modal stack, smart
//! select, polled panels, bulk selection). Components and DOM glue apply the
//! outcomes these models return; the models never touch the DOM.

pub mod logs;
pub mod modal;
pub mod panels;
pub mod polling;
pub mod select;
pub mod selection;
pub mod streams;
pub mod tasks;
