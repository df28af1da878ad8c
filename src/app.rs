//! Page bootstrap and the shared dashboard context.
//!
//! There is no root component: the server renders the page and this module
//! attaches behavior to it. [`start`] installs the delegated page actions and
//! mounts one Leptos island per polled region.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;

use crate::config::DashboardConfig;
use crate::state::modal::ModalStack;

/// State shared by every island and delegated handler.
#[derive(Clone, Debug)]
pub struct Dashboard {
    pub config: DashboardConfig,
    pub modals: RwSignal<ModalStack>,
}

impl Dashboard {
    #[must_use]
    pub fn new(config: DashboardConfig) -> Self {
        let modals = RwSignal::new(ModalStack::new(config.modal_base_z_index, config.close_label_shift_px));
        Self { config, modals }
    }
}

/// Attach all behavior to the server-rendered page.
#[cfg(feature = "csr")]
pub fn start() {
    use leptos::logging::log;

    use crate::components::{info_panel, log_feed, modal_host, smart_select, task_list};
    use crate::util::{dom, page_actions, post_load};

    if any_spawner::Executor::init_wasm_bindgen().is_err() {
        leptos::logging::warn!("async executor was already initialized");
    }

    let dash = Dashboard::new(DashboardConfig::from_document());
    modal_host::mount(&dash);
    page_actions::install(&dash);
    smart_select::install();

    if let Some(body) = dom::body() {
        post_load::run(&dash, &body);
        dom::focus_first(&body);
    }

    info_panel::mount(&dash);
    task_list::mount(&dash);
    log_feed::mount(&dash);

    log!("dashboard behavior attached (poll every {:?})", dash.config.poll_interval);
}
