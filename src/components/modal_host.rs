//! Backdrop layers and the shared confirmation modal.

use leptos::prelude::*;

use crate::app::Dashboard;
use crate::config::CONFIRMATION_MODAL_ID;

/// One backdrop per open standard modal, each just below its owner.
#[component]
pub fn ModalBackdrops() -> impl IntoView {
    let modals = expect_context::<Dashboard>().modals;
    move || {
        modals
            .with(|s| s.backdrops().to_vec())
            .into_iter()
            .map(|backdrop| {
                view! {
                    <div
                        class="modal-backdrop fade show"
                        data-owner=backdrop.owner
                        style=format!("z-index: {};", backdrop.z_index)
                    ></div>
                }
            })
            .collect_view()
    }
}

/// Single confirmation dialog shared by every `.open-modal-confirmation`
/// trigger. Its confirm button is a plain `.action`, dispatched like any other.
#[component]
pub fn ConfirmationModal() -> impl IntoView {
    let modals = expect_context::<Dashboard>().modals;
    let title = move || modals.with(|s| s.confirmation().map(|c| c.title.clone()));
    let action = move || modals.with(|s| s.confirmation().map(|c| c.action.clone()));
    let target_id = move || modals.with(|s| s.confirmation().map(|c| c.target_id.clone()));
    let form = move || modals.with(|s| s.confirmation().and_then(|c| c.form.clone()));

    view! {
        <div id=CONFIRMATION_MODAL_ID class="modal fade" tabindex="-1" aria-hidden="true">
            <div class="modal-dialog modal-dialog-centered">
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title">{title}</h5>
                        <button type="button" class="btn-close" data-bs-dismiss="modal" aria-label="Close"></button>
                    </div>
                    <div class="modal-footer">
                        <button type="button" class="btn btn-secondary" data-bs-dismiss="modal">"Cancel"</button>
                        <button
                            type="button"
                            class="btn btn-danger action"
                            data-action=action
                            data-id=target_id
                            data-form=form
                        >
                            "Confirm"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Mount the confirmation modal into `#Modals` and the backdrops into `<body>`.
#[cfg(feature = "csr")]
pub fn mount(dash: &Dashboard) {
    use crate::util::dom;

    let Some(body) = dom::body() else {
        return;
    };
    let container = dom::by_id(crate::config::MODALS_CONTAINER_ID).or_else(|| {
        let node = dom::document()?.create_element("div").ok()?;
        node.set_id(crate::config::MODALS_CONTAINER_ID);
        body.append_child(&node).ok()?;
        Some(node)
    });
    if let Some(container) = container {
        super::mount_on(&container, dash, || view! { <ConfirmationModal/> });
    }
    let body: web_sys::Element = body.into();
    super::mount_on(&body, dash, || view! { <ModalBackdrops/> });
}
