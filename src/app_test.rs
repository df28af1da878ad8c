use super::*;
use crate::config::CONFIRMATION_MODAL_ID;
use crate::state::modal::Confirmation;

#[test]
fn dashboard_stacks_modals_from_configured_base() {
    let config = DashboardConfig { modal_base_z_index: 2000, ..DashboardConfig::default() };
    let dash = Dashboard::new(config);
    dash.modals.update(|s| {
        s.open_confirmation(Confirmation::default(), None, false);
        s.show(CONFIRMATION_MODAL_ID);
    });
    assert_eq!(dash.modals.with_untracked(ModalStack::top_z_index), Some(2000));
}

#[test]
fn clones_share_one_modal_stack() {
    let dash = Dashboard::new(DashboardConfig::default());
    let other = dash.clone();
    other.modals.update(|s| s.open_confirmation(Confirmation::default(), None, false));
    assert!(dash.modals.with_untracked(|s| s.get(CONFIRMATION_MODAL_ID).is_some()));
}
