//! Modal stack: session-scoped records for every loaded overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each loaded fragment modal gets one [`ModalRecord`] keyed by its DOM id.
//! Records point at the modal (or page) that opened them, forming a
//! parent-pointer tree. Closing a record evaluates [`ModalStack::ancestor_refresh`]
//! and hands the resulting [`RefreshPlan`] back to the caller, which owns the
//! network and DOM side effects. The stack itself never touches the DOM.
//!
//! DESIGN
//! ======
//! Records persist hidden after close so reopening reuses the node; only an
//! explicit [`ModalStack::remove`] forgets one. Stacking order is explicit
//! state (`z_index`, backdrops) instead of being read back from CSS.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::config::{CONFIRMATION_MODAL_ID, DEFAULT_CLOSE_LABEL_SHIFT_PX, DEFAULT_MODAL_BASE_Z_INDEX};
use crate::util::url::only_content;

/// Marker class fragments use for content-only fullscreen dialogs.
pub const FULLSCREEN_MARKER: &str = "modal-fullscreen";

/// Full overlay vs. fullscreen dialog whose body is swapped in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalKind {
    #[default]
    Standard,
    Fullscreen,
}

impl ModalKind {
    /// Classify a freshly fetched fragment by its dialog markup.
    ///
    /// Only an exact `modal-fullscreen` class token counts; responsive
    /// variants such as `modal-fullscreen-lg-down` stay standard.
    #[must_use]
    pub fn detect(fragment: &str) -> Self {
        if class_attributes(fragment).any(|classes| classes.split_whitespace().any(|c| c == FULLSCREEN_MARKER)) {
            Self::Fullscreen
        } else {
            Self::Standard
        }
    }
}

/// Values of every quoted `class` attribute in `html`.
fn class_attributes(html: &str) -> impl Iterator<Item = &str> {
    html.match_indices("class=").filter_map(move |(at, attr)| {
        if html[..at].chars().next_back().is_some_and(|c| !c.is_whitespace()) {
            return None;
        }
        let rest = &html[at + attr.len()..];
        let quote = rest.chars().next().filter(|q| *q == '"' || *q == '\'')?;
        let body = &rest[1..];
        body.find(quote).map(|end| &body[..end])
    })
}

/// One loaded overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalRecord {
    pub id: String,
    /// URL of the last successful load, without the content-only flag.
    pub url: Option<String>,
    pub kind: ModalKind,
    /// Modal that must react when this one closes; `None` means the page.
    pub parent: Option<String>,
    /// An action inside this modal changed data the parent displays.
    pub refresh_parent: bool,
    /// The parent must close instead of reloading. Wins over `refresh_parent`.
    pub close_parent: bool,
    /// Whether hiding this modal runs the ancestor-refresh protocol.
    pub refresh_on_hide: bool,
    pub visible: bool,
    pub z_index: i32,
    /// Vertical shift of the close affordance while a fullscreen modal sits above.
    pub close_label_offset: i32,
}

/// Backdrop layer owned by one standard modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Backdrop {
    pub owner: String,
    pub z_index: i32,
}

/// Where a fetched fragment is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadTarget {
    /// No node exists yet; one is created in the shared container.
    NewNode,
    /// Existing standard modal; its whole content is replaced.
    WholeNode,
    /// Existing fullscreen modal; only `.modal-body` is replaced.
    FullscreenBody,
}

/// A load computed before any network traffic; nothing is mutated until
/// [`ModalStack::commit_load`] runs with the fetched fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadRequest {
    pub modal_id: String,
    pub url: String,
    pub request_url: String,
    pub target: LoadTarget,
    pub preset_refresh_parent: bool,
    pub parent: Option<String>,
}

/// Result of committing a successful load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadCommit {
    pub created: bool,
    pub already_visible: bool,
}

/// What the owner of the stack must do after a modal closes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RefreshPlan {
    Nothing,
    /// Re-fetch the ancestor modal in place from its stored URL.
    ReloadModal { id: String, url: String },
    /// Reload the page content region.
    ReloadPage,
    /// Close the ancestor (which then runs its own protocol).
    CloseModal { id: String },
}

/// DOM work implied by a hide transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HideOutcome {
    /// Fullscreen bodies are emptied so reopening starts blank.
    pub clear_body: bool,
    pub refresh: RefreshPlan,
}

/// Action copied from the trigger into the shared confirmation modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Confirmation {
    pub title: String,
    pub action: String,
    pub target_id: String,
    /// Selector of the form whose `action` URL receives the POST.
    pub form: Option<String>,
}

/// All modal records plus stacking bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalStack {
    records: Vec<ModalRecord>,
    backdrops: Vec<Backdrop>,
    confirmation: Option<Confirmation>,
    base_z_index: i32,
    close_label_shift: i32,
}

impl Default for ModalStack {
    fn default() -> Self {
        Self::new(DEFAULT_MODAL_BASE_Z_INDEX, DEFAULT_CLOSE_LABEL_SHIFT_PX)
    }
}

impl ModalStack {
    #[must_use]
    pub fn new(base_z_index: i32, close_label_shift: i32) -> Self {
        Self {
            records: Vec::new(),
            backdrops: Vec::new(),
            confirmation: None,
            base_z_index,
            close_label_shift,
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ModalRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut ModalRecord> {
        self.records.iter_mut().find(|r| r.id == id)
    }

    /// Records in creation (DOM append) order.
    #[must_use]
    pub fn records(&self) -> &[ModalRecord] {
        &self.records
    }

    #[must_use]
    pub fn backdrops(&self) -> &[Backdrop] {
        &self.backdrops
    }

    #[must_use]
    pub fn confirmation(&self) -> Option<&Confirmation> {
        self.confirmation.as_ref()
    }

    /// Ids of visible modals, lowest z-index first.
    #[must_use]
    pub fn open_ids(&self) -> Vec<String> {
        let mut open: Vec<&ModalRecord> = self.records.iter().filter(|r| r.visible).collect();
        open.sort_by_key(|r| r.z_index);
        open.into_iter().map(|r| r.id.clone()).collect()
    }

    #[must_use]
    pub fn top_z_index(&self) -> Option<i32> {
        self.records.iter().filter(|r| r.visible).map(|r| r.z_index).max()
    }

    /// Decide how a load of `url` into `modal_id` is performed.
    ///
    /// `parent` replaces the recorded ancestor when supplied; `None` keeps
    /// whatever is recorded (or nothing for a new modal).
    #[must_use]
    pub fn plan_load(&self, modal_id: &str, url: &str, preset_refresh_parent: bool, parent: Option<&str>) -> LoadRequest {
        let target = match self.get(modal_id) {
            None => LoadTarget::NewNode,
            Some(r) if r.kind == ModalKind::Fullscreen => LoadTarget::FullscreenBody,
            Some(_) => LoadTarget::WholeNode,
        };
        let request_url = if target == LoadTarget::FullscreenBody { only_content(url) } else { url.to_owned() };
        LoadRequest {
            modal_id: modal_id.to_owned(),
            url: url.to_owned(),
            request_url,
            target,
            preset_refresh_parent,
            parent: parent.filter(|p| *p != modal_id).map(str::to_owned),
        }
    }

    /// Apply a load whose fragment arrived successfully.
    ///
    /// `kind` is ignored for [`LoadTarget::FullscreenBody`] loads, which keep
    /// their dialog. `opt_out_refresh` marks modals that must not notify
    /// their ancestor on hide.
    pub fn commit_load(&mut self, request: &LoadRequest, kind: ModalKind, opt_out_refresh: bool) -> LoadCommit {
        let base_z_index = self.base_z_index;
        let created = self.get(&request.modal_id).is_none();
        if created {
            self.records.push(ModalRecord {
                id: request.modal_id.clone(),
                url: None,
                kind,
                parent: None,
                refresh_parent: false,
                close_parent: false,
                refresh_on_hide: true,
                visible: false,
                z_index: base_z_index,
                close_label_offset: 0,
            });
        }
        let Some(record) = self.get_mut(&request.modal_id) else {
            return LoadCommit { created, already_visible: false };
        };
        if request.target != LoadTarget::FullscreenBody {
            record.kind = kind;
        }
        record.url = Some(request.url.clone());
        record.refresh_parent = request.preset_refresh_parent;
        if let Some(parent) = &request.parent {
            record.parent = Some(parent.clone());
        }
        record.refresh_on_hide = record.id != CONFIRMATION_MODAL_ID && !opt_out_refresh;
        LoadCommit { created, already_visible: record.visible }
    }

    /// Show transition. Returns `false` when unknown or already visible.
    pub fn show(&mut self, id: &str) -> bool {
        let Some(record) = self.get(id) else {
            return false;
        };
        if record.visible {
            return false;
        }
        let kind = record.kind;
        let shift = self.close_label_shift;

        let mut z_index = self.base_z_index;
        for other in self.records.iter_mut().filter(|r| r.visible && r.id != id) {
            if other.z_index >= z_index {
                z_index = other.z_index + 1;
            }
            if kind == ModalKind::Fullscreen {
                other.close_label_offset += shift;
            }
        }

        if let Some(record) = self.get_mut(id) {
            record.visible = true;
            record.z_index = z_index;
        }
        if kind == ModalKind::Standard {
            self.backdrops.retain(|b| b.owner != id);
            self.backdrops.push(Backdrop { owner: id.to_owned(), z_index: z_index - 1 });
        }
        true
    }

    /// Hide transition plus the ancestor-refresh decision for this close.
    pub fn hide(&mut self, id: &str) -> Option<HideOutcome> {
        let record = self.get_mut(id)?;
        if !record.visible {
            return None;
        }
        record.visible = false;
        let kind = record.kind;
        let refresh_on_hide = record.refresh_on_hide;

        let clear_body = kind == ModalKind::Fullscreen;
        if clear_body {
            let shift = self.close_label_shift;
            for other in self.records.iter_mut().filter(|r| r.visible) {
                other.close_label_offset = (other.close_label_offset - shift).max(0);
            }
        } else {
            self.backdrops.retain(|b| b.owner != id);
        }

        let refresh = if refresh_on_hide { self.ancestor_refresh(id) } else { RefreshPlan::Nothing };
        Some(HideOutcome { clear_body, refresh })
    }

    /// An action inside `id` changed data its ancestor shows.
    pub fn mark_refresh_parent(&mut self, id: &str) {
        if let Some(record) = self.get_mut(id) {
            record.refresh_parent = true;
        }
    }

    /// The ancestor of `id` must close when `id` closes.
    pub fn mark_close_parent(&mut self, id: &str) {
        if let Some(record) = self.get_mut(id) {
            record.close_parent = true;
        }
    }

    /// Evaluate the ancestor-refresh decision table for a closing modal.
    ///
    /// 1. `close_parent`: mark the ancestor for refresh and close it.
    /// 2. `refresh_parent`: reload the ancestor in place, or the page.
    /// 3. otherwise nothing.
    pub fn ancestor_refresh(&mut self, id: &str) -> RefreshPlan {
        let Some(record) = self.get(id) else {
            return RefreshPlan::Nothing;
        };
        let parent = record.parent.clone();
        let close_parent = record.close_parent;
        let refresh_parent = record.refresh_parent;

        if close_parent {
            return match parent {
                Some(parent_id) if self.get(&parent_id).is_some() => {
                    self.mark_refresh_parent(&parent_id);
                    RefreshPlan::CloseModal { id: parent_id }
                }
                // Nothing to close when the opener was the page itself.
                _ => RefreshPlan::Nothing,
            };
        }

        if refresh_parent {
            return match parent.and_then(|p| self.get(&p)) {
                Some(ancestor) => match &ancestor.url {
                    Some(url) => RefreshPlan::ReloadModal { id: ancestor.id.clone(), url: url.clone() },
                    None => RefreshPlan::ReloadPage,
                },
                None => RefreshPlan::ReloadPage,
            };
        }

        RefreshPlan::Nothing
    }

    /// Point the shared confirmation modal at a new action.
    ///
    /// The caller's ancestor link is kept so confirming chains back to
    /// whatever opened the confirmation.
    pub fn open_confirmation(&mut self, confirmation: Confirmation, parent: Option<String>, close_parent: bool) {
        if self.get(CONFIRMATION_MODAL_ID).is_none() {
            self.records.push(ModalRecord {
                id: CONFIRMATION_MODAL_ID.to_owned(),
                url: None,
                kind: ModalKind::Standard,
                parent: None,
                refresh_parent: false,
                close_parent: false,
                refresh_on_hide: false,
                visible: false,
                z_index: self.base_z_index,
                close_label_offset: 0,
            });
        }
        if let Some(record) = self.get_mut(CONFIRMATION_MODAL_ID) {
            record.parent = parent;
            record.close_parent = close_parent;
            record.refresh_parent = false;
        }
        self.confirmation = Some(confirmation);
    }

    /// Forget a modal whose node was removed from the DOM.
    pub fn remove(&mut self, id: &str) {
        self.records.retain(|r| r.id != id);
        self.backdrops.retain(|b| b.owner != id);
    }
}
