/// Bottom bar state.
#[derive(Debug, Default)]
pub(crate) struct ChromeState {
    update_pending: bool,
    updating: bool,
    selected_is_local: Option<bool>,
}

impl ChromeState {
    pub(super) fn update_pending(&self) -> bool {
        self.update_pending
    }

    pub(super) fn is_updating(&self) -> bool {
        self.updating
    }

    pub(super) fn selected_is_local(&self) -> Option<bool> {
        self.selected_is_local
    }

    pub(super) fn set_update_pending(&mut self, pending: bool) {
        self.update_pending = pending;
    }

    /// Mark an update as started; returns `false` when one is running or
    /// nothing is pending.
    pub(super) fn begin_update(&mut self) -> bool {
        if self.updating || !self.update_pending {
            return false;
        }
        self.updating = true;
        true
    }

    pub(super) fn finish_update(&mut self) {
        self.updating = false;
    }

    pub(super) fn set_selection(&mut self, is_local: Option<bool>) {
        self.selected_is_local = is_local;
    }
}
