/// Settings panel visibility.
#[derive(Debug, Default)]
pub(crate) struct SettingsState {
    open: bool,
}

impl SettingsState {
    pub(super) fn is_open(&self) -> bool {
        self.open
    }

    pub(super) fn set_open(&mut self, open: bool) {
        self.open = open;
    }
}
