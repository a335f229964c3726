mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{SettingsEffect, SettingsEvent, SettingsIntent};
use iced::Task;
pub(crate) use model::SettingsViewModel;
use state::SettingsState;

/// Read-only launcher settings overlay.
pub(crate) struct SettingsWidget {
    state: SettingsState,
}

impl SettingsWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: SettingsState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: SettingsIntent,
    ) -> Task<SettingsEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> SettingsViewModel {
        SettingsViewModel {
            is_open: self.state.is_open(),
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        self.state.is_open()
    }
}
