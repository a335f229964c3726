mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{ChromeEffect, ChromeEvent, ChromeIntent};
use iced::Task;
pub(crate) use model::ChromeViewModel;
use state::ChromeState;

/// Bottom bar widget owning the launch and self-update controls.
pub(crate) struct ChromeWidget {
    state: ChromeState,
}

impl ChromeWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: ChromeState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(&mut self, event: ChromeIntent) -> Task<ChromeEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> ChromeViewModel {
        ChromeViewModel {
            launch_label_key: model::launch_label_key(
                self.state.selected_is_local(),
            ),
            show_update: self.state.update_pending()
                && !self.state.is_updating(),
        }
    }
}
