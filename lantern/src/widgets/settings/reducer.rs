use iced::Task;

use super::event::{SettingsEffect, SettingsEvent, SettingsIntent};
use super::state::SettingsState;

/// Reduce a settings panel intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut SettingsState,
    event: SettingsIntent,
) -> Task<SettingsEvent> {
    match event {
        SettingsIntent::Open => {
            state.set_open(true);
            Task::none()
        },
        SettingsIntent::Close => {
            state.set_open(false);
            Task::none()
        },
        SettingsIntent::RescanPressed => {
            if !state.is_open() {
                return Task::none();
            }
            Task::done(SettingsEvent::Effect(
                SettingsEffect::RescanScreenshots,
            ))
        },
    }
}
