use iced::Task;

use super::event::{ChromeEffect, ChromeEvent, ChromeIntent};
use super::state::ChromeState;

/// Reduce a bottom bar intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut ChromeState,
    event: ChromeIntent,
) -> Task<ChromeEvent> {
    match event {
        ChromeIntent::PlayPressed => {
            if state.selected_is_local().is_none() {
                return Task::none();
            }
            effect(ChromeEffect::LaunchSelected)
        },
        ChromeIntent::UpdatePressed => {
            if state.begin_update() {
                effect(ChromeEffect::PerformSelfUpdate)
            } else {
                Task::none()
            }
        },
        ChromeIntent::UpdateStatusChanged(pending) => {
            state.set_update_pending(pending);
            Task::none()
        },
        ChromeIntent::SelectionChanged(is_local) => {
            state.set_selection(is_local);
            Task::none()
        },
        ChromeIntent::UpdateFinished => {
            state.finish_update();
            Task::none()
        },
    }
}

fn effect(effect: ChromeEffect) -> Task<ChromeEvent> {
    Task::done(ChromeEvent::Effect(effect))
}
