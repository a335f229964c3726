use iced::Task;

use crate::app::{App, AppEvent};
use crate::services::Services;
use crate::widgets::chrome::{ChromeEffect, ChromeEvent, ChromeIntent};
use crate::widgets::instances::{InstancesEvent, InstancesIntent};

/// Route a bottom bar event through the widget reducer.
pub(crate) fn route(app: &mut App, event: ChromeEvent) -> Task<AppEvent> {
    match event {
        ChromeEvent::Intent(event) => route_intent(app, event),
        ChromeEvent::Effect(effect) => route_effect(app, effect),
    }
}

/// Ask the update source whether a launcher update is waiting.
pub(crate) fn poll_update_status(services: &Services) -> Task<AppEvent> {
    let updates = services.updates.clone();
    Task::perform(
        async move { updates.pending_update() },
        AppEvent::UpdateStatusPolled,
    )
}

/// Finish a self-update run and publish the new pending state.
pub(crate) fn update_applied(app: &mut App, pending: bool) -> Task<AppEvent> {
    let finished = route_intent(app, ChromeIntent::UpdateFinished);
    let status = route_intent(app, ChromeIntent::UpdateStatusChanged(pending));
    Task::batch([finished, status])
}

fn route_intent(app: &mut App, event: ChromeIntent) -> Task<AppEvent> {
    app.widgets.chrome.reduce(event).map(AppEvent::Chrome)
}

fn route_effect(app: &App, effect: ChromeEffect) -> Task<AppEvent> {
    match effect {
        ChromeEffect::LaunchSelected => Task::done(AppEvent::Instances(
            InstancesEvent::Intent(InstancesIntent::LaunchSelected),
        )),
        ChromeEffect::PerformSelfUpdate => {
            let updates = app.services.updates.clone();
            Task::perform(
                async move {
                    updates.perform_update();
                    updates.pending_update()
                },
                |pending| AppEvent::UpdateApplied { pending },
            )
        },
    }
}
