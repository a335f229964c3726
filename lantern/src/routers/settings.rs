use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::carousel::{CarouselEvent, CarouselIntent};
use crate::widgets::settings::{
    SettingsEffect, SettingsEvent, SettingsIntent,
};

/// Route a settings panel event through the widget reducer.
pub(crate) fn route(app: &mut App, event: SettingsEvent) -> Task<AppEvent> {
    match event {
        SettingsEvent::Intent(event) => route_intent(app, event),
        SettingsEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_intent(app: &mut App, event: SettingsIntent) -> Task<AppEvent> {
    app.widgets.settings.reduce(event).map(AppEvent::Settings)
}

fn route_effect(effect: SettingsEffect) -> Task<AppEvent> {
    match effect {
        SettingsEffect::RescanScreenshots => Task::done(AppEvent::Carousel(
            CarouselEvent::Intent(CarouselIntent::Refresh),
        )),
    }
}
