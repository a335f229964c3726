use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::settings::{SettingsEvent, SettingsIntent};
use crate::widgets::sidebar::{
    SidebarCtx, SidebarEffect, SidebarEvent, SidebarIntent,
};

/// Route a sidebar event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: SidebarEvent) -> Task<AppEvent> {
    match event {
        SidebarEvent::Intent(event) => route_intent(app, event),
        SidebarEvent::Effect(effect) => route_effect(app, effect),
    }
}

fn route_intent(app: &mut App, event: SidebarIntent) -> Task<AppEvent> {
    let ctx = SidebarCtx {
        cursor: app.cursor,
        bounds: app.compositor.sidebar_bounds(),
    };
    app.widgets
        .sidebar
        .reduce(event, &ctx)
        .map(AppEvent::Sidebar)
}

fn route_effect(app: &mut App, effect: SidebarEffect) -> Task<AppEvent> {
    match effect {
        SidebarEffect::Relayout => {
            app.compositor.relayout(app.widgets.sidebar.width());
            Task::none()
        },
        SidebarEffect::OpenSettings => Task::done(AppEvent::Settings(
            SettingsEvent::Intent(SettingsIntent::Open),
        )),
    }
}
