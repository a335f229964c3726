use std::time::Duration;

use iced::{Event, Subscription, event, mouse, window};

use crate::app::{App, AppEvent};
use crate::widgets::carousel::{CarouselEvent, CarouselIntent};
use crate::widgets::sidebar::model::ANIMATION_TICK_MS;
use crate::widgets::sidebar::{SidebarEvent, SidebarIntent};

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));
    let pointer_subs = event::listen_with(pointer_event);
    let refresh = iced::time::every(app.config.auto_refresh_interval())
        .map(|_| AppEvent::AutoRefresh);

    let mut subs = vec![win_subs, pointer_subs, refresh];

    if app.widgets.sidebar.is_animating() {
        let tick = iced::time::every(Duration::from_millis(ANIMATION_TICK_MS))
            .map(|_| AppEvent::Sidebar(SidebarEvent::Intent(SidebarIntent::Tick)));
        subs.push(tick);
    }

    let timings = &app.config.carousel;
    if app.widgets.carousel.is_playing() {
        let display = iced::time::every(timings.display_interval()).map(|_| {
            AppEvent::Carousel(CarouselEvent::Intent(CarouselIntent::DisplayTick))
        });
        subs.push(display);
    }
    if app.widgets.carousel.is_transitioning() {
        let frame = iced::time::every(timings.frame_interval()).map(|_| {
            AppEvent::Carousel(CarouselEvent::Intent(CarouselIntent::FrameTick))
        });
        subs.push(frame);
    }

    Subscription::batch(subs)
}

fn pointer_event(
    event: Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<AppEvent> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(AppEvent::CursorMoved(position))
        },
        Event::Mouse(mouse::Event::CursorLeft) => Some(AppEvent::CursorLeft),
        _ => None,
    }
}
