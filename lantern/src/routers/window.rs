use iced::{Point, Task, window};

use crate::app::{App, AppEvent};
use crate::widgets::carousel::{CarouselEvent, CarouselIntent};
use crate::widgets::sidebar::{SidebarEvent, SidebarIntent};

/// Handle window lifecycle events.
pub(crate) fn route(app: &mut App, event: window::Event) -> Task<AppEvent> {
    match event {
        window::Event::Opened { size, .. } | window::Event::Resized(size) => {
            app.compositor.resize(size, app.widgets.sidebar.width());
            Task::none()
        },
        window::Event::CloseRequested => {
            let stop = super::carousel::route(
                app,
                CarouselEvent::Intent(CarouselIntent::Stop),
            );
            Task::batch([stop, iced::exit()])
        },
        _ => Task::none(),
    }
}

/// Track the pointer and let the sidebar react to it leaving its bounds.
pub(crate) fn cursor_moved(app: &mut App, position: Point) -> Task<AppEvent> {
    app.cursor = Some(position);
    super::sidebar::route(
        app,
        SidebarEvent::Intent(SidebarIntent::PointerMoved { position }),
    )
}

pub(crate) fn cursor_left(app: &mut App) -> Task<AppEvent> {
    app.cursor = None;
    super::sidebar::route(
        app,
        SidebarEvent::Intent(SidebarIntent::PointerLeftWindow),
    )
}
