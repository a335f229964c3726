use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::chrome::{ChromeEvent, ChromeIntent};

pub(crate) mod carousel;
pub(crate) mod chrome;
pub(crate) mod instances;
pub(crate) mod settings;
pub(crate) mod sidebar;
pub(crate) mod window;

pub(crate) fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        // Widgets
        AppEvent::Sidebar(event) => sidebar::route(app, event),
        AppEvent::Carousel(event) => carousel::route(app, event),
        AppEvent::Instances(event) => instances::route(app, event),
        AppEvent::Chrome(event) => chrome::route(app, event),
        AppEvent::Settings(event) => settings::route(app, event),
        // Background work
        AppEvent::FontLoaded(Ok(())) => Task::none(),
        AppEvent::FontLoaded(Err(err)) => {
            log::warn!("font registration failed: {err:?}");
            Task::none()
        },
        AppEvent::AutoRefresh => Task::batch([
            instances::load_instances(app),
            chrome::poll_update_status(&app.services),
        ]),
        AppEvent::UpdateStatusPolled(pending) => chrome::route(
            app,
            ChromeEvent::Intent(ChromeIntent::UpdateStatusChanged(pending)),
        ),
        AppEvent::UpdateApplied { pending } => {
            chrome::update_applied(app, pending)
        },
        // Direct operations
        AppEvent::CursorMoved(position) => window::cursor_moved(app, position),
        AppEvent::CursorLeft => window::cursor_left(app),
        AppEvent::Window(event) => window::route(app, event),
    }
}
