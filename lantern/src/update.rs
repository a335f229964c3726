use iced::Task;

use super::{App, AppEvent};
use crate::guards::{MenuGuard, context_menu_guard, modal_guard};
use crate::routers;
use crate::widgets::instances::{InstancesEvent, InstancesIntent};

/// Thin dispatch: apply interaction guards, then route the event.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    if app.has_modal() && !modal_guard(&event) {
        return Task::none();
    }

    if app.widgets.instances.context_menu().is_some() {
        match context_menu_guard(&event) {
            MenuGuard::Allow => {},
            MenuGuard::Ignore => return Task::none(),
            MenuGuard::Dismiss => {
                let dismiss = routers::instances::route(
                    app,
                    InstancesEvent::Intent(InstancesIntent::ContextMenuDismiss),
                );
                return Task::batch([dismiss, routers::route(app, event)]);
            },
        }
    }

    routers::route(app, event)
}
