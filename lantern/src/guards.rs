use crate::app::AppEvent;
use crate::widgets::chrome::{ChromeEvent, ChromeIntent};
use crate::widgets::instances::{InstancesEvent, InstancesIntent};
use crate::widgets::settings::{SettingsEvent, SettingsIntent};
use crate::widgets::sidebar::{SidebarEvent, SidebarIntent};

/// Determines how the event loop should treat an incoming event when the
/// instance context menu is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuGuard {
    /// Let the event pass through to normal dispatch.
    Allow,
    /// Silently drop the event without closing the menu.
    Ignore,
    /// Close the context menu before dispatching.
    Dismiss,
}

/// Classify an incoming event while the context menu is open.
pub(crate) fn context_menu_guard(event: &AppEvent) -> MenuGuard {
    use MenuGuard::*;

    match event {
        AppEvent::Instances(InstancesEvent::Intent(event)) => {
            use InstancesIntent as E;
            match event {
                E::ContextMenuDismiss
                | E::ContextMenuRequested(_)
                | E::MenuActionSelected(_) => Allow,
                E::LoadRequested
                | E::Loaded(_)
                | E::LoadFailed(_)
                | E::IconPreviewLoaded { .. }
                | E::IconSaved { .. }
                | E::IconRemoved { .. }
                | E::IconFailed { .. } => Allow,
                E::RowReleased | E::PointerLeftList => Ignore,
                _ => Dismiss,
            }
        },
        AppEvent::Instances(InstancesEvent::Effect(_)) => Allow,
        AppEvent::Sidebar(SidebarEvent::Intent(SidebarIntent::SettingsPressed)) => {
            Dismiss
        },
        AppEvent::Sidebar(_) => Allow,
        AppEvent::Chrome(ChromeEvent::Intent(
            ChromeIntent::PlayPressed | ChromeIntent::UpdatePressed,
        )) => Dismiss,
        AppEvent::Chrome(_) => Allow,
        AppEvent::Settings(SettingsEvent::Intent(SettingsIntent::Open)) => {
            Dismiss
        },
        AppEvent::Settings(_) => Allow,
        AppEvent::Carousel(_) => Allow,
        AppEvent::FontLoaded(_)
        | AppEvent::AutoRefresh
        | AppEvent::UpdateStatusPolled(_)
        | AppEvent::UpdateApplied { .. } => Allow,
        AppEvent::CursorMoved(_) | AppEvent::CursorLeft => Allow,
        AppEvent::Window(_) => Allow,
    }
}

/// Return `true` when the event may be dispatched while a blocking dialog
/// is open.
pub(crate) fn modal_guard(event: &AppEvent) -> bool {
    match event {
        AppEvent::Instances(InstancesEvent::Intent(event)) => {
            use InstancesIntent as E;
            !matches!(
                event,
                E::RowPressed(_)
                    | E::RowDoubleClicked(_)
                    | E::ContextMenuRequested(_)
                    | E::MenuActionSelected(_)
                    | E::LaunchSelected
            )
        },
        AppEvent::Sidebar(SidebarEvent::Intent(SidebarIntent::SettingsPressed)) => {
            false
        },
        AppEvent::Chrome(ChromeEvent::Intent(
            ChromeIntent::PlayPressed | ChromeIntent::UpdatePressed,
        )) => false,
        _ => true,
    }
}
