pub(crate) mod cell;
pub(crate) mod errors;
mod event;
pub(crate) mod icon_cache;
pub(crate) mod model;
mod reducer;
pub(crate) mod services;
mod state;
pub(crate) mod view;

pub(crate) use event::{InstancesEffect, InstancesEvent, InstancesIntent};
use iced::Task;
use icon_cache::{IconCache, IconSource};
use model::{ContextMenuState, InstancesViewModel};
pub(crate) use reducer::InstancesCtx;
use state::InstancesState;

/// Instance list widget owning rows, selection, overlays and the icon
/// cache.
pub(crate) struct InstancesWidget {
    state: InstancesState,
}

impl InstancesWidget {
    /// Construct an empty list whose default icon comes from `icons`.
    pub(crate) fn new(icons: &dyn IconSource) -> Self {
        Self {
            state: InstancesState::new(IconCache::new(icons)),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: InstancesIntent,
        ctx: &InstancesCtx,
    ) -> Task<InstancesEvent> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> InstancesViewModel<'_> {
        InstancesViewModel {
            rows: self.state.rows(),
            selected: self.state.selected(),
            pressed: self.state.pressed(),
            context_menu: self.state.context_menu(),
            confirm: self.state.confirm(),
            icon_settings: self.state.icon_settings(),
            error: self.state.error(),
            icons: self.state.icons(),
        }
    }

    /// Resolve icons for rows that have none cached yet.
    pub(crate) fn resolve_icons(&mut self, source: &dyn IconSource) {
        self.state.resolve_icons(source);
    }

    pub(crate) fn context_menu(&self) -> Option<&ContextMenuState> {
        self.state.context_menu()
    }

    /// Return whether a blocking dialog is open.
    pub(crate) fn has_modal(&self) -> bool {
        self.state.has_modal()
    }
}
