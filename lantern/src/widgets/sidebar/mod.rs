mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{SidebarEffect, SidebarEvent, SidebarIntent};
use iced::Task;
use model::LABEL_MIN_WIDTH;
pub(crate) use model::SidebarViewModel;
pub(crate) use reducer::SidebarCtx;
use state::SidebarState;

/// Collapsible sidebar widget owning its width animation.
pub(crate) struct SidebarWidget {
    state: SidebarState,
}

impl SidebarWidget {
    /// Construct a collapsed sidebar.
    pub(crate) fn new() -> Self {
        Self {
            state: SidebarState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: SidebarIntent,
        ctx: &SidebarCtx,
    ) -> Task<SidebarEvent> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> SidebarViewModel {
        let width = self.state.current_width();
        SidebarViewModel {
            width,
            expanded: self.state.is_expanded(),
            is_animating: self.state.is_animating(),
            show_labels: width > LABEL_MIN_WIDTH,
        }
    }

    pub(crate) fn width(&self) -> f32 {
        self.state.current_width()
    }

    /// Return whether animation ticks are needed.
    pub(crate) fn is_animating(&self) -> bool {
        self.state.is_animating()
    }
}
