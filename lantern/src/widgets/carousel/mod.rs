pub(crate) mod errors;
mod event;
pub(crate) mod model;
mod reducer;
pub(crate) mod services;
mod state;
pub(crate) mod view;

pub(crate) use event::{CarouselEffect, CarouselEvent, CarouselIntent};
use iced::Task;
pub(crate) use model::CarouselViewModel;
use state::CarouselState;

/// Background screenshot carousel.
pub(crate) struct CarouselWidget {
    state: CarouselState,
}

impl CarouselWidget {
    /// Construct an idle carousel advancing crossfades by `alpha_step` per
    /// frame.
    pub(crate) fn new(alpha_step: f32) -> Self {
        Self {
            state: CarouselState::new(alpha_step),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: CarouselIntent,
    ) -> Task<CarouselEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Build a read-only view model for painting.
    pub(crate) fn vm(&self) -> CarouselViewModel<'_> {
        CarouselViewModel {
            current: self.state.current(),
            next: self.state.next(),
            alpha: self.state.alpha(),
        }
    }

    /// Return whether display ticks are needed.
    pub(crate) fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    /// Return whether crossfade frame ticks are needed.
    pub(crate) fn is_transitioning(&self) -> bool {
        !self.state.is_stopped() && self.state.is_transitioning()
    }

    /// Number of screenshots in the current sequence.
    pub(crate) fn len(&self) -> usize {
        self.state.len()
    }
}
