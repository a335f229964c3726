use iced::Task;

use super::event::{CarouselEffect, CarouselEvent, CarouselIntent};
use super::state::{CarouselState, DecodeRequest};

/// Reduce a carousel intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut CarouselState,
    event: CarouselIntent,
) -> Task<CarouselEvent> {
    match event {
        CarouselIntent::Start => scan(state),
        CarouselIntent::Refresh => {
            if state.is_stopped() {
                return Task::none();
            }
            scan(state)
        },
        CarouselIntent::Stop => {
            if state.stop() {
                log::info!("screenshot carousel stopped");
            }
            Task::none()
        },
        CarouselIntent::ScanCompleted { generation, paths } => {
            if generation == state.generation() {
                log::info!("found {} screenshots", paths.len());
            }
            decode(state.generation(), state.accept_scan(generation, paths))
        },
        CarouselIntent::ScanFailed {
            generation,
            message,
        } => {
            log::warn!("screenshot scan failed: {message}");
            decode(
                state.generation(),
                state.accept_scan(generation, Vec::new()),
            )
        },
        CarouselIntent::DisplayTick => {
            decode(state.generation(), state.request_next())
        },
        CarouselIntent::FrameTick => {
            state.advance_frame();
            Task::none()
        },
        CarouselIntent::Decoded {
            generation,
            index,
            target,
            screenshot,
        } => {
            if !state.accept_decoded(generation, index, target, *screenshot) {
                log::debug!("dropped stale screenshot decode #{index}");
            }
            Task::none()
        },
        CarouselIntent::DecodeFailed {
            generation,
            index,
            target,
            message,
        } => {
            log::warn!("skipping screenshot: {message}");
            decode(
                state.generation(),
                state.skip_failed(generation, index, target),
            )
        },
    }
}

fn scan(state: &mut CarouselState) -> Task<CarouselEvent> {
    let generation = state.begin_scan();
    Task::done(CarouselEvent::Effect(CarouselEffect::ScanRequested {
        generation,
    }))
}

fn decode(
    generation: u64,
    request: Option<DecodeRequest>,
) -> Task<CarouselEvent> {
    match request {
        Some(DecodeRequest {
            index,
            path,
            target,
        }) => Task::done(CarouselEvent::Effect(
            CarouselEffect::DecodeRequested {
                generation,
                index,
                path,
                target,
            },
        )),
        None => Task::none(),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use iced::widget::image::Handle;

    use crate::widgets::carousel::model::{DecodeTarget, Screenshot};
    use crate::widgets::carousel::{CarouselIntent, CarouselWidget};

    const ALPHA_STEP: f32 = 16.0 / 1000.0;

    fn paths(count: usize) -> Vec<PathBuf> {
        (0..count)
            .map(|index| PathBuf::from(format!("/shots/{index}.png")))
            .collect()
    }

    fn screenshot(index: usize) -> Box<Screenshot> {
        Box::new(Screenshot {
            path: PathBuf::from(format!("/shots/{index}.png")),
            handle: Handle::from_rgba(1, 1, vec![0, 0, 0, 255]),
            width: 1,
            height: 1,
        })
    }

    /// Start the widget and deliver a scan of `count` screenshots with the
    /// first one decoded.
    fn playing(count: usize) -> CarouselWidget {
        let mut widget = CarouselWidget::new(ALPHA_STEP);
        let _task = widget.reduce(CarouselIntent::Start);
        let generation = widget.state.generation();
        let _task = widget.reduce(CarouselIntent::ScanCompleted {
            generation,
            paths: paths(count),
        });
        if count > 0 {
            let _task = widget.reduce(CarouselIntent::Decoded {
                generation,
                index: 0,
                target: DecodeTarget::Initial,
                screenshot: screenshot(0),
            });
        }
        widget
    }

    fn transition_to(widget: &mut CarouselWidget, index: usize) {
        let _task = widget.reduce(CarouselIntent::DisplayTick);
        let _task = widget.reduce(CarouselIntent::Decoded {
            generation: widget.state.generation(),
            index,
            target: DecodeTarget::Next,
            screenshot: screenshot(index),
        });
    }

    fn run_frames(widget: &mut CarouselWidget) -> Vec<f32> {
        let mut alphas = Vec::new();
        while widget.is_transitioning() {
            let _task = widget.reduce(CarouselIntent::FrameTick);
            alphas.push(widget.state.alpha());
            assert!(alphas.len() < 1000, "transition never finished");
        }
        alphas
    }

    #[test]
    fn given_empty_scan_when_completed_then_nothing_is_shown_or_played() {
        let widget = playing(0);

        assert!(widget.vm().current.is_none());
        assert!(!widget.is_playing());
        assert!(!widget.is_transitioning());
    }

    #[test]
    fn given_single_screenshot_when_display_ticks_then_it_never_transitions() {
        let mut widget = playing(1);

        for _ in 0..5 {
            let _task = widget.reduce(CarouselIntent::DisplayTick);
        }

        assert!(widget.vm().current.is_some());
        assert!(!widget.is_playing());
        assert!(!widget.is_transitioning());
    }

    #[test]
    fn given_running_transition_when_frames_tick_then_alpha_is_monotone_and_lands_on_one()
     {
        let mut widget = playing(3);
        transition_to(&mut widget, 1);
        assert_eq!(widget.state.alpha(), 0.0);

        let alphas = run_frames(&mut widget);

        assert!(alphas.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(alphas.last().copied(), Some(1.0));
        assert_eq!(widget.state.current_index(), 1);
        assert!(widget.vm().next.is_none());
    }

    #[test]
    fn given_last_screenshot_shown_when_transition_completes_then_index_wraps_to_zero()
     {
        let mut widget = playing(2);
        transition_to(&mut widget, 1);
        run_frames(&mut widget);

        let _task = widget.reduce(CarouselIntent::DisplayTick);
        let generation = widget.state.generation();
        let _task = widget.reduce(CarouselIntent::Decoded {
            generation,
            index: 0,
            target: DecodeTarget::Next,
            screenshot: screenshot(0),
        });
        run_frames(&mut widget);

        assert_eq!(widget.state.current_index(), 0);
    }

    #[test]
    fn given_transition_in_flight_when_display_ticks_then_request_is_ignored() {
        let mut widget = playing(3);
        transition_to(&mut widget, 1);
        let _task = widget.reduce(CarouselIntent::FrameTick);
        let alpha = widget.state.alpha();

        let _task = widget.reduce(CarouselIntent::DisplayTick);

        assert!(!widget.state.is_decode_pending());
        assert_eq!(widget.state.alpha(), alpha);
    }

    #[test]
    fn given_failed_next_decode_when_reduced_then_index_advances_without_transition()
     {
        let mut widget = playing(3);
        let _task = widget.reduce(CarouselIntent::DisplayTick);

        let _task = widget.reduce(CarouselIntent::DecodeFailed {
            generation: widget.state.generation(),
            index: 1,
            target: DecodeTarget::Next,
            message: String::from("corrupt"),
        });

        assert_eq!(widget.state.current_index(), 1);
        assert!(!widget.is_transitioning());
    }

    #[test]
    fn given_stale_scan_when_refresh_started_then_old_result_is_discarded() {
        let mut widget = CarouselWidget::new(ALPHA_STEP);
        let _task = widget.reduce(CarouselIntent::Start);
        let stale = widget.state.generation();
        let _task = widget.reduce(CarouselIntent::Refresh);

        let _task = widget.reduce(CarouselIntent::ScanCompleted {
            generation: stale,
            paths: paths(4),
        });

        assert_eq!(widget.state.len(), 0);
        assert!(widget.state.is_scanning());
    }

    #[test]
    fn given_stop_before_scan_completes_when_result_arrives_then_it_is_ignored()
     {
        let mut widget = CarouselWidget::new(ALPHA_STEP);
        let _task = widget.reduce(CarouselIntent::Start);
        let generation = widget.state.generation();

        let _task = widget.reduce(CarouselIntent::Stop);
        let _task = widget.reduce(CarouselIntent::ScanCompleted {
            generation,
            paths: paths(4),
        });

        assert_eq!(widget.state.len(), 0);
        assert!(!widget.is_playing());
    }

    #[test]
    fn given_transition_when_stopped_twice_then_alpha_is_frozen() {
        let mut widget = playing(3);
        transition_to(&mut widget, 1);
        for _ in 0..10 {
            let _task = widget.reduce(CarouselIntent::FrameTick);
        }
        let alpha = widget.state.alpha();

        let _task = widget.reduce(CarouselIntent::Stop);
        let _task = widget.reduce(CarouselIntent::Stop);
        let _task = widget.reduce(CarouselIntent::FrameTick);

        assert_eq!(widget.state.alpha(), alpha);
        assert!(widget.state.is_stopped());
        assert!(widget.vm().next.is_some());
    }

    #[test]
    fn given_failed_initial_decode_when_reduced_then_following_entry_is_tried()
     {
        let mut widget = CarouselWidget::new(ALPHA_STEP);
        let _task = widget.reduce(CarouselIntent::Start);
        let generation = widget.state.generation();
        let _task = widget.reduce(CarouselIntent::ScanCompleted {
            generation,
            paths: paths(2),
        });

        let _task = widget.reduce(CarouselIntent::DecodeFailed {
            generation,
            index: 0,
            target: DecodeTarget::Initial,
            message: String::from("corrupt"),
        });
        let _task = widget.reduce(CarouselIntent::Decoded {
            generation,
            index: 1,
            target: DecodeTarget::Initial,
            screenshot: screenshot(1),
        });

        assert_eq!(widget.state.current_index(), 1);
        assert!(widget.vm().current.is_some());
    }

    #[test]
    fn given_refresh_landing_mid_crossfade_when_transition_completes_then_index_is_in_range()
     {
        let mut widget = playing(6);
        transition_to(&mut widget, 5);
        let _task = widget.reduce(CarouselIntent::FrameTick);

        let _task = widget.reduce(CarouselIntent::Refresh);
        let generation = widget.state.generation();
        let _task = widget.reduce(CarouselIntent::ScanCompleted {
            generation,
            paths: paths(2),
        });
        run_frames(&mut widget);

        assert_eq!(widget.state.len(), 2);
        assert!(widget.state.current_index() < widget.state.len());
    }
}
