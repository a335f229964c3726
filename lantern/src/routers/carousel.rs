use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::carousel::services::{decode_screenshot, scan_screenshots};
use crate::widgets::carousel::{
    CarouselEffect, CarouselEvent, CarouselIntent,
};

/// Route a carousel event through widget reduction or background work.
pub(crate) fn route(app: &mut App, event: CarouselEvent) -> Task<AppEvent> {
    match event {
        CarouselEvent::Intent(event) => route_intent(app, event),
        CarouselEvent::Effect(effect) => route_effect(app, effect),
    }
}

fn route_intent(app: &mut App, event: CarouselIntent) -> Task<AppEvent> {
    app.widgets.carousel.reduce(event).map(AppEvent::Carousel)
}

fn route_effect(app: &App, effect: CarouselEffect) -> Task<AppEvent> {
    match effect {
        CarouselEffect::ScanRequested { generation } => {
            let base_dir = app.config.base_dir.clone();
            Task::perform(
                async move { scan_screenshots(&base_dir) },
                move |result| {
                    let intent = match result {
                        Ok(paths) => {
                            CarouselIntent::ScanCompleted { generation, paths }
                        },
                        Err(err) => CarouselIntent::ScanFailed {
                            generation,
                            message: err.to_string(),
                        },
                    };
                    AppEvent::Carousel(CarouselEvent::Intent(intent))
                },
            )
        },
        CarouselEffect::DecodeRequested {
            generation,
            index,
            path,
            target,
        } => Task::perform(
            async move { decode_screenshot(&path) },
            move |result| {
                let intent = match result {
                    Ok(screenshot) => CarouselIntent::Decoded {
                        generation,
                        index,
                        target,
                        screenshot: Box::new(screenshot),
                    },
                    Err(err) => CarouselIntent::DecodeFailed {
                        generation,
                        index,
                        target,
                        message: err.to_string(),
                    },
                };
                AppEvent::Carousel(CarouselEvent::Intent(intent))
            },
        ),
    }
}
