use iced::widget::canvas::{self, Canvas, Frame, Geometry};
use iced::{Element, Length, Point, Rectangle, Renderer, Size, Theme, mouse};
use lantern_ui_paint::{Viewport, cover_fit_size};

use super::model::{CarouselViewModel, Screenshot};
use crate::shared::ui::palette;

/// Render the full-window screenshot background.
pub(crate) fn view<'a, Message: 'a>(
    vm: CarouselViewModel<'a>,
) -> Element<'a, Message> {
    Canvas::new(CarouselCanvas { vm })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

struct CarouselCanvas<'a> {
    vm: CarouselViewModel<'a>,
}

impl<Message> canvas::Program<Message> for CarouselCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let size = bounds.size();
        frame.fill_rectangle(Point::ORIGIN, size, palette::CAROUSEL_FALLBACK);

        if let Some(current) = self.vm.current {
            draw_cover(&mut frame, current, size, self.vm.current_opacity());
        }
        if let Some(next) = self.vm.next {
            draw_cover(&mut frame, next, size, self.vm.alpha);
        }

        frame.fill_rectangle(Point::ORIGIN, size, palette::CAROUSEL_OVERLAY);
        vec![frame.into_geometry()]
    }
}

fn draw_cover(
    frame: &mut Frame,
    screenshot: &Screenshot,
    size: Size,
    opacity: f32,
) {
    let geometry = cover_fit_size(
        screenshot.width,
        screenshot.height,
        Viewport::from(size),
    );
    if geometry.width <= 0.0 || geometry.height <= 0.0 {
        return;
    }
    frame.draw_image(
        geometry.at(Point::ORIGIN),
        canvas::Image::new(screenshot.handle.clone()).opacity(opacity),
    );
}
