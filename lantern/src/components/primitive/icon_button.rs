use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::widget::image::Handle;
use iced::{
    Color, Element, Event, Length, Point, Rectangle, Renderer, Size, Theme,
    mouse,
};

use super::pointer::{self, PointerOutcome, PressState};
use crate::shared::ui::icons::UPDATE_ICON_SIZE;
use crate::shared::ui::palette;

const CORNER_RADIUS: f32 = 4.0;
const BORDER_WIDTH: f32 = 1.0;
const MISSING_ICON_SIZE: f32 = 16.0;

/// Props for a square icon button.
#[derive(Debug, Clone)]
pub(crate) struct IconButtonProps<Message> {
    /// Icon drawn centered; a white square is drawn when absent.
    pub(crate) icon: Option<Handle>,
    pub(crate) size: f32,
    pub(crate) on_press: Message,
}

/// Render a rounded icon button.
pub(crate) fn view<'a, Message>(
    props: IconButtonProps<Message>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let side = props.size;
    Canvas::new(IconButton { props })
        .width(Length::Fixed(side))
        .height(Length::Fixed(side))
        .into()
}

struct IconButton<Message> {
    props: IconButtonProps<Message>,
}

impl<Message: Clone> canvas::Program<Message> for IconButton<Message> {
    type State = PressState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        match state.handle(event, bounds, cursor) {
            PointerOutcome::Unchanged => None,
            PointerOutcome::Redraw => {
                Some(canvas::Action::request_redraw().and_capture())
            },
            PointerOutcome::Clicked => Some(
                canvas::Action::publish(self.props.on_press.clone())
                    .and_capture(),
            ),
        }
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let size = bounds.size();

        let body = Path::rounded_rectangle(
            Point::ORIGIN,
            size,
            CORNER_RADIUS.into(),
        );
        frame.fill(&body, fill_color(*state));
        frame.stroke(
            &body,
            Stroke::default()
                .with_color(palette::ICON_BUTTON_BORDER)
                .with_width(BORDER_WIDTH),
        );

        match &self.props.icon {
            Some(handle) => {
                frame.draw_image(
                    centered(size, UPDATE_ICON_SIZE as f32),
                    canvas::Image::new(handle.clone()),
                );
            },
            None => {
                let square = centered(size, MISSING_ICON_SIZE);
                frame.fill_rectangle(
                    square.position(),
                    square.size(),
                    Color::WHITE,
                );
            },
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        pointer::interaction(bounds, cursor)
    }
}

fn fill_color(state: PressState) -> Color {
    if state.pressed {
        palette::ICON_BUTTON_PRESSED
    } else if state.hovered {
        palette::ICON_BUTTON_HOVER
    } else {
        palette::ICON_BUTTON_FILL
    }
}

fn centered(size: Size, side: f32) -> Rectangle {
    Rectangle {
        x: (size.width - side) / 2.0,
        y: (size.height - side) / 2.0,
        width: side,
        height: side,
    }
}
