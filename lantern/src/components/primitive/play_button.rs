use iced::alignment::Vertical;
use iced::widget::canvas::{
    self, Canvas, Frame, Geometry, Text as CanvasText, gradient,
};
use iced::{
    Alignment, Color, Element, Event, Length, Pixels, Point, Rectangle,
    Renderer, Size, Theme, mouse,
};
use lantern_ui_paint::{BevelSpec, bevel_rects};

use super::pointer::{self, PointerOutcome, PressState};
use crate::shared::ui::fonts::FontFace;
use crate::shared::ui::palette;

const PLAY_BEVEL: BevelSpec = BevelSpec {
    border: 3.0,
    fill_inset: 3.0,
    edge: 2.0,
};
const TEXT_SHADOW_OFFSET: f32 = 2.0;

/// Props for the beveled launch button.
#[derive(Debug, Clone)]
pub(crate) struct PlayButtonProps<Message> {
    pub(crate) label: String,
    pub(crate) font: FontFace,
    pub(crate) size: Size,
    pub(crate) on_press: Message,
}

/// Render the launch button.
pub(crate) fn view<'a, Message>(
    props: PlayButtonProps<Message>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let size = props.size;
    Canvas::new(PlayButton { props })
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height))
        .into()
}

struct PlayButton<Message> {
    props: PlayButtonProps<Message>,
}

impl<Message: Clone> canvas::Program<Message> for PlayButton<Message> {
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
        let rects = bevel_rects(
            Rectangle::with_size(bounds.size()),
            PLAY_BEVEL,
        );
        let (top, bottom) = gradient_colors(*state);
        let (top_left, bottom_right) = edge_colors(*state);

        let fill = rects.fill;
        let linear = gradient::Linear::new(
            Point::new(fill.x, fill.y),
            Point::new(fill.x, fill.y + fill.height),
        )
        .add_stop(0.0, top)
        .add_stop(1.0, bottom);
        frame.fill_rectangle(
            fill.position(),
            fill.size(),
            canvas::Fill {
                style: canvas::Style::Gradient(canvas::Gradient::Linear(
                    linear,
                )),
                ..Default::default()
            },
        );

        for rect in rects.outer {
            frame.fill_rectangle(
                rect.position(),
                rect.size(),
                palette::PLAY_OUTER_EDGE,
            );
        }
        for rect in rects.highlight {
            frame.fill_rectangle(rect.position(), rect.size(), top_left);
        }
        for rect in rects.shadow {
            frame.fill_rectangle(rect.position(), rect.size(), bottom_right);
        }

        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let shadow_at = Point::new(
            center.x + TEXT_SHADOW_OFFSET,
            center.y + TEXT_SHADOW_OFFSET,
        );
        frame.fill_text(self.label(shadow_at, palette::PLAY_TEXT_SHADOW));
        frame.fill_text(self.label(center, palette::TEXT_PRIMARY));

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

impl<Message> PlayButton<Message> {
    fn label(&self, position: Point, color: Color) -> CanvasText {
        CanvasText {
            content: self.props.label.clone(),
            position,
            color,
            size: Pixels(self.props.font.size),
            font: self.props.font.font,
            align_x: Alignment::Center.into(),
            align_y: Vertical::Center,
            ..Default::default()
        }
    }
}

fn gradient_colors(state: PressState) -> (Color, Color) {
    if state.pressed {
        palette::PLAY_GRADIENT_PRESSED
    } else if state.hovered {
        palette::PLAY_GRADIENT_HOVER
    } else {
        palette::PLAY_GRADIENT
    }
}

fn edge_colors(state: PressState) -> (Color, Color) {
    if state.pressed {
        (palette::PLAY_SHADOW, palette::PLAY_HIGHLIGHT)
    } else {
        (palette::PLAY_HIGHLIGHT, palette::PLAY_SHADOW)
    }
}

#[cfg(test)]
mod tests {
    use super::{PressState, edge_colors, gradient_colors};
    use crate::shared::ui::palette;

    #[test]
    fn given_pressed_and_hovered_when_picking_gradient_then_pressed_wins() {
        let state = PressState {
            hovered: true,
            pressed: true,
        };

        assert_eq!(gradient_colors(state), palette::PLAY_GRADIENT_PRESSED);
    }

    #[test]
    fn given_hover_only_when_picking_gradient_then_hover_gradient_is_used() {
        let state = PressState {
            hovered: true,
            pressed: false,
        };

        assert_eq!(gradient_colors(state), palette::PLAY_GRADIENT_HOVER);
        assert_eq!(
            gradient_colors(PressState::default()),
            palette::PLAY_GRADIENT
        );
    }

    #[test]
    fn given_pressed_state_when_picking_edges_then_highlight_and_shadow_swap() {
        let idle = edge_colors(PressState::default());
        let pressed = edge_colors(PressState {
            hovered: true,
            pressed: true,
        });

        assert_eq!(idle, (palette::PLAY_HIGHLIGHT, palette::PLAY_SHADOW));
        assert_eq!(pressed, (idle.1, idle.0));
    }
}
