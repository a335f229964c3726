//! Hover and press tracking shared by the canvas buttons.

use iced::{Event, Rectangle, mouse};

/// Pointer state of a canvas button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct PressState {
    pub(super) hovered: bool,
    pub(super) pressed: bool,
}

/// What a pointer event means for the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum PointerOutcome {
    Unchanged,
    Redraw,
    /// Pressed and released over the button.
    Clicked,
}

impl PressState {
    /// Fold `event` into the state.
    ///
    /// A click fires only when both press and release land inside
    /// `bounds`.
    pub(super) fn handle(
        &mut self,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> PointerOutcome {
        let over = cursor.is_over(bounds);
        match event {
            Event::Mouse(mouse::Event::CursorMoved { .. })
            | Event::Mouse(mouse::Event::CursorEntered) => {
                self.set_hovered(over)
            },
            Event::Mouse(mouse::Event::CursorLeft) => self.set_hovered(false),
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
                if over =>
            {
                self.hovered = true;
                self.pressed = true;
                PointerOutcome::Redraw
            },
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
                if self.pressed =>
            {
                self.pressed = false;
                if over {
                    PointerOutcome::Clicked
                } else {
                    PointerOutcome::Redraw
                }
            },
            _ => PointerOutcome::Unchanged,
        }
    }

    fn set_hovered(&mut self, hovered: bool) -> PointerOutcome {
        if self.hovered == hovered {
            return PointerOutcome::Unchanged;
        }
        self.hovered = hovered;
        PointerOutcome::Redraw
    }
}

/// Pointer cursor over clickable bounds.
pub(super) fn interaction(
    bounds: Rectangle,
    cursor: mouse::Cursor,
) -> mouse::Interaction {
    if cursor.is_over(bounds) {
        mouse::Interaction::Pointer
    } else {
        mouse::Interaction::default()
    }
}
