use iced::{Point, Rectangle, Task};

use super::event::{SidebarEffect, SidebarEvent, SidebarIntent};
use super::model::Direction;
use super::state::SidebarState;

/// Read-only context for sidebar reduction.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SidebarCtx {
    /// Last known pointer position in window coordinates.
    pub(crate) cursor: Option<Point>,
    /// Current on-screen sidebar bounds.
    pub(crate) bounds: Option<Rectangle>,
}

impl SidebarCtx {
    fn pointer_inside(&self, position: Option<Point>) -> bool {
        match (position, self.bounds) {
            (Some(position), Some(bounds)) => bounds.contains(position),
            _ => false,
        }
    }
}

/// Reduce a sidebar intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut SidebarState,
    event: SidebarIntent,
    ctx: &SidebarCtx,
) -> Task<SidebarEvent> {
    match event {
        SidebarIntent::PointerEntered => {
            state.begin(Direction::Expand);
            Task::none()
        },
        SidebarIntent::PointerExited => {
            // Interior controls report exits while the pointer is still
            // over the sidebar.
            if !ctx.pointer_inside(ctx.cursor) {
                state.begin(Direction::Collapse);
            }
            Task::none()
        },
        SidebarIntent::PointerMoved { position } => {
            if state.is_expanded() && !ctx.pointer_inside(Some(position)) {
                state.begin(Direction::Collapse);
            }
            Task::none()
        },
        SidebarIntent::PointerLeftWindow => {
            state.begin(Direction::Collapse);
            Task::none()
        },
        SidebarIntent::Tick => {
            if state.tick() {
                Task::done(SidebarEvent::Effect(SidebarEffect::Relayout))
            } else {
                Task::none()
            }
        },
        SidebarIntent::SettingsPressed => {
            Task::done(SidebarEvent::Effect(SidebarEffect::OpenSettings))
        },
    }
}

#[cfg(test)]
mod tests {
    use iced::{Point, Rectangle};

    use super::SidebarCtx;
    use crate::widgets::sidebar::model::{
        ANIMATION_STEP, Animation, COLLAPSED_WIDTH, EXPANDED_WIDTH,
    };
    use crate::widgets::sidebar::{SidebarIntent, SidebarWidget};

    fn ctx_with_cursor(cursor: Option<Point>, width: f32) -> SidebarCtx {
        SidebarCtx {
            cursor,
            bounds: Some(Rectangle {
                x: 10.0,
                y: 10.0,
                width,
                height: 540.0,
            }),
        }
    }

    fn tick_until_idle(widget: &mut SidebarWidget) -> usize {
        let mut ticks = 0;
        while widget.is_animating() {
            let _task =
                widget.reduce(SidebarIntent::Tick, &SidebarCtx::default());
            ticks += 1;
            assert!(ticks < 100, "animation never settled");
        }
        ticks
    }

    #[test]
    fn given_collapsed_sidebar_when_pointer_enters_then_width_reaches_expanded_without_overshoot()
     {
        let mut widget = SidebarWidget::new();
        let _task = widget
            .reduce(SidebarIntent::PointerEntered, &SidebarCtx::default());

        let mut widths = vec![widget.vm().width];
        while widget.is_animating() {
            let _task =
                widget.reduce(SidebarIntent::Tick, &SidebarCtx::default());
            widths.push(widget.vm().width);
        }

        let expected_ticks =
            ((EXPANDED_WIDTH - COLLAPSED_WIDTH) / ANIMATION_STEP).ceil();
        assert_eq!(widths.len() - 1, expected_ticks as usize);
        assert_eq!(widget.vm().width, EXPANDED_WIDTH);
        assert!(widths.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(widths.iter().all(|width| *width <= EXPANDED_WIDTH));
    }

    #[test]
    fn given_expanded_sidebar_when_pointer_enters_again_then_no_animation_starts()
     {
        let mut widget = SidebarWidget::new();
        let _task = widget
            .reduce(SidebarIntent::PointerEntered, &SidebarCtx::default());
        tick_until_idle(&mut widget);

        let _task = widget
            .reduce(SidebarIntent::PointerEntered, &SidebarCtx::default());

        assert!(!widget.is_animating());
        assert_eq!(widget.state.animation(), Animation::Idle);
        assert_eq!(widget.vm().width, EXPANDED_WIDTH);
    }

    #[test]
    fn given_enter_then_immediate_exit_when_no_tick_ran_then_sidebar_stays_collapsed()
     {
        let mut widget = SidebarWidget::new();
        let outside = ctx_with_cursor(Some(Point::new(400.0, 300.0)), 92.0);

        let _task = widget
            .reduce(SidebarIntent::PointerEntered, &SidebarCtx::default());
        let _task = widget.reduce(SidebarIntent::PointerExited, &outside);

        assert!(!widget.is_animating());
        assert!(!widget.vm().expanded);
        assert_eq!(widget.vm().width, COLLAPSED_WIDTH);
    }

    #[test]
    fn given_exit_reported_while_pointer_inside_bounds_when_reduced_then_sidebar_keeps_expanding()
     {
        let mut widget = SidebarWidget::new();
        let inside = ctx_with_cursor(Some(Point::new(50.0, 300.0)), 92.0);

        let _task = widget
            .reduce(SidebarIntent::PointerEntered, &SidebarCtx::default());
        let _task = widget.reduce(SidebarIntent::PointerExited, &inside);

        assert!(widget.vm().expanded);
        assert!(widget.is_animating());
    }

    #[test]
    fn given_expanding_sidebar_when_pointer_exits_midway_then_it_collapses_from_current_width()
     {
        let mut widget = SidebarWidget::new();
        let _task = widget
            .reduce(SidebarIntent::PointerEntered, &SidebarCtx::default());
        for _ in 0..3 {
            let _task =
                widget.reduce(SidebarIntent::Tick, &SidebarCtx::default());
        }
        assert_eq!(widget.vm().width, COLLAPSED_WIDTH + ANIMATION_STEP * 3.0);

        let _task =
            widget.reduce(SidebarIntent::PointerLeftWindow, &SidebarCtx::default());
        let ticks = tick_until_idle(&mut widget);

        assert_eq!(ticks, 3);
        assert_eq!(widget.vm().width, COLLAPSED_WIDTH);
    }

    #[test]
    fn given_expanded_sidebar_when_pointer_moves_outside_bounds_then_it_collapses()
     {
        let mut widget = SidebarWidget::new();
        let _task = widget
            .reduce(SidebarIntent::PointerEntered, &SidebarCtx::default());
        tick_until_idle(&mut widget);
        let ctx = ctx_with_cursor(None, EXPANDED_WIDTH);

        let _task = widget.reduce(
            SidebarIntent::PointerMoved {
                position: Point::new(600.0, 200.0),
            },
            &ctx,
        );

        assert!(!widget.vm().expanded);
        assert!(widget.is_animating());
    }

    #[test]
    fn given_idle_sidebar_when_ticked_then_width_is_unchanged() {
        let mut widget = SidebarWidget::new();

        let _task = widget.reduce(SidebarIntent::Tick, &SidebarCtx::default());

        assert_eq!(widget.vm().width, COLLAPSED_WIDTH);
        assert!(!widget.is_animating());
    }
}
