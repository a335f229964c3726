pub(crate) const COLLAPSED_WIDTH: f32 = 92.0;
pub(crate) const EXPANDED_WIDTH: f32 = 234.0;
pub(crate) const ANIMATION_STEP: f32 = 15.0;
pub(crate) const ANIMATION_TICK_MS: u64 = 10;
/// Above this width the settings button shows its label.
pub(crate) const LABEL_MIN_WIDTH: f32 = 100.0;

/// Which way the sidebar width is heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Expand,
    Collapse,
}

/// Width animation state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Animation {
    Idle,
    Animating {
        direction: Direction,
        start: f32,
        target: f32,
    },
}

/// Result of advancing an animation by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Step {
    pub(crate) width: f32,
    pub(crate) animation: Animation,
    pub(crate) done: bool,
}

/// Advance `animation` by one tick of `step_size` pixels from `width`.
///
/// The width moves toward the target and never passes it. Reaching the
/// target returns an idle animation with `done` set.
pub(crate) fn step(width: f32, animation: Animation, step_size: f32) -> Step {
    let Animation::Animating { target, .. } = animation else {
        return Step {
            width,
            animation,
            done: true,
        };
    };

    let next = if width < target {
        (width + step_size).min(target)
    } else {
        (width - step_size).max(target)
    };

    if next == target {
        Step {
            width: next,
            animation: Animation::Idle,
            done: true,
        }
    } else {
        Step {
            width: next,
            animation,
            done: false,
        }
    }
}

/// Read-only sidebar snapshot for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SidebarViewModel {
    pub(crate) width: f32,
    pub(crate) expanded: bool,
    pub(crate) is_animating: bool,
    pub(crate) show_labels: bool,
}

#[cfg(test)]
mod tests {
    use super::{ANIMATION_STEP, Animation, Direction, step};

    #[test]
    fn given_idle_animation_when_stepping_then_width_is_unchanged() {
        let result = step(92.0, Animation::Idle, ANIMATION_STEP);

        assert_eq!(result.width, 92.0);
        assert!(result.done);
    }

    #[test]
    fn given_last_partial_step_when_stepping_then_width_lands_on_target() {
        let animation = Animation::Animating {
            direction: Direction::Expand,
            start: 92.0,
            target: 234.0,
        };

        let result = step(227.0, animation, ANIMATION_STEP);

        assert_eq!(result.width, 234.0);
        assert_eq!(result.animation, Animation::Idle);
        assert!(result.done);
    }

    #[test]
    fn given_collapse_animation_when_stepping_then_width_shrinks() {
        let animation = Animation::Animating {
            direction: Direction::Collapse,
            start: 234.0,
            target: 92.0,
        };

        let result = step(234.0, animation, ANIMATION_STEP);

        assert_eq!(result.width, 219.0);
        assert_eq!(result.animation, animation);
        assert!(!result.done);
    }
}
