use super::model::{
    ANIMATION_STEP, Animation, COLLAPSED_WIDTH, Direction, EXPANDED_WIDTH,
    step,
};

/// Internal sidebar width state.
#[derive(Debug)]
pub(super) struct SidebarState {
    current_width: f32,
    collapsed_width: f32,
    expanded_width: f32,
    /// Width the sidebar is resting at or heading to.
    expanded: bool,
    animation: Animation,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new(COLLAPSED_WIDTH, EXPANDED_WIDTH)
    }
}

impl SidebarState {
    pub(super) fn new(collapsed_width: f32, expanded_width: f32) -> Self {
        Self {
            current_width: collapsed_width,
            collapsed_width,
            expanded_width,
            expanded: false,
            animation: Animation::Idle,
        }
    }

    pub(super) fn current_width(&self) -> f32 {
        self.current_width
    }

    pub(super) fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub(super) fn is_animating(&self) -> bool {
        matches!(self.animation, Animation::Animating { .. })
    }

    #[cfg(test)]
    pub(super) fn animation(&self) -> Animation {
        self.animation
    }

    /// Head toward the width for `direction`, replacing any running
    /// animation.
    ///
    /// Returns `false` when nothing changed: either the sidebar already
    /// heads that way or it already rests at the target width.
    pub(super) fn begin(&mut self, direction: Direction) -> bool {
        let expand = direction == Direction::Expand;
        if self.expanded == expand {
            return false;
        }

        self.expanded = expand;
        let target = self.target_width();
        if self.current_width == target {
            self.animation = Animation::Idle;
            return false;
        }

        self.animation = Animation::Animating {
            direction,
            start: self.current_width,
            target,
        };
        true
    }

    /// Advance a running animation by one tick.
    ///
    /// Returns `true` when the width changed.
    pub(super) fn tick(&mut self) -> bool {
        if !self.is_animating() {
            return false;
        }

        let previous = self.current_width;
        let next = step(self.current_width, self.animation, ANIMATION_STEP);
        self.current_width = next
            .width
            .clamp(self.collapsed_width, self.expanded_width);
        self.animation = next.animation;
        if next.done {
            log::debug!("sidebar settled at {}px", self.current_width);
        }

        self.current_width != previous
    }

    fn target_width(&self) -> f32 {
        if self.expanded {
            self.expanded_width
        } else {
            self.collapsed_width
        }
    }
}
