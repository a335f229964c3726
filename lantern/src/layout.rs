use iced::{Rectangle, Size};
use lantern_ui_paint::Viewport;

pub(crate) const SIDEBAR_MARGIN: f32 = 10.0;
pub(crate) const BOTTOM_BAR_HEIGHT: f32 = 80.0;
pub(crate) const PLAY_BUTTON_WIDTH: f32 = 300.0;
pub(crate) const PLAY_BUTTON_HEIGHT: f32 = 70.0;
pub(crate) const UPDATE_BUTTON_SIZE: f32 = 40.0;
const UPDATE_BUTTON_RIGHT_OFFSET: f32 = 60.0;

/// Full-window surfaces, listed bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Layer {
    Background,
    Content,
    Controls,
}

pub(crate) const LAYER_ORDER: [Layer; 3] =
    [Layer::Background, Layer::Content, Layer::Controls];

/// Window-space bounds of every surface and anchored control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CompositorLayout {
    pub(crate) viewport: Viewport,
    pub(crate) background: Rectangle,
    pub(crate) content: Rectangle,
    pub(crate) controls: Rectangle,
    /// Absent when the window is too short to fit the sidebar.
    pub(crate) sidebar: Option<Rectangle>,
    pub(crate) bottom_bar: Rectangle,
    pub(crate) play_button: Rectangle,
    pub(crate) update_button: Rectangle,
}

impl CompositorLayout {
    /// Bounds of `layer`; every layer covers the whole window.
    pub(crate) fn layer_bounds(&self, layer: Layer) -> Rectangle {
        match layer {
            Layer::Background => self.background,
            Layer::Content => self.content,
            Layer::Controls => self.controls,
        }
    }

    /// Play button bounds relative to the bottom bar origin.
    pub(crate) fn play_button_in_bar(&self) -> Rectangle {
        relative_to(self.play_button, self.bottom_bar)
    }

    /// Update button bounds relative to the bottom bar origin.
    pub(crate) fn update_button_in_bar(&self) -> Rectangle {
        relative_to(self.update_button, self.bottom_bar)
    }
}

/// Compute the layout for `viewport` with the sidebar at `sidebar_width`.
///
/// Returns `None` until the window reports a usable size.
pub(crate) fn compute(
    viewport: Viewport,
    sidebar_width: f32,
) -> Option<CompositorLayout> {
    if !viewport.is_valid() {
        return None;
    }

    let Viewport { width, height } = viewport;
    let full = Rectangle {
        x: 0.0,
        y: 0.0,
        width,
        height,
    };

    let sidebar_height = height - SIDEBAR_MARGIN * 2.0;
    let sidebar = (sidebar_height > 0.0).then_some(Rectangle {
        x: SIDEBAR_MARGIN,
        y: SIDEBAR_MARGIN,
        width: sidebar_width,
        height: sidebar_height,
    });

    let bottom_bar = Rectangle {
        x: 0.0,
        y: height - BOTTOM_BAR_HEIGHT,
        width,
        height: BOTTOM_BAR_HEIGHT,
    };
    let play_button = Rectangle {
        x: (width - PLAY_BUTTON_WIDTH) / 2.0,
        y: bottom_bar.y + (BOTTOM_BAR_HEIGHT - PLAY_BUTTON_HEIGHT) / 2.0,
        width: PLAY_BUTTON_WIDTH,
        height: PLAY_BUTTON_HEIGHT,
    };
    let update_button = Rectangle {
        x: width - UPDATE_BUTTON_RIGHT_OFFSET,
        y: bottom_bar.y + (BOTTOM_BAR_HEIGHT - UPDATE_BUTTON_SIZE) / 2.0,
        width: UPDATE_BUTTON_SIZE,
        height: UPDATE_BUTTON_SIZE,
    };

    Some(CompositorLayout {
        viewport,
        background: full,
        content: full,
        controls: full,
        sidebar,
        bottom_bar,
        play_button,
        update_button,
    })
}

/// Owner of the current window layout, rebuilt on every resize and sidebar
/// width change.
#[derive(Debug, Default)]
pub(crate) struct LayeredCompositor {
    viewport: Option<Viewport>,
    layout: Option<CompositorLayout>,
}

impl LayeredCompositor {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Compositor laid out for `size` before the window reports its own.
    pub(crate) fn with_window_size(size: Size, sidebar_width: f32) -> Self {
        let mut compositor = Self::new();
        compositor.resize(size, sidebar_width);
        compositor
    }

    /// Record a new window size and recompute the layout.
    pub(crate) fn resize(&mut self, size: Size, sidebar_width: f32) -> bool {
        self.viewport = Some(Viewport::from(size));
        self.relayout(sidebar_width)
    }

    /// Recompute the layout for the last known window size.
    ///
    /// Returns `false` and keeps the previous layout while no valid size is
    /// known.
    pub(crate) fn relayout(&mut self, sidebar_width: f32) -> bool {
        let Some(viewport) = self.viewport else {
            return false;
        };
        match compute(viewport, sidebar_width) {
            Some(layout) => {
                self.layout = Some(layout);
                true
            },
            None => false,
        }
    }

    pub(crate) fn layout(&self) -> Option<&CompositorLayout> {
        self.layout.as_ref()
    }

    pub(crate) fn sidebar_bounds(&self) -> Option<Rectangle> {
        self.layout.and_then(|layout| layout.sidebar)
    }
}

fn relative_to(rect: Rectangle, origin: Rectangle) -> Rectangle {
    Rectangle {
        x: rect.x - origin.x,
        y: rect.y - origin.y,
        ..rect
    }
}
