use iced::Rectangle;

/// Thicknesses of a blocky bevel box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BevelSpec {
    /// Width of the dark outer edge.
    pub border: f32,
    /// Distance from the outer bounds to the fill rectangle.
    pub fill_inset: f32,
    /// Width of the highlight and shadow strips inside the border.
    pub edge: f32,
}

/// Rectangles making up a bevel box, in paint order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BevelRects {
    pub fill: Rectangle,
    /// Top, bottom, left and right outer edges.
    pub outer: [Rectangle; 4],
    /// Top and left strips.
    pub highlight: [Rectangle; 2],
    /// Bottom and right strips.
    pub shadow: [Rectangle; 2],
}

/// Split `bounds` into the fill, outer edge, highlight and shadow strips.
pub fn bevel_rects(bounds: Rectangle, spec: BevelSpec) -> BevelRects {
    let Rectangle {
        x,
        y,
        width,
        height,
    } = bounds;
    let border = spec.border;
    let edge = spec.edge;
    let inner_width = (width - border * 2.0).max(0.0);
    let inner_height = (height - border * 2.0).max(0.0);
    let inset = spec.fill_inset;

    BevelRects {
        fill: rect(
            x + inset,
            y + inset,
            (width - inset * 2.0).max(0.0),
            (height - inset * 2.0).max(0.0),
        ),
        outer: [
            rect(x, y, width, border),
            rect(x, y + height - border, width, border),
            rect(x, y, border, height),
            rect(x + width - border, y, border, height),
        ],
        highlight: [
            rect(x + border, y + border, inner_width, edge),
            rect(x + border, y + border, edge, inner_height),
        ],
        shadow: [
            rect(x + border, y + height - border - edge, inner_width, edge),
            rect(x + width - border - edge, y + border, edge, inner_height),
        ],
    }
}

fn rect(x: f32, y: f32, width: f32, height: f32) -> Rectangle {
    Rectangle {
        x,
        y,
        width,
        height,
    }
}
