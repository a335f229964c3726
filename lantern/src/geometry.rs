use iced::{Point, Size};

/// Compute a context menu anchor position near the cursor, clamped to the
/// window area.
pub(crate) fn anchor_position(
    cursor: Point,
    area: Size,
    menu_width: f32,
    menu_height: f32,
    margin: f32,
) -> Point {
    let clamped_cursor = Point::new(
        cursor.x.clamp(0.0, area.width),
        cursor.y.clamp(0.0, area.height),
    );

    let fits_right = clamped_cursor.x + menu_width + margin <= area.width;
    let x = if fits_right {
        clamped_cursor.x + margin
    } else {
        clamped_cursor.x - menu_width - margin
    };

    let fits_down = clamped_cursor.y + menu_height + margin <= area.height;
    let y = if fits_down {
        clamped_cursor.y + margin
    } else {
        clamped_cursor.y - menu_height - margin
    };

    let max_x = (area.width - menu_width - margin).max(margin);
    let max_y = (area.height - menu_height - margin).max(margin);

    Point::new(x.clamp(margin, max_x), y.clamp(margin, max_y))
}

/// Total menu height for rows of `item_height` plus separators.
pub(crate) fn menu_height(
    item_count: usize,
    item_height: f32,
    separator_count: usize,
    separator_height: f32,
    vertical_padding: f32,
) -> f32 {
    vertical_padding
        + item_height * item_count as f32
        + separator_height * separator_count as f32
}
