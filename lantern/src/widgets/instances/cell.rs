//! Paint description of a single instance row.

use std::cell::{Ref, RefCell};
use std::sync::Arc;

use iced::{Color, Point, Rectangle, Size};
use lantern_ui_paint::{
    BevelSpec, FontMetrics, TextMeasure, bevel_rects, cover_fit_size, truncate,
    wrap,
};

use super::icon_cache::IconBitmap;
use super::model::ICON_SIZE;
use crate::shared::ui::palette;

const ROW_PADDING: f32 = 8.0;
/// Rows narrower than this only show their icon.
pub(crate) const COLLAPSE_WIDTH: f32 = 92.0;
const TITLE_MAX_LINES: usize = 2;
const ROW_BEVEL: BevelSpec = BevelSpec {
    border: 2.0,
    fill_inset: 5.0,
    edge: 1.0,
};

/// Per-paint snapshot of one row.
#[derive(Debug, Clone)]
pub(crate) struct RowRenderState<'a> {
    pub(crate) title: &'a str,
    pub(crate) status: &'a str,
    pub(crate) icon: Arc<IconBitmap>,
    pub(crate) selected: bool,
    pub(crate) pressed: bool,
    pub(crate) collapsed: bool,
}

/// Which font a text primitive is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TextRole {
    Title,
    Status,
}

/// A single paint operation of a row, in row-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RowPrimitive {
    Fill {
        rect: Rectangle,
        color: Color,
    },
    Icon {
        rect: Rectangle,
    },
    Text {
        content: String,
        /// Top-left corner of the text box.
        position: Point,
        role: TextRole,
        color: Color,
    },
}

/// Fonts used to lay out row text.
pub(crate) struct RowFonts<'a> {
    pub(crate) title: &'a dyn TextMeasure,
    pub(crate) title_metrics: FontMetrics,
    pub(crate) status: &'a dyn TextMeasure,
    pub(crate) status_metrics: FontMetrics,
}

/// Whether a row of `width` renders collapsed.
pub(crate) fn is_collapsed(width: f32) -> bool {
    width < COLLAPSE_WIDTH
}

/// Describe how to paint a row of `size` in back-to-front order.
pub(crate) fn describe_row(
    row: &RowRenderState<'_>,
    size: Size,
    fonts: &RowFonts<'_>,
) -> Vec<RowPrimitive> {
    let mut primitives = Vec::new();
    let icon_size = ICON_SIZE as f32;

    if row.selected {
        push_bevel(
            &mut primitives,
            bevel_box(size, row.collapsed),
            row.pressed,
        );
    }

    let icon_origin = if row.collapsed {
        Point::new(
            (size.width - icon_size) / 2.0,
            (size.height - icon_size) / 2.0,
        )
    } else {
        Point::new(ROW_PADDING, (size.height - icon_size) / 2.0)
    };
    let fit = cover_fit_size(
        row.icon.width,
        row.icon.height,
        lantern_ui_paint::Viewport::new(icon_size, icon_size),
    );
    primitives.push(RowPrimitive::Icon {
        rect: fit.at(icon_origin),
    });

    if !row.collapsed {
        push_text(&mut primitives, row, size, fonts);
    }

    primitives
}

/// Inputs that fully determine the primitives of a row.
#[derive(Debug, Clone)]
struct RowKey {
    title: String,
    status: String,
    icon: Arc<IconBitmap>,
    size: Size,
    selected: bool,
    pressed: bool,
    collapsed: bool,
}

impl RowKey {
    fn new(row: &RowRenderState<'_>, size: Size) -> Self {
        Self {
            title: row.title.to_string(),
            status: row.status.to_string(),
            icon: Arc::clone(&row.icon),
            size,
            selected: row.selected,
            pressed: row.pressed,
            collapsed: row.collapsed,
        }
    }

    fn matches(&self, row: &RowRenderState<'_>, size: Size) -> bool {
        self.title == row.title
            && self.status == row.status
            && Arc::ptr_eq(&self.icon, &row.icon)
            && self.size == size
            && self.selected == row.selected
            && self.pressed == row.pressed
            && self.collapsed == row.collapsed
    }
}

/// Last described layout of a row, kept across paints.
///
/// Text is only measured again when the row content, its state or its
/// size changes.
#[derive(Debug, Default)]
pub(crate) struct RowLayoutCache {
    slot: RefCell<Option<(RowKey, Vec<RowPrimitive>)>>,
}

impl RowLayoutCache {
    /// Describe the row unless the cached layout already matches it.
    ///
    /// Returns `true` when the layout was rebuilt.
    pub(crate) fn refresh(
        &self,
        row: &RowRenderState<'_>,
        size: Size,
        fonts: &RowFonts<'_>,
    ) -> bool {
        let mut slot = self.slot.borrow_mut();
        if slot.as_ref().is_some_and(|(key, _)| key.matches(row, size)) {
            return false;
        }
        *slot = Some((RowKey::new(row, size), describe_row(row, size, fonts)));
        true
    }

    /// Primitives of the last described layout.
    pub(crate) fn primitives(&self) -> Ref<'_, [RowPrimitive]> {
        Ref::map(self.slot.borrow(), |slot| match slot {
            Some((_, primitives)) => primitives.as_slice(),
            None => &[],
        })
    }
}

fn bevel_box(size: Size, collapsed: bool) -> Rectangle {
    if collapsed {
        let side = ICON_SIZE as f32 + ROW_PADDING * 2.0;
        Rectangle {
            x: (size.width - side) / 2.0,
            y: (size.height - side) / 2.0,
            width: side,
            height: side,
        }
    } else {
        Rectangle {
            x: 2.0,
            y: 1.0,
            width: size.width - 4.0,
            height: size.height - 2.0,
        }
    }
}

fn push_bevel(
    primitives: &mut Vec<RowPrimitive>,
    bounds: Rectangle,
    pressed: bool,
) {
    let rects = bevel_rects(bounds, ROW_BEVEL);
    let (fill, top_left, bottom_right) = if pressed {
        (palette::ROW_PRESSED_FILL, palette::ROW_SHADOW, palette::ROW_HIGHLIGHT)
    } else {
        (palette::ROW_SELECTED_FILL, palette::ROW_HIGHLIGHT, palette::ROW_SHADOW)
    };

    primitives.push(RowPrimitive::Fill {
        rect: rects.fill,
        color: fill,
    });
    primitives.extend(rects.outer.into_iter().map(|rect| RowPrimitive::Fill {
        rect,
        color: palette::ROW_OUTER_EDGE,
    }));
    primitives.extend(rects.highlight.into_iter().map(|rect| {
        RowPrimitive::Fill {
            rect,
            color: top_left,
        }
    }));
    primitives.extend(rects.shadow.into_iter().map(|rect| {
        RowPrimitive::Fill {
            rect,
            color: bottom_right,
        }
    }));
}

fn push_text(
    primitives: &mut Vec<RowPrimitive>,
    row: &RowRenderState<'_>,
    size: Size,
    fonts: &RowFonts<'_>,
) {
    let text_x = ROW_PADDING + ICON_SIZE as f32 + ROW_PADDING;
    let text_width = (size.width - text_x - ROW_PADDING).max(0.0);
    let title = fonts.title_metrics;
    let status = fonts.status_metrics;

    let lines = wrap(row.title, text_width, fonts.title, TITLE_MAX_LINES);
    let line_count = lines.len() as f32;

    // Baselines: the block of title lines plus the status ascent is
    // centered vertically.
    let block_height = line_count * title.line_height + status.ascent;
    let first_baseline = (size.height - block_height) / 2.0 + title.ascent;
    let status_baseline = first_baseline
        + (line_count - 1.0) * title.line_height
        + title.descent
        + status.ascent;

    for (index, line) in lines.into_iter().enumerate() {
        let baseline = first_baseline + index as f32 * title.line_height;
        primitives.push(RowPrimitive::Text {
            content: line,
            position: Point::new(text_x, baseline - title.ascent),
            role: TextRole::Title,
            color: palette::TEXT_PRIMARY,
        });
    }

    primitives.push(RowPrimitive::Text {
        content: truncate(row.status, text_width, fonts.status),
        position: Point::new(text_x, status_baseline - status.ascent),
        role: TextRole::Status,
        color: palette::TEXT_SECONDARY,
    });
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::sync::Arc;

    use iced::widget::image::Handle;
    use iced::{Point, Rectangle, Size};
    use lantern_ui_paint::{ELLIPSIS, FontMetrics};

    use super::{
        RowFonts, RowLayoutCache, RowPrimitive, RowRenderState, TextRole,
        describe_row, is_collapsed,
    };
    use crate::shared::ui::palette;
    use crate::widgets::instances::icon_cache::IconBitmap;

    const ROW: Size = Size {
        width: 222.0,
        height: 72.0,
    };

    fn mono(text: &str) -> f32 {
        text.chars().count() as f32 * 7.0
    }

    fn icon() -> Arc<IconBitmap> {
        Arc::new(IconBitmap {
            handle: Handle::from_rgba(1, 1, vec![0, 0, 0, 255]),
            width: 52,
            height: 52,
        })
    }

    fn row<'a>(title: &'a str, selected: bool, pressed: bool) -> RowRenderState<'a> {
        RowRenderState {
            title,
            status: "Ready to play",
            icon: icon(),
            selected,
            pressed,
            collapsed: false,
        }
    }

    fn describe(state: &RowRenderState<'_>, size: Size) -> Vec<RowPrimitive> {
        let fonts = RowFonts {
            title: &mono,
            title_metrics: FontMetrics::from_size(14.0),
            status: &mono,
            status_metrics: FontMetrics::from_size(11.0),
        };
        describe_row(state, size, &fonts)
    }

    fn texts(primitives: &[RowPrimitive]) -> Vec<(String, Point, TextRole)> {
        primitives
            .iter()
            .filter_map(|primitive| match primitive {
                RowPrimitive::Text {
                    content,
                    position,
                    role,
                    ..
                } => Some((content.clone(), *position, *role)),
                _ => None,
            })
            .collect()
    }

    fn fills(primitives: &[RowPrimitive]) -> Vec<(Rectangle, iced::Color)> {
        primitives
            .iter()
            .filter_map(|primitive| match primitive {
                RowPrimitive::Fill { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn given_unselected_row_when_describing_then_no_bevel_is_drawn() {
        let primitives = describe(&row("Skyblock", false, false), ROW);

        assert!(fills(&primitives).is_empty());
        assert_eq!(texts(&primitives).len(), 2);
    }

    #[test]
    fn given_selected_row_when_describing_then_fill_and_edges_are_drawn() {
        let primitives = describe(&row("Skyblock", true, false), ROW);
        let fills = fills(&primitives);

        assert_eq!(fills.len(), 9);
        assert_eq!(fills[0].1, palette::ROW_SELECTED_FILL);
        assert_eq!(
            fills[0].0,
            Rectangle {
                x: 7.0,
                y: 6.0,
                width: 208.0,
                height: 60.0,
            }
        );
        assert_eq!(fills[5].1, palette::ROW_HIGHLIGHT);
        assert_eq!(fills[7].1, palette::ROW_SHADOW);
    }

    #[test]
    fn given_pressed_row_when_describing_then_highlight_and_shadow_swap() {
        let primitives = describe(&row("Skyblock", true, true), ROW);
        let fills = fills(&primitives);

        assert_eq!(fills[0].1, palette::ROW_PRESSED_FILL);
        assert_eq!(fills[5].1, palette::ROW_SHADOW);
        assert_eq!(fills[7].1, palette::ROW_HIGHLIGHT);
    }

    #[test]
    fn given_collapsed_row_when_describing_then_only_centered_icon_and_box_remain()
     {
        let mut state = row("Skyblock", true, false);
        state.collapsed = true;

        let primitives = describe(&state, Size::new(80.0, 72.0));

        assert!(texts(&primitives).is_empty());
        let icon = primitives
            .iter()
            .find_map(|primitive| match primitive {
                RowPrimitive::Icon { rect } => Some(*rect),
                _ => None,
            })
            .expect("icon should be drawn");
        assert_eq!(icon.x, 14.0);
        assert_eq!(icon.y, 10.0);
        let outer_top = fills(&primitives)[1].0;
        assert_eq!(outer_top.x, 6.0);
        assert_eq!(outer_top.width, 68.0);
    }

    #[test]
    fn given_long_title_when_describing_then_two_lines_and_status_below_without_gap()
     {
        let title = "The quick brown fox jumps over the lazy dog ".repeat(5);
        let title = &title[..200];

        let primitives = describe(&row(title, false, false), ROW);
        let texts = texts(&primitives);

        assert_eq!(texts.len(), 3);
        assert!(texts[1].0.ends_with(ELLIPSIS));
        assert_eq!(texts[2].2, TextRole::Status);

        let title_metrics = FontMetrics::from_size(14.0);
        let glyph_box = title_metrics.ascent + title_metrics.descent;
        assert!((texts[2].1.y - (texts[1].1.y + glyph_box)).abs() < 1e-3);
        assert!((texts[1].1.y - texts[0].1.y - title_metrics.line_height).abs() < 1e-3);
        assert_eq!(texts[0].1.x, 68.0);
    }

    #[test]
    fn given_row_widths_when_checking_collapse_then_threshold_is_exclusive() {
        assert!(is_collapsed(80.0));
        assert!(!is_collapsed(92.0));
    }

    #[test]
    fn given_unchanged_row_when_laid_out_again_then_text_is_not_measured() {
        let calls = Cell::new(0usize);
        let counting = |text: &str| {
            calls.set(calls.get() + 1);
            mono(text)
        };
        let fonts = RowFonts {
            title: &counting,
            title_metrics: FontMetrics::from_size(14.0),
            status: &counting,
            status_metrics: FontMetrics::from_size(11.0),
        };
        let title = "The quick brown fox jumps over the lazy dog ".repeat(5);
        let state = RowRenderState {
            status: "Update available for this instance right now",
            ..row(&title[..200], true, false)
        };
        let cache = RowLayoutCache::default();

        assert!(cache.refresh(&state, ROW, &fonts));
        let first_calls = calls.get();
        assert!(first_calls > 0);

        assert!(!cache.refresh(&state, ROW, &fonts));
        assert_eq!(calls.get(), first_calls);
        assert_eq!(
            cache.primitives().to_vec(),
            describe(&state, ROW)
        );
    }

    #[test]
    fn given_changed_row_state_when_laid_out_again_then_layout_is_rebuilt() {
        let cache = RowLayoutCache::default();
        let fonts = RowFonts {
            title: &mono,
            title_metrics: FontMetrics::from_size(14.0),
            status: &mono,
            status_metrics: FontMetrics::from_size(11.0),
        };
        let selected = row("Skyblock", true, false);
        let pressed = row("Skyblock", true, true);

        assert!(cache.refresh(&selected, ROW, &fonts));
        assert!(cache.refresh(&pressed, ROW, &fonts));
        assert!(cache.refresh(&pressed, Size::new(160.0, 72.0), &fonts));
        assert_eq!(
            cache.primitives().to_vec(),
            describe(&pressed, Size::new(160.0, 72.0))
        );
    }
}
