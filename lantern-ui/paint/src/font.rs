use iced::{Font, Size};
use iced_core::Text;
use iced_core::alignment::Vertical;
use iced_core::text::{
    Alignment, LineHeight, Paragraph, Shaping as TextShaping, Wrapping,
};
use iced_graphics::text::paragraph;

use crate::text::TextMeasure;

const ASCENT_RATIO: f32 = 0.8;
const DESCENT_RATIO: f32 = 0.2;
const LINE_HEIGHT_RATIO: f32 = 1.3;

/// Vertical metrics of a font at a given pixel size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    pub size: f32,
    pub ascent: f32,
    pub descent: f32,
    pub line_height: f32,
}

impl FontMetrics {
    /// Metrics for `size` using the default `iced` line height.
    pub fn from_size(size: f32) -> Self {
        Self {
            size,
            ascent: size * ASCENT_RATIO,
            descent: size * DESCENT_RATIO,
            line_height: size * LINE_HEIGHT_RATIO,
        }
    }
}

/// [`TextMeasure`] backed by the `iced` paragraph shaper.
#[derive(Debug, Clone, Copy)]
pub struct ParagraphMeasure {
    font: Font,
    size: f32,
}

impl ParagraphMeasure {
    pub fn new(font: Font, size: f32) -> Self {
        Self { font, size }
    }

    pub fn metrics(&self) -> FontMetrics {
        FontMetrics::from_size(self.size)
    }

    fn bounds(&self, content: &str) -> Size<f32> {
        let paragraph = paragraph::Paragraph::with_text(Text {
            content,
            font: self.font,
            size: iced_core::Pixels(self.size),
            align_y: Vertical::Top,
            align_x: Alignment::Left,
            shaping: TextShaping::Advanced,
            line_height: LineHeight::Relative(LINE_HEIGHT_RATIO),
            bounds: Size::INFINITE,
            wrapping: Wrapping::None,
        });

        paragraph.min_bounds()
    }
}

impl TextMeasure for ParagraphMeasure {
    fn width(&self, text: &str) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        self.bounds(text).width
    }
}

#[cfg(test)]
mod tests {
    use super::FontMetrics;

    #[test]
    fn given_font_size_when_building_metrics_then_line_height_exceeds_glyph_box()
     {
        let metrics = FontMetrics::from_size(14.0);

        assert!((metrics.ascent + metrics.descent - 14.0).abs() < 1e-4);
        assert!(metrics.line_height > metrics.ascent + metrics.descent);
    }
}
