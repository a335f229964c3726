use iced::{Point, Rectangle, Size};

/// Drawable area in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Return `true` when both sides are positive and finite.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    pub fn ratio(&self) -> f32 {
        self.width / self.height
    }
}

impl From<Size> for Viewport {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

impl From<Rectangle> for Viewport {
    fn from(bounds: Rectangle) -> Self {
        Self::new(bounds.width, bounds.height)
    }
}

/// Draw rectangle produced by [`cover_fit`], relative to the viewport
/// origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FitGeometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl FitGeometry {
    /// Translate the geometry into a rectangle anchored at `origin`.
    pub fn at(&self, origin: Point) -> Rectangle {
        Rectangle {
            x: origin.x + self.x,
            y: origin.y + self.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Compute the "cover" draw rectangle for an image of `image_ratio`
/// (width / height) inside `viewport`.
///
/// The result preserves the image ratio, covers the whole viewport and is
/// centered, so the overflowing axis is cropped symmetrically. A degenerate
/// image ratio stretches the image over the viewport; an invalid viewport
/// yields an empty geometry.
pub fn cover_fit(image_ratio: f32, viewport: Viewport) -> FitGeometry {
    if !viewport.is_valid() {
        return FitGeometry::default();
    }
    if !image_ratio.is_finite() || image_ratio <= 0.0 {
        return FitGeometry {
            x: 0.0,
            y: 0.0,
            width: viewport.width,
            height: viewport.height,
        };
    }

    let (width, height) = if viewport.ratio() > image_ratio {
        let height = viewport.width / image_ratio;
        (viewport.width, height.max(viewport.height))
    } else {
        let width = viewport.height * image_ratio;
        (width.max(viewport.width), viewport.height)
    };

    FitGeometry {
        x: (viewport.width - width) / 2.0,
        y: (viewport.height - height) / 2.0,
        width,
        height,
    }
}

/// [`cover_fit`] for an image given by its pixel dimensions.
pub fn cover_fit_size(
    image_width: u32,
    image_height: u32,
    viewport: Viewport,
) -> FitGeometry {
    if image_height == 0 {
        return cover_fit(0.0, viewport);
    }
    cover_fit(image_width as f32 / image_height as f32, viewport)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{FitGeometry, Viewport, cover_fit, cover_fit_size};

    #[test]
    fn given_wide_viewport_when_fitting_square_image_then_height_overflows() {
        let geometry = cover_fit(1.0, Viewport::new(900.0, 560.0));

        assert_eq!(geometry.width, 900.0);
        assert_eq!(geometry.height, 900.0);
        assert_eq!(geometry.x, 0.0);
        assert_eq!(geometry.y, -170.0);
    }

    #[test]
    fn given_tall_viewport_when_fitting_wide_image_then_width_overflows() {
        let geometry = cover_fit_size(1920, 1080, Viewport::new(300.0, 600.0));

        assert_eq!(geometry.height, 600.0);
        assert!((geometry.width - 1066.6666).abs() < 0.01);
        assert!((geometry.x + 383.3333).abs() < 0.01);
        assert_eq!(geometry.y, 0.0);
    }

    #[test]
    fn given_matching_ratio_when_fitting_then_geometry_equals_viewport() {
        let geometry = cover_fit(2.0, Viewport::new(400.0, 200.0));

        assert_eq!(
            geometry,
            FitGeometry {
                x: 0.0,
                y: 0.0,
                width: 400.0,
                height: 200.0,
            }
        );
    }

    #[test]
    fn given_zero_sized_viewport_when_fitting_then_geometry_is_empty() {
        let geometry = cover_fit(1.5, Viewport::new(0.0, 560.0));

        assert_eq!(geometry, FitGeometry::default());
    }

    #[test]
    fn given_zero_height_image_when_fitting_then_image_is_stretched() {
        let geometry = cover_fit_size(640, 0, Viewport::new(120.0, 80.0));

        assert_eq!(geometry.width, 120.0);
        assert_eq!(geometry.height, 80.0);
    }

    proptest! {
        #[test]
        fn cover_fit_always_covers_and_centers(
            image_ratio in 0.05f32..20.0,
            width in 1.0f32..4000.0,
            height in 1.0f32..4000.0,
        ) {
            let viewport = Viewport::new(width, height);
            let geometry = cover_fit(image_ratio, viewport);

            prop_assert!(geometry.width >= width);
            prop_assert!(geometry.height >= height);
            prop_assert!(
                (geometry.x - (width - geometry.width) / 2.0).abs() < 1e-3
            );
            prop_assert!(
                (geometry.y - (height - geometry.height) / 2.0).abs() < 1e-3
            );
        }

        #[test]
        fn cover_fit_preserves_image_ratio(
            image_ratio in 0.1f32..10.0,
            width in 10.0f32..4000.0,
            height in 10.0f32..4000.0,
        ) {
            let geometry = cover_fit(image_ratio, Viewport::new(width, height));
            let drawn = geometry.width / geometry.height;

            prop_assert!((drawn - image_ratio).abs() / image_ratio < 1e-3);
        }
    }
}
