//! Pure layout and paint helpers shared by Lantern widgets.
//!
//! The crate has no knowledge of launcher state. It provides:
//! - [`cover_fit`]: "cover" scaling geometry for images drawn into a
//!   viewport;
//! - [`wrap`] and [`truncate`]: greedy word wrapping with ellipsis
//!   truncation against any [`TextMeasure`];
//! - [`FontMetrics`] and [`ParagraphMeasure`]: text metrics backed by the
//!   `iced` text shaper;
//! - [`bitmap`]: decoding, bilinear scaling and the placeholder icon;
//! - [`bevel_rects`]: the rectangle decomposition of a blocky 3D bevel.
//!
//! # Quick Example
//!
//! ```
//! use lantern_ui_paint::{Viewport, cover_fit, wrap};
//!
//! let geometry = cover_fit(16.0 / 9.0, Viewport::new(900.0, 560.0));
//! assert!(geometry.width >= 900.0 && geometry.height >= 560.0);
//!
//! let measure = |text: &str| text.chars().count() as f32 * 8.0;
//! let lines = wrap("Vanilla Plus Adventures", 96.0, &measure, 2);
//! assert_eq!(lines, vec!["Vanilla Plus", "Adventures"]);
//! ```

pub mod bitmap;

mod bevel;
mod error;
mod fit;
mod font;
mod text;

pub use bevel::{BevelRects, BevelSpec, bevel_rects};
pub use error::PaintError;
pub use fit::{FitGeometry, Viewport, cover_fit, cover_fit_size};
pub use font::{FontMetrics, ParagraphMeasure};
pub use text::{ELLIPSIS, TextMeasure, truncate, wrap};
