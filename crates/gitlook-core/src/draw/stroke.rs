//! Stroke definitions for node borders and connective lines.
//!
//! [`StrokeDefinition`] holds the two stroke properties scenes use (color and
//! width). The [`apply_stroke!`](crate::apply_stroke!) macro writes them onto
//! any SVG element.
//!
//! ```
//! use gitlook_core::{color::Color, draw::StrokeDefinition};
//! use svg::node::element as svg_element;
//!
//! let stroke = StrokeDefinition::new(Color::new("#f05033").unwrap(), 3.0);
//! let path = svg_element::Path::new().set("d", "M 0 0 L 10 0");
//! let path = gitlook_core::apply_stroke!(path, &stroke);
//! assert!(path.to_string().contains(r#"stroke-width="3""#));
//! ```

use crate::color::Color;

/// A stroke for rendering lines and borders.
///
/// Only color and width are carried; every line a scene draws is solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
}

impl StrokeDefinition {
    /// Creates a new stroke with the given color and width in pixels.
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// Returns a copy of this stroke with a different width.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
        }
    }
}

/// Apply stroke color and width to an SVG element.
///
/// # Examples
///
/// ```
/// use gitlook_core::{color::Color, draw::StrokeDefinition};
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::new(Color::new("black").unwrap(), 2.0);
/// let rect = svg_element::Rectangle::new()
///     .set("width", 160)
///     .set("height", 100);
///
/// let rect = gitlook_core::apply_stroke!(rect, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-width", $stroke.width())
    }};
}
