//! Visual state of a rendered node and the mutations applied to it.
//!
//! An [`Appearance`] is the full paint state a node is drawn with. A
//! [`Paint`] is a partial update: it names only the attributes it changes,
//! so a workflow pulse can swap the fill while leaving the border alone.
//! Playback mutates nodes exclusively through [`Appearance::apply`].

use crate::{color::Color, draw::StrokeDefinition};

/// Fill and stroke of a drawn element.
///
/// A `None` fill renders as `fill="none"`; a `None` stroke emits no stroke
/// attributes at all.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Appearance {
    fill: Option<Color>,
    stroke: Option<StrokeDefinition>,
}

impl Appearance {
    /// A filled shape without a border.
    pub fn filled(fill: Color) -> Self {
        Self {
            fill: Some(fill),
            stroke: None,
        }
    }

    /// A filled shape with a border.
    pub fn filled_stroked(fill: Color, stroke: StrokeDefinition) -> Self {
        Self {
            fill: Some(fill),
            stroke: Some(stroke),
        }
    }

    /// An unfilled line.
    pub fn outline(stroke: StrokeDefinition) -> Self {
        Self {
            fill: None,
            stroke: Some(stroke),
        }
    }

    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    pub fn stroke(&self) -> Option<&StrokeDefinition> {
        self.stroke.as_ref()
    }

    /// Applies the attributes named by `paint`, keeping every other one.
    ///
    /// Setting a stroke color or width on an element without a border
    /// creates one from the default stroke.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gitlook_core::{color::Color, draw::{Appearance, Paint}};
    /// let primary = Color::new("#4078c0").unwrap();
    /// let accent = Color::new("#f05033").unwrap();
    ///
    /// let mut appearance = Appearance::filled(primary);
    /// appearance.apply(&Paint::new().with_fill(accent));
    /// assert_eq!(appearance.fill(), Some(accent));
    /// assert!(appearance.stroke().is_none());
    /// ```
    pub fn apply(&mut self, paint: &Paint) {
        if let Some(fill) = paint.fill {
            self.fill = Some(fill);
        }
        if paint.stroke.is_none() && paint.stroke_width.is_none() {
            return;
        }

        let stroke = self.stroke.get_or_insert_with(StrokeDefinition::default);
        if let Some(color) = paint.stroke {
            stroke.set_color(color);
        }
        if let Some(width) = paint.stroke_width {
            stroke.set_width(width);
        }
    }
}

/// Apply an [`Appearance`] (fill plus optional stroke) to an SVG element.
#[macro_export]
macro_rules! apply_appearance {
    ($element:expr, $appearance:expr) => {{
        let appearance: &$crate::draw::Appearance = $appearance;
        let elem = match appearance.fill() {
            Some(fill) => $element.set("fill", fill.to_string()),
            None => $element.set("fill", "none"),
        };
        match appearance.stroke() {
            Some(stroke) => $crate::apply_stroke!(elem, stroke),
            None => elem,
        }
    }};
}

/// A partial update of an element's fill, stroke color and stroke width.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Paint {
    fill: Option<Color>,
    stroke: Option<Color>,
    stroke_width: Option<f32>,
}

impl Paint {
    /// Creates a paint that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_stroke(mut self, stroke: Color) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    pub fn stroke(&self) -> Option<Color> {
        self.stroke
    }

    pub fn stroke_width(&self) -> Option<f32> {
        self.stroke_width
    }

    /// Returns `true` if this paint changes no attribute.
    pub fn is_empty(&self) -> bool {
        self.fill.is_none() && self.stroke.is_none() && self.stroke_width.is_none()
    }
}

#[cfg(test)]
mod tests {
    use svg::node::element as svg_element;

    use super::*;

    fn color(value: &str) -> Color {
        Color::new(value).unwrap()
    }

    #[test]
    fn test_apply_keeps_unnamed_attributes() {
        let border = StrokeDefinition::new(color("#4078c0"), 2.0);
        let mut appearance = Appearance::filled_stroked(color("#f4f4f4"), border);

        appearance.apply(&Paint::new().with_stroke(color("#f05033")));

        assert_eq!(appearance.fill(), Some(color("#f4f4f4")));
        let stroke = appearance.stroke().unwrap();
        assert_eq!(stroke.color(), color("#f05033"));
        assert_eq!(stroke.width(), 2.0);
    }

    #[test]
    fn test_apply_full_highlight_then_reset() {
        let border = StrokeDefinition::new(color("#4078c0"), 2.0);
        let original = Appearance::filled_stroked(color("#f4f4f4"), border);
        let mut appearance = original;

        appearance.apply(
            &Paint::new()
                .with_fill(color("#e6f7ff"))
                .with_stroke(color("#f05033"))
                .with_stroke_width(3.0),
        );
        assert_ne!(appearance, original);

        appearance.apply(
            &Paint::new()
                .with_fill(color("#f4f4f4"))
                .with_stroke(color("#4078c0"))
                .with_stroke_width(2.0),
        );
        assert_eq!(appearance, original);
    }

    #[test]
    fn test_apply_stroke_width_creates_border() {
        let mut appearance = Appearance::filled(color("#4078c0"));
        appearance.apply(&Paint::new().with_stroke_width(3.0));

        assert_eq!(appearance.stroke().map(|s| s.width()), Some(3.0));
    }

    #[test]
    fn test_empty_paint_is_noop() {
        let mut appearance = Appearance::filled(color("#4078c0"));
        let paint = Paint::new();
        assert!(paint.is_empty());

        appearance.apply(&paint);
        assert_eq!(appearance, Appearance::filled(color("#4078c0")));
    }

    #[test]
    fn test_apply_appearance_outline_has_no_fill() {
        let stroke = StrokeDefinition::new(color("#4078c0"), 3.0);
        let path = crate::apply_appearance!(svg_element::Path::new(), &Appearance::outline(stroke));

        let markup = path.to_string();
        assert!(markup.contains(r#"fill="none""#));
        assert!(markup.contains(r#"stroke-width="3""#));
    }
}
