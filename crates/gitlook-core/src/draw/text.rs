//! Label styling and rendering.
//!
//! - [`TextDefinition`] - reusable label style (color, size, weight, family, anchor)
//! - [`Text`] - label content placed at a point, rendered as an SVG `<text>`
//!
//! Labels are never measured: scenes place them at fixed offsets from their
//! element, so only the attributes the browser needs are emitted.
//!
//! # Quick Start
//!
//! ```
//! # use gitlook_core::{color::Color, draw::{FontWeight, Text, TextDefinition}, geometry::Point};
//! let mut style = TextDefinition::new();
//! style.set_weight(FontWeight::Bold);
//! style.set_color(Some(Color::new("#333").unwrap()));
//!
//! let label = Text::new(style, "Working Directory", Point::new(150.0, 130.0));
//! let markup = label.render_to_svg().to_string();
//! assert!(markup.contains(r#"font-weight="bold""#));
//! assert!(markup.contains("Working Directory"));
//! ```

use svg::node::element as svg_element;

use crate::{color::Color, draw::SvgNode, geometry::Point};

/// Font weight of a label.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Horizontal alignment of a label around its position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text starts at the position (SVG default)
    Start,
    /// Text is centered on the position
    #[default]
    Middle,
}

/// Defines the visual style of a label.
///
/// Unset properties emit no attribute, leaving the SVG user agent default in
/// effect.
///
/// | Property | Default |
/// |----------|---------|
/// | Color | `None` |
/// | Font size | `None` |
/// | Weight | [`FontWeight::Normal`] |
/// | Family | `None` |
/// | Anchor | [`TextAnchor::Middle`] |
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextDefinition {
    color: Option<Color>,
    font_size: Option<u16>,
    weight: FontWeight,
    family: Option<String>,
    anchor: TextAnchor,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn font_size(&self) -> Option<u16> {
        self.font_size
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = Some(size);
    }

    pub fn set_weight(&mut self, weight: FontWeight) {
        self.weight = weight;
    }

    /// Sets the font family, e.g. `monospace` for command snippets.
    pub fn set_family(&mut self, family: &str) {
        self.family = Some(family.to_string());
    }

    pub fn set_anchor(&mut self, anchor: TextAnchor) {
        self.anchor = anchor;
    }
}

/// A label: content, style and the point it is anchored at.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    definition: TextDefinition,
    content: String,
    position: Point,
}

impl Text {
    pub fn new(definition: TextDefinition, content: impl Into<String>, position: Point) -> Self {
        Self {
            definition,
            content: content.into(),
            position,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn definition(&self) -> &TextDefinition {
        &self.definition
    }

    /// Renders this label as an SVG `<text>` element.
    pub fn render_to_svg(&self) -> SvgNode {
        let definition = &self.definition;
        let mut text = svg_element::Text::new(self.content.as_str())
            .set("x", self.position.x())
            .set("y", self.position.y());

        if definition.anchor == TextAnchor::Middle {
            text = text.set("text-anchor", "middle");
        }
        if let Some(family) = definition.family() {
            text = text.set("font-family", family);
        }
        if let Some(size) = definition.font_size {
            text = text.set("font-size", size);
        }
        if definition.weight == FontWeight::Bold {
            text = text.set("font-weight", "bold");
        }
        if let Some(color) = definition.color {
            text = text.set("fill", color.to_string());
        }

        Box::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_definition_centers_text() {
        let label = Text::new(TextDefinition::new(), "Commit", Point::new(10.0, 20.0));
        let markup = label.render_to_svg().to_string();

        assert!(markup.contains(r#"text-anchor="middle""#));
        assert!(!markup.contains("font-weight"));
        assert!(!markup.contains("font-size"));
        assert!(markup.contains(">Commit<"));
    }

    #[test]
    fn test_start_anchor_omits_text_anchor() {
        let mut style = TextDefinition::new();
        style.set_anchor(TextAnchor::Start);
        style.set_family("monospace");
        style.set_font_size(12);

        let label = Text::new(style, "git add .", Point::new(60.0, 95.0));
        let markup = label.render_to_svg().to_string();

        assert!(!markup.contains("text-anchor"));
        assert!(markup.contains(r#"font-family="monospace""#));
        assert!(markup.contains(r#"font-size="12""#));
    }
}
