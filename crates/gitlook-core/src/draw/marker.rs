//! Arrowhead markers shared by the edges of one scene.

use svg::node::element as svg_element;

use crate::color::Color;

/// A filled triangular arrowhead, referenced by edges through `marker-end`.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerDefinition {
    id: String,
    color: Color,
}

impl MarkerDefinition {
    /// Creates an arrowhead marker with the given element id and fill color.
    pub fn arrowhead(id: impl Into<String>, color: Color) -> Self {
        Self {
            id: id.into(),
            color,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the `url(#id)` value edges put in their `marker-end` attribute.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gitlook_core::{color::Color, draw::MarkerDefinition};
    /// let marker = MarkerDefinition::arrowhead("arrowhead-process", Color::default());
    /// assert_eq!(marker.reference(), "url(#arrowhead-process)");
    /// ```
    pub fn reference(&self) -> String {
        format!("url(#{})", self.id)
    }

    /// Renders the `<marker>` element for a `<defs>` block.
    ///
    /// The tip sits at `refX` so the arrow ends exactly on the line's end
    /// point, which the renderer places on the target's boundary.
    pub fn render_to_svg(&self) -> svg_element::Marker {
        svg_element::Marker::new()
            .set("id", self.id.as_str())
            .set("markerWidth", 10)
            .set("markerHeight", 7)
            .set("refX", 9)
            .set("refY", 3.5)
            .set("orient", "auto")
            .add(
                svg_element::Polygon::new()
                    .set("points", "0 0, 10 3.5, 0 7")
                    .set("fill", self.color.to_string()),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrowhead_markup() {
        let marker = MarkerDefinition::arrowhead("arrowhead", Color::new("#f05033").unwrap());
        let markup = marker.render_to_svg().to_string();

        assert!(markup.contains(r#"id="arrowhead""#));
        assert!(markup.contains(r#"orient="auto""#));
        assert!(markup.contains(r#"points="0 0, 10 3.5, 0 7""#));
    }
}
