//! Layer-based z-ordering for SVG output.
//!
//! Renderers push SVG nodes into a [`LayeredOutput`] tagged with the
//! [`RenderLayer`] they belong to; [`LayeredOutput::render`] then emits one
//! `<g data-layer="...">` group per non-empty layer, bottom to top. Edges end
//! at node boundaries, so drawing them beneath the nodes keeps arrowheads and
//! line ends visible while labels stay on top.
//!
//! # Example
//!
//! ```
//! # use gitlook_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Circle, Path};
//! let mut output = LayeredOutput::new();
//! output.add_to_layer(RenderLayer::Node, Box::new(Circle::new().set("r", 30)));
//! output.add_to_layer(RenderLayer::Edge, Box::new(Path::new().set("d", "M 80 100 L 170 100")));
//!
//! // The edge group comes first even though it was added last.
//! let groups = output.render();
//! assert_eq!(groups.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers for SVG output.
///
/// Layers are rendered from bottom to top in declaration order (the derived
/// `Ord`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Connective geometry: connections, flows, transitions and commit lines
    Edge,
    /// Element shapes (circles and containers), the addressable nodes
    Node,
    /// Element and edge labels
    Text,
}

impl RenderLayer {
    /// Returns the value written to the group's `data-layer` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Edge => "edge",
            Self::Node => "node",
            Self::Text => "text",
        }
    }
}

/// SVG nodes collected per rendering layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node to `layer`. Nodes keep their insertion order within a layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Appends every node of `other` to this output.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes a `<g>` element with a `data-layer`
    /// attribute; empty layers are skipped.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable sort keeps insertion order inside each layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

#[cfg(test)]
mod tests {
    use svg::node::element::{Circle, Path, Text};

    use super::*;

    #[test]
    fn test_layered_output_new_is_empty() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert!(output.render().is_empty());
    }

    #[test]
    fn test_layered_output_groups_per_layer() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Text, Box::new(Text::new("step")));
        output.add_to_layer(RenderLayer::Node, Box::new(Circle::new()));
        output.add_to_layer(RenderLayer::Edge, Box::new(Path::new()));
        output.add_to_layer(RenderLayer::Node, Box::new(Circle::new()));

        let groups = output.render();
        assert_eq!(groups.len(), 3);
    }

    #[test]
    fn test_layered_output_renders_bottom_to_top() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Text, Box::new(Text::new("label")));
        output.add_to_layer(RenderLayer::Edge, Box::new(Path::new()));

        let markup: Vec<String> = output
            .render()
            .iter()
            .map(|node| node.to_string())
            .collect();
        assert!(markup[0].contains(r#"data-layer="edge""#));
        assert!(markup[1].contains(r#"data-layer="text""#));
    }

    #[test]
    fn test_layered_output_merge_same_layer() {
        let mut first = LayeredOutput::new();
        first.add_to_layer(RenderLayer::Node, Box::new(Circle::new()));

        let mut second = LayeredOutput::new();
        second.add_to_layer(RenderLayer::Node, Box::new(Circle::new()));

        first.merge(second);
        assert_eq!(first.render().len(), 1);
    }
}
