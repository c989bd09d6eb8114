//! SVG serialization of visual graphs.
//!
//! A document has a fixed logical canvas per scene kind (its `viewBox`) and
//! scales to its container (`width` and `height` of `100%`). Content is
//! emitted as marker definitions followed by one group per render layer:
//! edges below nodes below text.

use log::debug;
use svg::{
    Document,
    node::element::{Definitions, Path, Rectangle},
};

use gitlook_core::{
    apply_appearance,
    color::Color,
    draw::{LayeredOutput, RenderLayer},
};

use super::{Error, Exporter};
use crate::graph::{Edge, VisualGraph};

/// Markup shown in place of scenes of an unsupported kind.
pub const PLACEHOLDER_MARKUP: &str = "<p>Animation type not supported</p>";

/// Serializes visual graphs to SVG.
#[derive(Debug, Clone, Default)]
pub struct SvgExporter {
    background: Option<Color>,
}

impl SvgExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills the canvas with `color` behind all content.
    pub fn with_background(mut self, color: Option<Color>) -> Self {
        self.background = color;
        self
    }

    fn render_edge(edge: &Edge) -> Path {
        let path = Path::new().set("d", edge.path().to_path_data());
        let path = apply_appearance!(path, edge.appearance());
        match edge.marker() {
            Some(marker) => path.set("marker-end", format!("url(#{marker})")),
            None => path,
        }
    }

    /// Builds the SVG document for `graph`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] for a placeholder graph, which has no SVG
    /// form.
    pub fn document(&self, graph: &VisualGraph) -> Result<Document, Error> {
        if graph.is_placeholder() {
            return Err(Error::Render(format!(
                "scenes of kind '{}' have no SVG form",
                graph.kind()
            )));
        }

        let canvas = graph.canvas();
        let mut doc = Document::new()
            .set("width", "100%")
            .set("height", "100%")
            .set(
                "viewBox",
                format!("0 0 {} {}", canvas.width(), canvas.height()),
            );

        if let Some(background) = self.background {
            doc = doc.add(
                Rectangle::new()
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", background.to_string()),
            );
        }

        if !graph.markers().is_empty() {
            let defs = graph
                .markers()
                .iter()
                .fold(Definitions::new(), |defs, marker| defs.add(marker.render_to_svg()));
            doc = doc.add(defs);
        }

        let mut output = LayeredOutput::new();
        for edge in graph.edges() {
            output.add_to_layer(RenderLayer::Edge, Box::new(Self::render_edge(edge)));
        }
        for node in graph.nodes() {
            let id = node.id().to_string();
            output.add_to_layer(
                RenderLayer::Node,
                node.shape().render_to_svg(&id, node.center(), node.appearance()),
            );
        }
        for label in graph.labels() {
            output.add_to_layer(RenderLayer::Text, label.text().render_to_svg());
        }

        debug!(
            kind:% = graph.kind(),
            nodes = graph.nodes().len(),
            edges = graph.edges().len(),
            labels = graph.labels().len();
            "SVG document rendered"
        );
        Ok(output.render().into_iter().fold(doc, |doc, node| doc.add(node)))
    }
}

impl Exporter for SvgExporter {
    fn export(&self, graph: &VisualGraph) -> String {
        match self.document(graph) {
            Ok(doc) => doc.to_string(),
            Err(_) => PLACEHOLDER_MARKUP.to_string(),
        }
    }
}
