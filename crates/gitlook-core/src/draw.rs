//! Visual primitives for rendered scenes.
//!
//! Everything here produces SVG nodes through the [`svg`] crate:
//!
//! - [`Shape`] - circle and rounded-rectangle node outlines, with boundary geometry
//! - [`Appearance`] / [`Paint`] - a node's fill and stroke, and partial updates to them
//! - [`StrokeDefinition`] - stroke color and width, applied with [`apply_stroke!`](crate::apply_stroke!)
//! - [`TextDefinition`] / [`Text`] - label styling and placement
//! - [`MarkerDefinition`] - shared arrowhead markers
//! - [`LayeredOutput`] / [`RenderLayer`] - z-ordered collection of SVG nodes

mod layer;
mod marker;
mod paint;
mod shape;
mod stroke;
mod text;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use marker::MarkerDefinition;
pub use paint::{Appearance, Paint};
pub use shape::Shape;
pub use stroke::StrokeDefinition;
pub use text::{FontWeight, Text, TextAnchor, TextDefinition};
