//! The rendered form of one scene.
//!
//! A [`VisualGraph`] holds the nodes, edges, labels and markers a scene
//! description renders to. Nodes are addressable by their rendered
//! identifier (`{prefix}-{element id}`); playback finds them through
//! [`VisualGraph::apply`] at the moment a cue fires. Geometry is fixed once
//! built: only node appearances change afterwards.

use std::collections::HashMap;

use log::warn;

use gitlook_core::{
    draw::{Appearance, MarkerDefinition, Paint, Shape, Text},
    geometry::{Point, Size},
    identifier::Id,
    scene::SceneKind,
};

/// An addressable element shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeNode {
    id: Id,
    shape: Shape,
    center: Point,
    appearance: Appearance,
}

impl ShapeNode {
    pub fn new(id: Id, shape: Shape, center: Point, appearance: Appearance) -> Self {
        Self {
            id,
            shape,
            center,
            appearance,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    /// Where a line from this node's center toward `toward` leaves its outline.
    pub fn boundary_toward(&self, toward: Point) -> Point {
        self.shape.boundary_point(self.center, toward)
    }
}

/// What an edge depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeRole {
    /// Workflow connection between two steps
    Connection,
    /// Areas flow between two areas
    Flow,
    /// Process transition between two stages
    Transition,
    /// Branches main line through the main-line commits
    MainLine,
    /// Branches branch line from its start commit through its commits
    BranchLine,
}

/// The geometry of an edge.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgePath {
    /// Straight segments through the points in order.
    Polyline(Vec<Point>),
    /// A cubic curve leaving and re-entering the same node.
    Loop {
        start: Point,
        control1: Point,
        control2: Point,
        end: Point,
    },
}

impl EdgePath {
    /// Returns the SVG path data (`d` attribute) for this geometry.
    pub fn to_path_data(&self) -> String {
        match self {
            Self::Polyline(points) => points
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    let command = if i == 0 { "M" } else { "L" };
                    format!("{command} {} {}", p.x(), p.y())
                })
                .collect::<Vec<_>>()
                .join(" "),
            Self::Loop {
                start,
                control1,
                control2,
                end,
            } => format!(
                "M {} {} C {} {}, {} {}, {} {}",
                start.x(),
                start.y(),
                control1.x(),
                control1.y(),
                control2.x(),
                control2.y(),
                end.x(),
                end.y()
            ),
        }
    }

    /// Returns the points a polyline passes through (empty for loops).
    pub fn points(&self) -> &[Point] {
        match self {
            Self::Polyline(points) => points,
            Self::Loop { .. } => &[],
        }
    }
}

/// Connective geometry between nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    role: EdgeRole,
    path: EdgePath,
    appearance: Appearance,
    marker: Option<String>,
}

impl Edge {
    pub fn new(role: EdgeRole, path: EdgePath, appearance: Appearance) -> Self {
        Self {
            role,
            path,
            appearance,
            marker: None,
        }
    }

    /// Ends the edge with the marker of the given id.
    pub fn with_marker(mut self, marker_id: impl Into<String>) -> Self {
        self.marker = Some(marker_id.into());
        self
    }

    pub fn role(&self) -> EdgeRole {
        self.role
    }

    pub fn path(&self) -> &EdgePath {
        &self.path
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    pub fn marker(&self) -> Option<&str> {
        self.marker.as_deref()
    }
}

/// What a label annotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelRole {
    /// Step text, area or stage name, commit text, scenario title
    Primary,
    /// Descriptions and scenario commands
    Secondary,
    /// Connection, flow and transition text
    Edge,
    /// Branch name above a branch's first commit
    BranchName,
}

/// A positioned text annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    role: LabelRole,
    text: Text,
}

impl Label {
    pub fn new(role: LabelRole, text: Text) -> Self {
        Self { role, text }
    }

    pub fn role(&self) -> LabelRole {
        self.role
    }

    pub fn text(&self) -> &Text {
        &self.text
    }
}

/// Rendered nodes, edges and labels of one scene.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualGraph {
    kind: SceneKind,
    nodes: Vec<ShapeNode>,
    edges: Vec<Edge>,
    labels: Vec<Label>,
    markers: Vec<MarkerDefinition>,
    index: HashMap<Id, usize>,
}

impl VisualGraph {
    /// Creates an empty graph for a scene of the given kind.
    pub fn new(kind: SceneKind) -> Self {
        Self {
            kind,
            nodes: Vec::new(),
            edges: Vec::new(),
            labels: Vec::new(),
            markers: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates the stand-in for a scene of an unsupported kind.
    pub fn placeholder() -> Self {
        Self::new(SceneKind::Unsupported)
    }

    /// Returns `true` if this graph stands in for an unsupported scene.
    pub fn is_placeholder(&self) -> bool {
        self.kind == SceneKind::Unsupported
    }

    pub fn kind(&self) -> SceneKind {
        self.kind
    }

    /// The logical canvas (`viewBox` size) of the scene.
    pub fn canvas(&self) -> Size {
        self.kind.canvas()
    }

    pub fn nodes(&self) -> &[ShapeNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn markers(&self) -> &[MarkerDefinition] {
        &self.markers
    }

    /// Returns the labels with the given role.
    pub fn labels_with_role(&self, role: LabelRole) -> impl Iterator<Item = &Label> {
        self.labels.iter().filter(move |label| label.role == role)
    }

    /// Returns the edges with the given role.
    pub fn edges_with_role(&self, role: EdgeRole) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |edge| edge.role == role)
    }

    /// Looks up a node by rendered identifier.
    ///
    /// With duplicate identifiers the first node added wins.
    pub fn node(&self, id: Id) -> Option<&ShapeNode> {
        self.index.get(&id).map(|&i| &self.nodes[i])
    }

    /// Returns the rendered identifiers of all nodes, in drawing order.
    pub fn node_ids(&self) -> impl Iterator<Item = Id> + '_ {
        self.nodes.iter().map(ShapeNode::id)
    }

    pub fn add_node(&mut self, node: ShapeNode) {
        let position = self.nodes.len();
        if self.index.contains_key(&node.id) {
            warn!(node_id:% = node.id; "Duplicate node identifier, lookups resolve to the first");
        } else {
            self.index.insert(node.id, position);
        }
        self.nodes.push(node);
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn add_label(&mut self, role: LabelRole, text: Text) {
        self.labels.push(Label::new(role, text));
    }

    /// Declares a marker, once per identifier.
    pub fn add_marker(&mut self, marker: MarkerDefinition) {
        if self.markers.iter().all(|m| m.id() != marker.id()) {
            self.markers.push(marker);
        }
    }

    /// Applies `paint` to the node `id`.
    ///
    /// Returns `false`, leaving the graph untouched, when no such node exists.
    pub fn apply(&mut self, id: Id, paint: &Paint) -> bool {
        match self.index.get(&id) {
            Some(&i) => {
                self.nodes[i].appearance.apply(paint);
                true
            }
            None => false,
        }
    }
}
