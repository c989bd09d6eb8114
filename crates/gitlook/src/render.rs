//! The static renderer: scene descriptions to visual graphs.
//!
//! [`Renderer::build`] is a pure mapping from a [`SceneDescription`] to a
//! [`VisualGraph`]. [`Renderer::render`] installs the result into a mount
//! point, replacing whatever was rendered there before.
//!
//! Relations whose endpoints do not resolve among the scene's declared
//! elements are skipped without error; the content validator is where such
//! problems get reported.

use log::{debug, info};

use gitlook_core::{
    color::{Color, Palette},
    draw::{Appearance, FontWeight, MarkerDefinition, Shape, StrokeDefinition, Text, TextAnchor, TextDefinition},
    geometry::{Point, Size},
    identifier::Id,
    scene::{
        AreasScene, BranchesScene, Commit, ComparisonScene, ProcessScene, Relation,
        SceneDescription, SceneKind, WorkflowScene,
    },
};

use crate::{
    graph::{Edge, EdgePath, EdgeRole, LabelRole, ShapeNode, VisualGraph},
    mount::{MountPoint, SceneHandle},
};

const STEP_RADIUS: f32 = 30.0;
const COMMIT_RADIUS: f32 = 10.0;
const AREA_SIZE: Size = Size::new(160.0, 100.0);
const AREA_CORNER: f32 = 10.0;
const STAGE_SIZE: Size = Size::new(120.0, 80.0);
const STAGE_CORNER: f32 = 5.0;
const SCENARIO_SIZE: Size = Size::new(600.0, 80.0);
const SCENARIO_CORNER: f32 = 5.0;

/// Height a self-loop's control points rise above its node.
const LOOP_RISE: f32 = 40.0;

/// Marker shared by area flows.
pub const FLOW_MARKER: &str = "arrowhead";
/// Marker shared by process transitions.
pub const TRANSITION_MARKER: &str = "arrowhead-process";

/// Builds visual graphs with a fixed palette.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    palette: Palette,
}

impl Renderer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Clears `mount` and installs the graph built from `scene`.
    ///
    /// Returns the handle to the installed graph. Any handle obtained from an
    /// earlier render of the same mount point is orphaned.
    pub fn render(&self, mount: &MountPoint, scene: &SceneDescription) -> SceneHandle {
        mount.clear();
        let graph = self.build(scene);
        info!(
            mount = mount.id(),
            kind:% = graph.kind(),
            nodes = graph.nodes().len(),
            edges = graph.edges().len();
            "Scene rendered"
        );
        mount.install(graph)
    }

    /// Builds the visual graph for `scene`.
    pub fn build(&self, scene: &SceneDescription) -> VisualGraph {
        match scene {
            SceneDescription::Workflow(scene) => self.build_workflow(scene),
            SceneDescription::Areas(scene) => self.build_areas(scene),
            SceneDescription::Branches(scene) => self.build_branches(scene),
            SceneDescription::Process(scene) => self.build_process(scene),
            SceneDescription::Comparison(scene) => self.build_comparison(scene),
            SceneDescription::Unsupported => VisualGraph::placeholder(),
        }
    }

    // =========================================================================
    // Styles
    // =========================================================================

    fn text_style(&self, color: Color, size: Option<u16>, weight: FontWeight) -> TextDefinition {
        let mut style = TextDefinition::new();
        style.set_color(Some(color));
        if let Some(size) = size {
            style.set_font_size(size);
        }
        style.set_weight(weight);
        style
    }

    fn primary_text(&self) -> TextDefinition {
        self.text_style(self.palette.text(), None, FontWeight::Normal)
    }

    fn title_text(&self) -> TextDefinition {
        self.text_style(self.palette.text(), None, FontWeight::Bold)
    }

    fn detail_text(&self) -> TextDefinition {
        self.text_style(self.palette.muted(), Some(12), FontWeight::Normal)
    }

    /// Default appearance of container nodes (areas, stages, scenarios).
    fn container(&self) -> Appearance {
        Appearance::filled_stroked(
            self.palette.surface(),
            StrokeDefinition::new(self.palette.primary(), 2.0),
        )
    }

    fn accent_line(&self, width: f32) -> Appearance {
        Appearance::outline(StrokeDefinition::new(self.palette.accent(), width))
    }

    // =========================================================================
    // Relations
    // =========================================================================

    /// Resolves both endpoints of `relation` to rendered nodes.
    fn endpoints<'g>(
        graph: &'g VisualGraph,
        prefix: &str,
        relation: &impl Relation,
    ) -> Option<(&'g ShapeNode, &'g ShapeNode)> {
        let source = graph.node(Id::namespaced(prefix, relation.from()));
        let target = graph.node(Id::namespaced(prefix, relation.to()));
        match (source, target) {
            (Some(source), Some(target)) => Some((source, target)),
            _ => {
                debug!(
                    from = relation.from(),
                    to = relation.to();
                    "Skipping relation with unresolved endpoint"
                );
                None
            }
        }
    }

    /// Boundary-to-boundary geometry between two nodes, and the anchor point
    /// of its label before raising.
    fn relation_path(source: &ShapeNode, target: &ShapeNode) -> (EdgePath, Point) {
        if source.id() == target.id() {
            let bounds = source.shape().bounds(source.center());
            let center = source.center();
            let quarter = bounds.width() / 4.0;
            let top = bounds.min_y();

            let start = source.boundary_toward(Point::new(center.x() - quarter, top));
            let end = source.boundary_toward(Point::new(center.x() + quarter, top));
            let path = EdgePath::Loop {
                start,
                control1: Point::new(center.x() - bounds.width() / 2.0, top - LOOP_RISE),
                control2: Point::new(center.x() + bounds.width() / 2.0, top - LOOP_RISE),
                end,
            };
            // The curve's apex sits three quarters of the way up to its controls
            return (path, Point::new(center.x(), top - LOOP_RISE * 0.75));
        }

        let start = source.boundary_toward(target.center());
        let end = target.boundary_toward(source.center());
        let anchor = source.center().midpoint(target.center());
        (EdgePath::Polyline(vec![start, end]), anchor)
    }

    // =========================================================================
    // Workflow
    // =========================================================================

    fn build_workflow(&self, scene: &WorkflowScene) -> VisualGraph {
        let mut graph = VisualGraph::new(SceneKind::Workflow);
        let prefix = SceneKind::Workflow.node_prefix();

        for step in &scene.steps {
            graph.add_node(ShapeNode::new(
                Id::namespaced(prefix, &step.id),
                Shape::circle(STEP_RADIUS),
                step.position,
                Appearance::filled(self.palette.primary()),
            ));
            graph.add_label(
                LabelRole::Primary,
                Text::new(self.primary_text(), &step.text, step.position.offset(0.0, 60.0)),
            );
        }

        for connection in &scene.connections {
            let Some((source, target)) = Self::endpoints(&graph, prefix, connection) else {
                continue;
            };
            let (path, anchor) = Self::relation_path(source, target);
            graph.add_edge(Edge::new(EdgeRole::Connection, path, self.accent_line(3.0)));

            if let Some(label) = connection.label.as_deref().filter(|l| !l.is_empty()) {
                let style = self.text_style(self.palette.accent(), None, FontWeight::Normal);
                graph.add_label(
                    LabelRole::Edge,
                    Text::new(style, label, anchor.offset(0.0, -15.0)),
                );
            }
        }

        graph
    }

    // =========================================================================
    // Areas
    // =========================================================================

    fn build_areas(&self, scene: &AreasScene) -> VisualGraph {
        let mut graph = VisualGraph::new(SceneKind::Areas);
        let prefix = SceneKind::Areas.node_prefix();
        graph.add_marker(MarkerDefinition::arrowhead(FLOW_MARKER, self.palette.accent()));

        for area in &scene.areas {
            graph.add_node(ShapeNode::new(
                Id::namespaced(prefix, &area.id),
                Shape::rounded_rect(AREA_SIZE, AREA_CORNER),
                area.position,
                self.container(),
            ));
            graph.add_label(
                LabelRole::Primary,
                Text::new(self.title_text(), &area.name, area.position.offset(0.0, -20.0)),
            );
            if !area.description.is_empty() {
                graph.add_label(
                    LabelRole::Secondary,
                    Text::new(
                        self.detail_text(),
                        &area.description,
                        area.position.offset(0.0, 10.0),
                    ),
                );
            }
        }

        for flow in &scene.flows {
            let Some((source, target)) = Self::endpoints(&graph, prefix, flow) else {
                continue;
            };
            let (path, anchor) = Self::relation_path(source, target);
            graph.add_edge(
                Edge::new(EdgeRole::Flow, path, self.accent_line(2.0)).with_marker(FLOW_MARKER),
            );

            let action_at = anchor.offset(0.0, -15.0);
            let style = self.text_style(self.palette.accent(), None, FontWeight::Bold);
            graph.add_label(LabelRole::Edge, Text::new(style, &flow.action, action_at));

            if let Some(description) = flow.description.as_deref().filter(|d| !d.is_empty()) {
                graph.add_label(
                    LabelRole::Edge,
                    Text::new(self.detail_text(), description, action_at.offset(0.0, 15.0)),
                );
            }
        }

        graph
    }

    // =========================================================================
    // Branches
    // =========================================================================

    fn commit_node(&self, graph: &mut VisualGraph, commit: &Commit, fill: Color) {
        graph.add_node(ShapeNode::new(
            Id::namespaced(SceneKind::Branches.node_prefix(), &commit.id),
            Shape::circle(COMMIT_RADIUS),
            commit.position,
            Appearance::filled(fill),
        ));
        let style = self.text_style(self.palette.text(), Some(12), FontWeight::Normal);
        graph.add_label(
            LabelRole::Primary,
            Text::new(style, &commit.text, commit.position.offset(0.0, 25.0)),
        );
    }

    fn build_branches(&self, scene: &BranchesScene) -> VisualGraph {
        let mut graph = VisualGraph::new(SceneKind::Branches);

        if scene.main_line.len() >= 2 {
            let points = scene.main_line.iter().map(|c| c.position).collect();
            graph.add_edge(Edge::new(
                EdgeRole::MainLine,
                EdgePath::Polyline(points),
                Appearance::outline(StrokeDefinition::new(self.palette.primary(), 3.0)),
            ));
        }
        for commit in &scene.main_line {
            self.commit_node(&mut graph, commit, self.palette.primary());
        }

        for branch in &scene.branches {
            let start = scene.main_commit(&branch.start_from);
            match (start, branch.commits.first()) {
                (Some(start), Some(first)) => {
                    let merge = branch
                        .merge_into
                        .as_deref()
                        .and_then(|target| scene.main_commit(target));
                    let points = std::iter::once(start)
                        .chain(branch.commits.iter())
                        .chain(merge)
                        .map(|c| c.position)
                        .collect();
                    graph.add_edge(Edge::new(
                        EdgeRole::BranchLine,
                        EdgePath::Polyline(points),
                        self.accent_line(3.0),
                    ));

                    let style = self.text_style(self.palette.accent(), None, FontWeight::Bold);
                    graph.add_label(
                        LabelRole::BranchName,
                        Text::new(style, &branch.name, first.position.offset(0.0, -15.0)),
                    );
                }
                _ => debug!(
                    branch = branch.name.as_str(),
                    start_from = branch.start_from.as_str();
                    "Skipping branch line"
                ),
            }

            for commit in &branch.commits {
                self.commit_node(&mut graph, commit, self.palette.accent());
            }
        }

        graph
    }

    // =========================================================================
    // Process
    // =========================================================================

    fn build_process(&self, scene: &ProcessScene) -> VisualGraph {
        let mut graph = VisualGraph::new(SceneKind::Process);
        let prefix = SceneKind::Process.node_prefix();
        graph.add_marker(MarkerDefinition::arrowhead(
            TRANSITION_MARKER,
            self.palette.accent(),
        ));

        for stage in &scene.stages {
            graph.add_node(ShapeNode::new(
                Id::namespaced(prefix, &stage.id),
                Shape::rounded_rect(STAGE_SIZE, STAGE_CORNER),
                stage.position,
                self.container(),
            ));
            graph.add_label(
                LabelRole::Primary,
                Text::new(self.title_text(), &stage.name, stage.position.offset(0.0, -10.0)),
            );
            if !stage.description.is_empty() {
                graph.add_label(
                    LabelRole::Secondary,
                    Text::new(
                        self.detail_text(),
                        &stage.description,
                        stage.position.offset(0.0, 15.0),
                    ),
                );
            }
        }

        for transition in &scene.transitions {
            let Some((source, target)) = Self::endpoints(&graph, prefix, transition) else {
                continue;
            };
            let (path, anchor) = Self::relation_path(source, target);
            graph.add_edge(
                Edge::new(EdgeRole::Transition, path, self.accent_line(2.0))
                    .with_marker(TRANSITION_MARKER),
            );

            if let Some(label) = transition.label.as_deref().filter(|l| !l.is_empty()) {
                let style = self.text_style(self.palette.accent(), Some(12), FontWeight::Normal);
                graph.add_label(
                    LabelRole::Edge,
                    Text::new(style, label, anchor.offset(0.0, -10.0)),
                );
            }
        }

        graph
    }

    // =========================================================================
    // Comparison
    // =========================================================================

    fn build_comparison(&self, scene: &ComparisonScene) -> VisualGraph {
        let mut graph = VisualGraph::new(SceneKind::Comparison);
        let prefix = SceneKind::Comparison.node_prefix();

        for scenario in &scene.scenarios {
            // Scenario positions are top-left corners
            let origin = scenario.position;
            let center = origin.offset(SCENARIO_SIZE.width() / 2.0, SCENARIO_SIZE.height() / 2.0);
            graph.add_node(ShapeNode::new(
                Id::namespaced(prefix, &scenario.id),
                Shape::rounded_rect(SCENARIO_SIZE, SCENARIO_CORNER),
                center,
                self.container(),
            ));

            let mut title = self.title_text();
            title.set_anchor(TextAnchor::Start);
            graph.add_label(
                LabelRole::Primary,
                Text::new(title, &scenario.title, origin.offset(10.0, 20.0)),
            );

            if !scenario.command.is_empty() {
                let mut command = TextDefinition::new();
                command.set_color(Some(self.palette.accent()));
                command.set_family("monospace");
                command.set_anchor(TextAnchor::Start);
                graph.add_label(
                    LabelRole::Secondary,
                    Text::new(command, &scenario.command, origin.offset(10.0, 45.0)),
                );
            }
            if !scenario.description.is_empty() {
                let mut detail = self.detail_text();
                detail.set_anchor(TextAnchor::Start);
                graph.add_label(
                    LabelRole::Secondary,
                    Text::new(detail, &scenario.description, origin.offset(10.0, 70.0)),
                );
            }
        }

        graph
    }
}
