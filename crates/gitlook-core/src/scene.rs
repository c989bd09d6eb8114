//! Declarative scene descriptions.
//!
//! A [`SceneDescription`] is the static, author-supplied data defining one
//! animation. It is a tagged union over the five supported scene shapes:
//!
//! - [`WorkflowScene`] - ordered steps joined by optional connections
//! - [`AreasScene`] - containers joined by directed flows
//! - [`BranchesScene`] - a main line of commits with branch offshoots
//! - [`ProcessScene`] - stages joined by directed transitions (cycles allowed)
//! - [`ComparisonScene`] - an ordered list of independent scenarios
//!
//! Descriptions deserialize from JSON objects whose `type` field selects the
//! variant. Unknown tags deserialize to [`SceneDescription::Unsupported`] so a
//! single unexpected animation never fails a whole lesson.
//!
//! # Example
//!
//! ```
//! # use gitlook_core::scene::{SceneDescription, SceneKind};
//! let scene: SceneDescription = serde_json::from_str(r#"{
//!     "type": "workflow",
//!     "steps": [
//!         { "id": "s1", "text": "Modify", "position": { "x": 50, "y": 100 } },
//!         { "id": "s2", "text": "Stage", "position": { "x": 200, "y": 100 } }
//!     ],
//!     "connections": [{ "from": "s1", "to": "s2", "label": "git add" }]
//! }"#).unwrap();
//!
//! assert_eq!(scene.kind(), SceneKind::Workflow);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Size};

/// Discriminant of a [`SceneDescription`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    Workflow,
    Areas,
    Branches,
    Process,
    Comparison,
    Unsupported,
}

impl SceneKind {
    /// Returns the name used for this kind in content files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Workflow => "workflow",
            Self::Areas => "areas",
            Self::Branches => "branches",
            Self::Process => "process",
            Self::Comparison => "comparison",
            Self::Unsupported => "unsupported",
        }
    }

    /// Returns the prefix of rendered node identifiers for this kind.
    ///
    /// A declared element `e` is rendered as the node `{prefix}-{e.id}`.
    pub fn node_prefix(self) -> &'static str {
        match self {
            Self::Workflow => "circle",
            Self::Areas => "area",
            Self::Branches => "commit",
            Self::Process => "stage",
            Self::Comparison => "scenario",
            Self::Unsupported => "unsupported",
        }
    }

    /// Returns the fixed logical canvas (the SVG `viewBox`) for this kind.
    pub fn canvas(self) -> Size {
        match self {
            Self::Workflow | Self::Process => Size::new(1000.0, 300.0),
            Self::Areas => Size::new(800.0, 300.0),
            Self::Branches => Size::new(500.0, 200.0),
            Self::Comparison => Size::new(800.0, 500.0),
            Self::Unsupported => Size::default(),
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A relation between two elements of the same scene, referenced by id.
///
/// Implemented by [`Connection`], [`Flow`] and [`Transition`] so the renderer
/// and the sequencer can treat every connective relation uniformly.
pub trait Relation {
    /// Identifier of the source element.
    fn from(&self) -> &str;

    /// Identifier of the target element.
    fn to(&self) -> &str;

    /// Returns `true` when the relation starts and ends at the same element.
    fn is_self_loop(&self) -> bool {
        self.from() == self.to()
    }
}

/// The static description of one animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SceneDescription {
    Workflow(WorkflowScene),
    Areas(AreasScene),
    Branches(BranchesScene),
    Process(ProcessScene),
    Comparison(ComparisonScene),
    /// Any scene whose `type` tag is not recognized.
    #[serde(other)]
    Unsupported,
}

impl SceneDescription {
    /// Returns the discriminant of this description.
    pub fn kind(&self) -> SceneKind {
        match self {
            Self::Workflow(_) => SceneKind::Workflow,
            Self::Areas(_) => SceneKind::Areas,
            Self::Branches(_) => SceneKind::Branches,
            Self::Process(_) => SceneKind::Process,
            Self::Comparison(_) => SceneKind::Comparison,
            Self::Unsupported => SceneKind::Unsupported,
        }
    }

    /// Returns the identifiers of every declared element, in declaration order.
    ///
    /// For branch scenes this lists the main line first, then each branch's
    /// commits in branch order.
    pub fn element_ids(&self) -> Vec<&str> {
        match self {
            Self::Workflow(scene) => scene.steps.iter().map(|s| s.id.as_str()).collect(),
            Self::Areas(scene) => scene.areas.iter().map(|a| a.id.as_str()).collect(),
            Self::Branches(scene) => scene
                .main_line
                .iter()
                .chain(scene.branches.iter().flat_map(|b| b.commits.iter()))
                .map(|c| c.id.as_str())
                .collect(),
            Self::Process(scene) => scene.stages.iter().map(|s| s.id.as_str()).collect(),
            Self::Comparison(scene) => scene.scenarios.iter().map(|s| s.id.as_str()).collect(),
            Self::Unsupported => Vec::new(),
        }
    }
}

// =============================================================================
// Workflow
// =============================================================================

/// Ordered steps drawn as circles, joined by optional labelled connections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowScene {
    #[serde(default)]
    pub steps: Vec<Step>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl WorkflowScene {
    /// Finds the first step declared with `id`.
    pub fn step(&self, id: &str) -> Option<&Step> {
        self.steps.iter().find(|step| step.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub id: String,
    #[serde(default)]
    pub text: String,
    pub position: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Relation for Connection {
    fn from(&self) -> &str {
        &self.from
    }

    fn to(&self) -> &str {
        &self.to
    }
}

// =============================================================================
// Areas
// =============================================================================

/// Named containers (working directory, index, repository, ...) joined by
/// directed flows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AreasScene {
    #[serde(default)]
    pub areas: Vec<Area>,
    #[serde(default)]
    pub flows: Vec<Flow>,
}

impl AreasScene {
    /// Finds the first area declared with `id`.
    pub fn area(&self, id: &str) -> Option<&Area> {
        self.areas.iter().find(|area| area.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub position: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flow {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Relation for Flow {
    fn from(&self) -> &str {
        &self.from
    }

    fn to(&self) -> &str {
        &self.to
    }
}

// =============================================================================
// Branches
// =============================================================================

/// A commit graph: one main line plus branches that fork from (and
/// optionally merge back into) main-line commits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchesScene {
    #[serde(default)]
    pub main_line: Vec<Commit>,
    #[serde(default)]
    pub branches: Vec<Branch>,
}

impl BranchesScene {
    /// Finds the first main-line commit declared with `id`.
    pub fn main_commit(&self, id: &str) -> Option<&Commit> {
        self.main_line.iter().find(|commit| commit.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    pub id: String,
    #[serde(default)]
    pub text: String,
    pub position: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub name: String,
    /// Main-line commit the branch forks from.
    pub start_from: String,
    #[serde(default)]
    pub commits: Vec<Commit>,
    /// Main-line commit the branch merges back into, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge_into: Option<String>,
}

// =============================================================================
// Process
// =============================================================================

/// Stages joined by directed transitions. Back-edges and self-loops are
/// allowed (a review cycle, for instance).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessScene {
    #[serde(default)]
    pub stages: Vec<Stage>,
    #[serde(default)]
    pub transitions: Vec<Transition>,
}

impl ProcessScene {
    /// Finds the first stage declared with `id`.
    pub fn stage(&self, id: &str) -> Option<&Stage> {
        self.stages.iter().find(|stage| stage.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub position: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Relation for Transition {
    fn from(&self) -> &str {
        &self.from
    }

    fn to(&self) -> &str {
        &self.to
    }
}

// =============================================================================
// Comparison
// =============================================================================

/// Independent scenarios highlighted one after another.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonScene {
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub command: String,
    #[serde(default)]
    pub description: String,
    /// Top-left corner of the scenario box.
    pub position: Point,
}
