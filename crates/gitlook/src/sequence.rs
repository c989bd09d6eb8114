//! Timed highlight sequences over rendered scenes.
//!
//! A [`Sequencer`] turns a scene description into a [`Playback`]: a sorted
//! list of [`Cue`]s, each one paint mutation of one node at a fixed offset
//! from the start of playback. Cue offsets depend only on element order in
//! the description, never on timing of the host.
//!
//! | Kind | Phase | Cues per phase |
//! |------|-------|----------------|
//! | workflow | 1000ms | step highlight at `0`, reset at `+500` |
//! | areas | 2000ms | source at `0`, target at `+500`, both reset at `+1500` |
//! | process | 2000ms | same as areas, stroke width untouched |
//! | comparison | 2000ms | scenario highlight at `0`, reset at `+1500` |
//! | branches | - | none |

use std::{rc::Rc, time::Duration};

use log::{debug, info, trace};

use gitlook_core::{
    color::Palette,
    draw::Paint,
    identifier::Id,
    scene::{Relation, SceneDescription, SceneKind},
};

use crate::{graph::VisualGraph, mount::SceneHandle, schedule::Scheduler};

/// Phase length of workflow scenes.
pub const WORKFLOW_PHASE: Duration = Duration::from_millis(1000);
/// Phase length of areas, process and comparison scenes.
pub const SEQUENCE_PHASE: Duration = Duration::from_millis(2000);

const WORKFLOW_RESET: Duration = Duration::from_millis(500);
const TARGET_DELAY: Duration = Duration::from_millis(500);
const RESET_DELAY: Duration = Duration::from_millis(1500);

/// Start of the `index`-th phase, saturating instead of wrapping.
fn phase_start(phase: Duration, index: usize) -> Duration {
    phase.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

/// One timed paint mutation of one rendered node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cue {
    offset: Duration,
    target: Id,
    paint: Paint,
}

impl Cue {
    pub fn new(offset: Duration, target: Id, paint: Paint) -> Self {
        Self {
            offset,
            target,
            paint,
        }
    }

    /// Time from the start of playback at which this cue fires.
    pub fn offset(&self) -> Duration {
        self.offset
    }

    pub fn target(&self) -> Id {
        self.target
    }

    pub fn paint(&self) -> &Paint {
        &self.paint
    }
}

/// The planned cues of one scene, sorted by offset.
///
/// Cues sharing an offset keep their planning order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Playback {
    cues: Vec<Cue>,
}

impl Playback {
    pub fn new(mut cues: Vec<Cue>) -> Self {
        cues.sort_by_key(Cue::offset);
        Self { cues }
    }

    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Offset of the last cue, or zero when there are none.
    pub fn duration(&self) -> Duration {
        self.cues.last().map_or(Duration::ZERO, Cue::offset)
    }

    /// Returns every distinct cue offset in increasing order.
    pub fn offsets(&self) -> Vec<Duration> {
        let mut offsets: Vec<Duration> = self.cues.iter().map(Cue::offset).collect();
        offsets.dedup();
        offsets
    }

    /// Applies every cue with an offset at or before `at` to `graph`.
    ///
    /// Applied to a freshly built graph, this yields the frame shown at time
    /// `at` of playback. Returns the number of cues that found their node.
    pub fn apply_until(&self, graph: &mut VisualGraph, at: Duration) -> usize {
        let end = self.cues.partition_point(|cue| cue.offset <= at);
        self.cues[..end]
            .iter()
            .filter(|cue| graph.apply(cue.target, &cue.paint))
            .count()
    }
}

/// Plans and schedules highlight sequences with a fixed palette.
#[derive(Debug, Clone, Default)]
pub struct Sequencer {
    palette: Palette,
}

impl Sequencer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    fn highlight(&self, with_width: bool) -> Paint {
        let paint = Paint::new()
            .with_fill(self.palette.highlight())
            .with_stroke(self.palette.accent());
        if with_width { paint.with_stroke_width(3.0) } else { paint }
    }

    fn reset(&self, with_width: bool) -> Paint {
        let paint = Paint::new()
            .with_fill(self.palette.surface())
            .with_stroke(self.palette.primary());
        if with_width { paint.with_stroke_width(2.0) } else { paint }
    }

    /// Computes the cues of `scene`.
    pub fn plan(&self, scene: &SceneDescription) -> Playback {
        let kind = scene.kind();
        let prefix = kind.node_prefix();
        let mut cues = Vec::new();

        match scene {
            SceneDescription::Workflow(scene) => {
                let on = Paint::new().with_fill(self.palette.accent());
                let off = Paint::new().with_fill(self.palette.primary());
                for (i, step) in scene.steps.iter().enumerate() {
                    let start = phase_start(WORKFLOW_PHASE, i);
                    let target = Id::namespaced(prefix, &step.id);
                    cues.push(Cue::new(start, target, on));
                    cues.push(Cue::new(start + WORKFLOW_RESET, target, off));
                }
            }
            SceneDescription::Areas(scene) => {
                self.plan_relations(&mut cues, prefix, &scene.flows, true);
            }
            SceneDescription::Process(scene) => {
                self.plan_relations(&mut cues, prefix, &scene.transitions, false);
            }
            SceneDescription::Comparison(scene) => {
                let on = self.highlight(false);
                let off = self.reset(false);
                for (i, scenario) in scene.scenarios.iter().enumerate() {
                    let start = phase_start(SEQUENCE_PHASE, i);
                    let target = Id::namespaced(prefix, &scenario.id);
                    cues.push(Cue::new(start, target, on));
                    cues.push(Cue::new(start + RESET_DELAY, target, off));
                }
            }
            SceneDescription::Branches(_) | SceneDescription::Unsupported => {}
        }

        debug!(kind:% = kind, cues = cues.len(); "Playback planned");
        Playback::new(cues)
    }

    fn plan_relations<R: Relation>(
        &self,
        cues: &mut Vec<Cue>,
        prefix: &str,
        relations: &[R],
        with_width: bool,
    ) {
        let on = self.highlight(with_width);
        let off = self.reset(with_width);
        for (i, relation) in relations.iter().enumerate() {
            let start = phase_start(SEQUENCE_PHASE, i);
            let source = Id::namespaced(prefix, relation.from());
            let target = Id::namespaced(prefix, relation.to());
            cues.push(Cue::new(start, source, on));
            cues.push(Cue::new(start + TARGET_DELAY, target, on));
            cues.push(Cue::new(start + RESET_DELAY, source, off));
            cues.push(Cue::new(start + RESET_DELAY, target, off));
        }
    }

    /// Schedules the cues of `scene` against `graph` and returns immediately.
    ///
    /// Each task holds a weak reference to the graph. Once the graph is
    /// replaced or dropped, its pending tasks do nothing. Returns the number
    /// of tasks scheduled.
    pub fn play(
        &self,
        scene: &SceneDescription,
        graph: &SceneHandle,
        scheduler: &dyn Scheduler,
    ) -> usize {
        let playback = self.plan(scene);
        for cue in playback.cues().iter().copied() {
            let graph = Rc::downgrade(graph);
            scheduler.schedule(
                cue.offset,
                Box::new(move || {
                    let Some(graph) = graph.upgrade() else {
                        trace!(target_node:% = cue.target; "Cue dropped for detached scene");
                        return;
                    };
                    let applied = graph.borrow_mut().apply(cue.target, &cue.paint);
                    trace!(
                        target_node:% = cue.target,
                        offset:? = cue.offset,
                        applied;
                        "Cue fired"
                    );
                }),
            );
        }

        if scene.kind() != SceneKind::Unsupported {
            info!(kind:% = scene.kind(), cues = playback.len(); "Playback started");
        }
        playback.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene(json: &str) -> SceneDescription {
        serde_json::from_str(json).unwrap()
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_workflow_cues_pulse_each_step() {
        let playback = Sequencer::default().plan(&scene(
            r#"{ "type": "workflow", "steps": [
                { "id": "a", "text": "A", "position": { "x": 0, "y": 0 } },
                { "id": "b", "text": "B", "position": { "x": 0, "y": 0 } }
            ] }"#,
        ));

        let offsets: Vec<_> = playback.cues().iter().map(Cue::offset).collect();
        assert_eq!(offsets, [ms(0), ms(500), ms(1000), ms(1500)]);
        assert_eq!(playback.cues()[2].target(), Id::new("circle-b"));
        assert_eq!(playback.duration(), ms(1500));
    }

    #[test]
    fn test_areas_cues_touch_source_then_target() {
        let palette = Palette::default();
        let playback = Sequencer::new(palette).plan(&scene(
            r#"{ "type": "areas", "flows": [{ "from": "wd", "to": "stage", "action": "git add" }] }"#,
        ));

        let cues = playback.cues();
        assert_eq!(cues.len(), 4);
        assert_eq!((cues[0].offset(), cues[0].target()), (ms(0), Id::new("area-wd")));
        assert_eq!((cues[1].offset(), cues[1].target()), (ms(500), Id::new("area-stage")));
        assert_eq!(cues[0].paint().stroke_width(), Some(3.0));
        assert_eq!(cues[3].paint().fill(), Some(palette.surface()));
        assert_eq!(playback.offsets(), [ms(0), ms(500), ms(1500)]);
    }

    #[test]
    fn test_process_cues_keep_stroke_width() {
        let playback = Sequencer::default().plan(&scene(
            r#"{ "type": "process", "transitions": [
                { "from": "a", "to": "b" }, { "from": "b", "to": "a" }
            ] }"#,
        ));

        assert_eq!(playback.len(), 8);
        assert_eq!(playback.cues()[4].offset(), ms(2000));
        assert!(playback.cues().iter().all(|c| c.paint().stroke_width().is_none()));
    }

    #[test]
    fn test_comparison_cues_pulse_each_scenario() {
        let palette = Palette::default();
        let playback = Sequencer::new(palette).plan(&scene(
            r#"{ "type": "comparison", "scenarios": [
                { "id": "a", "title": "Merge", "position": { "x": 100, "y": 50 } },
                { "id": "b", "title": "Rebase", "position": { "x": 100, "y": 250 } }
            ] }"#,
        ));

        let timeline: Vec<_> = playback
            .cues()
            .iter()
            .map(|cue| (cue.offset(), cue.target()))
            .collect();
        assert_eq!(
            timeline,
            [
                (ms(0), Id::new("scenario-a")),
                (ms(1500), Id::new("scenario-a")),
                (ms(2000), Id::new("scenario-b")),
                (ms(3500), Id::new("scenario-b")),
            ]
        );
        assert_eq!(playback.cues()[0].paint().fill(), Some(palette.highlight()));
        assert_eq!(playback.cues()[1].paint().fill(), Some(palette.surface()));
        assert!(playback.cues().iter().all(|c| c.paint().stroke_width().is_none()));
    }

    #[test]
    fn test_phase_start_saturates_large_indices() {
        assert_eq!(phase_start(SEQUENCE_PHASE, 3), ms(6000));
        assert_eq!(
            phase_start(WORKFLOW_PHASE, usize::MAX),
            WORKFLOW_PHASE * u32::MAX
        );
        assert!(phase_start(SEQUENCE_PHASE, usize::MAX) >= phase_start(SEQUENCE_PHASE, 1 << 20));
    }

    #[test]
    fn test_branches_have_no_cues() {
        let playback = Sequencer::default().plan(&scene(r#"{ "type": "branches" }"#));
        assert!(playback.is_empty());
        assert_eq!(playback.duration(), Duration::ZERO);
    }
}
