//! Timed playback against mounted scenes.

use std::{rc::Rc, time::Duration};

use gitlook::{
    color::Palette,
    events::Channels,
    host::AnimationHost,
    identifier::Id,
    lesson::Animation,
    mount::{MountPoint, MountRegistry, MountTable},
    render::Renderer,
    scene::SceneDescription,
    schedule::ManualScheduler,
    sequence::{Sequencer, WORKFLOW_PHASE},
};
use proptest::prelude::*;

fn scene(json: &str) -> SceneDescription {
    serde_json::from_str(json).expect("valid scene")
}

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

const AREAS: &str = r#"{ "type": "areas",
    "areas": [
        { "id": "wd", "name": "Working Directory", "position": { "x": 150, "y": 150 } },
        { "id": "stage", "name": "Staging Area", "position": { "x": 400, "y": 150 } }
    ],
    "flows": [{ "from": "wd", "to": "stage", "action": "git add" }] }"#;

#[test]
fn test_areas_highlight_and_reset() {
    let palette = Palette::default();
    let scene = scene(AREAS);
    let mount = MountPoint::new("areas-canvas");
    let scheduler = ManualScheduler::new();

    let handle = Renderer::new(palette).render(&mount, &scene);
    let scheduled = Sequencer::new(palette).play(&scene, &handle, &scheduler);
    assert_eq!(scheduled, 4);

    let fill = |id: &str| {
        handle
            .borrow()
            .node(Id::new(id))
            .and_then(|node| node.appearance().fill())
    };

    scheduler.advance_to(ms(0));
    assert_eq!(fill("area-wd"), Some(palette.highlight()));
    assert_eq!(fill("area-stage"), Some(palette.surface()));

    scheduler.advance_to(ms(500));
    assert_eq!(fill("area-stage"), Some(palette.highlight()));

    scheduler.advance_to(ms(1500));
    assert_eq!(fill("area-wd"), Some(palette.surface()));
    assert_eq!(fill("area-stage"), Some(palette.surface()));
    let node = handle.borrow().node(Id::new("area-wd")).cloned().expect("node");
    assert_eq!(node.appearance().stroke().map(|s| s.width()), Some(2.0));
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn test_comparison_highlight_and_reset() {
    let palette = Palette::default();
    let scene = scene(
        r#"{ "type": "comparison", "scenarios": [
            { "id": "merge", "title": "git merge", "position": { "x": 100, "y": 50 } },
            { "id": "rebase", "title": "git rebase", "position": { "x": 100, "y": 250 } }
        ] }"#,
    );
    let mount = MountPoint::new("comparison-canvas");
    let scheduler = ManualScheduler::new();

    let handle = Renderer::new(palette).render(&mount, &scene);
    assert_eq!(Sequencer::new(palette).play(&scene, &handle, &scheduler), 4);

    let fill = |id: &str| {
        handle
            .borrow()
            .node(Id::new(id))
            .and_then(|node| node.appearance().fill())
    };

    scheduler.advance_to(ms(0));
    assert_eq!(fill("scenario-merge"), Some(palette.highlight()));
    assert_eq!(fill("scenario-rebase"), Some(palette.surface()));

    scheduler.advance_to(ms(1500));
    assert_eq!(fill("scenario-merge"), Some(palette.surface()));

    scheduler.advance_to(ms(2000));
    assert_eq!(fill("scenario-rebase"), Some(palette.highlight()));

    scheduler.advance_to(ms(3500));
    assert_eq!(fill("scenario-rebase"), Some(palette.surface()));
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn test_cues_for_dangling_flow_are_noops() {
    let scene = scene(
        r#"{ "type": "areas",
             "areas": [{ "id": "wd", "name": "Working Directory", "position": { "x": 150, "y": 150 } }],
             "flows": [{ "from": "wd", "to": "remote", "action": "git push" }] }"#,
    );
    let mount = MountPoint::new("areas-canvas");
    let scheduler = ManualScheduler::new();

    let handle = Renderer::default().render(&mount, &scene);
    assert_eq!(Sequencer::default().play(&scene, &handle, &scheduler), 4);
    assert_eq!(scheduler.run_until_idle(), 4);
    assert_eq!(handle.borrow().nodes().len(), 1);
}

#[test]
fn test_stale_timers_do_not_touch_new_graph() {
    let palette = Palette::default();
    let scene = scene(AREAS);
    let mount = MountPoint::new("areas-canvas");
    let scheduler = ManualScheduler::new();
    let renderer = Renderer::new(palette);

    let stale = renderer.render(&mount, &scene);
    Sequencer::new(palette).play(&scene, &stale, &scheduler);
    drop(stale);

    let fresh = renderer.render(&mount, &scene);
    scheduler.advance_to(ms(0));

    let node = fresh.borrow().node(Id::new("area-wd")).cloned().expect("node");
    assert_eq!(node.appearance().fill(), Some(palette.surface()));
    assert_eq!(scheduler.pending(), 3);
}

#[test]
fn test_playback_frame_matches_scheduled_state() {
    let scene = scene(AREAS);
    let renderer = Renderer::default();
    let sequencer = Sequencer::default();
    let mount = MountPoint::new("areas-canvas");
    let scheduler = ManualScheduler::new();

    let live = renderer.render(&mount, &scene);
    sequencer.play(&scene, &live, &scheduler);
    scheduler.advance_to(ms(500));

    let mut frame = renderer.build(&scene);
    sequencer.plan(&scene).apply_until(&mut frame, ms(500));

    assert_eq!(*live.borrow(), frame);
}

#[test]
fn test_setup_skips_missing_mounts() {
    let channels = Channels::new();
    let scheduler = Rc::new(ManualScheduler::new());
    let host = AnimationHost::new(
        Renderer::default(),
        Sequencer::default(),
        scheduler.clone(),
        &channels,
    );
    let animations: Vec<Animation> = serde_json::from_str(
        r#"[
            { "id": "shown", "animationData": { "type": "workflow", "steps": [
                { "id": "s1", "text": "Edit", "position": { "x": 100, "y": 150 } }
            ] } },
            { "id": "absent", "animationData": { "type": "workflow" } }
        ]"#,
    )
    .expect("valid animations");

    let mut table = MountTable::new();
    table.insert("shown-canvas");

    assert_eq!(host.setup_animations(&table, &animations), 1);
    assert!(table.resolve("absent-canvas").is_none());
    assert_eq!(scheduler.pending(), 2);
}

fn workflow_with_steps(count: usize) -> SceneDescription {
    let steps: Vec<String> = (0..count)
        .map(|i| format!(r#"{{ "id": "s{i}", "text": "", "position": {{ "x": {i}, "y": 0 }} }}"#))
        .collect();
    scene(&format!(r#"{{ "type": "workflow", "steps": [{}] }}"#, steps.join(",")))
}

proptest! {
    #[test]
    fn workflow_offsets_follow_step_order(count in 0usize..12) {
        let scene = workflow_with_steps(count);
        let first = Sequencer::default().plan(&scene);
        let second = Sequencer::default().plan(&scene);
        prop_assert_eq!(&first, &second);

        for i in 0..count {
            let target = Id::new(&format!("circle-s{i}"));
            let offsets: Vec<Duration> = first
                .cues()
                .iter()
                .filter(|cue| cue.target() == target)
                .map(|cue| cue.offset())
                .collect();
            let start = WORKFLOW_PHASE * i as u32;
            prop_assert_eq!(offsets, vec![start, start + Duration::from_millis(500)]);
        }
    }

    #[test]
    fn node_ids_are_unique_for_unique_elements(ids in proptest::collection::hash_set("[a-z0-9-]{1,8}", 0..10)) {
        let steps: Vec<String> = ids
            .iter()
            .map(|id| format!(r#"{{ "id": "{id}", "text": "", "position": {{ "x": 0, "y": 0 }} }}"#))
            .collect();
        let graph = Renderer::default().build(&scene(&format!(
            r#"{{ "type": "workflow", "steps": [{}] }}"#,
            steps.join(",")
        )));

        let rendered: std::collections::HashSet<Id> = graph.node_ids().collect();
        prop_assert_eq!(rendered.len(), ids.len());
    }
}
