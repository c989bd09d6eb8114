//! Example: Rendering a scene built in code
//!
//! This example builds a process scene directly from the scene model types,
//! without loading lesson content, and prints its SVG together with the
//! highlight cues its playback would fire.

use gitlook::{
    AnimationBuilder,
    geometry::Point,
    scene::{ProcessScene, SceneDescription, Stage, Transition},
    sequence::Sequencer,
};

fn stage(id: &str, name: &str, x: f32) -> Stage {
    Stage {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        position: Point::new(x, 150.0),
    }
}

fn transition(from: &str, to: &str, label: &str) -> Transition {
    Transition {
        from: from.to_string(),
        to: to.to_string(),
        label: Some(label.to_string()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let scene = SceneDescription::Process(ProcessScene {
        stages: vec![
            stage("branch", "Create Branch", 100.0),
            stage("commit", "Commit", 300.0),
            stage("review", "Review", 500.0),
            stage("merge", "Merge", 700.0),
        ],
        transitions: vec![
            transition("branch", "commit", "work"),
            transition("commit", "review", "open PR"),
            transition("review", "commit", "changes requested"),
            transition("review", "merge", "approve"),
        ],
    });

    let builder = AnimationBuilder::default();
    let svg = builder.render_svg(&scene)?;
    println!("{svg}\n");

    for cue in Sequencer::default().plan(&scene).cues() {
        println!("{:>6}ms  {}", cue.offset().as_millis(), cue.target());
    }

    Ok(())
}
