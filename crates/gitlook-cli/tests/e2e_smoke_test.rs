use std::{fs, path::PathBuf};

use tempfile::tempdir;

use gitlook::GitlookError;
use gitlook_cli::{Args, run};

/// The curriculum bundled at the workspace root
fn bundled_curriculum() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("content")
        .join("curriculum.json")
}

fn args(input: &str, output: &str) -> Args {
    Args {
        input: input.to_string(),
        output: output.to_string(),
        config: None,
        module: None,
        frames: false,
        strict: false,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_bundled_curriculum() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().to_string_lossy().to_string();
    let input = bundled_curriculum().to_string_lossy().to_string();

    let args = Args {
        strict: true,
        ..args(&input, &output)
    };
    run(&args).expect("bundled curriculum should render");

    let expected = [
        ("git-basics", "git-workflow-animation"),
        ("git-basics", "git-areas-animation"),
        ("git-branching", "branch-workflow-animation"),
        ("git-branching", "branch-visualization-animation"),
        ("git-collaboration", "collaboration-workflow-animation"),
        ("git-collaboration", "pull-request-animation"),
        ("git-troubleshooting", "merge-conflict-animation"),
        ("git-troubleshooting", "undo-changes-animation"),
    ];
    for (module, animation) in expected {
        let path = temp_dir.path().join(module).join(format!("{animation}.svg"));
        let svg = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("missing {}: {err}", path.display()));
        assert!(svg.contains("<svg"), "{} is not an SVG", path.display());
        assert!(svg.contains(r#"width="100%""#));
    }
}

#[test]
fn e2e_single_module_frames() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().to_string_lossy().to_string();
    let input = bundled_curriculum().to_string_lossy().to_string();

    let args = Args {
        module: Some("git-basics".to_string()),
        frames: true,
        ..args(&input, &output)
    };
    run(&args).expect("module should render");

    let module_dir = temp_dir.path().join("git-basics");
    assert!(module_dir.join("git-workflow-animation").join("0ms.svg").is_file());
    assert!(module_dir.join("git-workflow-animation").join("500ms.svg").is_file());
    assert!(module_dir.join("git-areas-animation").join("1500ms.svg").is_file());
    assert!(!temp_dir.path().join("git-branching").exists());

    // The first step is highlighted in the opening frame only
    let opening = fs::read_to_string(module_dir.join("git-workflow-animation").join("0ms.svg")).unwrap();
    let resting = fs::read_to_string(module_dir.join("git-workflow-animation.svg")).unwrap();
    assert_ne!(opening, resting);
}

#[test]
fn e2e_unsupported_scene_writes_placeholder() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("curriculum.json");
    fs::write(
        &input,
        r#"{ "modules": [{ "id": "future", "animations": [
            { "id": "timeline", "animationData": { "type": "timeline" } }
        ] }] }"#,
    )
    .unwrap();
    let output = temp_dir.path().join("out");

    run(&args(&input.to_string_lossy(), &output.to_string_lossy())).expect("placeholder run");

    let markup = fs::read_to_string(output.join("future").join("timeline.html")).unwrap();
    assert_eq!(markup, "<p>Animation type not supported</p>");
}

#[test]
fn e2e_strict_rejects_dangling_reference() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("curriculum.json");
    fs::write(
        &input,
        r#"{ "modules": [{ "id": "m", "animations": [{ "id": "w", "animationData": {
            "type": "workflow",
            "steps": [{ "id": "s1", "text": "Edit", "position": { "x": 50, "y": 50 } }],
            "connections": [{ "from": "s1", "to": "s2" }]
        } }] }] }"#,
    )
    .unwrap();
    let output = temp_dir.path().join("out").to_string_lossy().to_string();
    let input = input.to_string_lossy().to_string();

    run(&args(&input, &output)).expect("lenient run tolerates warnings");

    let strict = Args {
        strict: true,
        ..args(&input, &output)
    };
    assert!(matches!(run(&strict), Err(GitlookError::Content { .. })));
}

#[test]
fn e2e_unknown_module_is_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = bundled_curriculum().to_string_lossy().to_string();
    let args = Args {
        module: Some("git-internals".to_string()),
        ..args(&input, &temp_dir.path().to_string_lossy())
    };

    assert!(matches!(run(&args), Err(GitlookError::Io(_))));
}
