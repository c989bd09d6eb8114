//! CLI logic for the GitLook animation renderer.
//!
//! The CLI walks a curriculum the way a learner would: it starts the
//! tutorial, lets it mount each module's animations, and writes what every
//! mount point shows. With frame export enabled, it also advances the
//! playback clock through every cue time and writes each intermediate
//! frame.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs, io,
    path::{Path, PathBuf},
    rc::Rc,
    time::Duration,
};

use log::{debug, info, warn};

use gitlook::{
    AnimationBuilder, GitlookError,
    events::{Channels, NavigateModule},
    export::{Exporter, svg::SvgExporter},
    lesson::LessonModule,
    schedule::ManualScheduler,
    sequence::Sequencer,
    tutorial::Tutorial,
};
use gitlook_content::error::Diagnostic;

use error_adapter::{DiagnosticAdapter, render};

/// Run the GitLook CLI application
///
/// This function loads the curriculum, renders every animation of the
/// selected modules and writes the results below the output directory as
/// `<module-id>/<animation-id>.svg`. Unsupported scenes are written as
/// `.html` placeholders.
///
/// # Errors
///
/// Returns `GitlookError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Content errors, including warnings in strict mode
/// - Export errors
pub fn run(args: &Args) -> Result<(), GitlookError> {
    info!(
        input_path = args.input,
        output_dir = args.output;
        "Processing curriculum"
    );

    let app_config = config::load_config(args.config.as_ref())?.with_strict(args.strict);
    let source = fs::read_to_string(&args.input)?;

    let builder = AnimationBuilder::new(app_config);
    let (curriculum, warnings) = builder.load(&source)?;
    report_warnings(&warnings, &source);

    let selected = match &args.module {
        Some(id) => Some(curriculum.position(id).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no module with id `{id}` in {}", args.input),
            )
        })?),
        None => None,
    };

    let scheduler = Rc::new(ManualScheduler::new());
    let channels = Rc::new(Channels::new());
    let host = builder.host(scheduler.clone(), &channels)?;
    let tutorial = Tutorial::new(curriculum, host, Rc::clone(&channels));

    let session = ExportSession {
        output: PathBuf::from(&args.output),
        exporter: builder.exporter()?,
        sequencer: builder.sequencer()?,
        scheduler,
        frames: args.frames,
    };

    let mut written = 0;
    match selected {
        Some(index) => {
            tutorial.load_module(index);
            written += session.export_current(&tutorial)?;
        }
        None => {
            tutorial.start();
            loop {
                written += session.export_current(&tutorial)?;

                let before = tutorial.current_index();
                channels.navigate.emit(&NavigateModule::next());
                if tutorial.current_index() == before {
                    break;
                }
            }
        }
    }

    info!(files = written, output_dir = args.output; "Curriculum exported successfully");
    Ok(())
}

/// Renders content warnings to the log.
fn report_warnings(warnings: &[Diagnostic], source: &str) {
    for diag in warnings {
        warn!("{}", render(&DiagnosticAdapter::new(diag, source)));
    }
}

struct ExportSession {
    output: PathBuf,
    exporter: SvgExporter,
    sequencer: Sequencer,
    scheduler: Rc<ManualScheduler>,
    frames: bool,
}

impl ExportSession {
    /// Writes every mounted animation of the tutorial's current module.
    ///
    /// Returns the number of files written.
    fn export_current(&self, tutorial: &Tutorial) -> Result<usize, GitlookError> {
        let Some(module) = tutorial.current_module() else {
            debug!("Curriculum has no modules");
            return Ok(0);
        };

        let module_dir = self.output.join(&module.id);
        fs::create_dir_all(&module_dir)?;

        let mut written = 0;
        for animation in &module.animations {
            let Some(graph) = tutorial
                .mount(&animation.canvas_id())
                .and_then(|mount| mount.graph())
            else {
                continue;
            };

            let graph = graph.borrow();
            let extension = if graph.is_placeholder() { "html" } else { "svg" };
            let path = module_dir.join(format!("{}.{extension}", animation.id));
            self.exporter.write(&graph, &path)?;
            written += 1;
        }

        if self.frames {
            written += self.export_frames(tutorial, module, &module_dir)?;
        }

        info!(module = module.id.as_str(), files = written; "Module exported");
        Ok(written)
    }

    /// Advances the playback clock through every cue time of the module and
    /// writes the frame of each animation that changes at that time.
    fn export_frames(
        &self,
        tutorial: &Tutorial,
        module: &LessonModule,
        module_dir: &Path,
    ) -> Result<usize, GitlookError> {
        let started = self.scheduler.now();
        let timelines: Vec<_> = module
            .animations
            .iter()
            .map(|animation| (animation, self.sequencer.plan(&animation.animation_data).offsets()))
            .collect();

        let mut offsets: Vec<Duration> = timelines
            .iter()
            .flat_map(|(_, offsets)| offsets.iter().copied())
            .collect();
        offsets.sort();
        offsets.dedup();

        let mut written = 0;
        for offset in offsets {
            self.scheduler.advance_to(started + offset);

            for (animation, _) in timelines.iter().filter(|(_, o)| o.contains(&offset)) {
                let Some(graph) = tutorial
                    .mount(&animation.canvas_id())
                    .and_then(|mount| mount.graph())
                else {
                    continue;
                };

                let frame_dir = module_dir.join(&animation.id);
                fs::create_dir_all(&frame_dir)?;
                let path = frame_dir.join(format!("{}ms.svg", offset.as_millis()));
                self.exporter.write(&graph.borrow(), &path)?;
                written += 1;
            }
        }

        debug!(module = module.id.as_str(), frames = written; "Frames exported");
        Ok(written)
    }
}
