//! GitLook - declarative, timed animations for an interactive Git tutorial.
//!
//! Lesson content describes each animation as a scene: workflow steps,
//! repository areas, branch histories, process stages or command
//! comparisons. This crate renders scenes into addressable visual graphs,
//! plays timed highlight sequences over them and dispatches a module's
//! animations to the mount points its host provides.
//!
//! # Pipeline
//!
//! ```text
//! Curriculum JSON
//!     ↓ load + validate (gitlook-content)
//! SceneDescription
//!     ↓ render
//! VisualGraph (in a MountPoint)
//!     ↓ play (Scheduler)
//! Highlighted frames / exported SVG
//! ```

pub mod config;
pub mod events;
pub mod export;
pub mod graph;
pub mod host;
pub mod mount;
pub mod quiz;
pub mod render;
pub mod schedule;
pub mod sequence;
pub mod tutorial;

mod error;

pub use gitlook_core::{color, draw, geometry, identifier, lesson, scene};

pub use error::GitlookError;

use std::rc::Rc;

use log::{debug, info};

use gitlook_content::error::Diagnostic;
use gitlook_core::{lesson::Curriculum, scene::SceneDescription};

use config::AppConfig;
use events::Channels;
use export::{Exporter, svg::SvgExporter};
use host::AnimationHost;
use render::Renderer;
use schedule::Scheduler;
use sequence::Sequencer;

/// Builder for loading curricula and wiring the animation engine.
///
/// # Examples
///
/// ```rust
/// use gitlook::{AnimationBuilder, config::AppConfig};
///
/// let source = r#"{ "modules": [{ "id": "basics", "animations": [{
///     "id": "flow",
///     "animationData": { "type": "workflow", "steps": [
///         { "id": "s1", "text": "Edit", "position": { "x": 100, "y": 150 } }
///     ] }
/// }] }] }"#;
///
/// let builder = AnimationBuilder::new(AppConfig::default());
/// let (curriculum, warnings) = builder.load(source).expect("Failed to load");
/// assert!(warnings.is_empty());
///
/// let scene = &curriculum.modules[0].animations[0].animation_data;
/// let svg = builder.render_svg(scene).expect("Failed to render");
/// assert!(svg.contains("circle-s1"));
/// ```
#[derive(Default)]
pub struct AnimationBuilder {
    config: AppConfig,
}

impl AnimationBuilder {
    /// Create a new builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Load and validate curriculum JSON.
    ///
    /// Returns the curriculum together with its validation warnings.
    ///
    /// # Errors
    ///
    /// Returns [`GitlookError::Content`] when the source is not valid lesson
    /// content, or when strict validation is configured and any warning was
    /// reported.
    pub fn load(&self, source: &str) -> Result<(Curriculum, Vec<Diagnostic>), GitlookError> {
        info!("Loading curriculum");
        let strict = self.config.validation().strict();
        let (curriculum, warnings) = gitlook_content::check(source, strict)
            .map_err(|err| GitlookError::new_content_error(err, source))?;

        debug!(modules = curriculum.len(), warnings = warnings.len(); "Curriculum loaded");
        Ok((curriculum, warnings))
    }

    /// Create a renderer with the configured palette.
    ///
    /// # Errors
    ///
    /// Returns [`GitlookError::Config`] if a configured color is invalid.
    pub fn renderer(&self) -> Result<Renderer, GitlookError> {
        let palette = self.config.style().palette().map_err(GitlookError::Config)?;
        Ok(Renderer::new(palette))
    }

    /// Create a sequencer with the configured palette.
    ///
    /// # Errors
    ///
    /// Returns [`GitlookError::Config`] if a configured color is invalid.
    pub fn sequencer(&self) -> Result<Sequencer, GitlookError> {
        let palette = self.config.style().palette().map_err(GitlookError::Config)?;
        Ok(Sequencer::new(palette))
    }

    /// Create an SVG exporter with the configured background.
    ///
    /// # Errors
    ///
    /// Returns [`GitlookError::Config`] if the background color is invalid.
    pub fn exporter(&self) -> Result<SvgExporter, GitlookError> {
        let background = self
            .config
            .style()
            .background_color()
            .map_err(GitlookError::Config)?;
        Ok(SvgExporter::new().with_background(background))
    }

    /// Create an animation host driven by `scheduler`, subscribed to `channels`.
    ///
    /// # Errors
    ///
    /// Returns [`GitlookError::Config`] if a configured color is invalid.
    pub fn host(
        &self,
        scheduler: Rc<dyn Scheduler>,
        channels: &Channels,
    ) -> Result<AnimationHost, GitlookError> {
        Ok(AnimationHost::new(
            self.renderer()?,
            self.sequencer()?,
            scheduler,
            channels,
        ))
    }

    /// Render a scene in its initial state to an SVG string.
    ///
    /// Unsupported scenes render to the placeholder markup.
    ///
    /// # Errors
    ///
    /// Returns [`GitlookError::Config`] if a configured color is invalid.
    pub fn render_svg(&self, scene: &SceneDescription) -> Result<String, GitlookError> {
        let graph = self.renderer()?.build(scene);
        let svg = self.exporter()?.export(&graph);
        info!(kind:% = scene.kind(); "SVG rendered successfully");
        Ok(svg)
    }
}
