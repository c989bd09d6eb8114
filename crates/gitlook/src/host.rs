//! Dispatch of lesson animations to mount points.

use std::rc::Rc;

use log::{debug, info};

use gitlook_core::lesson::Animation;

use crate::{
    events::Channels,
    mount::MountRegistry,
    render::Renderer,
    schedule::Scheduler,
    sequence::Sequencer,
};

/// Renders and plays animations into the mount points a host provides.
pub struct AnimationHost {
    renderer: Renderer,
    sequencer: Sequencer,
    scheduler: Rc<dyn Scheduler>,
}

impl AnimationHost {
    /// Creates a host and subscribes it to quiz feedback on `channels`.
    ///
    /// The host only logs feedback; presenting it is up to the page.
    pub fn new(
        renderer: Renderer,
        sequencer: Sequencer,
        scheduler: Rc<dyn Scheduler>,
        channels: &Channels,
    ) -> Self {
        channels.quiz_feedback.subscribe(|feedback| {
            info!(
                is_correct = feedback.is_correct,
                explanation = feedback.explanation.as_str();
                "Quiz feedback"
            );
        });

        Self {
            renderer,
            sequencer,
            scheduler,
        }
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    pub fn scheduler(&self) -> &Rc<dyn Scheduler> {
        &self.scheduler
    }

    /// Renders each animation into its `{id}-canvas` mount point and starts
    /// its playback.
    ///
    /// Animations whose mount point is absent are skipped. Returns the number
    /// of animations mounted.
    pub fn setup_animations(&self, registry: &dyn MountRegistry, animations: &[Animation]) -> usize {
        let mut mounted = 0;
        for animation in animations {
            let canvas_id = animation.canvas_id();
            let Some(mount) = registry.resolve(&canvas_id) else {
                debug!(animation = animation.id.as_str(), mount = canvas_id.as_str(); "Mount point not found");
                continue;
            };

            let handle = self.renderer.render(&mount, &animation.animation_data);
            self.sequencer
                .play(&animation.animation_data, &handle, self.scheduler.as_ref());
            mounted += 1;
        }

        info!(mounted, total = animations.len(); "Animations set up");
        mounted
    }
}

#[cfg(test)]
mod tests {
    use gitlook_core::scene::SceneDescription;

    use super::*;
    use crate::{mount::MountTable, schedule::ManualScheduler};

    fn animation(id: &str) -> Animation {
        Animation {
            id: id.to_string(),
            title: String::new(),
            description: String::new(),
            animation_data: SceneDescription::Unsupported,
        }
    }

    #[test]
    fn test_missing_mount_is_skipped() {
        let channels = Channels::new();
        let host = AnimationHost::new(
            Renderer::default(),
            Sequencer::default(),
            Rc::new(ManualScheduler::new()),
            &channels,
        );
        let mut table = MountTable::new();
        let present = table.insert("shown-canvas");

        let mounted = host.setup_animations(&table, &[animation("shown"), animation("hidden")]);

        assert_eq!(mounted, 1);
        assert!(!present.is_empty());
        assert_eq!(channels.quiz_feedback.subscriber_count(), 1);
    }
}
