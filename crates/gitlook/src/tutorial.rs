//! Module navigation for a curriculum.
//!
//! A [`Tutorial`] shows one lesson module at a time. Loading a module
//! rebuilds the mount table with one `{animation.id}-canvas` mount per
//! animation, the way a lesson page provides its canvases, then hands the
//! animations to the [`AnimationHost`]. A module with a quiz also gets a
//! fresh [`QuizSession`]. Navigation requests arrive on the shared
//! [`Channels::navigate`] channel.

use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use log::{debug, info};

use gitlook_core::lesson::{Curriculum, LessonModule};

use crate::{
    events::{Channels, Direction},
    host::AnimationHost,
    mount::{MountPoint, MountRegistry, MountTable},
    quiz::QuizSession,
};

/// Walks a learner through the modules of a curriculum.
pub struct Tutorial {
    curriculum: Curriculum,
    current: Cell<usize>,
    mounts: RefCell<MountTable>,
    quiz: RefCell<Option<QuizSession>>,
    host: AnimationHost,
    channels: Rc<Channels>,
}

impl Tutorial {
    /// Creates a tutorial and subscribes it to navigation requests.
    ///
    /// The subscription holds a weak reference; dropping the returned `Rc`
    /// detaches the tutorial from the channel.
    pub fn new(curriculum: Curriculum, host: AnimationHost, channels: Rc<Channels>) -> Rc<Self> {
        let tutorial = Rc::new(Self {
            curriculum,
            current: Cell::new(0),
            mounts: RefCell::new(MountTable::new()),
            quiz: RefCell::new(None),
            host,
            channels: Rc::clone(&channels),
        });

        let weak: Weak<Self> = Rc::downgrade(&tutorial);
        channels.navigate.subscribe(move |event| {
            if let Some(tutorial) = weak.upgrade() {
                tutorial.navigate(event.direction);
            }
        });

        tutorial
    }

    pub fn curriculum(&self) -> &Curriculum {
        &self.curriculum
    }

    pub fn channels(&self) -> &Rc<Channels> {
        &self.channels
    }

    /// Index of the module currently shown.
    pub fn current_index(&self) -> usize {
        self.current.get()
    }

    pub fn current_module(&self) -> Option<&LessonModule> {
        self.curriculum.module(self.current.get())
    }

    /// Loads the first module.
    pub fn start(&self) {
        info!(modules = self.curriculum.len(); "Tutorial started");
        self.load_module(0);
    }

    /// Moves one module forward or back and reloads.
    ///
    /// At either end of the curriculum the index stays put and the current
    /// module is reloaded. Returns `true` when the current module changed.
    pub fn navigate(&self, direction: Direction) -> bool {
        let current = self.current.get();
        let target = match direction {
            Direction::Next if current + 1 < self.curriculum.len() => current + 1,
            Direction::Prev if current > 0 => current - 1,
            _ => {
                debug!(direction:? = direction, current; "Navigation at curriculum bound");
                current
            }
        };
        self.load_module(target) && target != current
    }

    /// Shows the module at `index`, rendering its animations.
    ///
    /// Returns `false` when no module exists at `index`.
    pub fn load_module(&self, index: usize) -> bool {
        let Some(module) = self.curriculum.module(index) else {
            debug!(index; "No module to load");
            return false;
        };
        self.current.set(index);

        let mut table = MountTable::new();
        for animation in &module.animations {
            table.insert(animation.canvas_id());
        }
        *self.mounts.borrow_mut() = table;

        *self.quiz.borrow_mut() = module.quiz.clone().map(|quiz| {
            QuizSession::new(
                quiz,
                Rc::clone(self.host.scheduler()),
                Rc::clone(&self.channels),
            )
        });

        let mounted = self
            .host
            .setup_animations(&*self.mounts.borrow(), &module.animations);
        info!(module = module.id.as_str(), index, mounted; "Module loaded");
        true
    }

    /// Returns the mount point named `id` of the current module.
    pub fn mount(&self, id: &str) -> Option<Rc<MountPoint>> {
        self.mounts.borrow().resolve(id)
    }

    /// Answers a question of the current module's quiz.
    ///
    /// Feedback follows on [`Channels::quiz_feedback`] after
    /// [`FEEDBACK_DELAY`](crate::quiz::FEEDBACK_DELAY). Returns `false` when
    /// the module has no quiz or no such question.
    pub fn select_answer(&self, question_id: &str, option_id: &str) -> bool {
        match self.quiz.borrow_mut().as_mut() {
            Some(session) => session.select(question_id, option_id),
            None => {
                debug!(question = question_id; "Current module has no quiz");
                false
            }
        }
    }

    /// Correct answers so far in the current module's quiz.
    pub fn quiz_score(&self) -> Option<usize> {
        self.quiz.borrow().as_ref().map(QuizSession::score)
    }

    /// Position in the curriculum as a percentage, counting the current
    /// module as visited. An empty curriculum reports zero.
    pub fn progress(&self) -> f32 {
        let total = self.curriculum.len();
        if total == 0 {
            return 0.0;
        }
        (self.current.get() + 1) as f32 / total as f32 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::{
        events::{NavigateModule, QuizFeedback},
        render::Renderer,
        schedule::ManualScheduler,
        sequence::Sequencer,
    };

    fn tutorial_with_scheduler(
        json: &str,
    ) -> (Rc<Tutorial>, Rc<Channels>, Rc<ManualScheduler>) {
        let curriculum: Curriculum = serde_json::from_str(json).unwrap();
        let channels = Rc::new(Channels::new());
        let scheduler = Rc::new(ManualScheduler::new());
        let host = AnimationHost::new(
            Renderer::default(),
            Sequencer::default(),
            scheduler.clone(),
            &channels,
        );
        let tutorial = Tutorial::new(curriculum, host, Rc::clone(&channels));
        (tutorial, channels, scheduler)
    }

    fn tutorial(json: &str) -> (Rc<Tutorial>, Rc<Channels>) {
        let (tutorial, channels, _) = tutorial_with_scheduler(json);
        (tutorial, channels)
    }

    #[test]
    fn test_navigation_is_clamped() {
        let (tutorial, channels) = tutorial(r#"{ "modules": [{ "id": "a" }, { "id": "b" }] }"#);
        tutorial.start();

        channels.navigate.emit(&NavigateModule::prev());
        assert_eq!(tutorial.current_index(), 0);

        channels.navigate.emit(&NavigateModule::next());
        channels.navigate.emit(&NavigateModule::next());
        assert_eq!(tutorial.current_index(), 1);
        assert_approx_eq!(f32, tutorial.progress(), 100.0);
    }

    #[test]
    fn test_navigation_at_bound_reloads_current_module() {
        let (tutorial, _channels, scheduler) = tutorial_with_scheduler(
            r#"{ "modules": [{ "id": "a", "animations": [
                { "id": "flow", "animationData": { "type": "workflow", "steps": [
                    { "id": "s1", "text": "Edit", "position": { "x": 100, "y": 150 } }
                ] } }
            ] }] }"#,
        );
        tutorial.start();
        let first = tutorial.mount("flow-canvas").unwrap().graph().unwrap();
        scheduler.run_until_idle();

        assert!(!tutorial.navigate(Direction::Next));
        assert_eq!(tutorial.current_index(), 0);

        let second = tutorial.mount("flow-canvas").unwrap().graph().unwrap();
        assert!(!Rc::ptr_eq(&first, &second));
        assert_eq!(scheduler.pending(), 2);
    }

    #[test]
    fn test_quiz_feedback_follows_selected_answer() {
        let (tutorial, channels, scheduler) = tutorial_with_scheduler(
            r#"{ "modules": [
                { "id": "a", "quiz": { "id": "a-quiz", "questions": [
                    { "id": "q1", "question": "Stage?", "correctAnswer": "q1-a",
                      "explanation": "git add stages changes",
                      "options": [{ "id": "q1-a", "text": "git add" }, { "id": "q1-b", "text": "git push" }] }
                ] } },
                { "id": "b" }
            ] }"#,
        );
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&received);
        channels
            .quiz_feedback
            .subscribe(move |feedback| sink.borrow_mut().push(feedback.clone()));
        tutorial.start();

        assert!(tutorial.select_answer("q1", "q1-a"));
        scheduler.advance(Duration::from_millis(499));
        assert!(received.borrow().is_empty());
        scheduler.advance(Duration::from_millis(1));
        assert_eq!(
            *received.borrow(),
            [QuizFeedback {
                is_correct: true,
                explanation: "git add stages changes".to_string(),
            }]
        );
        assert_eq!(tutorial.quiz_score(), Some(1));

        channels.navigate.emit(&NavigateModule::next());
        assert!(!tutorial.select_answer("q1", "q1-a"));
        assert_eq!(tutorial.quiz_score(), None);
    }

    #[test]
    fn test_load_module_creates_canvases() {
        let (tutorial, _channels) = tutorial(
            r#"{ "modules": [{ "id": "a", "animations": [
                { "id": "flow", "animationData": { "type": "workflow" } }
            ] }] }"#,
        );
        tutorial.start();

        let mount = tutorial.mount("flow-canvas").unwrap();
        assert!(!mount.is_empty());
        assert!(!tutorial.load_module(3));
    }

    #[test]
    fn test_empty_curriculum_progress() {
        let (tutorial, _channels) = tutorial(r#"{ "modules": [] }"#);
        tutorial.start();
        assert!(tutorial.current_module().is_none());
        assert_approx_eq!(f32, tutorial.progress(), 0.0);
    }
}
