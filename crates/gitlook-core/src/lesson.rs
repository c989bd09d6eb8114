//! Lesson content consumed by the animation engine.
//!
//! A [`Curriculum`] is an ordered list of [`LessonModule`]s. Each module
//! carries markup content, an optional [`Quiz`] and the [`Animation`]s shown
//! alongside it. The engine itself only reads
//! [`Animation::animation_data`]; the rest is carried for the host.

use serde::{Deserialize, Serialize};

use crate::scene::SceneDescription;

/// The ordered set of lesson modules a learner walks through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Curriculum {
    #[serde(default)]
    pub modules: Vec<LessonModule>,
}

impl Curriculum {
    pub fn new(modules: Vec<LessonModule>) -> Self {
        Self { modules }
    }

    /// Returns the module at `index`, if it exists.
    pub fn module(&self, index: usize) -> Option<&LessonModule> {
        self.modules.get(index)
    }

    /// Returns the position of the module with the given id.
    pub fn position(&self, module_id: &str) -> Option<usize> {
        self.modules.iter().position(|module| module.id == module_id)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// One lesson module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonModule {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Lesson body as a markup string, rendered by the host.
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz: Option<Quiz>,
    #[serde(default)]
    pub animations: Vec<Animation>,
}

/// An animated diagram embedded in a lesson module.
///
/// The host provides a mount point named `{id}-canvas` for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub animation_data: SceneDescription,
}

impl Animation {
    /// Returns the mount point identifier this animation renders into.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gitlook_core::{lesson::Animation, scene::SceneDescription};
    /// let animation = Animation {
    ///     id: "git-areas-animation".to_string(),
    ///     title: String::new(),
    ///     description: String::new(),
    ///     animation_data: SceneDescription::Unsupported,
    /// };
    /// assert_eq!(animation.canvas_id(), "git-areas-animation-canvas");
    /// ```
    pub fn canvas_id(&self) -> String {
        canvas_id(&self.id)
    }
}

/// Returns the mount point identifier for the animation `animation_id`.
pub fn canvas_id(animation_id: &str) -> String {
    format!("{animation_id}-canvas")
}

/// A multiple-choice quiz attached to a module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Quiz {
    /// Finds the question with the given id.
    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub question: String,
    #[serde(default)]
    pub options: Vec<QuizOption>,
    /// Identifier of the correct option.
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: String,
}

impl Question {
    /// Returns `true` if `option_id` is the correct answer.
    pub fn is_correct(&self, option_id: &str) -> bool {
        self.correct_answer == option_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_deserializes_with_quiz_and_animations() {
        let module: LessonModule = serde_json::from_str(
            r#"{
                "id": "git-basics",
                "title": "Git Basics",
                "content": "<h2>Intro</h2>",
                "quiz": {
                    "id": "git-basics-quiz",
                    "title": "Quiz",
                    "questions": [{
                        "id": "q1",
                        "question": "What stages changes?",
                        "options": [{ "id": "q1-a", "text": "git add" }, { "id": "q1-b", "text": "git push" }],
                        "correctAnswer": "q1-a",
                        "explanation": "git add stages changes."
                    }]
                },
                "animations": [{
                    "id": "git-workflow-animation",
                    "title": "Workflow",
                    "animationData": { "type": "workflow", "steps": [] }
                }]
            }"#,
        )
        .unwrap();

        let quiz = module.quiz.as_ref().unwrap();
        let question = quiz.question("q1").unwrap();
        assert!(question.is_correct("q1-a"));
        assert!(!question.is_correct("q1-b"));
        assert_eq!(
            module.animations[0].canvas_id(),
            "git-workflow-animation-canvas"
        );
    }

    #[test]
    fn test_curriculum_lookup() {
        let curriculum: Curriculum = serde_json::from_str(
            r#"{ "modules": [{ "id": "a" }, { "id": "b" }] }"#,
        )
        .unwrap();

        assert_eq!(curriculum.len(), 2);
        assert_eq!(curriculum.position("b"), Some(1));
        assert!(curriculum.module(2).is_none());
    }
}
