//! Answer tracking and delayed feedback for module quizzes.

use std::{collections::HashMap, rc::Rc, time::Duration};

use log::debug;

use gitlook_core::lesson::Quiz;

use crate::{
    events::{Channels, QuizFeedback},
    schedule::Scheduler,
};

/// Delay between selecting an option and its feedback.
pub const FEEDBACK_DELAY: Duration = Duration::from_millis(500);

/// One learner's pass through a quiz.
pub struct QuizSession {
    quiz: Quiz,
    answers: HashMap<String, String>,
    scheduler: Rc<dyn Scheduler>,
    channels: Rc<Channels>,
}

impl QuizSession {
    pub fn new(quiz: Quiz, scheduler: Rc<dyn Scheduler>, channels: Rc<Channels>) -> Self {
        Self {
            quiz,
            answers: HashMap::new(),
            scheduler,
            channels,
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    /// Records `option_id` as the answer to `question_id` and schedules its
    /// feedback.
    ///
    /// A later selection for the same question replaces the earlier one;
    /// both still produce feedback. Unknown questions are ignored and return
    /// `false`.
    pub fn select(&mut self, question_id: &str, option_id: &str) -> bool {
        let Some(question) = self.quiz.question(question_id) else {
            debug!(quiz = self.quiz.id.as_str(), question = question_id; "Unknown question");
            return false;
        };

        let feedback = QuizFeedback {
            is_correct: question.is_correct(option_id),
            explanation: question.explanation.clone(),
        };
        self.answers
            .insert(question_id.to_string(), option_id.to_string());

        let channels = Rc::clone(&self.channels);
        self.scheduler.schedule(
            FEEDBACK_DELAY,
            Box::new(move || channels.quiz_feedback.emit(&feedback)),
        );
        true
    }

    /// Returns the option selected for `question_id`.
    pub fn answer(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    /// Returns `true` once every question has an answer.
    pub fn is_complete(&self) -> bool {
        self.quiz
            .questions
            .iter()
            .all(|q| self.answers.contains_key(&q.id))
    }

    /// Number of questions currently answered correctly.
    pub fn score(&self) -> usize {
        self.quiz
            .questions
            .iter()
            .filter(|q| self.answer(&q.id).is_some_and(|answer| q.is_correct(answer)))
            .count()
    }
}
