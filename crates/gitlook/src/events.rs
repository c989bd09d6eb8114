//! Typed notification channels between the tutorial, quizzes and the host.
//!
//! Every channel is passed to its publishers and subscribers explicitly; no
//! global event target exists. Event payloads serialize with the field
//! names lesson pages use (`direction`, `isCorrect`, `explanation`).

use std::{cell::RefCell, fmt, rc::Rc};

use serde::{Deserialize, Serialize};

type Subscriber<T> = Rc<dyn Fn(&T)>;

/// A single-threaded observer list for events of type `T`.
pub struct Channel<T> {
    subscribers: RefCell<Vec<Subscriber<T>>>,
}

impl<T> Channel<T> {
    pub fn new() -> Self {
        Self {
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Registers `handler` to be called for every later emitted event.
    pub fn subscribe(&self, handler: impl Fn(&T) + 'static) {
        self.subscribers.borrow_mut().push(Rc::new(handler));
    }

    /// Calls every subscriber with `event`, in subscription order.
    ///
    /// Subscribers may emit or subscribe from within their handler; handlers
    /// added during an emit are first called for the next event.
    pub fn emit(&self, event: &T) {
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            subscriber(event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

impl<T> Default for Channel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Channel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Direction of a module navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Next,
    Prev,
}

/// Request to move to the next or previous lesson module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigateModule {
    pub direction: Direction,
}

impl NavigateModule {
    pub fn next() -> Self {
        Self {
            direction: Direction::Next,
        }
    }

    pub fn prev() -> Self {
        Self {
            direction: Direction::Prev,
        }
    }
}

/// Outcome of answering one quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizFeedback {
    pub is_correct: bool,
    pub explanation: String,
}

/// The channels shared by one tutorial instance.
#[derive(Debug, Default)]
pub struct Channels {
    pub navigate: Channel<NavigateModule>,
    pub quiz_feedback: Channel<QuizFeedback>,
}

impl Channels {
    pub fn new() -> Self {
        Self::default()
    }
}
