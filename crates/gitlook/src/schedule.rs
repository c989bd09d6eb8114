//! Deferred task execution.
//!
//! The sequencer and quiz sessions never sleep; they hand tasks to a
//! [`Scheduler`] with a delay relative to the moment of scheduling. Hosts
//! provide the clock. [`ManualScheduler`] is a virtual clock advanced
//! explicitly, which makes playback deterministic in tests and lets the CLI
//! sample frames at exact offsets.

use std::{
    cell::RefCell,
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
    fmt,
    time::Duration,
};

use log::trace;

/// A unit of deferred work.
pub type Task = Box<dyn FnOnce()>;

/// Runs tasks after a delay.
pub trait Scheduler {
    /// Schedules `task` to run `delay` after now.
    ///
    /// Tasks with equal due times run in scheduling order.
    fn schedule(&self, delay: Duration, task: Task);
}

struct Entry {
    due: Duration,
    seq: u64,
    task: Task,
}

impl Entry {
    fn key(&self) -> (Duration, u64) {
        (self.due, self.seq)
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

#[derive(Default)]
struct Queue {
    now: Duration,
    seq: u64,
    pending: BinaryHeap<Reverse<Entry>>,
}

/// A virtual clock that runs tasks only when advanced.
///
/// Ready tasks are popped in `(due, scheduling order)` order. A running task
/// may schedule further tasks; their delays are measured from the running
/// task's due time.
///
/// # Examples
///
/// ```
/// # use std::{cell::Cell, rc::Rc, time::Duration};
/// # use gitlook::schedule::{ManualScheduler, Scheduler};
/// let scheduler = ManualScheduler::new();
/// let fired = Rc::new(Cell::new(false));
///
/// let flag = Rc::clone(&fired);
/// scheduler.schedule(Duration::from_millis(500), Box::new(move || flag.set(true)));
///
/// scheduler.advance(Duration::from_millis(499));
/// assert!(!fired.get());
/// scheduler.advance(Duration::from_millis(1));
/// assert!(fired.get());
/// ```
#[derive(Default)]
pub struct ManualScheduler {
    queue: RefCell<Queue>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current virtual time.
    pub fn now(&self) -> Duration {
        self.queue.borrow().now
    }

    /// Returns the number of tasks not yet run.
    pub fn pending(&self) -> usize {
        self.queue.borrow().pending.len()
    }

    /// Returns the due time of the next task, if any.
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.borrow().pending.peek().map(|Reverse(entry)| entry.due)
    }

    /// Moves the clock forward by `step`, running every task that becomes due.
    ///
    /// Returns the number of tasks run.
    pub fn advance(&self, step: Duration) -> usize {
        let target = self.now() + step;
        self.advance_to(target)
    }

    /// Moves the clock to `target`, running every task due at or before it.
    ///
    /// A target in the past runs nothing and leaves the clock unchanged.
    pub fn advance_to(&self, target: Duration) -> usize {
        let mut ran = 0;
        while let Some(task) = self.pop_due(target) {
            task();
            ran += 1;
        }

        let mut queue = self.queue.borrow_mut();
        if target > queue.now {
            queue.now = target;
        }
        trace!(now:? = queue.now, ran; "Scheduler advanced");
        ran
    }

    /// Runs tasks until none remain, moving the clock to each due time.
    ///
    /// Returns the number of tasks run.
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        while let Some(due) = self.next_due() {
            ran += self.advance_to(due);
        }
        ran
    }

    /// Pops the next task due at or before `target`, setting the clock to its
    /// due time. The queue borrow is released before the task runs.
    fn pop_due(&self, target: Duration) -> Option<Task> {
        let mut queue = self.queue.borrow_mut();
        if queue.pending.peek().is_none_or(|Reverse(entry)| entry.due > target) {
            return None;
        }
        let Reverse(entry) = queue.pending.pop()?;
        queue.now = queue.now.max(entry.due);
        Some(entry.task)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let mut queue = self.queue.borrow_mut();
        let due = queue.now + delay;
        let seq = queue.seq;
        queue.seq += 1;
        queue.pending.push(Reverse(Entry { due, seq, task }));
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let queue = self.queue.borrow();
        f.debug_struct("ManualScheduler")
            .field("now", &queue.now)
            .field("pending", &queue.pending.len())
            .finish()
    }
}
