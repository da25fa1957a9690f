use std::time::{Duration, Instant};

/// Quiet period after the last layout event before reconciling.
pub const RECONCILE_DEBOUNCE: Duration = Duration::from_millis(300);

/// Trailing-edge debounce. Each `trigger` pushes the deadline out; nothing
/// runs until the stream has been quiet for the configured delay, then
/// `fire` reports ready exactly once.
///
/// Callers pass `now` explicitly so behaviour is reproducible under test.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Record an event and restart the quiet period.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// True once the deadline has passed; disarms on the way out so a burst
    /// of events yields a single firing.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}
