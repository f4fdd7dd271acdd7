//! Cancel-and-reschedule timer for search input.
//!
//! Every keystroke schedules a filter pass `delay` in the future and drops
//! whatever pass was pending, so a burst of input produces a single pass once
//! the user pauses. Time is passed in explicitly; the caller owns the clock
//! and the wait (typically `recv_timeout(debouncer.timeout(now))`).

use std::time::{Duration, Instant};

pub const DEFAULT_DEBOUNCE_MS: u64 = 200;

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `value`, replacing any pending one.
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Takes the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self.pending.as_ref().map(|(_, due)| *due)?;
        if now >= due {
            self.cancel()
        } else {
            None
        }
    }

    /// Time left until the pending value is due. `None` when idle.
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(_, due)| due.saturating_duration_since(now))
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }
}
