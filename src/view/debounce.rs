// src/view/debounce.rs
//
// Deadline-polled debouncer for burst-y inputs (the search box).
// Each submit re-arms the deadline; only the latest value survives.
// Poll-based rather than timer-based because the GUI is immediate mode:
// the frame loop asks "anything due?" and requests a repaint for the rest.

use std::time::{Duration, Instant};

pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    /// Replace any pending value and restart the quiet window from `now`.
    pub fn submit_at(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    pub fn submit(&mut self, value: T) {
        self.submit_at(value, Instant::now());
    }

    /// Take the pending value if its quiet window has elapsed.
    pub fn poll_at(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, due)) if now >= *due => self.pending.take().map(|(v, _)| v),
            _ => None,
        }
    }

    pub fn poll(&mut self) -> Option<T> {
        self.poll_at(Instant::now())
    }

    /// Drop whatever is pending without delivering it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time until the pending value is due; None when idle.
    /// Used to schedule the next repaint instead of busy-polling.
    pub fn time_left(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(_, due)| due.saturating_duration_since(now))
    }
}
