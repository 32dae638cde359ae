//! Timers expressed as plain state machines over caller-supplied timestamps.
//!
//! The browser layer arms real timeouts at [`PollSchedule::next_deadline`] /
//! [`Debouncer::trigger`] and feeds the captured deadline back in when they
//! fire; tests advance a virtual clock instead.

/// Fixed-interval schedule with an explicit start/stop lifecycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PollSchedule {
    interval_ms: u64,
    next_due_ms: Option<u64>,
}

impl PollSchedule {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            next_due_ms: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.next_due_ms.is_some()
    }

    /// Start the schedule with the first run due immediately.
    ///
    /// Returns `false` if it was already running; the existing deadline is kept.
    pub fn start(&mut self, now_ms: u64) -> bool {
        if self.is_running() {
            return false;
        }
        self.next_due_ms = Some(now_ms);
        true
    }

    pub fn stop(&mut self) {
        self.next_due_ms = None;
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.next_due_ms
    }

    /// Report whether a run is due at `now_ms`, and if so move the deadline
    /// to the first interval boundary after `now_ms`. Missed runs collapse
    /// into one.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        let Some(due) = self.next_due_ms else {
            return false;
        };
        if now_ms < due {
            return false;
        }
        let missed = (now_ms - due) / self.interval_ms;
        self.next_due_ms = Some(due + (missed + 1) * self.interval_ms);
        true
    }
}

/// Trailing-edge debouncer: only the last value of a burst is delivered, once
/// `wait_ms` has passed without another trigger.
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    wait_ms: u64,
    pending: Option<(u64, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(wait_ms: u64) -> Self {
        Self {
            wait_ms,
            pending: None,
        }
    }

    /// Replace any pending value and restart the quiet period.
    /// Returns the new deadline.
    pub fn trigger(&mut self, now_ms: u64, value: T) -> u64 {
        let deadline = now_ms + self.wait_ms;
        self.pending = Some((deadline, value));
        deadline
    }

    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    /// Take the pending value if its quiet period has elapsed by `now_ms`.
    pub fn advance(&mut self, now_ms: u64) -> Option<T> {
        match self.pending {
            Some((deadline, _)) if now_ms >= deadline => self.pending.take().map(|(_, v)| v),
            _ => None,
        }
    }
}
