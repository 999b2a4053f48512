//! Tick driver abstraction
//!
//! The simulation is advanced by an external fixed-period tick source. The
//! session only ever talks to this trait; hosts decide how timers actually
//! fire (a poll loop here, an event loop elsewhere, a fake in tests).

use std::time::{Duration, Instant};

/// Opaque timer identity. Handles are never reused within a service.
pub type TimerHandle = u64;

/// A scheduler for fixed-period and one-shot timers.
pub trait TimerService {
    /// Schedule a repeating timer. Fires every `period_ms` until cancelled.
    fn schedule_repeating(&mut self, period_ms: u64) -> TimerHandle;

    /// Schedule a timer that fires once after `delay_ms`.
    fn schedule_once(&mut self, delay_ms: u64) -> TimerHandle;

    /// Cancel a timer. Cancelling an unknown or already-cancelled handle is a
    /// no-op, never an error.
    fn cancel(&mut self, handle: TimerHandle);
}

struct TimerEntry {
    handle: TimerHandle,
    due: Instant,
    /// `Some` for repeating timers, `None` for one-shots
    period: Option<Duration>,
}

/// Poll-based timer service for the native loop.
///
/// The host calls [`PollTimers::poll`] each iteration and dispatches the
/// returned handles itself, which keeps timer delivery single-threaded.
pub struct PollTimers {
    next_handle: TimerHandle,
    timers: Vec<TimerEntry>,
}

impl Default for PollTimers {
    fn default() -> Self {
        Self::new()
    }
}

impl PollTimers {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            timers: Vec::new(),
        }
    }

    fn insert(&mut self, delay_ms: u64, period: Option<Duration>) -> TimerHandle {
        let handle = self.next_handle;
        self.next_handle += 1;
        self.timers.push(TimerEntry {
            handle,
            due: Instant::now() + Duration::from_millis(delay_ms),
            period,
        });
        handle
    }

    /// Collect the handles due at `now`, in due order. Repeating timers are
    /// re-armed one period out; one-shots are removed.
    pub fn poll(&mut self, now: Instant) -> Vec<TimerHandle> {
        self.timers.sort_by_key(|t| t.due);
        let mut fired = Vec::new();
        self.timers.retain_mut(|timer| {
            if timer.due > now {
                return true;
            }
            fired.push(timer.handle);
            match timer.period {
                Some(period) => {
                    // Re-arm from the deadline, not from `now`, so polling
                    // latency never drifts the cadence. A stall longer than a
                    // whole period skips ahead instead of firing a backlog.
                    timer.due += period;
                    if timer.due <= now {
                        timer.due = now + period;
                    }
                    true
                }
                None => false,
            }
        });
        fired
    }

    /// Earliest pending deadline, if any timer is armed.
    pub fn next_due(&self) -> Option<Instant> {
        self.timers.iter().map(|t| t.due).min()
    }
}

impl TimerService for PollTimers {
    fn schedule_repeating(&mut self, period_ms: u64) -> TimerHandle {
        self.insert(period_ms, Some(Duration::from_millis(period_ms)))
    }

    fn schedule_once(&mut self, delay_ms: u64) -> TimerHandle {
        self.insert(delay_ms, None)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.retain(|t| t.handle != handle);
    }
}
