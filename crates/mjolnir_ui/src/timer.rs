//! Timer scheduling for click-and-hold auto-repeat.
//!
//! The widget never owns a clock. It asks a `TimerService` to schedule a
//! callback and later receives `Event::Timer(handle)` from the host loop.
//! `TimerQueue` is a single-threaded implementation a host can drive with
//! either wall-clock or virtual time.

use std::time::Duration;
use web_time::Instant;

use crate::event::ScrollEvent;

/// Identifies one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Raw id, mainly for logging.
    pub fn id(self) -> u64 {
        self.0
    }
}

/// One-shot timer scheduling provided by the host.
pub trait TimerService {
    /// Schedule a delivery of `Event::Timer` after `delay`.
    fn schedule(&mut self, delay: Duration) -> TimerHandle;

    /// Cancel a pending delivery. Unknown or already fired handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

/// Deadline-ordered timer queue.
///
/// Call `pop_due` in a loop to deliver every timer up to a point in time, in
/// deadline order. Each pop advances the queue clock to that timer's deadline,
/// so timers rescheduled from inside a delivery land where they would in real
/// time.
#[derive(Debug)]
pub struct TimerQueue {
    now: Instant,
    next_id: u64,
    pending: Vec<(Instant, TimerHandle)>,
}

impl Default for TimerQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerQueue {
    /// Queue whose clock starts at the current wall-clock time.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Queue whose clock starts at `now`.
    pub fn starting_at(now: Instant) -> Self {
        Self {
            now,
            next_id: 1,
            pending: Vec::new(),
        }
    }

    /// Current queue clock.
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Whether `handle` is still waiting to fire.
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|(_, h)| *h == handle)
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|(at, _)| *at).min()
    }

    /// Remove and return the earliest timer due at or before `until`.
    pub fn pop_due(&mut self, until: Instant) -> Option<TimerHandle> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, (at, _))| *at <= until)
            .min_by_key(|(_, (at, handle))| (*at, *handle))
            .map(|(index, _)| index)?;

        let (at, handle) = self.pending.remove(index);
        if at > self.now {
            self.now = at;
        }
        log::trace!("Timer {} fired", handle.id());
        Some(handle)
    }

    /// Move the clock forward without delivering anything.
    pub fn advance_to(&mut self, until: Instant) {
        if until > self.now {
            self.now = until;
        }
    }
}

impl TimerService for TimerQueue {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.push((self.now + delay, handle));
        log::trace!("Timer {} scheduled in {:?}", handle.id(), delay);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|(_, h)| *h != handle);
    }
}

/// Armed auto-repeat state.
///
/// Fires first after the initial pause, then shortens once to the steady
/// interval and keeps rescheduling itself until stopped.
#[derive(Debug)]
pub struct RepeatTimer {
    event: ScrollEvent,
    handle: TimerHandle,
    interval: Duration,
    steady: Duration,
}

impl RepeatTimer {
    /// Arm a repeat of `event` with the first firing after `first_delay`.
    pub fn start(
        timers: &mut dyn TimerService,
        event: ScrollEvent,
        first_delay: Duration,
        steady: Duration,
    ) -> Self {
        let handle = timers.schedule(first_delay);
        log::debug!("Auto-repeat armed for {:?}, first in {:?}", event, first_delay);
        Self {
            event,
            handle,
            interval: first_delay,
            steady,
        }
    }

    /// Event re-raised on each tick.
    pub fn event(&self) -> ScrollEvent {
        self.event
    }

    /// Interval until the next firing.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether `handle` belongs to this repeat.
    pub fn owns(&self, handle: TimerHandle) -> bool {
        self.handle == handle
    }

    /// Handle a firing: shorten the interval if still on the initial pause,
    /// reschedule, and return the event to raise.
    pub fn tick(&mut self, timers: &mut dyn TimerService) -> ScrollEvent {
        if self.interval > self.steady {
            self.interval = self.steady;
        }
        self.handle = timers.schedule(self.interval);
        self.event
    }

    /// Cancel any pending firing.
    pub fn stop(self, timers: &mut dyn TimerService) {
        timers.cancel(self.handle);
        log::debug!("Auto-repeat for {:?} stopped", self.event);
    }
}
