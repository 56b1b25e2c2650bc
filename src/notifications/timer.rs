// SPDX-License-Identifier: MPL-2.0
//! Clock and timer port.
//!
//! All lifecycle transitions run as callbacks on one logical event loop. The
//! callbacks are plain data ([`TimerEvent`]) so the owner of the loop pulls
//! them out of the port in due order with [`TimerPort::next_due`] and feeds
//! them back into the stack. No other suspension point exists.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use super::toast::ToastId;
use crate::config::FRAME_INTERVAL_MS;

/// Timestamps and delays, in milliseconds since the scheduler started.
pub type Millis = u64;

/// Identifies one armed callback. Handles are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Deferred work scheduled by the lifecycle engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// First paint tick after a toast was rendered.
    Frame(ToastId),
    /// Layout-settling delay elapsed; the entry animation may start.
    Settle(ToastId),
    /// Display countdown ran out.
    Removal(ToastId),
    /// Safety-net re-check of a blocked removal.
    Poll(ToastId),
    /// Overflow window re-enforcement pass.
    Enforce,
}

impl TimerEvent {
    /// Toast the callback belongs to, if any.
    #[must_use]
    pub fn toast(self) -> Option<ToastId> {
        match self {
            TimerEvent::Frame(id)
            | TimerEvent::Settle(id)
            | TimerEvent::Removal(id)
            | TimerEvent::Poll(id) => Some(id),
            TimerEvent::Enforce => None,
        }
    }
}

/// Schedules and cancels deferred callbacks.
pub trait TimerPort {
    /// Current time of the loop.
    fn now(&self) -> Millis;

    /// Arms `event` to fire `delay` milliseconds from now.
    fn schedule(&mut self, delay: Millis, event: TimerEvent) -> TimerHandle;

    /// Arms `event` to fire on the next layout/paint tick.
    fn request_frame(&mut self, event: TimerEvent) -> TimerHandle;

    /// Disarms a callback. Unknown or already fired handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);

    /// Pops the earliest callback due at or before `until`, moving the clock
    /// to its due time. When nothing is due the clock moves to `until` and
    /// `None` is returned.
    fn next_due(&mut self, until: Millis) -> Option<(TimerHandle, TimerEvent)>;

    /// Number of armed callbacks.
    fn pending(&self) -> usize;
}

/// Virtual-clock timer queue.
///
/// Time only moves when the owner asks for due callbacks, which makes every
/// interleaving reproducible. Callbacks due at the same instant fire in the
/// order they were armed.
#[derive(Debug)]
pub struct Scheduler {
    now: Millis,
    next_handle: u64,
    frame_interval: Millis,
    queue: BTreeMap<(Millis, TimerHandle), TimerEvent>,
    due_by_handle: HashMap<TimerHandle, Millis>,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::with_frame_interval(FRAME_INTERVAL_MS)
    }

    #[must_use]
    pub fn with_frame_interval(frame_interval: Millis) -> Self {
        Self {
            now: 0,
            next_handle: 0,
            frame_interval: frame_interval.max(1),
            queue: BTreeMap::new(),
            due_by_handle: HashMap::new(),
        }
    }

    /// Returns true if `handle` is still armed.
    #[must_use]
    pub fn is_armed(&self, handle: TimerHandle) -> bool {
        self.due_by_handle.contains_key(&handle)
    }

    /// Due time of the earliest armed callback.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        self.queue.keys().next().map(|(due, _)| *due)
    }

    fn arm(&mut self, due: Millis, event: TimerEvent) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.queue.insert((due, handle), event);
        self.due_by_handle.insert(handle, due);
        handle
    }
}

impl TimerPort for Scheduler {
    fn now(&self) -> Millis {
        self.now
    }

    fn schedule(&mut self, delay: Millis, event: TimerEvent) -> TimerHandle {
        self.arm(self.now.saturating_add(delay), event)
    }

    fn request_frame(&mut self, event: TimerEvent) -> TimerHandle {
        let next_tick = (self.now / self.frame_interval + 1) * self.frame_interval;
        self.arm(next_tick, event)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(due) = self.due_by_handle.remove(&handle) {
            self.queue.remove(&(due, handle));
        }
    }

    fn next_due(&mut self, until: Millis) -> Option<(TimerHandle, TimerEvent)> {
        let due_key = self
            .queue
            .keys()
            .next()
            .copied()
            .filter(|(due, _)| *due <= until);

        match due_key {
            Some(key) => {
                let event = self.queue.remove(&key)?;
                self.due_by_handle.remove(&key.1);
                self.now = self.now.max(key.0);
                Some((key.1, event))
            }
            None => {
                self.now = self.now.max(until);
                None
            }
        }
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}
