// SPDX-License-Identifier: MPL-2.0
//! Per-toast lifecycle transitions.
//!
//! ```text
//! Hidden --reveal-> Pending --settle--> Visible --countdown/dismiss--> Removing --exit--> Removed
//!   ^                                    |   ^                           |
//!   +------------ overflow hide ---------+   +-- resume -- Paused <- pause (reverts removal)
//! ```
//!
//! Every removal goes through the coordinator gate. A refused request is
//! queued and retried when the blocking condition clears (a removal finishes,
//! a toast resumes or detaches), with a slow poll as a safety net.

use super::stack::ToastStack;
use super::timer::{Millis, TimerEvent, TimerPort};
use super::toast::{ToastId, ToastState, ToastTimers};
use crate::config::{INITIAL_SETTLE_MS, REMOVAL_POLL_MS, REVEAL_SETTLE_MS};
use crate::diagnostics::LifecycleEventKind;

impl<P: TimerPort> ToastStack<P> {
    /// Returns true if `id` may start its exit animation right now.
    ///
    /// False while another toast (or `id` itself) is removing, or while an
    /// earlier sibling is paused. Unknown ids are never blocked.
    #[must_use]
    pub fn may_start_removing(&self, id: ToastId) -> bool {
        if !self.toasts.contains_key(&id) {
            return true;
        }
        self.coordinator.may_start_removing(id)
    }

    /// Suspends the countdown of a toast under the pointer.
    ///
    /// A toast already playing its exit animation is pulled back to paused
    /// with the minimum remaining time. Sticky and manually dismissed toasts
    /// ignore pointer hover.
    pub fn pause(&mut self, id: ToastId) {
        let now = self.timers.now();
        let Some(toast) = self.toasts.get_mut(&id) else {
            return;
        };
        if toast.manually_dismissed || toast.is_sticky() {
            return;
        }
        let was_removing = match toast.state {
            ToastState::Visible => false,
            ToastState::Removing => true,
            _ => return,
        };

        let floor = toast.floor();
        toast.remaining = match toast.animation_started_at {
            Some(start) => toast
                .remaining
                .saturating_sub(now.saturating_sub(start))
                .max(floor),
            None if was_removing => floor,
            None => toast.display_duration().as_millis(),
        };
        toast.animation_started_at = None;
        ToastTimers::clear_slot(&mut toast.timers.removal, &mut self.timers);
        ToastTimers::clear_slot(&mut toast.timers.poll, &mut self.timers);
        self.coordinator.dequeue(id);

        let released = was_removing && self.coordinator.release(id);
        self.transition(id, ToastState::Paused);
        log::debug!("{} paused with {}ms left", id, self.remaining_of(id));

        if was_removing {
            // Back in the window, possibly pushing the newest toast out.
            self.enforce();
        }
        if released {
            self.wake_waiters();
        }
    }

    /// Restarts the countdown with the time left at pause.
    pub fn resume(&mut self, id: ToastId) {
        let now = self.timers.now();
        let Some(toast) = self.toasts.get_mut(&id) else {
            return;
        };
        if toast.state != ToastState::Paused || toast.manually_dismissed {
            return;
        }
        toast.remaining = toast.remaining.max(toast.floor());
        toast.animation_started_at = Some(now);
        let remaining = toast.remaining;

        self.transition(id, ToastState::Visible);
        self.arm_removal(id, remaining);
        self.wake_waiters();
    }

    /// Removes a toast on user request.
    ///
    /// The request is final: hover no longer pauses it. It still goes through
    /// the removal gate and waits its turn behind an active removal or a
    /// paused predecessor.
    pub fn dismiss(&mut self, id: ToastId) {
        let Some(toast) = self.toasts.get_mut(&id) else {
            return;
        };
        let already_dismissed = toast.manually_dismissed;
        toast.manually_dismissed = true;
        if matches!(toast.state, ToastState::Removing | ToastState::Removed) {
            return;
        }
        if already_dismissed && self.coordinator.is_waiting(id) {
            return;
        }

        toast.timers.cancel_all(&mut self.timers);
        self.coordinator.dequeue(id);
        let was_paused = toast.state == ToastState::Paused;
        log::debug!("{} dismissed", id);
        self.record(id, LifecycleEventKind::Dismissed);

        if was_paused {
            self.transition(id, ToastState::Visible);
        }
        self.request_removal(id);
    }

    /// Completes a removal once the exit animation has played.
    pub fn finish_removal(&mut self, id: ToastId) {
        if self.state(id) == Some(ToastState::Removing) {
            self.detach(id);
        }
    }

    // ======================================================================
    // Overflow hooks
    // ======================================================================

    /// Brings a hidden toast back into the overflow window.
    ///
    /// The layout is already live, so only a short settle delay precedes the
    /// entry animation, and the countdown restarts from the full duration.
    pub(crate) fn reveal(&mut self, id: ToastId) {
        let Some(toast) = self.toasts.get_mut(&id) else {
            return;
        };
        ToastTimers::clear_slot(&mut toast.timers.settle, &mut self.timers);
        ToastTimers::clear_slot(&mut toast.timers.removal, &mut self.timers);
        toast.remaining = toast.display_duration().as_millis();
        toast.animation_started_at = None;
        toast.appeared_at = None;
        toast.timers.settle = Some(
            self.timers
                .schedule(REVEAL_SETTLE_MS, TimerEvent::Settle(id)),
        );
        self.transition(id, ToastState::Pending);
    }

    /// Takes a toast out of the overflow window.
    ///
    /// A hidden toast forgets its countdown. A manual dismissal survives, so
    /// a dismissed toast stays queued and leaves once it is revealed again.
    pub(crate) fn hide(&mut self, id: ToastId) {
        let Some(toast) = self.toasts.get_mut(&id) else {
            return;
        };
        ToastTimers::clear_slot(&mut toast.timers.settle, &mut self.timers);
        ToastTimers::clear_slot(&mut toast.timers.removal, &mut self.timers);
        ToastTimers::clear_slot(&mut toast.timers.poll, &mut self.timers);
        if !toast.manually_dismissed {
            self.coordinator.dequeue(id);
        }
        toast.remaining = toast.display_duration().as_millis();
        toast.animation_started_at = None;
        toast.appeared_at = None;

        self.transition(id, ToastState::Hidden);
    }

    // ======================================================================
    // Timer callbacks
    // ======================================================================

    /// First frame after rendering: give the layout time to settle.
    pub(crate) fn on_frame(&mut self, id: ToastId) {
        let Some(toast) = self.toasts.get_mut(&id) else {
            return;
        };
        if toast.state != ToastState::Pending {
            return;
        }
        toast.timers.settle = Some(
            self.timers
                .schedule(INITIAL_SETTLE_MS, TimerEvent::Settle(id)),
        );
    }

    /// Layout settled: start the entry animation and the countdown.
    pub(crate) fn on_settle(&mut self, id: ToastId) {
        let now = self.timers.now();
        let Some(toast) = self.toasts.get_mut(&id) else {
            return;
        };
        // Hidden by overflow in the meantime.
        if toast.state != ToastState::Pending {
            return;
        }
        toast.appeared_at = Some(now);
        toast.animation_started_at = Some(now);
        toast.remaining = toast.display_duration().as_millis();
        let dismissed = toast.manually_dismissed;
        let countdown = (!toast.is_sticky() && !dismissed).then_some(toast.remaining);

        self.transition(id, ToastState::Visible);
        if dismissed {
            // Dismissed while hidden: back in the window, so take the turn now.
            self.request_removal(id);
        } else if let Some(delay) = countdown {
            self.arm_removal(id, delay);
        }
    }

    pub(crate) fn on_removal_timer(&mut self, id: ToastId) {
        let due = self
            .toasts
            .get(&id)
            .is_some_and(|t| t.state == ToastState::Visible && !t.manually_dismissed);
        if due {
            self.request_removal(id);
        }
    }

    pub(crate) fn on_poll(&mut self, id: ToastId) {
        if !self.coordinator.is_waiting(id) {
            return;
        }
        let Some(state) = self.state(id).filter(|s| s.is_member()) else {
            self.coordinator.dequeue(id);
            return;
        };
        // Hidden waiters stay queued without polling until revealed.
        if !state.occupies_slot() {
            return;
        }
        if self.coordinator.may_start_removing(id) {
            self.begin_removing(id);
        } else {
            self.arm_poll(id);
        }
    }

    // ======================================================================
    // Removal gate
    // ======================================================================

    fn request_removal(&mut self, id: ToastId) {
        let Some(state) = self.state(id) else {
            return;
        };
        if !state.is_member() {
            return;
        }
        if state.occupies_slot() && self.coordinator.may_start_removing(id) {
            self.begin_removing(id);
        } else {
            self.wait_for_removal(id);
        }
    }

    fn wait_for_removal(&mut self, id: ToastId) {
        if !self.coordinator.is_waiting(id) {
            self.coordinator.enqueue(id);
            log::debug!(
                "{} removal blocked (active: {:?})",
                id,
                self.coordinator.active()
            );
            self.record(id, LifecycleEventKind::RemovalBlocked);
        }
        if self.state(id).is_some_and(ToastState::occupies_slot) {
            self.arm_poll(id);
        }
    }

    /// Only a toast inside the overflow window may start its exit.
    fn begin_removing(&mut self, id: ToastId) {
        let Some(toast) = self.toasts.get_mut(&id) else {
            return;
        };
        if !toast.state.occupies_slot() {
            return;
        }
        ToastTimers::clear_slot(&mut toast.timers.settle, &mut self.timers);
        ToastTimers::clear_slot(&mut toast.timers.removal, &mut self.timers);
        ToastTimers::clear_slot(&mut toast.timers.poll, &mut self.timers);
        self.coordinator.begin(id);
        self.transition(id, ToastState::Removing);
        // The removing toast gave up its window slot.
        self.enforce();
    }

    /// Starts the earliest queued removal the gate now admits.
    ///
    /// Hidden toasts sort after every shown one, so a hidden head of the
    /// queue means nobody in the window is waiting.
    pub(crate) fn wake_waiters(&mut self) {
        while let Some(next) = self.coordinator.next_eligible() {
            match self.state(next) {
                Some(state) if state.occupies_slot() => {
                    self.begin_removing(next);
                    return;
                }
                Some(ToastState::Hidden) => return,
                _ => {
                    self.coordinator.dequeue(next);
                }
            }
        }
    }

    fn arm_removal(&mut self, id: ToastId, delay: Millis) {
        let Some(toast) = self.toasts.get_mut(&id) else {
            return;
        };
        ToastTimers::clear_slot(&mut toast.timers.removal, &mut self.timers);
        let delay = delay.max(toast.floor());
        toast.timers.removal = Some(self.timers.schedule(delay, TimerEvent::Removal(id)));
    }

    fn arm_poll(&mut self, id: ToastId) {
        let Some(toast) = self.toasts.get_mut(&id) else {
            return;
        };
        ToastTimers::clear_slot(&mut toast.timers.poll, &mut self.timers);
        toast.timers.poll = Some(self.timers.schedule(REMOVAL_POLL_MS, TimerEvent::Poll(id)));
    }

    fn remaining_of(&self, id: ToastId) -> Millis {
        self.toasts.get(&id).map_or(0, |t| t.remaining)
    }
}
