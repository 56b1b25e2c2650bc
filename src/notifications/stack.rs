// SPDX-License-Identifier: MPL-2.0
//! The toast container.
//!
//! A [`ToastStack`] owns every toast of one on-screen container, the timer
//! port driving them and the removal coordinator shared between them. It is
//! also the registry mapping a [`ToastId`] to its toast: the rendering layer
//! addresses toasts by id and never holds on to them.
//!
//! Lifecycle transitions are implemented in `lifecycle.rs` and the overflow
//! window in `overflow.rs`, both as further `impl` blocks on this type.

use indexmap::IndexMap;

use super::coordinator::RemovalCoordinator;
use super::message::{FlashMessage, ToastInput};
use super::timer::{Millis, Scheduler, TimerEvent, TimerHandle, TimerPort};
use super::toast::{Toast, ToastId, ToastState, VisualFlags};
use crate::config::{Config, ENFORCE_FOLLOW_UP_MS, SCROLLED_THRESHOLD_PX};
use crate::diagnostics::{Journal, LifecycleEvent, LifecycleEventKind};
use crate::domain::toast::{DismissMode, VisibleLimit};

/// Which of a toast's timer slots a callback belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimerSlot {
    Settle,
    Removal,
    Poll,
}

/// Ordered set of sibling toasts sharing one overflow window and one
/// removal queue.
#[derive(Debug)]
pub struct ToastStack<P: TimerPort = Scheduler> {
    pub(crate) timers: P,
    /// Registry in document order, oldest first.
    pub(crate) toasts: IndexMap<ToastId, Toast>,
    pub(crate) coordinator: RemovalCoordinator,
    pub(crate) limit: VisibleLimit,
    /// Pending stack-wide overflow passes.
    enforce_passes: Vec<TimerHandle>,
    config: Config,
    journal: Journal,
    next_id: u64,
    scrolled: bool,
}

impl ToastStack<Scheduler> {
    /// Creates an empty stack driven by a virtual-clock [`Scheduler`].
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_timers(config, Scheduler::new())
    }
}

impl Default for ToastStack<Scheduler> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<P: TimerPort> ToastStack<P> {
    pub fn with_timers(config: Config, timers: P) -> Self {
        Self {
            timers,
            toasts: IndexMap::new(),
            coordinator: RemovalCoordinator::new(),
            limit: config.visible_limit(),
            enforce_passes: Vec::new(),
            journal: Journal::new(config.journal_capacity()),
            config,
            next_id: 0,
            scrolled: false,
        }
    }

    // ======================================================================
    // Queries
    // ======================================================================

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current time of the loop driving this stack.
    #[must_use]
    pub fn now(&self) -> Millis {
        self.timers.now()
    }

    #[must_use]
    pub fn timers(&self) -> &P {
        &self.timers
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.get(&id)
    }

    #[must_use]
    pub fn state(&self, id: ToastId) -> Option<ToastState> {
        self.toasts.get(&id).map(Toast::state)
    }

    /// Visual flags of a toast at the current time. Unknown ids have none.
    #[must_use]
    pub fn flags(&self, id: ToastId) -> VisualFlags {
        let now = self.now();
        self.toasts
            .get(&id)
            .map_or(VisualFlags::empty(), |toast| toast.flags(now))
    }

    /// All attached toasts in document order.
    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.values()
    }

    #[must_use]
    pub fn ids(&self) -> Vec<ToastId> {
        self.toasts.keys().copied().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Number of toasts in a given state.
    #[must_use]
    pub fn count(&self, state: ToastState) -> usize {
        self.toasts.values().filter(|t| t.state == state).count()
    }

    #[must_use]
    pub fn coordinator(&self) -> &RemovalCoordinator {
        &self.coordinator
    }

    /// Recorded lifecycle events, oldest first.
    #[must_use]
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Returns true once the page has scrolled past the threshold.
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Updates the container's scrolled flag from the page scroll offset.
    pub fn set_scroll_offset(&mut self, offset_px: f32) {
        self.scrolled = offset_px > SCROLLED_THRESHOLD_PX;
    }

    // ======================================================================
    // Membership
    // ======================================================================

    /// Renders a batch of messages into the stack, one toast per message.
    ///
    /// Each toast's initial overflow decision is taken here from its position
    /// against the limit. Follow-up enforcement passes are scheduled on the
    /// next frame and shortly after, to absorb siblings attached later.
    pub fn attach<I>(&mut self, messages: I) -> Vec<ToastId>
    where
        I: IntoIterator<Item = FlashMessage>,
    {
        let mut members = self.toasts.values().filter(|t| t.state.is_member()).count();
        let ids: Vec<ToastId> = messages
            .into_iter()
            .map(|message| {
                let admitted = self.limit.admits(members);
                members += 1;
                self.insert(message, admitted)
            })
            .collect();

        if !ids.is_empty() {
            self.schedule_enforce_passes();
        }
        ids
    }

    /// Appends one message to a live stack.
    pub fn push(&mut self, message: FlashMessage) -> ToastId {
        let members = self.toasts.values().filter(|t| t.state.is_member()).count();
        let id = self.insert(message, self.limit.admits(members));
        self.schedule_enforce_passes();
        id
    }

    fn insert(&mut self, message: FlashMessage, admitted: bool) -> ToastId {
        let id = ToastId::from_raw(self.next_id);
        self.next_id += 1;

        let dismiss = message.dismiss.unwrap_or(self.config.dismiss);
        let display = self.config.display_duration_for(&message.kind);
        // Sticky toasts need a way out whatever the dismiss mode.
        let close_control = dismiss == DismissMode::Button || display.is_infinite();
        let mut toast = Toast::new(
            id,
            message.kind.as_str(),
            message.text,
            display,
            dismiss,
            close_control,
        );

        if admitted {
            toast.state = ToastState::Pending;
            toast.timers.settle = Some(self.timers.request_frame(TimerEvent::Frame(id)));
        }
        let state = toast.state;
        self.toasts.insert(id, toast);
        log::debug!("{} attached as {:?} ({})", id, state, message.kind);
        self.record(id, LifecycleEventKind::Attached { state });
        id
    }

    fn schedule_enforce_passes(&mut self) {
        let frame = self.timers.request_frame(TimerEvent::Enforce);
        self.enforce_passes.push(frame);
        for delay in ENFORCE_FOLLOW_UP_MS {
            let pass = self.timers.schedule(delay, TimerEvent::Enforce);
            self.enforce_passes.push(pass);
        }
    }

    /// Detaches a toast from the stack, whatever its state.
    ///
    /// Releases every timer it owns, frees the removal slot if it held it,
    /// then lets the overflow window and the removal queue advance.
    /// Returns false if the toast was not attached.
    pub fn detach(&mut self, id: ToastId) -> bool {
        let Some(mut toast) = self.toasts.shift_remove(&id) else {
            return false;
        };
        toast.timers.cancel_all(&mut self.timers);
        debug_assert!(toast.timers.is_empty());

        let from = toast.state;
        toast.state = ToastState::Removed;
        let released = self.coordinator.forget(id);
        log::debug!("{} detached from {:?} (released slot: {})", id, from, released);
        self.record(
            id,
            LifecycleEventKind::Transition {
                from,
                to: ToastState::Removed,
            },
        );

        self.enforce();
        self.wake_waiters();
        true
    }

    /// Detaches every toast without running the queue.
    ///
    /// Each toast is journaled as removed, and pending overflow passes are
    /// cancelled with the toast timers.
    pub fn clear(&mut self) {
        for handle in self.enforce_passes.drain(..) {
            self.timers.cancel(handle);
        }
        let toasts = std::mem::take(&mut self.toasts);
        for (id, mut toast) in toasts {
            toast.timers.cancel_all(&mut self.timers);
            self.record(
                id,
                LifecycleEventKind::Transition {
                    from: toast.state,
                    to: ToastState::Removed,
                },
            );
        }
        self.coordinator.clear();
        log::debug!("stack cleared");
    }

    // ======================================================================
    // Event loop
    // ======================================================================

    /// Runs every callback due up to `until`, in due order.
    ///
    /// Returns the number of callbacks delivered.
    pub fn advance_to(&mut self, until: Millis) -> usize {
        let mut fired = 0;
        while let Some((handle, event)) = self.timers.next_due(until) {
            self.dispatch(handle, event);
            fired += 1;
        }
        fired
    }

    /// Runs every callback due within the next `delta` milliseconds.
    pub fn advance_by(&mut self, delta: Millis) -> usize {
        let until = self.now().saturating_add(delta);
        self.advance_to(until)
    }

    fn dispatch(&mut self, handle: TimerHandle, event: TimerEvent) {
        match event {
            TimerEvent::Enforce => {
                self.enforce_passes.retain(|pass| *pass != handle);
                self.enforce();
            }
            TimerEvent::Frame(id) => {
                if self.take_slot(id, TimerSlot::Settle, handle) {
                    self.on_frame(id);
                }
            }
            TimerEvent::Settle(id) => {
                if self.take_slot(id, TimerSlot::Settle, handle) {
                    self.on_settle(id);
                }
            }
            TimerEvent::Removal(id) => {
                if self.take_slot(id, TimerSlot::Removal, handle) {
                    self.on_removal_timer(id);
                }
            }
            TimerEvent::Poll(id) => {
                if self.take_slot(id, TimerSlot::Poll, handle) {
                    self.on_poll(id);
                }
            }
        }
    }

    /// Clears `slot` if it still holds `handle`.
    ///
    /// A callback whose handle was replaced or whose toast is gone is stale
    /// and must not act.
    fn take_slot(&mut self, id: ToastId, slot: TimerSlot, handle: TimerHandle) -> bool {
        let Some(toast) = self.toasts.get_mut(&id) else {
            log::trace!("{} fired for detached {}", handle, id);
            return false;
        };
        let stored = match slot {
            TimerSlot::Settle => &mut toast.timers.settle,
            TimerSlot::Removal => &mut toast.timers.removal,
            TimerSlot::Poll => &mut toast.timers.poll,
        };
        if *stored == Some(handle) {
            *stored = None;
            true
        } else {
            log::trace!("stale {} ignored for {}", handle, id);
            false
        }
    }

    /// Routes a rendering-layer event to the matching lifecycle operation.
    pub fn handle_input(&mut self, id: ToastId, input: ToastInput) {
        match input {
            ToastInput::PointerEnter => self.pause(id),
            ToastInput::PointerLeave => self.resume(id),
            ToastInput::Click { on_control: true } => {}
            ToastInput::Click { on_control: false } => {
                let body_click_dismisses = self
                    .toasts
                    .get(&id)
                    .is_some_and(|t| t.dismiss_mode().dismisses_on_body_click());
                if body_click_dismisses {
                    self.dismiss(id);
                }
            }
            ToastInput::ControlActivated => self.dismiss(id),
            ToastInput::ExitAnimationFinished => self.finish_removal(id),
        }
    }

    // ======================================================================
    // Bookkeeping
    // ======================================================================

    /// Moves a toast to `to`, keeping the coordinator's paused set in sync.
    pub(crate) fn transition(&mut self, id: ToastId, to: ToastState) {
        let now = self.timers.now();
        let Some(toast) = self.toasts.get_mut(&id) else {
            return;
        };
        let from = toast.state;
        if from == to {
            return;
        }
        toast.state = to;
        toast.removing_since = (to == ToastState::Removing).then_some(now);
        self.coordinator.set_paused(id, to == ToastState::Paused);

        log::debug!("{} {:?} -> {:?} at {}ms", id, from, to, now);
        self.record(id, LifecycleEventKind::Transition { from, to });
    }

    pub(crate) fn record(&mut self, id: ToastId, kind: LifecycleEventKind) {
        let event = LifecycleEvent::new(self.timers.now(), id, kind);
        self.journal.push(event);
    }
}
