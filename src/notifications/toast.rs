// SPDX-License-Identifier: MPL-2.0
//! The toast entity: one transient message and its lifecycle data.
//!
//! A [`Toast`] holds state only. The transitions themselves live on
//! [`ToastStack`](super::ToastStack), which is the only place that can see the
//! siblings a transition must be coordinated with.

use std::fmt;

use bitflags::bitflags;

use super::timer::{Millis, TimerHandle, TimerPort};
use crate::config::ENTRY_ANIMATION_MS;
use crate::domain::toast::{DismissMode, DisplayDuration};

/// Unique identifier for a toast.
///
/// Identifiers are handed out in increasing order as toasts join a stack, so
/// comparing two ids compares their position in the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    #[must_use]
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast#{}", self.0)
    }
}

/// Lifecycle state of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastState {
    /// Held back by the overflow window.
    Hidden,
    /// Admitted, waiting for the layout to settle before animating in.
    Pending,
    /// Animating in or fully shown, countdown running.
    Visible,
    /// Hovered; countdown suspended.
    Paused,
    /// Exit animation playing.
    Removing,
    /// Detached from the stack.
    Removed,
}

impl ToastState {
    /// Returns true for states that occupy a slot of the overflow window.
    #[must_use]
    pub fn occupies_slot(self) -> bool {
        matches!(
            self,
            ToastState::Pending | ToastState::Visible | ToastState::Paused
        )
    }

    /// Returns true for states that still count as stack members for ordering.
    #[must_use]
    pub fn is_member(self) -> bool {
        !matches!(self, ToastState::Removing | ToastState::Removed)
    }
}

bitflags! {
    /// Visual state flags handed to the rendering layer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct VisualFlags: u8 {
        const APPEARING = 1 << 0;
        const VISIBLE = 1 << 1;
        const PAUSED = 1 << 2;
        const REMOVING = 1 << 3;
        const HIDDEN = 1 << 4;
    }
}

/// Timer handles exclusively owned by one toast.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct ToastTimers {
    /// Frame tick or layout-settling delay, whichever is currently armed.
    pub settle: Option<TimerHandle>,
    pub removal: Option<TimerHandle>,
    pub poll: Option<TimerHandle>,
}

impl ToastTimers {
    /// Disarms one slot. Safe to call on an empty slot.
    pub fn clear_slot<P: TimerPort>(slot: &mut Option<TimerHandle>, timers: &mut P) {
        if let Some(handle) = slot.take() {
            timers.cancel(handle);
        }
    }

    pub fn cancel_all<P: TimerPort>(&mut self, timers: &mut P) {
        Self::clear_slot(&mut self.settle, timers);
        Self::clear_slot(&mut self.removal, timers);
        Self::clear_slot(&mut self.poll, timers);
    }

    pub fn is_empty(&self) -> bool {
        self.settle.is_none() && self.removal.is_none() && self.poll.is_none()
    }
}

/// One notification in a stack.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    kind: String,
    text: String,
    display_duration: DisplayDuration,
    dismiss_mode: DismissMode,
    close_control: bool,
    pub(crate) state: ToastState,
    pub(crate) remaining: Millis,
    pub(crate) animation_started_at: Option<Millis>,
    pub(crate) appeared_at: Option<Millis>,
    pub(crate) removing_since: Option<Millis>,
    pub(crate) manually_dismissed: bool,
    pub(crate) timers: ToastTimers,
}

impl Toast {
    pub(crate) fn new(
        id: ToastId,
        kind: impl Into<String>,
        text: impl Into<String>,
        display_duration: DisplayDuration,
        dismiss_mode: DismissMode,
        close_control: bool,
    ) -> Self {
        Self {
            id,
            kind: kind.into(),
            text: text.into(),
            display_duration,
            dismiss_mode,
            close_control,
            state: ToastState::Hidden,
            remaining: display_duration.as_millis(),
            animation_started_at: None,
            appeared_at: None,
            removing_since: None,
            manually_dismissed: false,
            timers: ToastTimers::default(),
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Flash kind this toast was rendered from (`notice`, `alert`, ...).
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn state(&self) -> ToastState {
        self.state
    }

    #[must_use]
    pub fn display_duration(&self) -> DisplayDuration {
        self.display_duration
    }

    #[must_use]
    pub fn dismiss_mode(&self) -> DismissMode {
        self.dismiss_mode
    }

    /// Returns true if the rendering layer should draw a close control.
    #[must_use]
    pub fn has_close_control(&self) -> bool {
        self.close_control
    }

    /// Time left on the removal countdown as of the last arm or pause.
    #[must_use]
    pub fn remaining(&self) -> Millis {
        self.remaining
    }

    #[must_use]
    pub fn is_manually_dismissed(&self) -> bool {
        self.manually_dismissed
    }

    /// When the entry animation started, while shown.
    #[must_use]
    pub fn appeared_at(&self) -> Option<Millis> {
        self.appeared_at
    }

    /// When the exit animation started, while removing.
    #[must_use]
    pub fn removing_since(&self) -> Option<Millis> {
        self.removing_since
    }

    /// Returns true if this toast never removes itself.
    #[must_use]
    pub fn is_sticky(&self) -> bool {
        self.display_duration.is_infinite()
    }

    /// Countdown floor for this toast.
    #[must_use]
    pub fn floor(&self) -> Millis {
        self.display_duration.floor_millis()
    }

    /// Remaining countdown projected to `now`, for display purposes.
    #[must_use]
    pub fn remaining_at(&self, now: Millis) -> Millis {
        match (self.state, self.animation_started_at) {
            (ToastState::Visible, Some(start)) => {
                self.remaining.saturating_sub(now.saturating_sub(start))
            }
            _ => self.remaining,
        }
    }

    /// Visual flags for the rendering layer at time `now`.
    #[must_use]
    pub fn flags(&self, now: Millis) -> VisualFlags {
        match self.state {
            ToastState::Hidden => VisualFlags::HIDDEN,
            ToastState::Pending | ToastState::Removed => VisualFlags::empty(),
            ToastState::Visible => {
                let appearing = self
                    .appeared_at
                    .is_some_and(|at| now.saturating_sub(at) < ENTRY_ANIMATION_MS);
                if appearing {
                    VisualFlags::VISIBLE | VisualFlags::APPEARING
                } else {
                    VisualFlags::VISIBLE
                }
            }
            ToastState::Paused => VisualFlags::VISIBLE | VisualFlags::PAUSED,
            ToastState::Removing => VisualFlags::VISIBLE | VisualFlags::REMOVING,
        }
    }
}
