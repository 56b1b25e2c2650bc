// SPDX-License-Identifier: MPL-2.0
//! Lifecycle event types recorded by the toast stack.

use std::fmt;

use crate::notifications::{Millis, ToastId, ToastState};

/// What happened to a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEventKind {
    /// The toast joined the stack, starting in the given state.
    Attached { state: ToastState },
    /// The toast moved between two lifecycle states.
    Transition { from: ToastState, to: ToastState },
    /// A removal request was refused by the coordinator and now waits.
    RemovalBlocked,
    /// The user asked for the toast to go away.
    Dismissed,
}

/// One recorded lifecycle step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleEvent {
    /// Scheduler time at which the step happened.
    pub at: Millis,
    pub toast: ToastId,
    pub kind: LifecycleEventKind,
}

impl LifecycleEvent {
    #[must_use]
    pub fn new(at: Millis, toast: ToastId, kind: LifecycleEventKind) -> Self {
        Self { at, toast, kind }
    }

    /// Returns true if this event moved the toast into `state`.
    #[must_use]
    pub fn entered(&self, state: ToastState) -> bool {
        match self.kind {
            LifecycleEventKind::Attached { state: initial } => initial == state,
            LifecycleEventKind::Transition { to, .. } => to == state,
            _ => false,
        }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:>6}ms] {} ", self.at, self.toast)?;
        match self.kind {
            LifecycleEventKind::Attached { state } => write!(f, "attached as {:?}", state),
            LifecycleEventKind::Transition { from, to } => write!(f, "{:?} -> {:?}", from, to),
            LifecycleEventKind::RemovalBlocked => f.write_str("removal blocked"),
            LifecycleEventKind::Dismissed => f.write_str("dismissed"),
        }
    }
}
