// SPDX-License-Identifier: MPL-2.0
//! Bounded lifecycle journal.

use std::collections::VecDeque;

use super::events::{LifecycleEvent, LifecycleEventKind};
pub use crate::domain::diagnostics::JournalCapacity;
use crate::notifications::ToastId;

/// Most recent lifecycle events of a stack, oldest first.
///
/// Once full, every new event evicts the oldest one.
///
/// # Example
///
/// ```
/// use toast_stack::notifications::{FlashMessage, ToastStack, ToastState};
///
/// let mut stack = ToastStack::default();
/// let id = stack.push(FlashMessage::notice("saved"));
/// stack.advance_by(200);
///
/// let entered: Vec<_> = stack
///     .journal()
///     .for_toast(id)
///     .filter(|e| e.entered(ToastState::Visible))
///     .collect();
/// assert_eq!(entered.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Journal {
    events: VecDeque<LifecycleEvent>,
    capacity: usize,
}

impl Journal {
    #[must_use]
    pub fn new(capacity: JournalCapacity) -> Self {
        let capacity = capacity.value();
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub(crate) fn push(&mut self, event: LifecycleEvent) {
        if self.events.len() >= self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    pub fn iter(&self) -> impl Iterator<Item = &LifecycleEvent> {
        self.events.iter()
    }

    /// Events recorded for one toast.
    pub fn for_toast(&self, id: ToastId) -> impl Iterator<Item = &LifecycleEvent> {
        self.events.iter().filter(move |e| e.toast == id)
    }

    /// What happened to one toast, in order.
    #[must_use]
    pub fn kinds_for(&self, id: ToastId) -> Vec<LifecycleEventKind> {
        self.for_toast(id).map(|e| e.kind).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagnostics::journal_capacity_bounds;
    use crate::notifications::ToastState;

    fn dismissed(at: u64, toast: u64) -> LifecycleEvent {
        LifecycleEvent::new(at, ToastId::from_raw(toast), LifecycleEventKind::Dismissed)
    }

    #[test]
    fn full_journal_evicts_oldest_event() {
        let mut journal = Journal::new(JournalCapacity::new(0));
        for at in 0..journal_capacity_bounds::MIN as u64 + 2 {
            journal.push(dismissed(at, 0));
        }

        assert_eq!(journal.len(), journal_capacity_bounds::MIN);
        assert_eq!(journal.iter().next().map(|e| e.at), Some(2));
    }

    #[test]
    fn for_toast_keeps_only_that_toast_in_order() {
        let mut journal = Journal::new(JournalCapacity::default());
        journal.push(dismissed(1, 3));
        journal.push(dismissed(2, 4));
        journal.push(LifecycleEvent::new(
            5,
            ToastId::from_raw(3),
            LifecycleEventKind::Transition {
                from: ToastState::Visible,
                to: ToastState::Removing,
            },
        ));

        let times: Vec<_> = journal.for_toast(ToastId::from_raw(3)).map(|e| e.at).collect();
        assert_eq!(times, vec![1, 5]);
        assert_eq!(
            journal.kinds_for(ToastId::from_raw(4)),
            vec![LifecycleEventKind::Dismissed]
        );
    }

    #[test]
    fn new_journal_is_empty() {
        assert!(Journal::new(JournalCapacity::default()).is_empty());
    }
}
