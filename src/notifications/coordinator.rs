// SPDX-License-Identifier: MPL-2.0
//! Removal coordination between sibling toasts.
//!
//! Two rules keep the stack's collapse animation readable:
//!
//! 1. at most one toast is removing at any time;
//! 2. a toast may not start removing while an earlier toast is paused.
//!
//! Instead of rescanning siblings on every check, the coordinator keeps the
//! active remover plus ordered sets of paused and waiting toasts. Since
//! [`ToastId`]s grow with stack position, the first entry of each set is the
//! earliest toast and every gate check is a head-of-set lookup.

use std::collections::BTreeSet;

use super::toast::ToastId;

#[derive(Debug, Default, Clone)]
pub struct RemovalCoordinator {
    active: Option<ToastId>,
    paused: BTreeSet<ToastId>,
    waiting: BTreeSet<ToastId>,
}

impl RemovalCoordinator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `id` may enter the removing state right now.
    ///
    /// False while any toast is removing, including `id` itself, or while a
    /// toast ahead of `id` is paused.
    #[must_use]
    pub fn may_start_removing(&self, id: ToastId) -> bool {
        self.active.is_none() && self.paused.first().map_or(true, |&first| first >= id)
    }

    /// Toast currently playing its exit animation.
    #[must_use]
    pub fn active(&self) -> Option<ToastId> {
        self.active
    }

    #[must_use]
    pub fn is_waiting(&self, id: ToastId) -> bool {
        self.waiting.contains(&id)
    }

    #[must_use]
    pub fn is_paused(&self, id: ToastId) -> bool {
        self.paused.contains(&id)
    }

    /// Toasts whose removal is blocked, earliest first.
    pub fn waiting(&self) -> impl Iterator<Item = ToastId> + '_ {
        self.waiting.iter().copied()
    }

    /// Earliest waiting toast that passes the gate.
    ///
    /// Only the first waiter needs checking: a paused toast blocking it
    /// also blocks every later waiter.
    #[must_use]
    pub fn next_eligible(&self) -> Option<ToastId> {
        let first = self.waiting.first().copied()?;
        self.may_start_removing(first).then_some(first)
    }

    pub fn begin(&mut self, id: ToastId) {
        debug_assert!(
            self.active.is_none() || self.active == Some(id),
            "{} started removing while {:?} was active",
            id,
            self.active
        );
        self.waiting.remove(&id);
        self.active = Some(id);
    }

    /// Frees the removal slot if `id` holds it.
    ///
    /// Returns true if the slot was freed.
    pub fn release(&mut self, id: ToastId) -> bool {
        if self.active == Some(id) {
            self.active = None;
            true
        } else {
            false
        }
    }

    pub fn set_paused(&mut self, id: ToastId, paused: bool) {
        if paused {
            self.paused.insert(id);
        } else {
            self.paused.remove(&id);
        }
    }

    pub fn enqueue(&mut self, id: ToastId) {
        self.waiting.insert(id);
    }

    /// Drops a pending removal request. Returns true if one existed.
    pub fn dequeue(&mut self, id: ToastId) -> bool {
        self.waiting.remove(&id)
    }

    /// Drops every trace of a detached toast.
    ///
    /// Returns true if the toast held the removal slot.
    pub fn forget(&mut self, id: ToastId) -> bool {
        self.paused.remove(&id);
        self.waiting.remove(&id);
        self.release(id)
    }

    pub fn clear(&mut self) {
        self.active = None;
        self.paused.clear();
        self.waiting.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u64) -> ToastId {
        ToastId::from_raw(raw)
    }

    #[test]
    fn idle_coordinator_admits_anyone() {
        let coordinator = RemovalCoordinator::new();
        assert!(coordinator.may_start_removing(id(0)));
        assert!(coordinator.may_start_removing(id(9)));
    }

    #[test]
    fn active_removal_blocks_everyone_including_itself() {
        let mut coordinator = RemovalCoordinator::new();
        coordinator.begin(id(1));

        assert!(!coordinator.may_start_removing(id(0)));
        assert!(!coordinator.may_start_removing(id(1)));
        assert!(!coordinator.may_start_removing(id(2)));

        assert!(coordinator.release(id(1)));
        assert!(coordinator.may_start_removing(id(2)));
    }

    #[test]
    fn release_by_non_holder_is_ignored() {
        let mut coordinator = RemovalCoordinator::new();
        coordinator.begin(id(1));
        assert!(!coordinator.release(id(2)));
        assert_eq!(coordinator.active(), Some(id(1)));
    }

    #[test]
    fn paused_toast_blocks_only_later_toasts() {
        let mut coordinator = RemovalCoordinator::new();
        coordinator.set_paused(id(2), true);

        assert!(coordinator.may_start_removing(id(1)));
        assert!(coordinator.may_start_removing(id(2)));
        assert!(!coordinator.may_start_removing(id(3)));

        coordinator.set_paused(id(2), false);
        assert!(coordinator.may_start_removing(id(3)));
    }

    #[test]
    fn next_eligible_picks_earliest_waiter() {
        let mut coordinator = RemovalCoordinator::new();
        coordinator.enqueue(id(5));
        coordinator.enqueue(id(3));

        assert_eq!(coordinator.next_eligible(), Some(id(3)));
        coordinator.begin(id(3));
        assert!(!coordinator.is_waiting(id(3)));
        assert_eq!(coordinator.next_eligible(), None);

        coordinator.release(id(3));
        assert_eq!(coordinator.next_eligible(), Some(id(5)));
    }

    #[test]
    fn paused_predecessor_holds_back_all_waiters() {
        let mut coordinator = RemovalCoordinator::new();
        coordinator.set_paused(id(0), true);
        coordinator.enqueue(id(1));
        coordinator.enqueue(id(2));

        assert_eq!(coordinator.next_eligible(), None);

        coordinator.set_paused(id(0), false);
        assert_eq!(coordinator.next_eligible(), Some(id(1)));
    }

    #[test]
    fn forget_releases_slot_and_queues() {
        let mut coordinator = RemovalCoordinator::new();
        coordinator.begin(id(0));
        coordinator.set_paused(id(0), true);
        coordinator.enqueue(id(1));

        assert!(coordinator.forget(id(0)));
        assert!(!coordinator.is_paused(id(0)));
        assert_eq!(coordinator.active(), None);
        assert!(!coordinator.forget(id(0)));
        assert_eq!(coordinator.waiting().collect::<Vec<_>>(), vec![id(1)]);
    }
}
