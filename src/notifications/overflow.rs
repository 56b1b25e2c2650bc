// SPDX-License-Identifier: MPL-2.0
//! Overflow window.
//!
//! Only the first `limit` members of a stack are shown; later ones stay
//! hidden until earlier toasts leave. Toasts already removing have given up
//! their slot and no longer count, so the next hidden toast is revealed while
//! the exit animation plays.

use super::stack::ToastStack;
use super::timer::TimerPort;
use super::toast::{ToastId, ToastState};
use crate::domain::toast::VisibleLimit;

impl<P: TimerPort> ToastStack<P> {
    #[must_use]
    pub fn visible_limit(&self) -> VisibleLimit {
        self.limit
    }

    /// Changes the overflow limit and applies it at once.
    pub fn set_max_visible(&mut self, limit: usize) {
        self.limit = VisibleLimit::new(limit);
        log::debug!("visible limit set to {}", limit);
        self.enforce();
    }

    /// Position of a toast among the stack members, oldest first.
    ///
    /// `None` for unknown toasts and for toasts already removing.
    #[must_use]
    pub fn order_index(&self, id: ToastId) -> Option<usize> {
        self.members().position(|member| member == id)
    }

    /// Number of toasts currently occupying a window slot.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.toasts
            .values()
            .filter(|t| t.state.occupies_slot())
            .count()
    }

    fn members(&self) -> impl Iterator<Item = ToastId> + '_ {
        self.toasts
            .values()
            .filter(|t| t.state.is_member())
            .map(|t| t.id())
    }

    /// Reconciles every member with the window.
    ///
    /// Hidden toasts inside the window are revealed, shown toasts outside it
    /// are hidden. Idempotent.
    pub fn enforce(&mut self) {
        let members: Vec<(ToastId, ToastState)> = self
            .toasts
            .values()
            .filter(|t| t.state.is_member())
            .map(|t| (t.id(), t.state))
            .collect();

        let member_count = members.len();
        let mut hid_any = false;
        for (index, (id, state)) in members.into_iter().enumerate() {
            if self.limit.admits(index) {
                if state == ToastState::Hidden {
                    self.reveal(id);
                }
            } else if state != ToastState::Hidden {
                self.hide(id);
                hid_any = true;
            }
        }
        debug_assert_eq!(
            self.visible_count(),
            self.limit.visible_count(member_count)
        );

        // A hidden toast may have been the paused predecessor.
        if hid_any {
            self.wake_waiters();
        }
    }
}
