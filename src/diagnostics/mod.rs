// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for the toast lifecycle.
//!
//! Every state change made by a [`ToastStack`](crate::notifications::ToastStack)
//! is both logged through the `log` facade and appended to a memory-bounded
//! journal, so the order in which sibling toasts were admitted, paused and
//! removed can be inspected after the fact.
//!
//! # Architecture
//!
//! - [`Journal`]: Bounded record of events, queryable per toast
//! - [`LifecycleEvent`]: One recorded step of a toast's lifecycle
//! - [`JournalCapacity`]: Newtype for validated journal capacity bounds

mod events;
mod journal;

pub use events::{LifecycleEvent, LifecycleEventKind};
pub use journal::{Journal, JournalCapacity};
