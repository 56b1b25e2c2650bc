// SPDX-License-Identifier: MPL-2.0
//! Diagnostics domain types.
//!
//! This module provides pure domain types for diagnostics:
//! - [`JournalCapacity`]: Capacity of the lifecycle journal

mod newtypes;

pub use newtypes::{journal_capacity_bounds, JournalCapacity};
