// SPDX-License-Identifier: MPL-2.0
//! Toast domain types.
//!
//! Value objects shared by the configuration layer and the lifecycle engine,
//! independent of any presentation framework.

mod dismiss;
mod newtypes;

pub use dismiss::{DismissMode, UnknownDismissMode};
pub use newtypes::{display_bounds, limit_bounds, DisplayDuration, VisibleLimit};
