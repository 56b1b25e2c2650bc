// SPDX-License-Identifier: MPL-2.0
//! Rendering layer for toast stacks.
//!
//! Maps each toast's visual flags to an iced widget and turns pointer and
//! click events back into stack input.

pub mod design_tokens;
pub mod toast_view;
