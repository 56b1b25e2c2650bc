// SPDX-License-Identifier: MPL-2.0
//! `toast_stack` drives stacked toast notifications through their lifecycle.
//!
//! Toasts appear after the layout settles, remove themselves after a
//! configurable time, pause while hovered and can be dismissed by hand.
//! Removals run one at a time and never overtake a hovered predecessor, and
//! an overflow window caps how many toasts are visible at once. The crate
//! ships an iced demo application rendering one stack.

#![doc(html_root_url = "https://docs.rs/toast_stack/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod notifications;
pub mod ui;
