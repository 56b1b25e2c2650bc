// SPDX-License-Identifier: MPL-2.0
//! Toast notification lifecycle engine.
//!
//! This module drives stacked, transient notifications through their
//! lifecycle: appearance, timed auto-dismissal, hover pause, manual
//! dismissal, one-at-a-time removal and an overflow window capping how many
//! toasts are visible at once.
//!
//! # Architecture
//!
//! - [`ToastStack`]: one container of sibling toasts and the registry for them
//! - [`Toast`]: one notification with its lifecycle data
//! - [`RemovalCoordinator`]: single-active-removal and paused-predecessor gate
//! - [`TimerPort`]: deferred callbacks, with [`Scheduler`] as virtual clock
//!
//! # Usage
//!
//! ```
//! use toast_stack::config::Config;
//! use toast_stack::notifications::{FlashMessage, ToastInput, ToastStack, ToastState};
//!
//! let mut stack = ToastStack::new(Config::default());
//! let id = stack.push(FlashMessage::notice("Profile saved"));
//!
//! // Frame tick plus layout settling, then the toast is on screen.
//! stack.advance_by(200);
//! assert_eq!(stack.state(id), Some(ToastState::Visible));
//!
//! // Hovering stops the countdown.
//! stack.handle_input(id, ToastInput::PointerEnter);
//! stack.advance_by(60_000);
//! assert_eq!(stack.state(id), Some(ToastState::Paused));
//! ```

mod coordinator;
mod lifecycle;
mod message;
mod overflow;
mod stack;
mod timer;
mod toast;

pub use coordinator::RemovalCoordinator;
pub use message::{FlashBatch, FlashMessage, ToastInput, DEFAULT_KIND};
pub use stack::ToastStack;
pub use timer::{Millis, Scheduler, TimerEvent, TimerHandle, TimerPort};
pub use toast::{Toast, ToastId, ToastState, VisualFlags};
