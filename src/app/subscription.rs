// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use crate::config::FRAME_INTERVAL_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates the frame tick driving toast timers and animations.
///
/// Ticks only while toasts are attached, so an empty stack leaves the event
/// loop idle.
pub fn create_tick_subscription(has_toasts: bool) -> Subscription<Message> {
    if has_toasts {
        time::every(Duration::from_millis(FRAME_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
