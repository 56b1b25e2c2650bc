// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::config::Config;
use crate::notifications::FlashBatch;
use crate::ui::toast_view::ToastEvent;
use std::time::Instant;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Frame tick driving the stack's clock.
    Tick(Instant),
    Toast(ToastEvent),
    /// Push a new toast of the given flash kind.
    Spawn(&'static str),
    /// Push several toasts at once, as a single render pass would.
    SpawnBatch,
    SetLimit(usize),
    DismissAll,
    /// Vertical scroll offset of the page, in pixels.
    Scrolled(f32),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Effective configuration after CLI overrides.
    pub config: Config,
    /// Messages rendered when the window opens.
    pub messages: FlashBatch,
}
