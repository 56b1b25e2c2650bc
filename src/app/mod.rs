// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting one toast stack.
//!
//! The `App` struct owns the stack and plays the part of the browser around
//! it: it drives the stack's clock from frame ticks, forwards pointer events
//! from the toast widgets and signals the end of each exit animation once the
//! fade has played.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::EXIT_ANIMATION_MS;
use crate::notifications::{FlashBatch, FlashMessage, Millis, Toast, ToastId, ToastInput, ToastStack};
use crate::ui::toast_view::ToastEvent;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;

/// Root iced application state.
pub struct App {
    stack: ToastStack,
    /// Wall-clock origin of the stack's millisecond clock.
    started_at: Instant,
    /// Counter used to label spawned toasts.
    spawned: usize,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("toasts", &self.stack.len())
            .field("now", &self.stack.now())
            .finish()
    }
}

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Messages shown when no message was given on the command line.
fn demo_batch() -> FlashBatch {
    FlashBatch::new()
        .with(FlashMessage::notice("Welcome back!"))
        .with(FlashMessage::alert("Your session expires in five minutes"))
        .with(FlashMessage::new("warning", "Two drafts have unsaved changes"))
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags { config, messages } = flags;
        let messages = if messages.is_empty() {
            demo_batch()
        } else {
            messages
        };

        let mut stack = ToastStack::new(config);
        let ids = stack.attach(messages);
        log::info!("rendered {} toasts", ids.len());

        let app = App {
            stack,
            started_at: Instant::now(),
            spawned: 0,
        };
        (app, Task::none())
    }

    /// Toast stack driven by this application.
    #[must_use]
    pub fn stack(&self) -> &ToastStack {
        &self.stack
    }

    fn title(&self) -> String {
        format!(
            "Toast Stack ({} of {} shown)",
            self.stack.visible_count(),
            self.stack.len()
        )
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(!self.stack.is_empty())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(instant) => {
                self.stack.advance_to(self.elapsed_millis(instant));
                self.finish_exit_animations();
            }
            Message::Toast(ToastEvent { id, input }) => self.stack.handle_input(id, input),
            Message::Spawn(kind) => {
                self.spawned += 1;
                let text = format!("{} message #{}", kind, self.spawned);
                self.stack.push(FlashMessage::new(kind, text));
            }
            Message::SpawnBatch => {
                let batch: FlashBatch = ["notice", "alert", "notice"]
                    .into_iter()
                    .map(|kind| {
                        self.spawned += 1;
                        FlashMessage::new(kind, format!("Batch message #{}", self.spawned))
                    })
                    .collect();
                self.stack.attach(batch);
            }
            Message::SetLimit(limit) => self.stack.set_max_visible(limit),
            Message::DismissAll => {
                for id in self.stack.ids() {
                    self.stack.dismiss(id);
                }
            }
            Message::Scrolled(offset) => self.stack.set_scroll_offset(offset),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext { stack: &self.stack })
    }

    fn elapsed_millis(&self, instant: Instant) -> Millis {
        let elapsed = instant.saturating_duration_since(self.started_at).as_millis();
        Millis::try_from(elapsed).unwrap_or(Millis::MAX)
    }

    /// Sends the exit-finished signal for every fade that has fully played.
    fn finish_exit_animations(&mut self) {
        let now = self.stack.now();
        let finished: Vec<ToastId> = self
            .stack
            .toasts()
            .filter(|toast| {
                toast
                    .removing_since()
                    .is_some_and(|since| now.saturating_sub(since) >= EXIT_ANIMATION_MS)
            })
            .map(Toast::id)
            .collect();

        for id in finished {
            self.stack.handle_input(id, ToastInput::ExitAnimationFinished);
        }
    }
}
