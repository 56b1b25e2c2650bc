// SPDX-License-Identifier: MPL-2.0
//! Inputs consumed by a toast stack.
//!
//! Messages arrive from whatever prepares flash messages for a request, as an
//! ordered batch of `(kind, text, dismiss mode)` entries. Pointer and click
//! events arrive from the rendering layer as [`ToastInput`].

use crate::domain::toast::DismissMode;

/// Flash kind used when none is given.
pub const DEFAULT_KIND: &str = "notice";

/// One message to render as a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub kind: String,
    pub text: String,
    /// Overrides the configured dismiss mode for this toast.
    pub dismiss: Option<DismissMode>,
}

impl FlashMessage {
    pub fn new(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
            dismiss: None,
        }
    }

    pub fn notice(text: impl Into<String>) -> Self {
        Self::new("notice", text)
    }

    pub fn alert(text: impl Into<String>) -> Self {
        Self::new("alert", text)
    }

    #[must_use]
    pub fn with_dismiss(mut self, mode: DismissMode) -> Self {
        self.dismiss = Some(mode);
        self
    }
}

/// Ordered collection of messages for one render pass.
///
/// Blank texts are dropped on the way in, so a batch only ever holds messages
/// worth showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashBatch {
    messages: Vec<FlashMessage>,
}

impl FlashBatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one message. Returns false if it was blank and skipped.
    pub fn push(&mut self, message: FlashMessage) -> bool {
        if message.text.trim().is_empty() {
            return false;
        }
        let kind = message.kind.trim();
        let message = if kind.is_empty() {
            FlashMessage {
                kind: DEFAULT_KIND.to_string(),
                ..message
            }
        } else if kind.len() != message.kind.len() {
            FlashMessage {
                kind: kind.to_string(),
                ..message
            }
        } else {
            message
        };
        self.messages.push(message);
        true
    }

    /// Appends several texts of the same kind, keeping their order.
    pub fn extend<I, S>(&mut self, kind: &str, texts: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for text in texts {
            self.push(FlashMessage::new(kind, text));
        }
    }

    #[must_use]
    pub fn with(mut self, message: FlashMessage) -> Self {
        self.push(message);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlashMessage> {
        self.messages.iter()
    }
}

impl IntoIterator for FlashBatch {
    type Item = FlashMessage;
    type IntoIter = std::vec::IntoIter<FlashMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

impl FromIterator<FlashMessage> for FlashBatch {
    fn from_iter<T: IntoIterator<Item = FlashMessage>>(iter: T) -> Self {
        let mut batch = FlashBatch::new();
        for message in iter {
            batch.push(message);
        }
        batch
    }
}

/// Events from the rendering layer for one toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastInput {
    /// Pointer moved over the toast.
    PointerEnter,
    /// Pointer left the toast.
    PointerLeave,
    /// Click on the toast body, or on its close control.
    Click { on_control: bool },
    /// Explicit close control activated (mouse or keyboard).
    ControlActivated,
    /// The exit animation finished playing.
    ExitAnimationFinished,
}
