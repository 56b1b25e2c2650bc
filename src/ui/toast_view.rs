// SPDX-License-Identifier: MPL-2.0
//! Toast widget rendering one stack entry.
//!
//! The view maps a toast's [`VisualFlags`] to presentation: hidden and
//! pending toasts are skipped, appearing ones fade in over the entry
//! animation and removing ones fade out over the exit animation. Pointer and
//! click events are turned back into [`ToastInput`] for the stack.

use crate::config::{ENTRY_ANIMATION_MS, EXIT_ANIMATION_MS};
use crate::notifications::{Millis, Toast, ToastId, ToastInput, ToastStack, VisualFlags};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// One rendering-layer event addressed to a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastEvent {
    pub id: ToastId,
    pub input: ToastInput,
}

impl ToastEvent {
    fn new(id: ToastId, input: ToastInput) -> Self {
        Self { id, input }
    }
}

/// Accent color for a flash kind.
#[must_use]
pub fn kind_color(kind: &str) -> Color {
    match kind {
        "notice" | "success" => palette::SUCCESS_500,
        "alert" | "error" => palette::ERROR_500,
        "warning" => palette::WARNING_500,
        _ => palette::INFO_500,
    }
}

/// Card opacity at `now`, following the entry and exit animations.
#[must_use]
pub fn opacity_at(toast: &Toast, now: Millis) -> f32 {
    let flags = toast.flags(now);
    if flags.contains(VisualFlags::REMOVING) {
        let since = toast.removing_since().unwrap_or(now);
        opacity::OPAQUE - progress(now.saturating_sub(since), EXIT_ANIMATION_MS)
    } else if flags.contains(VisualFlags::APPEARING) {
        let since = toast.appeared_at().unwrap_or(now);
        progress(now.saturating_sub(since), ENTRY_ANIMATION_MS)
    } else if flags.contains(VisualFlags::VISIBLE) {
        opacity::OPAQUE
    } else {
        opacity::TRANSPARENT
    }
}

fn progress(elapsed: Millis, total: Millis) -> f32 {
    if total == 0 {
        return opacity::OPAQUE;
    }
    (elapsed as f32 / total as f32).clamp(opacity::TRANSPARENT, opacity::OPAQUE)
}

/// Returns true if the toast takes part in layout.
#[must_use]
pub fn is_rendered(toast: &Toast, now: Millis) -> bool {
    toast.flags(now).contains(VisualFlags::VISIBLE)
}

/// Renders a single toast.
pub fn view(toast: &Toast, now: Millis) -> Element<'_, ToastEvent> {
    let id = toast.id();
    let alpha = opacity_at(toast, now);
    let accent = Color {
        a: alpha,
        ..kind_color(toast.kind())
    };

    let message = Text::new(toast.text())
        .size(typography::BODY)
        .style(move |theme: &Theme| text::Style {
            color: Some(Color {
                a: alpha,
                ..theme.palette().text
            }),
        });

    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(message)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

    if toast.has_close_control() {
        let close = button(text("×").size(typography::BODY))
            .on_press(ToastEvent::new(id, ToastInput::ControlActivated))
            .width(Length::Fixed(sizing::CLOSE_CONTROL))
            .padding(spacing::XXS)
            .style(close_button_style);
        content = content.push(close);
    }

    let card = Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent, alpha));

    // The close button captures its own press, so only body clicks get here.
    mouse_area(card)
        .on_enter(ToastEvent::new(id, ToastInput::PointerEnter))
        .on_exit(ToastEvent::new(id, ToastInput::PointerLeave))
        .on_press(ToastEvent::new(id, ToastInput::Click { on_control: false }))
        .into()
}

/// Renders every shown toast of a stack, oldest on top, in the top-right
/// corner. Once the page has scrolled the stack moves up to the window edge.
pub fn view_overlay<P>(stack: &ToastStack<P>) -> Element<'_, ToastEvent>
where
    P: crate::notifications::TimerPort,
{
    let now = stack.now();
    let toasts: Vec<Element<'_, ToastEvent>> = stack
        .toasts()
        .filter(|toast| is_rendered(toast, now))
        .map(|toast| view(toast, now))
        .collect();

    if toasts.is_empty() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let top = if stack.is_scrolled() {
        spacing::MD
    } else {
        spacing::XXL
    };
    let column = Column::with_children(toasts)
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top)
        .padding(iced::Padding {
            top,
            right: spacing::MD,
            bottom: spacing::MD,
            left: spacing::MD,
        })
        .into()
}

fn toast_container_style(theme: &Theme, accent: Color, alpha: f32) -> container::Style {
    let background = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::SURFACE * alpha,
            ..background
        })),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: Color {
                a: opacity::OVERLAY_MEDIUM * alpha,
                ..shadow::MD.color
            },
            ..shadow::MD
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn close_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover = |a: f32| button::Style {
        background: Some(iced::Background::Color(Color {
            a,
            ..palette::GRAY_400
        })),
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    };

    match status {
        button::Status::Hovered => hover(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
