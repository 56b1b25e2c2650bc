// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.
//!
//! The page holds the controls and the lifecycle journal; the toast overlay
//! is stacked on top of it.

use super::Message;
use crate::notifications::{ToastStack, ToastState};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::toast_view;
use iced::widget::{button, scrollable, text, Column, Container, Row, Stack};
use iced::{Element, Length};

/// Number of journal lines shown on the page.
const JOURNAL_LINES: usize = 40;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub stack: &'a ToastStack,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = Container::new(view_page(ctx.stack))
        .width(Length::Fill)
        .height(Length::Fill);

    Stack::new()
        .push(page)
        .push(toast_view::view_overlay(ctx.stack).map(Message::Toast))
        .into()
}

fn view_page(stack: &ToastStack) -> Element<'_, Message> {
    let limit = stack.visible_limit();
    let limit_label = if limit.is_unlimited() {
        "Limit: unlimited".to_string()
    } else {
        format!("Limit: {}", limit.value())
    };

    let spawn_row = Row::new()
        .spacing(spacing::XS)
        .push(control("Notice", Message::Spawn("notice")))
        .push(control("Alert", Message::Spawn("alert")))
        .push(control("Warning", Message::Spawn("warning")))
        .push(control("Batch of 3", Message::SpawnBatch))
        .push(control("Dismiss all", Message::DismissAll));

    let limit_row = Row::new()
        .spacing(spacing::XS)
        .align_y(iced::alignment::Vertical::Center)
        .push(control("−", Message::SetLimit(limit.value().saturating_sub(1))))
        .push(text(limit_label).size(typography::BODY))
        .push(control("+", Message::SetLimit(limit.value() + 1)));

    let status = format!(
        "{} shown, {} queued, {} removing",
        stack.visible_count(),
        stack.count(ToastState::Hidden),
        stack.count(ToastState::Removing),
    );

    let journal = stack.journal();
    let skip = journal.len().saturating_sub(JOURNAL_LINES);
    let journal_lines = journal.iter().skip(skip).fold(
        Column::new().spacing(spacing::XXS),
        |column, event| column.push(text(event.to_string()).size(typography::CAPTION)),
    );

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(text("Toast stack").size(typography::TITLE_MD))
        .push(spawn_row)
        .push(limit_row)
        .push(text(status).size(typography::BODY))
        .push(journal_lines);

    scrollable(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport| Message::Scrolled(viewport.absolute_offset().y))
        .into()
}

fn control(label: &str, message: Message) -> Element<'_, Message> {
    button(text(label).size(typography::BODY))
        .on_press(message)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .into()
}
