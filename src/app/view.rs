// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::Message;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::toasts::{self, ToastQueue};
use iced::widget::{button, text_input, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub draft: &'a str,
    pub toasts: &'a ToastQueue,
}

/// Renders the form with the toast overlay stacked on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let input = text_input("Message", ctx.draft)
        .on_input(Message::DraftChanged)
        .on_submit(Message::ShowRequested)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::INPUT_WIDTH));

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(button(Text::new("Show")).on_press(Message::ShowRequested))
        .push(button(Text::new("Burst")).on_press(Message::BurstRequested));

    let status = Text::new(format!("{} active", ctx.toasts.len())).size(typography::BODY);

    let form = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("Toasts").size(typography::TITLE_MD))
        .push(input)
        .push(actions)
        .push(status);

    let base = Container::new(form)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    Stack::new()
        .push(base)
        .push(toasts::view(ctx.toasts).map(Message::Toasts))
        .into()
}
