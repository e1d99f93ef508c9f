// SPDX-License-Identifier: MPL-2.0
//! Rendering of status regions.
//!
//! Each active toast becomes a passive card: no buttons, nothing focusable.
//! Cards are keyed by toast id so that removing one toast does not disturb
//! the widget state of the others.

use super::animation::Frame;
use super::queue::{Message, StatusRegion, ToastQueue};
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use iced::widget::{keyed_column, text, Container, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Padding, Theme};

/// Renders every active toast in the bottom-right corner.
pub fn view(queue: &ToastQueue) -> Element<'_, Message> {
    let regions = queue.regions();

    if regions.is_empty() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let cards = keyed_column(
        regions
            .into_iter()
            .map(|region| (region.key, status_region(region))),
    )
    .spacing(spacing::XS);

    Container::new(cards)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

fn status_region<'a>(region: StatusRegion) -> Element<'a, Message> {
    let frame = region.frame;

    let message = Text::new(region.text)
        .size(typography::BODY)
        .style(move |theme: &Theme| text::Style {
            color: Some(fade(theme.palette().text, frame.opacity)),
        });

    let card = Container::new(message)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| card_style(theme, frame));

    // The slide is a top inset on an otherwise transparent wrapper.
    Container::new(card)
        .padding(Padding {
            top: frame.offset,
            right: 0.0,
            bottom: 0.0,
            left: 0.0,
        })
        .into()
}

fn card_style(theme: &Theme, frame: Frame) -> iced::widget::container::Style {
    let palette = theme.extended_palette();
    let background = palette.background.base.color;
    let accent = palette.primary.base.color;

    iced::widget::container::Style {
        background: Some(Background::Color(fade(background, frame.opacity))),
        border: Border {
            color: fade(accent, frame.opacity),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: fade(shadow::MD.color, frame.opacity * 0.3),
            ..shadow::MD
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn fade(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}
