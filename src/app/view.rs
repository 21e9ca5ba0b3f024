// SPDX-License-Identifier: MPL-2.0
//! Root view: settings warning banner above the gallery.

use super::Message;
use crate::i18n::I18n;
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::ui::gallery;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{Background, Color, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
    pub warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let gallery = ctx
        .gallery
        .view(gallery::ViewContext { i18n: ctx.i18n })
        .map(Message::Gallery);

    match ctx.warning {
        Some(key) => Column::new()
            .push(warning_banner(ctx.i18n.tr(key)))
            .push(gallery)
            .into(),
        None => gallery,
    }
}

fn warning_banner<'a>(text: String) -> Element<'a, Message> {
    let dismiss = button(Text::new("✕").size(typography::CAPTION))
        .padding(spacing::XXS)
        .on_press(Message::DismissWarning)
        .style(styles::button_overlay(
            palette::WHITE,
            opacity::OVERLAY_SUBTLE,
            opacity::OVERLAY_STRONG,
        ));

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(text).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(dismiss);

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::ERROR_500
            })),
            text_color: Some(palette::WHITE),
            ..Default::default()
        })
        .into()
}
