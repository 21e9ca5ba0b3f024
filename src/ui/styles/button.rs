// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (retry).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border, shadow) = match status {
        button::Status::Hovered => (palette::PRIMARY_500, palette::PRIMARY_600, shadow::LG),
        button::Status::Disabled => {
            return button::Style {
                background: Some(Background::Color(palette::GRAY_400)),
                text_color: palette::GRAY_200,
                border: Border {
                    radius: radius::MD.into(),
                    ..Default::default()
                },
                shadow: shadow::NONE,
                snap: true,
            }
        }
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow,
        snap: true,
    }
}

/// Round dark buttons laid over the slider (close, previous, next).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (alpha, text_color) = match status {
            button::Status::Hovered => (alpha_hover, text_color),
            button::Status::Pressed => (opacity::OVERLAY_PRESSED, text_color),
            button::Status::Disabled => (
                opacity::OVERLAY_SUBTLE,
                Color {
                    a: opacity::OVERLAY_STRONG * 0.5,
                    ..text_color
                },
            ),
            button::Status::Active => (alpha_normal, text_color),
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Gallery card: the whole card is the button, hover highlights the border.
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);
    let (border_color, shadow) = match status {
        button::Status::Hovered | button::Status::Pressed => (scheme.accent, shadow::LG),
        _ => (Color::TRANSPARENT, shadow::MD),
    };

    button::Style {
        background: Some(Background::Color(scheme.card_surface)),
        text_color: scheme.text_primary,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow,
        snap: true,
    }
}
