// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::border::Radius;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Window background behind the gallery.
pub fn page(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.background)),
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

/// Caption block under a card image.
pub fn card_caption(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.card_caption)),
        border: Border {
            radius: Radius {
                top_left: radius::NONE,
                top_right: radius::NONE,
                bottom_right: radius::LG,
                bottom_left: radius::LG,
            },
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Image area of a card, shown while the thumbnail is downloading.
pub fn card_image(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.skeleton)),
        text_color: Some(scheme.text_secondary),
        border: Border {
            radius: Radius {
                top_left: radius::LG,
                top_right: radius::LG,
                bottom_right: radius::NONE,
                bottom_left: radius::NONE,
            },
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Placeholder bar of the loading skeleton.
pub fn skeleton(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.skeleton)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Whole skeleton card.
pub fn skeleton_card(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.card_surface)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Error card shown when the listing could not be fetched.
pub fn error_card(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.card_surface)),
        text_color: Some(scheme.text_primary),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::ERROR_500
            },
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Near-opaque black layer behind the slider.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Title strip at the bottom of the slider image.
pub fn slide_caption(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
