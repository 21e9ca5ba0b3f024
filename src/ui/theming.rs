// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme selection.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Default to dark on detection error
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Iced theme matching this mode.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Surface and text colors of the gallery for one theme mode.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    pub background: Color,
    pub card_surface: Color,
    pub card_caption: Color,
    pub skeleton: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub accent: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            background: palette::GRAY_100,
            card_surface: palette::WHITE,
            card_caption: palette::PRIMARY_100,
            skeleton: palette::GRAY_200,
            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            accent: palette::PRIMARY_600,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: palette::NIGHT_900,
            card_surface: palette::NIGHT_700,
            card_caption: palette::PRIMARY_800,
            skeleton: palette::NIGHT_500,
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            accent: palette::PRIMARY_400,
        }
    }

    /// Scheme matching an already resolved Iced theme (used by style closures).
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}
