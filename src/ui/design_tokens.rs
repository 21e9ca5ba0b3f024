// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Color, spacing and sizing constants shared by the gallery and the slider.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Card, breakpoint and control sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_gallery::ui::design_tokens::{palette, opacity, spacing};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Night surfaces (dark gallery background and cards)
    pub const NIGHT_900: Color = Color::from_rgb(0.102, 0.059, 0.227);
    pub const NIGHT_700: Color = Color::from_rgb(0.102, 0.157, 0.271);
    pub const NIGHT_500: Color = Color::from_rgb(0.2, 0.25, 0.33);

    // Brand colors (blue scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.85, 0.92, 1.0);
    pub const PRIMARY_400: Color = Color::from_rgb(0.357, 0.486, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);
    pub const PRIMARY_800: Color = Color::from_rgb(0.118, 0.227, 0.541);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;

    /// Card drop shadows
    pub const SHADOW: f32 = 0.25;

    /// Slider backdrop behind the displayed photo
    pub const BACKDROP: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Masonry card image heights
    pub const CARD_TALL: f32 = 450.0;
    pub const CARD_MEDIUM: f32 = 380.0;
    pub const CARD_SHORT: f32 = 320.0;

    /// Height of the caption block below a card image
    pub const CARD_CAPTION: f32 = 80.0;

    // Responsive breakpoints (logical pixels)
    pub const BREAKPOINT_SM: f32 = 640.0;
    pub const BREAKPOINT_LG: f32 = 1024.0;

    /// Upper bound of the gallery content width
    pub const CONTENT_MAX_WIDTH: f32 = 1280.0;

    // Slider controls
    pub const NAV_BUTTON: f32 = 48.0;
    pub const CLOSE_BUTTON: f32 = 44.0;

    // Error card
    pub const ERROR_CARD_WIDTH: f32 = 420.0;
    pub const ICON_XL: f32 = 48.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Gallery heading
    pub const TITLE_LG: f32 = 30.0;

    /// Error card heading, nav arrows
    pub const TITLE_MD: f32 = 20.0;

    /// Card titles
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY: f32 = 14.0;

    /// Header hint, photo numbers, position counter
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    const TINT: Color = Color::from_rgba(0.0, 0.0, 0.0, super::opacity::SHADOW);

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Resting card
    pub const MD: Shadow = Shadow {
        color: TINT,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };

    /// Hovered card, error card
    pub const LG: Shadow = Shadow {
        color: TINT,
        offset: Vector { x: 0.0, y: 12.0 },
        blur_radius: 24.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OVERLAY_HOVER > opacity::OVERLAY_STRONG);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);

    assert!(sizing::CARD_TALL > sizing::CARD_MEDIUM);
    assert!(sizing::CARD_MEDIUM > sizing::CARD_SHORT);
    assert!(sizing::BREAKPOINT_LG > sizing::BREAKPOINT_SM);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);
};
