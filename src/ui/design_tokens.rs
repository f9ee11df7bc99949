// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens for the showcase, grouped the way the W3C Design Tokens draft
groups them.

## Organization

- **Palette**: Base colors (black page, charcoal sections, teal accent)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use raytracer_showcase::ui::design_tokens::{opacity, palette, spacing};
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
    pub const GRAY_900: Color = Color::from_rgb(0.133, 0.133, 0.133); // Section background
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.61, 0.64, 0.69); // Muted text
    pub const GRAY_300: Color = Color::from_rgb(0.82, 0.84, 0.86); // Body text
    pub const GRAY_100: Color = Color::from_rgb(0.95, 0.95, 0.95);

    // Brand colors (teal accent)
    pub const ACCENT: Color = Color::from_rgb(0.114, 0.804, 0.624);
    pub const ACCENT_DARK: Color = Color::from_rgb(0.086, 0.6, 0.463);

    // Feedback colors
    pub const INFO: Color = Color::from_rgb(0.231, 0.51, 0.965);
    pub const WARNING: Color = Color::from_rgb(0.961, 0.62, 0.043);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const GLASS: f32 = 0.08;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const BACKDROP: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
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
    pub const SECTION: f32 = 80.0; // 10 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const NAVBAR_HEIGHT: f32 = 64.0;
    pub const NAVBAR_HEIGHT_CONDENSED: f32 = 48.0;

    pub const CONTENT_MAX_WIDTH: f32 = 1040.0;
    pub const MODAL_MAX_WIDTH: f32 = 860.0;

    pub const VIDEO_CARD_HEIGHT: f32 = 300.0;
    pub const THUMBNAIL_WIDTH: f32 = 120.0;
    pub const THUMBNAIL_HEIGHT: f32 = 90.0;

    pub const TOAST_WIDTH: f32 = 320.0;

    /// 16:9 player area inside the video modal.
    pub const PLAYER_HEIGHT: f32 = MODAL_MAX_WIDTH * 9.0 / 16.0;

    // Page sections have fixed heights so navigation can scroll to an
    // absolute offset.
    pub const HERO_HEIGHT: f32 = 560.0;
    pub const FEATURES_HEIGHT: f32 = 720.0;
    pub const TECH_STACK_HEIGHT: f32 = 640.0;
    pub const ARCHITECTURE_HEIGHT: f32 = 860.0;
    pub const GALLERY_HEIGHT: f32 = 800.0;
    pub const DOWNLOAD_HEIGHT: f32 = 600.0;
    pub const CONTRIBUTE_HEIGHT: f32 = 960.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Display: Hero title
    //! - Titles: Section and card headings
    //! - Body: Primary content text
    //! - Caption: Secondary, supporting text

    pub const DISPLAY: f32 = 72.0;

    /// Section headings
    pub const TITLE_LG: f32 = 40.0;

    /// Brand name, modal headings
    pub const TITLE_MD: f32 = 24.0;

    /// Card headings
    pub const TITLE_SM: f32 = 20.0;

    /// Taglines, subtitles
    pub const BODY_LG: f32 = 18.0;

    pub const BODY: f32 = 15.0;

    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    /// Accent glow around the hero buttons.
    pub const GLOW: Shadow = Shadow {
        color: palette::ACCENT,
        offset: Vector::ZERO,
        blur_radius: 15.0,
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
    assert!(spacing::SECTION > spacing::XXL);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > opacity::OVERLAY_STRONG);

    assert!(sizing::NAVBAR_HEIGHT > sizing::NAVBAR_HEIGHT_CONDENSED);
    assert!(sizing::MODAL_MAX_WIDTH < sizing::CONTENT_MAX_WIDTH);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};
