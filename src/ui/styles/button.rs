// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled accent button (hero call to action).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::ACCENT_DARK,
        _ => palette::ACCENT,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: BLACK,
        border: Border {
            color: palette::ACCENT_DARK,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: if matches!(status, button::Status::Hovered) {
            shadow::GLOW
        } else {
            shadow::NONE
        },
        snap: true,
    }
}

/// Outlined accent button (secondary call to action).
pub fn secondary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::ACCENT
        },
        _ => Color::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::ACCENT,
        border: Border {
            color: palette::ACCENT,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Text-only navigation link. Accent on hover.
pub fn nav_link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ACCENT,
        _ => Color {
            a: opacity::OVERLAY_STRONG,
            ..WHITE
        },
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round overlay buttons used by the modals (close, previous, next).
///
/// Disabled arrows fade out so the clamped ends are visible.
pub fn overlay(_theme: &Theme, status: button::Status) -> button::Style {
    let (alpha, text_color) = match status {
        button::Status::Hovered => (opacity::OVERLAY_STRONG, palette::ACCENT),
        button::Status::Pressed => (opacity::BACKDROP, palette::ACCENT),
        button::Status::Disabled => (
            opacity::OVERLAY_SUBTLE,
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..WHITE
            },
        ),
        button::Status::Active => (opacity::OVERLAY_MEDIUM, WHITE),
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

/// Invisible button wrapping a clickable card (video card, thumbnails).
pub fn card(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ACCENT,
        _ => Color {
            a: opacity::OVERLAY_SUBTLE,
            ..WHITE
        },
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: opacity::GLASS,
            ..WHITE
        })),
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        snap: true,
    }
}
