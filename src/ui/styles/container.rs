// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Translucent "glass" card used by every grid on the page.
pub fn glass(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::GLASS,
            ..WHITE
        })),
        text_color: Some(WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Page background. Alternating sections use [`section_alt`].
pub fn page(theme: &Theme) -> container::Style {
    let base = if matches!(theme, Theme::Light) {
        palette::GRAY_100
    } else {
        BLACK
    };
    container::Style {
        background: Some(Background::Color(base)),
        ..Default::default()
    }
}

pub fn section_alt(theme: &Theme) -> container::Style {
    let base = if matches!(theme, Theme::Light) {
        palette::GRAY_300
    } else {
        palette::GRAY_900
    };
    container::Style {
        background: Some(Background::Color(base)),
        ..Default::default()
    }
}

/// Navbar surface. Transparent over the hero, glass once the page scrolled.
pub fn navbar(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        if scrolled {
            container::Style {
                background: Some(Background::Color(Color {
                    a: opacity::OVERLAY_STRONG,
                    ..palette::GRAY_900
                })),
                text_color: Some(WHITE),
                border: Border {
                    color: Color {
                        a: opacity::GLASS,
                        ..WHITE
                    },
                    width: 1.0,
                    radius: radius::LG.into(),
                },
                ..Default::default()
            }
        } else {
            container::Style {
                text_color: Some(WHITE),
                ..Default::default()
            }
        }
    }
}

/// Dimmed full-window backdrop behind a modal.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Caption strip laid over the bottom of a card or image.
pub fn caption(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        })),
        text_color: Some(palette::GRAY_300),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Placeholder surface when a video cannot be played or an image has no preview.
pub fn placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_700)),
        text_color: Some(WHITE),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Monospace code block background.
pub fn code_block(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..BLACK
        })),
        text_color: Some(palette::GRAY_300),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}
