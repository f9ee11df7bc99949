// SPDX-License-Identifier: MPL-2.0
//! About modal describing the project and its author.
//!
//! The modal is opened from the navbar and closed with its close button, a
//! click on the backdrop or Escape. Social links are copied to the clipboard
//! since the showcase never opens a browser itself.

use crate::content::{self, Card, SocialLink};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, rule, scrollable, text, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Messages emitted by the about modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Close,
    CopyLink(&'static str),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Close,
    CopyToClipboard(String),
}

/// Process an about message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Close => Event::Close,
        Message::CopyLink(url) => Event::CopyToClipboard((*url).to_string()),
    }
}

/// Render the modal body. The caller wraps it in the shared backdrop.
#[must_use]
pub fn view<'a>() -> Element<'a, Message> {
    let close = button(text("✕").size(typography::TITLE_SM))
        .padding(spacing::XS)
        .style(styles::button::overlay)
        .on_press(Message::Close);

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(Text::new(content::ABOUT_PROJECT.title).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(close);

    let body = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(header)
        .push(build_card(&content::ABOUT_PROJECT, false))
        .push(rule::horizontal(1))
        .push(build_card(&content::ABOUT_AUTHOR, true))
        .push(build_links())
        .push(
            Text::new(format!("{} showcase v{APP_VERSION}", content::PROJECT_NAME))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    Container::new(scrollable(body))
        .width(Length::Fill)
        .style(styles::container::glass)
        .into()
}

fn build_card<'a>(card: &Card, with_title: bool) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::SM);
    if with_title {
        column = column.push(
            Text::new(card.title)
                .size(typography::TITLE_SM)
                .color(palette::ACCENT),
        );
    }
    column
        .push(
            Text::new(card.description)
                .size(typography::BODY)
                .color(palette::GRAY_300),
        )
        .into()
}

fn build_links<'a>() -> Element<'a, Message> {
    content::SOCIAL_LINKS
        .iter()
        .fold(
            Row::new().spacing(spacing::SM).align_y(Vertical::Center),
            |row, link| row.push(build_link(link)),
        )
        .into()
}

fn build_link<'a>(link: &SocialLink) -> Element<'a, Message> {
    button(
        Text::new(link.label)
            .size(typography::BODY)
            .align_x(Horizontal::Center),
    )
    .style(styles::button::secondary)
    .on_press(Message::CopyLink(link.url))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_view_renders() {
        let _element = view();
    }

    #[test]
    fn close_emits_event() {
        assert_eq!(update(&Message::Close), Event::Close);
    }

    #[test]
    fn copy_link_forwards_url() {
        let url = content::SOCIAL_LINKS[0].url;
        assert_eq!(
            update(&Message::CopyLink(url)),
            Event::CopyToClipboard(url.to_string())
        );
    }

    #[test]
    fn app_version_is_valid() {
        assert!(!APP_VERSION.is_empty());
    }
}
