// SPDX-License-Identifier: MPL-2.0
//! Navigation bar pinned to the top of the page.
//!
//! The bar lists the page sections and the about entry. It is transparent
//! over the hero and condenses onto a glass surface once the page scrolls
//! past the configured threshold.

use crate::application::page::Section;
use crate::content;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext {
    /// Whether the page is scrolled past the threshold.
    pub scrolled: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    JumpTo(Section),
    ScrollToTop,
    OpenAbout,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    JumpTo(Section),
    ScrollToTop,
    OpenAbout,
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::JumpTo(section) => Event::JumpTo(section),
        Message::ScrollToTop => Event::ScrollToTop,
        Message::OpenAbout => Event::OpenAbout,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let height = if ctx.scrolled {
        sizing::NAVBAR_HEIGHT_CONDENSED
    } else {
        sizing::NAVBAR_HEIGHT
    };

    let brand = button(
        Text::new(content::PROJECT_NAME)
            .size(typography::TITLE_MD)
            .color(palette::ACCENT),
    )
    .padding(0)
    .style(styles::button::nav_link)
    .on_press(Message::ScrollToTop);

    let links = Section::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, section| {
            row.push(nav_link(section.label(), Message::JumpTo(*section)))
        })
        .push(nav_link("About", Message::OpenAbout));

    let row = Row::new()
        .spacing(spacing::MD)
        .padding([0.0, spacing::LG])
        .height(Length::Fill)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(links);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .style(styles::container::navbar(ctx.scrolled))
        .into()
}

fn nav_link<'a>(label: &'a str, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::nav_link)
        .on_press(message)
        .into()
}
