// SPDX-License-Identifier: MPL-2.0
//! Static page sections: hero, features, tech stack, architecture,
//! download, contribute and footer.
//!
//! The gallery section is rendered by [`crate::ui::gallery`]; this module
//! only provides its heading through [`section_header`].

use crate::application::page::Section;
use crate::content::{self, Card, Download, ModuleCard};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Font, Length,
};

/// Number of cards per grid row.
const GRID_COLUMNS: usize = 3;

/// Messages emitted by the static sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    JumpTo(Section),
    CopyLink(&'static str),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    JumpTo(Section),
    CopyToClipboard(String),
}

#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::JumpTo(section) => Event::JumpTo(section),
        Message::CopyLink(url) => Event::CopyToClipboard(url.to_string()),
    }
}

// =============================================================================
// Layout Helpers
// =============================================================================

/// Centered heading and subtitle shared by every section.
pub fn section_header<'a, M: 'a>(section: Section) -> Element<'a, M> {
    let (title, subtitle) = content::section_heading(section);
    Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(Text::new(title).size(typography::TITLE_LG))
        .push(
            Text::new(subtitle)
                .size(typography::BODY_LG)
                .color(palette::GRAY_400),
        )
        .into()
}

/// Fixed height of a section on the page.
#[must_use]
pub fn section_height(section: Section) -> f32 {
    match section {
        Section::Features => sizing::FEATURES_HEIGHT,
        Section::TechStack => sizing::TECH_STACK_HEIGHT,
        Section::Architecture => sizing::ARCHITECTURE_HEIGHT,
        Section::Gallery => sizing::GALLERY_HEIGHT,
        Section::Download => sizing::DOWNLOAD_HEIGHT,
        Section::Contribute => sizing::CONTRIBUTE_HEIGHT,
    }
}

/// Absolute vertical offset of the top of `section` inside the page
/// scrollable: the hero plus every section above it.
#[must_use]
pub fn section_offset(section: Section) -> f32 {
    Section::ALL
        .iter()
        .take(section.position())
        .map(|above| section_height(*above))
        .sum::<f32>()
        + sizing::HERO_HEIGHT
}

/// Wraps a section body with vertical padding and a max content width.
///
/// Sections alternate backgrounds, starting plain.
pub fn section_frame<'a, M: 'a>(section: Section, body: Element<'a, M>) -> Element<'a, M> {
    let inner = Container::new(body)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .width(Length::Fill);

    let outer = Container::new(inner)
        .width(Length::Fill)
        .height(Length::Fixed(section_height(section)))
        .padding([spacing::SECTION, spacing::LG])
        .align_x(Horizontal::Center);

    if section.position() % 2 == 1 {
        outer.style(styles::container::section_alt).into()
    } else {
        outer.into()
    }
}

fn grid<'a>(cells: Vec<Element<'a, Message>>) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(spacing::LG).width(Length::Fill);
    let mut cells = cells.into_iter().peekable();
    while cells.peek().is_some() {
        let row = cells
            .by_ref()
            .take(GRID_COLUMNS)
            .fold(Row::new().spacing(spacing::LG), |row, cell| row.push(cell));
        rows = rows.push(row);
    }
    rows.into()
}

fn card<'a>(card: &Card) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(
                Text::new(card.title)
                    .size(typography::TITLE_SM)
                    .color(palette::ACCENT),
            )
            .push(
                Text::new(card.description)
                    .size(typography::BODY)
                    .color(palette::GRAY_300),
            ),
    )
    .width(Length::FillPortion(1))
    .padding(spacing::LG)
    .style(styles::container::glass)
    .into()
}

// =============================================================================
// Sections
// =============================================================================

/// Full-height introduction with the two calls to action.
pub fn hero<'a>() -> Element<'a, Message> {
    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            button(Text::new("Download Now").size(typography::BODY_LG))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::primary)
                .on_press(Message::JumpTo(Section::Download)),
        )
        .push(
            button(Text::new("View on GitHub").size(typography::BODY_LG))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::secondary)
                .on_press(Message::CopyLink(content::REPOSITORY_URL)),
        );

    let body = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(Text::new(content::PROJECT_NAME).size(typography::DISPLAY))
        .push(
            Text::new(content::TAGLINE)
                .size(typography::TITLE_SM)
                .color(palette::GRAY_300),
        )
        .push(actions);

    Container::new(body)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HERO_HEIGHT))
        .padding([spacing::SECTION * 2.0, spacing::LG])
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

pub fn features<'a>() -> Element<'a, Message> {
    let body = Column::new()
        .spacing(spacing::XXL)
        .push(section_header(Section::Features))
        .push(grid(content::FEATURES.iter().map(card).collect()));
    section_frame(Section::Features, body.into())
}

pub fn tech_stack<'a>() -> Element<'a, Message> {
    let body = Column::new()
        .spacing(spacing::XXL)
        .push(section_header(Section::TechStack))
        .push(grid(content::TECH_STACK.iter().map(card).collect()));
    section_frame(Section::TechStack, body.into())
}

pub fn architecture<'a>() -> Element<'a, Message> {
    let modules = content::ARCHITECTURE
        .iter()
        .fold(Column::new().spacing(spacing::MD), |column, module| {
            column.push(module_card(module))
        });

    let body = Column::new()
        .spacing(spacing::XXL)
        .push(section_header(Section::Architecture))
        .push(modules);
    section_frame(Section::Architecture, body.into())
}

fn module_card<'a>(module: &ModuleCard) -> Element<'a, Message> {
    let connections = if module.connections.is_empty() {
        "Leaf module".to_string()
    } else {
        format!("→ {}", module.connections.join(", "))
    };

    Container::new(
        Row::new()
            .spacing(spacing::LG)
            .align_y(Vertical::Center)
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .width(Length::FillPortion(2))
                    .push(Text::new(module.name).size(typography::TITLE_SM))
                    .push(
                        Text::new(module.description)
                            .size(typography::BODY)
                            .color(palette::GRAY_300),
                    ),
            )
            .push(
                Text::new(connections)
                    .size(typography::CAPTION)
                    .color(palette::ACCENT)
                    .width(Length::FillPortion(1)),
            ),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::glass)
    .into()
}

pub fn download<'a>() -> Element<'a, Message> {
    let cards = content::DOWNLOADS
        .iter()
        .fold(Row::new().spacing(spacing::LG), |row, item| {
            row.push(download_card(item))
        });

    let body = Column::new()
        .spacing(spacing::XXL)
        .align_x(Horizontal::Center)
        .push(section_header(Section::Download))
        .push(cards)
        .push(
            Text::new(content::SYSTEM_REQUIREMENTS)
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    section_frame(Section::Download, body.into())
}

fn download_card<'a>(item: &Download) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(item.title).size(typography::TITLE_SM))
            .push(
                Text::new(item.description)
                    .size(typography::BODY)
                    .color(palette::GRAY_300),
            )
            .push(
                Text::new(format!("{} • {}", item.version, item.size))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            )
            .push(
                button(Text::new("Copy download link").size(typography::BODY))
                    .style(styles::button::primary)
                    .on_press(Message::CopyLink(item.url)),
            ),
    )
    .width(Length::FillPortion(1))
    .padding(spacing::LG)
    .style(styles::container::glass)
    .into()
}

pub fn contribute<'a>() -> Element<'a, Message> {
    let quick_start = Container::new(
        Text::new(content::QUICK_START)
            .font(Font::MONOSPACE)
            .size(typography::BODY),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::code_block);

    let body = Column::new()
        .spacing(spacing::XXL)
        .push(section_header(Section::Contribute))
        .push(grid(content::CONTRIBUTION_STEPS.iter().map(card).collect()))
        .push(quick_start);
    section_frame(Section::Contribute, body.into())
}

pub fn footer<'a>() -> Element<'a, Message> {
    let links = content::SOCIAL_LINKS
        .iter()
        .fold(Row::new().spacing(spacing::SM), |row, link| {
            row.push(
                button(Text::new(link.label).size(typography::CAPTION))
                    .style(styles::button::nav_link)
                    .on_press(Message::CopyLink(link.url)),
            )
        });

    Container::new(
        Row::new()
            .align_y(Vertical::Center)
            .push(
                Text::new(content::COPYRIGHT)
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400)
                    .width(Length::Fill),
            )
            .push(links),
    )
    .width(Length::Fill)
    .padding([spacing::LG, spacing::XL])
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_render() {
        let _ = hero();
        let _ = features();
        let _ = tech_stack();
        let _ = architecture();
        let _ = download();
        let _ = contribute();
        let _ = footer();
    }

    #[test]
    fn first_section_starts_below_hero() {
        assert_eq!(section_offset(Section::Features), sizing::HERO_HEIGHT);
    }

    #[test]
    fn section_offsets_stack_fixed_heights() {
        for pair in Section::ALL.windows(2) {
            let (above, below) = (pair[0], pair[1]);
            assert_eq!(
                section_offset(below),
                section_offset(above) + section_height(above)
            );
        }
    }

    #[test]
    fn gallery_offset_skips_the_sections_above_it() {
        let expected = sizing::HERO_HEIGHT
            + sizing::FEATURES_HEIGHT
            + sizing::TECH_STACK_HEIGHT
            + sizing::ARCHITECTURE_HEIGHT;
        assert_eq!(section_offset(Section::Gallery), expected);
    }

    #[test]
    fn hero_download_jumps_to_section() {
        assert_eq!(
            update(Message::JumpTo(Section::Download)),
            Event::JumpTo(Section::Download)
        );
    }

    #[test]
    fn copy_link_forwards_url() {
        assert_eq!(
            update(Message::CopyLink(content::REPOSITORY_URL)),
            Event::CopyToClipboard(content::REPOSITORY_URL.to_string())
        );
    }
}
