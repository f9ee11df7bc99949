// SPDX-License-Identifier: MPL-2.0
//! Gallery section and its two modals.
//!
//! The section shows the video card and the screenshot strip. The modals are
//! rendered from [`GalleryController::overlay`], which guarantees a single
//! overlay at a time. All state changes go through [`update`].

use crate::application::gallery::{GalleryController, ImageOverlay, Overlay, VideoOverlay};
use crate::domain::media::MediaItem;
use crate::ui::components::modal;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

/// Placeholder text shown when the share link holds no usable identifier.
pub const VIDEO_UNAVAILABLE: &str = "Video not available";

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub gallery: &'a GalleryController,
    /// Thumbnail locator for the video card, if one is known.
    pub video_thumbnail: Option<&'a str>,
}

/// Messages emitted by the gallery section and modals.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    PlayVideo,
    CloseVideo,
    OpenImage(MediaItem),
    NextImage,
    PreviousImage,
    CloseImage,
    CopyLink(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    CopyToClipboard(String),
}

/// Applies a gallery message to the controller.
pub fn update(gallery: &mut GalleryController, message: Message) -> Event {
    match message {
        Message::PlayVideo => {
            let video = gallery.video().clone();
            gallery.open_video(&video);
        }
        Message::CloseVideo => gallery.close_video(),
        Message::OpenImage(item) => gallery.open_image(&item),
        Message::NextImage => {
            gallery.next_image();
        }
        Message::PreviousImage => {
            gallery.previous_image();
        }
        Message::CloseImage => gallery.close_image(),
        Message::CopyLink(link) => return Event::CopyToClipboard(link),
    }
    Event::None
}

/// Renders the gallery section body (video card and screenshot strip).
#[must_use]
pub fn view_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let strip = ctx
        .gallery
        .images()
        .iter()
        .fold(Row::new().spacing(spacing::SM), |row, image| {
            row.push(thumbnail(image))
        });

    Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(video_card(ctx.gallery.video(), ctx.video_thumbnail))
        .push(strip)
        .into()
}

fn video_card<'a>(video: &'a MediaItem, thumbnail: Option<&'a str>) -> Element<'a, Message> {
    let preview = Container::new(Text::new("▶").size(typography::DISPLAY).color(palette::ACCENT))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let mut caption = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(video.title()).size(typography::TITLE_SM))
        .push(Text::new(video.description()).size(typography::CAPTION));
    if let Some(thumbnail) = thumbnail {
        caption = caption.push(
            Text::new(thumbnail)
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }

    let content = Column::new()
        .push(preview)
        .push(
            Container::new(caption)
                .width(Length::Fill)
                .padding(spacing::MD)
                .style(styles::container::caption),
        );

    button(content)
        .width(Length::Fixed(sizing::MODAL_MAX_WIDTH))
        .height(Length::Fixed(sizing::VIDEO_CARD_HEIGHT))
        .padding(0)
        .style(styles::button::card)
        .on_press(Message::PlayVideo)
        .into()
}

fn thumbnail(image: &MediaItem) -> Element<'_, Message> {
    let label = Container::new(
        Text::new(image.title())
            .size(typography::CAPTION)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center);

    button(label)
        .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
        .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
        .padding(spacing::XS)
        .style(styles::button::card)
        .on_press(Message::OpenImage(image.clone()))
        .into()
}

/// Renders the active modal, if any, as a full-window layer.
#[must_use]
pub fn view_overlay<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    match ctx.gallery.overlay() {
        Overlay::None => None,
        Overlay::Video(overlay) => Some(modal::layer(video_modal(overlay), Message::CloseVideo)),
        Overlay::Image(overlay) => Some(modal::layer(image_modal(overlay), Message::CloseImage)),
    }
}

fn close_row<'a>(on_close: Message) -> Row<'a, Message> {
    Row::new()
        .push(Space::new().width(Length::Fill))
        .push(
            button(text("✕").size(typography::TITLE_SM))
                .padding(spacing::XS)
                .style(styles::button::overlay)
                .on_press(on_close),
        )
}

fn video_modal(overlay: VideoOverlay<'_>) -> Element<'_, Message> {
    let player: Element<'_, Message> = match overlay.embed_url() {
        Some(embed_url) => Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(Text::new("▶").size(typography::DISPLAY).color(palette::ACCENT))
            .push(Text::new(overlay.item.title()).size(typography::TITLE_MD))
            .push(
                Text::new(embed_url.clone())
                    .size(typography::BODY)
                    .color(palette::GRAY_300),
            )
            .push(
                button(text("Copy player link").size(typography::BODY))
                    .style(styles::button::secondary)
                    .on_press(Message::CopyLink(embed_url)),
            )
            .into(),
        None => Text::new(VIDEO_UNAVAILABLE)
            .size(typography::BODY_LG)
            .into(),
    };

    let surface = Container::new(player)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PLAYER_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::placeholder);

    Column::new()
        .spacing(spacing::XS)
        .push(close_row(Message::CloseVideo))
        .push(surface)
        .into()
}

fn image_modal(overlay: ImageOverlay<'_>) -> Element<'_, Message> {
    let navigation = overlay.navigation;

    let previous = button(text("‹").size(typography::TITLE_LG))
        .padding(spacing::XS)
        .style(styles::button::overlay)
        .on_press_maybe(navigation.has_previous.then_some(Message::PreviousImage));
    let next = button(text("›").size(typography::TITLE_LG))
        .padding(spacing::XS)
        .style(styles::button::overlay)
        .on_press_maybe(navigation.has_next.then_some(Message::NextImage));

    let picture = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(Text::new(overlay.item.title()).size(typography::TITLE_MD))
            .push(
                Text::new(overlay.item.source_ref())
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            )
            .push(
                button(text("Copy image link").size(typography::BODY))
                    .style(styles::button::secondary)
                    .on_press(Message::CopyLink(overlay.item.source_ref().to_string())),
            ),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::PLAYER_HEIGHT))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::placeholder);

    let carousel = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(previous)
        .push(picture)
        .push(next);

    let caption = Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .push(Text::new(overlay.item.description()).size(typography::BODY))
            .push(
                Text::new(format!(
                    "{} / {}",
                    overlay.index + 1,
                    navigation.total_count
                ))
                .size(typography::CAPTION),
            ),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .align_x(Horizontal::Center)
    .style(styles::container::caption);

    Column::new()
        .spacing(spacing::XS)
        .push(close_row(Message::CloseImage))
        .push(carousel)
        .push(caption)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::MediaId;

    fn gallery() -> GalleryController {
        let images = (1..=3)
            .map(|id| MediaItem::image(MediaId::new(id), format!("Shot {id}"), "", "u"))
            .collect();
        GalleryController::new(
            MediaItem::video(MediaId::new(1), "Demo", "", "https://youtu.be/bKc2I06b_7U"),
            images,
        )
    }

    #[test]
    fn play_video_opens_catalog_video() {
        let mut gallery = gallery();
        assert_eq!(update(&mut gallery, Message::PlayVideo), Event::None);
        assert_eq!(gallery.active_video(), Some(gallery.video()));
    }

    #[test]
    fn image_messages_drive_carousel() {
        let mut gallery = gallery();
        let second = gallery.images()[1].clone();

        update(&mut gallery, Message::OpenImage(second));
        update(&mut gallery, Message::NextImage);
        update(&mut gallery, Message::NextImage);
        assert_eq!(gallery.active_image_index(), 2);

        update(&mut gallery, Message::PreviousImage);
        assert_eq!(gallery.active_image_index(), 1);

        update(&mut gallery, Message::CloseImage);
        assert!(gallery.active_image().is_none());
    }

    #[test]
    fn copy_link_is_forwarded() {
        let mut gallery = gallery();
        let event = update(&mut gallery, Message::CopyLink("x".to_string()));
        assert_eq!(event, Event::CopyToClipboard("x".to_string()));
    }
}
