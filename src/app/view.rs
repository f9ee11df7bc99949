// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is one vertical scrollable with the navbar pinned over it. Modal
//! layers (about, gallery) and toasts are stacked on top in that order.

use super::{notifications, Message, PAGE_SCROLLABLE_ID};
use crate::application::gallery::GalleryController;
use crate::application::page::{PageContext, Section};
use crate::ui::about;
use crate::ui::components::modal;
use crate::ui::design_tokens::spacing;
use crate::ui::gallery::{self, ViewContext as GalleryViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::sections;
use crate::ui::styles;
use iced::{
    widget::{scrollable::Viewport, Column, Container, Id, Scrollable, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub gallery: &'a GalleryController,
    pub page: &'a PageContext,
    pub video_thumbnail: Option<&'a str>,
    pub notifications: &'a notifications::Manager,
}

/// A modal layer stacked over the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalLayer {
    About,
    Gallery,
}

/// Open modal layers, bottom to top.
///
/// Gallery modals can be opened from behind About, so they sit above it.
/// `Escape` closes from the end of this list.
#[must_use]
pub fn modal_layers(page: &PageContext, gallery: &GalleryController) -> Vec<ModalLayer> {
    let mut layers = Vec::with_capacity(2);
    if page.is_about_open() {
        layers.push(ModalLayer::About);
    }
    if !gallery.overlay().is_none() {
        layers.push(ModalLayer::Gallery);
    }
    layers
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let gallery_ctx = GalleryViewContext {
        gallery: ctx.gallery,
        video_thumbnail: ctx.video_thumbnail,
    };

    let navbar_view = navbar::view(NavbarViewContext {
        scrolled: ctx.page.is_scrolled(),
    })
    .map(Message::Navbar);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(view_page(&gallery_ctx))
        .push(navbar_view);

    for layer in modal_layers(ctx.page, ctx.gallery) {
        layers = match layer {
            ModalLayer::About => {
                let about_layer = modal::layer(about::view(), about::Message::Close);
                layers.push(about_layer.map(Message::About))
            }
            ModalLayer::Gallery => match gallery::view_overlay(&gallery_ctx) {
                Some(overlay) => layers.push(overlay.map(Message::Gallery)),
                None => layers,
            },
        };
    }

    if let Some(toasts) = notifications::Toast::view_overlay(ctx.notifications) {
        layers = layers.push(toasts.map(Message::Notification));
    }

    layers.into()
}

fn view_page<'a>(gallery_ctx: &GalleryViewContext<'a>) -> Element<'a, Message> {
    let gallery_body = Column::new()
        .spacing(spacing::XXL)
        .push(sections::section_header(Section::Gallery))
        .push(gallery::view_section(gallery_ctx).map(Message::Gallery));

    let page = Column::new()
        .width(Length::Fill)
        .push(sections::hero().map(Message::Sections))
        .push(sections::features().map(Message::Sections))
        .push(sections::tech_stack().map(Message::Sections))
        .push(sections::architecture().map(Message::Sections))
        .push(sections::section_frame(Section::Gallery, gallery_body.into()))
        .push(sections::download().map(Message::Sections))
        .push(sections::contribute().map(Message::Sections))
        .push(sections::footer().map(Message::Sections));

    let scrollable = Scrollable::new(page)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::PageScrolled(viewport.absolute_offset().y));

    Container::new(scrollable)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}
