// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Each handler turns a component event into state changes on the gallery
//! controller or page context, plus at most one runtime task (scrolling the
//! page or writing the clipboard).

use super::{notifications, Message, PAGE_SCROLLABLE_ID};
use crate::application::gallery::GalleryController;
use crate::application::page::{PageContext, Section};
use crate::ui::about::{self, Event as AboutEvent};
use crate::ui::gallery::{self, Event as GalleryEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::sections::{self, Event as SectionsEvent};
use iced::widget::scrollable::{AbsoluteOffset, RelativeOffset};
use iced::widget::{operation, Id};
use iced::Task;

/// Mutable application state borrowed by the handlers.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut GalleryController,
    pub page: &'a mut PageContext,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::JumpTo(section) => jump_to(section),
        NavbarEvent::ScrollToTop => operation::snap_to(
            Id::new(PAGE_SCROLLABLE_ID),
            RelativeOffset { x: 0.0, y: 0.0 },
        ),
        NavbarEvent::OpenAbout => {
            ctx.page.open_about();
            Task::none()
        }
    }
}

pub fn handle_sections_message(
    ctx: &mut UpdateContext<'_>,
    message: sections::Message,
) -> Task<Message> {
    match sections::update(message) {
        SectionsEvent::JumpTo(section) => jump_to(section),
        SectionsEvent::CopyToClipboard(text) => copy_to_clipboard(ctx, text),
    }
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match gallery::update(ctx.gallery, message) {
        GalleryEvent::None => Task::none(),
        GalleryEvent::CopyToClipboard(text) => copy_to_clipboard(ctx, text),
    }
}

pub fn handle_about_message(ctx: &mut UpdateContext<'_>, message: &about::Message) -> Task<Message> {
    match about::update(message) {
        AboutEvent::Close => {
            ctx.page.close_about();
            Task::none()
        }
        AboutEvent::CopyToClipboard(text) => copy_to_clipboard(ctx, text),
    }
}

/// Closes the topmost overlay: image, then video, then the about modal.
///
/// Returns whether anything was closed.
pub fn close_top_overlay(ctx: &mut UpdateContext<'_>) -> bool {
    if ctx.gallery.close_top() {
        return true;
    }
    if ctx.page.is_about_open() {
        ctx.page.close_about();
        return true;
    }
    false
}

fn jump_to(section: Section) -> Task<Message> {
    tracing::debug!(section = section.anchor(), "jumping to section");
    operation::scroll_to(
        Id::new(PAGE_SCROLLABLE_ID),
        AbsoluteOffset {
            x: 0.0,
            y: sections::section_offset(section),
        },
    )
}

fn copy_to_clipboard(ctx: &mut UpdateContext<'_>, text: String) -> Task<Message> {
    tracing::debug!(link = %text, "copying link to clipboard");
    ctx.notifications.push(notifications::Notification::success(
        "Link copied to clipboard",
    ));
    iced::clipboard::write(text)
}
