// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the gallery controller and page context to the
//! view components and translates their events into runtime tasks (page
//! scrolling, clipboard writes). Startup resolves the settings file and the
//! media catalog; problems with either fall back to defaults and are shown
//! as warning toasts.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::gallery::{GalleryController, Overlay};
use crate::application::page::PageContext;
use crate::catalog;
use crate::config::{self, ThemeMode, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::config::{WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH};
use crate::content;
use crate::ui::notifications;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Identifier of the page scrollable, target of section jumps.
pub const PAGE_SCROLLABLE_ID: &str = "showcase-page-scrollable";

/// Root Iced application state.
pub struct App {
    gallery: GalleryController,
    page: PageContext,
    theme_mode: ThemeMode,
    /// Thumbnail locator for the video card.
    video_thumbnail: Option<String>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("images", &self.gallery.image_count())
            .field("overlay_open", &!self.gallery.overlay().is_none())
            .field("about_open", &self.page.is_about_open())
            .finish()
    }
}

/// Builds the window settings.
#[allow(clippy::cast_precision_loss)]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and the catalog, then builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir);

        let catalog_path = flags.catalog.or(config.gallery.catalog_path.clone());
        let (catalog, catalog_warning) = catalog::load_or_builtin(catalog_path.as_deref());

        let gallery = GalleryController::new(catalog.video_item(), catalog.image_items());
        tracing::info!(
            images = gallery.image_count(),
            video = gallery.video().title(),
            "gallery ready"
        );

        let mut notifications = notifications::Manager::new();
        for warning in [config_warning, catalog_warning].into_iter().flatten() {
            notifications.push(notifications::Notification::warning(warning));
        }

        let app = App {
            gallery,
            page: PageContext::new(config.page.scroll_threshold()),
            theme_mode: flags.theme.unwrap_or(config.general.theme_mode),
            video_thumbnail: catalog.video_thumbnail(),
            notifications,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        let overlay_title = match self.gallery.overlay() {
            Overlay::Video(overlay) => Some(overlay.item.title()),
            Overlay::Image(overlay) => Some(overlay.item.title()),
            Overlay::None => None,
        };

        match overlay_title {
            Some(title) => format!("{title} - {}", content::PROJECT_NAME),
            None => content::PROJECT_NAME.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        match self.theme_mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            gallery: &mut self.gallery,
            page: &mut self.page,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Navbar(navbar_message) => update::handle_navbar_message(&mut ctx, navbar_message),
            Message::Sections(sections_message) => {
                update::handle_sections_message(&mut ctx, sections_message)
            }
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::About(about_message) => update::handle_about_message(&mut ctx, &about_message),
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::PageScrolled(offset_y) => {
                ctx.page.on_scroll(offset_y);
                Task::none()
            }
            Message::CloseTopOverlay => {
                update::close_top_overlay(&mut ctx);
                Task::none()
            }
            Message::Tick(now) => {
                ctx.notifications
                    .handle_message(&notifications::NotificationMessage::Tick(now));
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            gallery: &self.gallery,
            page: &self.page,
            video_thumbnail: self.video_thumbnail.as_deref(),
            notifications: &self.notifications,
        })
    }
}
