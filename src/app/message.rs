// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::ThemeMode;
use crate::ui::about;
use crate::ui::gallery;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::sections;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Sections(sections::Message),
    Gallery(gallery::Message),
    About(about::Message),
    Notification(notifications::NotificationMessage),
    /// The page scrollable moved; carries the absolute vertical offset.
    PageScrolled(f32),
    /// Escape was pressed: close the topmost overlay.
    CloseTopOverlay,
    Tick(Instant), // Periodic tick for toast auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional catalog file. Takes precedence over `[gallery] catalog_path`.
    pub catalog: Option<PathBuf>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `RAYTRACER_SHOWCASE_CONFIG_DIR`.
    pub config_dir: Option<PathBuf>,
    /// Optional theme override. Takes precedence over `[general] theme_mode`.
    pub theme: Option<ThemeMode>,
}
