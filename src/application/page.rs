// SPDX-License-Identifier: MPL-2.0
//! Page-level context shared with the presentation layer.
//!
//! The page tracks two things outside the gallery: whether the content has
//! scrolled past the hero (the navbar condenses) and whether the about modal
//! is open. Both live here as explicit state owned by the application root
//! rather than as globals.

use crate::config::DEFAULT_SCROLL_THRESHOLD_PX;

/// Sections reachable from the navigation bar, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Features,
    TechStack,
    Architecture,
    Gallery,
    Download,
    Contribute,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Features,
        Section::TechStack,
        Section::Architecture,
        Section::Gallery,
        Section::Download,
        Section::Contribute,
    ];

    /// Label shown in the navigation bar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Section::Features => "Features",
            Section::TechStack => "Tech Stack",
            Section::Architecture => "Architecture",
            Section::Gallery => "Gallery",
            Section::Download => "Download",
            Section::Contribute => "Contribute",
        }
    }

    /// Stable anchor id, derived from the label.
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Features => "features",
            Section::TechStack => "tech-stack",
            Section::Architecture => "architecture",
            Section::Gallery => "gallery",
            Section::Download => "download",
            Section::Contribute => "contribute",
        }
    }

    /// Position of the section on the page.
    #[must_use]
    pub fn position(self) -> usize {
        Section::ALL
            .iter()
            .position(|section| *section == self)
            .unwrap_or_default()
    }
}

/// Scroll and about-modal state for the whole page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageContext {
    scroll_threshold: f32,
    scrolled: bool,
    about_open: bool,
}

impl Default for PageContext {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD_PX)
    }
}

impl PageContext {
    /// Creates a context that reports `scrolled` past `scroll_threshold` pixels.
    #[must_use]
    pub fn new(scroll_threshold: f32) -> Self {
        Self {
            scroll_threshold: scroll_threshold.max(0.0),
            scrolled: false,
            about_open: false,
        }
    }

    /// Records the vertical scroll offset of the page.
    pub fn on_scroll(&mut self, offset_y: f32) {
        self.scrolled = offset_y > self.scroll_threshold;
    }

    /// Whether the page is scrolled past the threshold.
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    #[must_use]
    pub fn scroll_threshold(&self) -> f32 {
        self.scroll_threshold
    }

    pub fn open_about(&mut self) {
        self.about_open = true;
    }

    pub fn close_about(&mut self) {
        self.about_open = false;
    }

    #[must_use]
    pub fn is_about_open(&self) -> bool {
        self.about_open
    }
}
