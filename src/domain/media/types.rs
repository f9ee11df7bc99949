// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent catalog entries without any presentation
//! dependencies. They are immutable once built from the catalog.

use std::fmt;

/// Identifier of a media item, unique within its collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MediaId(u32);

impl MediaId {
    /// Creates a new identifier.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for MediaId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of a gallery entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Still screenshot shown in the image carousel.
    Image,
    /// Hosted video played through an embed.
    Video,
}

/// A catalog entry displayed in the gallery.
///
/// For [`MediaKind::Image`] the `source_ref` is a resolvable resource locator.
/// For [`MediaKind::Video`] it is a share link from which the canonical video
/// identifier must be extracted (see [`crate::media::video_id`]).
///
/// # Example
///
/// ```
/// use raytracer_showcase::domain::media::{MediaId, MediaItem, MediaKind};
///
/// let shot = MediaItem::image(
///     MediaId::new(1),
///     "Screenshot",
///     "Light emission",
///     "https://example.com/shot.png",
/// );
///
/// assert_eq!(shot.kind(), MediaKind::Image);
/// assert_eq!(shot.id(), MediaId::new(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    id: MediaId,
    kind: MediaKind,
    title: String,
    description: String,
    source_ref: String,
}

impl MediaItem {
    /// Creates a new media item.
    #[must_use]
    pub fn new(
        id: MediaId,
        kind: MediaKind,
        title: impl Into<String>,
        description: impl Into<String>,
        source_ref: impl Into<String>,
    ) -> Self {
        Self {
            id,
            kind,
            title: title.into(),
            description: description.into(),
            source_ref: source_ref.into(),
        }
    }

    /// Creates an image item.
    #[must_use]
    pub fn image(
        id: MediaId,
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::new(id, MediaKind::Image, title, description, url)
    }

    /// Creates a video item from its share link.
    #[must_use]
    pub fn video(
        id: MediaId,
        title: impl Into<String>,
        description: impl Into<String>,
        share_link: impl Into<String>,
    ) -> Self {
        Self::new(id, MediaKind::Video, title, description, share_link)
    }

    #[must_use]
    pub fn id(&self) -> MediaId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the resource locator (images) or share link (videos).
    #[must_use]
    pub fn source_ref(&self) -> &str {
        &self.source_ref
    }

    #[must_use]
    pub fn is_image(&self) -> bool {
        self.kind == MediaKind::Image
    }

    #[must_use]
    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}
