// SPDX-License-Identifier: MPL-2.0
//! Media catalog supplied to the gallery at startup.
//!
//! A catalog holds one demo video and an ordered list of screenshots. The
//! built-in catalog mirrors the RayTracerNG page; a TOML file with the same
//! shape can replace it.
//!
//! ```toml
//! [video]
//! title = "RayTracerNG Demo"
//! description = "Watch the engine in action"
//! share_link = "https://youtu.be/bKc2I06b_7U"
//!
//! [[images]]
//! id = 1
//! title = "Screenshot 1"
//! description = "Light emission"
//! url = "https://example.com/1.png"
//! ```
//!
//! The catalog is read-only for the lifetime of the gallery view.

mod builtin;

use crate::domain::media::{MediaId, MediaItem};
use crate::error::{CatalogError, Result};
use crate::media::video_id::extract_video_id;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Identifier given to the video entry when the catalog does not set one.
pub const DEFAULT_VIDEO_ID: u32 = 1;

fn default_video_id() -> u32 {
    DEFAULT_VIDEO_ID
}

/// The single featured video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoDescriptor {
    #[serde(default = "default_video_id")]
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Explicit thumbnail locator. Derived from the share link when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub share_link: String,
}

/// One screenshot in the carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub video: VideoDescriptor,
    #[serde(default)]
    pub images: Vec<ImageDescriptor>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Returns the catalog shipped with the showcase.
    #[must_use]
    pub fn builtin() -> Self {
        builtin::raytracer_ng()
    }

    /// Checks that image ids are unique and entries are usable.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found.
    pub fn validate(&self) -> std::result::Result<(), CatalogError> {
        if self.video.title.trim().is_empty() {
            return Err(CatalogError::EmptyTitle("video".to_string()));
        }

        let mut seen = HashSet::with_capacity(self.images.len());
        for image in &self.images {
            let id = MediaId::new(image.id);
            if !seen.insert(id) {
                return Err(CatalogError::DuplicateImageId(id));
            }
            if image.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(id.to_string()));
            }
            if image.url.trim().is_empty() {
                return Err(CatalogError::MissingImageUrl(id));
            }
        }
        Ok(())
    }

    /// Builds the video entry as a domain item.
    #[must_use]
    pub fn video_item(&self) -> MediaItem {
        MediaItem::video(
            MediaId::new(self.video.id),
            self.video.title.clone(),
            self.video.description.clone(),
            self.video.share_link.clone(),
        )
    }

    /// Builds the ordered image collection as domain items.
    #[must_use]
    pub fn image_items(&self) -> Vec<MediaItem> {
        self.images
            .iter()
            .map(|image| {
                MediaItem::image(
                    MediaId::new(image.id),
                    image.title.clone(),
                    image.description.clone(),
                    image.url.clone(),
                )
            })
            .collect()
    }

    /// Thumbnail locator for the video card.
    ///
    /// Uses the explicit thumbnail when set, otherwise the host thumbnail for
    /// the extracted identifier. `None` when neither is available.
    #[must_use]
    pub fn video_thumbnail(&self) -> Option<String> {
        self.video
            .thumbnail
            .clone()
            .or_else(|| extract_video_id(&self.video.share_link).map(|id| id.thumbnail_url()))
    }
}

/// Loads and validates a catalog from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML, or fails
/// [`Catalog::validate`].
pub fn load_from_path(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    let catalog: Catalog = toml::from_str(&content)?;
    catalog.validate()?;
    Ok(catalog)
}

/// Writes a catalog as TOML, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn save_to_path(catalog: &Catalog, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(catalog)?;
    fs::write(path, content)?;
    Ok(())
}

/// Loads the catalog at `path`, or the built-in one when no path is given.
///
/// A catalog that cannot be loaded falls back to the built-in catalog and the
/// reason is returned as a warning so the caller can report it.
#[must_use]
pub fn load_or_builtin(path: Option<&Path>) -> (Catalog, Option<String>) {
    let Some(path) = path else {
        return (Catalog::builtin(), None);
    };

    match load_from_path(path) {
        Ok(catalog) => {
            tracing::info!(
                path = %path.display(),
                images = catalog.images.len(),
                "loaded media catalog"
            );
            (catalog, None)
        }
        Err(err) => {
            let warning = format!(
                "Could not load catalog {}: {err}. Using the built-in catalog.",
                path.display()
            );
            tracing::warn!("{warning}");
            (Catalog::builtin(), Some(warning))
        }
    }
}
