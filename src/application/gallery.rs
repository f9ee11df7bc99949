// SPDX-License-Identifier: MPL-2.0
//! Gallery selection and carousel navigation.
//!
//! This module provides the `GalleryController`, the single owner of the
//! gallery's modal state: which video is playing, which screenshot is shown
//! and where it sits in the carousel. The presentation layer only reads the
//! state back through [`GalleryController::overlay`] and dispatches the
//! operations below in response to clicks and key presses.
//!
//! # Boundaries
//!
//! Carousel navigation clamps at both ends. `next_image` on the last
//! screenshot and `previous_image` on the first are no-ops, never errors and
//! never a wrap-around.

use crate::domain::media::{MediaId, MediaItem};
use crate::error::GalleryError;
use crate::media::video_id::{extract_video_id, VideoId};

/// Navigation state snapshot for rendering the carousel controls.
// Allow excessive bools: read-only UI snapshot with orthogonal capability flags.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationInfo {
    /// Whether `next_image` would move.
    pub has_next: bool,
    /// Whether `previous_image` would move.
    pub has_previous: bool,
    /// Whether the shown screenshot is the first one.
    pub at_first: bool,
    /// Whether the shown screenshot is the last one.
    pub at_last: bool,
    /// Position of the shown screenshot, if the image modal is open.
    pub current_index: Option<usize>,
    /// Number of screenshots in the collection.
    pub total_count: usize,
}

/// Video modal content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoOverlay<'a> {
    pub item: &'a MediaItem,
    /// `None` when the share link holds no usable identifier; the modal then
    /// shows a "video unavailable" placeholder instead of a player.
    pub video_id: Option<VideoId>,
}

impl VideoOverlay<'_> {
    /// Embeddable player URL, if the identifier could be extracted.
    #[must_use]
    pub fn embed_url(&self) -> Option<String> {
        self.video_id.as_ref().map(VideoId::embed_url)
    }
}

/// Image modal content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageOverlay<'a> {
    pub item: &'a MediaItem,
    pub index: usize,
    pub navigation: NavigationInfo,
}

/// The single overlay the presentation layer must render.
///
/// The video and image slots are independent, but only one overlay is ever
/// visible. The image modal sits above the video modal, so it wins when both
/// slots are populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay<'a> {
    None,
    Video(VideoOverlay<'a>),
    Image(ImageOverlay<'a>),
}

impl Overlay<'_> {
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Overlay::None)
    }
}

/// Owns the gallery's modal and carousel state.
///
/// The catalog (one video and an ordered image collection) is fixed for the
/// controller's lifetime. State starts empty and is only changed through the
/// operations below.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryController {
    video: MediaItem,
    images: Vec<MediaItem>,
    active_video: Option<MediaItem>,
    /// Whether the image modal is open. The shown item is always
    /// `images[active_image_index]`, so item and index cannot disagree.
    image_open: bool,
    active_image_index: usize,
}

impl GalleryController {
    /// Creates a controller with nothing open.
    #[must_use]
    pub fn new(video: MediaItem, images: Vec<MediaItem>) -> Self {
        Self {
            video,
            images,
            active_video: None,
            image_open: false,
            active_image_index: 0,
        }
    }

    /// The featured video.
    #[must_use]
    pub fn video(&self) -> &MediaItem {
        &self.video
    }

    /// The ordered image collection.
    #[must_use]
    pub fn images(&self) -> &[MediaItem] {
        &self.images
    }

    #[must_use]
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    // =========================================================================
    // Video Modal
    // =========================================================================

    /// Opens the video modal for `item`. Image state is untouched.
    pub fn open_video(&mut self, item: &MediaItem) {
        self.active_video = Some(item.clone());
    }

    /// Closes the video modal.
    pub fn close_video(&mut self) {
        self.active_video = None;
    }

    #[must_use]
    pub fn active_video(&self) -> Option<&MediaItem> {
        self.active_video.as_ref()
    }

    // =========================================================================
    // Image Modal
    // =========================================================================

    /// Opens the image modal on `item`, located by id in the collection.
    ///
    /// An item that is not in the collection falls back to the first
    /// screenshot. With an empty collection nothing opens.
    pub fn open_image(&mut self, item: &MediaItem) {
        let index = self.position_of(item.id()).unwrap_or(0);
        self.open_image_at(index);
    }

    /// Strict variant of [`open_image`](Self::open_image).
    ///
    /// Returns the opened position.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::NotInCollection`] and leaves the state
    /// unchanged if `item` is not part of the collection.
    pub fn try_open_image(&mut self, item: &MediaItem) -> Result<usize, GalleryError> {
        let index = self
            .position_of(item.id())
            .ok_or(GalleryError::NotInCollection(item.id()))?;
        self.open_image_at(index);
        Ok(index)
    }

    /// Opens the image modal at `index`.
    ///
    /// Returns `false` without changing anything when `index` is out of range.
    pub fn open_image_at(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.active_image_index = index;
        self.image_open = true;
        true
    }

    /// Shows the next screenshot. No-op at the last one.
    ///
    /// Returns whether the position changed.
    pub fn next_image(&mut self) -> bool {
        if !self.image_open || self.active_image_index + 1 >= self.images.len() {
            return false;
        }
        self.active_image_index += 1;
        true
    }

    /// Shows the previous screenshot. No-op at the first one.
    ///
    /// Returns whether the position changed.
    pub fn previous_image(&mut self) -> bool {
        if !self.image_open || self.active_image_index == 0 {
            return false;
        }
        self.active_image_index -= 1;
        true
    }

    /// Closes the image modal. The index is kept until the next open.
    pub fn close_image(&mut self) {
        self.image_open = false;
    }

    #[must_use]
    pub fn active_image(&self) -> Option<&MediaItem> {
        if self.image_open {
            self.images.get(self.active_image_index)
        } else {
            None
        }
    }

    /// Position of the shown screenshot. Only meaningful while
    /// [`active_image`](Self::active_image) is `Some`.
    #[must_use]
    pub fn active_image_index(&self) -> usize {
        self.active_image_index
    }

    /// Closes whichever overlay is on top. Returns `false` if none was open.
    pub fn close_top(&mut self) -> bool {
        if self.image_open {
            self.close_image();
            true
        } else if self.active_video.is_some() {
            self.close_video();
            true
        } else {
            false
        }
    }

    // =========================================================================
    // Rendering Contract
    // =========================================================================

    /// Returns a snapshot of the carousel state for rendering the arrows.
    #[must_use]
    pub fn navigation_info(&self) -> NavigationInfo {
        let total_count = self.images.len();
        if !self.image_open {
            return NavigationInfo {
                total_count,
                ..NavigationInfo::default()
            };
        }

        let index = self.active_image_index;
        let at_first = index == 0;
        let at_last = index + 1 == total_count;
        NavigationInfo {
            has_next: !at_last,
            has_previous: !at_first,
            at_first,
            at_last,
            current_index: Some(index),
            total_count,
        }
    }

    /// Resolves the two modal slots into the one overlay to render.
    #[must_use]
    pub fn overlay(&self) -> Overlay<'_> {
        if let Some(item) = self.active_image() {
            return Overlay::Image(ImageOverlay {
                item,
                index: self.active_image_index,
                navigation: self.navigation_info(),
            });
        }

        match &self.active_video {
            Some(item) => Overlay::Video(VideoOverlay {
                item,
                video_id: extract_video_id(item.source_ref()),
            }),
            None => Overlay::None,
        }
    }

    fn position_of(&self, id: MediaId) -> Option<usize> {
        self.images.iter().position(|image| image.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(count: u32) -> Vec<MediaItem> {
        (1..=count)
            .map(|id| {
                MediaItem::image(
                    MediaId::new(id),
                    format!("Shot {id}"),
                    format!("Description {id}"),
                    format!("https://example.com/{id}.png"),
                )
            })
            .collect()
    }

    fn video(link: &str) -> MediaItem {
        MediaItem::video(MediaId::new(1), "Demo", "Watch", link)
    }

    fn controller(count: u32) -> GalleryController {
        GalleryController::new(video("https://youtu.be/bKc2I06b_7U?si=xyz"), images(count))
    }

    #[test]
    fn new_controller_has_nothing_open() {
        let gallery = controller(4);
        assert!(gallery.active_video().is_none());
        assert!(gallery.active_image().is_none());
        assert!(gallery.overlay().is_none());
        assert_eq!(gallery.image_count(), 4);
    }

    #[test]
    fn open_image_selects_every_position() {
        let mut gallery = controller(4);
        let collection = gallery.images().to_vec();
        for (i, item) in collection.iter().enumerate() {
            gallery.open_image(item);
            assert_eq!(gallery.active_image_index(), i);
            assert_eq!(gallery.active_image(), Some(item));
        }
    }

    #[test]
    fn previous_at_first_is_noop() {
        let mut gallery = controller(3);
        let first = gallery.images()[0].clone();
        gallery.open_image(&first);
        let before = gallery.clone();

        assert!(!gallery.previous_image());
        assert_eq!(gallery, before);
    }

    #[test]
    fn next_at_last_is_noop() {
        let mut gallery = controller(3);
        let last = gallery.images()[2].clone();
        gallery.open_image(&last);
        let before = gallery.clone();

        for _ in 0..5 {
            assert!(!gallery.next_image());
        }
        assert_eq!(gallery, before);
        assert_eq!(gallery.active_image_index(), 2);
    }

    #[test]
    fn walking_forward_reaches_last_then_stops() {
        let mut gallery = controller(4);
        let first = gallery.images()[0].clone();
        gallery.open_image(&first);

        for step in 1..4 {
            assert!(gallery.next_image());
            assert_eq!(gallery.active_image_index(), step);
            assert_eq!(gallery.active_image(), Some(&gallery.images()[step]));
        }
        assert!(!gallery.next_image());
        assert_eq!(gallery.active_image_index(), 3);
    }

    #[test]
    fn previous_moves_back_and_updates_item() {
        let mut gallery = controller(4);
        let third = gallery.images()[2].clone();
        gallery.open_image(&third);

        assert!(gallery.previous_image());
        assert_eq!(gallery.active_image_index(), 1);
        assert_eq!(gallery.active_image().map(MediaItem::id), Some(MediaId::new(2)));
    }

    #[test]
    fn close_then_open_matches_fresh_open() {
        let mut gallery = controller(4);
        let second = gallery.images()[1].clone();
        let fourth = gallery.images()[3].clone();

        gallery.open_image(&fourth);
        gallery.close_image();
        gallery.open_image(&second);

        let mut fresh = controller(4);
        fresh.open_image(&second);

        assert_eq!(gallery, fresh);
    }

    #[test]
    fn open_image_with_unknown_item_falls_back_to_first() {
        let mut gallery = controller(3);
        let stranger = MediaItem::image(MediaId::new(99), "x", "y", "z");

        gallery.open_image(&stranger);
        assert_eq!(gallery.active_image_index(), 0);
        assert_eq!(gallery.active_image(), Some(&gallery.images()[0]));
    }

    #[test]
    fn open_image_on_empty_collection_opens_nothing() {
        let mut gallery = controller(0);
        let stranger = MediaItem::image(MediaId::new(1), "x", "y", "z");

        gallery.open_image(&stranger);
        assert!(gallery.active_image().is_none());
        assert!(!gallery.next_image());
        assert!(!gallery.previous_image());
    }

    #[test]
    fn try_open_image_rejects_foreign_item() {
        let mut gallery = controller(3);
        let stranger = MediaItem::image(MediaId::new(42), "x", "y", "z");
        let before = gallery.clone();

        assert_eq!(
            gallery.try_open_image(&stranger),
            Err(GalleryError::NotInCollection(MediaId::new(42)))
        );
        assert_eq!(gallery, before);
    }

    #[test]
    fn try_open_image_returns_position() {
        let mut gallery = controller(3);
        let third = gallery.images()[2].clone();
        assert_eq!(gallery.try_open_image(&third), Ok(2));
        assert_eq!(gallery.active_image(), Some(&third));
    }

    #[test]
    fn open_image_at_out_of_range_is_rejected() {
        let mut gallery = controller(2);
        assert!(!gallery.open_image_at(2));
        assert!(gallery.active_image().is_none());
        assert!(gallery.open_image_at(1));
        assert_eq!(gallery.active_image_index(), 1);
    }

    #[test]
    fn navigation_is_ignored_while_closed() {
        let mut gallery = controller(3);
        assert!(!gallery.next_image());
        assert!(!gallery.previous_image());
        assert!(gallery.active_image().is_none());
    }

    #[test]
    fn open_video_is_idempotent_and_leaves_images_alone() {
        let mut gallery = controller(3);
        let second = gallery.images()[1].clone();
        let demo = gallery.video().clone();
        gallery.open_image(&second);

        gallery.open_video(&demo);
        let once = gallery.clone();
        gallery.open_video(&demo);

        assert_eq!(gallery, once);
        assert_eq!(gallery.active_video(), Some(&demo));
        assert_eq!(gallery.active_image(), Some(&second));
        assert_eq!(gallery.active_image_index(), 1);
    }

    #[test]
    fn close_video_clears_slot() {
        let mut gallery = controller(1);
        let demo = gallery.video().clone();
        gallery.open_video(&demo);
        gallery.close_video();
        assert!(gallery.active_video().is_none());
        assert!(gallery.overlay().is_none());
    }

    #[test]
    fn navigation_info_reports_boundaries() {
        let mut gallery = controller(3);
        assert_eq!(gallery.navigation_info().current_index, None);
        assert_eq!(gallery.navigation_info().total_count, 3);

        assert!(gallery.open_image_at(0));
        let info = gallery.navigation_info();
        assert!(info.at_first && !info.at_last);
        assert!(!info.has_previous && info.has_next);

        assert!(gallery.open_image_at(2));
        let info = gallery.navigation_info();
        assert!(info.at_last && !info.at_first);
        assert!(!info.has_next && info.has_previous);
        assert_eq!(info.current_index, Some(2));
    }

    #[test]
    fn single_image_is_both_first_and_last() {
        let mut gallery = controller(1);
        assert!(gallery.open_image_at(0));
        let info = gallery.navigation_info();
        assert!(info.at_first && info.at_last);
        assert!(!info.has_next && !info.has_previous);
    }

    #[test]
    fn overlay_shows_one_modal_at_a_time() {
        let mut gallery = controller(2);
        let demo = gallery.video().clone();
        let first = gallery.images()[0].clone();

        gallery.open_video(&demo);
        assert!(matches!(gallery.overlay(), Overlay::Video(_)));

        gallery.open_image(&first);
        assert!(matches!(gallery.overlay(), Overlay::Image(_)));

        gallery.close_image();
        assert!(matches!(gallery.overlay(), Overlay::Video(_)));

        gallery.close_video();
        assert!(gallery.overlay().is_none());
    }

    #[test]
    fn close_top_closes_image_before_video() {
        let mut gallery = controller(2);
        let demo = gallery.video().clone();
        gallery.open_video(&demo);
        gallery.open_image_at(1);

        assert!(gallery.close_top());
        assert!(gallery.active_image().is_none());
        assert!(gallery.active_video().is_some());

        assert!(gallery.close_top());
        assert!(gallery.active_video().is_none());
        assert!(!gallery.close_top());
    }

    #[test]
    fn video_overlay_exposes_embed_url() {
        let mut gallery = controller(0);
        let demo = gallery.video().clone();
        gallery.open_video(&demo);

        match gallery.overlay() {
            Overlay::Video(overlay) => assert_eq!(
                overlay.embed_url().as_deref(),
                Some("https://www.youtube.com/embed/bKc2I06b_7U")
            ),
            other => panic!("expected video overlay, got {other:?}"),
        }
    }

    #[test]
    fn video_overlay_without_identifier_has_no_embed() {
        let mut gallery =
            GalleryController::new(video("https://example.com/not-a-video"), images(1));
        let demo = gallery.video().clone();
        gallery.open_video(&demo);

        match gallery.overlay() {
            Overlay::Video(overlay) => {
                assert!(overlay.video_id.is_none());
                assert!(overlay.embed_url().is_none());
            }
            other => panic!("expected video overlay, got {other:?}"),
        }
    }
}
