// SPDX-License-Identifier: MPL-2.0
//! End-to-end gallery behavior through the public API: catalog to controller
//! to overlay.

use raytracer_showcase::application::{GalleryController, Overlay};
use raytracer_showcase::catalog::Catalog;
use raytracer_showcase::domain::media::{MediaId, MediaItem};
use raytracer_showcase::error::GalleryError;
use raytracer_showcase::media::extract_video_id;

fn builtin_gallery() -> GalleryController {
    let catalog = Catalog::builtin();
    GalleryController::new(catalog.video_item(), catalog.image_items())
}

#[test]
fn builtin_video_link_yields_embeddable_id() {
    let gallery = builtin_gallery();
    let id = extract_video_id(gallery.video().source_ref()).expect("builtin link has an id");
    assert_eq!(id.as_str(), "bKc2I06b_7U");
    assert_eq!(id.embed_url(), "https://www.youtube.com/embed/bKc2I06b_7U");
}

#[test]
fn browsing_the_whole_carousel_clamps_at_both_ends() {
    let mut gallery = builtin_gallery();
    let count = gallery.image_count();
    let first = gallery.images()[0].clone();
    gallery.open_image(&first);

    let mut moves = 0;
    while gallery.next_image() {
        moves += 1;
    }
    assert_eq!(moves, count - 1);
    assert_eq!(gallery.active_image(), gallery.images().last());
    assert!(!gallery.next_image());

    while gallery.previous_image() {}
    assert_eq!(gallery.active_image_index(), 0);
    assert!(gallery.navigation_info().at_first);
}

#[test]
fn overlay_tracks_open_modals() {
    let mut gallery = builtin_gallery();
    assert!(gallery.overlay().is_none());

    let video = gallery.video().clone();
    gallery.open_video(&video);
    match gallery.overlay() {
        Overlay::Video(overlay) => {
            assert_eq!(overlay.item, &video);
            assert!(overlay.embed_url().is_some());
        }
        other => panic!("expected video overlay, got {other:?}"),
    }

    let third = gallery.images()[2].clone();
    gallery.open_image(&third);
    match gallery.overlay() {
        Overlay::Image(overlay) => {
            assert_eq!(overlay.index, 2);
            assert_eq!(overlay.item, &third);
            assert_eq!(overlay.navigation.current_index, Some(2));
        }
        other => panic!("expected image overlay, got {other:?}"),
    }

    gallery.close_image();
    assert!(matches!(gallery.overlay(), Overlay::Video(_)));
    gallery.close_video();
    assert!(gallery.overlay().is_none());
}

#[test]
fn unusable_share_link_still_opens_video_modal() {
    let video = MediaItem::video(MediaId::new(1), "Demo", "", "https://example.com/watch");
    let mut gallery = GalleryController::new(video.clone(), Vec::new());
    gallery.open_video(&video);

    match gallery.overlay() {
        Overlay::Video(overlay) => assert!(overlay.embed_url().is_none()),
        other => panic!("expected video overlay, got {other:?}"),
    }
}

#[test]
fn strict_open_rejects_foreign_items() {
    let mut gallery = builtin_gallery();
    let stranger = MediaItem::image(MediaId::new(99), "Elsewhere", "", "https://example.com");

    assert_eq!(
        gallery.try_open_image(&stranger),
        Err(GalleryError::NotInCollection(MediaId::new(99)))
    );
    assert!(gallery.active_image().is_none());

    let last = gallery.images()[3].clone();
    assert_eq!(gallery.try_open_image(&last), Ok(3));
}
