// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery operations.
//!
//! Measures the performance of:
//! - Video identifier extraction from share links
//! - Carousel navigation across a large collection
//! - Overlay snapshots taken on every render

use criterion::{criterion_group, criterion_main, Criterion};
use raytracer_showcase::application::GalleryController;
use raytracer_showcase::domain::media::{MediaId, MediaItem};
use raytracer_showcase::media::extract_video_id;
use std::hint::black_box;

const LARGE_COLLECTION: u32 = 1_000;

fn large_gallery() -> GalleryController {
    let images = (0..LARGE_COLLECTION)
        .map(|id| {
            MediaItem::image(
                MediaId::new(id),
                format!("Screenshot {id}"),
                "Benchmark frame",
                format!("https://example.com/{id}.png"),
            )
        })
        .collect();
    GalleryController::new(
        MediaItem::video(
            MediaId::new(0),
            "Demo",
            "",
            "https://youtu.be/bKc2I06b_7U?si=C7jhQ9_PC2ws3BKU",
        ),
        images,
    )
}

fn bench_extract_video_id(c: &mut Criterion) {
    let mut group = c.benchmark_group("video_id");

    let links = [
        "https://youtu.be/bKc2I06b_7U?si=C7jhQ9_PC2ws3BKU",
        "https://www.youtube.com/watch?v=bKc2I06b_7U&t=42",
        "https://www.youtube.com/embed/bKc2I06b_7U",
        "https://example.com/not-a-video",
    ];

    group.bench_function("extract", |b| {
        b.iter(|| {
            for link in links {
                black_box(extract_video_id(black_box(link)));
            }
        });
    });

    group.finish();
}

fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    group.bench_function("walk_forward_and_back", |b| {
        let mut gallery = large_gallery();
        b.iter(|| {
            gallery.open_image_at(0);
            while gallery.next_image() {}
            while gallery.previous_image() {}
            black_box(gallery.active_image_index());
        });
    });

    // Opening by item searches the collection by id
    group.bench_function("open_image_last", |b| {
        let mut gallery = large_gallery();
        let last = gallery.images()[gallery.image_count() - 1].clone();
        b.iter(|| {
            gallery.open_image(black_box(&last));
            gallery.close_image();
        });
    });

    group.bench_function("overlay_snapshot", |b| {
        let mut gallery = large_gallery();
        gallery.open_image_at(500);
        b.iter(|| {
            black_box(gallery.overlay());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_extract_video_id, bench_navigate);
criterion_main!(benches);
