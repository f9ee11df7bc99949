// SPDX-License-Identifier: MPL-2.0
//! Catalog and settings files on disk.

use raytracer_showcase::catalog::{self, Catalog, ImageDescriptor};
use raytracer_showcase::config::{self, Config, ThemeMode, DEFAULT_SCROLL_THRESHOLD_PX};
use raytracer_showcase::error::{CatalogError, Error};
use std::fs;
use tempfile::tempdir;

#[test]
fn catalog_file_replaces_builtin_content() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("nested").join("catalog.toml");

    let mut custom = Catalog::builtin();
    custom.images.truncate(2);
    custom.images[1].title = "Custom shot".to_string();
    catalog::save_to_path(&custom, &path).expect("Failed to write catalog");

    let (loaded, warning) = catalog::load_or_builtin(Some(&path));
    assert!(warning.is_none());
    assert_eq!(loaded.images.len(), 2);
    assert_eq!(loaded.image_items()[1].title(), "Custom shot");
}

#[test]
fn hand_written_catalog_is_accepted() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("catalog.toml");
    fs::write(
        &path,
        r#"
[video]
title = "Demo"
share_link = "https://www.youtube.com/watch?v=bKc2I06b_7U"

[[images]]
id = 10
title = "Only shot"
url = "https://example.com/only.png"
"#,
    )
    .expect("Failed to write catalog");

    let loaded = catalog::load_from_path(&path).expect("catalog should load");
    assert_eq!(loaded.video.id, catalog::DEFAULT_VIDEO_ID);
    assert_eq!(
        loaded.video_thumbnail().as_deref(),
        Some("https://img.youtube.com/vi/bKc2I06b_7U/maxresdefault.jpg")
    );
    assert_eq!(loaded.image_items().len(), 1);
}

#[test]
fn duplicate_image_ids_are_rejected() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("catalog.toml");

    let mut custom = Catalog::builtin();
    let first = custom.images[0].clone();
    custom.images.push(ImageDescriptor {
        title: "Copy".to_string(),
        ..first
    });
    catalog::save_to_path(&custom, &path).expect("Failed to write catalog");

    let err = catalog::load_from_path(&path).expect_err("duplicate ids must fail");
    assert!(matches!(
        err,
        Error::Catalog(CatalogError::DuplicateImageId(_))
    ));

    let (fallback, warning) = catalog::load_or_builtin(Some(&path));
    assert_eq!(fallback, Catalog::builtin());
    assert!(warning.is_some());
}

#[test]
fn settings_round_trip_through_config_dir() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut settings = Config::default();
    settings.general.theme_mode = ThemeMode::Light;
    settings.page.scroll_threshold_px = Some(120.0);
    config::save_with_override(&settings, Some(dir.path().to_path_buf()))
        .expect("Failed to save settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
    assert_eq!(loaded.page.scroll_threshold(), 120.0);
}

#[test]
fn missing_settings_use_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(loaded, Config::default());
    assert_eq!(loaded.page.scroll_threshold(), DEFAULT_SCROLL_THRESHOLD_PX);
}

#[test]
fn invalid_settings_fall_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[general]\ntheme_mode = 3")
        .expect("Failed to write settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert!(warning.is_some());
}
