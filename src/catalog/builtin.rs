// SPDX-License-Identifier: MPL-2.0
//! Catalog shipped with the showcase.

use super::{Catalog, ImageDescriptor, VideoDescriptor, DEFAULT_VIDEO_ID};

const ASSETS_BASE_URL: &str =
    "https://github.com/Nischaya008/RayTracerNG/raw/main/RayTracerNG_Assets/";

fn screenshot(id: u32, description: &str, file: &str) -> ImageDescriptor {
    ImageDescriptor {
        id,
        title: format!("RayTracerNG Screenshot {id}"),
        description: description.to_string(),
        url: format!("{ASSETS_BASE_URL}{file}"),
    }
}

pub(super) fn raytracer_ng() -> Catalog {
    Catalog {
        video: VideoDescriptor {
            id: DEFAULT_VIDEO_ID,
            title: "RayTracerNG Demo".to_string(),
            description: "Watch the engine in action with dynamic light reflections".to_string(),
            thumbnail: Some(
                "https://img.youtube.com/vi/bKc2I06b_7U/maxresdefault.jpg".to_string(),
            ),
            share_link: "https://youtu.be/bKc2I06b_7U?si=C7jhQ9_PC2ws3BKU".to_string(),
        },
        images: vec![
            screenshot(
                1,
                "Light emission and scene composition",
                "Screenshot%202025-04-12%20175423.png",
            ),
            screenshot(
                2,
                "Light source and first-second reflections on obstacles",
                "Screenshot%202025-04-12%20175501.png",
            ),
            screenshot(
                3,
                "Complex scene with dynamic lighting and reflections",
                "Screenshot%202025-04-12%20175522.png",
            ),
            screenshot(
                4,
                "Single object with light source",
                "Screenshot%202025-04-12%20175551.png",
            ),
        ],
    }
}
