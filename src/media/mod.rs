// SPDX-License-Identifier: MPL-2.0
//! Media helpers shared by the gallery and the presentation layer.
//!
//! The showcase never decodes media itself: images are referenced by locator
//! and videos are played through the host's embed. This module only turns
//! catalog references into something the presentation layer can use.

pub mod video_id;

pub use video_id::{extract_video_id, VideoId, VIDEO_ID_LEN};
